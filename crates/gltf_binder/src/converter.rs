//! Host-facing conversion pipeline
//!
//! The mesh-to-glTF conversion itself belongs to an external library and is
//! reached through [`GltfConverter`]. Host parameters are read through
//! [`ParameterSource`]. [`solve`] ties both together with the material binder:
//! read every input, parse the material strings, convert, bind, serialize. Any
//! failure aborts the run without producing a document.

use gltf_json::Root;

use crate::binder::MaterialBinder;
use crate::core::{BinderConfig, ExportOptions};
use crate::document::write_document;
use crate::error::{BinderError, BinderResult};

/// Errors reported by a mesh converter
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    /// The converter could not produce a document
    #[error("Converter failed: {0}")]
    Failed(String),

    /// The converter produced unreadable JSON
    #[error("Invalid glTF document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

/// External mesh-to-glTF converter
///
/// Implementations return a document with meshes (one primitive each) and a
/// default sampler already present.
pub trait GltfConverter {
    /// Host mesh type
    type Mesh;

    /// Convert meshes into a glTF document
    fn convert(&self, meshes: &[Self::Mesh], options: &ExportOptions) -> Result<Root, ConvertError>;
}

/// Typed parameter access on the host
///
/// Each method returns `None` when the host cannot provide the value.
pub trait ParameterSource {
    /// Host mesh type
    type Mesh;

    /// Meshes to convert
    fn meshes(&self) -> Option<Vec<Self::Mesh>>;

    /// Material index per mesh, or a single index for all meshes
    fn material_indices(&self) -> Option<Vec<i32>>;

    /// Legacy material strings
    fn material_specs(&self) -> Option<Vec<String>>;

    /// Whether to apply Draco compression
    fn use_draco(&self) -> Option<bool>;
}

/// Reject negative host indices
pub fn material_indices(indices: &[i32]) -> BinderResult<Vec<u32>> {
    indices
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            u32::try_from(index).map_err(|_| BinderError::NegativeMaterialIndex { position, index })
        })
        .collect()
}

/// Convert meshes and bind materials, returning glTF JSON text
pub fn convert<C, S>(
    converter: &C,
    meshes: &[C::Mesh],
    material_indices: &[i32],
    material_specs: &[S],
    use_draco: bool,
    config: &BinderConfig,
) -> BinderResult<String>
where
    C: GltfConverter,
    S: AsRef<str>,
{
    let binder = MaterialBinder::new(config);
    let indices = self::material_indices(material_indices)?;
    let specs = binder.parse_specs(material_specs)?;

    let options = config.export.with_draco(use_draco);
    log::debug!("Converting {} mesh(es) with {:?}", meshes.len(), options);
    let mut root = converter.convert(meshes, &options)?;

    binder.bind(&mut root, &indices, &specs)?;
    write_document(&root, config.output.pretty)
}

/// Read every host parameter, then run [`convert`]
pub fn solve<P, C>(source: &P, converter: &C, config: &BinderConfig) -> BinderResult<String>
where
    P: ParameterSource,
    C: GltfConverter<Mesh = P::Mesh>,
{
    let meshes = source.meshes().ok_or(BinderError::InputRetrieval("Meshes"))?;
    let indices = source
        .material_indices()
        .ok_or(BinderError::InputRetrieval("material indices"))?;
    let specs = source
        .material_specs()
        .ok_or(BinderError::InputRetrieval("material specs"))?;
    let use_draco = source.use_draco().ok_or(BinderError::InputRetrieval("Draco"))?;

    convert(converter, &meshes, &indices, &specs, use_draco, config)
}
