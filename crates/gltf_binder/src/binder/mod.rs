//! Material binding over a converted glTF document
//!
//! [`MaterialBinder`] takes a document whose meshes were produced upstream and
//! adds materials, textures and images built from material specs, points each
//! mesh primitive at its material and configures the shared sampler. The
//! document is only borrowed for the duration of a call.

pub mod assignment;
pub mod sampler;

use gltf_json::Root;

use crate::core::{AssignmentConfig, BinderConfig, SamplerConfig};
use crate::error::{BinderError, BinderResult};
use crate::materials::{MaterialBuilder, MaterialSpec, SpecParser};

pub use assignment::{assign_materials, AssignmentPolicy};
pub use sampler::finalize_sampler;

/// What a binding call changed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BindSummary {
    /// Materials written to the document
    pub materials: usize,
    /// Textures written to the document
    pub textures: usize,
    /// Images written to the document
    pub images: usize,
    /// Meshes whose primitives were pointed at a material
    pub assigned_meshes: usize,
}

/// Binds materials onto glTF documents
#[derive(Debug, Clone, Default)]
pub struct MaterialBinder {
    parser: SpecParser,
    assignment: AssignmentConfig,
    sampler: SamplerConfig,
}

impl MaterialBinder {
    /// Create a binder from configuration
    pub const fn new(config: &BinderConfig) -> Self {
        Self {
            parser: SpecParser::new(config.spec_layout),
            assignment: config.assignment,
            sampler: config.sampler,
        }
    }

    /// Parse legacy material strings with the configured layout
    pub fn parse_specs<S: AsRef<str>>(&self, specs: &[S]) -> BinderResult<Vec<MaterialSpec>> {
        Ok(self.parser.parse_all(specs)?)
    }

    /// Parse material strings, then bind them
    pub fn bind_strings<S: AsRef<str>>(
        &self,
        root: &mut Root,
        material_indices: &[u32],
        specs: &[S],
    ) -> BinderResult<BindSummary> {
        let specs = self.parse_specs(specs)?;
        self.bind(root, material_indices, &specs)
    }

    /// Bind materials onto `root`
    ///
    /// With no specs the document is left untouched. Otherwise the material,
    /// texture and image arrays are replaced (texture and image arrays only
    /// when textures were built), primitives are assigned according to the
    /// [`AssignmentPolicy`] selected from `material_indices`, and the shared
    /// sampler is finalized. Every factor must be finite, and when primitives
    /// keep their converter assignment those indices must also fit the new
    /// material list. All validation happens before the first write, so an
    /// error leaves the document as it was.
    pub fn bind(
        &self,
        root: &mut Root,
        material_indices: &[u32],
        specs: &[MaterialSpec],
    ) -> BinderResult<BindSummary> {
        for (index, spec) in specs.iter().enumerate() {
            spec.validate(index)?;
        }
        let built = MaterialBuilder::build(specs);
        if built.is_empty() {
            log::debug!("No materials supplied, leaving document unchanged");
            return Ok(BindSummary::default());
        }

        let mesh_count = root.meshes.len();
        let policy = AssignmentPolicy::select(
            material_indices,
            mesh_count,
            self.assignment.legacy_face_edge_split,
        )?;
        let resolved = policy.resolve(mesh_count);
        let material_count = built.materials.len();
        let out_of_range = match &resolved {
            Some(resolved) => resolved.iter().copied().find(|&index| index as usize >= material_count),
            None => assignment::existing_indices(&root.meshes)
                .find(|&index| index as usize >= material_count),
        };
        if let Some(out_of_range) = out_of_range {
            return Err(BinderError::MaterialIndexOutOfRange {
                index: out_of_range,
                materials: material_count,
            });
        }

        match policy {
            AssignmentPolicy::FaceEdgeSplit => log::warn!(
                "No material indices, splitting {} meshes into {} faces and {} edges",
                mesh_count,
                assignment::face_count(mesh_count),
                mesh_count - assignment::face_count(mesh_count)
            ),
            AssignmentPolicy::Unchanged => {
                log::warn!("No material indices, keeping converter material assignment");
            }
            _ => log::debug!("Assigning materials with {:?}", policy),
        }

        let summary = BindSummary {
            materials: built.materials.len(),
            textures: built.textures.len(),
            images: built.images.len(),
            assigned_meshes: resolved.as_ref().map_or(0, Vec::len),
        };

        root.materials = built.materials;
        if !built.textures.is_empty() {
            root.textures = built.textures;
        }
        if !built.images.is_empty() {
            root.images = built.images;
        }
        if let Some(resolved) = resolved {
            assignment::apply(&mut root.meshes, &resolved);
        }
        finalize_sampler(&mut root.samplers, &self.sampler);

        log::info!(
            "Bound {} material(s), {} texture(s) onto {} mesh(es)",
            summary.materials,
            summary.textures,
            summary.assigned_meshes
        );
        Ok(summary)
    }
}
