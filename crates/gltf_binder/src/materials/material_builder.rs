//! glTF material, texture and image construction
//!
//! Textured materials share the document's single sampler, so every texture
//! built here points at sampler 0. Texture and image lists are densely packed:
//! the n-th textured material gets texture n, which samples image n.

use gltf_json as json;
use json::material::{
    AlphaMode, EmissiveFactor, PbrBaseColorFactor, PbrMetallicRoughness, StrengthFactor,
};
use json::validation::Checked;

use super::material_spec::{MaterialSpec, DEFAULT_BASE_COLOR};

/// Index of the shared sampler every texture uses
pub const SHARED_SAMPLER_INDEX: u32 = 0;

/// Output of [`MaterialBuilder::build`]
#[derive(Debug, Clone, Default)]
pub struct BuiltMaterials {
    /// One material per input spec, in input order
    pub materials: Vec<json::Material>,
    /// One texture per textured spec
    pub textures: Vec<json::Texture>,
    /// One image per textured spec
    pub images: Vec<json::Image>,
}

impl BuiltMaterials {
    /// Whether no materials were built
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// Builds glTF material objects from material specs
pub struct MaterialBuilder;

impl MaterialBuilder {
    /// Build materials, textures and images for an ordered list of specs
    ///
    /// The input is not modified and identical input always produces identical
    /// output, indices included.
    pub fn build(specs: &[MaterialSpec]) -> BuiltMaterials {
        let mut built = BuiltMaterials::default();

        for spec in specs {
            let base_color_texture = spec.texture_uri().map(|uri| {
                let texture_index = Self::index(built.textures.len());
                let image_index = Self::index(built.images.len());
                built.images.push(Self::image(uri));
                built.textures.push(Self::texture(image_index));
                Self::texture_info(texture_index)
            });
            built.materials.push(Self::material(spec, base_color_texture));
        }

        log::debug!(
            "Built {} material(s), {} texture(s), {} image(s)",
            built.materials.len(),
            built.textures.len(),
            built.images.len()
        );
        built
    }

    /// Build a single material
    ///
    /// A textured material leaves `baseColorFactor` at the glTF default so the
    /// texture is not tinted.
    pub fn material(spec: &MaterialSpec, base_color_texture: Option<json::texture::Info>) -> json::Material {
        let base_color_factor = if base_color_texture.is_some() {
            DEFAULT_BASE_COLOR
        } else {
            spec.base_color
        };

        json::Material {
            alpha_cutoff: None,
            alpha_mode: Checked::Valid(AlphaMode::Opaque),
            double_sided: false,
            name: None,
            pbr_metallic_roughness: PbrMetallicRoughness {
                base_color_factor: PbrBaseColorFactor(base_color_factor),
                base_color_texture,
                metallic_factor: StrengthFactor(spec.metallic),
                roughness_factor: StrengthFactor(spec.roughness),
                metallic_roughness_texture: None,
                extensions: None,
                extras: Default::default(),
            },
            normal_texture: None,
            occlusion_texture: None,
            emissive_texture: None,
            emissive_factor: EmissiveFactor(spec.emissive.unwrap_or([0.0; 3])),
            extensions: None,
            extras: Default::default(),
        }
    }

    fn texture(image_index: u32) -> json::Texture {
        json::Texture {
            name: None,
            sampler: Some(json::Index::new(SHARED_SAMPLER_INDEX)),
            source: json::Index::new(image_index),
            extensions: None,
            extras: Default::default(),
        }
    }

    fn image(uri: &str) -> json::Image {
        json::Image {
            name: None,
            buffer_view: None,
            mime_type: None,
            uri: Some(uri.to_string()),
            extensions: None,
            extras: Default::default(),
        }
    }

    fn texture_info(texture_index: u32) -> json::texture::Info {
        json::texture::Info {
            index: json::Index::new(texture_index),
            tex_coord: 0,
            extensions: None,
            extras: Default::default(),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn index(len: usize) -> u32 {
        len as u32
    }
}
