//! Material descriptions consumed by the builder
//!
//! [`MaterialSpec`] is the single internal model. It can be produced either by
//! parsing a legacy delimited string (see [`super::SpecParser`]) or from a
//! [`MaterialRecord`], the structured form loaded from TOML/RON.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use super::spec_parser::MaterialSpecError;

/// Opaque white, the glTF default base color
pub const DEFAULT_BASE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One logical material, positioned by its index in the input list
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSpec {
    /// Base color RGBA in 0-1
    pub base_color: [f32; 4],
    /// Metallic factor
    pub metallic: f32,
    /// Roughness factor
    pub roughness: f32,
    /// Emissive RGB, if the material glows
    pub emissive: Option<[f32; 3]>,
    /// Base color texture URI, passed through verbatim
    pub texture: Option<String>,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_COLOR,
            metallic: 1.0,
            roughness: 1.0,
            emissive: None,
            texture: None,
        }
    }
}

impl MaterialSpec {
    /// Create a flat PBR material
    pub fn flat(base_color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            base_color,
            metallic,
            roughness,
            ..Default::default()
        }
    }

    /// Attach a base color texture; an empty URI clears it
    pub fn with_texture(mut self, uri: impl Into<String>) -> Self {
        let uri = uri.into();
        self.texture = if uri.is_empty() { None } else { Some(uri) };
        self
    }

    /// Set the emissive color
    pub fn with_emissive(mut self, emissive: [f32; 3]) -> Self {
        self.emissive = Some(emissive);
        self
    }

    /// The texture URI, if one is declared
    pub fn texture_uri(&self) -> Option<&str> {
        self.texture.as_deref().filter(|uri| !uri.is_empty())
    }

    /// Whether the material samples a base color texture
    pub fn is_textured(&self) -> bool {
        self.texture_uri().is_some()
    }

    /// Reject factors glTF JSON cannot carry
    ///
    /// Fields are numbered base color 0-3, metallic 4, roughness 5 and
    /// emissive 6-8. `index` is the spec's position in its input list.
    pub fn validate(&self, index: usize) -> Result<(), MaterialSpecError> {
        let emissive = self.emissive.unwrap_or_default();
        let factors = self
            .base_color
            .iter()
            .chain([&self.metallic, &self.roughness])
            .chain(emissive.iter());

        let result = match factors.enumerate().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(MaterialSpecError::InvalidNumber {
                index,
                field,
                token: value.to_string(),
            }),
            None => Ok(()),
        };
        result
    }
}

/// Structured material input, tagged by `kind`
///
/// ```toml
/// [[materials]]
/// kind = "pbr-flat"
/// base_color = [0.8, 0.1, 0.1, 1.0]
/// metallic = 0.0
/// roughness = 0.6
///
/// [[materials]]
/// kind = "pbr+texture"
/// texture = "textures/brick.png"
/// metallic = 0.0
/// roughness = 0.9
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MaterialRecord {
    /// Solid-color PBR material
    #[serde(rename = "pbr-flat")]
    PbrFlat {
        /// Base color RGBA
        base_color: [f32; 4],
        /// Metallic factor
        metallic: f32,
        /// Roughness factor
        roughness: f32,
    },
    /// PBR material sampling a base color texture
    #[serde(rename = "pbr+texture")]
    PbrTexture {
        /// Texture URI
        texture: String,
        /// Metallic factor
        metallic: f32,
        /// Roughness factor
        roughness: f32,
    },
    /// PBR material with an emissive color
    #[serde(rename = "emissive")]
    Emissive {
        /// Base color RGBA
        #[serde(default = "default_base_color")]
        base_color: [f32; 4],
        /// Emissive RGB
        emissive: [f32; 3],
        /// Metallic factor
        metallic: f32,
        /// Roughness factor
        roughness: f32,
        /// Optional texture URI
        #[serde(default)]
        texture: Option<String>,
    },
}

const fn default_base_color() -> [f32; 4] {
    DEFAULT_BASE_COLOR
}

impl From<MaterialRecord> for MaterialSpec {
    fn from(record: MaterialRecord) -> Self {
        match record {
            MaterialRecord::PbrFlat { base_color, metallic, roughness } => {
                Self::flat(base_color, metallic, roughness)
            }
            MaterialRecord::PbrTexture { texture, metallic, roughness } => {
                Self::flat(DEFAULT_BASE_COLOR, metallic, roughness).with_texture(texture)
            }
            MaterialRecord::Emissive { base_color, emissive, metallic, roughness, texture } => {
                let spec = Self::flat(base_color, metallic, roughness).with_emissive(emissive);
                match texture {
                    Some(uri) => spec.with_texture(uri),
                    None => spec,
                }
            }
        }
    }
}

/// A file of structured material records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialLibrary {
    /// Records in index order
    #[serde(default)]
    pub materials: Vec<MaterialRecord>,
}

impl Config for MaterialLibrary {}

impl MaterialLibrary {
    /// Convert every record into a spec, preserving order
    pub fn into_specs(self) -> Vec<MaterialSpec> {
        self.materials.into_iter().map(MaterialSpec::from).collect()
    }
}
