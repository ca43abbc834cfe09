//! # Binder Configuration
//!
//! All tunables for a binding run live in [`BinderConfig`], which can be loaded
//! from TOML or RON through the [`Config`] trait. Every field has a default, so
//! a partial file (or no file at all) is valid.
//!
//! ```toml
//! log_level = "debug"
//! spec_layout = "base-color"
//!
//! [assignment]
//! legacy_face_edge_split = false
//!
//! [sampler]
//! wrap_s = "mirrored-repeat"
//! wrap_t = "repeat"
//! ```

use gltf_json::texture::WrappingMode;
use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};
use crate::foundation::logging;

/// Field layout of the legacy semicolon-delimited material strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecLayout {
    /// `r;g;b;a;metallic;roughness[;texture]`
    #[default]
    BaseColor,
    /// `r;g;b;er;eg;eb;metallic;roughness[;texture]`
    Emissive,
}

impl SpecLayout {
    /// Number of leading tokens that must parse as numbers
    pub const fn numeric_fields(self) -> usize {
        match self {
            Self::BaseColor => 6,
            Self::Emissive => 8,
        }
    }
}

/// Texture wrap mode applied to the shared sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WrapMode {
    /// Tile the texture
    Repeat,
    /// Tile the texture, flipping every other repetition
    #[default]
    MirroredRepeat,
    /// Clamp texture coordinates to the edge texels
    ClampToEdge,
}

impl From<WrapMode> for WrappingMode {
    fn from(mode: WrapMode) -> Self {
        match mode {
            WrapMode::Repeat => Self::Repeat,
            WrapMode::MirroredRepeat => Self::MirroredRepeat,
            WrapMode::ClampToEdge => Self::ClampToEdge,
        }
    }
}

/// Shared sampler settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Horizontal wrap mode
    pub wrap_s: WrapMode,
    /// Vertical wrap mode
    pub wrap_t: WrapMode,
}

impl SamplerConfig {
    /// Use the same wrap mode on both axes
    pub const fn uniform(mode: WrapMode) -> Self {
        Self { wrap_s: mode, wrap_t: mode }
    }
}

/// Mesh-to-material assignment settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Split meshes 2:1 into face and edge groups when no indices are given
    pub legacy_face_edge_split: bool,
}

/// Options handed to the upstream mesh converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Compress geometry with Draco
    pub use_draco_compression: bool,
    /// Fall back to object display colors for meshes without a material
    pub use_display_color_for_unset_materials: bool,
    /// Colors are in linear space rather than sRGB
    pub linear_workflow: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            use_draco_compression: false,
            // Disabling this breaks server-side conversion
            use_display_color_for_unset_materials: true,
            linear_workflow: true,
        }
    }
}

impl ExportOptions {
    /// Set Draco compression
    pub const fn with_draco(mut self, enabled: bool) -> Self {
        self.use_draco_compression = enabled;
        self
    }
}

/// Output document settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent the serialized JSON
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Top-level binder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Log level (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Layout of legacy material strings
    pub spec_layout: SpecLayout,
    /// Assignment settings
    pub assignment: AssignmentConfig,
    /// Shared sampler settings
    pub sampler: SamplerConfig,
    /// Converter options
    pub export: ExportOptions,
    /// Output settings
    pub output: OutputConfig,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            spec_layout: SpecLayout::default(),
            assignment: AssignmentConfig::default(),
            sampler: SamplerConfig::default(),
            export: ExportOptions::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config for BinderConfig {}

impl BinderConfig {
    /// Set the legacy string layout
    pub const fn with_spec_layout(mut self, layout: SpecLayout) -> Self {
        self.spec_layout = layout;
        self
    }

    /// Enable or disable the legacy face/edge split
    pub const fn with_legacy_face_edge_split(mut self, enabled: bool) -> Self {
        self.assignment.legacy_face_edge_split = enabled;
        self
    }

    /// Set sampler wrap modes
    pub const fn with_sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }

    /// Set output formatting
    pub const fn with_pretty_output(mut self, pretty: bool) -> Self {
        self.output.pretty = pretty;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !logging::is_known_level(&self.log_level) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BinderConfig::default();
        assert_eq!(config.spec_layout, SpecLayout::BaseColor);
        assert_eq!(config.sampler, SamplerConfig::uniform(WrapMode::MirroredRepeat));
        assert!(!config.assignment.legacy_face_edge_split);
        assert!(config.export.use_display_color_for_unset_materials);
        assert!(!config.export.use_draco_compression);
        assert!(config.output.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let text = r#"
log_level = "debug"
spec_layout = "emissive"

[sampler]
wrap_t = "clamp-to-edge"
"#;
        let config = BinderConfig::load_from_str(text, "binder.toml").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.spec_layout, SpecLayout::Emissive);
        assert_eq!(config.sampler.wrap_s, WrapMode::MirroredRepeat);
        assert_eq!(config.sampler.wrap_t, WrapMode::ClampToEdge);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_ron() {
        let text = "(assignment: (legacy_face_edge_split: true), output: (pretty: false))";
        let config = BinderConfig::load_from_str(text, "binder.ron").unwrap();
        assert!(config.assignment.legacy_face_edge_split);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = std::env::temp_dir().join(format!("gltf_binder_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = BinderConfig::default()
            .with_spec_layout(SpecLayout::Emissive)
            .with_legacy_face_edge_split(true)
            .with_sampler(SamplerConfig::uniform(WrapMode::ClampToEdge))
            .with_pretty_output(false);

        for name in ["binder.toml", "binder.ron"] {
            let path = dir.join(name);
            let path = path.to_str().unwrap();
            config.save_to_file(path).unwrap();
            assert_eq!(BinderConfig::load_from_file(path).unwrap(), config, "{}", name);
        }

        let yaml = dir.join("binder.yaml");
        let result = config.save_to_file(yaml.to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
        assert!(!yaml.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unsupported_format() {
        let result = BinderConfig::load_from_str("{}", "binder.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_log_level() {
        let config = BinderConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_wrap_mode_conversion() {
        assert_eq!(WrappingMode::from(WrapMode::Repeat), WrappingMode::Repeat);
        assert_eq!(WrappingMode::from(WrapMode::MirroredRepeat), WrappingMode::MirroredRepeat);
        assert_eq!(WrappingMode::from(WrapMode::ClampToEdge), WrappingMode::ClampToEdge);
    }
}
