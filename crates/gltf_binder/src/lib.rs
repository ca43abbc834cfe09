//! # glTF Binder
//!
//! Post-processes glTF 2.0 documents produced by an external mesh converter:
//! builds PBR materials, textures and images from material descriptions, binds
//! them to mesh primitives by index and configures the shared texture sampler.
//!
//! ## Features
//!
//! - **Legacy material strings**: `r;g;b;a;metallic;roughness[;texture]`
//! - **Structured materials**: tagged records loaded from TOML or RON
//! - **Assignment policies**: uniform, per-mesh, or the legacy 2:1 face/edge split
//! - **Configurable sampler**: wrap modes per axis
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gltf_binder::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let text = std::fs::read_to_string("scene.gltf")?;
//!     let mut root = read_document(&text)?;
//!
//!     let binder = MaterialBinder::new(&BinderConfig::default());
//!     binder.bind_strings(&mut root, &[0], &["0.8;0.1;0.1;1;0;0.5"])?;
//!
//!     println!("{}", write_document(&root, true)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod core;
pub mod foundation;
pub mod config;
pub mod materials;
pub mod binder;
pub mod converter;
pub mod document;

mod error;

#[cfg(test)]
mod tests;

pub use error::{BinderError, BinderResult};

/// Common imports for binder users
pub mod prelude {
    pub use crate::{
        BinderError, BinderResult,
        binder::{AssignmentPolicy, BindSummary, MaterialBinder},
        config::{Config, ConfigError},
        converter::{convert, solve, ConvertError, GltfConverter, ParameterSource},
        core::{BinderConfig, ExportOptions, SamplerConfig, SpecLayout, WrapMode},
        document::{read_document, write_document},
        foundation::logging,
        materials::{MaterialBuilder, MaterialLibrary, MaterialRecord, MaterialSpec, SpecParser},
    };
}
