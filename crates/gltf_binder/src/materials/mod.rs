//! Material creation subsystem
//!
//! Turns material descriptions (legacy delimited strings or structured records)
//! into glTF materials, textures and images.

pub mod material_spec;
pub mod spec_parser;
pub mod material_builder;

pub use material_spec::{MaterialSpec, MaterialRecord, MaterialLibrary};
pub use spec_parser::{SpecParser, MaterialSpecError};
pub use material_builder::{MaterialBuilder, BuiltMaterials};
