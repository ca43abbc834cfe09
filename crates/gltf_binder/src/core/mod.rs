//! Core binder types shared across modules

pub mod config;

pub use config::{
    AssignmentConfig, BinderConfig, ExportOptions, OutputConfig, SamplerConfig, SpecLayout,
    WrapMode,
};
