//! Binder error taxonomy

use thiserror::Error;

use crate::converter::ConvertError;
use crate::materials::MaterialSpecError;

/// Errors raised while binding materials or running the conversion pipeline
#[derive(Error, Debug)]
pub enum BinderError {
    /// A required host parameter could not be read
    #[error("Unable to get {0} input")]
    InputRetrieval(&'static str),

    /// A material string could not be parsed
    #[error("Malformed material spec: {0}")]
    MalformedSpec(#[from] MaterialSpecError),

    /// Material index list is neither uniform nor per-mesh
    #[error("Expected 1 or {meshes} material indices, got {indices}")]
    IndexCountMismatch {
        /// Indices supplied
        indices: usize,
        /// Meshes in the document
        meshes: usize,
    },

    /// A material index points past the built materials
    #[error("Material index {index} out of range for {materials} material(s)")]
    MaterialIndexOutOfRange {
        /// Offending index
        index: u32,
        /// Materials built
        materials: usize,
    },

    /// The host supplied a negative material index
    #[error("Negative material index {index} at position {position}")]
    NegativeMaterialIndex {
        /// Position in the index list
        position: usize,
        /// Offending value
        index: i32,
    },

    /// The upstream mesh converter failed
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConvertError),

    /// The output document could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for binder operations
pub type BinderResult<T> = Result<T, BinderError>;
