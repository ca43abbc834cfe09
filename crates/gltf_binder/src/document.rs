//! glTF JSON document reading and writing

use gltf_json::Root;

use crate::converter::ConvertError;
use crate::error::BinderResult;

/// Parse a glTF JSON document
pub fn read_document(text: &str) -> Result<Root, ConvertError> {
    Ok(serde_json::from_str(text)?)
}

/// Serialize a glTF document to JSON text
pub fn write_document(root: &Root, pretty: bool) -> BinderResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(root)?
    } else {
        serde_json::to_string(root)?
    };
    Ok(text)
}
