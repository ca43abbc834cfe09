//! Pipeline tests with a stand-in converter and host
//!
//! The fake converter emits one single-primitive mesh per input mesh plus a
//! default sampler, mirroring what the upstream exporter produces.

use std::cell::Cell;

use gltf_json::texture::WrappingMode;
use gltf_json::validation::Checked;
use gltf_json::Root;

use crate::converter::{convert, solve, ConvertError, GltfConverter, ParameterSource};
use crate::core::{BinderConfig, ExportOptions};
use crate::document::read_document;
use crate::error::BinderError;

#[cfg(test)]
mod tests {
    use super::*;

    /// Stand-in for the external converter; meshes are just names
    #[derive(Default)]
    struct FakeConverter {
        calls: Cell<usize>,
        last_draco: Cell<Option<bool>>,
    }

    impl GltfConverter for FakeConverter {
        type Mesh = &'static str;

        fn convert(&self, meshes: &[Self::Mesh], options: &ExportOptions) -> Result<Root, ConvertError> {
            self.calls.set(self.calls.get() + 1);
            self.last_draco.set(Some(options.use_draco_compression));

            let meshes: Vec<String> = meshes
                .iter()
                .map(|name| format!(r#"{{"name":"{}","primitives":[{{"attributes":{{"POSITION":0}}}}]}}"#, name))
                .collect();
            let text = format!(
                r#"{{"asset":{{"version":"2.0"}},"meshes":[{}],"samplers":[{{}}]}}"#,
                meshes.join(",")
            );
            read_document(&text)
        }
    }

    struct FailingConverter;

    impl GltfConverter for FailingConverter {
        type Mesh = &'static str;

        fn convert(&self, _meshes: &[Self::Mesh], _options: &ExportOptions) -> Result<Root, ConvertError> {
            Err(ConvertError::Failed("headless document unavailable".to_string()))
        }
    }

    /// Host parameters; `None` fields simulate unreadable inputs
    struct FakeHost {
        meshes: Option<Vec<&'static str>>,
        indices: Option<Vec<i32>>,
        specs: Option<Vec<String>>,
        draco: Option<bool>,
    }

    impl FakeHost {
        fn new(meshes: &[&'static str], indices: &[i32], specs: &[&str]) -> Self {
            Self {
                meshes: Some(meshes.to_vec()),
                indices: Some(indices.to_vec()),
                specs: Some(specs.iter().map(ToString::to_string).collect()),
                draco: Some(false),
            }
        }
    }

    impl ParameterSource for FakeHost {
        type Mesh = &'static str;

        fn meshes(&self) -> Option<Vec<Self::Mesh>> {
            self.meshes.clone()
        }

        fn material_indices(&self) -> Option<Vec<i32>> {
            self.indices.clone()
        }

        fn material_specs(&self) -> Option<Vec<String>> {
            self.specs.clone()
        }

        fn use_draco(&self) -> Option<bool> {
            self.draco
        }
    }

    fn primitive_materials(root: &Root) -> Vec<Option<usize>> {
        root.meshes
            .iter()
            .map(|m| m.primitives[0].material.map(|i| i.value()))
            .collect()
    }

    #[test]
    fn test_full_pipeline() {
        let host = FakeHost::new(
            &["wall", "roof", "trim"],
            &[0, 0, 1],
            &["0.9;0.9;0.9;1;0;0.8", "1;1;1;1;0.2;0.4;textures/trim.png"],
        );
        let converter = FakeConverter::default();

        let text = solve(&host, &converter, &BinderConfig::default()).unwrap();
        let root = read_document(&text).unwrap();

        assert_eq!(converter.calls.get(), 1);
        assert_eq!(root.materials.len(), 2);
        assert_eq!(root.textures.len(), 1);
        assert_eq!(root.images[0].uri.as_deref(), Some("textures/trim.png"));
        assert_eq!(primitive_materials(&root), vec![Some(0), Some(0), Some(1)]);
        assert!(matches!(root.samplers[0].wrap_s, Checked::Valid(WrappingMode::MirroredRepeat)));
        assert!(matches!(root.samplers[0].wrap_t, Checked::Valid(WrappingMode::MirroredRepeat)));
    }

    #[test]
    fn test_default_parameters_produce_plain_document() {
        // Host defaults: index list [0] and a single empty spec string
        let host = FakeHost::new(&["a", "b"], &[0], &[""]);
        let text = solve(&host, &FakeConverter::default(), &BinderConfig::default()).unwrap();

        assert!(!text.contains("\"materials\""));
        assert!(!text.contains("\"textures\""));
        assert!(!text.contains("\"images\""));

        // 33648 is MIRRORED_REPEAT
        assert!(!text.contains("33648"));

        let root = read_document(&text).unwrap();
        assert_eq!(primitive_materials(&root), vec![None, None]);
    }

    #[test]
    fn test_malformed_spec_aborts_before_conversion() {
        let host = FakeHost::new(&["a"], &[0], &["1.0;2.0;abc;1;0.5;0.5"]);
        let converter = FakeConverter::default();
        let err = solve(&host, &converter, &BinderConfig::default()).unwrap_err();

        assert!(matches!(err, BinderError::MalformedSpec(_)));
        assert_eq!(converter.calls.get(), 0);
    }

    #[test]
    fn test_missing_input_aborts() {
        let converter = FakeConverter::default();

        let mut host = FakeHost::new(&["a"], &[0], &[""]);
        host.meshes = None;
        let err = solve(&host, &converter, &BinderConfig::default()).unwrap_err();
        assert!(matches!(err, BinderError::InputRetrieval("Meshes")));

        let mut host = FakeHost::new(&["a"], &[0], &[""]);
        host.draco = None;
        let err = solve(&host, &converter, &BinderConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Unable to get Draco input");

        assert_eq!(converter.calls.get(), 0);
    }

    #[test]
    fn test_negative_index_aborts() {
        let host = FakeHost::new(&["a"], &[-2], &["1;1;1;1;0;0"]);
        let err = solve(&host, &FakeConverter::default(), &BinderConfig::default()).unwrap_err();
        assert!(matches!(err, BinderError::NegativeMaterialIndex { position: 0, index: -2 }));
    }

    #[test]
    fn test_index_count_mismatch() {
        let host = FakeHost::new(&["a", "b", "c"], &[0, 1], &["1;1;1;1;0;0", "0;0;0;1;0;0"]);
        let err = solve(&host, &FakeConverter::default(), &BinderConfig::default()).unwrap_err();
        assert!(matches!(err, BinderError::IndexCountMismatch { indices: 2, meshes: 3 }));
    }

    #[test]
    fn test_converter_failure() {
        let err = convert(&FailingConverter, &["a"], &[0], &["1;1;1;1;0;0"], false, &BinderConfig::default())
            .unwrap_err();
        assert!(matches!(err, BinderError::Conversion(ConvertError::Failed(_))));
    }

    #[test]
    fn test_draco_flag_forwarded() {
        let converter = FakeConverter::default();
        convert(&converter, &["a"], &[0], &[""], true, &BinderConfig::default()).unwrap();
        assert_eq!(converter.last_draco.get(), Some(true));
    }

    #[test]
    fn test_compact_output() {
        let config = BinderConfig::default().with_pretty_output(false);
        let text = convert(&FakeConverter::default(), &["a"], &[0], &["1;1;1;1;0;0"], false, &config).unwrap();
        assert!(!text.contains('\n'));
    }
}
