//! Shared sampler finalization

use gltf_json as json;
use json::validation::Checked;

use crate::core::SamplerConfig;

/// Apply the configured wrap modes to the shared sampler
///
/// The upstream converter normally provides the sampler; one is appended when
/// it is missing so texture references to sampler 0 stay valid.
pub fn finalize_sampler(samplers: &mut Vec<json::texture::Sampler>, config: &SamplerConfig) {
    if samplers.is_empty() {
        log::info!("Document has no sampler, creating the shared sampler");
        samplers.push(json::texture::Sampler::default());
    }

    let shared = &mut samplers[0];
    shared.wrap_s = Checked::Valid(config.wrap_s.into());
    shared.wrap_t = Checked::Valid(config.wrap_t.into());
    log::debug!("Shared sampler wraps S={:?} T={:?}", config.wrap_s, config.wrap_t);
}
