use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use gltf_binder::converter::material_indices;
use gltf_binder::prelude::*;

/// Inputs of a single binding run
#[derive(Debug)]
pub struct BindOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub material_specs: Vec<String>,
    pub material_library: Option<String>,
    pub material_indices: Vec<i32>,
}

/// Load the input document, bind materials and write the result
pub fn bind_document(options: &BindOptions, config: &BinderConfig) -> Result<BindSummary> {
    let text = fs::read_to_string(&options.input)
        .with_context(|| format!("Failed to read {:?}", options.input))?;
    let mut root = read_document(&text)
        .with_context(|| format!("Failed to parse {:?}", options.input))?;

    let binder = MaterialBinder::new(config);
    let mut specs = binder
        .parse_specs(&options.material_specs)
        .context("Invalid --material")?;
    if let Some(path) = &options.material_library {
        let library = MaterialLibrary::load_from_file(path)
            .with_context(|| format!("Failed to load materials {}", path))?;
        specs.extend(library.into_specs());
    }
    let indices = material_indices(&options.material_indices)?;

    let summary = binder
        .bind(&mut root, &indices, &specs)
        .context("Failed to bind materials")?;
    let document = write_document(&root, config.output.pretty)?;

    match &options.output {
        Some(path) => fs::write(path, document)
            .with_context(|| format!("Failed to write {:?}", path))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(summary)
}
