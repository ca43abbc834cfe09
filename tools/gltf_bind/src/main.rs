use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

mod run;
use run::{bind_document, BindOptions};

use gltf_binder::prelude::*;

fn cli() -> Command {
    Command::new("gltf_bind")
        .about("Binds materials onto a glTF document produced by a mesh converter")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("glTF JSON document to post-process")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (stdout when omitted)"),
        )
        .arg(
            Arg::new("material")
                .short('m')
                .long("material")
                .value_name("SPEC")
                .help("Material string r;g;b;a;metallic;roughness[;texture], repeatable")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("materials")
                .long("materials")
                .value_name("FILE")
                .help("Structured material records (.toml or .ron), appended after --material"),
        )
        .arg(
            Arg::new("index")
                .short('x')
                .long("index")
                .value_name("N[,N...]")
                .help("Material index for all meshes, or one per mesh")
                .value_parser(clap::value_parser!(i32))
                .value_delimiter(',')
                .allow_negative_numbers(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Binder configuration (.toml or .ron)"),
        )
        .arg(
            Arg::new("legacy-split")
                .long("legacy-split")
                .help("Without indices, give the first 2/3 of the meshes material 0 and the rest material 1")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Write compact JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level override (off, error, warn, info, debug, trace)"),
        )
}

/// Load the configuration file, if any, and apply command line overrides
fn resolve_config(matches: &ArgMatches) -> Result<BinderConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => BinderConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => BinderConfig::default(),
    };
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.log_level = level.clone();
    }
    if matches.get_flag("legacy-split") {
        config.assignment.legacy_face_edge_split = true;
    }
    if matches.get_flag("compact") {
        config.output.pretty = false;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn bind_options(matches: &ArgMatches) -> Result<BindOptions> {
    Ok(BindOptions {
        input: PathBuf::from(
            matches
                .get_one::<String>("input")
                .context("Missing --input")?,
        ),
        output: matches.get_one::<String>("output").map(PathBuf::from),
        material_specs: matches
            .get_many::<String>("material")
            .map(|specs| specs.cloned().collect())
            .unwrap_or_default(),
        material_library: matches.get_one::<String>("materials").cloned(),
        material_indices: matches
            .get_many::<i32>("index")
            .map(|indices| indices.copied().collect())
            .unwrap_or_default(),
    })
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let config = resolve_config(&matches)?;
    logging::init_with_level(&config.log_level);
    let options = bind_options(&matches)?;

    let summary = bind_document(&options, &config)?;
    log::info!(
        "Wrote {} material(s), {} texture(s), {} image(s)",
        summary.materials,
        summary.textures,
        summary.images
    );
    Ok(())
}
