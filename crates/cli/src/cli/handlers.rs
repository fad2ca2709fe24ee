use super::commands::{ConfigArgs, ResolveArgs};
use super::output::OutputFormatter;
use anyhow::{Context, Result};
use kubegen_core::output::schema::images_from_yaml;
use kubegen_core::{parse_properties, ImageConfiguration, KubegenConfig, RealFileSystem};
use kubegen_generator::{
    BuildContext, Generator, ProcessorConfig, PropertiesImageLookup, QuarkusGenerator,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

const DEFAULT_BUILD_DIR: &str = "target";

pub fn handle_resolve(args: &ResolveArgs) -> i32 {
    match run_resolve(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("Resolution failed: {:#}", e);
            1
        }
    }
}

pub fn handle_config(args: &ConfigArgs) -> i32 {
    match run_config(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            1
        }
    }
}

fn run_config(args: &ConfigArgs) -> Result<()> {
    let config = KubegenConfig::from_env().context("Invalid KUBEGEN_* environment")?;
    let out = OutputFormatter::new(args.format.into()).format_config(&config)?;
    println!("{}", out.trim_end());
    Ok(())
}

fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let config = effective_config(args)?;
    debug!("Effective configuration: {:?}", config);

    let context = build_context(args, &config)?;
    let existing = load_existing(args.existing.as_deref())?;

    let lookup = PropertiesImageLookup::from_config(&config)?;
    let generator = QuarkusGenerator::new(Arc::new(RealFileSystem::new()), Arc::new(lookup))
        .with_namespace(config.namespace.clone());

    info!(
        build_dir = %context.build_dir.display(),
        target = %context.target,
        strategy = %context.strategy,
        "Resolving base image"
    );
    let images = generator.customize(&context, existing, !args.secondary)?;

    let rendered = OutputFormatter::new(args.format.into()).format_images(&images)?;
    match args.output {
        Some(ref path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!("Wrote {} image configuration(s) to {}", images.len(), path.display());
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}

/// Environment configuration with command-line overrides applied
pub fn effective_config(args: &ResolveArgs) -> Result<KubegenConfig> {
    let mut config = KubegenConfig::from_env().context("Invalid KUBEGEN_* environment")?;
    if let Some(target) = args.target {
        config.target = target;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(ref namespace) = args.namespace {
        config.namespace = namespace.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Properties file entries are overridden by `-D` pairs
pub fn build_context(args: &ResolveArgs, config: &KubegenConfig) -> Result<BuildContext> {
    let build_dir = args
        .build_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR));

    let mut context = BuildContext::new(args.project_version.clone().unwrap_or_default(), build_dir)
        .with_target(config.target)
        .with_strategy(config.strategy);

    if let Some(ref id) = args.artifact_id {
        context = context.with_artifact_id(id.clone());
    }

    if let Some(ref path) = args.properties_file {
        let content = read(path)?;
        context = context.with_properties(parse_properties(&content));
    }
    for (key, value) in &args.properties {
        context = context.with_property(key, value);
    }

    if let Some(ref path) = args.config {
        let content = read(path)?;
        let generators = ProcessorConfig::from_yaml(&content)
            .with_context(|| format!("Invalid generator config in {}", path.display()))?;
        context = context.with_config(generators);
    }

    Ok(context)
}

fn load_existing(path: Option<&Path>) -> Result<Vec<ImageConfiguration>> {
    match path {
        Some(path) => {
            let images = images_from_yaml(&read(path)?)
                .with_context(|| format!("Invalid image list in {}", path.display()))?;
            debug!("Loaded {} existing image configuration(s)", images.len());
            Ok(images)
        }
        None => Ok(Vec::new()),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
