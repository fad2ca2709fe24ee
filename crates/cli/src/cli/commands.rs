use clap::{Parser, Subcommand, ValueEnum};
use kubegen_core::properties::parse_property_pair;
use kubegen_core::{BuildStrategy, DeploymentTarget};
use std::path::PathBuf;

/// Resolve the base image for generated application container images
#[derive(Parser, Debug)]
#[command(
    name = "kubegen",
    about = "Resolve the base image for generated application container images",
    version,
    long_about = "kubegen decides which base image an application image is built FROM. \
                  An explicit generator config wins, then project properties, then a default \
                  chosen from the packaging mode (native executable or runnable archive) and \
                  the deployment target."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Resolve the base image and print the resulting image configurations",
        long_about = "Resolves the base image for the application in BUILD_DIR and appends one \
                      image configuration to the existing list.\n\n\
                      Examples:\n  \
                      kubegen resolve target\n  \
                      kubegen resolve target --target openshift --strategy s2i\n  \
                      kubegen resolve -D kubegen.generator.quarkus.nativeImage=true\n  \
                      kubegen resolve --config generators.yaml --format json"
    )]
    Resolve(ResolveArgs),

    #[command(about = "Show the effective configuration")]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    #[arg(
        value_name = "BUILD_DIR",
        help = "Build output directory (defaults to ./target)"
    )]
    pub build_dir: Option<PathBuf>,

    #[arg(
        short = 't',
        long,
        value_parser = parse_target,
        help = "Deployment target (openshift|kubernetes), overrides KUBEGEN_TARGET"
    )]
    pub target: Option<DeploymentTarget>,

    #[arg(
        short = 's',
        long,
        value_parser = parse_strategy,
        help = "Build strategy (s2i|docker|jib), overrides KUBEGEN_STRATEGY"
    )]
    pub strategy: Option<BuildStrategy>,

    #[arg(long, value_name = "VERSION", help = "Project version")]
    pub project_version: Option<String>,

    #[arg(
        short = 'a',
        long,
        value_name = "NAME",
        help = "Artifact id; the runner is looked up as <NAME>-runner[.jar]. \
                Required when BUILD_DIR holds several runners"
    )]
    pub artifact_id: Option<String>,

    #[arg(long, help = "Property namespace, overrides KUBEGEN_NAMESPACE")]
    pub namespace: Option<String>,

    #[arg(
        short = 'D',
        value_name = "KEY=VALUE",
        value_parser = parse_property_pair,
        help = "Project property (repeatable)"
    )]
    pub properties: Vec<(String, String)>,

    #[arg(long, value_name = "FILE", help = "Project properties file")]
    pub properties_file: Option<PathBuf>,

    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "YAML generator config, keyed by generator name"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "YAML list of existing image configurations to append to"
    )]
    pub existing: Option<PathBuf>,

    #[arg(long, help = "Mark the generated image as not coming from the primary build")]
    pub secondary: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "yaml",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_target(s: &str) -> Result<DeploymentTarget, String> {
    s.parse()
}

fn parse_strategy(s: &str) -> Result<BuildStrategy, String> {
    s.parse()
}
