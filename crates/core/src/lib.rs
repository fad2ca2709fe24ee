pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod platform;
pub mod properties;

pub use config::{ConfigError, KubegenConfig};
pub use error::GeneratorError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use output::schema::{BuildConfiguration, FromExt, ImageConfiguration};
pub use platform::{BuildStrategy, DeploymentTarget, PackagingMode};
pub use properties::{parse_properties, Properties};
