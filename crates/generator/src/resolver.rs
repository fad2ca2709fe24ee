//! Picks the base image: override config, then project property, then catalog default

use crate::catalog::DefaultImageCatalog;
use crate::context::{ConfigSource, GeneratorConfig};
use crate::native::NativeModeResolver;
use kubegen_core::{FileSystem, GeneratorError, PackagingMode};
use std::fmt;
use tracing::debug;

pub const FROM_KEY: &str = "from";

/// Where the resolved image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Config,
    Property,
    Catalog(PackagingMode),
}

impl From<ConfigSource> for ImageSource {
    fn from(source: ConfigSource) -> Self {
        match source {
            ConfigSource::Config => ImageSource::Config,
            ConfigSource::Property => ImageSource::Property,
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Config => write!(f, "config"),
            ImageSource::Property => write!(f, "property"),
            ImageSource::Catalog(mode) => write!(f, "catalog ({})", mode),
        }
    }
}

/// The image reference, passed through opaquely
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBaseImage {
    pub reference: String,
    pub source: ImageSource,
}

impl ResolvedBaseImage {
    pub fn as_str(&self) -> &str {
        &self.reference
    }
}

impl fmt::Display for ResolvedBaseImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference)
    }
}

pub struct BaseImageResolver<'a> {
    fs: &'a dyn FileSystem,
    catalog: &'a DefaultImageCatalog,
}

impl<'a> BaseImageResolver<'a> {
    pub fn new(fs: &'a dyn FileSystem, catalog: &'a DefaultImageCatalog) -> Self {
        Self { fs, catalog }
    }

    pub fn resolve(&self, config: &GeneratorConfig<'_>) -> Result<ResolvedBaseImage, GeneratorError> {
        // explicit values are never trimmed or validated
        if let Some(explicit) = config.get(FROM_KEY) {
            let resolved = ResolvedBaseImage {
                reference: explicit.value.to_string(),
                source: explicit.source.into(),
            };
            debug!(
                generator = config.generator(),
                source = %resolved.source,
                image = %resolved.reference,
                "Using configured base image"
            );
            return Ok(resolved);
        }

        let mode = NativeModeResolver::new(self.fs).resolve(config)?;
        let reference = self.catalog.lookup(mode, config.context().target)?;
        debug!(
            generator = config.generator(),
            %mode,
            target = %config.context().target,
            image = %reference,
            "Using default base image"
        );

        Ok(ResolvedBaseImage {
            reference,
            source: ImageSource::Catalog(mode),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        MockDefaultImageLookup, NATIVE_MINIMAL_IMAGE, NATIVE_S2I_IMAGE, RUNTIME_DOCKER_KEY,
        RUNTIME_S2I_KEY,
    };
    use crate::context::{BuildContext, ProcessorConfig};
    use kubegen_core::{DeploymentTarget, MockFileSystem};
    use std::sync::Arc;
    use yare::parameterized;

    fn catalog() -> DefaultImageCatalog {
        let mut lookup = MockDefaultImageLookup::new();
        lookup.expect_image_name().returning(|key| match key {
            RUNTIME_S2I_KEY => Some("quarkus/s2i".to_string()),
            RUNTIME_DOCKER_KEY => Some("quarkus/docker".to_string()),
            _ => None,
        });
        DefaultImageCatalog::new("quarkus", Arc::new(lookup))
    }

    fn jar_on_disk() -> MockFileSystem {
        let fs = MockFileSystem::new();
        fs.add_file("target/sample-runner.jar");
        fs
    }

    fn base_context(target: DeploymentTarget) -> BuildContext {
        BuildContext::new("0.0.1-SNAPSHOT", "/mock/target").with_target(target)
    }

    fn resolve(fs: &MockFileSystem, ctx: &BuildContext) -> ResolvedBaseImage {
        let catalog = catalog();
        let config = GeneratorConfig::new(ctx, "quarkus", "kubegen");
        BaseImageResolver::new(fs, &catalog).resolve(&config).unwrap()
    }

    #[parameterized(
        runtime_openshift = { false, DeploymentTarget::OpenShift },
        runtime_kubernetes = { false, DeploymentTarget::Kubernetes },
        native_openshift = { true, DeploymentTarget::OpenShift },
        native_kubernetes = { true, DeploymentTarget::Kubernetes },
    )]
    fn test_override_config_wins_everywhere(native: bool, target: DeploymentTarget) {
        let ctx = base_context(target)
            .with_property(
                "kubegen.generator.quarkus.nativeImage",
                &native.to_string(),
            )
            .with_property("kubegen.generator.quarkus.from", "fedora:latest")
            .with_config(ProcessorConfig::new().with("quarkus", "from", "java:latest"));

        let resolved = resolve(&jar_on_disk(), &ctx);
        assert_eq!(resolved.as_str(), "java:latest");
        assert_eq!(resolved.source, ImageSource::Config);
    }

    #[parameterized(
        runtime_openshift = { false, DeploymentTarget::OpenShift },
        native_kubernetes = { true, DeploymentTarget::Kubernetes },
    )]
    fn test_property_wins_over_catalog(native: bool, target: DeploymentTarget) {
        let ctx = base_context(target)
            .with_property(
                "kubegen.generator.quarkus.nativeImage",
                &native.to_string(),
            )
            .with_property("kubegen.generator.quarkus.from", "java:latest");

        let resolved = resolve(&jar_on_disk(), &ctx);
        assert_eq!(resolved.as_str(), "java:latest");
        assert_eq!(resolved.source, ImageSource::Property);
    }

    #[test]
    fn test_override_passes_through_unmodified() {
        let ctx = base_context(DeploymentTarget::Kubernetes)
            .with_config(ProcessorConfig::new().with("quarkus", "from", "  not a/valid ref  "));

        let resolved = resolve(&MockFileSystem::new(), &ctx);
        assert_eq!(resolved.as_str(), "  not a/valid ref  ");
    }

    #[test]
    fn test_override_skips_artifact_probe() {
        // nothing on disk: would fail if the probe ran
        let ctx = base_context(DeploymentTarget::OpenShift)
            .with_property("kubegen.generator.quarkus.from", "java:latest");

        let resolved = resolve(&MockFileSystem::new(), &ctx);
        assert_eq!(resolved.as_str(), "java:latest");
    }

    #[parameterized(
        runtime_openshift = { None, DeploymentTarget::OpenShift, "quarkus/s2i" },
        runtime_kubernetes = { None, DeploymentTarget::Kubernetes, "quarkus/docker" },
        native_openshift = { Some("true"), DeploymentTarget::OpenShift, NATIVE_S2I_IMAGE },
        native_kubernetes = { Some("true"), DeploymentTarget::Kubernetes, NATIVE_MINIMAL_IMAGE },
    )]
    fn test_catalog_defaults(native: Option<&str>, target: DeploymentTarget, expected: &str) {
        let mut ctx = base_context(target);
        if let Some(flag) = native {
            ctx = ctx.with_property("kubegen.generator.quarkus.nativeImage", flag);
        }

        let resolved = resolve(&jar_on_disk(), &ctx);
        assert_eq!(resolved.as_str(), expected);
        assert!(matches!(resolved.source, ImageSource::Catalog(_)));
    }

    #[test]
    fn test_missing_artifact_propagates() {
        let ctx = base_context(DeploymentTarget::Kubernetes);
        let catalog = catalog();
        let fs = MockFileSystem::new();
        let config = GeneratorConfig::new(&ctx, "quarkus", "kubegen");

        let err = BaseImageResolver::new(&fs, &catalog)
            .resolve(&config)
            .unwrap_err();
        assert!(matches!(err, GeneratorError::ArtifactNotFound { .. }));
    }

    #[test]
    fn test_image_source_display() {
        assert_eq!(ImageSource::Config.to_string(), "config");
        assert_eq!(
            ImageSource::Catalog(PackagingMode::Native).to_string(),
            "catalog (native)"
        );
    }
}
