use crate::catalog::{DefaultImageCatalog, DefaultImageLookup};
use crate::composer::BuildSpecComposer;
use crate::context::{BuildContext, GeneratorConfig};
use crate::resolver::BaseImageResolver;
use kubegen_core::config::DEFAULT_NAMESPACE;
use kubegen_core::{FileSystem, GeneratorError, ImageConfiguration};
use std::sync::Arc;
use tracing::info;

/// A pipeline step that contributes one image configuration per invocation
pub trait Generator: Send + Sync {
    fn name(&self) -> &str;

    /// Returns `existing` with this generator's image appended. `primary` marks the
    /// pipeline's main build and is carried into the image metadata.
    fn customize(
        &self,
        context: &BuildContext,
        existing: Vec<ImageConfiguration>,
        primary: bool,
    ) -> Result<Vec<ImageConfiguration>, GeneratorError>;
}

pub struct QuarkusGenerator {
    fs: Arc<dyn FileSystem>,
    catalog: DefaultImageCatalog,
    namespace: String,
}

impl QuarkusGenerator {
    pub const NAME: &'static str = "quarkus";

    pub fn new(fs: Arc<dyn FileSystem>, lookup: Arc<dyn DefaultImageLookup>) -> Self {
        Self {
            fs,
            catalog: DefaultImageCatalog::new(Self::NAME, lookup),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

impl Generator for QuarkusGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn customize(
        &self,
        context: &BuildContext,
        existing: Vec<ImageConfiguration>,
        primary: bool,
    ) -> Result<Vec<ImageConfiguration>, GeneratorError> {
        let config = GeneratorConfig::new(context, Self::NAME, &self.namespace);

        let resolved = BaseImageResolver::new(self.fs.as_ref(), &self.catalog).resolve(&config)?;
        info!(
            generator = Self::NAME,
            target = %context.target,
            source = %resolved.source,
            "Base image: {}",
            resolved
        );

        Ok(BuildSpecComposer::new(config).compose(existing, &resolved, primary))
    }
}
