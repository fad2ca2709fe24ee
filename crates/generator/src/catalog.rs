//! Default base images per packaging mode and deployment target

use kubegen_core::{DeploymentTarget, GeneratorError, PackagingMode};
use std::sync::Arc;
use tracing::debug;

pub const NATIVE_S2I_IMAGE: &str = "quay.io/quarkus/ubi-quarkus-native-binary-s2i:1.0";
pub const NATIVE_MINIMAL_IMAGE: &str = "registry.access.redhat.com/ubi8/ubi-minimal:8.1";

pub const RUNTIME_S2I_KEY: &str = "runtime.upstream.s2i";
pub const RUNTIME_DOCKER_KEY: &str = "runtime.upstream.docker";

/// Source of runtime base images, which follow upstream runtime releases
#[cfg_attr(test, mockall::automock)]
pub trait DefaultImageLookup: Send + Sync {
    /// Image registered under `key`, or `None` when the key is unknown
    fn image_name(&self, key: &str) -> Option<String>;
}

pub struct DefaultImageCatalog {
    generator: String,
    lookup: Arc<dyn DefaultImageLookup>,
}

impl DefaultImageCatalog {
    pub fn new(generator: impl Into<String>, lookup: Arc<dyn DefaultImageLookup>) -> Self {
        Self {
            generator: generator.into(),
            lookup,
        }
    }

    pub fn lookup(
        &self,
        mode: PackagingMode,
        target: DeploymentTarget,
    ) -> Result<String, GeneratorError> {
        let key = match (mode, target) {
            (PackagingMode::Native, DeploymentTarget::OpenShift) => {
                return Ok(NATIVE_S2I_IMAGE.to_string())
            }
            (PackagingMode::Native, DeploymentTarget::Kubernetes) => {
                return Ok(NATIVE_MINIMAL_IMAGE.to_string())
            }
            (PackagingMode::Runtime, DeploymentTarget::OpenShift) => RUNTIME_S2I_KEY,
            (PackagingMode::Runtime, DeploymentTarget::Kubernetes) => RUNTIME_DOCKER_KEY,
        };

        debug!(generator = %self.generator, key, "Looking up default runtime image");
        self.lookup
            .image_name(key)
            .ok_or_else(|| GeneratorError::DefaultImageMissing {
                generator: self.generator.clone(),
                key: key.to_string(),
                mode,
                target,
            })
    }
}
