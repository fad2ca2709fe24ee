//! Properties-backed [`DefaultImageLookup`] with environment overrides

use crate::catalog::DefaultImageLookup;
use kubegen_core::{parse_properties, GeneratorError, KubegenConfig, Properties};
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUILTIN_DEFAULT_IMAGES: &str = include_str!("../resources/default-images.properties");
const ENV_PREFIX: &str = "KUBEGEN_IMAGE_";

#[derive(Debug, Clone)]
pub struct PropertiesImageLookup {
    images: Properties,
}

impl PropertiesImageLookup {
    pub fn builtin() -> Self {
        Self::from_properties(parse_properties(BUILTIN_DEFAULT_IMAGES))
    }

    pub fn from_properties(images: Properties) -> Self {
        Self { images }
    }

    /// Built-in table, then the configured properties file, then `KUBEGEN_IMAGE_*`
    pub fn from_config(config: &KubegenConfig) -> Result<Self, GeneratorError> {
        let mut lookup = Self::builtin();
        if let Some(ref path) = config.default_images {
            lookup = lookup.merge_file(path)?;
        }
        Ok(lookup.with_env_overrides())
    }

    pub fn merge_file(mut self, path: &Path) -> Result<Self, GeneratorError> {
        let content = fs::read_to_string(path).map_err(|source| GeneratorError::Lookup {
            path: path.to_path_buf(),
            source,
        })?;
        let extra = parse_properties(&content);
        debug!(path = ?path, entries = extra.len(), "Merged default image table");
        self.images.extend(extra);
        Ok(self)
    }

    pub fn with_env_overrides(mut self) -> Self {
        for (key, value) in self.images.iter_mut() {
            if let Ok(image) = env::var(env_var_name(key)) {
                debug!(key = %key, image = %image, "Default image overridden from environment");
                *value = image;
            }
        }
        self
    }
}

impl DefaultImageLookup for PropertiesImageLookup {
    fn image_name(&self, key: &str) -> Option<String> {
        self.images
            .get(key)
            .filter(|image| !image.trim().is_empty())
            .cloned()
    }
}

/// `runtime.upstream.s2i` -> `KUBEGEN_IMAGE_RUNTIME_UPSTREAM_S2I`
pub fn env_var_name(key: &str) -> String {
    format!("{}{}", ENV_PREFIX, key.to_uppercase().replace(['.', '-'], "_"))
}
