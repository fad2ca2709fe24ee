//! Per-invocation inputs and the layered view generators read their settings through

use kubegen_core::{BuildStrategy, DeploymentTarget, Properties};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Generator-specific overrides, keyed by generator name then setting name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessorConfig {
    generators: HashMap<String, HashMap<String, String>>,
}

impl ProcessorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, generator: &str, key: &str, value: &str) -> Self {
        self.set(generator, key, value);
        self
    }

    pub fn set(&mut self, generator: &str, key: &str, value: &str) {
        self.generators
            .entry(generator.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, generator: &str, key: &str) -> Option<&str> {
        self.generators
            .get(generator)
            .and_then(|settings| settings.get(key))
            .map(String::as_str)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Option<Self> = serde_yaml::from_str(content)?;
        Ok(config.unwrap_or_default())
    }
}

/// Everything the caller knows about the project being imaged. Read-only to generators.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub version: String,
    pub artifact_id: Option<String>,
    pub build_dir: PathBuf,
    pub properties: Properties,
    pub config: ProcessorConfig,
    pub target: DeploymentTarget,
    pub strategy: BuildStrategy,
}

impl BuildContext {
    pub fn new(version: impl Into<String>, build_dir: impl Into<PathBuf>) -> Self {
        Self {
            version: version.into(),
            artifact_id: None,
            build_dir: build_dir.into(),
            properties: Properties::new(),
            config: ProcessorConfig::new(),
            target: DeploymentTarget::Kubernetes,
            strategy: BuildStrategy::Docker,
        }
    }

    pub fn with_artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn with_target(mut self, target: DeploymentTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }
}

/// Which layer a setting came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Config,
    Property,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Config => write!(f, "config"),
            ConfigSource::Property => write!(f, "property"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigValue<'a> {
    pub value: &'a str,
    pub source: ConfigSource,
}

/// A generator's settings: its override config entry first, then
/// `<namespace>.generator.<name>.<key>` project properties.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig<'a> {
    context: &'a BuildContext,
    generator: &'a str,
    namespace: &'a str,
}

impl<'a> GeneratorConfig<'a> {
    pub fn new(context: &'a BuildContext, generator: &'a str, namespace: &'a str) -> Self {
        Self {
            context,
            generator,
            namespace,
        }
    }

    pub fn context(&self) -> &'a BuildContext {
        self.context
    }

    pub fn generator(&self) -> &'a str {
        self.generator
    }

    pub fn property_key(&self, key: &str) -> String {
        format!("{}.generator.{}.{}", self.namespace, self.generator, key)
    }

    pub fn get(&self, key: &str) -> Option<ConfigValue<'a>> {
        if let Some(value) = self.context.config.get(self.generator, key) {
            return Some(ConfigValue {
                value,
                source: ConfigSource::Config,
            });
        }

        self.context
            .properties
            .get(&self.property_key(key))
            .map(|value| ConfigValue {
                value: value.as_str(),
                source: ConfigSource::Property,
            })
    }

    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.get(key).map(|v| v.value)
    }

    /// `None` when unset; otherwise only `true` (any case) counts as true
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)
            .map(|v| v.value.trim().eq_ignore_ascii_case("true"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> BuildContext {
        BuildContext::new("0.0.1-SNAPSHOT", "/work/target")
    }

    #[test]
    fn test_config_wins_over_property() {
        let ctx = context()
            .with_property("kubegen.generator.quarkus.from", "from-property")
            .with_config(ProcessorConfig::new().with("quarkus", "from", "from-config"));
        let config = GeneratorConfig::new(&ctx, "quarkus", "kubegen");

        assert_eq!(
            config.get("from"),
            Some(ConfigValue {
                value: "from-config",
                source: ConfigSource::Config
            })
        );
    }

    #[test]
    fn test_property_used_when_config_absent() {
        let ctx = context().with_property("kubegen.generator.quarkus.from", "from-property");
        let config = GeneratorConfig::new(&ctx, "quarkus", "kubegen");

        let value = config.get("from").unwrap();
        assert_eq!(value.value, "from-property");
        assert_eq!(value.source, ConfigSource::Property);
    }

    #[test]
    fn test_other_generators_and_namespaces_ignored() {
        let ctx = context()
            .with_property("other.generator.quarkus.from", "wrong-namespace")
            .with_property("kubegen.generator.spring.from", "wrong-generator")
            .with_config(ProcessorConfig::new().with("spring", "from", "wrong-generator"));
        let config = GeneratorConfig::new(&ctx, "quarkus", "kubegen");

        assert_eq!(config.get("from"), None);
    }

    #[test]
    fn test_get_bool_is_permissive() {
        let cases = [
            ("true", Some(true)),
            ("TRUE", Some(true)),
            (" true ", Some(true)),
            ("false", Some(false)),
            ("yes", Some(false)),
            ("", Some(false)),
        ];
        for (raw, expected) in cases {
            let ctx = context().with_property("kubegen.generator.quarkus.nativeImage", raw);
            let config = GeneratorConfig::new(&ctx, "quarkus", "kubegen");
            assert_eq!(config.get_bool("nativeImage"), expected, "value {:?}", raw);
        }

        let ctx = context();
        let config = GeneratorConfig::new(&ctx, "quarkus", "kubegen");
        assert_eq!(config.get_bool("nativeImage"), None);
    }

    #[test]
    fn test_processor_config_from_yaml() {
        let yaml = r#"
quarkus:
  from: "java:latest"
  webPort: "8081"
"#;
        let config = ProcessorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.get("quarkus", "from"), Some("java:latest"));
        assert_eq!(config.get("quarkus", "webPort"), Some("8081"));
        assert_eq!(config.get("quarkus", "alias"), None);

        assert_eq!(ProcessorConfig::from_yaml("").unwrap(), ProcessorConfig::new());
    }

    #[test]
    fn test_property_key() {
        let ctx = context();
        let config = GeneratorConfig::new(&ctx, "quarkus", "acme");
        assert_eq!(config.property_key("from"), "acme.generator.quarkus.from");
    }
}
