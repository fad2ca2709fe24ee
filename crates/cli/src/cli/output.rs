//! Output formatting for resolved image configurations

use anyhow::{Context, Result};
use kubegen_core::output::schema::{images_to_json, images_to_yaml};
use kubegen_core::{ImageConfiguration, KubegenConfig};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_images(&self, images: &[ImageConfiguration]) -> Result<String> {
        match self.format {
            OutputFormat::Json => images_to_json(images),
            OutputFormat::Yaml => images_to_yaml(images),
            OutputFormat::Human => Ok(self.format_images_human(images)),
        }
    }

    pub fn format_config(&self, config: &KubegenConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&config.to_display_map())
                .context("Failed to serialize configuration to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(&config.to_display_map())
                .context("Failed to serialize configuration to YAML"),
            OutputFormat::Human => Ok(config.to_string()),
        }
    }

    fn format_images_human(&self, images: &[ImageConfiguration]) -> String {
        let mut out = String::new();
        for image in images {
            let _ = writeln!(out, "{}", image.name);
            if let Some(ref alias) = image.alias {
                let _ = writeln!(out, "  alias: {}", alias);
            }
            match image.build {
                Some(ref build) => {
                    let _ = writeln!(out, "  from:  {}", build.from.as_deref().unwrap_or("-"));
                    if let Some(ref ext) = build.from_ext {
                        let namespace = ext
                            .namespace
                            .as_deref()
                            .map(|ns| format!("{}/", ns))
                            .unwrap_or_default();
                        let _ = writeln!(out, "  {}: {}{}", ext.kind, namespace, ext.name);
                    }
                    if !build.ports.is_empty() {
                        let _ = writeln!(out, "  ports: {}", build.ports.join(", "));
                    }
                    if build.primary {
                        let _ = writeln!(out, "  primary build");
                    }
                }
                None => {
                    let _ = writeln!(out, "  (no build configuration)");
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubegen_core::{BuildConfiguration, FromExt};

    fn images() -> Vec<ImageConfiguration> {
        vec![
            ImageConfiguration {
                name: "declared/app".to_string(),
                alias: None,
                build: None,
            },
            ImageConfiguration {
                name: "sample:latest".to_string(),
                alias: Some("quarkus".to_string()),
                build: Some(BuildConfiguration {
                    from: Some("openshift/runtime:21".to_string()),
                    from_ext: Some(FromExt {
                        kind: "ImageStreamTag".to_string(),
                        name: "runtime:21".to_string(),
                        namespace: Some("openshift".to_string()),
                    }),
                    ports: vec!["8080".to_string()],
                    primary: true,
                    ..Default::default()
                }),
            },
        ]
    }

    #[test]
    fn test_format_human() {
        let out = OutputFormatter::new(OutputFormat::Human)
            .format_images(&images())
            .unwrap();
        assert!(out.contains("declared/app\n  (no build configuration)"));
        assert!(out.contains("from:  openshift/runtime:21"));
        assert!(out.contains("ImageStreamTag: openshift/runtime:21"));
        assert!(out.contains("ports: 8080"));
        assert!(out.contains("primary build"));
    }

    #[test]
    fn test_format_json() {
        let out = OutputFormatter::new(OutputFormat::Json)
            .format_images(&images())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["build"]["from"], "openshift/runtime:21");
        assert_eq!(value[1]["build"]["fromExt"]["kind"], "ImageStreamTag");
    }

    #[test]
    fn test_format_yaml() {
        let out = OutputFormatter::new(OutputFormat::Yaml)
            .format_images(&images())
            .unwrap();
        assert!(out.contains("name: sample:latest"));
        assert!(out.contains("from: openshift/runtime:21"));
    }

    #[test]
    fn test_format_config_json() {
        let config = KubegenConfig {
            namespace: "kubegen".to_string(),
            target: kubegen_core::DeploymentTarget::OpenShift,
            strategy: kubegen_core::BuildStrategy::S2i,
            log_level: "info".to_string(),
            default_images: None,
        };
        let out = OutputFormatter::new(OutputFormat::Json)
            .format_config(&config)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["target"], "openshift");
    }
}
