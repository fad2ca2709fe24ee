use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// One image the pipeline will build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfiguration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildConfiguration>,
}

/// Build section of an image; `from` is the base image the generator resolved
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_ext: Option<FromExt>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub ports: Vec<String>,
    /// Set when the image comes from the pipeline's primary generator pass
    #[serde(default)]
    pub primary: bool,
}

/// Image stream reference used instead of a plain registry image on OpenShift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromExt {
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ImageConfiguration {
    pub fn build_from(&self) -> Option<&str> {
        self.build.as_ref().and_then(|b| b.from.as_deref())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize ImageConfiguration to YAML")
    }
}

impl fmt::Display for ImageConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_yaml() {
            Ok(yaml) => write!(f, "{}", yaml),
            Err(e) => write!(f, "Error formatting ImageConfiguration: {}", e),
        }
    }
}

/// Reads a YAML list of image configurations, e.g. images already declared by the user
pub fn images_from_yaml(content: &str) -> Result<Vec<ImageConfiguration>> {
    let images: Option<Vec<ImageConfiguration>> =
        serde_yaml::from_str(content).context("Failed to parse image configurations")?;
    Ok(images.unwrap_or_default())
}

pub fn images_to_yaml(images: &[ImageConfiguration]) -> Result<String> {
    serde_yaml::to_string(images).context("Failed to serialize image configurations to YAML")
}

pub fn images_to_json(images: &[ImageConfiguration]) -> Result<String> {
    serde_json::to_string_pretty(images)
        .context("Failed to serialize image configurations to JSON")
}
