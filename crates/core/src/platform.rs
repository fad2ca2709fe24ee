//! Packaging modes, deployment targets and build strategies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the application artifact was packaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackagingMode {
    /// Runnable archive executed by a language runtime (JVM)
    Runtime,
    /// Natively compiled executable
    Native,
}

impl From<bool> for PackagingMode {
    fn from(native: bool) -> Self {
        if native {
            PackagingMode::Native
        } else {
            PackagingMode::Runtime
        }
    }
}

impl fmt::Display for PackagingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackagingMode::Runtime => write!(f, "runtime"),
            PackagingMode::Native => write!(f, "native"),
        }
    }
}

/// Cluster platform the generated image is deployed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTarget {
    OpenShift,
    Kubernetes,
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentTarget::OpenShift => write!(f, "openshift"),
            DeploymentTarget::Kubernetes => write!(f, "kubernetes"),
        }
    }
}

impl FromStr for DeploymentTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openshift" | "ocp" => Ok(DeploymentTarget::OpenShift),
            "kubernetes" | "k8s" => Ok(DeploymentTarget::Kubernetes),
            other => Err(format!(
                "Invalid deployment target: {}. Valid options: openshift, kubernetes",
                other
            )),
        }
    }
}

/// Build strategy hint supplied by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStrategy {
    S2i,
    Docker,
    Jib,
}

impl fmt::Display for BuildStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStrategy::S2i => write!(f, "s2i"),
            BuildStrategy::Docker => write!(f, "docker"),
            BuildStrategy::Jib => write!(f, "jib"),
        }
    }
}

impl FromStr for BuildStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s2i" => Ok(BuildStrategy::S2i),
            "docker" => Ok(BuildStrategy::Docker),
            "jib" => Ok(BuildStrategy::Jib),
            other => Err(format!(
                "Invalid build strategy: {}. Valid options: s2i, docker, jib",
                other
            )),
        }
    }
}
