//! Turns a resolved base image into an image configuration appended to the caller's list

use crate::context::GeneratorConfig;
use crate::resolver::ResolvedBaseImage;
use kubegen_core::{
    BuildConfiguration, BuildStrategy, DeploymentTarget, FromExt, ImageConfiguration,
};
use tracing::warn;

pub const DEFAULT_WEB_PORT: u16 = 8080;
const IMAGE_STREAM_TAG: &str = "ImageStreamTag";

pub struct BuildSpecComposer<'a> {
    config: GeneratorConfig<'a>,
}

impl<'a> BuildSpecComposer<'a> {
    pub fn new(config: GeneratorConfig<'a>) -> Self {
        Self { config }
    }

    /// Appends exactly one image to `existing`. Entries already present are never
    /// merged or deduplicated, even when they share the new image's name.
    pub fn compose(
        &self,
        mut existing: Vec<ImageConfiguration>,
        resolved: &ResolvedBaseImage,
        primary: bool,
    ) -> Vec<ImageConfiguration> {
        let build = BuildConfiguration {
            from: Some(resolved.reference.clone()),
            from_ext: self.from_ext(resolved),
            ports: vec![self.web_port().to_string()],
            primary,
            ..Default::default()
        };

        existing.push(ImageConfiguration {
            name: self.image_name(),
            alias: Some(self.alias()),
            build: Some(build),
        });
        existing
    }

    /// `name` setting, else `<artifactId>:<tag>` with `latest` for snapshots
    pub fn image_name(&self) -> String {
        if let Some(name) = self.config.get_str("name") {
            return name.to_string();
        }

        let context = self.config.context();
        let repository = context
            .artifact_id
            .as_deref()
            .unwrap_or_else(|| self.config.generator());
        format!("{}:{}", repository, image_tag(&context.version))
    }

    pub fn alias(&self) -> String {
        self.config
            .get_str("alias")
            .unwrap_or_else(|| self.config.generator())
            .to_string()
    }

    pub fn web_port(&self) -> u16 {
        match self.config.get_str("webPort") {
            None => DEFAULT_WEB_PORT,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    generator = self.config.generator(),
                    value = raw,
                    "Ignoring non-numeric webPort, using {}",
                    DEFAULT_WEB_PORT
                );
                DEFAULT_WEB_PORT
            }),
        }
    }

    /// Image stream reference, only for `fromMode: istag` on OpenShift S2I builds
    pub fn from_ext(&self, resolved: &ResolvedBaseImage) -> Option<FromExt> {
        let istag = self
            .config
            .get_str("fromMode")
            .map(|mode| mode.trim().eq_ignore_ascii_case("istag"))
            .unwrap_or(false);
        let context = self.config.context();
        if !istag
            || context.target != DeploymentTarget::OpenShift
            || context.strategy != BuildStrategy::S2i
        {
            return None;
        }

        let (namespace, name) = split_image_stream(&resolved.reference);
        Some(FromExt {
            kind: IMAGE_STREAM_TAG.to_string(),
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
        })
    }
}

fn image_tag(version: &str) -> &str {
    if version.is_empty() || version.ends_with("-SNAPSHOT") {
        "latest"
    } else {
        version
    }
}

/// `openshift/runtime:21` -> (Some("openshift"), "runtime:21"); registry hosts are not namespaces
fn split_image_stream(reference: &str) -> (Option<&str>, &str) {
    match reference.split_once('/') {
        Some((namespace, name))
            if !namespace.contains(['.', ':']) && namespace != "localhost" && !name.contains('/') =>
        {
            (Some(namespace), name)
        }
        _ => (None, reference),
    }
}
