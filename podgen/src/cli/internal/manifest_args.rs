use clap::{Args, builder::NonEmptyStringValueParser};
use k8s_openapi::api::core::v1::Pod;
use podgen_base::consts;

use crate::{
    config::{ImagePullPolicy, PodTemplate},
    manifest,
};

/// Flags describing the pod to build. Unset flags fall back to the `pod`
/// section of the configuration file.
#[derive(Args, Clone, Debug)]
pub struct ManifestArgs {
    #[arg(
        short = 'e',
        long = "environment",
        default_value = consts::DEFAULT_ENVIRONMENT,
        help = "Value of the environment variable passed to the container."
    )]
    pub environment: String,

    #[arg(
        long = "pod-name",
        value_parser = NonEmptyStringValueParser::new(),
        help = "Name of the pod."
    )]
    pub pod_name: Option<String>,

    #[arg(
        long = "container-name",
        value_parser = NonEmptyStringValueParser::new(),
        help = "Name of the container."
    )]
    pub container_name: Option<String>,

    #[arg(
        long = "image",
        value_parser = NonEmptyStringValueParser::new(),
        help = "Container image (e.g., `nginx`, `k8s.gcr.io/busybox`)."
    )]
    pub image: Option<String>,

    #[arg(
        long = "image-pull-policy",
        help = "Policy for pulling the container image (`Always`, `IfNotPresent`, `Never`)."
    )]
    pub image_pull_policy: Option<ImagePullPolicy>,
}

impl ManifestArgs {
    /// Builds the pod from `template` with these flags applied on top.
    pub fn build(&self, template: &PodTemplate) -> Pod {
        manifest::build(&self.apply(template.clone()), &self.environment)
    }

    fn apply(&self, template: PodTemplate) -> PodTemplate {
        let PodTemplate { name, container_name, image, environment_key, image_pull_policy } =
            template;
        PodTemplate {
            name: self.pod_name.clone().unwrap_or(name),
            container_name: self.container_name.clone().unwrap_or(container_name),
            image: self.image.clone().unwrap_or(image),
            environment_key,
            image_pull_policy: self.image_pull_policy.or(image_pull_policy),
        }
    }
}

#[cfg(test)]
mod tests {
    use kube::ResourceExt;

    use super::*;

    fn flags(environment: &str) -> ManifestArgs {
        ManifestArgs {
            environment: environment.to_string(),
            pod_name: None,
            container_name: None,
            image: None,
            image_pull_policy: None,
        }
    }

    #[test]
    fn test_unset_flags_keep_template() {
        let template = PodTemplate { image: "nginx".to_string(), ..PodTemplate::default() };

        assert_eq!(flags("dev").apply(template.clone()), template);
    }

    #[test]
    fn test_flags_override_template() {
        let overrides = ManifestArgs {
            pod_name: Some("web".to_string()),
            image: Some("nginx:1.27".to_string()),
            image_pull_policy: Some(ImagePullPolicy::Never),
            ..flags("dev")
        };
        let template = PodTemplate {
            image_pull_policy: Some(ImagePullPolicy::Always),
            ..PodTemplate::default()
        };

        let applied = overrides.apply(template);
        assert_eq!(applied.name, "web");
        assert_eq!(applied.container_name, consts::DEFAULT_CONTAINER_NAME);
        assert_eq!(applied.image, "nginx:1.27");
        assert_eq!(applied.image_pull_policy, Some(ImagePullPolicy::Never));
    }

    #[test]
    fn test_build_uses_environment() {
        let pod = flags("staging").build(&PodTemplate::default());
        let container = &pod.spec.as_ref().expect("pod has a spec").containers[0];

        assert_eq!(pod.name_any(), consts::DEFAULT_POD_NAME);
        assert_eq!(
            container.env.as_ref().and_then(|env| env[0].value.as_deref()),
            Some("staging")
        );
    }
}
