//! Construction and rendering of the pod manifest.

mod error;
mod render;

use k8s_openapi::api::core::v1::{Container, EnvVar, Pod, PodSpec};
use kube::api::ObjectMeta;

pub use self::{
    error::Error,
    render::{OutputFormat, render},
};
use crate::config::PodTemplate;

/// Builds the pod described by `template`, with `environment` as the value of
/// its single environment variable.
///
/// `environment` is used verbatim, including the empty string.
pub fn build(template: &PodTemplate, environment: &str) -> Pod {
    let PodTemplate { name, container_name, image, environment_key, image_pull_policy } =
        template;

    let env = vec![EnvVar {
        name: environment_key.clone(),
        value: Some(environment.to_string()),
        ..EnvVar::default()
    }];

    Pod {
        metadata: ObjectMeta { name: Some(name.clone()), ..ObjectMeta::default() },
        spec: Some(PodSpec {
            containers: vec![Container {
                name: container_name.clone(),
                image: Some(image.clone()),
                image_pull_policy: image_pull_policy.map(|policy| policy.to_string()),
                env: Some(env),
                ..Container::default()
            }],
            ..PodSpec::default()
        }),
        ..Pod::default()
    }
}

#[cfg(test)]
mod tests {
    use k8s_openapi::Resource;
    use podgen_base::consts;

    use super::*;
    use crate::config::ImagePullPolicy;

    fn only_container(pod: &Pod) -> &Container {
        let containers = &pod.spec.as_ref().expect("pod has a spec").containers;
        assert_eq!(containers.len(), 1);
        &containers[0]
    }

    #[test]
    fn test_environment_is_the_single_env_value() {
        for environment in ["dev", "production", "", "staging eu-west-1", "prod\nline", "été"] {
            let pod = build(&PodTemplate::default(), environment);
            let env = only_container(&pod).env.as_ref().expect("container has env");

            assert_eq!(env.len(), 1);
            assert_eq!(env[0].name, "ENV");
            assert_eq!(env[0].value.as_deref(), Some(environment));
            assert!(env[0].value_from.is_none());
        }
    }

    #[test]
    fn test_dev_scenario() {
        let pod = build(&PodTemplate::default(), "dev");
        let container = only_container(&pod);

        assert_eq!(pod.metadata.name.as_deref(), Some("test-pod"));
        assert_eq!(pod.metadata.namespace, None);
        assert_eq!(container.name, "test-container");
        assert_eq!(container.image.as_deref(), Some("k8s.gcr.io/busybox"));
        assert_eq!(container.image_pull_policy, None);
        assert_eq!(<Pod as Resource>::API_VERSION, "v1");
        assert_eq!(<Pod as Resource>::KIND, "Pod");
    }

    #[test]
    fn test_default_environment_constant() {
        let pod = build(&PodTemplate::default(), consts::DEFAULT_ENVIRONMENT);
        let env = only_container(&pod).env.as_ref().expect("container has env");

        assert_eq!(env[0].value.as_deref(), Some("production"));
    }

    #[test]
    fn test_template_fields_are_applied() {
        let template = PodTemplate {
            name: "web".to_string(),
            container_name: "nginx".to_string(),
            image: "nginx:1.27".to_string(),
            environment_key: "APP_ENV".to_string(),
            image_pull_policy: Some(ImagePullPolicy::Always),
        };
        let pod = build(&template, "qa");
        let container = only_container(&pod);

        assert_eq!(pod.metadata.name.as_deref(), Some("web"));
        assert_eq!(container.name, "nginx");
        assert_eq!(container.image.as_deref(), Some("nginx:1.27"));
        assert_eq!(container.image_pull_policy.as_deref(), Some("Always"));
        assert_eq!(container.env.as_ref().map(|env| env[0].name.as_str()), Some("APP_ENV"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let template = PodTemplate::default();
        assert_eq!(build(&template, "dev"), build(&template, "dev"));
    }
}
