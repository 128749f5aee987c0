use podgen_base::consts;
use serde::{Deserialize, Serialize};

use crate::config::{Error, ImagePullPolicy};

/// The fixed parts of the generated pod. Only the environment value varies
/// between runs.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodTemplate {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_container_name")]
    pub container_name: String,

    #[serde(default = "default_image")]
    pub image: String,

    /// Key of the single environment variable.
    #[serde(default = "default_environment_key")]
    pub environment_key: String,

    #[serde(default)]
    pub image_pull_policy: Option<ImagePullPolicy>,
}

impl Default for PodTemplate {
    fn default() -> Self {
        Self {
            name: default_name(),
            container_name: default_container_name(),
            image: default_image(),
            environment_key: default_environment_key(),
            image_pull_policy: None,
        }
    }
}

impl PodTemplate {
    /// Rejects templates whose pod name, container name, image or
    /// environment key is empty.
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("name", &self.name),
            ("containerName", &self.container_name),
            ("image", &self.image),
            ("environmentKey", &self.environment_key),
        ];
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(Error::EmptyTemplateField { field }),
            None => Ok(()),
        }
    }
}

fn default_name() -> String { consts::DEFAULT_POD_NAME.to_string() }

fn default_container_name() -> String { consts::DEFAULT_CONTAINER_NAME.to_string() }

fn default_image() -> String { consts::DEFAULT_IMAGE.to_string() }

fn default_environment_key() -> String { consts::DEFAULT_ENVIRONMENT_KEY.to_string() }
