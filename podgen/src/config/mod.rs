mod error;
mod image_pull_policy;
mod pod_template;

use std::path::{Path, PathBuf};

use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{error::Error, image_pull_policy::ImagePullPolicy, pod_template::PodTemplate};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace to create the pod in. The current kubeconfig context decides
    /// when unset.
    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub pod: PodTemplate,

    #[serde(default = "podgen_cli::config::LogConfig::default")]
    pub log: podgen_cli::config::LogConfig,
}

impl Config {
    /// Returns the first existing configuration file among the default
    /// locations.
    pub fn search_config_file_path() -> Option<PathBuf> {
        podgen_base::first_existing(podgen_base::config_file_candidates())
    }

    /// Reads, parses and validates the configuration file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let path = path
            .try_resolve()
            .map(|path| path.to_path_buf())
            .with_context(|_| error::ResolveFilePathSnafu { file_path: path.to_path_buf() })?;
        let data = std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
        Self::parse(&data, &path)
    }

    fn parse(data: &[u8], filename: &Path) -> Result<Self, Error> {
        let mut config: Self = serde_yaml::from_slice(data)
            .with_context(|_| error::ParseConfigSnafu { filename: filename.to_path_buf() })?;

        config.log.file_path = match config.log.file_path.map(|path| {
            path.try_resolve()
                .map(|path| path.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
        }) {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => return Err(err),
            None => None,
        };

        config.pod.validate()?;
        Ok(config)
    }

    /// Renders the default configuration as YAML.
    pub fn template_basic() -> Result<String, Error> {
        serde_yaml::to_string(&Self::default()).context(error::SerializeConfigSnafu)
    }
}
