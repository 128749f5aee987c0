use clap::ValueEnum;
use k8s_openapi::api::core::v1::Pod;
use snafu::ResultExt;

use crate::manifest::{Error, error};

/// Text format of the printed manifest.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON, which is also valid YAML.
    #[default]
    Json,
    Yaml,
}

/// Renders `pod` in the given format without a trailing newline.
///
/// `apiVersion` and `kind` come first, unset fields are left out.
pub fn render(pod: &Pod, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(pod).context(error::RenderJsonSnafu),
        OutputFormat::Yaml => serde_yaml::to_string(pod)
            .map(|yaml| yaml.trim_end().to_string())
            .context(error::RenderYamlSnafu),
    }
}
