use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to render pod manifest as JSON, error: {source}"))]
    RenderJson { source: serde_json::Error },

    #[snafu(display("Failed to render pod manifest as YAML, error: {source}"))]
    RenderYaml { source: serde_yaml::Error },
}
