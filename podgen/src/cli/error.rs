use std::path::PathBuf;

use kube::config::{InferConfigError, KubeconfigError};
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Configuration { source: crate::config::Error },

    #[snafu(display("{source}"))]
    Manifest { source: crate::manifest::Error },

    #[snafu(display("Failed to write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },

    #[snafu(display("Failed to read kubeconfig from {}, error: {source}", path.display()))]
    ReadKubeconfig {
        path: PathBuf,
        #[snafu(source(from(KubeconfigError, Box::new)))]
        source: Box<KubeconfigError>,
    },

    #[snafu(display("Failed to load kubeconfig, error: {source}"))]
    LoadKubeconfig {
        #[snafu(source(from(KubeconfigError, Box::new)))]
        source: Box<KubeconfigError>,
    },

    #[snafu(display("Failed to infer Kubernetes client configuration, error: {source}"))]
    InferKubeConfig {
        #[snafu(source(from(InferConfigError, Box::new)))]
        source: Box<InferConfigError>,
    },

    #[snafu(display("Failed to initialize Kubernetes client configuration, error: {source}"))]
    KubeConfig {
        #[snafu(source(from(kube::Error, Box::new)))]
        source: Box<kube::Error>,
    },

    #[snafu(display("Failed to create pod {pod_name} in namespace {namespace}, error: {source}"))]
    CreatePod { namespace: String, pod_name: String, source: Box<kube::Error> },

    #[snafu(display("Failed to create tokio runtime, error: {source}"))]
    InitializeTokioRuntime { source: std::io::Error },
}

impl From<crate::config::Error> for Error {
    fn from(source: crate::config::Error) -> Self { Self::Configuration { source } }
}

impl From<crate::manifest::Error> for Error {
    fn from(source: crate::manifest::Error) -> Self { Self::Manifest { source } }
}
