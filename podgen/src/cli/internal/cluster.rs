use std::path::PathBuf;

use clap::Args;
use kube::config::{KubeConfigOptions, Kubeconfig};
use snafu::ResultExt;

use crate::cli::{Error, error};

/// How to reach the cluster.
#[derive(Args, Clone, Debug, Default)]
pub struct ClusterArgs {
    #[arg(
        long = "kubeconfig",
        help = "Path to a kubeconfig file. Defaults to the KUBECONFIG environment variable, \
                ~/.kube/config or the in-cluster service account."
    )]
    pub kubeconfig: Option<PathBuf>,

    #[arg(long = "context", help = "Name of the kubeconfig context to use.")]
    pub context: Option<String>,
}

impl ClusterArgs {
    /// Resolves the client configuration and builds a client from it. No
    /// request is sent to the cluster.
    pub async fn connect(&self) -> Result<kube::Client, Error> {
        let options =
            KubeConfigOptions { context: self.context.clone(), ..KubeConfigOptions::default() };

        let config = match (&self.kubeconfig, &self.context) {
            (Some(path), _) => {
                let kubeconfig = Kubeconfig::read_from(path)
                    .with_context(|_| error::ReadKubeconfigSnafu { path: path.clone() })?;
                kube::Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .context(error::LoadKubeconfigSnafu)?
            }
            (None, Some(_)) => {
                kube::Config::from_kubeconfig(&options).await.context(error::LoadKubeconfigSnafu)?
            }
            (None, None) => kube::Config::infer().await.context(error::InferKubeConfigSnafu)?,
        };

        tracing::debug!(
            cluster_url = %config.cluster_url,
            default_namespace = %config.default_namespace,
            "Resolved cluster connection"
        );
        kube::Client::try_from(config).context(error::KubeConfigSnafu)
    }
}
