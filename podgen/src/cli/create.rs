use clap::Args;
use kube::ResourceExt;

use crate::{
    cli::{
        Error,
        internal::{ClusterArgs, ManifestArgs, print_manifest, write_stdout_line},
    },
    config::Config,
    manifest::OutputFormat,
    publisher::{self, PublishOutcome},
};

#[derive(Args, Clone, Debug)]
pub struct CreateCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    #[arg(
        short = 'n',
        long = "namespace",
        help = "Kubernetes namespace to create the pod in. Defaults to the `namespace` of the \
                configuration file, then to the current Kubernetes context's namespace."
    )]
    pub namespace: Option<String>,

    #[arg(
        long = "dry-run",
        help = "Print the pod manifest instead of sending it to the cluster."
    )]
    pub dry_run: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Json,
        help = "Output format of the manifest printed by --dry-run."
    )]
    pub output: OutputFormat,

    #[command(flatten)]
    pub cluster: ClusterArgs,
}

impl CreateCommand {
    pub async fn run(self, config: Config) -> Result<(), Error> {
        let Self { manifest, namespace, dry_run, output, cluster } = self;
        let pod = manifest.build(&config.pod);

        if dry_run {
            return print_manifest(&pod, output);
        }

        let kube_client = cluster.connect().await?;
        let namespace =
            resolve_namespace(namespace, config.namespace, kube_client.default_namespace());
        let pod_name = pod.name_any();

        match publisher::publish(&kube_client, &namespace, &pod).await {
            PublishOutcome::Created(created) => {
                write_stdout_line(&format!("pod/{} created", created.name_any()))
            }
            PublishOutcome::Failed(source) => Err(Error::CreatePod { namespace, pod_name, source }),
        }
    }
}

/// Picks the namespace from the flag, then the configuration file, then the
/// kubeconfig context. Empty values count as unset.
fn resolve_namespace(
    flag: Option<String>,
    configured: Option<String>,
    context_default: &str,
) -> String {
    flag.filter(|s| !s.is_empty())
        .or_else(|| configured.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| context_default.to_string())
}
