//! Command-line interface of `podgen`.
//!
//! `podgen` builds a single Kubernetes pod manifest and either prints it or
//! creates it in a cluster.
//!
//! # Examples
//!
//! ```bash
//! # Print the manifest for the "dev" environment as JSON
//! podgen generate --environment dev
//!
//! # Same manifest, as YAML
//! podgen generate -e dev -o yaml
//!
//! # Create the pod in the "default" namespace of the current context
//! podgen create -e dev -n default
//! ```

mod create;
pub mod error;
mod generate;
mod internal;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use snafu::ResultExt;
use tokio::runtime::Runtime;

pub use self::error::Error;
use self::{
    create::CreateCommand,
    generate::GenerateCommand,
    internal::{ClusterArgs, write_stdout_line},
};
use crate::{config::Config, shadow};

#[derive(Parser)]
#[command(
    name = podgen_base::CLI_PROGRAM_NAME,
    author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about = "Podgen: build a Kubernetes pod manifest, print it or create it in a cluster.",
    long_about = "Podgen builds a single pod with one container whose ENV variable is set to \
                  the requested environment. The manifest is either printed as JSON or YAML, \
                  or submitted once to the cluster of the current Kubernetes context."
)]
pub struct Cli {
    #[clap(subcommand)]
    commands: Option<Commands>,

    #[clap(
        long = "config",
        short = 'c',
        env = "PODGEN_CONFIG_FILE_PATH",
        help = "Specify a configuration file. Defaults to ~/.config/podgen/config.yaml or \
                PODGEN_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    #[clap(
        long = "log-level",
        env = "PODGEN_LOG_LEVEL",
        help = "Set the logging level (e.g., info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Display client and server version information")]
    Version {
        #[clap(long = "client", help = "If true, shows client version only (no server required).")]
        client: bool,

        #[command(flatten)]
        cluster: ClusterArgs,
    },

    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    #[command(
        aliases = ["gen", "g"],
        about = "Print the pod manifest to standard output"
    )]
    Generate(GenerateCommand),

    #[command(alias = "c", about = "Create the pod in the cluster")]
    Create(CreateCommand),
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Runs the parsed command and returns the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the configuration cannot be loaded, the manifest
    /// cannot be written, the cluster cannot be reached or rejects the pod.
    pub fn run(self) -> Result<i32, Error> {
        let Self { commands, config_file, log_level } = self;
        let client_version = Self::command().get_version().unwrap_or_default().to_string();

        match commands {
            Some(Commands::Version { client: true, .. }) => {
                write_stdout_line(&format!(
                    "{}Client Version: {client_version}",
                    Self::command().render_long_version()
                ))?;
            }
            Some(Commands::Version { client: false, cluster }) => {
                let _config = Self::initialize(config_file, log_level)?;
                runtime()?.block_on(Self::print_versions(&cluster, &client_version))?;
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
            }
            Some(Commands::DefaultConfig) => {
                write_stdout_line(Config::template_basic()?.trim_end())?;
            }
            Some(Commands::Generate(cmd)) => {
                let config = Self::initialize(config_file, log_level)?;
                cmd.run(&config)?;
            }
            Some(Commands::Create(cmd)) => {
                let config = Self::initialize(config_file, log_level)?;
                runtime()?.block_on(cmd.run(config))?;
            }
            None => {
                let help = Self::command().render_long_help().ansi().to_string();
                eprint!("{help}");
                return Ok(-1);
            }
        }

        Ok(0)
    }

    /// Loads the configuration, applies the `--log-level` override and
    /// installs the logger.
    ///
    /// An explicitly requested file must exist. Otherwise the default
    /// locations are searched and built-in defaults apply when none exists.
    fn initialize(
        config_file: Option<PathBuf>,
        log_level: Option<tracing::Level>,
    ) -> Result<Config, Error> {
        let config_file = config_file.or_else(Config::search_config_file_path);
        let mut config = match &config_file {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(log_level) = log_level {
            config.log.level = log_level;
        }
        config.log.registry();

        match config_file {
            Some(path) => tracing::debug!("Loaded configuration from {}", path.display()),
            None => tracing::debug!("No configuration file found, using defaults"),
        }

        Ok(config)
    }

    async fn print_versions(cluster: &ClusterArgs, client_version: &str) -> Result<(), Error> {
        let kube_client = cluster.connect().await?;
        let server_version = kube_client.apiserver_version().await.map_or_else(
            |_| "unknown".to_string(),
            |info| format!("{}.{}", info.major, info.minor),
        );
        write_stdout_line(&format!(
            "{}Client Version: {client_version}\nServer Version: {server_version}",
            Self::command().render_long_version()
        ))
    }
}

/// Single-threaded runtime driving the one network exchange of a command.
fn runtime() -> Result<Runtime, Error> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context(error::InitializeTokioRuntimeSnafu)
}

#[cfg(test)]
mod tests {
    use podgen_base::consts;

    use super::*;
    use crate::{config::ImagePullPolicy, manifest::OutputFormat};

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args)
            .expect("arguments are valid")
            .commands
            .expect("a subcommand was given")
    }

    #[test]
    fn test_command_definition_is_consistent() { Cli::command().debug_assert(); }

    #[test]
    fn test_generate_defaults() {
        let Commands::Generate(cmd) = parse(&["podgen", "generate"]) else {
            panic!("expected the generate command");
        };

        assert_eq!(cmd.manifest.environment, consts::DEFAULT_ENVIRONMENT);
        assert_eq!(cmd.manifest.environment, "production");
        assert_eq!(cmd.output, OutputFormat::Json);
        assert_eq!(cmd.manifest.pod_name, None);
        assert_eq!(cmd.manifest.image, None);
    }

    #[test]
    fn test_generate_with_overrides() {
        let Commands::Generate(cmd) = parse(&[
            "podgen",
            "gen",
            "-e",
            "dev",
            "--image",
            "nginx",
            "--image-pull-policy",
            "always",
            "-o",
            "yaml",
        ]) else {
            panic!("expected the generate command");
        };

        assert_eq!(cmd.manifest.environment, "dev");
        assert_eq!(cmd.manifest.image.as_deref(), Some("nginx"));
        assert_eq!(cmd.manifest.image_pull_policy, Some(ImagePullPolicy::Always));
        assert_eq!(cmd.output, OutputFormat::Yaml);
    }

    #[test]
    fn test_create_arguments() {
        let Commands::Create(cmd) = parse(&[
            "podgen",
            "create",
            "-n",
            "team-a",
            "--dry-run",
            "--kubeconfig",
            "/tmp/kubeconfig",
            "--context",
            "kind-kind",
        ]) else {
            panic!("expected the create command");
        };

        assert_eq!(cmd.namespace.as_deref(), Some("team-a"));
        assert!(cmd.dry_run);
        assert_eq!(cmd.manifest.environment, "production");
        assert_eq!(cmd.cluster.kubeconfig, Some(PathBuf::from("/tmp/kubeconfig")));
        assert_eq!(cmd.cluster.context.as_deref(), Some("kind-kind"));
    }

    #[test]
    fn test_empty_pod_name_is_rejected() {
        assert!(Cli::try_parse_from(["podgen", "generate", "--pod-name", ""]).is_err());
    }

    #[test]
    fn test_unknown_image_pull_policy_is_rejected() {
        assert!(
            Cli::try_parse_from(["podgen", "create", "--image-pull-policy", "sometimes"]).is_err()
        );
    }

    #[test]
    fn test_empty_environment_is_accepted() {
        let Commands::Generate(cmd) = parse(&["podgen", "generate", "--environment", ""]) else {
            panic!("expected the generate command");
        };

        assert_eq!(cmd.manifest.environment, "");
    }
}
