use clap::Args;

use crate::{
    cli::{
        Error,
        internal::{ManifestArgs, print_manifest},
    },
    config::Config,
    manifest::OutputFormat,
};

#[derive(Args, Clone, Debug)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Json,
        help = "Output format of the manifest. JSON output is also valid YAML."
    )]
    pub output: OutputFormat,
}

impl GenerateCommand {
    pub fn run(self, config: &Config) -> Result<(), Error> {
        let Self { manifest, output } = self;
        let pod = manifest.build(&config.pod);
        print_manifest(&pod, output)
    }
}
