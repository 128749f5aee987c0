//! Arguments and helpers shared by the CLI commands.

mod cluster;
mod manifest_args;

use std::io::Write;

use k8s_openapi::api::core::v1::Pod;
use snafu::ResultExt;

pub use self::{cluster::ClusterArgs, manifest_args::ManifestArgs};
use crate::{
    cli::{Error, error},
    manifest::{self, OutputFormat},
};

/// Writes `text` followed by a newline to standard output.
pub fn write_stdout_line(text: &str) -> Result<(), Error> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").context(error::WriteStdoutSnafu)
}

/// Prints `pod` in the requested format as the whole of standard output.
pub fn print_manifest(pod: &Pod, format: OutputFormat) -> Result<(), Error> {
    let text = manifest::render(pod, format)?;
    write_stdout_line(&text)
}
