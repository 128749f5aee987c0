//! Common command-line plumbing shared by the podgen binaries.

pub mod config;
