//! Project identity and the locations podgen reads its configuration from.

pub mod consts;

use std::{path::PathBuf, sync::LazyLock};

use directories::{ProjectDirs, UserDirs};

pub const PROJECT_NAME: &str = "podgen";

pub const CLI_PROGRAM_NAME: &str = "podgen";
pub const CLI_CONFIG_NAME: &str = "config.yaml";

/// Platform configuration directory, `~/.config/podgen` on Linux.
pub static PROJECT_CONFIG_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    ProjectDirs::from("", PROJECT_NAME, PROJECT_NAME)
        .expect("Creating `ProjectDirs` should always success")
        .config_dir()
        .to_path_buf()
});

/// Directories searched after [`PROJECT_CONFIG_DIR`]: `~/.config/podgen` and
/// `~/.podgen`. Empty when the home directory is unknown.
#[must_use]
pub fn fallback_project_config_directories() -> Vec<PathBuf> {
    UserDirs::new().map_or_else(Vec::new, |user_dirs| {
        let home = user_dirs.home_dir();
        vec![home.join(".config").join(PROJECT_NAME), home.join(format!(".{PROJECT_NAME}"))]
    })
}

/// Candidate configuration files in search order.
#[must_use]
pub fn config_file_candidates() -> Vec<PathBuf> {
    std::iter::once(PROJECT_CONFIG_DIR.as_path())
        .chain(fallback_project_config_directories().iter().map(PathBuf::as_path))
        .map(|dir| dir.join(CLI_CONFIG_NAME))
        .collect()
}

/// Returns the first candidate of `candidates` that exists on disk.
#[must_use]
pub fn first_existing<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    candidates.into_iter().find(|path| path.try_exists().unwrap_or(false))
}
