use std::{fmt, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};
use snafu::Snafu;

/// Value of the container's `imagePullPolicy` field.
///
/// Parsing ignores case, both on the command line and in the configuration
/// file. The Kubernetes spelling is always written back.
#[derive(Clone, Copy, Debug, DeserializeFromStr, Eq, PartialEq, SerializeDisplay)]
pub enum ImagePullPolicy {
    IfNotPresent,
    Always,
    Never,
}

impl ImagePullPolicy {
    const ALL: [Self; 3] = [Self::IfNotPresent, Self::Always, Self::Never];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IfNotPresent => "IfNotPresent",
            Self::Always => "Always",
            Self::Never => "Never",
        }
    }
}

impl fmt::Display for ImagePullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ImagePullPolicy {
    type Err = ParseImagePullPolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParseImagePullPolicyError::Unknown { value: value.to_string() })
    }
}

#[derive(Debug, Snafu)]
pub enum ParseImagePullPolicyError {
    #[snafu(display(
        "Unknown image pull policy '{value}', expected one of Always, IfNotPresent, Never"
    ))]
    Unknown { value: String },
}
