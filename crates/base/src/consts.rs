//! Default values for the generated pod manifest.

/// Name given to the pod when neither the configuration nor the command line
/// overrides it.
pub const DEFAULT_POD_NAME: &str = "test-pod";

/// Name of the single container in the pod.
pub const DEFAULT_CONTAINER_NAME: &str = "test-container";

pub const DEFAULT_IMAGE: &str = "k8s.gcr.io/busybox";

/// Key of the environment variable that carries the deployment environment.
pub const DEFAULT_ENVIRONMENT_KEY: &str = "ENV";

pub const DEFAULT_ENVIRONMENT: &str = "production";
