//! Submission of a built pod to the cluster.
//!
//! A pod is submitted with exactly one create request. Failures are reported
//! as they come back from the client, with no retry and no check for an
//! existing pod of the same name.

mod pod_creator;

use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;

pub use self::pod_creator::PodCreator;

/// Result of a single create request.
#[derive(Debug)]
pub enum PublishOutcome<E> {
    /// The object returned by the API server.
    Created(Box<Pod>),
    /// The client's error, unchanged.
    Failed(Box<E>),
}

/// Creates `pod` in `namespace` through `client` and waits for the answer.
pub async fn publish<C>(client: &C, namespace: &str, pod: &Pod) -> PublishOutcome<C::Error>
where
    C: PodCreator,
{
    let pod_name = pod.name_any();
    tracing::debug!(%namespace, %pod_name, "Sending create request");

    match client.create_pod(namespace, pod).await {
        Ok(created) => {
            tracing::debug!(%namespace, %pod_name, "Pod created");
            PublishOutcome::Created(Box::new(created))
        }
        Err(err) => {
            tracing::warn!(%namespace, %pod_name, "Failed to create pod, error: {err}");
            PublishOutcome::Failed(Box::new(err))
        }
    }
}
