use k8s_openapi::api::core::v1::Pod;
use kube::{Api, api::PostParams};

/// Anything able to submit a namespaced pod creation request.
pub trait PodCreator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issues one create request and returns the object stored by the server.
    async fn create_pod(&self, namespace: &str, pod: &Pod) -> Result<Pod, Self::Error>;
}

impl PodCreator for kube::Client {
    type Error = kube::Error;

    async fn create_pod(&self, namespace: &str, pod: &Pod) -> Result<Pod, Self::Error> {
        Api::<Pod>::namespaced(self.clone(), namespace).create(&PostParams::default(), pod).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use http::{Method, Request, Response};
    use http_body_util::{BodyExt, Full};
    use kube::ResourceExt;

    use super::*;
    use crate::{config::PodTemplate, manifest};

    type RecordedRequest = (Method, String, Vec<u8>);

    /// A `kube::Client` backed by an in-process service that records every
    /// request and echoes the submitted body back.
    fn recording_client() -> (kube::Client, Arc<Mutex<Vec<RecordedRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let service = tower::service_fn(move |request: Request<kube::client::Body>| {
            let recorded = Arc::clone(&recorded);
            async move {
                let (parts, body) = request.into_parts();
                let body = body.collect().await?.to_bytes();
                recorded.lock().expect("request log is not poisoned").push((
                    parts.method,
                    parts.uri.path().to_string(),
                    body.to_vec(),
                ));
                Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Response::new(Full::new(body)))
            }
        });
        (kube::Client::new(service, "default"), requests)
    }

    #[tokio::test]
    async fn test_kube_client_posts_pod_once() {
        let (client, requests) = recording_client();
        let pod = manifest::build(&PodTemplate::default(), "dev");

        let created = client.create_pod("team-a", &pod).await.expect("pod is created");

        assert_eq!(created.name_any(), "test-pod");
        let requests = requests.lock().expect("request log is not poisoned");
        assert_eq!(requests.len(), 1);
        let (method, path, body) = &requests[0];
        assert_eq!(*method, Method::POST);
        assert_eq!(path.as_str(), "/api/v1/namespaces/team-a/pods");
        let sent: Pod = serde_json::from_slice(body).expect("request body is a pod");
        assert_eq!(sent, pod);
    }
}
