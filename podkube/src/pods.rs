use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::api::ListParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config, ResourceExt};
use tracing::debug;

use crate::error::{namespace_label, PodidError, Result};
use crate::settings::Settings;

/// The parts of a pod podid cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodSummary {
    pub name: String,
    pub namespace: Option<String>,
    pub phase: Option<String>,
}

impl PodSummary {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            phase: None,
        }
    }
}

impl From<Pod> for PodSummary {
    fn from(pod: Pod) -> Self {
        Self {
            name: pod.name_any(),
            namespace: pod.namespace(),
            phase: pod.status.and_then(|status| status.phase),
        }
    }
}

/// Lists every pod of a namespace, in the order the cluster returns them.
#[async_trait]
pub trait PodLister {
    /// An empty namespace lists pods across all namespaces.
    async fn list(&self, namespace: &str) -> Result<Vec<PodSummary>>;
}

pub struct KubePods {
    client: Client,
}

impl KubePods {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn connect(settings: &Settings) -> Result<Self> {
        let config = match &settings.kubeconfig {
            Some(path) => {
                debug!("loading kubeconfig from {}", path.display());
                let kubeconfig_error = |source| PodidError::Kubeconfig {
                    path: path.clone(),
                    source,
                };
                let kubeconfig = Kubeconfig::read_from(path).map_err(kubeconfig_error)?;
                Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                    .await
                    .map_err(kubeconfig_error)?
            }
            None => Config::infer().await?,
        };
        debug!(cluster_url = %config.cluster_url, "connecting to cluster");

        let client = Client::try_from(config).map_err(PodidError::Client)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl PodLister for KubePods {
    async fn list(&self, namespace: &str) -> Result<Vec<PodSummary>> {
        let api: Api<Pod> = if namespace.is_empty() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), namespace)
        };

        let pods = api
            .list(&ListParams::default())
            .await
            .map_err(|source| PodidError::ListPods {
                namespace: namespace.to_string(),
                source,
            })?;

        debug!(count = pods.items.len(), "listed pods in {}", namespace_label(namespace));
        Ok(pods.items.into_iter().map(PodSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::sync::{Arc, Mutex};

    use http::{Request, Response, StatusCode};
    use k8s_openapi::api::core::v1::PodStatus;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
    use kube::client::Body;

    use super::*;

    const POD_LIST: &str = r#"{
        "apiVersion": "v1",
        "kind": "PodList",
        "metadata": {},
        "items": [
            {"metadata": {"name": "checkout-7f9", "namespace": "prod"}, "status": {"phase": "Running"}},
            {"metadata": {"name": "checkout-a1b", "namespace": "prod"}}
        ]
    }"#;

    const SERVER_ERROR: &str = r#"{
        "apiVersion": "v1",
        "kind": "Status",
        "metadata": {},
        "status": "Failure",
        "message": "etcd unavailable",
        "reason": "InternalError",
        "code": 500
    }"#;

    /// Answers every request with `status` and `body`, recording the request paths.
    fn fake_cluster(
        status: StatusCode,
        body: &'static str,
    ) -> (KubePods, Arc<Mutex<Vec<String>>>) {
        let paths = Arc::new(Mutex::new(Vec::new()));
        let recorded = paths.clone();
        let service = tower::service_fn(move |request: Request<Body>| {
            recorded
                .lock()
                .unwrap()
                .push(request.uri().path().to_string());
            async move {
                Ok::<_, Infallible>(
                    Response::builder()
                        .status(status)
                        .header("content-type", "application/json")
                        .body(Body::from(body.as_bytes().to_vec()))
                        .unwrap(),
                )
            }
        });

        (KubePods::new(Client::new(service, "default")), paths)
    }

    #[test]
    fn summary_from_pod() {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some("checkout-7f9".to_string()),
                namespace: Some("prod".to_string()),
                ..Default::default()
            },
            status: Some(PodStatus {
                phase: Some("Running".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            PodSummary::from(pod),
            PodSummary {
                name: "checkout-7f9".to_string(),
                namespace: Some("prod".to_string()),
                phase: Some("Running".to_string()),
            }
        );
    }

    #[test]
    fn summary_without_status() {
        let summary = PodSummary::from(Pod::default());

        assert_eq!(summary, PodSummary::named(""));
    }

    #[tokio::test]
    async fn lists_one_namespace_in_api_order() {
        let (pods, paths) = fake_cluster(StatusCode::OK, POD_LIST);

        let listed = pods.list("prod").await.unwrap();

        let names: Vec<_> = listed.iter().map(|pod| pod.name.as_str()).collect();
        assert_eq!(names, ["checkout-7f9", "checkout-a1b"]);
        assert_eq!(listed[0].phase.as_deref(), Some("Running"));
        assert_eq!(listed[1].phase, None);
        assert_eq!(*paths.lock().unwrap(), ["/api/v1/namespaces/prod/pods"]);
    }

    #[tokio::test]
    async fn empty_namespace_lists_every_namespace() {
        let (pods, paths) = fake_cluster(StatusCode::OK, POD_LIST);

        pods.list("").await.unwrap();

        assert_eq!(*paths.lock().unwrap(), ["/api/v1/pods"]);
    }

    #[tokio::test]
    async fn api_failure_names_the_namespace() {
        let (pods, _) = fake_cluster(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR);

        let err = pods.list("prod").await.unwrap_err();

        assert!(matches!(&err, PodidError::ListPods { namespace, .. } if namespace == "prod"));
        assert_eq!(err.to_string(), "Failed to list pods in namespace prod");
    }
}
