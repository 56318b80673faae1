use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use crate::settings::NAMESPACE_ENV;

pub type Result<T, E = PodidError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum PodidError {
    #[error("App name is expected to be first parameter but no params were given")]
    MissingTarget,

    #[error("Unexpected app name format for {0}. Expected either '<namespace>/<appName>' or '<appName>'")]
    MalformedTarget(String),

    #[error("Pod number must be 1 or greater, got {0}")]
    InvalidOrdinal(i64),

    #[error(
        "Could not determine namespace: {tool} was not found on PATH. \
         Either pass the app name as '<namespace>/<appName>', \
         set {env}, or install {tool}",
        env = NAMESPACE_ENV
    )]
    ContextToolMissing { tool: String },

    #[error("Failed to run {tool}")]
    ContextToolSpawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ContextToolFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{tool} reported an empty namespace")]
    EmptyNamespace { tool: String },

    #[error("Failed to infer cluster configuration")]
    InferConfig(#[from] kube::config::InferConfigError),

    #[error("Failed to load kubeconfig {}", .path.display())]
    Kubeconfig {
        path: PathBuf,
        #[source]
        source: kube::config::KubeconfigError,
    },

    #[error("Failed to create kubernetes client")]
    Client(#[source] kube::Error),

    #[error("Failed to list pods in {}", namespace_label(.namespace))]
    ListPods {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),

    #[error("Failed to write output")]
    Output(#[from] io::Error),
}

pub(crate) fn namespace_label(namespace: &str) -> String {
    if namespace.is_empty() {
        "all namespaces".to_string()
    } else {
        format!("namespace {namespace}")
    }
}
