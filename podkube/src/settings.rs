use std::env::{self, VarError};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that, when set, supplies the namespace directly.
pub const NAMESPACE_ENV: &str = "PODID_NAMESPACE";

/// Helper that reports the namespace of the active context.
pub const DEFAULT_CONTEXT_TOOL: &str = "kubens";

/// Everything podid would otherwise read from the process environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Value of [`NAMESPACE_ENV`]. `Some("")` when the variable is set but empty.
    pub namespace_override: Option<String>,
    /// Explicit kubeconfig file. When absent the client infers its configuration.
    pub kubeconfig: Option<PathBuf>,
    pub context_tool: String,
    /// Directories searched for `context_tool`, in `PATH` syntax.
    pub search_path: Option<OsString>,
    /// Whether a Wayland session is running, which decides the clipboard command.
    pub wayland: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            namespace_override: None,
            kubeconfig: None,
            context_tool: DEFAULT_CONTEXT_TOOL.to_string(),
            search_path: None,
            wayland: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let namespace_override = match env::var(NAMESPACE_ENV) {
            Ok(namespace) => Some(namespace),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
        };

        Self {
            namespace_override,
            search_path: env::var_os("PATH"),
            wayland: env::var_os("WAYLAND_DISPLAY").is_some(),
            ..Self::default()
        }
    }

    pub fn with_kubeconfig(mut self, kubeconfig: Option<PathBuf>) -> Self {
        self.kubeconfig = kubeconfig;
        self
    }
}
