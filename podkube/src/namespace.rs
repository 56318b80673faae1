use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{PodidError, Result};
use crate::settings::Settings;

/// A namespace together with the app name to look for inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Empty means every namespace.
    pub namespace: String,
    pub app_name: String,
}

/// Reports the namespace of the user's active context.
pub trait NamespaceSource {
    fn current_namespace(&self) -> Result<String>;
}

/// Asks an external helper such as `kubens --current`.
#[derive(Debug, Clone)]
pub struct ContextTool {
    program: String,
    search_path: Option<OsString>,
}

impl ContextTool {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            program: settings.context_tool.clone(),
            search_path: settings.search_path.clone(),
        }
    }

    fn locate(&self) -> Option<PathBuf> {
        find_executable(&self.program, self.search_path.as_deref())
    }
}

impl NamespaceSource for ContextTool {
    fn current_namespace(&self) -> Result<String> {
        let tool = self.program.clone();
        let path = self
            .locate()
            .ok_or_else(|| PodidError::ContextToolMissing { tool: tool.clone() })?;
        debug!("asking {} for the current namespace", path.display());

        let output = Command::new(&path)
            .arg("--current")
            .output()
            .map_err(|source| PodidError::ContextToolSpawn {
                tool: tool.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PodidError::ContextToolFailed {
                tool,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let namespace = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
        if namespace.is_empty() {
            return Err(PodidError::EmptyNamespace { tool });
        }
        Ok(namespace)
    }
}

/// Resolves where to look for an app, first match wins:
/// `<namespace>/<app>` in the target, then the namespace override, then the context tool.
pub struct NamespaceResolver<'a> {
    namespace_override: Option<&'a str>,
    context: &'a dyn NamespaceSource,
}

impl<'a> NamespaceResolver<'a> {
    pub fn new(namespace_override: Option<&'a str>, context: &'a dyn NamespaceSource) -> Self {
        Self {
            namespace_override,
            context,
        }
    }

    pub fn resolve(&self, target: &str) -> Result<Target> {
        if target.contains('/') {
            return match target.split_once('/') {
                Some((namespace, app_name)) if !app_name.contains('/') => {
                    debug!(namespace, "namespace taken from target");
                    Ok(Target {
                        namespace: namespace.to_string(),
                        app_name: app_name.to_string(),
                    })
                }
                _ => Err(PodidError::MalformedTarget(target.to_string())),
            };
        }

        let namespace = match self.namespace_override {
            Some(namespace) => {
                debug!(namespace, "namespace taken from environment");
                namespace.to_string()
            }
            None => {
                let namespace = self.context.current_namespace()?;
                debug!(namespace = %namespace, "namespace taken from context tool");
                namespace
            }
        };

        Ok(Target {
            namespace,
            app_name: target.to_string(),
        })
    }
}

/// Finds `program` the way a shell would. Names containing a path separator are
/// checked as given.
pub fn find_executable(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    env::split_paths(search_path?)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, program))
        .find(|path| is_executable(path))
}

#[cfg(windows)]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program), dir.join(format!("{program}.exe"))]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
