use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{PodidError, Result};
use crate::settings::Settings;

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Copies through the platform's clipboard command.
/// - macOS: pbcopy
/// - Linux: wl-copy under Wayland, otherwise xclip or xsel
/// - Windows: clip
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard {
    wayland: bool,
}

impl SystemClipboard {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            wayland: settings.wayland,
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut failures = Vec::new();
        for (program, args) in clipboard_commands(self.wayland) {
            match pipe_to(program, args, text) {
                Ok(()) => {
                    debug!(program, "copied to clipboard");
                    return Ok(());
                }
                Err(PipeError::Spawn(err)) => failures.push(format!("{program}: {err}")),
                Err(PipeError::Failed(message)) => return Err(PodidError::Clipboard(message)),
            }
        }

        Err(PodidError::Clipboard(format!(
            "no clipboard command could be started ({})",
            failures.join(", ")
        )))
    }
}

type ClipboardCommand = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
fn clipboard_commands(_wayland: bool) -> Vec<ClipboardCommand> {
    const PBCOPY: ClipboardCommand = ("pbcopy", &[]);
    vec![PBCOPY]
}

#[cfg(target_os = "windows")]
fn clipboard_commands(_wayland: bool) -> Vec<ClipboardCommand> {
    const CLIP: ClipboardCommand = ("clip", &[]);
    vec![CLIP]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn clipboard_commands(wayland: bool) -> Vec<ClipboardCommand> {
    const WL_COPY: ClipboardCommand = ("wl-copy", &[]);
    const XCLIP: ClipboardCommand = ("xclip", &["-selection", "clipboard"]);
    const XSEL: ClipboardCommand = ("xsel", &["--clipboard", "--input"]);

    if wayland {
        vec![WL_COPY, XCLIP, XSEL]
    } else {
        vec![XCLIP, XSEL]
    }
}

enum PipeError {
    /// The command could not be started, so the next one is worth trying.
    Spawn(std::io::Error),
    Failed(String),
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> std::result::Result<(), PipeError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(PipeError::Spawn)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| PipeError::Failed(format!("failed to write to {program}: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| PipeError::Failed(format!("failed to wait for {program}: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(PipeError::Failed(format!("{program} exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn wayland_prefers_wl_copy() {
        let programs = |wayland| {
            clipboard_commands(wayland)
                .into_iter()
                .map(|(program, _)| program)
                .collect::<Vec<_>>()
        };

        assert_eq!(programs(true), ["wl-copy", "xclip", "xsel"]);
        assert_eq!(programs(false), ["xclip", "xsel"]);
    }

    #[test]
    fn wayland_comes_from_settings() {
        let settings = Settings {
            wayland: true,
            ..Settings::default()
        };

        assert!(SystemClipboard::from_settings(&settings).wayland);
        assert!(!SystemClipboard::default().wayland);
    }
}
