use std::fmt;

use crate::pods::PodSummary;

/// Result of picking a pod out of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Found(PodSummary),
    NoMatches {
        app_name: String,
    },
    OutOfRange {
        app_name: String,
        found: usize,
        requested: usize,
    },
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Found(pod) => write!(f, "{}", pod.name),
            Selection::NoMatches { app_name } => {
                write!(f, "Found no pods containing app name {app_name}")
            }
            Selection::OutOfRange {
                app_name,
                found,
                requested,
            } => write!(
                f,
                "Out of range: Found {found} pods containing app name {app_name} \
                 but you asked for pod number {requested}"
            ),
        }
    }
}

/// Keeps the pods whose name contains `app_name`, preserving their order.
pub fn matching<'a>(pods: &'a [PodSummary], app_name: &str) -> Vec<&'a PodSummary> {
    pods.iter().filter(|pod| pod.name.contains(app_name)).collect()
}

/// Picks the `ordinal`-th (1-indexed) pod whose name contains `app_name`.
pub fn select(pods: &[PodSummary], app_name: &str, ordinal: usize) -> Selection {
    let matches = matching(pods, app_name);

    if matches.is_empty() {
        return Selection::NoMatches {
            app_name: app_name.to_string(),
        };
    }

    match ordinal.checked_sub(1).and_then(|index| matches.get(index)) {
        Some(pod) => Selection::Found((*pod).clone()),
        None => Selection::OutOfRange {
            app_name: app_name.to_string(),
            found: matches.len(),
            requested: ordinal,
        },
    }
}
