use std::future::Future;
use std::io::Write;

use tracing::debug;

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::invocation::Invocation;
use crate::namespace::NamespaceResolver;
use crate::pods::PodLister;
use crate::report::report;
use crate::select::{select, Selection};

/// Runs one lookup: resolve the namespace, list its pods, pick one and report it.
///
/// `connect` is only called once the namespace is known, so resolution errors
/// surface before any cluster configuration is loaded.
pub async fn run<F, Fut, L>(
    invocation: &Invocation,
    resolver: &NamespaceResolver<'_>,
    connect: F,
    clipboard: &dyn Clipboard,
    out: &mut impl Write,
) -> Result<Selection>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<L>>,
    L: PodLister,
{
    let target = resolver.resolve(&invocation.target)?;
    let lister = connect().await?;
    let pods = lister.list(&target.namespace).await?;

    let selection = select(&pods, &target.app_name, invocation.ordinal);
    match &selection {
        Selection::Found(pod) => debug!(
            namespace = pod.namespace.as_deref().unwrap_or_default(),
            phase = pod.phase.as_deref().unwrap_or("Unknown"),
            "selected {}",
            pod.name
        ),
        other => debug!(listed = pods.len(), "{other}"),
    }

    report(&selection, invocation.copy, out, clipboard)?;
    Ok(selection)
}
