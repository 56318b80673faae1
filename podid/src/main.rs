use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use podkube::{
    lookup, ContextTool, Invocation, KubePods, NamespaceResolver, Settings, SystemClipboard,
};
use tracing_subscriber::EnvFilter;

/// Print the name of a running pod whose name contains an app name.
///
/// The namespace is taken from `<namespace>/<app name>`, then from PODID_NAMESPACE,
/// then from `kubens --current`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// App name to look for, optionally prefixed with `<namespace>/`
    #[arg(value_name = "APP")]
    target: String,

    /// Pod number among the matches (default 1) and/or `copy` to put the name on the clipboard
    #[arg(value_name = "NUMBER|copy", allow_negative_numbers = true)]
    extra: Vec<String>,

    /// Kubeconfig file to use instead of the inferred cluster configuration
    #[arg(long)]
    kubeconfig: Option<PathBuf>,

    /// Log resolution steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "podid=debug,podkube=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let invocation = Invocation::from_args(std::iter::once(args.target).chain(args.extra))?;
    let settings = Settings::from_env().with_kubeconfig(args.kubeconfig);

    let context_tool = ContextTool::from_settings(&settings);
    let resolver = NamespaceResolver::new(settings.namespace_override.as_deref(), &context_tool);

    let clipboard = SystemClipboard::from_settings(&settings);
    let mut stdout = io::stdout().lock();
    lookup::run(
        &invocation,
        &resolver,
        || KubePods::connect(&settings),
        &clipboard,
        &mut stdout,
    )
    .await
    .with_context(|| format!("Could not look up a pod for {}", invocation.target))?;

    Ok(())
}
