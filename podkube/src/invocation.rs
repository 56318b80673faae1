use crate::error::{PodidError, Result};

/// Literal argument that asks for the selected pod name on the clipboard.
pub const COPY_ARG: &str = "copy";

/// What the caller asked for, before any namespace has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// App name, possibly prefixed with `<namespace>/`.
    pub target: String,
    /// 1-indexed position among the matching pods.
    pub ordinal: usize,
    pub copy: bool,
}

impl Invocation {
    /// Builds an invocation from the positional arguments, program name excluded.
    ///
    /// The first argument is the target. The ordinal and the copy flag are scanned
    /// over every argument, the target included, so a numeric target doubles as the
    /// ordinal.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let target = args.first().cloned().ok_or(PodidError::MissingTarget)?;

        Ok(Self {
            target,
            ordinal: read_ordinal(&args)?,
            copy: read_copy(&args),
        })
    }
}

fn read_ordinal(args: &[String]) -> Result<usize> {
    match args.iter().find_map(|arg| arg.parse::<i64>().ok()) {
        None => Ok(1),
        Some(number) if number >= 1 => {
            usize::try_from(number).map_err(|_| PodidError::InvalidOrdinal(number))
        }
        Some(number) => Err(PodidError::InvalidOrdinal(number)),
    }
}

fn read_copy(args: &[String]) -> bool {
    args.iter().any(|arg| arg == COPY_ARG)
}
