use std::io::{self, ErrorKind, Write};

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::select::Selection;

/// Prints the selection and, for a found pod, copies its name when asked to.
///
/// Nothing reaches the clipboard when no pod was selected. A reader that closed
/// the pipe early is not an error.
pub fn report(
    selection: &Selection,
    copy: bool,
    out: &mut impl Write,
    clipboard: &dyn Clipboard,
) -> Result<()> {
    print_line(selection, out)?;

    if let (Selection::Found(pod), true) = (selection, copy) {
        clipboard.copy(&pod.name)?;
    }
    Ok(())
}

fn print_line(selection: &Selection, out: &mut impl Write) -> io::Result<()> {
    match writeln!(out, "{selection}").and_then(|()| out.flush()) {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}
