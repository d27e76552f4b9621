//! Best-effort progress output for a publishing run.

use std::fmt;
use std::io::Write;

use tracing::warn;

/// Line writer whose failures never end a run
///
/// Issues filed before stdout closed (a pipe into `head`, say) stay filed, so
/// the run carries on. The first write error is logged and later lines are
/// dropped.
pub struct Progress<'a, W: Write> {
    out: &'a mut W,
    closed: bool,
}

impl<'a, W: Write> Progress<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out, closed: false }
    }

    /// Write one line, use with `format_args!`
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.closed {
            return;
        }
        if let Err(err) = writeln!(self.out, "{args}") {
            warn!(error = %err, "Progress output failed, continuing without it");
            self.closed = true;
        }
    }

    /// Whether an earlier write failed
    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}
