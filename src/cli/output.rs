//! Console output with the `hover:` prefix.
//!
//! Plain, uncoloured text; every line is written through `std::io`.

use std::io::{self, Write};

/// Tool name prefixed to every console line.
pub const PREFIX: &str = "hover:";

/// Writes user-facing notices to stdout and diagnostics to stderr.
#[derive(Debug, Clone, Default)]
pub struct OutputManager;

impl OutputManager {
    /// Creates an output manager.
    pub fn new() -> Self {
        Self
    }

    /// Prints a notice on stdout.
    pub fn println(&self, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write_prefixed(&mut stdout, message)
    }

    /// Prints a diagnostic on stderr.
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        write_prefixed(&mut stderr, message)
    }
}

/// Writes each line of `message` with the tool prefix.
pub fn write_prefixed<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    for line in message.lines() {
        writeln!(out, "{PREFIX} {line}")?;
    }
    out.flush()
}
