//! stdout/stderr pair used for all user-facing output.
//!
//! Keeping both streams behind `Write` lets tests capture banners and the
//! manual recovery steps. Write errors are ignored: a closed stdout must not
//! turn a successful build into a failure.

use std::io::{self, Write};

pub const RULE: &str = "═══════════════════════════════════════════════";

pub struct Console<'a> {
    out: Box<dyn Write + 'a>,
    err: Box<dyn Write + 'a>,
}

impl<'a> Console<'a> {
    pub fn new(out: impl Write + 'a, err: impl Write + 'a) -> Self {
        Console {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    pub fn out(&mut self, line: &str) {
        let _ = writeln!(self.out, "{line}");
    }

    pub fn err(&mut self, line: &str) {
        let _ = writeln!(self.err, "{line}");
    }

    /// Flush both streams. Call before handing the terminal to a child.
    pub fn flush(&mut self) {
        let _ = self.out.flush();
        let _ = self.err.flush();
    }
}

impl Console<'static> {
    /// Console bound to the process' own stdout and stderr.
    pub fn stdio() -> Self {
        Console::new(io::stdout(), io::stderr())
    }
}
