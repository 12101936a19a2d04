use crate::text::TextWrapper;
use std::io::{self, Stderr, Stdout, Write};

/// Output sink shared by all commands. Text written through `line` and
/// `error_line` is wrapped to the configured width.
pub struct Console<W: Write, E: Write> {
    out: W,
    err: E,
    width: isize,
}

impl Console<Stdout, Stderr> {
    pub fn stdio(width: isize) -> Self {
        Self::new(io::stdout(), io::stderr(), width)
    }
}

impl<W: Write, E: Write> Console<W, E> {
    pub fn new(out: W, err: E, width: isize) -> Self {
        Self { out, err, width }
    }

    pub fn width(&self) -> isize {
        self.width
    }

    pub fn wrap(&self, text: &str) -> String {
        TextWrapper::wrap(text, self.width)
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        let wrapped = self.wrap(text);
        writeln!(self.out, "{wrapped}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Writes `text` unwrapped, e.g. JSON that must stay parseable.
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn error_line(&mut self, text: &str) -> io::Result<()> {
        let wrapped = self.wrap(text);
        writeln!(self.err, "{wrapped}")
    }

    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}
