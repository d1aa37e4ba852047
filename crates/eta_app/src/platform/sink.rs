use std::io::{self, Write};

use super::render::Frame;

/// Where rendered estimates end up.
pub trait PresentationSink {
    fn show_frame(&mut self, frame: &Frame) -> io::Result<()>;
    fn show_error(&mut self, message: &str) -> io::Result<()>;
    fn set_title(&mut self, title: &str) -> io::Result<()>;
}

/// Prints each frame as a block of lines. The title badge is sent as an
/// OSC 0 escape when enabled, which terminals show as the window title.
pub struct TerminalSink<W: Write> {
    out: W,
    emit_title: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, emit_title: bool) -> Self {
        Self { out, emit_title }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationSink for TerminalSink<W> {
    fn show_frame(&mut self, frame: &Frame) -> io::Result<()> {
        for line in frame.lines() {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        if !self.emit_title {
            return Ok(());
        }
        write!(self.out, "\x1b]0;{title}\x07")?;
        self.out.flush()
    }
}
