use std::io::Write;
use log::warn;
use serde::Deserialize;
/// Write-only text transport that encoded lines are pushed into.
///
/// Writes are fire-and-forget: implementations deal with their own failures.
pub trait LineSink {
    fn write_str(&mut self, text: &str);
    /// Terminates the current line. Defaults to the CR LF pair a serial `println` emits.
    fn end_line(&mut self) {
        self.write_str(LineEnding::CrLf.as_str());
    }
}
impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_str(&mut self, text: &str) {
        (**self).write_str(text);
    }
    fn end_line(&mut self) {
        (**self).end_line();
    }
}
impl LineSink for String {
    fn write_str(&mut self, text: &str) {
        self.push_str(text);
    }
}
impl LineSink for Vec<u8> {
    fn write_str(&mut self, text: &str) {
        self.extend_from_slice(text.as_bytes());
    }
}
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    #[default]
    CrLf,
}
impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}
/// Adapts any [`std::io::Write`] (serial port, file, stdout) into a [`LineSink`].
pub struct WriteSink<W: Write> {
    writer: W,
    line_ending: LineEnding,
    write_errors: usize,
}
impl<W: Write> WriteSink<W> {
    pub fn new(writer: W, line_ending: LineEnding) -> Self {
        Self {
            writer,
            line_ending,
            write_errors: 0,
        }
    }
    /// Number of writes the underlying transport refused so far.
    pub fn write_errors(&self) -> usize {
        self.write_errors
    }
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
    pub fn into_inner(self) -> W {
        self.writer
    }
    fn put(&mut self, bytes: &[u8]) {
        if let Err(err) = self.writer.write_all(bytes) {
            self.write_errors += 1;
            warn!("transport write failed ({} so far): {err}", self.write_errors);
        }
    }
}
impl<W: Write> LineSink for WriteSink<W> {
    fn write_str(&mut self, text: &str) {
        self.put(text.as_bytes());
    }
    fn end_line(&mut self) {
        self.put(self.line_ending.as_str().as_bytes());
    }
}
