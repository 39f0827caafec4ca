use log::{trace, warn};
use crate::stream::buffer::DataStream;
use crate::stream::error::is_valid_label;
use crate::stream::sample::Sample;
use crate::stream::sink::LineSink;
/// Prefix of every line written for a stream.
pub const STREAM_MARKER: &str = "_data_stream_:";
/// Prefix of the line that ends a logging session.
pub const CLOSE_MARKER: &str = "_data_stream_:_close_:";
/// Builds `_data_stream_:<name>_<suffix>:<v1>,...,<vn>,` without the line terminator.
pub fn render_line<T: Sample>(stream: &DataStream<T>, suffix: &str) -> String {
    if !is_valid_label(suffix) {
        warn!(
            "suffix {suffix:?} for stream {} contains a reserved delimiter",
            stream.name()
        );
    }
    let mut line =
        String::with_capacity(STREAM_MARKER.len() + stream.name().len() + suffix.len() + 2);
    line.push_str(STREAM_MARKER);
    line.push_str(stream.name());
    line.push('_');
    line.push_str(suffix);
    line.push(':');
    for sample in stream.iter() {
        sample.write_decimal(&mut line).ok();
        line.push(',');
    }
    line
}
/// Writes every valid sample of `stream` as one line. The stream is left untouched.
pub fn emit<T: Sample, S: LineSink + ?Sized>(
    sink: &mut S,
    stream: &DataStream<T>,
    suffix: &str,
) {
    let line = render_line(stream, suffix);
    trace!("emitting {} samples: {line}", stream.len());
    sink.write_str(&line);
    sink.end_line();
}
/// Tells the reader that no more lines follow for `file_name`.
pub fn close_session<S: LineSink + ?Sized>(sink: &mut S, file_name: &str) {
    if !is_valid_label(file_name) {
        warn!("session file name {file_name:?} contains a reserved delimiter");
    }
    trace!("closing session {file_name}");
    sink.write_str(CLOSE_MARKER);
    sink.write_str(file_name);
    sink.end_line();
}
/// Owns a sink and encodes streams into it.
pub struct LineEncoder<S: LineSink> {
    sink: S,
    lines_written: usize,
}
impl<S: LineSink> LineEncoder<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            lines_written: 0,
        }
    }
    pub fn emit<T: Sample>(&mut self, stream: &DataStream<T>, suffix: &str) {
        emit(&mut self.sink, stream, suffix);
        self.lines_written += 1;
    }
    pub fn close_session(&mut self, file_name: &str) {
        close_session(&mut self.sink, file_name);
        self.lines_written += 1;
    }
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }
    pub fn into_sink(self) -> S {
        self.sink
    }
}
