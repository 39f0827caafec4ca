//! Bounded on-device telemetry streams.
//!
//! A [`DataStream`] collects up to a fixed number of samples; the encoder
//! writes them out as `_data_stream_:<name>_<suffix>:v1,v2,...,` lines for a
//! host-side reader, followed by a `_data_stream_:_close_:<file>` line when
//! the session is over.
pub mod config;
pub mod serial;
pub mod stream;
pub use config::{AppConfig, LinkConfig, StreamConfig};
pub use serial::{open_serial_sink, SerialSink};
pub use stream::{
    close_session, emit, render_line, DataStream, LineEncoder, LineEnding, LineSink, Sample,
    StreamError, WriteSink,
};
