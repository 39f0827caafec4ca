// src/stream/mod.rs
pub mod buffer;
pub mod encoder;
pub mod error;
pub mod sample;
pub mod sink;
// 公开导出，方便外部调用
pub use buffer::DataStream;
pub use encoder::{close_session, emit, render_line, LineEncoder, CLOSE_MARKER, STREAM_MARKER};
pub use error::StreamError;
pub use sample::{Sample, FLOAT_PRECISION};
pub use sink::{LineEnding, LineSink, WriteSink};
