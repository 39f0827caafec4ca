use std::time::Duration;
use log::info;
use serialport::SerialPort;
use crate::config::LinkConfig;
use crate::stream::{LineEnding, StreamError, WriteSink};
/// Line sink backed by a UART / USB CDC port.
pub type SerialSink = WriteSink<Box<dyn SerialPort>>;
/// Opens `path` at `baud_rate` and wraps the port as a line sink.
pub fn open_serial_sink(
    path: &str,
    baud_rate: u32,
    timeout: Duration,
    line_ending: LineEnding,
) -> Result<SerialSink, StreamError> {
    let port = serialport::new(path, baud_rate).timeout(timeout).open()?;
    info!("serial link open on {path} @ {baud_rate} baud");
    Ok(WriteSink::new(port, line_ending))
}
/// Opens the port named by `link`, if any.
pub fn open_from_config(link: &LinkConfig) -> Result<Option<SerialSink>, StreamError> {
    let Some(path) = link.port.as_deref() else {
        return Ok(None);
    };
    open_serial_sink(
        path,
        link.baud_rate,
        Duration::from_millis(link.timeout_ms),
        link.line_ending,
    )
    .map(Some)
}
