// src/main.rs
use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serial_data_stream::{serial, AppConfig, DataStream, LineEncoder, LineSink, WriteSink};
#[derive(Parser, Debug)]
#[command(name = "serial-data-stream")]
#[command(version, about = "Fill a data stream with a counter and emit it over a serial link")]
struct Args {
    /// JSON config file; defaults are used when omitted
    config: Option<PathBuf>,
    /// Serial port to write to, overrides `link.port` (stdout when neither is set)
    #[arg(long)]
    port: Option<String>,
    /// Baud rate, overrides `link.baud_rate`
    #[arg(long)]
    baud_rate: Option<u32>,
}
impl Args {
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => AppConfig::default(),
        };
        if let Some(port) = &self.port {
            config.link.port = Some(port.clone());
        }
        if let Some(baud_rate) = self.baud_rate {
            config.link.baud_rate = baud_rate;
        }
        Ok(config)
    }
}
// 把计数器写满一个流，输出一行数据，再发送会话结束标记
fn run_session<S: LineSink>(encoder: &mut LineEncoder<S>, config: &AppConfig) -> Result<()> {
    let mut stream: DataStream<i32> = config
        .stream
        .build()
        .context("invalid stream settings")?;
    let mut data_point = 0;
    while stream.append(data_point) {
        data_point += 1;
    }
    info!(
        "stream {} filled with {} of {} samples",
        stream.name(),
        stream.len(),
        stream.size()
    );
    encoder.emit(&stream, &config.stream.suffix);
    encoder.close_session(&config.file_name);
    Ok(())
}
fn finish<W: Write>(encoder: LineEncoder<WriteSink<W>>) -> Result<()> {
    let lines = encoder.lines_written();
    let mut sink = encoder.into_sink();
    sink.flush().context("failed to flush transport")?;
    info!("{lines} lines written, {} write errors", sink.write_errors());
    Ok(())
}
// 入口函数
fn main() -> Result<()> {
    env_logger::init();
    let config = Args::parse().load_config()?;
    match serial::open_from_config(&config.link).context("failed to open serial link")? {
        Some(port) => {
            let mut encoder = LineEncoder::new(port);
            run_session(&mut encoder, &config)?;
            finish(encoder)
        }
        None => {
            let stdout = WriteSink::new(io::stdout(), config.link.line_ending);
            let mut encoder = LineEncoder::new(stdout);
            run_session(&mut encoder, &config)?;
            finish(encoder)
        }
    }
}
