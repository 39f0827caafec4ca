use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::stream::{DataStream, LineEnding, Sample, StreamError};
/// Transport settings. Without a `port` the demo writes to stdout.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub port: Option<String>,
    pub baud_rate: u32,
    pub timeout_ms: u64,
    pub line_ending: LineEnding,
}
impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            port: None,
            baud_rate: 115_200,
            timeout_ms: 1_000,
            line_ending: LineEnding::CrLf,
        }
    }
}
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub name: String,
    /// Signed so that a negative value in the file surfaces as `InvalidCapacity`
    /// instead of a parse error.
    pub capacity: i64,
    pub suffix: String,
}
impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            name: "my_stream".to_owned(),
            capacity: 100,
            suffix: "postfix".to_owned(),
        }
    }
}
impl StreamConfig {
    pub fn build<T: Sample>(&self) -> Result<DataStream<T>, StreamError> {
        DataStream::with_signed_capacity(self.name.clone(), self.capacity)
    }
}
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub link: LinkConfig,
    pub stream: StreamConfig,
    pub file_name: String,
}
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            link: LinkConfig::default(),
            stream: StreamConfig::default(),
            file_name: "data_file_name".to_owned(),
        }
    }
}
impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StreamError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
    pub fn from_json(text: &str) -> Result<Self, StreamError> {
        Ok(serde_json::from_str(text)?)
    }
}
