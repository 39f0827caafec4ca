use thiserror::Error;
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("stream capacity {0} is out of range (negative or wider than usize)")]
    InvalidCapacity(i64),
    #[error("cannot allocate storage for {0} samples")]
    AllocationFailed(usize),
    #[error("label {0:?} contains a reserved delimiter (':' or a line break)")]
    InvalidLabel(String),
    #[error("serial link error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
}
/// Returns true when `label` can be placed in a line header without breaking the framing.
pub fn is_valid_label(label: &str) -> bool {
    !label.contains([':', '\r', '\n'])
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn labels_with_delimiters_are_rejected() {
        assert!(is_valid_label("imu_accel"));
        assert!(is_valid_label(""));
        assert!(!is_valid_label("a:b"));
        assert!(!is_valid_label("line\nbreak"));
        assert!(!is_valid_label("cr\r"));
    }
    #[test]
    fn error_messages() {
        let err = StreamError::InvalidCapacity(-3);
        assert_eq!(
            err.to_string(),
            "stream capacity -3 is out of range (negative or wider than usize)"
        );
        let err = StreamError::AllocationFailed(7);
        assert_eq!(err.to_string(), "cannot allocate storage for 7 samples");
        let err = StreamError::InvalidLabel("a:b".into());
        assert!(err.to_string().contains("\"a:b\""));
    }
}
