use thiserror::Error;

pub type WavResult<T> = std::result::Result<T, WavError>;

#[derive(Error, Debug)]
pub enum WavError {
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid container: expected {expected:?}, found {}", show_tag(.found))]
	InvalidContainer { expected: &'static str, found: [u8; 4] },

	#[error("malformed header: {0}")]
	MalformedHeader(String),

	#[error("unsupported {parameter} {value} (only {allowed})")]
	UnsupportedFormat { parameter: &'static str, value: u32, allowed: &'static str },

	#[error("data chunk too large: {written} bytes written, {requested} more requested")]
	DataTooLarge { written: u64, requested: usize },

	#[error("wav session is closed")]
	Closed,
}

impl WavError {
	pub fn malformed<S: Into<String>>(msg: S) -> Self {
		WavError::MalformedHeader(msg.into())
	}

	pub fn unsupported(parameter: &'static str, value: u32, allowed: &'static str) -> Self {
		WavError::UnsupportedFormat { parameter, value, allowed }
	}

	pub fn is_closed(&self) -> bool {
		matches!(self, WavError::Closed)
	}
}

fn show_tag(tag: &[u8; 4]) -> String {
	format!("{:?}", String::from_utf8_lossy(tag))
}
