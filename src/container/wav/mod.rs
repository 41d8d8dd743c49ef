pub mod header;
pub mod read;
pub mod write;

pub use header::WavHeader;
pub use read::WavReader;
pub use write::WavWriter;

use crate::error::{WavError, WavResult};

pub const AUDIO_FORMAT_PCM: u16 = 1;
pub const AUDIO_FORMAT_IEEE_FLOAT: u16 = 3;

pub const SUPPORTED_SAMPLE_RATES: [u32; 3] = [16000, 32000, 48000];
pub const MAX_CHANNELS: u16 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
	pub channels: u16,
	pub sample_rate: u32,
	pub bytes_per_sample: u16,
}

impl WavFormat {
	pub fn new(channels: u16, sample_rate: u32, bytes_per_sample: u16) -> Self {
		Self { channels, sample_rate, bytes_per_sample }
	}

	pub fn bits_per_sample(&self) -> u16 {
		self.bytes_per_sample.saturating_mul(8)
	}

	pub fn bytes_per_frame(&self) -> usize {
		self.bytes_per_sample as usize * self.channels as usize
	}

	pub fn byte_rate(&self) -> u32 {
		u32::try_from(self.bytes_per_frame())
			.map_or(u32::MAX, |frame| self.sample_rate.saturating_mul(frame))
	}

	pub fn audio_format(&self) -> u16 {
		if self.bytes_per_sample == 2 { AUDIO_FORMAT_PCM } else { AUDIO_FORMAT_IEEE_FLOAT }
	}

	pub fn validate(&self) -> WavResult<()> {
		if !(1..=MAX_CHANNELS).contains(&self.channels) {
			return Err(WavError::unsupported("channels", self.channels.into(), "1 to 7"));
		}

		if !SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate) {
			return Err(WavError::unsupported("sample rate", self.sample_rate, "16000, 32000, 48000"));
		}

		if !matches!(self.bytes_per_sample, 2..=4) {
			return Err(WavError::unsupported("bytes per sample", self.bytes_per_sample.into(), "2, 3, 4"));
		}

		Ok(())
	}
}
