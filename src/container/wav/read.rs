use super::{WavFormat, WavHeader};
use crate::error::{WavError, WavResult};
use crate::io::ReadPrimitives;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

pub struct WavReader<R: Read + Seek> {
	reader: Option<R>,
	header: WavHeader,
	format: WavFormat,
	total_data_bytes: u64,
	position: u64,
}

impl WavReader<File> {
	pub fn open<P: AsRef<Path>>(path: P) -> WavResult<Self> {
		let file = File::open(path.as_ref())?;
		log::debug!("opened {} for reading", path.as_ref().display());
		Self::new(file)
	}
}

impl<R: Read + Seek> WavReader<R> {
	pub fn new(mut reader: R) -> WavResult<Self> {
		let header = WavHeader::read_from(&mut reader)?;
		let format = header.wav_format();

		log::debug!(
			"wav header: {} ch, {} Hz, {} bits, {} data bytes",
			format.channels,
			format.sample_rate,
			header.bits_per_sample,
			header.data_size
		);

		Ok(Self {
			reader: Some(reader),
			header,
			format,
			total_data_bytes: header.data_size as u64,
			position: 0,
		})
	}

	pub fn format(&self) -> WavFormat {
		self.format
	}

	pub fn header(&self) -> &WavHeader {
		&self.header
	}

	pub fn channels(&self) -> u16 {
		self.format.channels
	}

	pub fn sample_rate(&self) -> u32 {
		self.format.sample_rate
	}

	pub fn bytes_per_sample(&self) -> u16 {
		self.format.bytes_per_sample
	}

	pub fn total_data_bytes(&self) -> u64 {
		self.total_data_bytes
	}

	pub fn bytes_consumed(&self) -> u64 {
		self.position.min(self.total_data_bytes)
	}

	pub fn remaining(&self) -> u64 {
		self.total_data_bytes - self.bytes_consumed()
	}

	pub fn frames(&self) -> u64 {
		match self.format.bytes_per_frame() {
			0 => 0,
			frame => self.total_data_bytes / frame as u64,
		}
	}

	pub fn duration_secs(&self) -> f64 {
		if self.format.sample_rate == 0 {
			return 0.0;
		}
		self.frames() as f64 / self.format.sample_rate as f64
	}

	/// Reads whole samples into `buf` and returns how many of those bytes
	/// belong to the declared data chunk.
	///
	/// The request is rounded down to a multiple of the sample width. Bytes
	/// beyond the declared end may still land in `buf` but are not counted;
	/// a return of 0 means the data is exhausted.
	pub fn read(&mut self, buf: &mut [u8]) -> WavResult<usize> {
		let reader = self.reader.as_mut().ok_or(WavError::Closed)?;

		let width = self.format.bytes_per_sample;
		if !matches!(width, 2 | 4) {
			return Err(WavError::unsupported("bytes per sample", width.into(), "2, 4 for reading"));
		}

		let len = buf.len() - buf.len() % width as usize;
		let bytes_read = reader.read_fill(&mut buf[..len])?;

		let before = self.bytes_consumed();
		self.position += bytes_read as u64;
		let valid = (self.bytes_consumed() - before) as usize;

		if valid < bytes_read {
			log::debug!(
				"clamped read of {} bytes to {} at declared data end {}",
				bytes_read,
				valid,
				self.total_data_bytes
			);
		}

		Ok(valid)
	}

	pub fn close(&mut self) -> WavResult<()> {
		self.reader.take().ok_or(WavError::Closed)?;
		log::debug!("closed wav reader after {} data bytes", self.bytes_consumed());
		Ok(())
	}

	pub fn is_open(&self) -> bool {
		self.reader.is_some()
	}

	pub fn into_inner(mut self) -> Option<R> {
		self.reader.take()
	}
}
