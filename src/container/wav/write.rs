use super::header::{CHUNK_SIZE_BASE, CHUNK_SIZE_OFFSET, DATA_SIZE_OFFSET};
use super::{WavFormat, WavHeader};
use crate::error::{WavError, WavResult};
use crate::io::PatchPrimitives;
use std::fs::File;
use std::io::{ErrorKind, Seek, Write};
use std::path::Path;

pub const MAX_DATA_BYTES: u64 = (u32::MAX - CHUNK_SIZE_BASE) as u64;

pub struct WavWriter<W: Write + Seek> {
	writer: Option<W>,
	header: WavHeader,
	bytes_written: u64,
}

impl WavWriter<File> {
	/// Creates (or truncates) `path` and writes a provisional header.
	///
	/// The format is checked first, so unsupported parameters never touch the
	/// filesystem.
	pub fn create<P: AsRef<Path>>(path: P, format: WavFormat) -> WavResult<Self> {
		format.validate()?;
		let file = File::create(path.as_ref())?;
		log::debug!("created {} for writing", path.as_ref().display());
		Self::new(file, format)
	}
}

impl<W: Write + Seek> WavWriter<W> {
	pub fn new(mut writer: W, format: WavFormat) -> WavResult<Self> {
		let header = WavHeader::new(format)?;
		writer.write_all(&header.encode())?;

		Ok(Self { writer: Some(writer), header, bytes_written: 0 })
	}

	pub fn format(&self) -> WavFormat {
		self.header.wav_format()
	}

	pub fn header(&self) -> &WavHeader {
		&self.header
	}

	pub fn bytes_written(&self) -> u64 {
		self.bytes_written
	}

	/// Passes `data` to the stream in a single write and returns what it accepted.
	///
	/// Frame alignment is the caller's business. A short write is reported,
	/// not retried.
	pub fn write(&mut self, data: &[u8]) -> WavResult<usize> {
		let writer = self.writer.as_mut().ok_or(WavError::Closed)?;

		if self.bytes_written + data.len() as u64 > MAX_DATA_BYTES {
			return Err(WavError::DataTooLarge { written: self.bytes_written, requested: data.len() });
		}

		let n = writer.write(data)?;
		self.bytes_written += n as u64;
		Ok(n)
	}

	pub fn write_all(&mut self, mut data: &[u8]) -> WavResult<()> {
		while !data.is_empty() {
			match self.write(data) {
				Ok(0) => return Err(std::io::Error::from(ErrorKind::WriteZero).into()),
				Ok(n) => data = &data[n..],
				Err(WavError::Io(e)) if e.kind() == ErrorKind::Interrupted => continue,
				Err(e) => return Err(e),
			}
		}
		Ok(())
	}

	pub fn close(&mut self) -> WavResult<()> {
		let mut writer = self.writer.take().ok_or(WavError::Closed)?;
		self.finalize(&mut writer)
	}

	pub fn finish(mut self) -> WavResult<W> {
		let mut writer = self.writer.take().ok_or(WavError::Closed)?;
		self.finalize(&mut writer)?;
		Ok(writer)
	}

	pub fn is_open(&self) -> bool {
		self.writer.is_some()
	}

	fn finalize(&mut self, writer: &mut W) -> WavResult<()> {
		self.header.set_data_size(self.bytes_written as u32);

		writer.flush()?;
		writer.patch_u32_le(CHUNK_SIZE_OFFSET, self.header.chunk_size)?;
		writer.patch_u32_le(DATA_SIZE_OFFSET, self.header.data_size)?;
		writer.flush()?;

		log::debug!(
			"finalized wav: chunk size {}, data size {}",
			self.header.chunk_size,
			self.header.data_size
		);
		Ok(())
	}
}

impl<W: Write + Seek> Drop for WavWriter<W> {
	fn drop(&mut self) {
		if let Some(mut writer) = self.writer.take() {
			if let Err(e) = self.finalize(&mut writer) {
				log::warn!("failed to finalize wav on drop: {}", e);
			}
		}
	}
}
