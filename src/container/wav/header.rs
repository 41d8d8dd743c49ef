use super::WavFormat;
use crate::error::{WavError, WavResult};
use crate::io::{ReadPrimitives, SeekPrimitives};
use std::io::{Read, Seek, SeekFrom};

// Layout reference: http://soundfile.sapp.org/doc/WaveFormat/

pub type FourCc = [u8; 4];

pub const RIFF_ID: FourCc = *b"RIFF";
pub const WAVE_ID: FourCc = *b"WAVE";
pub const FMT_ID: FourCc = *b"fmt ";
pub const DATA_ID: FourCc = *b"data";

pub const HEADER_LEN: usize = 46;
pub const MIN_HEADER_LEN: usize = 44;

pub const FMT_SIZE: u32 = 18;
pub const CHUNK_SIZE_BASE: u32 = (HEADER_LEN - 8) as u32;

pub const CHUNK_SIZE_OFFSET: u64 = 4;
pub const DATA_SIZE_OFFSET: u64 = 42;

/// Upper bound on foreign chunks skipped while looking for `data`.
pub const MAX_SKIPPED_CHUNKS: usize = 64;

const FMT_BODY_OFFSET: u64 = 20;
const MIN_FMT_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
	pub chunk_id: FourCc,
	pub chunk_size: u32,
	pub format: FourCc,
	pub fmt_id: FourCc,
	pub fmt_size: u32,
	pub audio_format: u16,
	pub num_channels: u16,
	pub sample_rate: u32,
	pub byte_rate: u32,
	pub block_align: u16,
	pub bits_per_sample: u16,
	pub ext_size: u16,
	pub data_id: FourCc,
	pub data_size: u32,
}

impl WavHeader {
	pub fn new(format: WavFormat) -> WavResult<Self> {
		format.validate()?;

		Ok(Self {
			chunk_id: RIFF_ID,
			chunk_size: 0,
			format: WAVE_ID,
			fmt_id: FMT_ID,
			fmt_size: FMT_SIZE,
			audio_format: format.audio_format(),
			num_channels: format.channels,
			sample_rate: format.sample_rate,
			byte_rate: format.byte_rate(),
			block_align: format.bytes_per_frame() as u16,
			bits_per_sample: format.bits_per_sample(),
			ext_size: 0,
			data_id: DATA_ID,
			data_size: 0,
		})
	}

	pub fn wav_format(&self) -> WavFormat {
		WavFormat {
			channels: self.num_channels,
			sample_rate: self.sample_rate,
			bytes_per_sample: self.bits_per_sample / 8,
		}
	}

	pub fn set_data_size(&mut self, data_size: u32) {
		self.data_size = data_size;
		self.chunk_size = CHUNK_SIZE_BASE + data_size;
	}

	pub fn encode(&self) -> [u8; HEADER_LEN] {
		let mut buf = [0u8; HEADER_LEN];

		buf[0..4].copy_from_slice(&self.chunk_id);
		put_u32(&mut buf, 4, self.chunk_size);
		buf[8..12].copy_from_slice(&self.format);

		buf[12..16].copy_from_slice(&self.fmt_id);
		put_u32(&mut buf, 16, self.fmt_size);
		put_u16(&mut buf, 20, self.audio_format);
		put_u16(&mut buf, 22, self.num_channels);
		put_u32(&mut buf, 24, self.sample_rate);
		put_u32(&mut buf, 28, self.byte_rate);
		put_u16(&mut buf, 32, self.block_align);
		put_u16(&mut buf, 34, self.bits_per_sample);
		put_u16(&mut buf, 36, self.ext_size);

		buf[38..42].copy_from_slice(&self.data_id);
		put_u32(&mut buf, 42, self.data_size);

		buf
	}

	/// The data fields are taken verbatim from offsets 38 and 42; they are only
	/// meaningful when the data chunk directly follows an 18-byte fmt chunk.
	pub fn decode(buf: &[u8; HEADER_LEN]) -> WavResult<Self> {
		expect_tag(buf, 0, RIFF_ID, "RIFF")?;
		expect_tag(buf, 8, WAVE_ID, "WAVE")?;
		expect_tag(buf, 12, FMT_ID, "fmt ")?;

		let fmt_size = get_u32(buf, 16);
		if fmt_size < MIN_FMT_SIZE {
			return Err(WavError::malformed(format!("fmt chunk too small: {} bytes", fmt_size)));
		}

		Ok(Self {
			chunk_id: RIFF_ID,
			chunk_size: get_u32(buf, 4),
			format: WAVE_ID,
			fmt_id: FMT_ID,
			fmt_size,
			audio_format: get_u16(buf, 20),
			num_channels: get_u16(buf, 22),
			sample_rate: get_u32(buf, 24),
			byte_rate: get_u32(buf, 28),
			block_align: get_u16(buf, 32),
			bits_per_sample: get_u16(buf, 34),
			ext_size: if fmt_size >= FMT_SIZE { get_u16(buf, 36) } else { 0 },
			data_id: tag_at(buf, 38),
			data_size: get_u32(buf, 42),
		})
	}

	pub fn read_from<R: Read + Seek>(reader: &mut R) -> WavResult<Self> {
		let mut buf = [0u8; HEADER_LEN];
		let filled = reader.read_fill(&mut buf)?;
		if filled < MIN_HEADER_LEN {
			return Err(WavError::malformed(format!(
				"stream holds {} bytes, a header needs at least {}",
				filled, MIN_HEADER_LEN
			)));
		}

		let mut header = Self::decode(&buf)?;
		header.data_size = find_data_chunk(reader, header.first_chunk_offset())?;
		header.data_id = DATA_ID;

		Ok(header)
	}

	fn first_chunk_offset(&self) -> u64 {
		FMT_BODY_OFFSET + padded(self.fmt_size)
	}
}

fn find_data_chunk<R: Read + Seek>(reader: &mut R, start: u64) -> WavResult<u32> {
	reader.seek(SeekFrom::Start(start))?;

	let mut skipped = 0;
	loop {
		let (Some(id), Some(size)) = (reader.read_fourcc()?, reader.read_u32_le()?) else {
			return Err(WavError::malformed("stream ended before a data chunk"));
		};

		if id == DATA_ID {
			return Ok(size);
		}

		if skipped == MAX_SKIPPED_CHUNKS {
			return Err(WavError::malformed(format!(
				"no data chunk within {} chunks",
				MAX_SKIPPED_CHUNKS
			)));
		}
		skipped += 1;

		log::trace!("skipping {:?} chunk of {} bytes", String::from_utf8_lossy(&id), size);
		reader.skip(padded(size))?;
	}
}

#[inline]
fn padded(size: u32) -> u64 {
	let size = size as u64;
	size + (size & 1)
}

fn expect_tag(buf: &[u8], offset: usize, expected: FourCc, name: &'static str) -> WavResult<()> {
	let found = tag_at(buf, offset);
	if found != expected {
		return Err(WavError::InvalidContainer { expected: name, found });
	}
	Ok(())
}

#[inline]
fn tag_at(buf: &[u8], offset: usize) -> FourCc {
	[buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]]
}

#[inline]
fn get_u16(buf: &[u8], offset: usize) -> u16 {
	u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

#[inline]
fn get_u32(buf: &[u8], offset: usize) -> u32 {
	u32::from_le_bytes(tag_at(buf, offset))
}

#[inline]
fn put_u16(buf: &mut [u8], offset: usize, value: u16) {
	buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

#[inline]
fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
	buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}
