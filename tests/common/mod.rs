#![allow(dead_code)]

use std::io::{Cursor, Read, Seek};
use tinywav::WavReader;

pub fn le_u16(bytes: &[u8], offset: usize) -> u16 {
	u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub fn le_u32(bytes: &[u8], offset: usize) -> u32 {
	u32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

pub fn ramp_i16(samples: usize) -> Vec<u8> {
	let mut data = Vec::with_capacity(samples * 2);
	for i in 0..samples {
		data.extend_from_slice(&(i as i16).to_le_bytes());
	}
	data
}

/// Deterministic pseudo-random bytes.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
	let mut state = seed.wrapping_mul(2654435761).wrapping_add(1);
	(0..len)
		.map(|_| {
			state = state.wrapping_mul(1664525).wrapping_add(1013904223);
			(state >> 24) as u8
		})
		.collect()
}

pub struct WavFixture {
	pub channels: u16,
	pub sample_rate: u32,
	pub bits_per_sample: u16,
	pub fmt_size: u32,
	pub extra_chunks: Vec<([u8; 4], Vec<u8>)>,
	pub declared_data_size: Option<u32>,
	pub data: Vec<u8>,
}

impl WavFixture {
	/// A canonical 16-byte fmt file, the way most encoders emit them.
	pub fn canonical(channels: u16, sample_rate: u32, bits_per_sample: u16, data: Vec<u8>) -> Self {
		Self {
			channels,
			sample_rate,
			bits_per_sample,
			fmt_size: 16,
			extra_chunks: Vec::new(),
			declared_data_size: None,
			data,
		}
	}

	pub fn with_fmt_size(mut self, fmt_size: u32) -> Self {
		self.fmt_size = fmt_size;
		self
	}

	pub fn with_chunk(mut self, id: &[u8; 4], body: &[u8]) -> Self {
		self.extra_chunks.push((*id, body.to_vec()));
		self
	}

	pub fn declaring(mut self, data_size: u32) -> Self {
		self.declared_data_size = Some(data_size);
		self
	}

	pub fn build(&self) -> Vec<u8> {
		let bytes_per_sample = self.bits_per_sample / 8;
		let block_align = self.channels * bytes_per_sample;
		let byte_rate = self.sample_rate * block_align as u32;

		let mut body = Vec::new();
		body.extend_from_slice(b"WAVE");

		body.extend_from_slice(b"fmt ");
		body.extend_from_slice(&self.fmt_size.to_le_bytes());
		let fmt_start = body.len();
		body.extend_from_slice(&1u16.to_le_bytes());
		body.extend_from_slice(&self.channels.to_le_bytes());
		body.extend_from_slice(&self.sample_rate.to_le_bytes());
		body.extend_from_slice(&byte_rate.to_le_bytes());
		body.extend_from_slice(&block_align.to_le_bytes());
		body.extend_from_slice(&self.bits_per_sample.to_le_bytes());
		body.resize(fmt_start + self.fmt_size as usize, 0);

		for (id, chunk) in &self.extra_chunks {
			body.extend_from_slice(id);
			body.extend_from_slice(&(chunk.len() as u32).to_le_bytes());
			body.extend_from_slice(chunk);
			if chunk.len() % 2 == 1 {
				body.push(0);
			}
		}

		let declared = self.declared_data_size.unwrap_or(self.data.len() as u32);
		body.extend_from_slice(b"data");
		body.extend_from_slice(&declared.to_le_bytes());
		body.extend_from_slice(&self.data);

		let mut wav = Vec::with_capacity(body.len() + 8);
		wav.extend_from_slice(b"RIFF");
		wav.extend_from_slice(&(body.len() as u32).to_le_bytes());
		wav.extend_from_slice(&body);
		wav
	}

	pub fn open(&self) -> WavReader<Cursor<Vec<u8>>> {
		WavReader::new(Cursor::new(self.build())).unwrap()
	}
}

/// Drains a reader in `chunk`-sized requests, keeping only the counted bytes.
pub fn read_all<R: Read + Seek>(reader: &mut WavReader<R>, chunk: usize) -> Vec<u8> {
	let mut out = Vec::new();
	let mut buf = vec![0u8; chunk];
	loop {
		let n = reader.read(&mut buf).unwrap();
		if n == 0 {
			break;
		}
		out.extend_from_slice(&buf[..n]);
	}
	out
}
