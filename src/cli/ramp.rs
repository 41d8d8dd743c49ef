use crate::container::{WavFormat, WavWriter};
use crate::error::WavResult;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct RampOptions {
	pub channels: u16,
	pub sample_rate: u32,
	pub bytes_per_sample: u16,
	pub block_size: usize,
	pub blocks: usize,
}

impl Default for RampOptions {
	fn default() -> Self {
		Self { channels: 1, sample_rate: 48000, bytes_per_sample: 2, block_size: 512, blocks: 3 }
	}
}

impl RampOptions {
	pub fn format(&self) -> WavFormat {
		WavFormat::new(self.channels, self.sample_rate, self.bytes_per_sample)
	}
}

pub fn write_ramp<P: AsRef<Path>>(path: P, opts: &RampOptions) -> WavResult<u64> {
	let format = opts.format();
	let mut writer = WavWriter::create(path, format)?;
	let block = ramp_block(format, opts.block_size);

	for _ in 0..opts.blocks {
		writer.write_all(&block)?;
	}

	let written = writer.bytes_written();
	writer.close()?;
	Ok(written)
}

pub fn ramp_block(format: WavFormat, block_size: usize) -> Vec<u8> {
	let mut block = Vec::with_capacity(block_size * format.bytes_per_frame());

	for j in 0..block_size {
		let sample = encode_sample(format.bytes_per_sample, j, block_size);
		for _ in 0..format.channels {
			block.extend_from_slice(&sample);
		}
	}

	block
}

fn encode_sample(width: u16, j: usize, block_size: usize) -> Vec<u8> {
	match width {
		2 => (j as i16).to_le_bytes().to_vec(),
		3 => (j as i32).to_le_bytes()[..3].to_vec(),
		_ => (j as f32 / block_size as f32).to_le_bytes().to_vec(),
	}
}
