use crate::container::{WavReader, WavWriter};
use crate::error::WavResult;
use std::path::Path;

pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, chunk: usize) -> WavResult<u64> {
	let mut reader = WavReader::open(input)?;
	let mut writer = WavWriter::create(output, reader.format())?;
	let mut buf = vec![0u8; chunk.max(reader.format().bytes_per_frame()).max(1)];

	loop {
		let n = reader.read(&mut buf)?;
		if n == 0 {
			break;
		}
		writer.write_all(&buf[..n])?;
	}

	let copied = writer.bytes_written();
	writer.close()?;
	reader.close()?;
	Ok(copied)
}
