use std::io::{ErrorKind, Read, Result};

pub trait ReadPrimitives: Read {
	/// Reads until `buf` is full or the stream hits EOF, returning the filled length.
	///
	/// Unlike `read_exact`, running out of input is not an error; the caller
	/// decides what a short fill means.
	fn read_fill(&mut self, buf: &mut [u8]) -> Result<usize> {
		let mut filled = 0;
		while filled < buf.len() {
			match self.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if e.kind() == ErrorKind::Interrupted => continue,
				Err(e) => return Err(e),
			}
		}
		Ok(filled)
	}

	#[inline]
	fn read_fourcc(&mut self) -> Result<Option<[u8; 4]>> {
		let mut buf = [0u8; 4];
		Ok((self.read_fill(&mut buf)? == 4).then_some(buf))
	}

	#[inline]
	fn read_u32_le(&mut self) -> Result<Option<u32>> {
		let mut buf = [0u8; 4];
		Ok((self.read_fill(&mut buf)? == 4).then(|| u32::from_le_bytes(buf)))
	}
}

impl<T: Read + ?Sized> ReadPrimitives for T {}

#[cfg(test)]
mod tests {
	use super::*;

	struct Trickle<'a>(&'a [u8]);

	impl Read for Trickle<'_> {
		fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
			if self.0.is_empty() || buf.is_empty() {
				return Ok(0);
			}
			buf[0] = self.0[0];
			self.0 = &self.0[1..];
			Ok(1)
		}
	}

	#[test]
	fn read_fill_collects_partial_reads() {
		let mut src = Trickle(&[1, 2, 3, 4, 5]);
		let mut buf = [0u8; 4];
		assert_eq!(src.read_fill(&mut buf).unwrap(), 4);
		assert_eq!(buf, [1, 2, 3, 4]);

		assert_eq!(src.read_fill(&mut buf).unwrap(), 1);
		assert_eq!(buf[0], 5);
		assert_eq!(src.read_fill(&mut buf).unwrap(), 0);
	}

	#[test]
	fn short_field_reads_yield_none() {
		let mut src: &[u8] = &[0x10, 0x00, 0x00];
		assert_eq!(src.read_u32_le().unwrap(), None);

		let mut src: &[u8] = &[0x10, 0x00, 0x00, 0x00, b'd', b'a', b't', b'a'];
		assert_eq!(src.read_u32_le().unwrap(), Some(16));
		assert_eq!(src.read_fourcc().unwrap(), Some(*b"data"));
	}
}
