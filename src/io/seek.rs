use std::io::{Result, Seek, SeekFrom, Write};

pub trait SeekPrimitives: Seek {
	#[inline]
	fn skip(&mut self, n: u64) -> Result<u64> {
		let offset = i64::try_from(n).unwrap_or(i64::MAX);
		self.seek(SeekFrom::Current(offset))
	}
}

impl<T: Seek + ?Sized> SeekPrimitives for T {}

pub trait PatchPrimitives: Write + Seek {
	fn patch_u32_le(&mut self, pos: u64, value: u32) -> Result<()> {
		self.seek(SeekFrom::Start(pos))?;
		self.write_all(&value.to_le_bytes())
	}
}

impl<T: Write + Seek + ?Sized> PatchPrimitives for T {}
