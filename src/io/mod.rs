mod reader;
mod seek;

pub use reader::ReadPrimitives;
pub use seek::{PatchPrimitives, SeekPrimitives};
