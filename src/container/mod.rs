pub mod wav;

pub use wav::{WavFormat, WavHeader, WavReader, WavWriter};
