pub mod cli;
pub mod container;
pub mod error;
pub mod io;

pub use container::wav::header::{HEADER_LEN, MIN_HEADER_LEN};
pub use container::{WavFormat, WavHeader, WavReader, WavWriter};
pub use error::{WavError, WavResult};
