pub mod args;
pub mod copy;
pub mod ramp;
pub mod show;

pub use args::{Args, Command};
pub use copy::copy;
pub use ramp::{RampOptions, write_ramp};
pub use show::{expand_inputs, show};

use crate::error::WavResult;

pub fn run(command: Command) -> WavResult<()> {
	match command {
		Command::Ramp { output, channels, rate, bytes_per_sample, block_size, blocks } => {
			let opts = RampOptions { channels, sample_rate: rate, bytes_per_sample, block_size, blocks };
			let written = write_ramp(&output, &opts)?;
			println!("ok: {} ({} data bytes)", output, written);
			Ok(())
		}
		Command::Show { inputs } => show(&inputs),
		Command::Copy { input, output, chunk } => {
			let copied = copy(&input, &output, chunk)?;
			println!("ok: {} -> {} ({} data bytes)", input, output, copied);
			Ok(())
		}
	}
}
