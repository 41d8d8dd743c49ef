use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tinywav")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	#[arg(short, long, action = ArgAction::Count, global = true, help = "Raise log verbosity (repeatable)")]
	pub verbose: u8,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Write a ramp test signal
	Ramp {
		#[arg(value_name = "FILE", help = "Output wav file (overwritten)")]
		output: String,

		#[arg(long, default_value_t = 1, help = "Channel count (1 to 7)")]
		channels: u16,

		#[arg(long, default_value_t = 48000, help = "Sample rate (16000, 32000, 48000)")]
		rate: u32,

		#[arg(long = "bytes-per-sample", default_value_t = 2, help = "Sample width in bytes (2, 3, 4)")]
		bytes_per_sample: u16,

		#[arg(long = "block-size", default_value_t = 512, help = "Frames per block")]
		block_size: usize,

		#[arg(long, default_value_t = 3, help = "Number of blocks")]
		blocks: usize,
	},

	/// Print the header of one or more wav files
	Show {
		#[arg(value_name = "FILE", required = true, help = "Input files or glob patterns")]
		inputs: Vec<String>,
	},

	/// Copy the sample data of a wav file into a new one
	Copy {
		#[arg(value_name = "INPUT")]
		input: String,

		#[arg(value_name = "OUTPUT")]
		output: String,

		#[arg(long, default_value_t = 4096, help = "Bytes per read")]
		chunk: usize,
	},
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}

	pub fn log_level(&self) -> log::Level {
		match self.verbose {
			0 => log::Level::Warn,
			1 => log::Level::Info,
			2 => log::Level::Debug,
			_ => log::Level::Trace,
		}
	}
}
