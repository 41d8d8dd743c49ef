use crate::container::WavReader;
use crate::error::WavResult;
use prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE;
use prettytable::{Cell, Row, Table, row};
use std::io::{Error, ErrorKind};

pub fn show(inputs: &[String]) -> WavResult<()> {
	let files = expand_inputs(inputs)?;
	info_table(&files).printstd();
	Ok(())
}

pub fn info_table(files: &[String]) -> Table {
	let mut table = Table::new();
	table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
	table.set_titles(row![
		"file", "channels", "rate", "bits", "format", "data bytes", "frames", "duration"
	]);

	for path in files {
		match WavReader::open(path) {
			Ok(reader) => {
				let header = reader.header();
				table.add_row(row![
					path,
					header.num_channels,
					header.sample_rate,
					header.bits_per_sample,
					audio_format_name(header.audio_format),
					reader.total_data_bytes(),
					reader.frames(),
					format!("{:.3}s", reader.duration_secs())
				]);
			}
			Err(e) => {
				log::warn!("{}: {}", path, e);
				let reason = Cell::new(&format!("error: {}", e)).with_hspan(7);
				table.add_row(Row::new(vec![Cell::new(path), reason]));
			}
		}
	}

	table
}

fn audio_format_name(code: u16) -> String {
	match code {
		1 => "pcm".to_string(),
		3 => "float".to_string(),
		other => format!("0x{:04x}", other),
	}
}

pub fn expand_inputs(inputs: &[String]) -> WavResult<Vec<String>> {
	let mut files = Vec::new();

	for input in inputs {
		if !is_glob_pattern(input) {
			files.push(input.clone());
			continue;
		}

		let entries = glob::glob(input).map_err(|e| {
			Error::new(ErrorKind::InvalidInput, format!("invalid glob pattern: {}", e))
		})?;

		for entry in entries {
			match entry {
				Ok(path) if path.is_file() => files.push(path.to_string_lossy().to_string()),
				Ok(_) => {}
				Err(e) => log::warn!("failed to read entry: {}", e),
			}
		}
	}

	if files.is_empty() {
		let msg = format!("no files matching: {}", inputs.join(" "));
		return Err(Error::new(ErrorKind::NotFound, msg).into());
	}

	Ok(files)
}

fn is_glob_pattern(input: &str) -> bool {
	input.contains(['*', '?', '['])
}
