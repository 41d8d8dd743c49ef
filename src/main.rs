use tinywav::cli::{Args, run};

fn main() {
	let args = Args::parse();

	if let Err(e) = simple_logger::init_with_level(args.log_level()) {
		eprintln!("Warning: logger unavailable: {}", e);
	}

	if let Err(e) = run(args.command) {
		eprintln!("Error: {}", e);
		std::process::exit(1);
	}
}
