#![allow(missing_docs)]

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "glmdoc", about = "Ghoul2 .glm model inspection tools")]
struct Cli {
	/// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Header fields, roots and per-LOD totals.
	Info(cmd::info::Args),
	/// Surface tree from the root set.
	Hierarchy(cmd::hierarchy::Args),
	/// Per-LOD surface geometry counts.
	Lods(cmd::lods::Args),
	/// Vertices and triangles of one surface.
	Surface(cmd::surface::Args),
	/// Decode many files and report which fail.
	Check(cmd::check::Args),
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli.command) {
		Ok(code) => code,
		Err(err) => {
			eprintln!("error: {err}");
			ExitCode::FAILURE
		}
	}
}

fn run(command: Commands) -> glmdoc::glm::Result<ExitCode> {
	match command {
		Commands::Info(args) => cmd::info::run(args).map(|()| ExitCode::SUCCESS),
		Commands::Hierarchy(args) => cmd::hierarchy::run(args).map(|()| ExitCode::SUCCESS),
		Commands::Lods(args) => cmd::lods::run(args).map(|()| ExitCode::SUCCESS),
		Commands::Surface(args) => cmd::surface::run(args).map(|()| ExitCode::SUCCESS),
		Commands::Check(args) => Ok(cmd::check::run(args)),
	}
}

fn init_tracing(verbose: u8) {
	let default = match verbose {
		0 => "warn",
		1 => "glmdoc=debug",
		_ => "glmdoc=trace",
	};
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
		.with_writer(std::io::stderr)
		.init();
}
