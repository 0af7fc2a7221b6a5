use clap::Parser;
use etfsim::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
