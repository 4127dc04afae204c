use clap::Parser;
use dotenv::dotenv;
use homesort::cli::{Cli, run_cli};
use std::process;

fn main() {
    // Make values from a local .env file visible before the configuration is
    // resolved; the core only reads the process environment.
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run_cli(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
