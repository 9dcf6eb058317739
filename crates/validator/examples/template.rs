//! Starting point for a command-line tool with validated arguments.
//!
//! ```text
//! cargo run -p argtools-validator --example template -- 2.5 --optional 7
//! cargo run -p argtools-validator --example template -- --usage
//! cargo run -p argtools-validator --example template -- -1
//! RUST_LOG=argtools=debug cargo run -p argtools-validator --example template -- 0
//! ```

use argtools_validator::prelude::*;
use clap::{CommandFactory, Parser};
use num_bigint::BigInt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Template for a command-line tool with validated arguments")]
struct Args {
    /// A strictly positive number
    #[arg(
        required_unless_present = "usage",
        allow_negative_numbers = true,
        value_parser = strictly_positive().into_parser()
    )]
    positional: Option<f64>,

    /// An optional odd integer
    #[arg(short, long, allow_negative_numbers = true, value_parser = odd)]
    optional: Option<BigInt>,

    /// Print the usage line and exit
    #[arg(long, exclusive = true)]
    usage: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.usage {
        println!("{}", Args::command().render_usage());
        std::process::exit(0);
    }

    if let Some(positional) = args.positional {
        println!("positional = {positional}");
    }
    match args.optional {
        Some(optional) => println!("optional = {optional}"),
        None => println!("optional not given"),
    }
}
