use clap::Parser;
use prefixgram_cli::commands::EmitArgs;
use std::process;

fn main() {
    let args = EmitArgs::parse();

    if let Err(err) = args.execute() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
