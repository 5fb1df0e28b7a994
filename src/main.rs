use std::process;

use clap::Parser;

use partcount::cli::Args;

fn main() {
    let args = Args::parse();
    partcount::init_logging(args.debug);
    match partcount::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(3);
        }
    }
}
