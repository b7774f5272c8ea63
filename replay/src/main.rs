//! Replays a script of map and tag set updates and prints the result in declaration order.
use std::{
    ffi::OsString,
    io::{Read, Write},
};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

mod replay;
mod script;

use replay::Replay;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to replay, or `-` to read from stdin.
    input: OsString,
    /// Print the map as a JSON object instead of `key = value` lines.
    #[clap(long)]
    json: bool,
    /// Print at most this many entries.
    #[clap(short = 'n', long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    ordered_logger::setup();

    let source = if args.input == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .wrap_err("failed to read script from stdin")?;
        source
    } else {
        std::fs::read_to_string(&args.input)
            .wrap_err_with(|| format!("failed to read {:?}", args.input))?
    };

    let lines = script::parse(&source)?;

    let mut replay = Replay::default();
    replay.run(&lines);

    let mut stdout = std::io::stdout().lock();
    if args.json {
        writeln!(stdout, "{}", replay.to_json(args.limit))?;
    } else {
        replay.write_text(&mut stdout, args.limit)?;
    }
    Ok(())
}
