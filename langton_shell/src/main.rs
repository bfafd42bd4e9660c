mod command;
mod error;
mod logger;
mod render;
mod shell;

use clap::Parser;
use shell::Shell;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "ant", version, about = "Interactive shell for Langton's Ant")]
struct Args {
    /// Print the board with plain glyphs, without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Log engine activity to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Err(error) = logger::init(args.verbose) {
        eprintln!("Could not set up logging: {error}");
    }

    let mut shell = Shell::new(!args.no_color);
    shell.run(io::stdin().lock(), &mut io::stdout(), &mut io::stderr())
}
