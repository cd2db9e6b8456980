mod cli;

use std::{
    error::Error,
    io::{self, BufRead, Write},
    process,
};

use clap::Parser as _;
use cli::{Cli, Command};
use wtdd::{
    interpret,
    syntax::{Lexer, Parser},
    PResult,
};

const DEFAULT_PROMPT: &str = "wtdd> ";

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(why) = run(cli.command) {
        eprintln!("{why}");
        process::exit(1);
    }
}

fn run(command: Option<Command>) -> Result<(), Box<dyn Error>> {
    match command {
        None => repl(DEFAULT_PROMPT)?,
        Some(Command::Repl { prompt }) => repl(&prompt)?,
        Some(Command::Eval { words }) => println!("{}", interpret(&words.join(" "))?),
        Some(Command::Tokens { words }) => println!("{}", tokens(&words.join(" "))?),
        Some(Command::Ast { words }) => println!("{}", Parser::new(&words.join(" "))?.parse()?),
    }
    Ok(())
}

fn repl(prompt: &str) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{prompt}");
        stdout.flush()?;

        let line = match lines.next() {
            None => break,
            Some(line) => line?,
        };
        if line.trim().is_empty() {
            continue;
        }

        match interpret(&line) {
            Ok(value) => println!("{value}"),
            Err(why) => eprintln!("{why}"),
        }
    }

    println!();
    Ok(())
}

fn tokens(src: &str) -> PResult<String> {
    let lines = Lexer::new(src)
        .map(|token| token.map(|t| t.to_string()))
        .collect::<PResult<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
