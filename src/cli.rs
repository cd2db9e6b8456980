#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Read lines from stdin and evaluate each one (the default)
    Repl {
        /// Text shown before each line is read
        #[arg(short, long, default_value = "wtdd> ")]
        prompt: String,
    },

    /// Evaluate a single expression
    Eval {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print the tokens of an expression
    Tokens {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print the syntax tree of an expression
    Ast {
        #[arg(required = true)]
        words: Vec<String>,
    },
}
