use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::io::{self, BufReader};
use std::path::PathBuf;
use wordfall::game::{run_session, Game, DEFAULT_MAX_ATTEMPTS};
use wordfall::wordlist::{BuiltinList, WordList};

/// command-line word-guessing game with colored per-letter feedback
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// word length to play with
    #[clap(short = 'n', long, default_value_t = 5)]
    length: usize,

    /// number of guesses before the game is lost
    #[clap(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// built-in word list to draw the secret from
    #[clap(short = 'l', long, value_enum, default_value_t = ListChoice::Classic)]
    list: ListChoice,

    /// newline-delimited word file to use instead of a built-in list
    #[clap(short = 'w', long)]
    words: Option<PathBuf>,

    /// seed for secret selection, for reproducible games
    #[clap(short = 's', long)]
    seed: Option<u64>,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum ListChoice {
    Classic,
    Large,
}

impl ListChoice {
    fn as_builtin(&self) -> BuiltinList {
        match self {
            ListChoice::Classic => BuiltinList::Classic,
            ListChoice::Large => BuiltinList::Large,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let list = match &cli.words {
        Some(path) => WordList::from_path(path)?,
        None => WordList::builtin(cli.list.as_builtin()),
    };
    log::debug!("list '{}' holds {} words", list.name, list.words.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let secret = list.choose(cli.length, &mut rng)?;

    println!("Welcome to Command-Line Wordle!");
    println!(
        "You have {} attempts to guess the {}-letter word.\n",
        cli.attempts, cli.length
    );

    let mut game = Game::new(secret, cli.attempts);
    run_session(&mut game, BufReader::new(io::stdin()), io::stdout())?;

    Ok(())
}
