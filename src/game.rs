use crate::feedback::{score, validate_guess, FeedbackSymbol, GuessError};
use crate::render;
use std::io::{self, BufRead, Write};

pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Terminal state is an explicit flag checked after the bounded loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

/// One scored guess.
#[derive(Clone, Debug)]
pub struct Round {
    pub guess: String,
    pub feedback: Vec<FeedbackSymbol>,
}

/// A single run of the guessing game. The secret is fixed at construction;
/// callers inject their own random source when picking it (see `WordList`).
#[derive(Debug)]
pub struct Game {
    secret: String,
    max_attempts: usize,
    rounds: Vec<Round>,
    status: GameStatus,
}

impl Game {
    pub fn new(secret: String, max_attempts: usize) -> Self {
        Self {
            secret,
            max_attempts,
            rounds: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn word_length(&self) -> usize {
        self.secret.chars().count()
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn attempts_used(&self) -> usize {
        self.rounds.len()
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Score one guess. A wrong-length guess is rejected before scoring and
    /// does not consume an attempt.
    pub fn submit(&mut self, raw: &str) -> Result<&Round, GuessError> {
        debug_assert_eq!(self.status, GameStatus::InProgress);

        let guess = validate_guess(raw, self.word_length())?;
        let feedback = score(&self.secret, &guess);
        let won = guess == self.secret;

        self.rounds.push(Round { guess, feedback });

        self.status = if won {
            GameStatus::Won {
                attempts: self.rounds.len(),
            }
        } else if self.rounds.len() >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        let last = self.rounds.len() - 1;
        Ok(&self.rounds[last])
    }
}

/// Drive a full game over any reader/writer pair.
///
/// The binary passes locked stdin/stdout; tests pass in-memory buffers.
/// Returns the final status; an input stream that ends mid-game leaves the
/// status `InProgress` after revealing the secret.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut out: W,
) -> io::Result<GameStatus> {
    while *game.status() == GameStatus::InProgress {
        write!(
            out,
            "Attempt {}/{}: Enter your guess: ",
            game.attempts_used() + 1,
            game.max_attempts()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(
                out,
                "\nNo more input. The secret word was '{}'.",
                game.secret().to_uppercase()
            )?;
            return Ok(game.status().clone());
        }

        match game.submit(&line) {
            Ok(round) => writeln!(out, "{}", render::feedback_line(&round.guess, &round.feedback))?,
            Err(err) => {
                writeln!(out, "{err}. Try again.")?;
                continue;
            }
        }
    }

    match game.status() {
        GameStatus::Won { attempts } => writeln!(
            out,
            "Congratulations! You guessed the word '{}' correctly in {} attempts!",
            game.secret().to_uppercase(),
            attempts
        )?,
        GameStatus::Lost => writeln!(
            out,
            "Sorry! You've used all {} attempts. The secret word was '{}'.",
            game.max_attempts(),
            game.secret().to_uppercase()
        )?,
        GameStatus::InProgress => {}
    }

    Ok(game.status().clone())
}
