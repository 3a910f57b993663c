use thiserror::Error;

/// Per-position classification of a guessed letter against the secret word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackSymbol {
    /// Right letter, right position.
    Correct,
    /// Letter occurs somewhere else in the secret.
    Present,
    /// Letter does not occur in the secret at all.
    Absent,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("word length must be exactly {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Check a raw guess against the expected word length.
///
/// This is the only recoverable input error in the game; callers report it
/// and re-prompt without consuming an attempt.
pub fn validate_guess(raw: &str, expected_len: usize) -> Result<String, GuessError> {
    let guess = raw.trim().to_lowercase();
    let actual = guess.chars().count();

    if actual != expected_len {
        return Err(GuessError::WrongLength {
            expected: expected_len,
            actual,
        });
    }

    Ok(guess)
}

/// Score a guess against the secret, one symbol per position.
///
/// A position is `Correct` when the characters match, `Present` when the
/// guessed letter occurs anywhere in the secret, and `Absent` otherwise.
/// Letter counts are not exhausted: a repeated guess letter can mark
/// `Present` more times than it occurs in the secret.
///
/// Callers must have verified that `guess` and `secret` have equal length.
pub fn score(secret: &str, guess: &str) -> Vec<FeedbackSymbol> {
    debug_assert_eq!(secret.chars().count(), guess.chars().count());

    guess
        .chars()
        .zip(secret.chars())
        .map(|(g, s)| {
            if g == s {
                FeedbackSymbol::Correct
            } else if secret.contains(g) {
                FeedbackSymbol::Present
            } else {
                FeedbackSymbol::Absent
            }
        })
        .collect()
}
