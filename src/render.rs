use crate::feedback::FeedbackSymbol;
use crossterm::style::Stylize;

/// Render one scored guess as a space-separated line of colored tiles:
/// green = correct, yellow = present, grey = absent.
pub fn feedback_line(guess: &str, feedback: &[FeedbackSymbol]) -> String {
    let tiles: Vec<String> = guess
        .chars()
        .zip(feedback.iter())
        .map(|(c, symbol)| {
            let letter = c.to_ascii_uppercase();
            match symbol {
                FeedbackSymbol::Correct => letter.black().on_green().to_string(),
                FeedbackSymbol::Present => letter.black().on_yellow().to_string(),
                FeedbackSymbol::Absent => letter.white().on_dark_grey().to_string(),
            }
        })
        .collect();

    tiles.join(" ")
}
