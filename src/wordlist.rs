use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;
use thiserror::Error;

static WORDS_DIR: Dir = include_dir!("words");

/// Word lists shipped inside the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinList {
    Classic,
    Large,
}

impl BuiltinList {
    fn file_name(&self) -> &'static str {
        match self {
            BuiltinList::Classic => "classic.txt",
            BuiltinList::Large => "large.txt",
        }
    }
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list '{name}' has no words of length {length}")]
    Empty { name: String, length: usize },
}

/// A flat newline-delimited word list, lowercased on load.
#[derive(Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub words: Vec<String>,
}

impl WordList {
    pub fn builtin(list: BuiltinList) -> Self {
        let file = WORDS_DIR
            .get_file(list.file_name())
            .expect("embedded word list missing");
        let contents = file
            .contents_utf8()
            .expect("embedded word list is not valid utf-8");

        Self::from_contents(list.file_name().trim_end_matches(".txt"), contents)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let contents = std::fs::read_to_string(&path)?;
        let name = path
            .as_ref()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("custom")
            .to_string();

        Ok(Self::from_contents(&name, &contents))
    }

    fn from_contents(name: &str, contents: &str) -> Self {
        let words = contents
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_alphabetic()))
            .collect();

        Self {
            name: name.to_string(),
            words,
        }
    }

    /// Pick one secret word with the caller's random source.
    pub fn choose<R: Rng>(&self, length: usize, rng: &mut R) -> Result<String, WordListError> {
        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|w| w.chars().count() == length)
            .collect();

        candidates
            .choose(rng)
            .map(|w| (*w).clone())
            .ok_or_else(|| WordListError::Empty {
                name: self.name.clone(),
                length,
            })
    }
}
