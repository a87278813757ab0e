use std::collections::HashMap;
use std::iter::zip;
use std::sync::Arc;
use thiserror::Error;

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
    /// The game has not evaluated this tile (yet).
    Empty,
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word or a result did not have the expected length, which is provided.
    #[error("words must have exactly {0} letters")]
    WordLength(usize),
    /// The given results contradict what is already known about the objective word.
    #[error("the given results are inconsistent with earlier results")]
    InvalidResults,
    /// A guess or result included a letter outside of `a` to `z`.
    #[error("unsupported character {0:?}: only 'a' to 'z' are supported")]
    UnsupportedCharacter(char),
    /// The solver was configured with values it cannot play with.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A dictionary or popularity source could not provide its data.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The result of a single word guess.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessResult {
    pub guess: Arc<str>,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl GuessResult {
    pub fn new(guess: &str, results: Vec<LetterResult>) -> GuessResult {
        GuessResult {
            guess: Arc::from(guess),
            results,
        }
    }

    /// Returns `true` iff every letter of the guess was correct.
    pub fn is_correct(&self) -> bool {
        !self.results.is_empty()
            && self
                .results
                .iter()
                .all(|result| *result == LetterResult::Correct)
    }

    /// Iterates over each letter of the guess along with its result.
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        zip(self.guess.chars(), self.results.iter().copied())
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Repeated letters are scored the way Wordle does it: correct letters are matched first, then
/// each remaining letter is `PresentNotHere` only while unmatched copies of it remain in the
/// objective.
///
/// ```
/// use wordle_autosolver::get_result_for_guess;
/// use wordle_autosolver::LetterResult;
///
/// let result = get_result_for_guess("mesas", "sassy").unwrap();
/// assert_eq!(
///     result.results,
///     vec![
///         LetterResult::PresentNotHere,
///         LetterResult::PresentNotHere,
///         LetterResult::Correct,
///         LetterResult::NotPresent,
///         LetterResult::NotPresent,
///     ]
/// );
/// ```
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<GuessResult, WordleError> {
    let objective_letters: Vec<char> = objective.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if objective_letters.len() != guess_letters.len() {
        return Err(WordleError::WordLength(objective_letters.len()));
    }

    let mut results = vec![LetterResult::NotPresent; guess_letters.len()];
    let mut num_unmatched_by_letter: HashMap<char, usize> = HashMap::new();
    for (index, (objective_letter, guess_letter)) in
        zip(&objective_letters, &guess_letters).enumerate()
    {
        if objective_letter == guess_letter {
            results[index] = LetterResult::Correct;
        } else {
            *num_unmatched_by_letter.entry(*objective_letter).or_insert(0) += 1;
        }
    }
    for (index, letter) in guess_letters.iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(num_unmatched) = num_unmatched_by_letter.get_mut(letter) {
            if *num_unmatched > 0 {
                *num_unmatched -= 1;
                results[index] = LetterResult::PresentNotHere;
            }
        }
    }

    Ok(GuessResult::new(guess, results))
}
