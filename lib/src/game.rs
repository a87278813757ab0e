use crate::board::Board;
use crate::engine::BoardObserver;
use crate::engine::SubmissionTiming;
use crate::engine::Submitter;
use crate::results::*;
use log::debug;
use std::collections::HashSet;
use std::thread;

/// A game of Wordle played in memory against a known objective word.
///
/// Guesses that are not in the accepted words, or that don't have the right length, leave the
/// board unchanged, just as a real game ignores words it does not know.
#[derive(Clone, Debug)]
pub struct SimulatedGame {
    objective: String,
    accepted_words: Option<HashSet<String>>,
    max_rows: usize,
    board: Board,
    submissions: Vec<String>,
}

impl SimulatedGame {
    /// Creates a game with an empty board that accepts any word.
    pub fn new(objective: &str) -> SimulatedGame {
        SimulatedGame {
            objective: objective.trim().to_lowercase(),
            accepted_words: None,
            max_rows: 6,
            board: Board::default(),
            submissions: Vec::new(),
        }
    }

    /// Only accepts the given words as guesses.
    pub fn with_accepted_words<I, S>(mut self, words: I) -> SimulatedGame
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.accepted_words = Some(
            words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .collect(),
        );
        self
    }

    /// Sets the number of rows on the board. Once every row is used, guesses are ignored.
    pub fn with_max_rows(mut self, max_rows: usize) -> SimulatedGame {
        self.max_rows = max_rows;
        self
    }

    /// Fills the board with the results of the given guesses, as if they were already played.
    pub fn with_previous_guesses<I, S>(mut self, guesses: I) -> Result<SimulatedGame, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for guess in guesses {
            let result = get_result_for_guess(&self.objective, guess.as_ref())?;
            self.board.push_result(&result);
        }
        Ok(self)
    }

    /// Every word submitted so far, accepted or not.
    pub fn submissions(&self) -> &[String] {
        &self.submissions
    }

    fn accepts(&self, word: &str) -> bool {
        self.accepted_words
            .as_ref()
            .map_or(true, |accepted_words| accepted_words.contains(word))
    }

    fn is_over(&self) -> bool {
        self.board.rows.len() >= self.max_rows
            || self
                .board
                .latest_result()
                .map_or(false, |result| result.is_correct())
    }
}

impl BoardObserver for SimulatedGame {
    fn read_board(&self) -> Board {
        self.board.clone()
    }
}

impl Submitter for SimulatedGame {
    fn submit(&mut self, word: &str, timing: &SubmissionTiming) {
        self.submissions.push(word.to_string());
        thread::sleep(timing.keypress_delay * word.chars().count() as u32);

        if self.is_over() {
            debug!("The game is over, ignoring {:?}.", word);
        } else if !self.accepts(word) {
            debug!("{:?} is not an accepted word.", word);
        } else {
            match get_result_for_guess(&self.objective, word) {
                Ok(result) => self.board.push_result(&result),
                Err(err) => debug!("Ignoring {:?}: {}", word, err),
            }
        }

        thread::sleep(timing.submission_delay);
    }
}
