use crate::results::WordleError;
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

/// Looks up how commonly a word is used. Higher scores are more popular.
///
/// Lookups for several words may be made at the same time, so implementations must be `Sync`.
pub trait PopularityService: Sync {
    /// Returns the popularity score of the given word, or `None` if nothing is known about it.
    fn lookup(&self, word: &str) -> Result<Option<f64>, WordleError>;
}

impl<T: PopularityService + ?Sized> PopularityService for &T {
    fn lookup(&self, word: &str) -> Result<Option<f64>, WordleError> {
        (**self).lookup(word)
    }
}

impl<T: PopularityService + ?Sized> PopularityService for Box<T> {
    fn lookup(&self, word: &str) -> Result<Option<f64>, WordleError> {
        (**self).lookup(word)
    }
}

/// A popularity service that knows nothing, so ties always resolve to the first tied word.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPopularity;

impl PopularityService for NoPopularity {
    fn lookup(&self, _word: &str) -> Result<Option<f64>, WordleError> {
        Ok(None)
    }
}

/// Chooses the next word to guess from a list of candidates.
pub trait GuessRanker {
    /// Selects the best guess from the candidates, or `None` if there are no candidates.
    fn select_best_guess(&self, candidates: &[Arc<str>]) -> Option<Arc<str>>;
}

impl<T: GuessRanker + ?Sized> GuessRanker for &T {
    fn select_best_guess(&self, candidates: &[Arc<str>]) -> Option<Arc<str>> {
        (**self).select_best_guess(candidates)
    }
}

/// Prefers words with the most unique letters, since each new letter rules words in or out.
///
/// If several words share the highest number of unique letters, the most popular of them is
/// chosen according to the given [`PopularityService`]. Words the service knows nothing about
/// score zero, and equally popular words keep their candidate order. If the service fails, the
/// first of the tied words is chosen.
///
/// ```
/// use std::sync::Arc;
/// use wordle_autosolver::GuessRanker;
/// use wordle_autosolver::NoPopularity;
/// use wordle_autosolver::UniqueLettersRanker;
///
/// let ranker = UniqueLettersRanker::new(NoPopularity);
/// let candidates: Vec<Arc<str>> = vec![Arc::from("geese"), Arc::from("crane")];
///
/// assert_eq!(ranker.select_best_guess(&candidates).as_deref(), Some("crane"));
/// ```
#[derive(Clone, Debug)]
pub struct UniqueLettersRanker<P> {
    popularity: P,
}

impl<P: PopularityService> UniqueLettersRanker<P> {
    pub fn new(popularity: P) -> UniqueLettersRanker<P> {
        UniqueLettersRanker { popularity }
    }

    /// Looks up every tied word at once, waiting for all lookups before choosing.
    fn select_most_popular(&self, tied_words: &[Arc<str>]) -> Result<Arc<str>, WordleError> {
        let popularities = tied_words
            .par_iter()
            .map(|word| {
                self.popularity
                    .lookup(word)
                    .map(|maybe_popularity| maybe_popularity.unwrap_or(0.0))
            })
            .collect::<Result<Vec<f64>, WordleError>>()?;
        debug!(
            "Popularity of tied words: {:?}",
            tied_words.iter().zip(&popularities).collect::<Vec<_>>()
        );

        let mut best_index = 0;
        for (index, popularity) in popularities.iter().enumerate() {
            if *popularity > popularities[best_index] {
                best_index = index;
            }
        }
        Ok(Arc::clone(&tied_words[best_index]))
    }
}

impl<P: PopularityService> GuessRanker for UniqueLettersRanker<P> {
    fn select_best_guess(&self, candidates: &[Arc<str>]) -> Option<Arc<str>> {
        let tied_words = words_with_most_unique_letters(candidates);
        if tied_words.len() <= 1 {
            return tied_words.into_iter().next();
        }
        match self.select_most_popular(&tied_words) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!(
                    "Popularity lookup failed, falling back to the first of {} tied words: {}",
                    tied_words.len(),
                    err
                );
                tied_words.into_iter().next()
            }
        }
    }
}

/// Counts the number of distinct letters in the word.
pub fn count_unique_letters(word: &str) -> usize {
    word.chars().collect::<HashSet<char>>().len()
}

/// Returns the words that share the highest number of unique letters, in candidate order.
pub fn words_with_most_unique_letters(candidates: &[Arc<str>]) -> Vec<Arc<str>> {
    let unique_counts: Vec<usize> = candidates
        .iter()
        .map(|word| count_unique_letters(word))
        .collect();
    let Some(max_count) = unique_counts.iter().max().copied() else {
        return Vec::new();
    };
    candidates
        .iter()
        .zip(unique_counts)
        .filter(|(_, count)| *count == max_count)
        .map(|(word, _)| Arc::clone(word))
        .collect()
}
