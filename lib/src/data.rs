use crate::results::WordleError;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// A letter along with its location in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: u8,
}

impl LocatedLetter {
    pub fn new(letter: char, location: u8) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// Contains all the words that may be the objective, in the order they were provided.
#[derive(Clone, Debug)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader, with one word per line.
    ///
    /// See [`WordBank::from_iterator`] for which words are kept.
    pub fn from_reader<R: BufRead>(word_reader: R, word_length: usize) -> Result<Self, WordleError> {
        let lines = word_reader
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()?;
        Ok(WordBank::from_iterator(lines, word_length))
    }

    /// Constructs a new `WordBank` from the given words, keeping only the words of the given
    /// length.
    ///
    /// Each word is trimmed and converted to lower case. Words with characters outside of `a` to
    /// `z`, words of any other length, and duplicates are skipped.
    ///
    /// ```
    /// use wordle_autosolver::WordBank;
    ///
    /// let bank = WordBank::from_iterator(["Crane", "", "cranes", "crane", "slate "], 5);
    /// assert_eq!(bank.len(), 2);
    /// ```
    pub fn from_iterator<I, S>(words: I, word_length: usize) -> WordBank
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let all_words = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim().to_lowercase();
                if !is_supported_word(&word, word_length) || seen.contains(word.as_str()) {
                    return None;
                }
                let word: Arc<str> = Arc::from(word);
                seen.insert(Arc::clone(&word));
                Some(word)
            })
            .collect();
        WordBank {
            all_words,
            word_length,
        }
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of every word in the bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// Returns `true` iff the word has exactly `word_length` letters, all from `a` to `z`.
pub(crate) fn is_supported_word(word: &str, word_length: usize) -> bool {
    word.len() == word_length && word.chars().all(|letter| letter.is_ascii_lowercase())
}
