use crate::data::LocatedLetter;
use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WordleError;
use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;

/// Defines letter restrictions that a word must adhere to, accumulated from every guess result
/// seen so far.
///
/// Letter multiplicity is not tracked: a letter that is marked `NotPresent` in one place but
/// `Correct` or `PresentNotHere` in another is simply treated as present. Words containing three
/// or more copies of a letter with mixed results may therefore be kept even though Wordle's own
/// rules would exclude them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordRestrictions {
    /// Letters that must occur in specific locations in the word.
    must_contain_here: Vec<Option<char>>,
    /// Letters that must be present, but must be somewhere else in the word.
    must_contain_but_not_here: HashSet<LocatedLetter>,
    /// Letters that must not be in the word.
    must_not_contain: HashSet<char>,
}

impl WordRestrictions {
    /// Creates a `WordRestrictions` object for the given word length with all letters unknown.
    pub fn new(word_length: usize) -> WordRestrictions {
        WordRestrictions {
            must_contain_here: vec![None; word_length],
            must_contain_but_not_here: HashSet::new(),
            must_not_contain: HashSet::new(),
        }
    }

    /// Returns the restrictions imposed by the given result.
    pub fn from_result(result: &GuessResult) -> Result<WordRestrictions, WordleError> {
        let mut restrictions = WordRestrictions::new(result.results.len());
        restrictions.update(result)?;
        Ok(restrictions)
    }

    pub fn word_length(&self) -> usize {
        self.must_contain_here.len()
    }

    /// Adds restrictions arising from the given guess result.
    ///
    /// `Correct` and `PresentNotHere` results are applied before `NotPresent` results, so a
    /// repeated letter that is only partly absent is never recorded as absent. `Empty` results are
    /// ignored. Applying the same result twice has no further effect.
    ///
    /// If the result is inconsistent with the known restrictions, an error is returned and these
    /// restrictions are left unchanged.
    pub fn update(&mut self, guess_result: &GuessResult) -> Result<(), WordleError> {
        let word_length = self.word_length();
        if guess_result.results.len() != word_length
            || guess_result.guess.chars().count() != word_length
        {
            return Err(WordleError::WordLength(word_length));
        }
        if let Some(letter) = guess_result
            .guess
            .chars()
            .find(|letter| !letter.is_ascii_lowercase())
        {
            return Err(WordleError::UnsupportedCharacter(letter));
        }

        let mut updated = self.clone();
        for (index, (letter, result)) in guess_result.letters().enumerate() {
            match result {
                LetterResult::Correct => updated.set_letter_here(letter, index)?,
                LetterResult::PresentNotHere => {
                    updated.set_letter_present_not_here(letter, index)?
                }
                _ => {}
            }
        }
        for (letter, result) in guess_result.letters() {
            if result == LetterResult::NotPresent {
                updated.set_letter_not_present(letter);
            }
        }
        *self = updated;
        Ok(())
    }

    /// Records that the letter must be at the given location.
    pub fn set_letter_here(&mut self, letter: char, location: usize) -> Result<(), WordleError> {
        let located_letter = self.located_letter(letter, location)?;
        let word_length = self.word_length();
        let known = self
            .must_contain_here
            .get_mut(location)
            .ok_or(WordleError::WordLength(word_length))?;
        match *known {
            Some(known_letter) if known_letter == letter => return Ok(()),
            Some(_) => return Err(WordleError::InvalidResults),
            None => {}
        }
        if self
            .must_contain_but_not_here
            .contains(&located_letter)
        {
            return Err(WordleError::InvalidResults);
        }
        *known = Some(letter);
        self.must_not_contain.remove(&letter);
        Ok(())
    }

    /// Records that the letter is in the word, but not at the given location.
    pub fn set_letter_present_not_here(
        &mut self,
        letter: char,
        location: usize,
    ) -> Result<(), WordleError> {
        match self.must_contain_here.get(location) {
            None => return Err(WordleError::WordLength(self.word_length())),
            Some(Some(known_letter)) if *known_letter == letter => {
                return Err(WordleError::InvalidResults)
            }
            _ => {}
        }
        let located_letter = self.located_letter(letter, location)?;
        self.must_contain_but_not_here.insert(located_letter);
        self.must_not_contain.remove(&letter);
        Ok(())
    }

    /// Records that the letter is not in the word, unless it is already known to be present.
    pub fn set_letter_not_present(&mut self, letter: char) {
        if !self.is_known_present(letter) {
            self.must_not_contain.insert(letter);
        }
    }

    fn located_letter(&self, letter: char, location: usize) -> Result<LocatedLetter, WordleError> {
        u8::try_from(location)
            .map(|location| LocatedLetter::new(letter, location))
            .map_err(|_| WordleError::WordLength(self.word_length()))
    }

    /// Returns the letter that must be at the given location, if known.
    pub fn letter_here(&self, location: usize) -> Option<char> {
        self.must_contain_here.get(location).copied().flatten()
    }

    /// Returns the letters that are in the word, along with a location where they must not be.
    pub fn present_not_here(&self) -> impl Iterator<Item = &LocatedLetter> {
        self.must_contain_but_not_here.iter()
    }

    /// Returns `true` if the letter has been marked absent.
    pub fn is_not_present(&self, letter: char) -> bool {
        self.must_not_contain.contains(&letter)
    }

    /// Returns `true` if the letter is known to be somewhere in the word.
    pub fn is_known_present(&self, letter: char) -> bool {
        self.must_contain_here.contains(&Some(letter))
            || self
                .must_contain_but_not_here
                .iter()
                .any(|ll| ll.letter == letter)
    }

    /// Returns `true` if nothing is known yet.
    pub fn is_empty(&self) -> bool {
        self.must_contain_here.iter().all(Option::is_none)
            && self.must_contain_but_not_here.is_empty()
            && self.must_not_contain.is_empty()
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        letters.len() == self.word_length()
            && letters.iter().enumerate().all(|(index, letter)| {
                self.must_contain_here[index].map_or(true, |known| known == *letter)
                    && (!self.must_not_contain.contains(letter) || self.is_known_present(*letter))
            })
            && self.must_contain_but_not_here.iter().all(|ll| {
                letters[ll.location as usize] != ll.letter && letters.contains(&ll.letter)
            })
    }
}

/// Gets the words that meet the given restrictions, in their original order.
pub fn get_possible_words(restrictions: &WordRestrictions, words: &[Arc<str>]) -> Vec<Arc<str>> {
    words
        .iter()
        .filter(|word| restrictions.is_satisfied_by(word))
        .map(Arc::clone)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_restrictions_is_satisfied_by_no_restrictions() {
        let restrictions = WordRestrictions::new(4);

        assert!(restrictions.is_satisfied_by("abcd"));
        assert!(restrictions.is_satisfied_by("zzzz"));

        // Wrong length
        assert_eq!(restrictions.is_satisfied_by(""), false);
        assert_eq!(restrictions.is_satisfied_by("abcde"), false);
    }

    #[test]
    fn word_restrictions_is_satisfied_by_with_restrictions() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::new(4);

        restrictions.update(&GuessResult::new(
            "abbc",
            vec![
                LetterResult::PresentNotHere,
                LetterResult::PresentNotHere,
                LetterResult::Correct,
                LetterResult::NotPresent,
            ],
        ))?;

        assert!(restrictions.is_satisfied_by("bdba"));
        assert!(restrictions.is_satisfied_by("dabb"));

        assert_eq!(restrictions.is_satisfied_by("bbba"), false);
        assert_eq!(restrictions.is_satisfied_by("bcba"), false);
        assert_eq!(restrictions.is_satisfied_by("adbd"), false);
        assert_eq!(restrictions.is_satisfied_by("bdbd"), false);
        Ok(())
    }

    #[test]
    fn word_restrictions_partly_absent_letter_stays_present() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::new(5);

        // The first 'e' is absent, but the second is present.
        restrictions.update(&GuessResult::new(
            "geese",
            vec![
                LetterResult::NotPresent,
                LetterResult::NotPresent,
                LetterResult::PresentNotHere,
                LetterResult::NotPresent,
                LetterResult::NotPresent,
            ],
        ))?;

        assert!(!restrictions.is_not_present('e'));
        assert!(restrictions.is_not_present('g'));
        assert!(restrictions.is_not_present('s'));
        assert!(restrictions.is_satisfied_by("level"));
        assert_eq!(restrictions.is_satisfied_by("tweet"), false);
        assert_eq!(restrictions.is_satisfied_by("lunar"), false);
        Ok(())
    }

    #[test]
    fn word_restrictions_later_evidence_overrides_absence() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::new(5);
        restrictions.set_letter_not_present('x');
        assert!(restrictions.is_not_present('x'));

        restrictions.set_letter_present_not_here('x', 1)?;

        assert!(!restrictions.is_not_present('x'));
        assert!(restrictions.is_known_present('x'));
        Ok(())
    }

    #[test]
    fn word_restrictions_update_is_idempotent() -> Result<(), WordleError> {
        let result = GuessResult::new(
            "crane",
            vec![
                LetterResult::NotPresent,
                LetterResult::PresentNotHere,
                LetterResult::Correct,
                LetterResult::NotPresent,
                LetterResult::NotPresent,
            ],
        );
        let once = WordRestrictions::from_result(&result)?;
        let mut twice = once.clone();

        twice.update(&result)?;

        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn word_restrictions_ignores_empty_results() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::new(5);

        restrictions.update(&GuessResult::new("crane", vec![LetterResult::Empty; 5]))?;

        assert!(restrictions.is_empty());
        Ok(())
    }

    #[test]
    fn word_restrictions_conflicting_correct_letter_errors() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::new(3);
        restrictions.set_letter_here('a', 0)?;

        assert!(matches!(
            restrictions.set_letter_here('b', 0),
            Err(WordleError::InvalidResults)
        ));
        assert_eq!(restrictions.letter_here(0), Some('a'));
        Ok(())
    }

    #[test]
    fn word_restrictions_present_where_correct_errors() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::new(3);
        restrictions.set_letter_here('a', 0)?;

        assert!(matches!(
            restrictions.set_letter_present_not_here('a', 0),
            Err(WordleError::InvalidResults)
        ));
        assert!(matches!(
            restrictions.set_letter_present_not_here('a', 3),
            Err(WordleError::WordLength(3))
        ));
        Ok(())
    }

    #[test]
    fn word_restrictions_failed_update_leaves_restrictions_unchanged() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::new(3);
        restrictions.set_letter_here('a', 0)?;
        let before = restrictions.clone();

        let result = restrictions.update(&GuessResult::new(
            "bcd",
            vec![
                LetterResult::Correct,
                LetterResult::NotPresent,
                LetterResult::NotPresent,
            ],
        ));

        assert!(matches!(result, Err(WordleError::InvalidResults)));
        assert_eq!(restrictions, before);
        Ok(())
    }

    #[test]
    fn word_restrictions_update_wrong_length_errors() {
        let mut restrictions = WordRestrictions::new(5);

        assert!(matches!(
            restrictions.update(&GuessResult::new("abc", vec![LetterResult::Correct; 3])),
            Err(WordleError::WordLength(5))
        ));
    }

    #[test]
    fn word_restrictions_update_unsupported_character_errors() {
        let mut restrictions = WordRestrictions::new(3);

        assert!(matches!(
            restrictions.update(&GuessResult::new("aB1", vec![LetterResult::Correct; 3])),
            Err(WordleError::UnsupportedCharacter('B'))
        ));
    }

    #[test]
    fn get_possible_words_preserves_order() {
        let words: Vec<Arc<str>> = ["worda", "other", "wordb", "smore"]
            .into_iter()
            .map(Arc::from)
            .collect();
        let mut restrictions = WordRestrictions::new(5);
        restrictions.set_letter_not_present('t');

        let possible_words = get_possible_words(&restrictions, &words);

        assert_eq!(
            possible_words
                .iter()
                .map(|word| word.as_ref())
                .collect::<Vec<&str>>(),
            vec!["worda", "wordb", "smore"]
        );
    }

    #[test]
    fn word_restrictions_locations_past_u8_error() -> Result<(), WordleError> {
        let mut restrictions = WordRestrictions::new(300);

        restrictions.set_letter_present_not_here('a', 255)?;
        assert!(matches!(
            restrictions.set_letter_present_not_here('a', 256),
            Err(WordleError::WordLength(300))
        ));
        assert!(matches!(
            restrictions.set_letter_here('b', 256),
            Err(WordleError::WordLength(300))
        ));
        // Location 256 must not be mistaken for location 0.
        restrictions.set_letter_here('a', 0)?;
        assert_eq!(restrictions.present_not_here().count(), 1);
        Ok(())
    }
}
