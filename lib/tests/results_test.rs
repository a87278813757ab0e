#[macro_use]
extern crate assert_matches;

use wordle_autosolver::*;

#[test]
fn get_result_for_guess_correct() -> Result<(), WordleError> {
    let result = get_result_for_guess("abcb", "abcb")?;

    assert_eq!(result.guess.as_ref(), "abcb");
    assert_eq!(result.results, vec![LetterResult::Correct; 4]);
    assert!(result.is_correct());
    Ok(())
}

#[test]
fn get_result_for_guess_partial() -> Result<(), WordleError> {
    let result = get_result_for_guess("mesas", "sassy")?;
    assert_eq!(
        result.results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::NotPresent
        ]
    );
    assert!(!result.is_correct());

    let result = get_result_for_guess("abba", "babb")?;
    assert_eq!(
        result.results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent
        ]
    );

    let result = get_result_for_guess("abcb", "bcce")?;
    assert_eq!(
        result.results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::Correct,
            LetterResult::NotPresent
        ]
    );
    Ok(())
}

#[test]
fn get_result_for_guess_none_match() -> Result<(), WordleError> {
    let result = get_result_for_guess("abcb", "defg")?;

    assert_eq!(result.results, vec![LetterResult::NotPresent; 4]);
    Ok(())
}

#[test]
fn get_result_for_guess_invalid_guess() {
    assert_matches!(
        get_result_for_guess("goal", "guess"),
        Err(WordleError::WordLength(4))
    );
}

#[test]
fn guess_result_letters() {
    let result = GuessResult::new(
        "ab",
        vec![LetterResult::Correct, LetterResult::NotPresent],
    );

    assert_eq!(
        result.letters().collect::<Vec<_>>(),
        vec![('a', LetterResult::Correct), ('b', LetterResult::NotPresent)]
    );
}

#[test]
fn guess_result_with_empty_tiles_is_not_correct() {
    assert!(!GuessResult::new("ab", vec![LetterResult::Correct, LetterResult::Empty]).is_correct());
    assert!(!GuessResult::new("", vec![]).is_correct());
}
