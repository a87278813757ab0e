#[macro_use]
extern crate assert_matches;

use wordle_autosolver::*;

use std::env;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

fn write_temp_file(name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = env::temp_dir().join(format!("wordle-autosolver-{}-{}", std::process::id(), name));
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn word_list_file_lines() -> Result<(), WordleError> {
    let path = write_temp_file("lines.txt", "crane\nSlate\n\nvinyl\n")?;

    let words = WordListFile::new(&path).fetch_all();
    fs::remove_file(&path)?;

    assert_eq!(words?, vec!["crane", "Slate", "", "vinyl"]);
    Ok(())
}

#[test]
fn word_list_file_json() -> Result<(), WordleError> {
    let path = write_temp_file("words.json", "  [\"crane\", \"slate\"]\n")?;

    let words = WordListFile::new(&path).fetch_all();
    fs::remove_file(&path)?;

    assert_eq!(words?, vec!["crane", "slate"]);
    Ok(())
}

#[test]
fn word_list_file_missing() {
    let source = WordListFile::new("this/file/does/not/exist.txt");

    assert_matches!(source.fetch_all(), Err(WordleError::SourceUnavailable(_)));
}

#[test]
fn parse_word_list_not_strings_errors() {
    assert_matches!(parse_word_list("[1, 2, 3]"), Err(WordleError::Json(_)));
}

#[test]
fn static_words_returns_every_word() -> Result<(), WordleError> {
    let source = StaticWords::new(vec!["crane".to_string(), "hi".to_string()]);

    assert_eq!(source.fetch_all()?, vec!["crane", "hi"]);
    Ok(())
}

#[test]
fn frequency_table_from_reader() -> Result<(), WordleError> {
    let table = FrequencyTable::from_reader(Cursor::new(
        "crane f:3.61\nSLATE 12\n\nnot-a-line\nvinyl f:nope\n",
    ))?;

    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("crane")?, Some(3.61));
    assert_eq!(table.lookup("slate")?, Some(12.0));
    assert_eq!(table.lookup("vinyl")?, None);
    Ok(())
}

#[test]
fn frequency_table_empty() -> Result<(), WordleError> {
    let table = FrequencyTable::from_reader(Cursor::new(""))?;

    assert!(table.is_empty());
    assert_eq!(NoPopularity.lookup("crane")?, None);
    Ok(())
}
