use crate::engine::DictionarySource;
use crate::ranking::PopularityService;
use crate::results::WordleError;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;

/// A dictionary stored in a file, either with one word per line or as a JSON array of strings.
#[derive(Clone, Debug)]
pub struct WordListFile {
    path: PathBuf,
}

impl WordListFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> WordListFile {
        WordListFile { path: path.into() }
    }
}

impl DictionarySource for WordListFile {
    fn fetch_all(&self) -> Result<Vec<String>, WordleError> {
        let contents = fs::read_to_string(&self.path).map_err(|err| {
            WordleError::SourceUnavailable(format!("{}: {}", self.path.display(), err))
        })?;
        parse_word_list(&contents)
    }
}

/// Parses a JSON array of strings, or else one word per line.
///
/// ```
/// use wordle_autosolver::parse_word_list;
///
/// assert_eq!(parse_word_list("[\"crane\", \"slate\"]").unwrap(), vec!["crane", "slate"]);
/// assert_eq!(parse_word_list("crane\nslate\n").unwrap(), vec!["crane", "slate"]);
/// ```
pub fn parse_word_list(contents: &str) -> Result<Vec<String>, WordleError> {
    if contents.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(contents)?);
    }
    Ok(contents.lines().map(str::to_string).collect())
}

/// A dictionary that is already in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticWords {
    words: Vec<String>,
}

impl StaticWords {
    pub fn new<I, S>(words: I) -> StaticWords
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StaticWords {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_string())
                .collect(),
        }
    }
}

impl DictionarySource for StaticWords {
    fn fetch_all(&self) -> Result<Vec<String>, WordleError> {
        Ok(self.words.clone())
    }
}

/// Word popularity scores held in memory.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    frequencies: HashMap<String, f64>,
}

impl FrequencyTable {
    /// Reads `word score` lines, where the score may be tagged as `f:<score>`.
    ///
    /// Lines that can't be parsed are skipped.
    ///
    /// ```
    /// use std::io::Cursor;
    /// use wordle_autosolver::FrequencyTable;
    /// use wordle_autosolver::PopularityService;
    ///
    /// let table = FrequencyTable::from_reader(Cursor::new("crane f:3.61\nslate 1.2\n")).unwrap();
    /// assert_eq!(table.lookup("crane").unwrap(), Some(3.61));
    /// assert_eq!(table.lookup("vinyl").unwrap(), None);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<FrequencyTable, WordleError> {
        let mut frequencies = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            match parse_frequency_line(&line) {
                Some((word, frequency)) => {
                    frequencies.insert(word, frequency);
                }
                None if line.trim().is_empty() => {}
                None => debug!("Skipping frequency line {:?}", line),
            }
        }
        Ok(FrequencyTable { frequencies })
    }

    pub fn from_iterator<I, S>(frequencies: I) -> FrequencyTable
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        FrequencyTable {
            frequencies: frequencies
                .into_iter()
                .map(|(word, frequency)| (word.as_ref().to_lowercase(), frequency))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl PopularityService for FrequencyTable {
    fn lookup(&self, word: &str) -> Result<Option<f64>, WordleError> {
        Ok(self.frequencies.get(word).copied())
    }
}

fn parse_frequency_line(line: &str) -> Option<(String, f64)> {
    let mut parts = line.split_whitespace();
    let word = parts.next()?;
    let score = parts.next()?;
    let score = score.strip_prefix("f:").unwrap_or(score);
    let frequency = score.parse::<f64>().ok().filter(|frequency| frequency.is_finite())?;
    Some((word.to_lowercase(), frequency))
}
