use crate::board::Board;
use crate::data::is_supported_word;
use crate::data::WordBank;
use crate::ranking::GuessRanker;
use crate::restrictions::get_possible_words;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;

/// Provides the full list of words that the objective may be drawn from.
pub trait DictionarySource {
    /// Fetches every known word. Words of other lengths may be included; they are skipped.
    fn fetch_all(&self) -> Result<Vec<String>, WordleError>;
}

/// Reads the current state of the game board.
pub trait BoardObserver {
    fn read_board(&self) -> Board;
}

/// Enters guesses into the game.
pub trait Submitter {
    /// Submits the given word, returning once the game has finished reacting to it.
    ///
    /// There is no direct result: whether the game accepted the word can only be seen by reading
    /// the board before and after.
    fn submit(&mut self, word: &str, timing: &SubmissionTiming);
}

/// Timing used when entering guesses into the game. Only submitters read these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmissionTiming {
    /// The delay between each typed letter.
    pub keypress_delay: Duration,
    /// How long the game takes to show the result of a submitted guess.
    pub submission_delay: Duration,
}

/// The longest word that letter locations can describe.
pub const MAX_WORD_LENGTH: usize = u8::MAX as usize + 1;

/// Configures a [`SolverSession`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// The maximum number of guesses to submit, including rejected guesses.
    pub max_attempts: u32,
    pub word_length: usize,
    /// The first guess to make when the board is empty.
    pub opening_guess: String,
    pub keypress_delay: Duration,
    pub submission_delay: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_attempts: 6,
            word_length: 5,
            opening_guess: "crane".to_string(),
            keypress_delay: Duration::from_millis(50),
            submission_delay: Duration::from_millis(3500),
        }
    }
}

impl SolverConfig {
    /// Checks that a session can be run with this config.
    pub fn validate(&self) -> Result<(), WordleError> {
        if self.max_attempts == 0 {
            return Err(WordleError::InvalidConfig(
                "at least one attempt is required".to_string(),
            ));
        }
        if self.word_length == 0 {
            return Err(WordleError::InvalidConfig(
                "words must have at least one letter".to_string(),
            ));
        }
        if self.word_length > MAX_WORD_LENGTH {
            return Err(WordleError::InvalidConfig(format!(
                "words can have at most {} letters",
                MAX_WORD_LENGTH
            )));
        }
        if let Some(letter) = self
            .opening_guess
            .chars()
            .find(|letter| !letter.is_ascii_lowercase())
        {
            return Err(WordleError::UnsupportedCharacter(letter));
        }
        if !is_supported_word(&self.opening_guess, self.word_length) {
            return Err(WordleError::WordLength(self.word_length));
        }
        Ok(())
    }

    pub fn timing(&self) -> SubmissionTiming {
        SubmissionTiming {
            keypress_delay: self.keypress_delay,
            submission_delay: self.submission_delay,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    /// The latest row on the board is entirely correct.
    Won,
    /// Every allowed attempt was used without finding the objective.
    Exhausted,
    /// No known word is consistent with the board. Either the dictionary is missing the objective,
    /// or the board contradicted itself.
    OutOfCandidates,
}

/// A single submitted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttemptRecord {
    pub guess: Arc<str>,
    /// The result shown on the board, or empty if the guess was rejected.
    pub results: Vec<LetterResult>,
    /// Whether the game accepted the guess as a real word.
    pub accepted: bool,
}

/// The outcome of a [`SolverSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionReport {
    pub status: SessionStatus,
    /// The last guess on the board, if any.
    pub final_guess: Option<Arc<str>>,
    pub attempts: Vec<AttemptRecord>,
}

/// Everything a session knows between two attempts.
#[derive(Debug, Clone)]
pub struct SolveState {
    /// Restrictions from every accepted guess so far.
    pub restrictions: WordRestrictions,
    /// Every word that is still consistent with the restrictions and has not been rejected.
    pub candidates: Vec<Arc<str>>,
    pub attempts: Vec<AttemptRecord>,
    /// Set while the opening guess has not yet been used on an empty board.
    pub use_opening_guess: bool,
    /// The guess chosen after a rejection, to be submitted next.
    pub fallback_guess: Option<Arc<str>>,
    /// The last guess on the board, if any.
    pub final_guess: Option<Arc<str>>,
}

impl SolveState {
    fn finish(self, status: SessionStatus) -> Transition {
        info!(
            "Session finished as {:?} after {} attempts",
            status,
            self.attempts.len()
        );
        Transition::Finished(SessionReport {
            status,
            final_guess: self.final_guess,
            attempts: self.attempts,
        })
    }
}

/// The result of advancing a session by one step.
#[derive(Debug, Clone)]
pub enum Transition {
    Continue(SolveState),
    Finished(SessionReport),
}

/// Plays a game of Wordle through a [`BoardObserver`] and [`Submitter`], using the words from the
/// given [`DictionarySource`] and guesses chosen by the given [`GuessRanker`].
///
/// ```
/// use wordle_autosolver::*;
/// use std::time::Duration;
///
/// let session = SolverSession::new(
///     StaticWords::new(["crane", "slate", "vinyl"]),
///     UniqueLettersRanker::new(NoPopularity),
/// );
/// let config = SolverConfig {
///     keypress_delay: Duration::ZERO,
///     submission_delay: Duration::ZERO,
///     ..SolverConfig::default()
/// };
/// let mut game = SimulatedGame::new("vinyl");
///
/// let report = session.run(&config, &mut game).unwrap();
/// assert_eq!(report.status, SessionStatus::Won);
/// assert_eq!(report.final_guess.as_deref(), Some("vinyl"));
/// ```
pub struct SolverSession<D, R> {
    dictionary: D,
    ranker: R,
}

impl<D, R> SolverSession<D, R>
where
    D: DictionarySource,
    R: GuessRanker,
{
    pub fn new(dictionary: D, ranker: R) -> SolverSession<D, R> {
        SolverSession { dictionary, ranker }
    }

    /// Plays until the game is won, the attempts run out, or no candidates remain.
    ///
    /// Only an invalid config is returned as an error. Every problem met while playing is either
    /// recovered from or reported as the session's status.
    pub fn run<G>(&self, config: &SolverConfig, game: &mut G) -> Result<SessionReport, WordleError>
    where
        G: BoardObserver + Submitter,
    {
        config.validate()?;
        let mut transition = self.start(config, game);
        loop {
            match transition {
                Transition::Continue(state) => transition = self.step(config, state, game),
                Transition::Finished(report) => return Ok(report),
            }
        }
    }

    /// Loads the dictionary and applies every guess already on the board.
    pub fn start<B: BoardObserver>(&self, config: &SolverConfig, observer: &B) -> Transition {
        let words = self.dictionary.fetch_all().unwrap_or_else(|err| {
            warn!("Failed to fetch the dictionary: {}", err);
            Vec::new()
        });
        let bank = WordBank::from_iterator(words, config.word_length);
        info!(
            "There are {} possible words of length {}.",
            bank.len(),
            bank.word_length()
        );

        let board = observer.read_board();
        let mut state = SolveState {
            restrictions: WordRestrictions::new(bank.word_length()),
            candidates: Vec::new(),
            attempts: Vec::new(),
            use_opening_guess: board.is_empty(),
            fallback_guess: None,
            final_guess: None,
        };
        if bank.is_empty() {
            return state.finish(SessionStatus::OutOfCandidates);
        }
        for result in board.evaluated_rows() {
            state.final_guess = Some(Arc::clone(&result.guess));
            if result.is_correct() {
                return state.finish(SessionStatus::Won);
            }
            if let Err(err) = state.restrictions.update(&result) {
                warn!("Could not apply {} from the board: {}", result.guess, err);
                return state.finish(SessionStatus::OutOfCandidates);
            }
        }
        state.candidates = get_possible_words(&state.restrictions, &bank);
        debug!("{} candidates match the board.", state.candidates.len());
        if state.candidates.is_empty() {
            return state.finish(SessionStatus::OutOfCandidates);
        }
        Transition::Continue(state)
    }

    /// Selects, submits and interprets a single guess.
    pub fn step<G>(&self, config: &SolverConfig, mut state: SolveState, game: &mut G) -> Transition
    where
        G: BoardObserver + Submitter,
    {
        if state.attempts.len() >= config.max_attempts as usize {
            return state.finish(SessionStatus::Exhausted);
        }

        let guess = self.select_guess(config, &mut state);
        info!("Attempt {}: trying {:?}", state.attempts.len() + 1, guess);
        let num_rows_before = game.read_board().evaluated_rows().count();
        game.submit(&guess, &config.timing());
        let board_after = game.read_board();
        state.final_guess = Some(Arc::clone(&guess));

        // Letters left typed in an unscored row don't count as a new result.
        let Some(result) = board_after.evaluated_rows().skip(num_rows_before).last() else {
            warn!("{:?} was not accepted, trying another word.", guess);
            state.candidates.retain(|word| *word != guess);
            state.fallback_guess = Some(
                self.ranker
                    .select_best_guess(&state.candidates)
                    .unwrap_or_else(|| Arc::from(config.opening_guess.as_str())),
            );
            state.attempts.push(AttemptRecord {
                guess,
                results: Vec::new(),
                accepted: false,
            });
            return Transition::Continue(state);
        };
        if *result.guess != *guess {
            warn!(
                "Submitted {:?}, but the board shows {:?}.",
                guess, result.guess
            );
        }
        state.attempts.push(AttemptRecord {
            guess,
            results: result.results.clone(),
            accepted: true,
        });
        if result.is_correct() {
            return state.finish(SessionStatus::Won);
        }

        if let Err(err) = state.restrictions.update(&result) {
            warn!("Could not apply {}: {}", result.guess, err);
            return state.finish(SessionStatus::OutOfCandidates);
        }
        state.candidates = get_possible_words(&state.restrictions, &state.candidates);
        debug!("{} candidates remain.", state.candidates.len());
        if state.candidates.is_empty() {
            return state.finish(SessionStatus::OutOfCandidates);
        }
        Transition::Continue(state)
    }

    fn select_guess(&self, config: &SolverConfig, state: &mut SolveState) -> Arc<str> {
        if let Some(guess) = state.fallback_guess.take() {
            return guess;
        }
        if state.use_opening_guess {
            state.use_opening_guess = false;
            return Arc::from(config.opening_guess.as_str());
        }
        self.ranker
            .select_best_guess(&state.candidates)
            .unwrap_or_else(|| Arc::from(config.opening_guess.as_str()))
    }
}
