use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wordle_autosolver::*;

/// Plays Wordle automatically, reading the board and submitting guesses until the word is found.
///
/// Log output is controlled with `RUST_LOG`, which defaults to `info`.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, either with one word on each line
    /// or as a JSON array.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Path to a file of `word score` lines used to break ties between equally good guesses.
    #[clap(long)]
    frequency_file: Option<String>,

    #[clap(long, default_value_t = 6)]
    max_attempts: u32,

    #[clap(long, default_value_t = 5)]
    word_length: usize,

    /// The first word to guess on an empty board.
    #[clap(long, default_value = "crane")]
    opening_guess: String,

    /// Delay between each typed letter, in milliseconds.
    #[clap(long, default_value_t = 50)]
    keypress_delay_ms: u64,

    /// How long to wait for the game to show a result, in milliseconds.
    #[clap(long, default_value_t = 3500)]
    submission_delay_ms: u64,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark the solver against every word in the given words file.
    Benchmark,
    /// Run a single game with the given word, or a random word from the words file.
    Single { word: Option<String> },
    /// Play against a game shown elsewhere, entering each result in the terminal.
    Interactive,
}

impl Args {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            max_attempts: self.max_attempts,
            word_length: self.word_length,
            opening_guess: self.opening_guess.trim().to_lowercase(),
            keypress_delay: Duration::from_millis(self.keypress_delay_ms),
            submission_delay: Duration::from_millis(self.submission_delay_ms),
        }
    }
}

fn main() -> Result<(), WordleError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let start_time = Instant::now();
    let args = Args::parse();
    let config = args.config();
    config.validate()?;
    println!("File: {}", args.words_file);

    let words = WordListFile::new(&args.words_file).fetch_all()?;
    let popularity: Box<dyn PopularityService> = match &args.frequency_file {
        Some(path) => {
            let table = FrequencyTable::from_reader(io::BufReader::new(File::open(path)?))?;
            info!("Loaded {} word frequencies from {}", table.len(), path);
            Box::new(table)
        }
        None => Box::new(NoPopularity),
    };
    let session = SolverSession::new(
        StaticWords::new(&words),
        UniqueLettersRanker::new(popularity),
    );
    let word_bank = WordBank::from_iterator(&words, config.word_length);
    println!(
        "There are {} possible words of length {}.",
        word_bank.len(),
        word_bank.word_length()
    );

    match args.command {
        Command::Benchmark => run_benchmark(&session, &config, &word_bank)?,
        Command::Single { word } => play_single_game(&session, &config, &word_bank, word)?,
        Command::Interactive => play_interactive_game(&session, &config)?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

type Session = SolverSession<StaticWords, UniqueLettersRanker<Box<dyn PopularityService>>>;

fn run_benchmark(
    session: &Session,
    config: &SolverConfig,
    word_bank: &WordBank,
) -> Result<(), WordleError> {
    // Simulated games don't need to wait for anything.
    let config = SolverConfig {
        keypress_delay: Duration::ZERO,
        submission_delay: Duration::ZERO,
        ..config.clone()
    };
    let objectives: Vec<Arc<str>> = word_bank.to_vec();
    let reports = objectives
        .par_iter()
        .map(|objective| session.run(&config, &mut SimulatedGame::new(objective)))
        .collect::<Result<Vec<SessionReport>, WordleError>>()?;
    println!("Played {} games. Results:", reports.len());

    let mut num_games_per_round: HashMap<usize, u32> = HashMap::new();
    let mut num_failures_per_status: HashMap<SessionStatus, u32> = HashMap::new();
    let mut num_guesses_per_game: Vec<usize> = Vec::new();
    for report in &reports {
        if report.status == SessionStatus::Won {
            *(num_games_per_round.entry(report.attempts.len()).or_insert(0)) += 1;
            num_guesses_per_game.push(report.attempts.len());
        } else {
            *(num_failures_per_status.entry(report.status).or_insert(0)) += 1;
        }
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds = num_games_per_round.keys().copied().collect::<Vec<usize>>();
    num_rounds.sort_unstable();
    for num_round in num_rounds.iter() {
        println!("|{}|{}|", num_round, num_games_per_round[num_round]);
    }

    if !num_guesses_per_game.is_empty() {
        let average: f64 = num_guesses_per_game.iter().sum::<usize>() as f64
            / num_guesses_per_game.len() as f64;
        let std_dev: f64 = (num_guesses_per_game
            .iter()
            .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
            .sum::<f64>()
            / num_guesses_per_game.len() as f64)
            .sqrt();
        println!(
            "\n**Average number of guesses:** {:.2} +/- {:.2}",
            average, std_dev
        );
    }

    for (status, num_games) in num_failures_per_status.iter() {
        println!("**{:?}:** {} games", status, num_games);
    }
    Ok(())
}

fn play_single_game(
    session: &Session,
    config: &SolverConfig,
    word_bank: &WordBank,
    word: Option<String>,
) -> Result<(), WordleError> {
    let objective = match word {
        Some(word) => word.trim().to_lowercase(),
        None => match word_bank.choose(&mut rand::thread_rng()) {
            Some(word) => word.to_string(),
            None => {
                eprintln!("Error: the word list has no words to choose from.");
                std::process::exit(1);
            }
        },
    };
    if !word_bank.iter().any(|word| word.as_ref() == objective) {
        warn!("{:?} is not in the word list.", objective);
    }
    println!("The word is {}.", objective);

    let mut game = SimulatedGame::new(&objective);
    let report = session.run(config, &mut game)?;
    match report.status {
        SessionStatus::Won => {
            println!("Solved it! It took me {} guesses.", report.attempts.len())
        }
        SessionStatus::Exhausted => println!(
            "I still couldn't solve it after {} guesses :(",
            report.attempts.len()
        ),
        SessionStatus::OutOfCandidates => {
            println!("I ran out of words to try after {} guesses :(", report.attempts.len())
        }
    }
    print_attempts(&report.attempts);
    Ok(())
}

fn print_attempts(attempts: &[AttemptRecord]) {
    for attempt in attempts.iter() {
        if attempt.accepted {
            println!("\t{}", attempt.guess);
        } else {
            println!("\t{} (rejected)", attempt.guess);
        }
    }
}

fn play_interactive_game(session: &Session, config: &SolverConfig) -> Result<(), WordleError> {
    config.validate()?;
    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\"\n\
         If the game didn't accept my guess, enter \"!\"."
    );

    let mut game = TerminalGame::new(io::stdin().lock());
    match play_terminal_game(session, config, &mut game) {
        Transition::Finished(report) => {
            match report.status {
                SessionStatus::Won => {
                    println!("I did it! It took me {} guesses.", report.attempts.len())
                }
                SessionStatus::Exhausted => println!("I couldn't guess it :("),
                SessionStatus::OutOfCandidates => {
                    println!("I don't know any more words that match those results.")
                }
            }
            print_attempts(&report.attempts);
        }
        Transition::Continue(state) => {
            println!("The input ended before the game was finished.");
            print_attempts(&state.attempts);
        }
    }
    Ok(())
}

/// Steps the session until it finishes, or until the player's input ends.
fn play_terminal_game<D, G, R>(
    session: &SolverSession<D, G>,
    config: &SolverConfig,
    game: &mut TerminalGame<R>,
) -> Transition
where
    D: DictionarySource,
    G: GuessRanker,
    R: BufRead,
{
    let mut transition = session.start(config, &*game);
    loop {
        transition = match transition {
            Transition::Continue(state) if !game.input_closed => session.step(config, state, game),
            finished_or_stopped => return finished_or_stopped,
        };
    }
}

/// A game played elsewhere, where the player types in the result of each guess.
struct TerminalGame<R> {
    input: R,
    board: Board,
    input_closed: bool,
}

impl<R: BufRead> TerminalGame<R> {
    fn new(input: R) -> TerminalGame<R> {
        TerminalGame {
            input,
            board: Board::default(),
            input_closed: false,
        }
    }
}

impl<R> BoardObserver for TerminalGame<R> {
    fn read_board(&self) -> Board {
        self.board.clone()
    }
}

impl<R: BufRead> Submitter for TerminalGame<R> {
    fn submit(&mut self, word: &str, _timing: &SubmissionTiming) {
        if self.input_closed {
            return;
        }
        println!("I'm guessing: {}. How did I do?", word);
        loop {
            match read_result_for_guess(&mut self.input, word) {
                Ok(Some(result)) => {
                    self.board.push_result(&result);
                    return;
                }
                Ok(None) => return,
                Err(err) if err.kind() == io::ErrorKind::InvalidInput => println!("{}", err),
                Err(err) => {
                    warn!("Could not read the result: {}", err);
                    self.input_closed = true;
                    return;
                }
            }
        }
    }
}

/// Reads the result of a guess, or `None` if the game rejected it.
fn read_result_for_guess<R: BufRead>(input: &mut R, guess: &str) -> io::Result<Option<GuessResult>> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no more input",
        ));
    }
    let input = buffer.trim();

    if input == "!" {
        return Ok(None);
    }
    if guess.len() != input.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Input {} didn't match the length of my guess. Try again.",
                input
            ),
        ));
    }

    Ok(Some(GuessResult::new(
        guess,
        input
            .chars()
            .map(|letter| match letter {
                '.' => Ok(LetterResult::NotPresent),
                'y' => Ok(LetterResult::PresentNotHere),
                'g' => Ok(LetterResult::Correct),
                _ => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Must enter only the letters '.', 'y', or 'g'. Try again.",
                )),
            })
            .collect::<io::Result<Vec<LetterResult>>>()?,
    )))
}
