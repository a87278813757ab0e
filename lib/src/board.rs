use crate::results::*;

/// A single tile on the game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub letter: Option<char>,
    pub result: LetterResult,
}

impl Tile {
    pub fn new(letter: char, result: LetterResult) -> Tile {
        Tile {
            letter: Some(letter),
            result,
        }
    }

    /// A tile with no letter and no evaluation.
    pub fn empty() -> Tile {
        Tile {
            letter: None,
            result: LetterResult::Empty,
        }
    }

    /// Returns `true` if the game has scored this tile.
    pub fn is_evaluated(&self) -> bool {
        self.letter.is_some() && self.result != LetterResult::Empty
    }
}

/// The state of the game board as observed from the game, one row per guess.
///
/// A guess was accepted iff it added a fully evaluated row. Rows that are only typed are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub rows: Vec<Vec<Tile>>,
}

impl Board {
    pub fn new(rows: Vec<Vec<Tile>>) -> Board {
        Board { rows }
    }

    /// Returns `true` if no tile on the board has been evaluated.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|tile| !tile.is_evaluated())
    }

    /// Returns the results of each fully evaluated row, in board order.
    ///
    /// Rows that are blank, or only partly evaluated, are skipped.
    pub fn evaluated_rows(&self) -> impl Iterator<Item = GuessResult> + '_ {
        self.rows
            .iter()
            .filter(|row| !row.is_empty() && row.iter().all(Tile::is_evaluated))
            .map(|row| GuessResult {
                guess: row.iter().filter_map(|tile| tile.letter).collect::<String>().into(),
                results: row.iter().map(|tile| tile.result).collect(),
            })
    }

    /// Returns the result of the last fully evaluated row, if there is one.
    pub fn latest_result(&self) -> Option<GuessResult> {
        self.evaluated_rows().last()
    }

    /// Appends the given result as a new row.
    pub fn push_result(&mut self, result: &GuessResult) {
        self.rows.push(
            result
                .letters()
                .map(|(letter, result)| Tile::new(letter, result))
                .collect(),
        );
    }
}
