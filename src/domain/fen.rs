//! Forsyth–Edwards Notation (FEN) position descriptors.
//!
//! A descriptor has six space-separated fields. Only the first, the board, is
//! checked: it must hold eight `/`-separated ranks that each cover exactly
//! eight files. The remaining fields (side to move, castling rights, en-passant
//! target, halfmove clock, fullmove number) must be present but their contents
//! are not inspected.

use std::{fmt, ops::Range, str::FromStr};

use super::{Error, Format};

/// Piece letters: lowercase for black, uppercase for white.
pub const PIECES: &str = "rnbqkpRNBQKP";

/// Number of fields in a descriptor.
pub const FIELDS: usize = 6;

/// Number of ranks in the board field.
pub const RANKS: usize = 8;

/// Number of files each rank must cover.
pub const FILES: u32 = 8;

/// Byte ranges of the space-separated fields.
///
/// Runs of spaces act as one separator and leading or trailing spaces are
/// ignored, so a field is never empty.
fn field_spans(descriptor: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;

    for (position, c) in descriptor.char_indices() {
        match (c == ' ', start) {
            (true, Some(s)) => {
                spans.push(s..position);
                start = None;
            }
            (false, None) => start = Some(position),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push(s..descriptor.len());
    }
    spans
}

fn fields(descriptor: &str) -> Option<[Range<usize>; FIELDS]> {
    let spans = field_spans(descriptor);
    let count = spans.len();
    let fields = spans.try_into().ok();
    if fields.is_none() {
        tracing::trace!(descriptor, count, "fen: expected {FIELDS} fields");
    }
    fields
}

/// Counts the files covered by one rank.
///
/// Digits add their value and piece letters add one. Returns `None` if the
/// rank holds any other character. `0` and `9` are counted like any other
/// digit; only the final comparison against [`FILES`] rejects them.
///
/// # Examples
///
/// ```
/// use recognizer::domain::fen;
///
/// assert_eq!(fen::rank_file_count("rnbqkbnr"), Some(8));
/// assert_eq!(fen::rank_file_count("4P3"), Some(8));
/// assert_eq!(fen::rank_file_count("9"), Some(9));
/// assert_eq!(fen::rank_file_count("4x3"), None);
/// ```
#[must_use]
pub fn rank_file_count(rank: &str) -> Option<u32> {
    rank.chars().try_fold(0_u32, |files, c| {
        if let Some(digit) = c.to_digit(10) {
            Some(files.saturating_add(digit))
        } else if PIECES.contains(c) {
            Some(files.saturating_add(1))
        } else {
            tracing::trace!(rank, character = %c.escape_debug(), "fen: invalid character in rank");
            None
        }
    })
}

/// Returns `true` if `rank` covers exactly eight files.
#[must_use]
pub fn is_valid_rank(rank: &str) -> bool {
    rank_file_count(rank) == Some(FILES)
}

fn is_valid_board(board: &str) -> bool {
    let ranks = board.split('/').count();
    if ranks != RANKS {
        tracing::trace!(board, ranks, "fen: expected {RANKS} ranks");
        return false;
    }
    board.split('/').all(is_valid_rank)
}

/// Returns `true` if `descriptor` is a FEN descriptor with a valid board.
///
/// # Examples
///
/// ```
/// use recognizer::domain::fen;
///
/// assert!(fen::is_valid(
///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
/// ));
/// assert!(!fen::is_valid(
///     "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
/// ));
/// ```
#[must_use]
pub fn is_valid(descriptor: &str) -> bool {
    fields(descriptor).is_some_and(|[board, ..]| is_valid_board(&descriptor[board]))
}

/// One rank of a board together with its file count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankReport<'a> {
    /// The rank as written.
    pub text: &'a str,
    /// Files covered, or `None` if the rank holds an illegal character.
    pub files: Option<u32>,
}

impl RankReport<'_> {
    /// Returns `true` if the rank covers exactly eight files.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.files == Some(FILES)
    }
}

/// The per-rank breakdown of a descriptor's board field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardReport<'a> {
    /// The board field.
    pub board: &'a str,
    /// Every `/`-separated rank, including any beyond the eighth.
    pub ranks: Vec<RankReport<'a>>,
}

impl BoardReport<'_> {
    /// Returns `true` if there are exactly eight ranks and every one is valid.
    ///
    /// This agrees with [`is_valid`] for the descriptor the report came from.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.ranks.len() == RANKS && self.ranks.iter().all(RankReport::is_valid)
    }
}

/// Breaks the board field of `descriptor` into ranks with their file counts.
///
/// Returns `None` if the descriptor does not have six fields.
#[must_use]
pub fn inspect(descriptor: &str) -> Option<BoardReport<'_>> {
    let [board, ..] = fields(descriptor)?;
    let board = &descriptor[board];
    let ranks = board
        .split('/')
        .map(|text| RankReport {
            text,
            files: rank_file_count(text),
        })
        .collect();
    Some(BoardReport { board, ranks })
}

/// An accepted FEN descriptor, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FenDescriptor {
    text: String,
    fields: [Range<usize>; FIELDS],
}

impl FenDescriptor {
    /// Validates `text` as a FEN descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SyntaxRejected`] if `text` does not have six fields or
    /// its board field is invalid.
    pub fn new(text: String) -> Result<Self, Error> {
        match fields(&text) {
            Some(fields) if is_valid_board(&text[fields[0].clone()]) => Ok(Self { text, fields }),
            _ => Err(Error::SyntaxRejected {
                format: Format::Fen,
            }),
        }
    }

    fn field(&self, index: usize) -> &str {
        &self.text[self.fields[index].clone()]
    }

    /// All six fields, in order.
    #[must_use]
    pub fn fields(&self) -> [&str; FIELDS] {
        std::array::from_fn(|index| self.field(index))
    }

    /// The piece-placement field.
    #[must_use]
    pub fn board(&self) -> &str {
        self.field(0)
    }

    /// The eight ranks of the board, from rank 8 down to rank 1.
    pub fn ranks(&self) -> impl Iterator<Item = &str> {
        self.board().split('/')
    }

    /// The side-to-move field. Not validated.
    #[must_use]
    pub fn side_to_move(&self) -> &str {
        self.field(1)
    }

    /// The castling-rights field. Not validated.
    #[must_use]
    pub fn castling(&self) -> &str {
        self.field(2)
    }

    /// The en-passant target field. Not validated.
    #[must_use]
    pub fn en_passant(&self) -> &str {
        self.field(3)
    }

    /// The halfmove-clock field. Not validated.
    #[must_use]
    pub fn halfmove_clock(&self) -> &str {
        self.field(4)
    }

    /// The fullmove-number field. Not validated.
    #[must_use]
    pub fn fullmove_number(&self) -> &str {
        self.field(5)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for FenDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<&str> for FenDescriptor {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl AsRef<str> for FenDescriptor {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for FenDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}
