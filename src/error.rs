use std::fmt;

/// An error that occurs when an algebraic square label cannot be parsed.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The label named a file or rank that is off the board.
    OutOfBounds,
    /// The label ended before both coordinates were read.
    MissingToken,
    /// A character was not a file letter or rank digit, or the label had
    /// trailing characters.
    InvalidToken,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::OutOfBounds => "square is outside the board",
            Self::MissingToken => "label is too short",
            Self::InvalidToken => "label contains an invalid character",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}
