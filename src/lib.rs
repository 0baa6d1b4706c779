//! The state machine behind an 8x8 rook practice board.
//!
//! The board holds a single rook which slides along its row and column.
//! Everything the UI can do — pressing squares, toggling the timer, undoing
//! and resetting — is an [`Event`](board::Event) applied to a
//! [`BoardState`](board::BoardState), so the whole thing can be driven from
//! a test without a window.

/// Items related to the board state. Mainly [`BoardState`](board::BoardState).
pub mod board;
/// Definitions and enumerations.
pub mod defs;
/// Errors that parsing a square label can produce.
pub mod error;
/// A cancellable once-a-second tick source.
pub mod ticker;
