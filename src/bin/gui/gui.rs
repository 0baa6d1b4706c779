use backend::{board::BoardState, ticker::Ticker};
use eframe::egui::Color32;

/// For manipulating the internal state of the GUI.
mod board;
/// For drawing-related items.
mod draw;
/// Defines what happens each frame.
mod update;

/// The GUI: used to save state between frames.
pub struct Gui {
    /// The board the window displays.
    board: BoardState,
    /// The running tick thread. `Some` exactly while the timer is active.
    ticker: Option<Ticker>,
}

impl Gui {
    /// Creates a new [`Gui`] with the rook on its starting square and the
    /// timer stopped.
    pub fn new() -> Self {
        Self {
            board: BoardState::new(),
            ticker: None,
        }
    }
}

/// Whether a square is light or dark.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum SquareColorType {
    /// A light square.
    Light,
    /// A dark square.
    Dark,
}

/// The checkerboard color of the square currently being drawn.
#[derive(Clone, Copy)]
pub struct SquareColor {
    /// Which of the two alternating colors the square has.
    color_type: SquareColorType,
}

impl SquareColor {
    /// Creates a new [`SquareColor`] of the given type.
    const fn new(color_type: SquareColorType) -> Self {
        Self { color_type }
    }

    /// Flips light to dark and vice versa.
    fn flip_color(&mut self) {
        self.color_type = match self.color_type {
            SquareColorType::Light => SquareColorType::Dark,
            SquareColorType::Dark => SquareColorType::Light,
        };
    }

    /// The fill of an unhighlighted square of this color.
    const fn fill(self) -> Color32 {
        match self.color_type {
            SquareColorType::Light => Color32::WHITE,
            SquareColorType::Dark => Color32::from_rgb(0x44, 0x44, 0x44),
        }
    }
}
