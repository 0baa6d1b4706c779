//! A GUI for practising rook moves on an otherwise empty board.

use gui::Gui;

use eframe::{
    egui::{Vec2, ViewportBuilder},
    run_native, Error, NativeOptions,
};

/// Defines what happens each frame.
mod gui;
/// Utility.
mod util;

fn main() -> Result<(), Error> {
    let title = "Chess Rook Moves";

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(title)
            .with_decorations(false)
            .with_inner_size(Vec2::new(1920.0, 1080.0)),
        ..Default::default()
    };

    run_native(title, options, Box::new(|_cc| Box::new(Gui::new())))
}
