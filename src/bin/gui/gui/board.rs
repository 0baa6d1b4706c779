use backend::{
    board::{BoardState, Event},
    defs::Square,
    ticker::Ticker,
};

use super::Gui;

impl Gui {
    /// Read access to the board for the drawing code.
    pub const fn board(&self) -> &BoardState {
        &self.board
    }

    /// Handles a click on `square`.
    pub fn press_square(&mut self, square: Square) {
        self.board.apply(Event::SquarePressed(square));
    }

    /// Starts or pauses the timer, keeping the tick thread in lockstep
    /// with the board's flag.
    pub fn toggle_timer(&mut self) {
        self.board.apply(Event::TimerToggled);
        if self.board.is_timer_active() {
            self.ticker = Some(Ticker::start());
        } else {
            // dropping the old ticker cancels its thread
            self.ticker = None;
        }
    }

    /// Takes back the most recent move, if there is one.
    pub fn undo(&mut self) {
        self.board.apply(Event::UndoRequested);
    }

    /// Puts the board back to its starting configuration and cancels the
    /// tick thread.
    pub fn reset(&mut self) {
        self.board.apply(Event::ResetRequested);
        self.ticker = None;
    }

    /// Applies every tick that has arrived since the last frame.
    pub fn apply_pending_ticks(&mut self) {
        let Some(ticker) = &self.ticker else {
            return;
        };
        let pending = ticker.ticks().try_iter().count();
        for _ in 0..pending {
            self.board.apply(Event::TimerTicked);
        }
    }
}
