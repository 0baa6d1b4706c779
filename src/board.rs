use crate::defs::{Nums, Square};

/// The square the rook starts on: G2.
pub const START_SQUARE: Square = Square::new(6, 6);

/// An input the board reacts to.
///
/// Everything the UI can do to the board is one of these, so a test can
/// drive the board exactly like the window does.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    /// One of the 64 squares was pressed.
    SquarePressed(Square),
    /// The timer button was pressed.
    TimerToggled,
    /// One second elapsed while the timer was running.
    TimerTicked,
    /// The undo button was pressed.
    UndoRequested,
    /// The reset button was pressed.
    ResetRequested,
}

/// The state a single undo restores: everything a move changes apart from
/// the history itself.
#[derive(Clone, Copy, Debug)]
struct Snapshot {
    /// Where the rook was before the move.
    rook: Square,
    /// The move count before the move.
    move_count: u32,
}

/// The whole state of the board: the rook, its legal destinations while it
/// is selected, the move counter and history, and the timer.
///
/// The board is in its `Selected` state exactly while [`possible_moves`]
/// is non-empty; any completed move, cancellation or reset empties it
/// again.
///
/// [`possible_moves`]: BoardState::possible_moves
#[derive(Clone, Debug)]
pub struct BoardState {
    /// The square the rook is on.
    rook: Square,
    /// The rook's legal destinations while it is selected. Empty while no
    /// square is selected.
    possible_moves: Vec<Square>,
    /// How many moves have been completed.
    move_count: u32,
    /// The algebraic labels of the initial placement and of each completed
    /// move, oldest first.
    history: Vec<String>,
    /// One snapshot per completed move, popped by undo.
    undo_stack: Vec<Snapshot>,
    /// Whole seconds counted while the timer was active.
    seconds: u32,
    /// Whether the timer is running.
    timer_active: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Creates a board with the rook on [`START_SQUARE`], the history
    /// seeded with its label, nothing selected and the timer stopped.
    pub fn new() -> Self {
        Self {
            rook: START_SQUARE,
            possible_moves: Vec::new(),
            move_count: 0,
            history: vec![START_SQUARE.to_string()],
            undo_stack: Vec::new(),
            seconds: 0,
            timer_active: false,
        }
    }

    /// Applies `event`, stepping the board to its next state.
    ///
    /// Inputs that have no meaning in the current state (pressing an empty
    /// square while idle, undoing with nothing to undo, a stray tick while
    /// the timer is paused) leave the board unchanged.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::SquarePressed(square) => self.press_square(square),
            Event::TimerToggled => self.timer_active = !self.timer_active,
            Event::TimerTicked => {
                if self.timer_active {
                    self.seconds += 1;
                }
            }
            Event::UndoRequested => self.undo_move(),
            Event::ResetRequested => self.reset(),
        }
    }

    /// The square the rook is on.
    pub const fn rook(&self) -> Square {
        self.rook
    }

    /// The rook's legal destinations. Empty while no square is selected.
    pub fn possible_moves(&self) -> &[Square] {
        &self.possible_moves
    }

    /// Whether `square` is a legal destination of the selected rook.
    pub fn is_possible_move(&self, square: Square) -> bool {
        self.possible_moves.contains(&square)
    }

    /// Whether the rook is currently selected.
    pub fn is_selected(&self) -> bool {
        !self.possible_moves.is_empty()
    }

    /// How many moves have been completed.
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The algebraic labels of the initial placement and of each completed
    /// move, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Whole seconds counted while the timer was active.
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Whether the timer is running.
    pub const fn is_timer_active(&self) -> bool {
        self.timer_active
    }

    /// Reacts to a press on `square`: completes a move if it is a legal
    /// destination, selects the rook if it is the rook's own square and
    /// cancels the selection otherwise.
    fn press_square(&mut self, square: Square) {
        if self.is_possible_move(square) {
            self.undo_stack.push(Snapshot {
                rook: self.rook,
                move_count: self.move_count,
            });
            self.rook = square;
            self.possible_moves.clear();
            self.move_count += 1;
            self.history.push(square.to_string());
        } else if square == self.rook {
            self.possible_moves = possible_moves_from(square);
        } else {
            // a press away from the rook and its destinations cancels the
            // selection; while nothing is selected this is a no-op
            self.possible_moves.clear();
        }
    }

    /// Takes back the most recent move, restoring the position and move
    /// count from before it. Does nothing if no move has been made.
    fn undo_move(&mut self) {
        let Some(snapshot) = self.undo_stack.pop() else {
            eprintln!("undo pressed with no move to undo");
            return;
        };

        self.rook = snapshot.rook;
        self.move_count = snapshot.move_count;
        self.history.pop();
        self.possible_moves.clear();
    }

    /// Puts the board back to the starting configuration with an empty
    /// history and the timer stopped.
    fn reset(&mut self) {
        self.rook = START_SQUARE;
        self.possible_moves.clear();
        self.move_count = 0;
        self.history.clear();
        self.undo_stack.clear();
        self.seconds = 0;
        self.timer_active = false;
    }
}

/// Every square the rook can reach from `square`: the rest of its row and
/// its column. Always 14 squares, since no other piece can block.
pub fn possible_moves_from(square: Square) -> Vec<Square> {
    let mut moves = Vec::with_capacity(Nums::ROWS + Nums::COLS - 2);
    for i in 0..Nums::ROWS as u8 {
        if i != square.row() {
            moves.push(Square::new(i, square.col()));
        }
        if i != square.col() {
            moves.push(Square::new(square.row(), i));
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::{possible_moves_from, BoardState, Event, START_SQUARE};
    use crate::defs::{Nums, Square};

    /// Presses the square at `(row, col)` on `board`.
    fn press(board: &mut BoardState, row: u8, col: u8) {
        board.apply(Event::SquarePressed(Square::new(row, col)));
    }

    #[test]
    fn moves_from_any_square_cover_its_row_and_column() {
        for row in 0..Nums::ROWS as u8 {
            for col in 0..Nums::COLS as u8 {
                let square = Square::new(row, col);
                let moves = possible_moves_from(square);

                assert_eq!(moves.len(), 14, "a rook always has 14 destinations");
                for (i, mv) in moves.iter().enumerate() {
                    assert_ne!(*mv, square, "a move may not stay in place");
                    assert!(
                        mv.row() == row || mv.col() == col,
                        "a rook moves along its row or column"
                    );
                    assert!(!moves[..i].contains(mv), "duplicate destination");
                }
            }
        }
    }

    #[test]
    fn selecting_the_rook_is_idempotent() {
        let mut board = BoardState::new();

        press(&mut board, 6, 6);
        let first = board.possible_moves().to_vec();
        assert_eq!(first.len(), 14, "selecting must populate the move set");
        assert!(board.is_selected());

        press(&mut board, 6, 6);
        assert_eq!(board.possible_moves(), first, "reselecting changes nothing");
    }

    #[test]
    fn a_move_updates_position_count_and_history() {
        let mut board = BoardState::new();

        press(&mut board, 6, 6);
        press(&mut board, 6, 2);

        assert_eq!(board.rook(), Square::new(6, 2));
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.history(), ["G2", "C2"]);
        assert!(!board.is_selected(), "a completed move clears the selection");
    }

    #[test]
    fn an_off_target_press_cancels_the_selection() {
        let mut board = BoardState::new();

        press(&mut board, 6, 6);
        // (5, 5) shares neither row nor column with the rook
        press(&mut board, 5, 5);

        assert!(!board.is_selected());
        assert_eq!(board.rook(), START_SQUARE);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.history(), ["G2"]);
    }

    #[test]
    fn pressing_an_empty_square_while_idle_does_nothing() {
        let mut board = BoardState::new();

        press(&mut board, 0, 0);

        assert_eq!(board.rook(), START_SQUARE);
        assert!(!board.is_selected());
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn undo_restores_the_previous_position() {
        let mut board = BoardState::new();

        press(&mut board, 6, 6);
        press(&mut board, 6, 2);
        board.apply(Event::UndoRequested);

        assert_eq!(board.rook(), START_SQUARE);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.history(), ["G2"]);
        assert!(!board.is_selected());
    }

    #[test]
    fn undo_with_only_the_initial_entry_is_a_no_op() {
        let mut board = BoardState::new();

        board.apply(Event::UndoRequested);

        assert_eq!(board.rook(), START_SQUARE);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.history(), ["G2"]);
    }

    #[test]
    fn undo_walks_back_through_several_moves() {
        let mut board = BoardState::new();

        press(&mut board, 6, 6);
        press(&mut board, 6, 0);
        press(&mut board, 6, 0);
        press(&mut board, 3, 0);
        assert_eq!(board.history(), ["G2", "A2", "A5"]);
        assert_eq!(board.move_count(), 2);

        board.apply(Event::UndoRequested);
        assert_eq!(board.rook(), Square::new(6, 0));
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.history(), ["G2", "A2"]);

        board.apply(Event::UndoRequested);
        assert_eq!(board.rook(), START_SQUARE);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.history(), ["G2"]);

        // the count stays floored at 0
        board.apply(Event::UndoRequested);
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn reset_restores_the_starting_configuration() {
        let mut board = BoardState::new();

        board.apply(Event::TimerToggled);
        board.apply(Event::TimerTicked);
        press(&mut board, 6, 6);
        press(&mut board, 0, 6);
        press(&mut board, 0, 6);
        board.apply(Event::ResetRequested);

        assert_eq!(board.rook(), START_SQUARE);
        assert_eq!(board.move_count(), 0);
        assert!(board.history().is_empty());
        assert_eq!(board.seconds(), 0);
        assert!(!board.is_timer_active());
        assert!(!board.is_selected());
    }

    #[test]
    fn undo_after_reset_is_a_no_op() {
        let mut board = BoardState::new();

        press(&mut board, 6, 6);
        press(&mut board, 6, 2);
        board.apply(Event::ResetRequested);
        board.apply(Event::UndoRequested);

        assert_eq!(board.rook(), START_SQUARE);
        assert_eq!(board.move_count(), 0);
        assert!(board.history().is_empty());
    }

    #[test]
    fn ticks_only_count_while_the_timer_runs() {
        let mut board = BoardState::new();

        board.apply(Event::TimerTicked);
        assert_eq!(board.seconds(), 0, "a paused timer ignores ticks");

        board.apply(Event::TimerToggled);
        assert!(board.is_timer_active());
        for _ in 0..3 {
            board.apply(Event::TimerTicked);
        }
        board.apply(Event::TimerToggled);
        board.apply(Event::TimerTicked);

        assert_eq!(board.seconds(), 3);
    }
}
