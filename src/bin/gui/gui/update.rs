use std::time::Duration;

use backend::defs::{Nums, Square};
use eframe::{
    egui::{
        self,
        containers::{Frame, Window},
        CentralPanel, Color32, Context, Id, Pos2, Rect, Rounding, Sense, SidePanel, Stroke, Ui,
        Vec2,
    },
    App,
};
use egui_extras::{Column, TableBuilder};

use super::{Gui, SquareColor, SquareColorType};
use crate::{
    gui::draw::{add_button_to_region, draw_text_at, paint_area_with_color},
    util::pixels_to_points,
};

/// Fill for a square the selected rook can move to.
const DESTINATION_FILL: Color32 = Color32::from_rgb(0xaa, 0xff, 0xaa);
/// Fill for the square the rook sits on.
const ROOK_FILL: Color32 = Color32::from_rgb(0xff, 0xaa, 0x00);

impl App for Gui {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // I like this color
        let bg_col = Color32::from_rgb(0x2e, 0x2e, 0x2e);

        self.apply_pending_ticks();

        self.update_board_area(ctx, bg_col);
        self.update_info_area(ctx, bg_col);

        // ticks arrive from a thread, so keep repainting while the timer
        // runs instead of waiting for the next input event
        if self.board().is_timer_active() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl Gui {
    /// Updates the board, buttons, and counters, and handles clicks in the
    /// board area.
    fn update_board_area(&mut self, ctx: &Context, col: Color32) {
        SidePanel::left(Id::new("board"))
            .resizable(false)
            .show_separator_line(false)
            // board width with a 40 px margin on either side
            .exact_width(pixels_to_points(ctx, 880.0))
            .frame(egui::Frame::none().fill(col))
            .show(ctx, |ui| {
                self.update_board(ctx, ui);
                self.update_buttons(ctx, ui);
                self.update_labels(ctx, ui);
            });
    }

    /// Draws the area where the move history is displayed.
    fn update_info_area(&mut self, ctx: &Context, col: Color32) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(col))
            .show(ctx, |ui| {
                self.update_info_box(ctx, ui);
            });
    }

    /// Draws the history box, which lists the starting placement and every
    /// move played since.
    fn update_info_box(&self, ctx: &Context, ui: &Ui) {
        let info_box_size = Vec2::new(
            // available width/height minus the 40 px margin
            ui.available_width() - pixels_to_points(ctx, 80.0),
            ui.available_height() - pixels_to_points(ctx, 80.0),
        );
        let top_left_point = Pos2::new(
            // edge of the board panel + margin
            pixels_to_points(ctx, 920.0),
            // top of the screen + margin
            pixels_to_points(ctx, 40.0),
        );
        let bottom_right_point = top_left_point + info_box_size;

        Window::new("Move History")
            .frame(
                Frame::none()
                    .stroke(Stroke::new(pixels_to_points(ctx, 5.0), Color32::DARK_GRAY))
                    .rounding(Rounding::same(pixels_to_points(ctx, 10.0))),
            )
            .movable(false)
            .fixed_rect(Rect::from_min_max(top_left_point, bottom_right_point))
            .collapsible(false)
            .scroll2(true)
            .show(ctx, |ui| {
                ui.expand_to_include_x(bottom_right_point.x);
                ui.expand_to_include_y(bottom_right_point.y);
                self.update_table(ctx, ui);
            });
    }

    /// Displays the table of moves played so far, most recent first.
    fn update_table(&self, ctx: &Context, ui: &mut Ui) {
        TableBuilder::new(ui)
            .column(
                Column::auto()
                    .resizable(true)
                    .at_least(pixels_to_points(ctx, 100.0)),
            )
            .column(Column::remainder())
            .header(pixels_to_points(ctx, 35.0), |mut header| {
                header.col(|ui| {
                    // add a space so it isn't hugging the side
                    ui.heading(" Move");
                });
                header.col(|ui| {
                    ui.heading("Square");
                });
            })
            .body(|body| {
                let history = self.board().history();
                let rows = history.len();
                let height = pixels_to_points(ctx, 30.0);
                let mut iter = history.iter().enumerate().rev();

                body.rows(height, rows, |mut row| {
                    let (number, label) = iter
                        .next()
                        .expect("`rows()` is calling this closure more times than it should.");
                    row.col(|ui| {
                        // entry 0 is the initial placement, not a move
                        let text = if number == 0 {
                            " start".to_string()
                        } else {
                            format!(" {number}")
                        };
                        ui.label(text);
                    });
                    row.col(|ui| {
                        ui.label(label);
                    });
                });
            });
    }

    /// Draws the board and the rook on it, handling clicks within the
    /// board as it does so.
    fn update_board(&mut self, ctx: &Context, ui: &mut Ui) {
        let mut color = SquareColor::new(SquareColorType::Light);

        let mut square_corners = Rect::from_min_max(
            // the board is 800x800 pixels of 100-pixel squares, anchored 40
            // pixels from the top left corner of the panel
            Pos2::new(pixels_to_points(ctx, 40.0), pixels_to_points(ctx, 40.0)),
            Pos2::new(pixels_to_points(ctx, 140.0), pixels_to_points(ctx, 140.0)),
        );

        // draw the board from the top left square, left to right then top
        // to bottom, so row 0 lands on top like rank 8 of a chessboard
        for row in 0..Nums::ROWS {
            for col in 0..Nums::COLS {
                let square = Square::new(row as u8, col as u8);

                self.update_square(ui, square_corners, square, color);
                self.add_rook(ctx, ui, square_corners, square);

                square_corners =
                    square_corners.translate(Vec2::new(pixels_to_points(ctx, 100.0), 0.0));
                color.flip_color();
            }
            square_corners = square_corners.translate(Vec2::new(
                pixels_to_points(ctx, -800.0),
                pixels_to_points(ctx, 100.0),
            ));
            // when going onto a new row, flip the color again because it
            // needs to stay the same color
            color.flip_color();
        }
    }

    /// Draws the buttons under the board and handles clicks on them.
    fn update_buttons(&mut self, ctx: &Context, ui: &mut Ui) {
        let timer_text = if self.board().is_timer_active() {
            "Pause Timer"
        } else {
            "Start Timer"
        };

        // 3 buttons, each 190x70 with 20 px spacing, in a row under the
        // counters
        add_button_to_region(
            ui,
            Rect::from_min_max(
                Pos2::new(pixels_to_points(ctx, 40.0), pixels_to_points(ctx, 950.0)),
                Pos2::new(pixels_to_points(ctx, 230.0), pixels_to_points(ctx, 1020.0)),
            ),
            timer_text,
            || self.toggle_timer(),
        );
        add_button_to_region(
            ui,
            Rect::from_min_max(
                Pos2::new(pixels_to_points(ctx, 250.0), pixels_to_points(ctx, 950.0)),
                Pos2::new(pixels_to_points(ctx, 440.0), pixels_to_points(ctx, 1020.0)),
            ),
            "Undo Move",
            || self.undo(),
        );
        add_button_to_region(
            ui,
            Rect::from_min_max(
                Pos2::new(pixels_to_points(ctx, 460.0), pixels_to_points(ctx, 950.0)),
                Pos2::new(pixels_to_points(ctx, 650.0), pixels_to_points(ctx, 1020.0)),
            ),
            "Reset Game",
            || self.reset(),
        );
    }

    /// Draws the file and rank labels around the board and the move and
    /// time counters underneath it.
    fn update_labels(&self, ctx: &Context, ui: &Ui) {
        // file letters under each column, rank digits left of each row
        for i in 0..Nums::COLS {
            let file = char::from(b'A' + i as u8);
            draw_text_at(
                ui,
                Pos2::new(
                    pixels_to_points(ctx, 90.0 + 100.0 * i as f32),
                    pixels_to_points(ctx, 860.0),
                ),
                &file.to_string(),
                pixels_to_points(ctx, 24.0),
                Color32::WHITE,
            );

            let rank = Nums::ROWS - i;
            draw_text_at(
                ui,
                Pos2::new(
                    pixels_to_points(ctx, 20.0),
                    pixels_to_points(ctx, 90.0 + 100.0 * i as f32),
                ),
                &rank.to_string(),
                pixels_to_points(ctx, 24.0),
                Color32::WHITE,
            );
        }

        draw_text_at(
            ui,
            Pos2::new(pixels_to_points(ctx, 140.0), pixels_to_points(ctx, 910.0)),
            &format!("Moves: {}", self.board().move_count()),
            pixels_to_points(ctx, 28.0),
            Color32::WHITE,
        );
        draw_text_at(
            ui,
            Pos2::new(pixels_to_points(ctx, 440.0), pixels_to_points(ctx, 910.0)),
            &format!("Time: {}s", self.board().seconds()),
            pixels_to_points(ctx, 28.0),
            Color32::WHITE,
        );
    }

    /// Draws a square on `ui` in the given region and reacts to a click on
    /// it.
    ///
    /// A legal destination is filled green and the rook's own square
    /// orange; every other square gets its checkerboard color.
    fn update_square(&mut self, ui: &mut Ui, region: Rect, square: Square, color: SquareColor) {
        if ui.allocate_rect(region, Sense::click()).clicked() {
            self.press_square(square);
        }

        let fill = if self.board().is_possible_move(square) {
            DESTINATION_FILL
        } else if self.board().rook() == square {
            ROOK_FILL
        } else {
            color.fill()
        };
        paint_area_with_color(ui, region, fill);
    }

    /// Draws the rook glyph if `square` is where the rook is. Adds nothing
    /// otherwise.
    fn add_rook(&self, ctx: &Context, ui: &Ui, region: Rect, square: Square) {
        if self.board().rook() != square {
            return;
        }
        draw_text_at(
            ui,
            region.center(),
            "\u{2656}",
            pixels_to_points(ctx, 72.0),
            Color32::BLACK,
        );
    }
}
