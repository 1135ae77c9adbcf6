//! Board rendering for the Gomoku GUI

use crate::{Board, Pos, Stone};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Everything the view needs to draw one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub current_turn: Stone,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Clicks are ignored when false
    pub accepting_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
    lines: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            lines: crate::board::DEFAULT_BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let extent = available_size.x.min(available_size.y) - 20.0;

        self.lines = frame.board.size();
        self.cell_size = (extent - 2.0 * BOARD_MARGIN) / (self.lines as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(extent, extent), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, frame.board);

        if let Some(pos) = frame.last_move {
            painter.circle_filled(
                self.board_to_screen(pos),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }
        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, line);
        }
        if let Some(pos) = frame.suggested_move {
            self.draw_suggestion(&painter, pos, frame.current_turn);
        }

        if !frame.accepting_input {
            return None;
        }

        let board_pos = response
            .hover_pos()
            .and_then(|pointer| self.screen_to_board(pointer))?;
        if !frame.board.is_empty(board_pos) {
            return None;
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(
            self.board_to_screen(board_pos),
            radius,
            hover_stone(frame.current_turn),
        );

        response.clicked().then_some(board_pos)
    }

    fn grid_extent(&self) -> f32 {
        (self.lines as f32 - 1.0) * self.cell_size
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let far = BOARD_MARGIN + self.grid_extent();

        for i in 0..self.lines {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;
            let min = self.board_rect.min;

            painter.line_segment(
                [min + Vec2::new(offset, BOARD_MARGIN), min + Vec2::new(offset, far)],
                stroke,
            );
            painter.line_segment(
                [min + Vec2::new(BOARD_MARGIN, offset), min + Vec2::new(far, offset)],
                stroke,
            );
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in star_points(self.lines) {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Zero-based indices, matching the terminal front end's `row col` input
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..self.lines {
            let along = BOARD_MARGIN + i as f32 * self.cell_size;
            let label = i.to_string();

            let top = Pos2::new(self.board_rect.min.x + along, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + 14.0, self.board_rect.min.y + along);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for stone in [Stone::Black, Stone::White] {
            for pos in board.positions_of(stone) {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow = center + Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                stroke,
            );
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * STONE_RADIUS_RATIO, hover_stone(turn));

        let mark = if turn == Stone::Black { WHITE_STONE } else { BLACK_STONE };
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            mark,
        );
    }

    /// Convert screen coordinates to the nearest intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;

        let lines = self.lines as i32;
        if (0..lines).contains(&row) && (0..lines).contains(&col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + f32::from(pos.col) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + f32::from(pos.row) * self.cell_size;
        Pos2::new(x, y)
    }
}
