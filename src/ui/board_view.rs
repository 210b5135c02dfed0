//! Board rendering for the Tic-Tac-Toe GUI

use crate::{Player, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Draw-in animation of the most recent mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveAnimation {
    pos: Option<Pos>,
    progress: u8,
}

impl MoveAnimation {
    /// Restart the animation if `last_move` differs from the one being animated
    pub fn track(&mut self, last_move: Option<Pos>) {
        if self.pos != last_move {
            self.pos = last_move;
            self.progress = 0;
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        self.progress = self.progress.saturating_add(ANIMATION_SPEED).min(100);
    }

    pub fn is_complete(&self) -> bool {
        self.pos.is_none() || self.progress >= 100
    }

    /// Drawing fraction for the mark at `pos` (1.0 for everything but the animated mark)
    pub fn fraction(&self, pos: Pos) -> f32 {
        if self.pos == Some(pos) {
            f32::from(self.progress) / 100.0
        } else {
            1.0
        }
    }
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid area (the 3x3 cells, margin excluded)
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    /// Clicks are only reported when `accept_input` is true.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &crate::Board,
        winning_cells: &[Pos],
        animation: &MoveAnimation,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_size = available_size.x.min(available_size.y).max(3.0 * 40.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        painter.rect_filled(response.rect, CornerRadius::same(6), BG_COLOR);

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|&pos| accept_input && board.is_empty(pos));

        if let Some(pos) = hovered {
            painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::same(4), hover_fill());
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board, animation);
        self.draw_winning_cells(&painter, winning_cells);

        if response.clicked() {
            return hovered;
        }
        None
    }

    /// Draw the grid: four lines in each direction, borders included
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_COLOR);
        let span = self.cell_size * BOARD_SIZE as f32;

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Horizontal line
            let start = self.grid_rect.min + Vec2::new(0.0, offset);
            painter.line_segment([start, start + Vec2::new(span, 0.0)], stroke);

            // Vertical line
            let start = self.grid_rect.min + Vec2::new(offset, 0.0);
            painter.line_segment([start, start + Vec2::new(0.0, span)], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &crate::Board, animation: &MoveAnimation) {
        for pos in Pos::all() {
            if let Some(player) = board.get(pos) {
                self.draw_mark(painter, pos, player, animation.fraction(pos));
            }
        }
    }

    /// Draw a single mark. `fraction` below 1.0 draws it partially grown.
    fn draw_mark(&self, painter: &Painter, pos: Pos, player: Player, fraction: f32) {
        let center = self.cell_rect(pos).center();
        let reach = self.cell_size * (0.5 - MARK_PADDING_RATIO) * fraction;

        match player {
            Player::One => {
                let stroke = Stroke::new(MARK_LINE_WIDTH, X_COLOR);
                painter.line_segment(
                    [center + Vec2::new(-reach, -reach), center + Vec2::new(reach, reach)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(reach, -reach), center + Vec2::new(-reach, reach)],
                    stroke,
                );
            }
            Player::Two => {
                if reach > 0.0 {
                    painter.circle_stroke(center, reach, Stroke::new(MARK_LINE_WIDTH, O_COLOR));
                }
            }
        }
    }

    /// Outline the cells of the winning line
    fn draw_winning_cells(&self, painter: &Painter, cells: &[Pos]) {
        let stroke = Stroke::new(WIN_OUTLINE_WIDTH, WIN_HIGHLIGHT);
        for &pos in cells {
            painter.rect_stroke(
                self.cell_rect(pos).shrink(5.0),
                CornerRadius::same(4),
                stroke,
                StrokeKind::Inside,
            );
        }
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) || self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
