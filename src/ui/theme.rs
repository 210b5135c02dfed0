//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Window and board
pub const BG_COLOR: Color32 = Color32::from_rgb(28, 35, 43);
pub const PANEL_BG: Color32 = Color32::from_rgb(22, 28, 35);
pub const CARD_BG: Color32 = Color32::from_rgb(36, 44, 54);
pub const GRID_COLOR: Color32 = Color32::from_rgb(86, 98, 112);

// Marks
pub const X_COLOR: Color32 = Color32::from_rgb(239, 71, 111);
pub const O_COLOR: Color32 = Color32::from_rgb(6, 214, 160);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 255, 0);

pub fn hover_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 18)
}

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(170, 178, 190);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 128, 140);

// Buttons
pub const BUTTON_COLOR: Color32 = Color32::from_rgb(58, 134, 255);

// Status
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
pub const GRID_LINE_WIDTH: f32 = 5.0;
pub const MARK_LINE_WIDTH: f32 = 10.0;
/// Gap between a mark and its cell border, as a fraction of the cell size
pub const MARK_PADDING_RATIO: f32 = 20.0 / 120.0;
pub const WIN_OUTLINE_WIDTH: f32 = 5.0;

/// Animation progress added per frame (out of 100)
pub const ANIMATION_SPEED: u8 = 15;
