//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_stone(turn: crate::Stone) -> Color32 {
    match turn {
        crate::Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
        _ => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
    }
}

// Panel colors - dark theme
pub const SIDE_PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const DEBUG_CARD_BG: Color32 = Color32::from_rgb(30, 33, 38);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Star points (hoshi) for a board of `size` lines.
///
/// Boards of 13 and up get the nine-point layout on the fourth lines,
/// smaller boards only mark the centre.
pub fn star_points(size: usize) -> Vec<(u8, u8)> {
    let center = (size / 2) as u8;
    if size < 13 {
        return vec![(center, center)];
    }

    let near = 3u8;
    let far = (size - 4) as u8;
    let lines = [near, center, far];
    lines
        .iter()
        .flat_map(|&r| lines.iter().map(move |&c| (r, c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_points_standard_board() {
        let points = star_points(15);
        assert_eq!(points.len(), 9);
        assert!(points.contains(&(3, 3)));
        assert!(points.contains(&(7, 7)));
        assert!(points.contains(&(11, 11)));
    }

    #[test]
    fn test_star_points_small_board() {
        assert_eq!(star_points(9), vec![(4, 4)]);
    }
}
