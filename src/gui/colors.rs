//! Colors used by the canvas painter.

use eframe::egui::Color32;

/// Background of the canvas area.
pub const CANVAS_COLOR: Color32 = Color32::WHITE;
/// Wall segments.
pub const WALL_COLOR: Color32 = Color32::BLACK;
/// The move marker between two cell centers.
pub const MOVE_COLOR: Color32 = Color32::RED;
/// The move marker when undo styling is selected.
pub const MOVE_UNDO_COLOR: Color32 = Color32::GRAY;
