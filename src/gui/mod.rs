//! Top-level GUI elements and functionality.

pub mod colors;
pub mod transforms;

use crate::error::GridError;
use crate::geometry::Segment;
use crate::grid::Grid;
use crate::util::stopwatch::Stopwatch;
use crate::walls::collect_all_walls;
use anyhow::anyhow;
use eframe::egui;
use eframe::egui::{Color32, Pos2, Rounding, Sense, Stroke, Ui};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use self::colors::{CANVAS_COLOR, MOVE_COLOR, MOVE_UNDO_COLOR, WALL_COLOR};
use self::transforms::Transform;

/// Stroke width for walls and the move marker, in pixels.
const LINE_WIDTH: f32 = 2.0;
/// Populate runs averaged for the timing label.
const TIMING_SAMPLES: usize = 10;

/// Launches the GUI application. Blocks until the application has quit.
pub fn run_gui() -> anyhow::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Maze Canvas",
        native_options,
        Box::new(|cc| Box::new(App::new(cc))),
    )
    .map_err(|e| anyhow!("eframe::run_native error: {e}"))
}

/// User-tunable options, persisted across runs through eframe storage.
#[derive(Clone, Default, Serialize, Deserialize)]
struct Settings {
    /// Cell size in pixels; populate prompts for one while unset
    cell_size: Option<u32>,
    /// When set, populate draws walls from this seed instead of entropy
    seed: Option<u64>,
    /// Draw the move marker in the undo color
    undo_marker: bool,
}

struct CellSizeDialog {
    input: String,
    // resume the populate that opened the dialog once a valid size is entered
    populate_after: bool,
}

struct App {
    settings: Settings,
    grid: Grid,
    segments: Vec<Segment>,
    stopwatch: Stopwatch,
    // canvas dimensions the current grid was built for
    canvas_size: (u32, u32),
    // cell indices of the move marker endpoints
    marker: Option<((usize, usize), (usize, usize))>,
    selected: Option<(usize, usize)>,
    cell_size_dialog: Option<CellSizeDialog>,
    populate_requested: bool,
    pointer_pos: String,
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self {
            settings,
            grid: Grid::default(),
            segments: Vec::new(),
            stopwatch: Stopwatch::new(TIMING_SAMPLES),
            canvas_size: (0, 0),
            marker: None,
            selected: None,
            cell_size_dialog: None,
            populate_requested: false,
            pointer_pos: String::new(),
        }
    }

    fn clear_canvas(&mut self) {
        self.grid = Grid::default();
        self.segments.clear();
        self.marker = None;
        self.selected = None;
    }

    fn populate_canvas(&mut self, canvas_width: u32, canvas_height: u32) {
        let Some(cell_size) = self.settings.cell_size else {
            self.open_cell_size_dialog(true);
            return;
        };
        self.clear_canvas();
        self.canvas_size = (canvas_width, canvas_height);

        self.stopwatch.start();
        let mut rng = match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = match Grid::build(canvas_width, canvas_height, cell_size, &mut rng) {
            Ok(grid) => grid,
            Err(e @ GridError::InvalidCellSize { .. }) => {
                // recoverable: re-prompt for a usable size and retry
                warn!("rejected cell size: {e}");
                self.settings.cell_size = None;
                self.open_cell_size_dialog(true);
                return;
            }
            Err(e) => {
                warn!("grid build failed: {e}");
                return;
            }
        };
        self.stopwatch.mark_segment("build");

        match collect_all_walls(&grid) {
            Ok(segments) => self.segments = segments,
            Err(e) => {
                // only reachable through a defect in Grid::build
                warn!("wall collection failed: {e}");
                return;
            }
        }
        self.stopwatch.mark_segment("collect");

        let duration = self.stopwatch.stop();
        self.grid = grid;
        let breakdown: Vec<String> = self
            .stopwatch
            .segment_times()
            .iter()
            .map(|(name, secs)| format!("{name} {secs:.3}s"))
            .collect();
        info!(
            "populated {} rows x {} cols ({} cells), {} wall segments in {:.3}s ({})",
            self.grid.num_rows(),
            self.grid.num_cols(),
            self.grid.cell_count(),
            self.segments.len(),
            duration,
            breakdown.join(", "),
        );
    }

    fn open_cell_size_dialog(&mut self, populate_after: bool) {
        let input = self
            .settings
            .cell_size
            .map_or_else(String::new, |size| size.to_string());
        self.cell_size_dialog = Some(CellSizeDialog {
            input,
            populate_after,
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("Populate Canvas").clicked() {
                self.populate_requested = true;
            }
            if ui.button("Clear Canvas").clicked() {
                self.clear_canvas();
            }
            if ui.button("Cell Size").clicked() {
                self.open_cell_size_dialog(false);
            }
            ui.checkbox(&mut self.settings.undo_marker, "Undo marker");

            let mut fixed_seed = self.settings.seed.is_some();
            ui.checkbox(&mut fixed_seed, "Fixed seed");
            if fixed_seed {
                let mut seed = self.settings.seed.unwrap_or(0);
                int_edit(ui, "Seed", &mut seed);
                self.settings.seed = Some(seed);
            } else {
                self.settings.seed = None;
            }
        });
        ui.horizontal(|ui| {
            ui.label(format!("Cell count: {}", self.grid.cell_count()));
            ui.label(match self.settings.cell_size {
                Some(size) => format!("Cell size: {size}"),
                None => "Cell size: unset".to_string(),
            });
            ui.label(match self.stopwatch.last_total() {
                Some(total) => format!(
                    "Time to populate: {total:.3}s (avg {:.3}s)",
                    self.stopwatch.average_total()
                ),
                None => "Time to populate: -".to_string(),
            });
            ui.label(&self.pointer_pos);
        });
    }

    fn draw_cell_size_dialog(&mut self, ctx: &egui::Context) {
        let Some(mut dialog) = self.cell_size_dialog.take() else {
            return;
        };
        let mut done = false;
        egui::Window::new("Cell Size")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Enter new cell size (in pixels):");
                ui.text_edit_singleline(&mut dialog.input);
                let valid = dialog.input.parse::<u32>().map_or(false, |size| size >= 1);
                ui.horizontal(|ui| {
                    if ui.add_enabled(valid, egui::Button::new("Ok")).clicked() {
                        self.settings.cell_size = dialog.input.parse().ok();
                        if dialog.populate_after {
                            self.populate_requested = true;
                        }
                        done = true;
                    }
                    if ui.button("Cancel").clicked() {
                        done = true;
                    }
                });
            });
        if !done {
            self.cell_size_dialog = Some(dialog);
        }
    }

    fn draw_canvas(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let rect = response.rect;
        painter.rect_filled(rect, Rounding::ZERO, CANVAS_COLOR);

        // populate against the canvas size the user is actually looking at
        if self.populate_requested {
            self.populate_requested = false;
            self.populate_canvas(rect.width() as u32, rect.height() as u32);
        }

        let (canvas_width, canvas_height) = self.canvas_size;
        if canvas_width == 0 || canvas_height == 0 {
            self.pointer_pos = String::new();
            return;
        }
        let canvas_to_screen = Transform::new_letterboxed(
            Pos2::new(0.0, 0.0),
            Pos2::new(canvas_width as f32, canvas_height as f32),
            rect.min,
            rect.max,
        );

        self.pointer_pos = match response.hover_pos() {
            None => String::new(),
            Some(pos) => {
                let pos = canvas_to_screen.inverse().map_point(pos);
                format!("({:.0}, {:.0})", pos.x, pos.y)
            }
        };

        for segment in &self.segments {
            let (p1, p2) = canvas_to_screen.map_segment(segment);
            painter.line_segment([p1, p2], Stroke::new(LINE_WIDTH, WALL_COLOR));
        }

        if response.clicked() {
            self.handle_click(&canvas_to_screen, response.interact_pointer_pos());
        }
        if response.secondary_clicked() {
            self.marker = None;
            self.selected = None;
        }

        let marker_color = self.marker_color();
        if let Some((row, col)) = self.selected {
            if let Some(cell) = self.grid.cell(row, col) {
                let center = cell.center();
                painter.circle_filled(
                    canvas_to_screen.map_point(Pos2::new(center.x, center.y)),
                    canvas_to_screen.map_dist(LINE_WIDTH),
                    marker_color,
                );
            }
        }
        if let Some((from, to)) = self.marker {
            if let (Some(a), Some(b)) = (self.grid.cell(from.0, from.1), self.grid.cell(to.0, to.1))
            {
                let (ca, cb) = (a.center(), b.center());
                painter.line_segment(
                    [
                        canvas_to_screen.map_point(Pos2::new(ca.x, ca.y)),
                        canvas_to_screen.map_point(Pos2::new(cb.x, cb.y)),
                    ],
                    Stroke::new(LINE_WIDTH, marker_color),
                );
            }
        }
    }

    // first click selects a cell, the second draws the marker to it
    fn handle_click(&mut self, canvas_to_screen: &Transform, pos: Option<Pos2>) {
        let Some(pos) = pos else {
            return;
        };
        let canvas_pos = canvas_to_screen.inverse().map_point(pos);
        if canvas_pos.x < 0.0 || canvas_pos.y < 0.0 {
            return;
        }
        let Some(hit) = self
            .grid
            .cell_at_point(canvas_pos.x as u32, canvas_pos.y as u32)
        else {
            return;
        };
        match self.selected.take() {
            Some(start) if start != hit => self.marker = Some((start, hit)),
            // clicking the selected cell again deselects it
            Some(_) => {}
            None => {
                self.selected = Some(hit);
                self.marker = None;
            }
        }
    }

    fn marker_color(&self) -> Color32 {
        if self.settings.undo_marker {
            MOVE_UNDO_COLOR
        } else {
            MOVE_COLOR
        }
    }
}

fn int_edit<T: std::str::FromStr + ToString>(ui: &mut Ui, label: &str, value: &mut T) {
    ui.label(label);
    let mut text = value.to_string();
    ui.text_edit_singleline(&mut text);
    if let Ok(parsed) = text.parse::<T>() {
        *value = parsed;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.draw_controls(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.draw_canvas(ui));
        self.draw_cell_size_dialog(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }
}
