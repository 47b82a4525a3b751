// app.rs - egui shell: draws the grid, maps clicks to cells, applies ticks

use egui::{Color32, Rect, Stroke, Vec2};
use tokio::runtime::Runtime;

use life_core::patterns::PATTERNS;
use life_core::{Controller, Engine, Grid, LifeConfig, LifeError, RunState, Shell, Tick};

use crate::ticker::Ticker;

const CELL_SIZE: f32 = 18.0;
const SPACING: f32 = 1.0;
/// Distance between the top-left corners of adjacent cells.
pub const CELL_PITCH: f32 = CELL_SIZE + SPACING;
const RANDOM_DENSITY: f64 = 0.33;

/// Cell under a pointer offset measured from the grid's top-left corner.
/// Offsets left of or above the grid map to negative coordinates.
pub fn cell_at(offset: Vec2) -> (isize, isize) {
    let pitch = CELL_PITCH;
    (
        (offset.y / pitch).floor() as isize,
        (offset.x / pitch).floor() as isize,
    )
}

/// Bridges controller notifications to the tick driver and the egui context.
pub struct UiShell {
    ticker: Ticker,
    ctx: egui::Context,
    ended: Option<u64>,
}

impl Shell for UiShell {
    fn start_driver(&mut self) {
        let ctx = self.ctx.clone();
        self.ticker.start(move || ctx.request_repaint());
    }

    fn stop_driver(&mut self) {
        self.ticker.stop();
    }

    fn generation_advanced(&mut self, _generation: u64, _grid: &Grid) {
        self.ctx.request_repaint();
    }

    fn simulation_ended(&mut self, generation: u64) {
        self.ended = Some(generation);
        self.ctx.request_repaint();
    }
}

pub struct LifeApp {
    controller: Controller<UiShell>,
    selected_pattern: usize,
    live_color: Color32,
    dead_color: Color32,
    status: Option<String>,
    // Owns the ticker's worker threads; dropped after the controller.
    _runtime: Runtime,
}

impl LifeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        engine: Engine,
        config: &LifeConfig,
        runtime: Runtime,
    ) -> Self {
        let shell = UiShell {
            ticker: Ticker::new(runtime.handle().clone(), config.tick_interval()),
            ctx: cc.egui_ctx.clone(),
            ended: None,
        };

        Self {
            controller: Controller::new(engine, shell),
            selected_pattern: 0,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            status: None,
            _runtime: runtime,
        }
    }

    fn apply_pending_ticks(&mut self) {
        let pending = self.controller.shell_mut().ticker.drain();
        for _ in 0..pending {
            match self.controller.on_tick() {
                Tick::Advanced { .. } => {}
                Tick::Extinct { .. } | Tick::Ignored => break,
            }
        }
    }

    fn report(&mut self, result: Result<(), LifeError>) {
        self.status = result.err().map(|e| e.to_string());
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let editing = self.controller.state() == RunState::Editing;

        ui.horizontal(|ui| {
            if ui.add_enabled(editing, egui::Button::new("▶ Start simulation")).clicked() {
                let started = self.controller.start();
                self.report(started);
            }

            if ui.button("⏹ Restart").clicked() {
                self.controller.reset();
                self.controller.shell_mut().ended = None;
                self.status = None;
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.add_enabled(editing, egui::Button::new("Apply pattern")).clicked() {
                let loaded = self.controller.load_pattern(&PATTERNS[self.selected_pattern]);
                self.report(loaded.map(|_| ()));
            }

            if ui.add_enabled(editing, egui::Button::new("🎲 Random")).clicked() {
                let filled = self.controller.randomize(&mut rand::thread_rng(), RANDOM_DENSITY);
                self.report(filled.map(|_| ()));
            }
        });
    }

    fn grid_view(&mut self, ui: &mut egui::Ui) {
        let grid = self.controller.engine().grid();
        let pitch = CELL_PITCH;
        let total_size = Vec2::new(
            pitch * grid.width() as f32 - SPACING,
            pitch * grid.height() as f32 - SPACING,
        );

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::GRAY);

        for (row, cells) in grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                    Vec2::splat(CELL_SIZE),
                );
                let color = if cell.is_alive() { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(160)));
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (row, col) = cell_at(pos - origin);
                match self.controller.try_edit(row, col) {
                    Ok(_) => self.status = None,
                    // Click landed in the spacing around the grid.
                    Err(LifeError::OutOfBounds { .. }) => {}
                    Err(e) => self.status = Some(e.to_string()),
                }
            }
        }
    }

    fn stats(&self, ui: &mut egui::Ui) {
        let engine = self.controller.engine();
        let total = engine.width() * engine.height();
        let live = engine.population();

        ui.horizontal(|ui| {
            ui.label(format!("State: {}", self.controller.state()));
            ui.separator();
            ui.label(format!("Generation: {}", engine.generation()));
            ui.separator();
            ui.label(format!("Live cells: {live}"));
            ui.label(format!("Dead cells: {}", total - live));
            ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
        });
    }

    fn extinction_notice(&mut self, ctx: &egui::Context) {
        let Some(generation) = self.controller.shell().ended else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Simulation ended")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!("Population extinct after {generation} generations."));
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.controller.shell_mut().ended = None;
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_pending_ticks();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            self.controls(ui);
            ui.separator();

            if self.controller.state() == RunState::Editing {
                ui.label("Click cells to toggle them, then start the simulation.");
            } else {
                ui.label("Cells are locked while the simulation runs. Restart to edit.");
            }
            if let Some(status) = &self.status {
                ui.colored_label(Color32::RED, status.as_str());
            }

            ui.separator();
            self.grid_view(ui);
            ui.separator();
            self.stats(ui);
        });

        self.extinction_notice(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_to_cell() {
        let pitch = CELL_PITCH;
        assert_eq!(cell_at(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(cell_at(Vec2::new(pitch * 3.5, pitch * 2.1)), (2, 3));
        assert_eq!(cell_at(Vec2::new(pitch * 29.9, pitch * 29.9)), (29, 29));
    }

    #[test]
    fn pitch_is_cell_plus_spacing() {
        assert_eq!(cell_at(Vec2::splat(CELL_PITCH)), (1, 1));
        assert_eq!(cell_at(Vec2::splat(CELL_PITCH - 0.01)), (0, 0));
    }

    #[test]
    fn pointer_outside_maps_to_out_of_bounds_cell() {
        assert_eq!(cell_at(Vec2::new(-1.0, 5.0)), (0, -1));
        assert_eq!(cell_at(Vec2::new(5.0, -0.5)), (-1, 0));
    }
}
