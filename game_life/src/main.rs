// main.rs - Desktop shell for the Game of Life engine

mod app;
mod error;
mod ticker;

use life_core::{Engine, LifeConfig};

use app::{CELL_PITCH, LifeApp};
use error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::init();

    let config = LifeConfig::default();
    let engine = Engine::from_config(&config)?;
    let runtime = tokio::runtime::Runtime::new()?;

    log::info!(
        "Game of Life - {}x{} grid, {} ms per generation",
        config.grid_width,
        config.grid_height,
        config.tick_interval_ms
    );
    log::info!("Click cells to toggle them, then start the simulation.");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            config.grid_width as f32 * CELL_PITCH + 60.0,
            config.grid_height as f32 * CELL_PITCH + 200.0,
        ]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeApp::new(cc, engine, &config, runtime))),
    )?;
    Ok(())
}
