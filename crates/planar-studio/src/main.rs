mod app;
mod config;
mod controls;

use anyhow::Result;

use planar_engine::device::GpuInit;
use planar_engine::logging::{init_logging, LoggingConfig};
use planar_engine::window::Runtime;

use crate::app::StudioApp;
use crate::config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::from_env_var("PLANAR_LOG"));

    let config = match std::env::args_os().nth(1) {
        Some(path) => StudioConfig::load_from_file(&path)?,
        None => StudioConfig::builtin()?,
    };
    log::info!(
        "scene: {} shapes, spin {}",
        config.shapes.len(),
        if config.animation.spin { "on" } else { "off" }
    );
    log::info!(
        "keys: Tab select, arrows move, Q/E rotate, +/- scale, C pivot, F fill, Space spin, Esc quit"
    );

    let app = StudioApp::new(&config)?;
    Runtime::run(config.runtime_config(), GpuInit::default(), app)
}
