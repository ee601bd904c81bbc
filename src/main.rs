use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};

use torus_life::{Renderer, Scheduler, SimulationState, cli::{self, CliArgs}, rendering::WindowRenderer};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 800,
        window_height: 478,
        window_resizable: true,
        ..Default::default()
    }
}

/// Frame-driven host: macroquad supplies the frame time, the scheduler
/// turns it into ticks, the renderer draws whatever is current.
async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = args.load_config()?;
    let mut state = SimulationState::from_config(&config).context("seeding simulation")?;
    let mut scheduler = Scheduler::new(config.tick_period())?;
    let mut renderer = WindowRenderer::new();

    info!(
        rows = config.rows,
        cols = config.cols,
        rule = %state.rule(),
        algorithm = state.algorithm().name(),
        period_ms = scheduler.period().as_millis() as u64,
        "Conway's Game of Life is starting"
    );
    renderer.initialize(state.current_grid())?;

    loop {
        scheduler.advance(Duration::from_secs_f32(get_frame_time()), &mut state);
        renderer.render(state.current_grid(), state.current_generation())?;
        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = CliArgs::parse();
    if let Err(err) = cli::init_tracing(args.log_level) {
        eprintln!("failed to initialize logging: {err:#}");
    }

    if let Err(err) = run(args).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
