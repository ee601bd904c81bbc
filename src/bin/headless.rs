//! Headless host: prints the text dump of every generation to stdout.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use torus_life::{Scheduler, SimulationState, TextRenderer, cli::{self, CliArgs}};

#[derive(Debug, Parser)]
#[command(author, version, about = "Print generations as text", long_about = None)]
struct HeadlessArgs {
    #[command(flatten)]
    sim: CliArgs,
    /// Stop after this many generations (runs forever if omitted).
    #[arg(short, long, value_name = "COUNT")]
    generations: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = HeadlessArgs::parse();
    cli::init_tracing(args.sim.log_level)?;

    let config = args.sim.load_config()?;
    let mut state = SimulationState::from_config(&config).context("seeding simulation")?;
    let mut scheduler = Scheduler::new(config.tick_period())?;
    let mut renderer = TextRenderer::new(io::stdout().lock());

    info!(
        rows = config.rows,
        cols = config.cols,
        rule = %state.rule(),
        algorithm = state.algorithm().name(),
        period_ms = scheduler.period().as_millis() as u64,
        "headless run"
    );
    scheduler.run(&mut state, &mut renderer, args.generations)?;

    info!(
        generation = state.current_generation(),
        population = state.current_grid().population(),
        "finished"
    );
    Ok(())
}
