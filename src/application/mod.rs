mod simulation;
mod scheduler;

pub use simulation::{Lifecycle, SimulationState};
pub use scheduler::Scheduler;
