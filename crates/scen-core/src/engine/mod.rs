//! Orquestación de escenarios.
//!
//! - `ScenarioRunner`: ejecuta un escenario (setup + main, fail-fast).
//! - `ScenarioSuite`: varios escenarios compartiendo un contexto global.
//! - `RunnerState`: máquina de estados de una ejecución.

mod guard;
mod outcome;
mod runner;
mod state;
mod suite;

pub use outcome::{ScenarioReport, StepOutcome, SuiteReport};
pub use runner::ScenarioRunner;
pub use state::RunnerState;
pub use suite::ScenarioSuite;
