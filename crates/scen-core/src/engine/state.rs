use serde::{Deserialize, Serialize};

/// Estado de una ejecución de escenario.
///
/// Las transiciones válidas son:
/// - `Initialized` -> `RunningSetup`
/// - `RunningSetup` -> `RunningMain` (todos los setups pasaron)
/// - `RunningMain` -> `Finished` (haya fallado o no un step principal)
/// - `Initialized` | `RunningSetup` -> `Aborted` (error fatal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerState {
    Initialized,
    RunningSetup,
    RunningMain,
    Finished,
    Aborted,
}

impl RunnerState {
    pub fn can_transition_to(self, next: RunnerState) -> bool {
        use RunnerState::*;
        matches!((self, next),
                 (Initialized, RunningSetup)
                 | (RunningSetup, RunningMain)
                 | (RunningMain, Finished)
                 | (Initialized, Aborted)
                 | (RunningSetup, Aborted))
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunnerState::Finished | RunnerState::Aborted)
    }
}
