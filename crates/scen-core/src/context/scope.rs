use std::fmt;

use serde::{Deserialize, Serialize};

/// Nivel de contexto del que una inyección lee su valor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    #[default]
    Scenario,
    Step,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "GLOBAL",
            Scope::Scenario => "SCENARIO",
            Scope::Step => "STEP",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
