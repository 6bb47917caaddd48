//! Carga de configuración del motor desde variables de entorno.
//! Usa prefijo `SCENFLOW_` y lee `.env` una sola vez si existe.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const ENV_PARALLEL_SCENARIOS: &str = "SCENFLOW_PARALLEL_SCENARIOS";
pub const ENV_WORKER_THREADS: &str = "SCENFLOW_WORKER_THREADS";
pub const ENV_CAPTURE_PANICS: &str = "SCENFLOW_CAPTURE_PANICS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// La suite ejecuta sus escenarios en paralelo (rayon).
    pub parallel_scenarios: bool,
    /// Hilos del pool paralelo; 0 = default de rayon.
    pub worker_threads: usize,
    /// Convierte panics de fases/factories en `StepFailure::Assertion`.
    pub capture_panics: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { parallel_scenarios: false,
               worker_threads: 0,
               capture_panics: true }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        let defaults = Self::default();
        Self { parallel_scenarios: env_flag(ENV_PARALLEL_SCENARIOS).unwrap_or(defaults.parallel_scenarios),
               worker_threads: env::var(ENV_WORKER_THREADS).ok()
                                                           .and_then(|v| v.trim().parse().ok())
                                                           .unwrap_or(defaults.worker_threads),
               capture_panics: env_flag(ENV_CAPTURE_PANICS).unwrap_or(defaults.capture_panics) }
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel_scenarios = enabled;
        self
    }

    pub fn worker_threads(mut self, n: usize) -> Self {
        self.worker_threads = n;
        self
    }

    pub fn capture_panics(mut self, enabled: bool) -> Self {
        self.capture_panics = enabled;
        self
    }
}

fn env_flag(key: &str) -> Option<bool> {
    parse_flag(&env::var(key).ok()?)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
