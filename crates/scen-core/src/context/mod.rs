//! Contextos clave-valor compartidos entre steps.
//!
//! Existen tres niveles: `Global` (vive toda la suite, puede compartirse
//! entre escenarios concurrentes), `Scenario` (una ejecución) y `Step` (una
//! instancia de step). Todos usan el mismo contenedor concurrente.

mod scope;
mod store;

pub use scope::Scope;
pub use store::{Context, ContextEntry, SharedContext};
