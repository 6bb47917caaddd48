//! scen-adapters: steps reutilizables sobre `scen-core`.
//!
//! Este crate provee:
//! - Un parser de archivos `.properties` (formato clave/valor de Java).
//! - Steps genéricos: importación de properties al contexto de escenario,
//!   escritura y verificación de valores tipados, pass/fail.
//! - `builtin_registry()`: registro listo para planes JSON.

pub mod properties;
pub mod registry;
pub mod steps;

pub use properties::{Properties, PropertiesError};
pub use registry::{builtin_registry, builtin_registry_in};
pub use steps::{ContextValue, ExpectValueStep, FailStep, ImportPropertiesStep, PassStep, SetValueStep};
