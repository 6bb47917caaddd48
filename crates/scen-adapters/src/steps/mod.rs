//! Steps genéricos listos para usar en escenarios y planes.
pub mod context_values;
pub mod import_properties;
pub mod outcome;

pub use context_values::{ContextValue, ExpectValueParams, ExpectValueStep, SetValueParams, SetValueStep};
pub use import_properties::{ImportPropertiesParams, ImportPropertiesStep};
pub use outcome::{FailParams, FailStep, PassStep};
