//! Definiciones relacionadas a Steps.
//!
//! Un Step es una unidad independiente con ciclo de vida
//! `pre_execute -> execute -> post_execute -> verify` y, opcionalmente, un
//! manifiesto de inyección. Este módulo define:
//! - `TestStep`: interfaz que implementan los autores de steps.
//! - `StepContexts`: acceso a los tres niveles de contexto de una instancia.
//! - `StepInstance`: instancia type-erased que maneja el runner.
//! - `Phase` y `StepStatus`.

mod contexts;
pub mod definition;
mod instance;
pub mod macros;
mod status;

pub use contexts::StepContexts;
pub use definition::TestStep;
pub use instance::{ErasedStep, StepInstance};
pub use status::{Phase, StepStatus};
