use crate::errors::StepResult;
use crate::injection::Injection;

use super::StepContexts;

/// Trait que implementan los autores de steps.
///
/// Todas las fases salvo `execute` son no-op por defecto. Cualquier fase
/// puede fallar devolviendo `Err(StepFailure)`; un `panic!`/`assert!` dentro
/// de una fase también se reporta como fallo del step.
///
/// ```ignore
/// #[derive(Default)]
/// struct FetchStep { port: Option<i32> }
///
/// impl TestStep for FetchStep {
///     fn injections(&self) -> Vec<Injection<Self>> {
///         inject_fields![port <- Global("port")]
///     }
///     fn execute(&mut self, _ctx: &StepContexts) -> StepResult { Ok(()) }
/// }
/// ```
pub trait TestStep: 'static {
    /// Manifiesto de inyección del tipo. Se resuelve una vez por instancia,
    /// antes de `pre_execute`.
    fn injections(&self) -> Vec<Injection<Self>>
        where Self: Sized
    {
        Vec::new()
    }

    fn pre_execute(&mut self, _ctx: &StepContexts) -> StepResult {
        Ok(())
    }

    /// Acción principal del step.
    fn execute(&mut self, ctx: &StepContexts) -> StepResult;

    fn post_execute(&mut self, _ctx: &StepContexts) -> StepResult {
        Ok(())
    }

    /// Aserciones posteriores a la ejecución. No se invoca en steps de setup.
    fn verify(&mut self, _ctx: &StepContexts) -> StepResult {
        Ok(())
    }
}
