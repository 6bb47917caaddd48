use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::errors::StepFailure;

/// Payload de un panic que no se convirtió en fallo.
pub(crate) type PanicPayload = Box<dyn Any + Send + 'static>;

/// Ejecuta `f` atrapando siempre el panic.
///
/// Con `capture = true` el panic se convierte en `StepFailure::Assertion`.
/// Con `capture = false` se devuelve el payload en `Err` para que el runner
/// cierre sus eventos y después lo relance con `resume_unwind`.
pub(crate) fn guarded<T>(capture: bool,
                         f: impl FnOnce() -> Result<T, StepFailure>)
                         -> Result<Result<T, StepFailure>, PanicPayload> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => Ok(result),
        Err(payload) if capture => Ok(Err(StepFailure::Assertion(panic_message(payload.as_ref())))),
        Err(payload) => Err(payload),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panics_become_assertion_failures() {
        let r: Result<Result<(), _>, _> = guarded(true, || {
            assert_eq!(1, 2, "numbers differ");
            Ok(())
        });
        match r.unwrap() {
            Err(StepFailure::Assertion(msg)) => assert!(msg.contains("numbers differ")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn errors_pass_through() {
        let r: Result<(), _> = guarded(true, || Err(StepFailure::msg("boom"))).unwrap();
        assert_eq!(r, Err(StepFailure::msg("boom")));
    }

    #[test]
    fn uncaptured_panics_hand_back_the_payload() {
        let r: Result<Result<(), _>, _> = guarded(false, || panic!("raw"));
        let payload = r.err().expect("payload");
        assert_eq!(panic_message(payload.as_ref()), "raw");
    }
}
