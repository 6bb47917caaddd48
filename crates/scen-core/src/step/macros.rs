//! Macro utilitaria para declarar manifiestos de inyección sobre campos
//! `Option<T>` sin escribir cada setter a mano.
//!
//! Exportada en la raíz del crate:
//!   use scen_core::inject_fields;

/// Construye un `Vec<Injection<Self>>` a partir de `campo <- origen`.
///
/// Formas soportadas (pueden mezclarse):
/// - `campo <- "key"`: scope por defecto (SCENARIO).
/// - `campo <- Global("key")`, `campo <- Scenario("key")`,
///   `campo <- Step("key")`.
///
/// Cada campo debe ser `Option<T>`; `T` es el tipo que se espera en el
/// contexto.
#[macro_export]
macro_rules! inject_fields {
    // Fin: emitir el vec acumulado
    (@acc [$($out:expr),*]) => {
        ::std::vec![$($out),*]
    };
    // Scope por defecto
    (@acc [$($out:expr),*] $field:ident <- $key:literal $(, $($rest:tt)*)?) => {
        $crate::inject_fields!(@acc [$($out,)* $crate::injection::Injection::new(
            $crate::constants::DEFAULT_SCOPE,
            $key,
            |step: &mut Self, value| step.$field = ::std::option::Option::Some(value),
        )] $($($rest)*)?)
    };
    // Scope explícito
    (@acc [$($out:expr),*] $field:ident <- $scope:ident ($key:expr) $(, $($rest:tt)*)?) => {
        $crate::inject_fields!(@acc [$($out,)* $crate::injection::Injection::new(
            $crate::context::Scope::$scope,
            $key,
            |step: &mut Self, value| step.$field = ::std::option::Option::Some(value),
        )] $($($rest)*)?)
    };
    ($($body:tt)*) => {
        $crate::inject_fields!(@acc [] $($body)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::context::{Context, Scope};
    use crate::errors::StepResult;
    use crate::injection::{Injection, InjectionResolver};
    use crate::step::{StepContexts, TestStep};

    #[derive(Default)]
    struct Fetch {
        scenario_val: Option<i32>,
        global_val: Option<i32>,
        home: Option<String>,
    }

    impl TestStep for Fetch {
        fn injections(&self) -> Vec<Injection<Self>> {
            inject_fields![
                scenario_val <- Scenario("key"),
                global_val <- Global("key"),
                home <- "home",
            ]
        }

        fn execute(&mut self, _ctx: &StepContexts) -> StepResult {
            Ok(())
        }
    }

    #[test]
    fn macro_builds_manifest_with_default_scope() {
        let manifest = Fetch::default().injections();
        let scopes: Vec<(Scope, &str)> = manifest.iter().map(|i| (i.scope(), i.key())).collect();
        assert_eq!(scopes,
                   vec![(Scope::Scenario, "key"), (Scope::Global, "key"), (Scope::Scenario, "home")]);
        assert_eq!(manifest[0].declaration().expected, "i32");
    }

    #[test]
    fn macro_setters_assign_fields() {
        let ctxs = StepContexts::new("3_fetch", Context::shared(), Context::shared());
        ctxs.global_context().set("key", 100_i32);
        ctxs.scenario_context().set("key", 100_i32);
        ctxs.scenario_context().set("home", "/path/to/home".to_string());

        let mut step = Fetch::default();
        InjectionResolver::new(&ctxs).inject(&mut step, &Fetch::default().injections()).expect("inject");
        assert_eq!(step.scenario_val, Some(100));
        assert_eq!(step.global_val, Some(100));
        assert_eq!(step.home.as_deref(), Some("/path/to/home"));
    }
}
