//! Registro de los steps incluidos en este crate.
//!
//! | uses                | step                   | with                                  |
//! |---------------------|------------------------|---------------------------------------|
//! | `import_properties` | `ImportPropertiesStep` | `path`, `base_dir?`                   |
//! | `set_value`         | `SetValueStep`         | `key`, `value`, `scope?`              |
//! | `expect_value`      | `ExpectValueStep`      | `key`, `equals`, `scope?`             |
//! | `pass`              | `PassStep`             |                                       |
//! | `fail`              | `FailStep`             | `message?`                            |

use std::path::PathBuf;

use scen_core::StepRegistry;

use crate::steps::{ExpectValueParams, ExpectValueStep, FailParams, FailStep, ImportPropertiesParams,
                   ImportPropertiesStep, PassStep, SetValueParams, SetValueStep};

pub fn builtin_registry() -> StepRegistry {
    registry(None)
}

/// Como `builtin_registry`, resolviendo los paths relativos de
/// `import_properties` contra `base_dir`.
pub fn builtin_registry_in(base_dir: impl Into<PathBuf>) -> StepRegistry {
    registry(Some(base_dir.into()))
}

fn registry(base_dir: Option<PathBuf>) -> StepRegistry {
    let mut registry = StepRegistry::new();
    registry.register_with("import_properties", move |p: ImportPropertiesParams| {
                Ok(ImportPropertiesStep::from_params(p, base_dir.as_deref()))
            })
            .register_with("set_value", |p: SetValueParams| Ok(SetValueStep::from(p)))
            .register_with("expect_value", |p: ExpectValueParams| Ok(ExpectValueStep::from(p)))
            .register("pass", |_| Ok(PassStep))
            .register_with("fail", |p: FailParams| Ok(FailStep::from(p)));
    registry
}
