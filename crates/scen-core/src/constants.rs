//! Constantes del motor de escenarios.
//!
//! `ENGINE_VERSION` forma parte del input con el que se calculan los ids de
//! `Description`; cambiarla invalida las identidades reportadas aunque los
//! nombres de los steps no cambien.

/// Versión lógica del motor. Mantener estable mientras no haya cambios
/// incompatibles en la forma de reportar.
pub const ENGINE_VERSION: &str = "S1.0";

/// Scope por defecto de una inyección cuando no se declara explícitamente.
pub const DEFAULT_SCOPE: crate::context::Scope = crate::context::Scope::Scenario;
