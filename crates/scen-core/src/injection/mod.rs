//! Inyección de configuración en instancias de step.
//!
//! Cada tipo de step publica un manifiesto (`Vec<Injection<Self>>`) con
//! triples `(scope, key, setter)`. El `InjectionResolver` resuelve el
//! manifiesto contra los tres contextos en dos fases: primero valida todas
//! las declaraciones (presencia + tipo) y sólo si todas son válidas aplica
//! los setters. Nunca hay inyección parcial.

mod declaration;
mod resolver;

pub use declaration::{Injection, InjectionDeclaration};
pub use resolver::InjectionResolver;
