use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

/// Contexto compartido por referencia (los tres niveles se pasan así).
pub type SharedContext = Arc<Context>;

/// Valor almacenado junto al nombre de su tipo concreto.
///
/// El nombre del tipo sólo se usa para mensajes de `Binding`; la
/// compatibilidad se decide con `downcast`.
#[derive(Clone)]
pub struct ContextEntry {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ContextEntry {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self { value: Arc::new(value),
               type_name: type_name::<T>() }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Copia del valor si el tipo coincide.
    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        self.value.downcast_ref::<T>().cloned()
    }
}

impl fmt::Debug for ContextEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextEntry").field("type_name", &self.type_name).finish()
    }
}

/// Almacén clave-valor seguro para lectura/escritura concurrente.
///
/// No hay borrado; `set` repetido sobre la misma clave gana la última
/// escritura.
#[derive(Default)]
pub struct Context {
    entries: DashMap<String, ContextEntry>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea un contexto ya envuelto en `Arc`.
    pub fn shared() -> SharedContext {
        Arc::new(Self::new())
    }

    /// Upsert incondicional.
    pub fn set<T: Any + Send + Sync>(&self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), ContextEntry::new(value));
    }

    /// Valor tipado. Devuelve `None` si la clave no existe o si el tipo
    /// almacenado no es `T`; nunca falla.
    pub fn get<T: Any + Clone>(&self, key: &str) -> Option<T> {
        self.entries.get(key).and_then(|e| e.downcast::<T>())
    }

    /// Entrada sin tipar; permite distinguir "ausente" de "tipo incorrecto".
    pub fn get_entry(&self, key: &str) -> Option<ContextEntry> {
        self.entries.get(key).map(|e| e.value().clone())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Claves ordenadas (útil para logs y reportes deterministas).
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("keys", &self.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn get_returns_none_for_absent_or_mismatched_type() {
        let ctx = Context::new();
        ctx.set("port", 8080_i32);
        assert_eq!(ctx.get::<i32>("port"), Some(8080));
        assert_eq!(ctx.get::<String>("port"), None);
        assert_eq!(ctx.get::<i32>("missing"), None);
    }

    #[test]
    fn last_write_wins() {
        let ctx = Context::new();
        ctx.set("k", "first".to_string());
        ctx.set("k", "second".to_string());
        assert_eq!(ctx.get::<String>("k").as_deref(), Some("second"));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn entry_keeps_type_name() {
        let ctx = Context::new();
        ctx.set("n", 1_u64);
        let entry = ctx.get_entry("n").expect("entry");
        assert!(entry.is::<u64>());
        assert_eq!(entry.type_name(), "u64");
    }

    #[test]
    fn concurrent_writers_are_all_visible() {
        let ctx = Context::shared();
        let handles: Vec<_> = (0..8).map(|i| {
                                        let ctx = Arc::clone(&ctx);
                                        thread::spawn(move || {
                                            for j in 0..50 {
                                                ctx.set(format!("t{i}-{j}"), j);
                                            }
                                        })
                                    })
                                    .collect();
        for h in handles {
            h.join().expect("writer thread");
        }
        assert_eq!(ctx.len(), 8 * 50);
        assert_eq!(ctx.get::<i32>("t3-49"), Some(49));
    }
}
