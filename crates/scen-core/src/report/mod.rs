//! Contrato de reporte hacia el host y sinks incluidos.
//!
//! Rol en el flujo:
//! - El `ScenarioRunner` emite, por ejecución, exactamente un par
//!   suite-started/suite-finished y un par step-started/step-finished por
//!   cada step principal intentado (más step-failed si falló).
//! - Los steps saltados tras un fallo no generan eventos.
//! - Cualquier integración con un host de tests es un adapter que
//!   implementa `ReportingSink`.

mod events;
mod log_sink;
mod memory;
mod sink;

pub use events::{ReportEvent, ReportEventKind};
pub use log_sink::LogSink;
pub use memory::RecordingSink;
pub use sink::{FanoutSink, NullSink, ReportingSink};
