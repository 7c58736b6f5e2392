//! plot-core: motor determinista de derivación de traces
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;
pub mod transform;

pub use engine::{fingerprint_derived, FigureEngine, TraceSlot};
pub use errors::EngineError;
pub use event::{EventStore, FigureEvent, FigureEventKind, InMemoryEventStore};
pub use model::{DerivedTrace, GroupPartition};
pub use transform::{compute_derived_traces, TraceTransform};
