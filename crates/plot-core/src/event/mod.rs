//! Log append-only de ediciones y recomputaciones de la figura.

pub mod store;
pub mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{FigureEvent, FigureEventKind};
