//! PlotFlow Rust Library
//!
//! Este crate actúa como la fachada de PlotFlow:
//! - Re-exporta el modelo declarativo (`plot-domain`) y el motor de
//!   derivación (`plot-core`).
//! - Expone `config` con la configuración de entorno de la aplicación.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;

pub use plot_core::{
    compute_derived_traces, fingerprint_derived, DerivedTrace, EngineError, EventStore,
    FigureEngine, FigureEvent, FigureEventKind, GroupPartition, InMemoryEventStore,
    TraceTransform,
};
pub use plot_domain::{
    ConfigNode, DomainError, EditTarget, GroupBySpec, GroupKey, SourceTrace, StylePath,
    TraceExtension, TransformSpec, Visibility,
};
