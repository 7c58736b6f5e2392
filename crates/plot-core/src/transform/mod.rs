//! Transforms del motor: despacho cerrado sobre `TransformSpec`.

pub mod assembler;
pub mod groupby;

pub use assembler::compute_derived_traces;

use plot_domain::{SourceTrace, TransformSpec};

use crate::model::DerivedTrace;

/// Interfaz fija de un transform: normalización de defaults y cómputo de la
/// colección derivada. Implementada por el enum cerrado `TransformSpec`, de
/// modo que el despacho se resuelve por match y no por lookup dinámico.
pub trait TraceTransform {
    /// Versión normalizada de la especificación (defaults completos).
    fn supply_defaults(&self) -> TransformSpec;

    /// Colección derivada para un trace fuente. Pura y total: nunca falla,
    /// toda entrada degenerada tiene salida definida.
    fn compute_derived(&self, trace: &SourceTrace) -> Vec<DerivedTrace>;
}

impl TraceTransform for TransformSpec {
    fn supply_defaults(&self) -> TransformSpec {
        match self {
            TransformSpec::GroupBy(spec) => TransformSpec::GroupBy(spec.supply_defaults()),
        }
    }

    fn compute_derived(&self, trace: &SourceTrace) -> Vec<DerivedTrace> {
        match self {
            TransformSpec::GroupBy(spec) => groupby::compute_derived(trace, spec),
        }
    }
}
