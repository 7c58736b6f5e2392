//! Ensamblador de traces derivados.
//!
//! Función pura y total: el mismo `SourceTrace` produce siempre la misma
//! colección (igual por valor). La tabla de despacho es exactamente:
//!
//! | transform activo | groups            | resultado                      |
//! |------------------|-------------------|--------------------------------|
//! | no               | n/a               | 1 derivado idéntico a la fuente|
//! | groupby          | vacío/ausente     | 0 derivados                    |
//! | groupby          | no vacío          | 1 derivado por clave distinta  |

use plot_domain::SourceTrace;

use super::TraceTransform;
use crate::model::DerivedTrace;

/// Punto de entrada único del cómputo de derivación.
pub fn compute_derived_traces(trace: &SourceTrace) -> Vec<DerivedTrace> {
    match trace.active_transform() {
        None => vec![passthrough(trace)],
        Some(spec) => spec.compute_derived(trace),
    }
}

/// Grupo implícito único: datos y estilo de la fuente sin merge alguno.
fn passthrough(trace: &SourceTrace) -> DerivedTrace {
    DerivedTrace {
        group_key: None,
        source_indices: (0..trace.data_len()).collect(),
        data: trace.data.clone(),
        style: trace.base_style.clone(),
    }
}
