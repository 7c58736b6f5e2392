//! Tipos de evento de la figura y estructura `FigureEvent`.
//!
//! Cada edición sobre el motor emite un evento antes de recomputar; el log
//! permite auditar la secuencia edición → recomputación y verificar que cada
//! mutación de estilo/datos/grupos fue seguida de un `DerivedRecomputed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use plot_domain::{EditTarget, Visibility};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FigureEventKind {
    /// Se agregó un trace fuente a la figura.
    TraceAdded { trace_id: Uuid, points: usize },
    /// Se reemplazó un valor de estilo (base, override de grupo o mapping
    /// completo), identificado por su target tipado.
    StyleReplaced { trace_id: Uuid, target: EditTarget },
    /// Se reemplazó la secuencia completa de claves de grupo.
    GroupsReplaced { trace_id: Uuid, len: usize },
    /// Appensión en lockstep de datos (y grupos, si aplica).
    DataExtended { trace_id: Uuid, added: usize },
    /// Cambio del flag de visibilidad. No dispara recomputación: el contenido
    /// derivado no depende de él.
    VisibilityChanged { trace_id: Uuid, visible: Visibility },
    /// Se eliminó el trace y se descartó su colección derivada.
    TraceRemoved { trace_id: Uuid },
    /// La colección derivada del trace fue regenerada por completo.
    DerivedRecomputed {
        trace_id: Uuid,
        derived_count: usize,
        fingerprint: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureEvent {
    pub seq: u64, // asignado por el EventStore (orden de append)
    pub figure_id: Uuid,
    pub kind: FigureEventKind,
    pub ts: DateTime<Utc>, // metadato, no entra en ningún fingerprint
}
