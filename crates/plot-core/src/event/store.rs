use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

use super::{FigureEvent, FigureEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo
    /// (con seq y ts asignados).
    fn append_kind(&mut self, figure_id: Uuid, kind: FigureEventKind) -> FigureEvent;
    /// Lista los eventos de una figura en orden ascendente por seq.
    fn list(&self, figure_id: Uuid) -> Vec<FigureEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: HashMap<Uuid, Vec<FigureEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, figure_id: Uuid, kind: FigureEventKind) -> FigureEvent {
        let events = self.inner.entry(figure_id).or_default();
        let ev = FigureEvent {
            seq: events.len() as u64,
            figure_id,
            kind,
            ts: Utc::now(),
        };
        events.push(ev.clone());
        ev
    }

    fn list(&self, figure_id: Uuid) -> Vec<FigureEvent> {
        self.inner.get(&figure_id).cloned().unwrap_or_default()
    }
}
