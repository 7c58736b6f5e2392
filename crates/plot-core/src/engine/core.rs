//! Implementación del `FigureEngine`.
//!
//! El motor es el único dueño de los `SourceTrace`; cada operación de edición
//! emite su evento y regenera de forma completa (nunca parcial) la colección
//! derivada del trace afectado, de modo que antes del siguiente render la
//! derivación siempre refleja el estado fuente actual. Sin estado compartido
//! entre invocaciones: la recomputación es función pura de la fuente.

use indexmap::IndexMap;
use serde_json::{json, Value};
use uuid::Uuid;

use plot_domain::{
    ConfigNode, EditTarget, GroupKey, SourceTrace, StylePath, TraceExtension, TransformSpec,
    Visibility,
};

use crate::constants::ENGINE_VERSION;
use crate::errors::EngineError;
use crate::event::{EventStore, FigureEvent, FigureEventKind, InMemoryEventStore};
use crate::hashing::hash_value;
use crate::model::DerivedTrace;
use crate::transform::{compute_derived_traces, TraceTransform};

/// Un trace fuente con su colección derivada vigente.
#[derive(Debug)]
pub struct TraceSlot {
    pub id: Uuid,
    pub source: SourceTrace,
    pub derived: Vec<DerivedTrace>,
}

/// Fingerprint del resultado de una recomputación. Incluye la versión del
/// motor: un cambio de motor invalida fingerprints aunque la fuente no cambie.
pub fn fingerprint_derived(derived: &[DerivedTrace]) -> String {
    let value = json!({
        "engine_version": ENGINE_VERSION,
        "derived": serde_json::to_value(derived).unwrap_or(Value::Null),
    });
    hash_value(&value)
}

#[derive(Debug)]
pub struct FigureEngine<E: EventStore> {
    figure_id: Uuid,
    slots: Vec<TraceSlot>,
    event_store: E,
}

impl FigureEngine<InMemoryEventStore> {
    /// Motor con log de eventos en memoria.
    pub fn in_memory() -> Self {
        FigureEngine::with_store(InMemoryEventStore::default())
    }
}

impl<E: EventStore> FigureEngine<E> {
    pub fn with_store(event_store: E) -> Self {
        FigureEngine { figure_id: Uuid::new_v4(), slots: Vec::new(), event_store }
    }

    pub fn figure_id(&self) -> Uuid {
        self.figure_id
    }

    pub fn trace_count(&self) -> usize {
        self.slots.len()
    }

    fn emit(&mut self, kind: FigureEventKind) {
        self.event_store.append_kind(self.figure_id, kind);
    }

    fn slot(&self, index: usize) -> Result<&TraceSlot, EngineError> {
        self.slots.get(index).ok_or(EngineError::InvalidTraceIndex(index))
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut TraceSlot, EngineError> {
        self.slots.get_mut(index).ok_or(EngineError::InvalidTraceIndex(index))
    }

    /// Regenera por completo la colección derivada del slot y emite el evento
    /// de recomputación con su fingerprint.
    fn recompute(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        slot.derived = compute_derived_traces(&slot.source);
        let trace_id = slot.id;
        let derived_count = slot.derived.len();
        let fingerprint = fingerprint_derived(&slot.derived);
        self.emit(FigureEventKind::DerivedRecomputed { trace_id, derived_count, fingerprint });
    }

    /// Agrega un trace fuente y computa su derivación inicial. Los transforms
    /// entran normalizados (`supply_defaults`). Devuelve el índice del trace
    /// dentro de la figura.
    pub fn add_trace(&mut self, mut source: SourceTrace) -> usize {
        source.transforms = source.transforms.iter().map(TraceTransform::supply_defaults).collect();
        let trace_id = Uuid::new_v4();
        let points = source.data_len();
        self.slots.push(TraceSlot { id: trace_id, source, derived: Vec::new() });
        let index = self.slots.len() - 1;
        self.emit(FigureEventKind::TraceAdded { trace_id, points });
        self.recompute(index);
        index
    }

    /// Reemplaza un valor del estilo base en el path dado.
    pub fn restyle_base(
        &mut self,
        index: usize,
        path: &StylePath,
        value: Value,
    ) -> Result<(), EngineError> {
        let slot = self.slot_mut(index)?;
        slot.source.base_style.set(path, ConfigNode::from(value))?;
        let trace_id = slot.id;
        self.emit(FigureEventKind::StyleReplaced {
            trace_id,
            target: EditTarget::BaseStyle(path.clone()),
        });
        self.recompute(index);
        Ok(())
    }

    /// Reemplaza un valor dentro del override de estilo de un grupo,
    /// creando la entrada del grupo si no existía.
    pub fn set_group_style(
        &mut self,
        index: usize,
        key: GroupKey,
        path: &StylePath,
        value: Value,
    ) -> Result<(), EngineError> {
        let slot = self.slot_mut(index)?;
        let Some(TransformSpec::GroupBy(spec)) = slot.source.active_transform_mut() else {
            return Err(EngineError::NoGroupingTransform);
        };
        let entry = spec.styles.entry(key.clone()).or_insert_with(ConfigNode::empty_tree);
        entry.set(path, ConfigNode::from(value))?;
        let trace_id = slot.id;
        self.emit(FigureEventKind::StyleReplaced {
            trace_id,
            target: EditTarget::GroupStyle(key, path.clone()),
        });
        self.recompute(index);
        Ok(())
    }

    /// Reemplaza el mapping completo de overrides por grupo, con la misma
    /// normalización que `add_trace`: un override que no es árbol equivale a
    /// "sin override".
    pub fn set_group_styles(
        &mut self,
        index: usize,
        styles: IndexMap<GroupKey, ConfigNode>,
    ) -> Result<(), EngineError> {
        let slot = self.slot_mut(index)?;
        let Some(TransformSpec::GroupBy(spec)) = slot.source.active_transform_mut() else {
            return Err(EngineError::NoGroupingTransform);
        };
        spec.styles = styles
            .into_iter()
            .map(|(k, node)| {
                let node = if node.is_tree() { node } else { ConfigNode::empty_tree() };
                (k, node)
            })
            .collect();
        let trace_id = slot.id;
        self.emit(FigureEventKind::StyleReplaced { trace_id, target: EditTarget::GroupStyles });
        self.recompute(index);
        Ok(())
    }

    /// Reemplaza la secuencia completa de claves de grupo.
    pub fn set_groups(&mut self, index: usize, groups: Vec<GroupKey>) -> Result<(), EngineError> {
        let slot = self.slot_mut(index)?;
        let Some(TransformSpec::GroupBy(spec)) = slot.source.active_transform_mut() else {
            return Err(EngineError::NoGroupingTransform);
        };
        let len = groups.len();
        spec.groups = groups;
        let trace_id = slot.id;
        self.emit(FigureEventKind::GroupsReplaced { trace_id, len });
        self.recompute(index);
        Ok(())
    }

    /// Cambia el flag de visibilidad. No recomputa: el contenido y la cantidad
    /// de derivados no dependen de la visibilidad, solo el render view.
    pub fn set_visible(&mut self, index: usize, visible: Visibility) -> Result<(), EngineError> {
        let slot = self.slot_mut(index)?;
        slot.source.visible = visible;
        let trace_id = slot.id;
        self.emit(FigureEventKind::VisibilityChanged { trace_id, visible });
        Ok(())
    }

    /// Appensión en lockstep: el bundle ya garantiza slices de igual longitud;
    /// acá se exige además que un trace agrupado extienda también sus grupos
    /// (y que uno sin groupby no traiga grupos), y que la extensión cubra
    /// todas las secuencias declaradas: una secuencia sin extender quedaría
    /// con longitud distinta de `n` y fuera del rebanado por grupo.
    pub fn extend_trace(&mut self, index: usize, ext: TraceExtension) -> Result<(), EngineError> {
        let slot = self.slot_mut(index)?;
        let grouped = matches!(slot.source.active_transform(), Some(TransformSpec::GroupBy(_)));
        match (ext.groups().is_some(), grouped) {
            (false, true) => return Err(EngineError::GroupsNotExtended),
            (true, false) => return Err(EngineError::NoGroupingTransform),
            _ => {}
        }
        for attr in ext.data().keys() {
            if !slot.source.data.contains_key(attr) {
                return Err(EngineError::UnknownAttribute(attr.clone()));
            }
        }
        for attr in slot.source.data.keys() {
            if !ext.data().contains_key(attr) {
                return Err(EngineError::MissingAttribute(attr.clone()));
            }
        }

        let added = ext.added();
        let (data, groups) = ext.into_parts();
        for (attr, tail) in data {
            if let Some(seq) = slot.source.data.get_mut(&attr) {
                seq.extend(tail);
            }
        }
        if let Some(tail) = groups {
            if let Some(TransformSpec::GroupBy(spec)) = slot.source.active_transform_mut() {
                spec.groups.extend(tail);
            }
        }
        let trace_id = slot.id;
        self.emit(FigureEventKind::DataExtended { trace_id, added });
        self.recompute(index);
        Ok(())
    }

    /// Elimina el trace y descarta su colección derivada. Ningún otro trace
    /// necesita actualización.
    pub fn delete_trace(&mut self, index: usize) -> Result<SourceTrace, EngineError> {
        if index >= self.slots.len() {
            return Err(EngineError::InvalidTraceIndex(index));
        }
        let slot = self.slots.remove(index);
        self.emit(FigureEventKind::TraceRemoved { trace_id: slot.id });
        Ok(slot.source)
    }

    pub fn source(&self, index: usize) -> Result<&SourceTrace, EngineError> {
        Ok(&self.slot(index)?.source)
    }

    pub fn derived(&self, index: usize) -> Result<&[DerivedTrace], EngineError> {
        Ok(&self.slot(index)?.derived)
    }

    /// Todos los derivados de la figura, en orden de trace y de grupo.
    pub fn all_derived(&self) -> impl Iterator<Item = &DerivedTrace> {
        self.slots.iter().flat_map(|slot| slot.derived.iter())
    }

    /// Derivados que la capa de render efectivamente dibuja: solo los de
    /// fuentes `Shown` (`LegendOnly` figura en la leyenda pero no se dibuja).
    pub fn render_view(&self) -> Vec<&DerivedTrace> {
        self.slots
            .iter()
            .filter(|slot| slot.source.visible == Visibility::Shown)
            .flat_map(|slot| slot.derived.iter())
            .collect()
    }

    /// Longitudes de todos los derivados, en orden. Espejo de las dimensiones
    /// que mediría el renderer con todo visible.
    pub fn derived_dims(&self) -> Vec<usize> {
        self.all_derived().map(DerivedTrace::len).collect()
    }

    /// Longitudes de los derivados dibujables (fuentes `Shown`).
    pub fn visible_dims(&self) -> Vec<usize> {
        self.render_view().iter().map(|d| d.len()).collect()
    }

    pub fn events(&self) -> Vec<FigureEvent> {
        self.event_store.list(self.figure_id)
    }
}
