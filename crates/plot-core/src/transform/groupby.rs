//! Transform de agrupamiento: particiona un trace fuente en un derivado por
//! clave distinta, con datos rebanados y estilo resuelto.
//!
//! Precedencia de estilo, estricta: override > slice > base.
//! - El slice solo aplica a hojas del base que sean arrays de longitud `n`.
//! - Un override en un path reemplaza completo ese path (también arrays),
//!   anulando cualquier slicing que hubiera aplicado ahí.
//! - Un path sin override ni array-`n` queda igual que en el base.

use indexmap::IndexMap;
use serde_json::Value;

use plot_domain::{ConfigNode, GroupBySpec, SourceTrace};

use crate::model::{DerivedTrace, GroupPartition};

/// Deriva la colección completa para un groupby. Con `groups` vacío produce
/// cero derivados sin importar `n` (degeneración preservada, ver partición).
pub fn compute_derived(trace: &SourceTrace, spec: &GroupBySpec) -> Vec<DerivedTrace> {
    let n = trace.data_len();
    let partition = GroupPartition::compute(&spec.groups, n);

    partition
        .iter()
        .map(|(key, indices)| DerivedTrace {
            group_key: Some(key.clone()),
            source_indices: indices.to_vec(),
            data: slice_data(&trace.data, n, indices),
            style: resolve_group_style(&trace.base_style, indices, n, spec.styles.get(key)),
        })
        .collect()
}

/// Rebanado de las secuencias de datos: toda secuencia de longitud `n` se
/// proyecta sobre los índices del grupo; las demás se copian intactas.
pub(crate) fn slice_data(
    data: &IndexMap<String, Vec<Value>>,
    n: usize,
    indices: &[usize],
) -> IndexMap<String, Vec<Value>> {
    data.iter()
        .map(|(attr, seq)| {
            let sliced = if seq.len() == n {
                indices.iter().map(|&i| seq[i].clone()).collect()
            } else {
                seq.clone()
            };
            (attr.clone(), sliced)
        })
        .collect()
}

/// Resuelve el estilo de un grupo: primero la pasada de slicing sobre el árbol
/// base, después el merge estructural del override (ausente = árbol vacío).
pub fn resolve_group_style(
    base: &ConfigNode,
    indices: &[usize],
    n: usize,
    over: Option<&ConfigNode>,
) -> ConfigNode {
    let sliced = slice_style(base, indices, n);
    match over {
        Some(over) => sliced.merged(over),
        None => sliced,
    }
}

/// Pasada recursiva de slicing: cada hoja que contenga un array de longitud
/// `n` se reemplaza por su sub-array del grupo. Arrays de otra longitud pasan
/// sin cambios (p.ej. una paleta de 4 colores sobre un trace de 7 puntos).
fn slice_style(node: &ConfigNode, indices: &[usize], n: usize) -> ConfigNode {
    match node {
        ConfigNode::Tree(map) => ConfigNode::Tree(
            map.iter()
                .map(|(k, child)| (k.clone(), slice_style(child, indices, n)))
                .collect(),
        ),
        ConfigNode::Leaf(Value::Array(seq)) if n > 0 && seq.len() == n => {
            ConfigNode::Leaf(Value::Array(indices.iter().map(|&i| seq[i].clone()).collect()))
        }
        leaf => leaf.clone(),
    }
}
