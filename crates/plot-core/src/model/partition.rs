//! Partición ordenada de índices fuente por clave de grupo.

use indexmap::IndexMap;

use plot_domain::GroupKey;

/// Mapping clave → índices fuente, en orden de primera aparición de la clave.
///
/// Invariantes:
/// - los buckets son disjuntos dos a dos;
/// - cuando `groups.len() == n`, la unión de los buckets es exactamente
///   `0..n`;
/// - dentro de un bucket los índices preservan el orden original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPartition {
    buckets: IndexMap<GroupKey, Vec<usize>>,
}

impl GroupPartition {
    /// Computa la partición sobre el prefijo común de `groups` y `0..n`.
    ///
    /// Si `groups` está vacío el resultado no tiene buckets, sea cual sea `n`
    /// (degeneración preservada del sistema de referencia). Si las longitudes
    /// difieren, solo participa el prefijo solapado (política defensiva de
    /// truncado; ningún escenario de referencia la ejercita).
    pub fn compute(groups: &[GroupKey], n: usize) -> Self {
        let mut buckets: IndexMap<GroupKey, Vec<usize>> = IndexMap::new();
        for (index, key) in groups.iter().take(n).enumerate() {
            buckets.entry(key.clone()).or_default().push(index);
        }
        GroupPartition { buckets }
    }

    /// Cantidad de grupos distintos.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Pares `(clave, índices)` en orden de primera aparición.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[usize])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn indices_of(&self, key: &GroupKey) -> Option<&[usize]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.buckets.keys()
    }
}
