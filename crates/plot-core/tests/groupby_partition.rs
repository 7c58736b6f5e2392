//! Propiedades de la partición y del rebanado de datos sobre el escenario
//! canónico: groups = [a,a,b,a,b,b,a], x = [1,-1,-2,0,1,2,3].

use serde_json::{json, Value};

use plot_core::{compute_derived_traces, GroupPartition};
use plot_domain::{GroupBySpec, GroupKey, SourceTrace, TransformSpec};

fn values(raw: &[i64]) -> Vec<Value> {
    raw.iter().map(|v| json!(v)).collect()
}

fn keys(raw: &[&str]) -> Vec<GroupKey> {
    raw.iter().copied().map(GroupKey::from).collect()
}

fn grouped_trace() -> SourceTrace {
    SourceTrace::new()
        .with_data("x", values(&[1, -1, -2, 0, 1, 2, 3]))
        .with_data("y", values(&[1, 2, 3, 1, 2, 3, 1]))
        .with_style(json!({"mode": "markers"}))
        .with_transform(TransformSpec::GroupBy(GroupBySpec::new(keys(&[
            "a", "a", "b", "a", "b", "b", "a",
        ]))))
}

#[test]
fn canonical_scenario_partitions_and_slices() {
    let derived = compute_derived_traces(&grouped_trace());

    assert_eq!(derived.len(), 2);

    // grupo 'a': primera aparición primero
    assert_eq!(derived[0].group_key, Some(GroupKey::from("a")));
    assert_eq!(derived[0].source_indices, [0, 1, 3, 6]);
    assert_eq!(derived[0].data["x"], values(&[1, -1, 0, 3]));
    assert_eq!(derived[0].data["y"], values(&[1, 2, 1, 1]));

    assert_eq!(derived[1].group_key, Some(GroupKey::from("b")));
    assert_eq!(derived[1].source_indices, [2, 4, 5]);
    assert_eq!(derived[1].data["x"], values(&[-2, 1, 2]));
    assert_eq!(derived[1].data["y"], values(&[3, 2, 3]));
}

#[test]
fn partition_covers_every_index_exactly_once() {
    let groups = keys(&["a", "a", "b", "a", "b", "b", "a"]);
    let partition = GroupPartition::compute(&groups, 7);

    let mut all: Vec<usize> = partition.iter().flat_map(|(_, idx)| idx.iter().copied()).collect();
    all.sort_unstable();
    assert_eq!(all, (0..7).collect::<Vec<_>>());
}

#[test]
fn scattering_slices_back_reconstructs_the_source() {
    let trace = grouped_trace();
    let derived = compute_derived_traces(&trace);

    for attr in ["x", "y"] {
        let mut rebuilt = vec![Value::Null; 7];
        for d in &derived {
            for (pos, &src) in d.source_indices.iter().enumerate() {
                rebuilt[src] = d.data[attr][pos].clone();
            }
        }
        assert_eq!(&rebuilt, &trace.data[attr]);
    }
}

#[test]
fn relative_order_is_preserved_within_each_group() {
    let derived = compute_derived_traces(&grouped_trace());

    for d in &derived {
        let mut sorted = d.source_indices.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, d.source_indices, "indices must stay in source order");
    }
}

#[test]
fn groups_appear_in_first_occurrence_order() {
    let trace = SourceTrace::new()
        .with_data("x", values(&[20, 11, 12, 0, 1, 2, 3]))
        .with_transform(TransformSpec::GroupBy(GroupBySpec::new(keys(&[
            "b", "a", "b", "b", "b", "a", "a",
        ]))));

    let derived = compute_derived_traces(&trace);

    assert_eq!(derived[0].group_key, Some(GroupKey::from("b")));
    assert_eq!(derived[0].source_indices, [0, 2, 3, 4]);
    assert_eq!(derived[1].group_key, Some(GroupKey::from("a")));
    assert_eq!(derived[1].source_indices, [1, 5, 6]);
}
