//! Integración de la fachada: el flujo completo declarar → derivar → editar,
//! visto únicamente a través de los re-exports del crate raíz.

use indexmap::IndexMap;
use serde_json::{json, Value};

use plot_domain::style_path;
use plotflow_rust::{
    compute_derived_traces, ConfigNode, FigureEngine, GroupBySpec, GroupKey, SourceTrace,
    TraceExtension, TransformSpec, Visibility,
};

fn values(raw: &[i64]) -> Vec<Value> {
    raw.iter().map(|v| json!(v)).collect()
}

fn keys(raw: &[&str]) -> Vec<GroupKey> {
    raw.iter().copied().map(GroupKey::from).collect()
}

#[test]
fn declarative_trace_roundtrips_through_serde() {
    let raw = json!({
        "data": {
            "x": [1, -1, -2, 0, 1, 2, 3],
            "y": [1, 2, 3, 1, 2, 3, 1]
        },
        "base_style": {"mode": "markers"},
        "transforms": [{
            "type": "groupby",
            "groups": ["a", "a", "b", "a", "b", "b", "a"],
            "styles": {
                "a": {"marker": {"color": "red"}},
                "b": {"marker": {"color": "blue"}}
            }
        }]
    });

    let trace: SourceTrace = serde_json::from_value(raw).unwrap();
    assert_eq!(trace.data_len(), 7);

    let derived = compute_derived_traces(&trace);
    assert_eq!(derived.len(), 2);
    assert_eq!(derived[0].data["x"], values(&[1, -1, 0, 3]));
    assert_eq!(derived[1].data["x"], values(&[-2, 1, 2]));
    assert_eq!(
        derived[1].style.get(&style_path!["marker", "color"]).unwrap().as_leaf(),
        Some(&json!("blue"))
    );
}

#[test]
fn full_edit_session_keeps_source_and_derived_consistent() {
    let trace = SourceTrace::new()
        .with_data("x", values(&[1, -1, -2, 0, 1, 2, 3]))
        .with_data("y", values(&[1, 2, 3, 1, 2, 3, 1]))
        .with_style(json!({"mode": "markers", "marker": {"size": 20}}))
        .with_transform(TransformSpec::GroupBy(
            GroupBySpec::new(keys(&["a", "a", "b", "a", "b", "b", "a"]))
                .with_style("a", ConfigNode::from(json!({"marker": {"color": "red"}})))
                .with_style("b", ConfigNode::from(json!({"marker": {"color": "blue"}}))),
        ));

    let mut engine = FigureEngine::in_memory();
    let idx = engine.add_trace(trace);

    // la fuente conserva el input del usuario; los derivados reflejan el grouping
    assert_eq!(engine.source(idx).unwrap().data["x"], values(&[1, -1, -2, 0, 1, 2, 3]));
    assert_eq!(engine.derived_dims(), [4, 3]);

    engine.restyle_base(idx, &style_path!["marker", "opacity"], json!(0.4)).unwrap();

    let mut data = IndexMap::new();
    data.insert("x".to_string(), values(&[-3, 4, 5]));
    data.insert("y".to_string(), values(&[1, -2, 3]));
    engine
        .extend_trace(idx, TraceExtension::new(data, Some(keys(&["b", "a", "b"]))).unwrap())
        .unwrap();

    assert_eq!(engine.source(idx).unwrap().data_len(), 10);
    assert_eq!(engine.derived_dims(), [5, 5]);

    engine.set_visible(idx, Visibility::Hidden).unwrap();
    assert_eq!(engine.visible_dims(), Vec::<usize>::new());
    assert_eq!(engine.derived_dims(), [5, 5]);

    engine.delete_trace(idx).unwrap();
    assert_eq!(engine.trace_count(), 0);
    assert_eq!(engine.derived_dims(), Vec::<usize>::new());
}
