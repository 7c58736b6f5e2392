//! Binario de demostración: construye una figura con un trace agrupado,
//! aplica ediciones incrementales y muestra cómo la colección derivada se
//! regenera (con su fingerprint) después de cada una.

use indexmap::IndexMap;
use serde_json::{json, Value};

use plotflow_rust::config::CONFIG;
use plotflow_rust::{
    fingerprint_derived, ConfigNode, FigureEngine, GroupBySpec, GroupKey, SourceTrace,
    TraceExtension, TransformSpec, Visibility,
};
use plot_domain::style_path;

fn demo_trace(points: usize, cycle: &[String]) -> SourceTrace {
    let x: Vec<Value> = (0..points).map(|i| json!(i as i64 - (points / 2) as i64)).collect();
    let y: Vec<Value> = (0..points).map(|i| json!((i * i) as i64 % 7)).collect();
    let groups: Vec<GroupKey> = (0..points)
        .map(|i| GroupKey::from(cycle[i % cycle.len()].as_str()))
        .collect();

    let mut spec = GroupBySpec::new(groups);
    for (key, color) in cycle.iter().zip(["red", "blue", "green", "orange"].iter().cycle()) {
        spec = spec.with_style(key.as_str(), ConfigNode::from(json!({"marker": {"color": color}})));
    }

    SourceTrace::new()
        .with_data("x", x)
        .with_data("y", y)
        .with_style(json!({"mode": "markers", "marker": {"size": 10}}))
        .with_transform(TransformSpec::GroupBy(spec))
}

fn print_state(engine: &FigureEngine<plotflow_rust::InMemoryEventStore>, label: &str) {
    let dims = engine.derived_dims();
    let fingerprint = fingerprint_derived(&engine.all_derived().cloned().collect::<Vec<_>>());
    println!("[{label}] dims={dims:?} visible={:?} fp={}", engine.visible_dims(), &fingerprint[..16]);
}

fn main() {
    let demo = &CONFIG.demo;
    println!("PlotFlow demo: {} puntos, grupos {:?}", demo.points, demo.group_cycle);

    let mut engine = FigureEngine::in_memory();
    let idx = engine.add_trace(demo_trace(demo.points, &demo.group_cycle));
    print_state(&engine, "inicial");

    // restyle del estilo base: aplica a todos los grupos
    engine
        .restyle_base(idx, &style_path!["marker", "opacity"], json!(0.4))
        .expect("trace index is valid");
    print_state(&engine, "restyle");

    // extensión en lockstep: datos y grupos crecen juntos
    let mut data = IndexMap::new();
    data.insert("x".to_string(), vec![json!(100), json!(101)]);
    data.insert("y".to_string(), vec![json!(1), json!(2)]);
    let groups = vec![
        GroupKey::from(demo.group_cycle[0].as_str()),
        GroupKey::from(demo.group_cycle[demo.group_cycle.len() - 1].as_str()),
    ];
    let ext = TraceExtension::new(data, Some(groups)).expect("lockstep slices");
    engine.extend_trace(idx, ext).expect("extension applies");
    print_state(&engine, "extend");

    // visibilidad: no cambia la colección derivada, solo el render view
    engine.set_visible(idx, Visibility::LegendOnly).expect("trace index is valid");
    print_state(&engine, "legendonly");

    println!("Secuencia de eventos:");
    for ev in engine.events() {
        println!("  #{} {:?}", ev.seq, ev.kind);
    }
}
