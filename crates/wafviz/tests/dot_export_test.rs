//! Integration tests for DOT export of the catalog.

use std::fs;

use tempfile::tempdir;

use wafviz::{DiagramRenderer, OutputFormat, catalog};

#[test]
fn test_main_architecture_dot_contains_clusters_and_nodes() {
    let renderer = DiagramRenderer::default();
    let diagram = catalog::main_architecture().unwrap();
    let dot = renderer.render_dot(&diagram);

    assert!(dot.starts_with("digraph \"AWS WAF Log Analyzer Architecture\""));
    assert!(dot.contains("rankdir=\"TB\""));
    assert!(dot.contains("subgraph \"cluster_frontend\""));
    assert!(dot.contains("subgraph \"cluster_backend::lambdas\""));
    assert!(dot.contains("label=\"React App\\n(S3)\""));
    assert!(dot.contains("\"route53\" -> \"cloudfront\""));
    assert!(dot.contains("dir=\"back\""));
}

#[test]
fn test_data_flow_dot_is_left_to_right() {
    let renderer = DiagramRenderer::default();
    let diagram = catalog::data_flow().unwrap();
    let dot = renderer.render_dot(&diagram);

    assert!(dot.contains("rankdir=\"LR\""));
    assert!(dot.contains("label=\"Allow/Block\""));
}

#[test]
fn test_rendering_is_idempotent() {
    // Regenerating is a pure function of the hard-coded declarations: two
    // full catalog passes must produce byte-identical DOT.
    let renderer = DiagramRenderer::default();

    let first: Vec<String> = catalog::all()
        .unwrap()
        .iter()
        .map(|diagram| renderer.render_dot(diagram))
        .collect();
    let second: Vec<String> = catalog::all()
        .unwrap()
        .iter()
        .map(|diagram| renderer.render_dot(diagram))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_render_to_file_writes_fixed_names() {
    let renderer = DiagramRenderer::default();
    let dir = tempdir().expect("Failed to create temp directory");

    for diagram in catalog::all().unwrap() {
        let path = renderer
            .render_to_file(&diagram, OutputFormat::Dot, dir.path())
            .expect("DOT rendering needs no Graphviz install");
        assert!(path.exists());
    }

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec![
            "data-flow.dot",
            "deployment-architecture.dot",
            "security-architecture.dot",
            "waf-analyzer-architecture.dot",
        ]
    );
}

#[test]
fn test_render_to_file_overwrites_existing() {
    let renderer = DiagramRenderer::default();
    let dir = tempdir().expect("Failed to create temp directory");
    let diagram = catalog::data_flow().unwrap();

    let path = dir.path().join("data-flow.dot");
    fs::write(&path, "stale contents").unwrap();

    renderer
        .render_to_file(&diagram, OutputFormat::Dot, dir.path())
        .unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("digraph"));
}
