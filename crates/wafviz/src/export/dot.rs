//! DOT emission for diagrams.
//!
//! [`DotBuilder`] walks a [`Diagram`] and serializes it to Graphviz DOT:
//! a `digraph` carrying the title and rank direction, one statement per node
//! with shape and fill attributes derived from its [`Icon`] category, nested
//! `subgraph cluster_*` blocks for clusters, and one statement per edge with
//! its label, color, line style, and arrow direction.
//!
//! Emission follows declaration order, so the output is byte-stable for a
//! fixed diagram: rendering is a pure function of the declarations.

use std::fmt::Write;

use wafviz_core::semantic::{Cluster, Diagram, Edge, LineStyle, Node};

use crate::config::StyleConfig;

const INDENT: &str = "    ";

/// Serializer from a [`Diagram`] to a DOT string.
pub struct DotBuilder<'a> {
    diagram: &'a Diagram,
    style: &'a StyleConfig,
    dpi: Option<u32>,
}

impl<'a> DotBuilder<'a> {
    /// Creates a builder for the given diagram and style settings.
    pub fn new(diagram: &'a Diagram, style: &'a StyleConfig) -> Self {
        Self {
            diagram,
            style,
            dpi: None,
        }
    }

    /// Sets the raster resolution emitted as the graph `dpi` attribute.
    pub fn with_dpi(mut self, dpi: Option<u32>) -> Self {
        self.dpi = dpi;
        self
    }

    /// Serializes the diagram to DOT.
    pub fn build(&self) -> String {
        let mut out = String::new();

        writeln!(out, "digraph \"{}\" {{", escape(self.diagram.title()))
            .expect("Writing to String is infallible");
        self.write_graph_attrs(&mut out);
        self.write_node_defaults(&mut out);

        // Top-level nodes, then the cluster tree, in declaration order
        for node in self.diagram.nodes().iter().filter(|n| n.cluster().is_none()) {
            write_node(&mut out, node, 1);
        }
        for cluster in self
            .diagram
            .clusters()
            .iter()
            .filter(|c| c.parent().is_none())
        {
            self.write_cluster(&mut out, cluster, 1);
        }

        for edge in self.diagram.edges() {
            write_edge(&mut out, edge, 1);
        }

        out.push_str("}\n");
        out
    }

    fn write_graph_attrs(&self, out: &mut String) {
        let mut attrs = vec![
            format!("label=\"{}\"", escape(self.diagram.title())),
            "labelloc=\"t\"".to_string(),
            "fontsize=\"20\"".to_string(),
            format!("rankdir=\"{}\"", self.diagram.direction().as_dot()),
        ];
        if let Some(color) = self.style.background_color() {
            attrs.push(format!("bgcolor=\"{}\"", escape(color)));
        }
        if let Some(font) = self.style.fontname() {
            attrs.push(format!("fontname=\"{}\"", escape(font)));
        }
        if let Some(dpi) = self.dpi {
            attrs.push(format!("dpi=\"{dpi}\""));
        }

        writeln!(out, "{INDENT}graph [{}];", attrs.join(", "))
            .expect("Writing to String is infallible");
    }

    fn write_node_defaults(&self, out: &mut String) {
        let mut attrs = vec!["style=\"filled,rounded\"".to_string()];
        if let Some(font) = self.style.fontname() {
            attrs.push(format!("fontname=\"{}\"", escape(font)));
        }

        writeln!(out, "{INDENT}node [{}];", attrs.join(", "))
            .expect("Writing to String is infallible");
    }

    fn write_cluster(&self, out: &mut String, cluster: &Cluster, depth: usize) {
        let pad = INDENT.repeat(depth);
        writeln!(
            out,
            "{pad}subgraph \"cluster_{}\" {{",
            escape(&cluster.id().to_string())
        )
        .expect("Writing to String is infallible");
        writeln!(
            out,
            "{pad}{INDENT}label=\"{}\"; fontsize=\"12\"; style=\"rounded\";",
            escape(cluster.label())
        )
        .expect("Writing to String is infallible");

        for node in self.diagram.nodes_in(cluster.id()) {
            write_node(out, node, depth + 1);
        }
        for child in self.diagram.clusters_in(cluster.id()) {
            self.write_cluster(out, child, depth + 1);
        }

        writeln!(out, "{pad}}}").expect("Writing to String is infallible");
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let pad = INDENT.repeat(depth);
    let icon = node.icon();
    writeln!(
        out,
        "{pad}\"{}\" [label=\"{}\", shape=\"{}\", fillcolor=\"{}\", fontcolor=\"{}\"];",
        escape(&node.id().to_string()),
        escape(node.label()),
        icon.shape(),
        icon.fill_color(),
        icon.font_color(),
    )
    .expect("Writing to String is infallible");
}

fn write_edge(out: &mut String, edge: &Edge, depth: usize) {
    let pad = INDENT.repeat(depth);
    let style = edge.style();

    let mut attrs = Vec::new();
    if let Some(label) = style.label_text() {
        attrs.push(format!("label=\"{}\"", escape(label)));
    }
    if let Some(color) = style.edge_color() {
        attrs.push(format!("color=\"{}\"", color.as_dot()));
        attrs.push(format!("fontcolor=\"{}\"", color.as_dot()));
    }
    match style.line_style() {
        LineStyle::Solid => {}
        LineStyle::Dashed => attrs.push("style=\"dashed\"".to_string()),
        LineStyle::Bold => attrs.push("style=\"bold\"".to_string()),
    }
    if style.arrow_direction() != wafviz_core::semantic::ArrowDirection::Forward {
        attrs.push(format!("dir=\"{}\"", style.arrow_direction().as_dot()));
    }

    let source = escape(&edge.source().to_string());
    let target = escape(&edge.target().to_string());
    if attrs.is_empty() {
        writeln!(out, "{pad}\"{source}\" -> \"{target}\";")
            .expect("Writing to String is infallible");
    } else {
        writeln!(out, "{pad}\"{source}\" -> \"{target}\" [{}];", attrs.join(", "))
            .expect("Writing to String is infallible");
    }
}

/// Escapes a string for use inside a double-quoted DOT value.
///
/// Embedded newlines become the DOT `\n` escape so multi-line labels render
/// centered, as they do in the source declarations.
fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use wafviz_core::{
        icon::Icon,
        semantic::{DiagramBuilder, EdgeColor, EdgeStyle, LineStyle, RankDirection},
    };

    use super::*;

    fn sample() -> Diagram {
        let mut b = DiagramBuilder::new("Sample \"Quoted\"", "sample", RankDirection::LeftRight);
        let outer = b.cluster("outer", "Outer");
        let inner = b.cluster_in(outer, "inner", "Inner").unwrap();
        let api = b.node("sample_api", "API\nGateway", Icon::ApiGateway).unwrap();
        let handler = b.node_in(inner, "sample_fn", "Handler", Icon::Lambda).unwrap();
        b.edge_styled(
            api,
            handler,
            EdgeStyle::new()
                .label("calls")
                .color(EdgeColor::Blue)
                .line(LineStyle::Dashed),
        )
        .unwrap();
        b.build().unwrap()
    }

    #[test]
    fn test_digraph_structure() {
        let diagram = sample();
        let style = StyleConfig::default();
        let dot = DotBuilder::new(&diagram, &style).build();

        assert!(dot.starts_with("digraph \"Sample \\\"Quoted\\\"\" {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("rankdir=\"LR\""));
        assert!(dot.contains("subgraph \"cluster_outer\""));
        assert!(dot.contains("subgraph \"cluster_outer::inner\""));
        assert!(dot.contains("\"sample_api\" -> \"sample_fn\""));
    }

    #[test]
    fn test_label_newlines_are_escaped() {
        let diagram = sample();
        let style = StyleConfig::default();
        let dot = DotBuilder::new(&diagram, &style).build();

        assert!(dot.contains("label=\"API\\nGateway\""));
        assert!(!dot.contains("label=\"API\nGateway\""));
    }

    #[test]
    fn test_edge_attributes() {
        let diagram = sample();
        let style = StyleConfig::default();
        let dot = DotBuilder::new(&diagram, &style).build();

        assert!(
            dot.contains("label=\"calls\", color=\"blue\", fontcolor=\"blue\", style=\"dashed\"")
        );
    }

    #[test]
    fn test_icon_attributes_on_nodes() {
        let diagram = sample();
        let style = StyleConfig::default();
        let dot = DotBuilder::new(&diagram, &style).build();

        assert!(dot.contains(&format!(
            "shape=\"{}\", fillcolor=\"{}\"",
            Icon::Lambda.shape(),
            Icon::Lambda.fill_color()
        )));
    }

    #[test]
    fn test_emission_is_deterministic() {
        let diagram = sample();
        let style = StyleConfig::default();

        let first = DotBuilder::new(&diagram, &style).build();
        let second = DotBuilder::new(&diagram, &style).build();
        assert_eq!(first, second);
    }

    #[test]
    fn test_style_config_attributes() {
        let diagram = sample();
        let style: StyleConfig = Default::default();
        let dot = DotBuilder::new(&diagram, &style).with_dpi(Some(120)).build();

        assert!(dot.contains("dpi=\"120\""));
    }
}
