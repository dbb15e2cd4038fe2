//! Semantic model for architecture diagrams.
//!
//! A [`Diagram`] is a build-once, render-once value: nodes, clusters, and
//! edges are declared through a [`DiagramBuilder`], validated as they are
//! declared, and frozen by [`DiagramBuilder::build`]. Nothing is mutated
//! after that point.
//!
//! The builder keeps explicit node and cluster registries rather than an
//! implicit "current diagram" context: membership is passed at declaration
//! time and edge endpoints are checked eagerly, so a typo in an edge aborts
//! construction instead of silently dropping the edge.

use std::collections::HashSet;

use log::debug;

use crate::{error::GraphError, icon::Icon, identifier::Id};

/// Rank direction of the rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDirection {
    /// Top to bottom (`rankdir=TB`).
    #[default]
    TopBottom,
    /// Left to right (`rankdir=LR`).
    LeftRight,
}

impl RankDirection {
    /// The Graphviz `rankdir` value.
    pub fn as_dot(&self) -> &'static str {
        match self {
            RankDirection::TopBottom => "TB",
            RankDirection::LeftRight => "LR",
        }
    }
}

/// Line style of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    /// Asynchronous or feedback flow.
    Dashed,
    /// Emphasized flow (e.g. a blocking/protective relationship).
    Bold,
}

/// Arrowhead placement on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowDirection {
    #[default]
    Forward,
    Back,
    Both,
}

impl ArrowDirection {
    /// The Graphviz `dir` value.
    pub fn as_dot(&self) -> &'static str {
        match self {
            ArrowDirection::Forward => "forward",
            ArrowDirection::Back => "back",
            ArrowDirection::Both => "both",
        }
    }
}

/// Edge color palette used by the diagrams.
///
/// A closed set of Graphviz color names: red for blocking/protective flow,
/// blue for log flow, green for rule application, purple for AI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeColor {
    Red,
    Blue,
    Green,
    Purple,
}

impl EdgeColor {
    /// The Graphviz color name.
    pub fn as_dot(&self) -> &'static str {
        match self {
            EdgeColor::Red => "red",
            EdgeColor::Blue => "blue",
            EdgeColor::Green => "green",
            EdgeColor::Purple => "purple",
        }
    }
}

/// Visual styling of an edge: label, color, line style, and arrow direction.
#[derive(Debug, Clone, Default)]
pub struct EdgeStyle {
    label: Option<String>,
    color: Option<EdgeColor>,
    line: LineStyle,
    direction: ArrowDirection,
}

impl EdgeStyle {
    /// Creates an unlabeled, solid, forward edge style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge label.
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Sets the edge color.
    pub fn color(mut self, color: EdgeColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the line style.
    pub fn line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// Sets the arrow direction.
    pub fn direction(mut self, direction: ArrowDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the edge label, if any.
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the edge color, if any.
    pub fn edge_color(&self) -> Option<EdgeColor> {
        self.color
    }

    /// Returns the line style.
    pub fn line_style(&self) -> LineStyle {
        self.line
    }

    /// Returns the arrow direction.
    pub fn arrow_direction(&self) -> ArrowDirection {
        self.direction
    }
}

/// A single labeled box in a diagram.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    icon: Icon,
    cluster: Option<Id>,
}

impl Node {
    /// Returns the node id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the icon category.
    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// Returns the id of the cluster this node belongs to, if any.
    pub fn cluster(&self) -> Option<Id> {
        self.cluster
    }
}

/// A named visual grouping of nodes; clusters may nest.
#[derive(Debug, Clone)]
pub struct Cluster {
    id: Id,
    label: String,
    parent: Option<Id>,
}

impl Cluster {
    /// Returns the cluster id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the id of the enclosing cluster, if any.
    pub fn parent(&self) -> Option<Id> {
        self.parent
    }
}

/// A directed connection between two declared nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    source: Id,
    target: Id,
    style: EdgeStyle,
}

impl Edge {
    /// Returns the source node id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the target node id.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the edge style.
    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }
}

/// A complete, validated diagram declaration.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    file_stem: String,
    direction: RankDirection,
    nodes: Vec<Node>,
    clusters: Vec<Cluster>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Returns the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the output file name stem (no directory, no extension).
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Returns the rank direction.
    pub fn direction(&self) -> RankDirection {
        self.direction
    }

    /// Returns all nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns all clusters in declaration order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Returns all edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a node by id.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Looks up a node by its display label.
    pub fn node_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.label == label)
    }

    /// Looks up a cluster by its display label.
    pub fn cluster_by_label(&self, label: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|cluster| cluster.label == label)
    }

    /// Returns the nodes that are direct members of the given cluster.
    pub fn nodes_in(&self, cluster: Id) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(move |node| node.cluster == Some(cluster))
    }

    /// Returns the clusters directly nested inside the given cluster.
    pub fn clusters_in(&self, cluster: Id) -> impl Iterator<Item = &Cluster> {
        self.clusters
            .iter()
            .filter(move |child| child.parent == Some(cluster))
    }
}

/// Builder with explicit node, cluster, and edge registries.
///
/// Declaration order is preserved; it determines the emission order in the
/// exported DOT and therefore keeps output deterministic.
#[derive(Debug)]
pub struct DiagramBuilder {
    title: String,
    file_stem: String,
    direction: RankDirection,
    nodes: Vec<Node>,
    node_ids: HashSet<Id>,
    clusters: Vec<Cluster>,
    cluster_ids: HashSet<Id>,
    edges: Vec<Edge>,
}

impl DiagramBuilder {
    /// Creates a builder for a diagram with the given title, output file
    /// stem, and rank direction.
    pub fn new(title: &str, file_stem: &str, direction: RankDirection) -> Self {
        Self {
            title: title.to_string(),
            file_stem: file_stem.to_string(),
            direction,
            nodes: Vec::new(),
            node_ids: HashSet::new(),
            clusters: Vec::new(),
            cluster_ids: HashSet::new(),
            edges: Vec::new(),
        }
    }

    /// Declares a top-level node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if the id is already declared.
    pub fn node(&mut self, id: &str, label: &str, icon: Icon) -> Result<Id, GraphError> {
        self.insert_node(Id::new(id), label, icon, None)
    }

    /// Declares a node as a member of the given cluster.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] for a repeated id, or
    /// [`GraphError::UnknownCluster`] if the cluster was never declared.
    pub fn node_in(
        &mut self,
        cluster: Id,
        id: &str,
        label: &str,
        icon: Icon,
    ) -> Result<Id, GraphError> {
        if !self.cluster_ids.contains(&cluster) {
            return Err(GraphError::UnknownCluster {
                diagram: self.title.clone(),
                id: cluster.to_string(),
            });
        }
        self.insert_node(Id::new(id), label, icon, Some(cluster))
    }

    /// Declares a top-level cluster and returns its id.
    pub fn cluster(&mut self, id: &str, label: &str) -> Id {
        let id = Id::new(id);
        self.insert_cluster(id, label, None);
        id
    }

    /// Declares a cluster nested inside `parent` and returns its id.
    ///
    /// The returned id is the parent id joined with the child id, so equal
    /// short names under different parents stay distinct.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownCluster`] if `parent` was never declared.
    pub fn cluster_in(&mut self, parent: Id, id: &str, label: &str) -> Result<Id, GraphError> {
        if !self.cluster_ids.contains(&parent) {
            return Err(GraphError::UnknownCluster {
                diagram: self.title.clone(),
                id: parent.to_string(),
            });
        }
        let id = parent.create_nested(Id::new(id));
        self.insert_cluster(id, label, Some(parent));
        Ok(id)
    }

    /// Declares a plain directed edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnresolvedReference`] if either endpoint was
    /// never declared as a node.
    pub fn edge(&mut self, source: Id, target: Id) -> Result<(), GraphError> {
        self.edge_styled(source, target, EdgeStyle::new())
    }

    /// Declares a styled directed edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnresolvedReference`] if either endpoint was
    /// never declared as a node.
    pub fn edge_styled(
        &mut self,
        source: Id,
        target: Id,
        style: EdgeStyle,
    ) -> Result<(), GraphError> {
        self.check_endpoint(source)?;
        self.check_endpoint(target)?;
        self.edges.push(Edge {
            source,
            target,
            style,
        });
        Ok(())
    }

    /// Declares plain edges along a chain of nodes: `a >> b >> c`.
    pub fn chain(&mut self, ids: &[Id]) -> Result<(), GraphError> {
        for pair in ids.windows(2) {
            self.edge(pair[0], pair[1])?;
        }
        Ok(())
    }

    /// Declares one styled edge from `source` to each of `targets`.
    pub fn fan_out(
        &mut self,
        source: Id,
        targets: &[Id],
        style: EdgeStyle,
    ) -> Result<(), GraphError> {
        for target in targets {
            self.edge_styled(source, *target, style.clone())?;
        }
        Ok(())
    }

    /// Declares one styled edge from each of `sources` to `target`.
    pub fn fan_in(
        &mut self,
        sources: &[Id],
        target: Id,
        style: EdgeStyle,
    ) -> Result<(), GraphError> {
        for source in sources {
            self.edge_styled(*source, target, style.clone())?;
        }
        Ok(())
    }

    /// Freezes the declaration into an immutable [`Diagram`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyDiagram`] if no node was declared.
    pub fn build(self) -> Result<Diagram, GraphError> {
        if self.nodes.is_empty() {
            return Err(GraphError::EmptyDiagram {
                diagram: self.title,
            });
        }

        debug!(
            title = self.title,
            nodes = self.nodes.len(),
            clusters = self.clusters.len(),
            edges = self.edges.len();
            "Diagram declaration complete"
        );

        Ok(Diagram {
            title: self.title,
            file_stem: self.file_stem,
            direction: self.direction,
            nodes: self.nodes,
            clusters: self.clusters,
            edges: self.edges,
        })
    }

    fn insert_node(
        &mut self,
        id: Id,
        label: &str,
        icon: Icon,
        cluster: Option<Id>,
    ) -> Result<Id, GraphError> {
        if !self.node_ids.insert(id) {
            return Err(GraphError::DuplicateNode {
                diagram: self.title.clone(),
                id: id.to_string(),
            });
        }
        self.nodes.push(Node {
            id,
            label: label.to_string(),
            icon,
            cluster,
        });
        Ok(id)
    }

    fn insert_cluster(&mut self, id: Id, label: &str, parent: Option<Id>) {
        self.cluster_ids.insert(id);
        self.clusters.push(Cluster {
            id,
            label: label.to_string(),
            parent,
        });
    }

    fn check_endpoint(&self, id: Id) -> Result<(), GraphError> {
        if self.node_ids.contains(&id) {
            Ok(())
        } else {
            Err(GraphError::UnresolvedReference {
                diagram: self.title.clone(),
                id: id.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> DiagramBuilder {
        DiagramBuilder::new("Test Diagram", "test-diagram", RankDirection::TopBottom)
    }

    #[test]
    fn test_declare_nodes_and_edges() {
        let mut b = builder();
        let api = b.node("api", "API", Icon::ApiGateway).unwrap();
        let handler = b.node("handler", "Handler", Icon::Lambda).unwrap();
        b.edge(api, handler).unwrap();

        let diagram = b.build().unwrap();
        assert_eq!(diagram.nodes().len(), 2);
        assert_eq!(diagram.edges().len(), 1);
        assert_eq!(diagram.edges()[0].source(), api);
        assert_eq!(diagram.edges()[0].target(), handler);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut b = builder();
        b.node("api", "API", Icon::ApiGateway).unwrap();
        let err = b.node("api", "Other API", Icon::ApiGateway).unwrap_err();

        assert!(matches!(err, GraphError::DuplicateNode { .. }));
    }

    #[test]
    fn test_edge_to_undeclared_node_fails_fast() {
        let mut b = builder();
        let api = b.node("api", "API", Icon::ApiGateway).unwrap();
        let ghost = Id::new("ghost");

        let err = b.edge(api, ghost).unwrap_err();
        assert!(matches!(err, GraphError::UnresolvedReference { .. }));

        // The invalid edge must not have been recorded
        let diagram = b.build().unwrap();
        assert!(diagram.edges().is_empty());
    }

    #[test]
    fn test_node_in_unknown_cluster_rejected() {
        let mut b = builder();
        let err = b
            .node_in(Id::new("nowhere"), "api", "API", Icon::ApiGateway)
            .unwrap_err();

        assert!(matches!(err, GraphError::UnknownCluster { .. }));
    }

    #[test]
    fn test_nested_cluster_ids_are_distinct() {
        let mut b = builder();
        let backend = b.cluster("backend", "Backend");
        let demo = b.cluster("demo", "Demo");
        let backend_fns = b.cluster_in(backend, "functions", "Functions").unwrap();
        let demo_fns = b.cluster_in(demo, "functions", "Functions").unwrap();

        assert_ne!(backend_fns, demo_fns);
        assert_eq!(backend_fns, "backend::functions");
    }

    #[test]
    fn test_cluster_membership_is_static() {
        let mut b = builder();
        let frontend = b.cluster("frontend", "Frontend");
        let dns = b.node_in(frontend, "dns", "DNS", Icon::Route53).unwrap();
        b.node("users", "Users", Icon::Users).unwrap();

        let diagram = b.build().unwrap();
        assert_eq!(diagram.node(dns).unwrap().cluster(), Some(frontend));

        let members: Vec<_> = diagram.nodes_in(frontend).map(Node::label).collect();
        assert_eq!(members, vec!["DNS"]);
    }

    #[test]
    fn test_chain_declares_pairwise_edges() {
        let mut b = builder();
        let a = b.node("a", "A", Icon::Lambda).unwrap();
        let c = b.node("c", "C", Icon::Lambda).unwrap();
        let d = b.node("d", "D", Icon::Lambda).unwrap();
        b.chain(&[a, c, d]).unwrap();

        let diagram = b.build().unwrap();
        assert_eq!(diagram.edges().len(), 2);
        assert_eq!(diagram.edges()[0].target(), c);
        assert_eq!(diagram.edges()[1].source(), c);
    }

    #[test]
    fn test_fan_out_and_fan_in() {
        let mut b = builder();
        let hub = b.node("hub", "Hub", Icon::Lambda).unwrap();
        let t1 = b.node("t1", "T1", Icon::Lambda).unwrap();
        let t2 = b.node("t2", "T2", Icon::Lambda).unwrap();

        b.fan_out(hub, &[t1, t2], EdgeStyle::new().color(EdgeColor::Green))
            .unwrap();
        b.fan_in(&[t1, t2], hub, EdgeStyle::new()).unwrap();

        let diagram = b.build().unwrap();
        assert_eq!(diagram.edges().len(), 4);
        assert_eq!(
            diagram.edges()[0].style().edge_color(),
            Some(EdgeColor::Green)
        );
    }

    #[test]
    fn test_empty_diagram_rejected() {
        let err = builder().build().unwrap_err();
        assert!(matches!(err, GraphError::EmptyDiagram { .. }));
    }

    #[test]
    fn test_edge_style_builder() {
        let style = EdgeStyle::new()
            .label("WAF Logs")
            .color(EdgeColor::Blue)
            .line(LineStyle::Dashed)
            .direction(ArrowDirection::Both);

        assert_eq!(style.label_text(), Some("WAF Logs"));
        assert_eq!(style.edge_color(), Some(EdgeColor::Blue));
        assert_eq!(style.line_style(), LineStyle::Dashed);
        assert_eq!(style.arrow_direction(), ArrowDirection::Both);
    }
}
