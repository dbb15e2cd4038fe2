//! Directed graph view over a built diagram.
//!
//! [`DiagramGraph`] indexes a [`Diagram`](crate::semantic::Diagram)'s nodes
//! and edges for structural queries: root detection, neighbor iteration, and
//! forward reachability. The builder already guarantees that every edge
//! endpoint is a declared node, so construction here cannot fail.
//!
//! The graph is directed and allows self-loops and multiple edges between
//! the same pair of nodes.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::{identifier::Id, semantic::Diagram};

/// Adjacency-indexed view of a diagram's node/edge structure.
#[derive(Debug)]
pub struct DiagramGraph {
    nodes: Vec<Id>,
    edges: Vec<(Id, Id)>,
    incoming: HashMap<Id, Vec<Id>>,
    outgoing: HashMap<Id, Vec<Id>>,
}

impl DiagramGraph {
    /// Builds the graph view of a diagram.
    pub fn from_diagram(diagram: &Diagram) -> Self {
        let nodes: Vec<Id> = diagram.nodes().iter().map(|node| node.id()).collect();
        let mut edges = Vec::with_capacity(diagram.edges().len());
        let mut incoming: HashMap<Id, Vec<Id>> = HashMap::new();
        let mut outgoing: HashMap<Id, Vec<Id>> = HashMap::new();

        for edge in diagram.edges() {
            edges.push((edge.source(), edge.target()));
            outgoing.entry(edge.source()).or_default().push(edge.target());
            incoming.entry(edge.target()).or_default().push(edge.source());
        }

        Self {
            nodes,
            edges,
            incoming,
            outgoing,
        }
    }

    /// Returns the total number of nodes.
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of edges.
    pub fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks whether a node with the given id exists.
    pub fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains(&id)
    }

    /// Returns an iterator over root nodes (nodes with no incoming edges).
    pub fn roots(&self) -> impl Iterator<Item = Id> {
        self.nodes
            .iter()
            .copied()
            .filter(|id| !self.incoming.contains_key(id))
    }

    /// Returns an iterator over the direct targets of the given node's
    /// outgoing edges. Duplicates appear once per parallel edge.
    pub fn outgoing_nodes(&self, source: Id) -> impl Iterator<Item = Id> {
        self.outgoing.get(&source).into_iter().flatten().copied()
    }

    /// Checks whether `target` is reachable from `source` over forward
    /// edges. A node is always reachable from itself.
    pub fn has_path(&self, source: Id, target: Id) -> bool {
        if source == target {
            return self.contains_node(source);
        }

        let mut visited: HashSet<Id> = HashSet::new();
        let mut queue: VecDeque<Id> = VecDeque::new();
        queue.push_back(source);
        visited.insert(source);

        while let Some(current) = queue.pop_front() {
            for next in self.outgoing_nodes(current) {
                if next == target {
                    return true;
                }
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        false
    }

    /// Checks whether the given ids form a connected chain of forward
    /// edges, with each consecutive pair directly connected.
    pub fn has_chain(&self, ids: &[Id]) -> bool {
        ids.windows(2).all(|pair| {
            self.outgoing_nodes(pair[0])
                .any(|neighbor| neighbor == pair[1])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        icon::Icon,
        semantic::{DiagramBuilder, RankDirection},
    };

    fn diamond() -> Diagram {
        // top -> left -> bottom, top -> right -> bottom
        let mut b = DiagramBuilder::new("Diamond", "diamond", RankDirection::TopBottom);
        let top = b.node("top", "Top", Icon::Users).unwrap();
        let left = b.node("left", "Left", Icon::Lambda).unwrap();
        let right = b.node("right", "Right", Icon::Lambda).unwrap();
        let bottom = b.node("bottom", "Bottom", Icon::DynamoDb).unwrap();
        b.edge(top, left).unwrap();
        b.edge(top, right).unwrap();
        b.edge(left, bottom).unwrap();
        b.edge(right, bottom).unwrap();
        b.build().unwrap()
    }

    #[test]
    fn test_counts() {
        let graph = DiagramGraph::from_diagram(&diamond());
        assert_eq!(graph.nodes_count(), 4);
        assert_eq!(graph.edges_count(), 4);
    }

    #[test]
    fn test_roots() {
        let graph = DiagramGraph::from_diagram(&diamond());
        let roots: Vec<Id> = graph.roots().collect();
        assert_eq!(roots, vec![Id::new("top")]);
    }

    #[test]
    fn test_outgoing_nodes() {
        let graph = DiagramGraph::from_diagram(&diamond());
        let outgoing: Vec<Id> = graph.outgoing_nodes(Id::new("top")).collect();
        assert_eq!(outgoing.len(), 2);
        assert!(outgoing.contains(&Id::new("left")));
        assert!(outgoing.contains(&Id::new("right")));

        assert_eq!(graph.outgoing_nodes(Id::new("bottom")).count(), 0);
    }

    #[test]
    fn test_has_path() {
        let graph = DiagramGraph::from_diagram(&diamond());
        assert!(graph.has_path(Id::new("top"), Id::new("bottom")));
        assert!(graph.has_path(Id::new("left"), Id::new("bottom")));
        assert!(!graph.has_path(Id::new("bottom"), Id::new("top")));
        assert!(!graph.has_path(Id::new("left"), Id::new("right")));
    }

    #[test]
    fn test_has_path_to_self() {
        let graph = DiagramGraph::from_diagram(&diamond());
        assert!(graph.has_path(Id::new("top"), Id::new("top")));
        assert!(!graph.has_path(Id::new("missing"), Id::new("missing")));
    }

    #[test]
    fn test_has_chain() {
        let graph = DiagramGraph::from_diagram(&diamond());
        assert!(graph.has_chain(&[Id::new("top"), Id::new("left"), Id::new("bottom")]));
        assert!(!graph.has_chain(&[Id::new("top"), Id::new("bottom")]));
    }

    #[test]
    fn test_parallel_edges_and_self_loop() {
        let mut b = DiagramBuilder::new("Loops", "loops", RankDirection::LeftRight);
        let a = b.node("pa", "A", Icon::Waf).unwrap();
        let c = b.node("pb", "B", Icon::Waf).unwrap();
        b.edge(a, c).unwrap();
        b.edge(a, c).unwrap();
        b.edge(a, a).unwrap();
        let graph = DiagramGraph::from_diagram(&b.build().unwrap());

        assert_eq!(graph.edges_count(), 3);
        assert_eq!(graph.outgoing_nodes(a).count(), 3);
        // A self-looping node has an incoming edge, so it is not a root
        assert_eq!(graph.roots().count(), 1);
    }
}
