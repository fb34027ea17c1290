// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Insertion-ordered attribute graphs.
//!
//! A [`Graph`] stores nodes identified by string ids and edges carrying
//! numeric attributes. Directed, undirected, and multigraph flavours share one
//! representation; the flavour is fixed at construction through
//! [`GraphKind`]. Neighbour iteration follows the order in which neighbours
//! were first connected, which makes breadth-first traversals and therefore
//! computed temperatures deterministic.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Numeric attributes attached to nodes and edges.
pub type Attributes = BTreeMap<String, f64,>;

/// Adjacency of a single node: neighbour to parallel edges, in insertion
/// order.
type Adjacency = IndexMap<NodeIndex, Vec<EdgeIndex,>,>;

/// Structural flavour of a [`Graph`].
///
/// # Examples
///
/// ```
/// use heatmapx::GraphKind;
///
/// let kind = GraphKind::multi_directed();
/// assert!(kind.directed);
/// assert!(kind.multigraph);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,)]
pub struct GraphKind
{
    /// Edges have a direction from source to target.
    #[serde(default)]
    pub directed:   bool,
    /// Several edges may connect the same pair of endpoints.
    #[serde(default)]
    pub multigraph: bool,
}

impl GraphKind
{
    /// Undirected graph without parallel edges.
    pub const fn undirected() -> Self
    {
        Self {
            directed: false, multigraph: false,
        }
    }

    /// Directed graph without parallel edges.
    pub const fn directed() -> Self
    {
        Self {
            directed: true, multigraph: false,
        }
    }

    /// Undirected graph allowing parallel edges.
    pub const fn multi_undirected() -> Self
    {
        Self {
            directed: false, multigraph: true,
        }
    }

    /// Directed graph allowing parallel edges.
    pub const fn multi_directed() -> Self
    {
        Self {
            directed: true, multigraph: true,
        }
    }
}

/// Stable index of a node inside a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,)]
pub struct NodeIndex(usize,);

impl NodeIndex
{
    /// Wraps a raw position. Lookups with an index that does not belong to a
    /// graph return `None`.
    pub const fn new(index: usize,) -> Self
    {
        Self(index,)
    }

    /// Returns the position of the node in insertion order.
    pub const fn index(self,) -> usize
    {
        self.0
    }
}

/// Stable index of an edge inside a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,)]
pub struct EdgeIndex(usize,);

impl EdgeIndex
{
    /// Wraps a raw position. Lookups with an index that does not belong to a
    /// graph return `None`.
    pub const fn new(index: usize,) -> Self
    {
        Self(index,)
    }

    /// Returns the position of the edge in insertion order.
    pub const fn index(self,) -> usize
    {
        self.0
    }
}

/// Node payload.
#[derive(Debug, Clone, PartialEq,)]
pub struct Node
{
    /// Unique identifier of the node.
    pub id:         String,
    /// Numeric attributes attached to the node.
    pub attributes: Attributes,
}

/// Edge payload.
#[derive(Debug, Clone, PartialEq,)]
pub struct Edge
{
    /// Endpoint the edge was added from.
    pub source:     NodeIndex,
    /// Endpoint the edge was added to.
    pub target:     NodeIndex,
    /// Distinguishes parallel edges between the same endpoints. Always `0`
    /// in simple graphs.
    pub key:        usize,
    /// Numeric attributes attached to the edge.
    pub attributes: Attributes,
}

/// Attribute graph with insertion-ordered adjacency.
///
/// # Examples
///
/// ```
/// use heatmapx::{Attributes, Graph, GraphKind};
///
/// let mut graph = Graph::new(GraphKind::undirected(),);
/// graph.add_edge("a", "b", Attributes::new(),);
/// graph.add_edge("b", "a", Attributes::new(),);
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq,)]
pub struct Graph
{
    kind:         GraphKind,
    nodes:        Vec<Node,>,
    edges:        Vec<Edge,>,
    lookup:       HashMap<String, NodeIndex,>,
    successors:   Vec<Adjacency,>,
    predecessors: Vec<Adjacency,>,
}

impl Graph
{
    /// Creates an empty graph of the provided kind.
    pub fn new(kind: GraphKind,) -> Self
    {
        Self::with_capacity(kind, 0, 0,)
    }

    /// Creates an empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(kind: GraphKind, nodes: usize, edges: usize,) -> Self
    {
        Self {
            kind,
            nodes: Vec::with_capacity(nodes,),
            edges: Vec::with_capacity(edges,),
            lookup: HashMap::with_capacity(nodes,),
            successors: Vec::with_capacity(nodes,),
            predecessors: Vec::with_capacity(nodes,),
        }
    }

    /// Returns the structural flavour of the graph.
    pub const fn kind(&self,) -> GraphKind
    {
        self.kind
    }

    /// Returns `true` when edges are directed.
    pub const fn is_directed(&self,) -> bool
    {
        self.kind.directed
    }

    /// Returns `true` when parallel edges are allowed.
    pub const fn is_multigraph(&self,) -> bool
    {
        self.kind.multigraph
    }

    /// Number of nodes.
    pub fn node_count(&self,) -> usize
    {
        self.nodes.len()
    }

    /// Number of edges, counting parallel edges individually.
    pub fn edge_count(&self,) -> usize
    {
        self.edges.len()
    }

    /// Adds a node or merges `attributes` into an existing node with the same
    /// id. Existing attribute values are overwritten.
    pub fn add_node<I,>(&mut self, id: I, attributes: Attributes,) -> NodeIndex
    where
        I: AsRef<str,>,
    {
        let index = self.ensure_node(id.as_ref(),);
        self.nodes[index.0].attributes.extend(attributes,);
        index
    }

    /// Adds an edge between `source` and `target`, creating missing endpoints.
    ///
    /// In a simple graph an existing edge between the endpoints (in either
    /// direction when undirected) receives the attributes instead of a new
    /// edge being created. In a multigraph a parallel edge is always added
    /// with the lowest free key not below the number of parallel edges.
    pub fn add_edge<S, T,>(&mut self, source: S, target: T, attributes: Attributes,) -> EdgeIndex
    where
        S: AsRef<str,>,
        T: AsRef<str,>,
    {
        let source = self.ensure_node(source.as_ref(),);
        let target = self.ensure_node(target.as_ref(),);
        self.connect(source, target, attributes,)
    }

    /// Index-based variant of [`add_edge`](Self::add_edge).
    ///
    /// # Panics
    ///
    /// Panics when either index does not belong to this graph.
    pub fn connect(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        attributes: Attributes,
    ) -> EdgeIndex
    {
        if !self.kind.multigraph
            && let Some(edge,) = self.edges_between(source, target,).first().copied()
        {
            self.edges[edge.0].attributes.extend(attributes,);
            return edge;
        }

        let key = self.next_key(source, target,);
        self.push_edge(source, target, key, attributes,)
    }

    /// Adds a parallel edge with an explicit `key`, or merges `attributes`
    /// into the parallel edge already holding that key.
    ///
    /// Simple graphs ignore `key` and behave like [`connect`](Self::connect).
    ///
    /// # Panics
    ///
    /// Panics when either index does not belong to this graph.
    pub fn connect_keyed(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        key: usize,
        attributes: Attributes,
    ) -> EdgeIndex
    {
        if !self.kind.multigraph {
            return self.connect(source, target, attributes,);
        }

        let existing = self.successors[source.0]
            .get(&target,)
            .and_then(|edges| edges.iter().copied().find(|edge| self.edges[edge.0].key == key,),);
        if let Some(edge,) = existing {
            self.edges[edge.0].attributes.extend(attributes,);
            return edge;
        }

        self.push_edge(source, target, key, attributes,)
    }

    /// Returns the index of the node with the provided id.
    pub fn node_index(&self, id: &str,) -> Option<NodeIndex,>
    {
        self.lookup.get(id,).copied()
    }

    /// Returns `true` when a node with the provided id exists.
    pub fn contains_node(&self, id: &str,) -> bool
    {
        self.lookup.contains_key(id,)
    }

    /// Returns the node stored at `index`.
    pub fn node(&self, index: NodeIndex,) -> Option<&Node,>
    {
        self.nodes.get(index.0,)
    }

    /// Returns the edge stored at `index`.
    pub fn edge(&self, index: EdgeIndex,) -> Option<&Edge,>
    {
        self.edges.get(index.0,)
    }

    /// Iterates over nodes together with their indices in insertion order.
    pub fn nodes(&self,) -> impl ExactSizeIterator<Item = (NodeIndex, &Node,),> + '_
    {
        self.nodes.iter().enumerate().map(|(position, node,)| (NodeIndex(position,), node,),)
    }

    /// Iterates over edges together with their indices in insertion order.
    pub fn edges(&self,) -> impl ExactSizeIterator<Item = (EdgeIndex, &Edge,),> + '_
    {
        self.edges.iter().enumerate().map(|(position, edge,)| (EdgeIndex(position,), edge,),)
    }

    /// Returns the first edge connecting `source` to `target`. Undirected
    /// graphs ignore the order of the endpoints.
    pub fn find_edge(&self, source: &str, target: &str,) -> Option<EdgeIndex,>
    {
        let source = self.node_index(source,)?;
        let target = self.node_index(target,)?;
        self.successors[source.0].get(&target,).and_then(|edges| edges.first().copied(),)
    }

    /// Parallel edges connecting `source` to `target` in insertion order.
    /// Undirected graphs ignore the order of the endpoints.
    pub fn edges_between(&self, source: NodeIndex, target: NodeIndex,) -> &[EdgeIndex]
    {
        self.successors
            .get(source.0,)
            .and_then(|adjacency| adjacency.get(&target,),)
            .map(Vec::as_slice,)
            .unwrap_or_default()
    }

    /// Edges leaving `node` paired with the neighbour on the other side.
    ///
    /// Neighbours are visited in the order they were first connected and
    /// parallel edges in key order. For undirected graphs every incident edge
    /// is reported, a self loop once.
    ///
    /// # Panics
    ///
    /// Panics when `node` does not belong to this graph.
    pub fn out_edges(&self, node: NodeIndex,) -> impl Iterator<Item = (EdgeIndex, NodeIndex,),> + '_
    {
        adjacency_iter(&self.successors[node.0],)
    }

    /// Edges entering `node` paired with the neighbour on the other side.
    ///
    /// Undirected graphs have no notion of incoming edges; this yields the
    /// same sequence as [`out_edges`](Self::out_edges).
    ///
    /// # Panics
    ///
    /// Panics when `node` does not belong to this graph.
    pub fn in_edges(&self, node: NodeIndex,) -> impl Iterator<Item = (EdgeIndex, NodeIndex,),> + '_
    {
        if self.kind.directed {
            adjacency_iter(&self.predecessors[node.0],)
        } else {
            adjacency_iter(&self.successors[node.0],)
        }
    }

    /// Reads a node attribute.
    pub fn node_attribute(&self, node: NodeIndex, name: &str,) -> Option<f64,>
    {
        self.nodes.get(node.0,).and_then(|node| node.attributes.get(name,).copied(),)
    }

    /// Reads an edge attribute.
    pub fn edge_attribute(&self, edge: EdgeIndex, name: &str,) -> Option<f64,>
    {
        self.edges.get(edge.0,).and_then(|edge| edge.attributes.get(name,).copied(),)
    }

    /// Writes a node attribute, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics when `node` does not belong to this graph.
    pub fn set_node_attribute(&mut self, node: NodeIndex, name: &str, value: f64,) -> Option<f64,>
    {
        self.nodes[node.0].attributes.insert(name.to_owned(), value,)
    }

    /// Writes an edge attribute, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics when `edge` does not belong to this graph.
    pub fn set_edge_attribute(&mut self, edge: EdgeIndex, name: &str, value: f64,) -> Option<f64,>
    {
        self.edges[edge.0].attributes.insert(name.to_owned(), value,)
    }

    /// Returns a graph with identical structure whose node and edge
    /// attributes are produced by the provided closures.
    pub(crate) fn map_attributes<N, E,>(&self, mut node_map: N, mut edge_map: E,) -> Self
    where
        N: FnMut(&Node,) -> Attributes,
        E: FnMut(&Edge,) -> Attributes,
    {
        let mut mapped = self.clone();
        for node in &mut mapped.nodes {
            node.attributes = node_map(node,);
        }
        for edge in &mut mapped.edges {
            edge.attributes = edge_map(edge,);
        }
        mapped
    }

    /// Copies the structure with every edge re-added node by node: each
    /// node's outgoing edges in adjacency order, an undirected edge only from
    /// the endpoint that comes first in node order. Neighbours of a node in
    /// the copy are therefore ordered by the node that contributed the edge.
    ///
    /// Node indices are preserved; the returned vector maps every edge of the
    /// copy to the edge of `self` it stands for. Attributes are not copied.
    pub(crate) fn node_major(&self,) -> (Self, Vec<EdgeIndex,>,)
    {
        let mut rebuilt = Self::with_capacity(self.kind, self.nodes.len(), self.edges.len(),);
        for node in &self.nodes {
            rebuilt.ensure_node(&node.id,);
        }

        let mut origin = Vec::with_capacity(self.edges.len(),);
        for (position, adjacency,) in self.successors.iter().enumerate() {
            let node = NodeIndex(position,);
            for (edge, neighbour,) in adjacency_iter(adjacency,) {
                if !self.kind.directed && neighbour < node {
                    continue;
                }
                let key = rebuilt.next_key(node, neighbour,);
                rebuilt.push_edge(node, neighbour, key, Attributes::new(),);
                origin.push(edge,);
            }
        }

        (rebuilt, origin,)
    }

    fn next_key(&self, source: NodeIndex, target: NodeIndex,) -> usize
    {
        let parallel = self.edges_between(source, target,);
        let mut key = parallel.len();
        while parallel.iter().any(|edge| self.edges[edge.0].key == key,) {
            key += 1;
        }
        key
    }

    fn push_edge(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        key: usize,
        attributes: Attributes,
    ) -> EdgeIndex
    {
        let edge = EdgeIndex(self.edges.len(),);
        self.edges.push(Edge {
            source,
            target,
            key,
            attributes,
        },);

        self.successors[source.0].entry(target,).or_default().push(edge,);
        if self.kind.directed {
            self.predecessors[target.0].entry(source,).or_default().push(edge,);
        } else if source != target {
            self.successors[target.0].entry(source,).or_default().push(edge,);
        }

        edge
    }

    fn ensure_node(&mut self, id: &str,) -> NodeIndex
    {
        if let Some(index,) = self.lookup.get(id,) {
            return *index;
        }

        let index = NodeIndex(self.nodes.len(),);
        self.nodes.push(Node {
            id:         id.to_owned(),
            attributes: Attributes::new(),
        },);
        self.lookup.insert(id.to_owned(), index,);
        self.successors.push(Adjacency::new(),);
        self.predecessors.push(Adjacency::new(),);
        index
    }
}

fn adjacency_iter(adjacency: &Adjacency,) -> impl Iterator<Item = (EdgeIndex, NodeIndex,),> + '_
{
    adjacency
        .iter()
        .flat_map(|(neighbour, edges,)| edges.iter().map(move |edge| (*edge, *neighbour,),),)
}
