// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Temperatures radiating from heat sources in a graph.
//!
//! Temperatures start at zero and are raised breadth-first from every source
//! node. For a source `s`, each edge in layer `n` of the traversal gains the
//! `n`-th increment, a node first reached in layer `n` gains the increment of
//! layer `n + 1`, and `s` itself gains the first increment. Passes of distinct
//! sources are independent and their contributions add up.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    error::Error,
    document::ensure_unreserved,
    graph::{Attributes, EdgeIndex, Graph, NodeIndex},
    increments::Increments,
    traversal::{EdgeBfs, Orientation},
};

/// Attribute that receives temperatures unless configured otherwise.
pub const DEFAULT_KEY: &str = "heat";

/// Parameters controlling how heat spreads from the sources.
///
/// # Examples
///
/// ```
/// use heatmapx::{HeatOptions, Increments};
///
/// let options = HeatOptions::default().max_depth(2,).increments(vec![3.0, 2.0, 1.0],);
/// assert_eq!(options.max_depth, Some(2));
/// assert_eq!(options.increments, Increments::Sequence(vec![3.0, 2.0, 1.0]));
/// assert_eq!(options.key, "heat");
/// ```
#[derive(Debug, Clone, PartialEq,)]
pub struct HeatOptions
{
    /// Number of breadth-first layers to heat; `None` heats everything
    /// reachable from a source.
    pub max_depth:   Option<usize,>,
    /// Heat added per layer.
    pub increments:  Increments,
    /// Node and edge attribute scaling increments multiplicatively. Missing
    /// values count as `1`.
    pub weight:      Option<String,>,
    /// Attribute receiving the temperature.
    pub key:         String,
    /// Direction in which directed edges are followed.
    pub orientation: Orientation,
}

impl Default for HeatOptions
{
    fn default() -> Self
    {
        Self {
            max_depth:   None,
            increments:  Increments::default(),
            weight:      None,
            key:         DEFAULT_KEY.to_owned(),
            orientation: Orientation::default(),
        }
    }
}

impl HeatOptions
{
    /// Limits heating to `depth` breadth-first layers.
    pub fn max_depth(mut self, depth: usize,) -> Self
    {
        self.max_depth = Some(depth,);
        self
    }

    /// Replaces the per-layer increments.
    pub fn increments<I,>(mut self, increments: I,) -> Self
    where
        I: Into<Increments,>,
    {
        self.increments = increments.into();
        self
    }

    /// Scales increments by the named attribute.
    pub fn weight<W,>(mut self, weight: W,) -> Self
    where
        W: Into<String,>,
    {
        self.weight = Some(weight.into(),);
        self
    }

    /// Stores temperatures under the named attribute.
    pub fn key<K,>(mut self, key: K,) -> Self
    where
        K: Into<String,>,
    {
        self.key = key.into();
        self
    }

    /// Selects how directed edges are followed.
    pub fn orientation(mut self, orientation: Orientation,) -> Self
    {
        self.orientation = orientation;
        self
    }

    /// Checks the options before any heat is computed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when the key is blank
    /// or names a node-link record field, the weight attribute is blank,
    /// reserved, or equal to the key, or an increment is NaN.
    pub fn validate(&self,) -> Result<(), Error,>
    {
        if self.key.trim().is_empty() {
            return Err(Error::validation("key cannot be empty",),);
        }
        ensure_unreserved(&self.key, "key",)?;

        if let Some(weight,) = self.weight.as_deref() {
            if weight.trim().is_empty() {
                return Err(Error::validation("weight cannot be empty",),);
            }
            ensure_unreserved(weight, "weight",)?;
            if weight == self.key {
                return Err(Error::validation(format!(
                    "weight attribute '{weight}' cannot also store temperatures"
                ),),);
            }
        }

        self.increments.validate()
    }
}

/// Calculates temperatures radiating from `sources`.
///
/// The returned graph has the structure of `graph`. Every node and edge
/// carries the temperature under `options.key`; when `options.weight` is set
/// the weight attributes are copied as well. No other attributes are kept.
/// Sources that are not part of the graph contribute nothing, and a source
/// listed twice heats twice.
///
/// The traversal walks a copy of `graph` whose edges were re-added node by
/// node, so a node's neighbours are visited ordered by the node that
/// contributed the edge rather than by insertion order. The returned graph
/// keeps the input's order.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when `options` fail
/// [`HeatOptions::validate`].
///
/// # Examples
///
/// ```
/// use heatmapx::{Attributes, Graph, GraphKind, HeatOptions, temperature_graph};
///
/// # fn main() -> Result<(), heatmapx::Error> {
/// let mut graph = Graph::new(GraphKind::undirected(),);
/// graph.add_edge("a", "b", Attributes::new(),);
/// graph.add_edge("b", "c", Attributes::new(),);
///
/// let options = HeatOptions::default().increments(vec![3.0, 2.0, 1.0],);
/// let heated = temperature_graph(&graph, ["a"], &options,)?;
///
/// let c = heated.node_index("c",).expect("node c",);
/// assert_eq!(heated.node_attribute(c, "heat"), Some(1.0));
/// # Ok(())
/// # }
/// ```
pub fn temperature_graph<I, S,>(
    graph: &Graph,
    sources: I,
    options: &HeatOptions,
) -> Result<Graph, Error,>
where
    I: IntoIterator<Item = S,>,
    S: AsRef<str,>,
{
    options.validate()?;

    let key = options.key.as_str();
    let weight = options.weight.as_deref();
    let mut heated = graph.map_attributes(
        |node| seed_attributes(&node.attributes, key, weight,),
        |edge| seed_attributes(&edge.attributes, key, weight,),
    );

    let resolved: Vec<NodeIndex,> = sources
        .into_iter()
        .filter_map(|source| {
            let id = source.as_ref();
            let index = graph.node_index(id,);
            if index.is_none() {
                warn!("heat source '{}' is not part of the graph", id);
            }
            index
        },)
        .collect();

    if resolved.is_empty() {
        debug!("no heat sources resolved; returning zero temperatures");
        return Ok(heated,);
    }

    let (walk, origin,) = graph.node_major();
    let totals = resolved
        .par_iter()
        .map(|source| heat_from_source(graph, &walk, &origin, *source, options,),)
        .reduce(|| HeatDelta::zeroed(graph,), HeatDelta::merge,);

    for (position, value,) in totals.nodes.into_iter().enumerate() {
        heated.set_node_attribute(NodeIndex::new(position,), key, value,);
    }
    for (position, value,) in totals.edges.into_iter().enumerate() {
        heated.set_edge_attribute(EdgeIndex::new(position,), key, value,);
    }

    Ok(heated,)
}

/// Returns the lowest and highest temperature stored under `key` across all
/// nodes and edges, or `None` when no node or edge carries it.
pub fn temperature_range(graph: &Graph, key: &str,) -> Option<(f64, f64,),>
{
    let node_values = graph.nodes().filter_map(|(_, node,)| node.attributes.get(key,).copied(),);
    let edge_values = graph.edges().filter_map(|(_, edge,)| edge.attributes.get(key,).copied(),);

    node_values.chain(edge_values,).fold(None, |range, value| match range {
        None => Some((value, value,),),
        Some((low, high,),) => Some((low.min(value,), high.max(value,),),),
    },)
}

/// Heat contributed by one or more source passes.
#[derive(Debug, Clone, PartialEq,)]
struct HeatDelta
{
    nodes: Vec<f64,>,
    edges: Vec<f64,>,
}

impl HeatDelta
{
    fn zeroed(graph: &Graph,) -> Self
    {
        Self {
            nodes: vec![0.0; graph.node_count()], edges: vec![0.0; graph.edge_count()],
        }
    }

    fn merge(mut self, other: Self,) -> Self
    {
        for (total, value,) in self.nodes.iter_mut().zip(other.nodes,) {
            *total += value;
        }
        for (total, value,) in self.edges.iter_mut().zip(other.edges,) {
            *total += value;
        }
        self
    }
}

/// Runs one source pass over `walk`, the node-major copy of `graph`, and
/// credits each traversed edge to the `graph` edge it stands for.
fn heat_from_source(
    graph: &Graph,
    walk: &Graph,
    origin: &[EdgeIndex],
    source: NodeIndex,
    options: &HeatOptions,
) -> HeatDelta
{
    let mut delta = HeatDelta::zeroed(graph,);
    let mut visited = vec![false; graph.node_count()];
    let weight = options.weight.as_deref();
    let depth_limit = options.max_depth.unwrap_or(usize::MAX,);

    let layers = EdgeBfs::new(walk, [source], options.orientation,)
        .by_depth()
        .zip(options.increments.pairs(),)
        .take(depth_limit,);

    let mut depth = 0usize;
    for (layer, (increment, next_increment,),) in layers {
        for traversed in &layer {
            let (parent, child,) = (traversed.parent, traversed.child,);
            let edge = origin[traversed.edge.index()];

            delta.edges[edge.index()] += edge_weight(graph, edge, weight,) * increment;
            if !visited[parent.index()] {
                delta.nodes[parent.index()] += node_weight(graph, parent, weight,) * increment;
            }
            if !visited[child.index()] {
                delta.nodes[child.index()] += node_weight(graph, child, weight,) * next_increment;
            }
            visited[parent.index()] = true;
            visited[child.index()] = true;
        }
        depth += 1;
    }

    debug!(
        source = source.index(),
        layers = depth,
        "heated graph from source"
    );
    delta
}

fn node_weight(graph: &Graph, node: NodeIndex, weight: Option<&str,>,) -> f64
{
    weight.and_then(|name| graph.node_attribute(node, name,),).unwrap_or(1.0,)
}

fn edge_weight(graph: &Graph, edge: EdgeIndex, weight: Option<&str,>,) -> f64
{
    weight.and_then(|name| graph.edge_attribute(edge, name,),).unwrap_or(1.0,)
}

fn seed_attributes(attributes: &Attributes, key: &str, weight: Option<&str,>,) -> Attributes
{
    let mut seeded = Attributes::new();
    seeded.insert(key.to_owned(), 0.0,);
    if let Some(name,) = weight
        && let Some(value,) = attributes.get(name,)
    {
        seeded.insert(name.to_owned(), *value,);
    }
    seeded
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::*;
    use crate::graph::GraphKind;

    fn path(kind: GraphKind, ids: &[&str],) -> Graph
    {
        let mut graph = Graph::new(kind,);
        for pair in ids.windows(2,) {
            graph.add_edge(pair[0], pair[1], Attributes::new(),);
        }
        graph
    }

    fn node_heat(graph: &Graph, id: &str,) -> f64
    {
        let index = graph.node_index(id,).expect("node exists",);
        graph.node_attribute(index, DEFAULT_KEY,).expect("node temperature",)
    }

    fn edge_heat(graph: &Graph, source: &str, target: &str,) -> f64
    {
        let index = graph.find_edge(source, target,).expect("edge exists",);
        graph.edge_attribute(index, DEFAULT_KEY,).expect("edge temperature",)
    }

    #[test]
    fn empty_graph_without_sources_returns_new_empty_graph()
    {
        let graph = Graph::new(GraphKind::directed(),);
        let heated = temperature_graph(&graph, Vec::<String,>::new(), &HeatOptions::default(),)
            .expect("heating succeeds",);

        assert_eq!(heated.kind(), GraphKind::directed());
        assert_eq!(heated.node_count(), 0);
        assert_eq!(heated.edge_count(), 0);
    }

    #[test]
    fn sequence_increments_decrease_along_a_path()
    {
        let graph = path(GraphKind::undirected(), &["a", "b", "c", "d", "e",],);
        let options = HeatOptions::default().increments(vec![3.0, 2.0, 1.0],);
        let heated = temperature_graph(&graph, ["a"], &options,).expect("heating succeeds",);

        assert_eq!(node_heat(&heated, "a"), 3.0);
        assert_eq!(node_heat(&heated, "b"), 2.0);
        assert_eq!(node_heat(&heated, "c"), 1.0);
        assert_eq!(node_heat(&heated, "d"), 0.0);
        assert_eq!(node_heat(&heated, "e"), 0.0);
        assert_eq!(edge_heat(&heated, "a", "b"), 3.0);
        assert_eq!(edge_heat(&heated, "b", "c"), 2.0);
        assert_eq!(edge_heat(&heated, "c", "d"), 1.0);
        assert_eq!(edge_heat(&heated, "d", "e"), 0.0);
    }

    #[test]
    fn constant_increment_heats_the_whole_component()
    {
        let mut graph = path(GraphKind::undirected(), &["a", "b", "c",],);
        graph.add_edge("x", "y", Attributes::new(),);
        let heated = temperature_graph(&graph, ["b"], &HeatOptions::default(),)
            .expect("heating succeeds",);

        for id in ["a", "b", "c",] {
            assert_eq!(node_heat(&heated, id), 1.0, "node {id}");
        }
        assert_eq!(node_heat(&heated, "x"), 0.0);
        assert_eq!(edge_heat(&heated, "a", "b"), 1.0);
        assert_eq!(edge_heat(&heated, "b", "c"), 1.0);
        assert_eq!(edge_heat(&heated, "x", "y"), 0.0);
    }

    #[test]
    fn max_depth_limits_the_number_of_layers()
    {
        let graph = path(GraphKind::undirected(), &["a", "b", "c",],);
        let heated = temperature_graph(&graph, ["a"], &HeatOptions::default().max_depth(1,),)
            .expect("heating succeeds",);

        assert_eq!(node_heat(&heated, "a"), 1.0);
        assert_eq!(node_heat(&heated, "b"), 1.0);
        assert_eq!(node_heat(&heated, "c"), 0.0);
        assert_eq!(edge_heat(&heated, "b", "c"), 0.0);
    }

    #[test]
    fn zero_depth_leaves_everything_cold()
    {
        let graph = path(GraphKind::undirected(), &["a", "b",],);
        let heated = temperature_graph(&graph, ["a"], &HeatOptions::default().max_depth(0,),)
            .expect("heating succeeds",);

        assert_eq!(temperature_range(&heated, DEFAULT_KEY), Some((0.0, 0.0)));
    }

    #[test]
    fn weights_scale_increments_and_are_copied()
    {
        let mut graph = Graph::new(GraphKind::undirected(),);
        graph.add_node("b", [("w".to_owned(), 2.0,),].into_iter().collect(),);
        graph.add_node("a", [("label".to_owned(), 7.0,),].into_iter().collect(),);
        graph.add_edge("a", "b", [("w".to_owned(), 5.0,),].into_iter().collect(),);
        graph.add_edge("b", "c", Attributes::new(),);

        let options = HeatOptions::default().increments(vec![3.0, 2.0],).weight("w",);
        let heated = temperature_graph(&graph, ["a"], &options,).expect("heating succeeds",);

        assert_eq!(node_heat(&heated, "a"), 3.0);
        assert_eq!(node_heat(&heated, "b"), 4.0);
        assert_eq!(node_heat(&heated, "c"), 0.0);
        assert_eq!(edge_heat(&heated, "a", "b"), 15.0);
        assert_eq!(edge_heat(&heated, "b", "c"), 2.0);

        let b = heated.node_index("b",).expect("node b",);
        assert_eq!(heated.node_attribute(b, "w"), Some(2.0));
        let a = heated.node_index("a",).expect("node a",);
        assert_eq!(heated.node_attribute(a, "label"), None);
    }

    #[test]
    fn contributions_of_several_sources_add_up()
    {
        let graph = path(GraphKind::undirected(), &["a", "b", "c",],);
        let heated = temperature_graph(&graph, ["a", "c"], &HeatOptions::default(),)
            .expect("heating succeeds",);

        assert_eq!(node_heat(&heated, "b"), 2.0);
        assert_eq!(edge_heat(&heated, "a", "b"), 2.0);
    }

    #[test]
    fn siblings_in_a_triangle_share_the_second_layer_increment()
    {
        let mut graph = Graph::new(GraphKind::undirected(),);
        graph.add_edge("s", "a", Attributes::new(),);
        graph.add_edge("s", "b", Attributes::new(),);
        graph.add_edge("a", "b", Attributes::new(),);

        let options = HeatOptions::default().increments(vec![4.0, 2.0],);
        let heated = temperature_graph(&graph, ["s"], &options,).expect("heating succeeds",);

        assert_eq!(node_heat(&heated, "s"), 4.0);
        assert_eq!(node_heat(&heated, "a"), 2.0);
        assert_eq!(node_heat(&heated, "b"), 2.0);
        assert_eq!(edge_heat(&heated, "s", "a"), 4.0);
        assert_eq!(edge_heat(&heated, "a", "b"), 2.0);
    }

    #[test]
    fn unknown_sources_are_ignored()
    {
        let graph = path(GraphKind::undirected(), &["a", "b",],);
        let heated = temperature_graph(&graph, ["missing"], &HeatOptions::default(),)
            .expect("heating succeeds",);

        assert_eq!(temperature_range(&heated, DEFAULT_KEY), Some((0.0, 0.0)));
    }

    #[test]
    fn isolated_source_stays_cold()
    {
        let mut graph = Graph::new(GraphKind::undirected(),);
        graph.add_node("lonely", Attributes::new(),);
        let heated = temperature_graph(&graph, ["lonely"], &HeatOptions::default(),)
            .expect("heating succeeds",);

        assert_eq!(node_heat(&heated, "lonely"), 0.0);
    }

    #[test]
    fn directed_graphs_follow_the_selected_orientation()
    {
        let graph = path(GraphKind::directed(), &["a", "b", "c",],);

        let forward = temperature_graph(&graph, ["b"], &HeatOptions::default(),)
            .expect("heating succeeds",);
        assert_eq!(node_heat(&forward, "a"), 0.0);
        assert_eq!(node_heat(&forward, "c"), 1.0);

        let reverse = HeatOptions::default().orientation(Orientation::Reverse,);
        let backward = temperature_graph(&graph, ["b"], &reverse,).expect("heating succeeds",);
        assert_eq!(node_heat(&backward, "a"), 1.0);
        assert_eq!(node_heat(&backward, "c"), 0.0);

        let both = HeatOptions::default().orientation(Orientation::Ignore,);
        let everywhere = temperature_graph(&graph, ["b"], &both,).expect("heating succeeds",);
        assert_eq!(node_heat(&everywhere, "a"), 1.0);
        assert_eq!(node_heat(&everywhere, "c"), 1.0);
    }

    #[test]
    fn self_loop_added_before_other_edges_is_walked_after_them()
    {
        let mut graph = Graph::new(GraphKind::undirected(),);
        graph.add_node("2", Attributes::new(),);
        graph.add_edge("6", "6", Attributes::new(),);
        graph.add_edge("6", "2", Attributes::new(),);

        let options = HeatOptions::default().increments(2.0,).max_depth(1,);
        let heated = temperature_graph(&graph, ["6"], &options,).expect("heating succeeds",);

        assert_eq!(node_heat(&heated, "6"), 2.0);
        assert_eq!(node_heat(&heated, "2"), 2.0);
        assert_eq!(edge_heat(&heated, "6", "6"), 2.0);
        assert_eq!(edge_heat(&heated, "6", "2"), 2.0);
    }

    #[test]
    fn weighted_self_loop_with_several_sources()
    {
        let mut graph = Graph::new(GraphKind::undirected(),);
        graph.add_node("2", Attributes::new(),);
        graph.add_node("4", [("w".to_owned(), 2.5,),].into_iter().collect(),);
        graph.add_edge("6", "6", Attributes::new(),);
        graph.add_edge("6", "2", Attributes::new(),);
        graph.add_edge("4", "4", Attributes::new(),);
        graph.add_edge("4", "2", Attributes::new(),);

        let options = HeatOptions::default().increments(2.0,).max_depth(1,).weight("w",);
        let heated = temperature_graph(&graph, ["6", "4"], &options,).expect("heating succeeds",);

        assert_eq!(node_heat(&heated, "6"), 2.0);
        assert_eq!(node_heat(&heated, "4"), 5.0);
        assert_eq!(node_heat(&heated, "2"), 4.0);
    }

    #[test]
    fn self_loop_on_the_earliest_node_collects_both_increments()
    {
        let mut graph = Graph::new(GraphKind::undirected(),);
        graph.add_edge("6", "6", Attributes::new(),);
        graph.add_edge("6", "2", Attributes::new(),);

        let options = HeatOptions::default().increments(2.0,).max_depth(1,);
        let heated = temperature_graph(&graph, ["6"], &options,).expect("heating succeeds",);

        assert_eq!(node_heat(&heated, "6"), 4.0);
        assert_eq!(node_heat(&heated, "2"), 2.0);
    }

    #[test]
    fn reverse_traversal_walks_predecessors_in_node_order()
    {
        let mut graph = Graph::new(GraphKind::directed(),);
        graph.add_node("b", Attributes::new(),);
        graph.add_edge("a", "a", Attributes::new(),);
        graph.add_edge("b", "a", Attributes::new(),);

        let options =
            HeatOptions::default().increments(2.0,).max_depth(1,).orientation(Orientation::Reverse,);
        let heated = temperature_graph(&graph, ["a"], &options,).expect("heating succeeds",);

        assert_eq!(node_heat(&heated, "a"), 2.0);
        assert_eq!(node_heat(&heated, "b"), 2.0);
        assert_eq!(edge_heat(&heated, "a", "a"), 2.0);
        assert_eq!(edge_heat(&heated, "b", "a"), 2.0);
    }

    #[test]
    fn parallel_edges_are_heated_individually()
    {
        let mut graph = Graph::new(GraphKind::multi_undirected(),);
        let first = graph.add_edge("a", "b", Attributes::new(),);
        let second = graph.add_edge("a", "b", Attributes::new(),);
        let heated = temperature_graph(&graph, ["a"], &HeatOptions::default().increments(5.0,),)
            .expect("heating succeeds",);

        assert_eq!(heated.edge_attribute(first, DEFAULT_KEY), Some(5.0));
        assert_eq!(heated.edge_attribute(second, DEFAULT_KEY), Some(5.0));
        assert_eq!(node_heat(&heated, "b"), 5.0);
    }

    #[test]
    fn custom_key_stores_temperatures_elsewhere()
    {
        let graph = path(GraphKind::undirected(), &["a", "b",],);
        let heated = temperature_graph(&graph, ["a"], &HeatOptions::default().key("temp",),)
            .expect("heating succeeds",);

        let a = heated.node_index("a",).expect("node a",);
        assert_eq!(heated.node_attribute(a, "temp"), Some(1.0));
        assert_eq!(heated.node_attribute(a, DEFAULT_KEY), None);
    }

    #[test]
    fn validation_rejects_conflicting_weight_and_key()
    {
        let graph = path(GraphKind::undirected(), &["a", "b",],);
        let options = HeatOptions::default().weight("heat",);
        let error = temperature_graph(&graph, ["a"], &options,).expect_err("expected validation",);

        match error {
            Error::Validation {
                message,
            } => assert!(message.contains("cannot also store temperatures")),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn validation_rejects_record_field_names()
    {
        for name in ["id", "source", "target", "key",] {
            assert!(HeatOptions::default().key(name,).validate().is_err(), "key {name}");
            assert!(HeatOptions::default().weight(name,).validate().is_err(), "weight {name}");
        }

        let graph = path(GraphKind::undirected(), &["a", "b",],);
        let error = temperature_graph(&graph, ["a"], &HeatOptions::default().key("id",),)
            .expect_err("expected validation",);
        match error {
            Error::Validation {
                message,
            } => assert_eq!(message, "key 'id' is reserved for node-link records"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn validation_rejects_blank_key()
    {
        assert!(HeatOptions::default().key("  ",).validate().is_err());
    }

    #[test]
    fn temperature_range_is_none_without_the_key()
    {
        let graph = path(GraphKind::undirected(), &["a", "b",],);
        assert_eq!(temperature_range(&graph, DEFAULT_KEY), None);
    }

    fn edge_list() -> impl Strategy<Value = Vec<(u8, u8,),>,>
    {
        prop::collection::vec((0u8..8, 0u8..8,), 0..24,)
            .prop_map(|edges| edges.into_iter().filter(|(a, b,)| a != b,).collect(),)
    }

    fn build(edges: &[(u8, u8,)],) -> Graph
    {
        let mut graph = Graph::new(GraphKind::undirected(),);
        for id in 0u8..8 {
            graph.add_node(id.to_string(), Attributes::new(),);
        }
        for (source, target,) in edges {
            graph.add_edge(source.to_string(), target.to_string(), Attributes::new(),);
        }
        graph
    }

    fn temperatures(graph: &Graph,) -> Vec<f64,>
    {
        let nodes = graph.nodes().map(|(_, node,)| node.attributes[DEFAULT_KEY],);
        let edges = graph.edges().map(|(_, edge,)| edge.attributes[DEFAULT_KEY],);
        nodes.chain(edges,).collect()
    }

    proptest! {
        #[test]
        fn heat_from_several_sources_is_additive(edges in edge_list(), first in 0u8..8, second in 0u8..8) {
            let graph = build(&edges);
            let options = HeatOptions::default().increments(vec![3.0, 2.0, 1.0]);
            let ids = [first.to_string(), second.to_string()];

            let combined = temperature_graph(&graph, &ids, &options).expect("heating succeeds");
            let left = temperature_graph(&graph, &ids[..1], &options).expect("heating succeeds");
            let right = temperature_graph(&graph, &ids[1..], &options).expect("heating succeeds");

            let summed: Vec<f64> = temperatures(&left)
                .into_iter()
                .zip(temperatures(&right))
                .map(|(a, b)| a + b)
                .collect();
            prop_assert_eq!(temperatures(&combined), summed);
        }

        #[test]
        fn unit_constant_heats_each_element_at_most_once(edges in edge_list(), source in 0u8..8) {
            let graph = build(&edges);
            let heated = temperature_graph(&graph, [source.to_string()], &HeatOptions::default())
                .expect("heating succeeds");

            prop_assert!(temperatures(&heated).iter().all(|value| *value == 0.0 || *value == 1.0));
        }
    }
}
