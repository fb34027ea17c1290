// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Breadth-first edge traversal grouped into depth layers.
//!
//! [`EdgeBfs`] reports every edge reachable from a set of start nodes exactly
//! once, in breadth-first order. [`DepthGroups`] slices that stream into
//! layers: the edges leaving the start nodes, then the edges leaving the
//! nodes those edges reached, and so on.

use std::{
    collections::{HashSet, VecDeque},
    mem,
};

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeIndex, Graph, NodeIndex};

/// Direction in which directed edges are followed. Undirected graphs ignore
/// this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,)]
#[serde(rename_all = "snake_case")]
pub enum Orientation
{
    /// Follow edges from source to target.
    #[default]
    Original,
    /// Follow edges from target to source.
    Reverse,
    /// Follow edges in both directions.
    Ignore,
}

/// Edge reported by a traversal together with the direction it was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub struct TraversalEdge
{
    /// Traversed edge.
    pub edge:   EdgeIndex,
    /// Endpoint the traversal came from.
    pub parent: NodeIndex,
    /// Endpoint on the other side of the edge.
    pub child:  NodeIndex,
}

/// Breadth-first iterator over the edges reachable from start nodes.
///
/// A node's incident edges are examined when the node is dequeued. Newly
/// discovered children are enqueued even when the connecting edge was already
/// reported, and every edge is reported once.
#[derive(Debug, Clone,)]
pub struct EdgeBfs<'g,>
{
    graph:         &'g Graph,
    orientation:   Orientation,
    visited_nodes: Vec<bool,>,
    visited_edges: Vec<bool,>,
    queue:         VecDeque<NodeIndex,>,
    pending:       VecDeque<TraversalEdge,>,
}

impl<'g,> EdgeBfs<'g,>
{
    /// Creates a traversal starting from `starts`.
    ///
    /// Indices that do not belong to `graph` and repeated start nodes are
    /// skipped.
    pub fn new<I,>(graph: &'g Graph, starts: I, orientation: Orientation,) -> Self
    where
        I: IntoIterator<Item = NodeIndex,>,
    {
        let mut visited_nodes = vec![false; graph.node_count()];
        let mut queue = VecDeque::new();

        for start in starts {
            if let Some(seen,) = visited_nodes.get_mut(start.index(),)
                && !*seen
            {
                *seen = true;
                queue.push_back(start,);
            }
        }

        Self {
            graph,
            orientation,
            visited_nodes,
            visited_edges: vec![false; graph.edge_count()],
            queue,
            pending: VecDeque::new(),
        }
    }

    /// Groups the remaining traversal into depth layers.
    pub fn by_depth(self,) -> DepthGroups<Self,>
    {
        let sources: Vec<NodeIndex,> = self.queue.iter().copied().collect();
        DepthGroups::new(self, sources,)
    }

    fn expand(&mut self, parent: NodeIndex,)
    {
        let graph = self.graph;
        let make = |(edge, child,): (EdgeIndex, NodeIndex,)| TraversalEdge {
            edge,
            parent,
            child,
        };

        if !graph.is_directed() {
            self.pending.extend(graph.out_edges(parent,).map(make,),);
            return;
        }

        match self.orientation {
            Orientation::Original => self.pending.extend(graph.out_edges(parent,).map(make,),),
            Orientation::Reverse => self.pending.extend(graph.in_edges(parent,).map(make,),),
            Orientation::Ignore => {
                self.pending.extend(graph.out_edges(parent,).map(make,),);
                self.pending.extend(graph.in_edges(parent,).map(make,),);
            }
        }
    }
}

impl Iterator for EdgeBfs<'_,>
{
    type Item = TraversalEdge;

    fn next(&mut self,) -> Option<Self::Item,>
    {
        loop {
            if let Some(candidate,) = self.pending.pop_front() {
                let child = candidate.child.index();
                if !self.visited_nodes[child] {
                    self.visited_nodes[child] = true;
                    self.queue.push_back(candidate.child,);
                }

                let edge = candidate.edge.index();
                if !self.visited_edges[edge] {
                    self.visited_edges[edge] = true;
                    return Some(candidate,);
                }
                continue;
            }

            let parent = self.queue.pop_front()?;
            self.expand(parent,);
        }
    }
}

/// Splits a breadth-first edge stream into depth layers.
///
/// The first layer holds the edges whose parent is one of the initial
/// sources. A new layer begins at the first edge whose parent is not among
/// the current layer's sources; the sources of that layer are the children of
/// the edges in the layer before it. An empty stream yields one empty layer.
#[derive(Debug, Clone,)]
pub struct DepthGroups<I,>
{
    edges:    I,
    sources:  HashSet<NodeIndex,>,
    current:  Vec<TraversalEdge,>,
    finished: bool,
}

impl<I,> DepthGroups<I,>
where
    I: Iterator<Item = TraversalEdge,>,
{
    /// Wraps an edge stream produced from `sources`.
    pub fn new<S,>(edges: I, sources: S,) -> Self
    where
        S: IntoIterator<Item = NodeIndex,>,
    {
        Self {
            edges,
            sources: sources.into_iter().collect(),
            current: Vec::new(),
            finished: false,
        }
    }
}

impl<I,> Iterator for DepthGroups<I,>
where
    I: Iterator<Item = TraversalEdge,>,
{
    type Item = Vec<TraversalEdge,>;

    fn next(&mut self,) -> Option<Self::Item,>
    {
        if self.finished {
            return None;
        }

        for edge in self.edges.by_ref() {
            if self.sources.contains(&edge.parent,) {
                self.current.push(edge,);
                continue;
            }

            let layer = mem::replace(&mut self.current, vec![edge],);
            self.sources = layer.iter().map(|traversed| traversed.child,).collect();
            return Some(layer,);
        }

        self.finished = true;
        Some(mem::take(&mut self.current,),)
    }
}
