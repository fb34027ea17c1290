// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Node-link documents describing graphs.
//!
//! The document format is shared by graph inputs and temperature graph
//! outputs. Nodes and links carry their numeric attributes inline:
//!
//! ```yaml
//! directed: false
//! multigraph: false
//! nodes:
//!   - id: a
//!     weight: 2
//! links:
//!   - source: a
//!     target: b
//!     weight: 1.5
//! ```
//!
//! JSON documents are accepted as well because they parse as YAML.

use std::{fs, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::{self, Error},
    graph::{Attributes, Graph, GraphKind},
};

/// Serializable node-link view of a [`Graph`].
///
/// # Examples
///
/// ```
/// use heatmapx::GraphDocument;
///
/// let yaml = r#"
/// nodes:
///   - id: a
/// links:
///   - source: a
///     target: b
///     weight: 2
/// "#;
/// let document: GraphDocument = serde_yaml::from_str(yaml,).expect("valid document",);
/// let graph = document.into_graph().expect("valid graph",);
/// assert_eq!(graph.node_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize,)]
pub struct GraphDocument
{
    /// Whether links are directed.
    #[serde(default)]
    pub directed:   bool,
    /// Whether parallel links are allowed.
    #[serde(default)]
    pub multigraph: bool,
    /// Nodes in insertion order.
    #[serde(default)]
    pub nodes:      Vec<NodeRecord,>,
    /// Links in insertion order.
    #[serde(default, alias = "edges")]
    pub links:      Vec<LinkRecord,>,
}

/// Node entry of a [`GraphDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize,)]
pub struct NodeRecord
{
    /// Node identifier. Numeric identifiers are read as their decimal text.
    #[serde(deserialize_with = "deserialize_identifier")]
    pub id:         String,
    /// Remaining numeric attributes.
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// Link entry of a [`GraphDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize,)]
pub struct LinkRecord
{
    /// Identifier of the endpoint the link starts at.
    #[serde(deserialize_with = "deserialize_identifier")]
    pub source:     String,
    /// Identifier of the endpoint the link ends at.
    #[serde(deserialize_with = "deserialize_identifier")]
    pub target:     String,
    /// Parallel link key; only emitted for multigraphs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key:        Option<usize,>,
    /// Remaining numeric attributes.
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl GraphDocument
{
    /// Captures the structure and attributes of `graph`.
    pub fn from_graph(graph: &Graph,) -> Self
    {
        let kind = graph.kind();
        let node_id = |index| graph.node(index,).map(|node| node.id.clone(),).unwrap_or_default();

        let nodes = graph
            .nodes()
            .map(|(_, node,)| NodeRecord {
                id:         node.id.clone(),
                attributes: node.attributes.clone(),
            },)
            .collect();

        let links = graph
            .edges()
            .map(|(_, edge,)| LinkRecord {
                source:     node_id(edge.source,),
                target:     node_id(edge.target,),
                key:        kind.multigraph.then_some(edge.key,),
                attributes: edge.attributes.clone(),
            },)
            .collect();

        Self {
            directed: kind.directed,
            multigraph: kind.multigraph,
            nodes,
            links,
        }
    }

    /// Structural flavour described by the document.
    pub fn kind(&self,) -> GraphKind
    {
        GraphKind {
            directed: self.directed, multigraph: self.multigraph,
        }
    }

    /// Builds the described graph.
    ///
    /// Links may reference nodes that are not listed; such endpoints are
    /// created without attributes. Repeated nodes merge their attributes. In a
    /// multigraph a link keeps its explicit `key`, and a link whose `key` names
    /// an existing parallel link updates that link; links without a key get
    /// the next free one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when a node id or a
    /// link endpoint is blank.
    pub fn into_graph(self,) -> Result<Graph, Error,>
    {
        let mut graph = Graph::with_capacity(self.kind(), self.nodes.len(), self.links.len(),);

        for (position, node,) in self.nodes.into_iter().enumerate() {
            let id = require_identifier(&node.id, || format!("nodes[{position}].id"),)?;
            graph.add_node(id, node.attributes,);
        }

        for (position, link,) in self.links.into_iter().enumerate() {
            let source = require_identifier(&link.source, || format!("links[{position}].source"),)?;
            let target = require_identifier(&link.target, || format!("links[{position}].target"),)?;

            let source = graph.add_node(source, Attributes::new(),);
            let target = graph.add_node(target, Attributes::new(),);
            match link.key {
                Some(key,) => graph.connect_keyed(source, target, key, link.attributes,),
                None => graph.connect(source, target, link.attributes,),
            };
        }

        Ok(graph,)
    }
}

/// Parses a graph from a YAML or JSON node-link document.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the document cannot be
/// decoded and [`Error::Validation`](Error::Validation) when identifiers are
/// blank.
pub fn parse_graph(contents: &str,) -> Result<Graph, Error,>
{
    let document: GraphDocument = serde_yaml::from_str(contents,)?;
    document.into_graph()
}

/// Loads a graph from the node-link document stored at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// propagates the errors of [`parse_graph`].
pub fn load_graph(path: &Path,) -> Result<Graph, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_graph(&contents,)
}

/// Fields a node or link record uses for its own data. Attributes with these
/// names would collide with them once flattened into the record.
pub(crate) const RESERVED_FIELDS: [&str; 4] = ["id", "source", "target", "key",];

/// Rejects attribute names that collide with [`RESERVED_FIELDS`].
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) naming `field` when `name`
/// is reserved.
pub(crate) fn ensure_unreserved(name: &str, field: &str,) -> Result<(), Error,>
{
    if RESERVED_FIELDS.contains(&name,) {
        return Err(Error::validation(format!(
            "{field} '{name}' is reserved for node-link records"
        ),),);
    }
    Ok((),)
}

fn require_identifier<F,>(value: &str, field: F,) -> Result<&str, Error,>
where
    F: FnOnce() -> String,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{} cannot be empty", field()),),);
    }
    Ok(trimmed,)
}

#[derive(Deserialize,)]
#[serde(untagged)]
enum RawIdentifier
{
    Text(String,),
    Signed(i64,),
    Unsigned(u64,),
}

fn deserialize_identifier<'de, D,>(deserializer: D,) -> Result<String, D::Error,>
where
    D: Deserializer<'de,>,
{
    Ok(match RawIdentifier::deserialize(deserializer,)? {
        RawIdentifier::Text(text,) => text,
        RawIdentifier::Signed(value,) => value.to_string(),
        RawIdentifier::Unsigned(value,) => value.to_string(),
    },)
}
