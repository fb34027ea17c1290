//! Heatmaps over graphs.
//!
//! The library computes temperatures radiating breadth-first from heat source
//! nodes, stores them as node and edge attributes of a new graph, and renders
//! the result as a colored Graphviz document. Graphs and heating
//! configurations are exchanged as YAML or JSON documents so the CLI can be
//! driven from automation.
//!
//! ```
//! use heatmapx::{HeatOptions, parse_graph, temperature_graph};
//!
//! # fn main() -> Result<(), heatmapx::Error> {
//! let graph = parse_graph("links:\n  - {source: a, target: b}\n  - {source: b, target: c}\n",)?;
//! let heated = temperature_graph(&graph, ["a"], &HeatOptions::default().increments(vec![2.0, 1.0],),)?;
//!
//! let b = heated.node_index("b",).expect("node b",);
//! assert_eq!(heated.node_attribute(b, "heat"), Some(1.0));
//! # Ok(())
//! # }
//! ```

mod config;
mod document;
mod error;
mod graph;
mod increments;
mod render;
mod thermograph;
mod traversal;

pub use config::{HeatConfig, HeatJob, load_config, parse_config};
pub use document::{GraphDocument, LinkRecord, NodeRecord, load_graph, parse_graph};
pub use error::{Error, io_error, render_io_error};
pub use graph::{Attributes, Edge, EdgeIndex, Graph, GraphKind, Node, NodeIndex};
pub use increments::{Increments, LayerPairs};
pub use render::{Palette, to_dot, write_dot};
pub use thermograph::{DEFAULT_KEY, HeatOptions, temperature_graph, temperature_range};
pub use traversal::{DepthGroups, EdgeBfs, Orientation, TraversalEdge};

/// Version of the crate as declared in the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
