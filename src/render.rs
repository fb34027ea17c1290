// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Heatmap rendering.
//!
//! Temperature graphs are rendered as Graphviz DOT documents where node fill
//! colors and edge stroke colors are picked from a [`Palette`]. The output is
//! deterministic so artifacts can be committed and diffed.

use std::{
    borrow::Cow,
    fmt::Write as _,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf}
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{self, Error},
    graph::Graph,
    thermograph::temperature_range
};

/// Color ramps available to the renderer, ordered from cold to hot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    /// Diverging blue to red ramp.
    #[default]
    Thermal,
    /// White to black ramp.
    Grayscale,
    /// Perceptually uniform purple to yellow ramp.
    Viridis
}

impl Palette {
    fn stops(self) -> &'static [&'static str] {
        match self {
            Self::Thermal => &[
                "#313695", "#4575b4", "#74add1", "#abd9e9", "#fee090", "#fdae61", "#f46d43",
                "#d73027", "#a50026"
            ],
            Self::Grayscale => &["#ffffff", "#000000"],
            Self::Viridis => &["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"]
        }
    }

    /// Returns the hex color at position `t` of the ramp.
    ///
    /// `t` is clamped to `0.0..=1.0`; NaN maps to the coldest color.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatmapx::Palette;
    ///
    /// assert_eq!(Palette::Grayscale.color(0.0), "#ffffff");
    /// assert_eq!(Palette::Grayscale.color(0.5), "#808080");
    /// assert_eq!(Palette::Grayscale.color(7.0), "#000000");
    /// ```
    pub fn color(self, t: f64) -> String {
        let stops = self.stops();
        let position = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = position * (stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(stops.len() - 1);
        let upper = (lower + 1).min(stops.len() - 1);
        let fraction = scaled - lower as f64;

        let from = parse_hex(stops[lower]);
        let to = parse_hex(stops[upper]);
        let mix = |a: u8, b: u8| {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * fraction).round() as u8
        };

        format!(
            "#{:02x}{:02x}{:02x}",
            mix(from[0], to[0]),
            mix(from[1], to[1]),
            mix(from[2], to[2])
        )
    }
}

/// Renders the temperatures stored under `key` as a Graphviz DOT document.
///
/// Temperatures are normalized to the range of all node and edge values so
/// the coldest element takes the first palette color and the hottest the
/// last. Elements without a temperature are drawn in the coldest color.
///
/// # Examples
///
/// ```
/// use heatmapx::{Attributes, Graph, GraphKind, HeatOptions, Palette, temperature_graph, to_dot};
///
/// # fn main() -> Result<(), heatmapx::Error> {
/// let mut graph = Graph::new(GraphKind::undirected(),);
/// graph.add_edge("a", "b", Attributes::new(),);
/// let heated = temperature_graph(&graph, ["a"], &HeatOptions::default(),)?;
///
/// let dot = to_dot(&heated, "heat", Palette::Thermal,);
/// assert!(dot.starts_with("graph heatmap {"));
/// assert!(dot.contains("\"a\" -- \"b\""));
/// # Ok(())
/// # }
/// ```
pub fn to_dot(graph: &Graph, key: &str, palette: Palette) -> String {
    let range = temperature_range(graph, key);
    let normalize = |value: Option<f64>| match (value, range) {
        (Some(value), Some((low, high))) if high > low => (value - low) / (high - low),
        _ => 0.0
    };

    let (header, connector) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut buffer = String::with_capacity(64 + graph.node_count() * 64 + graph.edge_count() * 64);
    let _ = writeln!(buffer, "{header} heatmap {{");
    buffer.push_str("  node [style=filled, fontname=\"Helvetica\"];\n");
    buffer.push_str("  edge [fontname=\"Helvetica\"];\n");

    for (_, node) in graph.nodes() {
        let value = node.attributes.get(key).copied();
        let id = escape_dot(&node.id);
        let _ = writeln!(
            buffer,
            "  \"{id}\" [label=\"{}\", fillcolor=\"{}\"];",
            label(&id, value),
            palette.color(normalize(value))
        );
    }

    for (_, edge) in graph.edges() {
        let value = edge.attributes.get(key).copied();
        let level = normalize(value);
        let source = graph
            .node(edge.source)
            .map(|node| escape_dot(&node.id))
            .unwrap_or_default();
        let target = graph
            .node(edge.target)
            .map(|node| escape_dot(&node.id))
            .unwrap_or_default();
        let text = value.map(format_temperature).unwrap_or_default();
        let _ = writeln!(
            buffer,
            "  \"{source}\" {connector} \"{target}\" [color=\"{}\", penwidth={:.2}, label=\"{text}\"];",
            palette.color(level),
            1.0 + 3.0 * level
        );
    }

    buffer.push_str("}\n");
    buffer
}

/// Writes the DOT rendering of `graph` to `path`, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns [`Error::RenderIo`](Error::RenderIo) when the directory or the
/// file cannot be written.
pub fn write_dot(path: &Path, graph: &Graph, key: &str, palette: Palette) -> Result<PathBuf, Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| error::render_io_error(parent, source))?;
    }

    let contents = to_dot(graph, key, palette);
    let file = File::create(path).map_err(|source| error::render_io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|source| error::render_io_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::render_io_error(path, source))?;

    Ok(path.to_path_buf())
}

fn label(id: &str, value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{id}\\n{}", format_temperature(value)),
        None => id.to_owned()
    }
}

fn format_temperature(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}

fn escape_dot(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|character| matches!(character, '"' | '\\' | '\n'))
    {
        let mut escaped = String::with_capacity(value.len() + 2);
        for character in value.chars() {
            match character {
                '"' => escaped.push_str("\\\""),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                other => escaped.push(other)
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}

fn parse_hex(color: &str) -> [u8; 3] {
    let channel = |offset: usize| {
        color
            .get(offset..offset + 2)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .unwrap_or(0)
    };
    [channel(1), channel(3), channel(5)]
}
