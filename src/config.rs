// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration documents describing how a graph should be heated.
//!
//! The types in this module mirror the YAML documents consumed by the CLI.
//! Every value is optional so that command-line flags can override a file
//! field by field; [`HeatConfig::resolve`] applies defaults and validates the
//! result.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    document,
    error::{self, Error},
    increments::Increments,
    render::Palette,
    thermograph::{DEFAULT_KEY, HeatOptions},
    traversal::Orientation,
};

/// Raw heat configuration before normalization.
///
/// # Examples
///
/// ```
/// use heatmapx::{HeatConfig, Increments};
///
/// let yaml = r#"
/// sources: [a, b]
/// max-depth: 2
/// increments: [3, 2, 1]
/// "#;
/// let config: HeatConfig = serde_yaml::from_str(yaml,).expect("valid configuration",);
/// let job = config.resolve().expect("valid job",);
/// assert_eq!(job.sources, ["a", "b"]);
/// assert_eq!(job.options.max_depth, Some(2));
/// assert_eq!(job.options.increments, Increments::Sequence(vec![3.0, 2.0, 1.0]));
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq,)]
#[serde(deny_unknown_fields)]
pub struct HeatConfig
{
    /// Identifiers of the heat source nodes.
    #[serde(default, alias = "source_nodes", alias = "source-nodes", alias = "sourceNodes")]
    pub sources: Vec<String,>,

    /// Optional number of breadth-first layers to heat.
    #[serde(default, alias = "max-depth", alias = "maxDepth", alias = "depth")]
    pub max_depth: Option<usize,>,

    /// Optional per-layer increments, either a number or a list.
    #[serde(default)]
    pub increments: Option<Increments,>,

    /// Optional attribute scaling increments.
    #[serde(default)]
    pub weight: Option<String,>,

    /// Optional attribute receiving temperatures.
    #[serde(default)]
    pub key: Option<String,>,

    /// Optional traversal direction for directed graphs.
    #[serde(default)]
    pub orientation: Option<Orientation,>,

    /// Optional color palette used when rendering.
    #[serde(default)]
    pub palette: Option<Palette,>,
}

/// Normalized heating job derived from a [`HeatConfig`].
#[derive(Debug, Clone, PartialEq,)]
pub struct HeatJob
{
    /// Trimmed, deduplicated source identifiers in their original order.
    pub sources: Vec<String,>,
    /// Validated heating options.
    pub options: HeatOptions,
    /// Palette used by the renderer.
    pub palette: Palette,
}

impl HeatConfig
{
    /// Returns a configuration where every value present in `overrides`
    /// replaces the corresponding value of `self`. A non-empty source list in
    /// `overrides` replaces the whole list.
    pub fn overridden_by(self, overrides: HeatConfig,) -> HeatConfig
    {
        HeatConfig {
            sources:     if overrides.sources.is_empty() {
                self.sources
            } else {
                overrides.sources
            },
            max_depth:   overrides.max_depth.or(self.max_depth,),
            increments:  overrides.increments.or(self.increments,),
            weight:      overrides.weight.or(self.weight,),
            key:         overrides.key.or(self.key,),
            orientation: overrides.orientation.or(self.orientation,),
            palette:     overrides.palette.or(self.palette,),
        }
    }

    /// Applies defaults and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when a source is
    /// blank, a blank key or weight override is supplied, or the resulting
    /// [`HeatOptions`] fail validation.
    pub fn resolve(&self,) -> Result<HeatJob, Error,>
    {
        let sources = normalize_sources(&self.sources,)?;

        let key = match self.key.as_deref() {
            Some(custom,) => normalize_attribute(custom, "key",)?,
            None => DEFAULT_KEY.to_owned(),
        };

        let weight = self
            .weight
            .as_deref()
            .map(|value| normalize_attribute(value, "weight",),)
            .transpose()?;

        let options = HeatOptions {
            max_depth: self.max_depth,
            increments: self.increments.clone().unwrap_or_default(),
            weight,
            key,
            orientation: self.orientation.unwrap_or_default(),
        };
        options.validate()?;

        Ok(HeatJob {
            sources,
            options,
            palette: self.palette.unwrap_or_default(),
        },)
    }
}

/// Loads a heat configuration from the YAML file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// [`Error::Parse`](Error::Parse) when the YAML cannot be decoded.
pub fn load_config(path: &Path,) -> Result<HeatConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses a heat configuration from a YAML string. Blank documents yield the
/// default configuration.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded.
pub fn parse_config(contents: &str,) -> Result<HeatConfig, Error,>
{
    if contents.trim().is_empty() {
        return Ok(HeatConfig::default(),);
    }
    Ok(serde_yaml::from_str(contents,)?,)
}

/// Validates source identifiers, dropping repeated entries.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when an identifier is
/// blank.
fn normalize_sources(sources: &[String],) -> Result<Vec<String,>, Error,>
{
    let mut seen = HashSet::with_capacity(sources.len(),);
    let mut normalized = Vec::with_capacity(sources.len(),);

    for (position, source,) in sources.iter().enumerate() {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(Error::validation(format!("sources[{position}] cannot be empty"),),);
        }
        if seen.insert(trimmed,) {
            normalized.push(trimmed.to_owned(),);
        }
    }

    Ok(normalized,)
}

/// Validates attribute names such as the key or the weight.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when the value is empty,
/// contains whitespace, or names a node-link record field.
fn normalize_attribute(input: &str, field: &str,) -> Result<String, Error,>
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty"),),);
    }
    if trimmed.chars().any(char::is_whitespace,) {
        return Err(Error::validation(format!("{field} cannot contain whitespace"),),);
    }
    document::ensure_unreserved(trimmed, field,)?;
    Ok(trimmed.to_owned(),)
}
