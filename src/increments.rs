// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Heat increments applied per breadth-first layer.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Amount of heat added at each breadth-first layer away from a source.
///
/// Deserializes from either a single number or a list of numbers:
///
/// ```
/// use heatmapx::Increments;
///
/// let constant: Increments = serde_yaml::from_str("2.5",).expect("constant",);
/// assert_eq!(constant, Increments::Constant(2.5));
///
/// let layered: Increments = serde_yaml::from_str("[3, 2, 1]",).expect("sequence",);
/// assert_eq!(layered, Increments::Sequence(vec![3.0, 2.0, 1.0]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize,)]
#[serde(untagged)]
pub enum Increments
{
    /// The same increment for every layer reachable from a source.
    Constant(f64,),
    /// Element `n` applies to layer `n`; later layers receive nothing.
    Sequence(Vec<f64,>,),
}

impl Default for Increments
{
    fn default() -> Self
    {
        Self::Constant(1.0,)
    }
}

impl From<f64,> for Increments
{
    fn from(value: f64,) -> Self
    {
        Self::Constant(value,)
    }
}

impl From<Vec<f64,>,> for Increments
{
    fn from(values: Vec<f64,>,) -> Self
    {
        Self::Sequence(values,)
    }
}

impl Increments
{
    /// Returns `(increment, next_increment)` for every layer.
    ///
    /// The pair for layer `n` holds the increment of layer `n` and the one of
    /// layer `n + 1`, the latter being applied to nodes first reached in layer
    /// `n`. A sequence pairs its last element with `0`. A constant yields an
    /// unbounded iterator.
    ///
    /// ```
    /// use heatmapx::Increments;
    ///
    /// let pairs: Vec<_,> = Increments::from(vec![3.0, 2.0],).pairs().collect();
    /// assert_eq!(pairs, [(3.0, 2.0), (2.0, 0.0)]);
    /// ```
    pub fn pairs(&self,) -> LayerPairs<'_,>
    {
        LayerPairs {
            increments: self, layer: 0,
        }
    }

    /// Number of layers that can receive heat, `None` when unbounded.
    pub fn layer_limit(&self,) -> Option<usize,>
    {
        match self {
            Self::Constant(_,) => None,
            Self::Sequence(values,) => Some(values.len(),),
        }
    }

    /// Rejects increments that would poison temperatures with NaN.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when any value is NaN.
    pub fn validate(&self,) -> Result<(), Error,>
    {
        let has_nan = match self {
            Self::Constant(value,) => value.is_nan(),
            Self::Sequence(values,) => values.iter().any(|value| value.is_nan(),),
        };

        if has_nan {
            return Err(Error::validation("increments must not contain NaN",),);
        }
        Ok((),)
    }
}

/// Iterator returned by [`Increments::pairs`].
#[derive(Debug, Clone,)]
pub struct LayerPairs<'a,>
{
    increments: &'a Increments,
    layer:      usize,
}

impl Iterator for LayerPairs<'_,>
{
    type Item = (f64, f64,);

    fn next(&mut self,) -> Option<Self::Item,>
    {
        let pair = match self.increments {
            Increments::Constant(value,) => (*value, *value,),
            Increments::Sequence(values,) => {
                let current = *values.get(self.layer,)?;
                let next = values.get(self.layer + 1,).copied().unwrap_or(0.0,);
                (current, next,)
            }
        };
        self.layer += 1;
        Some(pair,)
    }
}
