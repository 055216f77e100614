//! Shallow and deep structural merging.
//!
//! Shallow merging replaces top-level keys. Deep merging unions keys
//! recursively:
//!
//! | target | source | result |
//! |--------|--------|--------|
//! | mapping | mapping | recursive merge |
//! | array | array | deduplicated concatenation |
//! | anything else | anything | source |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::I18nError;

/// How two trees are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Top-level key replacement.
    #[default]
    Shallow,
    /// Recursive key union.
    Deep,
}

impl MergeStrategy {
    /// Lowercase name used in configuration documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shallow => "shallow",
            Self::Deep => "deep",
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeStrategy {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shallow" => Ok(Self::Shallow),
            "deep" => Ok(Self::Deep),
            other => Err(I18nError::config(format!(
                "invalid merge strategy: {other}. Must be 'shallow' or 'deep'"
            ))),
        }
    }
}

/// Values that can absorb another value of the same shape.
pub trait Merge: Sized {
    /// Replace top-level entries of `self` with those of `source`.
    fn merge_shallow(self, source: Self) -> Self;

    /// Recursively union `source` into `self`.
    fn merge_deep(self, source: Self) -> Self;

    /// Merge using `strategy`.
    fn merge_with(self, source: Self, strategy: MergeStrategy) -> Self {
        match strategy {
            MergeStrategy::Shallow => self.merge_shallow(source),
            MergeStrategy::Deep => self.merge_deep(source),
        }
    }
}

/// Merge `source` into `target` under `strategy`.
pub fn merge<T: Merge>(target: T, source: T, strategy: MergeStrategy) -> T {
    target.merge_with(source, strategy)
}

/// Concatenate two lists, keeping the first occurrence of every element.
pub fn union_dedup<T: PartialEq>(target: Vec<T>, source: Vec<T>) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(target.len() + source.len());
    for item in target.into_iter().chain(source) {
        if !result.contains(&item) {
            result.push(item);
        }
    }
    result
}

impl Merge for Value {
    fn merge_shallow(self, source: Self) -> Self {
        match (self, source) {
            (Value::Object(mut target), Value::Object(source)) => {
                for (key, value) in source {
                    target.insert(key, value);
                }
                Value::Object(target)
            }
            (_, source) => source,
        }
    }

    fn merge_deep(self, source: Self) -> Self {
        match (self, source) {
            (Value::Object(mut target), Value::Object(source)) => {
                for (key, value) in source {
                    match target.get_mut(&key) {
                        Some(slot) => {
                            let existing = std::mem::take(slot);
                            *slot = existing.merge_deep(value);
                        }
                        None => {
                            target.insert(key, value);
                        }
                    }
                }
                Value::Object(target)
            }
            (Value::Array(target), Value::Array(source)) => {
                Value::Array(union_dedup(target, source))
            }
            (_, source) => source,
        }
    }
}
