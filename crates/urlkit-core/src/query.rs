//! Query string codec: percent-encoded query text to a key/value map and back.
//!
//! Decoding scans left to right for `=` boundaries and `&` separators. Only
//! values are percent-decoded; keys are taken verbatim. When a key repeats,
//! the first occurrence wins.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

use crate::encoding::{decode, encode};

/// Decoded key/value view of a query string. Ordered by key.
pub type QueryMap = BTreeMap<String, String>;

/// Query codec settings (the `[query]` section of config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryCodec {
    /// Strip one leading `?` before scanning.
    pub strip_leading_question_mark: bool,
    /// Percent-encode values when building a query string. When false,
    /// values are emitted as given.
    pub encode_values: bool,
}

impl Default for QueryCodec {
    fn default() -> Self {
        Self {
            strip_leading_question_mark: true,
            encode_values: true,
        }
    }
}

impl QueryCodec {
    /// Decode `raw` into a map.
    ///
    /// `"a=1&b=2"` gives `{a: "1", b: "2"}`, `"flag"` gives `{flag: ""}`.
    /// A trailing empty segment (`"a=1&"`) adds nothing.
    pub fn decode(&self, raw: &str) -> QueryMap {
        let mut rest = if self.strip_leading_question_mark {
            raw.strip_prefix('?').unwrap_or(raw)
        } else {
            raw
        };
        let mut query = QueryMap::new();

        while !rest.is_empty() {
            let Some(eq) = rest.find('=') else {
                query.entry(rest.to_string()).or_default();
                break;
            };
            let key = &rest[..eq];
            let tail = &rest[eq + 1..];
            match tail.find('&') {
                None => {
                    query
                        .entry(key.to_string())
                        .or_insert_with(|| decode(tail));
                    break;
                }
                Some(amp) => {
                    query
                        .entry(key.to_string())
                        .or_insert_with(|| decode(&tail[..amp]));
                    rest = &tail[amp + 1..];
                }
            }
        }

        trace!(raw, pairs = query.len(), "decoded query");
        query
    }

    /// Build a query string from `query`: `key=value` pairs joined by `&`, in key order.
    pub fn encode(&self, query: &QueryMap) -> String {
        query
            .iter()
            .map(|(key, value)| {
                if self.encode_values {
                    format!("{key}={}", encode(value))
                } else {
                    format!("{key}={value}")
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Decode `raw` with the default codec.
pub fn decode_query(raw: &str) -> QueryMap {
    QueryCodec::default().decode(raw)
}

/// Encode `query` with the default codec.
pub fn encode_query(query: &QueryMap) -> String {
    QueryCodec::default().encode(query)
}
