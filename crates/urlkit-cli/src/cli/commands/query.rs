//! `urlkit query decode|encode` – the query string codec.

use anyhow::Result;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::QueryMap;

pub(crate) fn render_pairs(query: &QueryMap) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{k}={v}\n"))
        .collect()
}

pub fn run_query_decode(cfg: &UrlkitConfig, raw: &str, json: bool) -> Result<()> {
    let query = cfg.query.decode(raw);
    if json {
        println!("{}", serde_json::to_string_pretty(&query)?);
    } else {
        print!("{}", render_pairs(&query));
    }
    Ok(())
}

/// Later duplicates of a key are ignored, as when decoding.
pub fn run_query_encode(cfg: &UrlkitConfig, pairs: Vec<(String, String)>) -> Result<()> {
    let mut query = QueryMap::new();
    for (key, value) in pairs {
        query.entry(key).or_insert(value);
    }
    println!("{}", cfg.query.encode(&query));
    Ok(())
}
