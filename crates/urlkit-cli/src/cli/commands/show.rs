//! `urlkit show <url>` – print every component.

use anyhow::Result;
use serde_json::{Map, Value};
use urlkit_core::{Component, Url};

/// `value`, or `missing` when the component is absent.
fn or_missing<'a>(value: &'a Option<String>, missing: &'a str) -> &'a str {
    value.as_deref().unwrap_or(missing)
}

pub(crate) fn render_table(url: &Url, missing: &str) -> String {
    let mut out = String::new();
    for part in Component::ALL {
        let value = url.component(part);
        out.push_str(&format!("{:<9} {}\n", part, or_missing(&value, missing)));
    }
    let full = url.to_string();
    out.push_str(&format!("{:<9} {}\n", "url", or_missing(&full, missing)));
    out
}

pub(crate) fn render_json(url: &Url) -> Value {
    let mut obj = Map::new();
    for part in Component::ALL {
        let value = url.component(part).map_or(Value::Null, Value::String);
        obj.insert(part.to_string(), value);
    }
    let query = url
        .query()
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect::<Map<_, _>>();
    obj.insert("query_map".to_string(), Value::Object(query));
    obj.insert(
        "url".to_string(),
        url.to_string().map_or(Value::Null, Value::String),
    );
    Value::Object(obj)
}

pub fn run_show(url: &str, json: bool, missing: &str) -> Result<()> {
    let url = Url::parse(url)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&render_json(&url))?);
    } else {
        print!("{}", render_table(&url, missing));
    }
    Ok(())
}
