//! `urlkit set <url> --host ...` – edit components.

use anyhow::Result;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::{QueryCodec, QueryMap, Url};

use crate::cli::SetArgs;

pub(crate) fn apply_edits(url: &mut Url, edits: &SetArgs, codec: &QueryCodec) -> Result<()> {
    if let Some(scheme) = &edits.scheme {
        url.set_scheme(scheme)?;
    }
    if let Some(user) = &edits.user {
        url.set_user(user)?;
    }
    if let Some(password) = &edits.password {
        url.set_password(password)?;
    }
    if let Some(options) = &edits.options {
        url.set_options(options)?;
    }
    if let Some(host) = &edits.host {
        url.set_host(host)?;
    }
    if let Some(port) = edits.port {
        url.set_port(port)?;
    }
    if let Some(path) = &edits.path {
        url.set_path(path)?;
    }
    if !edits.query.is_empty() {
        let mut query = QueryMap::new();
        for (key, value) in &edits.query {
            query.entry(key.clone()).or_insert_with(|| value.clone());
        }
        url.set_query_with(codec, &query)?;
    }
    for (key, value) in &edits.add_query {
        url.add_query(key, value)?;
    }
    if let Some(fragment) = &edits.fragment {
        url.set_fragment(fragment)?;
    }
    Ok(())
}

pub fn run_set(cfg: &UrlkitConfig, url: &str, edits: &SetArgs) -> Result<()> {
    let mut url = Url::parse(url)?;
    apply_edits(&mut url, edits, &cfg.query)?;
    println!("{}", url.to_string().unwrap_or_default());
    Ok(())
}
