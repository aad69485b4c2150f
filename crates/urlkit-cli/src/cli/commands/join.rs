//! `urlkit join <url> <part>...` – merge relative references onto a URL.

use anyhow::{Context, Result};
use urlkit_core::config::UrlkitConfig;
use urlkit_core::{QueryCodec, Url};

pub(crate) fn join(url: &str, parts: &[String], codec: &QueryCodec) -> Result<Url> {
    let mut url = Url::parse(url)?;
    for part in parts {
        url.append_in_place_with(codec, part)
            .with_context(|| format!("merge '{part}'"))?;
    }
    Ok(url)
}

pub fn run_join(cfg: &UrlkitConfig, url: &str, parts: &[String]) -> Result<()> {
    let merged = join(url, parts, &cfg.query)?;
    tracing::info!("join {} + {:?}", url, parts);
    println!("{}", merged.to_string().unwrap_or_default());
    Ok(())
}
