//! Merging a relative `path?query` reference onto an existing URL.

use tracing::debug;

use super::Url;
use crate::error::Result;
use crate::query::QueryCodec;

impl Url {
    /// Return a copy of `self` with `part` merged in. See [`Url::append_in_place`].
    pub fn append(&self, part: &str) -> Result<Url> {
        let mut merged = self.clone();
        merged.append_in_place(part)?;
        Ok(merged)
    }

    /// Merge a relative reference `path?query` onto this URL.
    ///
    /// The path is joined onto the current path with exactly one `/` between
    /// them (`/a/` + `c` is `/a/c`). Each pair of the query is appended with
    /// [`Url::add_query`], so existing query pairs are kept as they are.
    pub fn append_in_place(&mut self, part: &str) -> Result<&mut Self> {
        self.append_in_place_with(&QueryCodec::default(), part)
    }

    pub fn append_in_place_with(&mut self, codec: &QueryCodec, part: &str) -> Result<&mut Self> {
        let (new_path, new_query) = part.split_once('?').unwrap_or((part, ""));

        let mut path = self.path().unwrap_or_else(|| "/".to_string());
        if path.ends_with('/') {
            path.pop();
        }
        if !new_path.is_empty() && !new_path.starts_with('/') {
            path.push('/');
        }
        path.push_str(new_path);
        self.set_path(&path)?;

        for (key, value) in codec.decode(new_query) {
            self.add_query(&key, &value)?;
        }

        debug!(part, path = %path, "merged relative reference");
        Ok(self)
    }
}
