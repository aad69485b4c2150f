pub mod component;
pub mod config;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod query;
pub mod url;

pub use component::Component;
pub use error::{Error, ErrorKind, Result, Status};
pub use query::{decode_query, encode_query, QueryCodec, QueryMap};
pub use self::url::Url;
