//! Percent-encoding collaborators used by the query codec.
//!
//! `encode` escapes every byte outside the RFC 3986 unreserved set;
//! `decode` reverses any `%XX` sequence and leaves a stray `%` as is.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes that are escaped: everything except `A-Z a-z 0-9 - . _ ~`.
const ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `input` (UTF-8 bytes outside the unreserved set become `%XX`).
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, ESCAPED).to_string()
}

/// Percent-decode `input`. Invalid UTF-8 in the decoded bytes is replaced lossily.
pub fn decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
