//! Query-string decomposition.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// Parses a raw query string (without the leading `?`) into a key/value map.
///
/// Each `&`-separated piece is split on every `=`: the first segment is the
/// key and the second the value, so `a=b=c` maps `a` to `b`. A key without
/// `=` maps to the empty string. Both are percent-decoded (`+` stays `+`).
/// On duplicate keys the last occurrence wins.
pub fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    let Some(q) = query.filter(|q| !q.is_empty()) else {
        return HashMap::new();
    };
    q.split('&')
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let mut segments = piece.split('=');
            let key = segments.next().unwrap_or_default();
            let value = segments.next().unwrap_or_default();
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
