//! Locates the `_ROUTER_DATA = {...};` hydration payload in a share page.

const MARKER: &str = "_ROUTER_DATA";

/// Return the `{ ... }` object assigned to `_ROUTER_DATA`, braces included.
///
/// Marker occurrences that are not followed by `= {` are skipped. `None` when
/// no assignment exists or its object never closes.
pub fn extract_router_data(html: &str) -> Option<&str> {
    for (idx, _) in html.match_indices(MARKER) {
        let rest = &html[idx + MARKER.len()..];
        let Some(rest) = rest.trim_start().strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        if !rest.starts_with('{') {
            continue;
        }
        let start = html.len() - rest.len();
        return matching_brace(rest).map(|end| &html[start..start + end + 1]);
    }
    None
}

/// Byte offset of the `}` closing the object that opens at `s[0]`.
fn matching_brace(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
