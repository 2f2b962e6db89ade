use serde_json::{Map, Value};

/// Keep only the allow-listed keys of `record`, in allow-list order.
///
/// Keys missing from the record are dropped silently. Values are cloned as-is.
pub fn filter_fields<S: AsRef<str>>(
    record: &Map<String, Value>,
    fields: &[S],
) -> Map<String, Value> {
    let mut out = Map::new();
    for field in fields {
        let field = field.as_ref();
        if out.contains_key(field) {
            continue;
        }
        if let Some(v) = record.get(field) {
            out.insert(field.to_string(), v.clone());
        }
    }
    out
}
