use anyhow::Context;
use serde_json::Value;

pub const TRACK_RECORD_PATH: [&str; 3] = ["loaderData", "track_page", "audioWithLyricsOption"];

/// Walk `path` through nested objects. `None` on the first absent key.
pub fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.get(key))
}

/// Like [`lookup`], but reports which key was missing and where.
pub fn require<'a>(root: &'a Value, path: &[&str]) -> anyhow::Result<&'a Value> {
    let mut node = root;
    for (depth, key) in path.iter().enumerate() {
        node = node.get(key).with_context(|| {
            let at = if depth == 0 {
                "document root".to_string()
            } else {
                path[..depth].join(".")
            };
            format!("missing key `{key}` at {at}")
        })?;
    }
    Ok(node)
}
