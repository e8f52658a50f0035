//! Structural diff over JSON-like values.
//!
//! Compares two [`serde_json::Value`] trees and produces a flat ordered
//! list of typed changes with dotted/bracketed paths (`a.b[2].c`). Used
//! by version comparison to render what changed between two snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of change a [`DiffEntry`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Present only on the new side.
    Added,
    /// Present only on the old side.
    Removed,
    /// Present on both sides with different values.
    Modified,
    /// Equal on both sides. Never emitted; kept for wire compatibility.
    Unchanged,
}

/// A single difference between two value trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    /// Change kind
    #[serde(rename = "type")]
    pub kind: DiffKind,
    /// Dot-separated path, with `[i]` suffixes for array elements
    pub path: String,
    /// Old value, for removed/modified entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    /// New value, for added/modified entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl DiffEntry {
    fn added(path: String, new_value: Value) -> Self {
        Self {
            kind: DiffKind::Added,
            path,
            old_value: None,
            new_value: Some(new_value),
        }
    }

    fn removed(path: String, old_value: Value) -> Self {
        Self {
            kind: DiffKind::Removed,
            path,
            old_value: Some(old_value),
            new_value: None,
        }
    }

    fn modified(path: String, old_value: Value, new_value: Value) -> Self {
        Self {
            kind: DiffKind::Modified,
            path,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }
}

/// Compares two values and returns the ordered list of differences.
///
/// Recursive, depth-first, pre-order. Null stands in for an absent
/// value: a null on exactly one side emits a single added/removed entry
/// without descending into the non-null side. A key holding an array in
/// one snapshot and an object in the other gets no special handling;
/// the mismatched side is treated as empty and the result is
/// path-divergent added/removed noise, which is accepted.
#[must_use]
pub fn diff(old: &Value, new: &Value) -> Vec<DiffEntry> {
    let mut entries = Vec::new();
    diff_at(old, new, "", &mut entries);
    entries
}

fn diff_at(old: &Value, new: &Value, path: &str, out: &mut Vec<DiffEntry>) {
    if old.is_null() && new.is_null() {
        return;
    }

    if old.is_null() {
        out.push(DiffEntry::added(path.to_string(), new.clone()));
        return;
    }

    if new.is_null() {
        out.push(DiffEntry::removed(path.to_string(), old.clone()));
        return;
    }

    // Primitives: strict comparison, no recursion.
    if !is_container(old) || !is_container(new) {
        if old != new {
            out.push(DiffEntry::modified(
                path.to_string(),
                old.clone(),
                new.clone(),
            ));
        }
        return;
    }

    // Arrays: a non-array side is treated as an empty array.
    if old.is_array() || new.is_array() {
        static EMPTY: &[Value] = &[];
        let old_items = old.as_array().map_or(EMPTY, Vec::as_slice);
        let new_items = new.as_array().map_or(EMPTY, Vec::as_slice);

        let max_len = old_items.len().max(new_items.len());
        for i in 0..max_len {
            let item_path = format!("{path}[{i}]");
            match (old_items.get(i), new_items.get(i)) {
                (None, Some(added)) => out.push(DiffEntry::added(item_path, added.clone())),
                (Some(removed), None) => out.push(DiffEntry::removed(item_path, removed.clone())),
                (Some(o), Some(n)) => diff_at(o, n, &item_path, out),
                (None, None) => {}
            }
        }
        return;
    }

    // Plain objects: walk the key union, old keys first.
    let (Some(old_map), Some(new_map)) = (old.as_object(), new.as_object()) else {
        return;
    };

    for (key, old_value) in old_map {
        let item_path = join_key(path, key);
        match new_map.get(key) {
            Some(new_value) => diff_at(old_value, new_value, &item_path, out),
            None => out.push(DiffEntry::removed(item_path, old_value.clone())),
        }
    }

    for (key, new_value) in new_map {
        if !old_map.contains_key(key) {
            out.push(DiffEntry::added(join_key(path, key), new_value.clone()));
        }
    }
}

const fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Renders a diff list as a readable multi-line string.
///
/// Returns the literal `"No differences"` for an empty list.
#[must_use]
pub fn format_diff(entries: &[DiffEntry]) -> String {
    if entries.is_empty() {
        return "No differences".to_string();
    }

    let mut lines = Vec::new();
    for entry in entries {
        match entry.kind {
            DiffKind::Added => {
                lines.push(format!("+ {}: {}", entry.path, to_json(&entry.new_value)));
            }
            DiffKind::Removed => {
                lines.push(format!("- {}: {}", entry.path, to_json(&entry.old_value)));
            }
            DiffKind::Modified => {
                lines.push(format!("~ {}:", entry.path));
                lines.push(format!("  - {}", to_json(&entry.old_value)));
                lines.push(format!("  + {}", to_json(&entry.new_value)));
            }
            DiffKind::Unchanged => {}
        }
    }

    lines.join("\n")
}

fn to_json(value: &Option<Value>) -> String {
    value
        .as_ref()
        .map_or_else(|| "null".to_string(), Value::to_string)
}

/// Result of diffing two JSON texts with best-effort inline highlights.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonHighlight {
    /// Old text with removed/modified values wrapped in markers
    pub old_highlighted: String,
    /// New text with added/modified values wrapped in markers
    pub new_highlighted: String,
    /// The structural diff between the two parsed values
    pub diffs: Vec<DiffEntry>,
}

/// Diffs two JSON texts and wraps changed values in sentinel markers
/// (`<<<ADDED>>>…<<</ADDED>>>` and friends).
///
/// Fails soft: if either side does not parse, both texts come back
/// unmodified with an empty diff list. The highlight is a literal
/// first-occurrence substring substitution of each changed value's
/// serialized form, not a structural overlay; it can mis-highlight when
/// the same serialized value appears verbatim elsewhere in the text.
#[must_use]
pub fn highlight_diff_in_json(old_json: &str, new_json: &str) -> JsonHighlight {
    let (Ok(old_value), Ok(new_value)) = (
        serde_json::from_str::<Value>(old_json),
        serde_json::from_str::<Value>(new_json),
    ) else {
        return JsonHighlight {
            old_highlighted: old_json.to_string(),
            new_highlighted: new_json.to_string(),
            diffs: Vec::new(),
        };
    };

    let diffs = diff(&old_value, &new_value);

    let mut old_highlighted = old_json.to_string();
    let mut new_highlighted = new_json.to_string();

    for entry in &diffs {
        match entry.kind {
            DiffKind::Removed => {
                if let Some(old) = &entry.old_value {
                    let value_str = old.to_string();
                    old_highlighted = old_highlighted.replacen(
                        &value_str,
                        &format!("<<<REMOVED>>>{value_str}<<</REMOVED>>>"),
                        1,
                    );
                }
            }
            DiffKind::Added => {
                if let Some(new) = &entry.new_value {
                    let value_str = new.to_string();
                    new_highlighted = new_highlighted.replacen(
                        &value_str,
                        &format!("<<<ADDED>>>{value_str}<<</ADDED>>>"),
                        1,
                    );
                }
            }
            DiffKind::Modified => {
                if let Some(old) = &entry.old_value {
                    let value_str = old.to_string();
                    old_highlighted = old_highlighted.replacen(
                        &value_str,
                        &format!("<<<MODIFIED>>>{value_str}<<</MODIFIED>>>"),
                        1,
                    );
                }
                if let Some(new) = &entry.new_value {
                    let value_str = new.to_string();
                    new_highlighted = new_highlighted.replacen(
                        &value_str,
                        &format!("<<<MODIFIED>>>{value_str}<<</MODIFIED>>>"),
                        1,
                    );
                }
            }
            DiffKind::Unchanged => {}
        }
    }

    JsonHighlight {
        old_highlighted,
        new_highlighted,
        diffs,
    }
}
