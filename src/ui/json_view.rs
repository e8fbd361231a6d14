//! Collapsible text rendering of arbitrary JSON.
//!
//! Objects and arrays above the open depth show their children, one per
//! line, indented two spaces per level. Deeper containers collapse into a
//! one-line summary such as `Object {3}` or `Array[2]`.

use serde_json::Value;

/// Open depth that expands every level.
pub const FULL_DEPTH: usize = usize::MAX;

/// Renders a JSON value as an indented tree.
#[derive(Debug, Clone)]
pub struct JsonFormatter<'a> {
    value: &'a Value,
    open_depth: usize,
}

impl<'a> JsonFormatter<'a> {
    /// Formatter with only the root level open.
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            open_depth: 1,
        }
    }

    /// Opens every container whose depth is below `depth`. The root sits at
    /// depth 0, so `0` collapses everything.
    pub fn open_at_depth(mut self, depth: usize) -> Self {
        self.open_depth = depth;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node(&mut out, None, self.value, 0);
        // drop the final newline
        out.pop();
        out
    }

    fn render_node(&self, out: &mut String, key: Option<&str>, value: &Value, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        if let Some(key) = key {
            out.push_str(&format!("{key}: "));
        }

        match value {
            Value::Object(map) => {
                out.push_str(&format!("Object {{{}}}\n", map.len()));
                if depth < self.open_depth {
                    for (k, v) in map {
                        self.render_node(out, Some(k), v, depth + 1);
                    }
                }
            }
            Value::Array(items) => {
                out.push_str(&format!("Array[{}]\n", items.len()));
                if depth < self.open_depth {
                    for (i, v) in items.iter().enumerate() {
                        self.render_node(out, Some(&i.to_string()), v, depth + 1);
                    }
                }
            }
            scalar => {
                out.push_str(&format!("{scalar}\n"));
            }
        }
    }
}
