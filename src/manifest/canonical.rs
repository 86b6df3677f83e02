//! Canonical JSON text
//!
//! Object keys are sorted explicitly at every level, arrays keep their order,
//! and integral numbers are written without a fractional part (`800`, not
//! `800.0`) so the text reads like a hand-written JS literal. The same value
//! always produces the same bytes, whatever order its fields were built in.

use serde::Serialize;
use serde_json::{Number, Value};

const INDENT: &str = "  ";

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Serialize a value to canonical, pretty-printed JSON.
///
/// # Examples
///
/// ```
/// use pixelplay::manifest::to_canonical_json;
/// use serde_json::json;
///
/// let text = to_canonical_json(&json!({"b": 1.0, "a": [true, null]})).unwrap();
/// assert_eq!(text, "{\n  \"a\": [\n    true,\n    null\n  ],\n  \"b\": 1\n}");
/// ```
pub fn to_canonical_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(value)?;
    let mut out = String::new();
    write_value(&value, 0, &mut out);
    Ok(out)
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_value(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(n, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                push_indent(depth + 1, out);
                write_value(item, depth + 1, out);
            }
            out.push('\n');
            push_indent(depth, out);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            out.push_str("{\n");
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                push_indent(depth + 1, out);
                write_string(key, out);
                out.push_str(": ");
                write_value(&map[key.as_str()], depth + 1, out);
            }
            out.push('\n');
            push_indent(depth, out);
            out.push('}');
        }
    }
}

fn write_number(n: &Number, out: &mut String) {
    if let Some(i) = n.as_i64() {
        out.push_str(&i.to_string());
    } else if let Some(u) = n.as_u64() {
        out.push_str(&u.to_string());
    } else if let Some(f) = n.as_f64() {
        if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
            out.push_str(&(f as i64).to_string());
        } else {
            out.push_str(&f.to_string());
        }
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Valid JSON but line terminators inside JS string literals
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
