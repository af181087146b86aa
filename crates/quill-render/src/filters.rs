//! Custom Tera filters for report templates.

use std::collections::HashMap;

use serde_json::{Value, json};
use tera::{Error, Result};

/// `number_format` — group the integer part with thousands separators.
///
/// `1234567` → `"1,234,567"`; fractional digits pass through untouched.
pub fn number_format(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let Value::Number(n) = value else {
        return Err(Error::msg("number_format expects a number"));
    };
    Ok(Value::String(group_digits(&n.to_string())))
}

fn group_digits(repr: &str) -> String {
    let (sign, rest) = repr.strip_prefix('-').map_or(("", repr), |r| ("-", r));
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `fixed(places=2)` — render a number with a fixed decimal count.
pub fn fixed(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let n = value
        .as_f64()
        .ok_or_else(|| Error::msg("fixed expects a number"))?;
    let places = args.get("places").and_then(Value::as_u64).unwrap_or(2) as usize;
    Ok(Value::String(format!("{n:.places$}")))
}

/// `keys` — enumerate an object's keys as an array.
pub fn keys(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let obj = value
        .as_object()
        .ok_or_else(|| Error::msg("keys expects an object"))?;
    Ok(Value::Array(obj.keys().cloned().map(Value::String).collect()))
}

/// `top_entries(n=5)` — the object's top-N entries by numeric value,
/// descending, as `{key, value}` pairs. Non-numeric values are skipped.
pub fn top_entries(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let obj = value
        .as_object()
        .ok_or_else(|| Error::msg("top_entries expects an object"))?;
    let n = args.get("n").and_then(Value::as_u64).unwrap_or(5) as usize;

    let mut entries: Vec<(&String, &Value, f64)> = obj
        .iter()
        .filter_map(|(k, v)| v.as_f64().map(|rank| (k, v, rank)))
        .collect();
    entries.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    Ok(Value::Array(
        entries
            .into_iter()
            .take(n)
            .map(|(k, v, _)| json!({"key": k, "value": v}))
            .collect(),
    ))
}

/// `take(n)` — the first N items of an array.
pub fn take(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let arr = value
        .as_array()
        .ok_or_else(|| Error::msg("take expects an array"))?;
    let n = args.get("n").and_then(Value::as_u64).unwrap_or(arr.len() as u64) as usize;
    Ok(Value::Array(arr.iter().take(n).cloned().collect()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
