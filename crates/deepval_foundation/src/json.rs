//! Conversion to and from `serde_json` values.
//!
//! JSON objects become plain objects with their keys in document order.
//! Keys such as `__proto__` are kept as ordinary own properties, which is
//! the shape a JSON parser hands to the merge and path helpers.

use crate::error::{ErrorContext, Result};
use crate::guard::check_recursion_depth_with;
use crate::limits::Limits;
use crate::value::Value;

use serde_json::{Number, Value as Json};

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Self::from_json(json)
    }
}

impl Value {
    /// Builds a value tree from parsed JSON.
    ///
    /// Numbers that do not fit an `f64` become `NaN`.
    #[must_use]
    pub fn from_json(json: Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Self::from(s),
            Json::Array(items) => Self::array(items.into_iter().map(Self::from_json)),
            Json::Object(map) => {
                Self::object_from(map.into_iter().map(|(k, v)| (k, Self::from_json(v))))
            }
        }
    }

    /// Converts to JSON using the default recursion ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RecursionTooDeep`](crate::ErrorKind::RecursionTooDeep)
    /// if the tree is deeper than the ceiling, which includes every cyclic
    /// value.
    pub fn to_json(&self) -> Result<Json> {
        self.to_json_with(&Limits::DEFAULT)
    }

    /// Converts to JSON, failing past `limits.max_recursion_depth`.
    ///
    /// Dates become epoch milliseconds, regular expressions their
    /// `/source/flags` text, maps arrays of `[key, value]` pairs and sets
    /// arrays. `undefined` object properties are dropped; `undefined` array
    /// elements and non-finite numbers become `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RecursionTooDeep`](crate::ErrorKind::RecursionTooDeep)
    /// if the tree is deeper than the ceiling.
    pub fn to_json_with(&self, limits: &Limits) -> Result<Json> {
        let mut path = Vec::new();
        to_json_at(self, limits, 0, &mut path).map_err(|err| {
            err.with_context(
                ErrorContext::new()
                    .with_operation("to_json")
                    .with_path(&path),
            )
        })
    }
}

fn to_json_at(
    value: &Value,
    limits: &Limits,
    depth: usize,
    path: &mut Vec<String>,
) -> Result<Json> {
    check_recursion_depth_with(limits, depth)?;
    let json = match value {
        Value::Undefined | Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => Json::String(s.to_string()),
        Value::Date(d) => Json::from(d.read().millis()),
        Value::RegExp(r) => {
            let r = r.read();
            Json::String(format!("/{}/{}", r.source(), r.flags()))
        }
        Value::Map(m) => {
            let entries: Vec<(Value, Value)> = m
                .read()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            let mut pairs = Vec::with_capacity(entries.len());
            for (i, (k, v)) in entries.iter().enumerate() {
                path.push(i.to_string());
                let pair = Json::Array(vec![
                    to_json_at(k, limits, depth + 1, path)?,
                    to_json_at(v, limits, depth + 1, path)?,
                ]);
                path.pop();
                pairs.push(pair);
            }
            Json::Array(pairs)
        }
        Value::Set(s) => {
            let members: Vec<Value> = s.read().iter().cloned().collect();
            Json::Array(sequence(&members, limits, depth, path)?)
        }
        Value::Array(a) => {
            let items: Vec<Value> = a.read().iter().cloned().collect();
            Json::Array(sequence(&items, limits, depth, path)?)
        }
        Value::Object(o) => {
            let props = o.read().props().clone();
            let mut map = serde_json::Map::with_capacity(props.len());
            for (k, v) in &props {
                if v.is_undefined() {
                    continue;
                }
                path.push(k.to_string());
                let converted = to_json_at(v, limits, depth + 1, path)?;
                map.insert(k.to_string(), converted);
                path.pop();
            }
            Json::Object(map)
        }
    };
    Ok(json)
}

/// Integral numbers in the exactly representable range serialize as integers.
#[allow(clippy::cast_possible_truncation)]
fn number_to_json(n: f64) -> Json {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE {
        Json::from(n as i64)
    } else {
        Number::from_f64(n).map_or(Json::Null, Json::Number)
    }
}

fn sequence(
    items: &[Value],
    limits: &Limits,
    depth: usize,
    path: &mut Vec<String>,
) -> Result<Vec<Json>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        path.push(i.to_string());
        out.push(to_json_at(item, limits, depth + 1, path)?);
        path.pop();
    }
    Ok(out)
}
