//! Core value type for all deepval data.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::collections::{
    ArrayData, ArrayRef, DateRef, Handle, MapData, MapRef, ObjectData, ObjectRef, Props,
    RegExpRef, SetData, SetRef,
};
use crate::date::DateData;
use crate::error::Result;
use crate::kind::Kind;
use crate::regexp::RegExpData;

/// A dynamically typed value.
///
/// Primitives are stored inline and compared by value. Containers are
/// stored behind [`Handle`]s: cloning a `Value` that holds a container
/// copies the reference, so both clones see the same contents. Use the
/// deep operations in `deepval_ops` to copy or compare contents.
///
/// Containers may reference themselves. Such cycles are never freed by
/// reference counting; clear one edge of the cycle when done with it.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit floating point number.
    Number(f64),
    /// Immutable string.
    String(Arc<str>),
    /// Date.
    Date(DateRef),
    /// Regular expression.
    RegExp(RegExpRef),
    /// Keyed map with identity-compared keys.
    Map(MapRef),
    /// Set with identity-compared members.
    Set(SetRef),
    /// Array.
    Array(ArrayRef),
    /// Plain object or class instance.
    Object(ObjectRef),
}

impl Value {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty plain object.
    #[must_use]
    pub fn object() -> Self {
        Self::Object(Handle::new(ObjectData::default()))
    }

    /// Creates a plain object from key-value pairs.
    pub fn object_from<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Arc<str>>,
        V: Into<Value>,
    {
        Self::from_props(collect_props(entries))
    }

    /// Creates a plain object that owns `props`.
    #[must_use]
    pub fn from_props(props: Props) -> Self {
        Self::Object(Handle::new(ObjectData::plain(props)))
    }

    /// Creates an instance of `class` from key-value pairs.
    pub fn instance<I, K, V>(class: impl Into<Arc<str>>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Arc<str>>,
        V: Into<Value>,
    {
        Self::Object(Handle::new(ObjectData::instance(
            class,
            collect_props(entries),
        )))
    }

    /// Creates an array.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(Handle::new(items.into_iter().map(Into::into).collect()))
    }

    /// Creates a map. Later duplicate keys overwrite earlier ones.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let data: MapData = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::Map(Handle::new(data))
    }

    /// Creates a set. Duplicate members collapse.
    pub fn set<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let data: SetData = members.into_iter().map(Into::into).collect();
        Self::Set(Handle::new(data))
    }

    /// Creates a date from epoch milliseconds.
    #[must_use]
    pub fn date_millis(millis: i64) -> Self {
        Self::Date(Handle::new(DateData::from_millis(millis)))
    }

    /// Creates a date from a `chrono` timestamp.
    #[must_use]
    pub fn date(dt: DateTime<Utc>) -> Self {
        Self::Date(Handle::new(DateData::from(dt)))
    }

    /// Compiles a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPattern`](crate::ErrorKind::InvalidPattern)
    /// if the pattern or flags are invalid.
    pub fn regexp(source: impl Into<String>, flags: &str) -> Result<Self> {
        Ok(Self::RegExp(Handle::new(RegExpData::new(source, flags)?)))
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Classifies this value for traversal.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Undefined | Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => {
                Kind::Primitive
            }
            Self::Date(_) => Kind::Date,
            Self::RegExp(_) => Kind::RegExp,
            Self::Map(_) => Kind::Map,
            Self::Set(_) => Kind::Set,
            Self::Array(_) => Kind::Array,
            Self::Object(o) => {
                if o.read().is_plain() {
                    Kind::PlainObject
                } else {
                    Kind::OtherObject
                }
            }
        }
    }

    /// Returns the `typeof` tag of this value.
    ///
    /// `null` and every container report `"object"`.
    #[must_use]
    pub const fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Null
            | Self::Date(_)
            | Self::RegExp(_)
            | Self::Map(_)
            | Self::Set(_)
            | Self::Array(_)
            | Self::Object(_) => "object",
        }
    }

    /// Returns true if this value is undefined.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if this value is null or undefined.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns true if this value is not a container.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Undefined | Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_)
        )
    }

    /// Returns true if this value is an object with no class.
    #[must_use]
    pub fn is_plain_object(&self) -> bool {
        matches!(self, Self::Object(o) if o.read().is_plain())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Attempts to extract a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an array handle.
    #[must_use]
    pub const fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract an object handle.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Attempts to extract a map handle.
    #[must_use]
    pub const fn as_map(&self) -> Option<&MapRef> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a set handle.
    #[must_use]
    pub const fn as_set(&self) -> Option<&SetRef> {
        match self {
            Self::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a date handle.
    #[must_use]
    pub const fn as_date(&self) -> Option<&DateRef> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Attempts to extract a regular expression handle.
    #[must_use]
    pub const fn as_regexp(&self) -> Option<&RegExpRef> {
        match self {
            Self::RegExp(r) => Some(r),
            _ => None,
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Returns the identity of the container, or `None` for primitives.
    #[must_use]
    pub fn ptr_id(&self) -> Option<usize> {
        match self {
            Self::Undefined | Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => {
                None
            }
            Self::Date(h) => Some(h.id()),
            Self::RegExp(h) => Some(h.id()),
            Self::Map(h) => Some(h.id()),
            Self::Set(h) => Some(h.id()),
            Self::Array(h) => Some(h.id()),
            Self::Object(h) => Some(h.id()),
        }
    }

    /// Returns true if both values are the same container.
    ///
    /// Always false for primitives.
    #[must_use]
    pub fn same_ref(&self, other: &Self) -> bool {
        self.ptr_id().is_some_and(|a| other.ptr_id() == Some(a))
    }

    /// SameValueZero equality.
    ///
    /// Primitives compare by value, with `NaN` equal to itself and `-0`
    /// equal to `+0`. Containers compare by identity.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_value_zero(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            _ => self.same_ref(other),
        }
    }

    // =========================================================================
    // Property access
    // =========================================================================

    /// Reads an own property.
    ///
    /// Objects resolve their own properties. Arrays and strings resolve
    /// canonical indices (`"0"`, `"1"`, ...) and `"length"`; strings count
    /// and index UTF-16 code units, and an index that lands on half of a
    /// surrogate pair yields U+FFFD. Everything else yields `Undefined`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get_key(&self, key: &str) -> Value {
        match self {
            Self::Object(o) => o.read().get(key).cloned().unwrap_or_default(),
            Self::Array(a) => {
                if key == "length" {
                    return Self::Number(a.read().len() as f64);
                }
                array_index(key)
                    .and_then(|i| a.read().get(i).cloned())
                    .unwrap_or_default()
            }
            Self::String(s) => {
                if key == "length" {
                    return Self::Number(s.encode_utf16().count() as f64);
                }
                array_index(key)
                    .and_then(|i| s.encode_utf16().nth(i))
                    .map(code_unit_string)
                    .unwrap_or_default()
            }
            Self::Undefined
            | Self::Null
            | Self::Bool(_)
            | Self::Number(_)
            | Self::Date(_)
            | Self::RegExp(_)
            | Self::Map(_)
            | Self::Set(_) => Self::Undefined,
        }
    }

    /// Returns true if [`set_key`](Self::set_key) can store `key` here.
    #[must_use]
    pub fn accepts_key(&self, key: &str) -> bool {
        match self {
            Self::Object(_) => true,
            Self::Array(_) => array_index(key).is_some(),
            _ => false,
        }
    }

    /// Writes an own property in place and reports whether it landed.
    ///
    /// Arrays accept canonical indices and grow with `Undefined` holes.
    pub fn set_key(&self, key: &str, value: Value) -> bool {
        match self {
            Self::Object(o) => {
                o.write().insert(key, value);
                true
            }
            Self::Array(a) => match array_index(key) {
                Some(i) => {
                    a.write().set(i, value);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Returns the own enumerable keys: object properties or array indices.
    #[must_use]
    pub fn own_keys(&self) -> Vec<Arc<str>> {
        match self {
            Self::Object(o) => o.read().props().keys().cloned().collect(),
            Self::Array(a) => (0..a.read().len()).map(|i| i.to_string().into()).collect(),
            _ => Vec::new(),
        }
    }

    /// Copies the own enumerable properties into a fresh property map.
    ///
    /// Arrays contribute their indices as keys; other containers and
    /// primitives contribute nothing. Values are shared, not copied.
    #[must_use]
    pub fn own_entries(&self) -> Props {
        match self {
            Self::Object(o) => o.read().props().clone(),
            Self::Array(a) => a
                .read()
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string().into(), v.clone()))
                .collect(),
            _ => Props::new(),
        }
    }
}

fn collect_props<I, K, V>(entries: I) -> Props
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Arc<str>>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

fn code_unit_string(unit: u16) -> Value {
    let text: String = char::decode_utf16([unit])
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    Value::from(text)
}

/// Parses a canonical array index: digits only, no leading zeros.
#[must_use]
pub fn array_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>()
        .ok()
        .filter(|&n| n != u32::MAX)
        .map(|n| n as usize)
}

// Equality is SameValueZero so values can key maps and sets.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same_value_zero(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    #[allow(clippy::float_cmp)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Undefined | Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => {
                let bits = if n.is_nan() {
                    f64::NAN.to_bits()
                } else if *n == 0.0 {
                    0
                } else {
                    n.to_bits()
                };
                bits.hash(state);
            }
            Self::String(s) => s.hash(state),
            _ => self.ptr_id().hash(state),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn render(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    stack: &mut Vec<usize>,
    quote: bool,
) -> fmt::Result {
    match value {
        Value::Undefined => f.write_str("undefined"),
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => render_number(f, *n),
        Value::String(s) if quote => write!(f, "{s:?}"),
        Value::String(s) => f.write_str(s),
        Value::Date(d) => match d.read().to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => f.write_str("Invalid Date"),
        },
        Value::RegExp(r) => {
            let r = r.read();
            write!(f, "/{}/{}", r.source(), r.flags())
        }
        Value::Map(_) | Value::Set(_) | Value::Array(_) | Value::Object(_) => {
            let id = value.ptr_id().unwrap_or_default();
            if stack.contains(&id) {
                return f.write_str("[Circular]");
            }
            stack.push(id);
            let result = render_container(value, f, stack);
            stack.pop();
            result
        }
    }
}

fn render_container(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    stack: &mut Vec<usize>,
) -> fmt::Result {
    match value {
        Value::Array(a) => {
            let items: Vec<Value> = a.read().iter().cloned().collect();
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                render(item, f, stack, true)?;
            }
            f.write_str("]")
        }
        Value::Object(o) => {
            let (class, props) = {
                let o = o.read();
                (o.class().map(str::to_owned), o.props().clone())
            };
            if let Some(class) = class {
                write!(f, "{class} ")?;
            }
            if props.is_empty() {
                return f.write_str("{}");
            }
            f.write_str("{ ")?;
            for (i, (k, v)) in props.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{k}: ")?;
                render(v, f, stack, true)?;
            }
            f.write_str(" }")
        }
        Value::Map(m) => {
            let entries: Vec<(Value, Value)> = m
                .read()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            write!(f, "Map({}) {{", entries.len())?;
            for (i, (k, v)) in entries.iter().enumerate() {
                f.write_str(if i > 0 { ", " } else { " " })?;
                render(k, f, stack, true)?;
                f.write_str(" => ")?;
                render(v, f, stack, true)?;
            }
            f.write_str(if entries.is_empty() { "}" } else { " }" })
        }
        Value::Set(s) => {
            let members: Vec<Value> = s.read().iter().cloned().collect();
            write!(f, "Set({}) {{", members.len())?;
            for (i, m) in members.iter().enumerate() {
                f.write_str(if i > 0 { ", " } else { " " })?;
                render(m, f, stack, true)?;
            }
            f.write_str(if members.is_empty() { "}" } else { " }" })
        }
        _ => render(value, f, stack, true),
    }
}

fn render_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f, &mut Vec::new(), true)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f, &mut Vec::new(), false)
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::date(dt)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::array(v)
    }
}

impl From<ArrayData> for Value {
    fn from(data: ArrayData) -> Self {
        Self::Array(Handle::new(data))
    }
}
