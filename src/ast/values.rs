use std::fmt::Display;

use super::types::{AtomicTypeTag, Type};

/// A raw runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Floating(f64),
    String(String),
    Char(char),
    Boolean(bool),
    Nil,
}

impl Value {
    /// Name of the representation, used in runtime diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Floating(_) => "real",
            Value::String(_) => "string",
            Value::Char(_) => "char",
            Value::Boolean(_) => "boolean",
            Value::Nil => "nil",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Floating(value) => {
                let text = format_real(*value);
                write!(f, "{}", text.strip_suffix(".0").unwrap_or(&text))
            }
            Value::String(value) => write!(f, "{}", value),
            Value::Char(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Nil => write!(f, "nil"),
        }
    }
}

/// Renders a real with plain notation for magnitudes in `[1e-3, 1e7)` and
/// `d.dddE<n>` notation otherwise, always with a digit after the point.
fn format_real(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

/// A boxed value paired with its atomic type tag.
///
/// The tag is authoritative: an integer-valued real such as `2,0` is still
/// tagged `Floating`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    value: Value,
    tag: AtomicTypeTag,
}

impl TypedValue {
    pub fn new(value: Value, tag: AtomicTypeTag) -> Self {
        TypedValue { value, tag }
    }

    pub fn integer(value: i64) -> Self {
        TypedValue::new(Value::Integer(value), AtomicTypeTag::Integer)
    }

    pub fn floating(value: f64) -> Self {
        TypedValue::new(Value::Floating(value), AtomicTypeTag::Floating)
    }

    pub fn string(value: impl Into<String>) -> Self {
        TypedValue::new(Value::String(value.into()), AtomicTypeTag::String)
    }

    pub fn char(value: char) -> Self {
        TypedValue::new(Value::Char(value), AtomicTypeTag::Char)
    }

    pub fn boolean(value: bool) -> Self {
        TypedValue::new(Value::Boolean(value), AtomicTypeTag::Boolean)
    }

    pub fn nil() -> Self {
        TypedValue::new(Value::Nil, AtomicTypeTag::Void)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn tag(&self) -> AtomicTypeTag {
        self.tag
    }

    /// The interned type for this value's tag.
    pub fn get_type(&self) -> Type {
        Type::atomic(self.tag)
    }
}

impl Display for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
