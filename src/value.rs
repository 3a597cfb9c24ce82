use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    sync::Arc,
};

use log::trace;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{
    coerce::{format_number, parse_boolean, parse_number},
    entity::{Entity, EntityHandle},
};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Kind {
    Null,
    Boolean,
    Number,
    Text,
    EntityRef,
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::Text => "text",
            Kind::EntityRef => "entity",
        };
        f.write_str(name)
    }
}

/// A loosely typed value.
///
/// Values of different kinds interoperate through coercion: text that looks
/// like a number adds numerically to a number, `-`, `*`, `/` and [`Value::pow`]
/// always work on the numeric view of both sides, and `==` is a loose
/// equality. Every operation is total; failures surface as `NaN`, `false` or
/// `"null"` rather than as errors.
///
/// Each kind has a numeric payload and a reference payload, one of which is a
/// sentinel (`NaN` or absent). Equality compares both, which has two
/// consequences callers must know about:
///
/// * two `Text` (or two `EntityRef`) values are never equal to each other,
///   since `NaN != NaN`;
/// * values of different kinds with no coercion rule between them are equal
///   when both reference payloads are absent, so `true == 1` and
///   `false == Null` hold.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    Text(Arc<str>),
    EntityRef(EntityHandle),
}

/// Borrowed view of the reference payload.
#[derive(Debug, PartialEq, Hash)]
enum Reference<'a> {
    Absent,
    Text(&'a str),
    Entity(&'a EntityHandle),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::Text(_) => Kind::Text,
            Value::EntityRef(_) => Kind::EntityRef,
        }
    }

    /// The raw numeric payload: `1`/`0` for booleans, the number itself for
    /// numbers and the `NaN` sentinel for every other kind.
    pub fn numeric_payload(&self) -> f64 {
        match self {
            Value::Boolean(b) => {
                if *b {
                    1f64
                } else {
                    0f64
                }
            }
            Value::Number(n) => *n,
            Value::Null | Value::Text(_) | Value::EntityRef(_) => f64::NAN,
        }
    }

    fn reference(&self) -> Reference<'_> {
        match self {
            Value::Text(text) => Reference::Text(&**text),
            Value::EntityRef(handle) if !handle.is_none() => Reference::Entity(handle),
            _ => Reference::Absent,
        }
    }

    pub fn to_number(&self) -> f64 {
        match self {
            Value::Boolean(_) | Value::Number(_) => self.numeric_payload(),
            Value::Text(text) => parse_number(text).unwrap_or(f64::NAN),
            Value::Null | Value::EntityRef(_) => f64::NAN,
        }
    }

    pub fn to_boolean(&self) -> bool {
        match self {
            Value::Boolean(_) | Value::Number(_) => self.numeric_payload() != 0f64,
            Value::Text(text) => match parse_number(text) {
                Some(number) => number != 0f64,
                None => parse_boolean(text).unwrap_or(false),
            },
            Value::Null | Value::EntityRef(_) => false,
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::Text(text) => text.to_string(),
            Value::EntityRef(handle) => handle.describe(),
        }
    }

    /// `true` when the numeric view of this value is `NaN`.
    pub fn is_nan(&self) -> bool {
        self.to_number().is_nan()
    }

    pub fn pow(&self, exponent: &Value) -> Value {
        Value::Number(self.to_number().powf(exponent.to_number()))
    }

    /// Loose equality, tried in this order:
    ///
    /// 1. same kind: numeric and reference payloads both equal;
    /// 2. number against text that parses as a number: the numbers are equal;
    /// 3. boolean against text that parses as `true`/`false`: the booleans
    ///    are equal;
    /// 4. otherwise the reference payloads are equal.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (l, r) if l.kind() == r.kind() => {
                l.numeric_payload() == r.numeric_payload() && l.reference() == r.reference()
            }
            (Value::Number(n), Value::Text(text)) | (Value::Text(text), Value::Number(n)) => {
                match parse_number(text) {
                    Some(parsed) => {
                        trace!("eq: number {} against numeric text {:?}", n, text);
                        parsed == *n
                    }
                    None => self.reference() == other.reference(),
                }
            }
            (Value::Boolean(b), Value::Text(text)) | (Value::Text(text), Value::Boolean(b)) => {
                match parse_boolean(text) {
                    Some(parsed) => {
                        trace!("eq: boolean {} against boolean text {:?}", b, text);
                        parsed == *b
                    }
                    None => self.reference() == other.reference(),
                }
            }
            _ => {
                trace!(
                    "eq: no coercion between {} and {}, comparing references",
                    self.kind(),
                    other.kind()
                );
                self.reference() == other.reference()
            }
        }
    }
}

fn concatenate(left: &Value, right: &Value) -> Value {
    let mut result = left.to_text();
    result.push_str(&right.to_text());
    Value::Text(result.into())
}

fn add_values(left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Value::Number(l + r),
        (l, r) if l.kind() == r.kind() => concatenate(l, r),
        (Value::Text(text), Value::Number(n)) => match parse_number(text) {
            Some(parsed) => {
                trace!("add: numeric text {:?} + number {}", text, n);
                Value::Number(parsed + n)
            }
            None => concatenate(left, right),
        },
        (Value::Number(n), Value::Text(text)) => match parse_number(text) {
            Some(parsed) => {
                trace!("add: number {} + numeric text {:?}", n, text);
                Value::Number(n + parsed)
            }
            None => concatenate(left, right),
        },
        (l, r) => {
            trace!("add: concatenating {} and {}", l.kind(), r.kind());
            concatenate(l, r)
        }
    }
}

fn subtract_values(left: &Value, right: &Value) -> Value {
    Value::Number(left.to_number() - right.to_number())
}

fn multiply_values(left: &Value, right: &Value) -> Value {
    Value::Number(left.to_number() * right.to_number())
}

fn divide_values(left: &Value, right: &Value) -> Value {
    Value::Number(left.to_number() / right.to_number())
}

macro_rules! binary_operator {
    ($op:ident, $method:ident, $apply:ident) => {
        impl<'a, 'b> std::ops::$op<&'b Value> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                $apply(self, rhs)
            }
        }

        impl<'b> std::ops::$op<&'b Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &'b Value) -> Value {
                $apply(&self, rhs)
            }
        }

        impl<'a> std::ops::$op<Value> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $apply(self, &rhs)
            }
        }

        impl std::ops::$op for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $apply(&self, &rhs)
            }
        }
    };
}

binary_operator!(Add, add, add_values);
binary_operator!(Sub, sub, subtract_values);
binary_operator!(Mul, mul, multiply_values);
binary_operator!(Div, div, divide_values);

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.loose_eq(other)
    }
}

// Consistent with equality only for values of the same kind.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        u8::from(self.kind()).hash(state);
        let payload = self.numeric_payload();
        let bits = if payload.is_nan() {
            f64::NAN.to_bits()
        } else if payload == 0f64 {
            0f64.to_bits()
        } else {
            payload.to_bits()
        };
        bits.hash(state);
        self.reference().hash(state);
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

macro_rules! from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Value {
                fn from(n: $int) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_integer!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(text: Arc<str>) -> Self {
        Value::Text(text)
    }
}

/// Missing text becomes empty text, never `Null`.
impl From<Option<&str>> for Value {
    fn from(text: Option<&str>) -> Self {
        Value::from(text.unwrap_or_default())
    }
}

impl From<EntityHandle> for Value {
    fn from(handle: EntityHandle) -> Self {
        Value::EntityRef(handle)
    }
}

impl<T: Entity + 'static> From<&Arc<T>> for Value {
    fn from(entity: &Arc<T>) -> Self {
        Value::EntityRef(EntityHandle::new(entity))
    }
}

impl From<&Value> for f64 {
    fn from(value: &Value) -> Self {
        value.to_number()
    }
}

impl From<&Value> for bool {
    fn from(value: &Value) -> Self {
        value.to_boolean()
    }
}

impl From<&Value> for String {
    fn from(value: &Value) -> Self {
        value.to_text()
    }
}
