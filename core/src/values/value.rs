use crate::evaluator::Inapplicable;
use core::fmt;
use ecow::EcoString;
use static_assertions::assert_impl_all;

/// A fully evaluated value.
///
/// Values are immutable. Cloning `Text` shares the underlying buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 32-bit two's-complement integer. Arithmetic wraps on overflow.
    Int(i32),
    Boolean(bool),
    Text(EcoString),
    /// Result of statements and of constructs evaluated only for effect.
    Unit,
}

assert_impl_all!(Value: Send, Sync, Clone);

/// The kind of a [`Value`], used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Boolean,
    Text,
    Unit,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "Int",
            ValueKind::Boolean => "Boolean",
            ValueKind::Text => "String",
            ValueKind::Unit => "Unit",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn text(s: impl Into<EcoString>) -> Self {
        Value::Text(s.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Text(_) => ValueKind::Text,
            Value::Unit => ValueKind::Unit,
        }
    }

    // ========================================================================
    // Typed accessors
    //
    // A value of the wrong kind is not a language error here: it means the
    // fragment is not statically evaluable, reported like any other
    // unsupported construct.
    // ========================================================================

    pub fn as_int(&self) -> Result<i32, Inapplicable> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(other.mismatch(ValueKind::Int)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, Inapplicable> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    pub fn as_text(&self) -> Result<&EcoString, Inapplicable> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::Text)),
        }
    }

    fn mismatch(&self, expected: ValueKind) -> Inapplicable {
        Inapplicable::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{:?}", s.as_str()),
            Value::Unit => f.write_str("Unit"),
        }
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.into())
    }
}

/// A value the host can substitute for a call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Int(i32),
    Boolean(bool),
    Text(EcoString),
}

impl Literal {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Literal::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl TryFrom<Value> for Literal {
    type Error = Inapplicable;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(Literal::Int(i)),
            Value::Boolean(b) => Ok(Literal::Boolean(b)),
            Value::Text(s) => Ok(Literal::Text(s)),
            Value::Unit => Err(Inapplicable::NotALiteral),
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Int(i) => Value::Int(i),
            Literal::Boolean(b) => Value::Boolean(b),
            Literal::Text(s) => Value::Text(s),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Text(s) => write!(f, "{:?}", s.as_str()),
        }
    }
}
