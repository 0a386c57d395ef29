//! Type registry.
//!
//! The language has a closed set of atomic types. Each one is interned once
//! in a process-wide table, so every `Type` handed out for a tag points at
//! the same `AtomicType` instance.

use lazy_static::lazy_static;
use std::fmt::Display;

use super::values::TypedValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomicTypeTag {
    Integer,
    Floating,
    String,
    Char,
    Boolean,
    Void,
}

impl AtomicTypeTag {
    pub const ALL: [AtomicTypeTag; 6] = [
        AtomicTypeTag::Integer,
        AtomicTypeTag::Floating,
        AtomicTypeTag::String,
        AtomicTypeTag::Char,
        AtomicTypeTag::Boolean,
        AtomicTypeTag::Void,
    ];

    fn index(self) -> usize {
        match self {
            AtomicTypeTag::Integer => 0,
            AtomicTypeTag::Floating => 1,
            AtomicTypeTag::String => 2,
            AtomicTypeTag::Char => 3,
            AtomicTypeTag::Boolean => 4,
            AtomicTypeTag::Void => 5,
        }
    }
}

/// A built-in, non-composite type.
#[derive(Debug)]
pub struct AtomicType {
    tag: AtomicTypeTag,
    name: &'static str,
    zero_value: TypedValue,
}

impl AtomicType {
    pub fn tag(&self) -> AtomicTypeTag {
        self.tag
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The value a declaration of this type starts with.
    pub fn zero_value(&self) -> &TypedValue {
        &self.zero_value
    }
}

lazy_static! {
    static ref ATOMIC_TYPES: [AtomicType; 6] = [
        AtomicType { tag: AtomicTypeTag::Integer, name: "integer", zero_value: TypedValue::integer(0) },
        AtomicType { tag: AtomicTypeTag::Floating, name: "real", zero_value: TypedValue::floating(0.0) },
        AtomicType { tag: AtomicTypeTag::String, name: "string", zero_value: TypedValue::string("") },
        AtomicType { tag: AtomicTypeTag::Char, name: "char", zero_value: TypedValue::char('\0') },
        AtomicType { tag: AtomicTypeTag::Boolean, name: "boolean", zero_value: TypedValue::boolean(false) },
        AtomicType { tag: AtomicTypeTag::Void, name: "nil", zero_value: TypedValue::nil() },
    ];
}

/// Type of an expression. Only atomic types exist today.
#[derive(Debug, Clone, Copy)]
pub enum Type {
    Atomic(&'static AtomicType),
}

impl Type {
    /// Looks up the interned type for a tag.
    pub fn atomic(tag: AtomicTypeTag) -> Type {
        Type::Atomic(&ATOMIC_TYPES[tag.index()])
    }

    pub fn integer() -> Type {
        Type::atomic(AtomicTypeTag::Integer)
    }

    pub fn floating() -> Type {
        Type::atomic(AtomicTypeTag::Floating)
    }

    pub fn string() -> Type {
        Type::atomic(AtomicTypeTag::String)
    }

    pub fn char() -> Type {
        Type::atomic(AtomicTypeTag::Char)
    }

    pub fn boolean() -> Type {
        Type::atomic(AtomicTypeTag::Boolean)
    }

    pub fn void() -> Type {
        Type::atomic(AtomicTypeTag::Void)
    }

    pub fn tag(&self) -> AtomicTypeTag {
        match *self {
            Type::Atomic(atomic) => atomic.tag(),
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Type::Atomic(atomic) => atomic.name(),
        }
    }

    pub fn zero_value(&self) -> &'static TypedValue {
        match *self {
            Type::Atomic(atomic) => atomic.zero_value(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.tag(), AtomicTypeTag::Integer | AtomicTypeTag::Floating)
    }

    pub fn is(&self, tag: AtomicTypeTag) -> bool {
        self.tag() == tag
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag()
    }
}

impl Eq for Type {}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
