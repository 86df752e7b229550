//! Built-in types and the symbols that wrap them.

use std::fmt;

use klang_lexer::TokenKind;

/// A built-in Klang type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Integer,
    Double,
    Boolean,
    Character,
    String,
    Void,
    /// Type of the `null` literal.
    Null,
}

impl Type {
    /// Map a type keyword (or `null`) to its type.
    pub fn from_keyword(kind: TokenKind) -> Option<Type> {
        match kind {
            TokenKind::Integer => Some(Type::Integer),
            TokenKind::Double => Some(Type::Double),
            TokenKind::Boolean => Some(Type::Boolean),
            TokenKind::CharacterType => Some(Type::Character),
            TokenKind::StringType => Some(Type::String),
            TokenKind::Void => Some(Type::Void),
            TokenKind::Null => Some(Type::Null),
            _ => None,
        }
    }

    /// Source spelling.
    pub fn name(self) -> &'static str {
        match self {
            Type::Integer => "integer",
            Type::Double => "double",
            Type::Boolean => "boolean",
            Type::Character => "character",
            Type::String => "String",
            Type::Void => "void",
            Type::Null => "null",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The declared type of a name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeSymbol {
    Primitive(Type),
    /// One-dimensional array of a built-in type.
    Array(Type),
    /// A name that cannot be reassigned after its declaration.
    Constant(Box<TypeSymbol>),
}

impl TypeSymbol {
    pub fn constant(inner: TypeSymbol) -> Self {
        TypeSymbol::Constant(Box::new(inner))
    }

    /// The symbol with any `constant` qualifier removed.
    pub fn unqualified(&self) -> &TypeSymbol {
        match self {
            TypeSymbol::Constant(inner) => inner.unqualified(),
            other => other,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, TypeSymbol::Constant(_))
    }

    /// Check if a value of type `other` may be stored in a slot of this type.
    ///
    /// Primitives need the same type, except that `null` fits a `String`.
    /// Arrays need the same element type. Qualifiers on either side are
    /// ignored.
    pub fn is_assignable_from(&self, other: &TypeSymbol) -> bool {
        match (self.unqualified(), other.unqualified()) {
            (TypeSymbol::Primitive(target), TypeSymbol::Primitive(value)) => {
                target == value || (*target == Type::String && *value == Type::Null)
            }
            (TypeSymbol::Array(target), TypeSymbol::Array(value)) => target == value,
            _ => false,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self.unqualified(), TypeSymbol::Primitive(Type::String))
    }

    /// Strings and arrays are references; everything else is a value.
    pub fn is_reference(&self) -> bool {
        matches!(
            self.unqualified(),
            TypeSymbol::Primitive(Type::String) | TypeSymbol::Array(_)
        )
    }
}

impl From<Type> for TypeSymbol {
    fn from(ty: Type) -> Self {
        TypeSymbol::Primitive(ty)
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSymbol::Primitive(ty) => write!(f, "{ty}"),
            TypeSymbol::Array(ty) => write!(f, "{ty}[]"),
            TypeSymbol::Constant(inner) => write!(f, "constant {inner}"),
        }
    }
}
