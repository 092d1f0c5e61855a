/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Classification of field types into initializer strategies.

use fixval_model::{BuiltinType, TypeRef};

/// Width of a narrow integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// 8-bit.
    I8,
    /// 16-bit.
    I16,
    /// 32-bit.
    I32,
}

/// How a fixed value is turned into an initializer for a given field type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Used verbatim as a string literal.
    Text,
    /// Parsed as a boolean.
    Boolean,
    /// Parsed as a base-10 integer of the given width.
    NarrowInt(IntWidth),
    /// Parsed as a base-10 64-bit integer.
    WideInt,
    /// Parsed as a single-precision float.
    SingleFloat,
    /// Parsed as a double-precision float.
    DoubleFloat,
    /// Converted at runtime by the class's shared calendar factory.
    Calendar,
    /// Resolved against the constants of the named enum.
    Enum(String),
    /// No initializer can be produced for this type.
    Unsupported(String),
}

impl TargetKind {
    /// Classifies a field's declared type.
    ///
    /// Primitive types are treated like their boxed flavour.
    #[must_use]
    pub fn of(ty: &TypeRef) -> Self {
        let Some(builtin) = ty.builtin() else {
            return match ty {
                TypeRef::Enum(name) => Self::Enum(name.clone()),
                other => Self::Unsupported(other.name().to_string()),
            };
        };
        match builtin {
            BuiltinType::String => Self::Text,
            BuiltinType::Boolean => Self::Boolean,
            BuiltinType::Byte => Self::NarrowInt(IntWidth::I8),
            BuiltinType::Short => Self::NarrowInt(IntWidth::I16),
            BuiltinType::Int => Self::NarrowInt(IntWidth::I32),
            BuiltinType::Long => Self::WideInt,
            BuiltinType::Float => Self::SingleFloat,
            BuiltinType::Double => Self::DoubleFloat,
            BuiltinType::XmlCalendar => Self::Calendar,
            other => Self::Unsupported(other.boxed_name().to_string()),
        }
    }

    /// Returns the label used in diagnostics for fields of this kind.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Text => "String",
            Self::Boolean => "Boolean",
            Self::NarrowInt(_) => "Integer",
            Self::WideInt => "Long",
            Self::SingleFloat => "Float",
            Self::DoubleFloat => "Double",
            Self::Calendar => "XMLGregorianCalendar",
            Self::Enum(_) => "enum",
            Self::Unsupported(name) => name,
        }
    }
}
