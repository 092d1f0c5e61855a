/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Declared types of generated fields.
//!
//! - [`BuiltinType`]: value types the generator maps schema simple types to
//! - [`TypeRef`]: the declared type of a field, either a builtin (primitive or
//!   boxed flavour), a generated enum or class, or an opaque external type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Builtin value type of a generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuiltinType {
    /// Text.
    String,
    /// Boolean.
    Boolean,
    /// 8-bit signed integer.
    Byte,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// Single-precision float.
    Float,
    /// Double-precision float.
    Double,
    /// Calendar value for the date/time family of schema types.
    XmlCalendar,
    /// Arbitrary-precision decimal.
    Decimal,
    /// Arbitrary-precision integer.
    BigInteger,
    /// Duration.
    Duration,
    /// Qualified name.
    QName,
    /// Binary content.
    Bytes,
}

impl BuiltinType {
    /// Returns the name of the nullable (boxed) flavour of this type.
    #[must_use]
    pub const fn boxed_name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::XmlCalendar => "XMLGregorianCalendar",
            Self::Decimal => "BigDecimal",
            Self::BigInteger => "BigInteger",
            Self::Duration => "Duration",
            Self::QName => "QName",
            Self::Bytes => "Bytes",
        }
    }

    /// Returns the name of the primitive flavour, if this type has one.
    #[must_use]
    pub const fn primitive_name(&self) -> Option<&'static str> {
        match self {
            Self::Boolean => Some("boolean"),
            Self::Byte => Some("byte"),
            Self::Short => Some("short"),
            Self::Int => Some("int"),
            Self::Long => Some("long"),
            Self::Float => Some("float"),
            Self::Double => Some("double"),
            _ => None,
        }
    }

    /// Maps an XML Schema builtin simple type name to its generated type.
    ///
    /// An optional `xs:`/`xsd:` prefix is ignored. Names without a dedicated
    /// mapping fall back to [`BuiltinType::String`].
    ///
    /// # Arguments
    /// * `name` - The schema type name, e.g. `xs:int` or `dateTime`
    #[must_use]
    pub fn from_schema_type(name: &str) -> Self {
        let local = name.rsplit(':').next().unwrap_or(name);
        match local {
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "short" | "unsignedByte" => Self::Short,
            "int" | "unsignedShort" => Self::Int,
            "long" | "unsignedInt" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "dateTime" | "date" | "time" | "gYear" | "gYearMonth" | "gMonth" | "gMonthDay"
            | "gDay" => Self::XmlCalendar,
            "decimal" => Self::Decimal,
            "integer" | "nonNegativeInteger" | "nonPositiveInteger" | "positiveInteger"
            | "negativeInteger" | "unsignedLong" => Self::BigInteger,
            "duration" => Self::Duration,
            "QName" => Self::QName,
            "base64Binary" | "hexBinary" => Self::Bytes,
            _ => Self::String,
        }
    }
}

/// Declared type of a generated field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    /// Non-nullable primitive flavour of a builtin.
    Primitive(BuiltinType),
    /// Nullable flavour of a builtin.
    Boxed(BuiltinType),
    /// Generated enumeration, by name.
    Enum(String),
    /// Generated class, by name.
    Class(String),
    /// Any other type, by fully qualified name.
    External(String),
}

impl TypeRef {
    /// Returns the builtin type behind this reference, in either flavour.
    #[must_use]
    pub const fn builtin(&self) -> Option<BuiltinType> {
        match self {
            Self::Primitive(builtin) | Self::Boxed(builtin) => Some(*builtin),
            _ => None,
        }
    }

    /// Returns the type's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(builtin) => builtin.primitive_name().unwrap_or(builtin.boxed_name()),
            Self::Boxed(builtin) => builtin.boxed_name(),
            Self::Enum(name) | Self::Class(name) | Self::External(name) => name,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<BuiltinType> for TypeRef {
    fn from(builtin: BuiltinType) -> Self {
        Self::Boxed(builtin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_schema_type() {
        assert_eq!(BuiltinType::from_schema_type("xs:int"), BuiltinType::Int);
        assert_eq!(BuiltinType::from_schema_type("xsd:long"), BuiltinType::Long);
        assert_eq!(
            BuiltinType::from_schema_type("dateTime"),
            BuiltinType::XmlCalendar
        );
        assert_eq!(
            BuiltinType::from_schema_type("xs:unsignedByte"),
            BuiltinType::Short
        );
        assert_eq!(
            BuiltinType::from_schema_type("xs:integer"),
            BuiltinType::BigInteger
        );
        assert_eq!(
            BuiltinType::from_schema_type("xs:token"),
            BuiltinType::String
        );
    }

    #[test]
    fn test_builtin_of_either_flavour() {
        assert_eq!(
            TypeRef::Primitive(BuiltinType::Int).builtin(),
            Some(BuiltinType::Int)
        );
        assert_eq!(
            TypeRef::Boxed(BuiltinType::Long).builtin(),
            Some(BuiltinType::Long)
        );
        assert_eq!(TypeRef::Enum("UnitOfMeasurement".to_string()).builtin(), None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(TypeRef::Primitive(BuiltinType::Int).name(), "int");
        assert_eq!(TypeRef::Boxed(BuiltinType::Int).name(), "Integer");
        assert_eq!(
            TypeRef::Boxed(BuiltinType::XmlCalendar).to_string(),
            "XMLGregorianCalendar"
        );
        assert_eq!(
            TypeRef::External("url::Url".to_string()).to_string(),
            "url::Url"
        );
    }
}
