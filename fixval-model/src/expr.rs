/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Expressions of the code model.
//!
//! An [`Expr`] is what the generator attaches to a field as its initializer.
//! Its [`Display`](std::fmt::Display) form is a source-like rendering used in
//! diagnostics and by tests comparing initializers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a static field of a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticFieldRef {
    /// Name of the declaring class.
    pub owner: String,
    /// Name of the static field.
    pub name: String,
}

impl StaticFieldRef {
    /// Creates a new static field reference.
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for StaticFieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.owner, self.name)
    }
}

/// Code model expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// String literal holding the raw, unescaped text.
    Str(String),
    /// Boolean literal.
    Bool(bool),
    /// 32-bit integer literal.
    Int(i32),
    /// 64-bit integer literal.
    Long(i64),
    /// Single-precision float literal.
    Float(f32),
    /// Double-precision float literal.
    Double(f64),
    /// Reference to an enum constant.
    EnumConstant {
        /// Name of the enum type.
        enum_name: String,
        /// Name of the constant.
        constant: String,
    },
    /// Reference to a static field.
    StaticField(StaticFieldRef),
    /// Method call on a receiver expression.
    Invoke {
        /// Receiver of the call.
        target: Box<Expr>,
        /// Method name.
        method: String,
        /// Call arguments.
        args: Vec<Expr>,
    },
    /// Associated function call on a type.
    StaticInvoke {
        /// Name of the type.
        owner: String,
        /// Function name.
        method: String,
        /// Call arguments.
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Creates a string literal.
    #[must_use]
    pub fn lit(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Creates a method call on `target` with no arguments.
    #[must_use]
    pub fn invoke(target: Self, method: impl Into<String>) -> Self {
        Self::Invoke {
            target: Box::new(target),
            method: method.into(),
            args: Vec::new(),
        }
    }

    /// Creates an associated function call on `owner` with no arguments.
    #[must_use]
    pub fn static_invoke(owner: impl Into<String>, method: impl Into<String>) -> Self {
        Self::StaticInvoke {
            owner: owner.into(),
            method: method.into(),
            args: Vec::new(),
        }
    }

    /// Appends an argument to a call expression.
    ///
    /// Has no effect on expressions that are not calls.
    #[must_use]
    pub fn arg(mut self, arg: Self) -> Self {
        if let Self::Invoke { args, .. } | Self::StaticInvoke { args, .. } = &mut self {
            args.push(arg);
        }
        self
    }
}

impl From<StaticFieldRef> for Expr {
    fn from(field: StaticFieldRef) -> Self {
        Self::StaticField(field)
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expr]) -> fmt::Result {
    f.write_str("(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str(")")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => write!(f, "{value:?}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Long(value) => write!(f, "{value}_i64"),
            Self::Float(value) if value.is_nan() => f.write_str("f32::NAN"),
            Self::Float(value) if value.is_infinite() => {
                let sign = if value.is_sign_negative() { "NEG_" } else { "" };
                write!(f, "f32::{sign}INFINITY")
            }
            Self::Float(value) => write!(f, "{value:?}_f32"),
            Self::Double(value) if value.is_nan() => f.write_str("f64::NAN"),
            Self::Double(value) if value.is_infinite() => {
                let sign = if value.is_sign_negative() { "NEG_" } else { "" };
                write!(f, "f64::{sign}INFINITY")
            }
            Self::Double(value) => write!(f, "{value:?}_f64"),
            Self::EnumConstant {
                enum_name,
                constant,
            } => write!(f, "{enum_name}::{constant}"),
            Self::StaticField(field) => write!(f, "{field}"),
            Self::Invoke {
                target,
                method,
                args,
            } => {
                write!(f, "{target}.{method}")?;
                write_args(f, args)
            }
            Self::StaticInvoke {
                owner,
                method,
                args,
            } => {
                write!(f, "{owner}::{method}")?;
                write_args(f, args)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display() {
        assert_eq!(Expr::lit("LBS").to_string(), "\"LBS\"");
        assert_eq!(Expr::lit("say \"hi\"").to_string(), "\"say \\\"hi\\\"\"");
        assert_eq!(Expr::Bool(true).to_string(), "true");
        assert_eq!(Expr::Int(-42).to_string(), "-42");
        assert_eq!(Expr::Long(9_000_000_000).to_string(), "9000000000_i64");
        assert_eq!(Expr::Float(1.5).to_string(), "1.5_f32");
        assert_eq!(Expr::Double(2.0).to_string(), "2.0_f64");
    }

    #[test]
    fn test_non_finite_display() {
        assert_eq!(Expr::Float(f32::INFINITY).to_string(), "f32::INFINITY");
        assert_eq!(Expr::Double(f64::NEG_INFINITY).to_string(), "f64::NEG_INFINITY");
        assert_eq!(Expr::Double(f64::NAN).to_string(), "f64::NAN");
    }

    #[test]
    fn test_enum_constant_display() {
        let expr = Expr::EnumConstant {
            enum_name: "UnitOfMeasurement".to_string(),
            constant: "LBS".to_string(),
        };
        assert_eq!(expr.to_string(), "UnitOfMeasurement::LBS");
    }

    #[test]
    fn test_invoke_display() {
        let factory = StaticFieldRef::new("Product", "DATATYPE_FACTORY");
        let expr = Expr::invoke(factory.into(), "new_xml_gregorian_calendar")
            .arg(Expr::lit("2024-01-01"));
        assert_eq!(
            expr.to_string(),
            "Product::DATATYPE_FACTORY.new_xml_gregorian_calendar(\"2024-01-01\")"
        );

        let ctor = Expr::static_invoke("DatatypeFactory", "new_instance");
        assert_eq!(ctor.to_string(), "DatatypeFactory::new_instance()");
    }

    #[test]
    fn test_arg_ignored_on_literal() {
        assert_eq!(Expr::Int(1).arg(Expr::Int(2)), Expr::Int(1));
    }
}
