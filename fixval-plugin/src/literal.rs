/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Parsing of lexical fixed values into literal expressions.
//!
//! The values are not checked against the schema's simple type first; schema
//! validity is enforced upstream. Anything the parsers reject surfaces as a
//! [`ParseError`].

use crate::target::IntWidth;
use fixval_core::ParseError;
use fixval_model::Expr;
use std::fmt::Display;

/// Parses a boolean fixed value.
///
/// `true` in any letter case yields `true`; every other string yields `false`.
#[must_use]
pub fn parse_boolean(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn invalid_integer(field: &str, target: &str, value: &str, err: impl Display) -> ParseError {
    ParseError::InvalidInteger {
        field: field.to_string(),
        target: target.to_string(),
        value: value.to_string(),
        reason: err.to_string(),
    }
}

fn invalid_float(field: &str, target: &str, value: &str, err: impl Display) -> ParseError {
    ParseError::InvalidFloat {
        field: field.to_string(),
        target: target.to_string(),
        value: value.to_string(),
        reason: err.to_string(),
    }
}

/// Parses a base-10 integer that must fit the field's declared width.
///
/// Byte and short values are range-checked at their own width, not as a
/// 32-bit int, so `"300"` on a byte field is an error rather than a literal
/// that the field cannot hold.
///
/// # Errors
/// Returns [`ParseError::InvalidInteger`] if the value is not a base-10
/// integer or does not fit the width.
pub fn parse_int(field: &str, width: IntWidth, value: &str) -> Result<Expr, ParseError> {
    let parsed = match width {
        IntWidth::I8 => value
            .parse::<i8>()
            .map(i32::from)
            .map_err(|e| invalid_integer(field, "Byte", value, e)),
        IntWidth::I16 => value
            .parse::<i16>()
            .map(i32::from)
            .map_err(|e| invalid_integer(field, "Short", value, e)),
        IntWidth::I32 => value
            .parse::<i32>()
            .map_err(|e| invalid_integer(field, "Integer", value, e)),
    };
    parsed.map(Expr::Int)
}

/// Parses a base-10 64-bit integer.
///
/// # Errors
/// Returns [`ParseError::InvalidInteger`] if the value is not a base-10
/// integer in range.
pub fn parse_long(field: &str, value: &str) -> Result<Expr, ParseError> {
    value
        .parse::<i64>()
        .map(Expr::Long)
        .map_err(|e| invalid_integer(field, "Long", value, e))
}

/// Parses a single-precision float. Surrounding whitespace is ignored.
///
/// # Errors
/// Returns [`ParseError::InvalidFloat`] if the value is not a float literal.
pub fn parse_float(field: &str, value: &str) -> Result<Expr, ParseError> {
    value
        .trim()
        .parse::<f32>()
        .map(Expr::Float)
        .map_err(|e| invalid_float(field, "Float", value, e))
}

/// Parses a double-precision float. Surrounding whitespace is ignored.
///
/// # Errors
/// Returns [`ParseError::InvalidFloat`] if the value is not a float literal.
pub fn parse_double(field: &str, value: &str) -> Result<Expr, ParseError> {
    value
        .trim()
        .parse::<f64>()
        .map(Expr::Double)
        .map_err(|e| invalid_float(field, "Double", value, e))
}
