/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixval Model
//!
//! In-memory code model shared between a schema compiler and its extensions.
//!
//! This crate provides:
//! - **Schema descriptors**: Particles, terms, and element declarations
//! - **Type references**: Builtin, enum, class, and external field types
//! - **Expressions**: Literals, constant references, and calls
//! - **Outline**: Generated classes, fields, static members, and enums

pub mod expr;
pub mod outline;
pub mod schema;
pub mod types;

pub use expr::{Expr, StaticFieldRef};
pub use outline::{
    ClassDecl, ClassId, EnumConstant, EnumDecl, FatalError, FieldDecl, Modifiers, Outline,
    StaticFieldDecl, StaticInit,
};
pub use schema::{
    AttributeUse, ElementDecl, MaxOccurs, ModelGroupKind, Particle, SchemaComponent, Term,
    Wildcard,
};
pub use types::{BuiltinType, TypeRef};
