/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! In-memory outline of the classes and enums generated in one pass.
//!
//! - [`Outline`]: all generated classes and enums
//! - [`ClassDecl`]: a generated class with instance and static fields
//! - [`FieldDecl`]: an instance field and its optional initializer
//! - [`StaticFieldDecl`]: a class-level member with its static initializer
//! - [`EnumDecl`]: a generated enumeration and its constants

use crate::expr::{Expr, StaticFieldRef};
use crate::schema::SchemaComponent;
use crate::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a class within an [`Outline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(u32);

impl ClassId {
    /// Creates a class identifier.
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Member modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Visible only inside the declaring class.
    pub private: bool,
    /// Class-level rather than per-instance.
    pub is_static: bool,
    /// Assigned exactly once.
    pub is_final: bool,
}

impl Modifiers {
    /// `private static final`.
    pub const PRIVATE_STATIC_FINAL: Self = Self {
        private: true,
        is_static: true,
        is_final: true,
    };
}

/// Unrecoverable error raised when a static initializer fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatalError {
    /// Type of the construction failure being converted.
    pub cause_type: String,
    /// Descriptive message of the fatal error; the original cause is chained.
    pub message: String,
}

/// Static initializer block assigning a static field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticInit {
    /// Fallible construction expression assigned to the field.
    pub value: Expr,
    /// Conversion of a construction failure into a fatal error.
    pub on_error: Option<FatalError>,
}

/// Static member of a generated class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticFieldDecl {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Modifiers.
    pub modifiers: Modifiers,
    /// Static initializer block, if any.
    pub init: Option<StaticInit>,
}

/// Instance field of a generated class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Initializer expression.
    pub init: Option<Expr>,
    /// Schema component the field was generated from.
    pub schema_component: Option<SchemaComponent>,
}

impl FieldDecl {
    /// Creates a new field without initializer or schema back-reference.
    ///
    /// # Arguments
    /// * `name` - The field name
    /// * `ty` - The declared type
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            init: None,
            schema_component: None,
        }
    }

    /// Sets the originating schema component.
    #[must_use]
    pub fn with_schema_component(mut self, component: impl Into<SchemaComponent>) -> Self {
        self.schema_component = Some(component.into());
        self
    }

    /// Sets the field's initializer, replacing any previous one.
    pub fn init(&mut self, expr: Expr) {
        self.init = Some(expr);
    }
}

/// Generated class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Identity within the outline.
    pub id: ClassId,
    /// Class name.
    pub name: String,
    /// Instance fields in declaration order.
    pub fields: Vec<FieldDecl>,
    /// Static members in declaration order.
    pub statics: Vec<StaticFieldDecl>,
}

impl ClassDecl {
    /// Creates an empty class.
    #[must_use]
    pub fn new(id: ClassId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            fields: Vec::new(),
            statics: Vec::new(),
        }
    }

    /// Appends an instance field.
    pub fn add_field(&mut self, field: FieldDecl) {
        self.fields.push(field);
    }

    /// Gets an instance field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Gets a static member by name.
    #[must_use]
    pub fn static_field(&self, name: &str) -> Option<&StaticFieldDecl> {
        self.statics.iter().find(|f| f.name == name)
    }

    /// Appends a static member and returns a reference usable in expressions.
    pub fn add_static(&mut self, field: StaticFieldDecl) -> StaticFieldRef {
        let field_ref = StaticFieldRef::new(self.name.clone(), field.name.clone());
        self.statics.push(field);
        field_ref
    }

    /// Returns true if the class declares any member with the given name.
    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        self.field(name).is_some() || self.static_field(name).is_some()
    }
}

/// Constant of a generated enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConstant {
    /// Constant name.
    pub name: String,
    /// Lexical value the constant was defined from.
    pub lexical_value: String,
}

impl EnumConstant {
    /// Creates a new enum constant.
    #[must_use]
    pub fn new(name: impl Into<String>, lexical_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lexical_value: lexical_value.into(),
        }
    }
}

/// Generated enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDecl {
    /// Enum name.
    pub name: String,
    /// Constants in declaration order.
    pub constants: Vec<EnumConstant>,
}

impl EnumDecl {
    /// Creates an enum with no constants.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constants: Vec::new(),
        }
    }

    /// Appends a constant.
    #[must_use]
    pub fn with_constant(mut self, constant: EnumConstant) -> Self {
        self.constants.push(constant);
        self
    }

    /// Returns an expression referencing one of this enum's constants.
    #[must_use]
    pub fn constant_ref(&self, constant: &EnumConstant) -> Expr {
        Expr::EnumConstant {
            enum_name: self.name.clone(),
            constant: constant.name.clone(),
        }
    }
}

/// Classes and enums generated in one compilation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Generated classes.
    pub classes: Vec<ClassDecl>,
    /// Generated enumerations.
    pub enums: Vec<EnumDecl>,
}

impl Outline {
    /// Creates an empty outline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty class and returns its identity.
    ///
    /// The new identity is one past the highest identity in the outline, so it
    /// stays unique after classes are removed from [`Outline::classes`].
    pub fn add_class(&mut self, name: impl Into<String>) -> ClassId {
        let next = self
            .classes
            .iter()
            .map(|c| c.id.value().saturating_add(1))
            .max()
            .unwrap_or(0);
        let id = ClassId::new(next);
        self.classes.push(ClassDecl::new(id, name));
        id
    }

    /// Adds an enumeration.
    pub fn add_enum(&mut self, decl: EnumDecl) {
        self.enums.push(decl);
    }

    /// Gets a class by identity.
    #[must_use]
    pub fn class(&self, id: ClassId) -> Option<&ClassDecl> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// Gets a class by identity, mutably.
    #[must_use]
    pub fn class_mut(&mut self, id: ClassId) -> Option<&mut ClassDecl> {
        self.classes.iter_mut().find(|c| c.id == id)
    }

    /// Gets a class by name.
    #[must_use]
    pub fn class_by_name(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Returns an iterator over every instance field of every class.
    pub fn fields(&self) -> impl Iterator<Item = (&ClassDecl, &FieldDecl)> {
        self.classes
            .iter()
            .flat_map(|c| c.fields.iter().map(move |f| (c, f)))
    }
}
