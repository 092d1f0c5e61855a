/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Selection of fields that carry a fixed value.

use fixval_model::{FieldDecl, SchemaComponent};

/// Returns the fixed value of the element a field was generated from.
///
/// Returns `None` unless the field originates from a particle whose term is an
/// element declaration with a `fixed` constraint. Attributes, wildcards and
/// model group references never qualify.
#[must_use]
pub fn fixed_value(field: &FieldDecl) -> Option<&str> {
    field
        .schema_component
        .as_ref()
        .and_then(SchemaComponent::as_particle)?
        .term
        .as_element_decl()?
        .fixed_value
        .as_deref()
}

/// Returns true if the field should receive a fixed-value initializer.
#[must_use]
pub fn is_eligible(field: &FieldDecl) -> bool {
    fixed_value(field).is_some()
}
