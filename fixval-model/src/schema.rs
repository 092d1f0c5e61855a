/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema component descriptors.
//!
//! Read-only metadata the host attaches to every generated field, pointing
//! back at the schema component the field was derived from:
//! - [`SchemaComponent`]: particle, attribute use, or model group reference
//! - [`Particle`]: an occurrence of a [`Term`] within a content model
//! - [`ElementDecl`]: an element declaration, with its optional fixed value

use serde::{Deserialize, Serialize};

/// Upper bound of a particle's occurrence range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaxOccurs {
    /// At most the given number of occurrences.
    Bounded(u32),
    /// `maxOccurs="unbounded"`.
    Unbounded,
}

impl Default for MaxOccurs {
    fn default() -> Self {
        Self::Bounded(1)
    }
}

/// Compositor of a model group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelGroupKind {
    /// `xs:sequence`
    Sequence,
    /// `xs:choice`
    Choice,
    /// `xs:all`
    All,
}

/// Element declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDecl {
    /// Local name of the element.
    pub name: String,
    /// Name of the element's type, if named.
    pub type_name: Option<String>,
    /// Lexical value of the `fixed` constraint.
    ///
    /// `None` means no fixed value. `Some("")` is a fixed empty value.
    pub fixed_value: Option<String>,
    /// Lexical value of the `default` constraint.
    pub default_value: Option<String>,
}

impl ElementDecl {
    /// Creates a new element declaration without value constraints.
    ///
    /// # Arguments
    /// * `name` - The element's local name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            fixed_value: None,
            default_value: None,
        }
    }

    /// Sets the element's type name.
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Sets the `fixed` value constraint.
    #[must_use]
    pub fn with_fixed_value(mut self, value: impl Into<String>) -> Self {
        self.fixed_value = Some(value.into());
        self
    }

    /// Sets the `default` value constraint.
    #[must_use]
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// Wildcard term (`xs:any`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wildcard {
    /// Namespace constraint, e.g. `##any` or `##other`.
    pub namespace: String,
}

/// Term of a particle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// Element declaration.
    Element(ElementDecl),
    /// Wildcard.
    Wildcard(Wildcard),
    /// Model group.
    ModelGroup(ModelGroupKind),
}

impl Term {
    /// Returns the element declaration if this term is one.
    #[must_use]
    pub fn as_element_decl(&self) -> Option<&ElementDecl> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// Occurrence of a term within a content model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particle {
    /// Minimum number of occurrences.
    pub min_occurs: u32,
    /// Maximum number of occurrences.
    pub max_occurs: MaxOccurs,
    /// The particle's term.
    pub term: Term,
}

impl Particle {
    /// Creates a particle occurring exactly once.
    #[must_use]
    pub fn new(term: Term) -> Self {
        Self {
            min_occurs: 1,
            max_occurs: MaxOccurs::default(),
            term,
        }
    }

    /// Creates a particle wrapping an element declaration.
    #[must_use]
    pub fn element(element: ElementDecl) -> Self {
        Self::new(Term::Element(element))
    }

    /// Sets the occurrence range.
    #[must_use]
    pub const fn with_occurs(mut self, min_occurs: u32, max_occurs: MaxOccurs) -> Self {
        self.min_occurs = min_occurs;
        self.max_occurs = max_occurs;
        self
    }
}

/// Attribute use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeUse {
    /// Attribute name.
    pub name: String,
    /// Whether the attribute is required.
    pub required: bool,
    /// Lexical value of the `fixed` constraint.
    pub fixed_value: Option<String>,
}

/// Schema component a generated field originates from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaComponent {
    /// Particle in a content model.
    Particle(Particle),
    /// Attribute use.
    Attribute(AttributeUse),
    /// Reference to a named model group.
    ModelGroupRef(String),
}

impl SchemaComponent {
    /// Returns the particle if this component is one.
    #[must_use]
    pub fn as_particle(&self) -> Option<&Particle> {
        match self {
            Self::Particle(particle) => Some(particle),
            _ => None,
        }
    }
}

impl From<Particle> for SchemaComponent {
    fn from(particle: Particle) -> Self {
        Self::Particle(particle)
    }
}

impl From<AttributeUse> for SchemaComponent {
    fn from(attribute: AttributeUse) -> Self {
        Self::Attribute(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_decl_builder() {
        let element = ElementDecl::new("unit")
            .with_type_name("UnitOfMeasurement")
            .with_fixed_value("LBS");
        assert_eq!(element.name, "unit");
        assert_eq!(element.fixed_value.as_deref(), Some("LBS"));
        assert_eq!(element.default_value, None);
    }

    #[test]
    fn test_empty_fixed_value_is_present() {
        let element = ElementDecl::new("note").with_fixed_value("");
        assert_eq!(element.fixed_value.as_deref(), Some(""));
    }

    #[test]
    fn test_term_as_element_decl() {
        let term = Term::Element(ElementDecl::new("sku"));
        assert_eq!(term.as_element_decl().map(|e| e.name.as_str()), Some("sku"));

        let wildcard = Term::Wildcard(Wildcard {
            namespace: "##any".to_string(),
        });
        assert!(wildcard.as_element_decl().is_none());
    }

    #[test]
    fn test_particle_defaults() {
        let particle = Particle::element(ElementDecl::new("sku"));
        assert_eq!(particle.min_occurs, 1);
        assert_eq!(particle.max_occurs, MaxOccurs::Bounded(1));

        let repeated = particle.with_occurs(0, MaxOccurs::Unbounded);
        assert_eq!(repeated.max_occurs, MaxOccurs::Unbounded);
    }

    #[test]
    fn test_schema_component_as_particle() {
        let component: SchemaComponent = Particle::element(ElementDecl::new("sku")).into();
        assert!(component.as_particle().is_some());

        let attribute: SchemaComponent = AttributeUse {
            name: "version".to_string(),
            required: false,
            fixed_value: Some("1.0".to_string()),
        }
        .into();
        assert!(attribute.as_particle().is_none());
    }
}
