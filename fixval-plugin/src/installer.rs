/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Installation of the shared calendar factory.
//!
//! Calendar values are built from their lexical form by a `DatatypeFactory`.
//! Each class that needs one gets a single `private static final` factory
//! field, assigned in a static initializer block. Construction failures are
//! converted into a fatal error carrying the original cause.

use fixval_core::InstallError;
use fixval_model::{
    ClassDecl, ClassId, Expr, FatalError, Modifiers, StaticFieldDecl, StaticFieldRef, StaticInit,
    TypeRef,
};
use std::collections::HashMap;
use tracing::debug;

/// Type of the shared calendar factory.
pub const FACTORY_TYPE: &str = "DatatypeFactory";

/// Associated function constructing a factory.
pub const FACTORY_CONSTRUCTOR: &str = "new_instance";

/// Failure type of the factory constructor.
pub const FACTORY_ERROR_TYPE: &str = "DatatypeConfigurationException";

/// Message of the fatal error raised when the factory cannot be constructed.
pub const FACTORY_ERROR_MESSAGE: &str = "Unable to initialize DatatypeFactory";

/// Factory method building a calendar from its lexical form.
pub const CALENDAR_METHOD: &str = "new_xml_gregorian_calendar";

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Installs at most one calendar factory field per class.
///
/// Installed fields are memoized by class identity for the lifetime of the
/// installer, which is one pass. A memo entry is only reused while it still
/// names a factory field declared by the class being processed.
#[derive(Debug)]
pub struct DatatypeFactoryInstaller {
    /// Name of the static field to install.
    field_name: String,
    /// Factory fields already resolved in this pass.
    installed: HashMap<ClassId, StaticFieldRef>,
}

impl DatatypeFactoryInstaller {
    /// Creates an installer for fields with the given name.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            installed: HashMap::new(),
        }
    }

    /// Returns the type of the installed field.
    #[must_use]
    pub fn factory_type() -> TypeRef {
        TypeRef::External(FACTORY_TYPE.to_string())
    }

    /// Returns the number of classes with a resolved factory field.
    #[must_use]
    pub fn installed_count(&self) -> usize {
        self.installed.len()
    }

    /// Ensures `class` declares the factory field and returns a reference to it.
    ///
    /// A field installed earlier in this pass, or one already present in the
    /// class with the factory type, is reused.
    ///
    /// # Errors
    /// Returns [`InstallError::InvalidName`] if the configured field name is
    /// not an identifier, and [`InstallError::NameClash`] if the class already
    /// declares an incompatible member with that name.
    pub fn install(&mut self, class: &mut ClassDecl) -> Result<StaticFieldRef, InstallError> {
        if let Some(field_ref) = self.installed.get(&class.id) {
            if field_ref.owner == class.name && class.static_field(&field_ref.name).is_some() {
                return Ok(field_ref.clone());
            }
        }

        if !is_identifier(&self.field_name) {
            return Err(InstallError::InvalidName {
                class: class.name.clone(),
                name: self.field_name.clone(),
            });
        }

        let factory_type = Self::factory_type();
        let compatible = class
            .static_field(&self.field_name)
            .map(|existing| existing.ty == factory_type && existing.modifiers.is_static);
        let field_ref = match compatible {
            Some(true) => StaticFieldRef::new(class.name.clone(), self.field_name.clone()),
            Some(false) => return Err(self.name_clash(class)),
            None if class.has_member(&self.field_name) => {
                return Err(self.name_clash(class));
            }
            None => {
                debug!(
                    class = %class.name,
                    id = %class.id,
                    field = %self.field_name,
                    "installing calendar factory"
                );
                class.add_static(StaticFieldDecl {
                    name: self.field_name.clone(),
                    ty: factory_type,
                    modifiers: Modifiers::PRIVATE_STATIC_FINAL,
                    init: Some(StaticInit {
                        value: Expr::static_invoke(FACTORY_TYPE, FACTORY_CONSTRUCTOR),
                        on_error: Some(FatalError {
                            cause_type: FACTORY_ERROR_TYPE.to_string(),
                            message: FACTORY_ERROR_MESSAGE.to_string(),
                        }),
                    }),
                })
            }
        };

        self.installed.insert(class.id, field_ref.clone());
        Ok(field_ref)
    }

    fn name_clash(&self, class: &ClassDecl) -> InstallError {
        InstallError::NameClash {
            class: class.name.clone(),
            member: self.field_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixval_model::{BuiltinType, FieldDecl};

    fn product() -> ClassDecl {
        ClassDecl::new(ClassId::new(0), "Product")
    }

    #[test]
    fn test_install_adds_single_static_field() {
        let mut class = product();
        let mut installer = DatatypeFactoryInstaller::new("DATATYPE_FACTORY");

        let first = installer.install(&mut class).unwrap();
        let second = installer.install(&mut class).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, StaticFieldRef::new("Product", "DATATYPE_FACTORY"));
        assert_eq!(class.statics.len(), 1);
        assert_eq!(installer.installed_count(), 1);
    }

    #[test]
    fn test_installed_field_shape() {
        let mut class = product();
        let mut installer = DatatypeFactoryInstaller::new("DATATYPE_FACTORY");
        installer.install(&mut class).unwrap();

        let field = class.static_field("DATATYPE_FACTORY").unwrap();
        assert_eq!(field.ty, TypeRef::External("DatatypeFactory".to_string()));
        assert_eq!(field.modifiers, Modifiers::PRIVATE_STATIC_FINAL);

        let init = field.init.as_ref().unwrap();
        assert_eq!(init.value.to_string(), "DatatypeFactory::new_instance()");
        let on_error = init.on_error.as_ref().unwrap();
        assert_eq!(on_error.cause_type, "DatatypeConfigurationException");
        assert_eq!(on_error.message, "Unable to initialize DatatypeFactory");
    }

    #[test]
    fn test_reuses_field_from_previous_pass() {
        let mut class = product();
        DatatypeFactoryInstaller::new("DATATYPE_FACTORY")
            .install(&mut class)
            .unwrap();

        let mut next_pass = DatatypeFactoryInstaller::new("DATATYPE_FACTORY");
        let field_ref = next_pass.install(&mut class).unwrap();

        assert_eq!(field_ref.name, "DATATYPE_FACTORY");
        assert_eq!(class.statics.len(), 1);
    }

    #[test]
    fn test_separate_classes_get_separate_fields() {
        let mut product = product();
        let mut order = ClassDecl::new(ClassId::new(1), "Order");
        let mut installer = DatatypeFactoryInstaller::new("DATATYPE_FACTORY");

        let a = installer.install(&mut product).unwrap();
        let b = installer.install(&mut order).unwrap();

        assert_ne!(a, b);
        assert_eq!(product.statics.len(), 1);
        assert_eq!(order.statics.len(), 1);
        assert_eq!(installer.installed_count(), 2);
    }

    #[test]
    fn test_memo_entry_for_other_class_is_not_reused() {
        let mut order = ClassDecl::new(ClassId::new(0), "Order");
        let mut product = product();
        let mut installer = DatatypeFactoryInstaller::new("DATATYPE_FACTORY");

        let a = installer.install(&mut order).unwrap();
        let b = installer.install(&mut product).unwrap();

        assert_eq!(a, StaticFieldRef::new("Order", "DATATYPE_FACTORY"));
        assert_eq!(b, StaticFieldRef::new("Product", "DATATYPE_FACTORY"));
        assert_eq!(product.statics.len(), 1);
        assert_eq!(installer.install(&mut product).unwrap(), b);
        assert_eq!(product.statics.len(), 1);
    }

    #[test]
    fn test_name_clash_with_instance_field() {
        let mut class = product();
        class.add_field(FieldDecl::new("DATATYPE_FACTORY", BuiltinType::String));
        let mut installer = DatatypeFactoryInstaller::new("DATATYPE_FACTORY");

        let err = installer.install(&mut class).unwrap_err();
        assert_eq!(
            err,
            InstallError::NameClash {
                class: "Product".to_string(),
                member: "DATATYPE_FACTORY".to_string(),
            }
        );
        assert!(class.statics.is_empty());
        assert_eq!(installer.installed_count(), 0);
    }

    #[test]
    fn test_name_clash_with_other_static() {
        let mut class = product();
        class.add_static(StaticFieldDecl {
            name: "DATATYPE_FACTORY".to_string(),
            ty: TypeRef::Boxed(BuiltinType::String),
            modifiers: Modifiers::PRIVATE_STATIC_FINAL,
            init: None,
        });
        let mut installer = DatatypeFactoryInstaller::new("DATATYPE_FACTORY");

        assert!(installer.install(&mut class).is_err());
        assert_eq!(class.statics.len(), 1);
    }

    #[test]
    fn test_invalid_field_name() {
        let mut class = product();
        let mut installer = DatatypeFactoryInstaller::new("1FACTORY");

        assert!(matches!(
            installer.install(&mut class),
            Err(InstallError::InvalidName { .. })
        ));
        assert!(class.statics.is_empty());
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("DATATYPE_FACTORY"));
        assert!(is_identifier("_dtf"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("data-type"));
    }
}
