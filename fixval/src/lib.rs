/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixval
//!
//! Fixed-value initializer generation for XML Schema compilers.
//!
//! When a schema element declares `fixed="..."`, the field generated for it
//! should start out holding that value. fixval runs over the compiler's
//! in-memory code model after classes are built and attaches matching
//! initializers: literals for text, boolean and numeric fields, enum constant
//! references for enumerations, and calls on a shared per-class factory for
//! calendar values.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixval::prelude::*;
//!
//! let mut outline = Outline::new();
//! let product = outline.add_class("Product");
//! // ... host populates fields and enums ...
//!
//! let plugin = FixedValuePlugin::new();
//! plugin.run(&mut outline, &mut TracingDiagnostics)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Error definitions
//! - [`model`]: Schema descriptors and the code model
//! - [`plugin`]: The fixed-value plugin

pub mod core {
    //! Error definitions.
    pub use fixval_core::*;
}

pub mod model {
    //! Schema descriptors and the code model.
    pub use fixval_model::*;
}

pub mod plugin {
    //! The fixed-value plugin.
    pub use fixval_plugin::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Errors
    pub use fixval_core::{ConfigError, FixValError, InstallError, ParseError, Result};

    // Code model
    pub use fixval_model::{
        BuiltinType, ClassDecl, ClassId, ElementDecl, EnumConstant, EnumDecl, Expr, FieldDecl,
        MaxOccurs, Outline, Particle, SchemaComponent, TypeRef,
    };

    // Plugin
    pub use fixval_plugin::{
        Diagnostics, FixedValuePlugin, ParseErrorPolicy, Plugin, PluginConfig,
        RecordingDiagnostics, Severity, TracingDiagnostics,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let _outline = Outline::new();
        let _plugin = FixedValuePlugin::new();
        let _diagnostics = RecordingDiagnostics::new();
    }

    #[test]
    fn test_fixed_unit_of_measurement() {
        let mut outline = Outline::new();
        outline.add_enum(
            EnumDecl::new("UnitOfMeasurement")
                .with_constant(EnumConstant::new("KG", "KG"))
                .with_constant(EnumConstant::new("LBS", "LBS")),
        );
        let product = outline.add_class("Product");
        if let Some(class) = outline.class_mut(product) {
            class.add_field(
                FieldDecl::new("unit", TypeRef::Enum("UnitOfMeasurement".to_string()))
                    .with_schema_component(Particle::element(
                        ElementDecl::new("unit")
                            .with_type_name("UnitOfMeasurement")
                            .with_fixed_value("LBS"),
                    )),
            );
        }

        let mut diagnostics = RecordingDiagnostics::new();
        let completed = FixedValuePlugin::new()
            .run(&mut outline, &mut diagnostics)
            .unwrap();

        assert!(completed);
        let init = outline
            .class_by_name("Product")
            .and_then(|c| c.field("unit"))
            .and_then(|f| f.init.as_ref())
            .map(ToString::to_string);
        assert_eq!(init.as_deref(), Some("UnitOfMeasurement::LBS"));
        assert_eq!(diagnostics.count(Severity::Warn), 0);
    }

    #[test]
    fn test_fields_typed_from_schema_names() {
        let mut outline = Outline::new();
        let order = outline.add_class("Order");
        if let Some(class) = outline.class_mut(order) {
            for (name, schema_type, fixed) in [
                ("quantity", "xs:unsignedByte", "200"),
                ("placed", "xs:date", "2024-01-01"),
                ("channel", "xs:token", "web"),
            ] {
                let element = ElementDecl::new(name)
                    .with_type_name(schema_type)
                    .with_fixed_value(fixed);
                class.add_field(
                    FieldDecl::new(name, BuiltinType::from_schema_type(schema_type))
                        .with_schema_component(
                            Particle::element(element).with_occurs(0, MaxOccurs::Unbounded),
                        ),
                );
            }
        }

        let mut diagnostics = RecordingDiagnostics::new();
        FixedValuePlugin::new()
            .run(&mut outline, &mut diagnostics)
            .unwrap();

        let init = |field: &str| {
            outline
                .class(order)
                .and_then(|c| c.field(field))
                .and_then(|f| f.init.as_ref())
                .map(ToString::to_string)
        };
        assert_eq!(init("quantity").as_deref(), Some("200"));
        assert_eq!(
            init("placed").as_deref(),
            Some("Order::DATATYPE_FACTORY.new_xml_gregorian_calendar(\"2024-01-01\")")
        );
        assert_eq!(init("channel").as_deref(), Some("\"web\""));
        assert_eq!(diagnostics.count(Severity::Info), 3);
    }
}
