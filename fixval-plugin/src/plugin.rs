/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Fixed-value plugin.
//!
//! Attaches an initializer to every generated field whose schema element
//! declares a `fixed` value, so the field's default matches the constraint.

use crate::config::{OPTION_NAME, ParseErrorPolicy, PluginConfig};
use crate::diagnostics::Diagnostics;
use crate::eligibility;
use crate::enums::find_enum_constant;
use crate::installer::{CALENDAR_METHOD, DatatypeFactoryInstaller};
use crate::literal;
use crate::target::TargetKind;
use fixval_core::{ParseError, Result};
use fixval_model::{ClassDecl, EnumDecl, Expr, Outline};
use tracing::debug;

/// Namespace of the plugin's schema customizations.
pub const CUSTOMIZATION_NS: &str = "urn:fixval:fixed-value";

/// Extension invoked by the host compiler after the outline is built.
pub trait Plugin {
    /// Returns the command line option enabling the plugin, without dash.
    fn option_name(&self) -> &'static str;

    /// Returns the usage line shown by the host's help output.
    fn usage(&self) -> &'static str;

    /// Returns the schema customization namespaces the plugin understands.
    fn customization_uris(&self) -> &'static [&'static str] {
        &[]
    }

    /// Runs the plugin over the outline.
    ///
    /// # Returns
    /// `Ok(true)` once the pass completed.
    ///
    /// # Errors
    /// Returns an error if the pass had to stop.
    fn run(&self, outline: &mut Outline, diagnostics: &mut dyn Diagnostics) -> Result<bool>;
}

/// Generates fixed-value initializers.
#[derive(Debug, Clone, Default)]
pub struct FixedValuePlugin {
    config: PluginConfig,
}

impl FixedValuePlugin {
    /// Creates a new plugin with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PluginConfig::default(),
        }
    }

    /// Creates a new plugin with the specified configuration.
    #[must_use]
    pub fn with_config(config: PluginConfig) -> Self {
        Self { config }
    }

    /// Returns the plugin configuration.
    #[must_use]
    pub const fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Resolves and attaches the initializer of one field.
    ///
    /// Unsupported types, unmatched enum constants and installation failures
    /// are reported and leave the field untouched.
    fn process_field(
        &self,
        class: &mut ClassDecl,
        index: usize,
        fixed_value: &str,
        enums: &[EnumDecl],
        installer: &mut DatatypeFactoryInstaller,
        diagnostics: &mut dyn Diagnostics,
    ) -> std::result::Result<(), ParseError> {
        let field_name = class.fields[index].name.clone();
        let kind = TargetKind::of(&class.fields[index].ty);

        let expr = match &kind {
            TargetKind::Text => Expr::lit(fixed_value),
            TargetKind::Boolean => Expr::Bool(literal::parse_boolean(fixed_value)),
            TargetKind::NarrowInt(width) => literal::parse_int(&field_name, *width, fixed_value)?,
            TargetKind::WideInt => literal::parse_long(&field_name, fixed_value)?,
            TargetKind::SingleFloat => literal::parse_float(&field_name, fixed_value)?,
            TargetKind::DoubleFloat => literal::parse_double(&field_name, fixed_value)?,
            TargetKind::Calendar => match installer.install(class) {
                Ok(factory) => {
                    Expr::invoke(factory.into(), CALENDAR_METHOD).arg(Expr::lit(fixed_value))
                }
                Err(err) => {
                    diagnostics.error(
                        &class.name,
                        &field_name,
                        format!("Failed to create code: {err}"),
                    );
                    return Ok(());
                }
            },
            TargetKind::Enum(enum_name) => {
                match find_enum_constant(enum_name, fixed_value, enums) {
                    Some(constant) => constant,
                    None => {
                        diagnostics.warn(
                            &class.name,
                            &field_name,
                            format!(
                                "Could not find member on enum {enum_name} with value: {fixed_value}"
                            ),
                        );
                        return Ok(());
                    }
                }
            }
            TargetKind::Unsupported(type_name) => {
                diagnostics.warn(
                    &class.name,
                    &field_name,
                    format!(
                        "Did not create default value for field {}.{field_name}. Don't know how \
                         to create default value expression for fields of type {type_name}. \
                         Default value of \"{fixed_value}\" specified in schema",
                        class.name
                    ),
                );
                return Ok(());
            }
        };

        diagnostics.info(
            &class.name,
            &field_name,
            format!(
                "Initializing {} variable {}.{field_name} to {expr}",
                kind.label(),
                class.name
            ),
        );
        class.fields[index].init(expr);
        Ok(())
    }
}

impl Plugin for FixedValuePlugin {
    fn option_name(&self) -> &'static str {
        OPTION_NAME
    }

    fn usage(&self) -> &'static str {
        "  -Xfixed-value      : enable fixed value generation for schema elements"
    }

    fn customization_uris(&self) -> &'static [&'static str] {
        &[CUSTOMIZATION_NS]
    }

    fn run(&self, outline: &mut Outline, diagnostics: &mut dyn Diagnostics) -> Result<bool> {
        if !self.config.enabled {
            debug!("fixed value plugin disabled, outline left unchanged");
            return Ok(true);
        }

        let eligible = outline
            .fields()
            .filter(|(_, field)| eligibility::is_eligible(field))
            .count();
        debug!(eligible, "fixed value pass started");

        let mut installer = DatatypeFactoryInstaller::new(self.config.factory_field_name.clone());
        let Outline { classes, enums } = outline;

        for class in classes.iter_mut() {
            for index in 0..class.fields.len() {
                let Some(fixed_value) =
                    eligibility::fixed_value(&class.fields[index]).map(str::to_owned)
                else {
                    continue;
                };

                let processed = self.process_field(
                    class,
                    index,
                    &fixed_value,
                    enums.as_slice(),
                    &mut installer,
                    diagnostics,
                );
                if let Err(err) = processed {
                    match self.config.parse_error_policy {
                        ParseErrorPolicy::Abort => return Err(err.into()),
                        ParseErrorPolicy::SkipField => diagnostics.warn(
                            &class.name,
                            err.field(),
                            format!("Did not create default value: {err}"),
                        ),
                    }
                }
            }
        }

        debug!(
            classes = classes.len(),
            factories = installer.installed_count(),
            "fixed value pass completed"
        );
        Ok(true)
    }
}
