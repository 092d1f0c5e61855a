/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Lookup of enum constants by lexical value.

use fixval_model::{EnumDecl, Expr};

/// Finds the constant of `enum_name` whose lexical value equals `lexical_value`.
///
/// The comparison is exact and case-sensitive. Constants are searched in
/// catalog order, so if several share the lexical value the first one wins.
///
/// # Arguments
/// * `enum_name` - Name of the field's enum type
/// * `lexical_value` - The fixed value declared in the schema
/// * `enums` - Every enum generated in this pass
///
/// # Returns
/// An expression referencing the matching constant, or `None` if no constant
/// matches.
#[must_use]
pub fn find_enum_constant(enum_name: &str, lexical_value: &str, enums: &[EnumDecl]) -> Option<Expr> {
    enums
        .iter()
        .filter(|e| e.name == enum_name)
        .flat_map(|e| e.constants.iter().map(move |c| (e, c)))
        .find(|(_, c)| c.lexical_value == lexical_value)
        .map(|(e, c)| e.constant_ref(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixval_model::EnumConstant;

    fn catalog() -> Vec<EnumDecl> {
        vec![
            EnumDecl::new("Currency").with_constant(EnumConstant::new("LBS", "LBS")),
            EnumDecl::new("UnitOfMeasurement")
                .with_constant(EnumConstant::new("KG", "KG"))
                .with_constant(EnumConstant::new("LBS", "LBS"))
                .with_constant(EnumConstant::new("POUNDS", "LBS"))
                .with_constant(EnumConstant::new("METRIC_TON", "t")),
        ]
    }

    #[test]
    fn test_finds_matching_constant() {
        let expr = find_enum_constant("UnitOfMeasurement", "LBS", &catalog()).unwrap();
        assert_eq!(expr.to_string(), "UnitOfMeasurement::LBS");
    }

    #[test]
    fn test_lexical_value_differs_from_constant_name() {
        let expr = find_enum_constant("UnitOfMeasurement", "t", &catalog()).unwrap();
        assert_eq!(expr.to_string(), "UnitOfMeasurement::METRIC_TON");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(find_enum_constant("UnitOfMeasurement", "lbs", &catalog()).is_none());
        assert!(find_enum_constant("UnitOfMeasurement", "T", &catalog()).is_none());
    }

    #[test]
    fn test_only_searches_the_field_enum() {
        assert!(find_enum_constant("UnitOfMeasurement", "USD", &catalog()).is_none());
        assert!(find_enum_constant("Weight", "LBS", &catalog()).is_none());
        let expr = find_enum_constant("Currency", "LBS", &catalog()).unwrap();
        assert_eq!(expr.to_string(), "Currency::LBS");
    }

    #[test]
    fn test_duplicate_lexical_values_pick_first() {
        let expr = find_enum_constant("UnitOfMeasurement", "LBS", &catalog()).unwrap();
        assert_eq!(
            expr,
            Expr::EnumConstant {
                enum_name: "UnitOfMeasurement".to_string(),
                constant: "LBS".to_string(),
            }
        );
    }
}
