//! Runs the fixed-value plugin over a hand-built product outline.
//!
//! Set `RUST_LOG=debug` to also see the pass summary.
use fixval::prelude::*;
use tracing::info;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn fixed(name: &str, schema_type: &str, value: &str) -> FieldDecl {
    FieldDecl::new(name, BuiltinType::from_schema_type(schema_type)).with_schema_component(
        Particle::element(
            ElementDecl::new(name)
                .with_type_name(schema_type)
                .with_fixed_value(value),
        ),
    )
}

fn build_outline() -> Outline {
    let mut outline = Outline::new();
    outline.add_enum(
        EnumDecl::new("UnitOfMeasurement")
            .with_constant(EnumConstant::new("KG", "KG"))
            .with_constant(EnumConstant::new("LBS", "LBS")),
    );

    let product = outline.add_class("Product");
    if let Some(class) = outline.class_mut(product) {
        class.add_field(fixed("sku", "xs:string", "SKU-0001"));
        class.add_field(
            FieldDecl::new("unit", TypeRef::Enum("UnitOfMeasurement".to_string()))
                .with_schema_component(Particle::element(
                    ElementDecl::new("unit")
                        .with_type_name("UnitOfMeasurement")
                        .with_fixed_value("LBS"),
                )),
        );
        class.add_field(fixed("quantity", "xs:int", "12"));
        class.add_field(fixed("taxable", "xs:boolean", "true"));
        class.add_field(fixed("listed", "xs:date", "2024-01-01"));
        class.add_field(fixed("discontinued", "xs:dateTime", "2030-12-31T00:00:00Z"));
        class.add_field(fixed("price", "xs:decimal", "19.99"));
        class.add_field(
            FieldDecl::new("tags", BuiltinType::from_schema_type("xs:token")).with_schema_component(
                Particle::element(ElementDecl::new("tag").with_type_name("xs:token"))
                    .with_occurs(0, MaxOccurs::Unbounded),
            ),
        );
    }
    outline
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = if args.is_empty() {
        PluginConfig::default()
    } else {
        PluginConfig::from_args(&args)?
    };

    let mut outline = build_outline();
    let plugin = FixedValuePlugin::with_config(config);
    plugin.run(&mut outline, &mut TracingDiagnostics)?;

    for (class, field) in outline.fields() {
        match &field.init {
            Some(init) => info!("{}.{} = {}", class.name, field.name, init),
            None => info!("{}.{} has no initializer", class.name, field.name),
        }
    }
    for class in &outline.classes {
        for member in &class.statics {
            info!("{} declares static {}: {}", class.name, member.name, member.ty);
        }
    }
    Ok(())
}
