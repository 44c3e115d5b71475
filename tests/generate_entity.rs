use std::{collections::BTreeMap, io::Cursor, sync::Arc};

use sea_orm::{DatabaseBackend, MockDatabase, Value};

use entity_gen::{
    GenerationError,
    cli::{Emit, GenerateArgs},
    commands::generate::{self, GenerateTarget},
    config::AppConfig,
    db::{InformationSchemaIntrospector, providers::default_registry},
    prompt::LinePrompt,
    render::DoctrineEntityRenderer,
    services::EntityService,
};

type TestPrompt = LinePrompt<Cursor<Vec<u8>>, Vec<u8>>;

fn column_row(
    name: &str,
    column_type: &str,
    nullable: &str,
    length: Option<i64>,
    precision: Option<i64>,
    scale: Option<i64>,
) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("column_name", Value::from(name)),
        ("column_type", Value::from(column_type)),
        ("is_nullable", Value::from(nullable)),
        ("character_maximum_length", Value::from(length)),
        ("numeric_precision", Value::from(precision)),
        ("numeric_scale", Value::from(scale)),
    ])
}

fn name_rows(names: &[&str]) -> Vec<BTreeMap<&'static str, Value>> {
    names
        .iter()
        .map(|name| BTreeMap::from([("name", Value::from(*name))]))
        .collect()
}

fn user_account_columns() -> Vec<BTreeMap<&'static str, Value>> {
    vec![
        column_row("id", "int(10) unsigned", "NO", None, Some(10), Some(0)),
        column_row("USER_NAME", "varchar(20)", "NO", Some(20), None, None),
        column_row(" retail_price", "decimal(9,2)", "YES", None, Some(9), Some(2)),
        column_row("is_active", "tinyint(1)", "NO", None, Some(3), Some(0)),
        column_row("created_date", "datetime", "YES", None, None, None),
        column_row("location", "point", "YES", None, None, None),
        column_row("payload", "json", "YES", None, None, None),
    ]
}

fn service(db: MockDatabase) -> EntityService {
    let provider = default_registry()
        .expect("default providers should register")
        .provider_for_url("mysql://root@localhost/shop")
        .expect("mysql provider should resolve");
    let introspector = InformationSchemaIntrospector::new(db.into_connection(), provider.catalog());
    EntityService::new(Arc::new(introspector), Arc::new(DoctrineEntityRenderer::new()))
}

fn args(schema: Option<&str>, table: Option<&str>, class: Option<&str>, emit: Emit) -> GenerateArgs {
    GenerateArgs {
        schema_name: schema.map(str::to_string),
        table_name: table.map(str::to_string),
        entity_class_name: class.map(str::to_string),
        emit,
        non_interactive: true,
    }
}

#[tokio::test]
async fn renders_entity_class_from_flags() {
    let db = MockDatabase::new(DatabaseBackend::MySql).append_query_results([user_account_columns()]);
    let service = service(db);

    let code = generate::run(
        args(Some("shop"), Some("user_account"), Some("App\\Entity\\UserAccount"), Emit::Class),
        &AppConfig::default(),
        &service,
        None::<&mut TestPrompt>,
    )
    .await
    .expect("generation should succeed");

    assert!(code.starts_with("<?php\n\nnamespace App\\Entity;"));
    assert!(code.contains("@ORM\\Table(name=\"user_account\")"));
    assert!(code.contains("class UserAccount\n{"));
    assert!(code.contains("@ORM\\Column(name=\"id\", type=\"integer\", nullable=false)"));
    assert!(code.contains(
        "@ORM\\Column(name=\"USER_NAME\", type=\"string\", length=20, nullable=false)"
    ));
    assert!(code.contains(
        "@ORM\\Column(name=\" retail_price\", type=\"decimal\", precision=9, scale=2, nullable=true)"
    ));
    assert!(code.contains("@ORM\\Column(name=\"is_active\", type=\"boolean\", nullable=false)"));
    assert!(code.contains("@ORM\\Column(name=\"created_date\", type=\"datetime\", nullable=true)"));
    // "point" contains "int", so it lands on the generic integer rule.
    assert!(code.contains("@ORM\\Column(name=\"location\", type=\"integer\", nullable=true)"));
    assert!(code.contains("@var int|null"));
    assert!(code.contains("public function getLocation(): ?int"));
    assert!(code.contains("@ORM\\Column(name=\"payload\", type=\"string\", nullable=true)"));
    assert!(code.contains("public function getPayload(): ?string"));

    let order: Vec<usize> = [
        "private $id;",
        "private $userName;",
        "private $_retailPrice;",
        "private $isActive;",
        "private $createdDate;",
        "private $location;",
        "private $payload;",
    ]
    .iter()
    .map(|needle| code.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn emits_property_list_as_json() {
    let db = MockDatabase::new(DatabaseBackend::MySql).append_query_results([user_account_columns()]);
    let service = service(db);

    let output = generate::run(
        args(Some("shop"), Some("user_account"), None, Emit::Properties),
        &AppConfig::default(),
        &service,
        None::<&mut TestPrompt>,
    )
    .await
    .expect_err("class name is still required");
    assert!(output.to_string().contains("--entity-class-name"));

    let db = MockDatabase::new(DatabaseBackend::MySql).append_query_results([user_account_columns()]);
    let service = self::service(db);
    let output = generate::run(
        args(Some("shop"), Some("user_account"), Some("UserAccount"), Emit::Properties),
        &AppConfig::default(),
        &service,
        None::<&mut TestPrompt>,
    )
    .await
    .expect("properties should be emitted");

    let json: serde_json::Value = serde_json::from_str(&output).expect("output should be json");
    let properties = json.as_array().expect("json array");
    assert_eq!(properties.len(), 7);
    assert_eq!(properties[5]["storageType"], "integer");
    assert_eq!(properties[6]["storageType"], "string");
    assert_eq!(
        properties[4],
        serde_json::json!({
            "name": "createdDate",
            "columnName": "created_date",
            "propertyType": "datetime",
            "storageType": "datetime",
            "length": null,
            "precision": null,
            "scale": null,
            "nullable": true
        })
    );
    assert_eq!(properties[1]["name"], "userName");
    assert_eq!(properties[1]["length"], 20);
}

#[tokio::test]
async fn missing_table_aborts_without_output() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()]);
    let service = service(db);

    let err = generate::run(
        args(Some("shop"), Some("nope"), Some("Nope"), Emit::Class),
        &AppConfig::default(),
        &service,
        None::<&mut TestPrompt>,
    )
    .await
    .expect_err("missing table should fail");

    let err = err
        .downcast::<GenerationError>()
        .expect("error should be a generation error");
    assert!(matches!(err, GenerationError::TableNotFound { .. }));
}

#[tokio::test]
async fn invalid_class_name_is_rejected_after_mapping() {
    let db = MockDatabase::new(DatabaseBackend::MySql).append_query_results([user_account_columns()]);
    let service = service(db);

    let err = generate::run(
        args(Some("shop"), Some("user_account"), Some("not a class"), Emit::Class),
        &AppConfig::default(),
        &service,
        None::<&mut TestPrompt>,
    )
    .await
    .expect_err("invalid class name should fail");

    assert!(err.to_string().contains("invalid entity class name"));
}

#[tokio::test]
async fn prompts_for_every_missing_value() {
    let db = MockDatabase::new(DatabaseBackend::MySql).append_query_results([
        name_rows(&["information_schema", "shop"]),
        name_rows(&["shop"]),
        name_rows(&["order_line", "user_account"]),
    ]);
    let service = service(db);
    let mut prompt = LinePrompt::new(
        Cursor::new(b"\nmissing_table\nuser_account\nApp\\Entity\\UserAccount\n".to_vec()),
        Vec::new(),
    );

    let mut interactive = args(None, None, None, Emit::Class);
    interactive.non_interactive = false;
    let target = generate::resolve_target(interactive, &AppConfig::default(), &service, Some(&mut prompt))
        .await
        .expect("prompts should resolve the target");

    assert_eq!(
        target,
        GenerateTarget {
            schema_name: "shop".to_string(),
            table_name: "user_account".to_string(),
            entity_class_name: "App\\Entity\\UserAccount".to_string(),
        }
    );
    let transcript = String::from_utf8(prompt.into_output()).expect("utf8 transcript");
    assert!(transcript.contains("[shop]"));
    assert!(transcript.contains("You chose: shop"));
    assert!(transcript.contains("table-name must be one of: order_line, user_account"));
    assert!(transcript.contains("You selected table user_account"));
}

#[tokio::test]
async fn non_interactive_schema_falls_back_to_configuration() {
    let db = MockDatabase::new(DatabaseBackend::MySql);
    let service = service(db);
    let mut cfg = AppConfig::default();
    cfg.generator.default_schema = Some("warehouse".to_string());

    let target = generate::resolve_target(
        args(None, Some("stock"), Some("Stock"), Emit::Class),
        &cfg,
        &service,
        None::<&mut TestPrompt>,
    )
    .await
    .expect("configured schema should be used");

    assert_eq!(target.schema_name, "warehouse");
}
