use blog_api::migrator::{self, MigrationError};
use blog_api::schema::{ColumnSpec, ColumnType, Schema, TableSpec};
use sqlx::PgPool;

async fn table_exists(pool: &PgPool, table: &str) -> bool {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
    )
    .bind(table)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn is_nullable(pool: &PgPool, table: &str, column: &str) -> bool {
    let value: String = sqlx::query_scalar(
        "SELECT is_nullable FROM information_schema.columns WHERE table_name = $1 AND column_name = $2",
    )
    .bind(table)
    .bind(column)
    .fetch_one(pool)
    .await
    .unwrap();

    value == "YES"
}

#[sqlx::test(migrations = false)]
async fn test_create_tables_builds_blog_schema(pool: PgPool) {
    let created = migrator::create_tables(&pool, &Schema::blog()).await.unwrap();

    assert_eq!(
        created,
        vec!["users", "categories", "tags", "posts", "posts_tags"]
    );
    for table in &created {
        assert!(table_exists(&pool, table).await, "{table} missing");
    }
}

#[sqlx::test(migrations = false)]
async fn test_nullability_follows_declaration(pool: PgPool) {
    migrator::create_tables(&pool, &Schema::blog()).await.unwrap();

    assert!(is_nullable(&pool, "posts", "title").await);
    assert!(is_nullable(&pool, "posts", "body").await);
    assert!(!is_nullable(&pool, "posts", "author_id").await);
    assert!(!is_nullable(&pool, "users", "email").await);
}

#[sqlx::test(migrations = false)]
async fn test_unique_email_enforced(pool: PgPool) {
    migrator::create_tables(&pool, &Schema::blog()).await.unwrap();

    sqlx::query("INSERT INTO users (name, email) VALUES ('a', 'a@example.com')")
        .execute(&pool)
        .await
        .unwrap();
    let dup = sqlx::query("INSERT INTO users (name, email) VALUES ('b', 'a@example.com')")
        .execute(&pool)
        .await;

    assert!(dup.unwrap_err().as_database_error().unwrap().is_unique_violation());
}

#[sqlx::test(migrations = false)]
async fn test_unsigned_rejects_negative(pool: PgPool) {
    let schema = Schema::new().table(
        "counters",
        TableSpec::new()
            .column("id", ColumnSpec::new(ColumnType::Increments))
            .column("hits", ColumnSpec::new(ColumnType::Integer).unsigned()),
    );
    migrator::create_tables(&pool, &schema).await.unwrap();

    let result = sqlx::query("INSERT INTO counters (hits) VALUES (-1)")
        .execute(&pool)
        .await;

    assert!(result.is_err());
}

#[sqlx::test(migrations = false)]
async fn test_second_run_fails_on_first_existing_table(pool: PgPool) {
    migrator::create_tables(&pool, &Schema::blog()).await.unwrap();

    let err = migrator::create_tables(&pool, &Schema::blog())
        .await
        .unwrap_err();

    match err {
        MigrationError::Create { table, .. } => assert_eq!(table, "users"),
        other => panic!("unexpected error: {other}"),
    }
}

#[sqlx::test(migrations = false)]
async fn test_invalid_schema_touches_nothing(pool: PgPool) {
    let schema = Schema::new()
        .table(
            "first",
            TableSpec::new().column("id", ColumnSpec::new(ColumnType::Increments)),
        )
        .table(
            "second",
            TableSpec::new().column(
                "ghost_id",
                ColumnSpec::new(ColumnType::Integer).references("ghosts.id"),
            ),
        );

    let err = migrator::create_tables(&pool, &schema).await.unwrap_err();

    assert!(matches!(err, MigrationError::Schema(_)));
    assert!(!table_exists(&pool, "first").await);
}

#[sqlx::test(migrations = false)]
async fn test_drop_tables_reverse_order(pool: PgPool) {
    migrator::create_tables(&pool, &Schema::blog()).await.unwrap();

    let dropped = migrator::drop_tables(&pool, &Schema::blog()).await.unwrap();

    assert_eq!(
        dropped,
        vec!["posts_tags", "posts", "tags", "categories", "users"]
    );
    assert!(!table_exists(&pool, "users").await);
}

#[sqlx::test(migrations = false)]
async fn test_json_schema_applies(pool: PgPool) {
    let schema = Schema::from_json(
        r#"{
            "notes": {
                "id":     { "type": "bigIncrements" },
                "text":   { "type": "text", "fieldtype": "longtext", "nullable": true },
                "pinned": { "type": "boolean", "defaultTo": false }
            }
        }"#,
    )
    .unwrap();

    migrator::create_tables(&pool, &schema).await.unwrap();

    let pinned: bool = sqlx::query_scalar("INSERT INTO notes DEFAULT VALUES RETURNING pinned")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(!pinned);
}
