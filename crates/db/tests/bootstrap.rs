use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify the schema landed.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    ypsl_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "media",
        "authors",
        "events",
        "articles",
        "committees",
        "sub_committees",
        "executive_committees",
        "merchants",
        "merch_categories",
        "organizers",
        "project_profiles",
        "awards",
        "faqs",
    ];

    for table in tables {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = $1
            )",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(exists, "table {table} must exist after migrations");
    }
}

/// Every unique constraint follows the `uq_` naming convention, which the
/// API error classifier relies on to map violations to 409.
#[sqlx::test(migrations = "./migrations")]
async fn test_unique_constraints_follow_naming_convention(pool: PgPool) {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT conname FROM pg_constraint
         WHERE contype = 'u' AND connamespace = 'public'::regnamespace
         ORDER BY conname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!names.is_empty(), "schema must declare unique constraints");
    for name in &names {
        assert!(
            name.starts_with("uq_"),
            "unique constraint {name} must be prefixed uq_"
        );
    }
}

/// Timestamps default at the database level so repositories never set them.
#[sqlx::test(migrations = "./migrations")]
async fn test_created_at_defaults(pool: PgPool) {
    let missing: Vec<String> = sqlx::query_scalar(
        "SELECT table_name FROM information_schema.columns
         WHERE table_schema = 'public'
           AND column_name = 'created_at'
           AND column_default IS NULL",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert!(
        missing.is_empty(),
        "created_at must default to NOW() everywhere, missing in: {missing:?}"
    );
}
