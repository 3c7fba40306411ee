use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    moviesys_db::health_check(&pool).await.unwrap();

    for table in ["people", "movies", "genres", "person_movies"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_applied_migrations_match_embedded(pool: PgPool) {
    let applied = moviesys_db::applied_migration_version(&pool).await.unwrap();

    assert!(applied.is_some());
    assert_eq!(applied, moviesys_db::latest_migration_version());
}
