//! Integration tests for the tariff repository
//!
//! These tests need a live PostgreSQL instance and are ignored by default.
//! Provide one and run them with:
//!
//! ```bash
//! TEST_DATABASE_URL=postgres://localhost/billing_test cargo test -p infra_db -- --ignored
//! ```

use rust_decimal_macros::dec;
use sqlx::PgPool;

use infra_db::{create_pool_from_url, TariffRepository, MIGRATOR};
use test_utils::TestTariffBuilder;

async fn test_repository() -> (TariffRepository, PgPool) {
    dotenvy::dotenv().ok();
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a scratch database");

    let pool = create_pool_from_url(&url).await.expect("connect to test database");
    MIGRATOR.run(&pool).await.expect("apply migrations");

    // Each test starts from an empty store
    sqlx::query("TRUNCATE pricing_config RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("reset pricing_config");

    (TariffRepository::new(pool.clone()), pool)
}

#[tokio::test]
#[ignore]
async fn test_get_or_create_persists_defaults() {
    let (repo, _pool) = test_repository().await;

    let first = repo.get_or_create_active().await.unwrap();
    assert_eq!(first.rate_per_unit, dec!(5.00));
    assert_eq!(first.vat_percentage, dec!(15.00));
    assert_eq!(first.service_charge, dec!(50.00));
    assert!(first.active);

    // Second read returns the same persisted identity, not a new row
    let second = repo.get_or_create_active().await.unwrap();
    assert_eq!(second.id, first.id);
}

#[tokio::test]
#[ignore]
async fn test_update_overwrites_in_place() {
    let (repo, _pool) = test_repository().await;
    let original = repo.get_or_create_active().await.unwrap();

    let new_tariff = TestTariffBuilder::new()
        .with_rate(dec!(10))
        .with_vat(dec!(0))
        .with_service_charge(dec!(0))
        .build();
    let updated = repo.update_active(&new_tariff).await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.rate_per_unit, dec!(10.00));
    assert_eq!(updated.vat_percentage, dec!(0.00));
    assert_eq!(updated.service_charge, dec!(0.00));
    assert!(updated.active);

    // Immediately visible to subsequent reads
    let read_back = repo.get_or_create_active().await.unwrap();
    assert_eq!(read_back, updated);
}

#[tokio::test]
#[ignore]
async fn test_update_on_empty_store_creates_active_row() {
    let (repo, _pool) = test_repository().await;

    let new_tariff = TestTariffBuilder::new()
        .with_rate(dec!(7.50))
        .with_vat(dec!(20))
        .with_service_charge(dec!(15))
        .build();
    let created = repo.update_active(&new_tariff).await.unwrap();

    assert!(created.active);
    let read_back = repo.find_active().await.unwrap().expect("row exists");
    assert_eq!(read_back.id, created.id);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_first_reads_create_one_row() {
    let (repo, pool) = test_repository().await;

    let (a, b) = tokio::join!(repo.get_or_create_active(), repo.get_or_create_active());
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_eq!(a.id, b.id);

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM pricing_config WHERE active")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
