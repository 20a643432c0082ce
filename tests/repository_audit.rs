mod common;

use movie_catalog::domain::entities::{MovieRecord, NewAuditEntry};
use movie_catalog::domain::repositories::AuditRepository;
use movie_catalog::infrastructure::persistence::PgAuditRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn batman_begins() -> MovieRecord {
    MovieRecord::new("tt0372784", "Batman Begins", "2005", "15 Jun 2005", "8.2")
}

#[sqlx::test]
async fn test_store_audit_entry(pool: PgPool) {
    let repo = PgAuditRepository::new(Arc::new(pool.clone()));

    let entry = repo
        .store(NewAuditEntry::from(&batman_begins()))
        .await
        .unwrap();

    assert!(entry.id > 0);
    assert!(entry.matches(&batman_begins()));
    assert_eq!(common::count_lookups(&pool, "tt0372784").await, 1);
}

#[sqlx::test]
async fn test_store_is_append_only(pool: PgPool) {
    let repo = PgAuditRepository::new(Arc::new(pool.clone()));

    let first = repo
        .store(NewAuditEntry::from(&batman_begins()))
        .await
        .unwrap();
    let second = repo
        .store(NewAuditEntry::from(&batman_begins()))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert!(second.logged_at >= first.logged_at);
    assert_eq!(common::count_lookups(&pool, "tt0372784").await, 2);
}

#[sqlx::test]
async fn test_store_passes_fields_through(pool: PgPool) {
    let repo = PgAuditRepository::new(Arc::new(pool.clone()));
    let series = MovieRecord::new("tt0944947", "Game of Thrones", "2011–2019", "17 Apr 2011", "N/A");

    let entry = repo.store(NewAuditEntry::from(&series)).await.unwrap();

    assert_eq!(entry.year, "2011–2019");
    assert_eq!(entry.imdb_rating, "N/A");
}

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    let repo = PgAuditRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
