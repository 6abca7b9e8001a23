use hub_core::model::{CourseId, LessonId, ProgressRecord, UserId};
use storage::repository::ProgressRepository;
use storage::sqlite::SqliteRepository;

fn build_record(pairs: &[(&str, &str)]) -> ProgressRecord {
    let mut record = ProgressRecord::new();
    for (course, lesson) in pairs {
        record.toggle(&CourseId::new(*course), &LessonId::new(*lesson));
    }
    record
}

#[tokio::test]
async fn sqlite_roundtrip_persists_progress_document() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let user = UserId::new("user-1");
    let record = build_record(&[("web-dev-101", "html-intro"), ("tailwind-css", "layout")]);
    repo.save(&user, &record).await.expect("save");

    let loaded = repo.load(&user).await.expect("load").expect("document");
    assert_eq!(loaded, record);
}

#[tokio::test]
async fn sqlite_load_of_absent_user_is_none() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_absent?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let loaded = repo.load(&UserId::new("never-seen")).await.expect("load");
    assert!(loaded.is_none());
}

#[tokio::test]
async fn sqlite_upsert_replaces_prior_document() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_upsert?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let user = UserId::new("user-1");
    repo.save(&user, &build_record(&[("c1", "a"), ("c1", "b")]))
        .await
        .expect("first save");

    let replacement = build_record(&[("c2", "x")]);
    repo.save(&user, &replacement).await.expect("second save");

    let loaded = repo.load(&user).await.expect("load").expect("document");
    assert_eq!(loaded, replacement);
}

#[tokio::test]
async fn sqlite_keeps_users_isolated() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_isolated?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.save(&UserId::new("a"), &build_record(&[("c1", "x")]))
        .await
        .expect("save");

    assert!(repo.load(&UserId::new("b")).await.expect("load").is_none());

    let loaded = repo
        .load(&UserId::new("a"))
        .await
        .expect("load")
        .expect("document");
    assert_eq!(loaded, build_record(&[("c1", "x")]));
}

#[tokio::test]
async fn migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let user = UserId::new("user-1");
    repo.save(&user, &build_record(&[("c1", "a")]))
        .await
        .expect("save after re-migrate");
    assert!(repo.load(&user).await.expect("load").is_some());
}
