//! Event store tests — CRUD lifecycle, list ordering, and the
//! junction-row cascade on delete.

mod common;

use common::{create_event, setup_test_db};
use eventhub::models::{event, participant};

#[tokio::test]
async fn test_event_create_and_read() {
    let db = setup_test_db().await;
    let pool = db.pool();

    let id = event::create(pool, "Hackathon", "24h build", Some("2026-03-14"))
        .await
        .expect("create");
    assert!(id > 0);

    let found = event::find_by_id(pool, id)
        .await
        .expect("query")
        .expect("not found");
    assert_eq!(found.title, "Hackathon");
    assert_eq!(found.description, "24h build");
    assert_eq!(found.date.as_deref(), Some("2026-03-14"));
    assert!(!found.created_at.is_empty());
}

#[tokio::test]
async fn test_event_read_not_found() {
    let db = setup_test_db().await;
    let result = event::find_by_id(db.pool(), 999999).await.expect("query");
    assert!(result.is_none(), "Non-existent event should return None");
}

#[tokio::test]
async fn test_event_list_in_creation_order() {
    let db = setup_test_db().await;
    let pool = db.pool();

    create_event(pool, "Hackathon").await;
    create_event(pool, "Quiz").await;
    create_event(pool, "Robotics").await;

    let events = event::find_all(pool).await.expect("list");
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Hackathon", "Quiz", "Robotics"]);
}

#[tokio::test]
async fn test_event_list_empty() {
    let db = setup_test_db().await;
    let events = event::find_all(db.pool()).await.expect("list");
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_event_update() {
    let db = setup_test_db().await;
    let pool = db.pool();

    let id = create_event(pool, "Hackathon").await;
    event::update(pool, id, "Hackathon 2026", "renamed", None)
        .await
        .expect("update");

    let found = event::find_by_id(pool, id)
        .await
        .expect("query")
        .expect("not found");
    assert_eq!(found.title, "Hackathon 2026");
    assert_eq!(found.description, "renamed");
}

#[tokio::test]
async fn test_event_delete() {
    let db = setup_test_db().await;
    let pool = db.pool();

    let id = create_event(pool, "Hackathon").await;
    event::delete(pool, id).await.expect("delete");
    assert!(event::find_by_id(pool, id).await.expect("query").is_none());
}

#[tokio::test]
async fn test_event_delete_cascades_registrations() {
    let db = setup_test_db().await;
    let pool = db.pool();

    let event_id = create_event(pool, "Hackathon").await;
    let keep_id = create_event(pool, "Quiz").await;

    let hash = eventhub::auth::password::hash_password("secret").expect("hash");
    let new = participant::NewParticipant {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        contact: "9876543210".to_string(),
        password: hash,
        usn: "1CR20CS001".to_string(),
        college: "X".to_string(),
    };
    let pid = participant::register(pool, &new, &[event_id, keep_id])
        .await
        .expect("register");
    assert_eq!(participant::event_ids_for(pool, pid).await.expect("ids").len(), 2);

    event::delete(pool, event_id).await.expect("delete");

    // The junction row is gone; the participant and its other registration remain.
    let remaining = participant::event_ids_for(pool, pid).await.expect("ids");
    assert_eq!(remaining, vec![keep_id]);
    assert!(participant::find_by_id(pool, pid).await.expect("query").is_some());
}
