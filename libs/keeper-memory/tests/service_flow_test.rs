//! Integration tests for the services running on the in-memory store
//!
//! These tests verify that:
//! 1. Names are normalized before they are stored
//! 2. Storage "row missing" signals surface as typed not-found errors
//! 3. Transcriptions are refused for notes that do not exist
//! 4. Pagination and totals line up across list calls
//! 5. Deleting a parent removes its children

use keeper_domain::{
    ErrorKind, NoteId, NoteService, NoteServicePort, ServiceError, TranscriptionService,
    TranscriptionServicePort, UserId, UserService, UserServicePort,
};
use keeper_memory::{
    MemoryNoteRepository, MemoryStore, MemoryTranscriptionRepository, MemoryUserRepository,
};

struct Services {
    users: UserService<MemoryUserRepository>,
    notes: NoteService<MemoryNoteRepository>,
    transcriptions: TranscriptionService<MemoryTranscriptionRepository, MemoryNoteRepository>,
}

fn services() -> Services {
    let store = MemoryStore::new();
    Services {
        users: UserService::new(store.users()),
        notes: NoteService::new(store.notes()),
        transcriptions: TranscriptionService::new(store.transcriptions(), store.notes()),
    }
}

#[tokio::test]
async fn test_user_lifecycle() {
    let s = services();

    let user_id = s.users.create("  Alice  ").await.unwrap();
    assert_eq!(s.users.retrieve(user_id).await.unwrap().name().as_str(), "Alice");

    s.users.update(user_id, " Alicia ").await.unwrap();
    assert_eq!(s.users.retrieve(user_id).await.unwrap().name().as_str(), "Alicia");

    s.users.delete(user_id).await.unwrap();
    let err = s.users.retrieve(user_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound(id) if id == user_id));
}

#[tokio::test]
async fn test_update_missing_user_is_user_not_found() {
    let s = services();

    let err = s
        .users
        .update(UserId::new(404).unwrap(), "Nobody")
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::UserNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_user_list_pages_with_total() {
    let s = services();
    for name in ["a", "b", "c", "d", "e"] {
        s.users.create(name).await.unwrap();
    }

    let (page, total) = s.users.list(2, 2).await.unwrap();
    let names: Vec<&str> = page.iter().map(|u| u.name().as_str()).collect();

    assert_eq!(names, vec!["c", "d"]);
    assert_eq!(total, 5);
}

#[tokio::test]
async fn test_note_lifecycle() {
    let s = services();
    let user_id = s.users.create("Alice").await.unwrap();

    let note_id = s.notes.create(user_id, " Standup ").await.unwrap();
    let (notes, total) = s.notes.list(user_id, 20, 0).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(notes[0].name().as_str(), "Standup");
    assert_eq!(notes[0].user_id(), user_id);

    s.notes.update(note_id, "Retro", user_id).await.unwrap();
    let (notes, _) = s.notes.list(user_id, 20, 0).await.unwrap();
    assert_eq!(notes[0].name().as_str(), "Retro");

    s.notes.delete(note_id).await.unwrap();
    let err = s.notes.delete(note_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NoteNotFound(id) if id == note_id));
}

#[tokio::test]
async fn test_note_for_unknown_user_fails_in_storage() {
    let s = services();

    let err = s
        .notes
        .create(UserId::new(77).unwrap(), "Orphan")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(err.context(), Some("create note"));
}

#[tokio::test]
async fn test_transcriptions_require_existing_note() {
    let s = services();
    let missing = NoteId::new(12).unwrap();

    let err = s.transcriptions.create(missing, "hello").await.unwrap_err();
    assert!(matches!(err, ServiceError::NoteNotFound(id) if id == missing));

    let err = s
        .transcriptions
        .list_by_note_id(missing, 20, 0)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_transcriptions_flow() {
    let s = services();
    let user_id = s.users.create("Alice").await.unwrap();
    let note_id = s.notes.create(user_id, "Interview").await.unwrap();

    s.transcriptions.create(note_id, " first ").await.unwrap();
    s.transcriptions.create(note_id, "second").await.unwrap();

    let err = s.transcriptions.create(note_id, "   ").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let listed = s.transcriptions.list_by_note_id(note_id, 20, 0).await.unwrap();
    let texts: Vec<&str> = listed.iter().map(|t| t.content().as_str()).collect();
    assert_eq!(texts, vec!["second", "first"]);
}

#[tokio::test]
async fn test_deleting_user_cascades() {
    let s = services();
    let user_id = s.users.create("Alice").await.unwrap();
    let note_id = s.notes.create(user_id, "Interview").await.unwrap();
    s.transcriptions.create(note_id, "hello").await.unwrap();

    s.users.delete(user_id).await.unwrap();

    let err = s
        .transcriptions
        .list_by_note_id(note_id, 20, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NoteNotFound(_)));
}

#[tokio::test]
async fn test_services_through_ports() {
    async fn seed<U, N, T>(users: &U, notes: &N, transcriptions: &T) -> (UserId, NoteId)
    where
        U: UserServicePort,
        N: NoteServicePort,
        T: TranscriptionServicePort,
    {
        let user_id = users.create("Port").await.unwrap();
        let note_id = notes.create(user_id, "Through ports").await.unwrap();
        transcriptions.create(note_id, "works").await.unwrap();
        (user_id, note_id)
    }

    let s = services();
    let (user_id, note_id) = seed(&s.users, &s.notes, &s.transcriptions).await;

    let (_, total) = s.notes.list(user_id, 20, 0).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(
        s.transcriptions
            .list_by_note_id(note_id, 20, 0)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let store = MemoryStore::new();
    let users = std::sync::Arc::new(UserService::new(store.users()));

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let users = users.clone();
            tokio::spawn(async move {
                let name = format!("user-{i}");
                users.create(&name).await.unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().value());
    }
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 32);
    assert_eq!(users.list(100, 0).await.unwrap().1, 32);
}
