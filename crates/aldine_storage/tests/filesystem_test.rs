//! Tests for the filesystem blob storage backend.

use aldine_error::{AldineErrorKind, StorageErrorKind};
use aldine_storage::{BlobStore, FileSystemStorage};

fn storage() -> (tempfile::TempDir, FileSystemStorage) {
    let dir = tempfile::tempdir().expect("temp dir");
    let storage = FileSystemStorage::new(dir.path()).expect("storage");
    (dir, storage)
}

#[tokio::test]
async fn put_then_read_round_trips() {
    let (_dir, storage) = storage();
    let bytes = b"hello media".to_vec();

    storage.put("abc123.png", &bytes).await.expect("put");
    assert!(storage.exists("abc123.png").await.expect("exists"));

    let read = storage.read("abc123.png").await.expect("read");
    assert_eq!(read, bytes);
}

#[tokio::test]
async fn put_creates_nested_key_directories() {
    let (_dir, storage) = storage();

    storage
        .put("thumbnails/thumb_abc123.png", b"thumb")
        .await
        .expect("put nested");

    assert!(
        storage
            .exists("thumbnails/thumb_abc123.png")
            .await
            .expect("exists")
    );
}

#[tokio::test]
async fn read_missing_key_is_not_found() {
    let (_dir, storage) = storage();

    let err = storage.read("missing.png").await.expect_err("should fail");
    match err.kind() {
        AldineErrorKind::Storage(e) => {
            assert!(matches!(e.kind, StorageErrorKind::NotFound(_)))
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (_dir, storage) = storage();

    storage.put("gone.png", b"bytes").await.expect("put");
    storage.delete("gone.png").await.expect("first delete");
    assert!(!storage.exists("gone.png").await.expect("exists"));

    // Second delete of an absent key still succeeds
    storage.delete("gone.png").await.expect("second delete");
}

#[tokio::test]
async fn put_overwrites_existing_key() {
    let (_dir, storage) = storage();

    storage.put("key.bin", b"old").await.expect("put old");
    storage.put("key.bin", b"new").await.expect("put new");

    assert_eq!(storage.read("key.bin").await.expect("read"), b"new");
}

#[tokio::test]
async fn traversal_keys_are_rejected() {
    let (_dir, storage) = storage();

    for key in ["../escape.png", "a/../../escape.png", ""] {
        let err = storage.put(key, b"x").await.expect_err("should fail");
        match err.kind() {
            AldineErrorKind::Storage(e) => {
                assert!(matches!(e.kind, StorageErrorKind::InvalidKey(_)))
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
