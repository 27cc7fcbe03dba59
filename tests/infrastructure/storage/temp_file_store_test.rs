use babel::application::ports::TempAudioStore;
use babel::domain::AudioExtension;
use babel::infrastructure::storage::TempFileStore;

fn create_test_store() -> (tempfile::TempDir, TempFileStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = TempFileStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_bytes_when_acquiring_then_file_exists_with_extension() {
    let (_dir, store) = create_test_store();

    let handle = store.acquire(b"audio bytes", AudioExtension::Ogg).await.unwrap();

    assert!(handle.path().exists());
    assert!(handle.path().starts_with(store.base_path()));
    assert!(handle.file_name().ends_with(".ogg"));
    assert_eq!(handle.extension(), AudioExtension::Ogg);
}

#[tokio::test]
async fn given_acquired_handle_when_reading_then_bytes_match_original() {
    let (_dir, store) = create_test_store();

    let handle = store.acquire(b"audio bytes", AudioExtension::Wav).await.unwrap();
    let data = store.read(&handle).await.unwrap();

    assert_eq!(data, b"audio bytes");
}

#[tokio::test]
async fn given_two_acquisitions_when_comparing_paths_then_they_differ() {
    let (_dir, store) = create_test_store();

    let first = store.acquire(b"a", AudioExtension::Mp3).await.unwrap();
    let second = store.acquire(b"a", AudioExtension::Mp3).await.unwrap();

    assert_ne!(first.path(), second.path());
}

#[tokio::test]
async fn given_acquired_handle_when_releasing_then_file_is_removed() {
    let (_dir, store) = create_test_store();
    let handle = store.acquire(b"data", AudioExtension::M4a).await.unwrap();

    store.release(&handle).await.unwrap();

    assert!(!handle.path().exists());
    assert!(store.read(&handle).await.is_err());
}

#[tokio::test]
async fn given_released_handle_when_releasing_again_then_succeeds() {
    let (_dir, store) = create_test_store();
    let handle = store.acquire(b"data", AudioExtension::Wav).await.unwrap();

    store.release(&handle).await.unwrap();
    let second = store.release(&handle).await;

    assert!(second.is_ok());
}

#[tokio::test]
async fn given_file_deleted_externally_when_releasing_then_succeeds() {
    let (_dir, store) = create_test_store();
    let handle = store.acquire(b"data", AudioExtension::Wav).await.unwrap();
    std::fs::remove_file(handle.path()).unwrap();

    let result = store.release(&handle).await;

    assert!(result.is_ok());
}

#[test]
fn given_missing_base_dir_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("nested").join("babel");

    let store = TempFileStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.as_path());
}
