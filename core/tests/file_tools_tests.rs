// Integration tests for file tools
// Tests use REAL filesystem — no mocks

use fscrud_core::file_tools;
use fscrud_core::StoreError;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_file_read_existing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("test_file.txt");
    let content = "Hello, World!";

    fs::write(&file_path, content).expect("Failed to write test file");

    let (read, metadata) = file_tools::file_read(&file_path)
        .await
        .expect("file_read should succeed for existing file");
    assert_eq!(read, content);
    assert_eq!(metadata.len(), content.len() as u64);
}

#[tokio::test]
async fn test_file_read_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("nonexistent.txt");

    let result = file_tools::file_read(&file_path).await;
    assert!(
        matches!(result, Err(StoreError::NotFound(_))),
        "file_read should fail for missing file"
    );
}

#[tokio::test]
async fn test_file_read_directory_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir_path = temp_dir.path().join("subdir");
    fs::create_dir(&dir_path).expect("Failed to create subdir");

    let result = file_tools::file_read(&dir_path).await;
    assert!(result.is_err(), "file_read should fail for a directory");
}

#[tokio::test]
async fn test_file_write_overwrite() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("overwrite.txt");
    fs::write(&file_path, "Old content").expect("Failed to write initial content");

    let new_content = "New content";
    let metadata = file_tools::file_write(&file_path, new_content.as_bytes())
        .await
        .expect("file_write should succeed overwriting existing file");
    assert_eq!(metadata.len(), new_content.len() as u64);

    let read_content = fs::read_to_string(&file_path).expect("Failed to read back");
    assert_eq!(read_content, new_content);
}

#[tokio::test]
async fn test_file_write_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("new_file.txt");

    let result = file_tools::file_write(&file_path, b"Content").await;
    assert!(
        matches!(result, Err(StoreError::NotFound(_))),
        "file_write should not create missing files"
    );
    assert!(!file_path.exists());
}

#[tokio::test]
async fn test_file_create_new_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("create_new.txt");
    let content = "Created content";

    let result = file_tools::file_create(&file_path, content.as_bytes()).await;
    assert!(result.is_ok(), "file_create should succeed for new file");

    let read_content = fs::read_to_string(&file_path).expect("Failed to read back");
    assert_eq!(read_content, content);
}

#[tokio::test]
async fn test_file_create_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("existing.txt");
    fs::write(&file_path, "Existing content").expect("Failed to write initial content");

    let result = file_tools::file_create(&file_path, b"New content").await;
    assert!(
        matches!(result, Err(StoreError::AlreadyExists(_))),
        "file_create should fail if file already exists"
    );

    // Original content should be unchanged
    let read_content = fs::read_to_string(&file_path).expect("Failed to read back");
    assert_eq!(read_content, "Existing content");
}

#[tokio::test]
async fn test_file_create_missing_parent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("nested").join("file.txt");

    let result = file_tools::file_create(&file_path, b"Content").await;
    assert!(
        matches!(result, Err(StoreError::Io(_))),
        "missing parent should surface the OS error, not NotFound"
    );
    assert!(!file_path.exists());
}

#[tokio::test]
async fn test_file_remove() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("remove_me.txt");
    fs::write(&file_path, "bye").expect("Failed to write test file");

    file_tools::file_remove(&file_path)
        .await
        .expect("file_remove should succeed for existing file");
    assert!(!file_path.exists());

    let result = file_tools::file_remove(&file_path).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}
