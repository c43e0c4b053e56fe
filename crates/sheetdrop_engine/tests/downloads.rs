use std::fs;

use pretty_assertions::assert_eq;
use sheetdrop_engine::{
    artifact_filename, ensure_download_dir, ArtifactDownloader, AtomicArtifactWriter,
    ClientSettings, DownloadError,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn filename_is_the_last_path_segment() {
    assert_eq!(
        artifact_filename("http://host/download/out.xlsx", "artifact-0"),
        "out.xlsx"
    );
    assert_eq!(
        artifact_filename("/download/out_log.csv?session=1", "artifact-1"),
        "out_log.csv"
    );
    assert_eq!(artifact_filename("http://host/", "artifact-0"), "artifact-0");
}

#[test]
fn creates_missing_download_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("downloads");
    assert!(!new_dir.exists());
    ensure_download_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_artifact() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicArtifactWriter::new(temp.path().to_path_buf());

    let first = writer.write("out.xlsx", b"hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "out.xlsx");
    assert_eq!(fs::read(&first).unwrap(), b"hello");

    let second = writer.write("out.xlsx", b"world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"world");
}

#[test]
fn no_partial_file_when_target_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicArtifactWriter::new(file_path.clone());
    let result = writer.write("out.xlsx", b"data");
    assert!(matches!(result, Err(DownloadError::OutputDir(_))));
    assert!(!file_path.with_file_name("out.xlsx").exists());
}

#[tokio::test]
async fn downloads_both_artifacts_with_relative_locators() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/out.xlsx"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"workbook".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/download/out_log.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"log".to_vec()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let downloader = ArtifactDownloader::new(
        ClientSettings::with_base_url(server.uri()),
        temp.path().to_path_buf(),
    );

    let saved = downloader
        .download_all(&[
            "/download/out.xlsx".to_string(),
            "/download/out_log.csv".to_string(),
        ])
        .await
        .expect("downloads ok");

    assert_eq!(saved.len(), 2);
    assert_eq!(fs::read(&saved[0]).unwrap(), b"workbook");
    assert_eq!(saved[0].file_name().unwrap(), "out.xlsx");
    assert_eq!(fs::read(&saved[1]).unwrap(), b"log");
    assert_eq!(saved[1].file_name().unwrap(), "out_log.csv");
}

#[tokio::test]
async fn missing_artifact_reports_the_failed_locator() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/out.xlsx"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let downloader = ArtifactDownloader::new(
        ClientSettings::with_base_url(server.uri()),
        temp.path().to_path_buf(),
    );

    let err = downloader
        .download_all(&["/download/out.xlsx".to_string()])
        .await
        .unwrap_err();
    match err {
        DownloadError::Http { url, .. } => assert_eq!(url, "/download/out.xlsx"),
        other => panic!("unexpected error: {other:?}"),
    }
}
