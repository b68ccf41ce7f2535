use anyhow::Result;
use mockito::Matcher;
use test_utils::document_fixture;
use test_utils::pdf_fixture;

use super::HttpDocService;
use crate::domain::models::DocService;
use crate::domain::models::SelectedFile;
use crate::domain::models::ServiceError;

impl HttpDocService {
    fn with_url(url: String) -> HttpDocService {
        return HttpDocService::new(&url, "200");
    }
}

fn multipart_field(name: &str) -> Matcher {
    return Matcher::Regex(format!(r#"name="{name}""#));
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .create_async()
        .await;

    let service = HttpDocService::with_url(server.url());
    let res = service.health_check().await;

    assert!(res.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(500)
        .create_async()
        .await;

    let service = HttpDocService::with_url(server.url());
    let res = service.health_check().await;

    assert!(res.is_err());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_health_checks_without_url() {
    let service = HttpDocService::new("", "200");
    let res = service.health_check().await;

    assert!(res.is_err());
}

#[tokio::test]
async fn it_trims_trailing_slash_from_url() {
    let service = HttpDocService::new("http://localhost:8000/", "200");
    assert_eq!(service.endpoint("ask"), "http://localhost:8000/ask");
}

#[tokio::test]
async fn it_uploads_document() -> Result<()> {
    let (_dir, file_path) = document_fixture("report.pdf", pdf_fixture());
    let file = SelectedFile::pick(file_path.to_str().unwrap())?;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            multipart_field("file"),
            Matcher::Regex(r#"filename="report.pdf""#.to_string()),
            Matcher::Regex("%PDF-1.4".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"message": "Document processed and indexed."}"#)
        .create_async()
        .await;

    let service = HttpDocService::with_url(server.url());
    service.upload(&file).await?;

    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_ignores_upload_response_body() -> Result<()> {
    let (_dir, file_path) = document_fixture("report.pdf", pdf_fixture());
    let file = SelectedFile::pick(file_path.to_str().unwrap())?;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .with_status(201)
        .with_body("not json at all")
        .create_async()
        .await;

    let service = HttpDocService::with_url(server.url());
    let res = service.upload(&file).await;

    assert!(res.is_ok());
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_fails_upload_on_server_error() -> Result<()> {
    let (_dir, file_path) = document_fixture("report.pdf", pdf_fixture());
    let file = SelectedFile::pick(file_path.to_str().unwrap())?;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .with_status(500)
        .create_async()
        .await;

    let service = HttpDocService::with_url(server.url());
    let err = service.upload(&file).await.unwrap_err();

    assert_eq!(err.kind(), "status");
    assert_eq!(err.to_string(), "service answered with status 500");
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_fails_upload_when_file_disappeared() -> Result<()> {
    let (dir, file_path) = document_fixture("report.pdf", pdf_fixture());
    let file = SelectedFile::pick(file_path.to_str().unwrap())?;
    drop(dir);

    let service = HttpDocService::with_url("http://127.0.0.1:9".to_string());
    let err = service.upload(&file).await.unwrap_err();

    assert_eq!(err.kind(), "file");

    return Ok(());
}

#[tokio::test]
async fn it_asks_question() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ask")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            multipart_field("q"),
            Matcher::Regex("What is the summary".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"answer": "It is a quarterly report."}"#)
        .create_async()
        .await;

    let service = HttpDocService::with_url(server.url());
    let answer = service.ask("What is the summary?").await?;

    assert_eq!(answer, "It is a quarterly report.");
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_captures_error_detail_when_no_document_uploaded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ask")
        .with_status(400)
        .with_body(r#"{"error": "No document uploaded yet."}"#)
        .create_async()
        .await;

    let service = HttpDocService::with_url(server.url());
    let err = service.ask("What is the summary?").await.unwrap_err();

    match &err {
        ServiceError::Status { status, detail } => {
            assert_eq!(*status, 400);
            assert_eq!(detail.as_deref(), Some("No document uploaded yet."));
        }
        _ => panic!("Wrong error variant: {err:?}"),
    }
    insta::assert_snapshot!(err.to_string(), @"service answered with status 400: No document uploaded yet.");
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_ask_on_missing_answer() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ask")
        .with_status(200)
        .with_body(r#"{"message": "no answer field"}"#)
        .create_async()
        .await;

    let service = HttpDocService::with_url(server.url());
    let err = service.ask("What is the summary?").await.unwrap_err();

    assert_eq!(err.kind(), "malformed-body");
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_ask_on_null_answer() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/ask")
        .with_status(200)
        .with_body(r#"{"answer": null}"#)
        .create_async()
        .await;

    let service = HttpDocService::with_url(server.url());
    let err = service.ask("What is the summary?").await.unwrap_err();

    assert_eq!(err.kind(), "malformed-body");
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_ask_when_unreachable() {
    let service = HttpDocService::with_url("http://127.0.0.1:9".to_string());
    let err = service.ask("What is the summary?").await.unwrap_err();

    assert!(matches!(err, ServiceError::Network(_)));
    assert_eq!(err.kind(), "network");
}
