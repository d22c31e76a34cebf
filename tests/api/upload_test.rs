use crate::common::{self, Part};
use actix_web::http::StatusCode;
use actix_web::test;
use lexis::analysis::Analyzer;
use lexis::db::models::record::Manager as _;
use lexis::extraction::{ExtractionError, TextExtractor};
use lexis::server::api::upload::response::RecordResponse;
use lexis::tagging::RuleTagger;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

const UPLOAD_URI: &str = "/api/upload/";

#[actix_web::test]
async fn test_upload_when_valid_pdf_expect_created_with_nouns_and_verbs() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let pdf = common::build_pdf(&["The cat runs fast."]);
    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "a@b.co"),
            Part::File("pdf_file", "cat.pdf", &pdf),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let actual: RecordResponse = test::read_body_json(resp).await;
    let expected = RecordResponse {
        email: "a@b.co".to_owned(),
        nouns: vec!["cat".to_owned()],
        verbs: vec!["runs".to_owned()],
    };
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_upload_when_no_trailing_slash_expect_created() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let pdf = common::build_pdf(&["Dogs chase cats."]);
    let req = common::upload_request(
        "/api/upload",
        &[
            Part::Text("email", "dogs@example.com"),
            Part::File("pdf_file", "dogs.pdf", &pdf),
        ],
    );
    let resp = test::call_service(&app, req).await;
    let actual = resp.status();
    let expected = StatusCode::CREATED;
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_upload_when_record_stored_expect_row_matches_response() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let pdf = common::build_pdf(&["The dog sleeps.", "The bird sings."]);
    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "pages@example.com"),
            Part::File("pdf_file", "pages.pdf", &pdf),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let stored = state
        .db
        .find_by_email("pages@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.nouns, vec!["dog", "bird"]);
    assert_eq!(stored.verbs, vec!["sleeps", "sings"]);
}

#[actix_web::test]
async fn test_upload_when_email_exists_expect_bad_request_and_record_unchanged() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let first = common::build_pdf(&["The cat runs fast."]);
    let second = common::build_pdf(&["Dogs chase cats."]);
    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "a@b.co"),
            Part::File("pdf_file", "first.pdf", &first),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "a@b.co"),
            Part::File("pdf_file", "second.pdf", &second),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let actual: Value = test::read_body_json(resp).await;
    let expected = json!({ "message": "Email already exists" });
    assert_eq!(actual, expected);

    let stored = state.db.find_by_email("a@b.co").await.unwrap().unwrap();
    assert_eq!(stored.nouns, vec!["cat"]);
    assert_eq!(state.db.count_by_email("a@b.co").await.unwrap(), 1);
}

#[actix_web::test]
async fn test_upload_when_concurrent_uploads_same_email_expect_one_record() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let pdf = common::build_pdf(&["The cat runs fast."]);
    let first = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "race@example.com"),
            Part::File("pdf_file", "one.pdf", &pdf),
        ],
    );
    let second = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "race@example.com"),
            Part::File("pdf_file", "two.pdf", &pdf),
        ],
    );
    let (first, second) = futures_util::future::join(
        test::call_service(&app, first),
        test::call_service(&app, second),
    )
    .await;
    let mut actual = vec![first.status().as_u16(), second.status().as_u16()];
    actual.sort_unstable();
    let expected = vec![201, 400];
    assert_eq!(actual, expected);
    assert_eq!(state.db.count_by_email("race@example.com").await.unwrap(), 1);
}

#[actix_web::test]
async fn test_upload_when_emails_differ_in_case_expect_both_created() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let pdf = common::build_pdf(&["Birds sing."]);
    for email in ["Case@example.com", "case@example.com"] {
        let req = common::upload_request(
            UPLOAD_URI,
            &[
                Part::Text("email", email),
                Part::File("pdf_file", "birds.pdf", &pdf),
            ],
        );
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED, "{email}");
    }
}

#[actix_web::test]
async fn test_upload_when_email_missing_expect_required_error() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let pdf = common::build_pdf(&["The cat runs fast."]);
    let req = common::upload_request(UPLOAD_URI, &[Part::File("pdf_file", "cat.pdf", &pdf)]);
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let actual: Value = test::read_body_json(resp).await;
    let expected = json!({ "email": ["This field is required."] });
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_upload_when_file_missing_expect_no_file_error() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let req = common::upload_request(UPLOAD_URI, &[Part::Text("email", "a@b.co")]);
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let actual: Value = test::read_body_json(resp).await;
    let expected = json!({ "pdf_file": ["No file was submitted."] });
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_upload_when_invalid_email_expect_invalid_email_error() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let pdf = common::build_pdf(&["The cat runs fast."]);
    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "not-an-email"),
            Part::File("pdf_file", "cat.pdf", &pdf),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let actual: Value = test::read_body_json(resp).await;
    let expected = json!({ "email": ["Enter a valid email address."] });
    assert_eq!(actual, expected);
    assert_eq!(state.db.count_by_email("not-an-email").await.unwrap(), 0);
}

#[actix_web::test]
async fn test_upload_when_file_empty_expect_empty_file_error() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "a@b.co"),
            Part::File("pdf_file", "empty.pdf", b""),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let actual: Value = test::read_body_json(resp).await;
    let expected = json!({ "pdf_file": ["The submitted file is empty."] });
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_upload_when_file_too_large_expect_size_error() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let oversized = vec![b'%'; state.upload.max_file_size + 1];
    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "a@b.co"),
            Part::File("pdf_file", "big.pdf", &oversized),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let actual: Value = test::read_body_json(resp).await;
    let message = format!(
        "Ensure this file is at most {} bytes.",
        state.upload.max_file_size
    );
    let expected = json!({ "pdf_file": [message] });
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_upload_when_file_too_large_and_sent_before_email_expect_only_size_error() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let oversized = vec![b'%'; state.upload.max_file_size + 1];
    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::File("pdf_file", "big.pdf", &oversized),
            Part::Text("email", "a@b.co"),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let actual: Value = test::read_body_json(resp).await;
    let message = format!(
        "Ensure this file is at most {} bytes.",
        state.upload.max_file_size
    );
    let expected = json!({ "pdf_file": [message] });
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_upload_when_body_not_multipart_expect_both_fields_missing() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let req = test::TestRequest::post()
        .uri(UPLOAD_URI)
        .set_json(json!({ "email": "a@b.co" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let actual: Value = test::read_body_json(resp).await;
    let expected = json!({
        "email": ["This field is required."],
        "pdf_file": ["No file was submitted."],
    });
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_upload_when_not_a_pdf_expect_unprocessable_and_nothing_stored() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "a@b.co"),
            Part::File("pdf_file", "notes.pdf", b"just some plain text"),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let actual: Value = test::read_body_json(resp).await;
    assert!(actual["error"]
        .as_str()
        .unwrap()
        .starts_with("Unreadable document"));
    assert_eq!(state.db.count_by_email("a@b.co").await.unwrap(), 0);
}

#[actix_web::test]
async fn test_upload_when_pdf_has_no_text_expect_unprocessable() {
    let dir = tempdir().unwrap();
    let state = common::initialize_state(&dir).await;
    let app = common::initialize_app(&state).await;
    let pdf = common::build_pdf(&[""]);
    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "blank@example.com"),
            Part::File("pdf_file", "blank.pdf", &pdf),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let actual: Value = test::read_body_json(resp).await;
    let expected = json!({ "error": "Document contains no extractable text" });
    assert_eq!(actual, expected);
}

/// Takes longer than any timeout used in these tests.
struct SlowExtractor;

impl TextExtractor for SlowExtractor {
    fn pages(&self, _document: &[u8]) -> Result<Vec<String>, ExtractionError> {
        std::thread::sleep(Duration::from_secs(2));
        Ok(vec!["The cat runs fast.".to_owned()])
    }
}

#[actix_web::test]
async fn test_upload_when_analysis_times_out_expect_service_unavailable() {
    let dir = tempdir().unwrap();
    let analyzer = Analyzer::new(Arc::new(SlowExtractor), Arc::new(RuleTagger::new()));
    let state =
        common::initialize_state_with(&dir, analyzer, Duration::from_millis(50)).await;
    let app = common::initialize_app(&state).await;
    let req = common::upload_request(
        UPLOAD_URI,
        &[
            Part::Text("email", "slow@example.com"),
            Part::File("pdf_file", "slow.pdf", b"%PDF-1.5"),
        ],
    );
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(state.db.count_by_email("slow@example.com").await.unwrap(), 0);
}
