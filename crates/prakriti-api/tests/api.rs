use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use prakriti_api::router;
use prakriti_api::state::AppState;
use prakriti_instruments::get_questionnaire;
use prakriti_instruments::questionnaire::{AnswerOption, QuestionKind};
use prakriti_storage::store::{FileStore, MemoryStore};

fn app() -> Router {
    router(AppState::new(Arc::new(MemoryStore::new())))
}

async fn respond(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, value)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let (status, _, value) = respond(app, request).await;
    (status, value)
}

async fn put_if_match(app: &Router, uri: &str, etag: &str, body: Value) -> (StatusCode, HeaderMap) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header(header::IF_MATCH, etag)
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, headers, _) = respond(app, request).await;
    (status, headers)
}

fn etag(headers: &HeaderMap) -> String {
    headers[header::ETAG].to_str().unwrap().to_string()
}

fn personal_info() -> Value {
    json!({
        "full_name": "Asha Rao",
        "email": "asha@example.com",
        "age": 34,
        "gender": "female",
        "health_goals": ["improve-digestion", "better-sleep"],
        "terms_accepted": true
    })
}

fn first_kapha(options: &[AnswerOption]) -> &str {
    options
        .iter()
        .find(|o| o.id.starts_with("kapha_"))
        .unwrap_or(&options[0])
        .id
        .as_str()
}

/// One answer request per prompt, leaning Kapha.
fn kapha_answer_bodies() -> Vec<Value> {
    let mut bodies = Vec::new();
    for question in get_questionnaire().questions() {
        match &question.kind {
            QuestionKind::Single { options } => {
                bodies.push(json!({ "question_id": question.id, "option_id": first_kapha(options) }));
            }
            QuestionKind::Multi { sub_questions } => {
                for sub in sub_questions {
                    bodies.push(json!({
                        "question_id": question.id,
                        "sub_question_id": sub.id,
                        "option_id": first_kapha(&sub.options)
                    }));
                }
            }
        }
    }
    bodies
}

/// Answer every prompt through the API, one request at a time.
async fn answer_everything(app: &Router, session: Uuid) -> Value {
    let uri = format!("/sessions/{session}/answers");
    let mut last = Value::Null;
    for body in kapha_answer_bodies() {
        let (status, value) = send(app, "POST", &uri, Some(body)).await;
        assert_eq!(status, StatusCode::OK, "{value}");
        last = value;
    }
    last
}

fn count_selections(answers: &Value) -> usize {
    answers
        .as_object()
        .unwrap()
        .values()
        .map(|answer| match answer {
            Value::String(_) => 1,
            Value::Object(subs) => subs.values().map(|ids| ids.as_array().unwrap().len()).sum(),
            other => panic!("unexpected answer shape: {other}"),
        })
        .sum()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn questionnaire_lists_sections_and_questions() {
    let app = app();
    let (status, body) = send(&app, "GET", "/questionnaire", None).await;
    assert_eq!(status, StatusCode::OK);
    let sections = body.as_array().unwrap();
    assert_eq!(sections.len(), 3);
    let total: usize = sections
        .iter()
        .map(|s| s["questions"].as_array().unwrap().len())
        .sum();
    assert_eq!(total, 15);

    let (status, body) = send(&app, "GET", "/questionnaire/questions/skin_features", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"]["type"], "multi");

    let (status, body) = send(&app, "GET", "/questionnaire/questions/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nope"));

    let (status, _) = send(&app, "GET", "/questionnaire/sections/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn score_and_classify() {
    let app = app();
    let answers = json!({
        "answers": {
            "body_musculature": "pitta_kapha_musculature",
            "strength_assessment": "kapha_strength"
        }
    });
    let (status, body) = send(&app, "POST", "/score", Some(answers)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "vata": 0, "pitta": 1, "kapha": 2 }));

    let (status, body) = send(&app, "POST", "/classify", Some(json!({ "vata": 5, "pitta": 5, "kapha": 1 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Vata-Pitta");
    assert_eq!(body["primary"], "Vata");
    assert_eq!(body["primary_dosha"], "vata");
    assert_eq!(body["secondary_dosha"], "pitta");
}

#[tokio::test]
async fn score_rejects_unknown_questions() {
    let (status, body) = send(
        &app(),
        "POST",
        "/score",
        Some(json!({ "answers": { "favourite_colour": "vata_blue" } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["kind"], "unknown_question");
}

#[tokio::test]
async fn guidance_combines_doshas() {
    let app = app();
    let (status, single) = send(&app, "GET", "/guidance/pitta", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, dual) = send(&app, "GET", "/guidance/Pitta?secondary=kapha", None).await;
    assert_eq!(status, StatusCode::OK);
    let single_len = single["characteristics"].as_array().unwrap().len();
    let dual = dual["characteristics"].as_array().unwrap();
    assert!(dual.len() > single_len);
    assert_eq!(dual[..single_len], single["characteristics"].as_array().unwrap()[..]);

    let (status, _) = send(&app, "GET", "/guidance/ether", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn progress_round_trip() {
    let app = app();
    let session = Uuid::new_v4();
    let uri = format!("/sessions/{session}/progress");

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let body = json!({
        "step": "assessment",
        "question_index": 2,
        "answers": { "strength_assessment": "vata_strength" },
        "personal_info": personal_info()
    });
    let (status, saved) = send(&app, "PUT", &uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(saved["saved_at"].is_string());

    let (status, loaded) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loaded, saved);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn saving_progress_with_bad_shape_is_rejected() {
    let session = Uuid::new_v4();
    let body = json!({ "answers": { "strength_assessment": { "anything": "vata_x" } } });
    let (status, body) = send(&app(), "PUT", &format!("/sessions/{session}/progress"), Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["kind"], "shape_mismatch");
}

#[tokio::test]
async fn recording_answers_autosaves_progress() {
    let app = app();
    let session = Uuid::new_v4();
    let uri = format!("/sessions/{session}/answers");

    let body = json!({
        "question_id": "skin_features",
        "sub_question_id": "skin_appearance",
        "option_id": "vata_skin_cracked"
    });
    let (status, body) = send(&app, "POST", &uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["answers"]["skin_features"]["skin_appearance"], json!(["vata_skin_cracked"]));
    assert_eq!(body["question_complete"], false);
    assert_eq!(body["complete"], false);

    let (status, progress) = send(&app, "GET", &format!("/sessions/{session}/progress"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress["step"], "assessment");
    assert_eq!(progress["answers"], body["answers"]);
}

#[tokio::test]
async fn recording_unknown_option_is_rejected() {
    let session = Uuid::new_v4();
    let body = json!({ "question_id": "strength_assessment", "option_id": "pitta_skin_moles" });
    let (status, body) = send(&app(), "POST", &format!("/sessions/{session}/answers"), Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["kind"], "unknown_option");
}

#[tokio::test]
async fn completing_early_names_first_unanswered_question() {
    let session = Uuid::new_v4();
    let body = json!({ "personal_info": personal_info(), "role": "patient" });
    let (status, body) = send(&app(), "POST", &format!("/sessions/{session}/complete"), Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["question_id"], get_questionnaire().questions()[0].id);
}

#[tokio::test]
async fn completing_with_invalid_personal_info_lists_fields() {
    let app = app();
    let session = Uuid::new_v4();
    answer_everything(&app, session).await;

    let body = json!({ "personal_info": { "full_name": "", "email": "asha" }, "role": "patient" });
    let (status, body) = send(&app, "POST", &format!("/sessions/{session}/complete"), Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["fields"]["full_name"], "Full name is required");
    assert_eq!(body["details"]["fields"]["email"], "Invalid email format");
}

#[tokio::test]
async fn practitioner_completion_hands_off_recent_patient() {
    let app = app();
    let session = Uuid::new_v4();
    let last = answer_everything(&app, session).await;
    assert_eq!(last["complete"], true);
    assert_eq!(last["progress_percent"], 100);

    let body = json!({ "personal_info": personal_info(), "role": "practitioner" });
    let (status, completed) = send(&app, "POST", &format!("/sessions/{session}/complete"), Some(body)).await;
    assert_eq!(status, StatusCode::OK, "{completed}");
    assert_eq!(completed["result"]["label"], "Kapha");
    assert_eq!(completed["result"]["scores"], json!({ "vata": 4, "pitta": 2, "kapha": 48 }));

    let (status, stored) = send(&app, "GET", &format!("/sessions/{session}/assessment"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored, completed);

    let (status, _) = send(&app, "GET", &format!("/sessions/{session}/progress"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let recent_uri = format!("/sessions/{session}/recent-patient");
    let (status, patient) = send(&app, "GET", &recent_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patient["name"], "Asha Rao");
    assert_eq!(patient["constitution"], "Kapha");

    let (status, _) = send(&app, "GET", &recent_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patient_completion_skips_the_hand_off() {
    let app = app();
    let session = Uuid::new_v4();
    answer_everything(&app, session).await;

    let body = json!({ "personal_info": personal_info(), "role": "patient" });
    let (status, _) = send(&app, "POST", &format!("/sessions/{session}/complete"), Some(body)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/sessions/{session}/recent-patient"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn file_store_backs_sessions_across_routers() {
    let dir = tempfile::tempdir().unwrap();
    let session = Uuid::new_v4();
    let uri = format!("/sessions/{session}/progress");

    let first = router(AppState::new(Arc::new(FileStore::open(dir.path()).unwrap())));
    let body = json!({ "answers": { "strength_assessment": "kapha_strength" } });
    let (status, _) = send(&first, "PUT", &uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK);

    let second = router(AppState::new(Arc::new(FileStore::open(dir.path()).unwrap())));
    let (status, loaded) = send(&second, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loaded["answers"]["strength_assessment"], "kapha_strength");
}

#[tokio::test]
async fn progress_carries_an_etag_for_conditional_saves() {
    let app = app();
    let session = Uuid::new_v4();
    let uri = format!("/sessions/{session}/progress");

    let body = json!({ "answers": { "strength_assessment": "vata_strength" } });
    let (status, _) = put_if_match(&app, &uri, "\"0000000000000000-0\"", body.clone()).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let request = Request::builder()
        .method("PUT")
        .uri(&uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, headers, _) = respond(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let first = etag(&headers);

    let newer = json!({ "answers": { "strength_assessment": "kapha_strength" } });
    let (status, headers) = put_if_match(&app, &uri, &first, newer).await;
    assert_eq!(status, StatusCode::OK);
    let second = etag(&headers);
    assert_ne!(first, second);

    // A writer still holding the first ETag must not clobber the newer save.
    let stale = json!({ "answers": { "strength_assessment": "pitta_strength" } });
    let (status, _) = put_if_match(&app, &uri, &first, stale).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let request = Request::builder().uri(&uri).body(Body::empty()).unwrap();
    let (status, headers, loaded) = respond(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(etag(&headers), second);
    assert_eq!(loaded["answers"]["strength_assessment"], "kapha_strength");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_answers_to_one_session_are_all_kept() {
    let app = app();
    let session = Uuid::new_v4();
    let uri = format!("/sessions/{session}/answers");
    let bodies = kapha_answer_bodies();
    assert_eq!(bodies.len(), 51);

    let mut requests = tokio::task::JoinSet::new();
    for body in bodies {
        let app = app.clone();
        let uri = uri.clone();
        requests.spawn(async move { send(&app, "POST", &uri, Some(body)).await });
    }
    while let Some(joined) = requests.join_next().await {
        let (status, body) = joined.unwrap();
        assert_eq!(status, StatusCode::OK, "{body}");
    }

    let (status, progress) = send(&app, "GET", &format!("/sessions/{session}/progress"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count_selections(&progress["answers"]), 51);

    let body = json!({ "personal_info": personal_info(), "role": "patient" });
    let (status, completed) = send(&app, "POST", &format!("/sessions/{session}/complete"), Some(body)).await;
    assert_eq!(status, StatusCode::OK, "{completed}");
    assert_eq!(completed["result"]["scores"], json!({ "vata": 4, "pitta": 2, "kapha": 48 }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_answers_to_a_file_store_are_all_kept() {
    let dir = tempfile::tempdir().unwrap();
    let app = router(AppState::new(Arc::new(FileStore::open(dir.path()).unwrap())));
    let session = Uuid::new_v4();
    let uri = format!("/sessions/{session}/answers");

    let mut requests = tokio::task::JoinSet::new();
    for body in kapha_answer_bodies() {
        let app = app.clone();
        let uri = uri.clone();
        requests.spawn(async move { send(&app, "POST", &uri, Some(body)).await });
    }
    while let Some(joined) = requests.join_next().await {
        let (status, body) = joined.unwrap();
        assert_eq!(status, StatusCode::OK, "{body}");
    }

    let (status, progress) = send(&app, "GET", &format!("/sessions/{session}/progress"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count_selections(&progress["answers"]), 51);
}

#[tokio::test]
async fn completion_accepts_kebab_case_form_values() {
    let app = app();
    let session = Uuid::new_v4();
    answer_everything(&app, session).await;

    let mut info = personal_info();
    info["gender"] = json!("prefer-not-to-say");
    info["health_goals"] = json!(["weight-loss", "stress-management"]);
    let body = json!({ "personal_info": info, "role": "patient" });
    let (status, completed) = send(&app, "POST", &format!("/sessions/{session}/complete"), Some(body)).await;
    assert_eq!(status, StatusCode::OK, "{completed}");
    assert_eq!(completed["personal_info"]["gender"], "prefer-not-to-say");
    assert_eq!(completed["personal_info"]["health_goals"], json!(["weight-loss", "stress-management"]));
}
