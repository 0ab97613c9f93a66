use actix_web::{post, web, HttpMessage, HttpRequest, HttpResponse};
use futures::StreamExt;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::Document,
        dto::{GenerateQuestionsQuery, GenerateQuestionsResponse},
    },
    services::http_helpers::success_json,
};

const ACCEPTED_CONTENT_TYPES: [&str; 2] = ["application/pdf", "application/octet-stream"];

/// Body is the raw PDF; an empty body means no file was attached.
#[post("/api/questions")]
pub async fn generate_questions(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<GenerateQuestionsQuery>,
    payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req);
    let tag = request_id.as_deref().unwrap_or("-");

    let spec = query.into_inner().into_spec()?;
    let body = read_upload(payload, state.config.max_upload_bytes)
        .await
        .map_err(|e| {
            log::warn!("[{}] upload rejected: {}", tag, e);
            e
        })?;
    if !body.is_empty() {
        check_content_type(&req)?;
    }

    let document = (!body.is_empty()).then(|| Document::new(body.to_vec()));
    let outcome = state.pipeline.run(document, &spec).await.map_err(|e| {
        log::warn!("[{}] question request failed ({}): {}", tag, e.error_code(), e);
        e
    })?;

    log::info!(
        "[{}] generated {} {} question(s)",
        tag,
        spec.question_count(),
        spec.question_type()
    );

    Ok(success_json(GenerateQuestionsResponse::new(
        &spec,
        state.config.prompt_language,
        outcome,
        request_id,
    )))
}

/// Collects the request body, failing as soon as it grows past `limit` bytes.
async fn read_upload(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut, AppError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if body.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn check_content_type(req: &HttpRequest) -> Result<(), AppError> {
    let mime = req
        .mime_type()
        .map_err(|e| AppError::ValidationError(format!("Invalid Content-Type: {}", e)))?;

    match mime {
        None => Ok(()),
        Some(mime) if ACCEPTED_CONTENT_TYPES.contains(&mime.essence_str()) => Ok(()),
        Some(mime) => Err(AppError::ValidationError(format!(
            "Only PDF uploads are accepted, got '{}'",
            mime.essence_str()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::Config,
        handlers::configure,
        models::domain::GenerationResult,
        services::generator::{GeneratorInfo, MockQuestionGenerator},
        test_utils::{
            fixtures::{pdf_with_pages, text_of_len},
            test_helpers::{assert_error_status, assert_success_status},
        },
    };
    use actix_web::{http::StatusCode, test, App};

    fn state_with(generator: MockQuestionGenerator) -> AppState {
        AppState::with_generator(Config::test_config(), Arc::new(generator))
    }

    #[actix_web::test]
    async fn test_oversized_upload_is_json_warning() {
        let mut config = Config::test_config();
        config.max_upload_bytes = 1024;
        let state = AppState::with_generator(config, Arc::new(idle_generator()));

        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
            .await;

        let pdf = pdf_with_pages(&[Some(text_of_len(3000).as_str())]);
        assert!(pdf.len() > 1024);
        let req = test::TestRequest::post()
            .uri("/api/questions")
            .insert_header(("content-type", "application/pdf"))
            .set_payload(pdf)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
        assert_eq!(body["level"], "warning");
    }

    #[actix_web::test]
    async fn test_upload_at_limit_is_accepted() {
        let pdf = pdf_with_pages(&[Some(text_of_len(300).as_str())]);

        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Ok(GenerationResult::new("ok")));

        let mut config = Config::test_config();
        config.max_upload_bytes = pdf.len();
        let state = AppState::with_generator(config, Arc::new(generator));

        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
            .await;

        let req = test::TestRequest::post()
            .uri("/api/questions")
            .insert_header(("content-type", "application/pdf"))
            .set_payload(pdf)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());
    }

    fn idle_generator() -> MockQuestionGenerator {
        let mut generator = MockQuestionGenerator::new();
        generator.expect_generate().times(0);
        generator.expect_info().returning(|| GeneratorInfo {
            backend: "mock".to_string(),
            model: "mock-model".to_string(),
        });
        generator
    }

    #[actix_web::test]
    async fn test_generate_questions_success() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt, _| prompt.as_str().contains("create 3 questions"))
            .times(1)
            .returning(|_, _| Ok(GenerationResult::new("1. True or false: ...")));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(generator)))
                .configure(configure),
        )
        .await;

        let pdf = pdf_with_pages(&[Some(text_of_len(200).as_str())]);
        let req = test::TestRequest::post()
            .uri("/api/questions?question_type=true_false&question_count=3")
            .insert_header(("content-type", "application/pdf"))
            .set_payload(pdf)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["questions"], "1. True or false: ...");
        assert_eq!(body["question_count"], 3);
    }

    #[actix_web::test]
    async fn test_empty_body_is_no_file_warning() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(idle_generator())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/questions").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "NO_FILE");
        assert_eq!(body["level"], "warning");
    }

    #[actix_web::test]
    async fn test_rejects_non_pdf_content_type() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(idle_generator())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions")
            .insert_header(("content-type", "image/png"))
            .set_payload(vec![0x89, b'P', b'N', b'G'])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_out_of_range_count_is_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(idle_generator())))
                .configure(configure),
        )
        .await;

        for uri in [
            "/api/questions?question_count=0",
            "/api/questions?question_count=16",
            "/api/questions?question_count=many",
        ] {
            let req = test::TestRequest::post()
                .uri(uri)
                .set_payload(pdf_with_pages(&[Some("x")]))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_error_status(resp.status());

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], "VALIDATION_ERROR");
        }
    }
}
