// src/client/submit.rs
use log::{debug, warn};
use reqwest::Client;

use crate::client::form::{collect_request, FormSource};
use crate::client::render::{render, GenerateOutcome, ResultSink};
use crate::client::SubmitError;

pub const GENERATE_PATH: &str = "/generate";

/// A form submission. Handling it cancels the default navigation.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Posts the generator form to `/generate` and renders the answer.
///
/// Every submission is one independent request: nothing is cancelled,
/// de-duplicated or timed out. The HTTP status is not inspected, so an
/// error body on a 400 renders like any other response.
pub struct SubmitHandler {
    client: Client,
    endpoint: String,
}

impl SubmitHandler {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), GENERATE_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Handle one submission.
    ///
    /// On success exactly one setter of `sink` is called. Transport and
    /// decoding failures are returned and leave `sink` untouched.
    pub async fn on_submit<F, S>(
        &self,
        event: &mut SubmitEvent,
        form: &F,
        sink: &mut S,
    ) -> Result<(), SubmitError>
    where
        F: FormSource + ?Sized,
        S: ResultSink + ?Sized,
    {
        event.prevent_default();

        let payload = collect_request(form)?;
        debug!("📤 POST {} (length {:?})", self.endpoint, payload.length);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("❌ Request to {} failed: {}", self.endpoint, e);
                SubmitError::Transport(e)
            })?;
        debug!("📥 {} answered {}", self.endpoint, response.status());

        let body = response.bytes().await?;
        let outcome: GenerateOutcome = serde_json::from_slice(&body).map_err(|e| {
            warn!("❌ Unreadable response from {}: {}", self.endpoint, e);
            SubmitError::MalformedResponse(e)
        })?;

        render(&outcome).apply_to(sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::configure_routes;
    use crate::api::AppState;
    use crate::client::form::FormState;
    use crate::client::render::{ResultContent, ResultNode};
    use crate::core::config::Config;
    use actix_web::http::{header, StatusCode};
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Canned `/generate` endpoint that records what it was sent.
    struct Stub {
        status: StatusCode,
        body: String,
        seen: Mutex<Vec<(Option<String>, Vec<u8>)>>,
    }

    async fn stub_generate(req: HttpRequest, body: web::Bytes, stub: web::Data<Stub>) -> HttpResponse {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        stub.seen.lock().unwrap().push((content_type, body.to_vec()));
        HttpResponse::build(stub.status)
            .content_type("application/json")
            .body(stub.body.clone())
    }

    fn spawn_stub(status: StatusCode, body: &str) -> (String, web::Data<Stub>) {
        let stub = web::Data::new(Stub {
            status,
            body: body.to_string(),
            seen: Mutex::new(Vec::new()),
        });
        let data = stub.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route(GENERATE_PATH, web::post().to(stub_generate))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        (format!("http://{}", addr), stub)
    }

    fn default_form() -> FormState {
        FormState::generator("16", true, true, true, false)
    }

    #[actix_web::test]
    async fn posts_json_and_prevents_navigation() {
        let (base_url, stub) = spawn_stub(StatusCode::OK, r#"{"passwords":[]}"#);
        let handler = SubmitHandler::new(&base_url);
        let mut event = SubmitEvent::new();
        let mut node = ResultNode::default();

        handler
            .on_submit(&mut event, &FormState::generator("20", false, true, true, true), &mut node)
            .await
            .unwrap();

        assert!(event.default_prevented());
        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("application/json"));
        let body: Value = serde_json::from_slice(&seen[0].1).unwrap();
        assert_eq!(
            body,
            json!({
                "length": "20",
                "uppercase": false,
                "lowercase": true,
                "numbers": true,
                "symbols": true,
            })
        );
    }

    #[actix_web::test]
    async fn renders_password_list_as_markup() {
        let (base_url, _stub) = spawn_stub(
            StatusCode::OK,
            r#"{"passwords":[{"password":"ab12","score_percent":50},{"password":"cd34","score_percent":80}]}"#,
        );
        let handler = SubmitHandler::new(&base_url);
        let mut node = ResultNode::default();

        handler
            .on_submit(&mut SubmitEvent::new(), &default_form(), &mut node)
            .await
            .unwrap();

        assert_eq!(
            node.content,
            Some(ResultContent::Html("ab12 — 50%<br>cd34 — 80%".to_string()))
        );
    }

    #[actix_web::test]
    async fn error_body_is_shown_regardless_of_status() {
        let (base_url, _stub) = spawn_stub(StatusCode::BAD_REQUEST, r#"{"error":"x"}"#);
        let handler = SubmitHandler::new(&format!("{}/", base_url));
        let mut node = ResultNode::default();

        handler
            .on_submit(&mut SubmitEvent::new(), &default_form(), &mut node)
            .await
            .unwrap();

        assert_eq!(node.content, Some(ResultContent::Text("x".to_string())));
    }

    #[actix_web::test]
    async fn malformed_json_leaves_the_node_untouched() {
        let (base_url, _stub) = spawn_stub(StatusCode::OK, "<html>oops</html>");
        let handler = SubmitHandler::new(&base_url);
        let mut event = SubmitEvent::new();
        let mut node = ResultNode::default();

        let err = handler
            .on_submit(&mut event, &default_form(), &mut node)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::MalformedResponse(_)));
        assert!(event.default_prevented());
        assert!(node.content.is_none());
    }

    #[actix_web::test]
    async fn unreachable_server_is_a_transport_error() {
        // bind then drop a listener so the port is known to be closed
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let handler = SubmitHandler::new(&format!("http://127.0.0.1:{}", port));
        let mut node = ResultNode::default();

        let err = handler
            .on_submit(&mut SubmitEvent::new(), &default_form(), &mut node)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Transport(_)));
        assert!(node.content.is_none());
    }

    #[actix_web::test]
    async fn each_submission_is_its_own_request() {
        let (base_url, stub) = spawn_stub(StatusCode::OK, r#"{"passwords":[]}"#);
        let handler = SubmitHandler::new(&base_url);
        let form = default_form();
        let mut first = ResultNode::default();
        let mut second = ResultNode::default();

        let (mut first_event, mut second_event) = (SubmitEvent::new(), SubmitEvent::new());

        let (a, b) = tokio::join!(
            handler.on_submit(&mut first_event, &form, &mut first),
            handler.on_submit(&mut second_event, &form, &mut second),
        );
        a.unwrap();
        b.unwrap();

        assert_eq!(stub.seen.lock().unwrap().len(), 2);
        assert!(first_event.default_prevented() && second_event.default_prevented());
    }

    #[actix_web::test]
    async fn round_trip_against_the_real_service() {
        let state = web::Data::new(AppState::new(Config::default()));
        let server = HttpServer::new(move || {
            App::new().app_data(state.clone()).configure(configure_routes)
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        let handler = SubmitHandler::new(&format!("http://{}", addr));
        let mut node = ResultNode::default();
        handler
            .on_submit(&mut SubmitEvent::new(), &FormState::generator("8", true, true, true, false), &mut node)
            .await
            .unwrap();

        let Some(ResultContent::Html(html)) = node.content.clone() else {
            panic!("expected rendered passwords, got {:?}", node.content);
        };
        let lines: Vec<_> = html.split("<br>").collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            let (password, score) = line.split_once(" — ").unwrap();
            assert_eq!(password.len(), 8);
            assert_eq!(score, "74%");
        }

        let mut node = ResultNode::default();
        handler
            .on_submit(&mut SubmitEvent::new(), &FormState::generator("8", false, false, false, false), &mut node)
            .await
            .unwrap();
        assert_eq!(
            node.content,
            Some(ResultContent::Text("Выберите хотя бы один тип символов".to_string()))
        );
    }
}
