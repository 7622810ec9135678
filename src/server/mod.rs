//! Local site server: renders the four lesson panels and a small JSON API.
//!
//! The server is meant for one learner on one machine, so it owns a single
//! [`QuizSession`]. Playground state lives entirely in the query string and
//! is re-resolved on every request.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};

use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::content::{self, TUTORIALS};
use crate::error::Result;
use crate::quiz::{QuestionBank, QuizSession};
use crate::style::{self, CenteringMethod, PlaygroundParams};

mod css;
mod page;
mod panels;
mod util;

use page::Section;

/// Where to listen and which questions to ask.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub bank: Arc<QuestionBank>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            bank: Arc::new(QuestionBank::builtin()),
        }
    }
}

struct SiteState {
    quiz: Mutex<QuizSession>,
}

type Shared = Arc<SiteState>;

/// Build the site router around a fresh quiz session.
pub fn router(bank: Arc<QuestionBank>) -> Router {
    let state = Arc::new(SiteState {
        quiz: Mutex::new(QuizSession::new(bank)),
    });

    Router::new()
        .route("/", get(serve_techniques))
        .route("/techniques", get(serve_techniques))
        .route("/playground", get(serve_playground))
        .route("/tutorials", get(serve_tutorials))
        .route("/quiz", get(serve_quiz))
        .route("/quiz/answer", post(serve_quiz_answer))
        .route("/quiz/next", post(serve_quiz_next))
        .route("/quiz/reset", post(serve_quiz_reset))
        .route("/api/resolve", get(serve_api_resolve))
        .route("/api/quiz", get(serve_api_quiz))
        .route("/api/quiz/answer", post(serve_api_quiz_answer))
        .route("/api/quiz/next", post(serve_api_quiz_next))
        .route("/api/quiz/reset", post(serve_api_quiz_reset))
        .fallback(serve_not_found)
        .with_state(state)
}

/// Start the site server and block until it stops.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    let app = router(config.bank.clone());

    log::info!(
        "serving {} quiz question(s) at http://{addr}/",
        config.bank.len()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// ── Error helpers ─────────────────────────────────────────────────────

fn error_page(status: StatusCode, message: &str) -> Response {
    (status, Html(page::build_error_page(message))).into_response()
}

/// Malformed user input on an HTML route: log it and show the site's error page.
fn bad_request_page(route: &str, message: &str) -> Response {
    log::warn!("{route}: {message}");
    error_page(StatusCode::BAD_REQUEST, message)
}

#[derive(Serialize)]
struct ApiError {
    error: String,
}

fn api_error(status: StatusCode, message: impl ToString) -> Response {
    (
        status,
        Json(ApiError {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Run `f` against the session, or report a poisoned lock.
fn with_quiz<T>(state: &Shared, f: impl FnOnce(&mut QuizSession) -> T) -> std::result::Result<T, String> {
    match state.quiz.lock() {
        Ok(mut session) => Ok(f(&mut session)),
        Err(e) => {
            log::error!("quiz session lock poisoned: {e}");
            Err(format!("Lock error: {e}"))
        }
    }
}

// ── Lesson panels ─────────────────────────────────────────────────────

async fn serve_techniques() -> Html<String> {
    Html(page::build_page(Section::Techniques, &panels::build_techniques()))
}

#[derive(Debug, Deserialize)]
struct PlaygroundQuery {
    method: Option<String>,
    content: Option<u32>,
    parent: Option<u32>,
}

impl PlaygroundQuery {
    fn method(&self) -> Result<CenteringMethod> {
        match &self.method {
            Some(m) => m.parse(),
            None => Ok(CenteringMethod::default()),
        }
    }

    /// Slider semantics: out-of-range sizes snap to the nearest bound.
    fn clamped(&self) -> Result<PlaygroundParams> {
        let defaults = PlaygroundParams::default();
        Ok(PlaygroundParams::clamped(
            self.method()?,
            self.content.unwrap_or(defaults.content_size()),
            self.parent.unwrap_or(defaults.parent_size()),
        ))
    }

    /// API semantics: out-of-range sizes are rejected.
    fn strict(&self) -> Result<PlaygroundParams> {
        let defaults = PlaygroundParams::default();
        PlaygroundParams::new(
            self.method()?,
            self.content.unwrap_or(defaults.content_size()),
            self.parent.unwrap_or(defaults.parent_size()),
        )
    }
}

async fn serve_playground(query: std::result::Result<Query<PlaygroundQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return bad_request_page("playground", &rejection.body_text()),
    };
    match query.clamped() {
        Ok(params) => {
            let style = style::resolve(&params);
            Html(page::build_page(
                Section::Playground,
                &panels::build_playground(&params, &style),
            ))
            .into_response()
        }
        Err(e) => bad_request_page("playground", &e.to_string()),
    }
}

#[derive(Debug, Deserialize)]
struct TutorialQuery {
    topic: Option<String>,
    open: Option<usize>,
}

async fn serve_tutorials(query: std::result::Result<Query<TutorialQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return bad_request_page("tutorials", &rejection.body_text()),
    };
    let tutorial = match query.topic.as_deref() {
        None => &TUTORIALS[0],
        Some(id) => match content::tutorial(id) {
            Some(t) => t,
            None => {
                log::warn!("tutorials: unknown topic {id:?}");
                return error_page(StatusCode::NOT_FOUND, &format!("No tutorial named '{id}'"));
            }
        },
    };
    Html(page::build_page(
        Section::Tutorials,
        &panels::build_tutorials(tutorial, query.open),
    ))
    .into_response()
}

async fn serve_not_found() -> Response {
    error_page(StatusCode::NOT_FOUND, "Page not found")
}

// ── Quiz (HTML forms) ─────────────────────────────────────────────────

async fn serve_quiz(State(state): State<Shared>) -> Response {
    match with_quiz(&state, |session| panels::build_quiz(session)) {
        Ok(body) => Html(page::build_page(Section::Quiz, &body)).into_response(),
        Err(e) => error_page(StatusCode::INTERNAL_SERVER_ERROR, &e),
    }
}

#[derive(Debug, Deserialize)]
struct AnswerForm {
    option: usize,
}

// Rejected transitions (double answers, early advance) re-render unchanged.

async fn serve_quiz_answer(
    State(state): State<Shared>,
    form: std::result::Result<Form<AnswerForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(f) => f,
        Err(rejection) => return bad_request_page("quiz answer", &rejection.body_text()),
    };
    let result = with_quiz(&state, |session| {
        if let Err(e) = session.select_answer(form.option) {
            log::debug!("quiz answer rejected: {e}");
        }
    });
    quiz_redirect(result)
}

async fn serve_quiz_next(State(state): State<Shared>) -> Response {
    let result = with_quiz(&state, |session| {
        if let Err(e) = session.advance() {
            log::debug!("quiz advance rejected: {e}");
        }
    });
    quiz_redirect(result)
}

async fn serve_quiz_reset(State(state): State<Shared>) -> Response {
    quiz_redirect(with_quiz(&state, QuizSession::reset))
}

fn quiz_redirect(result: std::result::Result<(), String>) -> Response {
    match result {
        Ok(()) => Redirect::to("/quiz").into_response(),
        Err(e) => error_page(StatusCode::INTERNAL_SERVER_ERROR, &e),
    }
}

// ── JSON API ──────────────────────────────────────────────────────────

async fn serve_api_resolve(query: std::result::Result<Query<PlaygroundQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return api_error(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    match query.strict() {
        Ok(params) => Json(style::resolve(&params)).into_response(),
        Err(e) => api_error(StatusCode::BAD_REQUEST, e),
    }
}

async fn serve_api_quiz(State(state): State<Shared>) -> Response {
    match with_quiz(&state, |session| session.snapshot()) {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => api_error(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

async fn serve_api_quiz_answer(
    State(state): State<Shared>,
    body: std::result::Result<Json<AnswerForm>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return api_error(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    match with_quiz(&state, |session| session.select_answer(body.option)) {
        Ok(Ok(feedback)) => Json(feedback).into_response(),
        Ok(Err(e)) => api_error(StatusCode::CONFLICT, e),
        Err(e) => api_error(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

async fn serve_api_quiz_next(State(state): State<Shared>) -> Response {
    match with_quiz(&state, |session| session.advance()) {
        Ok(Ok(progress)) => Json(progress).into_response(),
        Ok(Err(e)) => api_error(StatusCode::CONFLICT, e),
        Err(e) => api_error(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

async fn serve_api_quiz_reset(State(state): State<Shared>) -> Response {
    match with_quiz(&state, |session| {
        session.reset();
        session.snapshot()
    }) {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => api_error(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}
