//! Request handlers.
//!
//! Handlers stay thin: parsing and grouping live in [`classgroup`], session
//! bookkeeping in [`crate::server::session`].

use crate::server::{
    error::AppError,
    routes::views::{IndexPage, ResultsPage},
    session::{SESSION_COOKIE, SessionId},
    state::AppState,
    telemetry::{record_document, record_grouping},
};
use askama::Template;
use axum::{
    Form,
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use classgroup::{GroupSize, PDF_CONTENT_TYPE, normalize_names, render, shuffle_into_groups};
use serde::Deserialize;

/// `Content-Disposition` of the PDF download.
pub const PDF_DISPOSITION: &str = "attachment; filename=class_groups.pdf";

/// Fields posted by the roster form. Missing fields behave as empty.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub raw_names: String,
    #[serde(default)]
    pub group_size: String,
}

/// Reads the session id from the signed cookie, if present and well-formed.
fn current_session(jar: &SignedCookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// Returns the client's session id, issuing a new cookie when it has none.
fn ensure_session(jar: SignedCookieJar) -> (SignedCookieJar, SessionId) {
    if let Some(id) = current_session(&jar) {
        return (jar, id);
    }

    let id = SessionId::random();
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), id)
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexPage {
        default_group_size: state.config.default_group_size.get(),
    };
    Ok(Html(page.render()?))
}

/// Groups the posted roster and remembers the result in the session.
///
/// An unparseable or non-positive `group_size` silently becomes the
/// configured default. An empty roster is a `400`.
#[tracing::instrument(skip_all)]
pub async fn analyze(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<AnalyzeForm>,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let size = GroupSize::parse_or(&form.group_size, state.config.default_group_size);
    let names = normalize_names(&form.raw_names)?;

    let limit = state.config.max_names;
    if names.len() > limit {
        return Err(AppError::TooManyNames { limit });
    }

    let groups = shuffle_into_groups(names, size, &mut rand::rng());
    let total_students = groups.total_members();

    let page = ResultsPage {
        groups: &groups,
        total_students,
    }
    .render()?;

    let (jar, id) = ensure_session(jar);
    tracing::info!(
        groups = groups.len(),
        total_students,
        size = size.get(),
        "Roster grouped"
    );
    state.sessions.store(id, groups);
    record_grouping(total_students);

    Ok((jar, Html(page)))
}

/// Serves the session's grouping as a PDF, or sends the client back to the
/// form when there is nothing to print.
#[tracing::instrument(skip_all)]
pub async fn download_pdf(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, AppError> {
    let data = current_session(&jar)
        .and_then(|id| state.sessions.load(id))
        .filter(|data| !data.groups.is_empty());

    let Some(data) = data else {
        tracing::debug!("No grouping in session, redirecting to the form");
        return Ok(Redirect::to("/").into_response());
    };

    let bytes = render(&data.groups)?;
    record_document(bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, PDF_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, PDF_DISPOSITION),
        ],
        bytes,
    )
        .into_response())
}

pub async fn healthz() -> &'static str {
    "ok"
}
