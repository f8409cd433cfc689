use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::cookie::CookieJar;
use lessongen_core::MarkdownExport;
use serde_json::Value;

use super::{to_error, AppState};
use crate::session::SESSION_COOKIE;

pub fn routes() -> Router<AppState> {
    Router::new().route("/download", get(download))
}

/// The caller's own displayed result. Other sessions' results are invisible.
async fn download(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let displayed = jar
        .get(SESSION_COOKIE)
        .and_then(|c| {
            state
                .sessions
                .read_form(c.value(), |form| form.material().map(|m| m.display_text()))
        })
        .flatten()
        .ok_or_else(|| to_error(StatusCode::NOT_FOUND, "no generated material yet"))?;

    let export = MarkdownExport::new(&displayed);
    let headers = [
        (header::CONTENT_TYPE, export.mime().to_string()),
        (header::CONTENT_DISPOSITION, export.content_disposition()),
    ];
    Ok((headers, export.into_bytes()).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use lessongen_core::{Credential, Difficulty};
    use lessongen_service::MockCompletion;
    use tower::ServiceExt;

    use crate::routes::generate_for_page;
    use crate::session::SESSION_COOKIE;
    use crate::test_helpers::{router_for, state_with};

    fn get_download(session: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/download");
        if let Some(id) = session {
            builder = builder.header(header::COOKIE, format!("{SESSION_COOKIE}={id}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn generated_state(text: &str, session: &str) -> crate::routes::AppState {
        let state = state_with(Arc::new(MockCompletion::success(text)), Credential::new("sk"));
        let request = state.sessions.with_form(session, |form| {
            form.difficulty = Difficulty::Beginner;
            form.request = "분수의 덧셈을 설명해줘".into();
            form.begin_generation(None).unwrap()
        });
        generate_for_page(&state, session, request).await;
        state
    }

    #[tokio::test]
    async fn not_found_before_generation() {
        let app = router_for(state_with(
            Arc::new(MockCompletion::success("x")),
            Credential::new("sk"),
        ));
        let resp = app.oneshot(get_download(None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serves_displayed_text_as_markdown_attachment() {
        let state = generated_state("\n 1. ... 2. ... 3. ... \n", "teacher-a").await;

        let resp = router_for(state)
            .oneshot(get_download(Some("teacher-a")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/markdown");
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"learning_material.md\""
        );
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], "1. ... 2. ... 3. ...".as_bytes());
    }

    #[tokio::test]
    async fn other_sessions_cannot_download() {
        let state = generated_state("private material", "teacher-a").await;

        let resp = router_for(state.clone())
            .oneshot(get_download(Some("teacher-b")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = router_for(state).oneshot(get_download(None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
