use std::sync::LazyLock;

use axum::{
    body::{Body, to_bytes},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

#[cfg_attr(debug_assertions, allow(dead_code))]
static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    minify_css: true,
    minify_js: true,
    ..Default::default()
});

/// Minify `text/html` responses in release builds. Other responses pass through.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            minify(response).await
        } else {
            response
        }
    }
}

#[cfg_attr(debug_assertions, allow(dead_code))]
async fn minify(response: Response<Body>) -> Response<Body> {
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|ct| ct.contains("text/html"));

    if !is_html {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("Failed to read HTML body for minification: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let minified = minify_html::minify(&bytes, &MINIFY_CFG);
    parts.headers.remove(header::CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(minified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::Html;
    use http_body_util::BodyExt;

    async fn text(response: Response<Body>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_minify_html() {
        let response = Html("<!-- draft --><p>Boxline</p>").into_response();

        let minified = minify(response).await;

        assert_eq!(minified.status(), StatusCode::OK);
        assert!(minified.headers().get(header::CONTENT_LENGTH).is_none());

        let body = text(minified).await;
        assert!(body.contains("<p>Boxline</p>"));
        assert!(!body.contains("draft"));
    }

    #[tokio::test]
    async fn test_non_html_untouched() {
        let response = (
            [(header::CONTENT_TYPE, "application/json")],
            "{ \"a\": 1 }",
        )
            .into_response();

        assert_eq!(text(minify(response).await).await, "{ \"a\": 1 }");
    }

    #[tokio::test]
    async fn test_unreadable_body_is_server_error() {
        let stream = futures::stream::once(async {
            Err::<axum::body::Bytes, std::io::Error>(std::io::Error::other("connection reset"))
        });
        let response = (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            Body::from_stream(stream),
        )
            .into_response();

        assert_eq!(
            minify(response).await.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
