use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use orbit_core::{
    ArticleDocument, BlockKind, ContentRepository, ContentSection, Error, Post, PostPage,
    PostSummary, Result, RichTextBlock,
};
use orbit_web::{bootstrap, create_app};

/// Two-page feed with a single fully resolved article.
struct FixedRepository;

fn post(uid: &str, title: &str) -> Post {
    Post {
        uid: uid.to_string(),
        first_publication_date: Some(Utc.with_ymd_and_hms(2021, 3, 25, 10, 0, 0).unwrap()),
        data: PostSummary {
            title: title.to_string(),
            subtitle: "sub".to_string(),
            author: "Ana".to_string(),
        },
    }
}

#[async_trait]
impl ContentRepository for FixedRepository {
    async fn first_page(&self, _page_size: usize) -> Result<PostPage> {
        Ok(PostPage {
            results: vec![post("primeiro", "Primeiro post")],
            next_page: Some("tok1".to_string()),
        })
    }

    async fn page_at(&self, cursor: &str) -> Result<PostPage> {
        match cursor {
            "tok1" => Ok(PostPage {
                results: vec![post("segundo", "Segundo post")],
                next_page: None,
            }),
            other => Err(Error::NotFound(other.to_string())),
        }
    }

    async fn article(&self, uid: &str) -> Result<ArticleDocument> {
        if uid != "primeiro" {
            return Err(Error::NotFound(uid.to_string()));
        }
        Ok(ArticleDocument {
            uid: uid.to_string(),
            title: "Primeiro post".to_string(),
            subtitle: "sub".to_string(),
            author: "Ana".to_string(),
            banner_url: "https://images.example/banner.png".to_string(),
            first_publication_date: Some(Utc.with_ymd_and_hms(2021, 3, 25, 10, 0, 0).unwrap()),
            content: vec![ContentSection {
                heading: "Intro".to_string(),
                body: vec![RichTextBlock {
                    kind: BlockKind::Paragraph,
                    text: "hello world".to_string(),
                }],
            }],
        })
    }

    async fn all_uids(&self) -> Result<Vec<String>> {
        Ok(vec!["primeiro".to_string()])
    }
}

async fn test_app() -> Router {
    let state = bootstrap::load_state(Arc::new(FixedRepository), 20)
        .await
        .unwrap();
    create_app(Arc::new(state))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn lists_the_seeded_first_page() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::get("/api/posts").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["has_more"], true);
    assert_eq!(body["posts"][0]["uid"], "primeiro");
    assert_eq!(body["posts"][0]["published_at"], "25 mar 2021");
}

#[tokio::test]
async fn load_more_prepends_and_then_terminates() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(Request::post("/api/posts/next").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["has_more"], false);
    assert_eq!(body["posts"][0]["uid"], "segundo");
    assert_eq!(body["posts"][1]["uid"], "primeiro");

    // Feed exhausted: the trigger should be gone client-side, so this is 404.
    let response = app
        .oneshot(Request::post("/api/posts/next").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn serves_a_resolved_article_view() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::get("/api/posts/primeiro")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Primeiro post");
    assert_eq!(body["reading_minutes"], 1);
    assert_eq!(body["sections"][0]["heading"], "Intro");
    assert_eq!(body["sections"][0]["html"], "<p>hello world</p>");
}

#[tokio::test]
async fn unknown_article_is_not_found() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::get("/api/posts/nao-existe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
