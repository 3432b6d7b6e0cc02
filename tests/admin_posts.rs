use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use postdesk::application::admin::posts::AdminPostService;
use postdesk::application::repos::{PostsRepo, PostsWriteRepo, RepoError, UpdatePostParams};
use postdesk::domain::entities::PostRecord;
use postdesk::infra::db::PostgresRepositories;
use postdesk::infra::http::{AdminState, build_admin_router};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use time::macros::datetime;
use tower::ServiceExt;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Default)]
struct RecordingPosts {
    posts: Mutex<BTreeMap<String, PostRecord>>,
    updates: Mutex<Vec<UpdatePostParams>>,
    deletes: Mutex<Vec<String>>,
}

impl RecordingPosts {
    fn seeded() -> Arc<Self> {
        let repo = Self::default();
        repo.posts.lock().unwrap().insert(
            "hello".to_string(),
            PostRecord {
                slug: "hello".to_string(),
                title: "Hello <World>".to_string(),
                markdown: "# Hi\n\n<script>alert(1)</script>".to_string(),
                updated_at: datetime!(2025-01-02 03:04:05 UTC),
            },
        );
        Arc::new(repo)
    }

    fn insert(&self, slug: &str, title: &str) {
        self.posts.lock().unwrap().insert(
            slug.to_string(),
            PostRecord {
                slug: slug.to_string(),
                title: title.to_string(),
                markdown: "body".to_string(),
                updated_at: datetime!(2025-01-01 00:00:00 UTC),
            },
        );
    }

    fn updates(&self) -> Vec<UpdatePostParams> {
        self.updates.lock().unwrap().clone()
    }

    fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostsRepo for RecordingPosts {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
        Ok(self.posts.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        Ok(self.posts.lock().unwrap().get(slug).cloned())
    }
}

#[async_trait]
impl PostsWriteRepo for RecordingPosts {
    async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError> {
        self.updates.lock().unwrap().push(params.clone());
        let mut posts = self.posts.lock().unwrap();
        let post = posts.get_mut(&params.slug).ok_or(RepoError::NotFound)?;
        post.title = params.title;
        post.markdown = params.markdown;
        Ok(post.clone())
    }

    async fn delete_post(&self, slug: &str) -> Result<(), RepoError> {
        self.deletes.lock().unwrap().push(slug.to_string());
        self.posts.lock().unwrap().remove(slug);
        Ok(())
    }
}

fn router(repo: &Arc<RecordingPosts>) -> Router {
    // Never connects unless the health route is hit.
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://postdesk@localhost/postdesk")
        .expect("lazy pool");

    build_admin_router(AdminState {
        db: Arc::new(PostgresRepositories::new(pool)),
        posts: Arc::new(AdminPostService::new(repo.clone(), repo.clone())),
    })
}

fn form_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn body_string(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).expect("json body")
}

fn assert_redirects_to_listing(response: &Response) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/posts/admin")
    );
}

#[tokio::test]
async fn valid_update_redirects_to_listing() {
    let repo = RecordingPosts::seeded();

    let response = router(&repo)
        .oneshot(form_request(
            Method::POST,
            "/posts/admin/hello",
            "title=Hello&slug=hello&markdown=%23+Hi",
        ))
        .await
        .expect("response");

    assert_redirects_to_listing(&response);
    assert_eq!(
        repo.updates(),
        vec![UpdatePostParams {
            slug: "hello".into(),
            title: "Hello".into(),
            markdown: "# Hi".into(),
        }]
    );
    assert!(repo.deletes().is_empty());
}

#[tokio::test]
async fn empty_title_returns_field_errors_without_writing() {
    let repo = RecordingPosts::seeded();

    let response = router(&repo)
        .oneshot(form_request(
            Method::POST,
            "/posts/admin/hello",
            "title=&slug=hello&markdown=%23+Hi",
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"title": "Title is required", "slug": null, "markdown": null})
    );
    assert!(repo.updates().is_empty());
}

#[tokio::test]
async fn absent_fields_are_all_reported() {
    let repo = RecordingPosts::seeded();

    let response = router(&repo)
        .oneshot(form_request(Method::POST, "/posts/admin/hello", ""))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "title": "Title is required",
            "slug": "Slug is required",
            "markdown": "Markdown is required",
        })
    );
    assert!(repo.updates().is_empty());
}

#[tokio::test]
async fn delete_request_removes_post_and_redirects() {
    let repo = RecordingPosts::seeded();

    let response = router(&repo)
        .oneshot(form_request(Method::DELETE, "/posts/admin/hello", "slug=hello"))
        .await
        .expect("response");

    assert_redirects_to_listing(&response);
    assert_eq!(repo.deletes(), vec!["hello".to_string()]);
    assert!(repo.updates().is_empty());
}

#[tokio::test]
async fn delete_without_form_body_passes_empty_slug_and_redirects() {
    let repo = RecordingPosts::seeded();

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/posts/admin/hello")
        .body(Body::empty())
        .expect("request");
    let response = router(&repo).oneshot(request).await.expect("response");

    assert_redirects_to_listing(&response);
    assert_eq!(repo.deletes(), vec![String::new()]);
}

#[tokio::test]
async fn method_override_dispatches_delete_without_validation() {
    let repo = RecordingPosts::seeded();

    let response = router(&repo)
        .oneshot(form_request(
            Method::POST,
            "/posts/admin/hello",
            "_method=DELETE&slug=hello",
        ))
        .await
        .expect("response");

    assert_redirects_to_listing(&response);
    assert_eq!(repo.deletes(), vec!["hello".to_string()]);
}

#[tokio::test]
async fn update_of_unknown_slug_is_not_found() {
    let repo = RecordingPosts::seeded();

    let response = router(&repo)
        .oneshot(form_request(
            Method::POST,
            "/posts/admin/hello",
            "title=Hello&slug=renamed&markdown=body",
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(repo.updates().len(), 1);
    assert_eq!(repo.updates()[0].slug, "renamed");
}

#[tokio::test]
async fn edit_page_renders_stored_values() {
    let repo = RecordingPosts::seeded();

    let response = router(&repo)
        .oneshot(get_request("/posts/admin/hello"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"action="/posts/admin/hello""#));
    assert!(html.contains("Hello &#60;World&#62;") || html.contains("Hello &lt;World&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains(r#"rows="20""#));
    assert!(html.contains("Update Post"));
    assert!(html.contains("Delete Post"));
    assert!(html.contains(r#"name="_method" value="DELETE""#));
}

#[tokio::test]
async fn edit_page_for_unknown_slug_is_not_found() {
    let repo = RecordingPosts::seeded();

    let response = router(&repo)
        .oneshot(get_request("/posts/admin/missing"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_links_to_editor() {
    let repo = RecordingPosts::seeded();

    let response = router(&repo)
        .oneshot(get_request("/posts/admin"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"href="/posts/admin/hello""#));
    assert!(html.contains("2025-01-02T03:04:05Z"));
}

#[tokio::test]
async fn reserved_characters_in_slug_are_percent_encoded() {
    let repo = RecordingPosts::seeded();
    repo.insert("c#", "Sharp");

    let listing = router(&repo)
        .oneshot(get_request("/posts/admin"))
        .await
        .expect("response");
    let html = body_string(listing).await;
    assert!(html.contains(r#"href="/posts/admin/c%23""#));
    assert!(!html.contains(r#"href="/posts/admin/c#""#));

    let editor = router(&repo)
        .oneshot(get_request("/posts/admin/c%23"))
        .await
        .expect("response");
    assert_eq!(editor.status(), StatusCode::OK);
    let html = body_string(editor).await;
    assert!(html.contains(r#"action="/posts/admin/c%23""#));
}
