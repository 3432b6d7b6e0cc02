//! Editor handlers for posts - list, edit, submit, delete.

use axum::{
    Json,
    extract::{Form, Path, State, rejection::FormRejection},
    http::{Method, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::{
    application::admin::posts::{PostSubmission, SubmitOutcome},
    infra::http::admin::AdminState,
    presentation::{admin::views as admin_views, views::render_template_response},
};

use super::errors::admin_post_error;
use super::forms::AdminPostForm;

pub(crate) async fn admin_posts(State(state): State<AdminState>) -> Response {
    let posts = match state.posts.list().await {
        Ok(posts) => posts,
        Err(err) => return admin_post_error("infra::http::admin_posts", err).into_response(),
    };

    let content = admin_views::AdminPostListView::new(&posts);
    let view = admin_views::AdminLayout::new(content);
    render_template_response(admin_views::AdminPostsTemplate { view }, StatusCode::OK)
}

pub(crate) async fn admin_post_edit(
    State(state): State<AdminState>,
    Path(slug): Path<String>,
) -> Response {
    let post = match state.posts.load_for_edit(&slug).await {
        Ok(post) => post,
        Err(err) => return admin_post_error("infra::http::admin_post_edit", err).into_response(),
    };

    let content = admin_views::AdminPostEditorView::from_post(&post);
    let view = admin_views::AdminLayout::new(content);
    render_template_response(admin_views::AdminPostEditTemplate { view }, StatusCode::OK)
}

/// Handles both editor forms. A hidden `_method=DELETE` turns the post into a delete.
pub(crate) async fn admin_post_submit(
    State(state): State<AdminState>,
    method: Method,
    Path(slug): Path<String>,
    Form(form): Form<AdminPostForm>,
) -> Response {
    let submission = if form.is_delete_override() {
        form.into_delete()
    } else {
        form.into_update()
    };

    submit(&state, &method, &slug, submission, "infra::http::admin_post_submit").await
}

/// A DELETE without a form body still deletes; its slug reaches the store as "".
pub(crate) async fn admin_post_delete(
    State(state): State<AdminState>,
    method: Method,
    Path(slug): Path<String>,
    form: Result<Form<AdminPostForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(
                target = "postdesk::http::admin::posts",
                path_slug = %slug,
                reason = %rejection,
                "delete without form body"
            );
            AdminPostForm::default()
        }
    };
    let submission = form.into_delete();
    submit(&state, &method, &slug, submission, "infra::http::admin_post_delete").await
}

async fn submit(
    state: &AdminState,
    method: &Method,
    path_slug: &str,
    submission: PostSubmission,
    source: &'static str,
) -> Response {
    let kind = submission.kind();

    debug!(
        target = "postdesk::http::admin::posts",
        method = %method,
        kind = kind.as_str(),
        path_slug = %path_slug,
        "post submission received"
    );

    if let Some(submitted) = submission.slug()
        && !submitted.is_empty()
        && submitted != path_slug
    {
        warn!(
            target = "postdesk::http::admin::posts",
            kind = kind.as_str(),
            path_slug = %path_slug,
            slug = %submitted,
            "submitted slug differs from editor path; keying by submitted slug"
        );
    }

    match state.posts.submit(submission).await {
        Ok(SubmitOutcome::Applied) => redirect_to_listing(),
        Ok(SubmitOutcome::Rejected(errors)) => (StatusCode::OK, Json(errors)).into_response(),
        Err(err) => admin_post_error(source, err).into_response(),
    }
}

fn redirect_to_listing() -> Response {
    (StatusCode::FOUND, [(LOCATION, admin_views::POSTS_ADMIN_PATH)]).into_response()
}
