use axum::http::StatusCode;

use crate::application::{admin::posts::AdminPostError, error::HttpError, repos::RepoError};

pub(super) fn admin_post_error(source: &'static str, err: AdminPostError) -> HttpError {
    match err {
        AdminPostError::MissingParameter(field) => HttpError::new(
            source,
            StatusCode::BAD_REQUEST,
            "Post request could not be processed",
            format!("Missing parameter `{field}`"),
        ),
        AdminPostError::NotFound { slug } => HttpError::new(
            source,
            StatusCode::NOT_FOUND,
            "Post not found",
            format!("Post `{slug}` could not be found"),
        ),
        AdminPostError::Repo(RepoError::NotFound) => HttpError::new(
            source,
            StatusCode::NOT_FOUND,
            "Post not found",
            "Post could not be found",
        ),
        AdminPostError::Repo(RepoError::Timeout) => HttpError::new(
            source,
            StatusCode::SERVICE_UNAVAILABLE,
            "Database timeout",
            "Database timeout",
        ),
        AdminPostError::Repo(repo) => HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            &repo,
        ),
    }
}
