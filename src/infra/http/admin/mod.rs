mod posts;
mod state;

pub use state::AdminState;

use axum::{Router, extract::State, middleware, response::Response, routing::get};

use crate::presentation::admin::views::POSTS_ADMIN_PATH;

use super::db_health_response;
use super::middleware::{log_responses, set_request_context};

pub fn build_admin_router(state: AdminState) -> Router {
    Router::new()
        .route(POSTS_ADMIN_PATH, get(posts::admin_posts))
        .route(
            "/posts/admin/{slug}",
            get(posts::admin_post_edit)
                .post(posts::admin_post_submit)
                .delete(posts::admin_post_delete),
        )
        .route("/_health/db", get(admin_health))
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn admin_health(State(state): State<AdminState>) -> Response {
    db_health_response(state.db.health_check().await)
}
