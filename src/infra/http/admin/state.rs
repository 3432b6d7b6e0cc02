use std::sync::Arc;

use crate::application::admin::posts::AdminPostService;
use crate::infra::db::PostgresRepositories;

#[derive(Clone)]
pub struct AdminState {
    pub db: Arc<PostgresRepositories>,
    pub posts: Arc<AdminPostService>,
}
