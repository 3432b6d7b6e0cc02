mod errors;
mod forms;
mod handlers;

pub(super) use handlers::{admin_post_delete, admin_post_edit, admin_post_submit, admin_posts};
