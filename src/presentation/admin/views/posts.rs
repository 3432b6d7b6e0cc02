use askama::Template;
use time::format_description::well_known::Rfc3339;
use url::Url;

use crate::domain::entities::PostRecord;

use super::AdminLayout;

/// Listing page and redirect target after every successful submission.
pub const POSTS_ADMIN_PATH: &str = "/posts/admin";

// Host is a placeholder; only the encoded path is used.
const EDITOR_URL_BASE: &str = "http://postdesk.invalid/posts/admin";

/// Editor URL for `slug`, percent-encoded as a single path segment.
pub fn post_editor_href(slug: &str) -> String {
    let Ok(mut url) = Url::parse(EDITOR_URL_BASE) else {
        return POSTS_ADMIN_PATH.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(slug);
    }
    url.path().to_string()
}

#[derive(Clone)]
pub struct AdminPostRowView {
    pub title: String,
    pub slug: String,
    pub updated_at: String,
    pub edit_href: String,
}

impl From<&PostRecord> for AdminPostRowView {
    fn from(post: &PostRecord) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            updated_at: post.updated_at.format(&Rfc3339).unwrap_or_default(),
            edit_href: post_editor_href(&post.slug),
        }
    }
}

#[derive(Clone)]
pub struct AdminPostListView {
    pub heading: String,
    pub posts: Vec<AdminPostRowView>,
    pub empty_message: String,
}

impl AdminPostListView {
    pub fn new(posts: &[PostRecord]) -> Self {
        Self {
            heading: "Posts".to_string(),
            posts: posts.iter().map(AdminPostRowView::from).collect(),
            empty_message: "No posts yet.".to_string(),
        }
    }

    pub fn has_posts(&self) -> bool {
        !self.posts.is_empty()
    }
}

/// Which of the two editor forms, if any, has a request in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    SubmittingUpdate,
    SubmittingDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub label: &'static str,
    pub disabled: bool,
}

impl SubmissionState {
    pub fn update_button(self) -> ButtonState {
        match self {
            SubmissionState::SubmittingUpdate => ButtonState {
                label: "Updating...",
                disabled: true,
            },
            SubmissionState::Idle | SubmissionState::SubmittingDelete => ButtonState {
                label: "Update Post",
                disabled: false,
            },
        }
    }

    pub fn delete_button(self) -> ButtonState {
        match self {
            SubmissionState::SubmittingDelete => ButtonState {
                label: "Deleting...",
                disabled: true,
            },
            SubmissionState::Idle | SubmissionState::SubmittingUpdate => ButtonState {
                label: "Delete Post",
                disabled: false,
            },
        }
    }
}

#[derive(Clone)]
pub struct AdminPostEditorView {
    pub title: String,
    pub slug: String,
    pub markdown: String,
    pub form_action: String,
    pub listing_href: String,
    pub state: SubmissionState,
}

impl AdminPostEditorView {
    pub fn from_post(post: &PostRecord) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            markdown: post.markdown.clone(),
            form_action: post_editor_href(&post.slug),
            listing_href: POSTS_ADMIN_PATH.to_string(),
            state: SubmissionState::Idle,
        }
    }

    pub fn update_button(&self) -> ButtonState {
        self.state.update_button()
    }

    pub fn delete_button(&self) -> ButtonState {
        self.state.delete_button()
    }

    // Labels the client swaps in while its request is pending.
    pub fn update_busy_label(&self) -> &'static str {
        SubmissionState::SubmittingUpdate.update_button().label
    }

    pub fn delete_busy_label(&self) -> &'static str {
        SubmissionState::SubmittingDelete.delete_button().label
    }
}

#[derive(Template)]
#[template(path = "admin/posts.html")]
pub struct AdminPostsTemplate {
    pub view: AdminLayout<AdminPostListView>,
}

#[derive(Template)]
#[template(path = "admin/post_edit.html")]
pub struct AdminPostEditTemplate {
    pub view: AdminLayout<AdminPostEditorView>,
}
