use serde::Serialize;
use thiserror::Error;

use crate::application::repos::RepoError;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const SLUG_REQUIRED: &str = "Slug is required";
pub const MARKDOWN_REQUIRED: &str = "Markdown is required";

#[derive(Debug, Error)]
pub enum AdminPostError {
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),
    #[error("post `{slug}` not found")]
    NotFound { slug: String },
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Raw editor fields as submitted; any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFormFields {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub markdown: Option<String>,
}

/// Per-field validation messages. `None` marks a field that passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PostFieldErrors {
    pub title: Option<&'static str>,
    pub slug: Option<&'static str>,
    pub markdown: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePostCommand {
    pub title: String,
    pub slug: String,
    pub markdown: String,
}

impl PostFormFields {
    /// Checks every field independently so the caller gets one message per missing field.
    pub fn validate(self) -> Result<UpdatePostCommand, PostFieldErrors> {
        let title = required(self.title, TITLE_REQUIRED);
        let slug = required(self.slug, SLUG_REQUIRED);
        let markdown = required(self.markdown, MARKDOWN_REQUIRED);

        match (title, slug, markdown) {
            (Ok(title), Ok(slug), Ok(markdown)) => Ok(UpdatePostCommand {
                title,
                slug,
                markdown,
            }),
            (title, slug, markdown) => Err(PostFieldErrors {
                title: title.err(),
                slug: slug.err(),
                markdown: markdown.err(),
            }),
        }
    }
}

// Presence check only: values are passed to the store exactly as submitted.
fn required(value: Option<String>, message: &'static str) -> Result<String, &'static str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(message),
    }
}

/// One submission against the post editor route, already split by intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSubmission {
    Update(PostFormFields),
    Delete { slug: Option<String> },
}

impl PostSubmission {
    pub fn kind(&self) -> SubmissionKind {
        match self {
            PostSubmission::Update(_) => SubmissionKind::Update,
            PostSubmission::Delete { .. } => SubmissionKind::Delete,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            PostSubmission::Update(fields) => fields.slug.as_deref(),
            PostSubmission::Delete { slug } => slug.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Update,
    Delete,
}

impl SubmissionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionKind::Update => "update",
            SubmissionKind::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The store accepted the change; the caller should return to the listing.
    Applied,
    /// Update fields failed validation; nothing was written.
    Rejected(PostFieldErrors),
}
