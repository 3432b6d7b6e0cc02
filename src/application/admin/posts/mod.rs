mod commands;
mod queries;
mod service;
pub mod types;

pub use service::*;
pub use types::{
    AdminPostError, MARKDOWN_REQUIRED, PostFieldErrors, PostFormFields, PostSubmission,
    SLUG_REQUIRED, SubmissionKind, SubmitOutcome, TITLE_REQUIRED, UpdatePostCommand,
};
