use serde::Deserialize;

use crate::application::admin::posts::{PostFormFields, PostSubmission};

/// Fields posted by either editor form. Every field is optional so that
/// absence reaches validation instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AdminPostForm {
    pub(crate) title: Option<String>,
    pub(crate) slug: Option<String>,
    pub(crate) markdown: Option<String>,
    #[serde(rename = "_method")]
    pub(crate) method: Option<String>,
}

impl AdminPostForm {
    pub(crate) fn is_delete_override(&self) -> bool {
        self.method
            .as_deref()
            .is_some_and(|method| method.eq_ignore_ascii_case("DELETE"))
    }

    pub(crate) fn into_update(self) -> PostSubmission {
        PostSubmission::Update(PostFormFields {
            title: self.title,
            slug: self.slug,
            markdown: self.markdown,
        })
    }

    pub(crate) fn into_delete(self) -> PostSubmission {
        PostSubmission::Delete { slug: self.slug }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_override_is_case_insensitive() {
        let form = AdminPostForm {
            method: Some("delete".into()),
            ..Default::default()
        };
        assert!(form.is_delete_override());

        let form = AdminPostForm {
            method: Some("PUT".into()),
            ..Default::default()
        };
        assert!(!form.is_delete_override());
        assert!(!AdminPostForm::default().is_delete_override());
    }

    #[test]
    fn delete_keeps_only_slug() {
        let form = AdminPostForm {
            title: Some("Hello".into()),
            slug: Some("hello".into()),
            markdown: Some("# Hi".into()),
            method: Some("DELETE".into()),
        };

        match form.into_delete() {
            PostSubmission::Delete { slug } => assert_eq!(slug.as_deref(), Some("hello")),
            other => panic!("unexpected submission: {other:?}"),
        }
    }
}
