mod posts;

pub use posts::*;

#[derive(Clone)]
pub struct AdminChrome {
    pub site_title: String,
    pub posts_href: String,
}

impl Default for AdminChrome {
    fn default() -> Self {
        Self {
            site_title: "Postdesk".to_string(),
            posts_href: POSTS_ADMIN_PATH.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AdminLayout<T> {
    pub chrome: AdminChrome,
    pub asset_version: String,
    pub content: T,
}

impl<T> AdminLayout<T> {
    pub fn new(content: T) -> Self {
        Self {
            chrome: AdminChrome::default(),
            asset_version: env!("CARGO_PKG_VERSION").to_string(),
            content,
        }
    }
}
