use std::sync::Arc;
use std::time::Duration;

use crate::application::repos::{PostsRepo, PostsWriteRepo};

#[derive(Clone)]
pub struct AdminPostService {
    pub(crate) reader: Arc<dyn PostsRepo>,
    pub(crate) writer: Arc<dyn PostsWriteRepo>,
    pub(crate) submit_delay: Duration,
}

impl AdminPostService {
    pub fn new(reader: Arc<dyn PostsRepo>, writer: Arc<dyn PostsWriteRepo>) -> Self {
        Self {
            reader,
            writer,
            submit_delay: Duration::ZERO,
        }
    }

    /// Simulated latency applied before every submission. Zero disables it.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay
    }
}
