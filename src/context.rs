//! Application Context
//!
//! Read-only site content provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::catalog::{Catalog, Content};
use crate::models::{SiteProfile, TaskCategory};

/// Bundled content shared by all sections
#[derive(Clone)]
pub struct SiteContext {
    content: Arc<Content>,
}

impl SiteContext {
    pub fn new(content: Content) -> Self {
        Self { content: Arc::new(content) }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.content.catalog
    }

    pub fn tasks(&self) -> &[TaskCategory] {
        &self.content.tasks
    }

    pub fn profile(&self) -> &SiteProfile {
        &self.content.site
    }

    pub fn task_count(&self) -> usize {
        self.content.task_count()
    }
}

/// Get the site content from context
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}
