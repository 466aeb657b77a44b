// Slug sources (GraphQL endpoint in production, fixed lists in tests)

use crate::error::Result;
use crate::types::Slugs;
use async_trait::async_trait;

/// Anything that can hand over the author and client slugs for one run.
#[async_trait]
pub trait SlugSource {
    async fn fetch_slugs(&self) -> Result<Slugs>;
}
