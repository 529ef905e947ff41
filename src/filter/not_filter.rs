use crate::filter::{ArtifactFilter, Filter};
use crate::maven::coordinates::ArtifactDescriptor;

/// Inverts the wrapped filter. Double negation is kept as written.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NotFilter {
    filter: Box<Filter>,
}
impl NotFilter {
    pub fn new(filter: impl Into<Filter>) -> NotFilter {
        NotFilter {
            filter: Box::new(filter.into()),
        }
    }

    pub fn inner(&self) -> &Filter {
        &self.filter
    }
}

impl ArtifactFilter for NotFilter {
    fn accept(&self, artifact: &ArtifactDescriptor) -> bool {
        !self.filter.accept(artifact)
    }
}
