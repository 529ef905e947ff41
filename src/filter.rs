pub mod composite_filter;
pub mod field_filter;
pub mod not_filter;
pub mod segment_match;

use crate::filter::composite_filter::CompositeFilter;
use crate::filter::field_filter::FieldFilter;
use crate::filter::not_filter::NotFilter;
use crate::maven::coordinates::ArtifactDescriptor;

/// A predicate deciding whether an artifact takes part in a build.
///
/// Implementations are pure: no I/O, no interior mutability, so a filter can be shared between
///  threads once it is built.
pub trait ArtifactFilter {
    fn accept(&self, artifact: &ArtifactDescriptor) -> bool;
}

/// The closed set of filters a filter tree is built from
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Filter {
    Field(FieldFilter),
    Not(NotFilter),
    Composite(CompositeFilter),
}

impl ArtifactFilter for Filter {
    fn accept(&self, artifact: &ArtifactDescriptor) -> bool {
        match self {
            Filter::Field(f) => f.accept(artifact),
            Filter::Not(f) => f.accept(artifact),
            Filter::Composite(f) => f.accept(artifact),
        }
    }
}

impl From<FieldFilter> for Filter {
    fn from(value: FieldFilter) -> Self {
        Filter::Field(value)
    }
}
impl From<NotFilter> for Filter {
    fn from(value: NotFilter) -> Self {
        Filter::Not(value)
    }
}
impl From<CompositeFilter> for Filter {
    fn from(value: CompositeFilter) -> Self {
        Filter::Composite(value)
    }
}

/// The artifacts accepted by `filter`, in their original order
pub fn select<'a, F, I>(filter: &F, artifacts: I) -> Vec<&'a ArtifactDescriptor>
where
    F: ArtifactFilter + ?Sized,
    I: IntoIterator<Item = &'a ArtifactDescriptor>,
{
    artifacts.into_iter()
        .filter(|a| filter.accept(a))
        .collect()
}
