use tracing::{error, trace};

use crate::filter::field_filter::{FieldFilter, FilterKind};
use crate::filter::not_filter::NotFilter;
use crate::filter::segment_match::{MatchStrategy, SegmentMatch};
use crate::filter::{ArtifactFilter, Filter};
use crate::maven::coordinates::{strip_negation, ArtifactDescriptor, WILDCARD};
use crate::maven::scopes;

/// AND-combination of filters. An empty composite accepts everything.
///
/// Order is kept for readability of the resulting tree only, it has no influence on the result.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CompositeFilter {
    filters: Vec<Filter>,
}

impl CompositeFilter {
    pub fn new() -> CompositeFilter {
        CompositeFilter::default()
    }

    pub fn with_filters(filters: impl IntoIterator<Item = Filter>) -> CompositeFilter {
        CompositeFilter {
            filters: filters.into_iter().collect(),
        }
    }

    pub fn from_pattern(pattern: &str) -> CompositeFilter {
        let mut result = CompositeFilter::new();
        result.add_filters_from_pattern(Some(pattern));
        result
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn add_filter(&mut self, filter: impl Into<Filter>) {
        self.filters.push(filter.into());
    }

    /// removes the first filter equal to `filter`, returning whether there was one
    pub fn remove_filter(&mut self, filter: &Filter) -> bool {
        match self.filters.iter().position(|f| f == filter) {
            Some(idx) => {
                self.filters.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn add_filters(&mut self, filters: impl IntoIterator<Item = Filter>) {
        self.filters.extend(filters);
    }

    /// removes every filter equal to one of `filters`
    pub fn remove_filters(&mut self, filters: &[Filter]) {
        self.filters.retain(|f| !filters.contains(f));
    }

    pub fn add_filters_from_pattern(&mut self, pattern: Option<&str>) {
        if let Some(pattern) = pattern {
            trace!("compiling filter pattern {:?}", pattern);
            self.add_filters_from_descriptor(&ArtifactDescriptor::parse(pattern));
        }
    }

    /// Adds one filter per constrained field. Test and provided scopes are excluded unless the
    ///  descriptor names that scope explicitly - a `*` scope does not lift the exclusions.
    pub fn add_filters_from_descriptor(&mut self, descriptor: &ArtifactDescriptor) {
        let fields = [
            (FilterKind::GroupId, &descriptor.group_id),
            (FilterKind::ArtifactId, &descriptor.artifact_id),
            (FilterKind::Version, &descriptor.version),
            (FilterKind::Type, &descriptor.type_),
            (FilterKind::Classifier, &descriptor.classifier),
        ];
        for (kind, value) in fields {
            if let Some(value) = value.as_deref() {
                if value != WILDCARD {
                    self.add_filter_of(kind, Some(value));
                }
            }
        }

        let scope = descriptor.scope.as_deref();

        // NB: only naming the scope lifts its default exclusion, '*' keeps both in place
        let scope_test = scope == Some(scopes::TEST);
        let scope_provided = scope == Some(scopes::PROVIDED);
        if !scope_test {
            self.add_filter(NotFilter::new(FieldFilter::scope(scopes::TEST)));
        }
        if !scope_provided {
            self.add_filter(NotFilter::new(FieldFilter::scope(scopes::PROVIDED)));
        }
        if let Some(scope) = scope {
            if scope != WILDCARD {
                self.add_filter_of(FilterKind::Scope, Some(scope));
            }
        }
    }

    /// Adds an exact filter for `kind`, negated if the pattern starts with '!'. `None` adds nothing.
    pub fn add_filter_of(&mut self, kind: FilterKind, pattern: Option<&str>) {
        if let Some(pattern) = pattern {
            match strip_negation(pattern) {
                Some(segment) => self.add_filter(NotFilter::new(FieldFilter::new(kind, segment))),
                None => self.add_filter(FieldFilter::new(kind, pattern)),
            }
        }
    }

    /// Adds a filter from textual wiring, e.g. `("groupId", Some("!org.foo"))`.
    ///
    /// Wiring that cannot be resolved is logged and skipped rather than failing the build: the
    ///  composite then simply accepts more than was configured.
    pub fn add_filter_named(&mut self, kind_name: &str, pattern: Option<&str>) {
        self.add_filter_named_with(kind_name, "exact", pattern)
    }

    /// Same as [CompositeFilter::add_filter_named], with the segment match strategy chosen by name
    pub fn add_filter_named_with(&mut self, kind_name: &str, strategy_name: &str, pattern: Option<&str>) {
        let Some(pattern) = pattern else {
            return;
        };

        let result = kind_name.parse::<FilterKind>()
            .and_then(|kind| Ok((kind, strategy_name.parse::<MatchStrategy>()?)))
            .and_then(|(kind, strategy)| self.add_matching_filter(kind, strategy, pattern));

        if let Err(e) = result {
            error!("couldn't create {} filter for pattern {:?}: {:#}", kind_name, pattern, e);
        }
    }

    fn add_matching_filter(&mut self, kind: FilterKind, strategy: MatchStrategy, pattern: &str) -> anyhow::Result<()> {
        match strip_negation(pattern) {
            Some(segment) => {
                let filter = FieldFilter::with_matcher(kind, SegmentMatch::parse(strategy, segment)?);
                self.add_filter(NotFilter::new(filter));
            }
            None => {
                self.add_filter(FieldFilter::with_matcher(kind, SegmentMatch::parse(strategy, pattern)?));
            }
        }
        Ok(())
    }

    /// Removes single-child wrapping: a composite with exactly one child is replaced by that
    ///  child (compacted in turn if it is a composite itself). Does not change what is accepted.
    pub fn compact(mut self) -> Filter {
        if self.filters.len() == 1 {
            if let Some(only) = self.filters.pop() {
                return match only {
                    Filter::Composite(inner) => inner.compact(),
                    other => other,
                };
            }
        }
        Filter::Composite(self)
    }
}

impl ArtifactFilter for CompositeFilter {
    fn accept(&self, artifact: &ArtifactDescriptor) -> bool {
        self.filters.iter().all(|f| f.accept(artifact))
    }
}
