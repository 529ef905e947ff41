use std::str::FromStr;

use anyhow::anyhow;

use crate::filter::segment_match::SegmentMatch;
use crate::filter::ArtifactFilter;
use crate::maven::coordinates::ArtifactDescriptor;

/// The coordinate field a [FieldFilter] tests
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FilterKind {
    GroupId,
    ArtifactId,
    Version,
    Type,
    Classifier,
    Scope,
}
impl FilterKind {
    pub fn field<'a>(&self, artifact: &'a ArtifactDescriptor) -> Option<&'a str> {
        match self {
            FilterKind::GroupId => artifact.group_id.as_deref(),
            FilterKind::ArtifactId => artifact.artifact_id.as_deref(),
            FilterKind::Version => artifact.version.as_deref(),
            FilterKind::Type => artifact.type_.as_deref(),
            FilterKind::Classifier => artifact.classifier.as_deref(),
            FilterKind::Scope => artifact.scope.as_deref(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::GroupId => "groupId",
            FilterKind::ArtifactId => "artifactId",
            FilterKind::Version => "version",
            FilterKind::Type => "type",
            FilterKind::Classifier => "classifier",
            FilterKind::Scope => "scope",
        }
    }
}

/// Accepts wiring names as they appear in build configuration: `groupId`, `group-id`,
///  `GroupIdFilter` etc. all resolve to [FilterKind::GroupId].
impl FromStr for FilterKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim()
            .to_ascii_lowercase()
            .replace(['-', '_'], "");
        let normalized = normalized.strip_suffix("filter").unwrap_or(&normalized);

        match normalized {
            "groupid" | "group" => Ok(FilterKind::GroupId),
            "artifactid" | "artifact" => Ok(FilterKind::ArtifactId),
            "version" => Ok(FilterKind::Version),
            "type" => Ok(FilterKind::Type),
            "classifier" => Ok(FilterKind::Classifier),
            "scope" => Ok(FilterKind::Scope),
            _ => Err(anyhow!("no filter kind named {:?}", s)),
        }
    }
}

/// Tests one coordinate field against a segment matcher
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FieldFilter {
    pub kind: FilterKind,
    pub matcher: SegmentMatch,
}
impl FieldFilter {
    /// exact match, which is what patterns compile to
    pub fn new(kind: FilterKind, segment: &str) -> FieldFilter {
        FieldFilter::with_matcher(kind, SegmentMatch::exact(segment))
    }

    pub fn with_matcher(kind: FilterKind, matcher: SegmentMatch) -> FieldFilter {
        FieldFilter { kind, matcher }
    }

    pub fn group_id(segment: &str) -> FieldFilter { FieldFilter::new(FilterKind::GroupId, segment) }
    pub fn artifact_id(segment: &str) -> FieldFilter { FieldFilter::new(FilterKind::ArtifactId, segment) }
    pub fn version(segment: &str) -> FieldFilter { FieldFilter::new(FilterKind::Version, segment) }
    pub fn type_(segment: &str) -> FieldFilter { FieldFilter::new(FilterKind::Type, segment) }
    pub fn classifier(segment: &str) -> FieldFilter { FieldFilter::new(FilterKind::Classifier, segment) }
    pub fn scope(segment: &str) -> FieldFilter { FieldFilter::new(FilterKind::Scope, segment) }
}

impl ArtifactFilter for FieldFilter {
    fn accept(&self, artifact: &ArtifactDescriptor) -> bool {
        self.matcher.matches(self.kind.field(artifact))
    }
}
