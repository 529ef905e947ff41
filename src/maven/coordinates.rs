use std::fmt::{Display, Formatter};

pub const WILDCARD: &str = "*";
pub const NEGATION_PREFIX: char = '!';

/// The coordinates of a resolved dependency, or a pattern over such coordinates.
///
/// Each field is optional: an absent field is "unspecified", which is not the same as the
///  wildcard `*`. Filters never modify a descriptor.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ArtifactDescriptor {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub type_: Option<String>,
    pub classifier: Option<String>,
    pub scope: Option<String>,
}
impl ArtifactDescriptor {
    /// Splits `groupId:artifactId:version:type:classifier:scope` positionally.
    ///
    /// Missing trailing segments and empty segments are absent, segments beyond the sixth are
    ///  ignored. This never fails - a short pattern just constrains fewer fields.
    pub fn parse(pattern: &str) -> ArtifactDescriptor {
        let mut segments = pattern
            .split(':')
            .map(|s| if s.is_empty() { None } else { Some(s.to_string()) });

        let mut next = || segments.next().flatten();

        ArtifactDescriptor {
            group_id: next(),
            artifact_id: next(),
            version: next(),
            type_: next(),
            classifier: next(),
            scope: next(),
        }
    }

    pub fn with_group_id(mut self, group_id: &str) -> ArtifactDescriptor {
        self.group_id = Some(group_id.to_string());
        self
    }

    pub fn with_artifact_id(mut self, artifact_id: &str) -> ArtifactDescriptor {
        self.artifact_id = Some(artifact_id.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> ArtifactDescriptor {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_type(mut self, type_: &str) -> ArtifactDescriptor {
        self.type_ = Some(type_.to_string());
        self
    }

    pub fn with_classifier(mut self, classifier: &str) -> ArtifactDescriptor {
        self.classifier = Some(classifier.to_string());
        self
    }

    pub fn with_scope(mut self, scope: &str) -> ArtifactDescriptor {
        self.scope = Some(scope.to_string());
        self
    }

    fn segments(&self) -> [Option<&str>; 6] {
        [
            self.group_id.as_deref(),
            self.artifact_id.as_deref(),
            self.version.as_deref(),
            self.type_.as_deref(),
            self.classifier.as_deref(),
            self.scope.as_deref(),
        ]
    }
}

impl Display for ArtifactDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let segments = self.segments();
        let len = segments.iter()
            .rposition(|s| s.is_some())
            .map(|i| i + 1)
            .unwrap_or(0);

        let joined = segments[..len].iter()
            .map(|s| s.unwrap_or(""))
            .collect::<Vec<_>>()
            .join(":");
        write!(f, "{}", joined)
    }
}

/// Returns the pattern without its leading `!` if it is negated
pub fn strip_negation(pattern: &str) -> Option<&str> {
    pattern.strip_prefix(NEGATION_PREFIX)
}
