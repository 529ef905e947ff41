use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::filter::composite_filter::CompositeFilter;

/// Filter rules as declared in build configuration, e.g.
///
/// ```json
/// {
///   "pattern": "org.nuxeo:*:*:*:*:*",
///   "filters": [ { "kind": "artifactId", "pattern": "!foo-tests" } ]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub filters: Vec<FilterWiring>,
}

/// One explicitly wired field filter. Kind and match strategy values are kept as text so that a
///  typo in them degrades to a logged, skipped filter. A misspelled key is rejected outright,
///  since it would otherwise silently drop the pattern.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterWiring {
    pub kind: String,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(rename = "match", default = "default_match")]
    pub match_strategy: String,
}

fn default_match() -> String {
    "exact".to_string()
}

impl FilterConfig {
    pub fn from_json(json: &str) -> anyhow::Result<FilterConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<FilterConfig> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read filter config {:?}", path))?;
        FilterConfig::from_json(&json)
            .with_context(|| format!("invalid filter config {:?}", path))
    }

    /// The pattern goes first, then the wired filters in declaration order
    pub fn build(&self) -> CompositeFilter {
        let mut result = CompositeFilter::new();
        result.add_filters_from_pattern(self.pattern.as_deref());

        for wiring in &self.filters {
            result.add_filter_named_with(&wiring.kind, &wiring.match_strategy, wiring.pattern.as_deref());
        }

        debug!("built {} filters from config", result.filters().len());
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::filter::field_filter::FieldFilter;
    use crate::filter::not_filter::NotFilter;
    use crate::filter::{ArtifactFilter, Filter};
    use crate::maven::coordinates::ArtifactDescriptor;

    #[test]
    fn test_empty_config() {
        let config = FilterConfig::from_json("{}").unwrap();
        assert_eq!(config, FilterConfig::default());
        assert!(config.build().is_empty());
    }

    #[test]
    fn test_pattern_and_wiring() {
        let config = FilterConfig::from_json(r#"{
            "pattern": "org.foo",
            "filters": [
                { "kind": "artifactId", "pattern": "!foo-tests" },
                { "kind": "version" }
            ]
        }"#).unwrap();

        assert_eq!(config.filters[0].match_strategy, "exact");

        let filter = config.build();
        assert_eq!(filter.filters().len(), 4);
        assert_eq!(filter.filters()[3], Filter::from(NotFilter::new(FieldFilter::artifact_id("foo-tests"))));

        assert!(filter.accept(&ArtifactDescriptor::parse("org.foo:foo")));
        assert!(!filter.accept(&ArtifactDescriptor::parse("org.foo:foo-tests")));
    }

    #[test]
    fn test_glob_wiring() {
        let config = FilterConfig::from_json(r#"{
            "filters": [ { "kind": "groupId", "pattern": "org.nuxeo.*", "match": "glob" } ]
        }"#).unwrap();

        let filter = config.build();
        assert!(filter.accept(&ArtifactDescriptor::parse("org.nuxeo.ecm:core")));
        assert!(!filter.accept(&ArtifactDescriptor::parse("org.apache:core")));
    }

    #[test]
    fn test_bad_wiring_does_not_fail_build() {
        let config = FilterConfig::from_json(r#"{
            "pattern": "org.foo",
            "filters": [
                { "kind": "packaging", "pattern": "war" },
                { "kind": "groupId", "pattern": "x", "match": "fuzzy" }
            ]
        }"#).unwrap();

        assert_eq!(config.build(), CompositeFilter::from_pattern("org.foo"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(FilterConfig::from_json("{ \"pattern\": 1 }").is_err());
        assert!(FilterConfig::from_json("{ \"patterns\": [] }").is_err());
    }

    #[test]
    fn test_misspelled_wiring_key_is_rejected() {
        let result = FilterConfig::from_json(r#"{
            "filters": [ { "kind": "groupId", "patern": "org.bar" } ]
        }"#);

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("patern"), "{}", message);
    }
}
