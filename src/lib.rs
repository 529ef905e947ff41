//! Selects the dependency artifacts that take part in a build by evaluating composable
//! predicates over Maven coordinates (`groupId:artifactId:version:type:classifier:scope`).
//!
//! A pattern or an explicit list of filters is compiled once into a [CompositeFilter], which the
//! build then asks for every candidate artifact:
//!
//! ```
//! use arti_filter::{ArtifactDescriptor, ArtifactFilter, CompositeFilter};
//!
//! let filter = CompositeFilter::from_pattern("org.foo:*:*:*:*:*");
//! assert!(filter.accept(&ArtifactDescriptor::parse("org.foo:bar:1.0:jar::compile")));
//! assert!(!filter.accept(&ArtifactDescriptor::parse("org.foo:bar:1.0:jar::test")));
//! ```

pub mod config;
pub mod filter;
pub mod maven;

pub use config::{FilterConfig, FilterWiring};
pub use filter::composite_filter::CompositeFilter;
pub use filter::field_filter::{FieldFilter, FilterKind};
pub use filter::not_filter::NotFilter;
pub use filter::segment_match::{MatchStrategy, SegmentMatch};
pub use filter::{select, ArtifactFilter, Filter};
pub use maven::coordinates::ArtifactDescriptor;
