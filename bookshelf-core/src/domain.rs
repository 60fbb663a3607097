//! Domain entities for bookshelf.

use serde::{Deserialize, Serialize};

/// Quantitative counts over the document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicMetrics {
    /// Number of markdown documents found.
    pub markdown_files: usize,
    /// Number of image assets (`.png` and `.jpg`).
    pub images: usize,
    /// Total words across all documents, markup stripped.
    pub word_count: usize,
    /// Number of interactive simulation directories.
    pub simulations: usize,
    /// Number of glossary terms.
    pub glossary_terms: usize,
}

/// Structure and organization of the site content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStructure {
    /// Maximum depth of the navigation outline.
    pub navigation_depth: usize,
    /// Number of admonition blocks.
    pub admonitions: usize,
    /// Number of fenced code blocks.
    pub code_blocks: usize,
}

/// Simulation counts bucketed by code size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimComplexity {
    /// Simulations with fewer than 100 script lines.
    pub simple: usize,
    /// Simulations with 100 to 299 script lines.
    pub medium: usize,
    /// Simulations with 300 or more script lines.
    pub complex: usize,
}

/// Interactive and engagement features of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementFeatures {
    /// Simulation complexity histogram.
    pub simulation_complexity: SimComplexity,
    /// Whether an analytics provider and property are both configured.
    pub analytics_enabled: bool,
}

/// Presence of the required top-level configuration fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfigFields {
    /// `site_name` is present.
    pub site_name: bool,
    /// `theme` is present.
    pub theme: bool,
    /// `nav` is present.
    pub nav: bool,
}

/// Responsive-design feature flags read from the theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveFeatures {
    /// The mobile navigation feature flag is enabled.
    pub mobile_navigation: bool,
}

/// Technical implementation quality of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalQuality {
    /// Required configuration field presence.
    pub build_config: BuildConfigFields,
    /// Responsive-design flags.
    pub responsive_design: ResponsiveFeatures,
}

/// Aggregate quality report for a textbook site checkout.
///
/// Recomputed from scratch on every analysis run; all four groups are
/// always present, individually degraded to their defaults when the
/// underlying files are missing or unreadable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Quantitative counts over the document tree.
    pub basic_metrics: BasicMetrics,
    /// Structure and organization of the content.
    pub content_structure: ContentStructure,
    /// Interactive and engagement features.
    pub engagement_features: EngagementFeatures,
    /// Technical implementation quality.
    pub technical_quality: TechnicalQuality,
}
