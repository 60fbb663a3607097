//! Report formatting for bookshelf outputs.

use std::fmt::Write;

use serde::Serialize;

use crate::domain::{MetricsReport, SimComplexity};

/// Render the metrics report as formatted text with section headers and
/// indented sub-groups.
pub fn render_text(report: &MetricsReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Textbook Quality Report\n");

    let basic = &report.basic_metrics;
    let _ = writeln!(output, "## Basic Metrics");
    let _ = writeln!(output, "- Markdown Files: {}", basic.markdown_files);
    let _ = writeln!(output, "- Images: {}", basic.images);
    let _ = writeln!(output, "- Word Count: {}", basic.word_count);
    let _ = writeln!(output, "- Simulations: {}", basic.simulations);
    let _ = writeln!(output, "- Glossary Terms: {}", basic.glossary_terms);

    let structure = &report.content_structure;
    let _ = writeln!(output, "\n## Content Structure");
    let _ = writeln!(output, "- Navigation Depth: {}", structure.navigation_depth);
    let _ = writeln!(output, "- Admonitions: {}", structure.admonitions);
    let _ = writeln!(output, "- Code Blocks: {}", structure.code_blocks);

    let engagement = &report.engagement_features;
    let _ = writeln!(output, "\n## Engagement Features");
    append_complexity(&mut output, &engagement.simulation_complexity);
    let _ = writeln!(
        output,
        "- Analytics Enabled: {}",
        yes_no(engagement.analytics_enabled)
    );

    let quality = &report.technical_quality;
    let _ = writeln!(output, "\n## Technical Quality");
    let _ = writeln!(output, "- Build Config:");
    let _ = writeln!(output, "  - Site Name: {}", yes_no(quality.build_config.site_name));
    let _ = writeln!(output, "  - Theme: {}", yes_no(quality.build_config.theme));
    let _ = writeln!(output, "  - Nav: {}", yes_no(quality.build_config.nav));
    let _ = writeln!(output, "- Responsive Design:");
    let _ = writeln!(
        output,
        "  - Mobile Navigation: {}",
        yes_no(quality.responsive_design.mobile_navigation)
    );

    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn append_complexity(output: &mut String, complexity: &SimComplexity) {
    let _ = writeln!(output, "- Simulation Complexity:");
    let _ = writeln!(output, "  - Simple: {}", complexity.simple);
    let _ = writeln!(output, "  - Medium: {}", complexity.medium);
    let _ = writeln!(output, "  - Complex: {}", complexity.complex);
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
