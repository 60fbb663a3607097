//! Textbook quality analysis over a site checkout.
//!
//! [`TextbookAnalyzer`] walks the `docs/` tree of an mkdocs-style
//! repository and derives a [`MetricsReport`]. Individual counters degrade
//! to zero when their inputs are missing or unreadable; the report itself
//! is always produced.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tokei::{Config, LanguageType};

use crate::config::{MOBILE_NAV_FLAG, SiteConfig};
use crate::domain::{
    BasicMetrics, BuildConfigFields, ContentStructure, EngagementFeatures, MetricsReport,
    ResponsiveFeatures, SimComplexity, TechnicalQuality,
};
use crate::error::BookshelfError;
use crate::fs::FileSystem;
use crate::glossary;

/// Subdirectory of the repository holding the documents.
pub const DOCS_DIR: &str = "docs";
/// Subdirectory of the documents root holding interactive simulations.
pub const SIMS_DIR: &str = "sims";
/// Glossary document under the documents root.
pub const GLOSSARY_FILE: &str = "glossary.md";

const SIMPLE_LINE_LIMIT: usize = 100;
const MEDIUM_LINE_LIMIT: usize = 300;

// Markup stripped before word counting, in application order.
static FRONT_MATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---.*?---").unwrap());
static FENCED_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]*`").unwrap());
static MARKUP_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

static CODE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[a-zA-Z0-9]*\n.*?\n```").unwrap());

/// Analyzes the quality metrics of a textbook site checkout.
pub struct TextbookAnalyzer<F: FileSystem> {
    fs: F,
    repo_root: PathBuf,
    languages: Config,
}

impl<F: FileSystem> TextbookAnalyzer<F> {
    /// Create an analyzer for the repository root.
    pub fn new(fs: F, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            repo_root: repo_root.into(),
            languages: Config::default(),
        }
    }

    /// Produce the full metrics report.
    ///
    /// Never fails: missing or unreadable inputs degrade the affected
    /// counters and leave a warning on the diagnostic stream.
    pub fn analyze(&self) -> MetricsReport {
        let docs_root = self.repo_root.join(DOCS_DIR);
        let files = match self.fs.list_files(&docs_root) {
            Ok(files) => files,
            Err(err) => {
                log::warn!(
                    "documents directory not usable at {}: {err}",
                    docs_root.display()
                );
                Vec::new()
            }
        };
        let documents = self.read_documents(&files);
        let config = SiteConfig::load(&self.fs, &self.repo_root);

        MetricsReport {
            basic_metrics: self.basic_metrics(&docs_root, &files, &documents),
            content_structure: ContentStructure {
                navigation_depth: config.navigation_depth(),
                admonitions: documents.iter().map(|text| count_admonitions(text)).sum(),
                code_blocks: documents.iter().map(|text| count_code_blocks(text)).sum(),
            },
            engagement_features: EngagementFeatures {
                simulation_complexity: self.simulation_complexity(&docs_root),
                analytics_enabled: config.analytics_enabled(),
            },
            technical_quality: technical_quality(&config),
        }
    }

    fn basic_metrics(
        &self,
        docs_root: &Path,
        files: &[PathBuf],
        documents: &[String],
    ) -> BasicMetrics {
        BasicMetrics {
            markdown_files: files.iter().filter(|path| has_extension(path, "md")).count(),
            images: files
                .iter()
                .filter(|path| has_extension(path, "png") || has_extension(path, "jpg"))
                .count(),
            word_count: documents.iter().map(|text| count_words(text)).sum(),
            simulations: self.simulation_dirs(docs_root).len(),
            glossary_terms: self.glossary_terms(docs_root),
        }
    }

    /// Read every markdown document, folding unreadable files away with a
    /// warning so they contribute zero to all document counters.
    fn read_documents(&self, files: &[PathBuf]) -> Vec<String> {
        let mut documents = Vec::new();
        for path in files.iter().filter(|path| has_extension(path, "md")) {
            match self.fs.read_to_string(path) {
                Ok(text) => documents.push(text),
                Err(err) => {
                    log::warn!("skipping unreadable document {}: {err}", path.display());
                }
            }
        }
        documents
    }

    fn simulation_dirs(&self, docs_root: &Path) -> Vec<PathBuf> {
        let sims_root = docs_root.join(SIMS_DIR);
        // An absent sims directory is a legitimate zero, not an error.
        let Ok(dirs) = self.fs.list_dirs(&sims_root) else {
            return Vec::new();
        };
        dirs.into_iter()
            .filter(|dir| !name_starts_with_underscore(dir))
            .collect()
    }

    fn glossary_terms(&self, docs_root: &Path) -> usize {
        let path = docs_root.join(GLOSSARY_FILE);
        match self.fs.read_to_string(&path) {
            Ok(contents) => glossary::count_terms(&contents),
            Err(BookshelfError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => 0,
            Err(err) => {
                log::warn!("glossary not readable at {}: {err}", path.display());
                0
            }
        }
    }

    fn simulation_complexity(&self, docs_root: &Path) -> SimComplexity {
        let mut histogram = SimComplexity::default();
        for dir in self.simulation_dirs(docs_root) {
            let lines = self.script_lines(&dir);
            if lines < SIMPLE_LINE_LIMIT {
                histogram.simple += 1;
            } else if lines < MEDIUM_LINE_LIMIT {
                histogram.medium += 1;
            } else {
                histogram.complex += 1;
            }
        }
        histogram
    }

    /// Total line count of the script files under a simulation directory.
    fn script_lines(&self, sim_dir: &Path) -> usize {
        let files = match self.fs.list_files(sim_dir) {
            Ok(files) => files,
            Err(err) => {
                log::warn!(
                    "simulation directory not usable at {}: {err}",
                    sim_dir.display()
                );
                return 0;
            }
        };

        let mut lines = 0;
        for path in &files {
            if LanguageType::from_path(path, &self.languages) != Some(LanguageType::JavaScript) {
                continue;
            }
            match self.fs.read_to_string(path) {
                Ok(contents) => lines += contents.lines().count(),
                Err(err) => {
                    log::warn!("skipping unreadable script {}: {err}", path.display());
                }
            }
        }
        lines
    }
}

fn technical_quality(config: &SiteConfig) -> TechnicalQuality {
    TechnicalQuality {
        build_config: BuildConfigFields {
            site_name: config.has_key("site_name"),
            theme: config.has_key("theme"),
            nav: config.has_key("nav"),
        },
        responsive_design: ResponsiveFeatures {
            mobile_navigation: config.has_theme_feature(MOBILE_NAV_FLAG),
        },
    }
}

/// Count the words of a document after stripping non-prose markup.
///
/// Strips, in order: a leading front-matter block, fenced code blocks,
/// inline code spans, markup tags, and URLs. What remains is split on
/// whitespace.
pub fn count_words(text: &str) -> usize {
    let text = FRONT_MATTER_RE.replace(text, "");
    let text = FENCED_CODE_RE.replace_all(&text, "");
    let text = INLINE_CODE_RE.replace_all(&text, "");
    let text = MARKUP_TAG_RE.replace_all(&text, "");
    let text = URL_RE.replace_all(&text, "");
    text.split_whitespace().count()
}

/// Count admonition blocks: one per line beginning with `!!!`.
pub fn count_admonitions(text: &str) -> usize {
    text.lines().filter(|line| line.starts_with("!!!")).count()
}

/// Count complete fenced code blocks, multi-line bodies included.
pub fn count_code_blocks(text: &str) -> usize {
    CODE_BLOCK_RE.find_iter(text).count()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(extension)
}

fn name_starts_with_underscore(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('_'))
        .unwrap_or(false)
}
