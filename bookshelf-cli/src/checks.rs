//! HTTP convention checks for catalog sites.
//!
//! Requests are issued strictly sequentially. A failed request marks the
//! affected check as failed and never aborts the run.

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::{CliResult, load_catalog};

const RAW_CONTENT_HOST: &str = "https://raw.githubusercontent.com";
const GITHUB_PREFIX: &str = "https://github.com/";
const PAGES_HOST_SUFFIX: &str = ".github.io";
const HEAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of the convention checks for one site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ConventionReport {
    license: bool,
    glossary: bool,
    admonitions: bool,
    logo_sizing: bool,
    admonition_prompt: bool,
}

/// Run convention checks against every site in the catalog.
pub(crate) async fn run_checks(catalog: &Path, branch: &str) -> CliResult<()> {
    let records = load_catalog(catalog).await?;
    let client = Client::new();

    for record in &records {
        println!("\n--- Checking site: {} ---", record.name);
        let Some((user, repo)) = infer_github_slug(&record.github_repo) else {
            println!(
                "  Unable to determine GitHub user/repo from URL: {}",
                record.github_repo
            );
            continue;
        };

        let report = check_site(&client, &user, &repo, branch).await;
        println!("  License: {}", pass_fail(report.license));
        println!("  Glossary: {}", pass_fail(report.glossary));
        println!("  Admonitions: {}", pass_fail(report.admonitions));
        println!("  Logo Sizing: {}", pass_fail(report.logo_sizing));
        println!("  Admonition Prompt: {}", pass_fail(report.admonition_prompt));
    }

    Ok(())
}

/// Count catalog sites whose repository URLs respond to a HEAD request.
pub(crate) async fn run_count(catalog: &Path) -> CliResult<()> {
    let records = load_catalog(catalog).await?;
    let client = Client::builder().timeout(HEAD_TIMEOUT).build()?;

    let total = records.len();
    let mut working = 0usize;
    for record in &records {
        println!("testing {}", record.github_repo);
        if repo_responds(&client, &record.github_repo).await {
            println!("OK");
            working += 1;
        } else {
            println!("FAIL");
        }
    }

    println!("Total number of sites: {total}");
    println!("Total number of working sites: {working}");
    Ok(())
}

async fn check_site(client: &Client, user: &str, repo: &str, branch: &str) -> ConventionReport {
    ConventionReport {
        license: any_exists(
            client,
            user,
            repo,
            branch,
            &["docs/license.md", "docs/License.md"],
        )
        .await,
        glossary: any_exists(
            client,
            user,
            repo,
            branch,
            &["docs/glossary.md", "docs/Glossary.md"],
        )
        .await,
        admonitions: fetch_raw(client, user, repo, branch, "mkdocs.yml")
            .await
            .map(|text| text.contains("admonitions"))
            .unwrap_or(false),
        logo_sizing: fetch_raw(client, user, repo, branch, "docs/css/extras.css")
            .await
            .map(|text| text.contains("logo") || text.contains("img"))
            .unwrap_or(false),
        admonition_prompt: fetch_raw(client, user, repo, branch, "docs/js/extras.js")
            .await
            .map(|text| text.contains("admonition.prompt"))
            .unwrap_or(false),
    }
}

async fn any_exists(
    client: &Client,
    user: &str,
    repo: &str,
    branch: &str,
    paths: &[&str],
) -> bool {
    for path in paths {
        if fetch_raw(client, user, repo, branch, path).await.is_some() {
            return true;
        }
    }
    false
}

/// Fetch a file from the raw-content host; `None` when absent or failing.
async fn fetch_raw(
    client: &Client,
    user: &str,
    repo: &str,
    branch: &str,
    path: &str,
) -> Option<String> {
    let url = raw_url(user, repo, branch, path);
    let response = client.get(&url).send().await.ok()?;
    if response.status() != StatusCode::OK {
        return None;
    }
    response.text().await.ok()
}

fn raw_url(user: &str, repo: &str, branch: &str, path: &str) -> String {
    format!("{RAW_CONTENT_HOST}/{user}/{repo}/{branch}/{path}")
}

async fn repo_responds(client: &Client, url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    match client.head(url).send().await {
        Ok(response) => response.status() == StatusCode::OK,
        Err(_) => false,
    }
}

/// Infer the GitHub user and repository from a source or pages URL.
fn infer_github_slug(url: &str) -> Option<(String, String)> {
    if let Some(path) = url.strip_prefix(GITHUB_PREFIX) {
        let mut parts = path.trim_matches('/').split('/');
        let user = parts.next().filter(|part| !part.is_empty())?;
        let repo = parts.next().filter(|part| !part.is_empty())?;
        return Some((user.to_string(), repo.to_string()));
    }

    let remainder = url.strip_prefix("https://")?;
    let (host, rest) = remainder.split_once('/')?;
    let user = host.strip_suffix(PAGES_HOST_SUFFIX)?;
    if user.is_empty() {
        return None;
    }
    let repo = rest.split('/').next().filter(|part| !part.is_empty())?;
    Some((user.to_string(), repo.to_string()))
}

fn pass_fail(flag: bool) -> &'static str {
    if flag { "PASS" } else { "FAIL" }
}

#[cfg(test)]
mod tests {
    use super::{ConventionReport, infer_github_slug, pass_fail, raw_url};

    #[test]
    fn infers_slug_from_github_url() {
        assert_eq!(
            infer_github_slug("https://github.com/dmccreary/microsims"),
            Some(("dmccreary".to_string(), "microsims".to_string()))
        );
        assert_eq!(
            infer_github_slug("https://github.com/org/repo/tree/main/docs"),
            Some(("org".to_string(), "repo".to_string()))
        );
        assert_eq!(
            infer_github_slug("https://github.com/org/repo/"),
            Some(("org".to_string(), "repo".to_string()))
        );
    }

    #[test]
    fn infers_slug_from_pages_url() {
        assert_eq!(
            infer_github_slug("https://dmccreary.github.io/microsims/"),
            Some(("dmccreary".to_string(), "microsims".to_string()))
        );
        assert_eq!(
            infer_github_slug("https://dmccreary.github.io/microsims"),
            Some(("dmccreary".to_string(), "microsims".to_string()))
        );
    }

    #[test]
    fn rejects_unrecognized_urls() {
        assert_eq!(infer_github_slug("https://example.com/site"), None);
        assert_eq!(infer_github_slug("https://github.com/only-user"), None);
        assert_eq!(infer_github_slug("https://user.github.io"), None);
        assert_eq!(infer_github_slug("http://github.com/user/repo"), None);
        assert_eq!(infer_github_slug(""), None);
    }

    #[test]
    fn raw_url_targets_raw_content_host() {
        assert_eq!(
            raw_url("user", "repo", "main", "docs/glossary.md"),
            "https://raw.githubusercontent.com/user/repo/main/docs/glossary.md"
        );
    }

    #[test]
    fn checks_default_to_fail() {
        let report = ConventionReport::default();
        assert_eq!(pass_fail(report.license), "FAIL");
        assert_eq!(pass_fail(true), "PASS");
    }
}
