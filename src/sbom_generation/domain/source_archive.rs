//! Source archive URL derivation.
//!
//! Every download URL in the BOM is `<repository>/archive/<ref>.tar.gz`
//! where the ref is the first non-empty of commit, tag and version.

/// Picks the version-control ref for a source snapshot.
///
/// Precedence is `commit > tag > version`; empty strings count as absent.
pub fn select_ref<'a>(
    commit: Option<&'a str>,
    tag: Option<&'a str>,
    version: Option<&'a str>,
) -> Option<&'a str> {
    [commit, tag, version]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
}

/// Strips a trailing `/` and `.git` suffix from a repository URL.
pub fn normalize_repository_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    let without_git = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    without_git.trim_end_matches('/').to_string()
}

/// Builds the canonical `.tar.gz` archive URL for a repository and ref.
///
/// Returns `None` when there is no usable base URL or no ref.
pub fn archive_url(
    base_url: Option<&str>,
    commit: Option<&str>,
    tag: Option<&str>,
    version: Option<&str>,
) -> Option<String> {
    let base = base_url
        .map(normalize_repository_url)
        .filter(|base| !base.is_empty())?;
    let reference = select_ref(commit, tag, version)?;
    Some(format!("{}/archive/{}.tar.gz", base, reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_wins_over_tag_and_version() {
        assert_eq!(
            select_ref(Some("abc123"), Some("v1.0.0"), Some("1.0.0")),
            Some("abc123")
        );
    }

    #[test]
    fn test_tag_wins_over_version() {
        assert_eq!(select_ref(None, Some("v1.0.0"), Some("1.0.0")), Some("v1.0.0"));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        assert_eq!(select_ref(Some(""), Some(""), Some("1.0.0")), Some("1.0.0"));
        assert_eq!(select_ref(Some(""), None, None), None);
    }

    #[test]
    fn test_normalize_repository_url() {
        assert_eq!(
            normalize_repository_url("https://github.com/Alamofire/Alamofire.git"),
            "https://github.com/Alamofire/Alamofire"
        );
        assert_eq!(
            normalize_repository_url("https://github.com/Alamofire/Alamofire/"),
            "https://github.com/Alamofire/Alamofire"
        );
        assert_eq!(
            normalize_repository_url("https://github.com/Alamofire/Alamofire.git/"),
            "https://github.com/Alamofire/Alamofire"
        );
    }

    #[test]
    fn test_archive_url_from_version() {
        let url = archive_url(
            Some("https://github.com/Alamofire/Alamofire.git"),
            None,
            None,
            Some("5.6.0"),
        );
        assert_eq!(
            url.as_deref(),
            Some("https://github.com/Alamofire/Alamofire/archive/5.6.0.tar.gz")
        );
    }

    #[test]
    fn test_archive_url_from_commit() {
        let url = archive_url(
            Some("https://github.com/Alamofire/Alamofire.git"),
            Some("abc123"),
            Some("5.6.0"),
            Some("5.6.0"),
        );
        assert_eq!(
            url.as_deref(),
            Some("https://github.com/Alamofire/Alamofire/archive/abc123.tar.gz")
        );
    }

    #[test]
    fn test_archive_url_requires_base_and_ref() {
        assert_eq!(archive_url(None, Some("abc"), None, None), None);
        assert_eq!(archive_url(Some(""), Some("abc"), None, None), None);
        assert_eq!(
            archive_url(Some("https://example.com/repo"), None, None, None),
            None
        );
    }
}
