use crate::sbom_generation::domain::source_archive::{normalize_repository_url, select_ref};
use crate::sbom_generation::domain::{DependencyRecord, Platform};
use crate::sbom_generation::policies::{PurlOptions, PurlStrategy};

const GITHUB_HOST: &str = "github.com";

/// PurlSynthesizer service deriving Package URLs for dependency records
///
/// Pure function over a record: it never fails, a record that lacks the
/// data a strategy needs simply yields `None`.
pub struct PurlSynthesizer;

impl PurlSynthesizer {
    /// Derives the PURL for `record` under `options`
    ///
    /// The download URL query parameter is appended exactly once, when
    /// `always_append_download_url` is set or the PURL is `pkg:generic`.
    pub fn synthesize(record: &DependencyRecord, options: &PurlOptions) -> Option<String> {
        let purl = match options.strategy {
            PurlStrategy::Default => Self::default_chain(record),
            PurlStrategy::Platform => {
                Self::platform_purl(record).or_else(|| Self::default_chain(record))
            }
            PurlStrategy::Github => {
                Self::github_purl(record).or_else(|| Self::default_chain(record))
            }
            PurlStrategy::Generic => Some(Self::generic_purl(record)),
            PurlStrategy::Legacy => Self::legacy_chain(record, options.always_generic),
        }?;

        Some(Self::append_download_url(purl, record, options))
    }

    /// `generic` when a commit is pinned, `github` otherwise
    fn default_chain(record: &DependencyRecord) -> Option<String> {
        if record.commit().is_some() {
            Some(Self::generic_purl(record))
        } else {
            Self::github_purl(record)
        }
    }

    /// Ecosystem-native PURL: `pkg:cocoapods/...` or `pkg:swift/...`
    fn platform_purl(record: &DependencyRecord) -> Option<String> {
        let version = record.version().unwrap_or("");
        match record.platform() {
            Platform::CocoaPods => Some(format!("pkg:cocoapods/{}@{}", record.name(), version)),
            Platform::Spm => {
                let segments = Self::website_segments(record)?;
                if segments.len() < 3 {
                    return None;
                }
                let tail = &segments[segments.len() - 3..];
                Some(format!(
                    "pkg:swift/{}/{}/{}@{}",
                    tail[0], tail[1], tail[2], version
                ))
            }
        }
    }

    /// `pkg:github/<owner>/<repo>@<tag or version>`
    fn github_purl(record: &DependencyRecord) -> Option<String> {
        let website = record.website()?;
        if !website.contains(GITHUB_HOST) {
            return None;
        }

        let segments = Self::website_segments(record)?;
        // host, owner and repo at minimum
        if segments.len() < 3 {
            return None;
        }
        let owner = &segments[segments.len() - 2];
        let repo = &segments[segments.len() - 1];
        let reference = select_ref(None, record.tag(), record.version()).unwrap_or("");

        Some(format!("pkg:github/{}/{}@{}", owner, repo, reference))
    }

    /// `pkg:generic/swift/<name>@<commit or tag or version>`
    fn generic_purl(record: &DependencyRecord) -> String {
        let reference = select_ref(record.commit(), record.tag(), record.version()).unwrap_or("");
        format!("pkg:generic/swift/{}@{}", record.name(), reference)
    }

    /// Historical fixed chain
    ///
    /// Released (tag or version) GitHub dependencies without a pinned commit
    /// get a `pkg:github` PURL unless `always_generic` is set. Everything else
    /// is `pkg:generic/cocoapods/...`, which requires a download URL.
    fn legacy_chain(record: &DependencyRecord, always_generic: bool) -> Option<String> {
        let released = record.version().is_some() || record.tag().is_some();
        let on_github = record
            .website()
            .is_some_and(|website| website.contains(GITHUB_HOST));

        let github = if record.commit().is_none() && released && on_github && !always_generic {
            Self::github_purl(record)
        } else {
            None
        };

        github.or_else(|| {
            record.download_url()?;
            let reference =
                select_ref(record.commit(), record.tag(), record.version()).unwrap_or("");
            Some(format!("pkg:generic/cocoapods/{}@{}", record.name(), reference))
        })
    }

    fn append_download_url(purl: String, record: &DependencyRecord, options: &PurlOptions) -> String {
        let wants_append = options.always_append_download_url || purl.starts_with("pkg:generic/");
        match record.download_url() {
            Some(download_url) if wants_append => format!(
                "{}?{}={}",
                purl,
                options.download_url_param,
                urlencoding::encode(download_url)
            ),
            _ => purl,
        }
    }

    /// Non-empty path segments of the website, host first, scheme dropped
    fn website_segments(record: &DependencyRecord) -> Option<Vec<String>> {
        let website = normalize_repository_url(record.website()?);
        let without_scheme = website
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&website);

        Some(
            without_scheme
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}
