use std::fmt;
use std::str::FromStr;

/// Query parameter that carries the percent-encoded download URL
pub const DEFAULT_DOWNLOAD_URL_PARAM: &str = "download_url";

/// Policy for deriving a Package URL from a dependency record
///
/// | Strategy   | Result                                                         |
/// |------------|----------------------------------------------------------------|
/// | `Platform` | `pkg:cocoapods/<name>@<version>` or `pkg:swift/<host>/<owner>/<repo>@<version>` |
/// | `Github`   | `pkg:github/<owner>/<repo>@<tag or version>`                   |
/// | `Generic`  | `pkg:generic/swift/<name>@<commit or tag or version>`          |
/// | `Default`  | `Generic` when a commit is pinned, otherwise `Github`          |
/// | `Legacy`   | fixed chain: `Github` for released GitHub pods, else `pkg:generic/cocoapods/...` |
///
/// `Platform`, `Github` and `Generic` fall back to the `Default` chain when
/// they cannot produce a PURL. `Legacy` never falls back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PurlStrategy {
    #[default]
    Default,
    Platform,
    Github,
    Generic,
    Legacy,
}

impl PurlStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurlStrategy::Default => "default",
            PurlStrategy::Platform => "platform",
            PurlStrategy::Github => "github",
            PurlStrategy::Generic => "generic",
            PurlStrategy::Legacy => "legacy",
        }
    }
}

impl fmt::Display for PurlStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PurlStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(PurlStrategy::Default),
            "platform" => Ok(PurlStrategy::Platform),
            "github" => Ok(PurlStrategy::Github),
            "generic" => Ok(PurlStrategy::Generic),
            "legacy" => Ok(PurlStrategy::Legacy),
            _ => Err(format!(
                "Invalid PURL strategy: {}. Please specify one of: default, platform, github, generic, legacy",
                s
            )),
        }
    }
}

/// Caller-selected PURL options, fixed for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurlOptions {
    pub strategy: PurlStrategy,
    /// Append the download URL even when the PURL is not `pkg:generic`
    pub always_append_download_url: bool,
    pub download_url_param: String,
    /// `Legacy` only: never choose the GitHub variant
    pub always_generic: bool,
}

impl Default for PurlOptions {
    fn default() -> Self {
        Self {
            strategy: PurlStrategy::Default,
            always_append_download_url: false,
            download_url_param: DEFAULT_DOWNLOAD_URL_PARAM.to_string(),
            always_generic: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_all_strategies() {
        assert_eq!(PurlStrategy::from_str("default"), Ok(PurlStrategy::Default));
        assert_eq!(PurlStrategy::from_str("platform"), Ok(PurlStrategy::Platform));
        assert_eq!(PurlStrategy::from_str("GitHub"), Ok(PurlStrategy::Github));
        assert_eq!(PurlStrategy::from_str("GENERIC"), Ok(PurlStrategy::Generic));
        assert_eq!(PurlStrategy::from_str("legacy"), Ok(PurlStrategy::Legacy));
    }

    #[test]
    fn test_from_str_invalid() {
        let error = PurlStrategy::from_str("npm").unwrap_err();
        assert!(error.contains("Invalid PURL strategy"));
        assert!(error.contains("npm"));
    }

    #[test]
    fn test_default_options() {
        let options = PurlOptions::default();
        assert_eq!(options.strategy, PurlStrategy::Default);
        assert!(!options.always_append_download_url);
        assert_eq!(options.download_url_param, "download_url");
        assert!(!options.always_generic);
    }
}
