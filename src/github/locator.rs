//! URL parsing and identity wrappers for pull request synchronization.

use url::Url;

use super::error::SyncError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, SyncError> {
        if value.is_empty() {
            return Err(SyncError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, SyncError> {
        if value.is_empty() {
            return Err(SyncError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number taken from the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    fn parse(segment: &str) -> Result<Self, SyncError> {
        segment
            .parse::<u64>()
            .map(Self)
            .map_err(|_| SyncError::InvalidPullRequestNumber)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::BlankToken`] when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, SyncError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SyncError::BlankToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Derives the GitHub API base URL from a host string.
fn derive_api_base_from_host(
    scheme: &str,
    host: &str,
    port: Option<u16>,
) -> Result<Url, SyncError> {
    if host.eq_ignore_ascii_case("github.com") {
        Url::parse("https://api.github.com")
            .map_err(|error| SyncError::InvalidUrl(error.to_string()))
    } else {
        let authority = if host.contains(':') {
            format!("[{host}]")
        } else {
            host.to_owned()
        };
        let mut api_url = Url::parse(&format!("{scheme}://{authority}"))
            .map_err(|error| SyncError::InvalidUrl(error.to_string()))?;

        api_url
            .set_port(port)
            .map_err(|()| SyncError::InvalidUrl("invalid port".to_owned()))?;
        api_url.set_path("api/v3");
        Ok(api_url)
    }
}

/// Derives the GitHub API base URL from a parsed URL.
fn derive_api_base(parsed: &Url) -> Result<Url, SyncError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| SyncError::InvalidUrl("URL must include a host".to_owned()))?;

    derive_api_base_from_host(parsed.scheme(), host, parsed.port())
}

/// Parsed pull request URL and derived API base.
///
/// Two acceptance policies exist. [`PullRequestLocator::parse`] is the
/// primary, lenient contract: scheme and host pass through unvalidated, the
/// category segment (`pull`, `pulls`, or any other token) is consumed without
/// comparison, and a trailing slash or extra path suffix is ignored.
/// [`PullRequestLocator::parse_exact`] additionally insists the path holds
/// exactly the four positional segments; use it only where exact-shape URLs
/// are guaranteed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Parses a pull request URL of the shape
    /// `<scheme>://<host>/<owner>/<repo>/<kind>/<number>[/...]`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::InvalidUrl`] when the input is not a URL at all,
    /// [`SyncError::MissingPathSegments`] when the path holds fewer than four
    /// segments, and [`SyncError::InvalidPullRequestNumber`] when the number
    /// segment is not numeric.
    pub fn parse(input: &str) -> Result<Self, SyncError> {
        let parsed =
            Url::parse(input).map_err(|error| SyncError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or(SyncError::MissingPathSegments)?;

        let owner_segment = segments.next().ok_or(SyncError::MissingPathSegments)?;
        let repository_segment = segments.next().ok_or(SyncError::MissingPathSegments)?;
        // Category token: consumed positionally, never compared to "pull".
        segments.next().ok_or(SyncError::MissingPathSegments)?;
        let number_segment = segments.next().ok_or(SyncError::MissingPathSegments)?;

        Self::from_segments(&parsed, owner_segment, repository_segment, number_segment)
    }

    /// Parses a pull request URL whose path must consist of exactly
    /// `/<owner>/<repo>/<kind>/<number>` with no trailing slash or suffix.
    ///
    /// # Errors
    ///
    /// As [`PullRequestLocator::parse`], plus
    /// [`SyncError::MissingPathSegments`] when the path carries a trailing
    /// slash or any segment beyond the number.
    pub fn parse_exact(input: &str) -> Result<Self, SyncError> {
        let parsed =
            Url::parse(input).map_err(|error| SyncError::InvalidUrl(error.to_string()))?;

        let segments: Vec<&str> = parsed
            .path_segments()
            .ok_or(SyncError::MissingPathSegments)?
            .collect();

        let [owner_segment, repository_segment, _category, number_segment] = segments.as_slice()
        else {
            return Err(SyncError::MissingPathSegments);
        };

        Self::from_segments(&parsed, owner_segment, repository_segment, number_segment)
    }

    fn from_segments(
        parsed: &Url,
        owner_segment: &str,
        repository_segment: &str,
        number_segment: &str,
    ) -> Result<Self, SyncError> {
        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;
        let number = PullRequestNumber::parse(number_segment)?;
        let api_base = derive_api_base(parsed)?;

        Ok(Self {
            api_base,
            owner,
            repository,
            number,
        })
    }

    /// API base URL derived from the pull request host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    pub(crate) fn pull_request_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/{}",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }

    pub(crate) fn comments_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues/{}/comments",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }

    pub(crate) fn comment_path(&self, comment_id: u64) -> String {
        format!(
            "/repos/{}/{}/issues/comments/{comment_id}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    pub(crate) fn labels_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues/{}/labels",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}
