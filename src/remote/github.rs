//! GitHub REST API repository source.
//!
//! Lists repositories through `GET /users/{username}/repos` with `type=all`,
//! 100 entries per page, following the `Link: <...>; rel="next"` header for
//! pagination. A bearer token is attached when one is configured; without it
//! requests are anonymous and subject to the lower unauthenticated rate limit.

use crate::domain::FetchError;
use crate::remote::backend::RepositorySource;
use crate::remote::models::{ApiErrorBody, RepositoryPage, RepositoryRecord};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, LINK};
use reqwest::Url;

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Entries requested per page (GitHub's maximum).
pub const PAGE_SIZE: u32 = 100;

/// Listing filter: owned, collaborator and organization-visible repositories.
const LISTING_TYPE: &str = "all";

const MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking GitHub API client.
///
/// Cheap to share between threads; the worker holds it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: Url,
    token: Option<String>,
}

impl GitHubClient {
    /// Creates a client for `api_base` (normally [`DEFAULT_API_URL`]).
    ///
    /// An empty token is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidRequest`] if `api_base` is not a usable base
    /// URL, or [`FetchError::Http`] if the HTTP client cannot be built.
    pub fn new(api_base: &str, token: Option<String>) -> Result<Self, FetchError> {
        let api_base = Url::parse(api_base)
            .map_err(|e| FetchError::InvalidRequest(format!("invalid API URL {api_base:?}: {e}")))?;
        if api_base.cannot_be_a_base() {
            return Err(FetchError::InvalidRequest(format!(
                "API URL {api_base} cannot be used as a base"
            )));
        }

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            api_base,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Returns whether requests carry a bearer token.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Builds the listing URL for one page.
    ///
    /// The username is percent-encoded as a single path segment.
    fn page_url(&self, username: &str, page: u32) -> Result<Url, FetchError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidRequest(format!("API URL {} cannot be a base", self.api_base)))?
            .pop_if_empty()
            .extend(["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("type", LISTING_TYPE)
            .append_pair("per_page", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }
}

impl RepositorySource for GitHubClient {
    fn fetch_page(&self, username: &str, page: u32) -> Result<RepositoryPage, FetchError> {
        let url = self.page_url(username, page)?;
        tracing::debug!(url = %url, authenticated = self.is_authenticated(), "requesting repository page");

        let mut request = self
            .http
            .get(url)
            .header(ACCEPT, MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_page_from_link);
        let body = response.text()?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "repository page request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let records: Vec<RepositoryRecord> = serde_json::from_str(&body)?;
        Ok(RepositoryPage {
            entries: records.into_iter().map(Into::into).collect(),
            next_page,
        })
    }
}

/// Extracts the `page` query parameter of the `rel="next"` link, if any.
///
/// # Examples
///
/// ```
/// use ghcloner::remote::github::next_page_from_link;
///
/// let link = r#"<https://api.github.com/user/1/repos?page=2>; rel="next", <https://api.github.com/user/1/repos?page=5>; rel="last""#;
/// assert_eq!(next_page_from_link(link), Some(2));
/// ```
#[must_use]
pub fn next_page_from_link(header: &str) -> Option<u32> {
    header.split(',').find_map(|part| {
        let mut pieces = part.split(';');
        let target = pieces.next()?.trim();
        let is_next = pieces.any(|param| {
            let param = param.trim();
            param == "rel=\"next\"" || param == "rel=next"
        });
        if !is_next {
            return None;
        }

        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        let url = Url::parse(target).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    })
}

/// Returns GitHub's `message` from an error body, or the trimmed body itself.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body).map_or_else(
        |_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no response body".to_string()
            } else {
                trimmed.to_string()
            }
        },
        |parsed| parsed.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_encodes_query_and_username() {
        let client = GitHubClient::new(DEFAULT_API_URL, None).unwrap();
        let url = client.page_url("octocat", 3).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/octocat/repos?type=all&per_page=100&page=3"
        );

        let url = client.page_url("a/b c", 1).unwrap();
        assert!(url.path().starts_with("/users/a%2Fb%20c/repos"), "{url}");
    }

    #[test]
    fn page_url_respects_api_prefix() {
        let client = GitHubClient::new("https://ghe.example.com/api/v3/", None).unwrap();
        let url = client.page_url("dev", 1).unwrap();
        assert_eq!(url.path(), "/api/v3/users/dev/repos");
    }

    #[test]
    fn rejects_unusable_api_url() {
        assert!(matches!(
            GitHubClient::new("not a url", None),
            Err(FetchError::InvalidRequest(_))
        ));
        assert!(matches!(
            GitHubClient::new("mailto:someone@example.com", None),
            Err(FetchError::InvalidRequest(_))
        ));
    }

    #[test]
    fn blank_token_means_anonymous() {
        let client = GitHubClient::new(DEFAULT_API_URL, Some("  ".to_string())).unwrap();
        assert!(!client.is_authenticated());
        let client = GitHubClient::new(DEFAULT_API_URL, Some("ghp_x".to_string())).unwrap();
        assert!(client.is_authenticated());
    }

    #[test]
    fn next_page_ignores_other_relations() {
        let link = r#"<https://api.github.com/users/u/repos?page=1>; rel="prev", <https://api.github.com/users/u/repos?page=1>; rel="first""#;
        assert_eq!(next_page_from_link(link), None);
        assert_eq!(next_page_from_link(""), None);
    }

    #[test]
    fn next_page_reads_page_among_other_params() {
        let link = r#"<https://api.github.com/users/u/repos?type=all&per_page=100&page=7>; rel="next""#;
        assert_eq!(next_page_from_link(link), Some(7));
    }

    #[test]
    fn error_message_prefers_api_message() {
        assert_eq!(api_error_message(r#"{"message":"Not Found"}"#), "Not Found");
        assert_eq!(api_error_message("  Bad gateway \n"), "Bad gateway");
        assert_eq!(api_error_message(""), "no response body");
    }
}
