//! AOC HTTP client implementation

use crate::error::AocError;
use crate::parser::ResponseParser;
use reqwest::blocking::Response;
use reqwest::header::HeaderValue;
use tracing::debug;
use zeroize::Zeroize;

/// Result of session verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// User ID if session is valid, None otherwise
    pub user_id: Option<u64>,
}

/// The main AOC HTTP client
///
/// This client reads puzzle pages and inputs from the Advent of Code website
/// and validates session cookies.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let description = client.get_description(2024, 1, None)?;
/// let input = client.get_input(2024, 1, session)?;
/// println!("{}\n{}", description, input);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a new AOC client with rustls-tls configuration and no redirect policy
    ///
    /// The client is configured to not follow redirects by default, which is necessary
    /// for session verification to work correctly.
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged sensitive and the temporary string is zeroized.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()));
        cookie_string.zeroize();

        let mut sensitive_header = header_value?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Base URL with its path replaced by `segments`
    fn url(&self, segments: &[&str]) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: reqwest::Url, session: Option<&str>) -> Result<Response, AocError> {
        debug!(%url, authenticated = session.is_some(), "GET");
        let request = self.client.get(url);
        let request = match session {
            Some(session) => request.header("Cookie", Self::create_cookie_header(session)?),
            None => request,
        };
        Ok(request.send()?)
    }

    fn success_text(response: Response) -> Result<String, AocError> {
        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }
        response.text().map_err(|_| AocError::Encoding)
    }

    /// Verify if a session cookie is valid and retrieve user ID
    ///
    /// Sends a request to the AOC settings endpoint and checks the response status.
    /// A 200 OK status indicates a valid session, and the user ID is extracted from
    /// the HTML response. A redirect (3xx) indicates an invalid session.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionInfo { user_id: Some(id) })` - Session is valid with user ID
    /// * `Ok(SessionInfo { user_id: None })` - Session is invalid
    /// * `Err` - Network error or URL construction error occurred
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    ///
    /// let info = client.verify_session("your_session_cookie")?;
    /// if let Some(user_id) = info.user_id {
    ///     println!("Session is valid! User ID: {}", user_id);
    /// } else {
    ///     println!("Session is invalid");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn verify_session(&self, session: &str) -> Result<SessionInfo, AocError> {
        let response = self.get(self.url(&["settings"])?, Some(session))?;

        // 3xx redirect means invalid session (redirecting to homepage)
        if !response.status().is_success() {
            debug!(status = %response.status(), "session rejected");
            return Ok(SessionInfo { user_id: None });
        }

        let html = response.text().map_err(|_| AocError::Encoding)?;
        let user_id = self.parser.extract_user_id(&html);

        Ok(SessionInfo { user_id })
    }

    /// Fetch the puzzle description for a specific year and day
    ///
    /// Returns the text of the puzzle articles on the day page. Anonymous
    /// requests only see part 1; pass a session to include part 2 once it
    /// is unlocked.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    /// * `AocError::HtmlParse` - The page has no puzzle text
    pub fn get_description(
        &self,
        year: u16,
        day: u8,
        session: Option<&str>,
    ) -> Result<String, AocError> {
        let url = self.url(&[&year.to_string(), "day", &day.to_string()])?;
        let html = Self::success_text(self.get(url, session)?)?;
        self.parser.extract_description(&html)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// Downloads the personalized puzzle input for the given year and day.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    /// * `AocError::Encoding` - Response is not valid UTF-8
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let session = "your_session_cookie";
    ///
    /// let input = client.get_input(2024, 1, session)?;
    /// println!("Input length: {} bytes", input.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let url = self.url(&[&year.to_string(), "day", &day.to_string(), "input"])?;
        Self::success_text(self.get(url, Some(session))?)
    }
}

/// Builder for configuring an AOC HTTP client
///
/// This builder allows customization of the base URL and HTTP client configuration
/// while ensuring the redirect policy is always set correctly for session verification.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL for testing
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Custom timeout
/// let client = AocClient::builder()
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(30))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// The URL is parsed and validated at builder time.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder
    ///
    /// The redirect policy will always be overridden to `Policy::none()` regardless
    /// of the provided builder configuration.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse("https://adventofcode.com")
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        // Always override redirect policy to none for session verification
        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
