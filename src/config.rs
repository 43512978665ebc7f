//! Protocol constants and per-provider harvester configuration.

use std::collections::BTreeSet;
use std::time::Duration;

/// OAI-PMH 2.0 protocol namespace (envelope, record headers).
pub const OAI_NS: &str = "http://www.openarchives.org/OAI/2.0/";

/// Namespace of the `oai_dc` metadata container element.
pub const OAI_DC_NS: &str = "http://www.openarchives.org/OAI/2.0/oai_dc/";

/// Dublin Core elements namespace (descriptive fields).
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Dublin Core terms namespace, used by the wider consumer family.
pub const DC_TERMS_NS: &str = "http://purl.org/dc/terms/";

/// Query fragment selecting the `ListRecords` verb.
pub const RECORDS_VERB: &str = "?verb=ListRecords";

/// Query fragment for the metadata prefix and date filter of the first page.
pub const META_PREFIX_FROM: &str = "&metadataPrefix=oai_dc&from=";

/// Query fragment for resumption-token pagination.
pub const RESUMPTION: &str = "&resumptionToken=";

/// Midnight-UTC suffix appended when a provider requires time granularity.
pub const TIME_GRANULARITY_SUFFIX: &str = "T00:00:00Z";

/// HTTP timeout in seconds for a single page request.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default inter-page politeness delay.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Default upper bound on pages followed in one harvest.
///
/// Pagination is driven entirely by server-returned tokens, so a stuck
/// provider must be converted into a reported failure rather than a
/// runaway process.
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Immutable configuration for one OAI-PMH provider.
///
/// Multiple harvesters with different configurations can coexist in one
/// process; nothing here is mutated after construction.
///
/// # Examples
/// ```
/// use oai_harvester::OaiConfig;
///
/// let config = OaiConfig::new("vtech", "http://vtechworks.lib.vt.edu/oai/request")
///     .with_property_list(["type", "publisher", "format"])
///     .with_approved_sets(["com_10877_2"]);
/// assert_eq!(config.name, "vtech");
/// ```
#[derive(Debug, Clone)]
pub struct OaiConfig {
    /// Harvester identifier, recorded as the `source` of every document.
    pub name: String,

    /// Provider endpoint, without any query string.
    pub base_url: String,

    /// Extra field names to collect into `properties`, in order.
    pub property_list: Vec<String>,

    /// Allowed `setSpec` values; `None` means no set filtering.
    pub approved_sets: Option<BTreeSet<String>>,

    /// Politeness delay between resumption pages.
    pub timeout: Duration,

    /// Whether the provider requires a time-of-day suffix on date filters.
    pub timezone_granularity: bool,

    /// Upper bound on pages followed in one harvest.
    pub max_pages: usize,
}

impl OaiConfig {
    /// Create a configuration with default property list, delay and limits.
    #[must_use]
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            property_list: vec![
                "date".to_string(),
                "language".to_string(),
                "type".to_string(),
            ],
            approved_sets: None,
            timeout: DEFAULT_PAGE_DELAY,
            timezone_granularity: false,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Replace the property list.
    #[must_use]
    pub fn with_property_list<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.property_list = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict harvesting to the given approved `setSpec` values.
    #[must_use]
    pub fn with_approved_sets<I, S>(mut self, sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.approved_sets = Some(sets.into_iter().map(Into::into).collect());
        self
    }

    /// Set the inter-page politeness delay.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Require a midnight-UTC suffix on the date filter.
    #[must_use]
    pub fn with_timezone_granularity(mut self, timezone_granularity: bool) -> Self {
        self.timezone_granularity = timezone_granularity;
        self
    }

    /// Set the page-count guard.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// `ListRecords` endpoint URL without date or token parameters.
    #[must_use]
    pub fn records_url(&self) -> String {
        format!("{}{}", self.base_url, RECORDS_VERB)
    }

    /// URL of the first page of a harvest window starting at `start_date`.
    ///
    /// # Examples
    /// ```
    /// use oai_harvester::OaiConfig;
    ///
    /// let config = OaiConfig::new("vtech", "http://example.org/oai");
    /// assert_eq!(
    ///     config.initial_url("2014-09-29"),
    ///     "http://example.org/oai?verb=ListRecords&metadataPrefix=oai_dc&from=2014-09-29"
    /// );
    /// ```
    #[must_use]
    pub fn initial_url(&self, start_date: &str) -> String {
        let mut url = format!("{}{}{}", self.records_url(), META_PREFIX_FROM, start_date);
        if self.timezone_granularity {
            url.push_str(TIME_GRANULARITY_SUFFIX);
        }
        url
    }

    /// URL of a follow-up page for a resumption token.
    ///
    /// Tokens replace the metadata prefix and date filter entirely: the
    /// token is the sole pagination parameter on follow-up requests.
    #[must_use]
    pub fn resumption_url(&self, token: &str) -> String {
        format!("{}{}{}", self.records_url(), RESUMPTION, token)
    }
}
