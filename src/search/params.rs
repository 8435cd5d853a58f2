//! Validated search parameters
//!
//! The shape handed into the search core. Fields are already type- and
//! domain-checked by the calling layer (see `api::params`); the core only
//! decides which scans they produce.

/// Which side of the call a sentiment predicate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentWho {
    Caller,
    Agent,
}

impl SentimentWho {
    /// Partition segment for this speaker.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentWho::Caller => "caller",
            SentimentWho::Agent => "agent",
        }
    }
}

/// Which sentiment metric a predicate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentWhat {
    Average,
    Trend,
}

impl SentimentWhat {
    /// Partition segment for this metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentWhat::Average => "average",
            SentimentWhat::Trend => "trend",
        }
    }
}

/// Sign of the sentiment metric being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentDirection {
    /// Metric `>= 0`
    Positive,
    /// Metric `< 0`
    Negative,
}

/// One request's validated parameter set.
///
/// Every field is independent; all present predicates are ANDed. An
/// all-`None` set produces no scans at all.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Lower time bound, epoch milliseconds
    pub timestamp_from: Option<f64>,
    /// Upper time bound, epoch milliseconds
    pub timestamp_to: Option<f64>,
    /// Sentiment subject role; a sentiment predicate needs all three parts
    pub sentiment_who: Option<SentimentWho>,
    /// Sentiment metric kind
    pub sentiment_what: Option<SentimentWhat>,
    /// Sentiment direction
    pub sentiment_direction: Option<SentimentDirection>,
    /// Comma-separated entity tag list, split by the predicate builder
    pub entity: Option<String>,
    /// Language code
    pub language: Option<String>,
    /// Free-text substring matched against the payload
    pub job_name: Option<String>,
}

impl SearchParams {
    /// Whether no predicate source is present at all.
    pub fn is_empty(&self) -> bool {
        self.timestamp_from.is_none()
            && self.timestamp_to.is_none()
            && self.sentiment_who.is_none()
            && self.sentiment_what.is_none()
            && self.sentiment_direction.is_none()
            && self.entity.is_none()
            && self.language.is_none()
            && self.job_name.is_none()
    }
}
