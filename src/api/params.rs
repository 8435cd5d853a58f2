//! # Query Parameter Validation
//!
//! Parses the recognized search query-string keys into a validated
//! `SearchParams`. This is the validation layer the search core relies on:
//! out-of-domain values and unrecognized keys are rejected here with 400,
//! so the core only ever sees well-formed parameter sets.

use std::collections::HashMap;

use chrono::DateTime;

use crate::search::{SearchParams, SentimentDirection, SentimentWhat, SentimentWho};

use super::errors::{ApiError, ApiResult};

/// Parse and validate one request's query parameters.
///
/// Recognized keys: `timestampFrom`, `timestampTo`, `sentimentWho`,
/// `sentimentWhat`, `sentimentDirection`, `entity`, `language`, `jobName`,
/// `text`. Both `jobName` and `text` feed the free-text containment
/// predicate; `jobName` wins when both are present.
pub fn parse_params(query: &HashMap<String, String>) -> ApiResult<SearchParams> {
    let mut params = SearchParams::default();
    let mut text = None;

    for (key, value) in query {
        match key.as_str() {
            "timestampFrom" => params.timestamp_from = Some(parse_timestamp(key, value)?),
            "timestampTo" => params.timestamp_to = Some(parse_timestamp(key, value)?),
            "sentimentWho" => {
                params.sentiment_who = Some(match value.as_str() {
                    "caller" => SentimentWho::Caller,
                    "agent" => SentimentWho::Agent,
                    other => return Err(invalid("sentimentWho", other)),
                })
            }
            "sentimentWhat" => {
                params.sentiment_what = Some(match value.as_str() {
                    "average" => SentimentWhat::Average,
                    "trend" => SentimentWhat::Trend,
                    other => return Err(invalid("sentimentWhat", other)),
                })
            }
            "sentimentDirection" => {
                params.sentiment_direction = Some(match value.as_str() {
                    "positive" => SentimentDirection::Positive,
                    "negative" => SentimentDirection::Negative,
                    other => return Err(invalid("sentimentDirection", other)),
                })
            }
            "entity" => params.entity = Some(value.clone()),
            "language" => params.language = Some(value.clone()),
            "jobName" => params.job_name = Some(value.clone()),
            "text" => text = Some(value.clone()),
            other => return Err(ApiError::UnknownParam(other.to_string())),
        }
    }

    if params.job_name.is_none() {
        params.job_name = text;
    }

    Ok(params)
}

/// Accepts epoch milliseconds or an RFC 3339 timestamp.
fn parse_timestamp(key: &str, value: &str) -> ApiResult<f64> {
    if let Ok(millis) = value.parse::<f64>() {
        if millis.is_finite() {
            return Ok(millis);
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.timestamp_millis() as f64);
    }
    Err(invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ApiError {
    ApiError::InvalidQueryParam(format!("{}={}", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_query_is_empty_params() {
        let params = parse_params(&query(&[])).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_epoch_millis_timestamps() {
        let params = parse_params(&query(&[
            ("timestampFrom", "100"),
            ("timestampTo", "200.5"),
        ]))
        .unwrap();
        assert_eq!(params.timestamp_from, Some(100.0));
        assert_eq!(params.timestamp_to, Some(200.5));
    }

    #[test]
    fn test_rfc3339_timestamps() {
        let params = parse_params(&query(&[("timestampFrom", "1970-01-01T00:00:01Z")])).unwrap();
        assert_eq!(params.timestamp_from, Some(1000.0));
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let err = parse_params(&query(&[("timestampFrom", "yesterday")])).unwrap_err();
        assert!(matches!(err, ApiError::InvalidQueryParam(_)));

        let err = parse_params(&query(&[("timestampTo", "inf")])).unwrap_err();
        assert!(matches!(err, ApiError::InvalidQueryParam(_)));
    }

    #[test]
    fn test_sentiment_values_validated() {
        let params = parse_params(&query(&[
            ("sentimentWho", "caller"),
            ("sentimentWhat", "trend"),
            ("sentimentDirection", "negative"),
        ]))
        .unwrap();
        assert_eq!(params.sentiment_who, Some(SentimentWho::Caller));
        assert_eq!(params.sentiment_what, Some(SentimentWhat::Trend));
        assert_eq!(params.sentiment_direction, Some(SentimentDirection::Negative));

        let err = parse_params(&query(&[("sentimentWho", "supervisor")])).unwrap_err();
        assert!(matches!(err, ApiError::InvalidQueryParam(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_params(&query(&[("limit", "10")])).unwrap_err();
        assert!(matches!(err, ApiError::UnknownParam(ref key) if key == "limit"));
    }

    #[test]
    fn test_job_name_wins_over_text() {
        let params = parse_params(&query(&[("jobName", "job-1"), ("text", "other")])).unwrap();
        assert_eq!(params.job_name.as_deref(), Some("job-1"));

        let params = parse_params(&query(&[("text", "other")])).unwrap();
        assert_eq!(params.job_name.as_deref(), Some("other"));
    }

    #[test]
    fn test_entity_passed_through_raw() {
        let params = parse_params(&query(&[("entity", "a,b")])).unwrap();
        assert_eq!(params.entity.as_deref(), Some("a,b"));
    }
}
