//! Call document fan-out
//!
//! The index is a denormalization of one logical call into multiple
//! partition copies keyed by different facets. `fan_out` produces every copy
//! for one document with a single shared payload, which keeps the payload
//! byte-identical across partitions (the invariant the intersection and
//! materialization stages rely on).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::descriptor::{
    entity_partition, language_partition, sentiment_partition, CALL_PARTITION,
};
use super::record::{IndexRecord, SortKey};

/// Per-speaker sentiment metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeakerSentiment {
    /// Mean sentiment score over the call, negative means negative sentiment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    /// Sentiment slope over the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
}

/// Sentiment metrics for both sides of the call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<SpeakerSentiment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<SpeakerSentiment>,
}

/// One logical call, as written by the analytics pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallDocument {
    /// Primary identity (the processing job name)
    pub identity: String,
    /// Call start, epoch milliseconds
    pub timestamp: f64,
    /// Detected language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Named entities detected in the transcript
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<String>,
    /// Per-speaker sentiment metrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSummary>,
    /// Remaining body fields, carried opaquely
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub attributes: Value,
}

impl CallDocument {
    /// Produce every partition copy of this document.
    ///
    /// The `call`, `entity#` and `language#` copies sort by the call
    /// timestamp; `sentiment#` copies sort by the metric value itself so
    /// that a direction predicate is a range scan around zero.
    pub fn fan_out(&self) -> Result<Vec<IndexRecord>, serde_json::Error> {
        let payload = serde_json::to_string(self)?;
        let timestamp = SortKey::number(self.timestamp);

        let mut records = vec![IndexRecord::new(
            &self.identity,
            CALL_PARTITION,
            timestamp.clone(),
            &payload,
        )];

        for tag in &self.entities {
            records.push(IndexRecord::new(
                &self.identity,
                entity_partition(tag),
                timestamp.clone(),
                &payload,
            ));
        }

        if let Some(language) = &self.language {
            records.push(IndexRecord::new(
                &self.identity,
                language_partition(language),
                timestamp.clone(),
                &payload,
            ));
        }

        if let Some(sentiment) = &self.sentiment {
            let speakers = [("caller", &sentiment.caller), ("agent", &sentiment.agent)];
            for (who, metrics) in speakers {
                let Some(metrics) = metrics else { continue };
                let values = [("average", metrics.average), ("trend", metrics.trend)];
                for (what, value) in values {
                    if let Some(value) = value {
                        records.push(IndexRecord::new(
                            &self.identity,
                            sentiment_partition(who, what),
                            SortKey::number(value),
                            &payload,
                        ));
                    }
                }
            }
        }

        Ok(records)
    }
}
