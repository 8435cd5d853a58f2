//! Predicate builder
//!
//! Translates a validated parameter set into zero or more independent scan
//! descriptors. Construction order is fixed and observable: the first
//! descriptor's scan order becomes the response order, so time range (when
//! present) always comes first, then sentiment, entity tags in list order,
//! language, and the free-text containment scan last.

use crate::index::{
    entity_partition, language_partition, sentiment_partition, ScanDescriptor, SortKey,
    SortKeyCondition, CALL_PARTITION,
};

use super::params::{SearchParams, SentimentDirection};

/// Build the scan set for one request.
///
/// An empty result means "no recognized predicate": the caller must
/// short-circuit to an empty response rather than scan anything.
pub fn build_descriptors(params: &SearchParams) -> Vec<ScanDescriptor> {
    let mut descriptors = Vec::new();

    if let Some(condition) = time_condition(params) {
        descriptors.push(ScanDescriptor::range(CALL_PARTITION, condition));
    }

    // All three sentiment parts are required; partial sets build nothing.
    if let (Some(who), Some(what), Some(direction)) = (
        params.sentiment_who,
        params.sentiment_what,
        params.sentiment_direction,
    ) {
        let condition = match direction {
            SentimentDirection::Positive => SortKeyCondition::AtLeast(SortKey::number(0.0)),
            SentimentDirection::Negative => SortKeyCondition::Below(SortKey::number(0.0)),
        };
        descriptors.push(ScanDescriptor::range(
            sentiment_partition(who.as_str(), what.as_str()),
            condition,
        ));
    }

    if let Some(entity) = &params.entity {
        for tag in entity.split(',') {
            let tag = tag.trim();
            if tag.is_empty() {
                continue;
            }
            descriptors.push(ScanDescriptor::partition(entity_partition(tag)));
        }
    }

    if let Some(language) = &params.language {
        descriptors.push(ScanDescriptor::partition(language_partition(language)));
    }

    if let Some(job_name) = &params.job_name {
        descriptors.push(ScanDescriptor::partition(CALL_PARTITION).containing(job_name.clone()));
    }

    descriptors
}

fn time_condition(params: &SearchParams) -> Option<SortKeyCondition> {
    match (params.timestamp_from, params.timestamp_to) {
        (Some(from), Some(to)) => Some(SortKeyCondition::Between(
            SortKey::number(from),
            SortKey::number(to),
        )),
        (Some(from), None) => Some(SortKeyCondition::AtLeast(SortKey::number(from))),
        (None, Some(to)) => Some(SortKeyCondition::AtMost(SortKey::number(to))),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::params::{SentimentWhat, SentimentWho};

    #[test]
    fn test_empty_params_build_nothing() {
        assert!(build_descriptors(&SearchParams::default()).is_empty());
    }

    #[test]
    fn test_time_range_both_bounds() {
        let params = SearchParams {
            timestamp_from: Some(100.0),
            timestamp_to: Some(200.0),
            ..Default::default()
        };
        let descriptors = build_descriptors(&params);
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].partition, "call");
        assert_eq!(
            descriptors[0].condition,
            Some(SortKeyCondition::Between(
                SortKey::number(100.0),
                SortKey::number(200.0)
            ))
        );
    }

    #[test]
    fn test_time_range_single_bounds() {
        let lower_only = SearchParams {
            timestamp_from: Some(100.0),
            ..Default::default()
        };
        assert_eq!(
            build_descriptors(&lower_only)[0].condition,
            Some(SortKeyCondition::AtLeast(SortKey::number(100.0)))
        );

        let upper_only = SearchParams {
            timestamp_to: Some(200.0),
            ..Default::default()
        };
        assert_eq!(
            build_descriptors(&upper_only)[0].condition,
            Some(SortKeyCondition::AtMost(SortKey::number(200.0)))
        );
    }

    #[test]
    fn test_sentiment_requires_all_three_parts() {
        let partial = SearchParams {
            sentiment_who: Some(SentimentWho::Caller),
            sentiment_what: Some(SentimentWhat::Average),
            sentiment_direction: None,
            ..Default::default()
        };
        assert!(build_descriptors(&partial).is_empty());
    }

    #[test]
    fn test_sentiment_direction_maps_to_zero_bound() {
        let mut params = SearchParams {
            sentiment_who: Some(SentimentWho::Agent),
            sentiment_what: Some(SentimentWhat::Trend),
            sentiment_direction: Some(SentimentDirection::Positive),
            ..Default::default()
        };
        let descriptors = build_descriptors(&params);
        assert_eq!(descriptors[0].partition, "sentiment#agent#trend");
        assert_eq!(
            descriptors[0].condition,
            Some(SortKeyCondition::AtLeast(SortKey::number(0.0)))
        );

        params.sentiment_direction = Some(SentimentDirection::Negative);
        let descriptors = build_descriptors(&params);
        assert_eq!(
            descriptors[0].condition,
            Some(SortKeyCondition::Below(SortKey::number(0.0)))
        );
    }

    #[test]
    fn test_entity_list_builds_one_descriptor_per_tag() {
        let params = SearchParams {
            entity: Some("a,b".to_string()),
            ..Default::default()
        };
        let descriptors = build_descriptors(&params);
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].partition, "entity#a");
        assert_eq!(descriptors[1].partition, "entity#b");
        assert!(descriptors.iter().all(|d| d.condition.is_none()));
    }

    #[test]
    fn test_entity_list_skips_empty_segments() {
        let params = SearchParams {
            entity: Some("a,,b,".to_string()),
            ..Default::default()
        };
        assert_eq!(build_descriptors(&params).len(), 2);
    }

    #[test]
    fn test_job_name_scans_call_partition_with_containment() {
        let params = SearchParams {
            job_name: Some("support".to_string()),
            ..Default::default()
        };
        let descriptors = build_descriptors(&params);
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].partition, "call");
        assert_eq!(descriptors[0].payload_contains.as_deref(), Some("support"));
        assert!(descriptors[0].condition.is_none());
    }

    #[test]
    fn test_construction_order_is_fixed() {
        let params = SearchParams {
            timestamp_from: Some(100.0),
            timestamp_to: Some(200.0),
            sentiment_who: Some(SentimentWho::Caller),
            sentiment_what: Some(SentimentWhat::Average),
            sentiment_direction: Some(SentimentDirection::Negative),
            entity: Some("billing,refund".to_string()),
            language: Some("en-US".to_string()),
            job_name: Some("job".to_string()),
        };
        let partitions: Vec<String> = build_descriptors(&params)
            .into_iter()
            .map(|d| d.partition)
            .collect();
        assert_eq!(
            partitions,
            vec![
                "call",
                "sentiment#caller#average",
                "entity#billing",
                "entity#refund",
                "language#en-US",
                "call",
            ]
        );
    }
}
