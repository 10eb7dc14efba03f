//! Tests for the search record → card mapper.

#[cfg(test)]
mod tests {
    use crate::{
        RawMetadata, RawSearchResult, SearchResponse, map_search_result, map_search_results,
        normalize_rerank_score, truncate_description,
    };

    fn record(json: serde_json::Value) -> RawSearchResult {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn missing_metadata_fields_fall_back_to_defaults() {
        let raw = record(serde_json::json!({
            "text": "Some chunk",
            "metadata": {},
            "score": 0.42
        }));
        let card = map_search_result(&raw);
        assert_eq!(card.name, "Unknown API");
        assert_eq!(card.category, "API");
        assert_eq!(card.auth, "REST");
        assert!(card.endpoints.is_empty());
        assert!(card.tags.is_empty());
        assert_eq!(card.citations, 0);
    }

    #[test]
    fn absent_or_null_metadata_object_is_tolerated() {
        for json in [
            serde_json::json!({"text": "x"}),
            serde_json::json!({"text": "x", "metadata": null}),
            serde_json::json!({}),
        ] {
            let card = map_search_result(&record(json));
            assert_eq!(card.name, "Unknown API");
            assert_eq!(card.score, 0.0);
            assert_eq!(card.pricing, "sim: 0.000");
        }
    }

    #[test]
    fn rerank_score_normalization_anchors() {
        assert_eq!(normalize_rerank_score(-12.0), 0.0);
        assert_eq!(normalize_rerank_score(4.0), 1.0);
        assert_eq!(normalize_rerank_score(-4.0), 0.5);
    }

    #[test]
    fn rerank_score_outside_range_is_clamped() {
        assert_eq!(normalize_rerank_score(-30.0), 0.0);
        assert_eq!(normalize_rerank_score(11.5), 1.0);
    }

    #[test]
    fn rerank_score_takes_precedence_over_similarity() {
        let raw = RawSearchResult {
            text: "t".to_owned(),
            metadata: RawMetadata::default(),
            score: Some(0.91),
            rerank_score: Some(-4.0),
        };
        let card = map_search_result(&raw);
        assert_eq!(card.score, 0.5);
        assert_eq!(card.pricing, "rerank: -4.00");
    }

    #[test]
    fn similarity_score_used_as_is_without_rerank() {
        let raw = record(serde_json::json!({"text": "t", "metadata": {}, "score": 0.8123}));
        let card = map_search_result(&raw);
        assert_eq!(card.score, 0.8123);
        assert_eq!(card.pricing, "sim: 0.812");
    }

    #[test]
    fn method_and_path_build_auth_and_endpoint() {
        let raw = record(serde_json::json!({
            "text": "Send a message",
            "metadata": {
                "api_name": "Twilio",
                "type": "endpoint",
                "method": "POST",
                "path": "/Messages",
                "tags": ["SMS", "MMS"]
            },
            "rerank_score": 2.5
        }));
        let card = map_search_result(&raw);
        assert_eq!(card.name, "Twilio");
        assert_eq!(card.category, "endpoint");
        assert_eq!(card.auth, "POST /Messages");
        assert_eq!(card.endpoints, vec!["POST /Messages".to_owned()]);
        assert_eq!(card.tags, vec!["SMS".to_owned(), "MMS".to_owned()]);
        assert_eq!(card.pricing, "rerank: 2.50");
    }

    #[test]
    fn method_without_path_keeps_trailing_space() {
        let raw = record(serde_json::json!({"metadata": {"method": "GET"}, "score": 0.5}));
        let card = map_search_result(&raw);
        assert_eq!(card.auth, "GET ");
        assert!(card.endpoints.is_empty());
    }

    #[test]
    fn path_without_method_still_yields_endpoint() {
        let raw = record(serde_json::json!({"metadata": {"path": "/v1/charges"}, "score": 0.5}));
        let card = map_search_result(&raw);
        assert_eq!(card.auth, "REST");
        assert_eq!(card.endpoints, vec![" /v1/charges".to_owned()]);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let raw = record(serde_json::json!({
            "metadata": {"api_name": "", "type": "", "method": ""},
            "score": 0.1
        }));
        let card = map_search_result(&raw);
        assert_eq!(card.name, "Unknown API");
        assert_eq!(card.category, "API");
        assert_eq!(card.auth, "REST");
    }

    #[test]
    fn malformed_tags_do_not_fail_decoding() {
        let raw = record(serde_json::json!({"metadata": {"tags": ["a", 3, "b"]}}));
        assert_eq!(map_search_result(&raw).tags, vec!["a".to_owned(), "b".to_owned()]);

        let raw = record(serde_json::json!({"metadata": {"tags": "solo"}}));
        assert_eq!(map_search_result(&raw).tags, vec!["solo".to_owned()]);

        let raw = record(serde_json::json!({"metadata": {"tags": {"k": 1}}}));
        assert!(map_search_result(&raw).tags.is_empty());
    }

    #[test]
    fn description_over_limit_is_truncated_with_ellipsis() {
        let text = "a".repeat(310);
        let out = truncate_description(&text);
        assert_eq!(out.chars().count(), 303);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..300], &text[..300]);
    }

    #[test]
    fn description_at_limit_is_unchanged() {
        let text = "b".repeat(300);
        assert_eq!(truncate_description(&text), text);
    }

    #[test]
    fn description_truncation_counts_characters_not_bytes() {
        let text = "é".repeat(301);
        let out = truncate_description(&text);
        assert_eq!(out.chars().count(), 303);
        assert!(out.starts_with("éé"));
    }

    #[test]
    fn mapping_preserves_backend_order() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "query": "SMS",
            "results": [
                {"text": "1", "metadata": {"api_name": "A"}, "score": 0.9},
                {"text": "2", "metadata": {"api_name": "B"}, "score": 0.8},
                {"text": "3", "metadata": {"api_name": "C"}, "score": 0.7}
            ],
            "count": 3,
            "latency_ms": 1850
        }))
        .unwrap();
        let cards = map_search_results(&response.results);
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(response.latency_ms, 1850);
    }

    #[test]
    fn match_percent_rounds_score() {
        let raw = record(serde_json::json!({"score": 0.876}));
        assert_eq!(map_search_result(&raw).match_percent(), 88);
    }
}
