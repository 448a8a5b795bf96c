//! Domain types for symptom-advice requests and responses.

use serde::{Deserialize, Serialize};

/// A geographic point in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One symptom-advice request. Lives only for the duration of a single call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceQuery {
    /// Free-text symptom description. Must be non-empty after trimming.
    pub query: String,
    /// Where the user is, if they shared it. Drives pharmacy enrichment.
    pub user_location: Option<Coordinates>,
}

/// An over-the-counter medicine suggestion. Every field is a plain string;
/// the coercer guarantees this regardless of what the model returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtcMedicine {
    pub name: String,
    pub dosage_guidance: String,
    pub cautions: String,
}

/// A home remedy suggestion with a short rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRemedy {
    pub title: String,
    pub rationale: String,
}

/// A single video link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoLink {
    pub url: String,
}

/// A nearby pharmacy, reduced to its public-facing fields. Distance is used
/// for ranking upstream and never crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyChemist {
    pub name: String,
    pub address: String,
    pub map_url: String,
}

/// The normalized advice payload returned to callers.
///
/// Invariants:
/// - every array field contains only elements of the declared shape;
/// - `nearby_chemists` holds at most 5 entries, sorted non-decreasing by
///   distance from the query coordinate, and is empty when no coordinate was
///   supplied or the facility lookup failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdviceResult {
    pub intent: String,
    pub otc_medicines: Vec<OtcMedicine>,
    pub nearby_chemists: Vec<NearbyChemist>,
    pub home_remedies: Vec<HomeRemedy>,
    pub videos: Vec<VideoLink>,
    pub red_flags: Vec<String>,
    pub disclaimers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_result_serializes_with_snake_case_keys() {
        let result = AdviceResult {
            intent: "fever relief".to_string(),
            otc_medicines: vec![OtcMedicine {
                name: "paracetamol".to_string(),
                dosage_guidance: "500mg every 6h".to_string(),
                cautions: "avoid with liver disease".to_string(),
            }],
            ..AdviceResult::default()
        };

        let json = serde_json::to_value(&result).expect("serializes");
        assert_eq!(json["intent"], "fever relief");
        assert_eq!(json["otc_medicines"][0]["dosage_guidance"], "500mg every 6h");
        assert_eq!(json["nearby_chemists"], serde_json::json!([]));
        assert!(json.get("red_flags").is_some());
        assert!(json.get("disclaimers").is_some());
    }

    #[test]
    fn advice_query_deserializes_without_location() {
        let query: AdviceQuery =
            serde_json::from_str(r#"{"query": "I have a fever"}"#).expect("deserializes");
        assert_eq!(query.query, "I have a fever");
        assert!(query.user_location.is_none());
    }

    #[test]
    fn advice_query_deserializes_with_location() {
        let query: AdviceQuery = serde_json::from_str(
            r#"{"query": "headache", "user_location": {"lat": 28.6139, "lon": 77.2090}}"#,
        )
        .expect("deserializes");
        let loc = query.user_location.expect("location present");
        assert!((loc.lat - 28.6139).abs() < f64::EPSILON);
        assert!((loc.lon - 77.2090).abs() < f64::EPSILON);
    }
}
