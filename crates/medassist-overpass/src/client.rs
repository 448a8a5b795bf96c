//! HTTP client for the Overpass interpreter endpoint.
//!
//! Sends an Overpass QL query as a form-encoded POST and maps the returned
//! elements into ranked [`Pharmacy`] records. Element parsing is defensive:
//! records lacking a usable coordinate are skipped, missing tags fall back to
//! placeholders, and nothing in a malformed element can fail the whole parse.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::OverpassError;
use crate::geo::haversine_meters;
use crate::types::Pharmacy;

const DEFAULT_BASE_URL: &str = "https://overpass-api.de/api/interpreter";

/// Structured address tags joined (in this order) into the display address.
const ADDRESS_TAGS: [&str; 4] = ["addr:housenumber", "addr:street", "addr:city", "addr:postcode"];

/// One raw facility record with its ranking distance. Never leaves this
/// module; only the display subset survives into [`Pharmacy`].
struct PharmacyCandidate {
    name: String,
    address: String,
    map_url: String,
    distance_meters: f64,
}

/// Client for the Overpass interpreter API.
///
/// Use [`OverpassClient::new`] for production or
/// [`OverpassClient::with_base_url`] to point at a mock server in tests.
pub struct OverpassClient {
    client: Client,
    base_url: Url,
}

impl OverpassClient {
    /// Creates a client pointed at the public Overpass endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, OverpassError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom interpreter URL (for testing with
    /// wiremock, or a self-hosted Overpass instance).
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OverpassError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("medassist/0.1 (pharmacy-lookup)")
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| OverpassError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Returns up to `limit` pharmacies within `radius_meters` of the given
    /// coordinate, sorted ascending by great-circle distance.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::Http`] on network failure.
    /// - [`OverpassError::Api`] on a non-2xx HTTP status.
    /// - [`OverpassError::Json`] if the response body is not valid JSON.
    pub async fn find_nearby_pharmacies(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: u32,
        limit: usize,
    ) -> Result<Vec<Pharmacy>, OverpassError> {
        let query = build_query(lat, lon, radius_meters);

        let response = self
            .client
            .post(self.base_url.clone())
            .form(&[("data", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body).map_err(|e| OverpassError::Json {
            context: self.base_url.to_string(),
            source: e,
        })?;

        let ranked = rank_elements(&data, lat, lon, limit);
        tracing::debug!(count = ranked.len(), "ranked nearby pharmacies");
        Ok(ranked)
    }
}

/// Builds the Overpass QL query for pharmacies around a point. Ways and
/// relations are requested with `out center` so area features still carry a
/// representative coordinate.
fn build_query(lat: f64, lon: f64, radius_meters: u32) -> String {
    format!(
        r#"[out:json][timeout:10];
(
  node["amenity"="pharmacy"](around:{radius_meters},{lat},{lon});
  way["amenity"="pharmacy"](around:{radius_meters},{lat},{lon});
  relation["amenity"="pharmacy"](around:{radius_meters},{lat},{lon});
);
out center tags;"#
    )
}

/// Extracts usable candidates from an Overpass response, sorts them by
/// distance from the query point, and truncates to `limit`.
fn rank_elements(data: &Value, query_lat: f64, query_lon: f64, limit: usize) -> Vec<Pharmacy> {
    let elements = data
        .get("elements")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut candidates: Vec<PharmacyCandidate> = elements
        .iter()
        .filter_map(|el| candidate_from_element(el, query_lat, query_lon))
        .collect();

    candidates.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    candidates.truncate(limit);

    candidates
        .into_iter()
        .map(|c| Pharmacy {
            name: c.name,
            address: c.address,
            map_url: c.map_url,
        })
        .collect()
}

/// Maps one raw Overpass element to a candidate, or `None` if it carries no
/// usable coordinate.
fn candidate_from_element(
    element: &Value,
    query_lat: f64,
    query_lon: f64,
) -> Option<PharmacyCandidate> {
    let (lat, lon) = representative_point(element)?;
    let tags = element.get("tags");

    let name = tags
        .and_then(|t| t.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("Pharmacy")
        .to_string();

    let address = ADDRESS_TAGS
        .iter()
        .filter_map(|key| tags.and_then(|t| t.get(*key)).and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join(", ");

    let map_url =
        format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=18/{lat}/{lon}");

    Some(PharmacyCandidate {
        name,
        address,
        map_url,
        distance_meters: haversine_meters(query_lat, query_lon, lat, lon),
    })
}

/// The coordinate that stands in for the element: `center` for ways and
/// relations, the element's own point for nodes.
fn representative_point(element: &Value) -> Option<(f64, f64)> {
    if let Some(center) = element.get("center") {
        let lat = center.get("lat").and_then(Value::as_f64);
        let lon = center.get("lon").and_then(Value::as_f64);
        if let (Some(lat), Some(lon)) = (lat, lon) {
            return Some((lat, lon));
        }
    }

    let lat = element.get("lat").and_then(Value::as_f64)?;
    let lon = element.get("lon").and_then(Value::as_f64)?;
    Some((lat, lon))
}
