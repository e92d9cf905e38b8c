//! OMDb API client.
//!
//! OMDb requires a (free-tier) API key. Responses report "no match" inside a
//! 200 payload via `Response: "False"`, which maps to `Ok(None)` here.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{parse_year, MetadataRecord};
use crate::error::MetadataError;

const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// OMDb client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// OMDb API key (required).
    pub api_key: String,
    /// Base URL override, mainly for tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: OmdbConfig) -> Result<Self, MetadataError> {
        if config.api_key.is_empty() {
            return Err(MetadataError::NotConfigured(
                "OMDb API key is required (set [metadata].api_key or CINELOG_OMDB_API_KEY)"
                    .to_string(),
            ));
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Look up a movie by exact title. `Ok(None)` means the API knows no
    /// such movie.
    pub async fn fetch(&self, title: &str) -> Result<Option<MetadataRecord>, MetadataError> {
        debug!("OMDb lookup: title='{}'", title);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(MetadataError::NotConfigured(
                "Invalid OMDb API key".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let payload: OmdbPayload = response
            .json()
            .await
            .map_err(|e| MetadataError::Parse(format!("invalid OMDb payload: {}", e)))?;

        if !payload.response.eq_ignore_ascii_case("true") {
            debug!(
                "OMDb no match for '{}': {}",
                title,
                payload.error.as_deref().unwrap_or("unspecified")
            );
            return Ok(None);
        }

        payload.try_into().map(Some)
    }
}

#[derive(Debug, Deserialize)]
struct OmdbPayload {
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Year", default)]
    year: Option<String>,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster", default)]
    poster: Option<String>,
}

impl TryFrom<OmdbPayload> for MetadataRecord {
    type Error = MetadataError;

    fn try_from(payload: OmdbPayload) -> Result<Self, MetadataError> {
        let title = payload
            .title
            .filter(|t| !t.is_empty())
            .ok_or_else(|| MetadataError::Parse("payload missing Title".to_string()))?;

        let year = payload
            .year
            .as_deref()
            .and_then(parse_year)
            .ok_or_else(|| {
                MetadataError::Parse(format!(
                    "no usable year in {:?}",
                    payload.year.as_deref().unwrap_or("")
                ))
            })?;

        // "N/A" and absent ratings default to 0.0
        let rating = payload
            .imdb_rating
            .as_deref()
            .and_then(|r| r.parse::<f64>().ok())
            .unwrap_or(0.0);

        let poster = payload
            .poster
            .filter(|p| !p.eq_ignore_ascii_case("N/A"))
            .unwrap_or_default();

        Ok(MetadataRecord {
            title,
            year,
            rating,
            poster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> OmdbPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn client_requires_api_key() {
        let result = OmdbClient::new(OmdbConfig {
            api_key: String::new(),
            base_url: None,
        });
        assert!(matches!(result, Err(MetadataError::NotConfigured(_))));
    }

    #[test]
    fn full_payload_normalizes() {
        let record: MetadataRecord = payload(
            r#"{"Response":"True","Title":"Titanic","Year":"1997",
                "imdbRating":"7.9","Poster":"https://example.com/t.jpg"}"#,
        )
        .try_into()
        .unwrap();

        assert_eq!(record.title, "Titanic");
        assert_eq!(record.year, 1997);
        assert_eq!(record.rating, 7.9);
        assert_eq!(record.poster, "https://example.com/t.jpg");
    }

    #[test]
    fn ranged_year_and_na_fields() {
        let record: MetadataRecord = payload(
            r#"{"Response":"True","Title":"Some Series","Year":"2001–2003",
                "imdbRating":"N/A","Poster":"N/A"}"#,
        )
        .try_into()
        .unwrap();

        assert_eq!(record.year, 2001);
        assert_eq!(record.rating, 0.0);
        assert_eq!(record.poster, "");
    }

    #[test]
    fn missing_title_is_a_parse_error() {
        let result: Result<MetadataRecord, _> =
            payload(r#"{"Response":"True","Year":"1997"}"#).try_into();
        assert!(matches!(result, Err(MetadataError::Parse(_))));
    }
}
