// Module containing the response record for time information
pub mod response;

use std::time::Duration;

use tracing::{debug, error, info};

use crate::error::AppError;

// API endpoint for the IPGeolocation timezone service
const GEO_LOCATION_ENDPOINT: &str = "https://api.ipgeolocation.io/timezone";

// Hard cap on the single request; the service answers well under this
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One-shot client for the IPGeolocation timezone API.
///
/// Holds the resolved API key and the location to look up; issues a single
/// GET request with no retries.
pub struct TimeLookup {
    api_key: String,
    location: String,
}

impl TimeLookup {
    pub fn new(api_key: String, location: String) -> Self {
        Self { api_key, location }
    }

    /// Builds the request URL with `apiKey` and `location` query parameters.
    /// The location is form-urlencoded, so free text like "New York" is safe.
    ///
    /// # Errors
    /// Returns an error if the request cannot be constructed.
    pub fn request_url(&self) -> Result<reqwest::Url, AppError> {
        let request = reqwest::Client::new()
            .get(GEO_LOCATION_ENDPOINT)
            .query(&self.query_params())
            .build()?;
        Ok(request.url().clone())
    }

    /// Fetches current time information for the configured location.
    ///
    /// # Errors
    /// Returns an error on any transport failure or when the service answers
    /// with an unsuccessful status code.
    pub async fn fetch(&self) -> Result<response::TimeRecord, AppError> {
        info!("Fetching time data for location: {}", self.location);

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let response = client
            .get(GEO_LOCATION_ENDPOINT)
            .query(&self.query_params())
            .send()
            .await?;

        if response.status().is_success() {
            // Parse successful response into the time record
            let record: response::TimeRecord = response.json().await?;
            debug!("Time data fetched successfully: {:?}", record);
            Ok(record)
        } else {
            // Log and return error for unsuccessful responses
            error!("Failed to fetch time data: {}", response.status());
            Err(AppError::ApiRequestFailed(format!(
                "Failed to fetch time data: {}",
                response.status()
            )))
        }
    }

    fn query_params(&self) -> [(&'static str, &str); 2] {
        [
            ("apiKey", self.api_key.as_str()),
            ("location", self.location.as_str()),
        ]
    }
}

#[cfg(test)]
mod test {
    use anyhow::Error;

    use crate::local_time::TimeLookup;

    #[tokio::test]
    async fn request_url_is_deterministic() -> Result<(), Error> {
        let lookup = TimeLookup::new("test_key".to_string(), "London".to_string());
        let url = lookup.request_url()?;
        assert_eq!(
            url.as_str(),
            "https://api.ipgeolocation.io/timezone?apiKey=test_key&location=London"
        );
        Ok(())
    }

    #[tokio::test]
    async fn request_url_encodes_the_location() -> Result<(), Error> {
        let lookup = TimeLookup::new("test_key".to_string(), "New York".to_string());
        let url = lookup.request_url()?;
        assert_eq!(
            url.as_str(),
            "https://api.ipgeolocation.io/timezone?apiKey=test_key&location=New+York"
        );
        Ok(())
    }
}
