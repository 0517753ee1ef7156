//! Marketplace Calls

use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{Listing, NewListing};
use super::{get_json, post_json, Query};

pub fn listings_url(config: &AppConfig) -> String {
    Query::new()
        .param("city", &config.city)
        .to_url(&config.endpoint("/listings"))
}

pub async fn list_listings(config: &AppConfig) -> ApiResult<Vec<Listing>> {
    get_json(&listings_url(config)).await
}

pub async fn create_listing(config: &AppConfig, listing: &NewListing) -> ApiResult<Listing> {
    post_json(&config.endpoint("/listings"), listing).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listings_url_uses_configured_city() {
        assert_eq!(
            listings_url(&AppConfig::default()),
            "http://localhost:8000/listings?city=Knoxville%2C%20TN"
        );
    }
}
