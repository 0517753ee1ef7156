//! Form Payload Builders
//!
//! Raw field values as read from the page, turned into API payloads.

use chrono::{NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::{ApiError, ApiResult};
use crate::models::{NewComment, NewCommunityEvent, NewListing, NewRsvp};

pub const DEFAULT_LISTING_CATEGORY: &str = "for_sale";

/// Formats produced by `<input type="datetime-local">`
const LOCAL_INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Marketplace form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub price: String,
    pub category: String,
    pub contact: String,
    pub description: String,
}

impl ListingForm {
    pub fn to_payload(&self, city: &str) -> ApiResult<NewListing> {
        let category = self.category.trim();
        Ok(NewListing {
            title: self.title.clone(),
            price: parse_price(&self.price)?,
            category: if category.is_empty() { DEFAULT_LISTING_CATEGORY.to_string() } else { category.to_string() },
            city: city.to_string(),
            contact: self.contact.clone(),
            description: self.description.clone(),
            is_active: true,
        })
    }
}

/// Community event form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub venue: String,
    pub starts_at: String,
    pub ends_at: String,
    pub host_contact: String,
    pub description: String,
}

impl EventForm {
    /// Build the payload, reading the date inputs in `tz`
    pub fn to_payload<Tz: TimeZone>(&self, city: &str, tz: &Tz) -> ApiResult<NewCommunityEvent> {
        let starts_at = to_iso_timestamp(&self.starts_at, tz)?;
        let ends_at = match self.ends_at.trim() {
            "" => None,
            end => Some(to_iso_timestamp(end, tz)?),
        };
        Ok(NewCommunityEvent {
            title: self.title.clone(),
            venue: self.venue.clone(),
            starts_at,
            ends_at,
            host_contact: self.host_contact.clone(),
            description: self.description.clone(),
            city: city.to_string(),
            is_approved: false,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentForm {
    pub author: String,
    pub body: String,
}

impl CommentForm {
    pub fn to_payload(&self, item_id: u32) -> ApiResult<NewComment> {
        let body = self.body.trim();
        if body.is_empty() {
            return Err(ApiError::invalid("comment cannot be empty"));
        }
        Ok(NewComment {
            item_id,
            author: non_blank(&self.author),
            body: body.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RsvpForm {
    pub name: String,
    pub email: String,
    pub count: String,
}

impl RsvpForm {
    pub fn to_payload(&self, event_id: u32) -> ApiResult<NewRsvp> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::invalid("name is required"));
        }
        let count = match self.count.trim() {
            "" => 1,
            raw => raw
                .parse::<u32>()
                .ok()
                .filter(|c| *c >= 1)
                .ok_or_else(|| ApiError::invalid(format!("party size must be a whole number of at least 1, got {:?}", raw)))?,
        };
        Ok(NewRsvp {
            event_id,
            name: name.to_string(),
            email: non_blank(&self.email),
            count,
        })
    }
}

/// Empty input means no price
pub fn parse_price(raw: &str) -> ApiResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| ApiError::invalid(format!("price must be a number, got {:?}", raw)))
}

/// Blank means no filter
pub fn parse_race_id(raw: &str) -> ApiResult<Option<u32>> {
    match raw.trim() {
        "" => Ok(None),
        id => id
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ApiError::invalid(format!("race id must be a number, got {:?}", id))),
    }
}

/// Local wall-clock input -> UTC ISO-8601 with milliseconds
pub fn to_iso_timestamp<Tz: TimeZone>(input: &str, tz: &Tz) -> ApiResult<String> {
    let input = input.trim();
    let naive = LOCAL_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| ApiError::invalid(format!("not a date and time: {:?}", input)))?;
    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| ApiError::invalid(format!("{} does not exist in the local time zone", input)))?;
    Ok(local.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
