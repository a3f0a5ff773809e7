//! Query parameter types for the listing endpoints.
//!
//! Values arrive as raw strings so malformed input is reported with a
//! message naming the parameter rather than a generic deserialization error.

use roombook_core::error::CoreError;
use roombook_core::room_filter::RoomCriteria;
use roombook_core::time::parse_instant;
use roombook_core::types::Timestamp;
use serde::Deserialize;

/// `GET /rooms?capacity=&equipment=`
#[derive(Debug, Default, Deserialize)]
pub struct RoomListParams {
    pub capacity: Option<String>,
    pub equipment: Option<String>,
}

impl RoomListParams {
    pub fn criteria(self) -> Result<RoomCriteria, CoreError> {
        let min_capacity = match self.capacity.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<i32>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    return Err(CoreError::Validation(format!(
                        "capacity must be a positive integer, got '{raw}'"
                    )))
                }
            },
        };
        Ok(RoomCriteria::new(min_capacity, self.equipment))
    }
}

/// `GET /reservations?startDate=&endDate=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRangeParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub const MSG_RANGE_REQUIRED: &str = "startDate and endDate are required";

impl ReservationRangeParams {
    /// Both bounds, parsed. Missing or blank bounds are a validation error.
    pub fn bounds(&self) -> Result<(Timestamp, Timestamp), CoreError> {
        let start = self.start_date.as_deref().filter(|s| !s.trim().is_empty());
        let end = self.end_date.as_deref().filter(|s| !s.trim().is_empty());
        match (start, end) {
            (Some(start), Some(end)) => Ok((
                parse_instant("startDate", start)?,
                parse_instant("endDate", end)?,
            )),
            _ => Err(CoreError::Validation(MSG_RANGE_REQUIRED.to_string())),
        }
    }
}
