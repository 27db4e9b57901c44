use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInInput {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,
    pub attendance_date: NaiveDate,
    #[validate(length(min = 1, message = "locationName is required"))]
    pub location_name: String,
    #[serde(default)]
    pub in_time_image_captured: bool,
    #[validate(url(message = "inTimeImageUrl must be a valid URL"))]
    pub in_time_image_url: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "inTimeLatitude must be between -90 and 90"))]
    pub in_time_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "inTimeLongitude must be between -180 and 180"))]
    pub in_time_longitude: f64,
    pub in_time_accuracy: Option<f64>,
    pub in_time_speed: Option<f64>,
    pub in_time_heading: Option<f64>,
    pub in_time_altitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutInput {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i32,
    pub attendance_date: NaiveDate,
    #[serde(default)]
    pub out_time_image_captured: bool,
    #[validate(url(message = "outTimeImageUrl must be a valid URL"))]
    pub out_time_image_url: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "outTimeLatitude must be between -90 and 90"))]
    pub out_time_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "outTimeLongitude must be between -180 and 180"))]
    pub out_time_longitude: f64,
    pub out_time_accuracy: Option<f64>,
}
