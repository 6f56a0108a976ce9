use crate::{errors::AppError, models::pickup_request::CreatePickupRequest, utils::helpers::non_blank};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PickupRequestBody {
    pub description: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Status is free text, any string including the empty one.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

impl PickupRequestBody {
    pub fn into_create(self, customer_id: i64) -> Result<CreatePickupRequest, AppError> {
        let description =
            non_blank(&self.description).ok_or_else(|| AppError::bad_request("Description is required"))?;
        let address = non_blank(&self.address).ok_or_else(|| AppError::bad_request("Address is required"))?;

        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AppError::bad_request("Latitude must be between -90 and 90"));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AppError::bad_request("Longitude must be between -180 and 180"));
        }

        Ok(CreatePickupRequest {
            customer_id,
            description,
            address,
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}
