use crate::{errors::AppError, models::user::{normalize_email, UserRole}, utils::helpers::non_blank};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// A registration that passed validation.
#[derive(Debug)]
pub struct ValidRegistration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl RegisterRequest {
    pub fn validate(self) -> Result<ValidRegistration, AppError> {
        let email = normalize_email(&self.email);
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::bad_request("A valid email is required"));
        }
        if self.password.is_empty() {
            return Err(AppError::bad_request("Password is required"));
        }
        let first_name =
            non_blank(&self.first_name).ok_or_else(|| AppError::bad_request("First name is required"))?;
        let last_name =
            non_blank(&self.last_name).ok_or_else(|| AppError::bad_request("Last name is required"))?;
        let role = self.role.trim().parse::<UserRole>().map_err(|_| {
            AppError::bad_request(format!(
                "Unknown role '{}', expected customer, dealer or admin",
                self.role
            ))
        })?;

        Ok(ValidRegistration {
            email,
            password: self.password,
            first_name,
            last_name,
            role,
        })
    }
}
