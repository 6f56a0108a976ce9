use crate::database::connection::DbPool;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("A user with email {email} already exists")]
    DuplicateEmail { email: String },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Dealer,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Dealer => "dealer",
            UserRole::Admin => "admin",
        }
    }

    /// Only customers submit pickup requests.
    pub fn can_submit_requests(self) -> bool {
        match self {
            UserRole::Customer => true,
            UserRole::Dealer | UserRole::Admin => false,
        }
    }

    /// Dealers and admins work the whole queue; customers only see their own.
    pub fn sees_all_requests(self) -> bool {
        match self {
            UserRole::Customer => false,
            UserRole::Dealer | UserRole::Admin => true,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(UserRole::Customer),
            "dealer" => Ok(UserRole::Dealer),
            "admin" => Ok(UserRole::Admin),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl User {
    pub async fn create(pool: &DbPool, user: CreateUser) -> Result<Self, UserError> {
        let now = Utc::now();

        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, first_name, last_name, role, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(&user.email)
            .bind(user.password_hash)
            .bind(user.first_name)
            .bind(user.last_name)
            .bind(user.role)
            .bind(now)
            .fetch_one(pool)
            .await;

        match created {
            Ok(created) => Ok(created),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(UserError::DuplicateEmail { email: user.email })
            }
            Err(e) => Err(UserError::Database(e)),
        }
    }

    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }
}

/// Emails are compared case-insensitively and without surrounding whitespace.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
