use crate::database::connection::DbPool;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_STATUS: &str = "new";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PickupRequest {
    pub id: i64,
    pub customer_id: i64,
    pub description: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreatePickupRequest {
    pub customer_id: i64,
    pub description: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PickupRequest {
    pub async fn create(pool: &DbPool, request: CreatePickupRequest) -> Result<Self, sqlx::Error> {
        let now = Utc::now();

        let created = sqlx::query_as::<_, PickupRequest>(
            "INSERT INTO pickup_requests (customer_id, description, address, latitude, longitude, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(request.customer_id)
            .bind(request.description)
            .bind(request.address)
            .bind(request.latitude)
            .bind(request.longitude)
            .bind(DEFAULT_STATUS)
            .bind(now)
            .fetch_one(pool)
            .await?;

        Ok(created)
    }

    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let request = sqlx::query_as::<_, PickupRequest>("SELECT * FROM pickup_requests WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(request)
    }

    pub async fn find_all(pool: &DbPool) -> Result<Vec<Self>, sqlx::Error> {
        let requests = sqlx::query_as::<_, PickupRequest>(
            "SELECT * FROM pickup_requests ORDER BY created_at DESC, id DESC",
        )
            .fetch_all(pool)
            .await?;

        Ok(requests)
    }

    pub async fn find_by_customer(pool: &DbPool, customer_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let requests = sqlx::query_as::<_, PickupRequest>(
            "SELECT * FROM pickup_requests WHERE customer_id = ? ORDER BY created_at DESC, id DESC",
        )
            .bind(customer_id)
            .fetch_all(pool)
            .await?;

        Ok(requests)
    }

    /// Sets the status verbatim. Returns the number of rows touched, which is
    /// zero when no request has that id.
    pub async fn update_status(pool: &DbPool, id: i64, status: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE pickup_requests SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
