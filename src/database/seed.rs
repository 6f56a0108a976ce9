use crate::{
    database::connection::DbPool,
    models::user::{CreateUser, User, UserRole},
    services::auth::AuthService,
};
use anyhow::Result;
use tracing::info;

pub const DEMO_PASSWORD: &str = "demo123";

const DEMO_USERS: [(&str, &str, &str, UserRole); 3] = [
    ("customer@demo.com", "John", "Customer", UserRole::Customer),
    ("dealer@demo.com", "Mike", "Dealer", UserRole::Dealer),
    ("admin@demo.com", "Sarah", "Admin", UserRole::Admin),
];

/// Inserts the demo accounts, skipping any email that is already taken.
pub async fn seed_demo_users(pool: &DbPool, auth_service: &AuthService) -> Result<()> {
    for (email, first_name, last_name, role) in DEMO_USERS {
        if User::find_by_email(pool, email).await?.is_some() {
            continue;
        }

        let password_hash = auth_service.hash_password(DEMO_PASSWORD.to_string()).await?;
        let user = User::create(
            pool,
            CreateUser {
                email: email.to_string(),
                password_hash,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                role,
            },
        )
        .await?;

        info!("Seeded demo {} account {}", user.role, user.email);
    }

    Ok(())
}
