use chrono::Duration;
use uuid::Uuid;

/// Signing secret shared by the test config and issued tokens.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-at-least-32-characters-long";

/// A valid bearer header value for `user_id`.
pub fn bearer_for(user_id: Uuid) -> String {
    let token = tubely_api::auth::make_jwt(user_id, TEST_JWT_SECRET, Duration::hours(1))
        .expect("Failed to sign test token");
    format!("Bearer {}", token)
}

/// A bearer header value whose token expired an hour ago.
pub fn expired_bearer_for(user_id: Uuid) -> String {
    let token = tubely_api::auth::make_jwt(user_id, TEST_JWT_SECRET, Duration::hours(-1))
        .expect("Failed to sign test token");
    format!("Bearer {}", token)
}
