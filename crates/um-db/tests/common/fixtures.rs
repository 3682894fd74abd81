#![allow(dead_code)]

use um_core::NewUser;

/// Creates creation fields for a test user
pub fn new_test_user() -> NewUser {
    NewUser::new(
        "John Doe".to_string(),
        "john@example.com".to_string(),
        "password".to_string(),
    )
}

/// Creates creation fields with a specific email
pub fn new_test_user_with_email(email: &str) -> NewUser {
    NewUser::new(
        "Test User".to_string(),
        email.to_string(),
        "password".to_string(),
    )
}
