use crate::{NewUser, User};

use uuid::Uuid;

#[test]
fn test_new_user_holds_fields() {
    let new_user = NewUser::new(
        "John Doe".to_string(),
        "john@example.com".to_string(),
        "password".to_string(),
    );

    assert_eq!(new_user.name, "John Doe");
    assert_eq!(new_user.email, "john@example.com");
    assert_eq!(new_user.password, "password");
}

#[test]
fn test_user_from_new_attaches_id() {
    let id = Uuid::new_v4();
    let new_user = NewUser::new(
        "Jane Smith".to_string(),
        "jane@example.com".to_string(),
        "password".to_string(),
    );

    let user = User::from_new(id, new_user);

    assert_eq!(user.id, id);
    assert_eq!(user.name, "Jane Smith");
    assert_eq!(user.email, "jane@example.com");
}

#[test]
fn test_user_serializes_with_plain_id() {
    let user = User {
        id: Uuid::nil(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        password: "password".to_string(),
    };

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(json["name"], "John Doe");
}
