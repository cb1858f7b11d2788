use crate::{User, UserRole};

#[test]
fn test_new_user_normalizes_email() {
    let user = User::new(
        "  Admin@Example.COM ",
        "Admin".to_string(),
        UserRole::Admin,
        "hash".to_string(),
    );

    assert_eq!(user.email, "admin@example.com");
    assert!(user.is_admin());
}

#[test]
fn test_password_hash_is_never_serialized() {
    let user = User::new(
        "user@example.com",
        "User".to_string(),
        UserRole::User,
        "secret-hash".to_string(),
    );

    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["role"], "user");
}
