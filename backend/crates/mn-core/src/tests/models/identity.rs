use crate::{DEFAULT_ADMIN_EMAIL, Identity, Role};

#[test]
fn test_admin_email_yields_admin_role() {
    let identity = Identity::from_login("admin@micronav.com", DEFAULT_ADMIN_EMAIL);

    assert_eq!(identity.role, Role::Admin);
    assert_eq!(identity.name, "Admin User");
    assert!(identity.is_admin());
}

#[test]
fn test_other_email_yields_user_role() {
    let identity = Identity::from_login("user@micronav.com", DEFAULT_ADMIN_EMAIL);

    assert_eq!(identity.role, Role::User);
    assert_eq!(identity.name, "Regular User");
    assert!(!identity.is_admin());
}

#[test]
fn test_admin_match_is_exact() {
    let identity = Identity::from_login("Admin@micronav.com", DEFAULT_ADMIN_EMAIL);
    assert_eq!(identity.role, Role::User);
}

#[test]
fn test_identity_is_deterministic() {
    let first = Identity::from_login("user@micronav.com", DEFAULT_ADMIN_EMAIL);
    let second = Identity::from_login("user@micronav.com", DEFAULT_ADMIN_EMAIL);
    let other = Identity::from_login("other@micronav.com", DEFAULT_ADMIN_EMAIL);

    assert_eq!(first, second);
    assert_ne!(first.id, other.id);
}

#[test]
fn test_avatar_seeded_by_email() {
    let identity = Identity::from_login("user@micronav.com", DEFAULT_ADMIN_EMAIL);
    assert_eq!(
        identity.avatar.as_deref(),
        Some("https://api.dicebear.com/7.x/avataaars/svg?seed=user@micronav.com")
    );
}

#[test]
fn test_identity_json_round_trip() {
    let identity = Identity::from_login("admin@micronav.com", DEFAULT_ADMIN_EMAIL);
    let json = serde_json::to_string(&identity).unwrap();

    assert!(json.contains("\"role\":\"admin\""));
    assert_eq!(serde_json::from_str::<Identity>(&json).unwrap(), identity);
}
