use super::*;

#[test]
fn user_deserializes_from_backend_shape() {
    let user: User = serde_json::from_str(r#"{"id":1,"name":"Ada","email":"ada@x.com"}"#).unwrap();
    assert_eq!(
        user,
        User { id: 1, name: "Ada".to_owned(), email: "ada@x.com".to_owned() }
    );
}

#[test]
fn user_ignores_unknown_fields() {
    let user: User =
        serde_json::from_str(r#"{"id":7,"name":"Grace","email":"grace@x.com","role":"admin"}"#).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Grace");
}

#[test]
fn user_rejects_missing_email() {
    let result = serde_json::from_str::<User>(r#"{"id":1,"name":"Ada"}"#);
    assert!(result.is_err());
}

#[test]
fn user_rejects_string_id() {
    let result = serde_json::from_str::<User>(r#"{"id":"1","name":"Ada","email":"ada@x.com"}"#);
    assert!(result.is_err());
}
