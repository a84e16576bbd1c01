use user_service::auth::{JwtAuth, hash_password, verify_password};

#[test]
fn hashed_password_verifies() {
    let hashed = hash_password("correct horse battery staple").unwrap();

    assert!(verify_password("correct horse battery staple", &hashed).unwrap());
}

#[test]
fn wrong_password_is_rejected() {
    let hashed = hash_password("correct horse battery staple").unwrap();

    assert!(!verify_password("wrong password", &hashed).unwrap());
}

#[test]
fn hashing_salts_each_call() {
    let first = hash_password("same input").unwrap();
    let second = hash_password("same input").unwrap();

    assert_ne!(first, second);
}

#[test]
fn issued_token_round_trips() {
    let auth = JwtAuth::new("test-secret", 60);

    let token = auth.issue_token("alice@example.com").unwrap();
    let claims = auth.verify_token(&token).unwrap();

    assert_eq!(claims.sub, "alice@example.com");
}

#[test]
fn garbage_token_is_rejected() {
    let auth = JwtAuth::new("test-secret", 60);

    assert!(auth.verify_token("not.a.token").is_err());
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let issuer = JwtAuth::new("secret-a", 60);
    let verifier = JwtAuth::new("secret-b", 60);

    let token = issuer.issue_token("alice@example.com").unwrap();

    assert!(verifier.verify_token(&token).is_err());
}

#[test]
fn expired_token_is_rejected() {
    let auth = JwtAuth::new("test-secret", -5);

    let token = auth.issue_token("alice@example.com").unwrap();

    assert!(auth.verify_token(&token).is_err());
}
