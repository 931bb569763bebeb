//! Unit tests for the auth crate

mod config_tests {
    use crate::application::config::{AuthConfig, DEFAULT_TOKEN_TTL_HOURS};
    use crate::error::AuthError;

    #[test]
    fn test_empty_secret_is_fatal() {
        let result = AuthConfig::new("", "issuer", "audience", Some(3));
        assert!(matches!(result, Err(AuthError::SecretMissing)));
    }

    #[test]
    fn test_whitespace_secret_is_fatal() {
        let result = AuthConfig::new("   ", "issuer", "audience", Some(3));
        assert!(matches!(result, Err(AuthError::SecretMissing)));
    }

    #[test]
    fn test_ttl_defaults_when_missing() {
        let config = AuthConfig::new("secret", "issuer", "audience", None).unwrap();
        assert_eq!(
            config.token_ttl_secs(),
            DEFAULT_TOKEN_TTL_HOURS * 3600
        );
    }

    #[test]
    fn test_ttl_defaults_when_non_positive() {
        let zero = AuthConfig::new("secret", "issuer", "audience", Some(0)).unwrap();
        assert_eq!(zero.token_ttl_secs(), DEFAULT_TOKEN_TTL_HOURS * 3600);

        let negative = AuthConfig::new("secret", "issuer", "audience", Some(-5)).unwrap();
        assert_eq!(negative.token_ttl_secs(), DEFAULT_TOKEN_TTL_HOURS * 3600);
    }

    #[test]
    fn test_configured_ttl_is_used() {
        let config = AuthConfig::new("secret", "issuer", "audience", Some(12)).unwrap();
        assert_eq!(config.token_ttl_secs(), 12 * 3600);
    }
}

mod token_tests {
    use chrono::Utc;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    use crate::application::config::AuthConfig;
    use crate::application::token::{Claims, TokenService};
    use crate::domain::entity::credential::Credential;
    use crate::error::AuthError;

    const SECRET: &str = "unit-test-signing-secret";
    const ISSUER: &str = "catalog-api";
    const AUDIENCE: &str = "catalog-clients";

    fn service() -> TokenService {
        let config = AuthConfig::new(SECRET, ISSUER, AUDIENCE, Some(3)).unwrap();
        TokenService::new(&config)
    }

    fn credential() -> Credential {
        Credential {
            client_id: 42,
            username: "alice".to_string(),
            password_hash: "$argon2id$irrelevant".to_string(),
        }
    }

    /// Forge a token with arbitrary claims, signed with the given secret.
    fn forge(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn valid_claims() -> Claims {
        let iat = Utc::now().timestamp();
        Claims {
            sub: "42".to_string(),
            name: "alice".to_string(),
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
            iat,
            exp: iat + 3600,
        }
    }

    #[test]
    fn test_issue_then_validate() {
        let service = service();
        let issued = service.issue(&credential()).unwrap();

        let claims = service.validate(&issued.token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.iss, ISSUER);
        assert_eq!(claims.aud, AUDIENCE);
        assert_eq!(claims.exp, claims.iat + 3 * 3600);
        assert_eq!(claims.exp, issued.expires_at);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();

        let mut claims = valid_claims();
        claims.iat -= 7200;
        claims.exp = claims.iat + 3600; // expired an hour ago

        let token = forge(&claims, SECRET);
        assert!(matches!(
            service.validate(&token),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_wrong_signer_rejected() {
        let service = service();
        let token = forge(&valid_claims(), "a-different-secret");
        assert!(matches!(
            service.validate(&token),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let service = service();
        let mut claims = valid_claims();
        claims.iss = "someone-else".to_string();

        let token = forge(&claims, SECRET);
        assert!(matches!(
            service.validate(&token),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let service = service();
        let mut claims = valid_claims();
        claims.aud = "other-consumers".to_string();

        let token = forge(&claims, SECRET);
        assert!(matches!(
            service.validate(&token),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let service = service();
        assert!(matches!(
            service.validate("not.a.jwt"),
            Err(AuthError::TokenInvalid)
        ));
        assert!(matches!(service.validate(""), Err(AuthError::TokenInvalid)));
    }
}

mod login_tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use platform::password::{ClearTextPassword, hash_password};

    use crate::application::config::AuthConfig;
    use crate::application::token::TokenService;
    use crate::application::{LoginInput, LoginUseCase};
    use crate::domain::entity::credential::Credential;
    use crate::domain::repository::CredentialRepository;
    use crate::error::{AuthError, AuthResult};

    /// In-memory credential store for use-case tests
    #[derive(Clone)]
    struct InMemoryCredentials {
        users: Arc<HashMap<String, Credential>>,
    }

    impl InMemoryCredentials {
        fn with_user(username: &str, password: &str) -> Self {
            let hash =
                hash_password(&ClearTextPassword::new(password.to_string())).unwrap();
            let credential = Credential {
                client_id: 1,
                username: username.to_string(),
                password_hash: hash,
            };

            let mut users = HashMap::new();
            users.insert(username.to_string(), credential);

            Self {
                users: Arc::new(users),
            }
        }
    }

    impl CredentialRepository for InMemoryCredentials {
        async fn find_by_username(&self, username: &str) -> AuthResult<Option<Credential>> {
            Ok(self.users.get(username).cloned())
        }
    }

    fn tokens() -> Arc<TokenService> {
        let config = AuthConfig::new("login-test-secret", "issuer", "audience", None).unwrap();
        Arc::new(TokenService::new(&config))
    }

    fn use_case(repo: InMemoryCredentials) -> LoginUseCase<InMemoryCredentials> {
        LoginUseCase::new(Arc::new(repo), tokens())
    }

    #[tokio::test]
    async fn test_successful_login_issues_valid_token() {
        let use_case = use_case(InMemoryCredentials::with_user("alice", "p4ssw0rd!"));

        let output = use_case
            .execute(LoginInput {
                username: "alice".to_string(),
                password: "p4ssw0rd!".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.username, "alice");

        let claims = tokens().validate(&output.token).unwrap();
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.sub, "1");
    }

    #[tokio::test]
    async fn test_empty_username_rejected_before_store_access() {
        let use_case = use_case(InMemoryCredentials::with_user("alice", "p4ssw0rd!"));

        let result = use_case
            .execute(LoginInput {
                username: "".to_string(),
                password: "p4ssw0rd!".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_empty_password_rejected_before_store_access() {
        let use_case = use_case(InMemoryCredentials::with_user("alice", "p4ssw0rd!"));

        let result = use_case
            .execute(LoginInput {
                username: "alice".to_string(),
                password: "".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let use_case = use_case(InMemoryCredentials::with_user("alice", "p4ssw0rd!"));

        let unknown = use_case
            .execute(LoginInput {
                username: "bob".to_string(),
                password: "p4ssw0rd!".to_string(),
            })
            .await
            .unwrap_err();

        let wrong_password = use_case
            .execute(LoginInput {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        // Same status code and same client-facing message for both paths
        assert_eq!(unknown.status_code(), wrong_password.status_code());
        assert_eq!(unknown.to_string(), wrong_password.to_string());
        assert_eq!(wrong_password.to_string(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_username_match_is_case_sensitive() {
        let use_case = use_case(InMemoryCredentials::with_user("alice", "p4ssw0rd!"));

        let result = use_case
            .execute(LoginInput {
                username: "Alice".to_string(),
                password: "p4ssw0rd!".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
