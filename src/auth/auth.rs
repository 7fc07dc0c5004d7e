use crate::config::Config;
use crate::model::role::Role;
use crate::models::{Claims, TokenType};
use actix_web::{
    FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized, web::Data,
};
use futures::future::{Ready, ready};
use jsonwebtoken::{DecodingKey, Validation, decode};

/// Authenticated session context for a single request. Built from the
/// bearer token; handlers check capabilities on it explicitly instead of
/// relying on any ambient state.
pub struct AuthUser {
    pub user_id: u64,
    pub username: String,
    pub role: Role,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // The auth middleware already verified the token and stored the
        // session context; take it instead of decoding twice.
        if let Some(user) = req.extensions_mut().remove::<AuthUser>() {
            return ready(Ok(user));
        }

        let token = match req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            Some(t) => t,
            None => return ready(Err(ErrorUnauthorized("Missing token"))),
        };

        let config = match req.app_data::<Data<Config>>() {
            Some(c) => c,
            None => {
                return ready(Err(actix_web::error::ErrorInternalServerError(
                    "Config missing",
                )));
            }
        };

        let data = match decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &Validation::default(),
        ) {
            Ok(d) => d,
            Err(_) => return ready(Err(ErrorUnauthorized("Invalid token"))),
        };

        // Refresh tokens only buy new tokens; they are not bearer
        // credentials for the API.
        if data.claims.token_type != TokenType::Access {
            return ready(Err(ErrorUnauthorized("Access token required")));
        }

        let role = match Role::from_id(data.claims.role) {
            Some(r) => r,
            None => return ready(Err(ErrorUnauthorized("Invalid role"))),
        };

        ready(Ok(AuthUser {
            user_id: data.claims.user_id,
            username: data.claims.sub,
            role,
        }))
    }
}

impl AuthUser {
    pub fn require_admin(&self) -> actix_web::Result<()> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(actix_web::error::ErrorForbidden("Admin only"))
        }
    }

    pub fn require_hr_or_admin(&self) -> actix_web::Result<()> {
        if matches!(self.role, Role::Admin | Role::Hr) {
            Ok(())
        } else {
            Err(actix_web::error::ErrorForbidden("HR/Admin only"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::{generate_access_token, generate_refresh_token};
    use actix_web::test::TestRequest;

    fn test_config() -> Config {
        Config {
            database_url: String::new(),
            jwt_secret: "secret".to_string(),
            server_addr: String::new(),
            access_token_ttl: 900,
            refresh_token_ttl: 3600,
            rate_login_per_min: 60,
            rate_register_per_min: 30,
            rate_refresh_per_min: 30,
            rate_protected_per_min: 1000,
            api_prefix: "/api/v1".to_string(),
        }
    }

    fn request_with_token(token: &str) -> HttpRequest {
        TestRequest::default()
            .app_data(Data::new(test_config()))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_http_request()
    }

    #[actix_web::test]
    async fn test_access_token_builds_session_context() {
        let token = generate_access_token(7, "admin".to_string(), 1, "secret", 900).unwrap();
        let req = request_with_token(&token);

        let user = AuthUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();

        assert_eq!(user.user_id, 7);
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, Role::Admin);
    }

    #[actix_web::test]
    async fn test_refresh_token_is_not_a_bearer_credential() {
        let (token, _) =
            generate_refresh_token(7, "admin".to_string(), 1, "secret", 3600).unwrap();
        let req = request_with_token(&token);

        let result = AuthUser::from_request(&req, &mut Payload::None).await;

        assert!(result.is_err(), "refresh token must not pass the access guard");
    }

    #[actix_web::test]
    async fn test_missing_token_rejected() {
        let req = TestRequest::default()
            .app_data(Data::new(test_config()))
            .to_http_request();

        assert!(AuthUser::from_request(&req, &mut Payload::None).await.is_err());
    }

    #[actix_web::test]
    async fn test_session_context_from_middleware_is_reused() {
        let req = request_with_token("not-a-jwt");
        req.extensions_mut().insert(AuthUser {
            user_id: 3,
            username: "hr".to_string(),
            role: Role::Hr,
        });

        // The stored context wins; the bogus header is never decoded.
        let user = AuthUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();

        assert_eq!(user.user_id, 3);
        assert_eq!(user.role, Role::Hr);
    }
}
