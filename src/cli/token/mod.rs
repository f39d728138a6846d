//! Token command - mints a bearer token for a user id

use clap::Args;

use crate::config::AppConfig;
use crate::domain::user::UserId;
use crate::infrastructure::auth::{JwtConfig, JwtGenerator, JwtService, MAX_TOKEN_HOURS};

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// User id placed in the token subject
    #[arg(long)]
    pub uid: String,

    /// Lifetime in hours, at most one year; defaults to auth.jwt_expiration_hours
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_TOKEN_HOURS))]
    pub hours: Option<u64>,
}

/// Print a token for `args.uid` to stdout
pub async fn run(args: TokenArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let token = issue_token(&config, &args)?;
    println!("{}", token);

    Ok(())
}

/// A random secret would mint tokens no server accepts, so one must be configured
fn issue_token(config: &AppConfig, args: &TokenArgs) -> anyhow::Result<String> {
    let secret = config
        .auth
        .resolved_secret()
        .ok_or_else(|| anyhow::anyhow!("JWT_SECRET (or auth.jwt_secret) must be set"))?;

    let uid = UserId::new(&args.uid)?;
    let service = JwtService::new(JwtConfig::new(secret, config.auth.jwt_expiration_hours));

    Ok(service.generate(&uid, args.hours)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret(secret: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = Some(secret.to_string());
        config
    }

    #[test]
    fn test_issue_token_roundtrips_subject() {
        let config = config_with_secret("cli-secret");
        let args = TokenArgs {
            uid: "u1".to_string(),
            hours: Some(2),
        };

        let token = issue_token(&config, &args).unwrap();
        let claims = JwtService::new(JwtConfig::new("cli-secret", 24))
            .validate(&token)
            .unwrap();

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.exp - claims.iat, 2 * 3600);
    }

    #[test]
    fn test_issue_token_rejects_invalid_uid() {
        let config = config_with_secret("cli-secret");
        let args = TokenArgs {
            uid: "bad uid".to_string(),
            hours: None,
        };

        assert!(issue_token(&config, &args).is_err());
    }

    #[test]
    fn test_issue_token_rejects_oversized_lifetime() {
        let config = config_with_secret("cli-secret");
        let args = TokenArgs {
            uid: "u1".to_string(),
            hours: Some(u64::MAX),
        };

        assert!(issue_token(&config, &args).is_err());
    }
}
