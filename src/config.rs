/*
 * Responsibility
 * - 環境変数や設定の読み込み (JWT 公開鍵, issuer, 匿名アクセス方針など)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - 鍵そのものの検証は JwtVerifier::new 側で行う
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::middleware::auth::MissingTokenPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // RSA public key: PEM body (no armor lines) or a full PEM document
    pub jwt_public_key: String,
    pub jwt_issuer: String,
    pub missing_token_policy: MissingTokenPolicy,

    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. `from_env` plugs in the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let jwt_public_key = lookup("JWT_PUBLIC_KEY")
            .ok_or(ConfigError::Missing("JWT_PUBLIC_KEY"))?
            .replace("\\n", "\n");

        let jwt_issuer = lookup("JWT_ISSUER").ok_or(ConfigError::Missing("JWT_ISSUER"))?;

        let missing_token_policy = match lookup("AUTH_ALLOW_ANONYMOUS") {
            Some(v) => match parse_bool(&v) {
                Some(true) => MissingTokenPolicy::Allow,
                Some(false) => MissingTokenPolicy::Deny,
                None => return Err(ConfigError::Invalid("AUTH_ALLOW_ANONYMOUS")),
            },
            // 未指定ならトークン無しのリクエストも通す
            None => MissingTokenPolicy::Allow,
        };

        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(v) => v
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => 30,
        };

        Ok(Self {
            addr,
            app_env,
            jwt_public_key,
            jwt_issuer,
            missing_token_policy,
            request_timeout: Duration::from_secs(request_timeout_seconds),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![("JWT_PUBLIC_KEY", "MIIBIjAN"), ("JWT_ISSUER", "X")]
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup_from(&required())).unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.jwt_issuer, "X");
        assert_eq!(config.missing_token_policy, MissingTokenPolicy::Allow);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_required_values() {
        let err = Config::from_lookup(lookup_from(&[("JWT_ISSUER", "X")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_PUBLIC_KEY"));

        let err = Config::from_lookup(lookup_from(&[("JWT_PUBLIC_KEY", "k")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_ISSUER"));
    }

    #[test]
    fn empty_values_are_left_for_the_verifier() {
        let config =
            Config::from_lookup(lookup_from(&[("JWT_PUBLIC_KEY", ""), ("JWT_ISSUER", "")]))
                .unwrap();
        assert!(config.jwt_public_key.is_empty());
        assert!(config.jwt_issuer.is_empty());
    }

    #[test]
    fn overrides() {
        let mut pairs = required();
        pairs.extend([
            ("PORT", "8080"),
            ("APP_ENV", "Prod"),
            ("AUTH_ALLOW_ANONYMOUS", "no"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
        ]);

        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(config.missing_token_policy, MissingTokenPolicy::Deny);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn escaped_newlines_in_key_are_restored() {
        let config = Config::from_lookup(lookup_from(&[
            ("JWT_PUBLIC_KEY", "line1\\nline2"),
            ("JWT_ISSUER", "X"),
        ]))
        .unwrap();
        assert_eq!(config.jwt_public_key, "line1\nline2");
    }

    #[test]
    fn invalid_values() {
        for (key, value) in [
            ("PORT", "http"),
            ("AUTH_ALLOW_ANONYMOUS", "maybe"),
            ("REQUEST_TIMEOUT_SECONDS", "0"),
        ] {
            let mut pairs = required();
            pairs.push((key, value));
            let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(k) if k == key), "{key}={value}");
        }
    }
}
