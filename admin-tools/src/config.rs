use anyhow::{anyhow, Context, Result};
use std::env;

use crate::utils::HashAlgorithm;

/// Development defaults, overridden through the environment
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@planetkids.com";
pub const DEFAULT_ADMIN_NAME: &str = "Admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_HASH_COST: u32 = 10;
pub const DEFAULT_AUDIT_LIMIT: i64 = 10;
pub const DEFAULT_CATEGORY_URL_PREFIX: &str = "/categories/";

/// Lowest accepted work factor; bcrypt itself rejects anything above 31
pub const MIN_HASH_COST: u32 = 10;
pub const MAX_HASH_COST: u32 = 31;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    pub algorithm: HashAlgorithm,
    pub cost: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        HashConfig {
            algorithm: HashAlgorithm::Bcrypt,
            cost: DEFAULT_HASH_COST,
        }
    }
}

impl HashConfig {
    pub fn from_env() -> Result<Self> {
        let algorithm = env::var("PASSWORD_HASH_ALGORITHM")
            .unwrap_or_else(|_| "bcrypt".to_string())
            .parse()
            .map_err(|e| anyhow!("PASSWORD_HASH_ALGORITHM: {}", e))?;

        let cost: u32 = env::var("PASSWORD_HASH_COST")
            .unwrap_or_else(|_| DEFAULT_HASH_COST.to_string())
            .parse()
            .context("PASSWORD_HASH_COST must be a valid number")?;

        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) {
            return Err(anyhow!(
                "PASSWORD_HASH_COST must be between {} and {}",
                MIN_HASH_COST,
                MAX_HASH_COST
            ));
        }

        Ok(HashConfig { algorithm, cost })
    }
}

/// Administrator account ensured by the seed flow
#[derive(Clone)]
pub struct AdminAccount {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminAccount {
    pub fn from_env() -> Self {
        AdminAccount {
            email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
            name: env::var("ADMIN_NAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_NAME.to_string()),
            password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub database: DatabaseConfig,
    pub admin: AdminAccount,
    pub hash: HashConfig,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self> {
        Ok(SeedConfig {
            database: DatabaseConfig::from_env()?,
            admin: AdminAccount::from_env(),
            hash: HashConfig::from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub database: DatabaseConfig,
    pub limit: i64,
    pub url_prefix: String,
}

impl AuditConfig {
    pub fn from_env() -> Result<Self> {
        let limit: i64 = env::var("SLUG_AUDIT_LIMIT")
            .unwrap_or_else(|_| DEFAULT_AUDIT_LIMIT.to_string())
            .parse()
            .context("SLUG_AUDIT_LIMIT must be a valid number")?;

        if limit <= 0 {
            return Err(anyhow!("SLUG_AUDIT_LIMIT must be positive"));
        }

        Ok(AuditConfig {
            database: DatabaseConfig::from_env()?,
            limit,
            url_prefix: env::var("CATEGORY_URL_PREFIX")
                .unwrap_or_else(|_| DEFAULT_CATEGORY_URL_PREFIX.to_string()),
        })
    }
}
