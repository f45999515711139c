use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::config::HashConfig;
use crate::error::{Result, ToolError};

// ============================================================================
// Password Hashing
// ============================================================================

/// Supported password hashing schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// bcrypt, the scheme the storefront login checks against
    Bcrypt,
    /// Argon2id with the crate's default parameters
    Argon2,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Bcrypt => "bcrypt",
            HashAlgorithm::Argon2 => "argon2",
        }
    }

    /// Identify the scheme of an encoded hash from its prefix
    pub fn detect(password_hash: &str) -> Option<Self> {
        if password_hash.starts_with("$argon2") {
            Some(HashAlgorithm::Argon2)
        } else if ["$2a$", "$2b$", "$2x$", "$2y$"]
            .iter()
            .any(|prefix| password_hash.starts_with(prefix))
        {
            Some(HashAlgorithm::Bcrypt)
        } else {
            None
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(HashAlgorithm::Bcrypt),
            "argon2" | "argon2id" => Ok(HashAlgorithm::Argon2),
            other => Err(format!("unsupported hash algorithm '{}'", other)),
        }
    }
}

/// Hash a password with a fresh random salt
///
/// `config.cost` is the bcrypt work factor; Argon2 uses its default parameters.
pub fn hash_password(password: &str, config: &HashConfig) -> Result<String> {
    match config.algorithm {
        HashAlgorithm::Bcrypt => Ok(bcrypt::hash(password, config.cost)?),
        HashAlgorithm::Argon2 => {
            let salt = SaltString::generate(&mut OsRng);
            let argon2 = Argon2::default();

            let password_hash = argon2
                .hash_password(password.as_bytes(), &salt)
                .map_err(|e| ToolError::Hash(e.to_string()))?
                .to_string();

            Ok(password_hash)
        }
    }
}

/// Verify a password against a bcrypt or Argon2 hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    match HashAlgorithm::detect(password_hash) {
        Some(HashAlgorithm::Bcrypt) => Ok(bcrypt::verify(password, password_hash)?),
        Some(HashAlgorithm::Argon2) => {
            let parsed_hash = PasswordHash::new(password_hash)
                .map_err(|e| ToolError::Hash(format!("failed to parse password hash: {}", e)))?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(()) => Ok(true),
                Err(_) => Ok(false),
            }
        }
        None => Err(ToolError::Hash("unrecognized password hash format".to_string())),
    }
}

// ============================================================================
// Input Validation Functions
// ============================================================================

/// Validate email format (RFC 5322 compliant)
pub fn validate_email(email: &str) -> Result<()> {
    let email_regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .map_err(|e| ToolError::Config(e.to_string()))?;

    if !email_regex.is_match(email) {
        return Err(ToolError::Config(format!("invalid email format: {}", email)));
    }

    if email.len() > 255 {
        return Err(ToolError::Config("email is too long (max 255 characters)".to_string()));
    }

    Ok(())
}

// ============================================================================
// Slug Helpers
// ============================================================================

/// Derive a URL-safe slug from a human readable name
///
/// ASCII letters and digits are kept (lowercased); every other run of
/// characters collapses into a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Public storefront URL of a category
pub fn category_url(prefix: &str, slug: &str) -> String {
    format!("{}{}", prefix, slug)
}
