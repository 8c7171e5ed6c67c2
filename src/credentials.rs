//! Ordered credential-resolution chain for the generative API key.
//!
//! The product lets a user paste their own key, which takes precedence over a
//! process-level default. Services receive the chain at construction so tests
//! can substitute a fixed or empty resolver.

use std::fmt;
use std::sync::{Arc, RwLock};

/// Environment variable consulted by the process-level default resolver.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// A single source of an API credential.
pub trait CredentialResolver: Send + Sync + fmt::Debug {
    /// Return the credential if this source can supply one.
    fn resolve(&self) -> Option<String>;
}

/// User-supplied override, settable at runtime. The embedder is responsible
/// for persisting it; this holds the in-memory value for the page session.
#[derive(Debug, Default)]
pub struct StoredCredential {
    value: RwLock<Option<String>>,
}

impl StoredCredential {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(Some(value.into())),
        }
    }

    /// Replace the stored key. `None` clears the override.
    pub fn set(&self, value: Option<String>) {
        *self.value.write().unwrap_or_else(|e| e.into_inner()) = value;
    }
}

impl CredentialResolver for StoredCredential {
    fn resolve(&self) -> Option<String> {
        self.value
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .filter(|v| !v.is_empty())
    }
}

/// Process-level default read from an environment variable.
#[derive(Debug)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(API_KEY_ENV_VAR)
    }
}

impl CredentialResolver for EnvCredential {
    fn resolve(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|v| !v.is_empty())
    }
}

/// First-some over an ordered list of resolvers.
#[derive(Debug, Default)]
pub struct CredentialChain {
    resolvers: Vec<Arc<dyn CredentialResolver>>,
}

impl CredentialChain {
    pub fn new(resolvers: Vec<Arc<dyn CredentialResolver>>) -> Self {
        Self { resolvers }
    }

    /// The production chain: stored override first, then the process env var.
    pub fn standard(stored: Arc<StoredCredential>) -> Self {
        Self::new(vec![stored, Arc::new(EnvCredential::default())])
    }
}

impl CredentialResolver for CredentialChain {
    fn resolve(&self) -> Option<String> {
        self.resolvers.iter().find_map(|r| r.resolve())
    }
}
