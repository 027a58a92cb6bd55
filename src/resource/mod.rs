//! Resource kinds of the CI deployment
//!
//! Every kind is a plain serde struct with camelCase field names, described
//! to the declarative core through [`declarative::Kind`]. Collections are
//! loaded through the shared [`registry`].

mod client;
mod hook;
mod role;
mod secret;
mod worker_pool;

pub use client::Client;
pub use hook::Hook;
pub use role::Role;
pub use secret::Secret;
pub use worker_pool::WorkerPool;

use declarative::KindRegistry;
use std::sync::LazyLock;

static REGISTRY: LazyLock<KindRegistry> = LazyLock::new(|| {
    KindRegistry::new()
        .register::<Role>()
        .register::<Client>()
        .register::<Hook>()
        .register::<WorkerPool>()
        .register::<Secret>()
});

/// Every kind known to ciadmin
pub fn registry() -> &'static KindRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_all_kinds() {
        let kinds: Vec<_> = registry().kinds().collect();
        assert_eq!(kinds, vec!["Client", "Hook", "Role", "Secret", "WorkerPool"]);
    }

    #[test]
    fn test_registry_is_case_sensitive() {
        assert!(registry().contains("Role"));
        assert!(!registry().contains("role"));
        assert!(registry().get("role").is_err());
    }
}
