//! Customer authorizer backed by a static deny-list.

use std::collections::HashSet;

use async_trait::async_trait;

use orderdesk_core::{DomainError, DomainResult};
use orderdesk_orders::{Cpf, CustomerAuthorizer};

/// Rejects the configured CPFs and accepts everyone else.
#[derive(Debug, Default, Clone)]
pub struct StaticAuthorizer {
    blocked: HashSet<Cpf>,
}

impl StaticAuthorizer {
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Build from raw CPFs; entries that fail the checksum are skipped.
    pub fn blocking<'a>(raw: impl IntoIterator<Item = &'a str>) -> Self {
        let mut blocked = HashSet::new();
        for entry in raw {
            match Cpf::parse(entry.trim()) {
                Some(cpf) => {
                    blocked.insert(cpf);
                }
                None => tracing::warn!(entry, "ignoring invalid CPF in authorizer deny-list"),
            }
        }
        Self { blocked }
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }
}

#[async_trait]
impl CustomerAuthorizer for StaticAuthorizer {
    async fn authorize(&self, cpf: &Cpf) -> DomainResult<()> {
        if self.blocked.contains(cpf) {
            tracing::info!("customer rejected by authorizer");
            return Err(DomainError::Unauthorized);
        }
        Ok(())
    }
}
