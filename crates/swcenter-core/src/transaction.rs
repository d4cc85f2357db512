//! Package transaction types reported by the backend.

use serde::{Deserialize, Serialize};

/// What a backend transaction does to its package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Install,
    Remove,
    Upgrade,
    Apply,
}

/// Outcome carried by `transaction-finished` and `transaction-stopped`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub pkgname: String,
    pub success: bool,
}

impl TransactionResult {
    pub fn succeeded(pkgname: impl Into<String>) -> Self {
        Self {
            pkgname: pkgname.into(),
            success: true,
        }
    }

    pub fn failed(pkgname: impl Into<String>) -> Self {
        Self {
            pkgname: pkgname.into(),
            success: false,
        }
    }
}
