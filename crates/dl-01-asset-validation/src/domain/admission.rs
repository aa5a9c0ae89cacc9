//! # Admission Pipeline
//!
//! Schema validation followed by business rules, producing a
//! [`ValidatedTransaction`].
//!
//! ## Type-State Guarantee
//!
//! `ValidatedTransaction` can only be constructed by [`validate_transaction`].
//! Anything that accepts one (the mempool) therefore holds only
//! transactions that passed both layers against some confirmed snapshot.

use super::errors::AdmissionError;
use super::rules::validate_rules;
use super::schema::validate_schema;
use crate::config::ValidationPolicy;
use dl_02_dapp_registry::{AccountOracle, RegistryView};
use shared_types::{DappTransaction, RawDappTransaction, TransactionId};
use tracing::debug;

/// A transaction that passed schema and business-rule validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedTransaction {
    inner: DappTransaction,
}

impl ValidatedTransaction {
    pub fn id(&self) -> TransactionId {
        self.inner.id
    }

    pub fn transaction(&self) -> &DappTransaction {
        &self.inner
    }

    pub fn into_inner(self) -> DappTransaction {
        self.inner
    }
}

/// Validates a raw transaction for admission.
///
/// # Errors
/// - `AdmissionError::Schema` for the first structural problem in the payload
/// - `AdmissionError::Rule` for the first business rule that fails
pub fn validate_transaction<R, O>(
    raw: RawDappTransaction,
    registry: &R,
    oracle: &O,
    policy: &ValidationPolicy,
) -> Result<ValidatedTransaction, AdmissionError>
where
    R: RegistryView + ?Sized,
    O: AccountOracle + ?Sized,
{
    let id = raw.id;
    let result = validate_schema(&raw.asset, policy)
        .map_err(AdmissionError::from)
        .and_then(|asset| {
            let tx = raw.into_typed(asset);
            validate_rules(&tx, registry, oracle, policy)?;
            Ok(tx)
        });

    match result {
        Ok(inner) => Ok(ValidatedTransaction { inner }),
        Err(err) => {
            debug!(%id, error = %err, "[dl-01] Transaction rejected");
            Err(err)
        }
    }
}
