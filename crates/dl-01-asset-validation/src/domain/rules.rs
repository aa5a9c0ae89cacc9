//! # Business Rule Validator
//!
//! Semantic checks on a schema-valid asset, in order:
//!
//! 1. `type` is a supported application type
//! 2. `link` is a valid URL with an archive extension
//! 3. `icon`, if present, is a valid URL with an image extension
//! 4. `tags` contains no repeated token
//! 5. the fee equals the registration fee
//! 6. `name` and `link` are not held in the confirmed registry
//! 7. the sender can pay the fee
//!
//! Uniqueness is checked against confirmed state only. Two pending
//! transactions may claim the same name; block application decides.

use super::errors::RuleError;
use crate::config::ValidationPolicy;
use dl_02_dapp_registry::{AccountOracle, RegistryView};
use shared_types::{Address, Amount, DappAsset, DappTransaction};
use std::collections::HashSet;
use url::Url;

/// Runs every business rule against a typed transaction.
///
/// Reads the registry and the oracle; mutates neither.
pub fn validate_rules<R, O>(
    tx: &DappTransaction,
    registry: &R,
    oracle: &O,
    policy: &ValidationPolicy,
) -> Result<(), RuleError>
where
    R: RegistryView + ?Sized,
    O: AccountOracle + ?Sized,
{
    check_asset_rules(&tx.asset, policy)?;
    check_fee(tx.fee, policy)?;
    check_uniqueness(&tx.asset, registry)?;
    check_balance(&tx.sender, tx.fee, oracle)
}

/// Registry-independent rules: type, link, icon and tags.
pub fn check_asset_rules(asset: &DappAsset, policy: &ValidationPolicy) -> Result<(), RuleError> {
    if !policy.supported_types.contains(&asset.dapp_type) {
        return Err(RuleError::UnsupportedType {
            value: asset.dapp_type,
        });
    }

    parse_url(&asset.link, policy).ok_or_else(|| RuleError::InvalidLink {
        link: asset.link.clone(),
    })?;
    if !has_extension(&asset.link, &policy.link_extensions) {
        return Err(RuleError::InvalidLinkFileType {
            link: asset.link.clone(),
        });
    }

    if let Some(icon) = &asset.icon {
        parse_url(icon, policy).ok_or_else(|| RuleError::InvalidIconLink { icon: icon.clone() })?;
        if !has_extension(icon, &policy.icon_extensions) {
            return Err(RuleError::InvalidIconFileType { icon: icon.clone() });
        }
    }

    // every trimmed token counts, empty ones included
    let mut seen = HashSet::new();
    for tag in asset.tags.iter().flat_map(|tags| tags.split(',').map(str::trim)) {
        if !seen.insert(tag) {
            return Err(RuleError::DuplicateTag {
                tag: tag.to_string(),
            });
        }
    }

    Ok(())
}

/// The fee of a registration is fixed by policy.
pub fn check_fee(fee: Amount, policy: &ValidationPolicy) -> Result<(), RuleError> {
    if fee != policy.registration_fee {
        return Err(RuleError::InvalidFee {
            expected: policy.registration_fee,
            actual: fee,
        });
    }
    Ok(())
}

/// Checks `name` then `link` against confirmed state.
///
/// Also used by block application against its working registry.
pub fn check_uniqueness<R>(asset: &DappAsset, registry: &R) -> Result<(), RuleError>
where
    R: RegistryView + ?Sized,
{
    if registry.name_holder(&asset.name).is_some() {
        return Err(RuleError::NameExists {
            name: asset.name.clone(),
        });
    }
    if registry.link_holder(&asset.link).is_some() {
        return Err(RuleError::LinkExists {
            link: asset.link.clone(),
        });
    }
    Ok(())
}

/// A balance exactly equal to the fee is sufficient.
pub fn check_balance<O>(sender: &Address, fee: Amount, oracle: &O) -> Result<(), RuleError>
where
    O: AccountOracle + ?Sized,
{
    let balance = oracle.balance_of(sender);
    if balance < fee {
        return Err(RuleError::InsufficientFunds {
            address: sender.clone(),
            balance,
        });
    }
    Ok(())
}

fn parse_url(candidate: &str, policy: &ValidationPolicy) -> Option<Url> {
    let url = Url::parse(candidate).ok()?;
    if !url.has_host() {
        return None;
    }
    policy
        .url_schemes
        .iter()
        .any(|scheme| scheme.eq_ignore_ascii_case(url.scheme()))
        .then_some(url)
}

/// Extensions are matched against the submitted string, case-sensitively.
fn has_extension(candidate: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| candidate.ends_with(ext.as_str()))
}
