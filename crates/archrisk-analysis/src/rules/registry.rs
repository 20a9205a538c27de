//! The rule catalog.

use std::collections::BTreeSet;

use archrisk_core::config::RulesConfig;
use archrisk_core::errors::DetectionError;
use rustc_hash::FxHashMap;

use super::traits::RiskRule;
use super::{
    accidental_logging::AccidentalLoggingRule, credential_outside_vault::CredentialOutsideVaultRule,
    insecure_handling::InsecureHandlingRule, missing_audit_log::MissingAuditLogRule,
    missing_monitoring::MissingMonitoringRule, privileged_user::PrivilegedUserRule,
    weak_crypto_at_rest::WeakCryptoAtRestRule, weak_crypto_in_transit::WeakCryptoInTransitRule,
};

/// Ordered collection of rules, indexed by rule id.
pub struct RuleRegistry {
    rules: Vec<Box<dyn RiskRule>>,
    index: FxHashMap<&'static str, usize>,
}

impl RuleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// The full built-in catalog.
    pub fn with_default_rules() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AccidentalLoggingRule));
        registry.register(Box::new(CredentialOutsideVaultRule));
        registry.register(Box::new(InsecureHandlingRule));
        registry.register(Box::new(MissingAuditLogRule));
        registry.register(Box::new(MissingMonitoringRule));
        registry.register(Box::new(PrivilegedUserRule));
        registry.register(Box::new(WeakCryptoInTransitRule));
        registry.register(Box::new(WeakCryptoAtRestRule));
        registry
    }

    /// Adds a rule. A rule with an id already present replaces the old one
    /// in place.
    pub fn register(&mut self, rule: Box<dyn RiskRule>) {
        let id = rule.id();
        match self.index.get(id) {
            Some(&i) => self.rules[i] = rule,
            None => {
                self.index.insert(id, self.rules.len());
                self.rules.push(rule);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn RiskRule> {
        self.index.get(id).map(|&i| self.rules[i].as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn RiskRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Union of every rule's supported tags.
    pub fn supported_tags(&self) -> BTreeSet<&'static str> {
        self.rules
            .iter()
            .flat_map(|r| r.supported_tags().iter().copied())
            .collect()
    }

    /// Removes the rules disabled in `config`. Unknown ids are an error.
    pub fn apply_config(mut self, config: &RulesConfig) -> Result<Self, DetectionError> {
        if let Some(unknown) = config.disabled_rules.iter().find(|id| !self.contains(id)) {
            return Err(DetectionError::UnknownRule(unknown.clone()));
        }
        if config.disabled_rules.is_empty() {
            return Ok(self);
        }
        self.rules.retain(|r| {
            let keep = !config.is_disabled(r.id());
            if !keep {
                tracing::warn!(rule = r.id(), "rule disabled by configuration");
            }
            keep
        });
        self.index = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id(), i))
            .collect();
        Ok(self)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
