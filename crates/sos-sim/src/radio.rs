//! Simulated radio (SIM slot)

use serde::{Deserialize, Serialize};
use sos_numbers::RadioId;
use sos_select::{Account, AccountCapabilities, RadioHandle};

fn default_capabilities() -> AccountCapabilities {
    AccountCapabilities::CALL_PROVIDER
        | AccountCapabilities::SIM_SUBSCRIPTION
        | AccountCapabilities::PLACE_EMERGENCY_CALLS
}

fn default_true() -> bool {
    true
}

/// Configuration for creating a simulated radio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedRadioConfig {
    /// Phone account handle id
    pub handle: String,
    /// Backing subscription, `None` for an account without one
    #[serde(default)]
    pub subscription: Option<RadioId>,
    /// Capabilities the account registers
    #[serde(default = "default_capabilities")]
    pub capabilities: AccountCapabilities,
    /// Country of the network the radio is camped on
    #[serde(default)]
    pub country_iso: Option<String>,
    /// Whether an account is registered for the handle at all
    #[serde(default = "default_true")]
    pub account_registered: bool,
    /// Whether the handle shows up in the call-capable enumeration
    #[serde(default = "default_true")]
    pub call_capable: bool,
}

impl SimulatedRadioConfig {
    /// An emergency-capable radio camped in `country_iso`
    pub fn new(handle: impl Into<String>, subscription: i32, country_iso: &str) -> Self {
        Self {
            handle: handle.into(),
            subscription: Some(RadioId(subscription)),
            capabilities: default_capabilities(),
            country_iso: (!country_iso.is_empty()).then(|| country_iso.to_string()),
            account_registered: true,
            call_capable: true,
        }
    }
}

/// A simulated radio answering account and network queries
#[derive(Debug, Clone)]
pub struct SimulatedRadio {
    handle: RadioHandle,
    subscription: RadioId,
    capabilities: AccountCapabilities,
    country_iso: Option<String>,
    account_registered: bool,
    call_capable: bool,
}

impl SimulatedRadio {
    /// Create a simulated radio from configuration
    pub fn from_config(config: SimulatedRadioConfig) -> Self {
        Self {
            handle: RadioHandle::new(config.handle),
            subscription: config.subscription.unwrap_or(RadioId::INVALID),
            capabilities: config.capabilities,
            country_iso: config.country_iso.filter(|iso| !iso.is_empty()),
            account_registered: config.account_registered,
            call_capable: config.call_capable,
        }
    }

    pub fn handle(&self) -> &RadioHandle {
        &self.handle
    }

    pub fn subscription(&self) -> RadioId {
        self.subscription
    }

    pub fn country_iso(&self) -> Option<&str> {
        self.country_iso.as_deref()
    }

    /// Camp on a network, or drop off it with `None`
    pub fn set_country_iso(&mut self, country_iso: Option<String>) {
        self.country_iso = country_iso.filter(|iso| !iso.is_empty());
    }

    pub fn set_capabilities(&mut self, capabilities: AccountCapabilities) {
        self.capabilities = capabilities;
    }

    pub fn is_call_capable(&self) -> bool {
        self.call_capable
    }

    /// The account registered for this radio, if any
    pub fn account(&self) -> Option<Account> {
        self.account_registered
            .then(|| Account::new(self.handle.clone(), self.capabilities))
    }
}
