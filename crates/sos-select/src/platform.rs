//! Platform collaborators queried during selection
//!
//! The selector never talks to the telephony stack directly. Each query it
//! needs is expressed as a small trait so the host can answer it from
//! whatever service owns that piece of state. All queries are read-only
//! snapshots.

use serde::{Deserialize, Serialize};
use sos_numbers::{EmergencyNumberLists, RadioId};

use crate::state::{Account, RadioHandle};

/// URI scheme a default outgoing account is registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneScheme {
    /// Plain telephone numbers
    #[default]
    Tel,
    /// SIP addresses
    Sip,
    /// Voicemail access
    Voicemail,
}

impl PhoneScheme {
    /// Get the URI scheme string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tel => "tel",
            Self::Sip => "sip",
            Self::Voicemail => "voicemail",
        }
    }
}

/// Enumerates the radios of the device
pub trait RadioEnumeration {
    /// Number of physical radios (SIM slots)
    fn radio_count(&self) -> usize;

    /// Handles of all accounts able to place calls, in platform order
    fn call_capable_radios(&self) -> Vec<RadioHandle>;
}

/// Resolves the account used for outgoing calls by default
pub trait DefaultRadioResolver {
    /// Default outgoing account for `scheme`, `None` when none is set
    fn default_outgoing_radio(&self, scheme: PhoneScheme) -> Option<RadioHandle>;
}

/// Resolves the account behind a handle
pub trait AccountResolver {
    /// Get the account registered for `handle`, if any
    fn account_for(&self, handle: &RadioHandle) -> Option<Account>;

    /// Get the subscription backing `account`
    ///
    /// Returns [`RadioId::INVALID`] when the account has no subscription.
    fn subscription_id_for(&self, account: &Account) -> RadioId;
}

/// Resolves the network a subscription is camped on
pub trait NetworkStateResolver {
    /// Current network country ISO of `radio`, `None` when unknown
    fn country_iso_for(&self, radio: RadioId) -> Option<String>;
}

/// Provides the emergency numbers currently known per radio
pub trait EmergencyNumberSource {
    /// `None` when the lists cannot be retrieved
    fn current_emergency_numbers_by_radio(&self) -> Option<EmergencyNumberLists>;
}

/// Everything the selector needs from the host
pub trait TelephonyPlatform:
    RadioEnumeration
    + DefaultRadioResolver
    + AccountResolver
    + NetworkStateResolver
    + EmergencyNumberSource
{
}

impl<T> TelephonyPlatform for T where
    T: RadioEnumeration
        + DefaultRadioResolver
        + AccountResolver
        + NetworkStateResolver
        + EmergencyNumberSource
        + ?Sized
{
}

/// Collaborators supplied by separate services
///
/// Lets a host answer each query from a different object while still
/// handing the selector a single [`TelephonyPlatform`].
#[derive(Clone, Copy)]
pub struct PlatformContext<'a> {
    pub radios: &'a dyn RadioEnumeration,
    pub defaults: &'a dyn DefaultRadioResolver,
    pub accounts: &'a dyn AccountResolver,
    pub network: &'a dyn NetworkStateResolver,
    pub numbers: &'a dyn EmergencyNumberSource,
}

impl RadioEnumeration for PlatformContext<'_> {
    fn radio_count(&self) -> usize {
        self.radios.radio_count()
    }

    fn call_capable_radios(&self) -> Vec<RadioHandle> {
        self.radios.call_capable_radios()
    }
}

impl DefaultRadioResolver for PlatformContext<'_> {
    fn default_outgoing_radio(&self, scheme: PhoneScheme) -> Option<RadioHandle> {
        self.defaults.default_outgoing_radio(scheme)
    }
}

impl AccountResolver for PlatformContext<'_> {
    fn account_for(&self, handle: &RadioHandle) -> Option<Account> {
        self.accounts.account_for(handle)
    }

    fn subscription_id_for(&self, account: &Account) -> RadioId {
        self.accounts.subscription_id_for(account)
    }
}

impl NetworkStateResolver for PlatformContext<'_> {
    fn country_iso_for(&self, radio: RadioId) -> Option<String> {
        self.network.country_iso_for(radio)
    }
}

impl EmergencyNumberSource for PlatformContext<'_> {
    fn current_emergency_numbers_by_radio(&self) -> Option<EmergencyNumberLists> {
        self.numbers.current_emergency_numbers_by_radio()
    }
}
