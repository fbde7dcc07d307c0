//! Radio and account snapshots

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use sos_numbers::{EmergencyNumber, RadioId};

/// Opaque platform handle of a phone account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadioHandle(pub String);

impl RadioHandle {
    /// Create a handle from its platform id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the platform id
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RadioHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

bitflags! {
    /// Capabilities a phone account registers with the platform
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AccountCapabilities: u32 {
        const CALL_PROVIDER = 0x02;
        const SIM_SUBSCRIPTION = 0x04;
        const PLACE_EMERGENCY_CALLS = 0x10;
    }
}

impl Default for AccountCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

/// Phone account registered for a radio handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Handle the account is registered under
    pub handle: RadioHandle,
    /// Registered capabilities
    #[serde(default)]
    pub capabilities: AccountCapabilities,
}

impl Account {
    /// Create an account
    pub fn new(handle: RadioHandle, capabilities: AccountCapabilities) -> Self {
        Self {
            handle,
            capabilities,
        }
    }

    /// Returns whether the account may place emergency calls
    pub fn has_emergency_call_capability(&self) -> bool {
        self.capabilities
            .contains(AccountCapabilities::PLACE_EMERGENCY_CALLS)
    }
}

/// Point-in-time view of one radio's fitness for emergency dialing
///
/// Built fresh for every selection and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioInfo {
    handle: Option<RadioHandle>,
    can_place_emergency_call: bool,
    radio_id: RadioId,
    country_iso: String,
    promoted_numbers: Option<Vec<EmergencyNumber>>,
}

impl RadioInfo {
    /// Create a radio snapshot
    ///
    /// An empty `country_iso` means the radio is not camped on any network.
    pub fn new(
        handle: Option<RadioHandle>,
        can_place_emergency_call: bool,
        radio_id: RadioId,
        country_iso: impl Into<String>,
        promoted_numbers: Option<Vec<EmergencyNumber>>,
    ) -> Self {
        Self {
            handle,
            can_place_emergency_call,
            radio_id,
            country_iso: country_iso.into(),
            promoted_numbers,
        }
    }

    /// Create a snapshot for a subscription already known to be emergency capable
    pub fn without_handle(
        radio_id: RadioId,
        country_iso: impl Into<String>,
        promoted_numbers: Option<Vec<EmergencyNumber>>,
    ) -> Self {
        Self::new(None, true, radio_id, country_iso, promoted_numbers)
    }

    pub fn handle(&self) -> Option<&RadioHandle> {
        self.handle.as_ref()
    }

    pub fn can_place_emergency_call(&self) -> bool {
        self.can_place_emergency_call
    }

    pub fn radio_id(&self) -> RadioId {
        self.radio_id
    }

    pub fn country_iso(&self) -> &str {
        &self.country_iso
    }

    pub fn promoted_numbers(&self) -> Option<&[EmergencyNumber]> {
        self.promoted_numbers.as_deref()
    }

    /// Returns whether this radio can be trusted for emergency shortcuts
    ///
    /// The country code stands in for "camped on a network": without it the
    /// promoted list is not reliable enough to suggest, and users can still
    /// dial from the pad.
    pub fn is_sufficient_for_emergency_call(&self) -> bool {
        self.can_place_emergency_call
            && self
                .promoted_numbers
                .as_ref()
                .is_some_and(|numbers| !numbers.is_empty())
            && !self.country_iso.is_empty()
    }

    /// Returns whether `number` is one of this radio's promoted numbers
    ///
    /// Comparison ignores ASCII case.
    pub fn has_promoted_emergency_number(&self, number: &str) -> bool {
        self.promoted_numbers
            .iter()
            .flatten()
            .any(|n| n.number.eq_ignore_ascii_case(number))
    }
}

impl fmt::Display for RadioInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        if let Some(handle) = &self.handle {
            write!(f, "handle={}, ", handle)?;
        }
        write!(
            f,
            "subId={}, canPlaceEmergencyCall={}, networkCountryIso={}",
            self.radio_id, self.can_place_emergency_call, self.country_iso
        )?;
        if let Some(numbers) = &self.promoted_numbers {
            f.write_str(", emergencyNumbers=")?;
            for number in numbers {
                write!(f, "{}:{},", number.number, number)?;
            }
        }
        f.write_str("}")
    }
}
