//! Simulated multi-SIM device
//!
//! Holds a set of simulated radios plus the platform-wide state the selector
//! queries: the default outgoing radio and the emergency number lists.

use serde::{Deserialize, Serialize};
use sos_numbers::{EmergencyNumber, EmergencyNumberLists, RadioId};
use sos_select::{
    Account, AccountResolver, DefaultRadioResolver, EmergencyNumberSource, NetworkStateResolver,
    PhoneScheme, RadioEnumeration, RadioHandle,
};
use tracing::debug;

use crate::error::SimError;
use crate::radio::{SimulatedRadio, SimulatedRadioConfig};

/// Emergency numbers reported for one subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberListConfig {
    pub subscription: RadioId,
    /// `None` reports the subscription without a list
    #[serde(default)]
    pub numbers: Option<Vec<EmergencyNumber>>,
}

/// Description of a whole simulated device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Physical radio count, defaults to the number of configured radios
    #[serde(default)]
    pub radio_count: Option<usize>,
    /// Handle of the default outgoing radio for the `tel` scheme
    #[serde(default)]
    pub default_radio: Option<String>,
    /// Radios in platform enumeration order
    #[serde(default)]
    pub radios: Vec<SimulatedRadioConfig>,
    /// Emergency number lists per subscription
    #[serde(default)]
    pub emergency_numbers: Vec<NumberListConfig>,
    /// Simulate a platform that cannot retrieve the number lists
    #[serde(default)]
    pub numbers_unavailable: bool,
}

impl DeviceConfig {
    /// Parse a device description from JSON
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A simulated device implementing every platform collaborator
#[derive(Debug, Clone, Default)]
pub struct SimulatedDevice {
    radio_count: Option<usize>,
    radios: Vec<SimulatedRadio>,
    default_radio: Option<RadioHandle>,
    emergency_numbers: EmergencyNumberLists,
    numbers_unavailable: bool,
}

impl SimulatedDevice {
    /// Create a device with no radios
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a device from configuration
    pub fn from_config(config: DeviceConfig) -> Result<Self, SimError> {
        let mut device = Self::new();
        for radio in config.radios {
            device.add_radio(radio)?;
        }

        if let Some(default) = config.default_radio {
            let handle = RadioHandle::new(default);
            if device.radio(&handle).is_none() {
                return Err(SimError::UnknownDefaultRadio(handle.0));
            }
            device.default_radio = Some(handle);
        }

        for list in config.emergency_numbers {
            device
                .emergency_numbers
                .insert(list.subscription, list.numbers);
        }

        device.radio_count = config.radio_count;
        device.numbers_unavailable = config.numbers_unavailable;

        debug!(
            "Loaded simulated device with {} radios ({} number lists)",
            device.radios.len(),
            device.emergency_numbers.len()
        );
        Ok(device)
    }

    /// Create a device from a JSON description
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Self::from_config(DeviceConfig::from_json(json)?)
    }

    /// Add a radio after the existing ones
    pub fn add_radio(&mut self, config: SimulatedRadioConfig) -> Result<RadioHandle, SimError> {
        let radio = SimulatedRadio::from_config(config);
        if self.radio(radio.handle()).is_some() {
            return Err(SimError::DuplicateHandle(radio.handle().0.clone()));
        }

        let handle = radio.handle().clone();
        self.radios.push(radio);
        Ok(handle)
    }

    /// Get a radio by handle
    pub fn radio(&self, handle: &RadioHandle) -> Option<&SimulatedRadio> {
        self.radios.iter().find(|r| r.handle() == handle)
    }

    /// Get a mutable reference to a radio
    pub fn radio_mut(&mut self, handle: &RadioHandle) -> Option<&mut SimulatedRadio> {
        self.radios.iter_mut().find(|r| r.handle() == handle)
    }

    /// Iterate over all radios in enumeration order
    pub fn radios(&self) -> impl Iterator<Item = &SimulatedRadio> {
        self.radios.iter()
    }

    /// Override the physical radio count
    pub fn set_radio_count(&mut self, count: usize) {
        self.radio_count = Some(count);
    }

    /// Set or clear the default outgoing radio
    pub fn set_default_radio(&mut self, handle: Option<RadioHandle>) {
        self.default_radio = handle;
    }

    /// Report `numbers` for `subscription`
    pub fn set_emergency_numbers(
        &mut self,
        subscription: RadioId,
        numbers: Option<Vec<EmergencyNumber>>,
    ) {
        self.emergency_numbers.insert(subscription, numbers);
    }

    /// Make the number lists unretrievable
    pub fn set_numbers_unavailable(&mut self, unavailable: bool) {
        self.numbers_unavailable = unavailable;
    }
}

impl RadioEnumeration for SimulatedDevice {
    fn radio_count(&self) -> usize {
        self.radio_count.unwrap_or(self.radios.len())
    }

    fn call_capable_radios(&self) -> Vec<RadioHandle> {
        self.radios
            .iter()
            .filter(|r| r.is_call_capable())
            .map(|r| r.handle().clone())
            .collect()
    }
}

impl DefaultRadioResolver for SimulatedDevice {
    fn default_outgoing_radio(&self, scheme: PhoneScheme) -> Option<RadioHandle> {
        match scheme {
            PhoneScheme::Tel => self.default_radio.clone(),
            PhoneScheme::Sip | PhoneScheme::Voicemail => None,
        }
    }
}

impl AccountResolver for SimulatedDevice {
    fn account_for(&self, handle: &RadioHandle) -> Option<Account> {
        self.radio(handle).and_then(SimulatedRadio::account)
    }

    fn subscription_id_for(&self, account: &Account) -> RadioId {
        self.radio(&account.handle)
            .map(SimulatedRadio::subscription)
            .unwrap_or(RadioId::INVALID)
    }
}

impl NetworkStateResolver for SimulatedDevice {
    fn country_iso_for(&self, radio: RadioId) -> Option<String> {
        if !radio.is_valid() {
            return None;
        }
        self.radios
            .iter()
            .find(|r| r.subscription() == radio)
            .and_then(|r| r.country_iso().map(str::to_string))
    }
}

impl EmergencyNumberSource for SimulatedDevice {
    fn current_emergency_numbers_by_radio(&self) -> Option<EmergencyNumberLists> {
        if self.numbers_unavailable {
            return None;
        }
        Some(self.emergency_numbers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE_JSON: &str = r#"{
        "default_radio": "sim0",
        "radios": [
            { "handle": "sim0", "subscription": 1, "country_iso": "" },
            {
                "handle": "sim1",
                "subscription": 2,
                "country_iso": "us",
                "capabilities": "CALL_PROVIDER | PLACE_EMERGENCY_CALLS"
            },
            { "handle": "sim2", "account_registered": false }
        ],
        "emergency_numbers": [
            {
                "subscription": 2,
                "numbers": [
                    { "number": "911", "categories": "POLICE", "sources": "DATABASE" }
                ]
            },
            { "subscription": 3 }
        ]
    }"#;

    #[test]
    fn test_load_from_json() {
        let device = SimulatedDevice::from_json(DEVICE_JSON).unwrap();

        assert_eq!(device.radio_count(), 3);
        assert_eq!(device.call_capable_radios().len(), 3);
        assert_eq!(
            device.default_outgoing_radio(PhoneScheme::Tel),
            Some(RadioHandle::new("sim0"))
        );
        assert_eq!(device.default_outgoing_radio(PhoneScheme::Sip), None);

        assert_eq!(device.country_iso_for(RadioId(1)), None);
        assert_eq!(device.country_iso_for(RadioId(2)).as_deref(), Some("us"));

        let sim1 = device.account_for(&RadioHandle::new("sim1")).unwrap();
        assert!(sim1.has_emergency_call_capability());
        assert_eq!(device.subscription_id_for(&sim1), RadioId(2));

        assert!(device.account_for(&RadioHandle::new("sim2")).is_none());

        let lists = device.current_emergency_numbers_by_radio().unwrap();
        assert_eq!(lists[&RadioId(2)].as_ref().unwrap()[0].number, "911");
        assert_eq!(lists[&RadioId(3)], None);
    }

    #[test]
    fn test_radio_without_subscription() {
        let device = SimulatedDevice::from_json(DEVICE_JSON).unwrap();
        let sim2 = device.radio(&RadioHandle::new("sim2")).unwrap();
        assert_eq!(sim2.subscription(), RadioId::INVALID);
        assert_eq!(device.country_iso_for(RadioId::INVALID), None);
    }

    #[test]
    fn test_duplicate_handle_rejected() {
        let mut device = SimulatedDevice::new();
        device
            .add_radio(SimulatedRadioConfig::new("sim0", 1, "us"))
            .unwrap();
        let err = device
            .add_radio(SimulatedRadioConfig::new("sim0", 2, "us"))
            .unwrap_err();
        assert!(matches!(err, SimError::DuplicateHandle(h) if h == "sim0"));
    }

    #[test]
    fn test_unknown_default_rejected() {
        let json = r#"{ "default_radio": "nope", "radios": [] }"#;
        assert!(matches!(
            SimulatedDevice::from_json(json),
            Err(SimError::UnknownDefaultRadio(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            SimulatedDevice::from_json("{ \"radios\": 3 }"),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_radios_in_enumeration_order() {
        let device = SimulatedDevice::from_json(DEVICE_JSON).unwrap();
        let handles: Vec<&str> = device.radios().map(|r| r.handle().id()).collect();
        assert_eq!(handles, vec!["sim0", "sim1", "sim2"]);
    }

    #[test]
    fn test_country_follows_radio_network() {
        let mut device = SimulatedDevice::new();
        let sim0 = device
            .add_radio(SimulatedRadioConfig::new("sim0", 1, "us"))
            .unwrap();
        assert_eq!(device.country_iso_for(RadioId(1)).as_deref(), Some("us"));

        let radio = device.radio_mut(&sim0).unwrap();
        radio.set_country_iso(None);
        assert_eq!(device.country_iso_for(RadioId(1)), None);

        device
            .radio_mut(&sim0)
            .unwrap()
            .set_country_iso(Some(String::new()));
        assert_eq!(device.country_iso_for(RadioId(1)), None);

        device
            .radio_mut(&sim0)
            .unwrap()
            .set_country_iso(Some("ca".into()));
        assert_eq!(device.country_iso_for(RadioId(1)).as_deref(), Some("ca"));
    }

    #[test]
    fn test_numbers_unavailable() {
        let mut device = SimulatedDevice::new();
        device.set_numbers_unavailable(true);
        assert!(device.current_emergency_numbers_by_radio().is_none());
    }
}
