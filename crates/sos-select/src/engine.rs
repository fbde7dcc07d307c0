//! Preferred phone selection
//!
//! Picks the one radio whose promoted emergency numbers are offered as
//! shortcuts. The default outgoing radio wins whenever it is sufficient;
//! otherwise the first sufficient call-capable radio in platform order is
//! used. There is no scoring between several sufficient radios.

use serde::{Deserialize, Serialize};
use sos_numbers::{classify, PromotedNumberLists, RadioId};
use tracing::{debug, warn};

use crate::error::SelectError;
use crate::platform::{AccountResolver, NetworkStateResolver, PhoneScheme, TelephonyPlatform};
use crate::state::{RadioHandle, RadioInfo};

/// Selector configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Scheme used to look up the default outgoing radio
    #[serde(default)]
    pub scheme: PhoneScheme,
}

/// How the selected radio was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionSource {
    /// The default outgoing radio was sufficient
    DefaultRadio,
    /// First sufficient entry of the call-capable enumeration
    CallCapable {
        /// Index in platform enumeration order
        position: usize,
    },
}

/// A successful selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub info: RadioInfo,
    pub source: SelectionSource,
}

/// Snapshot a single radio
///
/// Never fails: a handle without an account yields an incapable radio on
/// [`RadioId::INVALID`], and an unknown network yields an empty country.
pub fn load_phone_info<P>(
    handle: &RadioHandle,
    platform: &P,
    promoted: &PromotedNumberLists,
) -> RadioInfo
where
    P: AccountResolver + NetworkStateResolver + ?Sized,
{
    let (can_place_emergency_call, radio_id) = match platform.account_for(handle) {
        Some(account) => (
            account.has_emergency_call_capability(),
            platform.subscription_id_for(&account),
        ),
        None => (false, RadioId::INVALID),
    };

    let country_iso = platform.country_iso_for(radio_id).unwrap_or_default();
    let promoted_numbers = promoted.get(&radio_id).cloned();

    RadioInfo::new(
        Some(handle.clone()),
        can_place_emergency_call,
        radio_id,
        country_iso,
        promoted_numbers,
    )
}

/// Chooses the radio used for emergency shortcuts
#[derive(Debug, Clone, Default)]
pub struct PreferredPhoneSelector {
    config: SelectorConfig,
}

impl PreferredPhoneSelector {
    /// Create a selector with default configuration
    pub fn new() -> Self {
        Self::with_config(SelectorConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Pick the preferred radio, reporting why none qualified
    ///
    /// [`SelectError::DefaultInsufficient`] is logged but never returned;
    /// selection moves on to the call-capable radios instead.
    pub fn try_pick<P>(&self, platform: &P) -> Result<Selection, SelectError>
    where
        P: TelephonyPlatform + ?Sized,
    {
        if platform.radio_count() == 0 {
            warn!("No phone available!");
            return Err(SelectError::NoRadiosAvailable);
        }

        let all_lists = platform
            .current_emergency_numbers_by_radio()
            .unwrap_or_default();
        let promoted = classify(&all_lists);
        if promoted.is_empty() {
            return Err(SelectError::NoPromotedNumbers);
        }

        match platform.default_outgoing_radio(self.config.scheme) {
            Some(handle) => match check_default(load_phone_info(&handle, platform, &promoted)) {
                Ok(selection) => return Ok(selection),
                Err(err) => warn!("{}", err),
            },
            None => {
                warn!(
                    "Missing default {} phone account! Is this really a phone device?",
                    self.config.scheme.as_str()
                );
            }
        }

        for (position, handle) in platform.call_capable_radios().iter().enumerate() {
            let info = load_phone_info(handle, platform, &promoted);
            if info.is_sufficient_for_emergency_call() {
                return Ok(Selection {
                    info,
                    source: SelectionSource::CallCapable { position },
                });
            }
            debug!("Phone account {} is insufficient for emergency call", info);
        }

        warn!("No phone account available for emergency call!");
        Err(SelectError::NoSufficientRadioFound)
    }

    /// Pick the preferred radio
    ///
    /// `None` means the caller should fall back to the default dial pad.
    pub fn pick<P>(&self, platform: &P) -> Option<RadioInfo>
    where
        P: TelephonyPlatform + ?Sized,
    {
        self.try_pick(platform).ok().map(|selection| selection.info)
    }
}

/// Accept the default radio, or describe why it was rejected
fn check_default(info: RadioInfo) -> Result<Selection, SelectError> {
    if !info.is_sufficient_for_emergency_call() {
        return Err(SelectError::DefaultInsufficient(info.to_string()));
    }
    Ok(Selection {
        info,
        source: SelectionSource::DefaultRadio,
    })
}

/// Pick the preferred radio with default configuration
pub fn pick_preferred_phone<P>(platform: &P) -> Option<RadioInfo>
where
    P: TelephonyPlatform + ?Sized,
{
    PreferredPhoneSelector::new().pick(platform)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use sos_numbers::{
        EmergencyNumber, EmergencyNumberLists, NumberSources, ServiceCategories,
    };

    use super::*;
    use crate::platform::{DefaultRadioResolver, EmergencyNumberSource, RadioEnumeration};
    use crate::state::{Account, AccountCapabilities};

    /// Minimal in-memory platform
    #[derive(Default)]
    struct FakePlatform {
        radio_count: usize,
        default_radio: Option<RadioHandle>,
        call_capable: Vec<RadioHandle>,
        accounts: HashMap<RadioHandle, (AccountCapabilities, RadioId)>,
        countries: HashMap<RadioId, String>,
        numbers: Option<EmergencyNumberLists>,
    }

    impl FakePlatform {
        fn add_radio(&mut self, id: &str, sub: i32, capable: bool, country: &str) -> RadioHandle {
            let handle = RadioHandle::new(id);
            let capabilities = if capable {
                AccountCapabilities::CALL_PROVIDER | AccountCapabilities::PLACE_EMERGENCY_CALLS
            } else {
                AccountCapabilities::CALL_PROVIDER
            };
            self.radio_count += 1;
            self.call_capable.push(handle.clone());
            self.accounts
                .insert(handle.clone(), (capabilities, RadioId(sub)));
            if !country.is_empty() {
                self.countries.insert(RadioId(sub), country.to_string());
            }
            handle
        }

        fn set_numbers(&mut self, sub: i32, digits: &[&str]) {
            let list = digits
                .iter()
                .map(|d| {
                    EmergencyNumber::new(*d, ServiceCategories::POLICE, NumberSources::DATABASE)
                })
                .collect();
            self.numbers
                .get_or_insert_with(EmergencyNumberLists::new)
                .insert(RadioId(sub), Some(list));
        }
    }

    impl RadioEnumeration for FakePlatform {
        fn radio_count(&self) -> usize {
            self.radio_count
        }

        fn call_capable_radios(&self) -> Vec<RadioHandle> {
            self.call_capable.clone()
        }
    }

    impl DefaultRadioResolver for FakePlatform {
        fn default_outgoing_radio(&self, scheme: PhoneScheme) -> Option<RadioHandle> {
            match scheme {
                PhoneScheme::Tel => self.default_radio.clone(),
                _ => None,
            }
        }
    }

    impl AccountResolver for FakePlatform {
        fn account_for(&self, handle: &RadioHandle) -> Option<Account> {
            self.accounts
                .get(handle)
                .map(|(capabilities, _)| Account::new(handle.clone(), *capabilities))
        }

        fn subscription_id_for(&self, account: &Account) -> RadioId {
            self.accounts
                .get(&account.handle)
                .map(|(_, sub)| *sub)
                .unwrap_or(RadioId::INVALID)
        }
    }

    impl NetworkStateResolver for FakePlatform {
        fn country_iso_for(&self, radio: RadioId) -> Option<String> {
            self.countries.get(&radio).cloned()
        }
    }

    impl EmergencyNumberSource for FakePlatform {
        fn current_emergency_numbers_by_radio(&self) -> Option<EmergencyNumberLists> {
            self.numbers.clone()
        }
    }

    #[test]
    fn test_no_radios() {
        let mut platform = FakePlatform::default();
        platform.set_numbers(1, &["911"]);

        let selector = PreferredPhoneSelector::new();
        assert_eq!(
            selector.try_pick(&platform),
            Err(SelectError::NoRadiosAvailable)
        );
        assert!(selector.pick(&platform).is_none());
    }

    #[test]
    fn test_no_promoted_numbers() {
        let mut platform = FakePlatform::default();
        platform.add_radio("sim0", 1, true, "us");

        let selector = PreferredPhoneSelector::new();
        assert_eq!(
            selector.try_pick(&platform),
            Err(SelectError::NoPromotedNumbers)
        );
    }

    #[test]
    fn test_default_radio_wins() {
        let mut platform = FakePlatform::default();
        platform.add_radio("sim0", 1, true, "us");
        let sim1 = platform.add_radio("sim1", 2, true, "us");
        platform.set_numbers(1, &["911"]);
        platform.set_numbers(2, &["112"]);
        platform.default_radio = Some(sim1.clone());

        let selection = PreferredPhoneSelector::new().try_pick(&platform).unwrap();
        assert_eq!(selection.source, SelectionSource::DefaultRadio);
        assert_eq!(selection.info.handle(), Some(&sim1));
        assert_eq!(selection.info.radio_id(), RadioId(2));
    }

    #[test]
    fn test_insufficient_default_falls_through() {
        let mut platform = FakePlatform::default();
        let sim_a = platform.add_radio("a", 1, true, "");
        platform.add_radio("b", 2, true, "us");
        platform.set_numbers(1, &["n1"]);
        platform.set_numbers(2, &["n1", "n2"]);
        platform.default_radio = Some(sim_a);

        let selection = PreferredPhoneSelector::new().try_pick(&platform).unwrap();
        assert_eq!(selection.source, SelectionSource::CallCapable { position: 1 });
        assert_eq!(selection.info.radio_id(), RadioId(2));
        assert_eq!(selection.info.country_iso(), "us");
    }

    #[test]
    fn test_nothing_sufficient() {
        let mut platform = FakePlatform::default();
        platform.add_radio("a", 1, false, "us");
        platform.add_radio("b", 2, true, "");
        platform.set_numbers(1, &["911"]);
        platform.set_numbers(2, &["911"]);

        assert_eq!(
            PreferredPhoneSelector::new().try_pick(&platform),
            Err(SelectError::NoSufficientRadioFound)
        );
    }

    #[test]
    fn test_load_phone_info_without_account() {
        let mut platform = FakePlatform::default();
        platform.countries.insert(RadioId::INVALID, "us".into());
        let mut promoted = PromotedNumberLists::new();
        promoted.insert(
            RadioId(1),
            vec![EmergencyNumber::new(
                "911",
                ServiceCategories::POLICE,
                NumberSources::DATABASE,
            )],
        );

        let info = load_phone_info(&RadioHandle::new("ghost"), &platform, &promoted);
        assert!(!info.can_place_emergency_call());
        assert_eq!(info.radio_id(), RadioId::INVALID);
        assert!(info.promoted_numbers().is_none());
        assert!(!info.is_sufficient_for_emergency_call());
    }

    #[test]
    fn test_scheme_is_configurable() {
        let mut platform = FakePlatform::default();
        let sim0 = platform.add_radio("sim0", 1, true, "us");
        let sim1 = platform.add_radio("sim1", 2, true, "us");
        platform.set_numbers(1, &["911"]);
        platform.set_numbers(2, &["911"]);
        platform.default_radio = Some(sim1.clone());

        let tel = PreferredPhoneSelector::new().try_pick(&platform).unwrap();
        assert_eq!(tel.source, SelectionSource::DefaultRadio);
        assert_eq!(tel.info.handle(), Some(&sim1));

        // No default is registered for sip, so enumeration order decides
        let selector = PreferredPhoneSelector::with_config(SelectorConfig {
            scheme: PhoneScheme::Sip,
        });
        let sip = selector.try_pick(&platform).unwrap();
        assert_eq!(sip.source, SelectionSource::CallCapable { position: 0 });
        assert_eq!(sip.info.handle(), Some(&sim0));
    }

    #[test]
    fn test_check_default_reports_rejected_radio() {
        let numbers = vec![EmergencyNumber::new(
            "911",
            ServiceCategories::POLICE,
            NumberSources::DATABASE,
        )];

        let offline = RadioInfo::new(
            Some(RadioHandle::new("sim0")),
            true,
            RadioId(1),
            "",
            Some(numbers.clone()),
        );
        let err = check_default(offline.clone()).unwrap_err();
        assert_eq!(err, SelectError::DefaultInsufficient(offline.to_string()));
        assert!(err.to_string().contains("handle=sim0, subId=1"));

        let online = RadioInfo::new(
            Some(RadioHandle::new("sim0")),
            true,
            RadioId(1),
            "us",
            Some(numbers),
        );
        let selection = check_default(online).unwrap();
        assert_eq!(selection.source, SelectionSource::DefaultRadio);
    }
}
