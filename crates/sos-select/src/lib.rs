//! Emergency Shortcut Radio Selection
//!
//! This crate picks, among the radios (SIM slots) of a multi-SIM device, the
//! single radio whose promoted emergency numbers are offered as one-tap
//! shortcuts, and over which those numbers are dialed.
//!
//! # Architecture
//!
//! Selection is a stateless two-stage pipeline run on every request:
//!
//! 1. Every radio's emergency numbers are filtered and ordered by
//!    [`sos_numbers::classify`].
//! 2. Radios are snapshotted into [`RadioInfo`] values and tested for
//!    sufficiency: emergency capable, at least one promoted number, and a
//!    known network country. The default outgoing radio is tried first,
//!    then every call-capable radio in platform order.
//!
//! Platform state is reached only through the collaborator traits in
//! [`platform`], so hosts can back them with any telephony stack.
//!
//! # Example
//!
//! ```rust,no_run
//! use sos_select::{PreferredPhoneSelector, TelephonyPlatform};
//!
//! fn shortcut_radio(platform: &impl TelephonyPlatform) {
//!     match PreferredPhoneSelector::new().pick(platform) {
//!         Some(info) => println!("shortcuts from {}", info),
//!         None => println!("fall back to the dial pad"),
//!     }
//! }
//! ```

pub mod engine;
pub mod error;
pub mod platform;
pub mod state;

pub use engine::{
    load_phone_info, pick_preferred_phone, PreferredPhoneSelector, Selection, SelectionSource,
    SelectorConfig,
};
pub use error::SelectError;
pub use platform::{
    AccountResolver, DefaultRadioResolver, EmergencyNumberSource, NetworkStateResolver,
    PhoneScheme, PlatformContext, RadioEnumeration, TelephonyPlatform,
};
pub use state::{Account, AccountCapabilities, RadioHandle, RadioInfo};
