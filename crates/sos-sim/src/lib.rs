//! Multi-SIM Device Simulation Library
//!
//! This crate provides a simulated device for exercising emergency shortcut
//! selection without a telephony stack. It includes:
//!
//! - **SimulatedRadio**: A SIM slot with its phone account and network state
//! - **SimulatedDevice**: A set of radios plus the default outgoing radio and
//!   the emergency number lists, implementing every platform collaborator
//!
//! # Example
//!
//! ```rust
//! use sos_numbers::{EmergencyNumber, NumberSources, RadioId, ServiceCategories};
//! use sos_select::pick_preferred_phone;
//! use sos_sim::{SimulatedDevice, SimulatedRadioConfig};
//!
//! let mut device = SimulatedDevice::new();
//! device.add_radio(SimulatedRadioConfig::new("sim0", 1, "us")).unwrap();
//! device.set_emergency_numbers(
//!     RadioId(1),
//!     Some(vec![EmergencyNumber::new(
//!         "911",
//!         ServiceCategories::POLICE,
//!         NumberSources::DATABASE,
//!     )]),
//! );
//!
//! let info = pick_preferred_phone(&device).unwrap();
//! assert_eq!(info.radio_id(), RadioId(1));
//! ```

pub mod device;
pub mod error;
pub mod radio;

pub use device::{DeviceConfig, NumberListConfig, SimulatedDevice};
pub use error::SimError;
pub use radio::{SimulatedRadio, SimulatedRadioConfig};
