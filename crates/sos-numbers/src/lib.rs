//! Emergency Number Library
//!
//! This crate models the emergency numbers a multi-SIM device knows about
//! and decides which of them are promoted to one-tap shortcuts.
//!
//! # Promotion
//!
//! A number is promoted when it reaches police, ambulance or fire brigade.
//! Promoted numbers reported by the curated emergency number database are
//! listed before promoted numbers from any other source, and each group
//! keeps the order the platform reported it in.
//!
//! # Example
//!
//! ```rust
//! use sos_numbers::{
//!     classify, EmergencyNumber, EmergencyNumberLists, NumberSources, RadioId,
//!     ServiceCategories,
//! };
//!
//! let mut all = EmergencyNumberLists::new();
//! all.insert(
//!     RadioId(1),
//!     Some(vec![
//!         EmergencyNumber::new("911", ServiceCategories::POLICE, NumberSources::SIM),
//!         EmergencyNumber::new("112", ServiceCategories::POLICE, NumberSources::DATABASE),
//!     ]),
//! );
//!
//! let promoted = classify(&all);
//! assert_eq!(promoted[&RadioId(1)][0].number, "112");
//! ```

pub mod classify;
pub mod number;

pub use classify::{classify, promote, EmergencyNumberLists, PromotedNumberLists};
pub use number::{CallRouting, EmergencyNumber, NumberSources, RadioId, ServiceCategories};

/// Emergency services promoted on the shortcut view
pub const PROMOTED_CATEGORIES: [ServiceCategories; 3] = [
    ServiceCategories::POLICE,
    ServiceCategories::AMBULANCE,
    ServiceCategories::FIRE_BRIGADE,
];

/// Union of [`PROMOTED_CATEGORIES`]
pub const PROMOTED_CATEGORIES_BITMASK: ServiceCategories = ServiceCategories::POLICE
    .union(ServiceCategories::AMBULANCE)
    .union(ServiceCategories::FIRE_BRIGADE);
