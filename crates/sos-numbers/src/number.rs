//! Emergency number representation
//!
//! This module provides the `EmergencyNumber` record together with the
//! flag sets describing which services a number reaches and where the
//! platform learned about it.

use std::fmt;

use bitflags::bitflags;

/// Identifier of a subscription (SIM slot) known to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RadioId(pub i32);

impl RadioId {
    /// Sentinel for a radio whose subscription could not be resolved
    pub const INVALID: RadioId = RadioId(-1);

    /// Get the raw subscription id
    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns whether this id refers to a real subscription
    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

impl Default for RadioId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for RadioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

bitflags! {
    /// Emergency services reachable through a number
    ///
    /// An empty set means the category is unspecified.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ServiceCategories: u32 {
        const POLICE = 0x01;
        const AMBULANCE = 0x02;
        const FIRE_BRIGADE = 0x04;
        const MARINE_GUARD = 0x08;
        const MOUNTAIN_RESCUE = 0x10;
        /// Manually initiated eCall
        const MIEC = 0x20;
        /// Automatically initiated eCall
        const AIEC = 0x40;
    }
}

bitflags! {
    /// Origins an emergency number was reported from
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct NumberSources: u32 {
        const NETWORK_SIGNALING = 0x01;
        const SIM = 0x02;
        const MODEM_CONFIG = 0x04;
        const DEFAULT = 0x08;
        /// Curated emergency number database
        const DATABASE = 0x10;
        const TEST = 0x20;
    }
}

impl Default for ServiceCategories {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for NumberSources {
    fn default() -> Self {
        Self::empty()
    }
}

fn write_flag_names<'a>(
    f: &mut fmt::Formatter<'_>,
    names: impl Iterator<Item = &'a str>,
    empty: &str,
) -> fmt::Result {
    let mut wrote = false;
    for name in names {
        if wrote {
            f.write_str("|")?;
        }
        f.write_str(name)?;
        wrote = true;
    }
    if !wrote {
        f.write_str(empty)?;
    }
    Ok(())
}

impl fmt::Display for ServiceCategories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flag_names(f, self.iter_names().map(|(name, _)| name), "UNSPECIFIED")
    }
}

impl fmt::Display for NumberSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flag_names(f, self.iter_names().map(|(name, _)| name), "NONE")
    }
}

/// How the network expects a call to this number to be routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CallRouting {
    /// Routing not reported
    #[default]
    Unknown,
    /// Dial as an emergency call
    Emergency,
    /// Dial as a normal call
    Normal,
}

impl CallRouting {
    /// Returns a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Emergency => "emergency",
            Self::Normal => "normal",
        }
    }
}

/// A dialable emergency number as reported by the platform
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmergencyNumber {
    /// Dialable digits
    pub number: String,
    /// Country the number applies to (lowercase ISO 3166-1 alpha-2)
    #[cfg_attr(feature = "serde", serde(default))]
    pub country_iso: String,
    /// Mobile network code, empty when the number is not operator-specific
    #[cfg_attr(feature = "serde", serde(default))]
    pub mnc: String,
    /// Services reachable through this number
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: ServiceCategories,
    /// Where the number was learned from
    #[cfg_attr(feature = "serde", serde(default))]
    pub sources: NumberSources,
    /// Routing requested by the network
    #[cfg_attr(feature = "serde", serde(default))]
    pub routing: CallRouting,
}

impl EmergencyNumber {
    /// Create a number with no country, operator or routing information
    pub fn new(
        number: impl Into<String>,
        categories: ServiceCategories,
        sources: NumberSources,
    ) -> Self {
        Self {
            number: number.into(),
            country_iso: String::new(),
            mnc: String::new(),
            categories,
            sources,
            routing: CallRouting::Unknown,
        }
    }

    /// Set the country the number applies to
    pub fn with_country_iso(mut self, country_iso: impl Into<String>) -> Self {
        self.country_iso = country_iso.into();
        self
    }

    /// Set the mobile network code
    pub fn with_mnc(mut self, mnc: impl Into<String>) -> Self {
        self.mnc = mnc.into();
        self
    }

    /// Set the routing hint
    pub fn with_routing(mut self, routing: CallRouting) -> Self {
        self.routing = routing;
        self
    }

    /// Returns whether this number reaches one of the promoted services
    pub fn is_promoted_category(&self) -> bool {
        self.categories.intersects(crate::PROMOTED_CATEGORIES_BITMASK)
    }

    /// Returns whether this number came from the curated database
    ///
    /// Database entries are well categorized and so are listed first.
    pub fn is_from_prioritized_source(&self) -> bool {
        self.sources.intersects(NumberSources::DATABASE)
    }
}

impl fmt::Display for EmergencyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EmergencyNumber:{}|country={}|mnc={}|categories={}|sources={}|routing={}",
            self.number,
            self.country_iso,
            self.mnc,
            self.categories,
            self.sources,
            self.routing.name()
        )
    }
}
