//! Shortcut promotion of emergency numbers
//!
//! Filters each radio's emergency numbers down to the ones worth showing as
//! one-tap shortcuts, ordered so that well-categorized database entries come
//! first.

use std::collections::BTreeMap;

use tracing::{debug, enabled, warn, Level};

use crate::number::{EmergencyNumber, RadioId};

/// Every emergency number the platform currently knows about, per radio
///
/// A `None` list stands for a radio the platform reported without a number
/// list; such entries are skipped.
pub type EmergencyNumberLists = BTreeMap<RadioId, Option<Vec<EmergencyNumber>>>;

/// Promoted emergency numbers per radio
///
/// Radios without any promoted number are absent; a present list is never
/// empty.
pub type PromotedNumberLists = BTreeMap<RadioId, Vec<EmergencyNumber>>;

/// Select the promoted numbers out of one radio's list
///
/// Numbers outside the promoted categories are dropped. Numbers from a
/// prioritized source precede the others; both groups keep their input
/// order.
pub fn promote(numbers: &[EmergencyNumber]) -> Vec<EmergencyNumber> {
    let trace_numbers = enabled!(Level::DEBUG);

    let mut promoted = Vec::new();
    let mut deferred = Vec::new();

    for number in numbers {
        let is_promoted_category = number.is_promoted_category();
        let is_from_prioritized_source = number.is_from_prioritized_source();

        if trace_numbers {
            debug!(
                "  {}{}{}",
                number,
                if is_promoted_category { "M" } else { "" },
                if is_from_prioritized_source { "P" } else { "" }
            );
        }

        if !is_promoted_category {
            continue;
        }
        if is_from_prioritized_source {
            promoted.push(number.clone());
        } else {
            deferred.push(number.clone());
        }
    }

    promoted.append(&mut deferred);
    promoted
}

/// Build the promoted number list of every radio
///
/// Radios whose list is missing or yields no promoted number are left out of
/// the result. An empty result is not an error, only a warning.
pub fn classify(all_lists: &EmergencyNumberLists) -> PromotedNumberLists {
    if all_lists.is_empty() {
        warn!("Unable to retrieve emergency number lists!");
        return PromotedNumberLists::new();
    }

    let mut promoted_lists = PromotedNumberLists::new();
    for (radio, numbers) in all_lists {
        let Some(numbers) = numbers else {
            continue;
        };

        debug!("Emergency numbers of {}", radio);
        let promoted = promote(numbers);
        if !promoted.is_empty() {
            promoted_lists.insert(*radio, promoted);
        }
    }

    if promoted_lists.is_empty() {
        warn!("No promoted emergency number found!");
    }
    promoted_lists
}
