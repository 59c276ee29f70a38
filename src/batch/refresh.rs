//! Batch recomputation of stored addresses.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use super::record::{RefreshMode, UserLocation};
use crate::resolver::{coordinate_label, RegionResolver};

/// A single address rewrite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressChange {
    pub id: String,
    pub name: String,
    pub previous: Option<String>,
    pub current: String,
}

impl fmt::Display for AddressChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} → {}",
            self.name,
            self.previous.as_deref().unwrap_or("-"),
            self.current
        )
    }
}

/// Outcome of a refresh run. Records carry the new addresses; writing them
/// back is up to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshReport {
    pub generated_at: DateTime<Utc>,
    pub mode: RefreshMode,
    pub gazetteer: &'static str,
    pub total_users: usize,
    /// Records without both coordinates
    pub skipped_users: usize,
    pub updated_users: usize,
    pub updates: Vec<AddressChange>,
    pub records: Vec<UserLocation>,
}

/// Recompute addresses for all records with coordinates
pub fn refresh(
    resolver: &RegionResolver,
    records: Vec<UserLocation>,
    mode: RefreshMode,
) -> RefreshReport {
    let total_users = records.len();
    info!(
        "Refreshing {} user addresses (mode: {}, gazetteer: {})",
        total_users,
        mode,
        resolver.gazetteer().name
    );

    let proposed: Vec<Option<String>> = records
        .par_iter()
        .map(|record| propose_address(resolver, record, mode))
        .collect();

    let mut skipped_users = 0;
    let mut updates = Vec::new();
    let mut records = records;

    for (record, proposal) in records.iter_mut().zip(proposed) {
        if record.point().is_none() {
            skipped_users += 1;
            continue;
        }

        let Some(current) = proposal else {
            continue;
        };

        if record.address.as_deref() == Some(current.as_str()) {
            continue;
        }

        let change = AddressChange {
            id: record.id.clone(),
            name: record.name.clone(),
            previous: record.address.replace(current.clone()),
            current,
        };
        debug!("{}", change);
        updates.push(change);
    }

    info!(
        "Updated {} of {} user addresses ({} without coordinates)",
        updates.len(),
        total_users,
        skipped_users
    );

    RefreshReport {
        generated_at: Utc::now(),
        mode,
        gazetteer: resolver.gazetteer().name,
        total_users,
        skipped_users,
        updated_users: updates.len(),
        updates,
        records,
    }
}

/// New address for a record, or `None` if it should be left alone
fn propose_address(
    resolver: &RegionResolver,
    record: &UserLocation,
    mode: RefreshMode,
) -> Option<String> {
    let point = record.point()?;
    match mode {
        RefreshMode::Nearest => Some(resolver.resolve_point(point).label()),
        RefreshMode::Coordinates => Some(coordinate_label(point.lat, point.lon)),
        RefreshMode::StaleOnly if record.has_stale_address() => {
            Some(resolver.resolve_point(point).label())
        }
        RefreshMode::StaleOnly => None,
    }
}
