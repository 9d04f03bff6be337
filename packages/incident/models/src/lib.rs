#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident record types and the status lifecycle.
//!
//! This crate defines the canonical incident record shared across the
//! incident-desk system: the report categories citizens can pick from,
//! the officer-driven status lifecycle, and the aggregate counters shown
//! on the dispatch dashboard. The JSON field names match the persisted
//! blob and webhook payload shapes (`camelCase` fields,
//! `SCREAMING_SNAKE_CASE` enum values).

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Category of a reported emergency, chosen by the citizen at submission.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentType {
    /// Structure, vehicle, or brush fire
    Fire,
    /// Medical emergency requiring first responders
    Medical,
    /// Traffic or workplace accident
    Accident,
    /// Anything that doesn't fit the other categories
    Other,
}

impl IncidentType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Fire, Self::Medical, Self::Accident, Self::Other]
    }
}

/// Where an incident sits in the dispatch workflow.
///
/// The lifecycle is strictly linear: `Pending` → `InProgress` → `Closed`.
/// There is no cancellation or rejection state, and `Closed` is terminal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    /// Reported but not yet actioned by an officer
    Pending,
    /// An officer has accepted the incident and is responding
    InProgress,
    /// Resolved; no further transitions
    Closed,
}

impl IncidentStatus {
    /// Returns the next state in the lifecycle, or `None` from `Closed`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::InProgress),
            Self::InProgress => Some(Self::Closed),
            Self::Closed => None,
        }
    }

    /// Whether a transition from `self` to `target` is legal.
    ///
    /// Legal moves are a single forward step along the lifecycle, or a
    /// same-state update (the AI advisory path re-submits the current
    /// status to attach a summary without advancing the workflow).
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self == target || self.next() == Some(target)
    }

    /// Whether this state accepts no further forward transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Pending, Self::InProgress, Self::Closed]
    }
}

/// GPS coordinates plus a display address for a reported incident.
///
/// The address is a fixed label supplied by the reporting client, not a
/// reverse-geocoded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Human-readable location label.
    pub address: String,
}

/// One reported emergency event, the sole persisted entity.
///
/// `id`, `kind`, the reporter fields, `description`, `location`, and
/// `timestamp` are assigned at creation and immutable thereafter. Only
/// `status`, `officer_notes`, and `ai_summary` change, and only through
/// the store's status-update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Unique record identifier, `INC-` followed by six digits.
    pub id: String,
    /// Report category.
    #[serde(rename = "type")]
    pub kind: IncidentType,
    /// Name given by the reporting citizen.
    pub reporter_name: String,
    /// Contact phone number of the reporter.
    pub reporter_phone: String,
    /// Free-text description of the situation.
    pub description: String,
    /// Opaque reference to an attached photo, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Where the incident was reported from.
    pub location: GeoLocation,
    /// Current lifecycle state.
    pub status: IncidentStatus,
    /// Notes attached by the handling officer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub officer_notes: Option<String>,
    /// AI-generated situational advisory, if one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    /// Creation time as epoch milliseconds.
    pub timestamp: i64,
}

/// Caller-supplied payload for creating an incident.
///
/// The store assigns `id`, `status` (always [`IncidentStatus::Pending`]),
/// and `timestamp`; everything else comes from the reporting client.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncident {
    /// Report category.
    pub kind: IncidentType,
    /// Name given by the reporting citizen.
    pub reporter_name: String,
    /// Contact phone number of the reporter.
    pub reporter_phone: String,
    /// Free-text description of the situation.
    pub description: String,
    /// Opaque reference to an attached photo, if any.
    pub image: Option<String>,
    /// Where the incident was reported from.
    pub location: GeoLocation,
}

/// Aggregate counters for the dispatch dashboard.
///
/// Always satisfies `pending + active + closed == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total number of incidents on record.
    pub total: usize,
    /// Incidents awaiting officer action.
    pub pending: usize,
    /// Incidents currently being handled.
    pub active: usize,
    /// Resolved incidents.
    pub closed: usize,
}
