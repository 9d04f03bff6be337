#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Best-effort webhook relay to the external dispatch workflow engine.
//!
//! Two events leave the system: a full incident record on creation, and
//! a status-change payload on every officer action. Both are at-most-once,
//! fire-and-forget: a failed delivery is logged and never retried, never
//! surfaced to the user, and never rolls back the store mutation that
//! preceded it. Callers invoke the relay only after the store mutation
//! has committed, and must not gate anything on the outcome.

use incident_desk_incident_models::{Incident, IncidentStatus};
use serde::Serialize;
use thiserror::Error;

/// Errors from a single webhook delivery attempt.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The HTTP request failed or timed out.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook endpoint answered with a non-success status.
    #[error("Webhook {url} answered {status}")]
    Rejected {
        /// The webhook URL that was called.
        url: String,
        /// The HTTP status it returned.
        status: reqwest::StatusCode,
    },

    /// No webhook URL is configured for this event kind.
    #[error("No webhook URL configured for {event}")]
    NotConfigured {
        /// Which event could not be delivered.
        event: &'static str,
    },
}

/// Webhook endpoints, read from the environment.
///
/// Both URLs are optional configuration, not behavior: an unset URL
/// disables that event kind and the relay logs-and-skips.
#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    /// Endpoint receiving new incident reports.
    pub report_webhook: Option<String>,
    /// Endpoint receiving status-change updates.
    pub update_webhook: Option<String>,
}

impl RelayConfig {
    /// Reads `REPORT_WEBHOOK_URL` and `UPDATE_WEBHOOK_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            report_webhook: std::env::var("REPORT_WEBHOOK_URL").ok(),
            update_webhook: std::env::var("UPDATE_WEBHOOK_URL").ok(),
        }
    }
}

/// Body of the status-change webhook call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdatePayload {
    /// Incident id.
    pub id: String,
    /// The status the incident moved to (or re-confirmed).
    pub status: IncidentStatus,
    /// Officer notes attached with this update, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub officer_notes: Option<String>,
    /// AI advisory attached with this update, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    /// When the update was relayed, epoch milliseconds.
    pub timestamp: i64,
}

/// Outbound notification relay.
pub struct Relay {
    config: RelayConfig,
    client: reqwest::Client,
}

impl Relay {
    /// Creates a relay with the given endpoint configuration.
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Creates a relay configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(RelayConfig::from_env())
    }

    /// Delivers a newly created incident to the report webhook.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError`] if no report webhook is configured, the
    /// request fails, or the endpoint rejects the payload.
    pub async fn send_report(&self, incident: &Incident) -> Result<(), RelayError> {
        let url = self
            .config
            .report_webhook
            .as_deref()
            .ok_or(RelayError::NotConfigured { event: "report" })?;
        self.post(url, incident).await
    }

    /// Delivers a status-change event to the update webhook.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError`] if no update webhook is configured, the
    /// request fails, or the endpoint rejects the payload.
    pub async fn send_status_update(
        &self,
        id: &str,
        status: IncidentStatus,
        notes: Option<&str>,
        ai_summary: Option<&str>,
    ) -> Result<(), RelayError> {
        let url = self
            .config
            .update_webhook
            .as_deref()
            .ok_or(RelayError::NotConfigured { event: "update" })?;

        let payload = StatusUpdatePayload {
            id: id.to_string(),
            status,
            officer_notes: notes.map(ToString::to_string),
            ai_summary: ai_summary.map(ToString::to_string),
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        self.post(url, &payload).await
    }

    /// Best-effort wrapper around [`Self::send_report`].
    ///
    /// Any failure is logged and swallowed: delivery is at-most-once
    /// and never affects the store mutation that preceded it. An
    /// unconfigured webhook is a debug-level skip, not an error.
    pub async fn notify_created(&self, incident: &Incident) {
        match self.send_report(incident).await {
            Ok(()) => log::info!("Relayed new incident {}", incident.id),
            Err(RelayError::NotConfigured { event }) => {
                log::debug!("Skipping {event} relay for {}: not configured", incident.id);
            }
            Err(e) => log::error!("Failed to relay incident {}: {e}", incident.id),
        }
    }

    /// Best-effort wrapper around [`Self::send_status_update`].
    ///
    /// Same delivery contract as [`Self::notify_created`].
    pub async fn notify_status_changed(
        &self,
        id: &str,
        status: IncidentStatus,
        notes: Option<&str>,
        ai_summary: Option<&str>,
    ) {
        match self.send_status_update(id, status, notes, ai_summary).await {
            Ok(()) => log::info!("Relayed status change for {id}: {status}"),
            Err(RelayError::NotConfigured { event }) => {
                log::debug!("Skipping {event} relay for {id}: not configured");
            }
            Err(e) => log::error!("Failed to relay status change for {id}: {e}"),
        }
    }

    async fn post<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<(), RelayError> {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                url: url.to_string(),
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use incident_desk_incident_models::{GeoLocation, IncidentType};

    use super::*;

    fn sample_incident() -> Incident {
        Incident {
            id: "INC-123456".to_string(),
            kind: IncidentType::Accident,
            reporter_name: "Somchai Jaidee".to_string(),
            reporter_phone: "081-234-5678".to_string(),
            description: "Motorbike collision at the junction".to_string(),
            image: None,
            location: GeoLocation {
                lat: 16.43,
                lng: 102.82,
                address: "Moo 3, Ban Nong Thum".to_string(),
            },
            status: IncidentStatus::Pending,
            officer_notes: None,
            ai_summary: None,
            timestamp: 1_716_000_000_000,
        }
    }

    #[tokio::test]
    async fn unconfigured_report_webhook_is_not_configured_error() {
        let relay = Relay::new(RelayConfig::default());
        let err = relay.send_report(&sample_incident()).await.unwrap_err();
        assert!(matches!(
            err,
            RelayError::NotConfigured { event: "report" }
        ));
    }

    #[tokio::test]
    async fn unconfigured_update_webhook_is_not_configured_error() {
        let relay = Relay::new(RelayConfig::default());
        let err = relay
            .send_status_update("INC-123456", IncidentStatus::Closed, None, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RelayError::NotConfigured { event: "update" }
        ));
    }

    #[tokio::test]
    async fn notify_wrappers_swallow_unconfigured_endpoints() {
        let relay = Relay::new(RelayConfig::default());
        relay.notify_created(&sample_incident()).await;
        relay
            .notify_status_changed("INC-123456", IncidentStatus::InProgress, Some("on it"), None)
            .await;
    }

    #[test]
    fn update_payload_omits_absent_side_fields() {
        let payload = StatusUpdatePayload {
            id: "INC-123456".to_string(),
            status: IncidentStatus::InProgress,
            officer_notes: None,
            ai_summary: None,
            timestamp: 1_716_000_000_000,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["status"], "IN_PROGRESS");
        assert!(value.get("officerNotes").is_none());
        assert!(value.get("aiSummary").is_none());
    }

    #[test]
    fn update_payload_carries_side_fields_when_present() {
        let payload = StatusUpdatePayload {
            id: "INC-123456".to_string(),
            status: IncidentStatus::Closed,
            officer_notes: Some("Scene cleared".to_string()),
            ai_summary: Some("Severity: low".to_string()),
            timestamp: 1_716_000_000_000,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["officerNotes"], "Scene cleared");
        assert_eq!(value["aiSummary"], "Severity: low");
    }
}
