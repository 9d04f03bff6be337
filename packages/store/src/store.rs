//! The incident store: list, create, status update, and stats.

use incident_desk_incident_models::{DashboardStats, Incident, IncidentStatus, NewIncident};

use crate::ids::IdGenerator;
use crate::{StorageBackend, StoreError, seed};

/// Owner of the canonical incident collection.
///
/// All operations read and write the whole collection through the
/// injected [`StorageBackend`]. Records are kept newest-first; records
/// are never deleted, only appended or status-mutated in place.
pub struct IncidentStore {
    backend: Box<dyn StorageBackend>,
    ids: IdGenerator,
}

impl IncidentStore {
    /// Creates a store over the given persistence backend.
    #[must_use]
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            ids: IdGenerator::new(),
        }
    }

    /// Returns all incidents, newest first.
    ///
    /// A never-written slot is a first run: the store persists the
    /// fixed demo seed set and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the slot holds a blob that
    /// cannot be decoded, or [`StoreError::Io`] if the backend fails.
    pub fn list(&self) -> Result<Vec<Incident>, StoreError> {
        match self.backend.load()? {
            None => {
                let seeded = seed::demo_incidents(now_ms());
                self.persist(&seeded)?;
                log::info!("Initialized empty incident slot with {} demo records", seeded.len());
                Ok(seeded)
            }
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                message: e.to_string(),
            }),
        }
    }

    /// Records a new incident and returns the stored record.
    ///
    /// The store assigns the id, the creation timestamp, and the
    /// initial [`IncidentStatus::Pending`] status, then prepends the
    /// record so retrieval order stays newest-first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be read or
    /// persisted.
    pub fn create(&self, report: NewIncident) -> Result<Incident, StoreError> {
        let mut incidents = self.list()?;

        let timestamp = now_ms();
        let incident = Incident {
            id: self.ids.next_id(timestamp),
            kind: report.kind,
            reporter_name: report.reporter_name,
            reporter_phone: report.reporter_phone,
            description: report.description,
            image: report.image,
            location: report.location,
            status: IncidentStatus::Pending,
            officer_notes: None,
            ai_summary: None,
            timestamp,
        };

        incidents.insert(0, incident.clone());
        self.persist(&incidents)?;

        log::info!("Recorded incident {} ({})", incident.id, incident.kind);
        Ok(incident)
    }

    /// Moves the incident with `id` to `new_status` and returns the
    /// updated record.
    ///
    /// Legal moves are one forward step along the lifecycle or a
    /// same-status update (used by the advisory path to attach a
    /// summary). `notes` and `ai_summary` are merged only when present
    /// and non-empty; an empty string leaves the existing value
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has `id`, or
    /// [`StoreError::IllegalTransition`] if the move violates the
    /// lifecycle. Either way the collection is left unchanged.
    pub fn update_status(
        &self,
        id: &str,
        new_status: IncidentStatus,
        notes: Option<&str>,
        ai_summary: Option<&str>,
    ) -> Result<Incident, StoreError> {
        let mut incidents = self.list()?;

        let record = incidents
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        if !record.status.can_transition_to(new_status) {
            return Err(StoreError::IllegalTransition {
                from: record.status,
                to: new_status,
            });
        }

        record.status = new_status;
        if let Some(notes) = notes.filter(|s| !s.is_empty()) {
            record.officer_notes = Some(notes.to_string());
        }
        if let Some(summary) = ai_summary.filter(|s| !s.is_empty()) {
            record.ai_summary = Some(summary.to_string());
        }

        let updated = record.clone();
        self.persist(&incidents)?;

        log::info!("Incident {} is now {}", updated.id, updated.status);
        Ok(updated)
    }

    /// Returns the dashboard counters, recomputed from the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be read.
    pub fn stats(&self) -> Result<DashboardStats, StoreError> {
        let incidents = self.list()?;
        let count = |status| incidents.iter().filter(|i| i.status == status).count();
        Ok(DashboardStats {
            total: incidents.len(),
            pending: count(IncidentStatus::Pending),
            active: count(IncidentStatus::InProgress),
            closed: count(IncidentStatus::Closed),
        })
    }

    fn persist(&self, incidents: &[Incident]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(incidents)?;
        self.backend.save(&raw)
    }
}

/// Current wall-clock time as epoch milliseconds.
fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
