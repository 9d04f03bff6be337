//! Fixed demo records used to initialize an empty store.

use incident_desk_incident_models::{GeoLocation, Incident, IncidentStatus, IncidentType};

/// Returns the two-record demo set persisted on first run.
///
/// Timestamps are anchored to `now_ms` (30 minutes and 2 hours in the
/// past) so a freshly seeded dashboard shows recent-looking activity.
pub fn demo_incidents(now_ms: i64) -> Vec<Incident> {
    vec![
        Incident {
            id: "INC-170523-01".to_string(),
            kind: IncidentType::Fire,
            reporter_name: "Somchai Jaidee".to_string(),
            reporter_phone: "081-234-5678".to_string(),
            description: "Roadside grass fire spreading toward nearby houses, heavy smoke"
                .to_string(),
            image: None,
            location: GeoLocation {
                lat: 16.432,
                lng: 102.823,
                address: "Moo 3, Ban Nong Thum".to_string(),
            },
            status: IncidentStatus::Pending,
            officer_notes: None,
            ai_summary: None,
            timestamp: now_ms - 1000 * 60 * 30,
        },
        Incident {
            id: "INC-170523-02".to_string(),
            kind: IncidentType::Medical,
            reporter_name: "Pa Maew".to_string(),
            reporter_phone: "089-999-8888".to_string(),
            description: "Elderly person fell, head wound bleeding heavily, still conscious"
                .to_string(),
            image: None,
            location: GeoLocation {
                lat: 16.435,
                lng: 102.825,
                address: "Soi 5, in front of the temple".to_string(),
            },
            status: IncidentStatus::InProgress,
            officer_notes: None,
            ai_summary: None,
            timestamp: now_ms - 1000 * 60 * 120,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_two_records_with_unique_ids() {
        let seeded = demo_incidents(1_716_000_000_000);
        assert_eq!(seeded.len(), 2);
        assert_ne!(seeded[0].id, seeded[1].id);
    }

    #[test]
    fn seed_timestamps_are_in_the_past() {
        let now = 1_716_000_000_000;
        for incident in demo_incidents(now) {
            assert!(incident.timestamp < now);
        }
    }
}
