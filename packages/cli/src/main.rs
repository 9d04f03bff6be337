#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Operator CLI for the incident desk.
//!
//! Drives the incident store through its public interface: submit a
//! citizen report, list and inspect records, advance the status
//! lifecycle, request an AI advisory, and show dashboard counters.
//! Webhook relay calls fire after each successful mutation and their
//! failure never affects the command's outcome. GPS acquisition and
//! officer login belong to the reporting clients, not here; the
//! coordinates arrive as plain arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use incident_desk_ai::advisory;
use incident_desk_incident_models::{
    GeoLocation, Incident, IncidentStatus, IncidentType, NewIncident,
};
use incident_desk_relay::Relay;
use incident_desk_store::{IncidentStore, JsonFileBackend, StoreError};

#[derive(Parser)]
#[command(name = "incident-desk", about = "Citizen emergency reporting and dispatch desk")]
struct Cli {
    /// Path of the JSON file holding the incident collection.
    #[arg(long, default_value = "data/incidents.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a new citizen incident report
    Report {
        /// Report category: FIRE, MEDICAL, ACCIDENT, or OTHER
        #[arg(long = "type")]
        kind: IncidentType,
        /// Reporter name
        #[arg(long)]
        name: String,
        /// Reporter phone number
        #[arg(long)]
        phone: String,
        /// Free-text description of the situation
        #[arg(long)]
        description: String,
        /// GPS latitude
        #[arg(long)]
        lat: f64,
        /// GPS longitude
        #[arg(long)]
        lng: f64,
        /// Location label shown to officers
        #[arg(long, default_value = "Auto GPS position")]
        address: String,
        /// Opaque reference to an attached photo
        #[arg(long)]
        image: Option<String>,
    },
    /// List incidents, newest first
    List {
        /// Only show incidents with this status
        #[arg(long)]
        status: Option<IncidentStatus>,
    },
    /// Show one incident in full
    Show {
        /// Incident id, e.g. INC-123456
        id: String,
    },
    /// Move an incident to a new status
    Status {
        /// Incident id
        id: String,
        /// Target status: PENDING, IN_PROGRESS, or CLOSED
        new_status: IncidentStatus,
        /// Officer notes to attach with this update
        #[arg(long)]
        notes: Option<String>,
    },
    /// Request an AI situational advisory for an incident
    Analyze {
        /// Incident id
        id: String,
    },
    /// Show dashboard counters
    Stats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let cli = Cli::parse();
    let store = IncidentStore::new(Box::new(JsonFileBackend::new(&cli.data_file)));
    let relay = Relay::from_env();

    match cli.command {
        Command::Report {
            kind,
            name,
            phone,
            description,
            lat,
            lng,
            address,
            image,
        } => {
            let created = store.create(NewIncident {
                kind,
                reporter_name: name,
                reporter_phone: phone,
                description,
                image,
                location: GeoLocation { lat, lng, address },
            })?;
            relay.notify_created(&created).await;
            println!("Reported incident {}", created.id);
        }
        Command::List { status } => {
            for incident in store.list()? {
                if status.is_none_or(|s| incident.status == s) {
                    print_row(&incident);
                }
            }
        }
        Command::Show { id } => {
            let incident = find(&store, &id)?;
            print_detail(&incident);
        }
        Command::Status {
            id,
            new_status,
            notes,
        } => {
            let updated = store.update_status(&id, new_status, notes.as_deref(), None)?;
            relay
                .notify_status_changed(&updated.id, updated.status, notes.as_deref(), None)
                .await;
            println!("Incident {} is now {}", updated.id, updated.status);
        }
        Command::Analyze { id } => {
            let incident = find(&store, &id)?;
            let summary = advisory::advise(&incident).await;
            let updated =
                store.update_status(&incident.id, incident.status, None, Some(&summary))?;
            relay
                .notify_status_changed(&updated.id, updated.status, None, Some(&summary))
                .await;
            println!("{summary}");
        }
        Command::Stats => {
            let stats = store.stats()?;
            println!("total:       {}", stats.total);
            println!("pending:     {}", stats.pending);
            println!("in progress: {}", stats.active);
            println!("closed:      {}", stats.closed);
        }
    }

    Ok(())
}

fn find(store: &IncidentStore, id: &str) -> Result<Incident, StoreError> {
    store
        .list()?
        .into_iter()
        .find(|i| i.id == id)
        .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
}

fn print_row(incident: &Incident) {
    println!(
        "{}  {:<11}  {:<8}  {}",
        incident.id,
        incident.status.to_string(),
        incident.kind.to_string(),
        incident.description,
    );
}

fn print_detail(incident: &Incident) {
    println!("id:          {}", incident.id);
    println!("type:        {}", incident.kind);
    println!("status:      {}", incident.status);
    println!("reported:    {}", format_timestamp(incident.timestamp));
    println!(
        "reporter:    {} ({})",
        incident.reporter_name, incident.reporter_phone
    );
    println!(
        "location:    {:.6}, {:.6} ({})",
        incident.location.lat, incident.location.lng, incident.location.address
    );
    println!("description: {}", incident.description);
    if let Some(image) = &incident.image {
        println!("image:       {image}");
    }
    if let Some(notes) = &incident.officer_notes {
        println!("notes:       {notes}");
    }
    if let Some(summary) = &incident.ai_summary {
        println!("advisory:    {summary}");
    }
}

fn format_timestamp(epoch_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(epoch_ms)
        .map_or_else(|| epoch_ms.to_string(), |dt| dt.to_rfc3339())
}
