//! Situational advisory generation for one incident.
//!
//! The advisory path is strictly best-effort: [`advise`] always
//! returns a string. When no credential is configured or the provider
//! fails, the returned placeholder is ordinary data from the store's
//! point of view. Each invocation independently overwrites any
//! previously stored summary, so a later successful call replaces a
//! placeholder and vice versa.

use incident_desk_incident_models::Incident;

use crate::AiError;
use crate::providers::{self, LlmProvider};

/// Returned when no AI credential is configured.
pub const NO_CREDENTIAL_ADVISORY: &str =
    "AI advisory unavailable: no API credential configured";

/// Returned when the provider call fails or yields nothing usable.
pub const UNAVAILABLE_ADVISORY: &str =
    "AI advisory unavailable: the provider could not be reached";

/// System prompt framing the model as a dispatch assistant.
const SYSTEM_PROMPT: &str = "You are a dispatch assistant for a local government \
emergency response unit. Analyze the reported incident and write a brief for \
the radio operator, at most 3 lines, covering: 1) severity tier \
(low/medium/high/critical), 2) equipment to prepare, 3) special cautions.";

/// Builds the user prompt from the incident's category, description,
/// and location label.
#[must_use]
pub fn build_prompt(incident: &Incident) -> String {
    let address = if incident.location.address.is_empty() {
        "not specified"
    } else {
        &incident.location.address
    };
    format!(
        "Incident report:\nType: {}\nDetails: {}\nLocation: {address}",
        incident.kind, incident.description,
    )
}

/// Generates an advisory for the incident using environment-configured
/// credentials. Never fails; degraded paths return a fixed placeholder.
pub async fn advise(incident: &Incident) -> String {
    advise_with(providers::create_provider_from_env(), incident).await
}

/// Generates an advisory using the given provider (or provider-creation
/// outcome), degrading to a placeholder on any failure.
///
/// Split out from [`advise`] so tests can substitute a provider without
/// touching process environment.
pub async fn advise_with(
    provider: Result<Box<dyn LlmProvider>, AiError>,
    incident: &Incident,
) -> String {
    let provider = match provider {
        Ok(provider) => provider,
        Err(e) => {
            log::warn!("AI advisory for {} skipped: {e}", incident.id);
            return NO_CREDENTIAL_ADVISORY.to_string();
        }
    };

    match provider
        .complete(SYSTEM_PROMPT, &build_prompt(incident))
        .await
    {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            log::warn!("AI advisory for {} came back empty", incident.id);
            UNAVAILABLE_ADVISORY.to_string()
        }
        Err(e) => {
            log::error!("AI advisory for {} failed: {e}", incident.id);
            UNAVAILABLE_ADVISORY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use incident_desk_incident_models::{GeoLocation, IncidentStatus, IncidentType};

    use super::*;

    struct FixedProvider(Result<&'static str, &'static str>);

    #[async_trait::async_trait]
    impl LlmProvider for FixedProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, AiError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(message) => Err(AiError::Provider {
                    message: message.to_string(),
                }),
            }
        }
    }

    fn sample_incident() -> Incident {
        Incident {
            id: "INC-123456".to_string(),
            kind: IncidentType::Fire,
            reporter_name: "Somchai Jaidee".to_string(),
            reporter_phone: "081-234-5678".to_string(),
            description: "Grass fire beside the road, heavy smoke".to_string(),
            image: None,
            location: GeoLocation {
                lat: 16.432,
                lng: 102.823,
                address: "Moo 3, Ban Nong Thum".to_string(),
            },
            status: IncidentStatus::Pending,
            officer_notes: None,
            ai_summary: None,
            timestamp: 1_716_000_000_000,
        }
    }

    #[test]
    fn prompt_embeds_type_description_and_address() {
        let prompt = build_prompt(&sample_incident());
        assert!(prompt.contains("FIRE"));
        assert!(prompt.contains("Grass fire beside the road"));
        assert!(prompt.contains("Moo 3, Ban Nong Thum"));
    }

    #[test]
    fn prompt_labels_missing_address() {
        let mut incident = sample_incident();
        incident.location.address = String::new();
        assert!(build_prompt(&incident).contains("not specified"));
    }

    #[tokio::test]
    async fn missing_credential_degrades_to_placeholder() {
        let missing = Err(AiError::Config {
            message: "ANTHROPIC_API_KEY environment variable not set".to_string(),
        });
        let summary = advise_with(missing, &sample_incident()).await;
        assert_eq!(summary, NO_CREDENTIAL_ADVISORY);
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_placeholder() {
        let provider: Box<dyn LlmProvider> = Box::new(FixedProvider(Err("rate limited")));
        let summary = advise_with(Ok(provider), &sample_incident()).await;
        assert_eq!(summary, UNAVAILABLE_ADVISORY);
    }

    #[tokio::test]
    async fn empty_response_degrades_to_placeholder() {
        let provider: Box<dyn LlmProvider> = Box::new(FixedProvider(Ok("  \n")));
        let summary = advise_with(Ok(provider), &sample_incident()).await;
        assert_eq!(summary, UNAVAILABLE_ADVISORY);
    }

    #[tokio::test]
    async fn successful_response_is_returned_trimmed() {
        let provider: Box<dyn LlmProvider> =
            Box::new(FixedProvider(Ok("Severity: high. Prepare water truck.\n")));
        let summary = advise_with(Ok(provider), &sample_incident()).await;
        assert_eq!(summary, "Severity: high. Prepare water truck.");
    }
}
