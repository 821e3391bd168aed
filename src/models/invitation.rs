use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Request to dispatch invitation emails
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRequest {
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub test_link: String,
    #[serde(default)]
    pub test_code: String,
}

impl InvitationRequest {
    /// Parse a raw request body. Distinguishes an absent body, a body that
    /// is not JSON, and a JSON body that violates the field invariants.
    pub fn parse(body: &str) -> Result<Self, AppError> {
        if body.trim().is_empty() {
            return Err(AppError::MissingPayload);
        }

        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| AppError::MalformedPayload(e.to_string()))?;

        let request: InvitationRequest = serde_json::from_value(value)
            .map_err(|e| AppError::InvalidFields(e.to_string()))?;

        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.emails.is_empty() {
            return Err(AppError::InvalidFields(
                "emails must be a non-empty list".to_string(),
            ));
        }
        if self.test_link.is_empty() {
            return Err(AppError::InvalidFields(
                "testLink is required".to_string(),
            ));
        }
        if self.test_code.is_empty() {
            return Err(AppError::InvalidFields(
                "testCode is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of one send attempt, one per recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    pub email: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DispatchOutcome {
    pub fn sent(email: String, message_id: Option<String>) -> Self {
        Self {
            email,
            success: true,
            message_id,
            error: None,
        }
    }

    pub fn failed(email: String, error: String) -> Self {
        Self {
            email,
            success: false,
            message_id: None,
            error: Some(error),
        }
    }
}

/// Per-recipient breakdown, partitioned by outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchDetails {
    pub successful: Vec<DispatchOutcome>,
    pub failed: Vec<DispatchOutcome>,
}

/// Response envelope returned for every dispatch request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<DispatchDetails>,
}

impl InvitationResponse {
    /// Build the envelope from the resolved outcomes, preserving the
    /// relative order of the original recipient list within each partition.
    pub fn from_outcomes(outcomes: Vec<DispatchOutcome>) -> Self {
        let total = outcomes.len();
        let (successful, failed): (Vec<_>, Vec<_>) =
            outcomes.into_iter().partition(|o| o.success);
        let sent = successful.len();

        Self {
            success: sent > 0,
            message: format!("Successfully sent {} out of {} invitations", sent, total),
            details: Some(DispatchDetails { successful, failed }),
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_valid_request() {
        let body = r#"{"emails":["a@x.com","b@x.com"],"testLink":"https://t/1","testCode":"ABC123"}"#;
        let request = InvitationRequest::parse(body).expect("Should parse");
        assert_eq!(request.emails, vec!["a@x.com", "b@x.com"]);
        assert_eq!(request.test_link, "https://t/1");
        assert_eq!(request.test_code, "ABC123");
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(matches!(
            InvitationRequest::parse(""),
            Err(AppError::MissingPayload)
        ));
        assert!(matches!(
            InvitationRequest::parse("   \n"),
            Err(AppError::MissingPayload)
        ));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(
            InvitationRequest::parse("{not json"),
            Err(AppError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_parse_rejects_missing_or_empty_fields() {
        let cases = [
            r#"{"testLink":"https://t/1","testCode":"ABC"}"#,
            r#"{"emails":[],"testLink":"https://t/1","testCode":"ABC"}"#,
            r#"{"emails":["a@x.com"],"testCode":"ABC"}"#,
            r#"{"emails":["a@x.com"],"testLink":"","testCode":"ABC"}"#,
            r#"{"emails":["a@x.com"],"testLink":"https://t/1"}"#,
            r#"{"emails":["a@x.com"],"testLink":"https://t/1","testCode":""}"#,
        ];

        for body in cases {
            assert!(
                matches!(
                    InvitationRequest::parse(body),
                    Err(AppError::InvalidFields(_))
                ),
                "expected InvalidFields for {}",
                body
            );
        }
    }

    #[test]
    fn test_from_outcomes_partitions_in_order() {
        let outcomes = vec![
            DispatchOutcome::sent("a@x.com".to_string(), Some("id-1".to_string())),
            DispatchOutcome::failed("b@x.com".to_string(), "rejected".to_string()),
            DispatchOutcome::sent("c@x.com".to_string(), Some("id-3".to_string())),
        ];

        let response = InvitationResponse::from_outcomes(outcomes);
        assert!(response.success);
        assert_eq!(response.message, "Successfully sent 2 out of 3 invitations");

        let details = response.details.expect("Should include details");
        let successful: Vec<_> = details.successful.iter().map(|o| o.email.as_str()).collect();
        let failed: Vec<_> = details.failed.iter().map(|o| o.email.as_str()).collect();
        assert_eq!(successful, vec!["a@x.com", "c@x.com"]);
        assert_eq!(failed, vec!["b@x.com"]);
    }

    #[test]
    fn test_from_outcomes_all_failed() {
        let outcomes = vec![
            DispatchOutcome::failed("a@x.com".to_string(), "down".to_string()),
            DispatchOutcome::failed("b@x.com".to_string(), "down".to_string()),
        ];

        let response = InvitationResponse::from_outcomes(outcomes);
        assert!(!response.success);
        assert_eq!(response.message, "Successfully sent 0 out of 2 invitations");
    }

    #[test]
    fn test_envelope_wire_field_names() {
        let response = InvitationResponse::from_outcomes(vec![DispatchOutcome::sent(
            "a@x.com".to_string(),
            Some("id-1".to_string()),
        )]);

        let json = serde_json::to_value(&response).expect("Should serialize");
        assert_eq!(json["success"], true);
        assert_eq!(
            json["details"]["successful"][0]["messageId"],
            "id-1"
        );
        assert!(json["details"]["successful"][0].get("error").is_none());
    }
}
