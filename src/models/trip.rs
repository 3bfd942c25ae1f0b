use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Trip {
    #[serde(rename = "_id")]
    pub record_id: String,
    pub origin: String,
    pub destination: String,
    pub cost: f64,
    pub duration: f64,
    #[serde(rename = "type")]
    pub trip_type: String,
    #[serde(rename = "id")]
    pub external_id: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Incoming save payload. Every field is optional so the validation pass can
/// report all missing or invalid fields at once instead of failing on the
/// first one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripDraft {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub cost: Option<f64>,
    pub duration: Option<f64>,
    #[serde(rename = "type")]
    pub trip_type: Option<String>,
    #[serde(rename = "id")]
    pub external_id: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTrip {
    pub origin: String,
    pub destination: String,
    pub cost: f64,
    pub duration: f64,
    pub trip_type: String,
    pub external_id: String,
    pub display_name: String,
}

impl TripDraft {
    pub fn validate(self) -> Result<NewTrip, Vec<String>> {
        let mut findings = Vec::new();

        for (field, value) in [
            ("origin", self.origin.as_deref()),
            ("destination", self.destination.as_deref()),
        ] {
            if let Some(finding) = location_code_finding("body", field, value) {
                findings.push(finding);
            }
        }

        match self.cost {
            None => findings.push("body/cost is required".to_string()),
            Some(cost) if cost < 0.0 => {
                findings.push("body/cost must be greater than or equal to 0".to_string())
            }
            _ => {}
        }

        if self.duration.is_none() {
            findings.push("body/duration is required".to_string());
        }

        for (field, value) in [
            ("type", self.trip_type.as_deref()),
            ("id", self.external_id.as_deref()),
            ("display_name", self.display_name.as_deref()),
        ] {
            match value {
                None => findings.push(format!("body/{field} is required")),
                Some(text) if text.trim().is_empty() => {
                    findings.push(format!("body/{field} must not be empty"))
                }
                _ => {}
            }
        }

        match (
            self.origin,
            self.destination,
            self.cost,
            self.duration,
            self.trip_type,
            self.external_id,
            self.display_name,
        ) {
            (
                Some(origin),
                Some(destination),
                Some(cost),
                Some(duration),
                Some(trip_type),
                Some(external_id),
                Some(display_name),
            ) if findings.is_empty() => Ok(NewTrip {
                origin,
                destination,
                cost,
                duration,
                trip_type,
                external_id,
                display_name,
            }),
            _ => Err(findings),
        }
    }
}

pub fn location_code_finding(section: &str, field: &str, value: Option<&str>) -> Option<String> {
    match value {
        None => Some(format!("{section}/{field} is required")),
        Some(code) if !is_location_code(code) => {
            Some(format!("{section}/{field} must be a 3-letter location code"))
        }
        _ => None,
    }
}

fn is_location_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// A trip option returned by the remote search api. Only `cost` and
/// `duration` are interpreted; everything else is passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub cost: f64,
    pub duration: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPage {
    pub trips: Vec<Trip>,
    pub total_pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStats {
    pub total_trips: i64,
    pub avg_cost: f64,
    pub avg_duration: f64,
    pub popular_destinations: Vec<DestinationCount>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DestinationCount {
    #[serde(rename = "_id")]
    pub destination: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> TripDraft {
        TripDraft {
            origin: Some("SYD".into()),
            destination: Some("LAX".into()),
            cost: Some(1000.0),
            duration: Some(14.0),
            trip_type: Some("flight".into()),
            external_id: Some("a749c866".into()),
            display_name: Some("from SYD to LAX by flight".into()),
        }
    }

    #[test]
    fn complete_draft_passes() {
        let new_trip = full_draft().validate().expect("draft should be valid");
        assert_eq!(new_trip.origin, "SYD");
        assert_eq!(new_trip.cost, 1000.0);
    }

    #[test]
    fn every_violated_field_is_reported() {
        let draft = TripDraft {
            origin: Some("SYDNEY".into()),
            cost: Some(-100.0),
            ..full_draft()
        };
        let findings = draft.validate().expect_err("draft should be rejected");
        assert!(findings.iter().any(|f| f.starts_with("body/origin")));
        assert!(findings.iter().any(|f| f.starts_with("body/cost")));
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn empty_draft_reports_all_required_fields() {
        let findings = TripDraft::default()
            .validate()
            .expect_err("empty draft should be rejected");
        assert_eq!(findings.len(), 7);
        assert!(findings.iter().all(|f| f.starts_with("body/")));
    }

    #[test]
    fn location_codes_are_three_ascii_letters() {
        assert!(location_code_finding("body", "origin", Some("syd")).is_none());
        assert!(location_code_finding("body", "origin", Some("SY1")).is_some());
        assert!(location_code_finding("body", "origin", Some("SYDN")).is_some());
        assert!(location_code_finding("querystring", "origin", None)
            .is_some_and(|f| f.starts_with("querystring/origin")));
    }
}
