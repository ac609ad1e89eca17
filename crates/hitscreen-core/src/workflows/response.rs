use crate::workflows::screen::{FaultKind, ScreenError, ScreenReport};
use serde::Serialize;

/// Overall outcome marker of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// The UI behavior a front end should take for this response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiAction {
    ShowToast,
    ShowHitList,
    AppendHitList,
    ShowModal,
    Other,
}

/// Payload of the envelope: a neighbor list on success, a classified fault
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseResults {
    Neighbors(Vec<String>),
    Fault { error_kind: String, message: String },
}

/// The standardized front-end response envelope.
///
/// Every screening request, successful or not, serializes to this shape:
/// a status, a results payload, and a UI-action hint. Faults carry their
/// kind so the front end can act on it without parsing messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: Status,
    pub results: ResponseResults,
    pub action: UiAction,
}

/// Message used for internal faults; details stay in the logs.
const INTERNAL_FAULT_MESSAGE: &str = "The screening service hit an internal error";

fn fault_label(kind: FaultKind) -> &'static str {
    match kind {
        FaultKind::UserInput => "user_input",
        FaultKind::IneffectiveSettings => "ineffective_settings",
        FaultKind::Internal => "internal",
    }
}

impl Response {
    /// Builds the envelope from a workflow outcome.
    ///
    /// Successful reports carry the neighbor names and tell the front end to
    /// show the hit list. Faults become toasts; user and settings faults
    /// keep their actionable message, while internal faults are replaced by
    /// a generic one so no internal detail leaks.
    pub fn from_outcome(outcome: &Result<ScreenReport, ScreenError>) -> Self {
        match outcome {
            Ok(report) => Response {
                status: Status::Success,
                results: ResponseResults::Neighbors(report.neighbors.clone()),
                action: UiAction::ShowHitList,
            },
            Err(error) => {
                let kind = error.kind();
                let message = match kind {
                    FaultKind::Internal => INTERNAL_FAULT_MESSAGE.to_string(),
                    _ => error.to_string(),
                };
                Response {
                    status: Status::Error,
                    results: ResponseResults::Fault {
                        error_kind: fault_label(kind).to_string(),
                        message,
                    },
                    action: UiAction::ShowToast,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::EngineError;
    use serde_json::json;

    fn report() -> ScreenReport {
        ScreenReport {
            target_name: "target".to_string(),
            threshold: 3.0,
            neighbors: vec!["near".to_string(), "edge".to_string()],
            candidates_evaluated: 5,
        }
    }

    #[test]
    fn success_envelope_shows_hit_list() {
        let response = Response::from_outcome(&Ok(report()));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "success",
                "results": ["near", "edge"],
                "action": "show_hit_list",
            })
        );
    }

    #[test]
    fn user_fault_keeps_its_message() {
        let err = ScreenError::UnknownTarget {
            name: "ghost".to_string(),
        };
        let response = Response::from_outcome(&Err(err));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["action"], "show_toast");
        assert_eq!(value["results"]["error_kind"], "user_input");
        assert!(
            value["results"]["message"]
                .as_str()
                .unwrap()
                .contains("ghost")
        );
    }

    #[test]
    fn settings_fault_suggests_looser_threshold() {
        let err = ScreenError::NoNeighbors {
            target: "target".to_string(),
            threshold: 1.5,
        };
        let response = Response::from_outcome(&Err(err));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["results"]["error_kind"], "ineffective_settings");
        assert!(
            value["results"]["message"]
                .as_str()
                .unwrap()
                .contains("too strict")
        );
    }

    #[test]
    fn internal_faults_leak_no_detail() {
        let err = ScreenError::Engine(EngineError::EmptyStructure {
            name: "secret-compound-42".to_string(),
        });
        let response = Response::from_outcome(&Err(err));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["results"]["error_kind"], "internal");
        let message = value["results"]["message"].as_str().unwrap();
        assert!(!message.contains("secret-compound-42"));
    }
}
