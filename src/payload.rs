//! Request payload shapes for the tracker and doc-space APIs.
//!
//! Pure projections of (configuration x milestone) into the request
//! bodies the external systems expect. The builders are total functions:
//! they never fail, and malformed inputs simply flow into the string
//! templates verbatim. Nothing here performs I/O - the records exist to
//! be inspected, not sent.

use serde::{Deserialize, Serialize};

use crate::config::AtlassianConfig;
use crate::milestone::MilestoneMeta;

/// Priority label applied to every previewed epic.
const EPIC_PRIORITY: &str = "Medium";

/// Reference to a tracker project by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub key: String,
}

/// Reference to an issue type by display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTypeRef {
    pub name: String,
}

/// Reference to a priority by display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRef {
    pub name: String,
}

/// Epic creation request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpicPayload {
    pub fields: EpicFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpicFields {
    pub project: ProjectRef,
    pub summary: String,
    pub description: String,
    pub issuetype: IssueTypeRef,
    pub priority: PriorityRef,
    pub labels: Vec<String>,
}

/// Page creation request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePayload {
    #[serde(rename = "type")]
    pub page_type: String,
    pub title: String,
    pub space: SpaceRef,
    pub body: PageBody,
}

/// Reference to a doc space by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRef {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBody {
    pub storage: StorageBody,
}

/// Storage-representation page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageBody {
    pub value: String,
    pub representation: String,
}

/// Credentials echoed into creation requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestAuth {
    pub email: String,
    pub token: String,
}

/// Tracker project creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub key: String,
    pub name: String,
    pub project_type_key: String,
    pub lead: String,
    pub description: String,
    pub url: String,
    pub auth: RequestAuth,
}

/// Doc-space creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRequest {
    pub key: String,
    pub name: String,
    pub description: SpaceDescription,
    #[serde(rename = "type")]
    pub space_type: String,
    pub url: String,
    pub auth: RequestAuth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceDescription {
    pub plain: PlainDescription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainDescription {
    pub value: String,
    pub representation: String,
}

/// Build the epic creation payload for a milestone.
pub fn epic_payload(config: &AtlassianConfig, meta: &MilestoneMeta) -> EpicPayload {
    let status = &meta.status;
    EpicPayload {
        fields: EpicFields {
            project: ProjectRef {
                key: config.tracker.project_key.clone(),
            },
            summary: format!("{}: {}", meta.key, meta.title),
            description: format!(
                "{}\n\n**Progress**: {}/{} ({}%)",
                meta.description, status.completed, status.total, status.percentage
            ),
            issuetype: IssueTypeRef {
                name: config.tracker.epic_issue_type.clone(),
            },
            priority: PriorityRef {
                name: EPIC_PRIORITY.to_string(),
            },
            labels: vec![
                "simone".to_string(),
                "milestone".to_string(),
                meta.key.to_lowercase(),
            ],
        },
    }
}

/// Build the page creation payload for a milestone.
pub fn page_payload(config: &AtlassianConfig, meta: &MilestoneMeta) -> PagePayload {
    let status = &meta.status;
    let value = format!(
        "<h1>{key} - {title}</h1>\n<p>{description}</p>\n<h2>Progress</h2>\n<p>Completed: {completed}/{total} ({percentage}%)</p>",
        key = meta.key,
        title = meta.title,
        description = meta.description,
        completed = status.completed,
        total = status.total,
        percentage = status.percentage,
    );
    PagePayload {
        page_type: "page".to_string(),
        title: format!("{} - {}", meta.key, meta.title),
        space: SpaceRef {
            key: config.doc_space.space_key.clone(),
        },
        body: PageBody {
            storage: StorageBody {
                value,
                representation: "storage".to_string(),
            },
        },
    }
}

/// Build the tracker project creation request.
pub fn project_request(config: &AtlassianConfig) -> ProjectRequest {
    ProjectRequest {
        key: config.tracker.project_key.clone(),
        name: config.tracker.project_name.clone(),
        project_type_key: config.tracker.project_type.clone(),
        lead: config.credentials.email.clone(),
        description: "AI-driven project management with Simone integration".to_string(),
        url: format!("{}/rest/api/3/project", config.tracker.base_url),
        auth: RequestAuth {
            email: config.credentials.email.clone(),
            token: config.tracker.api_token.clone(),
        },
    }
}

/// Build the doc-space creation request.
pub fn space_request(config: &AtlassianConfig) -> SpaceRequest {
    SpaceRequest {
        key: config.doc_space.space_key.clone(),
        name: config.doc_space.space_name.clone(),
        description: SpaceDescription {
            plain: PlainDescription {
                value: config.doc_space.space_description.clone(),
                representation: "plain".to_string(),
            },
        },
        space_type: "global".to_string(),
        url: format!("{}/rest/api/space", config.doc_space.base_url),
        auth: RequestAuth {
            email: config.credentials.email.clone(),
            token: config.doc_space.api_token.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milestone::MilestoneStatus;

    fn example_meta() -> MilestoneMeta {
        MilestoneMeta {
            key: "M12".to_string(),
            title: "Example Feature".to_string(),
            description: "Does the thing.".to_string(),
            status: MilestoneStatus::new(2, 3),
        }
    }

    #[test]
    fn epic_summary_and_labels() {
        let config = AtlassianConfig::default();
        let epic = epic_payload(&config, &example_meta());

        assert_eq!(epic.fields.summary, "M12: Example Feature");
        assert_eq!(epic.fields.labels, ["simone", "milestone", "m12"]);
        assert_eq!(epic.fields.project.key, "SIMONE");
        assert_eq!(epic.fields.issuetype.name, "Epic");
        assert_eq!(epic.fields.priority.name, "Medium");
    }

    #[test]
    fn epic_description_appends_progress() {
        let config = AtlassianConfig::default();
        let epic = epic_payload(&config, &example_meta());

        assert_eq!(
            epic.fields.description,
            "Does the thing.\n\n**Progress**: 2/3 (67%)"
        );
    }

    #[test]
    fn epic_respects_configured_issue_type() {
        let config: AtlassianConfig =
            serde_json::from_str(r#"{"tracker": {"epicIssueType": "Initiative"}}"#).unwrap();
        let epic = epic_payload(&config, &example_meta());
        assert_eq!(epic.fields.issuetype.name, "Initiative");
    }

    #[test]
    fn page_title_and_storage_body() {
        let config = AtlassianConfig::default();
        let page = page_payload(&config, &example_meta());

        assert_eq!(page.page_type, "page");
        assert_eq!(page.title, "M12 - Example Feature");
        assert_eq!(page.space.key, "SIMONE");
        assert_eq!(page.body.storage.representation, "storage");
        assert!(
            page.body
                .storage
                .value
                .contains("<h1>M12 - Example Feature</h1>")
        );
        assert!(page.body.storage.value.contains("Completed: 2/3 (67%)"));
    }

    #[test]
    fn page_type_serializes_as_type() {
        let config = AtlassianConfig::default();
        let json = serde_json::to_value(page_payload(&config, &example_meta())).unwrap();
        assert_eq!(json["type"], "page");
    }

    #[test]
    fn project_request_echoes_configuration() {
        let config = AtlassianConfig::default();
        let request = project_request(&config);

        assert_eq!(request.key, "SIMONE");
        assert_eq!(request.project_type_key, "software");
        assert_eq!(request.lead, "you@example.com");
        assert_eq!(
            request.url,
            "https://your-site.atlassian.net/rest/api/3/project"
        );
        assert_eq!(request.auth.token, "YOUR_TRACKER_API_TOKEN");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["projectTypeKey"], "software");
    }

    #[test]
    fn space_request_wraps_description() {
        let config = AtlassianConfig::default();
        let request = space_request(&config);

        assert_eq!(request.space_type, "global");
        assert_eq!(request.description.plain.representation, "plain");
        assert_eq!(
            request.url,
            "https://your-site.atlassian.net/wiki/rest/api/space"
        );
        assert_eq!(request.auth.token, "YOUR_DOCSPACE_API_TOKEN");
    }

    #[test]
    fn builders_pass_malformed_input_through() {
        let config = AtlassianConfig::default();
        let meta = MilestoneMeta {
            key: String::new(),
            title: "<script>".to_string(),
            description: String::new(),
            status: MilestoneStatus::new(0, 0),
        };

        let epic = epic_payload(&config, &meta);
        assert_eq!(epic.fields.summary, ": <script>");
        let page = page_payload(&config, &meta);
        assert!(page.body.storage.value.contains("<script>"));
    }
}
