//! Flow catalog
//!
//! The catalog is the static content of the walkthrough: an ordered list of
//! flows plus header text and an optional architecture overview. It is loaded
//! once from a JSON document, validated, and never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, NavigationError};
use crate::models::flow::{Flow, FlowId, HexColor};

/// Catalog compiled into the binary
pub const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

fn default_title() -> String {
    "MSA Flow Walkthrough".to_string()
}

fn default_subtitle() -> String {
    "Select a flow and follow the request step by step".to_string()
}

/// A box in the architecture overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceNode {
    /// May contain a newline to split e.g. name and port
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color: HexColor,
}

/// Static overview of the whole system, shown below the step list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Architecture {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub routing_label: String,
    #[serde(default)]
    pub platform: Vec<ServiceNode>,
    #[serde(default)]
    pub services: Vec<ServiceNode>,
}

/// On-disk shape of a catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_flow: Option<FlowId>,
    pub flows: Vec<Flow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,
}

/// Validated catalog: non-empty, unique flow ids, every flow has steps
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    title: String,
    subtitle: String,
    default_flow: FlowId,
    flows: Vec<Flow>,
    architecture: Option<Architecture>,
}

impl Catalog {
    /// Validate a parsed document
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CatalogError> {
        let first = doc.flows.first().ok_or(CatalogError::Empty)?.id;

        let mut seen = HashSet::new();
        for flow in &doc.flows {
            if !seen.insert(flow.id) {
                return Err(CatalogError::DuplicateFlow(flow.id));
            }
            if flow.steps.is_empty() {
                return Err(CatalogError::EmptyFlow(flow.id));
            }
        }

        let default_flow = match doc.default_flow {
            Some(id) if seen.contains(&id) => id,
            Some(id) => return Err(CatalogError::UnknownDefaultFlow(id)),
            None => first,
        };

        Ok(Self {
            title: doc.title,
            subtitle: doc.subtitle,
            default_flow,
            flows: doc.flows,
            architecture: doc.architecture,
        })
    }

    /// Parse and validate a JSON document. `origin` names the source in errors.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        Self::from_document(doc)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, &path.display().to_string())
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG, "embedded catalog")
    }

    /// Back to the serializable document form (used by `--dump-catalog`)
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            default_flow: Some(self.default_flow),
            flows: self.flows.clone(),
            architecture: self.architecture.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn default_flow(&self) -> FlowId {
        self.default_flow
    }

    pub fn architecture(&self) -> Option<&Architecture> {
        self.architecture.as_ref()
    }

    /// Flows in display order
    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn get(&self, id: FlowId) -> Option<&Flow> {
        self.flows.iter().find(|f| f.id == id)
    }

    /// Like [`Catalog::get`], but a missing flow is an error
    pub fn require(&self, id: FlowId) -> Result<&Flow, NavigationError> {
        self.get(id).ok_or(NavigationError::FlowNotInCatalog(id))
    }

    /// Display position of a flow
    pub fn position(&self, id: FlowId) -> Option<usize> {
        self.flows.iter().position(|f| f.id == id)
    }

    pub fn flow_at(&self, index: usize) -> Option<&Flow> {
        self.flows.get(index)
    }

    /// Total number of steps across all flows
    pub fn step_count(&self) -> usize {
        self.flows.iter().map(|f| f.steps.len()).sum()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// Small ASCII-only catalog used by navigation and render tests
    pub(crate) fn sample_catalog() -> Catalog {
        let json = r##"{
            "title": "Sample Walkthrough",
            "subtitle": "pick a flow",
            "flows": [
                {
                    "id": "signup",
                    "title": "Signup",
                    "icon": "S",
                    "steps": [
                        {"layerLabel": "Client", "snippet": "POST /users", "description": "send form", "accentColor": "#6366f1"},
                        {"layerLabel": "Gateway", "snippet": "route USER-SERVICE", "description": "route it", "accentColor": "#8b5cf6"},
                        {"layerLabel": "Repository", "snippet": "INSERT INTO user", "description": "persist", "accentColor": "#10b981"}
                    ]
                },
                {
                    "id": "login",
                    "title": "Login",
                    "icon": "L",
                    "steps": [
                        {"layerLabel": "Client", "snippet": "POST /auth/login", "description": "credentials", "accentColor": "#6366f1"},
                        {"layerLabel": "Gateway", "snippet": "pass-through", "description": "no token yet", "accentColor": "#8b5cf6"},
                        {"layerLabel": "Controller", "snippet": "login(req)", "description": "delegate", "accentColor": "#ec4899"},
                        {"layerLabel": "Service", "snippet": "createToken()", "description": "issue jwt", "accentColor": "#f59e0b"},
                        {"layerLabel": "Response", "snippet": "Set-Cookie: refreshToken", "description": "tokens out", "accentColor": "#10b981"}
                    ]
                },
                {
                    "id": "query",
                    "title": "Query",
                    "icon": "Q",
                    "steps": [
                        {"layerLabel": "Client", "snippet": "GET /users/1", "description": "read", "accentColor": "#6366f1"}
                    ]
                }
            ]
        }"##;
        Catalog::from_json_str(json, "sample").unwrap()
    }

    fn step_json() -> &'static str {
        r##"{"layerLabel": "Client", "snippet": "x", "description": "y", "accentColor": "#000000"}"##
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<FlowId> = catalog.flows().iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            vec![
                FlowId::Signup,
                FlowId::Login,
                FlowId::AuthRequest,
                FlowId::InterService,
                FlowId::Query
            ]
        );
        assert_eq!(catalog.default_flow(), FlowId::Signup);
        assert_eq!(catalog.get(FlowId::Signup).unwrap().steps.len(), 6);
        assert_eq!(catalog.get(FlowId::Login).unwrap().steps.len(), 5);
        assert_eq!(catalog.step_count(), 26);
        assert!(catalog.architecture().is_some());
    }

    #[test]
    fn test_default_flow_falls_back_to_first() {
        let catalog = sample_catalog();
        assert_eq!(catalog.default_flow(), FlowId::Signup);
        assert_eq!(catalog.position(FlowId::Query), Some(2));
        assert!(catalog.get(FlowId::InterService).is_none());
    }

    #[test]
    fn test_require_missing_flow() {
        let catalog = sample_catalog();
        assert_eq!(catalog.require(FlowId::Login).unwrap().id, FlowId::Login);
        assert_eq!(
            catalog.require(FlowId::AuthRequest).err(),
            Some(NavigationError::FlowNotInCatalog(FlowId::AuthRequest))
        );
    }

    #[test]
    fn test_explicit_default_flow() {
        let json = format!(
            r#"{{"defaultFlow": "login", "flows": [
                {{"id": "signup", "title": "a", "steps": [{s}]}},
                {{"id": "login", "title": "b", "steps": [{s}]}}
            ]}}"#,
            s = step_json()
        );
        let catalog = Catalog::from_json_str(&json, "test").unwrap();
        assert_eq!(catalog.default_flow(), FlowId::Login);
        assert_eq!(catalog.title(), default_title());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let result = Catalog::from_json_str(r#"{"flows": []}"#, "test");
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_rejects_flow_without_steps() {
        let json = r#"{"flows": [{"id": "login", "title": "Login", "steps": []}]}"#;
        let result = Catalog::from_json_str(json, "test");
        assert!(matches!(result, Err(CatalogError::EmptyFlow(FlowId::Login))));
    }

    #[test]
    fn test_rejects_duplicate_flow() {
        let json = format!(
            r#"{{"flows": [
                {{"id": "query", "title": "a", "steps": [{s}]}},
                {{"id": "query", "title": "b", "steps": [{s}]}}
            ]}}"#,
            s = step_json()
        );
        let result = Catalog::from_json_str(&json, "test");
        assert!(matches!(result, Err(CatalogError::DuplicateFlow(FlowId::Query))));
    }

    #[test]
    fn test_rejects_unknown_default_flow() {
        let json = format!(
            r#"{{"defaultFlow": "query", "flows": [{{"id": "signup", "title": "a", "steps": [{s}]}}]}}"#,
            s = step_json()
        );
        let result = Catalog::from_json_str(&json, "test");
        assert!(matches!(
            result,
            Err(CatalogError::UnknownDefaultFlow(FlowId::Query))
        ));
    }

    #[test]
    fn test_rejects_unknown_flow_id() {
        let json = format!(
            r#"{{"flows": [{{"id": "checkout", "title": "a", "steps": [{s}]}}]}}"#,
            s = step_json()
        );
        let result = Catalog::from_json_str(&json, "test");
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_load_file_not_found() {
        let result = Catalog::load(Path::new("/nonexistent/catalog.json"));
        match result {
            Err(CatalogError::Read { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title": "From Disk", "flows": [{{"id": "login", "title": "Login", "steps": [{}]}}]}}"#,
            step_json()
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.title(), "From Disk");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.flow_at(0).unwrap().id, FlowId::Login);
    }

    #[test]
    fn test_load_invalid_json_names_origin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ invalid json }}").unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_document_round_trip_preserves_order() {
        let catalog = Catalog::builtin().unwrap();
        let json = serde_json::to_string_pretty(&catalog.to_document()).unwrap();
        let reloaded = Catalog::from_json_str(&json, "dump").unwrap();
        assert_eq!(reloaded, catalog);
    }
}
