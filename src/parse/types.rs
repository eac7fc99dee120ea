//! Rust types mirroring `webview/model/workflow.ts`.
//!
//! These types are the serde target for the normalized workflow JSON the
//! editor hands to the deployment pipeline. Every field the validator must
//! be able to report as missing carries `#[serde(default)]` — absence is
//! diagnosed by the validator, never rejected by the deserializer.
//! SYNC NOTE: Keep this file aligned with `webview/model/workflow.ts`.

use serde::{Deserialize, Serialize};

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub flow: String,
    #[serde(default)]
    pub version: String,
    pub attributes: Option<WorkflowAttributes>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowAttributes {
    #[serde(default)]
    pub states: Vec<State>,
    pub start_transition: Option<Transition>,
    #[serde(default)]
    pub shared_transitions: Vec<SharedTransition>,
    #[serde(default)]
    pub functions: Vec<Reference>,
    #[serde(default)]
    pub extensions: Vec<Reference>,
    #[serde(default)]
    pub features: Vec<Reference>,
}

// =============================================================================
// STATES
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(default)]
    pub key: String,
    /// Discriminator into the editor's state-shape catalog. The catalog is
    /// an open set owned by the editor plugins, so this stays untyped
    /// beyond number-or-name. `0` is a real value; only absence is invalid.
    pub state_type: Option<StateType>,
    pub view: Option<ViewValue>,
    #[serde(default)]
    pub on_entries: Vec<ExecutionTask>,
    #[serde(default)]
    pub on_exits: Vec<ExecutionTask>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    pub sub_flow: Option<SubFlow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateType {
    Code(i64),
    Name(String),
}

/// A state that runs another workflow, with a data-mapping script feeding it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubFlow {
    pub process: Option<Reference>,
    pub mapping: Option<Script>,
}

// =============================================================================
// TRANSITIONS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    #[serde(default)]
    pub key: String,
    /// Destination state key.
    #[serde(default)]
    pub target: String,
    pub schema: Option<Reference>,
    pub view: Option<ViewValue>,
    pub rule: Option<Script>,
    #[serde(default)]
    pub on_execution_tasks: Vec<ExecutionTask>,
}

/// A transition offered from every state listed in `availableIn`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedTransition {
    #[serde(flatten)]
    pub transition: Transition,
    #[serde(default)]
    pub available_in: Vec<String>,
}

// =============================================================================
// TASKS AND SCRIPTS
// =============================================================================

/// A unit of work attached to a state's entry/exit or a transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionTask {
    pub task: Option<Reference>,
    pub mapping: Option<Script>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    /// `"inline"` once the normalizer has embedded the body; otherwise the
    /// source path the body still has to be loaded from.
    #[serde(default)]
    pub location: String,
    pub code: Option<String>,
}

// =============================================================================
// REFERENCES
// =============================================================================

/// A pointer to another deployable component (task, view, schema, process,
/// function, extension, feature).
///
/// `Unresolved` is tried first so a value carrying `ref` never falls
/// through to the explicit shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    /// Bare pointer as authored in the editor, before normalization.
    Unresolved {
        #[serde(rename = "ref")]
        pointer: String,
    },
    /// Fully-qualified coordinates written by the normalizer.
    Explicit(ExplicitRef),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplicitRef {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub flow: String,
    #[serde(default)]
    pub version: String,
}

impl ExplicitRef {
    /// The four coordinate fields paired with their wire names.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("key", self.key.as_str()),
            ("domain", self.domain.as_str()),
            ("flow", self.flow.as_str()),
            ("version", self.version.as_str()),
        ]
    }
}

// =============================================================================
// VIEWS
// =============================================================================

/// A view is given either as a bare reference or wrapped together with its
/// load instructions. Both shapes must be accepted; only the inner
/// reference is ever validated.
///
/// `Wrapped` is tried first — the `view` field is what discriminates the
/// wrapper from a flat reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewValue {
    Wrapped(ViewWrapper),
    Flat(Reference),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewWrapper {
    pub view: Reference,
    /// Load instructions consumed by the runtime, never validated here.
    pub load_data: Option<serde_json::Value>,
    pub extensions: Option<serde_json::Value>,
}

impl ViewValue {
    /// Normalize both shapes to the inner reference.
    pub fn reference(&self) -> &Reference {
        match self {
            ViewValue::Wrapped(wrapper) => &wrapper.view,
            ViewValue::Flat(reference) => reference,
        }
    }
}
