use validator::parse::types::*;

// =============================================================================
// Document builders
// =============================================================================

pub fn explicit_ref(key: &str) -> Reference {
    Reference::Explicit(ExplicitRef {
        key: key.into(),
        domain: "lending".into(),
        flow: "loan-approval".into(),
        version: "1.0.0".into(),
    })
}

pub fn unresolved_ref(pointer: &str) -> Reference {
    Reference::Unresolved {
        pointer: pointer.into(),
    }
}

pub fn inline_script(code: &str) -> Script {
    Script {
        location: "inline".into(),
        code: Some(code.into()),
    }
}

pub fn transition(key: &str, target: &str) -> Transition {
    Transition {
        key: key.into(),
        target: target.into(),
        ..Default::default()
    }
}

pub fn state(key: &str) -> State {
    State {
        key: key.into(),
        state_type: Some(StateType::Code(1)),
        ..Default::default()
    }
}

/// Minimal deployable workflow: one state and a start transition into it.
pub fn base_workflow() -> Workflow {
    Workflow {
        key: "loan-approval".into(),
        domain: "lending".into(),
        flow: "loan-approval".into(),
        version: "1.0.0".into(),
        attributes: Some(WorkflowAttributes {
            states: vec![state("draft")],
            start_transition: Some(transition("start", "draft")),
            ..Default::default()
        }),
    }
}
