//! Structural checks: document completeness and per-element required fields.

use crate::context::NormalizationContext;
use crate::parse::types::{SharedTransition, State, Transition, Workflow};

/// Top-level completeness: identity fields, attributes, at least one
/// state, and the start transition. Does not recurse into states.
pub fn check_completeness(workflow: &Workflow, ctx: &mut NormalizationContext) {
    let identity = [
        ("key", &workflow.key),
        ("domain", &workflow.domain),
        ("flow", &workflow.flow),
        ("version", &workflow.version),
    ];
    for (field, value) in identity {
        if value.is_empty() {
            ctx.add_error(format!("Workflow missing required field: {field}"));
        }
    }

    let Some(attrs) = &workflow.attributes else {
        ctx.add_error("Workflow missing required field: attributes");
        return;
    };
    if attrs.states.is_empty() {
        ctx.add_error("Workflow must have at least one state");
    }
    if attrs.start_transition.is_none() {
        ctx.add_error("Workflow missing required field: startTransition");
    }
}

/// Required fields on a state, plus its local transitions.
pub fn check_state(state: &State, ctx: &mut NormalizationContext) {
    if state.key.is_empty() {
        ctx.add_error("State missing required key");
    }
    // A discriminator of 0 is a real value; only absence is an error.
    if state.state_type.is_none() {
        ctx.add_error(format!(
            "State '{}' missing required stateType",
            state.key
        ));
    }
    for (i, transition) in state.transitions.iter().enumerate() {
        check_transition(transition, &format!("state:{}.transitions[{}]", state.key, i), ctx);
    }
}

/// Required fields on any transition (local, shared, or start).
pub fn check_transition(transition: &Transition, path: &str, ctx: &mut NormalizationContext) {
    if transition.key.is_empty() {
        ctx.add_error(format!("Transition missing required key: {path}"));
    }
    if transition.target.is_empty() {
        ctx.add_error(format!("Transition missing required target: {path}"));
    }
}

/// `availableIn` is checked on its own, before the generic transition
/// rules, so the findings are independent rather than short-circuited.
pub fn check_shared_transition(
    shared: &SharedTransition,
    index: usize,
    ctx: &mut NormalizationContext,
) {
    if shared.available_in.is_empty() {
        ctx.add_error(format!(
            "Shared transition must be available in at least one state: sharedTransition[{index}]"
        ));
    }
    check_transition(&shared.transition, &format!("sharedTransition[{index}]"), ctx);
}
