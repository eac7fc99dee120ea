//! Deployment validation phase.
//!
//! Walks a normalized workflow document and certifies it is safe to
//! deploy. Findings are appended to the caller's `NormalizationContext`;
//! nothing is ever thrown, and a partially-malformed document degrades to
//! fewer diagnostics for the absent sub-trees rather than a crash.

pub mod references;
pub mod scripts;
pub mod structural;

use crate::context::NormalizationContext;
use crate::parse::types::{State, Workflow};

/// Run every deployment check over the document, in a fixed order.
///
/// The passes are independent and only append to the context, so the
/// order matters for diagnostic readability only. Calling this twice into
/// the same context reports every finding twice.
pub fn validate(workflow: &Workflow, ctx: &mut NormalizationContext) {
    structural::check_completeness(workflow, ctx);
    references::check_references(workflow, ctx);
    scripts::check_scripts(workflow, ctx);

    let Some(attrs) = &workflow.attributes else {
        return;
    };
    for state in &attrs.states {
        structural::check_state(state, ctx);
    }
    for (i, shared) in attrs.shared_transitions.iter().enumerate() {
        structural::check_shared_transition(shared, i, ctx);
    }
    if let Some(start) = &attrs.start_transition {
        structural::check_transition(start, "startTransition", ctx);
    }
}

/// Validate a single state in isolation, for the property panel.
pub fn validate_state(state: &State, ctx: &mut NormalizationContext) {
    structural::check_state(state, ctx);
    references::check_state_references(state, ctx);
    scripts::check_state_scripts(state, ctx);
}
