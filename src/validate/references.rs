//! Reference-explicitness traversal.
//!
//! Walks every location in the document where a component reference can
//! appear and reports any that did not survive normalization. No
//! unresolved shape may reach deployment, and every explicit reference
//! must carry all four coordinates.

use std::fmt;

use crate::context::NormalizationContext;
use crate::parse::types::{ExecutionTask, Reference, State, Transition, ViewValue, Workflow};

/// Sentinel the normalizer writes into coordinates it could not resolve.
const UNRESOLVED: &str = "UNRESOLVED";

/// What a reference points at. Used only for diagnostic wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Task,
    View,
    Schema,
    Process,
    Function,
    Extension,
    Feature,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefKind::Task => write!(f, "Task"),
            RefKind::View => write!(f, "View"),
            RefKind::Schema => write!(f, "Schema"),
            RefKind::Process => write!(f, "Process"),
            RefKind::Function => write!(f, "Function"),
            RefKind::Extension => write!(f, "Extension"),
            RefKind::Feature => write!(f, "Feature"),
        }
    }
}

/// Walk every reference-bearing location in the document.
pub fn check_references(workflow: &Workflow, ctx: &mut NormalizationContext) {
    let Some(attrs) = &workflow.attributes else {
        return;
    };

    for (i, reference) in attrs.functions.iter().enumerate() {
        check_reference(reference, RefKind::Function, &format!("functions[{i}]"), ctx);
    }
    for (i, reference) in attrs.extensions.iter().enumerate() {
        check_reference(reference, RefKind::Extension, &format!("extensions[{i}]"), ctx);
    }
    for (i, reference) in attrs.features.iter().enumerate() {
        check_reference(reference, RefKind::Feature, &format!("features[{i}]"), ctx);
    }

    for state in &attrs.states {
        check_state_references(state, ctx);
    }

    for (i, shared) in attrs.shared_transitions.iter().enumerate() {
        check_transition_references(&shared.transition, &format!("sharedTransition[{i}]"), ctx);
    }
    if let Some(start) = &attrs.start_transition {
        check_transition_references(start, "startTransition", ctx);
    }
}

/// References reachable from a single state.
pub fn check_state_references(state: &State, ctx: &mut NormalizationContext) {
    let base = format!("state:{}", state.key);

    if let Some(view) = &state.view {
        check_view(view, &format!("{base}.view"), ctx);
    }
    check_task_references(&state.on_entries, &format!("{base}.onEntries"), ctx);
    check_task_references(&state.on_exits, &format!("{base}.onExits"), ctx);
    for (i, transition) in state.transitions.iter().enumerate() {
        check_transition_references(transition, &format!("{base}.transitions[{i}]"), ctx);
    }
    if let Some(sub_flow) = &state.sub_flow {
        if let Some(process) = &sub_flow.process {
            check_reference(process, RefKind::Process, &format!("{base}.subFlow.process"), ctx);
        }
    }
}

fn check_transition_references(transition: &Transition, path: &str, ctx: &mut NormalizationContext) {
    if let Some(schema) = &transition.schema {
        check_reference(schema, RefKind::Schema, &format!("{path}.schema"), ctx);
    }
    if let Some(view) = &transition.view {
        check_view(view, &format!("{path}.view"), ctx);
    }
    check_task_references(&transition.on_execution_tasks, &format!("{path}.onExecutionTasks"), ctx);
}

fn check_task_references(tasks: &[ExecutionTask], path: &str, ctx: &mut NormalizationContext) {
    for (i, task) in tasks.iter().enumerate() {
        if let Some(reference) = &task.task {
            check_reference(reference, RefKind::Task, &format!("{path}[{i}].task"), ctx);
        }
    }
}

/// Both view shapes carry the same inner reference; the wrapper itself is
/// never validated.
fn check_view(view: &ViewValue, path: &str, ctx: &mut NormalizationContext) {
    check_reference(view.reference(), RefKind::View, path, ctx);
}

/// The two-step rule: an unresolved shape is reported once and the
/// field-level checks are skipped for it.
pub fn check_reference(
    reference: &Reference,
    kind: RefKind,
    path: &str,
    ctx: &mut NormalizationContext,
) {
    match reference {
        Reference::Unresolved { .. } => {
            ctx.add_error(format!("{kind} reference not normalized: {path}"));
        }
        Reference::Explicit(explicit) => {
            for (field, value) in explicit.fields() {
                if value.is_empty() || value == UNRESOLVED {
                    ctx.add_error(format!("Reference missing or unresolved {field}: {path}"));
                }
            }
        }
    }
}
