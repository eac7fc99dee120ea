//! Script-inlining traversal.
//!
//! The deploy step can only ship scripts whose bodies are embedded in the
//! document. A script still pointing at a `.csx` file or an uncompiled
//! `mapper.json` will likely fail there, so these findings stay advisory
//! rather than blocking.

use crate::context::NormalizationContext;
use crate::parse::types::{ExecutionTask, Script, State, Transition, Workflow};

/// Location value the normalizer writes once a body has been embedded.
const INLINE: &str = "inline";

/// Walk every script-bearing location in the document.
pub fn check_scripts(workflow: &Workflow, ctx: &mut NormalizationContext) {
    let Some(attrs) = &workflow.attributes else {
        return;
    };

    if let Some(start) = &attrs.start_transition {
        check_task_mappings(&start.on_execution_tasks, "startTransition.onExecutionTasks", ctx);
    }
    for (i, shared) in attrs.shared_transitions.iter().enumerate() {
        check_transition_scripts(&shared.transition, &format!("sharedTransition[{i}]"), ctx);
    }
    for state in &attrs.states {
        check_state_scripts(state, ctx);
    }
}

/// Scripts reachable from a single state.
pub fn check_state_scripts(state: &State, ctx: &mut NormalizationContext) {
    let base = format!("state:{}", state.key);

    check_task_mappings(&state.on_entries, &format!("{base}.onEntries"), ctx);
    check_task_mappings(&state.on_exits, &format!("{base}.onExits"), ctx);
    for (i, transition) in state.transitions.iter().enumerate() {
        check_transition_scripts(transition, &format!("{base}.transitions[{i}]"), ctx);
    }
    if let Some(sub_flow) = &state.sub_flow {
        if let Some(mapping) = &sub_flow.mapping {
            check_script_inlined(mapping, &format!("{base}.subFlow.mapping"), ctx);
        }
    }
}

fn check_transition_scripts(transition: &Transition, path: &str, ctx: &mut NormalizationContext) {
    if let Some(rule) = &transition.rule {
        check_script_inlined(rule, &format!("{path}.rule"), ctx);
    }
    check_task_mappings(&transition.on_execution_tasks, &format!("{path}.onExecutionTasks"), ctx);
}

fn check_task_mappings(tasks: &[ExecutionTask], path: &str, ctx: &mut NormalizationContext) {
    for (i, task) in tasks.iter().enumerate() {
        if let Some(mapping) = &task.mapping {
            check_script_inlined(mapping, &format!("{path}[{i}].mapping"), ctx);
        }
    }
}

/// The three findings are independent; a single script can fire more than
/// one of them.
pub fn check_script_inlined(script: &Script, path: &str, ctx: &mut NormalizationContext) {
    let location = script.location.as_str();

    if location != INLINE && location.ends_with(".csx") {
        ctx.add_warning(format!(
            "Script not inlined, may fail deployment: {path} ({location})"
        ));
    }
    if location != INLINE && location.contains("mapper.json") {
        ctx.add_warning(format!(
            "Mapper not compiled, may fail deployment: {path} ({location})"
        ));
    }

    let has_code = script.code.as_ref().is_some_and(|code| !code.trim().is_empty());
    if !has_code {
        ctx.add_warning(format!("Script has no code content: {path}"));
    }
}
