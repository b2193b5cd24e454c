//! The `Action` extension point and the `Runner` handle the host supplies
//! to it.
//!
//! Actions are single-method plugins: the host hands them a mutable
//! [`ActionContext`] and a [`Runner`] and they either complete or return an
//! error for the host to present. Nested execution (an action driving the
//! host's generic "run this block" path) goes back through
//! [`Runner::run_action`] on the same context.

use crate::context::ActionContext;
use crate::error::Result;

/// A named behavior the host dispatches to from a markdown block.
pub trait Action {
    fn execute(&self, ctx: &mut ActionContext, runner: &mut dyn Runner) -> Result<()>;
}

/// Host-side handle offered to actions: template-variable binding and the
/// generic action-execution path.
///
/// Variable state is shared and unsynchronized; actions that bind variables
/// must not run concurrently with other readers of the same names.
pub trait Runner {
    fn add_variable(&mut self, name: &str, value: &str);
    fn clear_variable(&mut self, name: &str);

    /// Execute the host's generic "run" action against `ctx`.
    fn run_action(&mut self, ctx: &mut ActionContext) -> Result<()>;
}

/// Bind `vars` on the runner, invoke `f`, then clear every binding — also
/// when `f` fails, so an error never leaks variables into later blocks.
pub fn with_variables(
    runner: &mut dyn Runner,
    vars: &[(&str, &str)],
    f: &mut dyn FnMut(&mut dyn Runner) -> Result<()>,
) -> Result<()> {
    for (name, value) in vars {
        runner.add_variable(name, value);
    }
    let result = f(runner);
    for (name, _) in vars {
        runner.clear_variable(name);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunzmdError;

    #[derive(Default)]
    struct RecordingRunner {
        ops: Vec<String>,
        fail_run: bool,
    }

    impl Runner for RecordingRunner {
        fn add_variable(&mut self, name: &str, value: &str) {
            self.ops.push(format!("add {name}={value}"));
        }

        fn clear_variable(&mut self, name: &str) {
            self.ops.push(format!("clear {name}"));
        }

        fn run_action(&mut self, _ctx: &mut ActionContext) -> Result<()> {
            self.ops.push("run".to_string());
            if self.fail_run {
                return Err(RunzmdError::UnknownAction("boom".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn binds_runs_then_clears_in_order() {
        let mut runner = RecordingRunner::default();
        let mut ctx = ActionContext::new();
        with_variables(
            &mut runner,
            &[("entityId", "a"), ("entityName", "A")],
            &mut |r| r.run_action(&mut ctx),
        )
        .unwrap();
        assert_eq!(
            runner.ops,
            vec![
                "add entityId=a",
                "add entityName=A",
                "run",
                "clear entityId",
                "clear entityName",
            ]
        );
    }

    #[test]
    fn clears_bindings_when_the_closure_fails() {
        let mut runner = RecordingRunner {
            fail_run: true,
            ..Default::default()
        };
        let mut ctx = ActionContext::new();
        let err = with_variables(&mut runner, &[("entityId", "a")], &mut |r| {
            r.run_action(&mut ctx)
        })
        .unwrap_err();
        assert!(matches!(err, RunzmdError::UnknownAction(_)));
        assert_eq!(runner.ops.last().unwrap(), "clear entityId");
    }
}
