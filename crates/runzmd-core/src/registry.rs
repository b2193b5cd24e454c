//! Name → action registry the host dispatches through.

use std::collections::HashMap;

use crate::action::{Action, Runner};
use crate::context::ActionContext;
use crate::error::{Result, RunzmdError};

#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Box<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action under `name`, replacing any previous registration.
    pub fn register(&mut self, name: impl Into<String>, action: Box<dyn Action>) {
        self.actions.insert(name.into(), action);
    }

    /// Dispatch to the action registered under `name`.
    pub fn execute(
        &self,
        name: &str,
        ctx: &mut ActionContext,
        runner: &mut dyn Runner,
    ) -> Result<()> {
        let action = self
            .actions
            .get(name)
            .ok_or_else(|| RunzmdError::UnknownAction(name.to_string()))?;
        action.execute(ctx, runner)
    }

    /// Registered action names, sorted for stable listing.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
