//! For-each action: run a block once per listed entity.
//!
//! Lists entities of a configured type through the ziti CLI, checks the
//! result count against configured bounds, then drives the host's generic
//! run path once per entity with `entityId`/`entityName` bound for
//! templating. The block body is restored between iterations so every
//! entity sees the same untemplated input.

use serde_json::Value;

use runzmd_core::{with_variables, Action, ActionContext, Result, Runner, RunzmdError};

use crate::cli;
use crate::error::ZitiError;

pub(crate) type Lister =
    dyn Fn(&str, &str, &str) -> std::result::Result<Vec<Value>, ZitiError> + Send + Sync;

/// Iterates a block over listed ziti entities.
///
/// Headers: `api` (default `edge`), `type` (required), `filter` (optional
/// zql filter), `minCount` / `maxCount` (both default 1) bounding how many
/// entities the listing may return.
///
/// Iteration is strictly sequential and aborts on the first nested failure;
/// variable bindings are cleared and the body restored before the error
/// propagates.
pub struct ZitiForEachAction {
    list: Box<Lister>,
}

impl ZitiForEachAction {
    pub fn new() -> Self {
        Self {
            list: Box::new(cli::ziti_list),
        }
    }

    /// Test seam: swap the ziti listing call for a canned one.
    pub(crate) fn with_lister(list: Box<Lister>) -> Self {
        Self { list }
    }
}

impl Default for ZitiForEachAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for ZitiForEachAction {
    fn execute(&self, ctx: &mut ActionContext, runner: &mut dyn Runner) -> Result<()> {
        // Signal downstream that the body should be run through templating.
        ctx.set_header("templatize", "true");

        let api = ctx.header("api").unwrap_or("edge").to_string();
        let entity_type = ctx.require_header("type")?.to_string();
        let filter = ctx.header("filter").unwrap_or("").to_string();

        let min_count = ctx.int_header("minCount", 1)?;
        if min_count < 0 {
            return Err(RunzmdError::InvalidHeader {
                key: "minCount".to_string(),
                value: min_count.to_string(),
                reason: "must be >= 0".to_string(),
            });
        }

        let max_count = ctx.int_header("maxCount", 1)?;
        if max_count < min_count {
            return Err(RunzmdError::InvalidHeader {
                key: "maxCount".to_string(),
                value: max_count.to_string(),
                reason: format!("must be >= minCount of {min_count}"),
            });
        }

        let entities = (self.list)(&api, &entity_type, &filter)?;

        if entities.len() < min_count as usize {
            return Err(ZitiError::TooFew {
                min: min_count,
                entity_type,
                found: entities.len(),
            }
            .into());
        }
        if entities.len() > max_count as usize {
            return Err(ZitiError::TooMany {
                max: max_count,
                entity_type,
                found: entities.len(),
            }
            .into());
        }

        let original_body = ctx.body.clone();
        for entity in &entities {
            let id = cli::entity_str(entity, "id");
            let name = cli::entity_str(entity, "name");

            let result = with_variables(
                runner,
                &[("entityId", id), ("entityName", name)],
                &mut |r| r.run_action(ctx),
            );
            // Undo any templating the nested run applied to the body.
            ctx.body = original_body.clone();
            result?;
        }

        Ok(())
    }
}
