//! Ziti actions for runzmd-driven markdown documents.
//!
//! Two plugins, both thin glue over the `ziti` CLI:
//!
//! - [`KeepSessionAliveAction`] — schedules a background refresh of the CLI
//!   session so long-running walkthroughs don't expire their token.
//! - [`ZitiForEachAction`] — lists entities of a configured type and runs
//!   the block once per entity with `entityId`/`entityName` bound.

pub mod cli;
pub mod error;
pub mod for_each;
pub mod keep_alive;

pub use error::ZitiError;
pub use for_each::ZitiForEachAction;
pub use keep_alive::KeepSessionAliveAction;
