//! Action contract for markdown-driven command runners.
//!
//! A host runner walks a markdown document, collects the headers attached to
//! each runnable block, and dispatches to a named [`Action`]. This crate
//! defines that seam: the [`Action`] trait, the [`ActionContext`] carrying
//! headers and the mutable block body, the [`Runner`] handle actions use to
//! bind template variables and invoke nested actions, and the name-keyed
//! [`ActionRegistry`] hosts dispatch through.

pub mod action;
pub mod context;
pub mod error;
pub mod registry;

pub use action::{with_variables, Action, Runner};
pub use context::ActionContext;
pub use error::{Result, RunzmdError};
pub use registry::ActionRegistry;
