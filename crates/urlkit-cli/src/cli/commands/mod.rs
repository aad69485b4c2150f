//! CLI command handlers, one file per command.

mod codec;
mod completions;
mod join;
mod query;
mod set;
mod show;

pub use codec::{run_decode, run_encode};
pub use completions::{run_completions, run_man};
pub use join::run_join;
pub use query::{run_query_decode, run_query_encode};
pub use set::run_set;
pub use show::run_show;
