pub mod add;
pub mod annotate;
pub mod check;
pub mod commit;
pub mod context;
pub mod diff;
pub mod log;
pub mod remove;
pub mod revert;
pub mod status;
pub mod update;

pub use add::*;
pub use annotate::*;
pub use check::*;
pub use commit::*;
pub use diff::*;
pub use log::*;
pub use remove::*;
pub use revert::*;
pub use status::*;
pub use update::*;
