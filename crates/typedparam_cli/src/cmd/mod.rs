/// First-entry lookup command.
pub mod get;
/// Name/type selection command.
pub mod pick;
/// String selection command.
pub mod pick_strings;
/// Document loading and output helpers.
pub mod util;
/// Schema validation command.
pub mod validate;
