// Handlers for CLI subcommands.
//
// main.rs parses arguments and dispatches here; each module owns one
// subcommand and writes its result to stdout.

pub mod catalog;
pub mod rpm;
pub mod select;
