// NOTE: cosmodeck architecture rationale
//
// Why a separate core crate?
// - The navigator and scene composition are testable without a live
//   terminal; the CLI crate only maps view models onto widgets
// - Scene stays in normalized coordinates so the same recipe renders at
//   any surface size
//
// Why seed-per-(epoch, size) scatter?
// - The tour redraws every frame; free-running randomness would shimmer
// - A resize should reshuffle placement, switching epochs should too, but
//   holding still must render a stable picture

mod args;
mod commands;
mod handlers;
mod tui;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
