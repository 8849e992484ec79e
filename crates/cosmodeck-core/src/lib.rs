//! Domain layer for cosmodeck: the epoch catalog, the navigation state
//! machine, and scene composition.
//!
//! Everything here is pure and infallible by construction — the catalog is
//! static data, the navigator clamps at both bounds, and scene composition
//! is a deterministic function of `(VisualStyle, seed)`. The crate knows
//! nothing about terminals; the CLI maps [`Scene`] onto whatever drawing
//! surface it owns.

pub mod catalog;
pub mod epoch;
pub mod navigator;
pub mod scene;

pub use catalog::Catalog;
pub use epoch::{EpochRecord, VisualStyle};
pub use navigator::Navigator;
pub use scene::{Blob, Dot, Rgb, Ring, Scene};
