//! Render pipeline plumbing.
//!
//! ## Key Types
//!
//! - `Surface`: The visual collaborator the table drives
//! - `HeadlessSurface`: In-memory surface for tests and non-visual callers
//! - `RenderOptions`: Speed, immediate and force flags for a render pass
//! - `Transition`: Awaitable completion of an animation
//!
//! The render pass itself lives on [`Table`](crate::table::Table), which
//! owns the cards, decks and surface it coordinates.

pub mod options;
pub mod surface;
pub mod transition;

pub use options::RenderOptions;
pub use surface::{HeadlessSurface, Origin, Primitive, PrimitiveState, Surface, VisualUpdate};
pub use transition::{Finished, Transition};
