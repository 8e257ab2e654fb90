//! Layout engine: pure geometry for decks and seats.
//!
//! ## Key Types
//!
//! - `Perspective`: Viewing direction, mapped to a sign pair (`Directions`)
//! - `Arrangement`: Pile, hand or column, with its padding policy
//! - `card_position`: Target rectangle of one member of a deck
//! - `round_layout`: Even spread of items along a circle or ellipse
//!
//! Nothing in this module touches table state; the render pipeline calls in
//! here to find where each card should go.

pub mod arrangement;
pub mod perspective;
pub mod position;
pub mod round;

pub use arrangement::{Arrangement, Padding, PaddingSteps};
pub use perspective::{Directions, Perspective};
pub use position::{card_position, Bounds, CardRect, Dimensions, Point, Stack};
pub use round::{round_layout, RoundLayout, Seat};
