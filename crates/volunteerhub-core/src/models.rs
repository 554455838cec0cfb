pub mod event;
pub mod membership;
pub mod reference;
pub mod viewport;

pub use event::{Event, EventId, ValidityMode};
pub use membership::MembershipSet;
pub use reference::{ReferencePoint, ReferenceSource, ResolvedReference};
pub use viewport::{Viewport, ViewportBounds};
