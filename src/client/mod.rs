//! Client side of the game: HTTP access to the round API and the local view state.

/// Round API access.
pub mod api;
/// Local view state.
pub mod view;

pub use self::api::{ClientError, HttpRoundApi, RoundApi};
pub use self::view::ClientView;
