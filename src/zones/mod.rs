//! Card containers.
//!
//! - `Deck`: stock and waste
//! - `TableauPile`: hidden and visible runs of one tableau pile
//! - `Foundation`: the ascending pile of one suit

pub mod deck;
pub mod foundation;
pub mod tableau;

pub use deck::Deck;
pub use foundation::Foundation;
pub use tableau::TableauPile;
