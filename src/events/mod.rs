//! Event notifications for presentation layers.
//!
//! The engine knows nothing about rendering. Everything a UI needs to
//! animate a move arrives as a [`GameEvent`] through the [`EventBus`].
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use klondike_engine::core::{KlondikeConfig, Position};
//! use klondike_engine::events::{EventKind, GameEvent};
//! use klondike_engine::rules::Solitaire;
//!
//! let mut game = Solitaire::new_game(KlondikeConfig::default(), 42).unwrap();
//!
//! let deals = Rc::new(RefCell::new(0));
//! let counter = Rc::clone(&deals);
//! game.subscribe_to(&[EventKind::Deal], move |_: &GameEvent| *counter.borrow_mut() += 1);
//!
//! game.make_move(None, Position::Deck, Position::Deck).unwrap();
//! assert_eq!(*deals.borrow(), 1);
//! ```

mod bus;
mod event;

pub use bus::{EventBus, GameObserver, SubscriptionId};
pub use event::{EventKind, GameEvent};
