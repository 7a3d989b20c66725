//! Validated, immutable rank and suit value types for playing cards.
//!
//! The crate provides [`Rank`] (ace through king) and [`Suit`] (spade, heart,
//! club, dia). Both are built from a small integer id, carry a canonical name
//! and a display label, compare and hash by id, and serialize to a dict-like
//! map or to JSON.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use trumpy::{Listing, Rank, Suit};
//!
//! let ace = Rank::new(1).unwrap();
//! assert_eq!(ace.to_string(), "ace");
//! assert_eq!(ace, Rank::ACE);
//!
//! let mut names = HashMap::new();
//! names.insert(Suit::new(1).unwrap(), "spade");
//! assert_eq!(names[&Suit::SPADE], "spade");
//!
//! assert_eq!(
//!     Suit::all("name").unwrap(),
//!     Listing::Names(vec!["spade", "heart", "club", "dia"])
//! );
//! assert_eq!(
//!     Suit::CLUB.to_json().unwrap(),
//!     r#"{"id": 3, "name": "club", "label": "♣"}"#
//! );
//! ```

extern crate alloc;

pub mod card;
pub mod error;
pub mod json;
pub mod listing;
pub mod selector;

// Re-export main types
pub use card::{Rank, Suit};
pub use error::{Error, ErrorKind, Result};
pub use listing::Listing;
pub use selector::Selector;
