//! Card suits: spade, heart, club, and dia.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{Catalogued, Entry};
use crate::error::{Error, Result};
use crate::json;
use crate::listing::Listing;
use crate::selector::Selector;

const SUITS: [Entry; 4] = [
    Entry { name: "spade", label: "♠" },
    Entry { name: "heart", label: "♥" },
    Entry { name: "club", label: "♣" },
    Entry { name: "dia", label: "♦" },
];

/// A card suit, from spade (id 1) to dia (id 4).
///
/// Suits follow the same rules as [`Rank`](crate::Rank): validated on
/// construction, immutable, and compared by id.
///
/// ```
/// use trumpy::Suit;
///
/// let heart = Suit::new(2).unwrap();
/// assert_eq!(heart.label(), "♥");
/// assert_eq!(format!("{heart:?}"), "Suit(id=2, name='heart', label='♥')");
/// assert_eq!(heart.to_json().unwrap(), r#"{"id": 2, "name": "heart", "label": "♥"}"#);
/// ```
#[derive(Clone, Copy)]
pub struct Suit {
    id: u8,
    name: &'static str,
    label: &'static str,
}

impl Suit {
    /// Number of suits.
    pub const COUNT: usize = SUITS.len();

    /// Spade.
    pub const SPADE: Self = Self::at(1);
    /// Heart.
    pub const HEART: Self = Self::at(2);
    /// Club.
    pub const CLUB: Self = Self::at(3);
    /// Dia(mond).
    pub const DIA: Self = Self::at(4);

    // Only called with ids in 1..=4.
    const fn at(id: u8) -> Self {
        let entry = SUITS[(id - 1) as usize];
        Self {
            id,
            name: entry.name,
            label: entry.label,
        }
    }

    /// Creates a suit from its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if `id` is not in `1..=4`.
    pub fn new(id: i64) -> Result<Self> {
        super::lookup(id)
    }

    /// Returns the suit id, in `1..=4`.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the suit name, e.g. `"spade"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the suit label, e.g. `"♠"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Iterates every suit, spade first.
    pub fn iter() -> impl Iterator<Item = Self> {
        super::iter::<Self>()
    }

    /// Enumerates all suits according to `option`.
    ///
    /// `"suit"`/`"s"` lists suits, `"id"`/`"i"` ids, `"name"`/`"n"` names,
    /// and `"label"`/`"l"` labels, always in ascending id order.
    ///
    /// ```
    /// use trumpy::{Listing, Suit};
    ///
    /// assert_eq!(
    ///     Suit::all("label").unwrap(),
    ///     Listing::Labels(vec!["♠", "♥", "♣", "♦"])
    /// );
    /// assert!(Suit::all("value").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for any other option.
    pub fn all(option: &str) -> Result<Listing<Self>> {
        super::all(option)
    }

    /// Enumerates all suits according to a JSON option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidType`] if `option` is not a string, or
    /// [`Error::InvalidValue`] if it is not a recognized option.
    pub fn all_from_value(option: &Value) -> Result<Listing<Self>> {
        super::all_from_value(option)
    }

    /// Enumerates all suits for a parsed selector.
    #[must_use]
    pub fn select(selector: Selector) -> Listing<Self> {
        super::list(selector)
    }

    /// Returns the dict form: `id`, `name`, and `label`, in that order.
    #[must_use]
    pub fn to_dict(&self) -> Map<String, Value> {
        super::to_dict(self)
    }

    /// Returns the JSON form, e.g. `{"id": 3, "name": "club", "label": "♣"}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(json::to_string(self)?)
    }

    /// Decodes a suit from its dict form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] for keys other than `id`, `name`, and
    /// `label`, [`Error::ImmutableField`] if `name` or `label` disagree with
    /// the catalog, and the errors of [`Suit::new`] for `id`.
    pub fn from_dict(map: &Map<String, Value>) -> Result<Self> {
        super::from_map(map)
    }

    /// Decodes a suit from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed text, otherwise the
    /// [`Suit::from_dict`] errors.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        super::decode(&value)
    }
}

impl Catalogued for Suit {
    const TYPE_NAME: &'static str = "Suit";
    const SELECTOR: (&'static str, &'static str) = ("suit", "s");
    const CATALOG: &'static [Entry] = &SUITS;

    fn from_catalog(id: u8, entry: &'static Entry) -> Self {
        Self {
            id,
            name: entry.name,
            label: entry.label,
        }
    }

    fn id(&self) -> u8 {
        self.id
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn label(&self) -> &'static str {
        self.label
    }
}

impl PartialEq for Suit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Suit {}

impl Hash for Suit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

impl fmt::Debug for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_debug(self, f)
    }
}

impl TryFrom<i64> for Suit {
    type Error = Error;

    fn try_from(id: i64) -> Result<Self> {
        Self::new(id)
    }
}

impl TryFrom<u8> for Suit {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        Self::new(i64::from(id))
    }
}

/// Builds a suit from a JSON id, rejecting non-integers with
/// [`Error::InvalidType`].
impl TryFrom<&Value> for Suit {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        super::from_value(value)
    }
}

/// Parses a suit name (`"club"`) or label (`"♣"`).
impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        super::parse(s)
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        super::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        super::decode(&value).map_err(D::Error::custom)
    }
}
