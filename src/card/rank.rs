//! Card ranks, ace through king.

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

const RANKS: [Entry; 13] = [
    Entry { name: "ace", label: "A" },
    Entry { name: "two", label: "2" },
    Entry { name: "three", label: "3" },
    Entry { name: "four", label: "4" },
    Entry { name: "five", label: "5" },
    Entry { name: "six", label: "6" },
    Entry { name: "seven", label: "7" },
    Entry { name: "eight", label: "8" },
    Entry { name: "nine", label: "9" },
    Entry { name: "ten", label: "10" },
    Entry { name: "jack", label: "J" },
    Entry { name: "queen", label: "Q" },
    Entry { name: "king", label: "K" },
];

/// A card rank, from ace (id 1) to king (id 13).
///
/// A rank can only be built from a valid id and is immutable afterwards.
/// Two ranks are equal, and hash the same, when their ids are equal.
///
/// ```
/// use trumpy::Rank;
///
/// let queen = Rank::new(12).unwrap();
/// assert_eq!(queen.name(), "queen");
/// assert_eq!(queen.label(), "Q");
/// assert_eq!(queen.to_string(), "queen");
/// assert_eq!(format!("{queen:?}"), "Rank(id=12, name='queen', label='Q')");
/// assert!(Rank::new(14).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Rank {
    id: u8,
    name: &'static str,
    label: &'static str,
}

impl Rank {
    /// Number of ranks.
    pub const COUNT: usize = RANKS.len();

    /// Ace.
    pub const ACE: Self = Self::at(1);
    /// Two.
    pub const TWO: Self = Self::at(2);
    /// Three.
    pub const THREE: Self = Self::at(3);
    /// Four.
    pub const FOUR: Self = Self::at(4);
    /// Five.
    pub const FIVE: Self = Self::at(5);
    /// Six.
    pub const SIX: Self = Self::at(6);
    /// Seven.
    pub const SEVEN: Self = Self::at(7);
    /// Eight.
    pub const EIGHT: Self = Self::at(8);
    /// Nine.
    pub const NINE: Self = Self::at(9);
    /// Ten.
    pub const TEN: Self = Self::at(10);
    /// Jack.
    pub const JACK: Self = Self::at(11);
    /// Queen.
    pub const QUEEN: Self = Self::at(12);
    /// King.
    pub const KING: Self = Self::at(13);

    // Only called with ids in 1..=13.
    const fn at(id: u8) -> Self {
        let entry = RANKS[(id - 1) as usize];
        Self {
            id,
            name: entry.name,
            label: entry.label,
        }
    }

    /// Creates a rank from its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if `id` is not in `1..=13`.
    pub fn new(id: i64) -> Result<Self> {
        super::lookup(id)
    }

    /// Returns the rank id, in `1..=13`.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the rank name, e.g. `"ace"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the rank label, e.g. `"A"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Iterates every rank, ace first.
    pub fn iter() -> impl Iterator<Item = Self> {
        super::iter::<Self>()
    }

    /// Enumerates all ranks according to `option`.
    ///
    /// `"rank"`/`"r"` lists ranks, `"id"`/`"i"` ids, `"name"`/`"n"` names,
    /// and `"label"`/`"l"` labels, always in ascending id order.
    ///
    /// ```
    /// use trumpy::{Listing, Rank};
    ///
    /// let labels = Rank::all("l").unwrap();
    /// assert_eq!(labels.len(), 13);
    /// assert_eq!(Rank::all("id").unwrap(), Listing::Ids((1..=13).collect()));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for any other option.
    pub fn all(option: &str) -> Result<Listing<Self>> {
        super::all(option)
    }

    /// Enumerates all ranks according to a JSON option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidType`] if `option` is not a string, or
    /// [`Error::InvalidValue`] if it is not a recognized option.
    pub fn all_from_value(option: &Value) -> Result<Listing<Self>> {
        super::all_from_value(option)
    }

    /// Enumerates all ranks for a parsed selector.
    #[must_use]
    pub fn select(selector: Selector) -> Listing<Self> {
        super::list(selector)
    }

    /// Returns the dict form: `id`, `name`, and `label`, in that order.
    #[must_use]
    pub fn to_dict(&self) -> Map<String, Value> {
        super::to_dict(self)
    }

    /// Returns the JSON form, e.g. `{"id": 1, "name": "ace", "label": "A"}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(json::to_string(self)?)
    }

    /// Decodes a rank from its dict form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] for keys other than `id`, `name`, and
    /// `label`, [`Error::ImmutableField`] if `name` or `label` disagree with
    /// the catalog, and the errors of [`Rank::new`] for `id`.
    pub fn from_dict(map: &Map<String, Value>) -> Result<Self> {
        super::from_map(map)
    }

    /// Decodes a rank from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed text, otherwise the
    /// [`Rank::from_dict`] errors.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        super::decode(&value)
    }
}

impl Catalogued for Rank {
    const TYPE_NAME: &'static str = "Rank";
    const SELECTOR: (&'static str, &'static str) = ("rank", "r");
    const CATALOG: &'static [Entry] = &RANKS;

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

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Rank {}

impl Hash for Rank {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_debug(self, f)
    }
}

impl TryFrom<i64> for Rank {
    type Error = Error;

    fn try_from(id: i64) -> Result<Self> {
        Self::new(id)
    }
}

impl TryFrom<u8> for Rank {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        Self::new(i64::from(id))
    }
}

/// Builds a rank from a JSON id, rejecting non-integers with
/// [`Error::InvalidType`].
impl TryFrom<&Value> for Rank {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        super::from_value(value)
    }
}

/// Parses a rank name (`"queen"`) or label (`"Q"`).
impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        super::parse(s)
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        super::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        super::decode(&value).map_err(D::Error::custom)
    }
}
