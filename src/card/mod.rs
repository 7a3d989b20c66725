//! Card rank and suit value types.
//!
//! [`Rank`] and [`Suit`] are closed catalogs of immutable values. Each value
//! is identified by an id in `1..=N`; its name and label are looked up from a
//! static table when the value is built and never change afterwards.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use core::fmt;

use log::{debug, trace};
use serde::Serializer;
use serde::ser::SerializeStruct;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::json;
use crate::listing::Listing;
use crate::selector::Selector;

mod rank;
mod suit;

pub use rank::Rank;
pub use suit::Suit;

/// Field names, in serialization order.
const FIELDS: [&str; 3] = ["id", "name", "label"];

/// Canonical name and display label for one catalog id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub name: &'static str,
    pub label: &'static str,
}

/// A value type backed by a static catalog.
pub(crate) trait Catalogued: Copy + 'static {
    /// Type name used in errors and debug output.
    const TYPE_NAME: &'static str;
    /// Long and short `all` options selecting instances.
    const SELECTOR: (&'static str, &'static str);
    /// Catalog entries; the entry for id `n` is at index `n - 1`.
    const CATALOG: &'static [Entry];

    /// Builds a value; `id` is always a valid catalog id for `entry`.
    fn from_catalog(id: u8, entry: &'static Entry) -> Self;

    fn id(&self) -> u8;
    fn name(&self) -> &'static str;
    fn label(&self) -> &'static str;
}

fn invalid_value<T: Catalogued>(value: impl ToString) -> Error {
    let value = value.to_string();
    debug!("Rejected {} value {value}", T::TYPE_NAME);
    Error::InvalidValue {
        type_name: T::TYPE_NAME,
        value,
    }
}

fn invalid_type<T: Catalogued>(value: &Value) -> Error {
    let found = json::kind(value);
    debug!("Rejected {} input of type {found}", T::TYPE_NAME);
    Error::InvalidType {
        type_name: T::TYPE_NAME,
        found,
    }
}

/// Looks up the catalog entry for `id`.
pub(crate) fn lookup<T: Catalogued>(id: i64) -> Result<T> {
    let found = u8::try_from(id)
        .ok()
        .filter(|&id| id >= 1)
        .and_then(|id| T::CATALOG.get(usize::from(id - 1)).map(|entry| (id, entry)));

    match found {
        Some((id, entry)) => Ok(T::from_catalog(id, entry)),
        None => Err(invalid_value::<T>(id)),
    }
}

/// Builds a value from an arbitrary JSON id.
pub(crate) fn from_value<T: Catalogued>(value: &Value) -> Result<T> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(id) => lookup(id),
            None if n.is_u64() => Err(invalid_value::<T>(n)),
            None => Err(invalid_type::<T>(value)),
        },
        _ => Err(invalid_type::<T>(value)),
    }
}

/// Decodes a value from its dict form.
///
/// `name` and `label` are optional but must match the catalog for `id`.
pub(crate) fn from_map<T: Catalogued>(map: &Map<String, Value>) -> Result<T> {
    if let Some(field) = map.keys().find(|key| !FIELDS.contains(&key.as_str())) {
        debug!("Rejected {} field {field}", T::TYPE_NAME);
        return Err(Error::UnknownField {
            type_name: T::TYPE_NAME,
            field: field.clone(),
        });
    }

    let id = map.get("id").ok_or(Error::MissingField {
        type_name: T::TYPE_NAME,
        field: "id",
    })?;
    let value: T = from_value(id)?;

    for (field, expected) in [("name", value.name()), ("label", value.label())] {
        match map.get(field) {
            Some(given) if given.as_str() != Some(expected) => {
                debug!("Rejected {} {field} override {given}", T::TYPE_NAME);
                return Err(Error::ImmutableField {
                    type_name: T::TYPE_NAME,
                    field,
                });
            }
            _ => {}
        }
    }

    trace!("Decoded {} id {}", T::TYPE_NAME, value.id());
    Ok(value)
}

/// Decodes a value from a JSON value holding its dict form.
pub(crate) fn decode<T: Catalogued>(value: &Value) -> Result<T> {
    match value {
        Value::Object(map) => from_map(map),
        _ => Err(invalid_type::<T>(value)),
    }
}

/// Parses a value from a name or a label.
pub(crate) fn parse<T: Catalogued>(s: &str) -> Result<T> {
    iter::<T>()
        .find(|value| value.name() == s || value.label() == s)
        .ok_or_else(|| invalid_value::<T>(s))
}

/// Iterates every value in ascending id order.
pub(crate) fn iter<T: Catalogued>() -> impl Iterator<Item = T> {
    T::CATALOG
        .iter()
        .zip(1u8..)
        .map(|(entry, id)| T::from_catalog(id, entry))
}

/// Enumerates the catalog for a parsed selector.
pub(crate) fn list<T: Catalogued>(selector: Selector) -> Listing<T> {
    match selector {
        Selector::Instances => Listing::Values(iter().collect()),
        Selector::Id => Listing::Ids(iter::<T>().map(|value| value.id()).collect()),
        Selector::Name => Listing::Names(T::CATALOG.iter().map(|entry| entry.name).collect()),
        Selector::Label => Listing::Labels(T::CATALOG.iter().map(|entry| entry.label).collect()),
    }
}

/// Enumerates the catalog for an option string.
pub(crate) fn all<T: Catalogued>(option: &str) -> Result<Listing<T>> {
    Selector::parse(option, T::SELECTOR)
        .map(list::<T>)
        .ok_or_else(|| invalid_value::<T>(option))
}

/// Enumerates the catalog for an arbitrary JSON option.
pub(crate) fn all_from_value<T: Catalogued>(option: &Value) -> Result<Listing<T>> {
    match option {
        Value::String(option) => all(option),
        _ => Err(invalid_type::<T>(option)),
    }
}

pub(crate) fn to_dict<T: Catalogued>(value: &T) -> Map<String, Value> {
    let mut map = Map::with_capacity(FIELDS.len());
    map.insert(FIELDS[0].to_owned(), Value::from(value.id()));
    map.insert(FIELDS[1].to_owned(), Value::from(value.name()));
    map.insert(FIELDS[2].to_owned(), Value::from(value.label()));
    map
}

pub(crate) fn serialize<T, S>(value: &T, serializer: S) -> core::result::Result<S::Ok, S::Error>
where
    T: Catalogued,
    S: Serializer,
{
    let mut state = serializer.serialize_struct(T::TYPE_NAME, FIELDS.len())?;
    state.serialize_field(FIELDS[0], &value.id())?;
    state.serialize_field(FIELDS[1], value.name())?;
    state.serialize_field(FIELDS[2], value.label())?;
    state.end()
}

/// Writes `Type(id=1, name='ace', label='A')`.
pub(crate) fn fmt_debug<T: Catalogued>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "{}(id={}, name='{}', label='{}')",
        T::TYPE_NAME,
        value.id(),
        value.name(),
        value.label()
    )
}
