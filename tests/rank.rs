//! Rank integration tests.

use std::collections::{HashMap, HashSet};

use serde_json::{Value, json};
use trumpy::{Error, ErrorKind, Listing, Rank, Selector};

const CATALOG: [(&str, &str); 13] = [
    ("ace", "A"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
    ("jack", "J"),
    ("queen", "Q"),
    ("king", "K"),
];

fn rank(id: i64) -> Rank {
    Rank::new(id).unwrap()
}

#[test]
fn constructor_accepts_every_catalog_id() {
    for (id, (name, label)) in (1..=13).zip(CATALOG) {
        let rank = rank(id);
        assert_eq!(i64::from(rank.id()), id);
        assert_eq!(rank.name(), name);
        assert_eq!(rank.label(), label);
    }
}

#[test]
fn constructor_rejects_out_of_range_ids() {
    for id in [0, 14, -13, -1, 256, i64::MAX, i64::MIN] {
        match Rank::new(id).unwrap_err() {
            Error::InvalidValue { type_name, value } => {
                assert_eq!(type_name, "Rank");
                assert_eq!(value, id.to_string());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn json_ids_distinguish_type_from_value_errors() {
    let cases = [
        (json!("tree"), "string"),
        (json!("Q"), "string"),
        (json!("11"), "string"),
        (json!(6.0), "float"),
        (json!(null), "null"),
        (json!(true), "bool"),
        (json!([1]), "array"),
    ];
    for (input, kind) in cases {
        match Rank::try_from(&input).unwrap_err() {
            Error::InvalidType { type_name, found } => {
                assert_eq!(type_name, "Rank");
                assert_eq!(found, kind);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    assert_eq!(
        Rank::try_from(&json!(14)).unwrap_err().kind(),
        ErrorKind::InvalidValue
    );
    assert_eq!(
        Rank::try_from(&json!(u64::MAX)).unwrap_err().kind(),
        ErrorKind::InvalidValue
    );
    assert_eq!(Rank::try_from(&json!(10)).unwrap(), Rank::TEN);
}

#[test]
fn try_from_integers() {
    assert_eq!(Rank::try_from(4_u8).unwrap(), Rank::FOUR);
    assert_eq!(Rank::try_from(13_i64).unwrap(), Rank::KING);
    assert_eq!(Rank::try_from(0_u8).unwrap_err().kind(), ErrorKind::InvalidValue);
}

#[test]
fn display_is_name() {
    assert_eq!(rank(1).to_string(), "ace");
    assert_eq!(rank(10).to_string(), "ten");
    assert_eq!(rank(11).to_string(), "jack");
    assert_eq!(rank(13).to_string(), "king");
}

#[test]
fn debug_format() {
    assert_eq!(format!("{:?}", rank(1)), "Rank(id=1, name='ace', label='A')");
    assert_eq!(
        format!("{:?}", rank(8)),
        "Rank(id=8, name='eight', label='8')"
    );
    assert_eq!(
        format!("{:?}", rank(12)),
        "Rank(id=12, name='queen', label='Q')"
    );
    assert_eq!(
        format!("{:?}", rank(13)),
        "Rank(id=13, name='king', label='K')"
    );
}

#[test]
fn equality_by_id() {
    let target = rank(13);
    assert_eq!(target, target);
    assert_eq!(target, rank(13));
    assert_eq!(rank(13), target);
    assert_ne!(rank(5), rank(6));
    assert_eq!(rank(5), Rank::FIVE);
}

#[test]
fn hash_by_id() {
    let mut names = HashMap::new();
    for rank in Rank::iter() {
        names.insert(rank, rank.name());
    }
    for (id, (name, _)) in (1..=13).zip(CATALOG) {
        assert_eq!(names[&rank(id)], name);
    }

    let set: HashSet<Rank> = [rank(2), rank(2), rank(3)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn ordering_follows_id() {
    assert!(Rank::ACE < Rank::TWO);
    assert!(Rank::KING > Rank::QUEEN);
    assert_eq!(Rank::iter().max(), Some(Rank::KING));
}

#[test]
fn all_lists_in_id_order() {
    let ranks: Vec<Rank> = (1..=13).map(rank).collect();
    assert_eq!(Rank::all("rank").unwrap(), Listing::Values(ranks.clone()));
    assert_eq!(Rank::all("r").unwrap(), Listing::Values(ranks));

    let ids: Vec<u8> = (1..=13).collect();
    assert_eq!(Rank::all("id").unwrap(), Listing::Ids(ids.clone()));
    assert_eq!(Rank::all("i").unwrap(), Listing::Ids(ids));

    let names: Vec<&str> = CATALOG.iter().map(|(name, _)| *name).collect();
    assert_eq!(Rank::all("name").unwrap(), Listing::Names(names.clone()));
    assert_eq!(Rank::all("n").unwrap(), Listing::Names(names));

    let labels: Vec<&str> = CATALOG.iter().map(|(_, label)| *label).collect();
    assert_eq!(Rank::all("label").unwrap(), Listing::Labels(labels.clone()));
    assert_eq!(Rank::all("l").unwrap(), Listing::Labels(labels));

    assert_eq!(Rank::select(Selector::default()).len(), Rank::COUNT);
}

#[test]
fn all_errors() {
    match Rank::all("suit").unwrap_err() {
        Error::InvalidValue { value, .. } => assert_eq!(value, "suit"),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(Rank::all("ID").unwrap_err().kind(), ErrorKind::InvalidValue);
    assert_eq!(
        Rank::all_from_value(&json!(1)).unwrap_err().kind(),
        ErrorKind::InvalidType
    );
    assert_eq!(
        Rank::all_from_value(&json!("value")).unwrap_err().kind(),
        ErrorKind::InvalidValue
    );
    assert_eq!(Rank::all_from_value(&json!("i")).unwrap().len(), 13);
}

#[test]
fn all_returns_fresh_listings() {
    let mut first = Rank::all("id").unwrap().into_ids().unwrap();
    first.clear();
    assert_eq!(Rank::all("id").unwrap().into_ids().unwrap().len(), 13);
}

#[test]
fn dict_and_json() {
    let dict = rank(12).to_dict();
    let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
    assert_eq!(keys, ["id", "name", "label"]);
    assert_eq!(Value::Object(dict), json!({"id": 12, "name": "queen", "label": "Q"}));

    assert_eq!(
        rank(10).to_json().unwrap(),
        r#"{"id": 10, "name": "ten", "label": "10"}"#
    );
}

#[test]
fn json_round_trip() {
    for rank in Rank::iter() {
        let text = rank.to_json().unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, Value::Object(rank.to_dict()));
        assert_eq!(Rank::from_json(&text).unwrap(), rank);
        assert_eq!(serde_json::from_str::<Rank>(&text).unwrap(), rank);
    }
}

#[test]
fn decode_rejects_changed_or_extra_fields() {
    let err = Rank::from_json(r#"{"id": 1, "name": "four"}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::ImmutableField {
            type_name: "Rank",
            field: "name"
        }
    ));

    let err = Rank::from_json(r#"{"id": 1, "label": "10"}"#).unwrap_err();
    assert!(matches!(err, Error::ImmutableField { field: "label", .. }));

    match Rank::from_json(r#"{"id": 1, "score": 4}"#).unwrap_err() {
        Error::UnknownField { type_name, field } => {
            assert_eq!(type_name, "Rank");
            assert_eq!(field, "score");
        }
        other => panic!("unexpected error {other:?}"),
    }

    assert_eq!(
        Rank::from_json(r#"{"name": "ace"}"#).unwrap_err().kind(),
        ErrorKind::MissingField
    );
    assert_eq!(
        Rank::from_json(r#"{"id": "1"}"#).unwrap_err().kind(),
        ErrorKind::InvalidType
    );
    assert_eq!(
        Rank::from_json("[1]").unwrap_err().kind(),
        ErrorKind::InvalidType
    );
    assert_eq!(Rank::from_json("{").unwrap_err().kind(), ErrorKind::Json);
    assert_eq!(Rank::from_json(r#"{"id": 7}"#).unwrap(), Rank::SEVEN);
}

#[test]
fn parse_name_or_label() {
    assert_eq!("queen".parse::<Rank>().unwrap(), Rank::QUEEN);
    assert_eq!("Q".parse::<Rank>().unwrap(), Rank::QUEEN);
    assert_eq!("10".parse::<Rank>().unwrap(), Rank::TEN);
    assert_eq!(
        "queens".parse::<Rank>().unwrap_err().kind(),
        ErrorKind::InvalidValue
    );
}
