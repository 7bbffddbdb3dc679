use super::*;
use crate::error::NameIssue;

#[test]
fn test_ordinals_follow_catalog_order() {
    let catalog = Catalog::new(["Expecting_an_identifier", "Missing_open_bracket"]).unwrap();

    let entries: Vec<(usize, &str)> = catalog
        .entries()
        .map(|(ordinal, marker)| (ordinal.value(), marker.name("None")))
        .collect();
    assert_eq!(
        entries,
        vec![
            (0, "None"),
            (1, "Expecting_an_identifier"),
            (2, "Missing_open_bracket"),
        ]
    );
    assert_eq!(catalog.ordinal_count(), 3);
}

#[test]
fn test_marker_mapping_is_total() {
    let catalog = Catalog::seephit();
    for value in 0..catalog.ordinal_count() {
        assert!(catalog.marker(Ordinal::new(value)).is_some());
    }
    assert!(catalog.marker(Ordinal::new(catalog.ordinal_count())).is_none());
    assert_eq!(catalog.marker(Ordinal::SENTINEL), Some(MarkerType::Sentinel));
    assert!(Ordinal::new(0).is_sentinel());
    assert!(!Ordinal::new(1).is_sentinel());
    assert_eq!(
        catalog.marker(Ordinal::new(1)),
        Some(MarkerType::Kind(&catalog.kinds()[0]))
    );
}

#[test]
fn test_ordinal_of() {
    let catalog = Catalog::new(["A", "B", "C"]).unwrap();
    assert_eq!(catalog.ordinal_of("C"), Some(Ordinal::new(3)));
    assert_eq!(catalog.ordinal_of("D"), None);
}

#[test]
fn test_duplicate_name_rejected() {
    let err = Catalog::new(["Foo", "Bar", "Foo"]).unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateName {
            name: "Foo".to_string(),
            first: 0,
            second: 2,
        }
    );
}

#[test]
fn test_invalid_name_rejected() {
    let err = Catalog::new(["Ok", ""]).unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidName {
            name: String::new(),
            position: 1,
            reason: NameIssue::Empty,
        }
    );

    let err = Catalog::new(["not valid"]).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidName {
            reason: NameIssue::BadCharacter(' '),
            ..
        }
    ));
}

#[test]
fn test_empty_catalog_has_only_sentinel() {
    let catalog = Catalog::new(Vec::<String>::new()).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog, Catalog::empty());
    let entries: Vec<_> = catalog.entries().collect();
    assert_eq!(entries, vec![(Ordinal::SENTINEL, MarkerType::Sentinel)]);
}

#[test]
fn test_seephit_catalog_is_valid() {
    let builtin = Catalog::seephit();
    let names: Vec<&str> = builtin.kinds().iter().map(|k| k.name()).collect();
    let rebuilt = Catalog::new(names).unwrap();
    assert_eq!(rebuilt, builtin);
    assert_eq!(builtin.len(), 18);
}

#[test]
fn test_slot_budget() {
    assert_eq!(
        SlotBudget::new(0),
        Err(CatalogError::InvalidBudget { slots: 0 })
    );
    let budget = SlotBudget::new(3).unwrap();
    assert_eq!(budget.get(), 3);
    assert_eq!(budget.slots().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(SlotBudget::default().get(), DEFAULT_SLOTS);
}
