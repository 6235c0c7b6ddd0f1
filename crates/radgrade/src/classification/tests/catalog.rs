use super::common::*;

use crate::classification::domain::{Assessment, FieldSchema, SystemId};
use crate::classification::evaluation::{FieldValues, LookupTable, Rule, ValidationError};
use crate::classification::{
    Catalog, CatalogError, ClassificationDefinition, DefinitionError, ABDOMINOPELVIC,
    CARDIOTHORACIC, HEAD_AND_NECK, MUSCULOSKELETAL, NEURO, RADS, VASCULAR,
};

fn always_normal(_: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    Ok(Assessment::new("Normal", "No abnormality.", "None."))
}

fn toy(id: &str) -> ClassificationDefinition {
    ClassificationDefinition::new(
        id,
        "TEST",
        "Toy",
        "Single flag system.",
        vec![FieldSchema::flag("present", "Finding present", false)],
        Rule::Computed(always_normal),
    )
    .expect("toy definition is valid")
}

#[test]
fn categories_follow_menu_order() {
    assert_eq!(
        catalog().categories(),
        vec![
            NEURO,
            HEAD_AND_NECK,
            CARDIOTHORACIC,
            ABDOMINOPELVIC,
            MUSCULOSKELETAL,
            VASCULAR,
            RADS
        ]
    );
}

#[test]
fn every_system_is_registered_once() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 46);
    assert_eq!(catalog.iter().count(), catalog.len());

    let listed: usize = catalog
        .categories()
        .into_iter()
        .map(|category| catalog.list(category).len())
        .sum();
    assert_eq!(listed, catalog.len() + 5);
}

#[test]
fn rads_menu_cross_lists_organ_systems() {
    let ids: Vec<String> = catalog()
        .systems_in(RADS)
        .into_iter()
        .map(|summary| summary.id.to_string())
        .collect();

    assert_eq!(
        ids,
        vec!["bi-rads", "lung-rads", "li-rads", "pi-rads", "ti-rads", "o-rads", "ni-rads"]
    );

    let lung_rads = catalog()
        .lookup(&SystemId::from("lung-rads"))
        .expect("registered");
    assert_eq!(lung_rads.category(), CARDIOTHORACIC);
}

#[test]
fn neuro_menu_lists_titles_in_registration_order() {
    let systems = catalog().systems_in(NEURO);
    assert_eq!(systems.len(), 9);
    assert_eq!(systems[0].id, SystemId::from("hunt-hess"));
}

#[test]
fn unknown_category_lists_nothing() {
    assert!(catalog().list("DERMATOLOGY").is_empty());
    assert!(catalog().systems_in("DERMATOLOGY").is_empty());
}

#[test]
fn unknown_system_is_not_found() {
    let id = SystemId::from("nope");
    assert_eq!(catalog().lookup(&id).err(), Some(CatalogError::NotFound(id.clone())));
    assert!(catalog().fields_of(&id).is_err());
}

#[test]
fn fields_are_reported_in_declaration_order() {
    let names: Vec<&str> = catalog()
        .fields_of(&SystemId::from("tlics"))
        .expect("registered")
        .iter()
        .map(|field| field.name)
        .collect();
    assert_eq!(
        names,
        vec!["morphology", "posterior_ligamentous_complex", "neurologic_status"]
    );
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut catalog = Catalog::new();
    catalog.register(toy("toy")).expect("first registration");

    let error = catalog.register(toy("toy")).expect_err("duplicate id");
    assert_eq!(error, CatalogError::DuplicateId(SystemId::from("toy")));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn linking_requires_a_registered_system() {
    let mut catalog = Catalog::new();
    let error = catalog
        .link("EXTRA", &SystemId::from("toy"))
        .expect_err("nothing registered");
    assert_eq!(error, CatalogError::NotFound(SystemId::from("toy")));

    catalog.register(toy("toy")).expect("registered");
    catalog.link("EXTRA", &SystemId::from("toy")).expect("linked");
    assert_eq!(catalog.categories(), vec!["TEST", "EXTRA"]);
    assert!(catalog.link("EXTRA", &SystemId::from("toy")).is_err());
}

#[test]
fn duplicate_field_names_are_rejected() {
    let error = ClassificationDefinition::new(
        "twice",
        "TEST",
        "Twice",
        "",
        vec![
            FieldSchema::flag("present", "Present", false),
            FieldSchema::flag("present", "Present again", true),
        ],
        Rule::Computed(always_normal),
    )
    .expect_err("duplicate field");
    assert!(matches!(error, DefinitionError::DuplicateField { .. }));
}

#[test]
fn defaults_outside_domain_are_rejected() {
    let error = ClassificationDefinition::new(
        "bad-default",
        "TEST",
        "Bad default",
        "",
        vec![FieldSchema::integer("count", "Count", 0, 5, 9)],
        Rule::Computed(always_normal),
    )
    .expect_err("default out of range");
    assert!(matches!(error, DefinitionError::DefaultOutsideDomain { .. }));
}

#[test]
fn lookup_tables_must_cover_their_field_exactly() {
    let table = LookupTable::new("grade", &[("A", "A", "", ""), ("B", "B", "", "")]);

    let incomplete = ClassificationDefinition::new(
        "incomplete",
        "TEST",
        "Incomplete",
        "",
        vec![FieldSchema::first_of("grade", "Grade", &["A", "B", "C"])],
        Rule::Lookup(table.clone()),
    )
    .expect_err("C has no row");
    assert_eq!(
        incomplete,
        DefinitionError::LookupIncomplete {
            system: "incomplete".to_string(),
            field: "grade".to_string(),
            option: "C".to_string(),
        }
    );

    let extra = ClassificationDefinition::new(
        "extra",
        "TEST",
        "Extra",
        "",
        vec![FieldSchema::first_of("grade", "Grade", &["A"])],
        Rule::Lookup(table.clone()),
    )
    .expect_err("B is not an option");
    assert!(matches!(extra, DefinitionError::LookupUnknownOption { .. }));

    let missing = ClassificationDefinition::new(
        "missing",
        "TEST",
        "Missing",
        "",
        vec![FieldSchema::flag("grade", "Grade", false)],
        Rule::Lookup(table),
    )
    .expect_err("grade is not an enum");
    assert!(matches!(missing, DefinitionError::LookupFieldMissing { .. }));
}

#[test]
fn global_catalog_matches_standard_build() {
    let standard = Catalog::standard().expect("built-in catalog builds");
    assert_eq!(standard.len(), Catalog::global().len());
    assert_eq!(standard.menu(), Catalog::global().menu());
}
