//! Built-in radiologic classification systems, grouped by anatomical category.

mod abdominopelvic;
mod cardiothoracic;
mod head_neck;
mod musculoskeletal;
mod neuro;
mod rads;
mod vascular;

use super::catalog::{Catalog, CatalogError};
use super::domain::SystemId;
use super::evaluation::{ClassificationDefinition, DefinitionError, LookupTable, Rule};

pub const NEURO: &str = "NEURO";
pub const HEAD_AND_NECK: &str = "HEAD & NECK";
pub const CARDIOTHORACIC: &str = "CARDIOTHORACIC";
pub const ABDOMINOPELVIC: &str = "ABDOMINOPELVIC";
pub const MUSCULOSKELETAL: &str = "MUSCULOSKELETAL (MSK)";
pub const VASCULAR: &str = "INTERVENTIONAL RADIOLOGY/VASCULAR";
pub const RADS: &str = "-RADS SYSTEMS";

/// Organ-specific -RADS systems that are also listed under the -RADS menu.
const RADS_CROSS_LISTED: &[&str] = &["lung-rads", "li-rads", "pi-rads", "ti-rads", "o-rads"];

pub(super) fn register_all(catalog: &mut Catalog) -> Result<(), CatalogError> {
    let groups = [
        neuro::definitions()?,
        head_neck::definitions()?,
        cardiothoracic::definitions()?,
        abdominopelvic::definitions()?,
        musculoskeletal::definitions()?,
        vascular::definitions()?,
    ];

    for definition in groups.into_iter().flatten() {
        catalog.register(definition)?;
    }

    // menu order: BI-RADS, the organ systems, then NI-RADS
    catalog.register(rads::bi_rads()?)?;
    for id in RADS_CROSS_LISTED {
        catalog.link(RADS, &SystemId::from(*id))?;
    }
    catalog.register(rads::ni_rads()?)?;

    Ok(())
}

/// Single-choice system whose field options are exactly the table rows.
fn lookup_system(
    id: &str,
    category: &'static str,
    title: &'static str,
    description: &'static str,
    field_label: &'static str,
    table: LookupTable,
) -> Result<ClassificationDefinition, DefinitionError> {
    let field = table.field_schema(field_label);
    ClassificationDefinition::new(
        id,
        category,
        title,
        description,
        vec![field],
        Rule::Lookup(table),
    )
}
