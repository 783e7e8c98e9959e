//! Metadata assembly: item map, dimension-items map, org unit hierarchies

use std::collections::BTreeMap;

use crate::grid::{Grid, Metadata, MetadataItem};
use crate::model::{parent_graph_map, parent_name_graph_map, OptionItem, OrgUnit, User};
use crate::params::{DimensionParam, NormalizedParams, QueryItem};

/// Build the metadata block for a delivered grid
///
/// Option metadata is restricted to the options actually observed in the
/// grid when rows exist; hierarchy maps cover only org units referenced
/// by at least one row, rooted at the requesting user's org units.
/// Returns `None` when the caller skipped metadata.
pub fn assemble_metadata(
    grid: &Grid,
    params: &NormalizedParams,
    user: Option<&User>,
) -> Option<Metadata> {
    if params.skip_meta {
        return None;
    }

    let mut items: BTreeMap<String, MetadataItem> = BTreeMap::new();
    let mut dimensions: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let details = params.include_metadata_details;

    for identifier in params.all_identifiers() {
        let key = identifier.key();
        match identifier.dimension() {
            DimensionParam::Static { filters, .. } => {
                // Static filters are period-relative expressions the
                // query builder evaluates; they pass through unresolved
                dimensions.insert(key, filters.clone());
            }
            DimensionParam::Dimensional(object) => {
                items.insert(
                    object.uid.clone(),
                    MetadataItem::new(
                        object.display_name.clone(),
                        details.then(|| object.uid.clone()),
                        None,
                    ),
                );
                for item in &object.items {
                    items.insert(
                        item.uid().to_string(),
                        MetadataItem::new(item.name(), details.then(|| item.uid().to_string()), None),
                    );
                }
                dimensions.insert(key, object.item_ids());
            }
            DimensionParam::Item(item) => {
                add_item_metadata(&mut items, &mut dimensions, grid, item, key, details);
            }
        }
    }

    let (org_unit_hierarchy, org_unit_name_hierarchy) = build_hierarchies(grid, params, user);

    Some(Metadata {
        items,
        dimensions,
        org_unit_hierarchy,
        org_unit_name_hierarchy,
    })
}

fn add_item_metadata(
    items: &mut BTreeMap<String, MetadataItem>,
    dimensions: &mut BTreeMap<String, Vec<String>>,
    grid: &Grid,
    item: &QueryItem,
    key: String,
    details: bool,
) {
    let descriptor = MetadataItem::new(
        item.name.clone(),
        details.then(|| item.uid.clone()),
        None,
    );
    items.insert(item.metadata_key(), descriptor.clone());
    // Kept for clients addressing items by bare uid
    items.insert(item.uid.clone(), descriptor);

    if item.has_option_set() {
        let options = restricted_options(grid, item);
        for option in &options {
            items.insert(
                option.uid.clone(),
                MetadataItem::new(
                    option.name.clone(),
                    details.then(|| option.uid.clone()),
                    Some(option.code.clone()),
                ),
            );
        }
        dimensions.insert(key, options.iter().map(|o| o.uid.clone()).collect());
    } else if let Some(legend_set) = &item.legend_set {
        for legend in &legend_set.legends {
            items.insert(
                legend.uid.clone(),
                MetadataItem::new(
                    legend.name.clone(),
                    details.then(|| legend.uid.clone()),
                    legend.code.clone(),
                ),
            );
        }
        dimensions.insert(key, item.legend_uids_or_all());
    } else if item.value_type.is_organisation_unit() {
        dimensions.insert(key, item.filter_values());
    } else {
        dimensions.insert(key, item.filters_as_strings());
    }
}

/// Options for one item's metadata: observed in the grid when rows
/// exist, otherwise the configured filter set
fn restricted_options<'a>(grid: &Grid, item: &'a QueryItem) -> Vec<&'a OptionItem> {
    let Some(option_set) = &item.option_set else {
        return vec![];
    };

    if !grid.rows.is_empty() {
        let column = grid
            .column_index(&item.metadata_key())
            .or_else(|| grid.column_index(&item.uid));
        return match column {
            Some(index) => option_set.options_by_code(&grid.column_values(index)),
            None => vec![],
        };
    }

    let values = item.filter_values();
    if values.is_empty() {
        option_set.options.iter().collect()
    } else {
        option_set.options_by_code(&values)
    }
}

fn build_hierarchies(
    grid: &Grid,
    params: &NormalizedParams,
    user: Option<&User>,
) -> (
    Option<BTreeMap<String, String>>,
    Option<BTreeMap<String, String>>,
) {
    if !params.hierarchy_meta && !params.show_hierarchy {
        return (None, None);
    }

    let active: Vec<&OrgUnit> = params
        .all_identifiers()
        .filter_map(|id| id.dimension().as_dimensional_object())
        .filter(|object| object.is_org_unit())
        .flat_map(|object| object.items.iter())
        .filter_map(|item| item.as_org_unit())
        .filter(|unit| grid.contains_value(&unit.uid))
        .collect();

    let roots: Vec<&OrgUnit> = user
        .map(|u| u.org_units.iter().collect())
        .unwrap_or_default();

    let hierarchy = params
        .hierarchy_meta
        .then(|| parent_graph_map(active.iter().copied(), &roots));
    let name_hierarchy = params
        .show_hierarchy
        .then(|| parent_name_graph_map(active.iter().copied(), &roots));

    (hierarchy, name_hierarchy)
}
