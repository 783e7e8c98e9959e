//! Shared test fixtures: in-memory reference catalogs and fake lookups

#![allow(dead_code)]

use std::collections::HashMap;

use dimnorm::model::{
    DisplayProperty, IdScheme, OrgUnit, OrgUnitAncestor, Program, ProgramStage,
    TrackedEntityAttribute,
};
use dimnorm::params::{DimensionType, DimensionalItem, DimensionalObject, QueryItem};
use dimnorm::query::{DimensionLookup, ItemLookup, ProgramCatalog};

/// Program catalog over a fixed program list
pub struct FakeCatalog {
    pub programs: Vec<Program>,
}

impl ProgramCatalog for FakeCatalog {
    fn programs_by_uid(&self, uids: &[String]) -> Vec<Program> {
        self.programs
            .iter()
            .filter(|p| uids.contains(&p.uid))
            .cloned()
            .collect()
    }
}

/// Dimension lookup over a fixed uid → object map
pub struct FakeDimensions {
    pub objects: HashMap<String, DimensionalObject>,
    pub org_units: Vec<OrgUnit>,
}

impl FakeDimensions {
    pub fn empty() -> Self {
        FakeDimensions {
            objects: HashMap::new(),
            org_units: vec![],
        }
    }

    pub fn with_object(mut self, uid: &str, object: DimensionalObject) -> Self {
        self.objects.insert(uid.to_string(), object);
        self
    }
}

impl DimensionLookup for FakeDimensions {
    fn user_org_units(&self, _explicit_uid: Option<&str>) -> Vec<OrgUnit> {
        self.org_units.clone()
    }

    fn dimensional_object(
        &self,
        uid: &str,
        _items: &[String],
        _relative_period_date: Option<&str>,
        _user_org_units: &[OrgUnit],
        _display_property: DisplayProperty,
        _id_scheme: IdScheme,
    ) -> Option<DimensionalObject> {
        self.objects.get(uid).cloned()
    }
}

/// Item lookup over a fixed uid → item map; scoped lookups carry the
/// program onto the returned item
pub struct FakeItems {
    pub items: HashMap<String, QueryItem>,
}

impl FakeItems {
    pub fn empty() -> Self {
        FakeItems {
            items: HashMap::new(),
        }
    }

    pub fn with_item(mut self, item: QueryItem) -> Self {
        self.items.insert(item.uid.clone(), item);
        self
    }
}

impl ItemLookup for FakeItems {
    fn query_item(&self, uid: &str, program: Option<&Program>) -> Option<QueryItem> {
        self.items.get(uid).cloned().map(|mut item| {
            item.program = program.cloned();
            item
        })
    }
}

pub fn program(uid: &str, name: &str) -> Program {
    Program::new(uid, name)
}

pub fn program_with_stage(uid: &str, name: &str, stage_uid: &str) -> Program {
    let mut program = Program::new(uid, name);
    program.stages.push(ProgramStage::new(stage_uid, "stage"));
    program
}

pub fn attribute(uid: &str, name: &str) -> TrackedEntityAttribute {
    TrackedEntityAttribute::new(uid, name)
}

pub fn org_unit(uid: &str, name: &str, ancestors: &[(&str, &str)]) -> OrgUnit {
    OrgUnit::new(uid, name).with_ancestors(
        ancestors
            .iter()
            .map(|(uid, name)| OrgUnitAncestor {
                uid: uid.to_string(),
                name: name.to_string(),
            })
            .collect(),
    )
}

pub fn org_unit_object(uid: &str, units: Vec<OrgUnit>) -> DimensionalObject {
    DimensionalObject {
        uid: uid.to_string(),
        dimension_type: DimensionType::OrgUnit,
        display_name: "Organisation unit".to_string(),
        items: units.into_iter().map(DimensionalItem::OrgUnit).collect(),
    }
}

pub fn period_object(uid: &str, periods: &[(&str, &str)]) -> DimensionalObject {
    DimensionalObject {
        uid: uid.to_string(),
        dimension_type: DimensionType::Period,
        display_name: "Period".to_string(),
        items: periods
            .iter()
            .map(|(uid, name)| DimensionalItem::Period {
                uid: uid.to_string(),
                name: name.to_string(),
                local_id: None,
            })
            .collect(),
    }
}

pub fn data_object(uid: &str, display_name: &str) -> DimensionalObject {
    DimensionalObject {
        uid: uid.to_string(),
        dimension_type: DimensionType::Data,
        display_name: display_name.to_string(),
        items: vec![],
    }
}
