//! The classified dimension payload and its three variants

use std::fmt;
use std::str::FromStr;

use crate::model::{LegendSet, OptionSet, OrgUnit, Program, ProgramStage, ValueType};

/// Multi-value separator inside a single filter value, e.g. `IN:a;b;c`
pub const OPTION_SEP: &str = ";";

/// Fixed, code-level dimensions not backed by metadata lookup
///
/// Matched case-insensitively against the bare dimension segment before
/// any other classification is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticDimension {
    Ou,
    EventDate,
    ScheduledDate,
    EnrollmentDate,
    IncidentDate,
    EventStatus,
    ProgramStatus,
    Created,
    LastUpdated,
}

impl StaticDimension {
    pub fn name(&self) -> &'static str {
        match self {
            StaticDimension::Ou => "OU",
            StaticDimension::EventDate => "EVENT_DATE",
            StaticDimension::ScheduledDate => "SCHEDULED_DATE",
            StaticDimension::EnrollmentDate => "ENROLLMENT_DATE",
            StaticDimension::IncidentDate => "INCIDENT_DATE",
            StaticDimension::EventStatus => "EVENT_STATUS",
            StaticDimension::ProgramStatus => "PROGRAM_STATUS",
            StaticDimension::Created => "CREATED",
            StaticDimension::LastUpdated => "LAST_UPDATED",
        }
    }

    /// Whether this dimension exists at the event level; only these take
    /// part in the header/dimension consistency check
    pub fn is_event_level(&self) -> bool {
        matches!(
            self,
            StaticDimension::Ou
                | StaticDimension::EventDate
                | StaticDimension::ScheduledDate
                | StaticDimension::EventStatus
        )
    }
}

impl fmt::Display for StaticDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StaticDimension {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OU" => Ok(StaticDimension::Ou),
            "EVENT_DATE" => Ok(StaticDimension::EventDate),
            "SCHEDULED_DATE" => Ok(StaticDimension::ScheduledDate),
            "ENROLLMENT_DATE" => Ok(StaticDimension::EnrollmentDate),
            "INCIDENT_DATE" => Ok(StaticDimension::IncidentDate),
            "EVENT_STATUS" => Ok(StaticDimension::EventStatus),
            "PROGRAM_STATUS" => Ok(StaticDimension::ProgramStatus),
            "CREATED" => Ok(StaticDimension::Created),
            "LAST_UPDATED" => Ok(StaticDimension::LastUpdated),
            _ => Err(()),
        }
    }
}

/// Type of a dynamically resolved dimensional object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionType {
    Data,
    Period,
    OrgUnit,
    Category,
    DataElementGroupSet,
}

/// One concrete item of a dimensional object
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionalItem {
    Plain {
        uid: String,
        name: String,
        code: Option<String>,
    },
    /// Periods may carry a calendar-local identifier when a non-ISO
    /// calendar is active
    Period {
        uid: String,
        name: String,
        local_id: Option<String>,
    },
    OrgUnit(OrgUnit),
}

impl DimensionalItem {
    pub fn uid(&self) -> &str {
        match self {
            DimensionalItem::Plain { uid, .. } => uid,
            DimensionalItem::Period { uid, .. } => uid,
            DimensionalItem::OrgUnit(unit) => &unit.uid,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DimensionalItem::Plain { name, .. } => name,
            DimensionalItem::Period { name, .. } => name,
            DimensionalItem::OrgUnit(unit) => &unit.name,
        }
    }

    /// Identifier rendered into the dimension-items map; periods prefer
    /// their calendar-local id
    pub fn item_id(&self) -> &str {
        match self {
            DimensionalItem::Period {
                local_id: Some(local),
                ..
            } => local,
            other => other.uid(),
        }
    }

    pub fn as_org_unit(&self) -> Option<&OrgUnit> {
        match self {
            DimensionalItem::OrgUnit(unit) => Some(unit),
            _ => None,
        }
    }
}

/// A dimension resolved to a concrete metadata object with items
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionalObject {
    pub uid: String,
    pub dimension_type: DimensionType,
    pub display_name: String,
    pub items: Vec<DimensionalItem>,
}

impl DimensionalObject {
    pub fn is_period(&self) -> bool {
        self.dimension_type == DimensionType::Period
    }

    pub fn is_org_unit(&self) -> bool {
        self.dimension_type == DimensionType::OrgUnit
    }

    /// Ordered item identifiers for the dimension-items map
    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|i| i.item_id().to_string()).collect()
    }
}

/// Operator of a decoded query item filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
    ILike,
    In,
    /// Null-value check; carries no meaningful value field
    Nv,
}

impl QueryOperator {
    pub fn name(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "EQ",
            QueryOperator::Ne => "NE",
            QueryOperator::Gt => "GT",
            QueryOperator::Ge => "GE",
            QueryOperator::Lt => "LT",
            QueryOperator::Le => "LE",
            QueryOperator::Like => "LIKE",
            QueryOperator::ILike => "ILIKE",
            QueryOperator::In => "IN",
            QueryOperator::Nv => "NV",
        }
    }
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for QueryOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EQ" => Ok(QueryOperator::Eq),
            "NE" | "!EQ" => Ok(QueryOperator::Ne),
            "GT" => Ok(QueryOperator::Gt),
            "GE" => Ok(QueryOperator::Ge),
            "LT" => Ok(QueryOperator::Lt),
            "LE" => Ok(QueryOperator::Le),
            "LIKE" => Ok(QueryOperator::Like),
            "ILIKE" => Ok(QueryOperator::ILike),
            "IN" => Ok(QueryOperator::In),
            "NV" => Ok(QueryOperator::Nv),
            _ => Err(()),
        }
    }
}

/// A decoded `operator:value` filter pair on a query item
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    pub operator: QueryOperator,
    pub value: String,
}

impl QueryFilter {
    pub fn new(operator: QueryOperator, value: impl Into<String>) -> Self {
        QueryFilter {
            operator,
            value: value.into(),
        }
    }

    /// Rendered `OP:value` form carried on the payload
    pub fn as_string(&self) -> String {
        format!("{}:{}", self.operator, self.value)
    }

    /// Individual values of a multi-value filter (`IN:a;b` yields a, b)
    pub fn filter_items(&self) -> Vec<String> {
        self.value
            .split(OPTION_SEP)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Kind of entity backing a query item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryItemKind {
    DataElement,
    Attribute,
    ProgramIndicator,
}

impl fmt::Display for QueryItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryItemKind::DataElement => write!(f, "DATA_ELEMENT"),
            QueryItemKind::Attribute => write!(f, "ATTRIBUTE"),
            QueryItemKind::ProgramIndicator => write!(f, "PROGRAM_INDICATOR"),
        }
    }
}

/// A dimension backed by a data element or tracked-entity attribute,
/// optionally filtered by operator/value pairs
#[derive(Debug, Clone, PartialEq)]
pub struct QueryItem {
    pub uid: String,
    pub name: String,
    pub kind: QueryItemKind,
    pub value_type: ValueType,
    pub program: Option<Program>,
    pub stage: Option<ProgramStage>,
    pub option_set: Option<OptionSet>,
    pub legend_set: Option<LegendSet>,
    pub filters: Vec<QueryFilter>,
}

impl QueryItem {
    pub fn new(uid: impl Into<String>, name: impl Into<String>, kind: QueryItemKind) -> Self {
        QueryItem {
            uid: uid.into(),
            name: name.into(),
            kind,
            value_type: ValueType::Text,
            program: None,
            stage: None,
            option_set: None,
            legend_set: None,
            filters: vec![],
        }
    }

    pub fn has_stage(&self) -> bool {
        self.stage.is_some()
    }

    pub fn has_option_set(&self) -> bool {
        self.option_set.is_some()
    }

    pub fn has_legend_set(&self) -> bool {
        self.legend_set.is_some()
    }

    /// Metadata key, stage-prefixed when the item is stage-scoped
    pub fn metadata_key(&self) -> String {
        match &self.stage {
            Some(stage) => format!("{}.{}", stage.uid, self.uid),
            None => self.uid.clone(),
        }
    }

    /// Filters rendered as `OP:value` strings
    pub fn filters_as_strings(&self) -> Vec<String> {
        self.filters.iter().map(QueryFilter::as_string).collect()
    }

    /// Distinct values referenced across all filters
    pub fn filter_values(&self) -> Vec<String> {
        let mut values = vec![];
        for filter in &self.filters {
            for item in filter.filter_items() {
                if !values.contains(&item) {
                    values.push(item);
                }
            }
        }
        values
    }

    /// Option uids selected by the filters, or the full option set when
    /// no filter narrows it
    pub fn option_uids_or_all(&self) -> Vec<String> {
        let Some(option_set) = &self.option_set else {
            return vec![];
        };
        let values = self.filter_values();
        if values.is_empty() {
            return option_set.option_uids();
        }
        option_set
            .options_by_code(&values)
            .into_iter()
            .map(|o| o.uid.clone())
            .collect()
    }

    /// Legend uids selected by the filters, or the full legend set
    pub fn legend_uids_or_all(&self) -> Vec<String> {
        let Some(legend_set) = &self.legend_set else {
            return vec![];
        };
        let values = self.filter_values();
        if values.is_empty() {
            return legend_set.legend_uids();
        }
        legend_set
            .legends
            .iter()
            .filter(|l| values.iter().any(|v| v == &l.uid))
            .map(|l| l.uid.clone())
            .collect()
    }
}

/// The classified payload of a dimension identifier
///
/// Exactly one variant applies to any classified dimension; the three
/// predicates below are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionParam {
    /// Code-level dimension; filters stay unresolved (period-relative
    /// expressions are evaluated by the query builder)
    Static {
        dimension: StaticDimension,
        filters: Vec<String>,
    },
    Dimensional(DimensionalObject),
    Item(QueryItem),
}

impl DimensionParam {
    pub fn is_static_dimension(&self) -> bool {
        matches!(self, DimensionParam::Static { .. })
    }

    pub fn is_dimensional_object(&self) -> bool {
        matches!(self, DimensionParam::Dimensional(_))
    }

    pub fn is_query_item(&self) -> bool {
        matches!(self, DimensionParam::Item(_))
    }

    pub fn as_static(&self) -> Option<StaticDimension> {
        match self {
            DimensionParam::Static { dimension, .. } => Some(*dimension),
            _ => None,
        }
    }

    pub fn as_dimensional_object(&self) -> Option<&DimensionalObject> {
        match self {
            DimensionParam::Dimensional(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_query_item(&self) -> Option<&QueryItem> {
        match self {
            DimensionParam::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Unqualified dimension key of this payload
    pub fn dimension_key(&self) -> &str {
        match self {
            DimensionParam::Static { dimension, .. } => dimension.name(),
            DimensionParam::Dimensional(object) => &object.uid,
            DimensionParam::Item(item) => &item.uid,
        }
    }
}

impl super::identifier::DimensionIdentifier<DimensionParam> {
    /// Fully qualified dimension key, e.g. `progUid[1].stageUid.dimUid`
    pub fn key(&self) -> String {
        format!("{}{}", self.scope_prefix(), self.dimension().dimension_key())
    }
}
