use crate::error::QueryError;
use crate::grammar::RawFilter;
use crate::model::{DisplayProperty, IdScheme, OrgUnit};
use crate::params::{
    DimensionIdentifier, DimensionParam, QueryFilter, QueryItem, QueryItemKind, StaticDimension,
    StringUid,
};
use crate::query::{DimensionLookup, ItemLookup};

/// Request-level context threaded through classification
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'a> {
    pub relative_period_date: Option<&'a str>,
    pub user_org_units: &'a [OrgUnit],
    pub display_property: DisplayProperty,
    pub id_scheme: IdScheme,
}

/// Classify a resolved identifier into its dimension payload
///
/// `group_id` is the fresh id generated for the originating request
/// token; static and period dimensions replace it with their canonical
/// qualified key so repeated occurrences merge into one AND-term.
pub fn classify<D, I>(
    dimensions: &D,
    items: &I,
    identifier: DimensionIdentifier<StringUid>,
    filters: &[RawFilter],
    ctx: ClassifyContext<'_>,
    group_id: &str,
) -> Result<DimensionIdentifier<DimensionParam>, QueryError>
where
    D: DimensionLookup + ?Sized,
    I: ItemLookup + ?Sized,
{
    let uid = identifier.dimension().as_str().to_string();
    let filter_strings: Vec<String> = filters.iter().map(RawFilter::render).collect();

    // 1. Static keyword
    if let Ok(dimension) = uid.parse::<StaticDimension>() {
        let canonical = format!("{}{}", identifier.scope_prefix(), dimension.name());
        return Ok(identifier
            .map(|_| DimensionParam::Static {
                dimension,
                filters: filter_strings,
            })
            .with_group_id(canonical));
    }

    // 2. Dynamic dimensional object
    if let Some(object) = dimensions.dimensional_object(
        &uid,
        &filter_strings,
        ctx.relative_period_date,
        ctx.user_org_units,
        ctx.display_property,
        ctx.id_scheme,
    ) {
        let group = if object.is_period() {
            format!("{}{}", identifier.scope_prefix(), object.uid)
        } else {
            group_id.to_string()
        };
        return Ok(identifier
            .map(|_| DimensionParam::Dimensional(object))
            .with_group_id(group));
    }

    // 3. Query item
    let mut item = resolve_item(items, &identifier, &uid)?;
    item.filters = decode_filters(filters)?;
    if item.stage.is_none() {
        item.stage = identifier
            .program_stage()
            .map(|stage| stage.element().clone());
    }

    Ok(identifier
        .map(|_| DimensionParam::Item(item))
        .with_group_id(group_id))
}

fn resolve_item<I>(
    items: &I,
    identifier: &DimensionIdentifier<StringUid>,
    uid: &str,
) -> Result<QueryItem, QueryError>
where
    I: ItemLookup + ?Sized,
{
    let Some(program) = identifier.program() else {
        // Unscoped: only a tracked-entity attribute fits here
        return items
            .query_item(uid, None)
            .ok_or_else(|| QueryError::NotFullyQualified(uid.to_string()));
    };

    let item = items
        .query_item(uid, Some(program.element()))
        .ok_or_else(|| QueryError::ItemNotFound(uid.to_string()))?;

    match item.kind {
        // Attributes are addressed bare; a program prefix is an error
        QueryItemKind::Attribute => Err(QueryError::PrefixedAttribute(uid.to_string())),
        QueryItemKind::ProgramIndicator => Err(QueryError::UnsupportedItemType {
            uid: uid.to_string(),
            kind: item.kind.to_string(),
        }),
        QueryItemKind::DataElement => Ok(item),
    }
}

fn decode_filters(filters: &[RawFilter]) -> Result<Vec<QueryFilter>, QueryError> {
    filters
        .iter()
        .map(|raw| {
            let operator = raw
                .operator
                .parse()
                .map_err(|_| QueryError::InvalidOperator(raw.operator.clone()))?;
            Ok(QueryFilter::new(
                operator,
                raw.value.clone().unwrap_or_default(),
            ))
        })
        .collect()
}
