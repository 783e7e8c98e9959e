//! End-to-end request normalization scenarios

mod common;

use common::{
    attribute, data_object, org_unit_object, program, program_with_stage, FakeCatalog,
    FakeDimensions, FakeItems,
};
use dimnorm::params::{QueryItemKind, StaticDimension};
use dimnorm::query::AnalyticsRequest;
use dimnorm::resolver::ReferenceError;
use dimnorm::{
    NormalizeError, Normalizer, PagingSettings, QueryError, QueryItem,
};

fn two_program_catalog() -> FakeCatalog {
    FakeCatalog {
        programs: vec![
            program_with_stage("lxAQ7Zs9VYR", "prg-1", "jdRD35YwbRH"),
            program("ur1Edk5Oe2n", "prg-2"),
        ],
    }
}

fn request_with_dimension(dimension: &str) -> AnalyticsRequest {
    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    request.dimension = vec![dimension.to_string()];
    request
}

#[test]
fn test_normalize_stage_scoped_dimensional_object() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty().with_object("yLIPuJHRgey", data_object("yLIPuJHRgey", "Data"));
    let items = FakeItems::empty();
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let request = request_with_dimension("lxAQ7Zs9VYR[1].jdRD35YwbRH[2].yLIPuJHRgey:EQ:john");
    let params = normalizer.normalize(&request).unwrap();

    assert_eq!(params.programs.len(), 2);
    assert_eq!(params.dimensions.len(), 1);
    let identifier = &params.dimensions[0];
    assert!(identifier.has_program());
    assert!(identifier.has_program_stage());
    assert_eq!(identifier.program().unwrap().offset(), 1);
    assert_eq!(identifier.program_stage().unwrap().offset(), 2);
    assert!(identifier.dimension().is_dimensional_object());
    assert_eq!(identifier.key(), "lxAQ7Zs9VYR[1].jdRD35YwbRH[2].yLIPuJHRgey");
}

#[test]
fn test_normalize_filter_group() {
    let catalog = two_program_catalog();
    let dimensions =
        FakeDimensions::empty().with_object("OU2aJ7Zs9ou", org_unit_object("OU2aJ7Zs9ou", vec![]));
    let items = FakeItems::empty();
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string()];
    request.filter = vec!["OU2aJ7Zs9ou:PEZNsGbZaVJ".to_string()];
    let params = normalizer.normalize(&request).unwrap();

    assert!(params.dimensions.is_empty());
    assert_eq!(params.filters.len(), 1);
    assert!(params.filters[0].dimension().is_dimensional_object());
}

#[test]
fn test_normalize_rejects_unknown_programs() {
    let catalog = FakeCatalog {
        programs: vec![program("lxAQ7Zs9VYR", "prg-1")],
    };
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty();
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    let err = normalizer.normalize(&request).unwrap_err();

    assert_eq!(
        err,
        NormalizeError::Reference(ReferenceError::ProgramsNotFound {
            uids: vec!["ur1Edk5Oe2n".to_string()],
        })
    );
    assert_eq!(
        err.to_string(),
        "Program is specified but does not exist: `[ur1Edk5Oe2n]`"
    );
}

#[test]
fn test_normalize_or_expansion_shares_one_group() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty()
        .with_item(QueryItem::new("aaaaaaaaaaa", "First name", QueryItemKind::Attribute))
        .with_item(QueryItem::new("bbbbbbbbbbb", "Last name", QueryItemKind::Attribute));
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let request = request_with_dimension("aaaaaaaaaaa:EQ:john_OR_bbbbbbbbbbb:EQ:doe");
    let params = normalizer.normalize(&request).unwrap();

    assert_eq!(params.dimensions.len(), 2);
    assert_eq!(
        params.dimensions[0].group_id(),
        params.dimensions[1].group_id()
    );

    // Each sibling classifies exactly as the standalone token would
    let first = normalizer
        .normalize(&request_with_dimension("aaaaaaaaaaa:EQ:john"))
        .unwrap();
    assert_eq!(first.dimensions[0].dimension(), params.dimensions[0].dimension());
    let second = normalizer
        .normalize(&request_with_dimension("bbbbbbbbbbb:EQ:doe"))
        .unwrap();
    assert_eq!(second.dimensions[0].dimension(), params.dimensions[1].dimension());
}

#[test]
fn test_normalize_distinct_tokens_get_distinct_groups() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty()
        .with_item(QueryItem::new("aaaaaaaaaaa", "First name", QueryItemKind::Attribute))
        .with_item(QueryItem::new("bbbbbbbbbbb", "Last name", QueryItemKind::Attribute));
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    request.dimension = vec!["aaaaaaaaaaa:EQ:john".to_string(), "bbbbbbbbbbb:EQ:doe".to_string()];
    let params = normalizer.normalize(&request).unwrap();

    assert_eq!(params.dimensions.len(), 2);
    assert_ne!(
        params.dimensions[0].group_id(),
        params.dimensions[1].group_id()
    );
}

#[test]
fn test_normalize_repeated_static_dimensions_merge() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty();
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    request.dimension = vec![
        "eventDate:LAST_YEAR".to_string(),
        "eventDate:THIS_YEAR".to_string(),
    ];
    let params = normalizer.normalize(&request).unwrap();

    // Canonical group id: both occurrences land in the same AND-term
    assert_eq!(params.dimensions.len(), 2);
    assert_eq!(params.dimensions[0].group_id(), "EVENT_DATE");
    assert_eq!(params.dimensions[1].group_id(), "EVENT_DATE");
}

#[test]
fn test_normalize_unscoped_attribute() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty().with_item(QueryItem::new(
        "abcde123411",
        "First name",
        QueryItemKind::Attribute,
    ));
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let params = normalizer
        .normalize(&request_with_dimension("abcde123411:EQ:john"))
        .unwrap();

    let item = params.dimensions[0].dimension().as_query_item().unwrap();
    assert_eq!(item.kind, QueryItemKind::Attribute);
    assert_eq!(item.filters_as_strings(), vec!["EQ:john".to_string()]);

    // The same attribute with a stage prefix is rejected
    let err = normalizer
        .normalize(&request_with_dimension(
            "lxAQ7Zs9VYR.jdRD35YwbRH.abcde123411:EQ:john",
        ))
        .unwrap_err();
    assert_eq!(
        err,
        NormalizeError::Query(QueryError::PrefixedAttribute("abcde123411".to_string()))
    );
}

#[test]
fn test_normalize_unknown_dimension_is_not_fully_qualified() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty();
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let err = normalizer
        .normalize(&request_with_dimension("yLIPuJHRgey:EQ:john"))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Dimension is not fully qualified: `yLIPuJHRgey`"
    );
}

#[test]
fn test_normalize_appends_program_attributes() {
    let mut program_one = program_with_stage("lxAQ7Zs9VYR", "prg-1", "jdRD35YwbRH");
    program_one.attributes.push(attribute("attr00000001", "First name"));
    let catalog = FakeCatalog {
        programs: vec![program_one],
    };
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty().with_item(QueryItem::new(
        "attr00000001",
        "First name",
        QueryItemKind::Attribute,
    ));
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string()];
    let params = normalizer.normalize(&request).unwrap();

    // No explicit dimension syntax, yet the attribute is a dimension
    assert_eq!(params.dimensions.len(), 1);
    let item = params.dimensions[0].dimension().as_query_item().unwrap();
    assert_eq!(item.uid, "attr00000001");
    assert_eq!(item.kind, QueryItemKind::Attribute);
}

#[test]
fn test_normalize_sorting_keeps_request_order() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty()
        .with_item(QueryItem::new("aaaaaaaaaaa", "First name", QueryItemKind::Attribute))
        .with_item(QueryItem::new("bbbbbbbbbbb", "Last name", QueryItemKind::Attribute));
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    request.sort = vec!["bbbbbbbbbbb:desc".to_string(), "aaaaaaaaaaa:asc".to_string()];
    let params = normalizer.normalize(&request).unwrap();

    assert_eq!(params.sorting.len(), 2);
    assert_eq!(params.sorting[0].index, 0);
    assert_eq!(params.sorting[0].identifier.key(), "bbbbbbbbbbb");
    assert_eq!(params.sorting[0].direction, dimnorm::SortDirection::Desc);
    assert_eq!(params.sorting[1].index, 1);
    assert_eq!(params.sorting[1].identifier.key(), "aaaaaaaaaaa");
    assert_eq!(params.sorting[1].direction, dimnorm::SortDirection::Asc);
}

#[test]
fn test_normalize_rejects_bad_sort_direction() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty().with_item(QueryItem::new(
        "aaaaaaaaaaa",
        "First name",
        QueryItemKind::Attribute,
    ));
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    request.sort = vec!["aaaaaaaaaaa:upwards".to_string()];
    let err = normalizer.normalize(&request).unwrap_err();

    assert_eq!(
        err,
        NormalizeError::Query(QueryError::InvalidSortDirection("upwards".to_string()))
    );
}

#[test]
fn test_normalize_headers_are_a_set() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty().with_item(QueryItem::new(
        "aaaaaaaaaaa",
        "First name",
        QueryItemKind::Attribute,
    ));
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    request.headers = vec!["aaaaaaaaaaa".to_string(), "aaaaaaaaaaa".to_string()];
    let params = normalizer.normalize(&request).unwrap();

    assert_eq!(params.headers.len(), 1);
}

#[test]
fn test_normalize_header_without_backing_dimension() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty();
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    request.headers = vec!["lxAQ7Zs9VYR.jdRD35YwbRH.OU".to_string()];
    let err = normalizer.normalize(&request).unwrap_err();

    assert_eq!(
        err,
        NormalizeError::Query(QueryError::HeaderWithoutDimension {
            stage: "jdRD35YwbRH".to_string(),
            dimension: "OU".to_string(),
        })
    );
}

#[test]
fn test_normalize_header_with_backing_dimension() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty();
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    request.dimension = vec!["lxAQ7Zs9VYR.jdRD35YwbRH.ou:PEZNsGbZaVJ".to_string()];
    request.headers = vec!["lxAQ7Zs9VYR.jdRD35YwbRH.OU".to_string()];
    let params = normalizer.normalize(&request).unwrap();

    assert_eq!(params.headers.len(), 1);
    assert_eq!(
        params.headers[0].dimension().as_static(),
        Some(StaticDimension::Ou)
    );
}

#[test]
fn test_normalize_stage_invariant_holds() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty().with_object("yLIPuJHRgey", data_object("yLIPuJHRgey", "Data"));
    let items = FakeItems::empty().with_item(QueryItem::new(
        "aaaaaaaaaaa",
        "First name",
        QueryItemKind::Attribute,
    ));
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));

    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    request.dimension = vec![
        "lxAQ7Zs9VYR.jdRD35YwbRH.yLIPuJHRgey".to_string(),
        "aaaaaaaaaaa".to_string(),
        "eventDate:LAST_YEAR".to_string(),
    ];
    let params = normalizer.normalize(&request).unwrap();

    for identifier in params.all_identifiers() {
        assert!(!identifier.has_program_stage() || identifier.has_program());
    }
}

#[test]
fn test_normalize_paging_clamp() {
    let catalog = two_program_catalog();
    let dimensions = FakeDimensions::empty();
    let items = FakeItems::empty();

    // Explicit size above the ceiling is clamped
    let normalizer = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(50));
    let mut request = AnalyticsRequest::new();
    request.program = vec!["lxAQ7Zs9VYR".to_string(), "ur1Edk5Oe2n".to_string()];
    request.page_size = Some(100);
    let params = normalizer.normalize(&request).unwrap();
    assert_eq!(params.paging.page_size, 50);

    // Unpaged requests are still bounded by the ceiling
    request.paging = false;
    request.page_size = None;
    let params = normalizer.normalize(&request).unwrap();
    assert_eq!(params.paging.page_size, 50);
    assert!(!params.paging.unlimited);

    // No ceiling configured: unpaged means everything
    let unlimited = Normalizer::new(&catalog, &dimensions, &items, PagingSettings::new(0));
    let params = unlimited.normalize(&request).unwrap();
    assert!(params.paging.unlimited);
}
