use crate::schemas::ApiDoc;
use utoipa::openapi::{schema::Schema, PathItemType, RefOr};
use utoipa::OpenApi;

fn object_properties(name: &str) -> Vec<String> {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.expect("components are generated");
    match components.schemas.get(name) {
        Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
        other => panic!("{} should be an object schema, got {:?}", name, other),
    }
}

#[test]
fn test_openapi_schema_generation() {
    let openapi = ApiDoc::openapi();

    let components = openapi.components.as_ref().unwrap();
    for name in [
        "ErrorResponse",
        "HealthResponse",
        "MessageResponse",
        "CategoryPayload",
        "TransactionPayload",
        "CategoryDto",
        "TransactionDto",
        "MonthlyData",
        "DashboardSummary",
        "TransactionType",
    ] {
        assert!(components.schemas.contains_key(name), "missing schema {}", name);
    }

    assert!(serde_json::to_string(&openapi).is_ok());
}

#[test]
fn test_error_response_schema_structure() {
    let properties = object_properties("ErrorResponse");
    for field in ["error", "code", "success"] {
        assert!(properties.iter().any(|p| p == field), "missing {}", field);
    }
}

#[test]
fn test_payloads_expose_type_field() {
    for name in ["CategoryPayload", "TransactionPayload", "CategoryDto", "TransactionDto"] {
        let properties = object_properties(name);
        assert!(properties.iter().any(|p| p == "type"), "{} lacks `type`", name);
        assert!(!properties.iter().any(|p| p == "kind"), "{} leaks `kind`", name);
    }
}

#[test]
fn test_openapi_paths_cover_every_route() {
    let openapi = ApiDoc::openapi();
    let paths = &openapi.paths.paths;

    let expected = [
        ("/health", PathItemType::Get),
        ("/api/", PathItemType::Get),
        ("/api/categories", PathItemType::Get),
        ("/api/categories", PathItemType::Post),
        ("/api/categories/{category_id}", PathItemType::Get),
        ("/api/categories/{category_id}", PathItemType::Put),
        ("/api/categories/{category_id}", PathItemType::Delete),
        ("/api/transactions", PathItemType::Get),
        ("/api/transactions", PathItemType::Post),
        ("/api/transactions/{transaction_id}", PathItemType::Get),
        ("/api/transactions/{transaction_id}", PathItemType::Put),
        ("/api/transactions/{transaction_id}", PathItemType::Delete),
        ("/api/transactions/monthly", PathItemType::Get),
        ("/api/dashboard", PathItemType::Get),
    ];

    for (path, method) in expected {
        let item = paths
            .get(path)
            .unwrap_or_else(|| panic!("missing path {}", path));
        assert!(
            item.operations.contains_key(&method),
            "missing {:?} {}",
            method,
            path
        );
    }
}

#[test]
fn test_all_error_responses_reference_correct_schema() {
    let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

    assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
    assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
    assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
}
