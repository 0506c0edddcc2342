use crate::models::{
    AuthResponse, DatasetDetail, DatasetList, DatasetSummary, TypeDistribution, UserProfile,
};
use crate::tests::bob;

use serde_json::json;

#[test]
fn given_login_shape_when_deserialize_auth_response_then_nested_user() {
    let response: AuthResponse = serde_json::from_value(json!({
        "token": "abc",
        "user": { "id": 1, "username": "bob" }
    }))
    .unwrap();

    assert_eq!(response.token, "abc");
    assert_eq!(response.user.id, 1);
    assert_eq!(response.user.username, "bob");
    assert!(response.user.email.is_none());
}

#[test]
fn given_register_shape_when_deserialize_auth_response_then_flattened_user() {
    let response: AuthResponse = serde_json::from_value(json!({
        "token": "def",
        "id": 7,
        "username": "alice",
        "email": "alice@example.com",
        "first_name": "Alice",
        "last_name": "Liddell"
    }))
    .unwrap();

    assert_eq!(response.token, "def");
    assert_eq!(response.user.id, 7);
    assert_eq!(response.user.email.as_deref(), Some("alice@example.com"));
    assert_eq!(response.user.last_name.as_deref(), Some("Liddell"));
}

#[test]
fn given_response_without_token_when_deserialize_then_error() {
    let result = serde_json::from_value::<AuthResponse>(json!({
        "user": { "id": 1, "username": "bob" }
    }));
    assert!(result.is_err());
}

#[test]
fn test_display_name() {
    assert_eq!(bob().display_name(), "Bob Builder");

    let bare = UserProfile {
        id: 2,
        username: "carol".into(),
        email: None,
        first_name: Some(String::new()),
        last_name: None,
    };
    assert_eq!(bare.display_name(), "carol");
}

#[test]
fn given_decimal_strings_when_deserialize_dataset_then_parsed_as_numbers() {
    let detail: DatasetDetail = serde_json::from_value(json!({
        "id": 3,
        "filename": "pumps.csv",
        "upload_date": "2024-05-01T10:00:00Z",
        "row_count": 2,
        "file_size": 120,
        "is_active": true,
        "equipment": [
            {
                "id": 10,
                "equipment_name": "Pump-1",
                "equipment_type": "Pump",
                "flowrate": "120.50",
                "pressure": 5.2,
                "temperature": null
            }
        ]
    }))
    .unwrap();

    assert_eq!(detail.dataset.id, 3);
    assert_eq!(detail.equipment.len(), 1);
    assert_eq!(detail.equipment[0].flowrate, Some(120.5));
    assert_eq!(detail.equipment[0].pressure, Some(5.2));
    assert_eq!(detail.equipment[0].temperature, None);
}

#[test]
fn given_invalid_decimal_string_when_deserialize_then_error() {
    let result = serde_json::from_value::<DatasetDetail>(json!({
        "id": 3,
        "filename": "pumps.csv",
        "upload_date": "2024-05-01T10:00:00Z",
        "equipment": [
            { "id": 10, "equipment_name": "Pump-1", "equipment_type": "Pump", "flowrate": "fast" }
        ]
    }));
    assert!(result.is_err());
}

#[test]
fn given_list_response_when_deserialize_then_defaults_applied() {
    let list: DatasetList = serde_json::from_value(json!({
        "count": 1,
        "results": [
            { "id": 1, "filename": "a.csv", "upload_date": "2024-05-01T10:00:00Z" }
        ]
    }))
    .unwrap();

    assert_eq!(list.count, 1);
    assert!(list.results[0].is_active);
    assert_eq!(list.results[0].row_count, None);
}

#[test]
fn given_summary_response_when_deserialize_then_statistics_and_types() {
    let summary: DatasetSummary = serde_json::from_value(json!({
        "dataset_id": 4,
        "filename": "plant.csv",
        "upload_date": "2024-05-01T10:00:00Z",
        "statistics": {
            "total_count": 15,
            "averages": { "flowrate": 119.8, "pressure": 6.1, "temperature": 117.47 },
            "ranges": {
                "flowrate": { "min": 66.0, "max": 210.0 },
                "pressure": { "min": null, "max": 8.2 },
                "temperature": { "min": 95.0, "max": 135.0 }
            }
        },
        "type_distribution": [
            { "equipment_type": "Pump", "count": 4, "percentage": "26.67",
              "avg_flowrate": 130.0, "avg_pressure": null, "avg_temperature": 110.0 }
        ]
    }))
    .unwrap();

    assert_eq!(summary.statistics.total_count, 15);
    assert_eq!(summary.statistics.averages.pressure, Some(6.1));
    assert_eq!(summary.statistics.ranges.pressure.min, None);
    assert_eq!(summary.statistics.ranges.flowrate.max, Some(210.0));
    assert_eq!(summary.type_distribution[0].percentage, 26.67);
    assert_eq!(summary.type_distribution[0].avg_pressure, None);
}

#[test]
fn given_type_distribution_when_deserialize_then_types() {
    let dist: TypeDistribution = serde_json::from_value(json!({
        "dataset_id": 4,
        "types": [
            { "equipment_type": "Valve", "count": 3, "percentage": 20.0 }
        ]
    }))
    .unwrap();

    assert_eq!(dist.types[0].equipment_type, "Valve");
    assert_eq!(dist.types[0].percentage, 20.0);
}

#[test]
fn test_credentials_debug_redacts_password() {
    let creds = crate::models::Credentials::new("bob", "secret123");
    let debug = format!("{creds:?}");
    assert!(debug.contains("bob"));
    assert!(!debug.contains("secret123"));
}
