// Unit tests for Foodtruck API

use foodtruck_api::core::{
    distance::planar_score,
    filters::{filter_trucks, matches_food_item, matches_status, TruckFilter},
    nearby::{nearest_trucks, NearbyQuery, StatusGate},
};
use foodtruck_api::models::{parse_optional_float, FoodTruck};
use serde_json::json;

fn create_truck(id: &str, applicant: &str, status: &str) -> FoodTruck {
    FoodTruck::new(id, applicant, status)
}

#[test]
fn test_planar_score_zero() {
    let score = planar_score(37.7901, -122.4013, 37.7901, -122.4013);
    assert_eq!(score, 0.0);
}

#[test]
fn test_planar_score_is_symmetric_in_latitude_delta() {
    let north = planar_score(37.78, -122.40, 37.79, -122.40);
    let south = planar_score(37.78, -122.40, 37.77, -122.40);
    assert!((north - south).abs() < 1e-12);
}

#[test]
fn test_planar_score_is_not_meters() {
    // About 1.1 km apart; the score is a tiny squared-degree value
    let score = planar_score(37.7901, -122.4013, 37.7800, -122.4000);
    assert!(score > 0.0 && score < 1.0);
}

#[test]
fn test_parse_optional_float_never_panics() {
    for raw in [json!(null), json!(""), json!("abc"), json!({}), json!(true), json!("1e400")] {
        assert_eq!(parse_optional_float(Some(&raw)), None, "input {:?}", raw);
    }
    assert_eq!(parse_optional_float(Some(&json!("-0.5"))), Some(-0.5));
}

#[test]
fn test_status_match_is_case_insensitive() {
    let truck = create_truck("1", "CART", "Approved");
    assert!(matches_status(&truck, "APPROVED"));
    assert!(!matches_status(&truck, "EXPIRED"));
}

#[test]
fn test_food_item_match_requires_value() {
    let mut truck = create_truck("1", "CART", "APPROVED");
    assert!(!matches_food_item(&truck, "taco"));

    truck.fooditems = Some("Burritos: TACOS: quesadillas".to_string());
    assert!(matches_food_item(&truck, "taco"));
}

#[test]
fn test_filter_applicant_position_and_case() {
    let trucks = vec![
        create_truck("1", "TOASTY TRUCK", "APPROVED"),
        create_truck("2", "The Toast Stand", "APPROVED"),
        create_truck("3", "COFFEE CART", "APPROVED"),
    ];

    let result = filter_trucks(&trucks, &TruckFilter::default().applicant("toast"));
    let ids: Vec<&str> = result.iter().map(|t| t.locationid.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_filter_status_exact() {
    let trucks = vec![
        create_truck("1", "A", "APPROVED"),
        create_truck("2", "B", "EXPIRED"),
        create_truck("3", "C", "APPROVED_PENDING"),
    ];

    let result = filter_trucks(&trucks, &TruckFilter::default().status("approved"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].locationid, "1");
}

#[test]
fn test_filter_empty_address_is_not_missing() {
    let mut with_empty = create_truck("1", "A", "APPROVED");
    with_empty.address = Some(String::new());
    let missing = create_truck("2", "B", "APPROVED");
    let trucks = vec![with_empty, missing];

    // Only an active filter excludes records; "" never matches a non-empty needle
    assert!(filter_trucks(&trucks, &TruckFilter::default().street("st")).is_empty());
    assert_eq!(filter_trucks(&trucks, &TruckFilter::default().street("")).len(), 2);
}

#[test]
fn test_nearby_status_gate_values() {
    let mut approved = create_truck("1", "A", "APPROVED");
    approved.latitude = Some(37.78);
    approved.longitude = Some(-122.40);
    let mut requested = create_truck("2", "B", "REQUESTED");
    requested.latitude = Some(37.78);
    requested.longitude = Some(-122.41);
    let trucks = vec![approved, requested];

    let query = NearbyQuery::new(37.78, -122.40);
    assert_eq!(nearest_trucks(&trucks, &query).len(), 1);

    let query = query.with_status(StatusGate::from_param(Some("All")));
    assert_eq!(nearest_trucks(&trucks, &query).len(), 2);

    let query = NearbyQuery::new(37.78, -122.40).with_status(StatusGate::from_param(Some("requested")));
    let result = nearest_trucks(&trucks, &query);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].truck.locationid, "2");
}
