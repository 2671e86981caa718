use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::body::to_bytes;
use energuide_api::configuration::Graphql;
use energuide_api::configuration::Server;
use energuide_api::schema::build_schema;
use energuide_api::server::router;
use energuide_api::store::InMemoryStore;
use http::Method;
use http::Request;
use http::StatusCode;
use http::header::CONTENT_TYPE;
use pretty_assertions::assert_eq;
use serde_json::Value;
use serde_json::json;
use tower::ServiceExt;

fn app() -> Router {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dwellings.json");
    let store = InMemoryStore::from_json_file(&fixtures).unwrap();
    router(
        build_schema(Arc::new(store), &Graphql::default()),
        &Server::default(),
    )
}

async fn post(body: Value) -> Value {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/graphql")
                .header(CONTENT_TYPE, "application/json; charset=utf-8")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn query(query: &str) -> Value {
    post(json!({ "query": query })).await
}

fn first_message(response: &Value) -> &str {
    response["errors"][0]["message"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn it_retrieves_evaluations_given_an_account_and_a_postal_code() {
    let response = query(
        r#"{
          evaluations: evaluationsFor(account: 189250 postalCode: "C1A 1N1") {
            yearBuilt
          }
        }"#,
    )
    .await;
    assert_eq!(response["data"]["evaluations"]["yearBuilt"], json!(1900));
}

#[tokio::test]
async fn it_merges_the_evaluations_of_a_dwelling() {
    let response = query(
        r#"{
          evaluationsFor(account: 456012 postalCode: "M8H 2W9") {
            evalId
            floorArea
            eghrating
            ugrrating
            clientCity
          }
        }"#,
    )
    .await;
    assert_eq!(
        response["data"]["evaluationsFor"],
        json!({
            "evalId": 1402871,
            "floorArea": 210.4,
            "eghrating": null,
            "ugrrating": 78,
            "clientCity": "Toronto"
        })
    );
}

#[tokio::test]
async fn an_unknown_dwelling_has_no_evaluations() {
    let response = query(
        r#"{ evaluationsFor(account: 1 postalCode: "C1A 1N1") { yearBuilt } }"#,
    )
    .await;
    assert_eq!(response, json!({ "data": { "evaluationsFor": null } }));
}

#[tokio::test]
async fn it_returns_the_dwellings_in_a_forward_sortation_area() {
    let response = query(
        r#"{
          dwellings: evaluationsInFSA(forwardSortationArea: "C1A") {
            yearBuilt
          }
        }"#,
    )
    .await;
    assert_eq!(response["data"]["dwellings"], json!([{ "yearBuilt": 1900 }]));
}

#[tokio::test]
async fn a_greater_than_filter_filters_out_dwellings() {
    let response = query(
        r#"{
          dwellings: evaluationsInFSA(
            forwardSortationArea: "C1A"
            filter: {field: yearBuilt gt: "1900"}
          ) {
            yearBuilt
          }
        }"#,
    )
    .await;
    assert_eq!(response["data"]["dwellings"], json!([]));
}

#[tokio::test]
async fn comparator_values_are_compared_as_integers() {
    let response = query(
        r#"{
          dwellings: evaluationsInFSA(
            forwardSortationArea: "M8H"
            filter: {field: yearBuilt lte: " 1979 "}
          ) {
            evalId
          }
        }"#,
    )
    .await;
    assert_eq!(
        response["data"]["dwellings"],
        json!([{ "evalId": 1002331 }, { "evalId": 1402871 }])
    );
}

#[tokio::test]
async fn it_complains_about_multiple_comparators() {
    let response = query(
        r#"{
          evaluationsInFSA(
            forwardSortationArea: "M8H"
            filter: {field: yearBuilt gt: "1979" lt: "1979"}
          ) {
            yearBuilt
          }
        }"#,
    )
    .await;
    assert_eq!(
        first_message(&response),
        "You can only use gt,lt,eq,gte,lte one at a time"
    );
    assert_eq!(
        response["errors"][0]["extensions"]["code"],
        json!("VALIDATION_ERROR")
    );
}

#[tokio::test]
async fn it_rejects_non_numeric_comparator_values() {
    let response = query(
        r#"{
          evaluationsInFSA(forwardSortationArea: "M8H" filter: {field: yearBuilt eq: "nineteen"}) {
            yearBuilt
          }
        }"#,
    )
    .await;
    assert_eq!(
        response["errors"][0]["extensions"]["code"],
        json!("VALIDATION_ERROR")
    );
}

#[tokio::test]
async fn it_rejects_unknown_filter_fields() {
    let response = query(
        r#"{
          evaluationsInFSA(forwardSortationArea: "M8H" filter: {field: YEARBUILT gt: "1900"}) {
            yearBuilt
          }
        }"#,
    )
    .await;
    assert!(response["errors"].is_array());
    assert!(response["data"].is_null());
}

#[tokio::test]
async fn it_finds_dwellings_within_a_polygon() {
    let response = query(
        r#"{
          evaluations(withinPolygon: [
            {lat: 46.5, lng: -63.5}
            {lat: 46.5, lng: -62.9}
            {lat: 46.0, lng: -62.9}
            {lat: 46.0, lng: -63.5}
          ]) {
            mailingAddressPostalCode
          }
        }"#,
    )
    .await;
    assert_eq!(
        response["data"]["evaluations"],
        json!([{ "mailingAddressPostalCode": "C1A 1N1" }])
    );
}

#[tokio::test]
async fn a_polygon_needs_three_points() {
    let response = query(
        r#"{
          evaluations(withinPolygon: [{lat: 46.5, lng: -63.5} {lat: 46.0, lng: -62.9}]) {
            yearBuilt
          }
        }"#,
    )
    .await;
    assert_eq!(
        response["errors"][0]["extensions"]["code"],
        json!("VALIDATION_ERROR")
    );
}

#[tokio::test]
async fn postal_codes_are_validated_the_same_way_as_literals_and_variables() {
    let literal = query(
        r#"{ evaluationsFor(account: 189250 postalCode: "D1A 1N1") { yearBuilt } }"#,
    )
    .await;
    let variable = post(json!({
        "query": r#"query ($postalCode: PostalCode!) {
          evaluationsFor(account: 189250 postalCode: $postalCode) { yearBuilt }
        }"#,
        "variables": { "postalCode": "D1A 1N1" }
    }))
    .await;

    assert!(first_message(&literal).contains("Not a valid Postal Code"));
    assert!(first_message(&variable).contains("Not a valid Postal Code"));
}

#[tokio::test]
async fn forward_sortation_areas_are_validated() {
    let response = query(r#"{ evaluationsInFSA(forwardSortationArea: "C1") { yearBuilt } }"#).await;
    assert!(first_message(&response).contains("Not a valid Forward Sortation Area"));
}

#[tokio::test]
async fn forward_sortation_areas_are_validated_the_same_way_as_literals_and_variables() {
    let literal = query(r#"{ evaluationsInFSA(forwardSortationArea: "D1A") { yearBuilt } }"#).await;
    let variable = post(json!({
        "query": r#"query ($fsa: ForwardSortationArea!) {
          evaluationsInFSA(forwardSortationArea: $fsa) { yearBuilt }
        }"#,
        "variables": { "fsa": "D1A" }
    }))
    .await;

    assert!(first_message(&literal).contains("Not a valid Forward Sortation Area"));
    assert!(first_message(&variable).contains("Not a valid Forward Sortation Area"));
    assert!(literal["data"].is_null());
    assert!(variable["data"].is_null());
}

#[tokio::test]
async fn queries_are_idempotent() {
    let request = r#"{ evaluationsInFSA(forwardSortationArea: "M8H") { evalId yearBuilt } }"#;
    let first = query(request).await;
    let second = query(request).await;
    assert_eq!(first, second);
}
