use cwlogs_core::{
    DestinationModel, HandlerErrorCode, MetricFilterModel, MetricTransformation, ProgressEvent,
    ResourceHandlerRequest,
};
use serde_json::json;

#[test]
fn model_uses_schema_property_names() {
    let model: MetricFilterModel = serde_json::from_value(json!({
        "FilterName": "F1",
        "LogGroupName": "G1",
        "FilterPattern": "[ip, user]",
        "MetricTransformations": [
            {"MetricName": "Hits", "MetricNamespace": "App", "MetricValue": "1", "DefaultValue": 0.0}
        ]
    }))
    .expect("valid model");

    assert_eq!(model.filter_name.as_deref(), Some("F1"));
    let transformations = model.metric_transformations.expect("transformations");
    assert_eq!(
        transformations[0],
        MetricTransformation {
            metric_name: "Hits".into(),
            metric_namespace: "App".into(),
            metric_value: "1".into(),
            default_value: Some(0.0),
            unit: None,
            dimensions: None,
        }
    );
}

#[test]
fn absent_fields_are_not_serialized() {
    let model = DestinationModel {
        destination_name: Some("D1".into()),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&model).expect("serializes"),
        json!({"DestinationName": "D1"})
    );
}

#[test]
fn failed_event_carries_code_and_identifier() {
    let model = DestinationModel {
        destination_name: Some("D1".into()),
        ..Default::default()
    };
    let event: ProgressEvent<DestinationModel> = ProgressEvent::Failed {
        error_code: HandlerErrorCode::NotFound,
        message: "gone".into(),
        identifier: Some(model.primary_identifier()),
    };

    assert!(!event.is_success());
    assert_eq!(event.error_code(), Some(HandlerErrorCode::NotFound));
    let value = serde_json::to_value(&event).expect("serializes");
    assert_eq!(value["status"], "FAILED");
    assert_eq!(value["errorCode"], "NotFound");
    assert_eq!(value["identifier"]["/properties/DestinationName"], "D1");
}

#[test]
fn request_deserializes_from_host_payload() {
    let request: ResourceHandlerRequest<DestinationModel> = serde_json::from_value(json!({
        "desiredResourceState": {"DestinationName": "D1"},
        "logicalResourceIdentifier": "MyDestination",
        "clientRequestToken": "token-1"
    }))
    .expect("valid request");

    assert_eq!(request.client_request_token, "token-1");
    assert_eq!(request.logical_resource_identifier.as_deref(), Some("MyDestination"));
    assert!(request.next_token.is_none());
}

#[test]
fn list_event_uses_camel_case_fields() {
    let event: ProgressEvent<DestinationModel> = ProgressEvent::SuccessList {
        models: vec![],
        next_token: Some("t1".into()),
    };

    let value = serde_json::to_value(&event).expect("serializes");
    assert_eq!(value["status"], "SUCCESS_LIST");
    assert_eq!(value["nextToken"], "t1");
    assert!(value.get("next_token").is_none());
}
