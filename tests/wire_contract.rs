use std::collections::BTreeMap;

use serde_json::json;
use statuspage_models::component::{Component, ComponentGroupRequest, EditComponentGroup};
use statuspage_models::incident::{EditIncident, Incident, PatchIncident};
use statuspage_models::metric::Metric;
use statuspage_models::page_access::PageAccessUser;
use statuspage_models::subscriber::Subscriber;
use statuspage_models::user::User;
use statuspage_models::{decode, encode, ComponentStatus, Field, SchemaError};

#[test]
fn component_scenario_decodes_sparse_payload() {
    let component: Component =
        decode(br#"{"status":"major_outage","id":"abc123","name":"API"}"#).unwrap();
    assert_eq!(component.status, Some(ComponentStatus::MajorOutage));
    assert_eq!(component.id.as_deref(), Some("abc123"));
    assert_eq!(component.name.as_deref(), Some("API"));
    assert_eq!(
        component,
        Component {
            id: component.id.clone(),
            name: component.name.clone(),
            status: component.status,
            ..Component::default()
        }
    );
}

#[test]
fn bogus_component_status_is_an_unknown_token() {
    #[derive(serde::Deserialize)]
    struct StatusOnly {
        #[allow(dead_code)]
        status: ComponentStatus,
    }

    match decode::<StatusOnly>(br#"{"status":"bogus"}"#) {
        Err(SchemaError::UnknownEnumToken { token }) => assert_eq!(token, "bogus"),
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("bogus accepted"),
    }
    assert!(matches!(
        decode::<Component>(br#"{"status":"bogus"}"#),
        Err(SchemaError::UnknownEnumToken { .. })
    ));
}

#[test]
fn patch_incident_scenario() {
    let mut components = BTreeMap::new();
    components.insert("comp1".to_string(), ComponentStatus::MajorOutage);
    let patch = PatchIncident::from(EditIncident {
        components: components.into(),
        ..EditIncident::default()
    });

    let bytes = encode(&patch).unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        r#"{"incident":{"components":{"comp1":"major_outage"}}}"#
    );
}

#[test]
fn reminder_intervals_round_trip_verbatim() {
    let incident: Incident = decode(br#"{"reminder_intervals":"4"}"#).unwrap();
    assert_eq!(incident.reminder_intervals.as_deref(), Some("4"));
    assert_eq!(
        String::from_utf8(encode(&incident).unwrap()).unwrap(),
        r#"{"reminder_intervals":"4"}"#
    );
}

#[test]
fn clearing_differs_from_leaving_untouched() {
    let group = EditComponentGroup::new("Backend", vec!["c1".into()]);
    let cleared = ComponentGroupRequest {
        description: Field::Null,
        component_group: group.clone(),
    };
    let untouched = ComponentGroupRequest {
        description: Field::Missing,
        component_group: group,
    };

    let cleared_wire = encode(&cleared).unwrap();
    let untouched_wire = encode(&untouched).unwrap();
    assert_ne!(cleared_wire, untouched_wire);

    assert_eq!(decode::<ComponentGroupRequest>(&cleared_wire).unwrap(), cleared);
    assert_eq!(decode::<ComponentGroupRequest>(&untouched_wire).unwrap(), untouched);
}

#[test]
fn empty_records_round_trip_as_empty_objects() {
    assert_eq!(encode(&Component::default()).unwrap(), b"{}");
    assert_eq!(decode::<Component>(b"{}").unwrap(), Component::default());
    assert_eq!(decode::<Incident>(b"{}").unwrap(), Incident::default());
    assert_eq!(decode::<Metric>(b"{}").unwrap(), Metric::default());
    assert_eq!(decode::<Subscriber>(b"{}").unwrap(), Subscriber::default());
    assert_eq!(decode::<PageAccessUser>(b"{}").unwrap(), PageAccessUser::default());
    assert_eq!(decode::<User>(b"{}").unwrap(), User::default());
}

#[test]
fn fully_populated_records_round_trip() {
    let metric = json!({
        "id": "m1",
        "metrics_provider_id": "p1",
        "metric_identifier": "api.latency",
        "name": "API latency",
        "display": true,
        "tooltip_description": "p95 latency",
        "backfilled": false,
        "y_axis_min": 0.0,
        "y_axis_max": 250.5,
        "y_axis_hidden": false,
        "suffix": "ms",
        "decimal_places": 0,
        "most_recent_data_at": "2024-04-01T00:00:00+00:00",
        "last_fetched_at": "2024-04-01T00:05:00+00:00",
        "backfill_percentage": 100,
        "reference_name": "Latency",
        "transform": "response_time",
        "created_at": "2024-01-01T00:00:00-05:00",
        "updated_at": "2024-04-01T00:05:00+09:30"
    });
    let decoded: Metric = decode(metric.to_string().as_bytes()).unwrap();
    let reencoded: serde_json::Value = serde_json::from_slice(&encode(&decoded).unwrap()).unwrap();
    assert_eq!(reencoded, metric);

    let subscriber = json!({
        "id": "s1",
        "mode": "integration_partner",
        "endpoint": "https://partner.example.com/hook",
        "skip_confirmation_notification": true,
        "components": ["c1", "c2"],
        "page_access_user_id": "pau1",
        "created_at": "2024-04-01T00:00:00+00:00"
    });
    let decoded: Subscriber = decode(subscriber.to_string().as_bytes()).unwrap();
    let reencoded: serde_json::Value = serde_json::from_slice(&encode(&decoded).unwrap()).unwrap();
    assert_eq!(reencoded, subscriber);
}

#[test]
fn wrong_field_type_is_malformed() {
    assert!(matches!(
        decode::<Component>(br#"{"position":"first"}"#),
        Err(SchemaError::MalformedPayload(_))
    ));
    assert!(matches!(
        decode::<Component>(b"[1,2]"),
        Err(SchemaError::MalformedPayload(_))
    ));
}

#[test]
fn required_field_missing_on_encode() {
    let post = statuspage_models::incident::PostIncident::from(EditIncident::default());
    match encode(&post) {
        Err(SchemaError::RequiredFieldMissing { field }) => assert_eq!(field, "name"),
        other => panic!("unexpected {other:?}"),
    }
}
