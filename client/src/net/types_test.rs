use super::*;

#[test]
fn request_serializes_camel_case_keys() {
    let req = ConsultationRequest {
        name: "Budi Santoso".to_owned(),
        email: "budi@example.com".to_owned(),
        phone: "08123".to_owned(),
        company: String::new(),
        project_type: "Gedung".to_owned(),
        project_details: "Lokasi: Bandung".to_owned(),
        subject: "Permintaan".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serialize");
    let obj = value.as_object().expect("object");
    let mut keys = obj.keys().map(String::as_str).collect::<Vec<_>>();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["company", "email", "name", "phone", "projectDetails", "projectType", "subject"]
    );
    assert_eq!(value["projectType"], "Gedung");
}

#[test]
fn ack_parses_success_without_message() {
    let ack: ConsultationAck = serde_json::from_str(r#"{"success":true}"#).expect("parse");
    assert!(ack.success);
    assert_eq!(ack.message, None);
}

#[test]
fn ack_parses_failure_with_message_and_extra_fields() {
    let ack: ConsultationAck =
        serde_json::from_str(r#"{"success":false,"message":"x","code":42}"#).expect("parse");
    assert!(!ack.success);
    assert_eq!(ack.message.as_deref(), Some("x"));
}

#[test]
fn ack_missing_success_is_not_affirmative() {
    let ack: ConsultationAck = serde_json::from_str("{}").expect("parse");
    assert!(!ack.success);
}
