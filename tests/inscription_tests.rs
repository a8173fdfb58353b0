// Host-side tests for the on-disk inscription and record shapes.

use cemetery_core::{
    GravestoneRecord, Inscription, InscriptionForm, InscriptionKind, Placement,
};

#[test]
fn legacy_inscription_renders_three_lines() {
    let json = r#"{"name":"Ada","birthYear":"1815","deathYear":"1852","epitaph":"Poet","timestamp":1}"#;
    let insc: Inscription = serde_json::from_str(json).unwrap();
    assert!(matches!(insc, Inscription::Legacy(_)));
    assert_eq!(insc.display_text(), "Ada\n1815-1852\nPoet");
    assert_eq!(insc.timestamp(), 1.0);
}

#[test]
fn free_text_inscription_renders_verbatim() {
    let json = r#"{"text":"Here lies\nthe last bug","timestamp":1700000000000}"#;
    let insc: Inscription = serde_json::from_str(json).unwrap();
    assert!(matches!(insc, Inscription::FreeText(_)));
    assert_eq!(insc.display_text(), "Here lies\nthe last bug");
}

#[test]
fn legacy_fields_are_optional_except_name() {
    let insc: Inscription = serde_json::from_str(r#"{"name":"Unknown"}"#).unwrap();
    assert_eq!(insc.display_text(), "Unknown\n-\n");
    assert!(serde_json::from_str::<Inscription>(r#"{"epitaph":"x"}"#).is_err());
}

#[test]
fn legacy_world_record_decodes() {
    let json = r#"{
        "x": 1, "y": 2.5, "z": -5, "scale": 1, "height": 2, "baseScale": 1.2,
        "inscription": {"name":"Ada","birthYear":"1815","deathYear":"1852","epitaph":"Poet","timestamp":1}
    }"#;
    let record: GravestoneRecord = serde_json::from_str(json).unwrap();
    assert!(matches!(record.placement, Placement::World(_)));
    assert_eq!(record.display_text(), "Ada\n1815-1852\nPoet");
}

#[test]
fn screen_record_without_inscription_shows_placeholder() {
    let json = r#"{"x": 40, "y": 70, "width": 80, "height": 100, "scale": 0.7}"#;
    let record: GravestoneRecord = serde_json::from_str(json).unwrap();
    assert!(matches!(record.placement, Placement::Screen(_)));
    assert!(!record.is_inscribed());
    assert_eq!(record.display_text(), "Click to\ninscribe");
}

#[test]
fn structured_form_fills_unknown_years() {
    let form = InscriptionForm {
        name: "J. Doe".into(),
        death_year: "1999".into(),
        ..Default::default()
    };
    let insc = form.into_inscription(InscriptionKind::Structured, 5.0).unwrap();
    assert_eq!(insc.display_text(), "J. Doe\n????-1999\n");
    assert_eq!(insc.timestamp(), 5.0);
}

#[test]
fn free_text_form_is_trimmed() {
    let form = InscriptionForm {
        text: "  Gone fishing \n".into(),
        ..Default::default()
    };
    let insc = form.into_inscription(InscriptionKind::FreeText, 0.0).unwrap();
    assert_eq!(insc.display_text(), "Gone fishing");

    let blank = InscriptionForm {
        text: "\t \n".into(),
        ..Default::default()
    };
    assert!(blank.into_inscription(InscriptionKind::FreeText, 0.0).is_none());
}

#[test]
fn records_encode_flat_with_camel_case() {
    let record: GravestoneRecord = serde_json::from_str(
        r#"{"x":0,"y":1,"z":2,"scale":1,"height":2,"baseScale":0.5}"#,
    )
    .unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["baseScale"], 0.5);
    assert!(value["inscription"].is_null());
    assert!(value.get("placement").is_none());
}
