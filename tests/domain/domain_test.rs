use chrono::{TimeZone, Utc};

use babel::domain::{AudioExtension, HistoryRecord, InputType, RecordType};

#[test]
fn given_mixed_case_extension_when_parsing_then_matches_variant() {
    assert_eq!("WAV".parse::<AudioExtension>(), Ok(AudioExtension::Wav));
    assert_eq!("Mp3".parse::<AudioExtension>(), Ok(AudioExtension::Mp3));
    assert!("flac".parse::<AudioExtension>().is_err());
}

#[test]
fn given_filename_when_extracting_raw_extension_then_uses_last_segment() {
    assert_eq!(AudioExtension::raw_from_filename("a.b.OGG"), "ogg");
    assert_eq!(AudioExtension::raw_from_filename("noext"), "noext");
    assert_eq!(AudioExtension::raw_from_filename("trailing."), "");
}

#[test]
fn given_every_extension_when_round_tripping_str_then_is_stable() {
    for ext in AudioExtension::ALL {
        assert_eq!(ext.as_str().parse::<AudioExtension>(), Ok(ext));
        assert!(ext.as_mime().starts_with("audio/"));
    }
}

#[test]
fn given_tipo_literals_when_parsing_then_maps_to_input_type() {
    assert_eq!(InputType::parse(None), InputType::SourceOnly);
    assert_eq!(InputType::parse(Some("es")), InputType::SourceOnly);
    assert_eq!(InputType::parse(Some("en")), InputType::WithTranslation);
    assert_eq!(
        InputType::parse(Some("pt")),
        InputType::Other("pt".to_string())
    );
}

#[test]
fn given_input_type_when_deriving_record_type_then_only_source_is_transcription() {
    assert_eq!(InputType::SourceOnly.record_type(), RecordType::Transcription);
    assert_eq!(InputType::WithTranslation.record_type(), RecordType::Translation);
    assert_eq!(
        InputType::Other("pt".to_string()).record_type(),
        RecordType::Translation
    );
    assert_eq!(RecordType::Transcription.as_str(), "transcripcion");
    assert_eq!(RecordType::Translation.as_str(), "traduccion");
}

#[test]
fn given_input_type_when_asking_for_translation_then_only_en_engages() {
    assert!(!InputType::SourceOnly.requires_translation());
    assert!(InputType::WithTranslation.requires_translation());
    assert!(!InputType::Other("pt".to_string()).requires_translation());
}

#[test]
fn given_input_type_when_choosing_language_hint_then_non_source_uses_target() {
    assert_eq!(InputType::SourceOnly.language_hint(), "es");
    assert_eq!(InputType::WithTranslation.language_hint(), "en");
    assert_eq!(InputType::Other("pt".to_string()).language_hint(), "en");
}

#[test]
fn given_history_record_when_formatting_timestamp_then_is_utc_iso8601() {
    let created_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 5).unwrap();
    let record = HistoryRecord::new("u-1", &InputType::WithTranslation, created_at);

    assert_eq!(record.record_type, RecordType::Translation);
    assert_eq!(record.language, "en");
    assert_eq!(record.timestamp(), "2026-03-01T12:30:05.000Z");
}
