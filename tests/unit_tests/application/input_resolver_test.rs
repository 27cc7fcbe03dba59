use bytes::Bytes;

use babel::application::services::{
    InlineUploadForm, InputError, ReferenceUploadForm, UploadedAudio, resolve_inline,
    resolve_reference,
};
use babel::domain::{AudioExtension, AudioSource, InputType};

fn upload(filename: &str) -> InlineUploadForm {
    InlineUploadForm {
        tipo: None,
        user_id: None,
        audio: Some(UploadedAudio {
            filename: filename.to_string(),
            data: Bytes::from_static(b"audio"),
        }),
    }
}

#[test]
fn given_each_accepted_extension_when_resolving_inline_then_succeeds() {
    for (filename, expected) in [
        ("clip.wav", AudioExtension::Wav),
        ("clip.mp3", AudioExtension::Mp3),
        ("clip.m4a", AudioExtension::M4a),
        ("clip.ogg", AudioExtension::Ogg),
        ("Voice.Memo.WAV", AudioExtension::Wav),
    ] {
        let request = resolve_inline(upload(filename)).unwrap();
        assert_eq!(request.audio_source.extension(), expected, "{}", filename);
    }
}

#[test]
fn given_unsupported_extension_when_resolving_inline_then_rejects_media_type() {
    let result = resolve_inline(upload("audio.txt"));

    match result {
        Err(InputError::UnsupportedMediaType(ext)) => assert_eq!(ext, "txt"),
        other => panic!("expected UnsupportedMediaType, got {:?}", other),
    }
}

#[test]
fn given_filename_without_dot_when_resolving_inline_then_rejects_media_type() {
    let result = resolve_inline(upload("recording"));

    assert!(matches!(result, Err(InputError::UnsupportedMediaType(_))));
}

#[test]
fn given_no_audio_part_when_resolving_inline_then_reports_missing_input() {
    let result = resolve_inline(InlineUploadForm::default());

    assert!(matches!(result, Err(InputError::MissingInput(_))));
}

#[test]
fn given_no_tipo_or_user_when_resolving_then_uses_defaults() {
    let request = resolve_inline(upload("a.wav")).unwrap();

    assert_eq!(request.input_type, InputType::SourceOnly);
    assert_eq!(request.user_id, "anonimo");
}

#[test]
fn given_explicit_fields_when_resolving_inline_then_keeps_them() {
    let form = InlineUploadForm {
        tipo: Some("en".to_string()),
        user_id: Some("u-1".to_string()),
        ..upload("a.mp3")
    };

    let request = resolve_inline(form).unwrap();

    assert_eq!(request.input_type, InputType::WithTranslation);
    assert_eq!(request.user_id, "u-1");
    match request.audio_source {
        AudioSource::Inline { filename, bytes, .. } => {
            assert_eq!(filename, "a.mp3");
            assert_eq!(&bytes[..], b"audio");
        }
        other => panic!("expected inline source, got {:?}", other),
    }
}

#[test]
fn given_file_id_when_resolving_reference_then_points_at_configured_bucket() {
    let form = ReferenceUploadForm {
        tipo: Some("es".to_string()),
        user_id: None,
        file_id: Some(" abc123 ".to_string()),
    };

    let request = resolve_reference(form, "audios").unwrap();

    assert_eq!(
        request.audio_source,
        AudioSource::Remote {
            bucket_id: "audios".to_string(),
            object_id: "abc123".to_string(),
        }
    );
    assert_eq!(request.audio_source.extension(), AudioExtension::M4a);
}

#[test]
fn given_no_file_id_when_resolving_reference_then_reports_missing_input() {
    let result = resolve_reference(ReferenceUploadForm::default(), "audios");

    assert!(matches!(result, Err(InputError::MissingInput(_))));
}

#[test]
fn given_blank_file_id_when_resolving_reference_then_reports_missing_input() {
    let form = ReferenceUploadForm {
        file_id: Some("   ".to_string()),
        ..ReferenceUploadForm::default()
    };

    let result = resolve_reference(form, "audios");

    assert!(matches!(result, Err(InputError::MissingInput(_))));
}

#[test]
fn given_padded_fields_when_resolving_either_route_then_both_normalize_identically() {
    let inline = resolve_inline(InlineUploadForm {
        tipo: Some(" en\n".to_string()),
        user_id: Some("  u-5 ".to_string()),
        ..upload("clip.wav")
    })
    .unwrap();
    let reference = resolve_reference(
        ReferenceUploadForm {
            tipo: Some(" en\n".to_string()),
            user_id: Some("  u-5 ".to_string()),
            file_id: Some("abc".to_string()),
        },
        "audios",
    )
    .unwrap();

    for request in [&inline, &reference] {
        assert_eq!(request.input_type, InputType::WithTranslation);
        assert_eq!(request.user_id, "u-5");
    }
}
