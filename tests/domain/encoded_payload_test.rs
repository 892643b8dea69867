use voxguard::domain::EncodedPayload;

use crate::helpers::MP3_HEADER;

#[test]
fn given_mp3_bytes_when_encoding_then_decodes_to_same_bytes() {
    let samples: [&[u8]; 4] = [MP3_HEADER, b"\x00", b"\xFF\xFB\x90\x64\x00", &[0u8; 4097]];

    for bytes in samples {
        let payload = EncodedPayload::encode(bytes);
        assert_eq!(payload.decode().unwrap(), bytes);
    }
}

#[test]
fn given_large_payload_when_encoding_then_output_has_no_line_breaks() {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();

    let payload = EncodedPayload::encode(&bytes);

    assert!(!payload.as_str().contains('\n'));
    assert!(!payload.as_str().contains('\r'));
    assert_eq!(payload.decode().unwrap(), bytes);
}

#[test]
fn given_known_bytes_when_encoding_then_uses_standard_alphabet_with_padding() {
    assert_eq!(EncodedPayload::encode(b"\xFF\xE3").as_str(), "/+M=");
}
