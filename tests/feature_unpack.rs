use sc2grid::features::{unpack_plane, FeatureError, MINIMAP_FEATURES, SCREEN_FEATURES};

#[test]
fn one_bit_planes_unpack_msb_first() {
    // 2x8 grid: first byte covers row 0, second row 1.
    let bytes = [0b1000_0001, 0b0100_0000];
    let values = unpack_plane("creep", 1, 8, 2, &bytes).unwrap();
    let mut expected = vec![0; 16];
    expected[0] = 1;
    expected[7] = 1;
    expected[9] = 1;
    assert_eq!(values, expected);
}

#[test]
fn one_bit_partial_final_byte() {
    // 3x3 = 9 pixels, 2 bytes, trailing bits unused.
    let bytes = [0b1111_1111, 0b1000_0000];
    let values = unpack_plane("camera", 1, 3, 3, &bytes).unwrap();
    assert_eq!(values, vec![1; 9]);
}

#[test]
fn eight_bit_is_identity() {
    let bytes = [0u8, 1, 127, 255];
    let values = unpack_plane("player_id", 8, 2, 2, &bytes).unwrap();
    assert_eq!(values, vec![0, 1, 127, 255]);
}

#[test]
fn sixteen_bit_little_endian() {
    let bytes = [0x34, 0x12, 0xFF, 0x00];
    let values = unpack_plane("unit_hit_point", 16, 2, 1, &bytes).unwrap();
    assert_eq!(values, vec![0x1234, 0x00FF]);
}

#[test]
fn thirty_two_bit_little_endian() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&123456i32.to_le_bytes());
    bytes.extend_from_slice(&(-1i32).to_le_bytes());
    let values = unpack_plane("unit_type", 32, 1, 2, &bytes).unwrap();
    assert_eq!(values, vec![123456, -1]);
}

#[test]
fn wrong_payload_length_is_rejected() {
    let err = unpack_plane("unit_type", 8, 4, 4, &[0u8; 3]).unwrap_err();
    match err {
        FeatureError::BadLength { expected, got, .. } => {
            assert_eq!(expected, 16);
            assert_eq!(got, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unsupported_bit_depth_is_rejected() {
    let err = unpack_plane("effects", 24, 2, 2, &[0u8; 12]).unwrap_err();
    assert!(matches!(err, FeatureError::BadBitsPerPixel(24)));
}

#[test]
fn feature_tables_match_the_output_schema() {
    assert_eq!(SCREEN_FEATURES.len(), 17);
    assert_eq!(MINIMAP_FEATURES.len(), 7);
    // Every minimap layer except the camera also exists on screen.
    for name in MINIMAP_FEATURES {
        assert!(name == "camera" || SCREEN_FEATURES.contains(&name));
    }
}
