use super::*;

#[test]
fn resolves_red() {
    assert_eq!(resolve("red").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!("red".parse::<NamedColor>().unwrap(), NamedColor::Red);
}

#[test]
fn rejects_unknown_and_empty_names() {
    for name in ["invalid_color", "", "Red", "purple", " white"] {
        let err = resolve(name).unwrap_err();
        assert!(
            matches!(err, DrawShapeError::InvalidColorName(ref n) if n == name),
            "{name:?} -> {err}"
        );
    }
}

#[test]
fn hex_roundtrip_for_every_named_color() {
    for c in NamedColor::ALL {
        let rgb = resolve(c.name()).unwrap();
        let hex = to_hex(rgb);
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(
            hex[1..]
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        );
        assert_eq!(parse_hex(&hex).unwrap(), rgb);
    }
}

#[test]
fn hex_conversions_match_known_values() {
    assert_eq!(to_hex(Rgb8::new(255, 0, 0)), "#ff0000");
    assert_eq!(to_hex(Rgb8::new(1, 171, 16)), "#01ab10");
    assert_eq!(parse_hex("#ff0000").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!(parse_hex("00FF7f").unwrap(), Rgb8::new(0, 255, 127));
    assert_eq!(NamedColor::Magenta.hex(), "#ff00ff");
}

#[test]
fn hex_parse_is_lossless_across_channel_values() {
    for v in [0u8, 1, 15, 16, 127, 128, 200, 254, 255] {
        let rgb = Rgb8::new(v, 255 - v, v / 2);
        assert_eq!(parse_hex(&to_hex(rgb)).unwrap(), rgb);
    }
}

#[test]
fn malformed_hex_is_rejected() {
    for bad in ["", "#", "#fff", "#ff00000", "#gg0000", "#ff00 0"] {
        assert!(
            matches!(parse_hex(bad), Err(DrawShapeError::Validation(_))),
            "{bad:?}"
        );
    }
}

#[test]
fn names_are_stable_and_complete() {
    assert_eq!(
        list_names(),
        vec!["black", "white", "red", "green", "blue", "yellow", "magenta"]
    );
    assert!(list_names().contains(&"red"));
}

#[test]
fn serde_uses_lowercase_names() {
    let c: NamedColor = serde_json::from_value(serde_json::json!("yellow")).unwrap();
    assert_eq!(c, NamedColor::Yellow);
    assert_eq!(
        serde_json::to_value(NamedColor::Blue).unwrap(),
        serde_json::json!("blue")
    );
}
