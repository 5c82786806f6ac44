use super::*;

#[test]
fn test_asset_file_mapping() {
    assert_eq!(ASSET_FILES[0], "black_pawn.png");
    assert_eq!(ASSET_FILES[5], "black_king.png");
    assert_eq!(ASSET_FILES[6], "white_pawn.png");
    assert_eq!(ASSET_FILES[11], "white_king.png");
}

#[test]
fn test_glyph_set_has_one_sprite_per_code() {
    let set = SpriteSet::glyphs();
    for code in 0..12u8 {
        assert!(matches!(set.sprite(code), Sprite::Glyph { .. }));
    }
}

#[test]
fn test_glyph_colors_follow_piece_color() {
    let set = SpriteSet::glyphs();
    let Sprite::Glyph { color: black, .. } = set.sprite(0) else {
        panic!("expected glyph");
    };
    let Sprite::Glyph { color: white, .. } = set.sprite(6) else {
        panic!("expected glyph");
    };
    assert_eq!(black, crate::styles::BLACK_PIECE);
    assert_eq!(white, crate::styles::WHITE_PIECE);
}

#[test]
fn test_glyph_characters() {
    let set = SpriteSet::glyphs();
    let Sprite::Glyph { ch, .. } = set.sprite(0) else {
        panic!("expected glyph");
    };
    assert_eq!(ch, '\u{265F}'); // black pawn
    let Sprite::Glyph { ch, .. } = set.sprite(11) else {
        panic!("expected glyph");
    };
    assert_eq!(ch, '\u{2654}'); // white king
}

#[test]
fn test_load_missing_directory_falls_back_to_glyphs() {
    let set = SpriteSet::load(Path::new("/nonexistent/asset/dir"));
    for code in 0..12u8 {
        assert!(matches!(set.sprite(code), Sprite::Glyph { .. }));
    }
}

#[test]
fn test_out_of_range_code_does_not_panic() {
    let set = SpriteSet::glyphs();
    assert!(matches!(set.sprite(200), Sprite::Glyph { .. }));
}
