use super::*;

const VIEWPORT: Size = Size {
    width: 480.0,
    height: 480.0,
};

fn startpos_scene() -> BoardScene {
    BoardScene::from_board(&Board::new(), &SpriteSet::glyphs())
}

fn symbol_at(col: u32, row: u32) -> Symbol {
    Symbol::new(SpriteSet::glyphs().sprite(0), col, row)
}

#[test]
fn test_startpos_symbol_count() {
    assert_eq!(startpos_scene().symbols().len(), 32);
}

#[test]
fn test_startpos_row_major_order() {
    let scene = startpos_scene();
    // Occupied rows are 0, 1, 6, 7; within a row, columns ascend.
    assert_eq!(scene.symbols()[0].cell(), (0, 0));
    assert_eq!(scene.symbols()[7].cell(), (7, 0));
    assert_eq!(scene.symbols()[8].cell(), (0, 1));
    assert_eq!(scene.symbols()[16].cell(), (0, 6));
    assert_eq!(scene.symbols()[31].cell(), (7, 7));
}

#[test]
fn test_square_length_example() {
    // 480x480 window, dimension 8: squares are 60 pixels.
    assert_eq!(startpos_scene().square_length(VIEWPORT), 60);
}

#[test]
fn test_square_length_uses_smaller_edge() {
    let scene = startpos_scene();
    assert_eq!(scene.square_length(Size::new(500.0, 480.0)), 60);
    assert_eq!(scene.square_length(Size::new(480.0, 520.0)), 60);
}

#[test]
fn test_square_length_monotonic_in_dimension() {
    let mut previous = u32::MAX;
    for dimension in 1..=16 {
        let scene = BoardScene::new(Vec::new(), dimension);
        let length = scene.square_length(VIEWPORT);
        assert!(length <= previous);
        previous = length;
    }
}

#[test]
fn test_press_starts_single_drag() {
    let mut scene = startpos_scene();
    // (30, 30) is inside the sprite box of the piece on cell (0, 0).
    scene.on_press(Point::new(30.0, 30.0), VIEWPORT);
    let dragging: Vec<_> = scene
        .symbols()
        .iter()
        .filter(|s| s.is_dragging())
        .collect();
    assert_eq!(dragging.len(), 1);
    assert_eq!(dragging[0].cell(), (0, 0));
}

#[test]
fn test_press_on_empty_square_drags_nothing() {
    let mut scene = startpos_scene();
    // Cell (4, 4) is empty at the start position.
    scene.on_press(Point::new(270.0, 270.0), VIEWPORT);
    assert!(!scene.drag_active());
}

#[test]
fn test_first_hit_wins_on_overlapping_symbols() {
    let mut scene = BoardScene::new(vec![symbol_at(0, 0), symbol_at(0, 0)], 8);
    scene.on_press(Point::new(30.0, 30.0), VIEWPORT);
    assert!(scene.symbols()[0].is_dragging());
    assert!(!scene.symbols()[1].is_dragging());
}

#[test]
fn test_second_press_while_dragging_is_ignored() {
    let mut scene = BoardScene::new(vec![symbol_at(0, 0), symbol_at(3, 3)], 8);
    scene.on_press(Point::new(30.0, 30.0), VIEWPORT);
    scene.on_press(Point::new(210.0, 210.0), VIEWPORT);
    assert!(scene.symbols()[0].is_dragging());
    assert!(!scene.symbols()[1].is_dragging());
}

#[test]
fn test_release_drops_on_target_cell() {
    let mut scene = BoardScene::new(vec![symbol_at(0, 0)], 8);
    scene.on_press(Point::new(30.0, 30.0), VIEWPORT);
    scene.on_release(Point::new(130.0, 90.0), VIEWPORT);
    assert!(!scene.drag_active());
    assert_eq!(scene.symbols()[0].cell(), (2, 1));
}

#[test]
fn test_release_only_moves_the_dragging_symbol() {
    let mut scene = BoardScene::new(vec![symbol_at(0, 0), symbol_at(3, 3)], 8);
    scene.on_press(Point::new(30.0, 30.0), VIEWPORT);
    scene.on_release(Point::new(450.0, 450.0), VIEWPORT);
    assert_eq!(scene.symbols()[0].cell(), (7, 7));
    assert_eq!(scene.symbols()[1].cell(), (3, 3));
}

#[test]
fn test_down_up_sequences_keep_single_drag_invariant() {
    let mut scene = startpos_scene();
    let spots = [
        Point::new(30.0, 30.0),
        Point::new(90.0, 30.0),
        Point::new(270.0, 270.0),
        Point::new(450.0, 450.0),
    ];
    for (i, &pt) in spots.iter().enumerate() {
        scene.on_press(pt, VIEWPORT);
        let dragging = scene.symbols().iter().filter(|s| s.is_dragging()).count();
        assert!(dragging <= 1, "step {i}: {dragging} symbols dragging");
        scene.on_release(pt, VIEWPORT);
        assert!(!scene.drag_active());
    }
}

#[test]
fn test_status_line_format() {
    assert_eq!(
        status_line(Point::new(12.0, 34.0), 60, VIEWPORT),
        "(x, y) = (12, 34), length = 60, ClientSize = (480, 480)"
    );
}
