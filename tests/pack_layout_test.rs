// Layout scenarios for small real-world apps, checked box by box.

use pack_core::{at_least, Dimension, Direction, IntrinsicSize, NodeId, NodeTree, Style};
use pack_layout::{layout, Viewport};

struct Expected {
    origin: (f32, f32),
    content: (f32, f32),
    children: Vec<Expected>,
}

fn boxed(origin: (f32, f32), content: (f32, f32), children: Vec<Expected>) -> Expected {
    Expected {
        origin,
        content,
        children,
    }
}

fn leaf(origin: (f32, f32), content: (f32, f32)) -> Expected {
    boxed(origin, content, Vec::new())
}

fn assert_boxes(tree: &NodeTree, id: NodeId, expected: &Expected) {
    let node = tree.node(id).unwrap();
    let layout = node.layout;
    assert_eq!(
        (layout.absolute_content_left, layout.absolute_content_top),
        expected.origin,
        "origin of '{}' doesn't match",
        node.name
    );
    assert_eq!(
        (layout.content_width, layout.content_height),
        expected.content,
        "content of '{}' doesn't match",
        node.name
    );
    assert_eq!(
        node.children().len(),
        expected.children.len(),
        "number of children of '{}' doesn't match",
        node.name
    );
    for (&child, sublayout) in node.children().iter().zip(&expected.children) {
        assert_boxes(tree, child, sublayout);
    }
}

fn assert_layout(tree: &NodeTree, root: NodeId, size: (f32, f32), expected: Expected) {
    let layout = tree.node(root).unwrap().layout;
    assert_eq!((layout.width(), layout.height()), size, "final size doesn't match");
    assert_boxes(tree, root, &expected);
}

fn widget(
    tree: &mut NodeTree,
    name: &str,
    style: Style,
    width: impl Into<Dimension>,
    height: impl Into<Dimension>,
) -> NodeId {
    tree.create_leaf(name, style, IntrinsicSize::new(width, height))
}

fn flex_padded(flex: f32, padding: f32) -> Style {
    Style::new()
        .with_flex(flex)
        .unwrap()
        .with_padding(padding)
        .unwrap()
}

fn tutorial_0(direction: Direction) -> (NodeTree, NodeId) {
    let mut tree = NodeTree::new();
    let button = match direction {
        Direction::Row => widget(&mut tree, "button", flex_padded(1.0, 50.0), at_least(120.0), 30.0),
        Direction::Column => {
            widget(&mut tree, "button", flex_padded(1.0, 50.0), 30.0, at_least(120.0))
        }
    };
    let root = tree
        .create_container("app", Style::new().with_direction(direction), &[button])
        .unwrap();
    (tree, root)
}

#[test]
fn test_tutorial_0() {
    let (mut tree, root) = tutorial_0(Direction::Row);

    // Minimum size
    layout(&mut tree, root, &Viewport::new(0.0, 0.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (220.0, 130.0),
        boxed((0.0, 0.0), (220.0, 130.0), vec![leaf((50.0, 50.0), (120.0, 30.0))]),
    );

    // Normal size
    layout(&mut tree, root, &Viewport::new(640.0, 480.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 130.0),
        boxed((0.0, 0.0), (640.0, 130.0), vec![leaf((50.0, 50.0), (540.0, 30.0))]),
    );

    // HiDPI normal size
    layout(&mut tree, root, &Viewport::new(640.0, 480.0).with_dpi(144.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 180.0),
        boxed((0.0, 0.0), (640.0, 180.0), vec![leaf((75.0, 75.0), (490.0, 30.0))]),
    );
}

#[test]
fn test_tutorial_0_vertical() {
    let (mut tree, root) = tutorial_0(Direction::Column);

    layout(&mut tree, root, &Viewport::new(0.0, 0.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (130.0, 220.0),
        boxed((0.0, 0.0), (130.0, 220.0), vec![leaf((50.0, 50.0), (30.0, 120.0))]),
    );

    layout(&mut tree, root, &Viewport::new(480.0, 640.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (130.0, 640.0),
        boxed((0.0, 0.0), (130.0, 640.0), vec![leaf((50.0, 50.0), (30.0, 540.0))]),
    );

    layout(&mut tree, root, &Viewport::new(480.0, 640.0).with_dpi(144.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (180.0, 640.0),
        boxed((0.0, 0.0), (180.0, 640.0), vec![leaf((75.0, 75.0), (30.0, 490.0))]),
    );
}

#[test]
fn test_tutorial_0_high_baseline_dpi() {
    let (mut tree, root) = tutorial_0(Direction::Row);

    // Minimum size with high baseline DPI
    let viewport = Viewport::new(0.0, 0.0).with_dpi(160.0).with_baseline_dpi(160.0);
    layout(&mut tree, root, &viewport).unwrap();
    assert_layout(
        &tree,
        root,
        (220.0, 130.0),
        boxed((0.0, 0.0), (220.0, 130.0), vec![leaf((50.0, 50.0), (120.0, 30.0))]),
    );

    // Device DPI equal to the baseline
    let viewport = Viewport::new(640.0, 480.0).with_dpi(160.0).with_baseline_dpi(160.0);
    layout(&mut tree, root, &viewport).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 130.0),
        boxed((0.0, 0.0), (640.0, 130.0), vec![leaf((50.0, 50.0), (540.0, 30.0))]),
    );

    // 1.5x the baseline
    let viewport = Viewport::new(640.0, 480.0).with_dpi(240.0).with_baseline_dpi(160.0);
    layout(&mut tree, root, &viewport).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 180.0),
        boxed((0.0, 0.0), (640.0, 180.0), vec![leaf((75.0, 75.0), (490.0, 30.0))]),
    );
}

fn tutorial_1() -> (NodeTree, NodeId) {
    let mut tree = NodeTree::new();
    let row_box = || {
        Style::new()
            .with_direction(Direction::Row)
            .with_padding(5.0)
            .unwrap()
    };

    let f_input = widget(
        &mut tree,
        "f_input",
        Style::new().with_flex(1.0).unwrap().with_padding_left(160.0).unwrap(),
        at_least(100.0),
        15.0,
    );
    let f_label = widget(
        &mut tree,
        "f_label",
        Style::new().with_width(100.0).unwrap().with_padding_left(10.0).unwrap(),
        at_least(40.0),
        10.0,
    );
    let f_box = tree.create_container("f_box", row_box(), &[f_input, f_label]).unwrap();

    let join_label = widget(
        &mut tree,
        "join_label",
        Style::new().with_width(150.0).unwrap().with_padding_right(10.0).unwrap(),
        at_least(80.0),
        10.0,
    );
    let c_input = widget(&mut tree, "c_input", Style::new().with_flex(1.0).unwrap(), at_least(100.0), 15.0);
    let c_label = widget(
        &mut tree,
        "c_label",
        Style::new().with_width(100.0).unwrap().with_padding_left(10.0).unwrap(),
        at_least(40.0),
        10.0,
    );
    let c_box = tree
        .create_container("c_box", row_box(), &[join_label, c_input, c_label])
        .unwrap();

    let button = widget(&mut tree, "button", flex_padded(1.0, 15.0), at_least(120.0), 30.0);

    let root = tree
        .create_container(
            "app",
            Style::new()
                .with_direction(Direction::Column)
                .with_padding_top(10.0)
                .unwrap(),
            &[f_box, c_box, button],
        )
        .unwrap();
    (tree, root)
}

#[test]
fn test_tutorial_1() {
    let (mut tree, root) = tutorial_1();

    // Minimum size
    layout(&mut tree, root, &Viewport::new(0.0, 0.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (380.0, 120.0),
        boxed(
            (0.0, 10.0),
            (380.0, 110.0),
            vec![
                boxed(
                    (5.0, 15.0),
                    (370.0, 15.0),
                    vec![leaf((165.0, 15.0), (100.0, 15.0)), leaf((275.0, 15.0), (100.0, 10.0))],
                ),
                boxed(
                    (5.0, 40.0),
                    (370.0, 15.0),
                    vec![
                        leaf((5.0, 40.0), (150.0, 10.0)),
                        leaf((165.0, 40.0), (100.0, 15.0)),
                        leaf((275.0, 40.0), (100.0, 10.0)),
                    ],
                ),
                leaf((15.0, 75.0), (120.0, 30.0)),
            ],
        ),
    );

    // Normal size
    layout(&mut tree, root, &Viewport::new(640.0, 480.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 120.0),
        boxed(
            (0.0, 10.0),
            (640.0, 110.0),
            vec![
                boxed(
                    (5.0, 15.0),
                    (630.0, 15.0),
                    vec![leaf((165.0, 15.0), (360.0, 15.0)), leaf((535.0, 15.0), (100.0, 10.0))],
                ),
                boxed(
                    (5.0, 40.0),
                    (630.0, 15.0),
                    vec![
                        leaf((5.0, 40.0), (150.0, 10.0)),
                        leaf((165.0, 40.0), (360.0, 15.0)),
                        leaf((535.0, 40.0), (100.0, 10.0)),
                    ],
                ),
                leaf((15.0, 75.0), (610.0, 30.0)),
            ],
        ),
    );

    // HiDPI normal size
    layout(&mut tree, root, &Viewport::new(640.0, 480.0).with_dpi(144.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 142.0),
        boxed(
            (0.0, 10.0),
            (640.0, 132.0),
            vec![
                boxed(
                    (7.0, 17.0),
                    (626.0, 15.0),
                    vec![leaf((247.0, 17.0), (221.0, 15.0)), leaf((483.0, 17.0), (150.0, 10.0))],
                ),
                boxed(
                    (7.0, 46.0),
                    (626.0, 15.0),
                    vec![
                        leaf((7.0, 46.0), (225.0, 10.0)),
                        leaf((247.0, 46.0), (221.0, 15.0)),
                        leaf((483.0, 46.0), (150.0, 10.0)),
                    ],
                ),
                leaf((22.0, 90.0), (596.0, 30.0)),
            ],
        ),
    );
}

fn tutorial_3() -> (NodeTree, NodeId) {
    let mut tree = NodeTree::new();
    let input = widget(&mut tree, "input", flex_padded(1.0, 5.0), at_least(100.0), 15.0);
    let button = widget(
        &mut tree,
        "button",
        Style::new().with_width(50.0).unwrap().with_padding(5.0).unwrap(),
        at_least(40.0),
        10.0,
    );
    let row = tree.create_container("box", Style::new(), &[input, button]).unwrap();
    let web = widget(
        &mut tree,
        "web",
        Style::new().with_flex(1.0).unwrap(),
        at_least(100.0),
        at_least(100.0),
    );
    let root = tree
        .create_container("app", Style::new().with_direction(Direction::Column), &[row, web])
        .unwrap();
    (tree, root)
}

#[test]
fn test_tutorial_3() {
    let (mut tree, root) = tutorial_3();

    layout(&mut tree, root, &Viewport::new(0.0, 0.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (170.0, 125.0),
        boxed(
            (0.0, 0.0),
            (170.0, 125.0),
            vec![
                boxed(
                    (0.0, 0.0),
                    (170.0, 25.0),
                    vec![leaf((5.0, 5.0), (100.0, 15.0)), leaf((115.0, 5.0), (50.0, 10.0))],
                ),
                leaf((0.0, 25.0), (100.0, 100.0)),
            ],
        ),
    );

    layout(&mut tree, root, &Viewport::new(640.0, 480.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 480.0),
        boxed(
            (0.0, 0.0),
            (640.0, 480.0),
            vec![
                boxed(
                    (0.0, 0.0),
                    (640.0, 25.0),
                    vec![leaf((5.0, 5.0), (570.0, 15.0)), leaf((585.0, 5.0), (50.0, 10.0))],
                ),
                leaf((0.0, 25.0), (640.0, 455.0)),
            ],
        ),
    );

    layout(&mut tree, root, &Viewport::new(640.0, 480.0).with_dpi(144.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 480.0),
        boxed(
            (0.0, 0.0),
            (640.0, 480.0),
            vec![
                boxed(
                    (0.0, 0.0),
                    (640.0, 29.0),
                    vec![leaf((7.0, 7.0), (537.0, 15.0)), leaf((558.0, 7.0), (75.0, 10.0))],
                ),
                leaf((0.0, 29.0), (640.0, 451.0)),
            ],
        ),
    );
}

fn beeliza() -> (NodeTree, NodeId) {
    let mut tree = NodeTree::new();
    let list = widget(
        &mut tree,
        "detailedlist",
        Style::new().with_flex(1.0).unwrap(),
        at_least(100.0),
        at_least(100.0),
    );
    let input = widget(&mut tree, "input", flex_padded(1.0, 5.0), at_least(100.0), 15.0);
    let button = widget(
        &mut tree,
        "button",
        Style::new().with_padding(5.0).unwrap(),
        at_least(40.0),
        10.0,
    );
    let row = tree
        .create_container("box", Style::new().with_direction(Direction::Row), &[input, button])
        .unwrap();
    let root = tree
        .create_container("app", Style::new().with_direction(Direction::Column), &[list, row])
        .unwrap();
    (tree, root)
}

#[test]
fn test_beeliza() {
    let (mut tree, root) = beeliza();

    layout(&mut tree, root, &Viewport::new(0.0, 0.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (160.0, 125.0),
        boxed(
            (0.0, 0.0),
            (160.0, 125.0),
            vec![
                leaf((0.0, 0.0), (100.0, 100.0)),
                boxed(
                    (0.0, 100.0),
                    (160.0, 25.0),
                    vec![leaf((5.0, 105.0), (100.0, 15.0)), leaf((115.0, 105.0), (40.0, 10.0))],
                ),
            ],
        ),
    );

    layout(&mut tree, root, &Viewport::new(640.0, 480.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 480.0),
        boxed(
            (0.0, 0.0),
            (640.0, 480.0),
            vec![
                leaf((0.0, 0.0), (640.0, 455.0)),
                boxed(
                    (0.0, 455.0),
                    (640.0, 25.0),
                    vec![leaf((5.0, 460.0), (580.0, 15.0)), leaf((595.0, 460.0), (40.0, 10.0))],
                ),
            ],
        ),
    );

    layout(&mut tree, root, &Viewport::new(640.0, 480.0).with_dpi(144.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 480.0),
        boxed(
            (0.0, 0.0),
            (640.0, 480.0),
            vec![
                leaf((0.0, 0.0), (640.0, 451.0)),
                boxed(
                    (0.0, 451.0),
                    (640.0, 29.0),
                    vec![leaf((7.0, 458.0), (572.0, 15.0)), leaf((593.0, 458.0), (40.0, 10.0))],
                ),
            ],
        ),
    );
}

#[test]
fn test_relayout_after_hiding_a_row() {
    let (mut tree, root) = beeliza();
    let row = tree.children(root).unwrap()[1];

    tree.node_mut(row).unwrap().style.set("visibility", "hidden").unwrap();
    layout(&mut tree, root, &Viewport::new(640.0, 480.0)).unwrap();
    assert_layout(
        &tree,
        root,
        (640.0, 480.0),
        boxed(
            (0.0, 0.0),
            (640.0, 480.0),
            vec![
                leaf((0.0, 0.0), (640.0, 480.0)),
                boxed(
                    (0.0, 480.0),
                    (0.0, 0.0),
                    vec![leaf((0.0, 480.0), (0.0, 0.0)), leaf((0.0, 480.0), (0.0, 0.0))],
                ),
            ],
        ),
    );
}
