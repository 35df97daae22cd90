use egui::{Color32, Pos2, Rect};
use sketchpad::element::{Element, ElementKind, Style};
use sketchpad::tool::{CircleTool, FreehandTool, RectTool, Tool, ToolKind};

fn test_style() -> Style {
    Style {
        color: Color32::BLUE,
        width: 4.0,
        opacity: 200,
        filled: false,
    }
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_rect_drag_normalizes_in_all_quadrants() {
    let a = Pos2::new(50.0, 50.0);
    let targets = [
        Pos2::new(80.0, 90.0), // down-right
        Pos2::new(20.0, 90.0), // down-left
        Pos2::new(80.0, 10.0), // up-right
        Pos2::new(20.0, 10.0), // up-left
    ];

    for b in targets {
        let mut tool = RectTool::new();
        tool.on_pointer_down(a, test_style());
        tool.on_pointer_move(Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0));
        tool.on_pointer_move(b);
        let element = tool.on_pointer_up(b).expect("drag should commit a rect");

        let ElementKind::Rect(rect) = element else {
            panic!("rect tool must produce a rect");
        };
        let r = rect.rect();
        assert!(approx_eq(r.min.x, a.x.min(b.x)));
        assert!(approx_eq(r.min.y, a.y.min(b.y)));
        assert!(approx_eq(r.max.x, a.x.max(b.x)));
        assert!(approx_eq(r.max.y, a.y.max(b.y)));
    }
}

#[test]
fn test_rect_preview_is_normalized_mid_drag() {
    let mut tool = RectTool::new();
    tool.on_pointer_down(Pos2::new(100.0, 100.0), test_style());
    tool.on_pointer_move(Pos2::new(40.0, 60.0));

    let rect = tool.current_rect().unwrap();
    assert_eq!(rect, Rect::from_min_max(Pos2::new(40.0, 60.0), Pos2::new(100.0, 100.0)));
}

#[test]
fn test_rect_degenerate_drag_commits_nothing() {
    let mut tool = RectTool::new();
    tool.on_pointer_down(Pos2::new(10.0, 10.0), test_style());
    // Purely horizontal drag: zero height.
    tool.on_pointer_move(Pos2::new(60.0, 10.0));
    assert!(tool.on_pointer_up(Pos2::new(60.0, 10.0)).is_none());
}

#[test]
fn test_circle_radius_tracks_pointer_distance() {
    let center = Pos2::new(0.0, 0.0);
    let mut tool = CircleTool::new();
    tool.on_pointer_down(center, test_style());

    // Radius equals the Euclidean distance at every intermediate move.
    for pos in [
        Pos2::new(3.0, 4.0),
        Pos2::new(-6.0, 8.0),
        Pos2::new(1.0, 0.0),
        Pos2::new(0.0, -7.0),
    ] {
        tool.on_pointer_move(pos);
        let radius = tool.current_radius().unwrap();
        assert!(approx_eq(radius, center.distance(pos)));
    }

    let element = tool.on_pointer_up(Pos2::new(3.0, 4.0)).unwrap();
    let ElementKind::Circle(circle) = element else {
        panic!("circle tool must produce a circle");
    };
    assert!(approx_eq(circle.radius(), 5.0));
}

#[test]
fn test_circle_tap_commits_nothing() {
    let mut tool = CircleTool::new();
    tool.on_pointer_down(Pos2::new(5.0, 5.0), test_style());
    assert!(tool.on_pointer_up(Pos2::new(5.0, 5.0)).is_none());
}

#[test]
fn test_freehand_tap_commits_nothing() {
    let mut tool = FreehandTool::new();
    tool.on_pointer_down(Pos2::new(30.0, 30.0), test_style());
    // Pointer up exactly where it went down: no stroke.
    assert!(tool.on_pointer_up(Pos2::new(30.0, 30.0)).is_none());
    assert!(!tool.is_drawing());
}

#[test]
fn test_freehand_thins_dense_input() {
    let mut tool = FreehandTool::new();
    tool.on_pointer_down(Pos2::new(0.0, 0.0), test_style());

    // 1px steps are below the smoothing threshold; only every few moves
    // may commit a segment.
    let moves = 30;
    for i in 1..=moves {
        tool.on_pointer_move(Pos2::new(i as f32, 0.0));
    }
    let element = tool.on_pointer_up(Pos2::new(moves as f32, 0.0)).unwrap();
    let ElementKind::Freehand(stroke) = element else {
        panic!("freehand tool must produce a stroke");
    };
    assert!(stroke.path().len() > 1);
    assert!(stroke.path().len() < moves);
}

#[test]
fn test_freehand_stroke_is_seeded_with_style() {
    let style = test_style();
    let mut tool = FreehandTool::new();
    tool.on_pointer_down(Pos2::new(0.0, 0.0), style);
    tool.on_pointer_move(Pos2::new(10.0, 0.0));
    let element = tool.on_pointer_up(Pos2::new(10.0, 0.0)).unwrap();
    assert_eq!(*element.style(), style);
}

#[test]
fn test_cancel_discards_gesture() {
    let mut tool = ToolKind::by_name("Freehand").unwrap();
    tool.on_pointer_down(Pos2::new(0.0, 0.0), test_style());
    tool.on_pointer_move(Pos2::new(50.0, 50.0));
    assert!(tool.is_drawing());

    tool.cancel();
    assert!(!tool.is_drawing());
    assert!(tool.on_pointer_up(Pos2::new(50.0, 50.0)).is_none());
}

#[test]
fn test_tool_factory_round_trip() {
    for &name in ToolKind::all_names() {
        let tool = ToolKind::by_name(name).expect("every listed tool must construct");
        assert_eq!(tool.name(), name);
    }
    assert!(ToolKind::by_name("Airbrush").is_none());
}

#[test]
fn test_committed_element_lands_where_drawn() {
    let mut tool = RectTool::new();
    tool.on_pointer_down(Pos2::new(10.0, 20.0), test_style());
    let element = tool.on_pointer_up(Pos2::new(50.0, 60.0)).unwrap();

    let bounds = element.bounds();
    assert!(bounds.contains(Pos2::new(30.0, 40.0)));
    assert!(!bounds.contains(Pos2::new(100.0, 100.0)));
}
