use approx::assert_abs_diff_eq;
use plot_hover::PlotError;
use plot_hover::core::{NodeId, PlotDocument, find_bars, find_points};
use plot_hover::interaction::{
    FloatingLabel, HOVERED_CLASS, HoverCoordinator, NOT_HOVERED_CLASS,
};
use serde_json::{Value, json};

fn point_document(count: usize) -> (PlotDocument, Vec<NodeId>) {
    let mut doc = PlotDocument::new("svg");
    let figure = doc.append_group(doc.root(), "figure_1");
    let axes = doc.append_group(figure, "axes_1");
    let collection = doc.append_group(axes, "PathCollection_1");
    let points = (0..count)
        .map(|_| doc.append_child(collection, "path"))
        .collect();
    (doc, points)
}

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("L{i}")).collect()
}

#[test]
fn hover_partitions_collection_by_group_membership() {
    let (mut doc, points) = point_document(3);
    let groups = vec![json!("a"), json!("b"), json!("a")];
    let collection = find_points(&mut doc, "axes_1", &groups).expect("classify points");

    let mut coordinator = HoverCoordinator::new(FloatingLabel::new(), 0.0, 0.0);
    let binding = coordinator
        .bind(collection, groups, labels(3), "block")
        .expect("bind points");

    coordinator
        .pointer_over(&mut doc, binding, points[0], 40.0, 25.0)
        .expect("pointer over");

    for &same in &[points[0], points[2]] {
        assert!(doc.has_class(same, HOVERED_CLASS));
        assert!(!doc.has_class(same, NOT_HOVERED_CLASS));
    }
    assert!(doc.has_class(points[1], NOT_HOVERED_CLASS));
    assert!(!doc.has_class(points[1], HOVERED_CLASS));

    let label = coordinator.label();
    assert!(label.visible());
    assert_eq!(label.display(), "block");
    assert_eq!(label.content(), "L0");
}

#[test]
fn hovering_another_element_recomputes_the_partition() {
    let (mut doc, points) = point_document(3);
    let groups = vec![json!("a"), json!("b"), json!("a")];
    let collection = find_points(&mut doc, "axes_1", &groups).expect("classify points");

    let mut coordinator = HoverCoordinator::new(FloatingLabel::new(), 0.0, 0.0);
    let binding = coordinator
        .bind(collection, groups, labels(3), "block")
        .expect("bind points");

    coordinator
        .pointer_over(&mut doc, binding, points[0], 0.0, 0.0)
        .expect("first hover");
    coordinator
        .pointer_over(&mut doc, binding, points[1], 0.0, 0.0)
        .expect("second hover");

    assert!(doc.has_class(points[1], HOVERED_CLASS));
    assert!(!doc.has_class(points[1], NOT_HOVERED_CLASS));
    for &other in &[points[0], points[2]] {
        assert!(doc.has_class(other, NOT_HOVERED_CLASS));
        assert!(!doc.has_class(other, HOVERED_CLASS));
    }
    assert_eq!(coordinator.label().content(), "L1");
}

#[test]
fn pointer_out_resets_markers_and_hides_the_label() {
    let (mut doc, points) = point_document(3);
    let groups = vec![json!("a"), json!("b"), json!("a")];
    let collection = find_points(&mut doc, "axes_1", &groups).expect("classify points");

    let mut coordinator = HoverCoordinator::new(FloatingLabel::new(), 0.0, 0.0);
    let binding = coordinator
        .bind(collection, groups, labels(3), "block")
        .expect("bind points");

    coordinator
        .pointer_over(&mut doc, binding, points[2], 0.0, 0.0)
        .expect("pointer over");
    assert!(
        coordinator
            .binding(binding)
            .expect("binding exists")
            .state()
            .is_hovering()
    );

    coordinator
        .pointer_out(&mut doc, binding)
        .expect("pointer out");

    for &point in &points {
        assert!(!doc.has_class(point, HOVERED_CLASS));
        assert!(!doc.has_class(point, NOT_HOVERED_CLASS));
    }
    let label = coordinator.label();
    assert!(!label.visible());
    assert_eq!(label.display(), "none");
    assert!(
        !coordinator
            .binding(binding)
            .expect("binding exists")
            .state()
            .is_hovering()
    );
}

#[test]
fn label_is_positioned_at_pointer_plus_configured_shifts() {
    let (mut doc, points) = point_document(1);
    let groups = vec![json!(0)];
    let collection = find_points(&mut doc, "axes_1", &groups).expect("classify points");

    let mut coordinator = HoverCoordinator::new(FloatingLabel::new(), 12.0, -8.0);
    let binding = coordinator
        .bind(collection, groups, labels(1), "inline-block")
        .expect("bind points");

    coordinator
        .pointer_over(&mut doc, binding, points[0], 100.0, 50.0)
        .expect("pointer over");

    let label = coordinator.label();
    assert_abs_diff_eq!(label.left_px(), 112.0);
    assert_abs_diff_eq!(label.top_px(), 42.0);
    assert_eq!(label.display(), "inline-block");
}

#[test]
fn bind_fails_fast_on_short_group_sequence() {
    let (mut doc, _) = point_document(3);
    let groups = vec![json!("a"), json!("b"), json!("a")];
    let collection = find_points(&mut doc, "axes_1", &groups).expect("classify points");

    let mut coordinator = HoverCoordinator::new(FloatingLabel::new(), 0.0, 0.0);
    let err = coordinator
        .bind(collection, vec![json!("a")], labels(3), "block")
        .expect_err("one group id for three elements");
    assert!(matches!(
        err,
        PlotError::GroupSequenceTooShort {
            required: 3,
            supplied: 1,
            ..
        }
    ));
}

#[test]
fn bind_fails_fast_on_short_label_sequence() {
    let (mut doc, _) = point_document(3);
    let groups = vec![json!("a"), json!("b"), json!("a")];
    let collection = find_points(&mut doc, "axes_1", &groups).expect("classify points");

    let mut coordinator = HoverCoordinator::new(FloatingLabel::new(), 0.0, 0.0);
    let err = coordinator
        .bind(collection, groups, labels(2), "block")
        .expect_err("two labels for three elements");
    assert!(matches!(
        err,
        PlotError::LabelSequenceTooShort {
            required: 3,
            supplied: 2,
            ..
        }
    ));
}

#[test]
fn pointer_over_on_unbound_element_is_an_error_and_restyles_nothing() {
    let (mut doc, points) = point_document(2);
    let stranger = doc.append_child(doc.root(), "path");
    let groups = vec![json!("a"), json!("b")];
    let collection = find_points(&mut doc, "axes_1", &groups).expect("classify points");

    let mut coordinator = HoverCoordinator::new(FloatingLabel::new(), 0.0, 0.0);
    let binding = coordinator
        .bind(collection, groups, labels(2), "block")
        .expect("bind points");

    let err = coordinator
        .pointer_over(&mut doc, binding, stranger, 0.0, 0.0)
        .expect_err("element outside the collection");
    assert!(matches!(err, PlotError::ElementNotBound));
    for &point in &points {
        assert!(!doc.has_class(point, HOVERED_CLASS));
        assert!(!doc.has_class(point, NOT_HOVERED_CLASS));
    }
    assert!(!coordinator.label().visible());
}

#[test]
fn group_comparison_is_strict_across_value_kinds() {
    let (mut doc, points) = point_document(2);
    let groups: Vec<Value> = vec![json!(1), json!("1")];
    let collection = find_points(&mut doc, "axes_1", &groups).expect("classify points");

    let mut coordinator = HoverCoordinator::new(FloatingLabel::new(), 0.0, 0.0);
    let binding = coordinator
        .bind(collection, groups, labels(2), "block")
        .expect("bind points");

    coordinator
        .pointer_over(&mut doc, binding, points[0], 0.0, 0.0)
        .expect("pointer over");

    assert!(doc.has_class(points[0], HOVERED_CLASS));
    assert!(doc.has_class(points[1], NOT_HOVERED_CLASS));
    assert!(!doc.has_class(points[1], HOVERED_CLASS));
}

#[test]
fn explicit_null_groups_form_one_ordinary_group() {
    let (mut doc, points) = point_document(3);
    let groups: Vec<Value> = vec![Value::Null, json!("b"), Value::Null];
    let collection = find_points(&mut doc, "axes_1", &groups).expect("classify points");

    let mut coordinator = HoverCoordinator::new(FloatingLabel::new(), 0.0, 0.0);
    let binding = coordinator
        .bind(collection, groups, labels(3), "block")
        .expect("bind points");

    coordinator
        .pointer_over(&mut doc, binding, points[0], 0.0, 0.0)
        .expect("pointer over");

    assert!(doc.has_class(points[0], HOVERED_CLASS));
    assert!(doc.has_class(points[2], HOVERED_CLASS));
    assert!(doc.has_class(points[1], NOT_HOVERED_CLASS));
}

#[test]
fn latest_hover_owns_the_shared_label() {
    let mut doc = PlotDocument::new("svg");
    let axes = doc.append_group(doc.root(), "axes_1");
    let poly = doc.append_group(axes, "PolyCollection_1");
    let bar = doc.append_child(poly, "path");
    let path_collection = doc.append_group(axes, "PathCollection_1");
    let point = doc.append_child(path_collection, "path");

    let bars = find_bars(&mut doc, "axes_1");
    let points =
        find_points(&mut doc, "axes_1", &[json!("p")]).expect("classify points");

    let mut coordinator = HoverCoordinator::new(FloatingLabel::new(), 0.0, 0.0);
    let bar_binding = coordinator
        .bind(bars, vec![json!("bar")], vec!["bar label".to_owned()], "block")
        .expect("bind bars");
    let point_binding = coordinator
        .bind(points, vec![json!("p")], vec!["point label".to_owned()], "block")
        .expect("bind points");

    coordinator
        .pointer_over(&mut doc, bar_binding, bar, 0.0, 0.0)
        .expect("hover bar");
    assert_eq!(coordinator.label().content(), "bar label");

    coordinator
        .pointer_over(&mut doc, point_binding, point, 0.0, 0.0)
        .expect("hover point");
    assert_eq!(coordinator.label().content(), "point label");
}
