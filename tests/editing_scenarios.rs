use design_craft::command::{Command, Editor};
use design_craft::document::Drawing;
use design_craft::pline::Pline;
use design_craft::tools::{new_tool, Tool};
use design_craft::EditorConfig;
use kurbo::Point;

// Builds the two reference entities through the tools, as a user would
fn line_and_rectangle() -> (Drawing, Editor) {
    let config = EditorConfig::default();
    let mut drawing = Drawing::new();
    let mut editor = Editor::new();

    let mut line = new_tool("Line", &config).unwrap();
    assert!(line.on_pointer_down(Point::new(0.0, 0.0)).is_none());
    let cmd = line.on_pointer_down(Point::new(10.0, 10.0)).unwrap();
    editor.execute(cmd, &mut drawing);

    let mut rect = new_tool("Rectangle", &config).unwrap();
    assert!(rect.on_pointer_down(Point::new(0.0, 0.0)).is_none());
    rect.on_pointer_move(Point::new(5.0, 5.0));
    let cmd = rect.on_pointer_down(Point::new(5.0, 5.0)).unwrap();
    editor.execute(cmd, &mut drawing);

    (drawing, editor)
}

#[test]
fn undo_removes_last_and_redo_restores_it() {
    let (mut drawing, mut editor) = line_and_rectangle();
    assert_eq!(drawing.count(), 2);
    let rectangle = drawing.plines()[1].clone();

    assert!(editor.undo(&mut drawing));
    assert_eq!(drawing.count(), 1);
    assert_eq!(drawing.plines()[0].points().len(), 2);

    assert!(editor.redo(&mut drawing));
    assert_eq!(drawing.count(), 2);
    assert_eq!(drawing.plines()[1], rectangle);
}

#[test]
fn k_undos_then_k_redos_restore_the_drawing() {
    let mut drawing = Drawing::new();
    let mut editor = Editor::new();
    for i in 0..5 {
        let x = i as f64;
        editor.execute(
            Command::AddPline(Pline::line(Point::new(x, 0.0), Point::new(x, 10.0))),
            &mut drawing,
        );
    }
    let original = drawing.plines().to_vec();
    let original_bound = drawing.bound();

    for _ in 0..5 {
        assert!(editor.undo(&mut drawing));
    }
    assert!(drawing.is_empty());
    assert!(drawing.bound().is_empty());
    assert!(!editor.undo(&mut drawing));

    for _ in 0..5 {
        assert!(editor.redo(&mut drawing));
    }
    assert_eq!(drawing.plines(), original.as_slice());
    assert_eq!(drawing.bound(), original_bound);
}

#[test]
fn redo_after_new_construction_is_a_no_op() {
    let (mut drawing, mut editor) = line_and_rectangle();
    editor.undo(&mut drawing);
    editor.undo(&mut drawing);
    editor.execute(
        Command::AddPline(Pline::line(Point::new(3.0, 3.0), Point::new(4.0, 4.0))),
        &mut drawing,
    );
    assert!(!editor.can_redo());
    assert!(!editor.redo(&mut drawing));
    assert_eq!(drawing.count(), 1);
}

#[test]
fn bound_tracks_membership() {
    let (mut drawing, mut editor) = line_and_rectangle();
    assert_eq!(drawing.bound().max_x, 10.0);

    drawing.plines_mut()[0].set_selected(true);
    assert_eq!(editor.delete_selected(&mut drawing), 1);
    assert_eq!(drawing.bound().max_x, 5.0);

    editor.clear(&mut drawing);
    assert!(drawing.bound().is_empty());
    assert!(!editor.can_undo(&drawing));
}

#[test]
fn batch_delete_comes_back_in_one_redo() {
    let (mut drawing, mut editor) = line_and_rectangle();
    let before = drawing.plines().to_vec();
    editor.execute(
        Command::SelectWithin(design_craft::Bound::from_corners(
            Point::new(-1.0, -1.0),
            Point::new(11.0, 11.0),
        )),
        &mut drawing,
    );
    editor.execute(Command::DeleteSelected, &mut drawing);
    assert!(drawing.is_empty());

    assert!(editor.redo(&mut drawing));
    assert_eq!(drawing.plines(), before.as_slice());
    assert!(!editor.can_redo());
}

#[test]
fn undo_after_batch_delete_stacks_on_top_of_the_batch() {
    let mut drawing = Drawing::new();
    let mut editor = Editor::new();
    for x in [0.0, 20.0, 40.0] {
        editor.execute(
            Command::AddPline(Pline::line(Point::new(x, 0.0), Point::new(x + 5.0, 5.0))),
            &mut drawing,
        );
    }
    let original = drawing.plines().to_vec();
    drawing.plines_mut()[0].set_selected(true);
    drawing.plines_mut()[2].set_selected(true);
    editor.execute(Command::DeleteSelected, &mut drawing);
    assert_eq!(drawing.plines(), &original[1..2]);
    assert_eq!(editor.redo_len(), 1);

    // Undo still pops the last remaining pline; its record goes above the batch
    assert!(editor.undo(&mut drawing));
    assert!(drawing.is_empty());
    assert_eq!(editor.redo_len(), 2);
    assert!(!editor.can_undo(&drawing));

    assert!(editor.redo(&mut drawing));
    assert_eq!(drawing.plines(), &original[1..2]);

    assert!(editor.redo(&mut drawing));
    assert_eq!(drawing.plines(), original.as_slice());
    assert!(!editor.can_redo());
}
