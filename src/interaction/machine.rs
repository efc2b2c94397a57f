use crate::config::EditorConfig;
use crate::editor::{Editor, LayerId};
use crate::geometry::Shape;
use crate::math::{Point2, Vector2};

use super::{Command, InputEvent};

/// Pointer gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No gesture.
    #[default]
    Idle,
    /// A new rectangle's opposite corner follows the pointer.
    Drawing { start: Point2 },
    /// One vertex of the pending shape follows the pointer.
    Dragging { vertex: usize },
}

/// What handling one event did to the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// The event had no effect in the current state.
    Ignored,
    DrawStarted { start: Point2 },
    DrawUpdated,
    /// The drawn rectangle is large enough and stays pending.
    DrawRetained,
    /// The drawn rectangle was too small and was dropped as a misclick.
    DrawDiscarded,
    DragStarted { vertex: usize },
    VertexMoved { vertex: usize },
    DragEnded,
    Committed(LayerId),
    PendingReset,
    PendingTransformed,
}

/// Returns `true` if a drawn shape is too small to keep.
#[must_use]
pub fn is_misclick(config: &EditorConfig, shape: &Shape) -> bool {
    shape.width() < config.min_side
        || shape.height() < config.min_side
        || shape.diagonal() < config.min_diagonal
}

/// Pointer and keyboard state machine driving an [`Editor`].
///
/// Only one gesture is active at a time: a pointer-down while drawing or
/// dragging is ignored, and keys and commands are ignored until the gesture
/// ends.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: InteractionState,
}

impl Interaction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Applies one input event to `editor`.
    pub fn handle(&mut self, editor: &mut Editor, event: &InputEvent) -> Transition {
        let transition = match event {
            InputEvent::PointerDown(p) => self.pointer_down(editor, *p),
            InputEvent::PointerMove(p) => self.pointer_move(editor, *p),
            InputEvent::PointerUp(_) => self.pointer_up(editor),
            InputEvent::PointerLeave(_) => match self.state {
                InteractionState::Drawing { .. } => self.pointer_up(editor),
                _ => Transition::Ignored,
            },
            InputEvent::KeyUp(key) => self.key_up(editor, key),
            InputEvent::Command(command) => self.command(editor, command),
        };
        match transition {
            Transition::Ignored => {}
            Transition::DrawUpdated | Transition::VertexMoved { .. } => {
                tracing::trace!(?transition, state = ?self.state, "interaction");
            }
            _ => tracing::debug!(?transition, state = ?self.state, "interaction"),
        }
        transition
    }

    fn pointer_down(&mut self, editor: &mut Editor, p: Point2) -> Transition {
        if self.state != InteractionState::Idle {
            return Transition::Ignored;
        }
        if editor.pending().is_none() {
            let params = editor.config().shape_params();
            editor.set_pending(Shape::empty(params));
            self.state = InteractionState::Drawing { start: p };
            return Transition::DrawStarted { start: p };
        }
        match editor.pending().and_then(|shape| shape.handle_at(&p)) {
            Some(vertex) => {
                self.state = InteractionState::Dragging { vertex };
                Transition::DragStarted { vertex }
            }
            None => Transition::Ignored,
        }
    }

    fn pointer_move(&mut self, editor: &mut Editor, p: Point2) -> Transition {
        match self.state {
            InteractionState::Idle => Transition::Ignored,
            InteractionState::Drawing { start } => {
                let Some(shape) = editor.pending_mut() else {
                    self.state = InteractionState::Idle;
                    return Transition::Ignored;
                };
                shape.set_path(Shape::rectangle_path(start, p));
                Transition::DrawUpdated
            }
            InteractionState::Dragging { vertex } => {
                let moved = editor
                    .pending_mut()
                    .map(|shape| shape.move_vertex(vertex, p));
                match moved {
                    Some(Ok(())) => Transition::VertexMoved { vertex },
                    Some(Err(err)) => {
                        tracing::warn!(%err, "drag target vanished");
                        self.state = InteractionState::Idle;
                        Transition::Ignored
                    }
                    None => {
                        self.state = InteractionState::Idle;
                        Transition::Ignored
                    }
                }
            }
        }
    }

    fn pointer_up(&mut self, editor: &mut Editor) -> Transition {
        let previous = std::mem::take(&mut self.state);
        match previous {
            InteractionState::Idle => Transition::Ignored,
            InteractionState::Dragging { .. } => Transition::DragEnded,
            InteractionState::Drawing { .. } => {
                let discard = match editor.pending() {
                    Some(shape) => is_misclick(editor.config(), shape),
                    None => true,
                };
                if discard {
                    editor.reset_pending();
                    Transition::DrawDiscarded
                } else {
                    Transition::DrawRetained
                }
            }
        }
    }

    fn key_up(&self, editor: &mut Editor, key: &str) -> Transition {
        if self.state != InteractionState::Idle || !editor.config().is_confirm_key(key) {
            return Transition::Ignored;
        }
        editor
            .commit_pending()
            .map_or(Transition::Ignored, Transition::Committed)
    }

    fn command(&self, editor: &mut Editor, command: &Command) -> Transition {
        if self.state != InteractionState::Idle {
            return Transition::Ignored;
        }
        match *command {
            Command::Reset => editor
                .reset_pending()
                .map_or(Transition::Ignored, |_| Transition::PendingReset),
            Command::Rotate { degrees } => {
                reshape_pending(editor, |shape| shape.rotate_about_centroid(degrees.to_radians()))
            }
            Command::Scale { factor } => {
                reshape_pending(editor, |shape| shape.scale_about_centroid(factor))
            }
            Command::Translate { dx, dy } => {
                reshape_pending(editor, |shape| shape.translate(Vector2::new(dx, dy)))
            }
        }
    }
}

fn reshape_pending(editor: &mut Editor, f: impl FnOnce(&mut Shape)) -> Transition {
    match editor.pending_mut() {
        Some(shape) => {
            f(shape);
            Transition::PendingTransformed
        }
        None => Transition::Ignored,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::editor::Collection;

    fn editor() -> Editor {
        Editor::new(EditorConfig::default(), 800.0, 600.0).unwrap()
    }

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn draw(ix: &mut Interaction, ed: &mut Editor, from: Point2, to: Point2) -> Transition {
        ix.handle(ed, &InputEvent::PointerDown(from));
        ix.handle(ed, &InputEvent::PointerMove(to));
        ix.handle(ed, &InputEvent::PointerUp(to))
    }

    #[test]
    fn small_rectangle_is_discarded() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        let t = draw(&mut ix, &mut ed, p(100.0, 100.0), p(105.0, 105.0));
        assert_eq!(t, Transition::DrawDiscarded);
        assert!(ed.pending().is_none());
        assert_eq!(ix.state(), InteractionState::Idle);
    }

    #[test]
    fn large_rectangle_is_retained() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        let t = draw(&mut ix, &mut ed, p(100.0, 100.0), p(140.0, 140.0));
        assert_eq!(t, Transition::DrawRetained);
        let shape = ed.pending().unwrap();
        assert_eq!(shape.len(), 4);
        assert!((shape.width() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn thin_rectangle_is_discarded_despite_long_diagonal() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        let t = draw(&mut ix, &mut ed, p(0.0, 0.0), p(200.0, 5.0));
        assert_eq!(t, Transition::DrawDiscarded);
    }

    #[test]
    fn click_without_move_is_discarded() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        ix.handle(&mut ed, &InputEvent::PointerDown(p(10.0, 10.0)));
        assert!(ed.pending().unwrap().is_empty());
        let t = ix.handle(&mut ed, &InputEvent::PointerUp(p(10.0, 10.0)));
        assert_eq!(t, Transition::DrawDiscarded);
    }

    #[test]
    fn move_updates_rectangle_from_fixed_start() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        ix.handle(&mut ed, &InputEvent::PointerDown(p(10.0, 20.0)));
        ix.handle(&mut ed, &InputEvent::PointerMove(p(30.0, 60.0)));
        let t = ix.handle(&mut ed, &InputEvent::PointerMove(p(70.0, 90.0)));
        assert_eq!(t, Transition::DrawUpdated);
        assert_eq!(
            ed.pending().unwrap().path(),
            &[p(10.0, 20.0), p(70.0, 20.0), p(70.0, 90.0), p(10.0, 90.0)]
        );
    }

    #[test]
    fn pointer_leave_ends_drawing() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        ix.handle(&mut ed, &InputEvent::PointerDown(p(0.0, 0.0)));
        ix.handle(&mut ed, &InputEvent::PointerMove(p(60.0, 60.0)));
        let t = ix.handle(&mut ed, &InputEvent::PointerLeave(p(60.0, 60.0)));
        assert_eq!(t, Transition::DrawRetained);
        assert_eq!(ix.state(), InteractionState::Idle);
    }

    #[test]
    fn down_on_handle_starts_drag() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        draw(&mut ix, &mut ed, p(100.0, 100.0), p(200.0, 160.0));
        let t = ix.handle(&mut ed, &InputEvent::PointerDown(p(198.0, 158.0)));
        assert_eq!(t, Transition::DragStarted { vertex: 2 });
        assert_eq!(ix.state(), InteractionState::Dragging { vertex: 2 });
    }

    #[test]
    fn down_away_from_handles_with_pending_is_ignored() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        draw(&mut ix, &mut ed, p(100.0, 100.0), p(200.0, 160.0));
        let t = ix.handle(&mut ed, &InputEvent::PointerDown(p(150.0, 130.0)));
        assert_eq!(t, Transition::Ignored);
        assert_eq!(ix.state(), InteractionState::Idle);
    }

    #[test]
    fn drag_moves_only_target_vertex() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        draw(&mut ix, &mut ed, p(100.0, 100.0), p(200.0, 160.0));
        let before = ed.pending().unwrap().path().to_vec();
        ix.handle(&mut ed, &InputEvent::PointerDown(p(101.0, 101.0)));
        let t = ix.handle(&mut ed, &InputEvent::PointerMove(p(80.0, 70.0)));
        assert_eq!(t, Transition::VertexMoved { vertex: 0 });
        let shape = ed.pending().unwrap();
        assert_eq!(shape.path()[0], p(80.0, 70.0));
        for i in 1..4 {
            assert_eq!(shape.path()[i].x.to_bits(), before[i].x.to_bits());
            assert_eq!(shape.path()[i].y.to_bits(), before[i].y.to_bits());
        }
        assert!((shape.width() - 120.0).abs() < 1e-12);
        assert!((shape.height() - 90.0).abs() < 1e-12);
        let c = shape.centroid().unwrap();
        assert!((c.x - (80.0 + 200.0 + 200.0 + 100.0) / 4.0).abs() < 1e-12);
        assert!((c.y - (70.0 + 100.0 + 160.0 + 160.0) / 4.0).abs() < 1e-12);
    }

    #[test]
    fn second_down_while_dragging_is_ignored() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        draw(&mut ix, &mut ed, p(100.0, 100.0), p(200.0, 160.0));
        ix.handle(&mut ed, &InputEvent::PointerDown(p(100.0, 100.0)));
        let t = ix.handle(&mut ed, &InputEvent::PointerDown(p(200.0, 160.0)));
        assert_eq!(t, Transition::Ignored);
        assert_eq!(ix.state(), InteractionState::Dragging { vertex: 0 });
    }

    #[test]
    fn up_ends_drag_unconditionally() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        draw(&mut ix, &mut ed, p(100.0, 100.0), p(200.0, 160.0));
        ix.handle(&mut ed, &InputEvent::PointerDown(p(100.0, 100.0)));
        // Collapsing the shape by dragging does not discard it.
        ix.handle(&mut ed, &InputEvent::PointerMove(p(200.0, 160.0)));
        let t = ix.handle(&mut ed, &InputEvent::PointerUp(p(200.0, 160.0)));
        assert_eq!(t, Transition::DragEnded);
        assert!(ed.pending().is_some());
        assert_eq!(ix.state(), InteractionState::Idle);
    }

    #[test]
    fn pointer_leave_does_not_end_drag() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        draw(&mut ix, &mut ed, p(100.0, 100.0), p(200.0, 160.0));
        ix.handle(&mut ed, &InputEvent::PointerDown(p(100.0, 100.0)));
        let t = ix.handle(&mut ed, &InputEvent::PointerLeave(p(0.0, 0.0)));
        assert_eq!(t, Transition::Ignored);
        assert_eq!(ix.state(), InteractionState::Dragging { vertex: 0 });
    }

    #[test]
    fn confirm_key_commits_pending() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        draw(&mut ix, &mut ed, p(100.0, 100.0), p(200.0, 160.0));
        let t = ix.handle(&mut ed, &InputEvent::KeyUp("enter".to_owned()));
        let Transition::Committed(id) = t else {
            panic!("expected commit, got {t:?}");
        };
        assert_eq!(ed.ids(Collection::Active), &[id]);
        assert!(ed.pending().is_none());
        // With nothing pending, the next pointer-down starts a new drawing.
        let t = ix.handle(&mut ed, &InputEvent::PointerDown(p(5.0, 5.0)));
        assert_eq!(t, Transition::DrawStarted { start: p(5.0, 5.0) });
    }

    #[test]
    fn other_keys_and_empty_confirm_are_ignored() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        assert_eq!(ix.handle(&mut ed, &InputEvent::KeyUp("Enter".to_owned())), Transition::Ignored);
        draw(&mut ix, &mut ed, p(100.0, 100.0), p(200.0, 160.0));
        assert_eq!(ix.handle(&mut ed, &InputEvent::KeyUp("a".to_owned())), Transition::Ignored);
        assert!(ed.pending().is_some());
    }

    #[test]
    fn keys_are_ignored_mid_gesture() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        ix.handle(&mut ed, &InputEvent::PointerDown(p(0.0, 0.0)));
        ix.handle(&mut ed, &InputEvent::PointerMove(p(80.0, 80.0)));
        let t = ix.handle(&mut ed, &InputEvent::KeyUp("Enter".to_owned()));
        assert_eq!(t, Transition::Ignored);
        assert!(ed.ids(Collection::Active).is_empty());
    }

    #[test]
    fn reset_command_discards_pending() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        draw(&mut ix, &mut ed, p(100.0, 100.0), p(200.0, 160.0));
        let t = ix.handle(&mut ed, &InputEvent::Command(Command::Reset));
        assert_eq!(t, Transition::PendingReset);
        assert!(ed.pending().is_none());
        let t = ix.handle(&mut ed, &InputEvent::Command(Command::Reset));
        assert_eq!(t, Transition::Ignored);
    }

    #[test]
    fn transform_commands_keep_or_move_centroid() {
        let mut ed = editor();
        let mut ix = Interaction::new();
        draw(&mut ix, &mut ed, p(100.0, 100.0), p(200.0, 160.0));
        let c0 = ed.pending().unwrap().centroid().unwrap();

        let t = ix.handle(&mut ed, &InputEvent::Command(Command::Rotate { degrees: 90.0 }));
        assert_eq!(t, Transition::PendingTransformed);
        let shape = ed.pending().unwrap();
        assert!((shape.centroid().unwrap() - c0).norm() < 1e-9);
        assert!((shape.width() - 60.0).abs() < 1e-9);
        assert!((shape.height() - 100.0).abs() < 1e-9);

        ix.handle(&mut ed, &InputEvent::Command(Command::Scale { factor: 0.5 }));
        assert!((ed.pending().unwrap().width() - 30.0).abs() < 1e-9);

        ix.handle(&mut ed, &InputEvent::Command(Command::Translate { dx: 10.0, dy: -5.0 }));
        let c1 = ed.pending().unwrap().centroid().unwrap();
        assert!((c1.x - (c0.x + 10.0)).abs() < 1e-9);
        assert!((c1.y - (c0.y - 5.0)).abs() < 1e-9);
    }

    #[test]
    fn misclick_thresholds() {
        let config = EditorConfig::default();
        let square = |s: f64| Shape::new(Shape::rectangle_path(p(0.0, 0.0), p(s, s)));
        assert!(is_misclick(&config, &square(5.0)));
        assert!(is_misclick(&config, &square(35.0)));
        assert!(!is_misclick(&config, &square(40.0)));
        assert!(is_misclick(&config, &Shape::default()));
    }
}
