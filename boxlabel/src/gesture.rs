//! Draw-gesture state machine.
//!
//! A gesture is armed by the add command, collects pointer input until it
//! yields a [`Effect::Finish`], and is then disarmed. Each protocol is a
//! [`GestureStrategy`]; the controller holds exactly one.

use crate::model::{Bounds, Point};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// First point captured; the preview has zero size.
    Anchoring { anchor: Point },
    /// Preview visible and tracking the pointer.
    Dragging { anchor: Point, current: Point },
}

impl GestureState {
    pub fn anchor(&self) -> Option<Point> {
        match *self {
            GestureState::Idle => None,
            GestureState::Anchoring { anchor } | GestureState::Dragging { anchor, .. } => {
                Some(anchor)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
}

/// Pointer event already mapped into canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub point: Point,
    pub button: PointerButton,
}

impl PointerInput {
    pub fn primary(x: f32, y: f32) -> Self {
        PointerInput {
            point: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn secondary(x: f32, y: f32) -> Self {
        PointerInput {
            point: Point::new(x, y),
            button: PointerButton::Secondary,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    None,
    ShowPreview(Bounds),
    UpdatePreview(Bounds),
    Finish(Bounds),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub state: GestureState,
    pub effect: Effect,
}

impl Step {
    fn stay(state: GestureState) -> Step {
        Step {
            state,
            effect: Effect::None,
        }
    }
}

pub trait GestureStrategy {
    /// Every pointer kind this protocol consumes. Registered and unregistered
    /// as a whole.
    fn listeners(&self) -> &'static [PointerKind];
    fn pointer_down(&self, state: GestureState, p: Point) -> Step;
    fn pointer_move(&self, state: GestureState, p: Point) -> Step;
    fn pointer_up(&self, state: GestureState, p: Point) -> Step;

    fn handle(&self, kind: PointerKind, state: GestureState, p: Point) -> Step {
        match kind {
            PointerKind::Down => self.pointer_down(state, p),
            PointerKind::Move => self.pointer_move(state, p),
            PointerKind::Up => self.pointer_up(state, p),
        }
    }
}

/// Press, drag, release.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressDragRelease;

impl GestureStrategy for PressDragRelease {
    fn listeners(&self) -> &'static [PointerKind] {
        &[PointerKind::Down, PointerKind::Move, PointerKind::Up]
    }

    fn pointer_down(&self, state: GestureState, p: Point) -> Step {
        match state {
            GestureState::Idle => Step {
                state: GestureState::Anchoring { anchor: p },
                effect: Effect::ShowPreview(Bounds::at(p)),
            },
            other => Step::stay(other),
        }
    }

    fn pointer_move(&self, state: GestureState, p: Point) -> Step {
        match state.anchor() {
            Some(anchor) => Step {
                state: GestureState::Dragging { anchor, current: p },
                effect: Effect::UpdatePreview(Bounds::from_corners(anchor, p)),
            },
            None => Step::stay(state),
        }
    }

    fn pointer_up(&self, state: GestureState, p: Point) -> Step {
        match state.anchor() {
            Some(anchor) => Step {
                state: GestureState::Idle,
                effect: Effect::Finish(Bounds::from_corners(anchor, p)),
            },
            None => Step::stay(state),
        }
    }
}

/// Two discrete presses define opposite corners.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickClick;

impl GestureStrategy for ClickClick {
    fn listeners(&self) -> &'static [PointerKind] {
        &[PointerKind::Down]
    }

    fn pointer_down(&self, state: GestureState, p: Point) -> Step {
        match state.anchor() {
            None => Step {
                state: GestureState::Anchoring { anchor: p },
                effect: Effect::ShowPreview(Bounds::at(p)),
            },
            Some(anchor) => Step {
                state: GestureState::Idle,
                effect: Effect::Finish(Bounds::from_corners(anchor, p)),
            },
        }
    }

    fn pointer_move(&self, state: GestureState, _p: Point) -> Step {
        Step::stay(state)
    }

    fn pointer_up(&self, state: GestureState, _p: Point) -> Step {
        Step::stay(state)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureProtocol {
    #[default]
    PressDragRelease,
    ClickClick,
}

impl GestureProtocol {
    pub fn strategy(self) -> Box<dyn GestureStrategy> {
        match self {
            GestureProtocol::PressDragRelease => Box::new(PressDragRelease),
            GestureProtocol::ClickClick => Box::new(ClickClick),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(s: &dyn GestureStrategy, events: &[(PointerKind, f32, f32)]) -> (GestureState, Vec<Effect>) {
        let mut state = GestureState::Idle;
        let mut effects = Vec::new();
        for &(k, x, y) in events {
            let step = s.handle(k, state, Point::new(x, y));
            state = step.state;
            effects.push(step.effect);
        }
        (state, effects)
    }

    #[test]
    fn press_drag_release_tracks_pointer() {
        let (state, fx) = run(
            &PressDragRelease,
            &[
                (PointerKind::Down, 100.0, 100.0),
                (PointerKind::Move, 120.0, 90.0),
                (PointerKind::Move, 150.0, 140.0),
                (PointerKind::Up, 150.0, 140.0),
            ],
        );
        assert_eq!(state, GestureState::Idle);
        assert_eq!(fx[0], Effect::ShowPreview(Bounds::at(Point::new(100.0, 100.0))));
        assert_eq!(fx[1], Effect::UpdatePreview(Bounds::new(100.0, 90.0, 20.0, 10.0)));
        assert_eq!(fx[3], Effect::Finish(Bounds::new(100.0, 100.0, 50.0, 40.0)));
    }

    #[test]
    fn press_drag_release_ignores_move_before_down() {
        let (state, fx) = run(&PressDragRelease, &[(PointerKind::Move, 1.0, 1.0), (PointerKind::Up, 2.0, 2.0)]);
        assert_eq!(state, GestureState::Idle);
        assert_eq!(fx, vec![Effect::None, Effect::None]);
    }

    #[test]
    fn click_click_uses_two_downs() {
        let (state, fx) = run(
            &ClickClick,
            &[
                (PointerKind::Down, 50.0, 60.0),
                (PointerKind::Move, 70.0, 70.0),
                (PointerKind::Up, 50.0, 60.0),
                (PointerKind::Down, 10.0, 20.0),
            ],
        );
        assert_eq!(state, GestureState::Idle);
        assert_eq!(fx[1], Effect::None);
        assert_eq!(fx[2], Effect::None);
        assert_eq!(fx[3], Effect::Finish(Bounds::new(10.0, 20.0, 40.0, 40.0)));
    }

    #[test]
    fn protocols_register_disjoint_shapes() {
        assert_eq!(PressDragRelease.listeners().len(), 3);
        assert_eq!(ClickClick.listeners(), &[PointerKind::Down]);
    }
}
