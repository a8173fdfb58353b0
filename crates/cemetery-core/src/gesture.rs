//! Press-move-release recognition for mouse and touch input.
//!
//! The tracker never touches the DOM or timers. Callers feed it positions,
//! hit-test results and timestamps; it answers with [`Gesture`]s. The
//! long-press timer itself lives in the front-end, which reports expiry via
//! [`GestureTracker::long_press_elapsed`].

use crate::constants::{DOUBLE_TAP_SLOP_PX, DOUBLE_TAP_WINDOW_MS, LONG_PRESS_MS, TAP_SLOP_PX};
use crate::mapping::DragRect;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

/// What a press landed on, resolved by ancestor lookup in the front-end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Surface,
    Modal,
    Gravestone(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    /// Selection box changed (including the zero-size box on press).
    DragRect(DragRect),
    DragCommitted(DragRect),
    DragCancelled,
    DoubleTap(Vec2),
    /// Short press on a stone.
    Tap(String),
    LongPressArmed { id: String, delay_ms: f64 },
    LongPressCancelled(String),
    MarkedForDeletion(String),
    DeleteConfirmed(String),
}

pub type Gestures = SmallVec<[Gesture; 2]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub min_drag: Vec2,
    pub double_tap: bool,
    pub long_press: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum DragPhase {
    #[default]
    Idle,
    Dragging {
        anchor: Vec2,
    },
}

#[derive(Clone, Debug)]
struct PendingPress {
    id: String,
    origin: Vec2,
    // long-press timer still counts
    armed: bool,
    marked: bool,
}

#[derive(Clone, Debug)]
pub struct GestureTracker {
    config: GestureConfig,
    phase: DragPhase,
    // one shared slot: a new press always replaces the previous target
    pending: Option<PendingPress>,
    last_tap: Option<(Vec2, f64)>,
}

impl GestureTracker {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: DragPhase::Idle,
            pending: None,
            last_tap: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Stone currently held down, if any.
    pub fn pending_target(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.id.as_str())
    }

    pub fn is_marked(&self, id: &str) -> bool {
        self.pending
            .as_ref()
            .map(|p| p.marked && p.id == id)
            .unwrap_or(false)
    }

    pub fn pointer_down(&mut self, pos: Vec2, target: &HitTarget) -> Gestures {
        match target {
            HitTarget::Surface => self.begin_drag(pos),
            HitTarget::Modal | HitTarget::Gravestone(_) => Gestures::new(),
        }
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> Gestures {
        match self.phase {
            DragPhase::Dragging { anchor } => {
                smallvec![Gesture::DragRect(DragRect::from_points(anchor, pos))]
            }
            DragPhase::Idle => Gestures::new(),
        }
    }

    pub fn pointer_up(&mut self, pos: Vec2) -> Gestures {
        let DragPhase::Dragging { anchor } = self.phase else {
            return Gestures::new();
        };
        self.phase = DragPhase::Idle;
        let rect = DragRect::from_points(anchor, pos);
        if rect.exceeds(self.config.min_drag) {
            log::debug!("[drag] commit {:.0}x{:.0}", rect.width(), rect.height());
            smallvec![Gesture::DragCommitted(rect)]
        } else {
            smallvec![Gesture::DragCancelled]
        }
    }

    /// Abandon an active drag. Returns nothing when idle.
    pub fn cancel(&mut self) -> Gestures {
        if self.is_dragging() {
            self.phase = DragPhase::Idle;
            smallvec![Gesture::DragCancelled]
        } else {
            Gestures::new()
        }
    }

    pub fn touch_start(&mut self, pos: Vec2, target: &HitTarget, now_ms: f64) -> Gestures {
        match target {
            HitTarget::Modal => Gestures::new(),
            HitTarget::Gravestone(id) => self.press_stone(id, pos),
            HitTarget::Surface => {
                if self.config.double_tap && self.is_second_tap(pos, now_ms) {
                    self.last_tap = None;
                    self.phase = DragPhase::Idle;
                    log::debug!("[touch] double tap at ({:.0},{:.0})", pos.x, pos.y);
                    return smallvec![Gesture::DoubleTap(pos)];
                }
                self.last_tap = Some((pos, now_ms));
                self.begin_drag(pos)
            }
        }
    }

    /// Any movement stops the long-press timer. The press stays a tap until
    /// it travels past [`TAP_SLOP_PX`]; a marked stone keeps its mark.
    pub fn touch_move(&mut self, pos: Vec2) -> Gestures {
        let mut out = Gestures::new();
        if let Some(p) = self.pending.as_mut().filter(|p| !p.marked) {
            if std::mem::take(&mut p.armed) && self.config.long_press {
                out.push(Gesture::LongPressCancelled(p.id.clone()));
            }
            if p.origin.distance(pos) > TAP_SLOP_PX {
                log::debug!("[touch] press on {} became a swipe", p.id);
                self.pending = None;
            }
        }
        if matches!(self.last_tap, Some((at, _)) if at.distance(pos) > DOUBLE_TAP_SLOP_PX) {
            self.last_tap = None;
        }
        out.extend(self.pointer_move(pos));
        out
    }

    pub fn touch_end(&mut self, pos: Vec2) -> Gestures {
        if let Some(p) = self.pending.take() {
            return if p.marked {
                smallvec![Gesture::DeleteConfirmed(p.id)]
            } else if p.armed && self.config.long_press {
                smallvec![Gesture::LongPressCancelled(p.id.clone()), Gesture::Tap(p.id)]
            } else {
                smallvec![Gesture::Tap(p.id)]
            };
        }
        self.pointer_up(pos)
    }

    /// The browser took the touch away (scroll, system gesture): nothing is
    /// created, deleted or opened.
    pub fn touch_cancel(&mut self) -> Gestures {
        let mut out = Gestures::new();
        if let Some(p) = self.pending.take() {
            if self.config.long_press {
                out.push(Gesture::LongPressCancelled(p.id));
            }
        }
        self.last_tap = None;
        out.extend(self.cancel());
        out
    }

    /// Long-press timer for `id` fired. Stale timers are ignored.
    pub fn long_press_elapsed(&mut self, id: &str) -> Gestures {
        match self.pending.as_mut() {
            Some(p) if p.id == id && p.armed && !p.marked => {
                p.armed = false;
                p.marked = true;
                smallvec![Gesture::MarkedForDeletion(p.id.clone())]
            }
            _ => Gestures::new(),
        }
    }

    fn begin_drag(&mut self, pos: Vec2) -> Gestures {
        self.phase = DragPhase::Dragging { anchor: pos };
        smallvec![Gesture::DragRect(DragRect::from_points(pos, pos))]
    }

    fn press_stone(&mut self, id: &str, pos: Vec2) -> Gestures {
        let mut out = Gestures::new();
        if let Some(prev) = self.pending.take() {
            if self.config.long_press {
                out.push(Gesture::LongPressCancelled(prev.id));
            }
        }
        self.pending = Some(PendingPress {
            id: id.to_string(),
            origin: pos,
            armed: self.config.long_press,
            marked: false,
        });
        if self.config.long_press {
            out.push(Gesture::LongPressArmed {
                id: id.to_string(),
                delay_ms: LONG_PRESS_MS,
            });
        }
        out
    }

    fn is_second_tap(&self, pos: Vec2, now_ms: f64) -> bool {
        match self.last_tap {
            Some((prev, at)) => {
                now_ms - at <= DOUBLE_TAP_WINDOW_MS && prev.distance(pos) <= DOUBLE_TAP_SLOP_PX
            }
            None => false,
        }
    }
}
