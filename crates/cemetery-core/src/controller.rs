//! Session controller: the one owner of registry, gesture state and the
//! inscription selection.
//!
//! Front-end listeners call the handler methods with event payloads and apply
//! the returned [`Effect`]s to the page. Nothing here renders or animates.

use crate::constants::{VIBRATE_DELETE_MS, VIBRATE_MARK_MS, VIBRATE_TAP_MS};
use crate::gesture::{Gesture, GestureConfig, GestureTracker, Gestures, HitTarget};
use crate::inscription::InscriptionForm;
use crate::mapping::{ContainerRect, DragRect};
use crate::profile::Profile;
use crate::record::{GravestoneRecord, Placement};
use crate::registry::Registry;
use crate::store::SnapshotStore;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    DragRect(DragRect),
    DragCleared,
    /// Rebuilt from storage at start-up; no appearance animation.
    Restored { id: String, record: GravestoneRecord },
    Created { id: String, record: GravestoneRecord },
    Inscribed { id: String, record: GravestoneRecord },
    Removed { id: String },
    ModalOpened { id: String },
    ModalClosed,
    LongPressArmed { id: String, delay_ms: f64 },
    LongPressCancelled { id: String },
    MarkedForDeletion { id: String },
    TapPulse(Vec2),
    Vibrate(u32),
    Burst { id: String },
}

pub type Effects = SmallVec<[Effect; 4]>;

pub struct Cemetery<S: SnapshotStore> {
    profile: Profile,
    registry: Registry<S>,
    tracker: GestureTracker,
    container: ContainerRect,
    current: Option<String>,
}

impl<S: SnapshotStore> Cemetery<S> {
    pub fn new(profile: Profile, store: S) -> Self {
        let registry = Registry::new(profile.storage_key, profile.id_prefix, store);
        let tracker = GestureTracker::new(GestureConfig {
            min_drag: profile.min_drag,
            double_tap: profile.gestures.double_tap,
            long_press: profile.gestures.long_press,
        });
        Self {
            profile,
            registry,
            tracker,
            container: ContainerRect::new(0.0, 0.0, 0.0, 0.0),
            current: None,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// Stone whose inscription modal is open.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn set_container(&mut self, rect: ContainerRect) {
        self.container = rect;
    }

    /// Load saved stones; one `Restored` effect per record, oldest first.
    pub fn restore(&mut self) -> Effects {
        self.registry
            .restore()
            .into_iter()
            .filter_map(|id| {
                let record = self.registry.get(&id)?.clone();
                Some(Effect::Restored { id, record })
            })
            .collect()
    }

    pub fn pointer_down(&mut self, pos: Vec2, target: &HitTarget) -> Effects {
        let gestures = self.tracker.pointer_down(pos, target);
        self.apply(gestures)
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> Effects {
        let gestures = self.tracker.pointer_move(pos);
        self.apply(gestures)
    }

    pub fn pointer_up(&mut self, pos: Vec2) -> Effects {
        let gestures = self.tracker.pointer_up(pos);
        self.apply(gestures)
    }

    pub fn touch_start(&mut self, pos: Vec2, target: &HitTarget, now_ms: f64) -> Effects {
        let gestures = self.tracker.touch_start(pos, target, now_ms);
        self.apply(gestures)
    }

    pub fn touch_move(&mut self, pos: Vec2) -> Effects {
        let gestures = self.tracker.touch_move(pos);
        self.apply(gestures)
    }

    pub fn touch_end(&mut self, pos: Vec2) -> Effects {
        let gestures = self.tracker.touch_end(pos);
        self.apply(gestures)
    }

    pub fn touch_cancel(&mut self) -> Effects {
        let gestures = self.tracker.touch_cancel();
        self.apply(gestures)
    }

    pub fn long_press_elapsed(&mut self, id: &str) -> Effects {
        let gestures = self.tracker.long_press_elapsed(id);
        self.apply(gestures)
    }

    /// Mouse click on a placed stone.
    pub fn click_gravestone(&mut self, id: &str) -> Effects {
        self.open_modal(id)
    }

    /// Right click. Deletes a stone when the profile allows it.
    pub fn context_menu(&mut self, target: &HitTarget) -> Effects {
        match target {
            HitTarget::Gravestone(id) if self.profile.gestures.context_delete => self.delete(id),
            _ => Effects::new(),
        }
    }

    /// Escape cancels an active drag; only when idle does it close the modal.
    pub fn escape(&mut self) -> Effects {
        let cancelled = self.tracker.cancel();
        if !cancelled.is_empty() {
            return self.apply(cancelled);
        }
        self.close_modal()
    }

    pub fn close_modal(&mut self) -> Effects {
        match self.current.take() {
            Some(_) => smallvec::smallvec![Effect::ModalClosed],
            None => Effects::new(),
        }
    }

    /// Save the form onto the current stone and close the modal.
    ///
    /// A blank free-text form leaves everything untouched.
    pub fn submit_inscription(&mut self, form: InscriptionForm, now_ms: f64) -> Effects {
        let Some(id) = self.current.clone() else {
            return Effects::new();
        };
        let Some(inscription) = form.into_inscription(self.profile.inscription, now_ms) else {
            log::debug!("[modal] empty inscription for {}, skipped", id);
            return Effects::new();
        };
        let mut out = Effects::new();
        if self.registry.inscribe(&id, inscription) {
            if let Some(record) = self.registry.get(&id) {
                out.push(Effect::Inscribed {
                    id: id.clone(),
                    record: record.clone(),
                });
            }
        }
        out.extend(self.close_modal());
        if out.iter().any(|e| matches!(e, Effect::Inscribed { .. })) {
            out.push(Effect::Burst { id });
        }
        out
    }

    fn open_modal(&mut self, id: &str) -> Effects {
        if !self.registry.contains(id) {
            return Effects::new();
        }
        self.current = Some(id.to_string());
        log::info!("[modal] open {}", id);
        smallvec::smallvec![Effect::ModalOpened { id: id.to_string() }]
    }

    fn create(&mut self, placement: Option<Placement>) -> Effects {
        let Some(placement) = placement else {
            log::debug!("[drag] placement rejected");
            return Effects::new();
        };
        let id = self.registry.create(placement);
        match self.registry.get(&id) {
            Some(record) => smallvec::smallvec![Effect::Created {
                id,
                record: record.clone()
            }],
            None => Effects::new(),
        }
    }

    fn delete(&mut self, id: &str) -> Effects {
        let mut out = Effects::new();
        if self.registry.remove(id).is_none() {
            return out;
        }
        if self.current.as_deref() == Some(id) {
            out.extend(self.close_modal());
        }
        out.push(Effect::Removed { id: id.to_string() });
        out
    }

    fn apply(&mut self, gestures: Gestures) -> Effects {
        let mut out = Effects::new();
        for g in gestures {
            match g {
                Gesture::DragRect(rect) => out.push(Effect::DragRect(rect)),
                Gesture::DragCancelled => out.push(Effect::DragCleared),
                Gesture::DragCommitted(rect) => {
                    out.push(Effect::DragCleared);
                    let placement = self.profile.place(&rect, &self.container);
                    out.extend(self.create(placement));
                }
                Gesture::DoubleTap(pos) => {
                    out.push(Effect::DragCleared);
                    out.push(Effect::TapPulse(pos));
                    out.push(Effect::Vibrate(VIBRATE_TAP_MS));
                    let placement = self.profile.place_tap(pos, &self.container);
                    out.extend(self.create(placement));
                }
                Gesture::Tap(id) => out.extend(self.open_modal(&id)),
                Gesture::LongPressArmed { id, delay_ms } => {
                    out.push(Effect::LongPressArmed { id, delay_ms })
                }
                Gesture::LongPressCancelled(id) => out.push(Effect::LongPressCancelled { id }),
                Gesture::MarkedForDeletion(id) => {
                    out.push(Effect::MarkedForDeletion { id });
                    out.push(Effect::Vibrate(VIBRATE_MARK_MS));
                }
                Gesture::DeleteConfirmed(id) => {
                    let removed = self.delete(&id);
                    if !removed.is_empty() {
                        out.extend(removed);
                        out.push(Effect::Vibrate(VIBRATE_DELETE_MS));
                    }
                }
            }
        }
        out
    }
}
