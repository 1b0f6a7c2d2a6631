//! Interaction controller: commands, gesture dispatch and host sync.
//!
//! Every mutating method finishes all surface edits before calling
//! [`RegionStore::synchronize`], so a returned payload always reflects one
//! point in time. Methods take `&mut self` and run to completion, which makes
//! clear and reset a single uninterruptible step.

use crate::args::MountArgs;
use crate::config::ControllerConfig;
use crate::error::CommandError;
use crate::gesture::{Effect, GestureState, GestureStrategy, PointerButton, PointerInput, PointerKind};
use crate::model::{Bounds, InitialRegion, Payload, Region, RegionId, Theme};
use crate::store::RegionStore;
use crate::surface::{RectStyle, RenderSurface};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Result of a command that may change what the host sees.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<L> {
    /// State changed; send this to the host.
    Synced(Payload<L>),
    /// Nothing the host can observe changed.
    Unchanged,
}

impl<L> Outcome<L> {
    pub fn is_synced(&self) -> bool {
        matches!(self, Outcome::Synced(_))
    }

    pub fn into_payload(self) -> Option<Payload<L>> {
        match self {
            Outcome::Synced(p) => Some(p),
            Outcome::Unchanged => None,
        }
    }
}

/// Two-way association between region ids and surface handles. Nothing is
/// written onto surface objects themselves.
#[derive(Clone, Debug)]
struct Bindings<H> {
    by_id: BTreeMap<RegionId, H>,
    by_handle: HashMap<H, RegionId>,
}

impl<H: Copy + Eq + Hash> Bindings<H> {
    fn new() -> Self {
        Bindings {
            by_id: BTreeMap::new(),
            by_handle: HashMap::new(),
        }
    }

    fn bind(&mut self, id: RegionId, h: H) {
        self.by_id.insert(id, h);
        self.by_handle.insert(h, id);
    }

    fn unbind(&mut self, id: RegionId) -> Option<H> {
        let h = self.by_id.remove(&id)?;
        self.by_handle.remove(&h);
        Some(h)
    }

    fn id_of(&self, h: H) -> Option<RegionId> {
        self.by_handle.get(&h).copied()
    }

    fn handle_of(&self, id: RegionId) -> Option<H> {
        self.by_id.get(&id).copied()
    }

    fn clear(&mut self) {
        self.by_id.clear();
        self.by_handle.clear();
    }
}

struct ArmedGesture<H> {
    state: GestureState,
    preview: Option<H>,
}

pub struct Controller<S: RenderSurface, L> {
    surface: S,
    store: RegionStore<L>,
    bindings: Bindings<S::Handle>,
    args: MountArgs<L>,
    config: ControllerConfig,
    strategy: Box<dyn GestureStrategy>,
    gesture: Option<ArmedGesture<S::Handle>>,
    theme: Theme,
    has_background: bool,
}

impl<S: RenderSurface, L: Clone + Default> Controller<S, L> {
    /// Install the background, seed the store from `args.rects` and draw them.
    pub fn mount(surface: S, args: MountArgs<L>, config: ControllerConfig) -> Self {
        let strategy = config.protocol.strategy();
        let mut c = Controller {
            surface,
            store: RegionStore::new(),
            bindings: Bindings::new(),
            args,
            config,
            strategy,
            gesture: None,
            theme: Theme::default(),
            has_background: false,
        };
        c.install_background();
        c.seed_from_initial();
        c.surface.request_render();
        log::debug!(
            "mounted {}x{} canvas with {} regions",
            c.args.canvas_width,
            c.args.canvas_height,
            c.store.len()
        );
        c
    }

    /// Host argument change. A new canvas size or image re-mounts the scene;
    /// otherwise only the stored snapshot and stroke color are replaced.
    pub fn update_args(&mut self, args: MountArgs<L>) -> Outcome<L> {
        let scene_changed = self.args.scene_changed(&args);
        self.args = args;
        if !scene_changed {
            return Outcome::Unchanged;
        }
        log::debug!("scene changed, re-mounting");
        self.wipe();
        self.install_background();
        self.seed_from_initial();
        self.sync()
    }

    // Gesture

    /// Arm the draw gesture for the add command. Returns false when one is
    /// already armed.
    pub fn begin_add(&mut self) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        self.surface.set_pointer_listeners(self.strategy.listeners());
        self.gesture = Some(ArmedGesture {
            state: GestureState::Idle,
            preview: None,
        });
        log::debug!("draw gesture armed");
        true
    }

    pub fn pointer_down(&mut self, input: PointerInput) -> Outcome<L> {
        self.pointer(PointerKind::Down, input)
    }

    pub fn pointer_move(&mut self, input: PointerInput) -> Outcome<L> {
        self.pointer(PointerKind::Move, input)
    }

    pub fn pointer_up(&mut self, input: PointerInput) -> Outcome<L> {
        self.pointer(PointerKind::Up, input)
    }

    fn pointer(&mut self, kind: PointerKind, input: PointerInput) -> Outcome<L> {
        if !self.strategy.listeners().contains(&kind) {
            return Outcome::Unchanged;
        }
        let mut armed = match self.gesture.take() {
            Some(g) => g,
            None => return Outcome::Unchanged,
        };
        if input.button == PointerButton::Secondary {
            if kind == PointerKind::Down {
                log::debug!("draw gesture cancelled by secondary button");
                self.disarm(armed);
                self.surface.request_render();
            } else {
                self.gesture = Some(armed);
            }
            return Outcome::Unchanged;
        }
        let step = self.strategy.handle(kind, armed.state, input.point);
        armed.state = step.state;
        match step.effect {
            Effect::None => {}
            Effect::ShowPreview(b) => {
                let style = self.preview_style();
                armed.preview = Some(self.surface.add_rect(b, &style));
                self.surface.request_render();
            }
            Effect::UpdatePreview(b) => {
                if let Some(h) = armed.preview {
                    self.surface.set_rect_bounds(h, b);
                }
                self.surface.request_render();
            }
            Effect::Finish(b) => {
                self.disarm(armed);
                return self.finish_add(b);
            }
        }
        self.gesture = Some(armed);
        Outcome::Unchanged
    }

    /// Abort an armed gesture. Returns false when none was armed.
    pub fn cancel_gesture(&mut self) -> bool {
        match self.gesture.take() {
            Some(armed) => {
                self.disarm(armed);
                self.surface.request_render();
                true
            }
            None => false,
        }
    }

    fn disarm(&mut self, armed: ArmedGesture<S::Handle>) {
        if let Some(h) = armed.preview {
            self.surface.remove(h);
        }
        self.surface.set_pointer_listeners(&[]);
    }

    fn finish_add(&mut self, bounds: Bounds) -> Outcome<L> {
        let out = self.insert_region(bounds, L::default());
        if !out.is_synced() {
            log::debug!("discarded zero-area gesture {:?}", bounds);
            self.surface.request_render();
        }
        out
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture.as_ref().map(|g| g.state).unwrap_or_default()
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    // Commands

    /// Draw a region with a fresh id. Zero-area or non-finite bounds are
    /// rejected.
    pub fn insert_region(&mut self, bounds: Bounds, label: L) -> Outcome<L> {
        if bounds.is_empty() || !bounds.is_finite() {
            return Outcome::Unchanged;
        }
        let id = self.store.allocate();
        let style = self.region_style();
        let h = self.surface.add_rect(bounds, &style);
        self.bindings.bind(id, h);
        self.store.put(id, label);
        log::debug!("added region {} at {:?}", id, bounds);
        self.sync()
    }

    /// Remove whatever region the surface has selected.
    pub fn remove_selected(&mut self) -> Result<Outcome<L>, CommandError> {
        let id = match self.surface.selected().and_then(|h| self.bindings.id_of(h)) {
            Some(id) => id,
            None => return Ok(Outcome::Unchanged),
        };
        self.remove_region(id)
    }

    pub fn remove_region(&mut self, id: RegionId) -> Result<Outcome<L>, CommandError> {
        let h = match self.bindings.handle_of(id) {
            Some(h) => h,
            None => return Ok(Outcome::Unchanged),
        };
        if self.config.keep_last_region && self.store.len() <= 1 {
            log::warn!("refusing to remove region {}: at least one must remain", id);
            return Err(CommandError::LastRegion);
        }
        self.surface.remove(h);
        self.bindings.unbind(id);
        self.store.remove(id);
        log::debug!("removed region {}", id);
        Ok(self.sync())
    }

    /// Drop every edit and restore the host's initial regions.
    pub fn reset(&mut self) -> Outcome<L> {
        self.wipe();
        self.seed_from_initial();
        log::debug!("reset to {} initial regions", self.store.len());
        self.sync()
    }

    /// Remove every region. The initial snapshot is kept for a later reset.
    pub fn clear(&mut self) -> Outcome<L> {
        self.wipe();
        log::debug!("cleared all regions");
        self.sync()
    }

    /// The surface finished a user drag or resize on `handle`.
    pub fn object_modified(&mut self, handle: S::Handle) -> Outcome<L> {
        match self.bindings.id_of(handle) {
            Some(id) => {
                log::debug!("region {} edited", id);
                self.sync()
            }
            None => Outcome::Unchanged,
        }
    }

    pub fn set_label(&mut self, id: RegionId, label: L) -> Outcome<L> {
        self.update_label(id, |l| *l = label)
    }

    pub fn update_label<F: FnOnce(&mut L)>(&mut self, id: RegionId, f: F) -> Outcome<L> {
        if self.bindings.handle_of(id).is_none() {
            return Outcome::Unchanged;
        }
        match self.store.get_mut(id) {
            Some(l) => f(l),
            None => {
                let mut l = L::default();
                f(&mut l);
                self.store.put(id, l);
            }
        }
        self.sync()
    }

    pub fn theme_changed(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // Queries

    /// Current host payload, without touching the surface.
    pub fn payload(&self) -> Payload<L> {
        self.store.synchronize(&self.live())
    }

    pub fn regions(&self) -> Vec<Region<L>> {
        self.live()
            .into_iter()
            .map(|(id, bounds)| Region {
                id,
                bounds,
                label: self.store.get(id).cloned().unwrap_or_default(),
            })
            .collect()
    }

    pub fn region(&self, id: RegionId) -> Option<Region<L>> {
        let h = self.bindings.handle_of(id)?;
        let bounds = self.surface.bounding_rect(h)?;
        Some(Region {
            id,
            bounds,
            label: self.store.get(id).cloned().unwrap_or_default(),
        })
    }

    pub fn selected_region(&self) -> Option<RegionId> {
        self.surface.selected().and_then(|h| self.bindings.id_of(h))
    }

    pub fn handle_of(&self, id: RegionId) -> Option<S::Handle> {
        self.bindings.handle_of(id)
    }

    pub fn region_of(&self, handle: S::Handle) -> Option<RegionId> {
        self.bindings.id_of(handle)
    }

    pub fn initial(&self) -> &[InitialRegion<L>] {
        &self.args.rects
    }

    pub fn args(&self) -> &MountArgs<L> {
        &self.args
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn has_background(&self) -> bool {
        self.has_background
    }

    pub fn store(&self) -> &RegionStore<L> {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct surface access for hosts that drive selection or edits.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // Internals

    fn region_style(&self) -> RectStyle {
        RectStyle::region(&self.args.box_color, self.config.stroke_width)
    }

    fn preview_style(&self) -> RectStyle {
        RectStyle::preview(&self.config.preview_stroke, &self.config.preview_fill)
    }

    fn install_background(&mut self) {
        self.has_background = match self.args.raster() {
            Ok(Some(img)) => match self.surface.set_background(&img) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("rendering without background: {}", e);
                    false
                }
            },
            Ok(None) => false,
            Err(e) => {
                log::warn!("ignoring background image: {}", e);
                false
            }
        };
    }

    fn seed_from_initial(&mut self) {
        let style = self.region_style();
        for (id, bounds) in self.store.seed(&self.args.rects) {
            let h = self.surface.add_rect(bounds, &style);
            self.bindings.bind(id, h);
        }
    }

    /// Cancel any gesture and remove all geometry and labels.
    fn wipe(&mut self) {
        if let Some(armed) = self.gesture.take() {
            self.disarm(armed);
        }
        for h in self.surface.objects() {
            self.surface.remove(h);
        }
        self.bindings.clear();
        self.store.clear();
    }

    /// Live `(id, bounds)` in surface z-order. Unbound objects are skipped.
    fn live(&self) -> Vec<(RegionId, Bounds)> {
        self.surface
            .objects()
            .into_iter()
            .filter_map(|h| {
                let id = self.bindings.id_of(h)?;
                let b = self.surface.bounding_rect(h)?;
                Some((id, b))
            })
            .collect()
    }

    fn sync(&mut self) -> Outcome<L> {
        #[cfg(feature = "sync_prof")]
        let t0 = std::time::Instant::now();
        let payload = self.payload();
        #[cfg(feature = "sync_prof")]
        eprintln!(
            "sync regions={} ms={:.3}",
            payload.len(),
            t0.elapsed().as_secs_f64() * 1000.0
        );
        self.surface.request_render();
        Outcome::Synced(payload)
    }
}
