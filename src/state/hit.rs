//! Click targets.
//!
//! The render effect rebuilds the hit-region list every frame as a side
//! effect of drawing: each button, progress dot and clickable icon pushes a
//! rect plus the action to run. A mouse click dispatches to the topmost
//! (last-pushed) region containing the point.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::Rect;

/// A clickable region and its action.
#[derive(Clone)]
pub struct HitRegion {
    pub rect: Rect,
    action: Rc<dyn Fn()>,
}

/// Per-frame collection of hit regions.
#[derive(Clone, Default)]
pub struct HitRegions {
    regions: Vec<HitRegion>,
}

impl HitRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clickable region. Later pushes are "on top".
    pub fn push(&mut self, rect: Rect, action: impl Fn() + 'static) {
        self.regions.push(HitRegion {
            rect,
            action: Rc::new(action),
        });
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Find the topmost region containing (x, y).
    fn find(&self, x: u16, y: u16) -> Option<HitRegion> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.rect.contains(x, y))
            .cloned()
    }
}

thread_local! {
    static CURRENT: RefCell<HitRegions> = RefCell::new(HitRegions::new());
}

/// Install the regions for the frame just rendered, replacing the previous
/// frame's regions (and dropping their action closures).
pub fn install(regions: HitRegions) {
    CURRENT.with(|c| *c.borrow_mut() = regions);
}

/// Dispatch a click. Returns true if a region handled it.
///
/// The action is cloned out before running so it may re-render (and
/// reinstall regions) without re-entrancy trouble.
pub fn dispatch_click(x: u16, y: u16) -> bool {
    let hit = CURRENT.with(|c| c.borrow().find(x, y));
    match hit {
        Some(region) => {
            (region.action)();
            true
        }
        None => false,
    }
}

/// Number of currently installed regions.
pub fn region_count() -> usize {
    CURRENT.with(|c| c.borrow().len())
}

/// Clear installed regions (for testing).
pub fn reset_hit_state() {
    CURRENT.with(|c| *c.borrow_mut() = HitRegions::new());
}

// =============================================================================
// TESTS
// =============================================================================
