//! Large haulers that carry station waste to the landfill.

use wl_core::{EventId, LARGE_TRUCK_CAPACITY, LargeTruckId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeTruck {
    id:   LargeTruckId,
    load: u32,
    /// Handle of the armed tolerance-check event, if any.
    pub pending_check: Option<EventId>,
}

impl LargeTruck {
    pub fn new(id: LargeTruckId) -> Self {
        Self { id, load: 0, pending_check: None }
    }

    #[inline]
    pub fn id(&self) -> LargeTruckId {
        self.id
    }

    #[inline]
    pub fn load(&self) -> u32 {
        self.load
    }

    /// Take up to the remaining room out of `tons`.  Returns the accepted
    /// amount; the rest is discarded by the caller.
    pub fn receive(&mut self, tons: u32) -> u32 {
        let accepted = tons.min(LARGE_TRUCK_CAPACITY - self.load);
        self.load += accepted;
        accepted
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.load >= LARGE_TRUCK_CAPACITY
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.load == 0
    }

    /// Leave for the landfill.  Returns the load hauled away.
    pub fn depart(&mut self) -> u32 {
        std::mem::take(&mut self.load)
    }
}

/// Issues large-truck ids.  Lives as long as the simulation, so the count
/// spans every day of a run.
#[derive(Debug, Clone)]
pub struct LargeTruckIds {
    next: u32,
}

impl Default for LargeTruckIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl LargeTruckIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> LargeTruckId {
        let id = LargeTruckId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn total_created(&self) -> u32 {
        self.next - 1
    }

    pub fn reset(&mut self) {
        self.next = 1;
    }
}
