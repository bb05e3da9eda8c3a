//! Collection zones.

use tracing::trace;

use wl_core::{SimRng, ZoneId, ZoneSpec};

use crate::{FleetError, FleetResult};

/// A named collection area that accumulates waste once per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    id:          ZoneId,
    name:        String,
    waste_min:   u32,
    waste_max:   u32,
    accumulated: u32,
}

impl Zone {
    /// Create an empty zone.  Fails when `waste_min > waste_max`.
    pub fn new(id: ZoneId, name: impl Into<String>, waste_min: u32, waste_max: u32) -> FleetResult<Self> {
        let name = name.into();
        if waste_min > waste_max {
            return Err(FleetError::InvalidZoneBounds { zone: name, min: waste_min, max: waste_max });
        }
        Ok(Self { id, name, waste_min, waste_max, accumulated: 0 })
    }

    pub fn from_spec(id: ZoneId, spec: &ZoneSpec) -> FleetResult<Self> {
        Self::new(id, spec.name.as_str(), spec.waste_min, spec.waste_max)
    }

    /// Draw today's waste uniformly from `[waste_min, waste_max]`.  The draw
    /// replaces the accumulated amount; yesterday's residue is dropped.
    pub fn generate_daily(&mut self, rng: &mut SimRng) -> u32 {
        let residue = self.accumulated;
        self.accumulated = rng.between(self.waste_min, self.waste_max);
        trace!(zone = %self.name, drawn = self.accumulated, residue, "waste generated");
        self.accumulated
    }

    /// Remove up to `amount` tons.  Returns what was actually removed.
    pub fn collect(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.accumulated);
        self.accumulated -= taken;
        taken
    }

    /// Overwrite the accumulated amount, e.g. when seeding a scenario.
    pub fn set_accumulated(&mut self, tons: u32) {
        self.accumulated = tons;
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.accumulated == 0
    }

    #[inline]
    pub fn accumulated(&self) -> u32 {
        self.accumulated
    }

    #[inline]
    pub fn id(&self) -> ZoneId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.waste_min, self.waste_max)
    }
}
