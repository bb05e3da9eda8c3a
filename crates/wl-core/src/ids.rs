//! Strongly typed, zero-cost identifier wrappers.
//!
//! Zones, small trucks and stations live in `Vec`s owned by the simulation
//! world, so their ids are plain indices.  `LargeTruckId` is a sequence
//! number handed out by the station layer and `EventId` is stamped by the
//! scheduler on every scheduled event.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
///
/// `$tag` is the short prefix used by `Display` (`Z3`, `E17`, …).
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $tag:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($tag, "{}"), self.0)
                } else {
                    f.write_str(concat!($tag, "?"))
                }
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a small collection truck in the day's fleet.
    pub struct TruckId(u32) => "C";
}

typed_id! {
    /// Sequential number of a large (landfill) truck.  Starts at 1.
    pub struct LargeTruckId(u32) => "G";
}

typed_id! {
    /// Index of a waste zone.
    pub struct ZoneId(u16) => "Z";
}

typed_id! {
    /// Index of a transfer station.
    pub struct StationId(u16) => "S";
}

typed_id! {
    /// Handle of a scheduled event, used for cancellation.
    pub struct EventId(u64) => "E";
}
