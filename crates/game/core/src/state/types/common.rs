use std::fmt;

/// Unique identifier for any entity taking part in an event or combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this entity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Wall-clock instant expressed in milliseconds since the Unix epoch.
///
/// The core never reads a clock; the runtime stamps contexts and quests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Where an event executes: a script file/region key plus an index into it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLocation {
    pub file: String,
    pub index: u32,
}

impl EventLocation {
    pub fn new(file: impl Into<String>, index: u32) -> Self {
        Self {
            file: file.into(),
            index,
        }
    }
}

impl fmt::Display for EventLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.index)
    }
}

/// Integer resource meter (health, skill points, action points) tracked per entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meter {
    pub current: u32,
    pub maximum: u32,
}

impl Meter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount`, returning how much was actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let drained = amount.min(self.current);
        self.current -= drained;
        drained
    }

    /// Restores up to `amount` without exceeding the maximum, returning the gain.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.maximum.saturating_sub(self.current));
        self.current += restored;
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_caps_at_maximum() {
        let mut meter = Meter::new(20, 30);
        assert_eq!(meter.restore(25), 10);
        assert_eq!(meter.current, 30);
    }

    #[test]
    fn restore_on_overfilled_meter_adds_nothing() {
        let mut meter = Meter {
            current: 50,
            maximum: 30,
        };
        assert_eq!(meter.restore(5), 0);
        assert_eq!(meter.current, 50);
    }
}
