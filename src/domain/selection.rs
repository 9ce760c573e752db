// src/domain/selection.rs

use std::fmt;

/// Toggle attempted on a selection that already holds two properties.
/// Recoverable; views surface it as a message, never as a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionFullError;

impl fmt::Display for SelectionFullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "selection already holds two properties")
    }
}

impl std::error::Error for SelectionFullError {}

/// One of the two fixed comparison positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
        }
    }

    /// Parses the 1-based slot numbers used in links and forms.
    pub fn from_number(n: u8) -> Option<Slot> {
        match n {
            1 => Some(Slot::One),
            2 => Some(Slot::Two),
            _ => None,
        }
    }
}

/// The set of properties currently chosen for comparison: at most two
/// addresses, one per slot. Owned by the view that renders it; every
/// consuming view receives the same instance rather than re-deriving
/// membership on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    slots: [Option<String>; 2],
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a set from the two optional slot values a view carried in
    /// its query string. Empty strings count as unfilled slots; a duplicate
    /// address collapses into slot 1.
    pub fn from_slots(slot1: Option<&str>, slot2: Option<&str>) -> Self {
        let mut set = Self::new();
        let clean = |s: Option<&str>| {
            s.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        set.slots[0] = clean(slot1);
        set.slots[1] = clean(slot2);
        if set.slots[0] == set.slots[1] {
            set.slots[1] = None;
        }
        set
    }

    /// Removes `address` if selected, otherwise claims the first free slot.
    pub fn toggle(&mut self, address: &str) -> Result<(), SelectionFullError> {
        if let Some(slot) = self.slot_of(address) {
            self.slots[slot.index()] = None;
            return Ok(());
        }
        match self.slots.iter_mut().find(|s| s.is_none()) {
            Some(free) => {
                *free = Some(address.to_string());
                Ok(())
            }
            None => Err(SelectionFullError),
        }
    }

    /// Forces `address` into `slot`, evicting the previous occupant.
    /// If the address already sits in the other slot it moves, so the same
    /// property never occupies both positions.
    pub fn assign(&mut self, slot: Slot, address: &str) {
        if let Some(old) = self.slot_of(address) {
            if old == slot {
                return;
            }
            self.slots[old.index()] = None;
        }
        self.slots[slot.index()] = Some(address.to_string());
    }

    pub fn clear(&mut self) {
        self.slots = [None, None];
    }

    pub fn is_selected(&self, address: &str) -> bool {
        self.slot_of(address).is_some()
    }

    pub fn slot_of(&self, address: &str) -> Option<Slot> {
        if self.slots[0].as_deref() == Some(address) {
            Some(Slot::One)
        } else if self.slots[1].as_deref() == Some(address) {
            Some(Slot::Two)
        } else {
            None
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slots[slot.index()].as_deref()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Both addresses, in slot order, only once the set is full. Callers
    /// must not start a comparison from a partially filled set.
    pub fn as_pair(&self) -> Option<(&str, &str)> {
        match (&self.slots[0], &self.slots[1]) {
            (Some(a), Some(b)) => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }
}
