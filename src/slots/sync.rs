//! Multi-slot value state kept in sync with a query-parameter namespace
//!
//! One synchronizer owns the ordered values for a set of fillable slots
//! (text boxes, selection anchors) and mirrors them into a flat
//! `{prefix}_{index}` key namespace so the state can ride in a shareable
//! query string. The value sequence is the single source of truth; the
//! param view and the API view are derived from it on every read.

use crate::query::QueryParams;
use crate::slots::SlotEntry;

/// Definition of one fillable slot. Identity is positional: the label is
/// display-only and never affects stored values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDef {
    pub label: String,
}

impl SlotDef {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Ordered slot values synchronized with a flat query-parameter namespace.
///
/// Values are stored raw (untrimmed); trimming applies only when deriving
/// the param view, the API view, and the filled/any flags. Hydration reads
/// `{prefix}_{i}` for each index, treating absent entries as empty. A slot
/// whose value trims to empty is never written into the namespace.
#[derive(Debug, Clone)]
pub struct SlotSync {
    prefix: String,
    defs: Vec<SlotDef>,
    values: Vec<String>,
}

impl SlotSync {
    /// Create an empty synchronizer with no slots.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            defs: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create a synchronizer for `defs`, hydrating each value from
    /// `params`. Missing entries become the empty string; inbound values
    /// are stored exactly as given.
    pub fn from_params(prefix: impl Into<String>, defs: Vec<SlotDef>, params: &QueryParams) -> Self {
        let mut sync = Self::new(prefix);
        sync.set_definitions(defs, params);
        sync
    }

    /// Install a new slot set. A change in slot count resets every value
    /// by rehydrating from `params`; a label-only change with the same
    /// count preserves values. Stale in-memory edits must not leak into
    /// semantically different slots, so the reset discards them even at
    /// indices that exist in both sets.
    pub fn set_definitions(&mut self, defs: Vec<SlotDef>, params: &QueryParams) {
        let count_changed = defs.len() != self.defs.len();
        self.defs = defs;
        if count_changed {
            tracing::debug!(
                prefix = %self.prefix,
                slots = self.defs.len(),
                "slot count changed, rehydrating"
            );
            self.hydrate(params);
        }
    }

    /// Recompute every value from `params` using the initialization rule.
    pub fn hydrate(&mut self, params: &QueryParams) {
        self.values = (0..self.defs.len())
            .map(|index| {
                params
                    .get(&self.param_key(index))
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
    }

    /// Replace the value at `index`, storing it raw. Out-of-range indexes
    /// are logged and dropped, never a panic: a stale reference from the
    /// owning view must not crash it. Returns whether the value was
    /// applied.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> bool {
        if index >= self.values.len() {
            tracing::warn!(
                prefix = %self.prefix,
                index,
                slots = self.values.len(),
                "slot update out of range, ignoring"
            );
            return false;
        }
        self.values[index] = value.into();
        true
    }

    /// Reset every value to empty without touching the slot set.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Raw value at `index`, untrimmed.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// All raw values, index-aligned with the slot definitions.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn defs(&self) -> &[SlotDef] {
        &self.defs
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Write this synchronizer's namespace into `params`: for every index
    /// below the slot count, set `{prefix}_{i}` to the trimmed value or
    /// remove the key when the trimmed value is empty. Keys at higher
    /// indexes and keys outside the namespace are left untouched.
    pub fn write_params(&self, params: &mut QueryParams) {
        for (index, value) in self.values.iter().enumerate() {
            let key = self.param_key(index);
            let trimmed = value.trim();
            if trimmed.is_empty() {
                params.remove(&key);
            } else {
                params.set(key, trimmed);
            }
        }
    }

    /// Ordered `{index, value}` entries for the generation call, trimmed,
    /// omitting slots whose trimmed value is empty. Recomputed per read.
    pub fn api_entries(&self) -> Vec<SlotEntry> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(index, value)| SlotEntry {
                index,
                value: value.trim().to_string(),
            })
            .collect()
    }

    /// Number of slots whose trimmed value is non-empty.
    pub fn filled_count(&self) -> usize {
        self.values
            .iter()
            .filter(|value| !value.trim().is_empty())
            .count()
    }

    /// True when every slot's trimmed value is non-empty. Vacuously true
    /// for an empty slot set.
    pub fn all_filled(&self) -> bool {
        self.values.iter().all(|value| !value.trim().is_empty())
    }

    /// True when at least one slot's trimmed value is non-empty.
    pub fn has_any(&self) -> bool {
        self.values.iter().any(|value| !value.trim().is_empty())
    }

    fn param_key(&self, index: usize) -> String {
        format!("{}_{}", self.prefix, index)
    }
}
