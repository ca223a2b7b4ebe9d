//! Eat What rotation engine
//!
//! Platform-agnostic core for the Eat What day-choice widget: calendar
//! arithmetic, the anchored alternation law, and the persisted choice store.
//! This crate provides the full decision logic without UI or
//! platform-specific dependencies.

pub mod calendar;
pub mod choice;
pub mod constants;
pub mod date;
pub mod rotation;

// Re-export commonly used types
pub use calendar::{GridSlot, MonthGrid};
pub use choice::{Choice, Origin, Resolved};
pub use date::{add_months, date_key, days_in_month, month_start, next_day, parse_date_key};
pub use rotation::{anchor, day_offset, rotated_choice};

use chrono::NaiveDate;

use crate::constants::{OVERRIDE_PREFIX, SEED_KEY};

/// Trait for abstracting persisted key-value access
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be mutated.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;

    /// Enumerate every stored key.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be enumerated.
    fn keys(&self) -> Result<Vec<String>, Self::Error>;
}

/// Persisted seed and override state composed with the rotation law.
///
/// Owns an injected key-value capability; there is no ambient storage
/// access anywhere in this crate. Storage failures propagate untouched so
/// the embedding layer decides how to degrade.
pub struct ChoiceStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> ChoiceStore<S> {
    /// Create a store over the provided key-value capability.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    fn override_key(date: NaiveDate) -> String {
        format!("{OVERRIDE_PREFIX}{}", date_key(date))
    }

    /// The seed label assigned to the anchor date.
    ///
    /// An absent or unrecognized stored value is replaced by the default
    /// label and written back, so the first read initializes the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying capability fails.
    pub fn seed(&self) -> Result<Choice, S::Error> {
        if let Some(raw) = self.storage.get(SEED_KEY)? {
            if let Ok(choice) = raw.parse::<Choice>() {
                return Ok(choice);
            }
            log::debug!("stored seed {raw:?} is not a recognized label; resetting");
        }
        let fallback = Choice::default();
        self.storage.set(SEED_KEY, fallback.as_str())?;
        Ok(fallback)
    }

    /// Persist `choice` as the anchor seed and drop every per-date override.
    ///
    /// Overrides are pinned relative to the rotation; rebasing the rotation
    /// invalidates them wholesale, so callers must treat this as a full
    /// baseline reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying capability fails; overrides removed
    /// before the failure stay removed.
    pub fn set_seed_from_anchor(&self, choice: Choice) -> Result<(), S::Error> {
        self.storage.set(SEED_KEY, choice.as_str())?;
        self.clear_all_overrides()
    }

    fn clear_all_overrides(&self) -> Result<(), S::Error> {
        for key in self.storage.keys()? {
            if key.starts_with(OVERRIDE_PREFIX) {
                self.storage.remove(&key)?;
            }
        }
        Ok(())
    }

    /// Resolve the authoritative choice for `date`.
    ///
    /// A well-formed override wins; a malformed one is ignored and the date
    /// falls through to the rotation under the current seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying capability fails.
    pub fn resolve(&self, date: NaiveDate) -> Result<Resolved, S::Error> {
        if let Some(raw) = self.storage.get(&Self::override_key(date))? {
            if let Ok(choice) = raw.parse::<Choice>() {
                return Ok(Resolved {
                    choice,
                    origin: Origin::Override,
                });
            }
            log::debug!(
                "ignoring malformed override for {}: {raw:?}",
                date_key(date)
            );
        }
        Ok(Resolved {
            choice: rotated_choice(date, self.seed()?),
            origin: Origin::Rotation,
        })
    }

    /// Pin `date` to `choice`, superseding the rotation for that day only.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying capability fails.
    pub fn set_override(&self, date: NaiveDate, choice: Choice) -> Result<(), S::Error> {
        self.storage.set(&Self::override_key(date), choice.as_str())
    }

    /// Remove the pin for `date`. A no-op when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying capability fails.
    pub fn clear_override(&self, date: NaiveDate) -> Result<(), S::Error> {
        self.storage.remove(&Self::override_key(date))
    }
}
