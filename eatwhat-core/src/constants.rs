//! Centralized storage-layout and anchoring constants for the rotation engine.
//!
//! The key layout is part of the persisted contract: installed widgets keep
//! their seed and overrides across upgrades, so these values only change
//! together with a migration.

// Storage layout -----------------------------------------------------------
/// Namespace prefix for every key the widget owns.
pub const STORAGE_PREFIX: &str = "eatWhat.";
/// Key holding the label assigned to the anchor date.
pub const SEED_KEY: &str = "eatWhat.seedFirstChoice";
/// Prefix for per-date override keys; the canonical `YYYY-MM-DD` key follows.
pub const OVERRIDE_PREFIX: &str = "eatWhat.override.";

// Rotation anchoring -------------------------------------------------------
pub(crate) const ANCHOR_YEAR: i32 = 2025;
pub(crate) const ANCHOR_MONTH: u32 = 12;
pub(crate) const ANCHOR_DAY: u32 = 30;
