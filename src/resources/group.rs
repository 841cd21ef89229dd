//! Tracked groups resource for entity counting.
//!
//! The [`TrackedGroups`] resource defines which group names should be
//! monitored by the
//! [`update_group_counts`](crate::systems::group::update_group_counts)
//! system and holds the resulting counts. Gameplay code reads the counts
//! to detect population changes ("no platforms left", "all enemies gone")
//! without iterating entities itself.
//!
//! This resource should be cleared when switching scenes to avoid stale
//! counts. Removing a name that was never tracked is a no-op.

use bevy_ecs::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Resource holding the set of group names to count and their last counts.
///
/// Only active actors are counted; pooled actors with `Active(false)` are
/// excluded.
#[derive(Debug, Clone, Resource, Default)]
pub struct TrackedGroups {
    groups: FxHashSet<String>,
    counts: FxHashMap<String, i32>,
}

impl TrackedGroups {
    /// Adds a group name to the set of tracked groups.
    pub fn add_group(&mut self, group_name: impl Into<String>) {
        self.groups.insert(group_name.into());
    }

    /// Returns `true` if the given group name is being tracked.
    pub fn has_group(&self, group_name: impl AsRef<str>) -> bool {
        self.groups.contains(group_name.as_ref())
    }

    /// Removes a group name from tracking, along with its count.
    /// No-op if the group was never tracked.
    pub fn remove_group(&mut self, group_name: impl AsRef<str>) {
        self.groups.remove(group_name.as_ref());
        self.counts.remove(group_name.as_ref());
    }

    /// Clears all tracked group names and counts.
    pub fn clear(&mut self) {
        self.groups.clear();
        self.counts.clear();
    }

    /// Returns an iterator over all tracked group names.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.groups.iter()
    }

    /// Last published count for a tracked group. `None` if the group is
    /// not tracked or has not been counted yet.
    pub fn count(&self, group_name: impl AsRef<str>) -> Option<i32> {
        self.counts.get(group_name.as_ref()).copied()
    }

    /// Publish a count for a tracked group. Called by the counting system.
    pub fn set_count(&mut self, group_name: impl AsRef<str>, count: i32) {
        let name = group_name.as_ref();
        if self.groups.contains(name) {
            self.counts.insert(name.to_string(), count);
        }
    }
}
