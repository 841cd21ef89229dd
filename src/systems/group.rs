//! Group entity counting system.
//!
//! Counts the active entities belonging to each tracked group and
//! publishes the counts on the
//! [`TrackedGroups`](crate::resources::group::TrackedGroups) resource.
//! The system does not know about specific group names; scenes configure
//! which groups to track, keeping the engine decoupled from game-specific
//! logic.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::active::Active;
use crate::components::group::Group;
use crate::resources::group::TrackedGroups;

/// Counts active entities for each tracked group.
///
/// Groups with zero entities are reported as `0`, which is essential for
/// detecting when all entities of a group have been despawned or recycled.
pub fn update_group_counts(
    query_group: Query<(&Group, Option<&Active>)>,
    mut tracked_groups: ResMut<TrackedGroups>,
) {
    let mut counts: FxHashMap<String, i32> = FxHashMap::default();
    for (group, active) in query_group.iter() {
        if let Some(Active(false)) = active {
            continue;
        }
        if tracked_groups.has_group(group.name()) {
            *counts.entry(group.name().to_string()).or_insert(0) += 1;
        }
    }

    // Publish counts for all tracked groups, including zeros.
    let names: Vec<String> = tracked_groups.iter().cloned().collect();
    for group_name in names {
        let count = counts.get(group_name.as_str()).copied().unwrap_or(0);
        tracked_groups.set_count(&group_name, count);
    }
}
