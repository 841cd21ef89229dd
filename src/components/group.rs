//! Group tag component.
//!
//! Tags an actor entity with the name of the group it belongs to, e.g.
//! `"player"`, `"platforms"`, `"enemies"`. Gameplay rules and the group
//! counting system select actors by this tag.

use bevy_ecs::prelude::Component;

/// Tag component naming the group an actor belongs to.
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group {
    name: String,
}

impl Group {
    /// Create a group tag with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The group name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
