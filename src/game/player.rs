//! The single mutable player record shared by every room and encounter.

use std::fmt;

use serde::Serialize;

use crate::validation::PlayerName;

/// Health every new adventurer starts with.
pub const STARTING_HEALTH: i32 = 100;

/// Where the player currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    #[serde(rename = "Starting Room")]
    StartingRoom,
    #[serde(rename = "Red Room")]
    RedRoom,
    #[serde(rename = "Blue Room")]
    BlueRoom,
    #[serde(rename = "Green Room")]
    GreenRoom,
    #[serde(rename = "Purple Room")]
    PurpleRoom,
}

impl Location {
    pub fn name(self) -> &'static str {
        match self {
            Location::StartingRoom => "Starting Room",
            Location::RedRoom => "Red Room",
            Location::BlueRoom => "Blue Room",
            Location::GreenRoom => "Green Room",
            Location::PurpleRoom => "Purple Room",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Items collected so far, in the order they were found. Never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory(Vec<String>);

impl Inventory {
    /// Add `item` unless it is already held. Returns whether it was new.
    pub fn insert(&mut self, item: &str) -> bool {
        if self.contains(item) {
            return false;
        }
        self.0.push(item.to_string());
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|held| held == item)
    }

    /// How many copies of `item` are held (0 or 1).
    pub fn count(&self, item: &str) -> usize {
        self.0.iter().filter(|held| *held == item).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerState {
    name: String,
    level: u32,
    inventory: Inventory,
    location: Location,
    health: i32,
    choices: Vec<Location>,
}

impl PlayerState {
    /// A fresh adventurer: level 1, full health, empty pockets, no history.
    /// The name stays empty until [`PlayerState::rename`] is called at session start.
    pub fn new() -> Self {
        PlayerState {
            name: String::new(),
            level: 1,
            inventory: Inventory::default(),
            location: Location::StartingRoom,
            health: STARTING_HEALTH,
            choices: Vec::new(),
        }
    }

    pub fn rename(&mut self, name: PlayerName) {
        self.name = name.into_inner();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn choices(&self) -> &[Location] {
        &self.choices
    }

    /// Move into `location` and record the visit in the history.
    pub fn visit(&mut self, location: Location) {
        self.location = location;
        self.choices.push(location);
    }

    /// Health is not clamped; it may go below zero without ending the game.
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta);
    }

    /// Grant `item` unless it is already held. Returns whether it was new.
    pub fn grant(&mut self, item: &str) -> bool {
        self.inventory.insert(item)
    }

    pub fn advance_level(&mut self) -> u32 {
        self.level += 1;
        self.level
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<&str> = self.inventory.iter().collect();
        let visited: Vec<&str> = self.choices.iter().map(|l| l.name()).collect();
        writeln!(f, "Player Info:")?;
        writeln!(f, "  Name: {}", self.name)?;
        writeln!(f, "  Level: {}", self.level)?;
        writeln!(f, "  Inventory: [{}]", items.join(", "))?;
        writeln!(f, "  Location: {}", self.location)?;
        writeln!(f, "  Health: {}", self.health)?;
        write!(f, "  Choices: [{}]", visited.join(", "))
    }
}
