//! Messages carried between pipeline stages
//!
//! Every queue in the pipeline carries [`Message`]: either a genuine [`Item`]
//! or the `Done` sentinel. The sentinel is its own variant so it can never be
//! mistaken for an item of any category.

use std::fmt;
use strum_macros::EnumIter;

/// Classification tag that routes an item to its editor
#[derive(EnumIter, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Sport,
    News,
    Weather,
}

impl Category {
    /// Number of categories, and so the number of editors
    pub const COUNT: usize = 3;

    /// Upper-case name used when rendering
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sport => "SPORTS",
            Self::News => "NEWS",
            Self::Weather => "WEATHER",
        }
    }

    /// Stable position of the category, used to index per-category state
    pub fn index(&self) -> usize {
        match self {
            Self::Sport => 0,
            Self::News => 1,
            Self::Weather => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Sport),
            1 => Some(Self::News),
            2 => Some(Self::Weather),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A categorized unit of work
///
/// `index` counts items of the same category from the same producer,
/// starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Item {
    pub producer_id: u32,
    pub index: u64,
    pub category: Category,
}

impl Item {
    pub fn new(producer_id: u32, index: u64, category: Category) -> Self {
        Self {
            producer_id,
            index,
            category,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Producer {} {} {}",
            self.producer_id, self.category, self.index
        )
    }
}

/// What travels through every pipeline queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Item(Item),
    /// No more items will follow from this source
    Done,
}

impl From<Item> for Message {
    fn from(item: Item) -> Self {
        Message::Item(item)
    }
}
