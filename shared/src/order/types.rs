//! Shared types for the order item lifecycle

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Item Identity
// ============================================================================

/// Identity of one ordered dish.
///
/// Two lines holding the same menu item are still distinct items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Allocate a fresh identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

// ============================================================================
// Item Status
// ============================================================================

/// Lifecycle of an ordered dish, strictly increasing.
///
/// `Unordered → Ordered → Cooking → Ready → Served`. The kitchen may keep
/// advancing an item after it was served; those advances are counted in
/// `PastServed(n)` so the raw counter is never lost.
///
/// Serialized as the raw counter, so `PastServed(0)` never comes back from
/// the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub enum ItemStatus {
    /// 待下单 - pending edit, not visible to the kitchen
    #[default]
    Unordered,
    /// 已下单
    Ordered,
    /// 制作中
    Cooking,
    /// 待上菜
    Ready,
    /// 已上菜
    Served,
    /// Advanced `n` times beyond Served, `n >= 1`
    PastServed(u32),
}

impl ItemStatus {
    /// Status for a raw lifecycle counter
    pub const fn from_code(code: u32) -> Self {
        match code {
            0 => ItemStatus::Unordered,
            1 => ItemStatus::Ordered,
            2 => ItemStatus::Cooking,
            3 => ItemStatus::Ready,
            4 => ItemStatus::Served,
            n => ItemStatus::PastServed(n - 4),
        }
    }

    /// Raw lifecycle counter (0..=4, then 4 + n)
    pub const fn code(&self) -> u32 {
        match self {
            ItemStatus::Unordered => 0,
            ItemStatus::Ordered => 1,
            ItemStatus::Cooking => 2,
            ItemStatus::Ready => 3,
            ItemStatus::Served => 4,
            ItemStatus::PastServed(n) => n.saturating_add(4),
        }
    }

    /// Next status, one step forward. Never clamps.
    pub const fn advance(self) -> Self {
        match self {
            ItemStatus::Unordered => ItemStatus::Ordered,
            ItemStatus::Ordered => ItemStatus::Cooking,
            ItemStatus::Cooking => ItemStatus::Ready,
            ItemStatus::Ready => ItemStatus::Served,
            ItemStatus::Served => ItemStatus::PastServed(1),
            ItemStatus::PastServed(n) => ItemStatus::PastServed(n.saturating_add(1)),
        }
    }

    /// Sent to the kitchen (Ordered or later)
    pub const fn is_ordered(&self) -> bool {
        self.code() >= ItemStatus::Ordered.code()
    }

    /// Exactly Served.
    ///
    /// Items advanced past Served do NOT match; see [`Self::shows_as_served`]
    /// for the display bucket.
    pub const fn is_served(&self) -> bool {
        matches!(self, ItemStatus::Served)
    }

    /// Served or anything after it, for display
    pub const fn shows_as_served(&self) -> bool {
        self.code() >= ItemStatus::Served.code()
    }

    /// The kitchen has not started on it yet
    pub const fn is_cancellable(&self) -> bool {
        self.code() < ItemStatus::Cooking.code()
    }

    /// Label of the kitchen button that moves the item to its next stage
    pub const fn kitchen_label(&self) -> &'static str {
        match self {
            ItemStatus::Ordered => "Start Cooking",
            ItemStatus::Cooking => "Mark as ready",
            ItemStatus::Ready => "Mark as served",
            _ => "Served",
        }
    }
}

impl From<u32> for ItemStatus {
    fn from(code: u32) -> Self {
        Self::from_code(code)
    }
}

impl From<ItemStatus> for u32 {
    fn from(status: ItemStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Unordered => write!(f, "unordered"),
            ItemStatus::Ordered => write!(f, "ordered"),
            ItemStatus::Cooking => write!(f, "cooking"),
            ItemStatus::Ready => write!(f, "ready"),
            ItemStatus::Served => write!(f, "served"),
            ItemStatus::PastServed(n) => write!(f, "served(+{})", n),
        }
    }
}
