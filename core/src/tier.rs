//! Prize-tier classification for one ticket against one draw.

use crate::{simulator::SimulatedDraw, ticket::Ticket};
use serde::{Deserialize, Serialize};

/// Winning tiers, First being the most valuable.
/// Serialized as the plain tier number 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WinTier {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
}

impl WinTier {
    pub const ALL: [WinTier; 5] = [
        WinTier::First,
        WinTier::Second,
        WinTier::Third,
        WinTier::Fourth,
        WinTier::Fifth,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Apply the prize rules in fixed precedence order. A five-match
    /// holding the bonus is always Second, never Third.
    pub fn classify(match_count: u32, bonus_match: bool) -> Option<WinTier> {
        match (match_count, bonus_match) {
            (6, _)     => Some(WinTier::First),
            (5, true)  => Some(WinTier::Second),
            (5, false) => Some(WinTier::Third),
            (4, _)     => Some(WinTier::Fourth),
            (3, _)     => Some(WinTier::Fifth),
            _          => None,
        }
    }
}

impl TryFrom<u8> for WinTier {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        WinTier::ALL
            .get((n as usize).wrapping_sub(1))
            .copied()
            .ok_or_else(|| format!("tier {n} outside 1-5"))
    }
}

impl From<WinTier> for u8 {
    fn from(tier: WinTier) -> Self {
        tier.number()
    }
}

impl std::fmt::Display for WinTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tier {}", self.number())
    }
}

/// Best tier the ticket wins against the draw, or None.
/// The match count only considers main numbers; the bonus is a
/// separate membership test against the ticket.
pub fn match_tier(ticket: &Ticket, draw: &SimulatedDraw) -> Option<WinTier> {
    let match_count = (ticket.mask() & draw.mask()).count_ones();
    let bonus_match = ticket.contains(draw.bonus);
    WinTier::classify(match_count, bonus_match)
}
