//! Session scoreboard

use std::fmt;

use crate::board::Player;

/// Win count per player across the games of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    wins: [u32; 2],
}

impl Scoreboard {
    #[inline]
    fn slot(player: Player) -> usize {
        player.id() as usize - 1
    }

    pub fn wins(&self, player: Player) -> u32 {
        self.wins[Self::slot(player)]
    }

    pub fn record_win(&mut self, player: Player) {
        let slot = &mut self.wins[Self::slot(player)];
        *slot = slot.saturating_add(1);
    }

    /// Take back a win recorded for a move that was undone
    pub fn revoke_win(&mut self, player: Player) {
        let slot = &mut self.wins[Self::slot(player)];
        *slot = slot.saturating_sub(1);
    }

    /// `(player, wins)` pairs, player one first
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        [Player::One, Player::Two]
            .into_iter()
            .map(move |player| (player, self.wins(player)))
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {}  |  O: {}",
            self.wins(Player::One),
            self.wins(Player::Two)
        )
    }
}
