//! Turn advancement.
//!
//! Advancing a turn moves the active index forward, grows and refills the
//! new active player's mana and resolves their draw. The turn keeps moving
//! while the new active player bleeds out or has nothing affordable; the
//! loop ends when someone can act or the match ends.
//!
//! Once every deck is empty and no hand holds a card its owner could ever
//! afford, the remaining turns can only bleed. The engine settles that
//! outcome directly instead of stepping through every turn.

use super::game::Game;
use super::result::GameResult;
use crate::events::GameEvent;

impl Game {
    /// Pass the turn to the next player who can act.
    ///
    /// Each iteration either draws a card, deals bleed damage, grows mana
    /// capacity toward its ceiling, or removes a player, so the loop is
    /// bounded unless no card can ever be played again. That case is
    /// settled by `settle_exhausted`.
    pub(super) fn advance_turn(&mut self) {
        loop {
            self.active_index = (self.active_index + 1) % self.roster.len();
            self.turn_number += 1;

            let name = self.active_name();
            if self.resolve_draw() {
                self.eliminate_active(&name);
                if self.check_last_standing() {
                    return;
                }
                continue;
            }

            let active = &self.roster[self.active_index];
            if active.has_playable_card() {
                let mana = active.mana();
                tracing::debug!(player = %name, turn = self.turn_number, mana, "turn started");
                self.record(GameEvent::TurnStarted {
                    player: name,
                    turn: self.turn_number,
                    mana,
                });
                return;
            }

            self.record(GameEvent::AutoSkip { player: name });
            if self.cards_exhausted() {
                self.settle_exhausted();
                return;
            }
        }
    }

    /// Start-of-turn effects for the active player: mana, then draw.
    ///
    /// Returns true if the player bled to death.
    fn resolve_draw(&mut self) -> bool {
        let max_mana = self.config.max_mana_capacity();
        let max_hand = self.config.max_hand_size();
        let bleeding = self.config.bleeding_damage();

        let player = &mut self.roster[self.active_index];
        player.refill_mana(max_mana);
        let name = player.name().to_owned();

        let (dead, event) = match player.draw() {
            None => {
                player.take_damage(bleeding);
                let event = GameEvent::BleedOut {
                    player: name,
                    damage: bleeding,
                    health: player.health(),
                };
                (player.is_dead(), event)
            }
            Some(card) if player.hand().len() >= max_hand => {
                (false, GameEvent::Overload { player: name, card })
            }
            Some(card) => {
                player.hand_mut().push(card);
                (false, GameEvent::CardDrawn { player: name, card })
            }
        };

        self.record(event);
        dead
    }

    /// Remove the active player, who died on their own turn.
    ///
    /// The index re-anchors to the player who sat immediately before them,
    /// so the next advancement lands on the player who sat after them.
    fn eliminate_active(&mut self, name: &str) {
        let len = self.roster.len();
        let previous = self.roster[(self.active_index + len - 1) % len].name().to_owned();

        self.roster.remove(self.active_index);
        self.active_index = self.position_of(&previous).unwrap_or(0);

        tracing::info!(player = name, "player bled out");
        self.record(GameEvent::Eliminated {
            player: name.to_owned(),
        });
    }

    /// Whether no card can ever be played again: every deck is empty and
    /// no hand holds a card costing at most the mana ceiling.
    fn cards_exhausted(&self) -> bool {
        let max_mana = self.config.max_mana_capacity();
        self.roster
            .iter()
            .all(|p| p.deck().is_empty() && !p.hand().has_playable(max_mana))
    }

    /// End a match in which no card can ever be played again.
    ///
    /// Without bleeding nothing changes any more, so it is a stalemate.
    /// Otherwise every remaining turn deals one bleed tick to its player.
    /// A player with health `h` dies on their `ceil(h / bleeding)`-th turn
    /// from now, and within a round turns run from the seat after the
    /// active player. Deaths are ordered by that (round, seat) pair and the
    /// last player in the order wins.
    fn settle_exhausted(&mut self) {
        let bleeding = i64::from(self.config.bleeding_damage());
        if bleeding == 0 {
            self.record(GameEvent::Stalemate);
            self.finish(GameResult::Stalemate);
            return;
        }

        let len = self.roster.len();
        let first_seat = (self.active_index + 1) % len;
        let mut deaths: Vec<(i64, usize, String)> = self
            .roster
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let turns_left = (i64::from(p.health()) + bleeding - 1) / bleeding;
                let seat = (index + len - first_seat) % len;
                (turns_left, seat, p.name().to_owned())
            })
            .collect();
        deaths.sort_unstable_by_key(|(turns, seat, _)| (*turns, *seat));

        let Some((_, winner_seat, winner)) = deaths.pop() else {
            return;
        };
        let (last_round, last_seat) = deaths.last().map_or((0, 0), |(turns, seat, _)| (*turns, *seat));
        // The winner keeps taking turns until the last other player dies.
        let winner_turns = if winner_seat < last_seat { last_round } else { last_round - 1 };

        let skipped = deaths.iter().map(|(turns, _, _)| turns).sum::<i64>() + winner_turns;
        let skipped = u32::try_from(skipped).unwrap_or(u32::MAX);
        self.turn_number = self.turn_number.saturating_add(skipped);
        tracing::debug!(turns = skipped, "no playable cards left, settling bleed-out");
        self.record(GameEvent::FastForward { turns: skipped });

        let max_mana = self.config.max_mana_capacity();
        if let Some(index) = self.position_of(&winner) {
            self.roster[index].sit_out(winner_turns, max_mana, bleeding);
        }
        for (_, _, name) in deaths {
            if let Some(index) = self.position_of(&name) {
                self.roster.remove(index);
            }
            tracing::info!(player = %name, "player bled out");
            self.record(GameEvent::Eliminated { player: name });
        }
        self.check_last_standing();
    }
}
