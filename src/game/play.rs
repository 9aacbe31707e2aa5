//! Commands issued by the active player during a live match.

use super::game::Game;
use crate::cards::Card;
use crate::core::{GameError, Result};
use crate::events::GameEvent;

impl Game {
    /// Play a card from the active player's hand.
    ///
    /// The card is matched by cost. Its cost is paid from mana and dealt as
    /// damage to every other player. Players killed by the damage leave the
    /// roster in turn order. If the player is left with nothing they can
    /// afford, the turn passes automatically.
    ///
    /// # Errors
    ///
    /// [`GameError::MatchNotLive`], [`GameError::CardNotInHand`] or
    /// [`GameError::InsufficientMana`]. State is untouched on error.
    pub fn play_card(&mut self, card: impl Into<Card>) -> Result<()> {
        self.ensure_live()?;
        let card = card.into();

        let active = &mut self.roster[self.active_index];
        if !active.hand().contains(card) {
            return Err(GameError::CardNotInHand(card));
        }
        if !card.is_affordable(active.mana()) {
            return Err(GameError::InsufficientMana {
                cost: card.cost(),
                mana: active.mana(),
            });
        }

        active.spend_mana(card.cost());
        active.hand_mut().remove(card);
        let source = active.name().to_owned();
        self.record(GameEvent::CardPlayed {
            player: source.clone(),
            card,
        });

        let damage = card.damage();
        if damage > 0 {
            self.damage_opponents(&source, damage);
            self.remove_dead(&source);
            if self.check_last_standing() {
                return Ok(());
            }
        }

        if !self.roster[self.active_index].has_playable_card() {
            self.record(GameEvent::AutoSkip { player: source });
            self.advance_turn();
        }
        Ok(())
    }

    /// End the active player's turn voluntarily.
    pub fn end_turn(&mut self) -> Result<()> {
        self.ensure_live()?;
        let player = self.active_name();
        self.record(GameEvent::TurnEnded { player });
        self.advance_turn();
        Ok(())
    }

    fn damage_opponents(&mut self, source: &str, amount: i32) {
        let mut dealt = Vec::with_capacity(self.roster.len().saturating_sub(1));
        for (index, target) in self.roster.iter_mut().enumerate() {
            if index == self.active_index {
                continue;
            }
            target.take_damage(amount);
            dealt.push(GameEvent::DamageDealt {
                source: source.to_owned(),
                target: target.name().to_owned(),
                amount,
                health: target.health(),
            });
        }
        for event in dealt {
            self.record(event);
        }
    }

    /// Remove every dead player, keeping the index on the active player.
    fn remove_dead(&mut self, active: &str) {
        let dead: Vec<String> = self
            .roster
            .iter()
            .filter(|p| p.is_dead())
            .map(|p| p.name().to_owned())
            .collect();

        for name in dead {
            if let Some(index) = self.position_of(&name) {
                self.roster.remove(index);
            }
            self.active_index = self.position_of(active).unwrap_or(0);
            tracing::info!(player = %name, killer = active, "player eliminated");
            self.record(GameEvent::Eliminated { player: name });
        }
    }
}
