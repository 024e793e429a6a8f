//! Format dispatch: one exhaustive match per operation over the five tournament variants.

use crate::logic::seeding::require_player_count;
use crate::logic::{free_for_all, just_fu, mario_kart, swiss, team};
use crate::models::{GameResult, Player, TournamentError, TournamentEvent, TournamentState, TournamentType};
use chrono::NaiveDate;
use rand::Rng;

impl TournamentState {
    /// Build the initial state for `kind` from a roster snapshot.
    ///
    /// Player-count preconditions are checked before anything is built.
    pub fn create(kind: TournamentType, roster: &[Player]) -> Result<Self, TournamentError> {
        if let Some(required) = kind.required_players() {
            require_player_count(roster, required)?;
        }
        let state = match kind {
            TournamentType::OneVsOne => TournamentState::OneVsOne(swiss::create_swiss(roster)),
            TournamentType::Team => TournamentState::Team(team::create_team_game(roster)),
            TournamentType::FreeForAll => {
                TournamentState::FreeForAll(free_for_all::create_free_for_all(roster))
            }
            TournamentType::MarioKart => {
                TournamentState::MarioKart(mario_kart::create_mario_kart(roster)?)
            }
            TournamentType::JustFu => TournamentState::JustFu(just_fu::create_just_fu(roster)?),
        };
        Ok(state)
    }

    /// Apply one event and return the next state. `self` is left untouched.
    ///
    /// `rng` is only drawn from when a 1v1 round is re-paired.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        event: &TournamentEvent,
        rng: &mut R,
    ) -> Result<Self, TournamentError> {
        use TournamentEvent::*;
        let next = match (self, event) {
            (TournamentState::OneVsOne(s), SelectWinner { match_id, player_id }) => {
                TournamentState::OneVsOne(swiss::select_winner(s, match_id, player_id)?)
            }
            (TournamentState::OneVsOne(s), NextRound) => {
                TournamentState::OneVsOne(swiss::advance_round(s, rng)?)
            }
            (TournamentState::OneVsOne(s), EditPreviousRound) => {
                TournamentState::OneVsOne(swiss::rewind_round(s)?)
            }
            (TournamentState::Team(s), SetTeamScore { team, score }) => {
                TournamentState::Team(team::set_team_score(s, *team, *score))
            }
            (TournamentState::FreeForAll(s), SetScore { player_id, score }) => {
                TournamentState::FreeForAll(free_for_all::set_player_score(s, player_id, *score)?)
            }
            (TournamentState::MarioKart(s), MovePlayer { group, from, to }) => {
                TournamentState::MarioKart(mario_kart::move_group_player(s, group, *from, *to)?)
            }
            (TournamentState::MarioKart(s), ConfirmGroups) => {
                TournamentState::MarioKart(mario_kart::confirm_groups(s)?)
            }
            (TournamentState::MarioKart(s), MoveFinalist { tier, from, to }) => {
                TournamentState::MarioKart(mario_kart::move_finalist(s, *tier, *from, *to)?)
            }
            (TournamentState::JustFu(s), SetScore { player_id, score }) => {
                TournamentState::JustFu(just_fu::set_group_score(s, player_id, *score)?)
            }
            (TournamentState::JustFu(s), ConfirmGroups) => {
                TournamentState::JustFu(just_fu::confirm_groups(s)?)
            }
            (TournamentState::JustFu(s), SetFinalScore { tier, player_id, score }) => {
                TournamentState::JustFu(just_fu::set_final_score(s, *tier, player_id, *score)?)
            }
            (state, event) => {
                log::debug!("Event {:?} does not apply to a {:?} tournament", event, state.kind());
                return Err(TournamentError::InvalidState);
            }
        };
        Ok(next)
    }

    /// Compute the final result. `today` names dated results (1v1).
    pub fn finish(&self, today: NaiveDate) -> Result<GameResult, TournamentError> {
        match self {
            TournamentState::OneVsOne(s) => swiss::finish_swiss(s, today),
            TournamentState::Team(s) => Ok(team::finish_team_game(s)),
            TournamentState::FreeForAll(s) => Ok(free_for_all::finish_free_for_all(s)),
            TournamentState::MarioKart(s) => mario_kart::finish_mario_kart(s),
            TournamentState::JustFu(s) => just_fu::finish_just_fu(s),
        }
    }
}
