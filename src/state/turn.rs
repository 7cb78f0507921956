//! Turn engine: rotation of explainer/guesser roles, scoring, and word draws.
//!
//! Everything here is a pure function over a locked [`Room`]; callers hold the
//! per-room mutex for the whole read-modify-write.

use thiserror::Error;

use crate::{
    state::room::{GamePhase, Player, Room, Team},
    words::{Difficulty, WordPools},
};

/// Minimum roster size for a team to play.
const MIN_TEAM_SIZE: usize = 2;

/// Error returned by turn-engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    /// A team roster is below the minimum for the requested operation.
    #[error("team {team:?} needs at least {required} players (has {actual})")]
    InsufficientPlayers {
        /// Team whose roster is too small.
        team: Team,
        /// Minimum roster size for the operation.
        required: usize,
        /// Actual roster size.
        actual: usize,
    },
    /// The requester is not the room creator.
    #[error("requester is not the room creator")]
    NotCreator,
    /// The requester is not the current explainer.
    #[error("requester is not the current explainer")]
    NotExplainer,
    /// The room is not in the phase the operation requires.
    #[error("operation requires phase {expected:?}, room is {actual:?}")]
    PhaseMismatch {
        /// Phase the operation requires.
        expected: GamePhase,
        /// Phase the room is in.
        actual: GamePhase,
    },
    /// The word pool for the room's difficulty has no words at all.
    #[error("word pool for {0:?} difficulty is empty")]
    EmptyWordPool(Difficulty),
}

/// Resolve the current explainer/guesser pair on the active team.
///
/// Cursors are taken modulo the roster size; when both resolve to the same
/// player the guesser cursor is bumped by one, so the pair is distinct
/// whenever the roster has at least two players. A single-player roster
/// degenerates to the same player in both roles.
pub fn current_pair(room: &Room) -> Option<(&Player, &Player)> {
    let roster = room.roster(room.current_team);
    if roster.is_empty() {
        return None;
    }

    let size = roster.len();
    let explainer = room.explainer_index % size;
    let mut guesser = room.guesser_index % size;
    if explainer == guesser {
        guesser = (guesser + 1) % size;
    }

    Some((roster[explainer], roster[guesser]))
}

/// Hand the explaining role to the previous guesser and advance the guessing
/// role by one, producing a round-robin rotation through the team.
///
/// The requester must be the current explainer or the room creator.
pub fn advance_turn(room: &mut Room, requester_id: i64) -> Result<(), TurnError> {
    ensure_phase(room, GamePhase::InProgress)?;
    ensure_explainer_or_creator(room, requester_id)?;

    let size = room.roster(room.current_team).len();
    if size < MIN_TEAM_SIZE {
        return Err(TurnError::InsufficientPlayers {
            team: room.current_team,
            required: MIN_TEAM_SIZE,
            actual: size,
        });
    }

    room.explainer_index = room.guesser_index % size;
    room.guesser_index = (room.guesser_index + 1) % size;
    if room.explainer_index == room.guesser_index {
        room.guesser_index = (room.guesser_index + 1) % size;
    }

    Ok(())
}

/// Flip the active team and reset the rotation cursors and word history.
/// Creator-only.
pub fn switch_team(room: &mut Room, requester_id: i64) -> Result<Team, TurnError> {
    ensure_phase(room, GamePhase::InProgress)?;
    if requester_id != room.creator_id {
        return Err(TurnError::NotCreator);
    }

    room.current_team = room.current_team.other();
    room.explainer_index = 0;
    room.guesser_index = 1;
    room.words_used.clear();

    Ok(room.current_team)
}

/// Credit a correct guess to the active team (and to the explainer's
/// personal counter). Explainer-only. Reaching the target score moves the
/// room to [`GamePhase::Finished`].
pub fn record_guess(room: &mut Room, requester_id: i64) -> Result<(), TurnError> {
    ensure_phase(room, GamePhase::InProgress)?;
    ensure_explainer(room, requester_id)?;

    match room.current_team {
        Team::A => room.score_a += 1,
        Team::B => room.score_b += 1,
    }
    if let Some(player) = room
        .players
        .iter_mut()
        .find(|player| player.user_id == requester_id)
    {
        player.score += 1;
    }

    if check_winner(room).is_some() {
        room.phase = GamePhase::Finished;
    }

    Ok(())
}

/// The winning team, if any. Team A is checked first; under single-increment
/// scoring both thresholds can never be met at once, so the ordering only
/// pins down a documented tie-break.
pub fn check_winner(room: &Room) -> Option<Team> {
    if room.score_a >= room.target_score {
        Some(Team::A)
    } else if room.score_b >= room.target_score {
        Some(Team::B)
    } else {
        None
    }
}

/// Start (or restart) a game: creator-only, both teams need at least two
/// players. Resets scores, cursors, and the word history.
pub fn start_game(room: &mut Room, requester_id: i64) -> Result<(), TurnError> {
    if requester_id != room.creator_id {
        return Err(TurnError::NotCreator);
    }

    for team in [Team::A, Team::B] {
        let size = room.roster(team).len();
        if size < MIN_TEAM_SIZE {
            return Err(TurnError::InsufficientPlayers {
                team,
                required: MIN_TEAM_SIZE,
                actual: size,
            });
        }
    }

    room.phase = GamePhase::InProgress;
    room.current_team = Team::A;
    room.explainer_index = 0;
    room.guesser_index = 1;
    room.score_a = 0;
    room.score_b = 0;
    room.words_used.clear();
    for player in &mut room.players {
        player.score = 0;
    }

    Ok(())
}

/// Draw a random word for the current explainer, avoiding repeats until the
/// pool is exhausted; exhaustion clears the history and redraws, so repeats
/// are possible only after every word has been seen this round.
pub fn draw_word(
    room: &mut Room,
    requester_id: i64,
    pools: &WordPools,
) -> Result<String, TurnError> {
    ensure_phase(room, GamePhase::InProgress)?;
    ensure_explainer(room, requester_id)?;

    if pools.is_empty(room.difficulty) {
        return Err(TurnError::EmptyWordPool(room.difficulty));
    }

    let word = match pools.draw(room.difficulty, &room.words_used) {
        Some(word) => word.to_string(),
        None => {
            room.words_used.clear();
            pools
                .draw(room.difficulty, &room.words_used)
                .ok_or(TurnError::EmptyWordPool(room.difficulty))?
                .to_string()
        }
    };

    room.words_used.insert(word.clone());
    Ok(word)
}

fn ensure_phase(room: &Room, expected: GamePhase) -> Result<(), TurnError> {
    if room.phase != expected {
        return Err(TurnError::PhaseMismatch {
            expected,
            actual: room.phase,
        });
    }
    Ok(())
}

fn ensure_explainer(room: &Room, requester_id: i64) -> Result<(), TurnError> {
    let explainer_id = current_pair(room).map(|(explainer, _)| explainer.user_id);
    if explainer_id != Some(requester_id) {
        return Err(TurnError::NotExplainer);
    }
    Ok(())
}

fn ensure_explainer_or_creator(room: &Room, requester_id: i64) -> Result<(), TurnError> {
    if requester_id == room.creator_id {
        return Ok(());
    }
    ensure_explainer(room, requester_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    const CREATOR: i64 = 1;

    /// Room with `team_a` + `team_b` players and a started game.
    fn started_room(team_a: usize, team_b: usize) -> Room {
        let mut room = Room::new(
            "ABC123".into(),
            CREATOR,
            "creator".into(),
            Difficulty::Easy,
            25,
        );
        for i in 0..team_a {
            room.join_team(CREATOR + i as i64, format!("a{i}"), Team::A);
        }
        for i in 0..team_b {
            room.join_team(100 + i as i64, format!("b{i}"), Team::B);
        }
        start_game(&mut room, CREATOR).expect("start");
        room
    }

    #[test]
    fn pair_is_distinct_for_rosters_of_two_or_more() {
        for size in 2..=5 {
            let mut room = started_room(size, 2);
            for _ in 0..(size * 2) {
                let (explainer, guesser) = current_pair(&room).expect("pair");
                assert_ne!(explainer.user_id, guesser.user_id, "roster size {size}");
                advance_turn(&mut room, CREATOR).expect("advance");
            }
        }
    }

    #[test]
    fn single_player_roster_degenerates_to_same_player() {
        let mut room = Room::new("ABC123".into(), CREATOR, "c".into(), Difficulty::Easy, 25);
        room.join_team(7, "solo".into(), Team::A);
        room.phase = GamePhase::InProgress;

        let (explainer, guesser) = current_pair(&room).expect("pair");
        assert_eq!(explainer.user_id, 7);
        assert_eq!(guesser.user_id, 7);
    }

    #[test]
    fn empty_roster_has_no_pair() {
        let mut room = Room::new("ABC123".into(), CREATOR, "c".into(), Difficulty::Easy, 25);
        room.phase = GamePhase::InProgress;
        assert!(current_pair(&room).is_none());
    }

    #[test]
    fn rotation_is_round_robin_over_the_roster() {
        let size = 4;
        let mut room = started_room(size, 2);

        let mut explainers = Vec::new();
        for _ in 0..size {
            let (explainer, _) = current_pair(&room).expect("pair");
            explainers.push(explainer.user_id);
            advance_turn(&mut room, CREATOR).expect("advance");
        }

        let first = explainers[0];
        explainers.sort_unstable();
        explainers.dedup();
        assert_eq!(explainers.len(), size, "every player explained exactly once");

        // After a full cycle the rotation is back at the first explainer.
        let (explainer, _) = current_pair(&room).expect("pair");
        assert_eq!(explainer.user_id, first);
    }

    #[test]
    fn advance_hands_explainer_role_to_previous_guesser() {
        let mut room = started_room(3, 2);
        let (_, guesser) = current_pair(&room).expect("pair");
        let previous_guesser = guesser.user_id;

        advance_turn(&mut room, CREATOR).expect("advance");

        let (explainer, _) = current_pair(&room).expect("pair");
        assert_eq!(explainer.user_id, previous_guesser);
    }

    #[test]
    fn advance_requires_two_players_on_the_active_team() {
        let mut room = started_room(2, 2);
        // Shrink team A below the minimum after the game started.
        room.remove_player(CREATOR + 1);

        let err = advance_turn(&mut room, CREATOR).unwrap_err();
        assert_eq!(
            err,
            TurnError::InsufficientPlayers {
                team: Team::A,
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn switch_team_flips_and_resets() {
        let mut room = started_room(2, 2);
        room.explainer_index = 1;
        room.guesser_index = 0;
        room.words_used.insert("apple".into());

        let team = switch_team(&mut room, CREATOR).expect("switch");

        assert_eq!(team, Team::B);
        assert_eq!(room.current_team, Team::B);
        assert_eq!(room.explainer_index, 0);
        assert_eq!(room.guesser_index, 1);
        assert!(room.words_used.is_empty());
    }

    #[test]
    fn switch_team_rejects_non_creator() {
        let mut room = started_room(2, 2);
        let err = switch_team(&mut room, 999).unwrap_err();
        assert_eq!(err, TurnError::NotCreator);
        assert_eq!(room.current_team, Team::A);
    }

    #[test]
    fn record_guess_credits_team_and_explainer() {
        let mut room = started_room(2, 2);
        let explainer_id = current_pair(&room).expect("pair").0.user_id;

        record_guess(&mut room, explainer_id).expect("guess");

        assert_eq!(room.score_a, 1);
        assert_eq!(room.score_b, 0);
        assert_eq!(room.player(explainer_id).expect("player").score, 1);
    }

    #[test]
    fn record_guess_rejects_non_explainer() {
        let mut room = started_room(2, 2);
        let guesser_id = current_pair(&room).expect("pair").1.user_id;

        let err = record_guess(&mut room, guesser_id).unwrap_err();
        assert_eq!(err, TurnError::NotExplainer);
        assert_eq!(room.score_a, 0);
    }

    #[test]
    fn reaching_target_finishes_the_game() {
        let mut room = started_room(2, 2);
        room.target_score = 2;
        let explainer_id = current_pair(&room).expect("pair").0.user_id;

        record_guess(&mut room, explainer_id).expect("guess");
        assert_eq!(room.phase, GamePhase::InProgress);
        record_guess(&mut room, explainer_id).expect("guess");

        assert_eq!(room.phase, GamePhase::Finished);
        assert_eq!(check_winner(&room), Some(Team::A));

        let err = record_guess(&mut room, explainer_id).unwrap_err();
        assert!(matches!(err, TurnError::PhaseMismatch { .. }));
        assert_eq!(room.score_a, 2);
    }

    #[test]
    fn winner_check_prefers_team_a() {
        let mut room = started_room(2, 2);
        room.target_score = 1;
        room.score_a = 1;
        room.score_b = 1;
        assert_eq!(check_winner(&room), Some(Team::A));
    }

    #[test]
    fn start_game_requires_two_players_per_team() {
        let mut room = Room::new("ABC123".into(), CREATOR, "c".into(), Difficulty::Easy, 25);
        room.join_team(CREATOR, "c".into(), Team::A);
        room.join_team(2, "a1".into(), Team::A);
        room.join_team(3, "b0".into(), Team::B);

        let err = start_game(&mut room, CREATOR).unwrap_err();
        assert_eq!(
            err,
            TurnError::InsufficientPlayers {
                team: Team::B,
                required: 2,
                actual: 1
            }
        );
        assert_eq!(room.phase, GamePhase::Lobby);
    }

    #[test]
    fn start_game_rejects_non_creator() {
        let mut room = Room::new("ABC123".into(), CREATOR, "c".into(), Difficulty::Easy, 25);
        let err = start_game(&mut room, 999).unwrap_err();
        assert_eq!(err, TurnError::NotCreator);
    }

    #[test]
    fn rematch_resets_scores_and_cursors() {
        let mut room = started_room(2, 2);
        room.score_a = 24;
        room.score_b = 7;
        room.phase = GamePhase::Finished;
        room.current_team = Team::B;
        room.words_used.insert("apple".into());

        start_game(&mut room, CREATOR).expect("restart");

        assert_eq!(room.phase, GamePhase::InProgress);
        assert_eq!(room.current_team, Team::A);
        assert_eq!((room.score_a, room.score_b), (0, 0));
        assert_eq!((room.explainer_index, room.guesser_index), (0, 1));
        assert!(room.words_used.is_empty());
    }

    #[test]
    fn draw_word_never_repeats_until_exhaustion() {
        let pools = WordPools::new(
            vec!["one".into(), "two".into(), "three".into()],
            vec![],
            vec![],
        );
        let mut room = started_room(2, 2);
        let explainer_id = current_pair(&room).expect("pair").0.user_id;

        let mut seen = IndexSet::new();
        for _ in 0..3 {
            let word = draw_word(&mut room, explainer_id, &pools).expect("draw");
            assert!(seen.insert(word), "word repeated before exhaustion");
        }

        // Pool exhausted: the history resets and a repeat becomes legal.
        let word = draw_word(&mut room, explainer_id, &pools).expect("draw");
        assert!(seen.contains(&word));
        assert_eq!(room.words_used.len(), 1);
    }

    #[test]
    fn draw_word_rejects_non_explainer() {
        let pools = WordPools::new(vec!["one".into()], vec![], vec![]);
        let mut room = started_room(2, 2);
        let guesser_id = current_pair(&room).expect("pair").1.user_id;

        let err = draw_word(&mut room, guesser_id, &pools).unwrap_err();
        assert_eq!(err, TurnError::NotExplainer);
    }

    #[test]
    fn gameplay_is_rejected_before_start() {
        let pools = WordPools::default();
        let mut room = Room::new("ABC123".into(), CREATOR, "c".into(), Difficulty::Easy, 25);
        room.join_team(CREATOR, "c".into(), Team::A);
        room.join_team(2, "a1".into(), Team::A);

        assert!(matches!(
            record_guess(&mut room, CREATOR),
            Err(TurnError::PhaseMismatch { .. })
        ));
        assert!(matches!(
            draw_word(&mut room, CREATOR, &pools),
            Err(TurnError::PhaseMismatch { .. })
        ));
        assert!(matches!(
            advance_turn(&mut room, CREATOR),
            Err(TurnError::PhaseMismatch { .. })
        ));
    }
}
