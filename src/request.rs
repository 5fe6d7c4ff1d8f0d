//! Asking an opponent for a rank.

use crate::card::{Card, Rank};
use crate::player::Player;
use crate::result::RequestOutcome;

/// Returns whether `opponent` holds at least one card of `rank`.
#[must_use]
pub fn check_opponent_has(opponent: &Player, rank: Rank) -> bool {
    opponent.hand().has_rank(rank)
}

/// Resolves `requester` asking `opponent` for `rank`.
///
/// If the opponent holds the rank, every suit of it moves into the
/// requester's hand and [`RequestOutcome::Transferred`] reports how many
/// cards moved. Otherwise nothing changes and [`RequestOutcome::GoFish`] is
/// returned; drawing the replacement card is up to the caller.
pub fn resolve_request(
    requester: &mut Player,
    opponent: &mut Player,
    rank: Rank,
) -> RequestOutcome {
    let Ok(suits) = opponent.hand_mut().remove_rank(rank) else {
        return RequestOutcome::GoFish;
    };

    for suit in suits.iter() {
        requester.receive_card(Card::new(suit, rank));
    }

    log::debug!(
        "{} took {} x {rank} from {}",
        requester.name(),
        suits.len(),
        opponent.name()
    );

    RequestOutcome::Transferred(suits.len())
}
