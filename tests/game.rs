//! Game integration tests.

use std::collections::HashSet;

use gofish::{
    ActionError, Card, DECK_SIZE, Deck, DeckError, DrawError, Game, GameOptions, GameState, Hand,
    HandError, JoinError, MatchError, Player, Rank, RankError, RequestOutcome, ScoreError,
    StartError, Suit, check_opponent_has, resolve_request,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a seated two-player game whose deck yields `draws` in order.
///
/// `start` deals the first `hand_size` draws to player 0 and the next
/// `hand_size` to player 1.
fn rigged_game(options: GameOptions, draws: &[Card]) -> Game {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    let game = Game::with_deck(options, Deck::from_cards(deck).unwrap());
    game.join("Alice").unwrap();
    game.join("Bob").unwrap();
    game
}

#[test]
fn fresh_deck_has_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = Deck::new_shuffled(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    let game = Game::new(GameOptions::default(), 3);
    assert_eq!(game.deck_cards(), deck.cards());
}

#[test]
fn draw_from_empty_deck_is_an_error() {
    let mut deck = Deck::from_cards(vec![card(Suit::Hearts, Rank::Two)]).unwrap();
    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.draw(), Err(DrawError::DeckEmpty));
    assert!(deck.is_empty());
}

#[test]
fn deck_with_duplicate_cards_is_rejected() {
    let duplicate = card(Suit::Hearts, Rank::Two);
    let result = Deck::from_cards(vec![
        card(Suit::Clubs, Rank::Four),
        card(Suit::Spades, Rank::Three),
        duplicate,
        duplicate,
    ]);
    assert_eq!(result, Err(DeckError::DuplicateCard(duplicate)));

    let same_rank = Deck::from_cards(vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Two),
        card(Suit::Hearts, Rank::Three),
    ])
    .unwrap();
    assert_eq!(same_rank.len(), 3);

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let full = Deck::new_shuffled(&mut rng);
    assert_eq!(Deck::from_cards(full.cards().to_vec()), Ok(full));
}

#[test]
fn deal_into_is_all_or_nothing() {
    let mut deck = Deck::from_cards(vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Three),
        card(Suit::Clubs, Rank::Four),
    ])
    .unwrap();
    let mut hand = Hand::new();

    assert_eq!(deck.deal_into(&mut hand, 2), 2);
    assert_eq!(hand.len(), 2);
    assert_eq!(deck.len(), 1);
    assert!(hand.has_rank(Rank::Four));
    assert!(hand.has_rank(Rank::Three));

    assert_eq!(deck.deal_into(&mut hand, 2), 0);
    assert_eq!(hand.len(), 2);
    assert_eq!(deck.len(), 1);
}

#[test]
fn hand_tracks_suits_per_rank() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Clubs, Rank::King));
    hand.add_card(card(Suit::Hearts, Rank::Two));
    hand.add_card(card(Suit::Spades, Rank::King));

    assert_eq!(hand.len(), 3);
    assert_eq!(hand.rank_count(), 2);
    assert_eq!(hand.suit_count(Rank::King), 2);
    assert_eq!(hand.suit_count(Rank::Ace), 0);
    assert_eq!(
        hand.cards(),
        vec![
            card(Suit::Hearts, Rank::Two),
            card(Suit::Spades, Rank::King),
            card(Suit::Clubs, Rank::King),
        ]
    );

    let removed = hand.remove_rank(Rank::King).unwrap();
    assert_eq!(removed.iter().collect::<Vec<_>>(), vec![Suit::Spades, Suit::Clubs]);
    assert!(!hand.has_rank(Rank::King));
    assert_eq!(hand.rank_count(), 1);
    assert_eq!(hand.remove_rank(Rank::King), Err(HandError::RankAbsent));

    hand.remove_rank(Rank::Two).unwrap();
    assert!(hand.is_empty());
    assert!(hand.ranks().is_empty());
}

#[test]
#[should_panic(expected = "already in this hand")]
fn adding_a_card_twice_panics() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Five));
    hand.add_card(card(Suit::Hearts, Rank::Five));
}

#[test]
fn rank_conversion_and_display() {
    assert_eq!(Rank::try_from(1_u8), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(13_u8), Ok(Rank::King));
    assert_eq!(Rank::try_from(0_u8), Err(RankError::OutOfRange(0)));
    assert_eq!(Rank::try_from(14_u8), Err(RankError::OutOfRange(14)));
    assert_eq!(Rank::Seven.value(), 7);
    assert_eq!(card(Suit::Hearts, Rank::Ace).to_string(), "ACE of HEARTS");
}

#[test]
fn request_transfers_every_suit_of_the_rank() {
    let mut alice = Player::new(0, "Alice");
    let mut bob = Player::new(1, "Bob");
    bob.receive_card(card(Suit::Hearts, Rank::Seven));
    bob.receive_card(card(Suit::Clubs, Rank::Seven));
    bob.receive_card(card(Suit::Spades, Rank::Two));
    alice.receive_card(card(Suit::Diamonds, Rank::Seven));

    assert!(check_opponent_has(&bob, Rank::Seven));
    assert_eq!(
        resolve_request(&mut alice, &mut bob, Rank::Seven),
        RequestOutcome::Transferred(2)
    );

    let suits = alice.hand().suits(Rank::Seven);
    assert_eq!(suits.len(), 3);
    assert!(suits.contains(Suit::Hearts));
    assert!(suits.contains(Suit::Clubs));
    assert!(!bob.hand().has_rank(Rank::Seven));
    assert_eq!(bob.hand().len(), 1);
}

#[test]
fn request_for_missing_rank_changes_nothing() {
    let mut alice = Player::new(0, "Alice");
    let mut bob = Player::new(1, "Bob");
    alice.receive_card(card(Suit::Hearts, Rank::Three));
    bob.receive_card(card(Suit::Spades, Rank::Two));

    assert!(!check_opponent_has(&bob, Rank::Three));
    assert_eq!(
        resolve_request(&mut alice, &mut bob, Rank::Three),
        RequestOutcome::GoFish
    );
    assert_eq!(alice.hand().len(), 1);
    assert_eq!(bob.hand().len(), 1);
}

#[test]
fn complete_set_scores_one_point() {
    let mut player = Player::new(0, "Alice");
    for suit in Suit::ALL {
        player.receive_card(card(suit, Rank::Nine));
    }
    player.receive_card(card(Suit::Hearts, Rank::Ten));

    assert!(player.check_complete_set(Rank::Nine));
    assert!(player.check_complete_set(Rank::Nine));
    player.resolve_match(Rank::Nine).unwrap();

    assert!(!player.hand().has_rank(Rank::Nine));
    assert_eq!(player.hand().len(), 1);
    assert_eq!(player.points(), 1);
}

#[test]
fn incomplete_set_is_rejected_without_changes() {
    let mut player = Player::new(0, "Alice");
    player.receive_card(card(Suit::Hearts, Rank::Nine));
    player.receive_card(card(Suit::Spades, Rank::Nine));
    player.receive_card(card(Suit::Clubs, Rank::Nine));

    assert_eq!(
        player.resolve_match(Rank::Nine),
        Err(MatchError::IncompleteSet)
    );
    assert_eq!(player.resolve_match(Rank::Ace), Err(MatchError::IncompleteSet));
    assert_eq!(player.hand().suit_count(Rank::Nine), 3);
    assert_eq!(player.points(), 0);
}

#[test]
fn join_and_start_errors() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.start().unwrap_err(), StartError::NotEnoughPlayers);

    assert_eq!(game.join("Alice"), Ok(0));
    assert_eq!(game.join("Bob"), Ok(1));
    assert_eq!(game.join("Carol").unwrap_err(), JoinError::TableFull);

    game.start().unwrap();
    assert_eq!(game.start().unwrap_err(), StartError::InvalidState);
    assert_eq!(game.join("Dave").unwrap_err(), JoinError::InvalidState);
    assert_eq!(game.player_count(), 2);
}

#[test]
fn start_rejects_short_deck() {
    let game = rigged_game(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Hearts, Rank::Four),
        ],
    );

    assert_eq!(game.start().unwrap_err(), StartError::NotEnoughCards);
    assert_eq!(game.cards_remaining(), 3);
    assert_eq!(game.state(), GameState::WaitingForPlayers);
}

#[test]
fn start_deals_opening_hands() {
    let game = Game::new(GameOptions::default(), 9);
    game.join("Alice").unwrap();
    game.join("Bob").unwrap();

    assert!(!game.is_game_over());
    game.start().unwrap();

    assert_eq!(game.state(), GameState::AwaitingAction);
    assert_eq!(game.current_player(), Some(0));
    assert_eq!(game.opponent(), Some(1));
    assert_eq!(game.get_hand(0).unwrap().len(), 4);
    assert_eq!(game.get_hand(1).unwrap().len(), 4);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 8);
    assert!(game.get_hand(2).is_none());
}

#[test]
fn actions_rejected_before_start() {
    let game = Game::new(GameOptions::default(), 1);
    game.join("Alice").unwrap();

    assert_eq!(game.current_player(), None);
    assert_eq!(
        game.take_turn(0, Rank::Ace).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(
        game.attempt_match(0, Rank::Ace).unwrap_err(),
        MatchError::InvalidState
    );
    assert_eq!(game.results().unwrap_err(), ScoreError::GameNotOver);
}

#[test]
fn successful_request_ends_the_turn() {
    let game = rigged_game(
        GameOptions::default().with_hand_size(2),
        &[
            card(Suit::Hearts, Rank::Two),   // Alice
            card(Suit::Hearts, Rank::Three), // Alice
            card(Suit::Spades, Rank::Two),   // Bob
            card(Suit::Hearts, Rank::Five),  // Bob
            card(Suit::Clubs, Rank::King),
        ],
    );
    game.start().unwrap();

    assert_eq!(
        game.take_turn(1, Rank::Two).unwrap_err(),
        ActionError::NotYourTurn
    );

    let turn = game.take_turn(0, Rank::Two).unwrap();
    assert_eq!(turn.opponent_id, 1);
    assert_eq!(turn.outcome, RequestOutcome::Transferred(1));
    assert_eq!(turn.drawn, None);
    assert_eq!(turn.state, GameState::CheckingMatch);
    assert_eq!(game.get_hand(0).unwrap().suit_count(Rank::Two), 2);
    assert!(!game.get_hand(1).unwrap().has_rank(Rank::Two));
    assert_eq!(game.cards_remaining(), 1);

    assert_eq!(
        game.take_turn(0, Rank::Three).unwrap_err(),
        ActionError::InvalidState
    );
    assert!(game.is_match_step());

    game.decline_match(0).unwrap();
    assert_eq!(game.state(), GameState::AwaitingAction);
    assert_eq!(game.current_player(), Some(1));
    assert_eq!(game.opponent(), Some(0));
}

#[test]
fn go_fish_draws_one_card() {
    let game = rigged_game(
        GameOptions::default().with_hand_size(2),
        &[
            card(Suit::Hearts, Rank::Two),   // Alice
            card(Suit::Hearts, Rank::Three), // Alice
            card(Suit::Hearts, Rank::Four),  // Bob
            card(Suit::Hearts, Rank::Five),  // Bob
            card(Suit::Spades, Rank::King),  // Alice's go fish
            card(Suit::Spades, Rank::Queen),
        ],
    );
    game.start().unwrap();

    let turn = game.take_turn(0, Rank::Three).unwrap();
    assert_eq!(turn.outcome, RequestOutcome::GoFish);
    assert_eq!(turn.drawn, Some(card(Suit::Spades, Rank::King)));
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.get_hand(0).unwrap().len(), 3);
    assert_eq!(game.get_hand(1).unwrap().len(), 2);

    game.decline_match(0).unwrap();
    assert_eq!(game.current_player(), Some(1));
}

#[test]
fn go_fish_with_empty_deck_draws_nothing() {
    let game = rigged_game(
        GameOptions::default().with_hand_size(2),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Hearts, Rank::Four),
            card(Suit::Hearts, Rank::Five),
        ],
    );
    game.start().unwrap();
    assert_eq!(game.cards_remaining(), 0);

    let turn = game.take_turn(0, Rank::Three).unwrap();
    assert_eq!(turn.outcome, RequestOutcome::GoFish);
    assert_eq!(turn.drawn, None);
    assert_eq!(turn.state, GameState::CheckingMatch);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.get_hand(0).unwrap().len(), 2);
    assert!(!game.is_game_over());
}

#[test]
fn turns_wrap_around_in_join_order() {
    let game = rigged_game(
        GameOptions::default().with_hand_size(1),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Spades, Rank::Four),
            card(Suit::Spades, Rank::Five),
        ],
    );
    game.start().unwrap();

    game.take_turn(0, Rank::Ace).unwrap();
    game.decline_match(0).unwrap();
    assert_eq!(game.current_player(), Some(1));

    game.take_turn(1, Rank::Ace).unwrap();
    game.decline_match(1).unwrap();
    assert_eq!(game.current_player(), Some(0));
}

#[test]
fn rejected_match_still_ends_the_turn() {
    let game = rigged_game(
        GameOptions::default().with_hand_size(2),
        &[
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Diamonds, Rank::Two),
        ],
    );
    game.start().unwrap();

    game.take_turn(0, Rank::Nine).unwrap();
    assert_eq!(game.get_hand(0).unwrap().suit_count(Rank::Nine), 3);

    assert_eq!(
        game.attempt_match(1, Rank::Nine).unwrap_err(),
        MatchError::NotYourTurn
    );
    assert_eq!(
        game.attempt_match(0, Rank::Nine).unwrap_err(),
        MatchError::IncompleteSet
    );
    assert_eq!(game.get_points(0), Some(0));
    assert_eq!(game.get_hand(0).unwrap().suit_count(Rank::Nine), 3);
    assert_eq!(game.state(), GameState::AwaitingAction);
    assert_eq!(game.current_player(), Some(1));
}

#[test]
fn extra_turn_on_catch_keeps_the_player() {
    let game = rigged_game(
        GameOptions::default()
            .with_hand_size(2)
            .with_extra_turn_on_catch(true),
        &[
            card(Suit::Hearts, Rank::Two),   // Alice
            card(Suit::Hearts, Rank::Three), // Alice
            card(Suit::Spades, Rank::Two),   // Bob
            card(Suit::Hearts, Rank::Five),  // Bob
            card(Suit::Clubs, Rank::King),   // Alice's go fish
        ],
    );
    game.start().unwrap();

    let turn = game.take_turn(0, Rank::Two).unwrap();
    assert_eq!(turn.outcome, RequestOutcome::Transferred(1));
    game.decline_match(0).unwrap();
    assert_eq!(game.current_player(), Some(0));

    let turn = game.take_turn(0, Rank::Three).unwrap();
    assert_eq!(turn.outcome, RequestOutcome::GoFish);
    game.decline_match(0).unwrap();
    assert_eq!(game.current_player(), Some(1));
}

#[test]
fn last_set_ends_the_game() {
    let game = rigged_game(
        GameOptions::default().with_hand_size(2),
        &[
            card(Suit::Hearts, Rank::Nine),   // Alice
            card(Suit::Spades, Rank::Nine),   // Alice
            card(Suit::Clubs, Rank::Nine),    // Bob
            card(Suit::Diamonds, Rank::Nine), // Bob
        ],
    );
    game.start().unwrap();

    let turn = game.take_turn(0, Rank::Nine).unwrap();
    assert_eq!(turn.outcome, RequestOutcome::Transferred(2));
    assert!(game.get_hand(1).unwrap().is_empty());
    assert!(!game.is_game_over());
    assert_eq!(game.results().unwrap_err(), ScoreError::GameNotOver);

    let scored = game.attempt_match(0, Rank::Nine).unwrap();
    assert_eq!(scored.points, 1);
    assert!(scored.game_over);
    assert!(game.is_game_over());
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.current_player(), None);

    assert_eq!(
        game.take_turn(0, Rank::Two).unwrap_err(),
        ActionError::GameOver
    );
    assert_eq!(
        game.attempt_match(0, Rank::Two).unwrap_err(),
        MatchError::GameOver
    );
    assert_eq!(game.decline_match(1).unwrap_err(), ActionError::GameOver);

    let result = game.results().unwrap();
    assert_eq!(result.winners, vec![0]);
    assert_eq!(result.scores.len(), 2);
    assert_eq!(result.scores[0].name, "Alice");
    assert_eq!(result.scores[0].points, 1);
    assert_eq!(result.scores[1].points, 0);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_hand_size(7)
        .with_extra_turn_on_catch(true);

    assert_eq!(options.hand_size, 7);
    assert!(options.extra_turn_on_catch);

    let defaults = GameOptions::default();
    assert_eq!(defaults.hand_size, 4);
    assert!(!defaults.extra_turn_on_catch);
}
