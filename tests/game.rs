//! Game integration tests.

use c8rs::{
    ActionError, Card, Event, Game, GameOptions, GameState, Hand, OpponentAction, Outcome, Phase,
    RoundId, Side, Suit, policy,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn game_with(
    options: GameOptions,
    player: &[Card],
    opponent: &[Card],
    draw: &[Card],
    discard: &[Card],
) -> Game {
    let state = GameState {
        round: RoundId(1),
        player_hand: Hand::from_cards(player.to_vec()),
        opponent_hand: Hand::from_cards(opponent.to_vec()),
        draw_pile: draw.to_vec(),
        discard_pile: discard.to_vec(),
        active_suit: discard.last().map_or(Suit::Hearts, |c| c.suit),
        turn: Side::Player,
        phase: Phase::Playing,
    };
    Game::from_state(options, 1, state)
}

#[test]
fn idle_game_rejects_actions() {
    let game = Game::new(GameOptions::default(), 1);
    let state = game.current_state();

    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.round, RoundId(0));
    assert_eq!(
        game.draw_card(Side::Player).unwrap_err(),
        ActionError::InvalidPhase
    );
    assert_eq!(
        game.choose_suit(Suit::Hearts).unwrap_err(),
        ActionError::InvalidPhase
    );
    assert_eq!(
        game.opponent_turn(RoundId(0)).unwrap_err(),
        ActionError::InvalidPhase
    );
}

#[test]
fn start_round_deals_full_deck() {
    let game = Game::new(GameOptions::default(), 42);
    let state = game.start_round();

    assert_eq!(state.round, RoundId(1));
    assert_eq!(state.player_hand.len(), 8);
    assert_eq!(state.opponent_hand.len(), 8);
    assert_eq!(state.discard_pile.len(), 1);
    assert_eq!(state.draw_pile.len(), 35);
    assert_eq!(state.active_suit, state.top_discard().unwrap().suit);
    assert_eq!(state.turn, Side::Player);
    assert_eq!(state.phase, Phase::Playing);
    assert!(state.is_partition_of_deck());
    assert_eq!(game.current_state(), state);

    let events = game.take_events();
    assert_eq!(
        events,
        vec![Event::RoundStarted {
            round: RoundId(1),
            starter: state.top_discard().unwrap(),
        }]
    );
    assert!(game.take_events().is_empty());
}

#[test]
fn is_playable_and_accessors_follow_the_round() {
    let game = Game::new(GameOptions::default(), 9);

    assert_eq!(game.round(), RoundId(0));
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.turn(), Side::Player);
    assert_eq!(game.cards_remaining(), 0);
    assert!(!game.is_playable(card(Suit::Hearts, 2)));
    assert!(!game.is_playable(card(Suit::Spades, 8)));

    let state = game.start_round();
    assert_eq!(game.round(), RoundId(1));
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.turn(), Side::Player);
    assert_eq!(game.active_suit(), state.active_suit);
    assert_eq!(game.cards_remaining(), 35);
    assert_eq!(game.cards_remaining(), state.cards_remaining());

    for &c in state.player_hand.cards() {
        assert_eq!(game.is_playable(c), state.is_playable(c));
    }
    assert!(game.is_playable(card(Suit::Clubs, 8)));
    assert!(game.is_playable(card(state.active_suit, 2)));
}

#[test]
fn same_seed_deals_same_round() {
    let a = Game::new(GameOptions::default(), 5).start_round();
    let b = Game::new(GameOptions::default(), 5).start_round();
    assert_eq!(a, b);

    let game = Game::new(GameOptions::default(), 5);
    let first = game.start_round();
    let second = game.start_round();
    assert_eq!(second.round, RoundId(2));
    assert_ne!(first.player_hand, second.player_hand);
}

#[test]
fn hand_size_option_is_clamped() {
    let game = Game::new(GameOptions::default().with_hand_size(30), 3);
    let state = game.start_round();
    assert_eq!(state.player_hand.len(), 25);
    assert_eq!(state.opponent_hand.len(), 25);
    assert_eq!(state.draw_pile.len(), 1);
    assert!(state.is_partition_of_deck());
}

#[test]
fn playing_last_card_wins() {
    let game = game_with(
        GameOptions::default(),
        &[card(Suit::Diamonds, 7)],
        &[card(Suit::Clubs, 2), card(Suit::Clubs, 3)],
        &[card(Suit::Hearts, 4)],
        &[card(Suit::Diamonds, 12)],
    );

    let state = game.play_card(Side::Player, card(Suit::Diamonds, 7)).unwrap();
    assert_eq!(state.phase, Phase::Won);
    assert!(state.player_hand.is_empty());

    assert_eq!(
        game.take_events(),
        vec![
            Event::CardPlayed {
                side: Side::Player,
                card: card(Suit::Diamonds, 7),
            },
            Event::RoundEnded {
                outcome: Outcome::Won,
            },
        ]
    );
}

#[test]
fn drawing_last_card_passes_turn() {
    let game = game_with(
        GameOptions::default(),
        &[card(Suit::Hearts, 2)],
        &[card(Suit::Clubs, 3)],
        &[card(Suit::Spades, 9)],
        &[card(Suit::Clubs, 10)],
    );

    let state = game.draw_card(Side::Player).unwrap();
    assert_eq!(
        state.player_hand.cards(),
        &[card(Suit::Hearts, 2), card(Suit::Spades, 9)]
    );
    assert!(state.draw_pile.is_empty());
    assert_eq!(state.turn, Side::Opponent);
    assert_eq!(state.phase, Phase::Playing);

    assert_eq!(
        game.take_events(),
        vec![Event::CardDrawn {
            side: Side::Player,
            card: Some(card(Suit::Spades, 9)),
        }]
    );
}

#[test]
fn stuck_round_is_a_draw() {
    let game = game_with(
        GameOptions::default(),
        &[card(Suit::Hearts, 2)],
        &[card(Suit::Spades, 3)],
        &[],
        &[card(Suit::Clubs, 10)],
    );

    let state = game.draw_card(Side::Player).unwrap();
    assert_eq!(state.phase, Phase::Draw);

    let events = game.take_events();
    assert_eq!(
        events,
        vec![
            Event::CardDrawn {
                side: Side::Player,
                card: None,
            },
            Event::RoundEnded {
                outcome: Outcome::Draw,
            },
        ]
    );
}

#[test]
fn wild_card_suit_choice_flow() {
    let game = game_with(
        GameOptions::default(),
        &[card(Suit::Spades, 8), card(Suit::Hearts, 3)],
        &[card(Suit::Clubs, 4), card(Suit::Diamonds, 5)],
        &[card(Suit::Hearts, 6)],
        &[card(Suit::Diamonds, 10)],
    );

    let state = game.play_card(Side::Player, card(Suit::Spades, 8)).unwrap();
    assert_eq!(state.phase, Phase::AwaitingSuitChoice);
    assert_eq!(state.turn, Side::Player);

    assert_eq!(
        game.draw_card(Side::Player).unwrap_err(),
        ActionError::InvalidPhase
    );
    assert_eq!(
        game.opponent_turn(state.round).unwrap_err(),
        ActionError::InvalidPhase
    );

    let state = game.choose_suit(Suit::Clubs).unwrap();
    assert_eq!(state.active_suit, Suit::Clubs);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.turn, Side::Opponent);
}

#[test]
fn rejected_actions_leave_state_unchanged() {
    let game = game_with(
        GameOptions::default(),
        &[card(Suit::Hearts, 2), card(Suit::Clubs, 3)],
        &[card(Suit::Spades, 4)],
        &[card(Suit::Diamonds, 5)],
        &[card(Suit::Clubs, 10)],
    );
    let before = game.current_state();

    assert_eq!(
        game.play_card(Side::Player, card(Suit::Hearts, 2)).unwrap_err(),
        ActionError::UnplayableCard
    );
    assert_eq!(
        game.play_card(Side::Player, card(Suit::Spades, 4)).unwrap_err(),
        ActionError::CardNotInHand
    );
    assert_eq!(
        game.draw_card(Side::Opponent).unwrap_err(),
        ActionError::NotYourTurn
    );
    assert_eq!(
        game.opponent_turn(before.round).unwrap_err(),
        ActionError::NotYourTurn
    );

    assert_eq!(game.current_state(), before);
    assert!(game.take_events().is_empty());
}

#[test]
fn opponent_turn_plays_matching_card() {
    let game = game_with(
        GameOptions::default(),
        &[card(Suit::Clubs, 3), card(Suit::Hearts, 9)],
        &[
            card(Suit::Hearts, 8),
            card(Suit::Spades, 2),
            card(Suit::Clubs, 5),
        ],
        &[card(Suit::Diamonds, 6)],
        &[card(Suit::Clubs, 10)],
    );

    let state = game.play_card(Side::Player, card(Suit::Clubs, 3)).unwrap();
    assert_eq!(state.turn, Side::Opponent);

    let state = game.opponent_turn(state.round).unwrap();
    assert_eq!(state.top_discard(), Some(card(Suit::Clubs, 5)));
    assert_eq!(state.active_suit, Suit::Clubs);
    assert_eq!(state.turn, Side::Player);
}

#[test]
fn opponent_wild_names_its_longest_suit() {
    let mut state = game_with(
        GameOptions::default(),
        &[card(Suit::Hearts, 9)],
        &[
            card(Suit::Spades, 2),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 4),
        ],
        &[card(Suit::Diamonds, 6)],
        &[card(Suit::Clubs, 10)],
    )
    .current_state();
    state.turn = Side::Opponent;
    let game = Game::from_state(GameOptions::default(), 1, state);

    let state = game.opponent_turn(RoundId(1)).unwrap();
    assert_eq!(state.top_discard(), Some(card(Suit::Diamonds, 8)));
    assert_eq!(state.active_suit, Suit::Spades);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.turn, Side::Player);

    assert_eq!(
        game.take_events(),
        vec![
            Event::CardPlayed {
                side: Side::Opponent,
                card: card(Suit::Diamonds, 8),
            },
            Event::SuitChosen {
                side: Side::Opponent,
                suit: Suit::Spades,
            },
        ]
    );
}

#[test]
fn opponent_wild_applies_the_policy_suit() {
    let mut state = game_with(
        GameOptions::default(),
        &[card(Suit::Hearts, 9)],
        &[
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 4),
            card(Suit::Hearts, 2),
            card(Suit::Spades, 5),
        ],
        &[card(Suit::Diamonds, 6)],
        &[card(Suit::Clubs, 10)],
    )
    .current_state();
    state.turn = Side::Opponent;

    let chosen = policy::choose_action(&state.opponent_view());
    let OpponentAction::Play {
        card: wild,
        suit: Some(suit),
    } = chosen
    else {
        panic!("expected a wild play, got {chosen:?}");
    };
    assert_eq!(wild, card(Suit::Diamonds, 8));

    let game = Game::from_state(GameOptions::default(), 1, state);
    let state = game.opponent_turn(RoundId(1)).unwrap();
    assert_eq!(state.active_suit, suit);
    assert_eq!(game.active_suit(), suit);
    assert_eq!(state.turn, Side::Player);
    assert_eq!(
        game.take_events(),
        vec![
            Event::CardPlayed {
                side: Side::Opponent,
                card: wild,
            },
            Event::SuitChosen {
                side: Side::Opponent,
                suit,
            },
        ]
    );
}

#[test]
fn opponent_draws_when_stuck_in_hand() {
    let game = game_with(
        GameOptions::default(),
        &[card(Suit::Clubs, 3), card(Suit::Clubs, 9)],
        &[card(Suit::Spades, 2), card(Suit::Diamonds, 4)],
        &[card(Suit::Hearts, 6)],
        &[card(Suit::Clubs, 10)],
    );

    game.play_card(Side::Player, card(Suit::Clubs, 3)).unwrap();
    let state = game.opponent_turn(RoundId(1)).unwrap();

    assert_eq!(state.opponent_hand.len(), 3);
    assert!(state.draw_pile.is_empty());
    assert_eq!(state.turn, Side::Player);
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn stale_opponent_turn_is_discarded() {
    let game = Game::new(GameOptions::default(), 11);
    let old = game.start_round();
    game.draw_card(Side::Player).unwrap();

    let fresh = game.start_round();
    assert_eq!(
        game.opponent_turn(old.round).unwrap_err(),
        ActionError::StaleRound
    );
    assert_eq!(game.current_state(), fresh);
}

#[test]
fn auto_opponent_replies_immediately() {
    let game = game_with(
        GameOptions::default().with_auto_opponent(true),
        &[card(Suit::Clubs, 3), card(Suit::Hearts, 9)],
        &[card(Suit::Clubs, 5), card(Suit::Spades, 2)],
        &[card(Suit::Diamonds, 6)],
        &[card(Suit::Clubs, 10)],
    );

    let state = game.play_card(Side::Player, card(Suit::Clubs, 3)).unwrap();
    assert_eq!(state.top_discard(), Some(card(Suit::Clubs, 5)));
    assert_eq!(state.turn, Side::Player);
    assert_eq!(game.take_events().len(), 2);
}

#[test]
fn terminal_phase_is_absorbing() {
    let game = game_with(
        GameOptions::default(),
        &[card(Suit::Diamonds, 7)],
        &[card(Suit::Diamonds, 2)],
        &[card(Suit::Hearts, 4)],
        &[card(Suit::Diamonds, 12)],
    );
    let won = game.play_card(Side::Player, card(Suit::Diamonds, 7)).unwrap();
    assert_eq!(won.phase, Phase::Won);

    assert_eq!(
        game.play_card(Side::Opponent, card(Suit::Diamonds, 2)).unwrap_err(),
        ActionError::InvalidPhase
    );
    assert_eq!(
        game.draw_card(Side::Opponent).unwrap_err(),
        ActionError::InvalidPhase
    );
    assert_eq!(
        game.choose_suit(Suit::Spades).unwrap_err(),
        ActionError::InvalidPhase
    );
    assert_eq!(
        game.opponent_turn(won.round).unwrap_err(),
        ActionError::InvalidPhase
    );
    assert_eq!(game.current_state(), won);
}

#[test]
fn full_rounds_keep_the_deck_partitioned() {
    let game = Game::new(GameOptions::default().with_auto_opponent(true), 2024);

    for _ in 0..20 {
        let mut state = game.start_round();
        let mut guard = 0;

        while !state.is_terminal() {
            guard += 1;
            assert!(guard < 500, "round did not finish");

            state = match state.phase {
                Phase::AwaitingSuitChoice => game.choose_suit(Suit::Spades).unwrap(),
                _ => match state.playable_cards(Side::Player).first() {
                    Some(&card) => game.play_card(Side::Player, card).unwrap(),
                    None => game.draw_card(Side::Player).unwrap(),
                },
            };

            assert!(state.is_partition_of_deck());
            assert!(!(state.player_hand.is_empty() && state.opponent_hand.is_empty()));
        }

        let ended = game
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, Event::RoundEnded { .. }))
            .count();
        assert_eq!(ended, 1);
        assert!(state.phase.outcome().is_some());
    }
}
