use c8rs::{Card, Event, Game, GameOptions, GameState, Outcome, Phase, RoundId, Side, Suit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    /// Deals a new round and returns its id for scheduling the opponent.
    pub fn start_round(&self) -> f64 {
        self.game.start_round().round.0 as f64
    }

    pub fn play_card(&self, suit: &str, rank: u8) -> Result<(), JsValue> {
        let card = Card::new(suit_from_str(suit)?, rank);
        self.game
            .play_card(Side::Player, card)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn choose_suit(&self, suit: &str) -> Result<(), JsValue> {
        self.game
            .choose_suit(suit_from_str(suit)?)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn draw_card(&self) -> Result<(), JsValue> {
        self.game
            .draw_card(Side::Player)
            .map(|_| ())
            .map_err(js_err)
    }

    /// Plays the opponent's move for `round`; moves for an old round are
    /// rejected.
    pub fn opponent_turn(&self, round: f64) -> Result<(), JsValue> {
        self.game
            .opponent_turn(RoundId(round as u64))
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn is_playable(&self, suit: &str, rank: u8) -> Result<bool, JsValue> {
        Ok(self.game.is_playable(Card::new(suit_from_str(suit)?, rank)))
    }

    pub fn take_events(&self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self.game.take_events().into_iter().map(JsEvent::from).collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(&self.game.current_state()))
    }
}

#[derive(Serialize)]
struct Snapshot {
    round: f64,
    phase: &'static str,
    turn: &'static str,
    active_suit: &'static str,
    top_discard: Option<JsCard>,
    player_hand: Vec<JsPlayableCard>,
    opponent_cards: u32,
    cards_remaining: u32,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let player_hand = state
            .player_hand
            .cards()
            .iter()
            .map(|card| JsPlayableCard {
                card: card_to_js(*card),
                playable: state.phase == Phase::Playing
                    && state.turn == Side::Player
                    && state.is_playable(*card),
            })
            .collect();

        Self {
            round: state.round.0 as f64,
            phase: phase_to_str(state.phase),
            turn: side_to_str(state.turn),
            active_suit: suit_to_str(state.active_suit),
            top_discard: state.top_discard().map(card_to_js),
            player_hand,
            opponent_cards: state.opponent_hand.len() as u32,
            cards_remaining: state.cards_remaining() as u32,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize)]
struct JsPlayableCard {
    #[serde(flatten)]
    card: JsCard,
    playable: bool,
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsEvent {
    RoundStarted { round: f64, starter: JsCard },
    CardPlayed { side: &'static str, card: JsCard },
    SuitChosen { side: &'static str, suit: &'static str },
    CardDrawn { side: &'static str, card: Option<JsCard> },
    RoundEnded { outcome: &'static str },
}

impl From<Event> for JsEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::RoundStarted { round, starter } => Self::RoundStarted {
                round: round.0 as f64,
                starter: card_to_js(starter),
            },
            Event::CardPlayed { side, card } => Self::CardPlayed {
                side: side_to_str(side),
                card: card_to_js(card),
            },
            Event::SuitChosen { side, suit } => Self::SuitChosen {
                side: side_to_str(side),
                suit: suit_to_str(suit),
            },
            // The opponent's drawn card stays hidden.
            Event::CardDrawn { side, card } => Self::CardDrawn {
                side: side_to_str(side),
                card: card.filter(|_| side == Side::Player).map(card_to_js),
            },
            Event::RoundEnded { outcome } => Self::RoundEnded {
                outcome: outcome_to_str(outcome),
            },
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn suit_from_str(suit: &str) -> Result<Suit, JsValue> {
    match suit {
        "Hearts" => Ok(Suit::Hearts),
        "Diamonds" => Ok(Suit::Diamonds),
        "Clubs" => Ok(Suit::Clubs),
        "Spades" => Ok(Suit::Spades),
        _ => Err(JsValue::from_str("unknown suit")),
    }
}

fn side_to_str(side: Side) -> &'static str {
    match side {
        Side::Player => "Player",
        Side::Opponent => "Opponent",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::AwaitingSuitChoice => "AwaitingSuitChoice",
        Phase::Playing => "Playing",
        Phase::Won => "Won",
        Phase::Lost => "Lost",
        Phase::Draw => "Draw",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "Won",
        Outcome::Lost => "Lost",
        Outcome::Draw => "Draw",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
