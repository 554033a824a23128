//! CLI Crazy Eights example.
//!
//! Run with `RUST_LOG=c8rs=debug` to see engine traces.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use c8rs::{Event, Game, GameOptions, GameState, Outcome, Phase, Side, Suit};

const OPPONENT_DELAY: Duration = Duration::from_millis(600);

fn main() {
    env_logger::init();
    println!("Crazy Eights CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        let mut state = game.start_round();
        print_events(&game);

        while !state.is_terminal() {
            if state.turn == Side::Opponent && state.phase == Phase::Playing {
                thread::sleep(OPPONENT_DELAY);
                match game.opponent_turn(state.round) {
                    Ok(next) => state = next,
                    Err(err) => println!("Opponent error: {err}"),
                }
                print_events(&game);
                continue;
            }

            print_table(&state);

            let result = if state.phase == Phase::AwaitingSuitChoice {
                let Some(suit) = prompt_suit() else {
                    return;
                };
                game.choose_suit(suit)
            } else {
                let input = prompt_line("Card number to play, 'd' to draw: ");
                match input.as_str() {
                    "q" | "quit" => return,
                    "d" | "draw" => game.draw_card(Side::Player),
                    _ => match input
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| state.player_hand.cards().get(n.wrapping_sub(1)))
                    {
                        Some(&card) => game.play_card(Side::Player, card),
                        None => {
                            println!("Unknown action.");
                            continue;
                        }
                    },
                }
            };

            match result {
                Ok(next) => state = next,
                Err(err) => println!("Action error: {err}"),
            }
            print_events(&game);
        }

        match state.phase.outcome() {
            Some(Outcome::Won) => println!("You win!"),
            Some(Outcome::Lost) => println!("The computer wins."),
            Some(Outcome::Draw) => println!("Nobody can move. It's a draw."),
            None => {}
        }

        if prompt_line("Play again? (y/n): ") != "y" {
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_suit() -> Option<Suit> {
    loop {
        match prompt_line("Choose a suit (h/d/c/s): ").as_str() {
            "h" | "hearts" => return Some(Suit::Hearts),
            "d" | "diamonds" => return Some(Suit::Diamonds),
            "c" | "clubs" => return Some(Suit::Clubs),
            "s" | "spades" => return Some(Suit::Spades),
            "q" | "quit" => return None,
            _ => println!("Please enter h, d, c or s."),
        }
    }
}

fn print_table(state: &GameState) {
    let top = state
        .top_discard()
        .map_or_else(|| "-".to_string(), |c| c.to_string());
    println!(
        "\nDraw pile: {} | Discard: {top} | Suit: {} | Opponent holds {}",
        state.cards_remaining(),
        state.active_suit,
        state.opponent_hand.len()
    );

    for (index, card) in state.player_hand.cards().iter().enumerate() {
        let marker = if state.is_playable(*card) { "*" } else { " " };
        println!("{marker} {:>2}: {card}", index + 1);
    }
    println!();
}

fn print_events(game: &Game) {
    for event in game.take_events() {
        match event {
            Event::RoundStarted { round, starter } => {
                println!("Round {} begins with {starter}.", round.0);
            }
            Event::CardPlayed { side, card } => println!("{} played {card}.", who(side)),
            Event::SuitChosen { side, suit } => println!("{} named {suit}.", who(side)),
            Event::CardDrawn {
                side: Side::Player,
                card: Some(card),
            } => println!("You drew {card}."),
            Event::CardDrawn {
                side,
                card: Some(_),
            } => println!("{} drew a card.", who(side)),
            Event::CardDrawn { side, card: None } => {
                println!("{} could not draw and passed.", who(side));
            }
            Event::RoundEnded { .. } => {}
        }
    }
}

const fn who(side: Side) -> &'static str {
    match side {
        Side::Player => "You",
        Side::Opponent => "Computer",
    }
}
