//! Interactive console Hold'em. All validation lives in the library; this
//! binary only prompts, parses, and re-prompts until an action is accepted.

use holdem_rs::agents::ActionSource;
use holdem_rs::betting::{Action, ActionError, Player, RoundContext};
use holdem_rs::cards::Card;
use holdem_rs::deck::Deck;
use holdem_rs::table::{RoundOutcome, Table};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn fmt_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

/// Prompts on stdout, reads actions from stdin. EOF folds the seat so a
/// closed input stream cannot hang the game.
#[derive(Default)]
struct ConsoleSource;

impl ConsoleSource {
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl ActionSource for ConsoleSource {
    fn choose(&mut self, _seat: usize, player: &Player, ctx: &RoundContext<'_>) -> Action {
        println!("--------------------");
        println!("Pot: {}", ctx.pot);
        println!("Community cards: {}", fmt_cards(ctx.community));
        if let Some(hole) = player.hole() {
            println!("Your hand, {}: {} {}", player.name(), hole[0], hole[1]);
        }
        loop {
            if ctx.to_call > 0 {
                print!(
                    "{} ({} chips), {} to call. 'call', 'raise <amount>', or 'fold': ",
                    player.name(),
                    player.chips(),
                    ctx.to_call
                );
            } else {
                print!(
                    "{} ({} chips), no bet to you. 'check', 'bet <amount>', or 'fold': ",
                    player.name(),
                    player.chips()
                );
            }
            let _ = io::stdout().flush();
            let Some(line) = self.read_line() else {
                println!();
                return Action::Fold;
            };
            match Action::from_str(&line) {
                Ok(action) => return action,
                Err(err) => println!("{err}"),
            }
        }
    }

    fn rejected(&mut self, _seat: usize, err: &ActionError) {
        println!("{err}");
    }
}

fn announce(table: &Table, outcome: &RoundOutcome) {
    let names: Vec<&str> =
        outcome.winners.iter().map(|&seat| table.players()[seat].name()).collect();
    match (names.as_slice(), outcome.category) {
        ([name], Some(cat)) => println!("\n{name} wins the pot of {} with {cat}!", outcome.pot),
        ([name], None) => println!("\n{name} wins the pot of {}!", outcome.pot),
        (many, _) => println!(
            "\nSplit pot between {}: {} each.",
            many.join(", "),
            outcome.share
        ),
    }
    for p in table.players() {
        println!("{}: {} chips", p.name(), p.chips());
    }
}

fn main() -> io::Result<()> {
    let mut table = Table::new(&["Alice", "Bob", "Charlie"], 1000);
    let mut source = ConsoleSource;
    let mut round = 1u32;
    loop {
        println!("\n========== Round {round} ==========");
        let seed: u64 = rand::rng().random();
        match table.play_round(Deck::shuffled(seed), &mut source) {
            Ok(outcome) => announce(&table, &outcome),
            Err(err) => {
                eprintln!("fatal: {err}");
                break;
            }
        }
        table.remove_busted();
        if table.players().len() <= 1 {
            match table.players().first() {
                Some(p) => println!("\nGame over! {} is the winner!", p.name()),
                None => println!("\nGame over!"),
            }
            break;
        }
        print!("Play another round? (y/n): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y")
        {
            break;
        }
        round += 1;
    }
    Ok(())
}
