//! Interactive Twenty-One games.

use anyhow::Result;
use log::info;

use super::prompt::Decision;
use super::{clear, prompt, render, text, Pacing};
use crate::cards::Deck;
use crate::core::{GameRng, TableConfig};
use crate::games::twenty_one::Table;

/// Play games until the user declines another.
pub fn run(config: TableConfig) -> Result<()> {
    let pacing = Pacing::new(config.pacing_ms);
    let mut shuffles = GameRng::seeded_or_random(config.seed).for_context("deck");

    clear()?;
    println!("{}", text::TWENTY_ONE_RULES);
    prompt::press_enter()?;

    loop {
        let mut table = Table::deal(Deck::shuffled(&mut shuffles));
        clear()?;

        player_turn(&mut table)?;
        pacing.pause();

        if table.player().is_bust() {
            println!("{}", render::bust("player"));
        } else {
            table.play_dealer();
            clear()?;
            println!("{}", render::hand("Player", "You are", table.player()));
            println!("{}", render::divider());
            pacing.pause();
            println!("{}", render::hand("Dealer", "The dealer is", table.dealer()));
            if table.dealer().is_bust() {
                println!("{}", render::divider());
                println!("{}", render::bust("dealer"));
            }
        }

        let outcome = table.outcome();
        info!(
            "hand over: player {} vs dealer {} -> {:?}",
            table.player().total(),
            table.dealer().total(),
            outcome
        );
        println!("{}", render::divider());
        println!("{}", render::outcome(outcome));
        println!("{}", render::divider());

        if !prompt::play_again("Would you like to play another game?")? {
            break;
        }
    }

    println!("Thanks for playing '21'! Good-bye!");
    Ok(())
}

fn player_turn(table: &mut Table) -> Result<()> {
    loop {
        println!("{}", render::divider());
        println!("{}", render::dealer_showing(table.dealer()));
        println!("{}", render::divider());
        println!("{}", render::hand("Player", "You are", table.player()));

        if table.player().is_bust() {
            return Ok(());
        }
        match prompt::hit_or_stay()? {
            Decision::Hit => {
                if table.hit_player().is_none() {
                    return Ok(());
                }
            }
            Decision::Stay => return Ok(()),
        }
    }
}
