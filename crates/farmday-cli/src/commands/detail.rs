use clap::Args;
use farmday_core::view::{detail_for, DetailView, EntityKind, MaterialCard, Selection};

use super::{CmdResult, Context};

#[derive(Args)]
pub struct DetailArgs {
    /// "character" or "weapon"
    kind: EntityKind,
    /// Entity id
    id: String,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn print_card(card: &MaterialCard) {
    let marker = if card.available_today { " (Available Today)" } else { "" };
    println!("Material{marker}: {}", card.material_name);
    println!("Domain: {}", card.domain_name);
    println!("Region: {}", card.region);
    println!("{}", card.days_label());
}

pub fn run(ctx: &Context, args: DetailArgs) -> CmdResult {
    let selection = Selection {
        kind: args.kind,
        id: args.id,
    };
    let Some(detail) = detail_for(&ctx.dataset, &selection, ctx.day) else {
        return Err(format!("no displayable data for {} '{}'", selection.kind, selection.id).into());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    match &detail {
        DetailView::Character(character) => {
            println!("{} [{}]", character.name, character.element.name);
            for card in &character.cards {
                println!();
                print_card(card);
            }
        }
        DetailView::Weapon(weapon) => {
            println!("{}", weapon.title);
            println!();
            print_card(&weapon.card);
        }
    }
    Ok(())
}
