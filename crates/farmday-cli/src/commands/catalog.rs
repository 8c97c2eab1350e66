use clap::Args;
use farmday_core::view::{character_catalog, weapon_catalog, CatalogView, EntityKind};
use farmday_core::Filter;

use super::{print_items, CmdResult, Context};

#[derive(Args)]
pub struct CatalogArgs {
    /// "all", "a-z", or a category (element id / weapon type)
    #[arg(long, default_value = "all")]
    filter: String,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn print_catalog(view: &CatalogView, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print_items(&view.items);
    }
    Ok(())
}

pub fn run_characters(ctx: &Context, args: CatalogArgs) -> CmdResult {
    let view = character_catalog(&ctx.dataset, &Filter::from_token(&args.filter));
    print_catalog(&view, args.json)
}

pub fn run_weapons(ctx: &Context, args: CatalogArgs) -> CmdResult {
    let view = weapon_catalog(&ctx.dataset, &Filter::from_token(&args.filter));
    print_catalog(&view, args.json)
}

pub fn run_filters(ctx: &Context, kind: &str) -> CmdResult {
    let view = match kind.parse::<EntityKind>()? {
        EntityKind::Character => character_catalog(&ctx.dataset, &Filter::All),
        EntityKind::Weapon => weapon_catalog(&ctx.dataset, &Filter::All),
    };
    for button in &view.filters {
        println!("{}\t{}", button.token, button.label);
    }
    Ok(())
}
