use clap::Args;
use farmday_core::schedule::available_materials;
use farmday_core::view::{today_view, Tab};

use super::{print_items, CmdResult, Context};

#[derive(Args)]
pub struct TodayArgs {
    /// "characters" or "weapons"
    #[arg(long, default_value = "characters")]
    tab: Tab,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(ctx: &Context, args: TodayArgs) -> CmdResult {
    let view = today_view(&ctx.dataset, args.tab, ctx.day);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let materials: Vec<&str> = available_materials(&ctx.dataset, ctx.day)
        .into_iter()
        .map(|m| m.name.as_str())
        .collect();
    println!("Day: {}", view.day_name);
    if !materials.is_empty() {
        println!("Materials: {}", materials.join(", "));
    }
    print_items(&view.items);
    Ok(())
}
