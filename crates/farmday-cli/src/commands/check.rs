use farmday_core::DanglingReference;

use super::{CmdResult, Context};

fn describe(reference: &DanglingReference) -> String {
    match reference {
        DanglingReference::CharacterMaterial { character, material } => {
            format!("character '{character}' -> missing material '{material}'")
        }
        DanglingReference::CharacterElement { character, element } => {
            format!("character '{character}' -> missing element '{element}'")
        }
        DanglingReference::WeaponMaterial { weapon, material } => {
            format!("weapon '{weapon}' -> missing material '{material}'")
        }
        DanglingReference::MaterialDomain { material, domain } => {
            format!("material '{material}' -> missing domain '{domain}'")
        }
    }
}

/// Dangling references are reported, not treated as failures.
pub fn run(ctx: &Context) -> CmdResult {
    let dangling = ctx.dataset.dangling_references();
    if dangling.is_empty() {
        println!("ok");
    }
    for reference in &dangling {
        println!("{}", describe(reference));
    }
    Ok(())
}
