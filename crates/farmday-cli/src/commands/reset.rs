use std::io::Write;
use std::ops::ControlFlow;
use std::time::Duration;

use chrono::{FixedOffset, Local, Offset, Utc};
use clap::Args;
use farmday_core::view::clock_view;
use farmday_core::{Config, CountdownTicker};

use super::CmdResult;

#[derive(Args)]
pub struct ResetArgs {
    /// Keep refreshing the countdown until interrupted
    #[arg(long)]
    watch: bool,
    /// Local UTC offset in hours (e.g. 2, -5, 5.5); defaults to the system offset
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<f64>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn resolve_offset(hours: Option<f64>) -> Result<FixedOffset, Box<dyn std::error::Error>> {
    match hours {
        None => Ok(Local::now().offset().fix()),
        Some(h) if !h.is_finite() => Err(format!("offset must be a number of hours: {h}").into()),
        Some(h) => FixedOffset::east_opt((h * 3600.0).round() as i32)
            .ok_or_else(|| format!("offset out of range: {h}").into()),
    }
}

pub async fn run(args: ResetArgs) -> CmdResult {
    let offset = resolve_offset(args.offset)?;
    let view = clock_view(Utc::now(), offset);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("Server Reset: {}", view.server_reset);
        println!(
            "Your Local Time: {} | {}",
            view.local_reset.offset, view.local_reset.time
        );
        if !args.watch {
            println!("Next reset in: {}", view.countdown);
        }
    }

    if args.watch {
        let period = Duration::from_millis(Config::load_or_default().clock.tick_ms);
        let ticker = CountdownTicker::new(period);
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "cannot listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        };
        let mut stdout = std::io::stdout();
        ticker
            .run(
                Utc::now,
                |tick| {
                    let _ = write!(stdout, "\rNext reset in: {}", tick.countdown);
                    let _ = stdout.flush();
                    ControlFlow::Continue(())
                },
                shutdown,
            )
            .await;
        println!();
    }
    Ok(())
}
