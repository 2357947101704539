use tracing::info;

use apptview::generate::today_anchor_ms;
use apptview::model::Ms;

const MS_PER_DAY: Ms = 24 * 3_600_000;

/// Prints the appointments visible in a query window as JSON, for wiring a
/// scheduler UI against real output. Window defaults to today's local day.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let anchor = today_anchor_ms();
    let start: Ms = std::env::var("APPTVIEW_START")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(anchor);
    let end: Ms = std::env::var("APPTVIEW_END")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(anchor + MS_PER_DAY);

    let visible = apptview::try_get_appointments(start, end)?;
    info!(start, end, count = visible.len(), "visible appointments");

    println!("{}", serde_json::to_string_pretty(&visible)?);
    Ok(())
}
