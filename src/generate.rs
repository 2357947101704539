use chrono::{Local, NaiveTime};

use crate::model::{Appointment, AppointmentKind, Ms};

const MS_PER_SECOND: Ms = 1_000;
const MS_PER_MINUTE: Ms = 60 * MS_PER_SECOND;
const MS_PER_HOUR: Ms = 60 * MS_PER_MINUTE;

/// Reference dataset size.
pub const APPOINTMENT_COUNT: u32 = 100;
/// Every generated appointment runs exactly three hours.
pub const APPOINTMENT_DURATION_MS: Ms = 3 * MS_PER_HOUR;

/// Inputs to the synthetic generator.
///
/// `kind` is a real parameter rather than a hardcoded one-time tag so that
/// callers exercising the recurring-bypass path can build a recurring
/// dataset without patching records after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub count: u32,
    /// Start of the spread, normally today's local midnight.
    pub anchor: Ms,
    pub kind: AppointmentKind,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: APPOINTMENT_COUNT,
            anchor: today_anchor_ms(),
            kind: AppointmentKind::OneTime,
        }
    }
}

/// Today's local midnight in unix milliseconds.
///
/// Midnight can fall inside a DST gap in some zones; in that case the
/// current instant stands in for it.
pub fn today_anchor_ms() -> Ms {
    Local::now()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_local_timezone(Local)
        .earliest()
        .map_or_else(|| Local::now().timestamp_millis(), |dt| dt.timestamp_millis())
}

/// Start offset of record `i` relative to the anchor: `i` hours plus
/// wrapping minute/second/millisecond components, spreading the records
/// across the day and beyond as `i` grows past 24.
fn offset_ms(i: u32) -> Ms {
    let i = i as Ms;
    i * MS_PER_HOUR + (i % 24) * MS_PER_MINUTE + (i % 60) * MS_PER_SECOND + (i % 60)
}

/// Build the full synthetic collection in id order. Pure function of the
/// config; repeated calls yield structurally identical but distinct records.
pub fn generate(cfg: &GeneratorConfig) -> Vec<Appointment> {
    let mut dataset = Vec::with_capacity(cfg.count as usize);
    for i in 0..cfg.count {
        let start = cfg.anchor + offset_ms(i);
        dataset.push(Appointment {
            id: i,
            caption: format!("Appointment{i}"),
            status: (i % 2) as i32,
            label: (i % 2) as i32,
            start,
            end: start + APPOINTMENT_DURATION_MS,
            kind: cfg.kind,
        });
    }
    dataset
}

/// Reference no-argument entry point: 100 one-time records anchored at
/// today's local midnight.
pub fn generate_appointments() -> Vec<Appointment> {
    generate(&GeneratorConfig::default())
}
