use serde::{Deserialize, Serialize};

/// Unix milliseconds — the only time type.
pub type Ms = i64;

/// Closed query interval `[start, end]`.
///
/// Inclusion tests are `<=`/`>=` on both endpoints, matching the scheduler
/// UI's notion of a viewing window. An inverted window (`start > end`) is
/// representable on purpose: the filter degrades it to recurring-only
/// results instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: Ms,
    pub end: Ms,
}

impl Window {
    pub fn new(start: Ms, end: Ms) -> Self {
        Self { start, end }
    }

    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains_instant(&self, t: Ms) -> bool {
        self.start <= t && t <= self.end
    }
}

/// Whether an appointment is a single event or a repeating pattern.
///
/// Recurring appointments are opaque always-visible records; no recurrence
/// expansion happens anywhere in this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentKind {
    #[default]
    OneTime,
    Recurring,
}

/// A single calendar entry — an immutable value record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    /// Display label, derived from `id` by the generator.
    pub caption: String,
    /// Small classification code; the filter never inspects it.
    pub status: i32,
    /// Small classification code; the filter never inspects it.
    pub label: i32,
    pub start: Ms,
    pub end: Ms,
    pub kind: AppointmentKind,
}

impl Appointment {
    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }

    pub fn is_recurring(&self) -> bool {
        self.kind != AppointmentKind::OneTime
    }
}
