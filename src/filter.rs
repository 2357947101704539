use tracing::debug;

use crate::error::FeedError;
use crate::generate::generate_appointments;
use crate::model::{Appointment, AppointmentKind, Ms, Window};

// ── Visibility predicate ─────────────────────────────────────────

/// True when `appt` should be rendered for the query window.
///
/// The four interval clauses are kept as an explicit disjunction — one per
/// overlap scenario — so each can be audited on its own rather than hidden
/// inside a collapsed overlap formula. The recurring clause is a policy
/// override, not interval math: a recurring series is always in view.
pub fn in_view(appt: &Appointment, window: &Window) -> bool {
    (appt.start >= window.start && appt.end <= window.end)       // fully inside the window
        || (appt.start >= window.start && appt.start <= window.end) // starts inside, runs past the end
        || (appt.end >= window.start && appt.end <= window.end)     // ends inside, started before
        || (appt.start < window.start && appt.end > window.end)     // spans the whole window
        || appt.kind != AppointmentKind::OneTime                    // recurring: always visible
}

/// Lazy, order-preserving selection of the visible appointments.
///
/// Inverted windows are not validated here: no interval clause can hold, so
/// the result degrades to recurring records only.
pub fn filter_in_range<'a>(
    appointments: &'a [Appointment],
    window: Window,
) -> impl Iterator<Item = &'a Appointment> {
    appointments.iter().filter(move |a| in_view(a, &window))
}

// ── Entry points ─────────────────────────────────────────────────

/// The composition callers use: regenerate the reference dataset and keep
/// what is visible in `[start, end]`. No caching — every call builds a
/// fresh collection, so record identity is not stable across calls.
pub fn get_appointments(start: Ms, end: Ms) -> Vec<Appointment> {
    let window = Window::new(start, end);
    let dataset = generate_appointments();
    let visible: Vec<Appointment> = filter_in_range(&dataset, window).cloned().collect();
    debug!(
        start,
        end,
        total = dataset.len(),
        visible = visible.len(),
        "window query"
    );
    visible
}

/// Checked variant of [`get_appointments`]: rejects an inverted window
/// instead of silently returning recurring-only results.
pub fn try_get_appointments(start: Ms, end: Ms) -> Result<Vec<Appointment>, FeedError> {
    if start > end {
        return Err(FeedError::InvalidRange { start, end });
    }
    Ok(get_appointments(start, end))
}

// ── Materialized snapshot ────────────────────────────────────────

/// A dataset materialized once, for callers that need record identity to
/// stay stable across queries. The regenerate-per-call entry points above
/// remain the reference behavior; this is the explicit opt-in boundary.
#[derive(Debug, Clone)]
pub struct AppointmentSet {
    appointments: Vec<Appointment>,
}

impl AppointmentSet {
    /// Materialize the reference dataset once.
    pub fn generate() -> Self {
        Self {
            appointments: generate_appointments(),
        }
    }

    /// Snapshot an existing collection, e.g. one built with a custom
    /// [`crate::generate::GeneratorConfig`].
    pub fn from_appointments(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Visible appointments for `[start, end]`, borrowing from the snapshot.
    pub fn in_range(&self, start: Ms, end: Ms) -> impl Iterator<Item = &Appointment> {
        filter_in_range(&self.appointments, Window::new(start, end))
    }
}
