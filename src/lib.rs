//! In-memory appointment data provider for a calendar/scheduler UI:
//! a deterministic-shape synthetic generator feeding a range-overlap
//! visibility filter. Recurring appointments bypass the interval test
//! entirely and are always in view.

pub mod error;
pub mod filter;
pub mod generate;
pub mod model;

pub use error::FeedError;
pub use filter::{filter_in_range, get_appointments, try_get_appointments, AppointmentSet};
pub use generate::{generate_appointments, GeneratorConfig};
pub use model::{Appointment, AppointmentKind, Ms, Window};
