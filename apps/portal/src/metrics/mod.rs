// Derived metrics for dashboard cards and tables.
// Pure functions over record slices; a zero denominator never reaches the view
// as NaN or infinity.

pub mod aggregate;
pub mod availability;
pub mod percentage;
pub mod rates;

pub use aggregate::{average_by, count_where, distinct_sorted_values, sum_by, tally};
pub use availability::{average_daily_hours, hours_by_day, slot_hours, total_available_hours};
pub use percentage::{percentage, round_to_tenth, Percentage};
pub use rates::{engagement_rate, registration_percent, registration_rate, share_of};
