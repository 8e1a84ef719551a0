pub mod constants;
pub mod exclusion;
pub mod festival;
pub mod sampling;
pub mod weekly;

pub use constants::*;
pub use exclusion::{contains_any, eligible_for_slot, is_eligible, screen_for_slot};
pub use festival::{plan_lantern_festival, plan_spring_festival};
pub use sampling::{draw_distinct, draw_one};
pub use weekly::{parse_start_date, plan_week, slots_for};
