//! Calendar geometry: date arithmetic, month navigation, holiday lookup and
//! the month grid consumed by display layers.

pub mod grid;
pub mod holidays;
pub mod math;
pub mod month;

pub use grid::{DayCell, MonthGrid};
pub use holidays::{is_month_day_key, HolidayTable};
pub use math::{
    adjacent_key, date_key, date_key_of, days_in_month, first_of_month, month_day_key_of,
    parse_date_key, resolve_day, weekday_of_first, weekday_of_first_from, WeekStart,
};
pub use month::{MonthError, MonthRef};
