pub use downtime::calc_downtime;
pub use format::{format_duration, FormatError};
pub use period::Period;
pub use table::{budgets, render_table, Budget};

mod downtime;
mod format;
mod period;
mod table;
