use std::fmt;
use std::time::Duration;


const DAY_SECS: u64 = 24 * 60 * 60;
const WEEK_SECS: u64 = 7 * DAY_SECS;
const MONTH_SECS: u64 = 4 * WEEK_SECS;
const QUARTER_SECS: u64 = 3 * MONTH_SECS;
const YEAR_SECS: u64 = 4 * QUARTER_SECS;


/// A fixed reporting period.
///
/// Lengths are whole multiples of a day, not calendar-accurate:
/// a month is four weeks, a quarter three months, and a year four quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Period {
    /// All periods, shortest first. This is also the order of the table rows.
    pub const ALL: [Period; 5] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Quarterly,
        Period::Yearly,
    ];

    pub fn name(self) -> &'static str
    {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::Quarterly => "Quarterly",
            Period::Yearly => "Yearly",
        }
    }

    pub fn length(self) -> Duration
    {
        let secs = match self {
            Period::Daily => DAY_SECS,
            Period::Weekly => WEEK_SECS,
            Period::Monthly => MONTH_SECS,
            Period::Quarterly => QUARTER_SECS,
            Period::Yearly => YEAR_SECS,
        };
        Duration::from_secs(secs)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_are_fixed_multiples_of_a_day() {
        let days: Vec<u64> = Period::ALL.iter()
            .map(|p| p.length().as_secs() / DAY_SECS)
            .collect();
        assert_eq!(days, [1, 7, 28, 84, 336]);
        assert!(Period::ALL.iter().all(|p| p.length().as_secs() % DAY_SECS == 0));
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Period::Quarterly.to_string(), "Quarterly");
        assert_eq!(format!("{}", Period::Daily), "Daily");
    }
}
