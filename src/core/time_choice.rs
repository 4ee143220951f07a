//! # Time Choices
//!
//! The fixed menu used both for snoozing a reminder and for scheduling a new
//! one. Choices are picked with the digit keys `1`..`4`; anything else cancels.
//!
//! Times are computed on the local wall clock ("tomorrow at 08:00" means 08:00
//! where the user sits) and converted to UTC before they leave the client.

use chrono::{DateTime, Days, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::core::key::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeChoice {
    InAnHour,
    TomorrowMorning,
    TomorrowEndOfDay,
    /// Short delay for trying the reminder flow by hand.
    InFiveSeconds,
}

const MORNING_HOUR: u32 = 8;
const END_OF_DAY_HOUR: u32 = 17;

impl TimeChoice {
    pub const ALL: [TimeChoice; 4] = [
        TimeChoice::InAnHour,
        TimeChoice::TomorrowMorning,
        TimeChoice::TomorrowEndOfDay,
        TimeChoice::InFiveSeconds,
    ];

    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('1') => Some(TimeChoice::InAnHour),
            Key::Char('2') => Some(TimeChoice::TomorrowMorning),
            Key::Char('3') => Some(TimeChoice::TomorrowEndOfDay),
            Key::Char('4') => Some(TimeChoice::InFiveSeconds),
            _ => None,
        }
    }

    pub fn digit(self) -> char {
        match self {
            TimeChoice::InAnHour => '1',
            TimeChoice::TomorrowMorning => '2',
            TimeChoice::TomorrowEndOfDay => '3',
            TimeChoice::InFiveSeconds => '4',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeChoice::InAnHour => "For an hour",
            TimeChoice::TomorrowMorning => "Tomorrow morning",
            TimeChoice::TomorrowEndOfDay => "Tomorrow EOD",
            TimeChoice::InFiveSeconds => "[DEBUG] For 5 seconds",
        }
    }

    /// Resolve the choice against `now` (in the user's zone) to a UTC instant.
    pub fn resolve<Tz: TimeZone>(self, now: &DateTime<Tz>) -> DateTime<Utc> {
        match self {
            TimeChoice::InAnHour => now.with_timezone(&Utc) + TimeDelta::hours(1),
            TimeChoice::TomorrowMorning => tomorrow_at(now, MORNING_HOUR),
            TimeChoice::TomorrowEndOfDay => tomorrow_at(now, END_OF_DAY_HOUR),
            TimeChoice::InFiveSeconds => now.with_timezone(&Utc) + TimeDelta::seconds(5),
        }
    }
}

/// `hour:00` on the next calendar day in `now`'s zone.
///
/// A wall-clock time swallowed by a DST gap moves forward one hour.
fn tomorrow_at<Tz: TimeZone>(now: &DateTime<Tz>, hour: u32) -> DateTime<Utc> {
    let zone = now.timezone();
    let date = now.date_naive() + Days::new(1);
    let naive = date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default());

    zone.from_local_datetime(&naive)
        .earliest()
        .or_else(|| zone.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| now.with_timezone(&Utc) + TimeDelta::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(offset_hours: i32, y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_digits_map_to_choices() {
        for choice in TimeChoice::ALL {
            assert_eq!(TimeChoice::from_key(Key::Char(choice.digit())), Some(choice));
        }
        assert_eq!(TimeChoice::from_key(Key::Char('0')), None);
        assert_eq!(TimeChoice::from_key(Key::Char('x')), None);
        assert_eq!(TimeChoice::from_key(Key::Enter), None);
    }

    #[test]
    fn test_in_an_hour() {
        let now = at(2, 2024, 6, 1, 10, 15);
        assert_eq!(
            TimeChoice::InAnHour.resolve(&now),
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_tomorrow_morning_is_local_eight() {
        let now = at(1, 2024, 3, 10, 22, 30);
        assert_eq!(
            TimeChoice::TomorrowMorning.resolve(&now),
            Utc.with_ymd_and_hms(2024, 3, 11, 7, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_tomorrow_end_of_day_crosses_month() {
        let now = at(-5, 2024, 1, 31, 9, 0);
        assert_eq!(
            TimeChoice::TomorrowEndOfDay.resolve(&now),
            Utc.with_ymd_and_hms(2024, 2, 1, 22, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_five_seconds() {
        let now = at(0, 2024, 6, 1, 23, 59);
        assert_eq!(
            TimeChoice::InFiveSeconds.resolve(&now),
            Utc.with_ymd_and_hms(2024, 6, 1, 23, 59, 5).unwrap()
        );
    }
}
