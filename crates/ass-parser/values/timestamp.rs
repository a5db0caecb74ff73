//! Event timestamps with centisecond precision (`h:mm:ss.ff`)

use super::ValueError;
use core::{fmt, str::FromStr, time::Duration};

/// Centiseconds per hour, minute and second
const CS_PER_HOUR: u64 = 360_000;
const CS_PER_MINUTE: u64 = 6_000;
const CS_PER_SECOND: u64 = 100;

/// Point in script time, stored as whole centiseconds
///
/// Hours take one or more digits; minutes, seconds and centiseconds take
/// exactly two.
///
/// ```rust
/// use ass_parser::values::Timestamp;
///
/// let ts: Timestamp = "0:01:30.50".parse()?;
/// assert_eq!(ts.centiseconds(), 9_050);
/// assert_eq!(ts.to_string(), "0:01:30.50");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(u64);

impl Timestamp {
    /// Zero timestamp
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_centiseconds(centiseconds: u64) -> Self {
        Self(centiseconds)
    }

    /// Saturates at the largest representable timestamp
    #[must_use]
    pub const fn from_hmsc(hours: u64, minutes: u64, seconds: u64, centiseconds: u64) -> Self {
        Self(
            hours
                .saturating_mul(CS_PER_HOUR)
                .saturating_add(minutes.saturating_mul(CS_PER_MINUTE))
                .saturating_add(seconds.saturating_mul(CS_PER_SECOND))
                .saturating_add(centiseconds),
        )
    }

    #[must_use]
    pub const fn centiseconds(self) -> u64 {
        self.0
    }

    /// Truncates anything below a centisecond
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis() / 10).unwrap_or(u64::MAX))
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_duration(self) -> Duration {
        // Below 100, so the nanosecond part stays under one second
        let centiseconds = (self.0 % CS_PER_SECOND) as u32;
        Duration::new(self.0 / CS_PER_SECOND, centiseconds * 10_000_000)
    }
}

/// Parse exactly two ASCII digits
fn two_digits(part: &str) -> Option<u64> {
    if part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

impl FromStr for Timestamp {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidTime(s.to_owned());
        let text = s.trim();

        let (hours, rest) = text.split_once(':').ok_or_else(invalid)?;
        let (minutes, rest) = rest.split_once(':').ok_or_else(invalid)?;
        let (seconds, centiseconds) = rest.split_once('.').ok_or_else(invalid)?;

        if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: u64 = hours.parse().map_err(|_| invalid())?;
        let minutes = two_digits(minutes).filter(|&m| m < 60).ok_or_else(invalid)?;
        let seconds = two_digits(seconds).filter(|&s| s < 60).ok_or_else(invalid)?;
        let centiseconds = two_digits(centiseconds).ok_or_else(invalid)?;

        hours
            .checked_mul(CS_PER_HOUR)
            .and_then(|h| h.checked_add(minutes * CS_PER_MINUTE + seconds * CS_PER_SECOND + centiseconds))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / CS_PER_HOUR;
        let minutes = self.0 % CS_PER_HOUR / CS_PER_MINUTE;
        let seconds = self.0 % CS_PER_MINUTE / CS_PER_SECOND;
        let centiseconds = self.0 % CS_PER_SECOND;
        write!(f, "{hours}:{minutes:02}:{seconds:02}.{centiseconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_pattern() {
        let ts: Timestamp = "1:02:03.04".parse().unwrap();
        assert_eq!(ts, Timestamp::from_hmsc(1, 2, 3, 4));
        assert_eq!(ts.to_string(), "1:02:03.04");
    }

    #[test]
    fn hours_take_any_number_of_digits() {
        let ts: Timestamp = "123:00:00.00".parse().unwrap();
        assert_eq!(ts.centiseconds(), 123 * 360_000);
        assert_eq!(ts.to_string(), "123:00:00.00");

        let ts: Timestamp = "00:00:01.00".parse().unwrap();
        assert_eq!(ts.to_string(), "0:00:01.00");
    }

    #[test]
    fn zero_renders_single_hour_digit() {
        assert_eq!(Timestamp::ZERO.to_string(), "0:00:00.00");
    }

    #[test]
    fn rejects_off_pattern_values() {
        for bad in [
            "0:1:00.00",
            "0:00:1.00",
            "0:00:01.0",
            "0:00:01.000",
            "0:00:01",
            ":00:01.00",
            "0:60:00.00",
            "0:00:60.00",
            "a:00:00.00",
            "0:00:00,00",
        ] {
            assert_eq!(
                bad.parse::<Timestamp>(),
                Err(ValueError::InvalidTime(bad.to_owned())),
                "{bad}"
            );
        }
    }

    #[test]
    fn converts_to_duration() {
        let ts = Timestamp::from_hmsc(0, 0, 1, 50);
        assert_eq!(ts.to_duration(), Duration::from_millis(1_500));
        assert_eq!(Timestamp::from_duration(Duration::from_millis(1_509)), ts);
    }

    #[test]
    fn huge_hour_counts_do_not_overflow() {
        let ts: Timestamp = "51000000000000:00:00.99".parse().unwrap();
        assert_eq!(ts.to_string(), "51000000000000:00:00.99");
        assert_eq!(
            ts.to_duration(),
            Duration::new(51_000_000_000_000 * 3_600, 990_000_000)
        );

        let max = Timestamp::from_centiseconds(u64::MAX);
        assert_eq!(max.to_duration().as_secs(), u64::MAX / 100);
        assert_eq!(Timestamp::from_hmsc(u64::MAX, 59, 59, 99), max);
    }
}
