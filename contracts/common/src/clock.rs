use soroban_sdk::{Env, String};

pub const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Largest UTC offset accepted for local wall-clock rendering (UTC±14:00).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Shift a ledger timestamp (seconds since the Unix epoch, UTC) into local time.
pub fn local_seconds(timestamp: u64, utc_offset_minutes: i32) -> i64 {
    let utc = i64::try_from(timestamp).unwrap_or(i64::MAX);
    utc.saturating_add(i64::from(utc_offset_minutes) * SECONDS_PER_MINUTE)
}

/// Local calendar day number, counted from 1970-01-01.
///
/// Two timestamps fall on the same local day when their day numbers match.
pub fn local_day(timestamp: u64, utc_offset_minutes: i32) -> i64 {
    local_seconds(timestamp, utc_offset_minutes).div_euclid(SECONDS_PER_DAY)
}

/// Render the local wall-clock time as `HH:MM` bytes.
pub fn wall_clock_hhmm(timestamp: u64, utc_offset_minutes: i32) -> [u8; 5] {
    let seconds_of_day = local_seconds(timestamp, utc_offset_minutes).rem_euclid(SECONDS_PER_DAY);
    let hours = (seconds_of_day / SECONDS_PER_HOUR) as u8;
    let minutes = ((seconds_of_day % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8;

    [
        b'0' + hours / 10,
        b'0' + hours % 10,
        b':',
        b'0' + minutes / 10,
        b'0' + minutes % 10,
    ]
}

/// Same as [`wall_clock_hhmm`], as a contract string.
pub fn wall_clock(env: &Env, timestamp: u64, utc_offset_minutes: i32) -> String {
    String::from_bytes(env, &wall_clock_hhmm(timestamp, utc_offset_minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2023-10-10T09:15:00Z
    const MORNING: u64 = 1_696_929_300;

    #[test]
    fn renders_utc_wall_clock() {
        assert_eq!(&wall_clock_hhmm(MORNING, 0), b"09:15");
        assert_eq!(&wall_clock_hhmm(0, 0), b"00:00");
        assert_eq!(&wall_clock_hhmm(86_399, 0), b"23:59");
    }

    #[test]
    fn applies_offset_and_wraps_midnight() {
        // UTC-3
        assert_eq!(&wall_clock_hhmm(MORNING, -180), b"06:15");
        // 09:15 + 15h crosses into the next day
        assert_eq!(&wall_clock_hhmm(MORNING, 15 * 60), b"00:15");
        // Before the epoch in local time still renders a valid clock
        assert_eq!(&wall_clock_hhmm(60, -120), b"22:01");
    }

    #[test]
    fn local_day_follows_offset() {
        assert_eq!(local_day(MORNING, 0), local_day(MORNING + 3_600, 0));
        assert_eq!(local_day(MORNING, 0) + 1, local_day(MORNING, 15 * 60));
        assert_eq!(local_day(60, -120), -1);
    }

    #[test]
    fn wall_clock_string_matches_bytes() {
        let env = Env::default();
        assert_eq!(wall_clock(&env, MORNING, 0), String::from_str(&env, "09:15"));
    }
}
