use chrono::{DateTime, TimeZone};

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Length of the countdown window shown by the session gauge.
pub const COUNTDOWN_WINDOW_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionProximity {
    None,
    Past,
    Today,
    Imminent,
    Approaching,
    Distant,
}

impl SessionProximity {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SessionProximity::None => "none",
            SessionProximity::Past => "past",
            SessionProximity::Today => "today",
            SessionProximity::Imminent => "imminent",
            SessionProximity::Approaching => "approaching",
            SessionProximity::Distant => "distant",
        }
    }
}

/// Highlight colour family the countdown should glow with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Muted,
    Ember,
    Arcane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProximityState {
    pub proximity: SessionProximity,
    pub days_until: i64,
    pub hours_until: i64,
    pub minutes_until: i64,
    pub message: &'static str,
    pub is_urgent: bool,
    pub accent: Accent,
}

impl ProximityState {
    pub const NONE: Self = Self {
        proximity: SessionProximity::None,
        days_until: -1,
        hours_until: -1,
        minutes_until: -1,
        message: "No session scheduled",
        is_urgent: false,
        accent: Accent::Muted,
    };

    /// Gauge fill in percent over the last [`COUNTDOWN_WINDOW_DAYS`] days.
    /// Zero when nothing is scheduled.
    #[must_use]
    pub fn countdown_progress(&self) -> u16 {
        if self.proximity == SessionProximity::None {
            return 0;
        }
        let remaining = COUNTDOWN_WINDOW_DAYS - self.days_until.max(0);
        (remaining * 100 / COUNTDOWN_WINDOW_DAYS).clamp(0, 100) as u16
    }
}

impl Default for ProximityState {
    fn default() -> Self {
        Self::NONE
    }
}

/// Classify how close `target` is relative to `now`.
///
/// Every field is derived from a single millisecond delta so the day, hour
/// and minute readings can never disagree with each other. The first
/// matching rule wins:
///
/// 1. no target: [`SessionProximity::None`]
/// 2. negative delta: `Past`
/// 3. `diff_days == 0` or `0 <= diff_hours < 24`: `Today`
/// 4. `diff_days == 1`: `Imminent`
/// 5. `diff_days <= 6`: `Approaching`
/// 6. otherwise `Distant`
///
/// `diff_days` rounds up, hours and minutes round down.
pub fn classify<Tz: TimeZone>(target: Option<&DateTime<Tz>>, now: &DateTime<Tz>) -> ProximityState {
    let Some(target) = target else {
        return ProximityState::NONE;
    };

    let delta_ms = target
        .clone()
        .signed_duration_since(now.clone())
        .num_milliseconds();
    let diff_minutes = delta_ms.div_euclid(MS_PER_MINUTE);
    let diff_hours = delta_ms.div_euclid(MS_PER_HOUR);
    let diff_days = ceil_div(delta_ms, MS_PER_DAY);

    let snapshot = |proximity, days_until, message, is_urgent, accent| ProximityState {
        proximity,
        days_until,
        hours_until: diff_hours,
        minutes_until: diff_minutes,
        message,
        is_urgent,
        accent,
    };

    if delta_ms < 0 {
        snapshot(
            SessionProximity::Past,
            diff_days,
            "Session completed",
            false,
            Accent::Muted,
        )
    } else if diff_days == 0 || (0..24).contains(&diff_hours) {
        snapshot(SessionProximity::Today, 0, "SHOWTIME", true, Accent::Ember)
    } else if diff_days == 1 {
        snapshot(
            SessionProximity::Imminent,
            1,
            "Final Preparations",
            true,
            Accent::Ember,
        )
    } else if diff_days <= 6 {
        snapshot(
            SessionProximity::Approaching,
            diff_days,
            "Preparation Phase",
            false,
            Accent::Ember,
        )
    } else {
        snapshot(
            SessionProximity::Distant,
            diff_days,
            "Time to Build",
            false,
            Accent::Arcane,
        )
    }
}

// Ceiling division for a positive divisor.
fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    -(-numerator).div_euclid(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local, Utc};

    fn at(offset: Duration) -> SessionProximity {
        let now = Utc::now();
        classify(Some(&(now + offset)), &now).proximity
    }

    #[test]
    fn test_no_target_is_none() {
        let now = Local::now();
        let state = classify(None, &now);
        assert_eq!(state.proximity, SessionProximity::None);
        assert_eq!(state.days_until, -1);
        assert_eq!(state.hours_until, -1);
        assert_eq!(state.minutes_until, -1);
        assert!(!state.is_urgent);
        assert_eq!(state.message, "No session scheduled");

        let later = now + Duration::days(400);
        assert_eq!(classify::<Local>(None, &later), ProximityState::NONE);
    }

    #[test]
    fn test_day_boundaries() {
        assert_eq!(
            at(Duration::hours(23) + Duration::minutes(59)),
            SessionProximity::Today
        );
        assert_eq!(at(Duration::hours(24)), SessionProximity::Imminent);
        assert_eq!(
            at(Duration::hours(24) + Duration::minutes(1)),
            SessionProximity::Approaching
        );
        assert_eq!(at(Duration::days(6)), SessionProximity::Approaching);
        assert_eq!(
            at(Duration::days(6) + Duration::minutes(1)),
            SessionProximity::Distant
        );
        // Days round up, so 6d23h counts as seven days out, not six
        assert_eq!(
            at(Duration::days(6) + Duration::hours(23)),
            SessionProximity::Distant
        );
        assert_eq!(
            at(Duration::days(7) + Duration::hours(1)),
            SessionProximity::Distant
        );
    }

    #[test]
    fn test_exactly_one_day_out_reads_imminent() {
        let now = Utc::now();
        let state = classify(Some(&(now + Duration::hours(24))), &now);
        assert_eq!(state.proximity, SessionProximity::Imminent);
        assert_eq!(state.days_until, 1);
        assert_eq!(state.hours_until, 24);
        assert_eq!(state.minutes_until, 24 * 60);
        assert!(state.is_urgent);
        assert_eq!(state.message, "Final Preparations");
    }

    #[test]
    fn test_labels_follow_delta_order() {
        let now = Utc::now();
        let offsets = [
            Duration::hours(-1),
            Duration::zero(),
            Duration::hours(12),
            Duration::hours(25),
            Duration::days(3),
            Duration::days(8),
        ];
        let labels: Vec<_> = offsets
            .iter()
            .map(|offset| classify(Some(&(now + *offset)), &now).proximity)
            .collect();

        assert_eq!(
            labels,
            vec![
                SessionProximity::Past,
                SessionProximity::Today,
                SessionProximity::Today,
                SessionProximity::Approaching,
                SessionProximity::Approaching,
                SessionProximity::Distant,
            ]
        );

        let rank = |p: &SessionProximity| match p {
            SessionProximity::None => 0,
            SessionProximity::Past => 1,
            SessionProximity::Today => 2,
            SessionProximity::Imminent => 3,
            SessionProximity::Approaching => 4,
            SessionProximity::Distant => 5,
        };
        assert!(labels.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));
    }

    #[test]
    fn test_today_forces_zero_days() {
        let now = Utc::now();
        let state = classify(Some(&(now + Duration::hours(5))), &now);
        assert_eq!(state.days_until, 0);
        assert_eq!(state.hours_until, 5);
        assert_eq!(state.accent, Accent::Ember);
    }

    #[test]
    fn test_past_rounds_toward_zero_days() {
        let now = Utc::now();
        let state = classify(Some(&(now - Duration::hours(36))), &now);
        assert_eq!(state.proximity, SessionProximity::Past);
        assert_eq!(state.days_until, -1);
        assert_eq!(state.hours_until, -36);
        assert!(!state.is_urgent);
    }

    #[test]
    fn test_countdown_progress() {
        let now = Utc::now();
        assert_eq!(ProximityState::NONE.countdown_progress(), 0);

        let distant = classify(Some(&(now + Duration::days(30))), &now);
        assert_eq!(distant.countdown_progress(), 0);

        let week = classify(Some(&(now + Duration::days(7))), &now);
        assert_eq!(week.countdown_progress(), 50);

        let past = classify(Some(&(now - Duration::days(2))), &now);
        assert_eq!(past.countdown_progress(), 100);
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(0, 10), 0);
        assert_eq!(ceil_div(1, 10), 1);
        assert_eq!(ceil_div(10, 10), 1);
        assert_eq!(ceil_div(11, 10), 2);
        assert_eq!(ceil_div(-5, 10), 0);
        assert_eq!(ceil_div(-15, 10), -1);
    }
}
