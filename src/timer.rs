use crate::model::LevelId;

/// Identifies one play session. A fresh id is minted on every level
/// (re)start, so a countdown can only ever end the session that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// Level countdown driven by the caller's clock (seconds, monotonic).
///
/// Also serves as the session clock for simulation levels, whose attack
/// progress advances one tick per elapsed second.
#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    session: SessionId,
    level: LevelId,
    started_at: f64,
    limit_secs: u32,
    fired: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expired {
    pub session: SessionId,
    pub level: LevelId,
}

impl Countdown {
    /// `limit_secs == 0` gives a clock that never expires.
    pub fn start(session: SessionId, level: LevelId, now: f64, limit_secs: u32) -> Self {
        Self {
            session,
            level,
            started_at: now,
            limit_secs,
            fired: false,
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn level(&self) -> LevelId {
        self.level
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }

    /// Whole seconds since start.
    pub fn ticks(&self, now: f64) -> u32 {
        self.elapsed(now).floor() as u32
    }

    pub fn remaining(&self, now: f64) -> Option<f64> {
        if self.limit_secs == 0 {
            return None;
        }
        Some((self.limit_secs as f64 - self.elapsed(now)).max(0.0))
    }

    /// Fires once, the first time it is polled at or past the deadline.
    pub fn poll(&mut self, now: f64) -> Option<Expired> {
        if self.fired || self.remaining(now) != Some(0.0) {
            return None;
        }
        self.fired = true;
        Some(Expired {
            session: self.session,
            level: self.level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let mut c = Countdown::start(SessionId(1), 3, 10.0, 5);
        assert_eq!(c.poll(14.9), None);
        assert_eq!(
            c.poll(15.0),
            Some(Expired {
                session: SessionId(1),
                level: 3
            })
        );
        assert_eq!(c.poll(20.0), None);
    }

    #[test]
    fn unlimited_clock_never_fires_but_still_ticks() {
        let mut c = Countdown::start(SessionId(2), 1, 0.0, 0);
        assert_eq!(c.poll(10_000.0), None);
        assert_eq!(c.remaining(5.0), None);
        assert_eq!(c.ticks(7.8), 7);
    }

    #[test]
    fn clock_going_backwards_reads_as_zero_elapsed() {
        let c = Countdown::start(SessionId(3), 1, 10.0, 30);
        assert_eq!(c.elapsed(4.0), 0.0);
        assert_eq!(c.remaining(4.0), Some(30.0));
    }
}
