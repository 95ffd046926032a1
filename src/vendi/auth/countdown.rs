//! Resend throttle. The countdown itself is pure tick-based state; whoever
//! embeds the flow owns the one-second schedule and must drop it with the
//! flow so no tick outlives the screen that created it.

/// Cooldown before a new code may be requested.
pub const RESEND_COOLDOWN_SECS: u32 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResendCountdown {
    remaining: u32,
    resend_allowed: bool,
}

impl ResendCountdown {
    #[must_use]
    pub fn new() -> Self {
        Self {
            remaining: RESEND_COOLDOWN_SECS,
            resend_allowed: false,
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns true only on the tick that reaches zero, which is also the
    /// moment `resend_allowed` flips. Further ticks are no-ops.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.resend_allowed = true;
            return true;
        }

        false
    }

    /// Start a fresh cooldown after a successful resend.
    pub fn reset(&mut self) {
        self.remaining = RESEND_COOLDOWN_SECS;
        self.resend_allowed = false;
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn resend_allowed(&self) -> bool {
        self.resend_allowed
    }
}

impl Default for ResendCountdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_cooldown_with_resend_blocked() {
        let countdown = ResendCountdown::new();
        assert_eq!(countdown.remaining(), 30);
        assert!(!countdown.resend_allowed());
    }

    #[test]
    fn flips_exactly_once_on_the_zero_tick() {
        let mut countdown = ResendCountdown::new();
        let mut flips = 0;
        for _ in 0..RESEND_COOLDOWN_SECS {
            if countdown.tick() {
                flips += 1;
            }
        }
        assert_eq!(flips, 1);
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.resend_allowed());
    }

    #[test]
    fn ticks_after_zero_are_noops() {
        let mut countdown = ResendCountdown::new();
        for _ in 0..RESEND_COOLDOWN_SECS {
            countdown.tick();
        }
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.resend_allowed());
    }

    #[test]
    fn reset_restarts_the_cooldown() {
        let mut countdown = ResendCountdown::new();
        for _ in 0..RESEND_COOLDOWN_SECS {
            countdown.tick();
        }
        countdown.reset();
        assert_eq!(countdown.remaining(), 30);
        assert!(!countdown.resend_allowed());
    }
}
