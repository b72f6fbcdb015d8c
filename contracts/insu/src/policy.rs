use crate::types::Policy;

/// Outcome of folding lapsed payment periods into a policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Accrual {
    Unchanged,
    Accrued(u32),
    Cancelled(u32),
}

impl Policy {
    pub fn is_expired(&self, now: u64) -> bool {
        self.expiry_date != 0 && now > self.expiry_date
    }

    /// Active and not past its expiry date.
    pub fn is_in_force(&self, now: u64) -> bool {
        self.is_active && !self.is_expired(now)
    }

    /// Full payment periods elapsed since `accrued_until`, counted no
    /// further than the expiry date.
    pub fn lapsed_periods(&self, now: u64, payment_period: u64) -> u32 {
        let until = if self.expiry_date != 0 && self.expiry_date < now {
            self.expiry_date
        } else {
            now
        };
        let periods = until.saturating_sub(self.accrued_until) / payment_period;
        u32::try_from(periods).unwrap_or(u32::MAX)
    }

    /// Adds periods lapsed since the last accrual to `missed_payments` and
    /// deactivates the policy once `max_missed` is reached. Calling again
    /// within the same window only re-checks the threshold.
    ///
    /// The anchor is a timestamp, so a change of `payment_period` between
    /// calls only affects time not yet accrued.
    pub fn accrue_missed_payments(
        &mut self,
        now: u64,
        payment_period: u64,
        max_missed: u32,
    ) -> Accrual {
        if !self.is_active {
            return Accrual::Unchanged;
        }

        let newly_missed = self.lapsed_periods(now, payment_period);
        if newly_missed > 0 {
            self.accrued_until = self
                .accrued_until
                .saturating_add(u64::from(newly_missed).saturating_mul(payment_period));
            self.missed_payments = self.missed_payments.saturating_add(newly_missed);
        }

        if self.missed_payments >= max_missed {
            self.is_active = false;
            Accrual::Cancelled(newly_missed)
        } else if newly_missed > 0 {
            Accrual::Accrued(newly_missed)
        } else {
            Accrual::Unchanged
        }
    }

    pub fn record_payment(&mut self, amount: i128, now: u64) {
        self.premiums_paid += amount;
        self.last_payment_date = now;
        self.accrued_until = now;
    }
}
