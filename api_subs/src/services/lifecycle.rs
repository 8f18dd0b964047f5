use chrono::{DateTime, TimeDelta, Utc};
use db::models::subscription::{Frequency, SubscriptionStatus};

use crate::models::sub::SubscriptionDraft;

/// Fixed number of days added per billing cycle. Months and years are
/// approximated as 30 and 365 days, not calendar increments.
pub fn renewal_period(frequency: Frequency) -> TimeDelta {
    let days = match frequency {
        Frequency::Daily => 1,
        Frequency::Weekly => 7,
        Frequency::Monthly => 30,
        Frequency::Yearly => 365,
    };
    TimeDelta::days(days)
}

/// Fills in derived fields right before a write.
///
/// A missing renewal date becomes `start_date + renewal_period(frequency)`.
/// Once the renewal date is known, a renewal date strictly before `now` marks
/// the subscription as expired; otherwise the status is left alone.
pub fn derive(draft: &mut SubscriptionDraft, now: DateTime<Utc>) {
    if draft.renewal_date.is_none() {
        draft.renewal_date = draft
            .frequency
            .and_then(|f| draft.start_date.checked_add_signed(renewal_period(f)));
    }

    if let Some(renewal) = draft.renewal_date {
        if renewal < now && draft.status != SubscriptionStatus::Expired {
            log::debug!(
                "Subscription '{}' renewed at {} is past due, marking expired",
                draft.name,
                renewal
            );
            draft.status = SubscriptionStatus::Expired;
        }
    }
}
