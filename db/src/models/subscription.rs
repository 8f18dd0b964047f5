use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed set of text values stored as a Postgres enum.
pub trait Choice: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Exact, case-sensitive lookup.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    /// Comma separated list of every accepted value.
    fn allowed() -> String {
        Self::ALL
            .iter()
            .map(Choice::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "subscription_currency", rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Choice for Currency {
    const ALL: &'static [Self] = &[Currency::Usd, Currency::Eur, Currency::Gbp];

    fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "subscription_frequency", rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Choice for Frequency {
    const ALL: &'static [Self] = &[
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "subscription_category", rename_all = "lowercase")]
pub enum Category {
    Sports,
    News,
    Lifestyle,
    Technology,
    Finance,
    Other,
}

impl Choice for Category {
    const ALL: &'static [Self] = &[
        Category::Sports,
        Category::News,
        Category::Lifestyle,
        Category::Technology,
        Category::Finance,
        Category::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Category::Sports => "sports",
            Category::News => "news",
            Category::Lifestyle => "lifestyle",
            Category::Technology => "technology",
            Category::Finance => "finance",
            Category::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "subscription_status", rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Canceled,
    Expired,
}

impl Choice for SubscriptionStatus {
    const ALL: &'static [Self] = &[
        SubscriptionStatus::Active,
        SubscriptionStatus::Canceled,
        SubscriptionStatus::Expired,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::Expired => "expired",
        }
    }
}

macro_rules! display_choice {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_choice!(Currency, Frequency, Category, SubscriptionStatus);

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub currency: Currency,
    pub frequency: Option<Frequency>,
    pub category: Category,
    pub payment_method: String,
    pub status: SubscriptionStatus,
    pub start_date: DateTime<Utc>,
    pub renewal_date: DateTime<Utc>,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact() {
        assert_eq!(Frequency::parse("weekly"), Some(Frequency::Weekly));
        assert_eq!(Frequency::parse("Weekly"), None);
        assert_eq!(Currency::parse("GBP"), Some(Currency::Gbp));
        assert_eq!(Currency::parse("usd"), None);
    }

    #[test]
    fn allowed_lists_values_in_order() {
        assert_eq!(Currency::allowed(), "USD, EUR, GBP");
        assert_eq!(
            Category::allowed(),
            "sports, news, lifestyle, technology, finance, other"
        );
    }

    #[test]
    fn serde_matches_stored_text() {
        assert_eq!(
            serde_json::to_string(&SubscriptionStatus::Canceled).unwrap(),
            "\"canceled\""
        );
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
        for status in SubscriptionStatus::ALL {
            assert_eq!(
                serde_json::to_string(status).unwrap(),
                format!("\"{status}\"")
            );
        }
    }
}
