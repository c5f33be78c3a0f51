use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, Month};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    Rainy,
}

impl Season {
    /// June is its own rainy season; the remaining months follow the
    /// usual northern hemisphere split with May folded into summer.
    pub fn from_month(month: Month) -> Self {
        match month {
            Month::June => Season::Rainy,
            Month::May | Month::July | Month::August => Season::Summer,
            Month::March | Month::April => Season::Spring,
            Month::September | Month::October | Month::November => Season::Fall,
            Month::December | Month::January | Month::February => Season::Winter,
        }
    }

    /// Zero-based month index (`0` = January). `None` past `11`.
    pub fn from_month_index(index: u8) -> Option<Self> {
        let month = Month::try_from(index.checked_add(1)?).ok()?;

        Some(Self::from_month(month))
    }

    pub fn from_date(date: Date) -> Self {
        Self::from_month(date.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_every_month_index_maps_to_one_season() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Rainy,
            Season::Summer,
            Season::Summer,
            Season::Fall,
            Season::Fall,
            Season::Fall,
            Season::Winter,
        ];

        for (index, season) in expected.iter().enumerate() {
            assert_eq!(Season::from_month_index(index as u8), Some(*season));
        }
    }

    #[test]
    fn test_month_index_out_of_range() {
        assert_eq!(Season::from_month_index(12), None);
        assert_eq!(Season::from_month_index(u8::MAX), None);
    }

    #[test]
    fn test_from_date() {
        let date = Date::from_calendar_date(2024, Month::June, 15).unwrap();
        assert_eq!(Season::from_date(date), Season::Rainy);
    }

    #[test]
    fn test_season_labels() {
        assert_eq!(Season::Rainy.to_string(), "rainy");
        assert_eq!(Season::from_str("fall").unwrap(), Season::Fall);
        assert_eq!(
            serde_json::to_string(&Season::Winter).unwrap(),
            "\"winter\""
        );
    }
}
