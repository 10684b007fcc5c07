//! The calendar month filter value.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A calendar month, used to filter transactions by their month of sale.
///
/// The month is sent to the transaction query service verbatim as its
/// capitalized English name, which is also how it is displayed in the
/// month selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    /// January.
    January,
    /// February.
    February,
    /// March, the month shown when the view is first loaded.
    #[default]
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December.
    December,
}

impl Month {
    /// All twelve months in calendar order, for rendering the selector.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The capitalized English name of the month.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .into_iter()
            .find(|month| month.name() == string)
            .ok_or_else(|| format!("\"{string}\" is not a calendar month"))
    }
}

#[cfg(test)]
mod month_tests {
    use std::str::FromStr;

    use super::Month;

    #[test]
    fn default_month_is_march() {
        assert_eq!(Month::default(), Month::March);
    }

    #[test]
    fn parses_every_displayed_name() {
        for month in Month::ALL {
            let parsed = Month::from_str(&month.to_string());

            assert_eq!(parsed, Ok(month));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        for name in ["march", "Smarch", ""] {
            assert!(
                Month::from_str(name).is_err(),
                "\"{name}\" should not parse as a month"
            );
        }
    }

    #[test]
    fn serializes_to_its_name() {
        let serialized = serde_json::to_string(&Month::September).unwrap();

        assert_eq!(serialized, "\"September\"");
    }
}
