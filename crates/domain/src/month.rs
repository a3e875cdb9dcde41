//! Calendar months as the controller names them.
//!
//! Programs list their active months by Italian name (`"Gennaio"`,
//! `"Febbraio"`, …). English names are accepted too so hand-edited data
//! files keep working.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the twelve calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    #[serde(rename = "Gennaio")]
    January,
    #[serde(rename = "Febbraio")]
    February,
    #[serde(rename = "Marzo")]
    March,
    #[serde(rename = "Aprile")]
    April,
    #[serde(rename = "Maggio")]
    May,
    #[serde(rename = "Giugno")]
    June,
    #[serde(rename = "Luglio")]
    July,
    #[serde(rename = "Agosto")]
    August,
    #[serde(rename = "Settembre")]
    September,
    #[serde(rename = "Ottobre")]
    October,
    #[serde(rename = "Novembre")]
    November,
    #[serde(rename = "Dicembre")]
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Month for a 1-based month number.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// 1-based month number.
    #[must_use]
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// The name the controller stores.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::January => "Gennaio",
            Self::February => "Febbraio",
            Self::March => "Marzo",
            Self::April => "Aprile",
            Self::May => "Maggio",
            Self::June => "Giugno",
            Self::July => "Luglio",
            Self::August => "Agosto",
            Self::September => "Settembre",
            Self::October => "Ottobre",
            Self::November => "Novembre",
            Self::December => "Dicembre",
        }
    }

    /// Three-letter label for the month grid.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::January => "Jan",
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::May => "May",
            Self::June => "Jun",
            Self::July => "Jul",
            Self::August => "Aug",
            Self::September => "Sep",
            Self::October => "Oct",
            Self::November => "Nov",
            Self::December => "Dec",
        }
    }

    fn english_name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Look a month up by its controller (Italian) or English name,
    /// ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|month| {
            month.wire_name().eq_ignore_ascii_case(name)
                || month.english_name().eq_ignore_ascii_case(name)
        })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_italian_and_english_names() {
        assert_eq!(Month::from_name("Gennaio"), Some(Month::January));
        assert_eq!(Month::from_name("gennaio"), Some(Month::January));
        assert_eq!(Month::from_name("September"), Some(Month::September));
        assert_eq!(Month::from_name(" Agosto "), Some(Month::August));
    }

    #[test]
    fn should_not_resolve_unknown_name() {
        assert_eq!(Month::from_name("Smarch"), None);
    }

    #[test]
    fn should_map_month_numbers_both_ways() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()), Some(month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn should_serialize_with_controller_name() {
        let json = serde_json::to_string(&Month::March).unwrap();
        assert_eq!(json, "\"Marzo\"");
    }
}
