//! Competition periods: a Games year paired with a division.

use std::fmt;

use serde::Deserialize;

use crate::error::GamesboardError;
use crate::table::{Cell, Record};

/// Competitor category. The discriminant is the API's division code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    Male = 1,
    Female = 2,
}

impl Division {
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for Division {
    type Error = GamesboardError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Division::Male),
            2 => Ok(Division::Female),
            other => Err(GamesboardError::InvalidArgument(format!(
                "division must be 1 (male) or 2 (female), got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Division::Male => write!(f, "male"),
            Division::Female => write!(f, "female"),
        }
    }
}

/// Which divisions a multi-period run covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionSelector {
    #[default]
    Male,
    Female,
    Both,
}

impl DivisionSelector {
    /// Divisions in collection order. `Both` is men first, then women.
    pub fn divisions(self) -> &'static [Division] {
        match self {
            DivisionSelector::Male => &[Division::Male],
            DivisionSelector::Female => &[Division::Female],
            DivisionSelector::Both => &[Division::Male, Division::Female],
        }
    }
}

impl From<Division> for DivisionSelector {
    fn from(division: Division) -> Self {
        match division {
            Division::Male => DivisionSelector::Male,
            Division::Female => DivisionSelector::Female,
        }
    }
}

/// One year/division leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub division: Division,
}

impl Period {
    pub fn new(year: i32, division: Division) -> Self {
        Self { year, division }
    }

    /// Stamps `year` and `division` onto a record, replacing existing values.
    pub fn tag(&self, record: &mut Record) {
        record.set("year", Cell::Number(Some(f64::from(self.year))));
        record.set("division", Cell::Number(Some(self.division.code() as f64)));
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.division)
    }
}

/// An inclusive year range crossed with a division selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodRange {
    pub year_from: i32,
    pub year_to: i32,
    pub selector: DivisionSelector,
}

impl PeriodRange {
    pub fn new(year_from: i32, year_to: i32, selector: DivisionSelector) -> Self {
        Self {
            year_from,
            year_to,
            selector,
        }
    }

    pub fn single(period: Period) -> Self {
        Self::new(period.year, period.year, period.division.into())
    }

    /// Expands the range into periods, ordered by year then division.
    pub fn periods(&self) -> Result<Vec<Period>, GamesboardError> {
        crate::validation::validate_year_range(self.year_from, self.year_to)?;
        Ok((self.year_from..=self.year_to)
            .flat_map(|year| {
                self.selector
                    .divisions()
                    .iter()
                    .map(move |&division| Period::new(year, division))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_from_code() {
        assert_eq!(Division::try_from(1).unwrap(), Division::Male);
        assert_eq!(Division::try_from(2).unwrap(), Division::Female);
        assert!(matches!(
            Division::try_from(0),
            Err(GamesboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn both_expands_male_then_female() {
        assert_eq!(
            DivisionSelector::Both.divisions(),
            &[Division::Male, Division::Female]
        );
    }

    #[test]
    fn periods_cover_every_combination_in_order() {
        let range = PeriodRange::new(2021, 2022, DivisionSelector::Both);
        let periods = range.periods().unwrap();
        assert_eq!(
            periods,
            vec![
                Period::new(2021, Division::Male),
                Period::new(2021, Division::Female),
                Period::new(2022, Division::Male),
                Period::new(2022, Division::Female),
            ]
        );
    }

    #[test]
    fn inverted_range_is_invalid() {
        let range = PeriodRange::new(2022, 2021, DivisionSelector::Male);
        assert!(matches!(
            range.periods(),
            Err(GamesboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn single_period_range() {
        let period = Period::new(2019, Division::Female);
        assert_eq!(PeriodRange::single(period).periods().unwrap(), vec![period]);
    }

    #[test]
    fn tag_replaces_existing_values() {
        let mut record = Record::new()
            .with_text("competitorId", Some("1"))
            .with_number("year", Some(1999.0));
        Period::new(2022, Division::Female).tag(&mut record);
        assert_eq!(record.get("year"), Some(&Cell::Number(Some(2022.0))));
        assert_eq!(record.get("division"), Some(&Cell::Number(Some(2.0))));
        assert_eq!(record.len(), 3);
    }
}
