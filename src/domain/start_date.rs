use chrono::NaiveDate;

const START_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartDate(NaiveDate);

impl StartDate {
    /// Parses a calendar date written as `YYYY-MM-DD`.
    pub fn parse(s: String) -> Result<StartDate, String> {
        NaiveDate::parse_from_str(&s, START_DATE_FORMAT)
            .map(Self)
            .map_err(|e| format!("'{}' is not a valid start date: {}", s, e))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}
