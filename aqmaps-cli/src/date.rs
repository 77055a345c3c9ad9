use crate::error::{AppError, Result};
use std::fmt;

/// The day whose air-quality map is flown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionDate {
    day: u8,
    month: u8,
    year: u16,
}

impl MissionDate {
    pub fn new(day: u8, month: u8, year: u16) -> Result<Self> {
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return Err(AppError::InvalidDate { day, month, year });
        }
        Ok(Self { day, month, year })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// `YYYY/MM/DD`, as used in map data paths.
    pub fn path_segment(&self) -> String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// `DD-MM-YYYY`, as used in output file names.
impl fmt::Display for MissionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_day_and_month() {
        let date = MissionDate::new(3, 7, 2020).unwrap();
        assert_eq!(date.path_segment(), "2020/07/03");
        assert_eq!(date.to_string(), "03-07-2020");
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(MissionDate::new(0, 1, 2020).is_err());
        assert!(MissionDate::new(1, 13, 2020).is_err());
        assert!(MissionDate::new(32, 1, 2020).is_err());
    }
}
