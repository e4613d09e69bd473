use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::model::Visit;

const MONTHS: [&str; 12] = [
    "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto", "settembre",
    "ottobre", "novembre", "dicembre",
];

const WEEKDAYS: [&str; 7] = ["lu", "ma", "me", "gi", "ve", "sa", "do"];

/// Month grid, Monday first, with the days that have a visit marked
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<u32>; 7]>,
    pub marked: BTreeSet<u32>,
}

impl MonthCalendar {
    pub fn build(reference: NaiveDate, visits: &[Visit]) -> Self {
        let year = reference.year();
        let month = reference.month();
        let first = reference.with_day(1).unwrap_or(reference);

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        for date in first.iter_days().take_while(|date| date.month() == month) {
            let slot = date.weekday().num_days_from_monday() as usize;
            week[slot] = Some(date.day());
            if slot == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }

        let marked = visits
            .iter()
            .map(|visit| visit.scheduled_at.date())
            .filter(|date| date.year() == year && date.month() == month)
            .map(|date| date.day())
            .collect();

        Self {
            year,
            month,
            weeks,
            marked,
        }
    }

    pub fn is_marked(&self, day: u32) -> bool {
        self.marked.contains(&day)
    }
}

impl fmt::Display for MonthCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = MONTHS[(self.month as usize).saturating_sub(1) % 12];
        writeln!(f, "{name} {}", self.year)?;

        let header: Vec<String> = WEEKDAYS.iter().map(|day| format!("{day:>3} ")).collect();
        writeln!(f, "{}", header.concat().trim_end())?;

        for week in &self.weeks {
            let cells: Vec<String> = week
                .iter()
                .map(|slot| match slot {
                    Some(day) if self.is_marked(*day) => format!("{day:>3}*"),
                    Some(day) => format!("{day:>3} "),
                    None => "    ".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.concat().trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::visit::VisitDraft;
    use crate::store::{Record, RecordId};
    use chrono::Utc;

    fn visit_on(year: i32, month: u32, day: u32) -> Visit {
        let datetime = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Visit::from_draft(RecordId(1), Utc::now(), VisitDraft { datetime: Some(datetime) })
    }

    #[test]
    fn test_grid_starts_on_monday() {
        // 1 October 2026 is a Thursday
        let reference = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let calendar = MonthCalendar::build(reference, &[]);

        assert_eq!(calendar.weeks[0], [None, None, None, Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(calendar.weeks.len(), 5);
        assert_eq!(calendar.weeks[4][5], Some(31));
    }

    #[test]
    fn test_marks_only_days_in_month() {
        let reference = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let visits = vec![
            visit_on(2026, 10, 20),
            visit_on(2026, 11, 20),
            visit_on(2025, 10, 3),
        ];
        let calendar = MonthCalendar::build(reference, &visits);

        assert!(calendar.is_marked(20));
        assert!(!calendar.is_marked(3));
        assert_eq!(calendar.marked.len(), 1);
    }

    #[test]
    fn test_render() {
        let reference = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let calendar = MonthCalendar::build(reference, &[visit_on(2026, 2, 2)]);

        let text = calendar.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "febbraio 2026");
        assert_eq!(lines[1], " lu  ma  me  gi  ve  sa  do");
        assert_eq!(lines[2], "                          1");
        assert_eq!(lines[3], "  2*  3   4   5   6   7   8");
    }
}
