use aqmaps_core::StepRecord;
use std::fmt::Write;

/// `index,from_lng,from_lat,heading,to_lng,to_lat,location` where
/// `location` is `null` unless the step reached a waypoint.
pub fn flight_log_line(step: &StepRecord) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        step.index,
        step.from.lng,
        step.from.lat,
        step.heading,
        step.to.lng,
        step.to.lat,
        step.first_visited().unwrap_or("null"),
    )
}

pub fn flight_log(steps: &[StepRecord]) -> String {
    let mut out = String::new();
    for step in steps {
        let _ = writeln!(out, "{}", flight_log_line(step));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqmaps_core::{Coordinate, Heading};

    fn step(index: u32, visited: &[&str]) -> StepRecord {
        StepRecord {
            index,
            from: Coordinate::new(-3.1878, 55.9444),
            heading: Heading::NORTH,
            to: Coordinate::new(-3.1878, 55.9447),
            visited: visited.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn line_without_visit_ends_in_null() {
        assert_eq!(
            flight_log_line(&step(1, &[])),
            "1,-3.1878,55.9444,90,-3.1878,55.9447,null"
        );
    }

    #[test]
    fn line_names_first_visited_location() {
        let line = flight_log_line(&step(7, &["first.one.here", "second.one.here"]));
        assert!(line.starts_with("7,"));
        assert!(line.ends_with(",first.one.here"));
    }

    #[test]
    fn log_has_one_line_per_step() {
        let log = flight_log(&[step(1, &[]), step(2, &["a.b.c"])]);
        assert_eq!(log.lines().count(), 2);
        assert!(log.ends_with('\n'));
    }
}
