//! Zone records.

use crate::grid::SeatId;
use crate::roster::{Student, TagId};

/// Identity of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneId(pub u32);

/// A named set of seats gated by required tags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    /// A student needs at least one of these to be eligible.
    pub required_tags: Vec<TagId>,
    /// Member seats.
    pub seats: Vec<SeatId>,
    pub visible: bool,
}

impl Zone {
    pub fn new(id: ZoneId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            required_tags: Vec::new(),
            seats: Vec::new(),
            visible: false,
        }
    }

    pub fn contains_seat(&self, seat: SeatId) -> bool {
        self.seats.contains(&seat)
    }

    /// A zone with no required tags places no constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.required_tags.is_empty()
    }
}

/// Whether `student` may sit in `zone`: the tag sets intersect.
pub fn is_student_eligible(student: &Student, zone: &Zone) -> bool {
    zone.required_tags.iter().any(|&tag| student.has_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::StudentId;

    #[test]
    fn test_eligibility_is_intersection() {
        let mut zone = Zone::new(ZoneId(1), "front");
        zone.required_tags = vec![TagId(1), TagId(2)];

        let one_match = Student::new(StudentId(1)).with_tags([TagId(2), TagId(9)]);
        let no_match = Student::new(StudentId(2)).with_tags([TagId(9)]);
        let untagged = Student::new(StudentId(3));

        assert!(is_student_eligible(&one_match, &zone));
        assert!(!is_student_eligible(&no_match, &zone));
        assert!(!is_student_eligible(&untagged, &zone));
    }

    #[test]
    fn test_empty_requirement_matches_nobody() {
        let zone = Zone::new(ZoneId(1), "any");
        let student = Student::new(StudentId(1)).with_tags([TagId(1)]);
        assert!(zone.is_unconstrained());
        assert!(!is_student_eligible(&student, &zone));
    }
}
