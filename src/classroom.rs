//! The session context shared by the stores and the engine.

use crate::error::SeatingError;
use crate::grid::{GridConfig, SeatChart, SeatId};
use crate::relation::{RelationId, RelationKind, RelationMetadata, RelationRegistry, RelationStrength};
use crate::roster::{StudentId, StudentRoster, TagId};
use crate::zone::ZoneRegistry;
use std::collections::HashSet;

/// Every store of one seating session.
///
/// The fields are public so callers (and the engine) can borrow stores
/// independently. Methods here keep cross-store references consistent.
///
/// # Examples
///
/// ```
/// use u_seating::classroom::Classroom;
/// use u_seating::grid::GridConfig;
/// use u_seating::relation::{RelationKind, RelationStrength};
///
/// let mut room = Classroom::new(GridConfig::default()).unwrap();
/// let a = room.roster.insert("Ada", None, []);
/// let b = room.roster.insert("Bo", None, []);
/// let rel = room.add_relation(a, b, RelationKind::Repulsion, RelationStrength::High, None);
/// assert!(rel.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Classroom {
    pub roster: StudentRoster,
    pub chart: SeatChart,
    pub zones: ZoneRegistry,
    pub relations: RelationRegistry,
}

impl Classroom {
    /// Creates an empty session over a fresh grid.
    pub fn new(config: GridConfig) -> Result<Self, SeatingError> {
        Ok(Self {
            roster: StudentRoster::new(),
            chart: SeatChart::new(config)?,
            zones: ZoneRegistry::new(),
            relations: RelationRegistry::new(),
        })
    }

    /// Adds a relation between two students on the roster.
    pub fn add_relation(
        &mut self,
        a: StudentId,
        b: StudentId,
        kind: RelationKind,
        strength: RelationStrength,
        metadata: Option<RelationMetadata>,
    ) -> Result<RelationId, SeatingError> {
        for id in [a, b] {
            if !self.roster.contains(id) {
                return Err(SeatingError::MissingStudent(id));
            }
        }
        self.relations.validate(a, b, kind)?;
        self.relations
            .add(a, b, kind, strength, metadata)
            .map(|r| r.id)
            .ok_or(SeatingError::DuplicateRelation {
                first: a,
                second: b,
                kind,
            })
    }

    /// Removes a student along with their relations and seat.
    pub fn remove_student(&mut self, id: StudentId) -> bool {
        if self.roster.remove(id).is_none() {
            return false;
        }
        let valid: HashSet<StudentId> = self.roster.ids().into_iter().collect();
        self.relations.retain_students(&valid);
        self.chart.evict(id);
        true
    }

    /// Rebuilds the grid and drops zone seats that no longer exist.
    pub fn reconfigure_grid(&mut self, config: GridConfig) -> Result<(), SeatingError> {
        self.chart.reconfigure(config)?;
        let valid: HashSet<SeatId> = self.chart.seats().iter().map(|s| s.id).collect();
        self.zones.retain_seats(&valid);
        Ok(())
    }

    /// Forgets a tag on students and zones alike.
    pub fn remove_tag(&mut self, tag: TagId) {
        self.roster.remove_tag_everywhere(tag);
        self.zones.remove_tag_everywhere(tag);
    }
}
