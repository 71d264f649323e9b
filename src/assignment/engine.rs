//! Multi-phase greedy seat allocation.
//!
//! # Algorithm
//!
//! 1. Clear every occupant (empty-flagged seats stay unassignable)
//! 2. Shuffle the students and the assignable seats
//! 3. Partition seats by zone
//! 4. Relation phase: resolve relations in priority order, each over the
//!    whole free pool (relations take precedence over zones)
//! 5. Zone phase: for each constrained zone, in random order, seat the
//!    unplaced eligible students on its free seats
//! 6. Remainder phase: pair every unplaced student with any free seat
//! 7. Report
//!
//! Every phase runs once; nothing is retried and nothing backtracks.

use super::config::AssignmentConfig;
use super::search::find_seat_pair;
use super::types::{AssignmentResult, Placement, RelationStats};
use crate::classroom::Classroom;
use crate::error::SeatingError;
use crate::grid::{Seat, SeatChart, SeatId};
use crate::random::{create_rng, shuffled};
use crate::relation::{Relation, RelationRegistry};
use crate::roster::{Student, StudentId, StudentRoster};
use crate::zone::{is_student_eligible, Zone, ZoneId, ZoneRegistry};
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

/// Runs seat assignments against a [`Classroom`].
///
/// The engine is either idle or running. A run requested while another
/// is in flight is rejected with [`AssignmentResult::busy`] and changes
/// nothing.
///
/// # Examples
///
/// ```
/// use u_seating::assignment::{AssignmentConfig, AssignmentEngine};
/// use u_seating::classroom::Classroom;
/// use u_seating::grid::GridConfig;
///
/// let mut room = Classroom::new(GridConfig::default()).unwrap();
/// room.roster.set_count(30);
///
/// let engine = AssignmentEngine::new();
/// let result = engine.run(&mut room, &AssignmentConfig::default().with_seed(42));
/// assert!(result.success);
/// assert_eq!(result.assigned, 30);
/// ```
#[derive(Debug, Default)]
pub struct AssignmentEngine {
    busy: AtomicBool,
}

/// Returns the engine to idle when dropped, including on unwind.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AssignmentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(&self.busy))
    }

    /// Runs the full constraint-aware assignment.
    pub fn run(&self, room: &mut Classroom, config: &AssignmentConfig) -> AssignmentResult {
        let mut rng = create_rng(config.seed);
        self.run_with_rng(room, config.use_relations, &mut rng)
    }

    /// Runs the full assignment with an injected random source.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        room: &mut Classroom,
        use_relations: bool,
        rng: &mut R,
    ) -> AssignmentResult {
        let Some(_guard) = self.try_begin() else {
            warn!("assignment requested while another run is in progress");
            return AssignmentResult::busy();
        };

        match allocate(room, use_relations, rng) {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "assignment aborted");
                AssignmentResult::failed(e)
            }
        }
    }

    /// Seats students at random, ignoring relations and zones.
    pub fn run_random(&self, room: &mut Classroom, config: &AssignmentConfig) -> AssignmentResult {
        let mut rng = create_rng(config.seed);
        self.run_random_with_rng(room, &mut rng)
    }

    /// Constraint-free baseline with an injected random source.
    ///
    /// Clears the chart, shuffles students and free seats once each, then
    /// pairs them by index.
    pub fn run_random_with_rng<R: Rng + ?Sized>(
        &self,
        room: &mut Classroom,
        rng: &mut R,
    ) -> AssignmentResult {
        let Some(_guard) = self.try_begin() else {
            warn!("random assignment requested while another run is in progress");
            return AssignmentResult::busy();
        };

        room.chart.clear_all_seats();
        let students: Vec<&Student> = shuffled(&room.roster.students().iter().collect::<Vec<_>>(), rng);
        let seats: Vec<SeatId> = shuffled(&seat_ids(room.chart.free_seats()), rng);

        let mut placements = Vec::with_capacity(students.len().min(seats.len()));
        for (student, &seat) in students.iter().zip(&seats) {
            if !room.chart.assign(seat, student.id) {
                let e = SeatingError::SeatRejected {
                    seat,
                    student: student.id,
                };
                error!(error = %e, "random assignment aborted");
                return AssignmentResult::failed(e);
            }
            placements.push(Placement {
                student: student.id,
                seat,
            });
        }

        let unassigned: Vec<Student> = students
            .iter()
            .skip(placements.len())
            .map(|&s| s.clone())
            .collect();
        let assigned = placements.len();
        let total = students.len();
        info!(assigned, total, "random assignment finished");

        AssignmentResult {
            success: unassigned.is_empty(),
            message: format!("randomly seated {assigned} of {total} students"),
            assigned,
            total,
            unassigned,
            relation_stats: None,
            placements,
        }
    }
}

fn seat_ids(seats: Vec<&Seat>) -> Vec<SeatId> {
    seats.into_iter().map(|s| s.id).collect()
}

/// Occupancy bookkeeping for one run.
struct Allocation<'a> {
    chart: &'a mut SeatChart,
    taken: HashSet<SeatId>,
    seated: HashSet<StudentId>,
    placements: Vec<Placement>,
}

impl<'a> Allocation<'a> {
    fn new(chart: &'a mut SeatChart) -> Self {
        Self {
            chart,
            taken: HashSet::new(),
            seated: HashSet::new(),
            placements: Vec::new(),
        }
    }

    fn is_seated(&self, student: StudentId) -> bool {
        self.seated.contains(&student)
    }

    /// Seats of `pool` not taken yet, in pool order.
    fn free_among(&self, pool: &[SeatId]) -> Vec<SeatId> {
        pool.iter()
            .copied()
            .filter(|s| !self.taken.contains(s))
            .collect()
    }

    fn place(&mut self, student: StudentId, seat: SeatId) -> Result<(), SeatingError> {
        if !self.chart.assign(seat, student) {
            return Err(SeatingError::SeatRejected { seat, student });
        }
        self.taken.insert(seat);
        self.seated.insert(student);
        self.placements.push(Placement { student, seat });
        debug!(student = %student, seat = %seat, "placed");
        Ok(())
    }
}

fn allocate<R: Rng + ?Sized>(
    room: &mut Classroom,
    use_relations: bool,
    rng: &mut R,
) -> Result<AssignmentResult, SeatingError> {
    let Classroom {
        roster,
        chart,
        zones,
        relations,
    } = room;

    chart.clear_all_seats();
    let students: Vec<&Student> = shuffled(&roster.students().iter().collect::<Vec<_>>(), rng);
    let seats: Vec<SeatId> = shuffled(&seat_ids(chart.assignable_seats()), rng);
    info!(
        students = students.len(),
        seats = seats.len(),
        zones = zones.len(),
        use_relations,
        "starting seat assignment"
    );

    let (zone_seats, unzoned) = partition_by_zone(zones, &seats);
    debug!(zoned = seats.len() - unzoned.len(), unzoned = unzoned.len(), "seats partitioned");

    let mut alloc = Allocation::new(chart);

    let relation_stats = if use_relations {
        Some(relation_phase(&mut alloc, relations, roster, &seats, rng)?)
    } else {
        None
    };
    zone_phase(&mut alloc, zones, &zone_seats, &students, rng)?;
    remainder_phase(&mut alloc, &students, &seats, rng)?;

    let unassigned: Vec<Student> = students
        .iter()
        .filter(|s| !alloc.is_seated(s.id))
        .map(|&s| s.clone())
        .collect();
    let assigned = alloc.placements.len();
    let total = students.len();
    info!(assigned, total, "seat assignment finished");

    let message = if unassigned.is_empty() {
        format!("seated all {assigned} students")
    } else {
        let names: Vec<&str> = unassigned.iter().map(Student::display_name).collect();
        warn!(unassigned = unassigned.len(), "some students could not be seated");
        format!(
            "some students could not be seated\nseated: {assigned}/{total}\nunseated: {}",
            names.join(", ")
        )
    };

    Ok(AssignmentResult {
        success: unassigned.is_empty(),
        message,
        assigned,
        total,
        unassigned,
        relation_stats,
        placements: alloc.placements,
    })
}

/// Splits `seats` into per-zone pools and an unzoned pool, keeping order.
fn partition_by_zone(
    zones: &ZoneRegistry,
    seats: &[SeatId],
) -> (HashMap<ZoneId, Vec<SeatId>>, Vec<SeatId>) {
    let mut zoned: HashMap<ZoneId, Vec<SeatId>> = HashMap::new();
    let mut unzoned = Vec::new();
    for &seat in seats {
        match zones.zone_for_seat(seat) {
            Some(zone) => zoned.entry(zone.id).or_default().push(seat),
            None => unzoned.push(seat),
        }
    }
    (zoned, unzoned)
}

fn relation_phase<R: Rng + ?Sized>(
    alloc: &mut Allocation<'_>,
    relations: &RelationRegistry,
    roster: &StudentRoster,
    seats: &[SeatId],
    rng: &mut R,
) -> Result<RelationStats, SeatingError> {
    // Relations pointing at students no longer on the roster are ignored.
    let ordered: Vec<&Relation> = relations
        .sorted_by_priority()
        .into_iter()
        .filter(|r| roster.contains(r.first) && roster.contains(r.second))
        .collect();
    debug!(relations = ordered.len(), "relation phase");

    let mut stats = RelationStats {
        satisfied: 0,
        total: ordered.len(),
    };
    for relation in ordered {
        if alloc.is_seated(relation.first) || alloc.is_seated(relation.second) {
            continue;
        }
        let free = alloc.free_among(seats);
        let Some((seat_a, seat_b)) = find_seat_pair(relation, &free, rng) else {
            warn!(
                relation = relation.id.0,
                kind = %relation.kind,
                first = %relation.first,
                second = %relation.second,
                "relation left unsatisfied"
            );
            continue;
        };
        let (a, b) = if rng.random_bool(0.5) {
            (relation.first, relation.second)
        } else {
            (relation.second, relation.first)
        };
        alloc.place(a, seat_a)?;
        alloc.place(b, seat_b)?;
        stats.satisfied += 1;
    }
    Ok(stats)
}

fn zone_phase<R: Rng + ?Sized>(
    alloc: &mut Allocation<'_>,
    zones: &ZoneRegistry,
    zone_seats: &HashMap<ZoneId, Vec<SeatId>>,
    students: &[&Student],
    rng: &mut R,
) -> Result<(), SeatingError> {
    let order: Vec<&Zone> = shuffled(&zones.zones().iter().collect::<Vec<_>>(), rng);
    for zone in order {
        if zone.is_unconstrained() {
            continue;
        }
        let eligible: Vec<&Student> = students
            .iter()
            .copied()
            .filter(|s| !alloc.is_seated(s.id) && is_student_eligible(s, zone))
            .collect();
        let eligible = shuffled(&eligible, rng);
        let pool = zone_seats.get(&zone.id).map_or(&[][..], Vec::as_slice);
        let free = shuffled(&alloc.free_among(pool), rng);

        debug!(zone = %zone.name, eligible = eligible.len(), free = free.len(), "zone phase");
        if eligible.len() > free.len() {
            warn!(
                zone = %zone.name,
                eligible = eligible.len(),
                free = free.len(),
                "zone has more eligible students than free seats"
            );
        }
        for (student, &seat) in eligible.iter().zip(&free) {
            alloc.place(student.id, seat)?;
        }
    }
    Ok(())
}

fn remainder_phase<R: Rng + ?Sized>(
    alloc: &mut Allocation<'_>,
    students: &[&Student],
    seats: &[SeatId],
    rng: &mut R,
) -> Result<(), SeatingError> {
    let waiting: Vec<StudentId> = students
        .iter()
        .map(|s| s.id)
        .filter(|&id| !alloc.is_seated(id))
        .collect();
    let waiting = shuffled(&waiting, rng);
    let free = shuffled(&alloc.free_among(seats), rng);
    debug!(waiting = waiting.len(), free = free.len(), "remainder phase");

    for (&student, &seat) in waiting.iter().zip(&free) {
        alloc.place(student, seat)?;
    }
    Ok(())
}
