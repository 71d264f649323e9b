//! The seat store.

use super::topology::{are_deskmates, distance};
use super::types::{GridConfig, Seat, SeatDistance, SeatId};
use crate::error::SeatingError;
use crate::roster::StudentId;

/// Owns every seat of the grid and their occupancy.
///
/// Seats are created in bulk from a [`GridConfig`] and replaced wholesale
/// by [`SeatChart::reconfigure`]. Seat order is group-major, then column,
/// then row.
///
/// # Examples
///
/// ```
/// use u_seating::grid::{GridConfig, SeatChart, SeatId};
/// use u_seating::roster::StudentId;
///
/// let mut chart = SeatChart::new(GridConfig::default()).unwrap();
/// let seat = SeatId::new(0, 1, 2);
/// assert!(chart.assign(seat, StudentId(7)));
/// assert_eq!(chart.seat_of(StudentId(7)), Some(seat));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatChart {
    config: GridConfig,
    seats: Vec<Seat>,
}

impl SeatChart {
    /// Creates a chart with every seat unoccupied.
    pub fn new(config: GridConfig) -> Result<Self, SeatingError> {
        config.validate()?;
        Ok(Self {
            config,
            seats: build_seats(&config),
        })
    }

    /// Replaces every seat with a fresh grid of the given dimensions.
    ///
    /// All occupancy and empty flags are lost.
    pub fn reconfigure(&mut self, config: GridConfig) -> Result<(), SeatingError> {
        config.validate()?;
        self.config = config;
        self.seats = build_seats(&config);
        Ok(())
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    fn seat_mut(&mut self, id: SeatId) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SeatId) -> bool {
        self.seat(id).is_some()
    }

    /// Places a student on a seat.
    ///
    /// Returns `false` if the seat does not exist or is flagged empty.
    pub fn assign(&mut self, seat: SeatId, student: StudentId) -> bool {
        match self.seat_mut(seat) {
            Some(s) if !s.is_empty => {
                s.occupant = Some(student);
                true
            }
            _ => false,
        }
    }

    pub fn clear_seat(&mut self, seat: SeatId) {
        if let Some(s) = self.seat_mut(seat) {
            s.occupant = None;
        }
    }

    /// Removes every occupant. Empty flags are kept.
    pub fn clear_all_seats(&mut self) {
        for seat in &mut self.seats {
            seat.occupant = None;
        }
    }

    /// Vacates every seat held by `student`.
    pub fn evict(&mut self, student: StudentId) {
        for seat in &mut self.seats {
            if seat.occupant == Some(student) {
                seat.occupant = None;
            }
        }
    }

    /// Flips the empty flag. Flagging a seat empty evicts its occupant.
    ///
    /// Returns the new flag, or `None` for an unknown seat.
    pub fn toggle_empty(&mut self, seat: SeatId) -> Option<bool> {
        let s = self.seat_mut(seat)?;
        s.is_empty = !s.is_empty;
        if s.is_empty {
            s.occupant = None;
        }
        Some(s.is_empty)
    }

    /// Exchanges the occupants of two seats.
    ///
    /// Returns `false` if either seat is unknown.
    pub fn swap_seats(&mut self, a: SeatId, b: SeatId) -> bool {
        let (Some(ia), Some(ib)) = (self.index_of(a), self.index_of(b)) else {
            return false;
        };
        let first = self.seats[ia].occupant;
        self.seats[ia].occupant = self.seats[ib].occupant;
        self.seats[ib].occupant = first;
        true
    }

    fn index_of(&self, id: SeatId) -> Option<usize> {
        self.seats.iter().position(|s| s.id == id)
    }

    pub fn occupant(&self, seat: SeatId) -> Option<StudentId> {
        self.seat(seat).and_then(|s| s.occupant)
    }

    /// Seat currently held by `student`.
    pub fn seat_of(&self, student: StudentId) -> Option<SeatId> {
        self.seats
            .iter()
            .find(|s| s.occupant == Some(student))
            .map(|s| s.id)
    }

    /// Other seats sharing a desk with `seat`.
    pub fn deskmates_of(&self, seat: SeatId) -> Vec<&Seat> {
        self.seats
            .iter()
            .filter(|s| s.id != seat && are_deskmates(s.id, seat))
            .collect()
    }

    /// Seats not flagged empty.
    pub fn assignable_seats(&self) -> Vec<&Seat> {
        self.seats.iter().filter(|s| s.is_assignable()).collect()
    }

    /// Assignable seats with no occupant.
    pub fn free_seats(&self) -> Vec<&Seat> {
        self.seats.iter().filter(|s| s.is_free()).collect()
    }

    /// Occupiable seats of the same group within `(0, max_distance]`.
    pub fn adjacent_seats(&self, seat: SeatId, max_distance: usize) -> Vec<&Seat> {
        self.nearby(seat, |d| d <= max_distance)
    }

    /// Occupiable seats of the same group strictly closer than `radius`.
    ///
    /// These are the seats a repelled partner must not take.
    pub fn danger_zone_seats(&self, seat: SeatId, radius: usize) -> Vec<&Seat> {
        self.nearby(seat, |d| d < radius)
    }

    fn nearby(&self, seat: SeatId, within: impl Fn(usize) -> bool) -> Vec<&Seat> {
        self.seats
            .iter()
            .filter(|s| s.is_assignable() && s.id != seat)
            .filter(|s| match distance(seat, s.id) {
                SeatDistance::Steps(d) => d > 0 && within(d),
                SeatDistance::Unreachable => false,
            })
            .collect()
    }

    /// Whether two seats are at least `min_distance` apart.
    pub fn satisfies_repulsion(&self, a: SeatId, b: SeatId, min_distance: usize) -> bool {
        distance(a, b).at_least(min_distance)
    }

    /// Seats of one group organized by column, each column ordered by row.
    pub fn columns(&self, group: usize) -> Vec<Vec<&Seat>> {
        (0..self.config.columns_per_group)
            .map(|column| {
                let mut col: Vec<&Seat> = self
                    .seats
                    .iter()
                    .filter(|s| s.id.group == group && s.id.column == column)
                    .collect();
                col.sort_by_key(|s| s.id.row);
                col
            })
            .collect()
    }
}

fn build_seats(config: &GridConfig) -> Vec<Seat> {
    let mut seats = Vec::with_capacity(config.seat_count());
    for group in 0..config.group_count {
        for column in 0..config.columns_per_group {
            for row in 0..config.seats_per_column {
                seats.push(Seat::new(SeatId::new(group, column, row)));
            }
        }
    }
    seats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(groups: usize, columns: usize, rows: usize) -> SeatChart {
        SeatChart::new(
            GridConfig::default()
                .with_group_count(groups)
                .with_columns_per_group(columns)
                .with_seats_per_column(rows),
        )
        .unwrap()
    }

    #[test]
    fn test_build_order() {
        let c = chart(2, 2, 2);
        let ids: Vec<String> = c.seats().iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids[0], "seat-0-0-0");
        assert_eq!(ids[1], "seat-0-0-1");
        assert_eq!(ids[2], "seat-0-1-0");
        assert_eq!(ids[7], "seat-1-1-1");
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        let result = SeatChart::new(GridConfig::default().with_group_count(0));
        assert!(result.is_err());
    }

    #[test]
    fn test_assign_rejects_empty_flagged() {
        let mut c = chart(1, 2, 1);
        let seat = SeatId::new(0, 0, 0);
        assert_eq!(c.toggle_empty(seat), Some(true));
        assert!(!c.assign(seat, StudentId(1)));
        assert!(!c.assign(SeatId::new(5, 0, 0), StudentId(1)));
        assert!(c.assign(SeatId::new(0, 1, 0), StudentId(1)));
    }

    #[test]
    fn test_toggle_empty_evicts() {
        let mut c = chart(1, 2, 1);
        let seat = SeatId::new(0, 1, 0);
        c.assign(seat, StudentId(4));
        c.toggle_empty(seat);
        assert_eq!(c.occupant(seat), None);
        assert_eq!(c.toggle_empty(seat), Some(false));
        assert_eq!(c.toggle_empty(SeatId::new(9, 9, 9)), None);
    }

    #[test]
    fn test_clear_all_keeps_empty_flags() {
        let mut c = chart(1, 2, 2);
        c.toggle_empty(SeatId::new(0, 0, 0));
        c.assign(SeatId::new(0, 1, 1), StudentId(2));
        c.clear_all_seats();
        assert!(c.seats().iter().all(|s| s.occupant().is_none()));
        assert!(c.seat(SeatId::new(0, 0, 0)).unwrap().is_empty());
        assert_eq!(c.free_seats().len(), 3);
        assert_eq!(c.assignable_seats().len(), 3);
    }

    #[test]
    fn test_swap_seats() {
        let mut c = chart(1, 2, 2);
        let a = SeatId::new(0, 0, 0);
        let b = SeatId::new(0, 1, 1);
        c.assign(a, StudentId(1));
        assert!(c.swap_seats(a, b));
        assert_eq!(c.occupant(a), None);
        assert_eq!(c.occupant(b), Some(StudentId(1)));
        assert!(!c.swap_seats(a, SeatId::new(3, 0, 0)));
    }

    #[test]
    fn test_adjacent_seats() {
        let mut c = chart(2, 2, 3);
        let center = SeatId::new(0, 0, 1);
        let adjacent: Vec<SeatId> = c.adjacent_seats(center, 1).iter().map(|s| s.id).collect();
        assert_eq!(adjacent.len(), 3);
        assert!(adjacent.contains(&SeatId::new(0, 0, 0)));
        assert!(adjacent.contains(&SeatId::new(0, 0, 2)));
        assert!(adjacent.contains(&SeatId::new(0, 1, 1)));

        c.toggle_empty(SeatId::new(0, 0, 0));
        assert_eq!(c.adjacent_seats(center, 1).len(), 2);
        // Other group never counts.
        assert!(c
            .adjacent_seats(center, 100)
            .iter()
            .all(|s| s.id.group == 0));
    }

    #[test]
    fn test_danger_zone_and_repulsion() {
        let c = chart(2, 2, 4);
        let seat = SeatId::new(0, 0, 0);
        let danger = c.danger_zone_seats(seat, 2);
        assert_eq!(danger.len(), 2);
        assert!(c.satisfies_repulsion(seat, SeatId::new(0, 1, 1), 2));
        assert!(!c.satisfies_repulsion(seat, SeatId::new(0, 1, 0), 2));
        assert!(c.satisfies_repulsion(seat, SeatId::new(1, 0, 0), 50));
    }

    #[test]
    fn test_deskmates_of() {
        let c = chart(2, 2, 3);
        let mates: Vec<SeatId> = c
            .deskmates_of(SeatId::new(1, 0, 2))
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(mates, vec![SeatId::new(1, 1, 2)]);
    }

    #[test]
    fn test_columns_view() {
        let c = chart(2, 2, 3);
        let cols = c.columns(1);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[1].len(), 3);
        assert_eq!(cols[1][2].id, SeatId::new(1, 1, 2));
    }

    #[test]
    fn test_reconfigure_replaces_seats() {
        let mut c = chart(1, 2, 2);
        c.assign(SeatId::new(0, 0, 0), StudentId(1));
        c.reconfigure(GridConfig::default().with_group_count(2).with_seats_per_column(1))
            .unwrap();
        assert_eq!(c.seats().len(), 4);
        assert_eq!(c.seat_of(StudentId(1)), None);
    }

    #[test]
    fn test_evict() {
        let mut c = chart(1, 2, 2);
        c.assign(SeatId::new(0, 1, 1), StudentId(3));
        c.evict(StudentId(3));
        assert_eq!(c.seat_of(StudentId(3)), None);
    }
}
