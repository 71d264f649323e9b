//! Seat-pair search for the relation phase.
//!
//! Each tier shuffles the free seats and then scans pairs in order, so
//! ties between acceptable pairs are broken by the shuffle.

use crate::grid::{are_deskmates, distance, SeatDistance, SeatId};
use crate::random::shuffled;
use crate::relation::{Relation, RelationKind};
use rand::Rng;

type SeatPair = (SeatId, SeatId);

/// Finds two free seats that honor `relation`, or `None`.
pub(crate) fn find_seat_pair<R: Rng + ?Sized>(
    relation: &Relation,
    free: &[SeatId],
    rng: &mut R,
) -> Option<SeatPair> {
    if free.len() < 2 {
        return None;
    }
    match relation.kind {
        RelationKind::Attraction => deskmate_pair(free, rng)
            .or_else(|| {
                if relation.allow_adjacent() {
                    adjacent_pair(free, rng)
                } else {
                    None
                }
            })
            .or_else(|| closest_same_group_pair(free, rng))
            .or_else(|| any_pair(free, rng)),
        RelationKind::Repulsion => cross_group_pair(free, rng)
            .or_else(|| farthest_same_group_pair(free, relation.min_distance(), rng)),
        RelationKind::SeatmateBinding => deskmate_pair(free, rng),
        RelationKind::SeatmateRepulsion => non_deskmate_pair(free, rng),
    }
}

fn pairs(seats: &[SeatId]) -> impl Iterator<Item = SeatPair> + '_ {
    (0..seats.len()).flat_map(move |i| (i + 1..seats.len()).map(move |j| (seats[i], seats[j])))
}

fn first_pair<R: Rng + ?Sized>(
    free: &[SeatId],
    rng: &mut R,
    accept: impl Fn(SeatId, SeatId) -> bool,
) -> Option<SeatPair> {
    let seats = shuffled(free, rng);
    let found = pairs(&seats).find(|&(a, b)| accept(a, b));
    found
}

fn deskmate_pair<R: Rng + ?Sized>(free: &[SeatId], rng: &mut R) -> Option<SeatPair> {
    first_pair(free, rng, are_deskmates)
}

fn non_deskmate_pair<R: Rng + ?Sized>(free: &[SeatId], rng: &mut R) -> Option<SeatPair> {
    first_pair(free, rng, |a, b| !are_deskmates(a, b))
}

fn adjacent_pair<R: Rng + ?Sized>(free: &[SeatId], rng: &mut R) -> Option<SeatPair> {
    first_pair(free, rng, |a, b| distance(a, b) == SeatDistance::Steps(1))
}

fn cross_group_pair<R: Rng + ?Sized>(free: &[SeatId], rng: &mut R) -> Option<SeatPair> {
    first_pair(free, rng, |a, b| distance(a, b).is_unreachable())
}

fn any_pair<R: Rng + ?Sized>(free: &[SeatId], rng: &mut R) -> Option<SeatPair> {
    first_pair(free, rng, |_, _| true)
}

/// Same-group pair within one step of the smallest same-group distance.
fn closest_same_group_pair<R: Rng + ?Sized>(free: &[SeatId], rng: &mut R) -> Option<SeatPair> {
    let seats = shuffled(free, rng);
    let min = pairs(&seats)
        .filter_map(|(a, b)| distance(a, b).steps())
        .min()?;
    let found =
        pairs(&seats).find(|&(a, b)| distance(a, b).steps().is_some_and(|d| d <= min + 1));
    found
}

/// Same-group pair at least `min_distance` apart, within one step of
/// the largest such distance.
fn farthest_same_group_pair<R: Rng + ?Sized>(
    free: &[SeatId],
    min_distance: usize,
    rng: &mut R,
) -> Option<SeatPair> {
    let seats = shuffled(free, rng);
    let far_enough = |a: SeatId, b: SeatId| {
        distance(a, b)
            .steps()
            .filter(|&d| d >= min_distance)
    };
    let max = pairs(&seats).filter_map(|(a, b)| far_enough(a, b)).max()?;
    let found =
        pairs(&seats).find(|&(a, b)| far_enough(a, b).is_some_and(|d| d + 1 >= max));
    found
}
