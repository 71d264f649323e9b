//! The zone store.

use super::types::{Zone, ZoneId};
use crate::grid::SeatId;
use crate::roster::TagId;
use std::collections::{HashMap, HashSet};

/// Ordered list of zones.
///
/// Order matters: [`ZoneRegistry::zone_for_seat`] returns the first zone
/// claiming a seat.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
    next_id: u32,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self {
            zones: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds an empty, hidden zone named "Zone N".
    pub fn add(&mut self) -> ZoneId {
        self.next_id = self.next_id.max(1);
        let id = ZoneId(self.next_id);
        self.next_id += 1;
        self.zones.push(Zone::new(id, format!("Zone {}", id.0)));
        id
    }

    pub fn remove(&mut self, id: ZoneId) -> Option<Zone> {
        let index = self.zones.iter().position(|z| z.id == id)?;
        Some(self.zones.remove(index))
    }

    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    fn get_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn rename(&mut self, id: ZoneId, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(zone) => {
                zone.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn set_visible(&mut self, id: ZoneId, visible: bool) -> bool {
        match self.get_mut(id) {
            Some(zone) => {
                zone.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn toggle_visible(&mut self, id: ZoneId) -> Option<bool> {
        let zone = self.get_mut(id)?;
        zone.visible = !zone.visible;
        Some(zone.visible)
    }

    /// Adds a required tag. Already-present tags are ignored.
    pub fn add_tag(&mut self, id: ZoneId, tag: TagId) -> bool {
        let Some(zone) = self.get_mut(id) else {
            return false;
        };
        if !zone.required_tags.contains(&tag) {
            zone.required_tags.push(tag);
        }
        true
    }

    pub fn remove_tag(&mut self, id: ZoneId, tag: TagId) -> bool {
        let Some(zone) = self.get_mut(id) else {
            return false;
        };
        zone.required_tags.retain(|&t| t != tag);
        true
    }

    /// Adds a member seat. Already-present seats are ignored.
    pub fn add_seat(&mut self, id: ZoneId, seat: SeatId) -> bool {
        let Some(zone) = self.get_mut(id) else {
            return false;
        };
        if !zone.seats.contains(&seat) {
            zone.seats.push(seat);
        }
        true
    }

    pub fn remove_seat(&mut self, id: ZoneId, seat: SeatId) -> bool {
        let Some(zone) = self.get_mut(id) else {
            return false;
        };
        zone.seats.retain(|&s| s != seat);
        true
    }

    /// Adds the seat if absent, removes it if present.
    ///
    /// Returns whether the seat is a member afterwards, or `None` for an
    /// unknown zone.
    pub fn toggle_seat(&mut self, id: ZoneId, seat: SeatId) -> Option<bool> {
        let zone = self.get_mut(id)?;
        if zone.contains_seat(seat) {
            zone.seats.retain(|&s| s != seat);
            Some(false)
        } else {
            zone.seats.push(seat);
            Some(true)
        }
    }

    /// First zone, in registry order, containing `seat`.
    pub fn zone_for_seat(&self, seat: SeatId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.contains_seat(seat))
    }

    /// Seats claimed by more than one zone, with every claiming zone.
    pub fn overlapping_seats(&self) -> Vec<(SeatId, Vec<ZoneId>)> {
        let mut claims: HashMap<SeatId, Vec<ZoneId>> = HashMap::new();
        for zone in &self.zones {
            for &seat in &zone.seats {
                claims.entry(seat).or_default().push(zone.id);
            }
        }
        let mut out: Vec<(SeatId, Vec<ZoneId>)> =
            claims.into_iter().filter(|(_, z)| z.len() > 1).collect();
        out.sort_by_key(|(seat, _)| *seat);
        out
    }

    /// Seats belonging to visible zones.
    pub fn visible_seats(&self) -> HashSet<SeatId> {
        self.zones
            .iter()
            .filter(|z| z.visible)
            .flat_map(|z| z.seats.iter().copied())
            .collect()
    }

    /// Drops `tag` from every zone's requirement.
    pub fn remove_tag_everywhere(&mut self, tag: TagId) {
        for zone in &mut self.zones {
            zone.required_tags.retain(|&t| t != tag);
        }
    }

    /// Drops member seats that no longer exist on the grid.
    pub fn retain_seats(&mut self, valid: &HashSet<SeatId>) {
        for zone in &mut self.zones {
            zone.seats.retain(|s| valid.contains(s));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_names_zones() {
        let mut reg = ZoneRegistry::new();
        let a = reg.add();
        let b = reg.add();
        assert_eq!(reg.get(a).unwrap().name, "Zone 1");
        assert_eq!(reg.get(b).unwrap().name, "Zone 2");
        assert!(!reg.get(a).unwrap().visible);
    }

    #[test]
    fn test_zone_for_seat_first_match() {
        let mut reg = ZoneRegistry::new();
        let a = reg.add();
        let b = reg.add();
        let shared = SeatId::new(0, 0, 0);
        reg.add_seat(b, shared);
        reg.add_seat(a, shared);
        reg.add_seat(b, SeatId::new(0, 1, 0));

        assert_eq!(reg.zone_for_seat(shared).map(|z| z.id), Some(a));
        assert_eq!(reg.zone_for_seat(SeatId::new(0, 1, 0)).map(|z| z.id), Some(b));
        assert!(reg.zone_for_seat(SeatId::new(3, 0, 0)).is_none());
        assert_eq!(reg.overlapping_seats(), vec![(shared, vec![a, b])]);
    }

    #[test]
    fn test_tags_and_seats_deduplicated() {
        let mut reg = ZoneRegistry::new();
        let z = reg.add();
        reg.add_tag(z, TagId(1));
        reg.add_tag(z, TagId(1));
        reg.add_seat(z, SeatId::new(0, 0, 0));
        reg.add_seat(z, SeatId::new(0, 0, 0));
        let zone = reg.get(z).unwrap();
        assert_eq!(zone.required_tags.len(), 1);
        assert_eq!(zone.seats.len(), 1);
        assert!(!reg.add_tag(ZoneId(77), TagId(1)));
    }

    #[test]
    fn test_toggle_seat() {
        let mut reg = ZoneRegistry::new();
        let z = reg.add();
        let seat = SeatId::new(1, 1, 1);
        assert_eq!(reg.toggle_seat(z, seat), Some(true));
        assert_eq!(reg.toggle_seat(z, seat), Some(false));
        assert_eq!(reg.toggle_seat(ZoneId(9), seat), None);
    }

    #[test]
    fn test_visible_seats() {
        let mut reg = ZoneRegistry::new();
        let shown = reg.add();
        let hidden = reg.add();
        reg.add_seat(shown, SeatId::new(0, 0, 0));
        reg.add_seat(hidden, SeatId::new(0, 0, 1));
        reg.set_visible(shown, true);
        assert_eq!(reg.visible_seats(), HashSet::from([SeatId::new(0, 0, 0)]));
        assert_eq!(reg.toggle_visible(hidden), Some(true));
        assert_eq!(reg.visible_seats().len(), 2);
    }

    #[test]
    fn test_cleanup() {
        let mut reg = ZoneRegistry::new();
        let z = reg.add();
        reg.add_tag(z, TagId(1));
        reg.add_tag(z, TagId(2));
        reg.add_seat(z, SeatId::new(0, 0, 0));
        reg.add_seat(z, SeatId::new(5, 0, 0));

        reg.remove_tag_everywhere(TagId(1));
        reg.retain_seats(&HashSet::from([SeatId::new(0, 0, 0)]));

        let zone = reg.get(z).unwrap();
        assert_eq!(zone.required_tags, vec![TagId(2)]);
        assert_eq!(zone.seats, vec![SeatId::new(0, 0, 0)]);
    }
}
