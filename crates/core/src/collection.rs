//! In-memory ordered collection of content records.
//!
//! [`Collection`] owns a `Vec` of records and exposes the admin operations
//! (create, update, delete, reorder, toggle) as immediate, synchronous
//! transformations. Array position is the only source of truth for order:
//! `display_order` is always rewritten from position, never sorted on.
//!
//! Lookups that miss are not errors at this level. `update` and
//! `toggle_active` return `None`, `delete` returns `None` and `reorder`
//! returns [`MoveOutcome::NotFound`], leaving the collection untouched.
//! Callers decide whether to surface that.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::filter::{ListFilter, Searchable};
use crate::types::{DbId, Timestamp};
use crate::validation::validate_input;

// ---------------------------------------------------------------------------
// Record traits
// ---------------------------------------------------------------------------

/// A content record that can live in a [`Collection`].
pub trait Record: Clone {
    /// Snake-case entity name used in errors, logs and event names.
    const ENTITY: &'static str;

    fn id(&self) -> DbId;

    /// Refresh `updated_at`. `created_at` must never change.
    fn touch(&mut self, now: Timestamp);

    /// 1-based display rank, for kinds rendered in a user-chosen order.
    fn display_order(&self) -> Option<i32> {
        None
    }

    fn set_display_order(&mut self, _order: i32) {}
}

/// Marker for records whose position is chosen by the admin and can be
/// moved up and down.
pub trait Ordered: Record {}

/// Records carrying an `is_active` visibility flag.
pub trait Activatable: Record {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// Create DTO for a record kind.
pub trait NewRecord: Validate {
    type Record: Record;

    /// Build the record. `position` is the 1-based slot the record will
    /// occupy (`len + 1`), used as `display_order` by ordered kinds.
    fn into_record(self, id: DbId, position: i32, now: Timestamp) -> Self::Record;
}

/// Partial update DTO for a record kind. `None` fields are left alone.
pub trait Patch: Validate {
    type Record: Record;

    fn apply_to(self, record: &mut Self::Record);
}

// ---------------------------------------------------------------------------
// Reordering
// ---------------------------------------------------------------------------

/// Direction of a manual move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

/// Result of [`Collection::reorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The record swapped places with its neighbour.
    Moved { from: usize, to: usize },
    /// The record is already first (up) or last (down).
    AtBoundary,
    NotFound,
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Source of timestamps for mutations.
pub type Clock = fn() -> Timestamp;

/// The wall clock.
pub fn system_clock() -> Timestamp {
    Utc::now()
}

/// Ordered in-memory store for one record kind.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    clock: Clock,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::with_clock(system_clock)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            records: Vec::new(),
            clock,
        }
    }

    /// Build a collection from existing records, keeping their order.
    ///
    /// Rejects duplicate ids with [`CoreError::Conflict`].
    pub fn from_records(records: Vec<T>) -> Result<Self, CoreError> {
        let mut seen = std::collections::HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(CoreError::Conflict(format!(
                    "Duplicate {} id {}",
                    T::ENTITY,
                    record.id()
                )));
            }
        }
        Ok(Self {
            records,
            clock: system_clock,
        })
    }

    /// Replace the clock, e.g. with a deterministic one in tests.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: DbId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn position(&self, id: DbId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Next identifier: one past the largest id, or 1 when empty.
    fn next_id(&self) -> DbId {
        self.records.iter().map(Record::id).max().map_or(1, |max| max + 1)
    }

    /// Validate `input`, then append a new record built from it.
    pub fn create<N>(&mut self, input: N) -> Result<&T, CoreError>
    where
        N: NewRecord<Record = T>,
    {
        validate_input(&input)?;

        let id = self.next_id();
        let position = i32::try_from(self.records.len() + 1)
            .map_err(|_| CoreError::Internal(format!("{} collection is full", T::ENTITY)))?;
        let now = (self.clock)();

        self.records.push(input.into_record(id, position, now));
        Ok(&self.records[self.records.len() - 1])
    }

    /// Merge `patch` into the record with `id` and refresh `updated_at`.
    ///
    /// Returns `Ok(None)` (and changes nothing) when `id` is unknown, even
    /// if the patch itself is invalid.
    pub fn update<P>(&mut self, id: DbId, patch: P) -> Result<Option<&T>, CoreError>
    where
        P: Patch<Record = T>,
    {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        validate_input(&patch)?;

        let now = (self.clock)();
        let record = &mut self.records[index];
        patch.apply_to(record);
        record.touch(now);
        Ok(Some(&self.records[index]))
    }

    /// Remove the record with `id`, returning it.
    ///
    /// Remaining ordered records are renumbered so `display_order` stays
    /// contiguous.
    pub fn delete(&mut self, id: DbId) -> Option<T> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        self.renumber();
        Some(removed)
    }

    /// Keep only the records matching `filter`, in collection order.
    pub fn filter(&self, filter: &ListFilter) -> Vec<&T>
    where
        T: Searchable,
    {
        filter.apply(self.records.iter())
    }

    /// Rewrite `display_order` from position, touching records whose rank
    /// changed.
    fn renumber(&mut self) {
        let now = (self.clock)();
        for (index, record) in self.records.iter_mut().enumerate() {
            let rank = index as i32 + 1;
            if let Some(current) = record.display_order() {
                if current != rank {
                    record.set_display_order(rank);
                    record.touch(now);
                }
            }
        }
    }
}

impl<T: Ordered> Collection<T> {
    /// Swap the record with its neighbour in `direction`, then renumber.
    pub fn reorder(&mut self, id: DbId, direction: Direction) -> MoveOutcome {
        let Some(from) = self.position(id) else {
            return MoveOutcome::NotFound;
        };
        let to = match direction {
            Direction::Up if from > 0 => from - 1,
            Direction::Down if from + 1 < self.records.len() => from + 1,
            _ => return MoveOutcome::AtBoundary,
        };

        self.records.swap(from, to);
        self.renumber();
        MoveOutcome::Moved { from, to }
    }
}

impl<T: Activatable> Collection<T> {
    /// Flip `is_active` on the record with `id` and refresh `updated_at`.
    pub fn toggle_active(&mut self, id: DbId) -> Option<&T> {
        let now = (self.clock)();
        let index = self.position(id)?;
        let record = &mut self.records[index];
        record.set_active(!record.is_active());
        record.touch(now);
        Some(&self.records[index])
    }

    /// Number of records currently flagged active.
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_active()).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    static TICKS: AtomicI64 = AtomicI64::new(0);

    /// Strictly increasing clock: one second per call.
    fn ticking_clock() -> Timestamp {
        let n = TICKS.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(1_700_000_000 + n, 0).unwrap()
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: DbId,
        title: String,
        status: String,
        display_order: i32,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    }

    impl Record for Item {
        const ENTITY: &'static str = "item";

        fn id(&self) -> DbId {
            self.id
        }

        fn touch(&mut self, now: Timestamp) {
            self.updated_at = now;
        }

        fn display_order(&self) -> Option<i32> {
            Some(self.display_order)
        }

        fn set_display_order(&mut self, order: i32) {
            self.display_order = order;
        }
    }

    impl Ordered for Item {}

    impl Activatable for Item {
        fn is_active(&self) -> bool {
            self.is_active
        }

        fn set_active(&mut self, active: bool) {
            self.is_active = active;
        }
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str()]
        }

        fn filter_keys(&self) -> Vec<&str> {
            vec![self.status.as_str()]
        }
    }

    #[derive(Validate)]
    struct NewItem {
        #[validate(length(min = 1, message = "must not be empty"))]
        title: String,
        status: String,
    }

    impl NewItem {
        fn titled(title: &str) -> Self {
            Self {
                title: title.into(),
                status: "active".into(),
            }
        }
    }

    impl NewRecord for NewItem {
        type Record = Item;

        fn into_record(self, id: DbId, position: i32, now: Timestamp) -> Item {
            Item {
                id,
                title: self.title,
                status: self.status,
                display_order: position,
                is_active: true,
                created_at: now,
                updated_at: now,
            }
        }
    }

    #[derive(Default, Validate)]
    struct ItemPatch {
        #[validate(length(min = 1, message = "must not be empty"))]
        title: Option<String>,
        status: Option<String>,
    }

    impl Patch for ItemPatch {
        type Record = Item;

        fn apply_to(self, record: &mut Item) {
            if let Some(title) = self.title {
                record.title = title;
            }
            if let Some(status) = self.status {
                record.status = status;
            }
        }
    }

    fn collection_of(titles: &[&str]) -> Collection<Item> {
        let mut c = Collection::with_clock(ticking_clock);
        for t in titles {
            c.create(NewItem::titled(t)).unwrap();
        }
        c
    }

    fn ids(c: &Collection<Item>) -> Vec<DbId> {
        c.list().iter().map(|r| r.id).collect()
    }

    fn orders(c: &Collection<Item>) -> Vec<i32> {
        c.list().iter().map(|r| r.display_order).collect()
    }

    fn item(id: DbId, status: &str, order: i32) -> Item {
        let now = ticking_clock();
        Item {
            id,
            title: format!("Item {id}"),
            status: status.into(),
            display_order: order,
            is_active: status == "active",
            created_at: now,
            updated_at: now,
        }
    }

    // -- create --------------------------------------------------------------

    #[test]
    fn create_in_empty_collection_assigns_id_one() {
        let mut c: Collection<Item> = Collection::with_clock(ticking_clock);
        let created = c.create(NewItem::titled("X")).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.display_order, 1);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[test]
    fn create_uses_max_id_plus_one() {
        let mut c = Collection::from_records(vec![item(2, "active", 1), item(5, "active", 2)])
            .unwrap();
        let created = c.create(NewItem::titled("New")).unwrap();
        assert_eq!(created.id, 6);
        assert_eq!(created.display_order, 3);
        assert_eq!(ids(&c), vec![2, 5, 6]);
    }

    #[test]
    fn create_rejects_empty_required_field() {
        let mut c = collection_of(&["A"]);
        let result = c.create(NewItem::titled(""));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("title"));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn ids_stay_unique_across_creates_and_deletes() {
        let mut c = collection_of(&["A", "B", "C"]);
        c.delete(3);
        c.create(NewItem::titled("D")).unwrap();
        c.delete(1);
        c.create(NewItem::titled("E")).unwrap();

        let mut seen = ids(&c);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), c.len());
    }

    // -- update --------------------------------------------------------------

    #[test]
    fn update_merges_fields_and_refreshes_updated_at() {
        let mut c = collection_of(&["A"]);
        let before = c.get(1).unwrap().clone();

        let patch = ItemPatch {
            status: Some("inactive".into()),
            ..Default::default()
        };
        let updated = c.update(1, patch).unwrap().unwrap();

        assert_eq!(updated.title, "A");
        assert_eq!(updated.status, "inactive");
        assert_eq!(updated.created_at, before.created_at);
        assert!(updated.updated_at > before.updated_at);
    }

    #[test]
    fn update_missing_id_is_a_noop() {
        let mut c = collection_of(&["A"]);
        let snapshot = c.list().to_vec();
        let result = c.update(
            42,
            ItemPatch {
                title: Some("B".into()),
                ..Default::default()
            },
        );
        assert_matches!(result, Ok(None));
        assert_eq!(c.list(), snapshot.as_slice());
    }

    #[test]
    fn update_missing_id_wins_over_an_invalid_patch() {
        let mut c = collection_of(&["A"]);
        let result = c.update(
            42,
            ItemPatch {
                title: Some(String::new()),
                ..Default::default()
            },
        );
        assert_matches!(result, Ok(None));
    }

    #[test]
    fn loaded_records_are_stamped_by_the_injected_clock() {
        let mut c = Collection::from_records(vec![item(1, "active", 1)]).unwrap();
        c.set_clock(|| Utc.timestamp_opt(2_000_000_000, 0).unwrap());

        let updated = c
            .update(
                1,
                ItemPatch {
                    status: Some("inactive".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.updated_at.timestamp(), 2_000_000_000);
    }

    #[test]
    fn update_rejects_blanking_a_required_field() {
        let mut c = collection_of(&["A"]);
        let result = c.update(
            1,
            ItemPatch {
                title: Some(String::new()),
                ..Default::default()
            },
        );
        assert_matches!(result, Err(CoreError::Validation(_)));
        assert_eq!(c.get(1).unwrap().title, "A");
    }

    // -- delete --------------------------------------------------------------

    #[test]
    fn delete_removes_the_matching_record() {
        let mut c = Collection::from_records(vec![
            item(1, "active", 1),
            item(2, "inactive", 2),
            item(3, "active", 3),
        ])
        .unwrap();

        let removed = c.delete(2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(ids(&c), vec![1, 3]);
        assert_eq!(c.len(), 2);
        assert_eq!(orders(&c), vec![1, 2]);
    }

    #[test]
    fn delete_missing_id_is_a_noop() {
        let mut c = collection_of(&["A", "B"]);
        assert!(c.delete(9).is_none());
        assert_eq!(ids(&c), vec![1, 2]);
    }

    #[test]
    fn from_records_rejects_duplicate_ids() {
        let result = Collection::from_records(vec![item(1, "active", 1), item(1, "active", 2)]);
        assert_matches!(result, Err(CoreError::Conflict(msg)) if msg.contains("item id 1"));
    }

    // -- reorder -------------------------------------------------------------

    #[test]
    fn move_up_swaps_with_predecessor_and_renumbers() {
        let mut c = collection_of(&["A", "B", "C"]);
        let outcome = c.reorder(3, Direction::Up);

        assert_eq!(outcome, MoveOutcome::Moved { from: 2, to: 1 });
        assert_eq!(ids(&c), vec![1, 3, 2]);
        assert_eq!(orders(&c), vec![1, 2, 3]);
    }

    #[test]
    fn move_down_swaps_with_successor() {
        let mut c = collection_of(&["A", "B", "C"]);
        assert_eq!(
            c.reorder(1, Direction::Down),
            MoveOutcome::Moved { from: 0, to: 1 }
        );
        assert_eq!(ids(&c), vec![2, 1, 3]);
        assert_eq!(orders(&c), vec![1, 2, 3]);
    }

    #[test]
    fn move_at_boundaries_leaves_collection_unchanged() {
        let mut c = collection_of(&["A", "B", "C"]);
        let snapshot = c.list().to_vec();

        assert_eq!(c.reorder(1, Direction::Up), MoveOutcome::AtBoundary);
        assert_eq!(c.reorder(3, Direction::Down), MoveOutcome::AtBoundary);
        assert_eq!(c.list(), snapshot.as_slice());
    }

    #[test]
    fn move_unknown_id_reports_not_found() {
        let mut c = collection_of(&["A"]);
        assert_eq!(c.reorder(7, Direction::Up), MoveOutcome::NotFound);
    }

    #[test]
    fn move_repairs_gapped_display_order() {
        let mut c = Collection::from_records(vec![
            item(1, "active", 4),
            item(2, "active", 4),
            item(3, "active", 9),
        ])
        .unwrap();

        c.reorder(2, Direction::Up);
        assert_eq!(ids(&c), vec![2, 1, 3]);
        assert_eq!(orders(&c), vec![1, 2, 3]);
    }

    #[test]
    fn move_touches_only_records_whose_rank_changed() {
        let mut c = collection_of(&["A", "B", "C"]);
        let untouched = c.get(1).unwrap().updated_at;

        c.reorder(3, Direction::Up);
        assert_eq!(c.get(1).unwrap().updated_at, untouched);
        assert!(c.get(3).unwrap().updated_at > untouched);
    }

    // -- toggle --------------------------------------------------------------

    #[test]
    fn toggling_twice_restores_flag_and_touches_twice() {
        let mut c = collection_of(&["A"]);
        let original = c.get(1).unwrap().clone();

        let first = c.toggle_active(1).unwrap().clone();
        assert_eq!(first.is_active, !original.is_active);
        assert!(first.updated_at > original.updated_at);

        let second = c.toggle_active(1).unwrap().clone();
        assert_eq!(second.is_active, original.is_active);
        assert!(second.updated_at > first.updated_at);
        assert_eq!(second.created_at, original.created_at);
    }

    #[test]
    fn toggle_missing_id_returns_none() {
        let mut c = collection_of(&["A"]);
        assert!(c.toggle_active(5).is_none());
    }

    #[test]
    fn active_count_tracks_toggles() {
        let mut c = collection_of(&["A", "B", "C"]);
        assert_eq!(c.active_count(), 3);
        c.toggle_active(2);
        assert_eq!(c.active_count(), 2);
    }

    // -- filter --------------------------------------------------------------

    #[test]
    fn filter_combines_search_and_status() {
        let mut c = collection_of(&["Diwali Lights", "Weekly Satsang", "Diwali Feast"]);
        c.update(
            3,
            ItemPatch {
                status: Some("draft".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let hits = c.filter(&ListFilter::new("diwali", "active"));
        let hit_ids: Vec<DbId> = hits.iter().map(|r| r.id).collect();
        assert_eq!(hit_ids, vec![1]);
    }

    #[test]
    fn filter_does_not_mutate_collection() {
        let c = collection_of(&["A", "B"]);
        let snapshot = c.list().to_vec();
        let _ = c.filter(&ListFilter::new("zzz", "all"));
        assert_eq!(c.list(), snapshot.as_slice());
    }
}
