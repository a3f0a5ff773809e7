//! Pointer and drag interaction over the room/hour slot grid.
//!
//! Rows are rooms, columns are fixed time labels. The grid turns pointer
//! gestures into *candidate* create, move and delete operations. A
//! candidate only becomes a [`GridEvent`] after [`SlotGrid::confirm`];
//! [`SlotGrid::cancel`] discards it. Overlap and bounds checks run before
//! a candidate is offered, so a pending candidate is always applicable.
//!
//! ```text
//! Idle --pointer_down--> Selecting --pointer_up--> CreatePending | DeletePending | Idle
//! Idle --drag_start----> Dragging  --drop_on-----> MovePending | Idle
//! *Pending --confirm--> Idle (+ event)     *Pending --cancel--> Idle
//! ```

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Grid cells
// ---------------------------------------------------------------------------

/// One grid cell, optionally tagged with the reservation it displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub row_id: String,
    pub column_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<DbId>,
}

impl Slot {
    pub fn new(row_id: impl Into<String>, column_id: impl Into<String>) -> Self {
        Self {
            row_id: row_id.into(),
            column_id: column_id.into(),
            reservation_id: None,
        }
    }

    pub fn with_reservation(mut self, reservation_id: Option<DbId>) -> Self {
        self.reservation_id = reservation_id;
        self
    }

    /// Cell identity, ignoring the reservation tag.
    pub fn same_cell(&self, other: &Slot) -> bool {
        self.row_id == other.row_id && self.column_id == other.column_id
    }
}

/// A fixed time column of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeColumn {
    pub id: String,
    pub label: String,
}

impl TimeColumn {
    /// One column per hour in `first..=last`, with id and label `"<h>:00"`.
    pub fn hourly(first: u32, last: u32) -> Vec<TimeColumn> {
        (first..=last)
            .map(|h| {
                let id = format!("{h}:00");
                TimeColumn {
                    label: id.clone(),
                    id,
                }
            })
            .collect()
    }
}

/// A confirmed mutation produced by the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GridEvent {
    Create { slots: Vec<Slot> },
    Move { from: Vec<Slot>, to: Vec<Slot> },
    Delete { slots: Vec<Slot> },
}

/// Observable interaction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selecting,
    CreatePending,
    DeletePending,
    Dragging,
    MovePending,
}

#[derive(Debug, Clone)]
enum Interaction {
    Idle,
    Selecting {
        anchor: Slot,
        hovered: Vec<Slot>,
    },
    CreatePending {
        candidate: Vec<Slot>,
    },
    DeletePending {
        candidate: Vec<Slot>,
    },
    Dragging {
        group: Vec<Slot>,
        origin: Slot,
        drop_target: Vec<Slot>,
    },
    MovePending {
        from: Vec<Slot>,
        to: Vec<Slot>,
    },
}

fn contains_cell(slots: &[Slot], slot: &Slot) -> bool {
    slots.iter().any(|s| s.same_cell(slot))
}

fn same_cells(a: &[Slot], b: &[Slot]) -> bool {
    a.len() == b.len() && a.iter().all(|s| contains_cell(b, s))
}

// ---------------------------------------------------------------------------
// SlotGrid
// ---------------------------------------------------------------------------

/// Interaction state for one rendered grid.
#[derive(Debug, Clone)]
pub struct SlotGrid {
    columns: Vec<TimeColumn>,
    allow_cross_row_drop: bool,
    groups: Vec<Vec<Slot>>,
    state: Interaction,
}

impl SlotGrid {
    pub fn new(
        columns: Vec<TimeColumn>,
        initial_groups: Vec<Vec<Slot>>,
        allow_cross_row_drop: bool,
    ) -> Self {
        Self {
            columns,
            allow_cross_row_drop,
            groups: initial_groups,
            state: Interaction::Idle,
        }
    }

    pub fn columns(&self) -> &[TimeColumn] {
        &self.columns
    }

    /// Confirmed groups, including optimistic ones not yet refreshed.
    pub fn groups(&self) -> &[Vec<Slot>] {
        &self.groups
    }

    /// Replace the confirmed groups, e.g. after re-deriving them from a
    /// refreshed reservation list.
    pub fn update_groups(&mut self, groups: Vec<Vec<Slot>>) {
        self.groups = groups;
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            Interaction::Idle => Phase::Idle,
            Interaction::Selecting { .. } => Phase::Selecting,
            Interaction::CreatePending { .. } => Phase::CreatePending,
            Interaction::DeletePending { .. } => Phase::DeletePending,
            Interaction::Dragging { .. } => Phase::Dragging,
            Interaction::MovePending { .. } => Phase::MovePending,
        }
    }

    pub fn is_selected(&self, slot: &Slot) -> bool {
        self.groups.iter().any(|g| contains_cell(g, slot))
    }

    pub fn hovered_slots(&self) -> &[Slot] {
        match &self.state {
            Interaction::Selecting { hovered, .. } => hovered,
            _ => &[],
        }
    }

    pub fn drop_target_slots(&self) -> &[Slot] {
        match &self.state {
            Interaction::Dragging { drop_target, .. } => drop_target,
            _ => &[],
        }
    }

    /// Slots of the pending candidate: the create or delete group, or the
    /// move target.
    pub fn candidate(&self) -> &[Slot] {
        match &self.state {
            Interaction::CreatePending { candidate } | Interaction::DeletePending { candidate } => {
                candidate
            }
            Interaction::MovePending { to, .. } => to,
            _ => &[],
        }
    }

    /// Cell the current drag started from.
    pub fn drag_origin(&self) -> Option<&Slot> {
        match &self.state {
            Interaction::Dragging { origin, .. } => Some(origin),
            _ => None,
        }
    }

    /// Origin group of a pending move.
    pub fn move_origin(&self) -> &[Slot] {
        match &self.state {
            Interaction::MovePending { from, .. } => from,
            _ => &[],
        }
    }

    /// Whether the cell `offset` columns away belongs to the same group as
    /// `slot`. Used to draw joined group borders.
    pub fn has_neighbor(&self, slot: &Slot, offset: isize) -> bool {
        let Some(neighbor) = self.neighbor_column(slot, offset) else {
            return false;
        };
        let probe = Slot::new(slot.row_id.clone(), neighbor);
        self.find_group(slot)
            .is_some_and(|group| contains_cell(group, &probe))
    }

    /// Whether the cell `offset` columns away is part of the hovered range.
    pub fn has_hovered_neighbor(&self, slot: &Slot, offset: isize) -> bool {
        let Some(neighbor) = self.neighbor_column(slot, offset) else {
            return false;
        };
        let probe = Slot::new(slot.row_id.clone(), neighbor);
        contains_cell(self.hovered_slots(), &probe)
    }

    // -----------------------------------------------------------------------
    // Selection gestures
    // -----------------------------------------------------------------------

    /// Start a selection anchored at `slot`. Ignored while a candidate
    /// awaits confirmation.
    pub fn pointer_down(&mut self, slot: &Slot) {
        if self.is_pending() {
            return;
        }
        self.state = Interaction::Selecting {
            anchor: slot.clone(),
            hovered: vec![slot.clone()],
        };
    }

    /// Extend the selection to the contiguous same-row span between the
    /// anchor and `slot`. Cross-row spans collapse to empty.
    pub fn pointer_enter(&mut self, slot: &Slot) {
        let Interaction::Selecting { anchor, .. } = &self.state else {
            return;
        };
        let range = self.range_slots(anchor, slot);
        if let Interaction::Selecting { hovered, .. } = &mut self.state {
            *hovered = range;
        }
    }

    /// Resolve the selection into a create or delete candidate.
    pub fn pointer_up(&mut self, slot: &Slot) {
        if !matches!(self.state, Interaction::Selecting { .. }) {
            return;
        }
        let Interaction::Selecting { hovered, .. } =
            std::mem::replace(&mut self.state, Interaction::Idle)
        else {
            return;
        };

        let slots = if hovered.len() > 1 {
            hovered
        } else if self.is_selected(slot) {
            self.group_of(slot)
        } else {
            vec![slot.clone()]
        };

        if slots.is_empty() {
            return;
        }

        if slots.iter().all(|s| self.is_selected(s)) {
            // Every cell is booked: offer to delete the group holding them.
            if let Some(group) = self
                .groups
                .iter()
                .find(|g| slots.iter().all(|s| contains_cell(g, s)))
            {
                self.state = Interaction::DeletePending {
                    candidate: group.clone(),
                };
            }
            return;
        }

        // Partially booked selections are rejected outright.
        if slots.iter().any(|s| self.is_selected(s)) {
            return;
        }

        self.state = Interaction::CreatePending { candidate: slots };
    }

    // -----------------------------------------------------------------------
    // Drag gestures
    // -----------------------------------------------------------------------

    /// Begin dragging the confirmed group containing `slot`.
    ///
    /// Returns `false` (and changes nothing) when `slot` is not booked or a
    /// candidate is pending.
    pub fn drag_start(&mut self, slot: &Slot) -> bool {
        if self.is_pending() {
            return false;
        }
        let Some(group) = self.find_group(slot).cloned() else {
            return false;
        };
        self.state = Interaction::Dragging {
            group,
            origin: slot.clone(),
            drop_target: Vec::new(),
        };
        true
    }

    /// Whether a drop is currently accepted anywhere on the grid.
    pub fn drag_over(&self) -> bool {
        matches!(self.state, Interaction::Dragging { .. })
    }

    /// Recompute the drop target as a same-length span starting at
    /// `target`. The target clears when the span would leave the grid or
    /// cross rows while cross-row drops are disabled.
    pub fn drag_enter(&mut self, target: &Slot) {
        let Interaction::Dragging { group, .. } = &self.state else {
            return;
        };
        let origin_row = group.first().map(|s| s.row_id.as_str()).unwrap_or_default();
        let reservation_id = group.first().and_then(|s| s.reservation_id);

        let span = if !self.allow_cross_row_drop && target.row_id != origin_row {
            Vec::new()
        } else {
            self.span_from(target, group.len(), reservation_id)
        };

        if let Interaction::Dragging { drop_target, .. } = &mut self.state {
            *drop_target = span;
        }
    }

    /// Finish the drag on `target`, producing a move candidate when the
    /// drop target is valid and free.
    pub fn drop_on(&mut self, target: &Slot) {
        if !matches!(self.state, Interaction::Dragging { .. }) {
            return;
        }
        let Interaction::Dragging {
            group,
            origin,
            drop_target,
        } = std::mem::replace(&mut self.state, Interaction::Idle)
        else {
            return;
        };

        let origin_row = group.first().map(|s| s.row_id.as_str()).unwrap_or(origin.row_id.as_str());
        if !self.allow_cross_row_drop && target.row_id != origin_row {
            return;
        }
        if drop_target.is_empty() {
            return;
        }

        let collides = drop_target
            .iter()
            .any(|s| self.is_selected(s) && !contains_cell(&group, s));
        if collides {
            return;
        }

        self.state = Interaction::MovePending {
            from: group,
            to: drop_target,
        };
    }

    /// Abandon a drag that ended outside any cell.
    pub fn drag_end(&mut self) {
        if matches!(self.state, Interaction::Dragging { .. }) {
            self.state = Interaction::Idle;
        }
    }

    // -----------------------------------------------------------------------
    // Confirmation
    // -----------------------------------------------------------------------

    /// Apply the pending candidate to the confirmed groups and return the
    /// corresponding event. Returns `None` when nothing is pending.
    pub fn confirm(&mut self) -> Option<GridEvent> {
        match std::mem::replace(&mut self.state, Interaction::Idle) {
            Interaction::CreatePending { candidate } => {
                self.groups.push(candidate.clone());
                Some(GridEvent::Create { slots: candidate })
            }
            Interaction::DeletePending { candidate } => {
                self.groups
                    .retain(|g| !candidate.iter().all(|s| contains_cell(g, s)));
                Some(GridEvent::Delete { slots: candidate })
            }
            Interaction::MovePending { from, to } => {
                self.groups.retain(|g| !same_cells(g, &from));
                self.groups.push(to.clone());
                Some(GridEvent::Move { from, to })
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Discard the pending candidate without producing an event.
    pub fn cancel(&mut self) {
        if self.is_pending() {
            self.state = Interaction::Idle;
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn is_pending(&self) -> bool {
        matches!(
            self.state,
            Interaction::CreatePending { .. }
                | Interaction::DeletePending { .. }
                | Interaction::MovePending { .. }
        )
    }

    fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    fn neighbor_column(&self, slot: &Slot, offset: isize) -> Option<&str> {
        let idx = self.column_index(&slot.column_id)?;
        let neighbor = idx.checked_add_signed(offset)?;
        self.columns.get(neighbor).map(|c| c.id.as_str())
    }

    fn find_group(&self, slot: &Slot) -> Option<&Vec<Slot>> {
        self.groups.iter().find(|g| contains_cell(g, slot))
    }

    fn group_of(&self, slot: &Slot) -> Vec<Slot> {
        self.find_group(slot)
            .cloned()
            .unwrap_or_else(|| vec![slot.clone()])
    }

    fn range_slots(&self, start: &Slot, end: &Slot) -> Vec<Slot> {
        if start.row_id != end.row_id {
            return Vec::new();
        }
        let (Some(a), Some(b)) = (
            self.column_index(&start.column_id),
            self.column_index(&end.column_id),
        ) else {
            return Vec::new();
        };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.columns[lo..=hi]
            .iter()
            .map(|c| Slot::new(start.row_id.clone(), c.id.clone()))
            .collect()
    }

    fn span_from(&self, target: &Slot, len: usize, reservation_id: Option<DbId>) -> Vec<Slot> {
        let Some(start) = self.column_index(&target.column_id) else {
            return Vec::new();
        };
        if start + len > self.columns.len() {
            return Vec::new();
        }
        self.columns[start..start + len]
            .iter()
            .map(|c| Slot::new(target.row_id.clone(), c.id.clone()).with_reservation(reservation_id))
            .collect()
    }
}
