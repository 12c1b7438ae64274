//! Shift plan and budget models.
//!
//! A [`ShiftPlan`] is the editable, in-memory list of shifts a session builds
//! a quote from. A [`Budget`] is the funding figure used in the opposite
//! direction, to work out how many hours a plan can afford.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{RateType, Recurrence, Shift, ShiftEdit};

/// Total plan funding with a preferred rate category.
///
/// # Example
///
/// ```
/// use support_estimator::models::{Budget, RateType};
/// use rust_decimal::Decimal;
///
/// let budget = Budget::default();
/// assert_eq!(budget.amount, Decimal::new(50_000, 0));
/// assert_eq!(budget.rate_type, RateType::WeekdayDay);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Total funding for the plan period.
    pub amount: Decimal,
    /// The rate category the funding is spent at.
    #[serde(default)]
    pub rate_type: RateType,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            amount: Decimal::new(50_000, 0),
            rate_type: RateType::WeekdayDay,
        }
    }
}

/// An ordered list of planned shifts with stable ids.
///
/// New shifts are placed at the front of the list. Edits addressed to an id
/// that is not in the plan are ignored.
///
/// # Example
///
/// ```
/// use support_estimator::models::ShiftPlan;
/// use chrono::Weekday;
///
/// let mut plan = ShiftPlan::default();
/// let id = plan.add_shift();
/// plan.toggle_day(&id, Weekday::Thu);
///
/// assert_eq!(plan.len(), 2);
/// assert_eq!(plan.shifts()[0].days, vec![Weekday::Mon, Weekday::Thu]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftPlan {
    shifts: Vec<Shift>,
    next_id: u64,
}

impl Default for ShiftPlan {
    /// A plan holding a single four-hour weekday shift on Monday, Wednesday
    /// and Friday.
    fn default() -> Self {
        let shift = Shift {
            id: format_shift_id(1),
            rate_type: RateType::WeekdayDay,
            hours: Decimal::new(4, 0),
            days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            recurrence: Recurrence::Weekly,
        };
        Self {
            shifts: vec![shift],
            next_id: 2,
        }
    }
}

fn format_shift_id(n: u64) -> String {
    format!("shift_{:03}", n)
}

impl ShiftPlan {
    /// Creates an empty plan.
    pub fn empty() -> Self {
        Self {
            shifts: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a plan from existing shifts, keeping their order and ids.
    pub fn from_shifts(shifts: Vec<Shift>) -> Self {
        let next_id = shifts.len() as u64 + 1;
        let mut plan = Self { shifts, next_id };
        plan.skip_taken_ids();
        plan
    }

    /// Returns the shifts in display order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Returns the number of shifts in the plan.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns true if the plan holds no shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Returns the shift with the given id.
    pub fn get(&self, id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    /// Prepends a default shift and returns its id.
    pub fn add_shift(&mut self) -> String {
        self.skip_taken_ids();
        let id = format_shift_id(self.next_id);
        self.next_id += 1;
        self.shifts.insert(0, Shift::new_default(id.clone()));
        id
    }

    /// Removes the shift with the given id, returning it if it was present.
    pub fn remove_shift(&mut self, id: &str) -> Option<Shift> {
        let index = self.shifts.iter().position(|s| s.id == id)?;
        Some(self.shifts.remove(index))
    }

    /// Applies a single-field edit to the shift with the given id.
    ///
    /// Returns false if no shift has that id.
    pub fn update_shift(&mut self, id: &str, edit: ShiftEdit) -> bool {
        match self.shift_mut(id) {
            Some(shift) => {
                shift.apply(edit);
                true
            }
            None => false,
        }
    }

    /// Toggles a weekday on the shift with the given id.
    ///
    /// Returns false if no shift has that id.
    pub fn toggle_day(&mut self, id: &str, day: Weekday) -> bool {
        match self.shift_mut(id) {
            Some(shift) => {
                shift.toggle_day(day);
                true
            }
            None => false,
        }
    }

    fn shift_mut(&mut self, id: &str) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| s.id == id)
    }

    // Ids from `from_shifts` are caller-chosen and may collide with ours.
    fn skip_taken_ids(&mut self) {
        while self
            .shifts
            .iter()
            .any(|s| s.id == format_shift_id(self.next_id))
        {
            self.next_id += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_has_one_shift() {
        let plan = ShiftPlan::default();
        assert_eq!(plan.len(), 1);

        let shift = &plan.shifts()[0];
        assert_eq!(shift.id, "shift_001");
        assert_eq!(shift.hours, Decimal::new(4, 0));
        assert_eq!(
            shift.days,
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
    }

    #[test]
    fn test_add_shift_prepends_with_fresh_id() {
        let mut plan = ShiftPlan::default();
        let id = plan.add_shift();

        assert_eq!(id, "shift_002");
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.shifts()[0].id, "shift_002");
        assert_eq!(plan.shifts()[1].id, "shift_001");
    }

    #[test]
    fn test_remove_shift() {
        let mut plan = ShiftPlan::default();
        let removed = plan.remove_shift("shift_001");

        assert!(removed.is_some());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_remove_unknown_shift_is_noop() {
        let mut plan = ShiftPlan::default();
        assert!(plan.remove_shift("shift_999").is_none());
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_update_shift_changes_only_target() {
        let mut plan = ShiftPlan::default();
        let id = plan.add_shift();

        assert!(plan.update_shift(&id, ShiftEdit::Hours(Decimal::new(6, 0))));

        assert_eq!(plan.get(&id).unwrap().hours, Decimal::new(6, 0));
        assert_eq!(plan.get("shift_001").unwrap().hours, Decimal::new(4, 0));
    }

    #[test]
    fn test_update_unknown_shift_returns_false() {
        let mut plan = ShiftPlan::default();
        assert!(!plan.update_shift("nope", ShiftEdit::RateType(RateType::Sunday)));
    }

    #[test]
    fn test_toggle_day_on_plan() {
        let mut plan = ShiftPlan::default();

        assert!(plan.toggle_day("shift_001", Weekday::Wed));
        assert_eq!(
            plan.get("shift_001").unwrap().days,
            vec![Weekday::Mon, Weekday::Fri]
        );
        assert!(!plan.toggle_day("missing", Weekday::Wed));
    }

    #[test]
    fn test_from_shifts_avoids_id_collisions() {
        let mut plan = ShiftPlan::from_shifts(vec![
            Shift::new_default("shift_002"),
            Shift::new_default("shift_003"),
        ]);

        let id = plan.add_shift();
        assert_ne!(id, "shift_002");
        assert_ne!(id, "shift_003");
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn test_empty_plan_ids_start_at_one() {
        let mut plan = ShiftPlan::empty();
        assert_eq!(plan.add_shift(), "shift_001");
    }
}
