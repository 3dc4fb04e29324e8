// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::v1::crd::CustomResourceDefinition;
use crate::types::v1::status::condition::{Condition, ConditionStatus, ConditionType};
use crate::utils::clock::{Clock, SystemClock};
use kube::ResourceExt;
use tracing::{debug, trace};

impl CustomResourceDefinition {
    /// All status conditions, empty when the status block is absent.
    pub fn conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map(|status| status.conditions.as_slice())
            .unwrap_or_default()
    }

    pub fn find_condition(&self, type_: ConditionType) -> Option<&Condition> {
        self.conditions().iter().find(|c| c.type_ == type_)
    }

    /// Upserts `condition`, taking "now" from the wall clock.
    pub fn set_condition(&mut self, condition: Condition) {
        self.set_condition_with(condition, &SystemClock);
    }

    /// Upserts `condition` by type.
    ///
    /// A new type is appended, stamped with `now` unless it carries its own
    /// time. A time carried by `condition` is always taken as given. Without
    /// one, an existing type keeps its transition time unless the status
    /// changes. Reason and message are always replaced.
    pub fn set_condition_with(&mut self, condition: Condition, clock: &impl Clock) {
        let now = clock.now();
        let name = self.name_any();
        let conditions = &mut self.status.get_or_insert_with(Default::default).conditions;

        let Some(existing) = conditions.iter_mut().find(|c| c.type_ == condition.type_) else {
            debug!(
                crd = %name,
                condition = %condition.type_,
                status = %condition.status,
                "adding condition"
            );
            conditions.push(Condition {
                last_transition_time: condition.last_transition_time.or(Some(now)),
                ..condition
            });
            return;
        };

        if existing.status != condition.status {
            debug!(
                crd = %name,
                condition = %condition.type_,
                from = %existing.status,
                to = %condition.status,
                "condition transitioned"
            );
            existing.status = condition.status;
            existing.last_transition_time = Some(condition.last_transition_time.unwrap_or(now));
        } else {
            existing.last_transition_time = condition
                .last_transition_time
                .or(existing.last_transition_time)
                .or(Some(now));
        }

        existing.reason = condition.reason;
        existing.message = condition.message;
    }

    /// Drops the condition of the given type, keeping the order of the rest.
    pub fn remove_condition(&mut self, type_: ConditionType) {
        let Some(status) = self.status.as_mut() else {
            return;
        };

        let before = status.conditions.len();
        status.conditions.retain(|c| c.type_ != type_);
        if status.conditions.len() != before {
            trace!(crd = %self.name_any(), condition = %type_, "removed condition");
        }
    }

    pub fn is_condition_present_and_equal(
        &self,
        type_: ConditionType,
        status: ConditionStatus,
    ) -> bool {
        self.find_condition(type_)
            .is_some_and(|condition| condition.status == status)
    }

    pub fn is_condition_true(&self, type_: ConditionType) -> bool {
        self.is_condition_present_and_equal(type_, ConditionStatus::True)
    }

    pub fn is_condition_false(&self, type_: ConditionType) -> bool {
        self.is_condition_present_and_equal(type_, ConditionStatus::False)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::tests::{create_test_crd, date, established_true, names_accepted_true};
    use crate::types::v1::status::condition::{Condition, ConditionStatus, ConditionType};
    use crate::utils::clock::FixedClock;

    fn assert_conditions(actual: &[Condition], expected: &[Condition]) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "expected {:?}, got {:?}",
            expected,
            actual
        );
        for (a, e) in actual.iter().zip(expected) {
            assert!(a.is_equivalent(e), "expected {:?}, got {:?}", e, a);
            assert!(
                a.last_transition_time.is_some(),
                "lastTransitionTime should be set: {:?}",
                a
            );
        }
    }

    // Test: status change with an explicit time replaces the single condition in place
    #[test]
    fn test_set_condition_updates_single_condition() {
        let mut crd = create_test_crd(vec![established_true()]);
        let new = Condition::new(
            ConditionType::Established,
            ConditionStatus::False,
            "NotAccepted",
            "Not accepted",
        )
        .with_transition_time(date(2018, 1, 2));

        crd.set_condition_with(new.clone(), &FixedClock(date(2020, 1, 1)));

        assert_conditions(crd.conditions(), &[new]);
        assert_eq!(
            crd.conditions()[0].last_transition_time,
            Some(date(2018, 1, 2))
        );
    }

    // Test: only the matching condition changes when several exist
    #[test]
    fn test_set_condition_updates_matching_of_two() {
        let mut crd = create_test_crd(vec![established_true(), names_accepted_true()]);
        let new = Condition::new(
            ConditionType::NamesAccepted,
            ConditionStatus::False,
            "Conflicts",
            "conflicts found",
        )
        .with_transition_time(date(2018, 1, 2));

        crd.set_condition_with(new.clone(), &FixedClock(date(2020, 1, 1)));

        assert_conditions(crd.conditions(), &[established_true(), new]);
        assert_eq!(
            crd.conditions()[0].last_transition_time,
            Some(date(2018, 1, 1)),
            "untouched condition keeps its time"
        );
    }

    // Test: a new condition type is appended after the existing ones
    #[test]
    fn test_set_condition_appends_new_type() {
        let mut crd = create_test_crd(vec![established_true(), names_accepted_true()]);
        let new = Condition::new(
            ConditionType::Terminating,
            ConditionStatus::False,
            "NeverEstablished",
            "resource was never established",
        )
        .with_transition_time(date(2018, 2, 1));

        crd.set_condition_with(new.clone(), &FixedClock(date(2020, 1, 1)));

        assert_conditions(
            crd.conditions(),
            &[established_true(), names_accepted_true(), new],
        );
        assert_eq!(
            crd.conditions()[2].last_transition_time,
            Some(date(2018, 2, 1))
        );
    }

    // Test: status change without a time is stamped with the clock
    #[test]
    fn test_set_condition_without_time_uses_clock_on_transition() {
        let mut crd = create_test_crd(vec![established_true()]);
        let new = Condition::new(
            ConditionType::Established,
            ConditionStatus::False,
            "NotAccepted",
            "Not accepted",
        );

        crd.set_condition_with(new.clone(), &FixedClock(date(2018, 1, 2)));

        assert_conditions(crd.conditions(), &[new]);
        assert_eq!(
            crd.conditions()[0].last_transition_time,
            Some(date(2018, 1, 2))
        );
    }

    // Test: appended condition without a time is stamped with the clock
    #[test]
    fn test_set_condition_without_time_uses_clock_on_append() {
        let mut crd = create_test_crd(vec![established_true()]);
        let new = Condition::new(
            ConditionType::Terminating,
            ConditionStatus::False,
            "NeverEstablished",
            "resource was never established",
        );

        crd.set_condition_with(new.clone(), &FixedClock(date(2018, 2, 1)));

        assert_conditions(crd.conditions(), &[established_true(), new]);
        assert_eq!(
            crd.conditions()[1].last_transition_time,
            Some(date(2018, 2, 1))
        );
    }

    // Test: upserting the same condition twice does not move the time
    #[test]
    fn test_set_condition_is_idempotent() {
        let mut crd = create_test_crd(vec![]);
        let new = Condition::new(
            ConditionType::Established,
            ConditionStatus::True,
            "InitialNamesAccepted",
            "the initial names have been accepted",
        );

        crd.set_condition_with(new.clone(), &FixedClock(date(2018, 1, 1)));
        crd.set_condition_with(new.clone(), &FixedClock(date(2019, 6, 1)));

        assert_eq!(crd.conditions().len(), 1);
        assert_eq!(
            crd.conditions()[0].last_transition_time,
            Some(date(2018, 1, 1))
        );
    }

    // Test: changing only reason/message keeps the time but replaces the text
    #[test]
    fn test_set_condition_reason_change_keeps_time() {
        let mut crd = create_test_crd(vec![established_true()]);
        let new = Condition::new(
            ConditionType::Established,
            ConditionStatus::True,
            "StillAccepted",
            "names are still accepted",
        );

        crd.set_condition_with(new.clone(), &FixedClock(date(2019, 1, 1)));

        let condition = &crd.conditions()[0];
        assert!(condition.is_equivalent(&new));
        assert_eq!(condition.last_transition_time, Some(date(2018, 1, 1)));
    }

    // Test: explicit time on an unchanged status overrides the existing one
    #[test]
    fn test_set_condition_explicit_time_overrides() {
        let mut crd = create_test_crd(vec![established_true()]);

        crd.set_condition_with(
            established_true().with_transition_time(date(2017, 1, 1)),
            &FixedClock(date(2019, 1, 1)),
        );
        assert_eq!(
            crd.conditions()[0].last_transition_time,
            Some(date(2017, 1, 1))
        );

        crd.set_condition_with(
            established_true().with_transition_time(date(2018, 3, 1)),
            &FixedClock(date(2019, 1, 1)),
        );
        assert_eq!(
            crd.conditions()[0].last_transition_time,
            Some(date(2018, 3, 1))
        );
    }

    // Test: explicit earlier time on a status change is taken as given
    #[test]
    fn test_set_condition_explicit_earlier_time_on_transition() {
        let mut crd = create_test_crd(vec![established_true()]);
        let new = Condition::new(
            ConditionType::Established,
            ConditionStatus::False,
            "NotAccepted",
            "Not accepted",
        )
        .with_transition_time(date(2017, 6, 1));

        crd.set_condition_with(new, &FixedClock(date(2019, 1, 1)));

        assert!(crd.is_condition_false(ConditionType::Established));
        assert_eq!(
            crd.conditions()[0].last_transition_time,
            Some(date(2017, 6, 1))
        );
    }

    // Test: an existing condition with no time gets one on the next upsert
    #[test]
    fn test_set_condition_fills_missing_existing_time() {
        let mut stale = established_true();
        stale.last_transition_time = None;
        let mut crd = create_test_crd(vec![stale]);

        crd.set_condition_with(established_true_untimed(), &FixedClock(date(2018, 5, 5)));

        assert_eq!(
            crd.conditions()[0].last_transition_time,
            Some(date(2018, 5, 5))
        );
    }

    // Test: the status block is created on first upsert
    #[test]
    fn test_set_condition_creates_status() {
        let mut crd = create_test_crd(vec![]);
        crd.status = None;

        crd.set_condition_with(established_true_untimed(), &FixedClock(date(2018, 1, 1)));

        assert!(crd.is_condition_true(ConditionType::Established));
    }

    // Test: removing a present type keeps the remaining order
    #[test]
    fn test_remove_condition_present() {
        let mut crd = create_test_crd(vec![
            established_true(),
            names_accepted_true(),
            Condition::new(
                ConditionType::Terminating,
                ConditionStatus::False,
                "NotTerminating",
                "not terminating",
            )
            .with_transition_time(date(2018, 1, 1)),
        ]);

        crd.remove_condition(ConditionType::NamesAccepted);

        let types: Vec<_> = crd.conditions().iter().map(|c| c.type_).collect();
        assert_eq!(
            types,
            vec![ConditionType::Established, ConditionType::Terminating]
        );
        assert!(
            !crd.is_condition_present_and_equal(
                ConditionType::NamesAccepted,
                ConditionStatus::True
            )
        );
    }

    // Test: removing an absent type is a no-op
    #[test]
    fn test_remove_condition_absent() {
        let mut crd = create_test_crd(vec![established_true(), names_accepted_true()]);

        crd.remove_condition(ConditionType::Terminating);

        assert_conditions(
            crd.conditions(),
            &[established_true(), names_accepted_true()],
        );

        crd.status = None;
        crd.remove_condition(ConditionType::Terminating);
        assert!(crd.status.is_none());
    }

    // Test: presence-and-equality lookups
    #[test]
    fn test_is_condition_present_and_equal() {
        let crd = create_test_crd(vec![established_true(), names_accepted_true()]);

        assert!(!crd.is_condition_present_and_equal(
            ConditionType::Terminating,
            ConditionStatus::True
        ));
        assert!(!crd.is_condition_present_and_equal(
            ConditionType::Established,
            ConditionStatus::False
        ));
        assert!(crd.is_condition_present_and_equal(
            ConditionType::NamesAccepted,
            ConditionStatus::True
        ));

        assert!(crd.is_condition_true(ConditionType::Established));
        assert!(!crd.is_condition_false(ConditionType::Established));
        assert!(!crd.is_condition_false(ConditionType::Terminating));
    }

    #[test]
    fn test_find_condition() {
        let crd = create_test_crd(vec![established_true(), names_accepted_true()]);

        let found = crd
            .find_condition(ConditionType::NamesAccepted)
            .expect("NamesAccepted should be present");
        assert_eq!(found.reason, "NoConflicts");
        assert!(crd.find_condition(ConditionType::Terminating).is_none());
    }

    fn established_true_untimed() -> Condition {
        let mut condition = established_true();
        condition.last_transition_time = None;
        condition
    }
}
