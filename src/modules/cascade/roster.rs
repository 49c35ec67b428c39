//! Student counts consumed by the cascade analyzer.
//!
//! The engine does not own enrolment data. It asks a [`StudentCounts`]
//! source for the number of students under a node id; [`Roster`] is the
//! in-memory implementation used by the demo seeder and tests.

use std::collections::{HashMap, HashSet};

use classtree_models::{DerivedClass, DerivedClassId, GradeId};
use uuid::Uuid;

use crate::store::ClassesStore;

/// Lookup of students enrolled under a hierarchy node or derived class.
pub trait StudentCounts {
    /// Students under `node_id`; unknown ids count as zero.
    fn student_count_for(&self, node_id: Uuid) -> u64;
}

impl StudentCounts for HashMap<Uuid, u64> {
    fn student_count_for(&self, node_id: Uuid) -> u64 {
        self.get(&node_id).copied().unwrap_or(0)
    }
}

/// Per-node enrolment aggregated from class sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    counts: HashMap<Uuid, u64>,
}

impl StudentCounts for Roster {
    fn student_count_for(&self, node_id: Uuid) -> u64 {
        self.counts.student_count_for(node_id)
    }
}

impl Roster {
    /// Classes that hold their own students.
    ///
    /// A combination-only class in a grade that also has sub-grades is a
    /// roster view over its paired sections and is left out.
    pub fn enrollable_classes(store: &ClassesStore) -> Vec<&DerivedClass> {
        let sectioned = sectioned_grades(store);
        store
            .derived_classes()
            .iter()
            .filter(|c| !(c.is_combination_only() && sectioned.contains(&c.grade_id)))
            .collect()
    }

    /// Aggregate class sizes up the hierarchy.
    ///
    /// Each enrollable class adds its size to itself, its sub-grade,
    /// combination, grade and level. Paired classes also feed their
    /// combination-only roster view. Sizes given for roster views or for
    /// classes not in the store are ignored.
    pub fn from_class_sizes<I>(store: &ClassesStore, sizes: I) -> Self
    where
        I: IntoIterator<Item = (DerivedClassId, u64)>,
    {
        let sizes: HashMap<DerivedClassId, u64> = sizes.into_iter().collect();
        let mut roster = Self::default();

        for class in Self::enrollable_classes(store) {
            let Some(&size) = sizes.get(&class.id) else {
                continue;
            };

            roster.add(class.id.into_inner(), size);
            roster.add(class.grade_id.into_inner(), size);
            roster.add(class.level_id.into_inner(), size);
            if let Some(sub_grade_id) = class.sub_grade_id {
                roster.add(sub_grade_id.into_inner(), size);
            }
            if let Some(combination_id) = class.combination_id {
                roster.add(combination_id.into_inner(), size);
                if class.sub_grade_id.is_some() {
                    let view = DerivedClassId::derive(class.grade_id, None, Some(combination_id));
                    roster.add(view.into_inner(), size);
                }
            }
        }

        roster
    }

    fn add(&mut self, node_id: Uuid, students: u64) {
        *self.counts.entry(node_id).or_insert(0) += students;
    }
}

fn sectioned_grades(store: &ClassesStore) -> HashSet<GradeId> {
    store
        .grades()
        .filter(|g| g.has_sub_grades())
        .map(|g| g.id)
        .collect()
}
