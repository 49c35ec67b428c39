//! Stock school layout used by the demo store.

use rayon::prelude::*;

use super::models::{GradeSeed, LevelSeed};

const NURSERY_GRADES: [&str; 3] = ["Baby", "Middle", "Top"];
const PRIMARY_GRADES: [&str; 6] = ["P1", "P2", "P3", "P4", "P5", "P6"];
const O_LEVEL_GRADES: [&str; 4] = ["S1", "S2", "S3", "S4"];
const A_LEVEL_GRADES: [&str; 2] = ["S5", "S6"];

const PRIMARY_SECTIONS: [&str; 2] = ["A", "B"];
const O_LEVEL_SECTIONS: [&str; 3] = ["A", "B", "C"];
const A_LEVEL_COMBINATIONS: [&str; 5] = ["MCB", "PCB", "MEG", "HEG", "PEM"];

/// Layout of one level: name, grade names, sections and streams per grade.
struct LevelLayout {
    name: &'static str,
    grades: &'static [&'static str],
    sections: &'static [&'static str],
    combinations: &'static [&'static str],
}

const LAYOUT: [LevelLayout; 4] = [
    LevelLayout {
        name: "Nursery",
        grades: &NURSERY_GRADES,
        sections: &[],
        combinations: &[],
    },
    LevelLayout {
        name: "Primary",
        grades: &PRIMARY_GRADES,
        sections: &PRIMARY_SECTIONS,
        combinations: &[],
    },
    LevelLayout {
        name: "O-Level",
        grades: &O_LEVEL_GRADES,
        sections: &O_LEVEL_SECTIONS,
        combinations: &[],
    },
    LevelLayout {
        name: "A-Level",
        grades: &A_LEVEL_GRADES,
        sections: &[],
        combinations: &A_LEVEL_COMBINATIONS,
    },
];

/// Generates the stock hierarchy: Nursery, Primary (P1-P6 with A/B),
/// O-Level (S1-S4 with A/B/C) and A-Level (S5-S6 with five combinations).
pub fn generate_hierarchy() -> Vec<LevelSeed> {
    LAYOUT
        .par_iter()
        .map(|layout| LevelSeed {
            name: layout.name.to_string(),
            grades: layout
                .grades
                .iter()
                .map(|&grade| {
                    GradeSeed::bare(grade)
                        .with_sub_grades(layout.sections)
                        .with_combinations(layout.combinations)
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_keep_layout_order() {
        let names: Vec<String> = generate_hierarchy().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Nursery", "Primary", "O-Level", "A-Level"]);
    }

    #[test]
    fn test_no_grade_mixes_sections_and_streams() {
        for level in generate_hierarchy() {
            for grade in &level.grades {
                assert!(
                    grade.sub_grades.is_empty() || grade.combinations.is_empty(),
                    "{} {} mixes both expansions",
                    level.name,
                    grade.name
                );
            }
        }
    }

    #[test]
    fn test_expected_class_counts() {
        let counts: Vec<usize> = generate_hierarchy()
            .iter()
            .map(LevelSeed::expected_class_count)
            .collect();
        // 3 bare, 6x2, 4x3, 2x5
        assert_eq!(counts, vec![3, 12, 12, 10]);
    }
}
