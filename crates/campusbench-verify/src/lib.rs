//! World invariant verification.
//!
//! Walks an assembled `World` and accumulates every violation found before
//! reporting, so one pass surfaces the complete defect list:
//!
//! 1. identifier uniqueness within each flat collection;
//! 2. non-empty display fields (names, titles, person name/email);
//! 3. single-parent containment down the university/college/department/course
//!    tree, flagging both duplicate containment under one parent and the same
//!    child under two parents;
//! 4. cross-collection presence: everything reachable through the tree must
//!    also sit in the matching flat collection;
//! 5. person relation sanity: every referenced person exists, nobody lists
//!    themselves.
//!
//! Checks 1 and 4 can describe one underlying defect through two messages;
//! they stay independent and both lines are reported.

use campusbench_model::{Person, World};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

/// Aggregate verification report. Carries every violation found in one pass,
/// rendered newline-joined, one human-readable line per violation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .violations.join("\n"))]
pub struct RelationshipError {
    pub violations: Vec<String>,
}

/// Check all world invariants, returning `Ok(())` or the full violation list.
pub fn verify_world(world: &World) -> Result<(), RelationshipError> {
    let mut problems: Vec<String> = Vec::new();

    // 1) Uniqueness per kind
    check_unique(
        world.universities.iter().map(|u| u.identifier.as_str()),
        "University",
        &mut problems,
    );
    check_unique(
        world.colleges.iter().map(|c| c.identifier.as_str()),
        "College",
        &mut problems,
    );
    check_unique(
        world.departments.iter().map(|d| d.identifier.as_str()),
        "Department",
        &mut problems,
    );
    check_unique(
        world.courses.iter().map(|c| c.identifier.as_str()),
        "Course",
        &mut problems,
    );
    check_unique(
        world.persons.iter().map(|p| p.identifier.as_str()),
        "Person",
        &mut problems,
    );

    // 2) Non-empty display fields
    for u in &world.universities {
        if u.name.is_empty() {
            problems.push(format!("University {} has empty name", u.identifier));
        }
    }
    for c in &world.colleges {
        if c.name.is_empty() {
            problems.push(format!("College {} has empty name", c.identifier));
        }
    }
    for d in &world.departments {
        if d.name.is_empty() {
            problems.push(format!("Department {} has empty name", d.identifier));
        }
    }
    for crs in &world.courses {
        if crs.title.is_empty() {
            problems.push(format!("Course {} has empty title", crs.identifier));
        }
    }
    for p in &world.persons {
        if p.first_name.is_empty() || p.last_name.is_empty() || p.email.is_empty() {
            problems.push(format!("Person {} has missing required fields", p.identifier));
        }
    }

    // 3) Single-parent containment
    let mut college_parent: HashMap<&str, &str> = HashMap::new();
    for u in &world.universities {
        let mut seen: HashSet<&str> = HashSet::new();
        for c in &u.colleges {
            if !seen.insert(c.identifier.as_str()) {
                problems.push(format!(
                    "Duplicate college {} under university {}",
                    c.identifier, u.identifier
                ));
            }
            match college_parent.get(c.identifier.as_str()) {
                Some(previous) => problems.push(format!(
                    "College {} appears under multiple universities: {} and {}",
                    c.identifier, previous, u.identifier
                )),
                None => {
                    college_parent.insert(c.identifier.as_str(), u.identifier.as_str());
                }
            }
        }
    }

    let mut department_parent: HashMap<&str, &str> = HashMap::new();
    for c in &world.colleges {
        let mut seen: HashSet<&str> = HashSet::new();
        for d in &c.departments {
            if !seen.insert(d.identifier.as_str()) {
                problems.push(format!(
                    "Duplicate department {} under college {}",
                    d.identifier, c.identifier
                ));
            }
            match department_parent.get(d.identifier.as_str()) {
                Some(previous) => problems.push(format!(
                    "Department {} appears under multiple colleges: {} and {}",
                    d.identifier, previous, c.identifier
                )),
                None => {
                    department_parent.insert(d.identifier.as_str(), c.identifier.as_str());
                }
            }
        }
    }

    let mut course_parent: HashMap<&str, &str> = HashMap::new();
    for d in &world.departments {
        let mut seen: HashSet<&str> = HashSet::new();
        for crs in &d.courses {
            if !seen.insert(crs.identifier.as_str()) {
                problems.push(format!(
                    "Duplicate course {} under department {}",
                    crs.identifier, d.identifier
                ));
            }
            match course_parent.get(crs.identifier.as_str()) {
                Some(previous) => problems.push(format!(
                    "Course {} appears under multiple departments: {} and {}",
                    crs.identifier, previous, d.identifier
                )),
                None => {
                    course_parent.insert(crs.identifier.as_str(), d.identifier.as_str());
                }
            }
        }
    }

    // 4) Cross-collection presence
    let world_colleges: HashSet<&str> =
        world.colleges.iter().map(|c| c.identifier.as_str()).collect();
    let world_departments: HashSet<&str> = world
        .departments
        .iter()
        .map(|d| d.identifier.as_str())
        .collect();
    let world_courses: HashSet<&str> =
        world.courses.iter().map(|c| c.identifier.as_str()).collect();

    for u in &world.universities {
        for c in &u.colleges {
            if !world_colleges.contains(c.identifier.as_str()) {
                problems.push(format!(
                    "College {} under university {} is not in world.colleges",
                    c.identifier, u.identifier
                ));
            }
        }
    }
    for c in &world.colleges {
        for d in &c.departments {
            if !world_departments.contains(d.identifier.as_str()) {
                problems.push(format!(
                    "Department {} under college {} is not in world.departments",
                    d.identifier, c.identifier
                ));
            }
        }
    }
    for d in &world.departments {
        for crs in &d.courses {
            if !world_courses.contains(crs.identifier.as_str()) {
                problems.push(format!(
                    "Course {} under department {} is not in world.courses",
                    crs.identifier, d.identifier
                ));
            }
        }
    }

    // 5) Person relationship sanity
    let person_ids: HashSet<&str> =
        world.persons.iter().map(|p| p.identifier.as_str()).collect();
    for p in &world.persons {
        check_relations(p, "knows", &p.knows, &person_ids, &mut problems);
        check_relations(p, "likes", &p.likes, &person_ids, &mut problems);
        check_relations(p, "loves", &p.loves, &person_ids, &mut problems);
        check_relations(p, "dislikes", &p.dislikes, &person_ids, &mut problems);
        check_relations(
            p,
            "is_crazy_about",
            &p.is_crazy_about,
            &person_ids,
            &mut problems,
        );
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(RelationshipError {
            violations: problems,
        })
    }
}

fn check_unique<'a>(ids: impl Iterator<Item = &'a str>, kind: &str, problems: &mut Vec<String>) {
    let mut seen: HashSet<&str> = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            problems.push(format!("Duplicate {kind} identifier: {id}"));
        }
    }
}

fn check_relations(
    owner: &Person,
    relation: &str,
    others: &[Arc<Person>],
    person_ids: &HashSet<&str>,
    problems: &mut Vec<String>,
) {
    for other in others {
        if !person_ids.contains(other.identifier.as_str()) {
            problems.push(format!(
                "Person {} has {relation} that is not in world.persons: {}",
                owner.identifier, other.identifier
            ));
        }
        if other.identifier == owner.identifier {
            problems.push(format!("Person {} has self in {relation}", owner.identifier));
        }
    }
}
