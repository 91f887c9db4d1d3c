//! CampusBench entity model.
//!
//! The shared shapes every other crate operates on: the academic containment
//! hierarchy (University → College → Department → {Course, Student}), the
//! people records with their non-hierarchical relation lists, and the `World`
//! aggregate holding both the nested trees and the flat per-kind collections.
//!
//! Records are assembled bottom-up (children first, then the parent in one
//! step) and never mutated afterwards. A child shared between a parent's
//! nested list and a flat `World` collection is the same `Arc` allocation,
//! which is what makes "resolved once, attached many times" cheap for the
//! producers and observable for the verifier.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// People
// ============================================================================

/// A person known to the world, independent of any academic role.
///
/// The five relation lists are independently tracked named edges; none of
/// them is containment and none is required to be symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub identifier: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_woman: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub knows: Vec<Arc<Person>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub likes: Vec<Arc<Person>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loves: Vec<Arc<Person>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dislikes: Vec<Arc<Person>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub is_crazy_about: Vec<Arc<Person>>,
}

impl Person {
    /// A person with no hometown and empty relation lists. Relation lists are
    /// attached by whoever assembles the world, via struct update syntax.
    pub fn new(
        identifier: String,
        first_name: String,
        last_name: String,
        email: String,
        is_woman: bool,
    ) -> Self {
        Self {
            identifier,
            first_name,
            last_name,
            email,
            is_woman,
            hometown: None,
            knows: Vec::new(),
            likes: Vec::new(),
            loves: Vec::new(),
            dislikes: Vec::new(),
            is_crazy_about: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Academic level of a student.
///
/// `tag()` is the uppercase token used inside generated identifiers;
/// `token()` is the lowercase wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentLevel {
    #[serde(rename = "ug")]
    Undergraduate,
    #[serde(rename = "pg")]
    Postgraduate,
    #[serde(rename = "phd")]
    Doctoral,
}

impl StudentLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            StudentLevel::Undergraduate => "UG",
            StudentLevel::Postgraduate => "PG",
            StudentLevel::Doctoral => "PHD",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            StudentLevel::Undergraduate => "ug",
            StudentLevel::Postgraduate => "pg",
            StudentLevel::Doctoral => "phd",
        }
    }
}

/// A person enrolled at some level, owned by exactly one department's
/// level-specific list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub person: Arc<Person>,
    pub level: StudentLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisors: Vec<Arc<Person>>,
}

impl Student {
    pub fn new(person: Arc<Person>, level: StudentLevel) -> Self {
        Self {
            person,
            level,
            advisors: Vec::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.person.identifier
    }

    pub fn email(&self) -> &str {
        &self.person.email
    }

    pub fn is_woman(&self) -> bool {
        self.person.is_woman
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }
}

/// A person employed by a department (faculty, staff, postdoc, lecturer...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub person: Arc<Person>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
}

impl Employee {
    pub fn new(person: Arc<Person>, role: String, rank: Option<String>) -> Self {
        Self { person, role, rank }
    }

    pub fn identifier(&self) -> &str {
        &self.person.identifier
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }
}

// ============================================================================
// Academic units
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub identifier: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub identifier: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchGroup {
    pub identifier: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Arc<Person>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publications: Vec<Arc<Publication>>,
}

impl ResearchGroup {
    /// A group with no members or publications attached yet.
    pub fn new(identifier: String, name: String) -> Self {
        Self {
            identifier,
            name,
            members: Vec::new(),
            publications: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub identifier: String,
    pub title: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Arc<Person>>,
}

impl Publication {
    /// A publication with no author links attached yet.
    pub fn new(identifier: String, title: String, year: i32) -> Self {
        Self {
            identifier,
            title,
            year,
            authors: Vec::new(),
        }
    }
}

/// Owned by exactly one college; a department appears in that college's
/// department list and in the world's flat department collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub identifier: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<Arc<Course>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub programs: Vec<Arc<Program>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub undergraduate_students: Vec<Arc<Student>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub postgraduate_students: Vec<Arc<Student>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phd_students: Vec<Arc<Student>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub employees: Vec<Arc<Employee>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub research_groups: Vec<Arc<ResearchGroup>>,
}

impl Department {
    /// All students of the department, the three levels chained in order.
    pub fn students(&self) -> impl Iterator<Item = &Arc<Student>> {
        self.undergraduate_students
            .iter()
            .chain(self.postgraduate_students.iter())
            .chain(self.phd_students.iter())
    }
}

/// If `is_women_only` is set, every student of every owned department has
/// `is_woman` true. Producers enforce this at build time; the verifier does
/// not re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub identifier: String,
    pub name: String,
    pub is_women_only: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<Arc<Department>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub identifier: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colleges: Vec<Arc<College>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publications: Vec<Arc<Publication>>,
}

// ============================================================================
// World
// ============================================================================

/// Aggregation root: the nested ownership trees reachable from
/// `universities` plus a flat collection per entity kind.
///
/// A world is never partially valid: it is built only after all nested
/// trees are assembled and the flat collections collected. Identifiers are
/// unique within a kind, not across kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    #[serde(default)]
    pub universities: Vec<Arc<University>>,
    #[serde(default)]
    pub colleges: Vec<Arc<College>>,
    #[serde(default)]
    pub departments: Vec<Arc<Department>>,
    #[serde(default)]
    pub courses: Vec<Arc<Course>>,
    #[serde(default)]
    pub programs: Vec<Arc<Program>>,
    #[serde(default)]
    pub persons: Vec<Arc<Person>>,
    #[serde(default)]
    pub students: Vec<Arc<Student>>,
    #[serde(default)]
    pub employees: Vec<Arc<Employee>>,
    #[serde(default)]
    pub research_groups: Vec<Arc<ResearchGroup>>,
    #[serde(default)]
    pub publications: Vec<Arc<Publication>>,
}
