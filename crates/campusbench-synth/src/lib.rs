//! Deterministic synthesis of academic worlds.
//!
//! `WorldSynthesizer` owns one seeded xorshift64* stream and builds a
//! University → College → Department → {Course, Student} forest bottom-up,
//! collecting the flat `World` collections along the way. For a fixed
//! configuration and seed, two runs produce identical worlds; the draw order
//! documented on [`WorldSynthesizer::generate`] is part of the public
//! contract, not an implementation detail.

pub mod config;
pub mod rng;

pub use config::{ConfigError, CountRange, SynthConfig};
pub use rng::XorShift64;

use campusbench_model::{College, Course, Department, Person, Student, StudentLevel, University, World};
use std::sync::Arc;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Jamie", "Taylor", "Jordan", "Casey", "Riley", "Morgan", "Avery", "Quinn", "Cameron",
    "Drew", "Hayden",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia", "Rodriguez",
    "Wilson", "Martinez", "Anderson",
];

// Department and course names cycle positionally; only person names consume
// stream draws.
const DEPARTMENT_NAMES: &[&str] = &[
    "Computer Science",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Psychology",
];

const COURSE_TITLES: &[&str] = &[
    "Intro",
    "Advanced Topics",
    "Seminar",
    "Laboratory",
    "Workshop",
    "Capstone",
];

pub const EMAIL_DOMAIN: &str = "bench.com";

/// Flat collections accumulated while the tree is built, in generation
/// order.
#[derive(Default)]
struct FlatCollections {
    colleges: Vec<Arc<College>>,
    departments: Vec<Arc<Department>>,
    courses: Vec<Arc<Course>>,
    persons: Vec<Arc<Person>>,
    students: Vec<Arc<Student>>,
}

pub struct WorldSynthesizer {
    config: SynthConfig,
    rng: XorShift64,
}

impl WorldSynthesizer {
    pub fn new(config: SynthConfig, seed: u64) -> Self {
        Self {
            config,
            rng: XorShift64::new(seed),
        }
    }

    /// Build a world of `universities` universities.
    ///
    /// Draw order, per university: college count; per college: the
    /// women-only Bernoulli draw, then department count; per department:
    /// course count, undergraduate count, postgraduate count, doctoral
    /// count, then the people draws (first name, last name, and, outside
    /// women-only colleges, one gender flip per person). Reordering any of
    /// these changes every downstream value for a given seed.
    ///
    /// Generating zero universities yields an empty world.
    pub fn generate(&mut self, universities: usize) -> World {
        let mut flats = FlatCollections::default();
        let mut tree = Vec::with_capacity(universities);
        for index in 1..=universities {
            tree.push(self.build_university(index, &mut flats));
        }

        tracing::debug!(
            universities = tree.len(),
            colleges = flats.colleges.len(),
            departments = flats.departments.len(),
            persons = flats.persons.len(),
            "synthetic world generated"
        );

        World {
            universities: tree,
            colleges: flats.colleges,
            departments: flats.departments,
            courses: flats.courses,
            programs: Vec::new(),
            persons: flats.persons,
            students: flats.students,
            employees: Vec::new(),
            research_groups: Vec::new(),
            publications: Vec::new(),
        }
    }

    fn build_university(&mut self, index: usize, flats: &mut FlatCollections) -> Arc<University> {
        let identifier = format!("U{index}");
        let name = format!("University {index}");

        let college_count = self.rng.range_u32(self.config.colleges);
        let mut colleges = Vec::with_capacity(college_count as usize);
        for c_index in 1..=college_count {
            colleges.push(self.build_college(&identifier, c_index, flats));
        }

        Arc::new(University {
            identifier,
            name,
            colleges,
            publications: Vec::new(),
        })
    }

    fn build_college(
        &mut self,
        university_id: &str,
        index: u32,
        flats: &mut FlatCollections,
    ) -> Arc<College> {
        let identifier = format!("{university_id}_C{index}");
        let name = format!("College {index}");
        let is_women_only = self.rng.chance(self.config.women_college_ratio());

        let department_count = self.rng.range_u32(self.config.departments);
        let mut departments = Vec::with_capacity(department_count as usize);
        for d_index in 1..=department_count {
            departments.push(self.build_department(&identifier, d_index, is_women_only, flats));
        }

        let college = Arc::new(College {
            identifier,
            name,
            is_women_only,
            departments,
        });
        flats.colleges.push(Arc::clone(&college));
        college
    }

    fn build_department(
        &mut self,
        college_id: &str,
        index: u32,
        women_only: bool,
        flats: &mut FlatCollections,
    ) -> Arc<Department> {
        let identifier = format!("{college_id}_D{index}");
        let name = DEPARTMENT_NAMES[(index as usize - 1) % DEPARTMENT_NAMES.len()].to_string();

        // All four counts are drawn before any person draw.
        let course_count = self.rng.range_u32(self.config.courses);
        let undergraduate_count = self.rng.range_u32(self.config.undergraduate_students);
        let postgraduate_count = self.rng.range_u32(self.config.postgraduate_students);
        let phd_count = self.rng.range_u32(self.config.phd_students);

        let courses = self.build_courses(&identifier, course_count, flats);
        let undergraduate_students = self.build_students(
            &identifier,
            StudentLevel::Undergraduate,
            undergraduate_count,
            women_only,
            flats,
        );
        let postgraduate_students = self.build_students(
            &identifier,
            StudentLevel::Postgraduate,
            postgraduate_count,
            women_only,
            flats,
        );
        let phd_students = self.build_students(
            &identifier,
            StudentLevel::Doctoral,
            phd_count,
            women_only,
            flats,
        );

        let department = Arc::new(Department {
            identifier,
            name,
            courses,
            programs: Vec::new(),
            undergraduate_students,
            postgraduate_students,
            phd_students,
            employees: Vec::new(),
            research_groups: Vec::new(),
        });
        flats.departments.push(Arc::clone(&department));
        department
    }

    fn build_courses(
        &mut self,
        department_id: &str,
        count: u32,
        flats: &mut FlatCollections,
    ) -> Vec<Arc<Course>> {
        let mut courses = Vec::with_capacity(count as usize);
        for i in 1..=count {
            let identifier = format!("{department_id}_CRS{i}");
            let title = COURSE_TITLES[(i as usize - 1) % COURSE_TITLES.len()].to_string();
            let course = Arc::new(Course { identifier, title });
            flats.courses.push(Arc::clone(&course));
            courses.push(course);
        }
        courses
    }

    fn build_students(
        &mut self,
        department_id: &str,
        level: StudentLevel,
        count: u32,
        women_only: bool,
        flats: &mut FlatCollections,
    ) -> Vec<Arc<Student>> {
        let mut students = Vec::with_capacity(count as usize);
        for i in 1..=count {
            let identifier = format!("{department_id}_{}{i}", level.tag());
            let person = Arc::new(self.build_person(identifier, women_only));
            flats.persons.push(Arc::clone(&person));

            let student = Arc::new(Student::new(person, level));
            flats.students.push(Arc::clone(&student));
            students.push(student);
        }
        students
    }

    fn build_person(&mut self, identifier: String, women_only: bool) -> Person {
        let first_name = self.rng.pick(FIRST_NAMES).to_string();
        let last_name = self.rng.pick(LAST_NAMES).to_string();
        // `||` short-circuits: women-only colleges consume no gender draw.
        let is_woman = women_only || self.rng.coin();
        let email = format!("{}@{EMAIL_DOMAIN}", identifier.to_lowercase());
        Person::new(identifier, first_name, last_name, email, is_woman)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_follow_positional_concatenation() {
        let mut synth = WorldSynthesizer::new(SynthConfig::default(), 1);
        let world = synth.generate(1);

        let university = &world.universities[0];
        assert_eq!(university.identifier, "U1");
        assert_eq!(university.name, "University 1");

        let college = &university.colleges[0];
        assert_eq!(college.identifier, "U1_C1");

        let department = &college.departments[0];
        assert_eq!(department.identifier, "U1_C1_D1");
        assert_eq!(department.name, "Computer Science");

        assert_eq!(department.courses[0].identifier, "U1_C1_D1_CRS1");
        assert_eq!(department.courses[0].title, "Intro");

        let first_ug = &department.undergraduate_students[0];
        assert_eq!(first_ug.identifier(), "U1_C1_D1_UG1");
        assert_eq!(first_ug.level, StudentLevel::Undergraduate);
    }

    #[test]
    fn emails_derive_from_lowercased_identifier() {
        let mut synth = WorldSynthesizer::new(SynthConfig::default(), 3);
        let world = synth.generate(1);
        for person in &world.persons {
            let expected = format!("{}@{EMAIL_DOMAIN}", person.identifier.to_lowercase());
            assert_eq!(person.email, expected);
        }
    }

    #[test]
    fn empty_generation_is_an_empty_world() {
        let mut synth = WorldSynthesizer::new(SynthConfig::default(), 5);
        let world = synth.generate(0);
        assert_eq!(world, World::default());
    }

    #[test]
    fn flat_collections_share_the_tree_nodes() {
        let mut synth = WorldSynthesizer::new(SynthConfig::default(), 8);
        let world = synth.generate(1);

        let first_college = &world.universities[0].colleges[0];
        assert!(Arc::ptr_eq(first_college, &world.colleges[0]));

        let first_department = &first_college.departments[0];
        assert!(Arc::ptr_eq(first_department, &world.departments[0]));
    }
}
