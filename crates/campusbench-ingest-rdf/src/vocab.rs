//! IRIs of the benchmark vocabulary.
//!
//! Every domain type and predicate lives under [`BENCH_NS`]; `rdf:type` and
//! `rdfs:label` are the only external terms the loader reads.

pub const BENCH_NS: &str = "http://benchmark/OWL2Bench#";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

// Recognized classes.
pub const TYPE_UNIVERSITY: &str = "http://benchmark/OWL2Bench#University";
pub const TYPE_COLLEGE: &str = "http://benchmark/OWL2Bench#College";
pub const TYPE_WOMEN_COLLEGE: &str = "http://benchmark/OWL2Bench#WomenCollege";
pub const TYPE_DEPARTMENT: &str = "http://benchmark/OWL2Bench#Department";
pub const TYPE_COURSE: &str = "http://benchmark/OWL2Bench#Course";
pub const TYPE_PERSON: &str = "http://benchmark/OWL2Bench#Person";
pub const TYPE_WOMAN: &str = "http://benchmark/OWL2Bench#Woman";
pub const TYPE_MAN: &str = "http://benchmark/OWL2Bench#Man";

// Containment, declared from the parent side...
pub const PRED_HAS_COLLEGE: &str = "http://benchmark/OWL2Bench#hasCollege";
pub const PRED_HAS_WOMEN_COLLEGE: &str = "http://benchmark/OWL2Bench#hasWomenCollege";
pub const PRED_HAS_DEPARTMENT: &str = "http://benchmark/OWL2Bench#hasDepartment";
pub const PRED_OFFER_COURSE: &str = "http://benchmark/OWL2Bench#offerCourse";
pub const PRED_HAS_COURSE: &str = "http://benchmark/OWL2Bench#hasCourse";

// ...and from the child side.
pub const PRED_IS_COLLEGE_OF: &str = "http://benchmark/OWL2Bench#isCollegeOf";
pub const PRED_IS_WOMEN_COLLEGE_OF: &str = "http://benchmark/OWL2Bench#isWomenCollegeOf";
pub const PRED_IS_DEPARTMENT_OF: &str = "http://benchmark/OWL2Bench#isDepartmentOf";

// Person data properties.
pub const PRED_HAS_FIRST_NAME: &str = "http://benchmark/OWL2Bench#hasFirstName";
pub const PRED_HAS_LAST_NAME: &str = "http://benchmark/OWL2Bench#hasLastName";
pub const PRED_HAS_EMAIL_ADDRESS: &str = "http://benchmark/OWL2Bench#hasEmailAddress";
pub const PRED_IS_FROM: &str = "http://benchmark/OWL2Bench#isFrom";
