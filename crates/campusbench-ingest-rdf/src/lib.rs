//! RDF world loading (boundary adapter).
//!
//! Parses a benchmark fact-graph (N-Triples, Turtle, or RDF/XML via Sophia)
//! into the shared `World` shape:
//!
//! - universities are found by `rdf:type`; their colleges, departments and
//!   courses via the containment predicates, declared from either side
//!   (direct and inverse forms are unioned);
//! - every discovered node is resolved once through an identity-keyed
//!   lookup, so a node referenced from several parents maps to one `Arc`
//!   instance; shared parentage is left for the verifier to flag;
//! - persons are scanned independently of the university walk; their name
//!   and email properties are required and fail the load with a
//!   [`MappingError`], while missing labels elsewhere fall back to the
//!   node's short identifier. The course-title fallback is additionally
//!   reported through the returned warning list.

pub mod vocab;

use anyhow::{anyhow, Result};
use campusbench_model::{College, Course, Department, Person, University, World};
use serde::{Deserialize, Serialize};
use sophia::api::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// RDF term model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RdfNode {
    Iri(String),
    BlankNode(String),
}

impl RdfNode {
    /// Short identifier: the fragment or last path segment of an IRI, or the
    /// blank node label.
    pub fn short_identifier(&self) -> String {
        match self {
            RdfNode::Iri(iri) => local_name(iri).to_string(),
            RdfNode::BlankNode(label) => label.clone(),
        }
    }
}

impl fmt::Display for RdfNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfNode::Iri(iri) => write!(f, "{iri}"),
            RdfNode::BlankNode(label) => write!(f, "_:{label}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RdfLiteral {
    pub lexical: String,
    pub datatype: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RdfObject {
    Node(RdfNode),
    Literal(RdfLiteral),
}

#[derive(Debug, Clone)]
pub struct RdfStatement {
    pub subject: RdfNode,
    pub predicate_iri: String,
    pub object: RdfObject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    NTriples,
    Turtle,
    RdfXml,
}

impl RdfFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?.to_lowercase();
        match ext.as_str() {
            "nt" | "ntriples" => Some(RdfFormat::NTriples),
            "ttl" | "turtle" => Some(RdfFormat::Turtle),
            "rdf" | "owl" | "xml" => Some(RdfFormat::RdfXml),
            _ => None,
        }
    }
}

fn local_name(iri: &str) -> &str {
    iri.rsplit(['#', '/']).next().unwrap_or(iri)
}

// ============================================================================
// Statement parsing (Sophia)
// ============================================================================

#[derive(Debug, Error)]
#[error("{message}")]
struct RdfSinkError {
    message: String,
}

impl From<anyhow::Error> for RdfSinkError {
    fn from(value: anyhow::Error) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

fn unescape_rdf_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Re-parse a term's N-Triples-ish display form into the local term model.
fn parse_term_display(term: &str) -> Result<RdfObject> {
    let s = term.trim();

    if let Some(rest) = s.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        return Ok(RdfObject::Node(RdfNode::Iri(rest.to_string())));
    }

    if let Some(rest) = s.strip_prefix("_:") {
        return Ok(RdfObject::Node(RdfNode::BlankNode(rest.to_string())));
    }

    if s.starts_with('"') {
        let mut end_quote = None;
        let mut prev_was_escape = false;
        for (i, ch) in s.char_indices().skip(1) {
            if ch == '"' && !prev_was_escape {
                end_quote = Some(i);
                break;
            }
            prev_was_escape = ch == '\\' && !prev_was_escape;
            if ch != '\\' {
                prev_was_escape = false;
            }
        }
        let Some(end) = end_quote else {
            return Err(anyhow!("invalid literal term (missing closing quote): {s}"));
        };

        let lexical = unescape_rdf_string(&s[1..end]);
        let rest = s[end + 1..].trim();

        let mut language = None;
        let mut datatype = None;
        if let Some(lang) = rest.strip_prefix('@') {
            language = Some(lang.to_string());
        } else if let Some(dt) = rest.strip_prefix("^^") {
            let dt = dt.trim();
            if let Some(dt_iri) = dt.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
                datatype = Some(dt_iri.to_string());
            } else if !dt.is_empty() {
                datatype = Some(dt.to_string());
            }
        }

        return Ok(RdfObject::Literal(RdfLiteral {
            lexical,
            datatype,
            language,
        }));
    }

    Err(anyhow!("unsupported RDF term form: {s}"))
}

fn parse_node_term_display(term: &str) -> Result<RdfNode> {
    match parse_term_display(term)? {
        RdfObject::Node(node) => Ok(node),
        RdfObject::Literal(_) => Err(anyhow!("expected IRI/blank node, got literal: {term}")),
    }
}

fn parse_statements(bytes: &[u8], format: RdfFormat) -> Result<Vec<RdfStatement>> {
    let cursor = std::io::Cursor::new(bytes);
    let reader = std::io::BufReader::new(cursor);

    let mut out: Vec<RdfStatement> = Vec::new();
    let mut push = |s: String, p: String, o: String| -> std::result::Result<(), RdfSinkError> {
        let subject = parse_node_term_display(&s).map_err(RdfSinkError::from)?;
        let predicate = parse_node_term_display(&p).map_err(RdfSinkError::from)?;
        // Predicates are always IRIs; anything else is skipped, not fatal.
        let RdfNode::Iri(predicate_iri) = predicate else {
            return Ok(());
        };
        let object = parse_term_display(&o).map_err(RdfSinkError::from)?;
        out.push(RdfStatement {
            subject,
            predicate_iri,
            object,
        });
        Ok(())
    };

    match format {
        RdfFormat::NTriples => {
            let mut parser = sophia::turtle::parser::nt::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| push(t.s().to_string(), t.p().to_string(), t.o().to_string()))
                .map_err(|e| anyhow!("failed to parse N-Triples: {e}"))?;
        }
        RdfFormat::Turtle => {
            let mut parser = sophia::turtle::parser::turtle::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| push(t.s().to_string(), t.p().to_string(), t.o().to_string()))
                .map_err(|e| anyhow!("failed to parse Turtle: {e}"))?;
        }
        RdfFormat::RdfXml => {
            let mut parser = sophia::xml::parser::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| push(t.s().to_string(), t.p().to_string(), t.o().to_string()))
                .map_err(|e| anyhow!("failed to parse RDF/XML: {e}"))?;
        }
    }

    Ok(out)
}

// ============================================================================
// Fact-graph index
// ============================================================================

/// Indexed view over the parsed statements, covering the lookup patterns the
/// extraction walk needs. First-statement order is preserved wherever
/// iteration order is observable.
#[derive(Debug, Default)]
pub struct FactGraph {
    types_by_node: HashMap<RdfNode, HashSet<String>>,
    nodes_by_type: HashMap<String, Vec<RdfNode>>,
    literals: HashMap<RdfNode, HashMap<String, Vec<RdfLiteral>>>,
    forward: HashMap<RdfNode, HashMap<String, Vec<RdfNode>>>,
    inverse: HashMap<String, HashMap<RdfNode, Vec<RdfNode>>>,
}

impl FactGraph {
    pub fn from_statements(statements: &[RdfStatement]) -> Self {
        let mut graph = FactGraph::default();
        for stmt in statements {
            match &stmt.object {
                RdfObject::Node(object) if stmt.predicate_iri == vocab::RDF_TYPE => {
                    if let RdfNode::Iri(type_iri) = object {
                        let newly_typed = graph
                            .types_by_node
                            .entry(stmt.subject.clone())
                            .or_default()
                            .insert(type_iri.clone());
                        if newly_typed {
                            graph
                                .nodes_by_type
                                .entry(type_iri.clone())
                                .or_default()
                                .push(stmt.subject.clone());
                        }
                    }
                }
                RdfObject::Node(object) => {
                    graph
                        .forward
                        .entry(stmt.subject.clone())
                        .or_default()
                        .entry(stmt.predicate_iri.clone())
                        .or_default()
                        .push(object.clone());
                    graph
                        .inverse
                        .entry(stmt.predicate_iri.clone())
                        .or_default()
                        .entry(object.clone())
                        .or_default()
                        .push(stmt.subject.clone());
                }
                RdfObject::Literal(lit) => {
                    graph
                        .literals
                        .entry(stmt.subject.clone())
                        .or_default()
                        .entry(stmt.predicate_iri.clone())
                        .or_default()
                        .push(lit.clone());
                }
            }
        }
        graph
    }

    /// Nodes carrying `rdf:type <type_iri>`, in first-statement order.
    pub fn nodes_with_type(&self, type_iri: &str) -> &[RdfNode] {
        self.nodes_by_type
            .get(type_iri)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_type(&self, node: &RdfNode, type_iri: &str) -> bool {
        self.types_by_node
            .get(node)
            .map_or(false, |types| types.contains(type_iri))
    }

    /// Object nodes of `(subject, predicate, ?)` statements.
    pub fn node_objects(&self, subject: &RdfNode, predicate: &str) -> &[RdfNode] {
        self.forward
            .get(subject)
            .and_then(|by_pred| by_pred.get(predicate))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Subject nodes of `(?, predicate, object)` statements.
    pub fn subjects_of(&self, predicate: &str, object: &RdfNode) -> &[RdfNode] {
        self.inverse
            .get(predicate)
            .and_then(|by_object| by_object.get(object))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn first_literal(&self, subject: &RdfNode, predicate: &str) -> Option<&RdfLiteral> {
        self.literals
            .get(subject)
            .and_then(|by_pred| by_pred.get(predicate))
            .and_then(|values| values.first())
    }

    pub fn label(&self, node: &RdfNode) -> Option<&str> {
        self.first_literal(node, vocab::RDFS_LABEL)
            .map(|lit| lit.lexical.as_str())
    }
}

// ============================================================================
// Errors and warnings
// ============================================================================

/// A required fact is absent for a discovered entity. Always fatal to the
/// load; never recovered or defaulted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("missing required data property {property} for subject {subject}")]
    MissingRequiredProperty { property: String, subject: String },
    #[error("missing gender class (Woman/Man) for person {subject}; cannot map required field is_woman")]
    MissingGender { subject: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported RDF extension for {} (expected .nt, .ttl, .owl, .rdf or .xml)", .path.display())]
    UnsupportedExtension { path: PathBuf },
    #[error("failed to parse RDF from {path}: {message}")]
    Parse { path: String, message: String },
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Non-fatal degraded-data signals collected while loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// The course carried no label; its derived identifier was used as the
    /// title.
    CourseTitleFallback { course: String, title: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::CourseTitleFallback { course, title } => {
                write!(f, "course {course} has no label; used {title} as title")
            }
        }
    }
}

/// A successfully loaded world together with its degraded-data warnings.
#[derive(Debug)]
pub struct LoadedWorld {
    pub world: World,
    pub warnings: Vec<LoadWarning>,
}

// ============================================================================
// World extraction
// ============================================================================

/// Identity-keyed lookup populated at first discovery. The paired vector
/// keeps first-discovery order for the flat collections.
struct Resolved<T> {
    by_node: HashMap<RdfNode, Arc<T>>,
    in_order: Vec<Arc<T>>,
}

impl<T> Default for Resolved<T> {
    fn default() -> Self {
        Self {
            by_node: HashMap::new(),
            in_order: Vec::new(),
        }
    }
}

impl<T> Resolved<T> {
    fn get(&self, node: &RdfNode) -> Option<Arc<T>> {
        self.by_node.get(node).map(Arc::clone)
    }

    fn insert(&mut self, node: RdfNode, value: T) -> Arc<T> {
        let value = Arc::new(value);
        self.by_node.insert(node, Arc::clone(&value));
        self.in_order.push(Arc::clone(&value));
        value
    }

    fn into_ordered(self) -> Vec<Arc<T>> {
        self.in_order
    }
}

struct Extraction<'g> {
    graph: &'g FactGraph,
    colleges: Resolved<College>,
    departments: Resolved<Department>,
    courses: Resolved<Course>,
    persons: Resolved<Person>,
    warnings: Vec<LoadWarning>,
}

impl<'g> Extraction<'g> {
    fn new(graph: &'g FactGraph) -> Self {
        Self {
            graph,
            colleges: Resolved::default(),
            departments: Resolved::default(),
            courses: Resolved::default(),
            persons: Resolved::default(),
            warnings: Vec::new(),
        }
    }

    fn run(mut self) -> std::result::Result<LoadedWorld, MappingError> {
        let graph = self.graph;
        let mut universities = Vec::new();
        for node in graph.nodes_with_type(vocab::TYPE_UNIVERSITY) {
            universities.push(self.build_university(node));
        }
        self.resolve_persons()?;

        let world = World {
            universities,
            colleges: self.colleges.into_ordered(),
            departments: self.departments.into_ordered(),
            courses: self.courses.into_ordered(),
            programs: Vec::new(),
            persons: self.persons.into_ordered(),
            students: Vec::new(),
            employees: Vec::new(),
            research_groups: Vec::new(),
            publications: Vec::new(),
        };
        Ok(LoadedWorld {
            world,
            warnings: self.warnings,
        })
    }

    fn build_university(&mut self, node: &RdfNode) -> Arc<University> {
        let identifier = node.short_identifier();
        let name = self.display_name(node, &identifier);

        let college_nodes = self.candidates(
            node,
            &[vocab::PRED_HAS_COLLEGE, vocab::PRED_HAS_WOMEN_COLLEGE],
            &[vocab::PRED_IS_COLLEGE_OF, vocab::PRED_IS_WOMEN_COLLEGE_OF],
        );
        let mut colleges = Vec::with_capacity(college_nodes.len());
        for college_node in &college_nodes {
            colleges.push(self.resolve_college(college_node));
        }

        Arc::new(University {
            identifier,
            name,
            colleges,
            publications: Vec::new(),
        })
    }

    /// Union of direct objects and inverse subjects, ordered by term so the
    /// walk is deterministic for a given file.
    fn candidates(&self, parent: &RdfNode, direct: &[&str], inverse: &[&str]) -> Vec<RdfNode> {
        let mut found: BTreeSet<RdfNode> = BTreeSet::new();
        for predicate in direct {
            found.extend(self.graph.node_objects(parent, predicate).iter().cloned());
        }
        for predicate in inverse {
            found.extend(self.graph.subjects_of(predicate, parent).iter().cloned());
        }
        found.into_iter().collect()
    }

    /// Label if present, otherwise the derived fallback. Silent: university,
    /// college, and department names degrade without a signal.
    fn display_name(&self, node: &RdfNode, fallback: &str) -> String {
        match self.graph.label(node) {
            Some(label) => label.to_string(),
            None => fallback.to_string(),
        }
    }

    fn resolve_college(&mut self, node: &RdfNode) -> Arc<College> {
        if let Some(existing) = self.colleges.get(node) {
            return existing;
        }
        let identifier = node.short_identifier();
        let name = self.display_name(node, &identifier);
        let is_women_only = self.graph.has_type(node, vocab::TYPE_WOMEN_COLLEGE);

        let department_nodes = self.candidates(
            node,
            &[vocab::PRED_HAS_DEPARTMENT],
            &[vocab::PRED_IS_DEPARTMENT_OF],
        );
        let mut departments = Vec::with_capacity(department_nodes.len());
        for department_node in &department_nodes {
            departments.push(self.resolve_department(department_node));
        }

        self.colleges.insert(
            node.clone(),
            College {
                identifier,
                name,
                is_women_only,
                departments,
            },
        )
    }

    fn resolve_department(&mut self, node: &RdfNode) -> Arc<Department> {
        if let Some(existing) = self.departments.get(node) {
            return existing;
        }
        let identifier = node.short_identifier();
        let name = self.display_name(node, &identifier);

        let course_nodes = self.candidates(
            node,
            &[vocab::PRED_OFFER_COURSE, vocab::PRED_HAS_COURSE],
            &[],
        );
        let mut courses = Vec::with_capacity(course_nodes.len());
        for course_node in &course_nodes {
            courses.push(self.resolve_course(course_node));
        }

        self.departments.insert(
            node.clone(),
            Department {
                identifier,
                name,
                courses,
                programs: Vec::new(),
                undergraduate_students: Vec::new(),
                postgraduate_students: Vec::new(),
                phd_students: Vec::new(),
                employees: Vec::new(),
                research_groups: Vec::new(),
            },
        )
    }

    fn resolve_course(&mut self, node: &RdfNode) -> Arc<Course> {
        if let Some(existing) = self.courses.get(node) {
            return existing;
        }
        let identifier = node.short_identifier();
        let title = match self.graph.label(node) {
            Some(label) => label.to_string(),
            None => {
                tracing::warn!(
                    course = %identifier,
                    "course has no label; falling back to its identifier as title"
                );
                self.warnings.push(LoadWarning::CourseTitleFallback {
                    course: identifier.clone(),
                    title: identifier.clone(),
                });
                identifier.clone()
            }
        };
        self.courses.insert(node.clone(), Course { identifier, title })
    }

    /// Scan every node typed Person, Woman, or Man (the union; a node does
    /// not need all three).
    fn resolve_persons(&mut self) -> std::result::Result<(), MappingError> {
        let graph = self.graph;
        for type_iri in [vocab::TYPE_PERSON, vocab::TYPE_WOMAN, vocab::TYPE_MAN] {
            for node in graph.nodes_with_type(type_iri) {
                if self.persons.get(node).is_some() {
                    continue;
                }
                let person = self.build_person(node)?;
                self.persons.insert(node.clone(), person);
            }
        }
        Ok(())
    }

    fn build_person(&self, node: &RdfNode) -> std::result::Result<Person, MappingError> {
        let first_name = self.require_literal(node, vocab::PRED_HAS_FIRST_NAME, "hasFirstName")?;
        let last_name = self.require_literal(node, vocab::PRED_HAS_LAST_NAME, "hasLastName")?;
        let email = self.require_literal(node, vocab::PRED_HAS_EMAIL_ADDRESS, "hasEmailAddress")?;

        let is_woman = if self.graph.has_type(node, vocab::TYPE_WOMAN) {
            true
        } else if self.graph.has_type(node, vocab::TYPE_MAN) {
            false
        } else {
            return Err(MappingError::MissingGender {
                subject: node.to_string(),
            });
        };

        // Optional, silently absent. A literal object wins; an IRI object
        // degrades to its short identifier.
        let hometown = self
            .graph
            .first_literal(node, vocab::PRED_IS_FROM)
            .map(|lit| lit.lexical.clone())
            .or_else(|| {
                self.graph
                    .node_objects(node, vocab::PRED_IS_FROM)
                    .first()
                    .map(RdfNode::short_identifier)
            });

        Ok(Person {
            hometown,
            ..Person::new(node.short_identifier(), first_name, last_name, email, is_woman)
        })
    }

    fn require_literal(
        &self,
        node: &RdfNode,
        predicate: &str,
        property: &str,
    ) -> std::result::Result<String, MappingError> {
        match self.graph.first_literal(node, predicate) {
            Some(lit) => Ok(lit.lexical.clone()),
            None => Err(MappingError::MissingRequiredProperty {
                property: property.to_string(),
                subject: node.to_string(),
            }),
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Load a world from an RDF file. The serialization is chosen by the file
/// extension.
pub fn load_world(path: impl AsRef<Path>) -> std::result::Result<LoadedWorld, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = RdfFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedExtension {
        path: path.to_path_buf(),
    })?;
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_world_from_bytes(&bytes, format, &path.display().to_string())
}

/// Load a world from in-memory text in the given format.
pub fn load_world_from_str(
    text: &str,
    format: RdfFormat,
) -> std::result::Result<LoadedWorld, LoadError> {
    load_world_from_bytes(text.as_bytes(), format, "<memory>")
}

fn load_world_from_bytes(
    bytes: &[u8],
    format: RdfFormat,
    source: &str,
) -> std::result::Result<LoadedWorld, LoadError> {
    let statements = parse_statements(bytes, format).map_err(|e| LoadError::Parse {
        path: source.to_string(),
        message: e.to_string(),
    })?;
    let graph = FactGraph::from_statements(&statements);
    let loaded = Extraction::new(&graph).run()?;

    tracing::debug!(
        source = %source,
        universities = loaded.world.universities.len(),
        colleges = loaded.world.colleges.len(),
        persons = loaded.world.persons.len(),
        warnings = loaded.warnings.len(),
        "rdf world loaded"
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_TTL: &str = r#"
@prefix bench: <http://benchmark/OWL2Bench#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

bench:U1 a bench:University ;
    rdfs:label "Demo University" ;
    bench:hasWomenCollege bench:U1_C1 .

bench:U1_C1 a bench:WomenCollege ;
    rdfs:label "Demo College" ;
    bench:hasDepartment bench:U1_C1_D1 .

bench:U1_C1_D1 a bench:Department ;
    rdfs:label "Computer Science" ;
    bench:offerCourse bench:U1_C1_D1_CRS1 .

bench:U1_C1_D1_CRS1 a bench:Course ;
    rdfs:label "Intro to CS" .

bench:P1 a bench:Person, bench:Woman ;
    bench:hasFirstName "Ada" ;
    bench:hasLastName "Lovelace" ;
    bench:hasEmailAddress "p1@bench.com" .
"#;

    #[test]
    fn minimal_fixture_loads_exactly() {
        let loaded = load_world_from_str(MINIMAL_TTL, RdfFormat::Turtle).expect("load fixture");
        let world = &loaded.world;

        assert_eq!(world.universities.len(), 1);
        let university = &world.universities[0];
        assert_eq!(university.identifier, "U1");
        assert_eq!(university.name, "Demo University");

        assert_eq!(university.colleges.len(), 1);
        let college = &university.colleges[0];
        assert_eq!(college.identifier, "U1_C1");
        assert_eq!(college.name, "Demo College");
        assert!(college.is_women_only);

        assert_eq!(college.departments.len(), 1);
        let department = &college.departments[0];
        assert_eq!(department.name, "Computer Science");

        assert_eq!(department.courses.len(), 1);
        assert_eq!(department.courses[0].title, "Intro to CS");

        assert_eq!(world.persons.len(), 1);
        let person = &world.persons[0];
        assert_eq!(person.identifier, "P1");
        assert_eq!(person.first_name, "Ada");
        assert_eq!(person.last_name, "Lovelace");
        assert_eq!(person.email, "p1@bench.com");
        assert!(person.is_woman);
        assert_eq!(person.hometown, None);

        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn flat_collections_mirror_the_tree() {
        let loaded = load_world_from_str(MINIMAL_TTL, RdfFormat::Turtle).expect("load fixture");
        let world = &loaded.world;
        assert_eq!(world.colleges.len(), 1);
        assert_eq!(world.departments.len(), 1);
        assert_eq!(world.courses.len(), 1);
        assert!(Arc::ptr_eq(
            &world.colleges[0],
            &world.universities[0].colleges[0]
        ));
    }

    #[test]
    fn inverse_predicates_discover_containment() {
        let ttl = r#"
@prefix bench: <http://benchmark/OWL2Bench#> .
bench:U1 a bench:University .
bench:C1 a bench:College ;
    bench:isCollegeOf bench:U1 ;
    bench:hasDepartment bench:D1 .
bench:D1 a bench:Department .
bench:CRS1 a bench:Course ;
    bench:isDepartmentOf bench:U1 .
"#;
        // CRS1 misuses isDepartmentOf against a university; it must not leak
        // into the college walk.
        let loaded = load_world_from_str(ttl, RdfFormat::Turtle).expect("load");
        let world = &loaded.world;
        assert_eq!(world.universities.len(), 1);
        assert_eq!(world.universities[0].colleges.len(), 1);
        assert_eq!(world.universities[0].colleges[0].identifier, "C1");
        assert!(!world.universities[0].colleges[0].is_women_only);
        assert_eq!(world.universities[0].colleges[0].departments.len(), 1);
    }

    #[test]
    fn direct_and_inverse_mentions_resolve_once() {
        let ttl = r#"
@prefix bench: <http://benchmark/OWL2Bench#> .
bench:U1 a bench:University ;
    bench:hasCollege bench:C1 .
bench:C1 a bench:College ;
    bench:isCollegeOf bench:U1 .
"#;
        let loaded = load_world_from_str(ttl, RdfFormat::Turtle).expect("load");
        let world = &loaded.world;
        assert_eq!(world.universities[0].colleges.len(), 1);
        assert_eq!(world.colleges.len(), 1);
    }

    #[test]
    fn shared_college_is_one_instance() {
        let ttl = r#"
@prefix bench: <http://benchmark/OWL2Bench#> .
bench:U1 a bench:University ;
    bench:hasCollege bench:C1 .
bench:U2 a bench:University ;
    bench:hasCollege bench:C1 .
bench:C1 a bench:College .
"#;
        let loaded = load_world_from_str(ttl, RdfFormat::Turtle).expect("load");
        let world = &loaded.world;
        assert_eq!(world.universities.len(), 2);
        assert_eq!(world.colleges.len(), 1);
        // Same Arc from both parents; the verifier, not the loader, rejects
        // the shared parentage.
        assert!(Arc::ptr_eq(
            &world.universities[0].colleges[0],
            &world.universities[1].colleges[0]
        ));
    }

    #[test]
    fn course_without_label_warns_and_falls_back() {
        let ttl = r#"
@prefix bench: <http://benchmark/OWL2Bench#> .
bench:U1 a bench:University ;
    bench:hasCollege bench:C1 .
bench:C1 a bench:College ;
    bench:hasDepartment bench:D1 .
bench:D1 a bench:Department ;
    bench:hasCourse bench:CRS9 .
"#;
        let loaded = load_world_from_str(ttl, RdfFormat::Turtle).expect("load");
        assert_eq!(loaded.world.courses.len(), 1);
        assert_eq!(loaded.world.courses[0].title, "CRS9");
        assert_eq!(
            loaded.warnings,
            vec![LoadWarning::CourseTitleFallback {
                course: "CRS9".to_string(),
                title: "CRS9".to_string(),
            }]
        );
    }

    #[test]
    fn unlabelled_university_and_college_fall_back_silently() {
        let ttl = r#"
@prefix bench: <http://benchmark/OWL2Bench#> .
bench:U1 a bench:University ;
    bench:hasCollege bench:C1 .
bench:C1 a bench:College .
"#;
        let loaded = load_world_from_str(ttl, RdfFormat::Turtle).expect("load");
        assert_eq!(loaded.world.universities[0].name, "U1");
        assert_eq!(loaded.world.colleges[0].name, "C1");
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn missing_email_is_a_mapping_error() {
        let ttl = r#"
@prefix bench: <http://benchmark/OWL2Bench#> .
bench:P1 a bench:Person, bench:Woman ;
    bench:hasFirstName "Ada" ;
    bench:hasLastName "Lovelace" .
"#;
        let err = load_world_from_str(ttl, RdfFormat::Turtle).expect_err("must fail");
        match err {
            LoadError::Mapping(MappingError::MissingRequiredProperty { property, subject }) => {
                assert_eq!(property, "hasEmailAddress");
                assert_eq!(subject, "http://benchmark/OWL2Bench#P1");
            }
            other => panic!("expected mapping error, got {other:?}"),
        }
    }

    #[test]
    fn person_without_gender_class_is_a_mapping_error() {
        let ttl = r#"
@prefix bench: <http://benchmark/OWL2Bench#> .
bench:P1 a bench:Person ;
    bench:hasFirstName "Ada" ;
    bench:hasLastName "Lovelace" ;
    bench:hasEmailAddress "p1@bench.com" .
"#;
        let err = load_world_from_str(ttl, RdfFormat::Turtle).expect_err("must fail");
        assert!(matches!(
            err,
            LoadError::Mapping(MappingError::MissingGender { .. })
        ));
    }

    #[test]
    fn man_class_maps_is_woman_false() {
        let ttl = r#"
@prefix bench: <http://benchmark/OWL2Bench#> .
bench:P1 a bench:Man ;
    bench:hasFirstName "Alan" ;
    bench:hasLastName "Turing" ;
    bench:hasEmailAddress "p1@bench.com" ;
    bench:isFrom "London" .
"#;
        // Typed Man only; the Person class is not required for discovery.
        let loaded = load_world_from_str(ttl, RdfFormat::Turtle).expect("load");
        assert_eq!(loaded.world.persons.len(), 1);
        let person = &loaded.world.persons[0];
        assert!(!person.is_woman);
        assert_eq!(person.hometown.as_deref(), Some("London"));
    }

    #[test]
    fn hometown_iri_degrades_to_short_identifier() {
        let ttl = r#"
@prefix bench: <http://benchmark/OWL2Bench#> .
bench:P1 a bench:Woman ;
    bench:hasFirstName "Ada" ;
    bench:hasLastName "Lovelace" ;
    bench:hasEmailAddress "p1@bench.com" ;
    bench:isFrom bench:London .
"#;
        let loaded = load_world_from_str(ttl, RdfFormat::Turtle).expect("load");
        assert_eq!(loaded.world.persons[0].hometown.as_deref(), Some("London"));
    }

    #[test]
    fn ntriples_input_parses() {
        let nt = r#"
<http://benchmark/OWL2Bench#U1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://benchmark/OWL2Bench#University> .
<http://benchmark/OWL2Bench#U1> <http://www.w3.org/2000/01/rdf-schema#label> "Demo University" .
"#;
        let loaded = load_world_from_str(nt, RdfFormat::NTriples).expect("load nt");
        assert_eq!(loaded.world.universities.len(), 1);
        assert_eq!(loaded.world.universities[0].name, "Demo University");
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = load_world_from_str("this is not turtle {", RdfFormat::Turtle)
            .expect_err("must fail");
        match err {
            LoadError::Parse { path, message } => {
                assert_eq!(path, "<memory>");
                assert!(!message.is_empty());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn format_detection_by_extension() {
        let case = |name: &str| RdfFormat::from_path(Path::new(name));
        assert_eq!(case("world.nt"), Some(RdfFormat::NTriples));
        assert_eq!(case("world.ttl"), Some(RdfFormat::Turtle));
        assert_eq!(case("world.TTL"), Some(RdfFormat::Turtle));
        assert_eq!(case("world.owl"), Some(RdfFormat::RdfXml));
        assert_eq!(case("world.rdf"), Some(RdfFormat::RdfXml));
        assert_eq!(case("world.json"), None);
        assert_eq!(case("world"), None);
    }

    #[test]
    fn term_display_forms_reparse() {
        assert_eq!(
            parse_term_display("<http://example.org/a>").expect("iri"),
            RdfObject::Node(RdfNode::Iri("http://example.org/a".to_string()))
        );
        assert_eq!(
            parse_term_display("_:b0").expect("bnode"),
            RdfObject::Node(RdfNode::BlankNode("b0".to_string()))
        );
        assert_eq!(
            parse_term_display("\"hi\\nthere\"@en").expect("literal"),
            RdfObject::Literal(RdfLiteral {
                lexical: "hi\nthere".to_string(),
                datatype: None,
                language: Some("en".to_string()),
            })
        );
        assert!(parse_term_display("42?").is_err());
    }
}
