//! Benchmark query-template catalog.
//!
//! Pure data: each template pairs a SPARQL query over the benchmark
//! vocabulary with the OWL 2 construct a reasoner must handle to answer it
//! and the profiles the query applies to. Nothing here executes queries;
//! consumers hand the text to their own engine.

use serde::Serialize;
use std::fmt;

/// OWL 2 profile a query is applicable to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OwlProfile {
    /// Direct semantics, the full description logic.
    Dl,
    /// The EL profile, polynomial-time classification.
    El,
    /// The QL profile, query rewriting into SQL.
    Ql,
    /// The RL profile, rule-based materialization.
    Rl,
}

impl fmt::Display for OwlProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OwlProfile::Dl => "DL",
            OwlProfile::El => "EL",
            OwlProfile::Ql => "QL",
            OwlProfile::Rl => "RL",
        };
        write!(f, "{label}")
    }
}

/// One catalog entry. All text is static; the catalog is a compile-time
/// constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryTemplate {
    pub number: u32,
    pub sparql: &'static str,
    pub description: &'static str,
    /// OWL 2 language construct involved during reasoning.
    pub construct_involved: &'static str,
    pub profiles: &'static [OwlProfile],
}

use OwlProfile::{Dl, El, Ql, Rl};

pub const QUERY_CATALOG: &[QueryTemplate] = &[
    QueryTemplate {
        number: 1,
        sparql: "SELECT DISTINCT ?x ?y WHERE { ?x :knows ?y }",
        description: "Find the instances who know some other instance.",
        construct_involved: "knows is a Reflexive Object Property.",
        profiles: &[El, Ql, Dl],
    },
    QueryTemplate {
        number: 2,
        sparql: "SELECT DISTINCT ?x ?y WHERE { ?x :isMemberOf ?y }",
        description:
            "Find Person instances who are a member (Student or Employee) of some Organization.",
        construct_involved: "ObjectPropertyChain.",
        profiles: &[El, Rl, Dl],
    },
    QueryTemplate {
        number: 3,
        sparql: "SELECT DISTINCT ?x WHERE { ?x rdf:type :WomenCollege }",
        description: "Find all women colleges.",
        construct_involved: "WomenCollege is a SubClassOf College.",
        profiles: &[El, Ql, Rl, Dl],
    },
    QueryTemplate {
        number: 4,
        sparql:
            "SELECT DISTINCT ?x ?y WHERE { { ?x :hasCollege ?y } UNION { ?y :isCollegeOf ?x } }",
        description:
            "Find each university with its colleges, whichever side declared the containment.",
        construct_involved: "hasCollege is an InverseOf isCollegeOf.",
        profiles: &[Ql, Rl, Dl],
    },
    QueryTemplate {
        number: 5,
        sparql: "SELECT DISTINCT ?x WHERE { ?x rdf:type :Person }",
        description: "Find every person, including those typed only as Woman or Man.",
        construct_involved: "Woman and Man are SubClassOf Person.",
        profiles: &[El, Ql, Rl, Dl],
    },
    QueryTemplate {
        number: 6,
        sparql: "SELECT DISTINCT ?x ?y WHERE { ?x :isFrom ?y }",
        description: "Find persons together with their hometown.",
        construct_involved: "isFrom is a Data Property assertion.",
        profiles: &[El, Ql, Rl, Dl],
    },
];

/// Catalog entries applicable to the given profile, in catalog order.
pub fn queries_for_profile(profile: OwlProfile) -> impl Iterator<Item = &'static QueryTemplate> {
    QUERY_CATALOG
        .iter()
        .filter(move |q| q.profiles.contains(&profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_sequential_from_one() {
        for (i, q) in QUERY_CATALOG.iter().enumerate() {
            assert_eq!(q.number as usize, i + 1);
        }
    }

    #[test]
    fn every_entry_is_fully_described() {
        for q in QUERY_CATALOG {
            assert!(q.sparql.starts_with("SELECT"), "query {}", q.number);
            assert!(!q.description.is_empty(), "query {}", q.number);
            assert!(!q.construct_involved.is_empty(), "query {}", q.number);
            assert!(!q.profiles.is_empty(), "query {}", q.number);
        }
    }

    #[test]
    fn profile_filter_matches_catalog_membership() {
        let dl: Vec<u32> = queries_for_profile(OwlProfile::Dl).map(|q| q.number).collect();
        assert_eq!(dl, vec![1, 2, 3, 4, 5, 6]);
        let el: Vec<u32> = queries_for_profile(OwlProfile::El).map(|q| q.number).collect();
        assert_eq!(el, vec![1, 2, 3, 5, 6]);
        let ql: Vec<u32> = queries_for_profile(OwlProfile::Ql).map(|q| q.number).collect();
        assert_eq!(ql, vec![1, 3, 4, 5, 6]);
    }

    #[test]
    fn profile_labels_render_uppercase() {
        assert_eq!(OwlProfile::Dl.to_string(), "DL");
        assert_eq!(OwlProfile::Rl.to_string(), "RL");
    }

    #[test]
    fn templates_serialize_with_profile_tags() {
        let json = serde_json::to_value(QUERY_CATALOG[0]).unwrap();
        assert_eq!(json["number"], 1);
        assert_eq!(json["profiles"][0], "EL");
    }
}
