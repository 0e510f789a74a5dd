use ldp_projection::context::{Projector, RdfContext};
use ldp_projection::identifiers::{HttpIdentifierTranslator, IdentifierTranslator};
use ldp_projection::rdf::vocab::{
    FEDORA_BLANK_NODE, FEDORA_NON_RDF_SOURCE_DESCRIPTION, LDP_BASIC_CONTAINER, LDP_DIRECT_CONTAINER,
    LDP_HAS_MEMBER_RELATION, LDP_INDIRECT_CONTAINER, LDP_INSERTED_CONTENT_RELATION, LDP_MEMBER,
    LDP_MEMBER_RESOURCE, LDP_MEMBER_SUBJECT,
};
use ldp_projection::rdf::{NamedNode, NamespaceRegistry, RdfObject, Triple};
use ldp_projection::store::{
    ContentStore, MemoryStore, Node, Property, PropertyType, RepositoryError, RepositoryResult, Value,
};
use ldp_projection::RepositoryRuntimeError;
use std::collections::{HashMap, HashSet};

const BASE: &str = "http://localhost:8080/rest";
const HAS_PART: &str = "http://purl.org/dc/terms/hasPart";
const SOURCE: &str = "http://purl.org/dc/terms/source";

fn iri(path: &str) -> NamedNode {
    HttpIdentifierTranslator::new(BASE).to_resource(path).unwrap()
}

fn uri(value: &str) -> NamedNode {
    NamedNode::new(value).unwrap()
}

fn project(store: &dyn ContentStore, path: &str, contexts: &[RdfContext]) -> Vec<Triple> {
    let translator = HttpIdentifierTranslator::new(BASE);
    let namespaces = NamespaceRegistry::new();
    let projector = Projector::new(store, &translator, &namespaces);
    projector.describe_path(path, contexts).try_collect().unwrap()
}

fn membership(store: &dyn ContentStore, path: &str) -> HashSet<Triple> {
    project(store, path, &[RdfContext::LdpMembership]).into_iter().collect()
}

fn library() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add_node("/books", "nt:folder").unwrap();
    store.add_mixin("/books", LDP_BASIC_CONTAINER).unwrap();
    store.set_property("/books", "dc:title", "Books").unwrap();
    store.add_node("/books/moby", "nt:folder").unwrap();
    store.set_property("/books/moby", "dc:title", "Moby Dick").unwrap();
    store.set_property("/books/moby", "dcterms:extent", 635i64).unwrap();
    store.add_node("/books/walden", "nt:folder").unwrap();
    store.set_reference("/books/walden", "dcterms:relation_ref", "/books/moby").unwrap();
    store
}

#[test]
fn test_topic_is_translated_identity() {
    let store = library();
    let translator = HttpIdentifierTranslator::new(BASE);
    let namespaces = NamespaceRegistry::new();
    let projector = Projector::new(&store, &translator, &namespaces);

    for path in ["/", "/books", "/books/moby", "/books/walden"] {
        let node = store.get_node(path).unwrap();
        let expected = translator.node_to_resource(&node).unwrap();
        let stream = projector.describe(Some(node), &RdfContext::ALL);
        assert_eq!(stream.topic(), Some(&expected), "{}", path);
    }
}

#[test]
fn test_projection_is_idempotent() {
    let store = library();
    let count = |triples: Vec<Triple>| {
        let mut counts: HashMap<Triple, usize> = HashMap::new();
        for triple in triples {
            *counts.entry(triple).or_default() += 1;
        }
        counts
    };
    let first = count(project(&store, "/books", &RdfContext::ALL));
    let second = count(project(&store, "/books", &RdfContext::ALL));
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_stream_can_be_described_again() {
    let store = library();
    let translator = HttpIdentifierTranslator::new(BASE);
    let namespaces = NamespaceRegistry::new();
    let projector = Projector::new(&store, &translator, &namespaces);
    let context = projector.context(store.get_node("/books/moby"));

    let first = context.describe(&RdfContext::ALL).try_collect().unwrap();
    let second = context.describe(&RdfContext::ALL).try_collect().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_types_and_properties() {
    let mut store = library();
    store.add_mixin("/books/moby", "zz:Unregistered").unwrap();
    store.set_property("/books/moby", "internal", "hidden").unwrap();
    let triples = project(&store, "/books/moby", &[RdfContext::Types, RdfContext::Properties]);

    let moby = iri("/books/moby");
    let rdf_type = uri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    let types: Vec<&Triple> = triples.iter().filter(|t| t.predicate == rdf_type).collect();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].object, RdfObject::from(uri("http://www.jcp.org/jcr/nt/1.0folder")));

    let title = triples
        .iter()
        .find(|t| t.predicate.as_str() == "http://purl.org/dc/elements/1.1/title")
        .unwrap();
    assert_eq!(title.subject, moby);
    // unprefixed properties are internal
    assert_eq!(triples.len(), 3);
    assert_eq!(title.object.as_literal().unwrap().value(), "Moby Dick");
}

#[test]
fn test_basic_container_membership() {
    let store = library();
    let books = iri("/books");
    let member = uri(LDP_MEMBER);

    let expected: HashSet<Triple> = [
        Triple::new(books.clone(), member.clone(), iri("/books/moby")),
        Triple::new(books, member, iri("/books/walden")),
    ]
    .into_iter()
    .collect();
    assert_eq!(membership(&store, "/books"), expected);
}

#[test]
fn test_hash_child_is_not_a_member() {
    let mut store = MemoryStore::new();
    store.add_node("/c", "nt:folder").unwrap();
    store.add_mixin("/c", LDP_BASIC_CONTAINER).unwrap();
    store.add_node("/c/a", "nt:folder").unwrap();
    store.add_node("/c/#", "nt:folder").unwrap();
    store.add_node("/c/#/frag", "nt:folder").unwrap();
    store.add_node("/citing", "nt:folder").unwrap();
    store.set_reference("/citing", "dcterms:references_ref", "/c").unwrap();

    let expected: HashSet<Triple> = [Triple::new(iri("/c"), uri(LDP_MEMBER), iri("/c/a"))]
        .into_iter()
        .collect();
    assert_eq!(membership(&store, "/c"), expected);

    // strategies after membership still run
    let triples = project(&store, "/c", &RdfContext::ALL);
    assert!(triples
        .iter()
        .any(|t| t.subject == iri("/citing") && t.object == RdfObject::from(iri("/c"))));
}

#[test]
fn test_non_container_has_no_membership() {
    let store = library();
    assert!(membership(&store, "/books/moby").is_empty());
}

#[test]
fn test_direct_container_found_through_membership_resource() {
    let mut store = MemoryStore::new();
    store.add_node("/work", "nt:folder").unwrap();
    store.add_node("/work/parts", "nt:folder").unwrap();
    store.add_mixin("/work/parts", LDP_DIRECT_CONTAINER).unwrap();
    store
        .set_property("/work/parts", LDP_HAS_MEMBER_RELATION, Value::Uri(HAS_PART.into()))
        .unwrap();
    store.set_reference("/work/parts", LDP_MEMBER_RESOURCE, "/work").unwrap();
    store.add_node("/work/parts/chapter1", "nt:folder").unwrap();

    let expected = Triple::new(iri("/work/parts"), uri(HAS_PART), iri("/work/parts/chapter1"));
    assert_eq!(membership(&store, "/work"), HashSet::from([expected.clone()]));
    // the container asserts the same membership when projected itself
    assert_eq!(membership(&store, "/work/parts"), HashSet::from([expected]));
}

#[test]
fn test_every_membership_resource_reference_is_honored() {
    let mut store = MemoryStore::new();
    store.add_node("/r", "nt:folder").unwrap();
    for container in ["/c1", "/c2"] {
        store.add_node(container, "nt:folder").unwrap();
        store.add_mixin(container, LDP_DIRECT_CONTAINER).unwrap();
        store
            .set_property(container, LDP_HAS_MEMBER_RELATION, Value::Uri(HAS_PART.into()))
            .unwrap();
        store.set_reference(container, LDP_MEMBER_RESOURCE, "/r").unwrap();
        store.add_node(&format!("{}/m", container), "nt:folder").unwrap();
    }
    // a basic container pointing here is not discovered
    store.add_node("/basic", "nt:folder").unwrap();
    store.add_mixin("/basic", LDP_BASIC_CONTAINER).unwrap();
    store.set_reference("/basic", LDP_MEMBER_RESOURCE, "/r").unwrap();
    store.add_node("/basic/m", "nt:folder").unwrap();

    let subjects: HashSet<String> = membership(&store, "/r")
        .into_iter()
        .map(|t| t.subject.to_string())
        .collect();
    assert_eq!(
        subjects,
        HashSet::from([iri("/c1").to_string(), iri("/c2").to_string()])
    );
}

#[test]
fn test_direct_container_without_relation_is_silent() {
    let mut store = MemoryStore::new();
    store.add_node("/c", "nt:folder").unwrap();
    store.add_mixin("/c", LDP_DIRECT_CONTAINER).unwrap();
    store.add_node("/c/m", "nt:folder").unwrap();
    assert!(membership(&store, "/c").is_empty());
}

fn indirect_container(store: &mut MemoryStore) {
    store.add_node("/k", "nt:folder").unwrap();
    store.add_mixin("/k", LDP_INDIRECT_CONTAINER).unwrap();
    store
        .set_property("/k", LDP_HAS_MEMBER_RELATION, Value::Uri(HAS_PART.into()))
        .unwrap();
}

#[test]
fn test_indirect_container_membership() {
    let mut store = MemoryStore::new();
    store.add_node("/target", "nt:folder").unwrap();
    indirect_container(&mut store);
    store
        .set_property("/k", LDP_INSERTED_CONTENT_RELATION, Value::Uri(SOURCE.into()))
        .unwrap();

    store.add_node("/k/a", "nt:folder").unwrap();
    store
        .set_values(
            "/k/a",
            "dcterms:source",
            PropertyType::Uri,
            vec![
                Value::Uri("http://example.org/v1".into()),
                Value::Uri("http://example.org/v2".into()),
            ],
        )
        .unwrap();
    store.add_node("/k/b", "nt:folder").unwrap();
    store.add_node("/k/c", "nt:folder").unwrap();
    store.set_reference("/k/c", "dcterms:source_ref", "/target").unwrap();

    let k = iri("/k");
    let expected: HashSet<Triple> = [
        Triple::new(k.clone(), uri(HAS_PART), uri("http://example.org/v1")),
        Triple::new(k.clone(), uri(HAS_PART), uri("http://example.org/v2")),
        Triple::new(k, uri(HAS_PART), iri("/target")),
    ]
    .into_iter()
    .collect();
    assert_eq!(membership(&store, "/k"), expected);
}

#[test]
fn test_indirect_container_without_inserted_content_relation() {
    let mut store = MemoryStore::new();
    indirect_container(&mut store);
    store.add_node("/k/a", "nt:folder").unwrap();
    assert!(membership(&store, "/k").is_empty());
}

#[test]
fn test_member_subject_relation_uses_child_identity() {
    let mut store = MemoryStore::new();
    indirect_container(&mut store);
    store
        .set_property("/k", LDP_INSERTED_CONTENT_RELATION, Value::Uri(LDP_MEMBER_SUBJECT.into()))
        .unwrap();
    store.add_node("/k/a", "nt:folder").unwrap();

    assert_eq!(
        membership(&store, "/k"),
        HashSet::from([Triple::new(iri("/k"), uri(HAS_PART), iri("/k/a"))])
    );
}

#[test]
fn test_binary_description_member_is_described_resource() {
    let mut store = MemoryStore::new();
    store.add_node("/files", "nt:folder").unwrap();
    store.add_mixin("/files", LDP_BASIC_CONTAINER).unwrap();
    store.add_node("/files/scan", "nt:file").unwrap();
    store
        .add_mixin("/files/scan", FEDORA_NON_RDF_SOURCE_DESCRIPTION)
        .unwrap();
    store.add_node("/files/scan/jcr:content", "nt:resource").unwrap();

    assert_eq!(
        membership(&store, "/files"),
        HashSet::from([Triple::new(
            iri("/files"),
            uri(LDP_MEMBER),
            iri("/files/scan/jcr:content")
        )])
    );
}

#[test]
fn test_members_are_produced_one_child_at_a_time() {
    let mut store = MemoryStore::new();
    store.add_node("/files", "nt:folder").unwrap();
    store.add_mixin("/files", LDP_BASIC_CONTAINER).unwrap();
    store.add_node("/files/a", "nt:folder").unwrap();
    // a description without its binary
    store.add_node("/files/broken", "nt:file").unwrap();
    store
        .add_mixin("/files/broken", FEDORA_NON_RDF_SOURCE_DESCRIPTION)
        .unwrap();

    let translator = HttpIdentifierTranslator::new(BASE);
    let namespaces = NamespaceRegistry::new();
    let projector = Projector::new(&store, &translator, &namespaces);
    let mut stream = projector.describe_path("/files", &[RdfContext::LdpMembership]);

    let first = stream.next().unwrap().unwrap();
    assert_eq!(first, Triple::new(iri("/files"), uri(LDP_MEMBER), iri("/files/a")));
    assert!(matches!(
        stream.next(),
        Some(Err(RepositoryRuntimeError::Repository(RepositoryError::PathNotFound(_))))
    ));
    assert!(stream.next().is_none());
}

#[test]
fn test_hash_children_stop_at_one_level() {
    let mut store = MemoryStore::new();
    store.add_node("/n", "nt:folder").unwrap();
    store.add_node("/n/#", "nt:folder").unwrap();
    store.add_node("/n/#/frag", "nt:folder").unwrap();
    store.set_property("/n/#/frag", "dc:title", "Fragment").unwrap();
    store.add_node("/n/#/frag/#", "nt:folder").unwrap();
    store.add_node("/n/#/frag/#/deep", "nt:folder").unwrap();
    store.set_property("/n/#/frag/#/deep", "dc:title", "Too deep").unwrap();

    let triples = project(&store, "/n", &[RdfContext::HashChildren]);
    let fragment = uri(&format!("{}/n#frag", BASE));

    assert!(!triples.is_empty());
    assert!(triples.iter().all(|t| t.subject == fragment));
    assert!(triples
        .iter()
        .all(|t| t.object.as_literal().map(|l| l.value()) != Some("Too deep")));
}

#[test]
fn test_no_hash_child_is_empty() {
    let store = library();
    assert!(project(&store, "/books", &[RdfContext::HashChildren]).is_empty());
}

#[test]
fn test_blank_nodes_are_followed_transitively() {
    let mut store = MemoryStore::new();
    store.add_node("/a", "nt:folder").unwrap();
    store.add_node("/genid", "nt:folder").unwrap();
    for blank in ["/genid/b1", "/genid/b2"] {
        store.add_node(blank, "nt:folder").unwrap();
        store.add_mixin(blank, FEDORA_BLANK_NODE).unwrap();
    }
    store.set_property("/genid/b1", "foaf:name", "Alice").unwrap();
    store.set_property("/genid/b2", "foaf:name", "Bob").unwrap();
    store.set_reference("/a", "dcterms:creator_ref", "/genid/b1").unwrap();
    store.set_reference("/genid/b1", "foaf:knows_ref", "/genid/b2").unwrap();
    store.set_reference("/genid/b2", "foaf:knows_ref", "/genid/b1").unwrap();

    let triples = project(&store, "/a", &[RdfContext::BlankNodes]);
    // two types, a name and a link for each blank node
    assert_eq!(triples.len(), 8);
    let subjects: HashSet<String> = triples.iter().map(|t| t.subject.to_string()).collect();
    assert_eq!(
        subjects,
        HashSet::from([iri("/genid/b1").to_string(), iri("/genid/b2").to_string()])
    );
}

#[test]
fn test_strong_references_precede_weak() {
    let mut store = MemoryStore::new();
    let target = store.add_node("/t", "nt:folder").unwrap();
    store.add_node("/weak", "nt:folder").unwrap();
    store
        .set_property(
            "/weak",
            "dcterms:references_ref",
            Value::WeakReference(target.identifier().to_string()),
        )
        .unwrap();
    store.add_node("/strong1", "nt:folder").unwrap();
    store.set_reference("/strong1", "dcterms:relation_ref", "/t").unwrap();
    store.add_node("/strong2", "nt:folder").unwrap();
    store.set_reference("/strong2", "dcterms:relation_ref", "/t").unwrap();

    let triples = project(&store, "/t", &[RdfContext::References]);
    assert_eq!(triples.len(), 3);

    let predicates: Vec<&str> = triples.iter().map(|t| t.predicate.as_str()).collect();
    assert_eq!(
        predicates,
        vec![
            "http://purl.org/dc/terms/relation",
            "http://purl.org/dc/terms/relation",
            "http://purl.org/dc/terms/references",
        ]
    );
    assert_eq!(triples[2].subject, iri("/weak"));
    assert!(triples.iter().all(|t| t.object == RdfObject::from(iri("/t"))));
}

#[test]
fn test_absent_node_yields_nothing() {
    let store = library();
    let translator = HttpIdentifierTranslator::new(BASE);
    let namespaces = NamespaceRegistry::new();
    let projector = Projector::new(&store, &translator, &namespaces);

    let stream = projector.describe(None, &RdfContext::ALL);
    assert!(stream.topic().is_none());
    assert_eq!(stream.count(), 0);
}

#[test]
fn test_missing_path_fails_when_pulled() {
    let store = library();
    let translator = HttpIdentifierTranslator::new(BASE);
    let namespaces = NamespaceRegistry::new();
    let projector = Projector::new(&store, &translator, &namespaces);

    let stream = projector.describe_path("/nowhere", &RdfContext::ALL);
    assert_eq!(stream.topic(), Some(&iri("/nowhere")));
    assert_eq!(
        stream.try_collect(),
        Err(RepositoryRuntimeError::Repository(RepositoryError::PathNotFound(
            "/nowhere".into()
        )))
    );
}

/// Store operations a [`FailingStore`] can be told to fail
#[derive(Clone, Copy, PartialEq)]
enum Failure {
    NodeTypes,
    Properties,
    Children,
    References,
}

/// Delegates to a memory store, failing one kind of read
struct FailingStore {
    inner: MemoryStore,
    failure: Failure,
}

impl FailingStore {
    fn check(&self, op: Failure) -> RepositoryResult<()> {
        if self.failure == op {
            Err(RepositoryError::Access("store offline".into()))
        } else {
            Ok(())
        }
    }
}

impl ContentStore for FailingStore {
    fn workspace(&self) -> &str {
        self.inner.workspace()
    }

    fn node_at(&self, path: &str) -> RepositoryResult<Option<Node>> {
        self.inner.node_at(path)
    }

    fn node_by_identifier(&self, identifier: &str) -> RepositoryResult<Option<Node>> {
        self.inner.node_by_identifier(identifier)
    }

    fn node_types(&self, node: &Node) -> RepositoryResult<Vec<String>> {
        self.check(Failure::NodeTypes)?;
        self.inner.node_types(node)
    }

    fn properties(&self, node: &Node) -> RepositoryResult<Vec<Property>> {
        self.check(Failure::Properties)?;
        self.inner.properties(node)
    }

    fn children(&self, node: &Node) -> RepositoryResult<Vec<Node>> {
        self.check(Failure::Children)?;
        self.inner.children(node)
    }

    fn references(&self, node: &Node, name: Option<&str>) -> RepositoryResult<Vec<Property>> {
        self.check(Failure::References)?;
        self.inner.references(node, name)
    }

    fn weak_references(&self, node: &Node, name: Option<&str>) -> RepositoryResult<Vec<Property>> {
        self.check(Failure::References)?;
        self.inner.weak_references(node, name)
    }
}

#[test]
fn test_store_failures_surface_on_pull() {
    let cases = [
        (Failure::NodeTypes, RdfContext::Types),
        (Failure::Properties, RdfContext::Properties),
        (Failure::Children, RdfContext::LdpMembership),
        (Failure::References, RdfContext::References),
    ];
    for (failure, context) in cases {
        let store = FailingStore {
            inner: library(),
            failure,
        };
        let translator = HttpIdentifierTranslator::new(BASE);
        let namespaces = NamespaceRegistry::new();
        let projector = Projector::new(&store, &translator, &namespaces);

        // building the context reads nothing
        let node = store.inner.get_node("/books").unwrap();
        let mut stream = projector.context(Some(node)).stream(context);

        assert_eq!(
            stream.next(),
            Some(Err(RepositoryRuntimeError::Repository(RepositoryError::Access(
                "store offline".into()
            )))),
            "{}",
            context
        );
        assert!(stream.next().is_none(), "{}", context);
    }
}

#[test]
fn test_failure_ends_concatenated_stream() {
    let store = FailingStore {
        inner: library(),
        failure: Failure::References,
    };
    let translator = HttpIdentifierTranslator::new(BASE);
    let namespaces = NamespaceRegistry::new();
    let projector = Projector::new(&store, &translator, &namespaces);

    let results: Vec<_> = projector
        .describe_path("/books/moby", &[RdfContext::Types, RdfContext::References, RdfContext::Properties])
        .collect();
    // the type triple, then the error, and nothing after it
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}
