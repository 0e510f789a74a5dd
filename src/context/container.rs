//! LDP membership triples
//!
//! Membership is asserted by containers. For a candidate node `C` the
//! asserting containers are `C` itself, when it carries a container type,
//! and every direct or indirect container whose `ldp:membershipResource`
//! points at `C`. Each container `K` then contributes
//! `(K, relation, object)` for its children, where the object is either the
//! child's own identity or the values of a named property on the child.

use super::NodeScope;
use crate::convert::ValueConverter;
use crate::error::ProjectionResult;
use crate::identifiers::IdentifierTranslator;
use crate::rdf::vocab::{
    FEDORA_NON_RDF_SOURCE_DESCRIPTION, JCR_CONTENT, LDP_BASIC_CONTAINER, LDP_DIRECT_CONTAINER,
    LDP_HAS_MEMBER_RELATION, LDP_INDIRECT_CONTAINER, LDP_INSERTED_CONTENT_RELATION, LDP_MEMBER,
    LDP_MEMBER_RESOURCE, LDP_MEMBER_SUBJECT, REFERENCE_PROPERTY_SUFFIX,
};
use crate::rdf::{split_prefixed, NamedNode, NamespaceRegistry, RdfObject, Triple, TripleStream};
use crate::store::{ContentStore, Node, RepositoryError, RepositoryResult};
use tracing::debug;

/// Where the object of a membership triple comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// The child's own identity
    MemberSubject,
    /// Values of this (prefixed) property on the child
    Property(String),
}

/// Container kinds and LDP configuration read from one node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerClassification {
    pub basic: bool,
    pub direct: bool,
    pub indirect: bool,
    pub has_member_relation: Option<String>,
    pub inserted_content_relation: Option<String>,
}

impl ContainerClassification {
    pub fn of(store: &dyn ContentStore, node: &Node) -> RepositoryResult<Self> {
        let types = store.node_types(node)?;
        let has = |t: &str| types.iter().any(|n| n == t);
        Ok(Self {
            basic: has(LDP_BASIC_CONTAINER),
            direct: has(LDP_DIRECT_CONTAINER),
            indirect: has(LDP_INDIRECT_CONTAINER),
            has_member_relation: first_string(store, node, LDP_HAS_MEMBER_RELATION)?,
            inserted_content_relation: first_string(store, node, LDP_INSERTED_CONTENT_RELATION)?,
        })
    }

    pub fn is_container(&self) -> bool {
        self.basic || self.direct || self.indirect
    }

    /// Predicate of the membership triples, `None` if the container has none
    pub fn member_relation(&self, namespaces: &NamespaceRegistry) -> ProjectionResult<Option<NamedNode>> {
        match &self.has_member_relation {
            Some(relation) => Ok(Some(resolve_iri(namespaces, relation)?)),
            None if self.basic => Ok(Some(NamedNode::new(LDP_MEMBER)?)),
            None => Ok(None),
        }
    }

    /// Object source of the membership triples.
    ///
    /// `None` for an indirect container without a usable
    /// inserted-content-relation.
    pub fn insertion(&self, namespaces: &NamespaceRegistry) -> Option<Insertion> {
        if !self.indirect {
            return Some(Insertion::MemberSubject);
        }
        let relation = self.inserted_content_relation.as_deref()?;
        if relation == LDP_MEMBER_SUBJECT {
            return Some(Insertion::MemberSubject);
        }
        if let Some(name) = namespaces.compact(relation) {
            return Some(Insertion::Property(name));
        }
        match split_prefixed(relation) {
            Some((prefix, _)) if namespaces.namespace(prefix).is_ok() => {
                Some(Insertion::Property(relation.to_string()))
            }
            _ => None,
        }
    }
}

pub(super) fn triples<'a>(scope: &NodeScope<'a>) -> ProjectionResult<TripleStream<'a>> {
    let store = scope.store();
    let mut containers = Vec::new();

    if ContainerClassification::of(store, &scope.node)?.is_container() {
        containers.push(scope.node.clone());
    }
    for property in store.references(&scope.node, Some(LDP_MEMBER_RESOURCE))? {
        let referrer = property.parent;
        if referrer.path() == scope.node.path() {
            continue;
        }
        if store.is_node_type(&referrer, LDP_DIRECT_CONTAINER)?
            || store.is_node_type(&referrer, LDP_INDIRECT_CONTAINER)?
        {
            containers.push(referrer);
        }
    }

    let mut stream = TripleStream::empty();
    for container in containers {
        let scope = scope.clone();
        stream.concat(TripleStream::deferred(move || member_relations(&scope, &container)));
    }
    Ok(stream)
}

/// Membership triples asserted by `container` about its children
fn member_relations<'a>(scope: &NodeScope<'a>, container: &Node) -> ProjectionResult<TripleStream<'a>> {
    let store = scope.store();
    let namespaces = scope.projector.namespaces();
    let translator = scope.projector.translator();
    let classification = ContainerClassification::of(store, container)?;

    let Some(relation) = classification.member_relation(namespaces)? else {
        debug!("Container {} has no member relation", container.path());
        return Ok(TripleStream::empty());
    };
    let Some(insertion) = classification.insertion(namespaces) else {
        debug!(
            "Indirect container {} has no usable inserted content relation",
            container.path()
        );
        return Ok(TripleStream::empty());
    };

    let subject = translator.node_to_resource(container)?;
    let values = ValueConverter::new(scope.session, translator);
    let hash_segment = scope.projector.hash_segment();
    let children = store.children(container)?;
    debug!("Container {} has {} candidate members", container.path(), children.len());

    let members = children
        .into_iter()
        .filter(move |child| child.name() != hash_segment)
        .flat_map(move |child| -> Vec<ProjectionResult<Triple>> {
            match member_objects(store, translator, values, &insertion, child) {
                Ok(objects) => objects
                    .into_iter()
                    .map(|object| Ok(Triple::new(subject.clone(), relation.clone(), object)))
                    .collect(),
                Err(e) => vec![Err(e)],
            }
        });
    Ok(TripleStream::from_results(members))
}

/// Objects one child contributes to its container's membership
fn member_objects(
    store: &dyn ContentStore,
    translator: &dyn IdentifierTranslator,
    values: ValueConverter<'_>,
    insertion: &Insertion,
    child: Node,
) -> ProjectionResult<Vec<RdfObject>> {
    match insertion {
        Insertion::MemberSubject => {
            let member = described_resource(store, child)?;
            Ok(vec![translator.node_to_resource(&member)?.into()])
        }
        Insertion::Property(name) => {
            let property = match store.property(&child, name)? {
                Some(property) => Some(property),
                None => store.property(&child, &format!("{}{}", name, REFERENCE_PROPERTY_SUFFIX))?,
            };
            let Some(property) = property else {
                return Ok(Vec::new());
            };
            property.values.iter().map(|value| values.convert(value)).collect()
        }
    }
}

/// A description node stands for the binary it describes
fn described_resource(store: &dyn ContentStore, child: Node) -> RepositoryResult<Node> {
    if !store.is_node_type(&child, FEDORA_NON_RDF_SOURCE_DESCRIPTION)? {
        return Ok(child);
    }
    store
        .child(&child, JCR_CONTENT)?
        .ok_or_else(|| RepositoryError::PathNotFound(format!("{}/{}", child.path(), JCR_CONTENT)))
}

fn first_string(store: &dyn ContentStore, node: &Node, name: &str) -> RepositoryResult<Option<String>> {
    Ok(store
        .property(node, name)?
        .and_then(|p| p.values.first().map(|v| v.as_string())))
}

/// A full IRI, or a prefixed name under a registered prefix
fn resolve_iri(namespaces: &NamespaceRegistry, text: &str) -> ProjectionResult<NamedNode> {
    if let Some((prefix, _)) = split_prefixed(text) {
        if namespaces.namespace(prefix).is_ok() {
            return Ok(NamedNode::new(&namespaces.expand(text)?)?);
        }
    }
    Ok(NamedNode::new(text)?)
}
