//! HTTP identifier translator
//!
//! `/a/b` maps to `<base>/a/b`. Nodes under a hash segment map to fragment
//! IRIs: `/a/#/frag` maps to `<base>/a#frag`. Path segments are
//! percent-encoded.

use super::{IdentifierTranslator, TranslationError, TranslationResult};
use crate::config::ProjectionConfig;
use crate::rdf::NamedNode;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment or fragment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Translator rooted at an HTTP base IRI
#[derive(Debug, Clone)]
pub struct HttpIdentifierTranslator {
    /// Base IRI without trailing slash
    base: String,
    /// Name of the reserved child holding fragment resources
    hash_segment: String,
}

impl HttpIdentifierTranslator {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            hash_segment: "#".to_string(),
        }
    }

    pub fn from_config(config: &ProjectionConfig) -> Self {
        let mut translator = Self::new(&config.base_uri);
        translator.hash_segment = config.hash_segment.clone();
        translator
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn encode_segments<'s>(&self, segments: impl Iterator<Item = &'s str>) -> String {
        segments
            .map(|segment| format!("/{}", utf8_percent_encode(segment, SEGMENT)))
            .collect()
    }

    /// Decode one segment. An encoded `/` would not translate back to the
    /// same IRI.
    fn decode(&self, encoded: &str) -> TranslationResult<String> {
        let decoded = percent_decode_str(encoded)
            .decode_utf8()
            .map_err(|_| TranslationError::InvalidIri(encoded.to_string()))?;
        if decoded.contains('/') {
            return Err(TranslationError::InvalidIri(encoded.to_string()));
        }
        Ok(decoded.into_owned())
    }
}

impl IdentifierTranslator for HttpIdentifierTranslator {
    fn to_resource(&self, path: &str) -> TranslationResult<NamedNode> {
        if !path.starts_with('/') {
            return Err(TranslationError::InvalidPath(path.to_string()));
        }
        let segments: Vec<&str> = path.split('/').skip(1).filter(|s| !s.is_empty()).collect();

        let hash_marker = segments.iter().position(|s| *s == self.hash_segment);
        let iri = match hash_marker {
            Some(pos) => {
                let fragment = &segments[pos + 1..];
                if fragment.len() != 1 {
                    return Err(TranslationError::InvalidPath(path.to_string()));
                }
                format!(
                    "{}{}#{}",
                    self.base,
                    self.encode_segments(segments[..pos].iter().copied()),
                    utf8_percent_encode(fragment[0], SEGMENT)
                )
            }
            None if segments.is_empty() => format!("{}/", self.base),
            None => format!("{}{}", self.base, self.encode_segments(segments.into_iter())),
        };

        NamedNode::new(&iri).map_err(|e| TranslationError::InvalidIri(e.to_string()))
    }

    fn to_path(&self, resource: &NamedNode) -> TranslationResult<String> {
        let iri = resource.as_str();
        let relative = iri
            .strip_prefix(self.base.as_str())
            .filter(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('#'))
            .ok_or_else(|| TranslationError::OutOfDomain(iri.to_string()))?;

        let (path_part, fragment) = match relative.split_once('#') {
            Some((path_part, fragment)) => (path_part, Some(fragment)),
            None => (relative, None),
        };

        let mut path = String::new();
        for segment in path_part.split('/').filter(|s| !s.is_empty()) {
            let segment = self.decode(segment)?;
            if segment == self.hash_segment {
                return Err(TranslationError::InvalidIri(iri.to_string()));
            }
            path.push('/');
            path.push_str(&segment);
        }
        if let Some(fragment) = fragment {
            path.push('/');
            path.push_str(&self.hash_segment);
            path.push('/');
            path.push_str(&self.decode(fragment)?);
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    fn in_domain(&self, resource: &NamedNode) -> bool {
        self.to_path(resource).is_ok()
    }
}
