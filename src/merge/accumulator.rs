//! In-memory page accumulator.
//!
//! Source documents are renumbered into one shared object space as they are
//! appended. Their page objects are kept, their catalogs and page-tree nodes
//! are dropped, and [`PageAccumulator::into_document`] builds a single new
//! page tree over all collected pages.

use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::BTreeMap;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Object types that belong to a source document's structure rather than to
/// its pages.
const STRUCTURAL_TYPES: [&[u8]; 6] = [
    b"Catalog",
    b"Pages",
    b"Outlines",
    b"Outline",
    b"ObjStm",
    b"XRef",
];

/// Guards against cyclic `Parent` chains in malformed files.
const MAX_TREE_DEPTH: usize = 64;

/// Collects pages from several documents, in append order.
#[derive(Debug)]
pub struct PageAccumulator {
    objects: BTreeMap<ObjectId, Object>,
    page_ids: Vec<ObjectId>,
    next_id: u32,
    documents: usize,
}

impl Default for PageAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            page_ids: Vec::new(),
            next_id: 1,
            documents: 0,
        }
    }

    /// Number of pages collected so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Number of documents appended so far.
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Whether no pages have been collected.
    pub fn is_empty(&self) -> bool {
        self.page_ids.is_empty()
    }

    /// Append every page of `doc`, in its page order. Returns the number of
    /// pages appended.
    pub fn append(&mut self, mut doc: Document) -> usize {
        doc.renumber_objects_with(self.next_id);
        self.next_id = doc.max_id + 1;

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        for &page_id in &page_ids {
            inherit_page_attributes(&mut doc, page_id);
        }

        for (id, object) in doc.objects {
            if !is_structural(&object) {
                self.objects.insert(id, object);
            }
        }

        let appended = page_ids.len();
        self.page_ids.extend(page_ids);
        self.documents += 1;
        appended
    }

    /// Consume the accumulator and build the merged document.
    ///
    /// Objects no longer reachable from the new catalog, such as untyped
    /// outline items of a source document, are pruned.
    pub fn into_document(self) -> Document {
        let mut merged = Document::with_version("1.5");
        merged.max_id = self.objects.keys().map(|(id, _)| *id).max().unwrap_or(0);
        merged.objects.extend(self.objects);

        let pages_id = merged.new_object_id();

        for &page_id in &self.page_ids {
            if let Ok(page) = merged.get_object_mut(page_id).and_then(Object::as_dict_mut) {
                page.set("Parent", Object::Reference(pages_id));
            }
        }

        let kids: Vec<Object> = self.page_ids.iter().copied().map(Object::Reference).collect();
        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Count", Object::Integer(self.page_ids.len() as i64));
        pages.set("Kids", Object::Array(kids));
        merged.objects.insert(pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = merged.add_object(catalog);

        merged.trailer.set("Root", Object::Reference(catalog_id));

        let pruned = merged.prune_objects();
        tracing::debug!(pruned = pruned.len(), "dropped unreferenced objects");
        merged
    }
}

fn object_type(object: &Object) -> Option<&[u8]> {
    let dict = match object {
        Object::Dictionary(dict) => dict,
        Object::Stream(stream) => &stream.dict,
        _ => return None,
    };
    dict.get(b"Type").and_then(Object::as_name).ok()
}

fn is_structural(object: &Object) -> bool {
    object_type(object).is_some_and(|kind| STRUCTURAL_TYPES.contains(&kind))
}

/// Copy attributes the page only receives from an ancestor onto the page
/// itself, so it keeps them once re-parented.
fn inherit_page_attributes(doc: &mut Document, page_id: ObjectId) {
    let mut inherited: Vec<(&[u8], Object)> = Vec::new();

    if let Ok(page) = doc.get_object(page_id).and_then(Object::as_dict) {
        let mut missing: Vec<&[u8]> = INHERITABLE
            .iter()
            .copied()
            .filter(|key| !page.has(key))
            .collect();
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

        for _ in 0..MAX_TREE_DEPTH {
            if missing.is_empty() {
                break;
            }
            let Some(node) = parent.and_then(|id| doc.get_object(id).and_then(Object::as_dict).ok()) else {
                break;
            };
            missing.retain(|key| match node.get(key) {
                Ok(value) => {
                    inherited.push((*key, value.clone()));
                    false
                }
                Err(_) => true,
            });
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        }
    }

    if inherited.is_empty() {
        return;
    }

    if let Ok(page) = doc.get_object_mut(page_id).and_then(Object::as_dict_mut) {
        for (key, value) in inherited {
            page.set(key, value);
        }
    }
}
