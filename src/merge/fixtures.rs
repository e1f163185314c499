//! Minimal PDFs built with lopdf for unit tests.
//!
//! Every page gets a distinct `MediaBox` width so tests can follow pages
//! through a merge by reading the widths back in order.

use lopdf::encryption::crypt_filters::{Aes128CryptFilter, CryptFilter};
use lopdf::{
    Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream, StringFormat,
    dictionary,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Page content written by [`write_empty_password_pdf`].
pub const SAMPLE_CONTENT: &[u8] = b"BT /F1 12 Tf 72 712 Td (Hello) Tj ET";

/// Cipher used by [`write_empty_password_pdf`].
#[derive(Debug, Clone, Copy)]
pub enum Cipher {
    /// RC4 with a 128-bit key (V2).
    Rc4,
    /// AES-128 through a crypt filter (V4).
    Aes128,
}

/// Write a PDF with one page per entry in `widths`.
pub fn write_pdf(path: &Path, widths: &[i64]) -> lopdf::Result<()> {
    let mut doc = build(widths, false);
    doc.save(path)?;
    Ok(())
}

/// Write a PDF whose pages inherit `MediaBox` from the page tree root.
pub fn write_pdf_with_inherited_media_box(path: &Path, width: i64, pages: usize) -> lopdf::Result<()> {
    let mut doc = build(&vec![width; pages], true);
    doc.save(path)?;
    Ok(())
}

/// Write a PDF that declares standard-handler encryption with a user
/// password other than the empty one.
pub fn write_password_protected_pdf(path: &Path) -> lopdf::Result<()> {
    let mut doc = build(&[612], false);

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => Object::Name(b"Standard".to_vec()),
        "V" => Object::Integer(1),
        "R" => Object::Integer(2),
        "Length" => Object::Integer(40),
        "O" => Object::String(vec![0x5a; 32], StringFormat::Hexadecimal),
        "U" => Object::String(vec![0xa5; 32], StringFormat::Hexadecimal),
        "P" => Object::Integer(-44),
    });
    let file_id = Object::String(vec![0x42; 16], StringFormat::Hexadecimal);
    doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
    doc.trailer.set("ID", Object::Array(vec![file_id.clone(), file_id]));

    doc.save(path)?;
    Ok(())
}

/// Write a one-page PDF encrypted with an empty user password and a real
/// owner password. Its page content is [`SAMPLE_CONTENT`].
pub fn write_empty_password_pdf(path: &Path, cipher: Cipher) -> lopdf::Result<()> {
    let mut doc = build(&[612], false);

    for page_id in doc.get_pages().into_values() {
        for content_id in doc.get_page_contents(page_id) {
            if let Ok(stream) = doc.get_object_mut(content_id).and_then(Object::as_stream_mut) {
                stream.set_plain_content(SAMPLE_CONTENT.to_vec());
            }
        }
    }

    let file_id = Object::String(vec![0x42; 16], StringFormat::Hexadecimal);
    doc.trailer.set("ID", Object::Array(vec![file_id.clone(), file_id]));

    let version = match cipher {
        Cipher::Rc4 => EncryptionVersion::V2 {
            document: &doc,
            owner_password: "owner",
            user_password: "",
            key_length: 128,
            permissions: Permissions::all(),
        },
        Cipher::Aes128 => {
            let filter: Arc<dyn CryptFilter> = Arc::new(Aes128CryptFilter);
            EncryptionVersion::V4 {
                document: &doc,
                encrypt_metadata: true,
                crypt_filters: BTreeMap::from([(b"StdCF".to_vec(), filter)]),
                stream_filter: b"StdCF".to_vec(),
                string_filter: b"StdCF".to_vec(),
                owner_password: "owner",
                user_password: "",
                permissions: Permissions::all(),
            }
        }
    };
    let state = EncryptionState::try_from(version)?;
    doc.encrypt(&state)?;

    doc.save(path)?;
    Ok(())
}

/// Read back the content of every page, in page order.
pub fn page_contents(path: &Path) -> lopdf::Result<Vec<Vec<u8>>> {
    let doc = Document::load(path)?;
    doc.get_pages()
        .into_values()
        .map(|page_id| doc.get_page_content(page_id))
        .collect()
}

/// Read back the `MediaBox` width of every page, in page order.
pub fn page_widths(path: &Path) -> lopdf::Result<Vec<i64>> {
    let doc = Document::load(path)?;
    let mut widths = Vec::new();
    for page_id in doc.get_pages().into_values() {
        let page = doc.get_object(page_id).and_then(Object::as_dict)?;
        let media_box = page.get(b"MediaBox")?.as_array()?;
        widths.push(media_box[2].as_i64()?);
    }
    Ok(widths)
}

fn build(widths: &[i64], inherit_media_box: bool) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let resources_id = doc.add_object(dictionary! {
        "ProcSet" => Object::Array(vec![
            Object::Name(b"PDF".to_vec()),
            Object::Name(b"Text".to_vec()),
        ]),
    });

    let mut kids = Vec::with_capacity(widths.len());
    for &width in widths {
        let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let mut page = dictionary! {
            "Type" => Object::Name(b"Page".to_vec()),
            "Parent" => Object::Reference(pages_id),
            "Resources" => Object::Reference(resources_id),
            "Contents" => Object::Reference(content_id),
        };
        if !inherit_media_box {
            page.set("MediaBox", media_box(width));
        }
        kids.push(Object::Reference(doc.add_object(page)));
    }

    let mut pages = dictionary! {
        "Type" => Object::Name(b"Pages".to_vec()),
        "Count" => Object::Integer(widths.len() as i64),
        "Kids" => Object::Array(kids),
    };
    if inherit_media_box && let Some(&width) = widths.first() {
        pages.set("MediaBox", media_box(width));
    }
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => Object::Name(b"Catalog".to_vec()),
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc
}

fn media_box(width: i64) -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(width),
        Object::Integer(842),
    ])
}
