//! Readers for the verbiste XML data files.
//!
//! `conjugation-fr.xml` holds `<template name="prefix:suffix">` elements
//! whose tense elements contain one `<p>` per person and one `<i>` per
//! suffix variant. `verbs-fr.xml` holds `<v>` elements naming a verb, its
//! template and an optional `<aspirate-h/>` marker.

use std::mem;

use log::debug;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::catalog::CatalogError;
use crate::catalog::search::VerbEntry;
use crate::template::{RawField, Suffix, Template};
use crate::types::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Infinitive,
    Indicative,
    Conditional,
    Subjunctive,
    Imperative,
    Participle,
}

fn category_for(tag: &[u8]) -> Option<Category> {
    match tag {
        b"infinitive" => Some(Category::Infinitive),
        b"indicative" => Some(Category::Indicative),
        b"conditional" => Some(Category::Conditional),
        b"subjunctive" => Some(Category::Subjunctive),
        b"imperative" => Some(Category::Imperative),
        b"participle" => Some(Category::Participle),
        _ => None,
    }
}

fn field_for(category: Category, tag: &[u8]) -> Option<Field> {
    match (category, tag) {
        (Category::Infinitive, b"infinitive-present") => Some(Field::Infinitive),
        (Category::Indicative, b"present") => Some(Field::IndicativePresent),
        (Category::Indicative, b"imperfect") => Some(Field::IndicativeImperfect),
        (Category::Indicative, b"future") => Some(Field::IndicativeFuture),
        (Category::Indicative, b"simple-past") => Some(Field::IndicativeSimplePast),
        (Category::Conditional, b"present") => Some(Field::ConditionalPresent),
        (Category::Subjunctive, b"present") => Some(Field::SubjunctivePresent),
        (Category::Subjunctive, b"imperfect") => Some(Field::SubjunctiveImperfect),
        (Category::Imperative, b"imperative-present") => Some(Field::ImperativePresent),
        (Category::Participle, b"present-participle") => Some(Field::PresentParticiple),
        (Category::Participle, b"past-participle") => Some(Field::PastParticiple),
        _ => None,
    }
}

fn position(reader: &Reader<&[u8]>) -> usize {
    reader.buffer_position() as usize
}

fn xml_error(reader: &Reader<&[u8]>, error: impl ToString) -> CatalogError {
    CatalogError::Xml {
        position: position(reader),
        message: error.to_string(),
    }
}

fn attribute(
    reader: &Reader<&[u8]>,
    element: &BytesStart<'_>,
    key: &[u8],
) -> Result<Option<String>, CatalogError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| xml_error(reader, e))?;
        if attr.key.as_ref() == key {
            let value = attr.unescape_value().map_err(|e| xml_error(reader, e))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Collapses the `<i>` texts of one `<p>` into a slot specification.
fn to_suffix(mut variants: Vec<String>) -> Suffix {
    match variants.len() {
        0 => Suffix::One(String::new()),
        1 => Suffix::One(variants.remove(0)),
        _ => Suffix::Variants(variants),
    }
}

/// Parses every `<template>` in a conjugation document.
///
/// An empty `<p>` becomes an empty suffix, so person positions are kept
/// even where the verb has no form. Tense elements outside a known
/// category are ignored.
pub fn parse_templates(xml: &str) -> Result<Vec<Template>, CatalogError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut templates = Vec::new();
    let mut buf = Vec::new();

    let mut current: Option<Template> = None;
    let mut category: Option<Category> = None;
    let mut field: Option<Field> = None;
    let mut slots: Vec<Suffix> = Vec::new();
    let mut variants: Option<Vec<String>> = None;
    let mut text: Option<String> = None;

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_error(&reader, e))?
        {
            Event::Start(e) => {
                let tag = e.name();
                match tag.as_ref() {
                    b"template" => {
                        let name = attribute(&reader, &e, b"name")?.ok_or_else(|| {
                            CatalogError::MissingAttribute {
                                element: "template".to_string(),
                                attribute: "name".to_string(),
                                position: position(&reader),
                            }
                        })?;
                        current = Some(Template::new(name));
                    }
                    b"p" if field.is_some() => variants = Some(Vec::new()),
                    b"i" if variants.is_some() => text = Some(String::new()),
                    other => {
                        if let Some(found) = category_for(other) {
                            category = Some(found);
                        } else if let Some(found) = category.and_then(|c| field_for(c, other)) {
                            field = Some(found);
                            slots.clear();
                        }
                    }
                }
            }
            Event::Empty(e) => {
                let tag = e.name();
                match tag.as_ref() {
                    b"p" if field.is_some() => slots.push(Suffix::One(String::new())),
                    b"i" => {
                        if let Some(open) = variants.as_mut() {
                            open.push(String::new());
                        }
                    }
                    other => {
                        if let (Some(template), Some(found)) = (
                            current.as_mut(),
                            category.and_then(|c| field_for(c, other)),
                        ) {
                            template.set(found, RawField::Slots(Vec::new()));
                        }
                    }
                }
            }
            Event::Text(e) => {
                if let Some(open) = text.as_mut() {
                    let unescaped = e.unescape().map_err(|e| xml_error(&reader, e))?;
                    open.push_str(&unescaped);
                }
            }
            Event::End(e) => {
                let tag = e.name();
                match tag.as_ref() {
                    b"i" => {
                        if let (Some(done), Some(open)) = (text.take(), variants.as_mut()) {
                            open.push(done.trim().to_string());
                        }
                    }
                    b"p" => {
                        if let Some(done) = variants.take() {
                            slots.push(to_suffix(done));
                        }
                    }
                    b"template" => {
                        if let Some(template) = current.take() {
                            templates.push(template);
                        }
                        category = None;
                        field = None;
                    }
                    other => {
                        if category_for(other).is_some() {
                            category = None;
                        } else if field.is_some()
                            && category.and_then(|c| field_for(c, other)) == field
                        {
                            if let (Some(template), Some(done)) = (current.as_mut(), field.take())
                            {
                                template.set(done, RawField::Slots(mem::take(&mut slots)));
                            }
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    debug!("parsed {} templates", templates.len());
    Ok(templates)
}

/// Parses every `<v>` in a verbs document.
///
/// Entries lacking a verb or template are skipped. Ids follow document order.
pub fn parse_verbs(xml: &str) -> Result<Vec<VerbEntry>, CatalogError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut verbs = Vec::new();
    let mut buf = Vec::new();

    let mut in_entry = false;
    let mut verb: Option<String> = None;
    let mut template: Option<String> = None;
    let mut aspirate_h = false;
    let mut reading: Option<&'static str> = None;

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_error(&reader, e))?
        {
            Event::Start(e) => match e.name().as_ref() {
                b"v" => {
                    in_entry = true;
                    verb = None;
                    template = None;
                    aspirate_h = false;
                }
                b"i" if in_entry => reading = Some("i"),
                b"t" if in_entry => reading = Some("t"),
                b"aspirate-h" if in_entry => aspirate_h = true,
                _ => {}
            },
            Event::Empty(e) => {
                if in_entry && e.name().as_ref() == b"aspirate-h" {
                    aspirate_h = true;
                }
            }
            Event::Text(e) => {
                let value = e.unescape().map_err(|e| xml_error(&reader, e))?;
                match reading {
                    Some("i") => verb = Some(value.trim().to_string()),
                    Some("t") => template = Some(value.trim().to_string()),
                    _ => {}
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"v" => {
                    match (verb.take(), template.take()) {
                        (Some(verb), Some(template)) => verbs.push(VerbEntry {
                            id: verbs.len(),
                            verb,
                            template,
                            aspirate_h,
                        }),
                        (verb, _) => debug!("skipping incomplete verb entry {:?}", verb),
                    }
                    in_entry = false;
                    aspirate_h = false;
                }
                b"i" | b"t" => reading = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(verbs)
}
