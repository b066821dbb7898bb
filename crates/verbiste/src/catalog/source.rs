use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::catalog::CatalogError;
use crate::catalog::xml::parse_templates;
use crate::template::Template;

/// Result of asking a [`TemplateSource`] for a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// The template is available.
    Ready(&'a Template),
    /// The template has been requested but has not arrived yet.
    Pending,
    /// No template exists with this id.
    NotFound,
}

/// Anything that can supply templates by id.
///
/// Ids are template names such as `aim:er`, `:être` or `:avoir`.
pub trait TemplateSource {
    fn lookup(&self, id: &str) -> Lookup<'_>;
}

impl TemplateSource for HashMap<String, Template> {
    fn lookup(&self, id: &str) -> Lookup<'_> {
        self.get(id).map_or(Lookup::NotFound, Lookup::Ready)
    }
}

/// In-memory template store keyed by template name.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: HashMap<String, Template>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses templates from verbiste `conjugation-fr.xml` content.
    pub fn from_xml(xml: &str) -> Result<Self, CatalogError> {
        let mut catalog = TemplateCatalog::new();
        for template in parse_templates(xml)? {
            catalog.insert(template);
        }
        debug!("loaded {} templates from XML", catalog.len());
        Ok(catalog)
    }

    /// Parses templates from a JSON object mapping template id to template.
    ///
    /// A template without a `name` takes its id as name.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let parsed: HashMap<String, Template> = serde_json::from_str(json)?;
        let templates: HashMap<String, Template> = parsed
            .into_iter()
            .map(|(id, mut template)| {
                if template.name.is_empty() {
                    template.name.clone_from(&id);
                }
                (id, template)
            })
            .collect();
        debug!("loaded {} templates from JSON", templates.len());
        Ok(TemplateCatalog { templates })
    }

    /// Reads a template file, choosing JSON for `.json` paths and XML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        TemplateCatalog::from_content(path, &content)
    }

    /// Parses already-read file content, choosing the format from `path`.
    pub fn from_content(path: &Path, content: &str) -> Result<Self, CatalogError> {
        if path.extension().is_some_and(|ext| ext == "json") {
            TemplateCatalog::from_json(content)
        } else {
            TemplateCatalog::from_xml(content)
        }
    }

    /// Inserts a template under its own name, replacing any previous one.
    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateSource for TemplateCatalog {
    fn lookup(&self, id: &str) -> Lookup<'_> {
        self.get(id).map_or(Lookup::NotFound, Lookup::Ready)
    }
}
