use std::collections::BTreeMap;

use include_dir::{Dir, include_dir};

use crate::domain::{DOCKERFILE_NAME, Template, TemplateName};
use crate::ports::TemplateCatalog;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Templates compiled into the binary.
///
/// Each template lives in `assets/templates/<slug>/`: the file named
/// `Dockerfile` is the body, every other file is an auxiliary file.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateCatalog;

impl EmbeddedTemplateCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for EmbeddedTemplateCatalog {
    fn names(&self) -> Vec<TemplateName> {
        TemplateName::ALL.to_vec()
    }

    fn template(&self, name: TemplateName) -> Template {
        let mut dockerfile = String::new();
        let mut files = BTreeMap::new();

        if let Some(dir) = TEMPLATES_DIR.get_dir(name.slug()) {
            for file in dir.files() {
                let Some(content) = file.contents_utf8() else {
                    continue;
                };
                let Some(file_name) = file.path().file_name() else {
                    continue;
                };
                let file_name = file_name.to_string_lossy();
                if file_name == DOCKERFILE_NAME {
                    dockerfile = content.to_string();
                } else {
                    files.insert(file_name.into_owned(), content.to_string());
                }
            }
        }

        Template { name, dockerfile, files }
    }
}
