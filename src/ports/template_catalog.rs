use crate::domain::{Template, TemplateName};

/// Port for looking up build-context templates.
pub trait TemplateCatalog {
    /// Every template the catalog provides, in menu order.
    fn names(&self) -> Vec<TemplateName>;

    /// Full content of a template.
    fn template(&self, name: TemplateName) -> Template;
}
