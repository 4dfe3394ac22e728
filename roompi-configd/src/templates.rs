//! Askama templates for the edit form and confirmation page

use askama::Template;

/// The threshold edit form.
///
/// `profiles` is the built-in table's name list in display order; the
/// template appends the `Custom...` entry itself and the embedded script
/// autofills field values from `/load`.
#[derive(Template)]
#[template(path = "config.html")]
pub struct ConfigForm {
    profiles: Vec<String>,
}

impl ConfigForm {
    pub fn new(profiles: Vec<String>) -> Self {
        Self { profiles }
    }
}

/// Confirmation page rendered after a successful submission.
#[derive(Template)]
#[template(path = "result.html")]
pub struct SubmitResult;
