//! HTML views rendered with `askama`. Templates live in `templates/`.

use askama::Template;
use classgroup::GroupSet;

/// The roster form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub default_group_size: usize,
}

/// The groups just drawn, with a link to the PDF.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsPage<'a> {
    pub groups: &'a GroupSet,
    pub total_students: usize,
}
