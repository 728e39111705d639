use anyhow::Context;
use handlebars::Handlebars;

const CATEGORY_TEMPLATE: &str = concat!(
    "---\n",
    "layout: category\n",
    "title: \"Tag: {{category}}\"\n",
    "category: {{category}}\n",
    "robots: noindex\n",
    "---\n",
);

pub(crate) fn generate_renderer() -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = handlebars::Handlebars::new();
    // output is front matter, not HTML: categories go in verbatim
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string("category", CATEGORY_TEMPLATE)
        .context("category template")?;

    Ok(handlebars)
}
