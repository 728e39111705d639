use anyhow::anyhow;
use std::{path::PathBuf, sync::OnceLock};

#[derive(Debug)]
pub(crate) struct Context {
    pub post_dir: PathBuf,
    pub category_dir: PathBuf,

    pub handlebars: handlebars::Handlebars<'static>,
}

static CONTEXT: OnceLock<Context> = OnceLock::new();

impl Context {
    pub fn init(
        post_dir: PathBuf,
        category_dir: PathBuf,
        handlebars: handlebars::Handlebars<'static>,
    ) -> anyhow::Result<()> {
        CONTEXT
            .set(Self {
                post_dir,
                category_dir,
                handlebars,
            })
            .map_err(|_| anyhow!("context is already initialized"))
    }

    pub fn instance() -> &'static Context {
        CONTEXT
            .get()
            .expect("Context::init must be called before generating")
    }
}
