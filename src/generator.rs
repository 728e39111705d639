use std::{
    collections::BTreeSet,
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR},
};

use anyhow::{bail, Context as _};
use handlebars::Handlebars;
use log::{debug, info, warn};

use crate::{context::Context, metadata::read_categories};

mod data;
mod utils;

use data::CategoryPageData;
use utils::list_markdown_files;

fn collect_categories(post_dir: &Path) -> anyhow::Result<BTreeSet<String>> {
    if !post_dir.exists() {
        warn!("{post_dir:?} does not exist. ignoring...");
    }
    let posts = list_markdown_files(post_dir)?;
    info!("Scanning {} posts in {:?}", posts.len(), post_dir);

    let mut categories = BTreeSet::new();
    for post in posts.iter() {
        let post_categories = read_categories(post)?;
        debug!("{post:?}: {post_categories:?}");
        categories.extend(post_categories);
    }

    Ok(categories)
}

fn remove_stale_pages(category_dir: &Path) -> anyhow::Result<usize> {
    let stale = list_markdown_files(category_dir)?;
    fs_extra::remove_items(stale.as_slice())
        .with_context(|| format!("while removing old pages in {:?}", category_dir))?;
    info!("Removed {} old pages", stale.len());

    Ok(stale.len())
}

fn generate_category_page(
    category_dir: &Path,
    category: &str,
    handlebars: &Handlebars<'static>,
) -> anyhow::Result<()> {
    if Path::new(category)
        .components()
        .any(|c| c == Component::ParentDir)
    {
        bail!("category {:?} points outside {:?}", category, category_dir);
    }
    // appended rather than joined so an absolute token stays under category_dir
    let mut path = category_dir.as_os_str().to_owned();
    path.push(MAIN_SEPARATOR_STR);
    path.push(format!("{category}.md"));
    let path = PathBuf::from(path);
    debug!("Writing {path:?}");

    let fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("while creating {:?}", path))?;

    let mut writer = BufWriter::new(fd);
    let data = CategoryPageData { category };
    handlebars
        .render_to_write("category", &data, &mut writer)
        .with_context(|| format!("while generating for {:?}", category))?;
    writer
        .flush()
        .with_context(|| format!("while writing {:?}", path))?;
    Ok(())
}

fn generate_in(
    post_dir: &Path,
    category_dir: &Path,
    handlebars: &Handlebars<'static>,
) -> anyhow::Result<usize> {
    let categories = collect_categories(post_dir)?;

    remove_stale_pages(category_dir)?;
    fs_extra::dir::create_all(category_dir, false)
        .with_context(|| format!("while creating {:?}", category_dir))?;

    for category in categories.iter() {
        generate_category_page(category_dir, category, handlebars)?;
    }
    info!("Generated {} pages in {:?}", categories.len(), category_dir);

    Ok(categories.len())
}

pub(crate) fn generate() -> anyhow::Result<usize> {
    let s = Context::instance();
    generate_in(&s.post_dir, &s.category_dir, &s.handlebars)
}
