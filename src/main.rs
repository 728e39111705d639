use anyhow::{bail, Context as _};
use clap::{command, Arg};
use context::Context;
use generator::generate;
use std::path::PathBuf;

mod context;
mod generator;
mod metadata;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("post_dir")
                .help("Directory path of posts")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("_posts"),
            Arg::new("category_dir")
                .help("Directory path of category pages. Existing *.md files will be removed.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("category"),
        ])
        .get_matches();

    let post_dir: &PathBuf = matches
        .get_one("post_dir")
        .context("post_dir is required")?;
    let category_dir: &PathBuf = matches
        .get_one("category_dir")
        .context("category_dir is required")?;
    if category_dir.exists() && !category_dir.is_dir() {
        bail!("category_dir must be a directory.");
    }

    let handlebars = renderer::generate_renderer()?;
    Context::init(post_dir.to_owned(), category_dir.to_owned(), handlebars)?;

    let count = generate()?;
    println!("Categories generated, count {count}");

    Ok(())
}
