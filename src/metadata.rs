use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::Context;

const DELIMITER: &str = "---";
const CATEGORY_KEY: &str = "category:";

/// Stops at the first `category:` line or the closing `---`, whichever comes first.
pub(crate) fn scan_categories<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut in_front_matter = false;

    for line in reader.lines() {
        let line = line?;
        // a lone \r also ends a line
        for line in line.split('\r') {
            if in_front_matter {
                let mut tokens = line.split_whitespace();
                if tokens.next() == Some(CATEGORY_KEY) {
                    return Ok(tokens.map(str::to_string).collect());
                }
            }
            if line.trim() == DELIMITER {
                if in_front_matter {
                    return Ok(vec![]);
                }
                in_front_matter = true;
            }
        }
    }

    Ok(vec![])
}

pub(crate) fn read_categories(path: &Path) -> anyhow::Result<Vec<String>> {
    let fd = File::open(path).with_context(|| format!("while opening {:?}", path))?;
    scan_categories(BufReader::new(fd)).with_context(|| format!("while reading {:?}", path))
}
