//! Command-line and environment input for a single search.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use seedpick_core::{MediaType, Query};

pub const USAGE: &str = "usage: seedpick <movie|show> <query words...>";

/// Build the query from positional arguments (program name excluded) and
/// the `SEEDPICK_CATEGORIES` / `SEEDPICK_MIN_SEEDERS` variables in `env`.
pub fn parse_query(args: &[String], env: &HashMap<String, String>) -> Result<Query> {
    let Some((media_type, words)) = args.split_first() else {
        bail!("missing media type\n{}", USAGE);
    };

    let media_type: MediaType = media_type
        .parse()
        .map_err(|e| anyhow::anyhow!("{}\n{}", e, USAGE))?;

    let text = words.join(" ");
    if text.trim().is_empty() {
        bail!("missing query\n{}", USAGE);
    }

    let mut query = Query::new(text.trim(), media_type);

    if let Some(categories) = env.get("SEEDPICK_CATEGORIES") {
        query = query.with_categories(
            categories
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty()),
        );
    }

    if let Some(min_seeders) = env.get("SEEDPICK_MIN_SEEDERS") {
        let min_seeders: u32 = min_seeders
            .trim()
            .parse()
            .with_context(|| format!("Invalid SEEDPICK_MIN_SEEDERS: {:?}", min_seeders))?;
        query = query.with_min_seeders(min_seeders);
    }

    Ok(query)
}
