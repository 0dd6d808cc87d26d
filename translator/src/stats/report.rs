use std::{
    collections::HashSet,
    fmt::{self, Write as _},
    fs,
    path::PathBuf,
};

use tracing::debug;

use crate::{error::Error, stats::Stats};

/// One requested line of a statistics file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsItem {
    Loc,
    Comments,
    Labels,
    Jumps,
    FwJumps,
    BackJumps,
    BadJumps,
    Frequent,
    Print(String),
    Eol,
}

/// A statistics file together with the items requested for it, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsTarget {
    pub path: PathBuf,
    pub items: Vec<StatsItem>,
}

impl StatsTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            items: Vec::new(),
        }
    }

    pub fn render(&self, stats: &Stats) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_items(&mut out, stats);
        out
    }

    fn write_items(&self, out: &mut String, stats: &Stats) -> fmt::Result {
        for item in &self.items {
            match item {
                StatsItem::Loc => writeln!(out, "{}", stats.instructions)?,
                StatsItem::Comments => writeln!(out, "{}", stats.comments)?,
                StatsItem::Labels => writeln!(out, "{}", stats.labels)?,
                StatsItem::Jumps => writeln!(out, "{}", stats.jumps())?,
                StatsItem::FwJumps => writeln!(out, "{}", stats.forward_jumps)?,
                StatsItem::BackJumps => writeln!(out, "{}", stats.back_jumps)?,
                StatsItem::BadJumps => writeln!(out, "{}", stats.bad_jumps)?,
                StatsItem::Frequent => writeln!(out, "{}", stats.frequent())?,
                StatsItem::Print(text) => writeln!(out, "{text}")?,
                StatsItem::Eol => writeln!(out)?,
            }
        }
        Ok(())
    }
}

/// Each statistics file may be named only once.
pub fn check_targets(targets: &[StatsTarget]) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for target in targets {
        if !seen.insert(&target.path) {
            return Err(Error::DuplicateStatsFile(target.path.clone()));
        }
    }
    Ok(())
}

pub fn write_stats(targets: &[StatsTarget], stats: &Stats) -> Result<(), Error> {
    check_targets(targets)?;

    for target in targets {
        debug!(path = %target.path.display(), items = target.items.len(), "writing statistics");
        fs::write(&target.path, target.render(stats)).map_err(|source| Error::Output {
            path: target.path.clone(),
            source,
        })?;
    }

    Ok(())
}
