use std::path::PathBuf;

use clap::{ArgAction, ArgMatches, Args};
use translator::{
    Error,
    stats::{StatsItem, StatsTarget},
};

/// Statistics options. Read back through [`collect_targets`], which needs the
/// command-line position of every occurrence.
#[allow(dead_code)]
#[derive(Args, Debug)]
#[command(next_help_heading = "Statistics")]
pub struct StatsArgs {
    /// Start a new statistics group written to FILE
    #[arg(long, value_name = "FILE")]
    stats: Vec<PathBuf>,

    /// Number of instructions
    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    loc: Vec<bool>,

    /// Number of comments
    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    comments: Vec<bool>,

    /// Number of distinct labels
    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    labels: Vec<bool>,

    /// Number of jumps (forward, backward and unresolved)
    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    jumps: Vec<bool>,

    /// Number of forward jumps
    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    fwjumps: Vec<bool>,

    /// Number of backward jumps
    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    backjumps: Vec<bool>,

    /// Number of jumps to undeclared labels
    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    badjumps: Vec<bool>,

    /// Opcodes ordered by how often they occur
    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    frequent: Vec<bool>,

    /// Print STRING as is
    #[arg(long, value_name = "STRING")]
    print: Vec<String>,

    /// Print an empty line
    #[arg(long, action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    eol: Vec<bool>,
}

const FLAGS: [(&str, StatsItem); 9] = [
    ("loc", StatsItem::Loc),
    ("comments", StatsItem::Comments),
    ("labels", StatsItem::Labels),
    ("jumps", StatsItem::Jumps),
    ("fwjumps", StatsItem::FwJumps),
    ("backjumps", StatsItem::BackJumps),
    ("badjumps", StatsItem::BadJumps),
    ("frequent", StatsItem::Frequent),
    ("eol", StatsItem::Eol),
];

enum Request {
    Open(PathBuf),
    Item(&'static str, StatsItem),
}

/// Splits the statistics options into one target per `--stats`, in command-line order.
pub fn collect_targets(matches: &ArgMatches) -> Result<Vec<StatsTarget>, Error> {
    let mut requests: Vec<(usize, Request)> = Vec::new();

    if let (Some(indices), Some(paths)) = (
        matches.indices_of("stats"),
        matches.get_many::<PathBuf>("stats"),
    ) {
        requests.extend(indices.zip(paths).map(|(i, p)| (i, Request::Open(p.clone()))));
    }

    if let (Some(indices), Some(texts)) = (
        matches.indices_of("print"),
        matches.get_many::<String>("print"),
    ) {
        requests.extend(
            indices
                .zip(texts)
                .map(|(i, t)| (i, Request::Item("print", StatsItem::Print(t.clone())))),
        );
    }

    for (id, item) in FLAGS {
        if let Some(indices) = matches.indices_of(id) {
            requests.extend(indices.map(|i| (i, Request::Item(id, item.clone()))));
        }
    }

    requests.sort_by_key(|(i, _)| *i);

    let mut targets: Vec<StatsTarget> = Vec::new();
    for (_, request) in requests {
        match request {
            Request::Open(path) => targets.push(StatsTarget::new(path)),
            Request::Item(id, item) => targets
                .last_mut()
                .ok_or_else(|| Error::Usage(format!("--{id} needs a preceding --stats")))?
                .items
                .push(item),
        }
    }

    Ok(targets)
}
