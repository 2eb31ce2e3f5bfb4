use crate::CLAP_STYLING;
use clap::{arg, command};
use linkrank_corpus::{INVERTED_INDEX_FILE, RANK_LIST_FILE};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("linkrank")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linkrank")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress status lines and progress output")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-v --"verbose" "Log more detail to stderr (repeat for debug output)")
                .required(false)
                .action(clap::ArgAction::Count)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            command!("rank")
                .about("Rank every page of a corpus by weighted link propagation")
                .arg(
                    arg!(<DAMPING>)
                        .help("Damping factor, strictly between 0 and 1")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    arg!(<MIN_DIFF>)
                        .help("Stop once the summed weight change of a pass is at or below this")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    arg!(<MAX_ITERATIONS>)
                        .help("Upper bound on propagation passes")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(-d --"corpus-dir" <DIR>)
                        .required(false)
                        .help("Directory holding collection.txt and one <page>.txt per page")
                        .default_value("."),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, csv, markdown")
                        .value_parser(["text", "json", "csv", "markdown"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: print to stdout)"),
                )
                .arg(
                    arg!(--"strict")
                        .required(false)
                        .help("Fail on links to pages missing from the collection instead of skipping them")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("search")
                .about("Find ranked pages matching query terms in an inverted index")
                .arg(
                    arg!(<TERM> ...)
                        .help("Query terms, matched exactly"),
                )
                .arg(
                    arg!(--"rank-list" <PATH>)
                        .required(false)
                        .help("Rank listing produced by `linkrank rank`")
                        .default_value(RANK_LIST_FILE),
                )
                .arg(
                    arg!(--"index" <PATH>)
                        .required(false)
                        .help("Inverted index of `<term> <url> <url> ...` lines")
                        .default_value(INVERTED_INDEX_FILE),
                )
                .arg(
                    arg!(--"limit" <N>)
                        .required(false)
                        .help("Maximum number of results")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("30"),
                ),
        )
        .subcommand(
            command!("aggregate")
                .about("Combine several rankings into the one of least scaled footrule distance")
                .arg(
                    arg!(<FILE> ...)
                        .help("Rank files, each a whitespace separated list of urls, best first")
                        .num_args(2..),
                )
                .arg(
                    arg!(--"max-pages" <N>)
                        .required(false)
                        .help("Refuse inputs with more distinct pages than this")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                ),
        )
}
