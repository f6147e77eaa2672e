mod cli;
mod copy_cmd;
mod highlight_cmd;
mod info_cmd;
mod page_range;
mod search_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Search {
            ref file,
            ref needle,
            ref pages,
            max_hits,
            ref format,
        } => search_cmd::run(file, needle, pages.as_deref(), max_hits, format),
        cli::Commands::Highlight {
            ref file,
            ref rect,
            ref pages,
            max_hits,
            ref format,
        } => highlight_cmd::run(file, rect, pages.as_deref(), max_hits, format),
        cli::Commands::Copy {
            ref file,
            ref rect,
            ref pages,
            ref format,
        } => copy_cmd::run(file, rect.as_deref(), pages.as_deref(), format),
        cli::Commands::Info {
            ref file,
            ref format,
        } => info_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
