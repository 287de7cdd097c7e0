mod artifacts;
mod commands;
mod terminal;

use commands::{CommandLine, analyze};
use dchound_common::config::Config;
use dchound_common::fail;
use terminal::{logging, print};

fn main() {
    let command_line = CommandLine::parse_args();

    logging::init(command_line.verbose);

    let cfg = Config {
        no_banner: command_line.no_banner,
        json_only: command_line.json_only,
        verbose: command_line.verbose,
        strict_open: command_line.strict_open,
        output_dir: command_line.output.clone(),
    };

    print::banner(cfg.no_banner);

    if let Err(error) = analyze::run(&command_line.scan_file, &cfg) {
        fail!("{error:#}");
        std::process::exit(1);
    }
}
