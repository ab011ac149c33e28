use clap::{Arg, ArgAction, Command};

pub fn arg_parser() -> Command {
    Command::new("library-contract")
        .about("Check the Library API against its request/response contract")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (-v for debug, -vv for trace)"),
        )
        .subcommand(
            Command::new("check")
                .about("Run scenarios against the service and report the results")
                .arg(
                    Arg::new("base-url")
                        .long("base-url")
                        .value_name("URL")
                        .help("Override the configured base url"),
                )
                .arg(
                    Arg::new("scenario")
                        .short('s')
                        .long("scenario")
                        .value_name("NAME")
                        .action(ArgAction::Append)
                        .help("Only run the named scenario; may be repeated"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the report as JSON"),
                ),
        )
        .subcommand(Command::new("list").about("List every scenario with its expected status"))
        .subcommand(Command::new("config").about("Print the default configuration as TOML"))
}
