use simsh::core::config::Config;
use simsh::error::ShellError;
use simsh::flags::Flags;
use std::env;
use std::io::{self, IsTerminal};
use std::process;

fn fail(name: &str, flags: &Flags, e: ShellError) -> ! {
    eprintln!("{}: {}", name, e);
    if e.is_usage_error() {
        eprint!("{}", flags.usage());
    }
    process::exit(e.exit_code());
}

fn main() {
    let mut args = env::args();
    let program_name = args.next();
    let args: Vec<String> = args.collect();
    let name = program_name.clone().unwrap_or_else(|| "simsh".to_string());

    let mut flags = Flags::new();
    if let Err(e) = flags.parse(&args) {
        fail(&name, &flags, e);
    }

    if flags.is_set("help") {
        flags.print_help();
        return;
    }

    if flags.is_set("version") {
        println!("simsh {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let config = match Config::from_flags(&flags, program_name, io::stdin().is_terminal()) {
        Ok(config) => config,
        Err(e) => fail(&name, &flags, e.into()),
    };

    match simsh::shell::run(config) {
        Ok(status) => process::exit(status.into()),
        Err(e) => fail(&name, &flags, e),
    }
}
