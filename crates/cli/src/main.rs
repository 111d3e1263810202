#![forbid(unsafe_code)]

mod commands;
mod render;

use commands::{parse_command, run_command, split_json_flag, usage};
use fd_state::Dashboard;
use std::io::Write as _;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut dashboard = Dashboard::seeded();

    if args.is_empty() {
        repl(&mut dashboard);
        return;
    }

    let (json, rest) = split_json_flag(&args);
    let command = match parse_command(&rest) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{}", usage());
            std::process::exit(2);
        }
    };
    match run_command(&mut dashboard, &command, json) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}

fn repl(dashboard: &mut Dashboard) {
    println!("freedash (type 'help' for commands, 'quit' to exit)");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = stdout.flush();

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            continue;
        }
        if matches!(tokens[0].as_str(), "quit" | "exit") {
            break;
        }

        let (json, rest) = split_json_flag(&tokens);
        let result =
            parse_command(&rest).and_then(|command| run_command(dashboard, &command, json));
        match result {
            Ok(output) => println!("{output}"),
            Err(err) => println!("error: {err}"),
        }
    }
}
