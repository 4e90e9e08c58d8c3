use std::env;

use argflags::{Arity, Outcome, Parser};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ARGFLAGS_DEBUG=1 shows every step of the scan
    let level = if env::var_os("ARGFLAGS_DEBUG").is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;

    let mut parser = Parser::new();
    parser
        .set_program_name("demo")
        .add_flag("-t", "--test", Arity::None, "Boolean test flag.")
        .add_flag("-n", "--number", Arity::UpTo(5), "Up to five numbers.")
        .add_flag("-str", "--string", Arity::Unbounded, "Any number of strings.");

    if parser.parse(env::args()) == Outcome::HelpShown {
        info!("help shown, nothing else to do");
        return Ok(());
    }

    println!("found flag test : {}", parser.flag_found("-t"));
    println!("Numbers : ");
    for v in parser.flag_results("-n") {
        println!(" - {}", v);
    }
    println!("String : {}", parser.flag_result("-str"));
    println!("Arguments : ");
    for a in parser.arguments() {
        println!(" - {}", a);
    }
    Ok(())
}
