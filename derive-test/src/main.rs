use argflags::{Outcome, Parser, ParserConfig};

fn main() -> serde_json::Result<()> {
    let data = r#"
    {
        "name": "derive-test",
        "flags": [{
            "name": "-t",
            "alias": "--test",
            "about": "example presence flag"
        }, {
            "name": "-n",
            "alias": "--number",
            "arity": { "UpTo": 5 },
            "about": "up to five numbers"
        }, {
            "name": "-str",
            "alias": "--string",
            "arity": "Unbounded"
        }]
    }"#;

    let config: ParserConfig = serde_json::from_str(data)?;
    let mut parser = Parser::from(config);
    if parser.parse(std::env::args()) == Outcome::HelpShown {
        return Ok(());
    }
    for key in &["-t", "-n", "-str"] {
        if let Some(flag) = parser.flag(key) {
            println!("{}", serde_json::to_string(flag)?);
        }
    }
    println!("{}", serde_json::to_string(parser.arguments())?);
    Ok(())
}
