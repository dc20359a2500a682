//! Parsing of interactive session commands.

use anyhow::Result;

use converter_hex::Input;
use converter_types::{CurrencyCode, Slot};

pub const HELP: &str = "\
Commands:
  from <CODE>     select the currency to convert from
  to <CODE>       select the currency to convert to
  amount <TEXT>   enter the amount
  convert         fetch the rate and convert
  swap            exchange the two currencies
  reset           restore the default selection
  help            show this list
  quit            leave the session";

/// One line typed into an interactive session.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Input(Input),
    Help,
    Quit,
    Empty,
}

pub fn parse_currency(s: &str) -> Result<CurrencyCode> {
    s.parse().map_err(|_| {
        anyhow::anyhow!(
            "Unknown currency: {}. Run `currency-converter currencies` for the list",
            s.trim()
        )
    })
}

pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "" => Command::Empty,
        "from" => Command::Input(Input::SelectCurrency {
            slot: Slot::Source,
            code: parse_currency(arg)?,
        }),
        "to" => Command::Input(Input::SelectCurrency {
            slot: Slot::Target,
            code: parse_currency(arg)?,
        }),
        "amount" => Command::Input(Input::EditAmount(arg.to_string())),
        "convert" => Command::Input(Input::Submit),
        "swap" => Command::Input(Input::Swap),
        "reset" => Command::Input(Input::Initialize),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => anyhow::bail!("Unknown command: {}. Type `help` for the list", other),
    };
    Ok(command)
}
