use dialoguer::{Input, Select};

use crate::{
    errors::Error,
    exchange::Exchange,
    symbol::{validate, Symbol},
};

/// Source of the user's choices for one iteration. Any error returned here
/// ends the program.
pub trait Prompter {
    fn read_symbol(&mut self) -> Result<Symbol, Error>;

    fn select_exchange(&mut self) -> Result<Exchange, Error>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_symbol(&mut self) -> Result<Symbol, Error> {
        let input: String = Input::new()
            .with_prompt("COIN SYMBOL")
            .allow_empty(true)
            .validate_with(|input: &String| validate(input))
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))?;
        Ok(Symbol::new(&input)?)
    }

    fn select_exchange(&mut self) -> Result<Exchange, Error> {
        let labels: Vec<&str> = Exchange::ALL.iter().map(Exchange::label).collect();
        let selection = Select::new()
            .with_prompt("Select Exchange")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| Error::Prompt(e.to_string()))?
            .ok_or_else(|| Error::Prompt("selection cancelled".to_owned()))?;
        Exchange::ALL
            .get(selection)
            .copied()
            .ok_or_else(|| Error::Prompt(format!("no exchange at index {}", selection)))
    }
}
