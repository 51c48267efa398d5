//! dialoguer-backed prompts

use dialoguer::{Input, Select};
use std::io;
use tsinit_projects::{Prompter, Result, TemplateKind};

/// Prompts on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask_project_name(&mut self) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt("Project name")
            .allow_empty(true)
            .interact_text();
        aborted_as_none(answer)
    }

    fn select_template(&mut self, choices: &[TemplateKind]) -> Result<Option<String>> {
        let labels: Vec<&str> = choices.iter().map(|t| t.label()).collect();

        let selection = Select::new()
            .with_prompt("Select a template")
            .items(&labels)
            .default(0)
            .interact_opt();

        Ok(aborted_as_none(selection)?
            .flatten()
            .map(|index| choices[index].as_str().to_string()))
    }
}

/// An interrupted prompt is an abort, not a failure
fn aborted_as_none<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            let e = io::Error::from(e);
            if e.kind() == io::ErrorKind::Interrupted {
                Ok(None)
            } else {
                Err(e.into())
            }
        }
    }
}
