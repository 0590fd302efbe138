//! Run command implementation

use anyhow::{Context, Result};
use rangevec::{Interval, IntervalList};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Read, Write};

use crate::commands::{
    DumpFormat,
    script::{self, Statement},
};
use crate::utils::validate_file_exists;

#[derive(Serialize)]
struct DumpInfo<'a> {
    list: &'a str,
    run_count: usize,
    intervals: Vec<Interval>,
}

pub fn run(script_path: &str, format: DumpFormat) -> Result<()> {
    let text = read_script(script_path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Session::new(format).execute(&text, &mut out)
}

fn read_script(script_path: &str) -> Result<String> {
    if script_path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read script from stdin")?;
        return Ok(text);
    }
    validate_file_exists(script_path)?;
    std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script: {script_path}"))
}

/// Named lists manipulated by a script.
pub struct Session {
    lists: BTreeMap<String, IntervalList>,
    format: DumpFormat,
}

impl Session {
    pub fn new(format: DumpFormat) -> Session {
        Session {
            lists: BTreeMap::new(),
            format,
        }
    }

    /// Parses and executes `text`, writing statement output to `out`.
    pub fn execute(&mut self, text: &str, out: &mut impl Write) -> Result<()> {
        let statements = script::parse(text)?;
        log::debug!("executing {} statements", statements.len());
        for (line_no, statement) in statements {
            self.apply(&statement, out)
                .with_context(|| format!("Statement on line {line_no} failed"))?;
        }
        Ok(())
    }

    fn apply(&mut self, statement: &Statement, out: &mut impl Write) -> Result<()> {
        match statement {
            Statement::Set {
                list,
                position,
                value,
            } => {
                self.list_mut(list).insert(*position, *value)?;
            }
            Statement::Fill {
                list,
                begin,
                end,
                value,
            } => {
                self.list_mut(list).insert_range(*begin..*end, *value)?;
            }
            Statement::Get { list, position } => {
                writeln!(out, "{}", self.list(list)?.get(*position))?;
            }
            Statement::Remove { list, position } => {
                let removed = self.list_mut(list).remove(*position)?;
                writeln!(out, "removed {removed}")?;
            }
            Statement::Mul { lhs, rhs } => {
                let total = self.list(lhs)?.combine(self.list(rhs)?);
                writeln!(out, "{total}")?;
            }
            Statement::Copy { dst, src } => {
                let copy = self.list(src)?.try_clone()?;
                self.lists.insert(dst.clone(), copy);
            }
            Statement::Dump { list } => {
                let name = list.as_str();
                let list = self.list(name)?;
                match self.format {
                    DumpFormat::Text => writeln!(out, "{name}: {list}")?,
                    DumpFormat::Json => {
                        let info = DumpInfo {
                            list: name,
                            run_count: list.len(),
                            intervals: list.iter().copied().collect(),
                        };
                        writeln!(out, "{}", serde_json::to_string(&info)?)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn list(&self, name: &str) -> Result<&IntervalList> {
        self.lists
            .get(name)
            .with_context(|| format!("Unknown list '{name}'"))
    }

    fn list_mut(&mut self, name: &str) -> &mut IntervalList {
        self.lists.entry(name.to_string()).or_default()
    }
}
