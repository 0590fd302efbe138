//! Parser for the line-oriented list script.
//!
//! One statement per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! set  <list> <pos> <value>
//! fill <list> <begin> <end> <value>
//! get  <list> <pos>
//! remove <list> <pos>
//! mul  <lhs> <rhs>
//! copy <dst> <src>
//! dump <list>
//! ```

use anyhow::{Context, Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Set {
        list: String,
        position: i64,
        value: i64,
    },
    Fill {
        list: String,
        begin: i64,
        end: i64,
        value: i64,
    },
    Get {
        list: String,
        position: i64,
    },
    Remove {
        list: String,
        position: i64,
    },
    Mul {
        lhs: String,
        rhs: String,
    },
    Copy {
        dst: String,
        src: String,
    },
    Dump {
        list: String,
    },
}

/// Parses a whole script, returning each statement with its 1-based line number.
pub fn parse(text: &str) -> Result<Vec<(usize, Statement)>> {
    let mut statements = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if let Some(statement) =
            parse_line(line).with_context(|| format!("Invalid statement on line {line_no}"))?
        {
            statements.push((line_no, statement));
        }
    }
    Ok(statements)
}

/// Parses one line; `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Statement>> {
    let line = match line.split_once('#') {
        Some((code, _)) => code,
        None => line,
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let statement = match (keyword, args) {
        ("set", [list, position, value]) => Statement::Set {
            list: list.to_string(),
            position: number(position)?,
            value: number(value)?,
        },
        ("fill", [list, begin, end, value]) => Statement::Fill {
            list: list.to_string(),
            begin: number(begin)?,
            end: number(end)?,
            value: number(value)?,
        },
        ("get", [list, position]) => Statement::Get {
            list: list.to_string(),
            position: number(position)?,
        },
        ("remove", [list, position]) => Statement::Remove {
            list: list.to_string(),
            position: number(position)?,
        },
        ("mul", [lhs, rhs]) => Statement::Mul {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        },
        ("copy", [dst, src]) => Statement::Copy {
            dst: dst.to_string(),
            src: src.to_string(),
        },
        ("dump", [list]) => Statement::Dump {
            list: list.to_string(),
        },
        ("set" | "fill" | "get" | "remove" | "mul" | "copy" | "dump", _) => {
            bail!("Wrong number of arguments for '{keyword}'")
        }
        _ => bail!("Unknown statement '{keyword}'"),
    };
    Ok(Some(statement))
}

fn number(token: &str) -> Result<i64> {
    token
        .parse()
        .with_context(|| format!("Expected an integer, found '{token}'"))
}
