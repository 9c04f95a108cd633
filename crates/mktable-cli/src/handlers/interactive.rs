use crate::config::Config;
use crate::input::LineParser;
use anyhow::Result;
use mktable_core::Table;
use std::io::{BufRead, Write};

/// Reads rows from `reader` until the exit token or end of input, then
/// writes the table. With `prompt` set, usage and a prompt per row are
/// written to `out` first.
pub fn handle(reader: impl BufRead, prompt: bool, config: &Config, out: &mut dyn Write) -> Result<()> {
    let tokens = &config.input;
    if prompt {
        writeln!(out, "Enter table rows. Use '{}' to separate cells.", tokens.delimiter)?;
        writeln!(
            out,
            "Use '{}' for an empty cell, and '{}' to finish input.\n",
            tokens.empty_token, tokens.exit_token
        )?;
    }

    let parser = LineParser::new(tokens);
    let rows = parser.read_rows(reader, || {
        if prompt {
            write!(out, "Enter row: ")?;
            out.flush()?;
        }
        Ok(())
    })?;

    if rows.is_empty() {
        anyhow::bail!("No rows entered");
    }

    let mut table = Table::with_style(config.style.clone());
    table.replace_all_rows(rows);

    if prompt {
        writeln!(out)?;
    }
    write!(out, "{}", table.render()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, prompt: bool, config: &Config) -> Result<String> {
        let mut out = Vec::new();
        handle(Cursor::new(input), prompt, config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_rows_until_exit_token() -> Result<()> {
        let out = run("ID;Name\n1;Alice\n2;@e\n@x\n3;ignored\n", false, &Config::default())?;

        assert_eq!(
            out,
            "+----+-------+\n| ID | Name  |\n+----+-------+\n| 1  | Alice |\n| 2  |       |\n+----+-------+\n"
        );
        Ok(())
    }

    #[test]
    fn test_prompts_are_written_when_enabled() -> Result<()> {
        let out = run("a;b\n@x\n", true, &Config::default())?;

        assert!(out.starts_with("Enter table rows. Use ';' to separate cells.\n"));
        assert_eq!(out.matches("Enter row: ").count(), 2);
        assert!(out.ends_with("| a | b |\n+---+---+\n+---+---+\n"));
        Ok(())
    }

    #[test]
    fn test_custom_style_and_tokens() -> Result<()> {
        let mut config = Config::default();
        config.style.empty = "n/a".to_string();
        config.input.empty_token = "?".to_string();
        config.input.exit_token = "done".to_string();

        let out = run("k;v\nx;?\ndone\n", false, &config)?;
        assert!(out.contains("| x | n/a |"));
        Ok(())
    }

    #[test]
    fn test_no_rows_is_an_error() {
        let err = run("\n@x\n", false, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("No rows entered"));
    }
}
