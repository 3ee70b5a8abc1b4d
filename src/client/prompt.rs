use std::io::{BufRead, Write};

use tracing::debug;

use crate::common::error::Result;
use crate::common::types::BitLengthPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Generate,
    Exit,
}

/// Reads one line with surrounding whitespace removed, or `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "RSA Key Generator")?;
    writeln!(output, "-----------------")?;
    writeln!(output, "1. Generate new key pair")?;
    writeln!(output, "2. Exit")?;
    Ok(())
}

/// Prompts until the user picks a menu entry. End of input counts as exit.
pub fn read_menu_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<MenuChoice> {
    loop {
        write!(output, "Select an option: ")?;
        output.flush()?;

        match read_line(input)?.as_deref() {
            None | Some("2") => return Ok(MenuChoice::Exit),
            Some("1") => return Ok(MenuChoice::Generate),
            Some(other) => {
                debug!(choice = other, "rejected menu choice");
                writeln!(output, "Please enter 1 or 2.")?;
            }
        }
    }
}

/// Prompts until the answer is an integer the policy accepts. Returns `None`
/// at end of input.
pub fn read_bit_length<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    policy: &BitLengthPolicy,
) -> Result<Option<usize>> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(bits) if policy.allows(bits) => return Ok(Some(bits)),
            _ => {
                debug!(input = %line, %policy, "rejected bit length");
                writeln!(output, "{}", policy.hint())?;
            }
        }
    }
}

/// Prompts for the private key password. Empty input means no password.
pub fn read_password<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    write!(
        output,
        "Enter a password to protect your private key (leave empty for no password): "
    )?;
    output.flush()?;

    Ok(read_line(input)?.filter(|password| !password.is_empty()))
}
