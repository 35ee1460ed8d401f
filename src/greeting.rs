use std::io;

use crate::console::OutputSink;

const FIRST_NAME: &str = "Victor";
const LAST_NAME: &str = "Hugo";

fn introduction(first_name: &str, last_name: &str) -> String {
    format!(
        "My first name is {} and my last name is {}.",
        first_name, last_name
    )
}

/// Greet with the built-in name
pub fn greet<O: OutputSink + ?Sized>(out: &mut O) -> io::Result<()> {
    out.write_line(&introduction(FIRST_NAME, LAST_NAME))
}

pub fn greet_with_params<O: OutputSink + ?Sized>(
    out: &mut O,
    first_name: &str,
    last_name: &str,
) -> io::Result<()> {
    out.write_line(&introduction(first_name, last_name))
}

/// Greet, then hand a short hello to `callback`.\
/// The callback decides what to do with it (print it, store it...)
pub fn greet_with_callback<O, F>(
    out: &mut O,
    first_name: &str,
    last_name: &str,
    callback: F,
) -> io::Result<()>
where
    O: OutputSink + ?Sized,
    F: FnOnce(&str),
{
    out.write_line(&introduction(first_name, last_name))?;
    callback(&format!("Hello {} {}!", first_name, last_name));
    Ok(())
}

/// Every greeting, in order
pub fn run_all<O: OutputSink + ?Sized>(out: &mut O) -> io::Result<()> {
    out.write_line("Hello, World from JS world!")?;

    greet(out)?;
    greet_with_params(out, "Alice", "Hernandez")?;
    greet_with_params(out, "Micheal", "Deo")?;

    // The callback can't borrow `out` while greet_with_callback holds it
    let mut hello = None;
    greet_with_callback(out, "Mary", "Luke", |greeting| {
        hello = Some(greeting.to_string())
    })?;
    if let Some(hello) = hello {
        out.write_line(&hello)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::{captured, lines};

    #[test]
    fn test_greet() {
        let mut out = captured();
        greet(&mut out).unwrap();
        assert_eq!(lines(out), vec!["My first name is Victor and my last name is Hugo."]);
    }

    #[test]
    fn test_greet_with_params() {
        let mut out = captured();
        greet_with_params(&mut out, "Alice", "Hernandez").unwrap();
        assert_eq!(
            lines(out),
            vec!["My first name is Alice and my last name is Hernandez."]
        );
    }

    #[test]
    fn test_callback_called_once() {
        let mut out = captured();
        let mut received = Vec::new();
        greet_with_callback(&mut out, "Mary", "Luke", |greeting| {
            received.push(greeting.to_string())
        })
        .unwrap();

        assert_eq!(received, vec!["Hello Mary Luke!"]);
        assert_eq!(lines(out), vec!["My first name is Mary and my last name is Luke."]);
    }

    #[test]
    fn test_run_all() {
        let mut out = captured();
        run_all(&mut out).unwrap();
        assert_eq!(
            lines(out),
            vec![
                "Hello, World from JS world!",
                "My first name is Victor and my last name is Hugo.",
                "My first name is Alice and my last name is Hernandez.",
                "My first name is Micheal and my last name is Deo.",
                "My first name is Mary and my last name is Luke.",
                "Hello Mary Luke!",
            ]
        );
    }
}
