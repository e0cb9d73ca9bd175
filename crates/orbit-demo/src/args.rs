//! Command-line arguments.

use std::path::PathBuf;

use orbit_types::error::{OrbitError, Result};
use orbit_types::input::InputEvent;

/// Items the demo creates when `--items` is not given.
pub const DEFAULT_ITEMS: usize = 6;

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
pub struct DemoArgs {
    /// `--config FILE`, falling back to `ORBIT_CONFIG` in `main`.
    pub config: Option<PathBuf>,
    /// `--items N`.
    pub items: Option<usize>,
    /// `--json`: print snapshots as JSON lines.
    pub json: bool,
    /// Remaining positional tokens, parsed as events.
    pub events: Vec<InputEvent>,
}

impl DemoArgs {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| OrbitError::Config("--config needs a path".into()))?;
                    parsed.config = Some(PathBuf::from(path));
                },
                "--items" => {
                    let n = args
                        .next()
                        .ok_or_else(|| OrbitError::Config("--items needs a number".into()))?;
                    let n = n
                        .parse()
                        .map_err(|_| OrbitError::Config(format!("invalid item count `{n}`")))?;
                    parsed.items = Some(n);
                },
                "--json" => parsed.json = true,
                token => parsed.events.push(token.parse()?),
            }
        }
        Ok(parsed)
    }

    pub fn item_count(&self) -> usize {
        self.items.unwrap_or(DEFAULT_ITEMS)
    }
}

/// Parse a line of whitespace-separated event tokens.
pub fn parse_line(line: &str) -> Result<Vec<InputEvent>> {
    line.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_types::input::{Button, Rotation};

    fn args(list: &[&str]) -> Result<DemoArgs> {
        DemoArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn empty_args() {
        let a = args(&[]).unwrap();
        assert_eq!(a, DemoArgs::default());
        assert_eq!(a.item_count(), DEFAULT_ITEMS);
    }

    #[test]
    fn flags_and_events() {
        let a = args(&["--config", "c.toml", "--items", "4", "--json", "right", "confirm"]).unwrap();
        assert_eq!(a.config, Some(PathBuf::from("c.toml")));
        assert_eq!(a.item_count(), 4);
        assert!(a.json);
        assert_eq!(
            a.events,
            vec![
                InputEvent::Rotary(Rotation::Right),
                InputEvent::ButtonPress(Button::Confirm),
            ]
        );
    }

    #[test]
    fn missing_flag_value() {
        assert!(matches!(args(&["--config"]), Err(OrbitError::Config(_))));
        assert!(matches!(args(&["--items"]), Err(OrbitError::Config(_))));
    }

    #[test]
    fn bad_item_count() {
        let err = args(&["--items", "many"]).unwrap_err();
        assert!(format!("{err}").contains("many"));
    }

    #[test]
    fn unknown_token() {
        assert!(matches!(args(&["wiggle"]), Err(OrbitError::Input(_))));
    }

    #[test]
    fn parse_line_splits_tokens() {
        let events = parse_line("  right right\tleft ").unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], InputEvent::Rotary(Rotation::Left));
        assert!(parse_line("").unwrap().is_empty());
    }
}
