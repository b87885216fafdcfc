//! Unit tests for menu input parsing and the entry registry.
//!
//! No commands with real side effects are registered; dispatch is exercised
//! with stub entries.

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;

use super::types::{CommandMetadata, CommandResult};
use super::{MenuCommand, MenuError, MenuRegistry, parse_selection};

struct EchoCommand {
    name: &'static str,
}

#[async_trait]
impl MenuCommand for EchoCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        Ok(format!("{}:{}", self.name, args.join(",")))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: self.name.to_string(),
            description: format!("{} entry", self.name),
            args_hint: None,
        }
    }
}

fn registry_with(names: &[&'static str]) -> MenuRegistry {
    let mut registry = MenuRegistry::new();
    for name in names {
        registry.register(Box::new(EchoCommand { name }));
    }
    registry
}

#[test]
fn parse_selection_plain_number() {
    let (selection, args) = parse_selection("3").unwrap();

    assert_eq!(selection, 3);
    assert!(args.is_empty());
}

#[test]
fn parse_selection_with_argument() {
    let (selection, args) = parse_selection("2 14").unwrap();

    assert_eq!(selection, 2);
    assert_eq!(args, ["14"]);
}

#[test]
fn parse_selection_keeps_extra_arguments() {
    let (selection, args) = parse_selection("5 a b").unwrap();

    assert_eq!(selection, 5);
    assert_eq!(args, ["a", "b"]);
}

#[test]
fn parse_selection_rejects_non_numeric_input() {
    assert!(matches!(
        parse_selection("play"),
        Err(MenuError::InvalidSelection(_))
    ));
    assert!(matches!(
        parse_selection("2x"),
        Err(MenuError::InvalidSelection(_))
    ));
}

#[test]
fn parse_selection_rejects_empty_input() {
    assert!(matches!(
        parse_selection("   "),
        Err(MenuError::InvalidSelection(_))
    ));
}

#[tokio::test]
async fn registry_dispatches_in_display_order() {
    let registry = registry_with(&["first", "second", "third"]);

    let output = registry.execute(2, &["x".to_string()]).await.unwrap();

    assert_eq!(output, "second:x");
}

#[tokio::test]
async fn registry_rejects_out_of_range_selection() {
    let registry = registry_with(&["only"]);

    assert!(matches!(
        registry.execute(0, &[]).await,
        Err(MenuError::InvalidSelection(_))
    ));
    assert!(matches!(
        registry.execute(5, &[]).await,
        Err(MenuError::InvalidSelection(_))
    ));
}

#[test]
fn registry_metadata_follows_registration_order() {
    let registry = registry_with(&["first", "second"]);

    let names: Vec<String> = registry
        .metadata()
        .into_iter()
        .map(|metadata| metadata.name)
        .collect();

    assert_eq!(names, ["first", "second"]);
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}
