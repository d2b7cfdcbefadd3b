//! Command-line input parsing.
//!
//! The shell reads one command per line and turns it into an [`Event`].
//! Category names given to `cat` are resolved with a fuzzy matcher, so
//! `cat dess` selects "Desserts".

use crate::app::Event;
use crate::domain::Category;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use thiserror::Error;

/// Every command with its usage and description, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("all", "Browse all recipes"),
    ("cat <id|name>", "Filter by category"),
    ("search <ingredient, ...>", "Search by ingredients (blank clears)"),
    ("clear", "Clear the ingredient search"),
    ("open <id>", "Open a recipe"),
    ("close | esc", "Close the open recipe"),
    ("page <n> | next | prev", "Change page"),
    ("retry [list|categories|detail|ratings]", "Retry a failed request"),
    ("refresh", "Reload the list and open recipe"),
    ("layout", "Toggle grid/list layout"),
    ("name <text>", "Set your name for a rating"),
    ("score <1-5>", "Set the rating score"),
    ("comment <text>", "Set the rating comment"),
    ("rate", "Submit the rating"),
    ("help", "Toggle this help"),
    ("quit", "Exit"),
];

/// Reasons a command line could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command `{0}`. Type `help` for a list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a number")]
    InvalidNumber(String),

    #[error("No category matches `{0}`")]
    UnknownCategory(String),
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}

fn required<'a>(arg: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument(usage))
    } else {
        Ok(arg)
    }
}

/// Resolves a category by id or by fuzzy name match.
///
/// An exact (case-insensitive) name wins; otherwise the best-scoring fuzzy
/// match is taken.
///
/// # Errors
///
/// Returns [`CommandError::UnknownCategory`] when nothing matches.
pub fn resolve_category(query: &str, categories: &[Category]) -> Result<i64, CommandError> {
    if let Ok(id) = query.parse::<i64>() {
        return Ok(id);
    }

    let needle = query.to_lowercase();
    if let Some(category) = categories.iter().find(|c| c.name.to_lowercase() == needle) {
        return Ok(category.id);
    }

    let matcher = SkimMatcherV2::default();
    categories
        .iter()
        .filter_map(|c| matcher.fuzzy_match(&c.name.to_lowercase(), &needle).map(|score| (score, c)))
        .max_by_key(|(score, _)| *score)
        .map(|(_, c)| c.id)
        .ok_or_else(|| CommandError::UnknownCategory(query.to_string()))
}

/// Parses one command line.
///
/// Returns `Ok(None)` for blank input.
///
/// # Errors
///
/// Returns a [`CommandError`] for unknown commands, missing or malformed
/// arguments, and unresolvable category names.
pub fn parse_command(line: &str, categories: &[Category]) -> Result<Option<Event>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (command, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let arg = arg.trim();

    let event = match command.to_lowercase().as_str() {
        "all" => Event::SelectCategory(None),
        "cat" | "category" => {
            let query = required(arg, "cat <id|name>")?;
            Event::SelectCategory(Some(resolve_category(query, categories)?))
        }
        "search" | "s" => Event::SubmitSearch(arg.to_string()),
        "clear" => Event::ClearSearch,
        "open" | "o" => Event::SelectRecipe(parse_number(required(arg, "open <id>")?)?),
        "close" => Event::CloseDetail,
        "esc" => Event::Escape,
        "page" => Event::GoToPage(parse_number(required(arg, "page <n>")?)?),
        "next" | "n" => Event::NextPage,
        "prev" | "p" => Event::PrevPage,
        "retry" => match arg {
            "" | "list" | "recipes" => Event::RetryList,
            "categories" => Event::RetryCategories,
            "detail" => Event::RetryDetail,
            "ratings" => Event::RetryRatings,
            _ => return Err(CommandError::MissingArgument("retry [list|categories|detail|ratings]")),
        },
        "refresh" | "r" => Event::Refresh,
        "layout" | "view" => Event::ToggleLayout,
        "name" => Event::SetRatingName(arg.to_string()),
        "score" => Event::SetRatingScore(parse_number(required(arg, "score <1-5>")?)?),
        "comment" => Event::SetRatingComment(arg.to_string()),
        "rate" | "submit" => Event::SubmitRating,
        "help" | "?" => Event::ToggleHelp,
        "quit" | "exit" | "q" => Event::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(event))
}
