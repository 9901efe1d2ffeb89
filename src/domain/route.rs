//! Navigable routes: the dashboard, the editor and the play view.

use crate::domain::samples::DEMO_ID;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorTarget {
    New,
    Existing(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Dashboard,
    Editor(EditorTarget),
    /// Play a stored set by id. `demo` is the built-in demo set.
    Play(String),
}

impl Route {
    /// Parses `/dashboard`, `/editor/new`, `/editor/<id>`, `/play/<id>`.
    /// Anything unrecognized falls back to the dashboard.
    pub fn parse(path: &str) -> Self {
        let parts: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            ["editor", "new"] => Route::Editor(EditorTarget::New),
            ["editor", id] => Route::Editor(EditorTarget::Existing((*id).to_string())),
            ["play", id] => Route::Play((*id).to_string()),
            _ => Route::Dashboard,
        }
    }

    pub fn play_demo() -> Self {
        Route::Play(DEMO_ID.to_string())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Dashboard => write!(f, "/dashboard"),
            Route::Editor(EditorTarget::New) => write!(f, "/editor/new"),
            Route::Editor(EditorTarget::Existing(id)) => write!(f, "/editor/{}", id),
            Route::Play(id) => write!(f, "/play/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/editor/new"), Route::Editor(EditorTarget::New));
        assert_eq!(
            Route::parse("/editor/2"),
            Route::Editor(EditorTarget::Existing("2".into()))
        );
        assert_eq!(Route::parse("play/3/"), Route::Play("3".into()));
        assert_eq!(Route::parse("/play/demo"), Route::play_demo());
    }

    #[test]
    fn unknown_paths_fall_back_to_dashboard() {
        assert_eq!(Route::parse("/settings"), Route::Dashboard);
        assert_eq!(Route::parse("/play"), Route::Dashboard);
        assert_eq!(Route::parse("/play/1/extra"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for r in [
            Route::Dashboard,
            Route::Editor(EditorTarget::New),
            Route::Editor(EditorTarget::Existing("abc".into())),
            Route::Play("1".into()),
        ] {
            assert_eq!(Route::parse(&r.to_string()), r);
        }
    }
}
