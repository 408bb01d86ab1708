//! Client-side route table

use std::fmt;

/// Every navigable screen
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Profile,
    Analytics,
    Connect,
    Goals,
    GoalDetail(String),
    Chat,
    Posts,
    Create,
    Shorts,
}

impl Route {
    /// Match a path against the table. Query strings and trailing slashes
    /// are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["profile"] => Route::Profile,
            ["analytics"] => Route::Analytics,
            ["connect"] => Route::Connect,
            ["connect", "goals"] => Route::Goals,
            ["connect", "goals", id] => Route::GoalDetail(id.to_string()),
            ["connect", "chat"] => Route::Chat,
            ["connect", "posts"] => Route::Posts,
            ["create"] => Route::Create,
            ["shorts"] => Route::Shorts,
            _ => return None,
        };

        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Analytics => "/analytics".to_string(),
            Route::Connect => "/connect".to_string(),
            Route::Goals => "/connect/goals".to_string(),
            Route::GoalDetail(id) => format!("/connect/goals/{}", id),
            Route::Chat => "/connect/chat".to_string(),
            Route::Posts => "/connect/posts".to_string(),
            Route::Create => "/create".to_string(),
            Route::Shorts => "/shorts".to_string(),
        }
    }

    /// Link target for a goal card
    pub fn goal(id: impl Into<String>) -> Route {
        Route::GoalDetail(id.into())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/connect/chat"), Some(Route::Chat));
        assert_eq!(Route::parse("/shorts"), Some(Route::Shorts));
    }

    #[test]
    fn test_parse_ignores_query_and_trailing_slash() {
        assert_eq!(Route::parse("/connect/goals/?tab=new"), Some(Route::Goals));
        assert_eq!(Route::parse("/create/"), Some(Route::Create));
        assert_eq!(
            Route::parse("/connect/goals/abc#posts"),
            Some(Route::GoalDetail("abc".to_string()))
        );
    }

    #[test]
    fn test_removed_links_do_not_resolve() {
        for path in ["/explore", "/challenges", "/goals", "/communities", "/connect/post/1", "/connect/goal/1"] {
            assert_eq!(Route::parse(path), None, "{}", path);
        }
    }

    #[test]
    fn test_path_parse_agree() {
        let routes = [
            Route::Home,
            Route::Profile,
            Route::Analytics,
            Route::Connect,
            Route::Goals,
            Route::goal("g-1"),
            Route::Chat,
            Route::Posts,
            Route::Create,
            Route::Shorts,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()));
        }
    }
}
