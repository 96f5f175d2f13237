use crate::error::ConfigError;
use crate::navigation::NavEntry;
use crate::routes::{declared_route, LayoutNode, RouteNode};

/// Cross-check the route table against the sidebar entries.
///
/// Each layout needs exactly one index route, declared paths must be
/// distinct, sidebar titles must be unique (they key the rendered items)
/// and every sidebar url has to land on a route.
pub fn check_config(routes: &[LayoutNode], nav: &[NavEntry]) -> Result<(), ConfigError> {
    for node in routes {
        let indexes = node
            .children
            .iter()
            .filter(|child| matches!(child, RouteNode::Index(_)))
            .count();
        match indexes {
            0 => {
                return Err(ConfigError::MissingIndex {
                    layout: node.layout.name(),
                })
            }
            1 => {}
            _ => {
                return Err(ConfigError::MultipleIndex {
                    layout: node.layout.name(),
                })
            }
        }
    }

    let segments: Vec<&str> = routes
        .iter()
        .flat_map(|node| node.children.iter().filter_map(RouteNode::segment))
        .collect();
    for (i, segment) in segments.iter().enumerate() {
        if segments[..i].contains(segment) {
            return Err(ConfigError::DuplicatePath(segment.to_string()));
        }
    }

    for (i, entry) in nav.iter().enumerate() {
        if nav[..i].iter().any(|earlier| earlier.title == entry.title) {
            return Err(ConfigError::DuplicateTitle(entry.title.to_string()));
        }
        if declared_route(routes, entry.url).is_none() {
            return Err(ConfigError::DeadLink {
                title: entry.title.to_string(),
                url: entry.url.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Icon, NAV_ITEMS};
    use crate::routes::{Layout, Page, ROUTES};

    fn entry(title: &'static str, url: &'static str) -> NavEntry {
        NavEntry {
            title,
            url,
            icon: Icon::Home,
        }
    }

    fn sidebar(children: &'static [RouteNode]) -> [LayoutNode; 1] {
        [LayoutNode {
            layout: Layout::Sidebar,
            children,
        }]
    }

    #[test]
    fn test_shipped_tables_agree() {
        assert_eq!(check_config(ROUTES, &NAV_ITEMS), Ok(()));
    }

    #[test]
    fn test_dead_link_is_reported() {
        let nav = [entry("Home", "/"), entry("Timers", "/timers")];
        let err = check_config(ROUTES, &nav).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DeadLink {
                title: "Timers".into(),
                url: "/timers".into(),
            }
        );
        assert!(err.to_string().contains("/timers"));
    }

    #[test]
    fn test_duplicate_title_is_reported() {
        let nav = [entry("Home", "/"), entry("Home", "/floats")];
        assert_eq!(
            check_config(ROUTES, &nav),
            Err(ConfigError::DuplicateTitle("Home".into()))
        );
    }

    #[test]
    fn test_duplicate_path_is_reported() {
        static CHILDREN: [RouteNode; 3] = [
            RouteNode::Index(Page::Home),
            RouteNode::Path {
                segment: "floats",
                page: Page::Floats,
            },
            RouteNode::Path {
                segment: "floats",
                page: Page::Reminders,
            },
        ];
        assert_eq!(
            check_config(&sidebar(&CHILDREN), &[]),
            Err(ConfigError::DuplicatePath("floats".into()))
        );
    }

    #[test]
    fn test_index_count_is_enforced() {
        static TWO: [RouteNode; 2] = [RouteNode::Index(Page::Home), RouteNode::Index(Page::Floats)];
        static NONE: [RouteNode; 1] = [RouteNode::Path {
            segment: "floats",
            page: Page::Floats,
        }];
        assert_eq!(
            check_config(&sidebar(&TWO), &[]),
            Err(ConfigError::MultipleIndex { layout: "sidebar" })
        );
        assert_eq!(
            check_config(&sidebar(&NONE), &[]),
            Err(ConfigError::MissingIndex { layout: "sidebar" })
        );
    }
}
