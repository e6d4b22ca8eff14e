use crate::constants::MAX_REDIRECTS;

/// View identifiers the route table resolves to. Rendering them is someone
/// else's job; this module only decides which one a URL maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Order,
    Payment,
    PaymentSuccess,
    AdminStatistics,
    AdminMemo,
    AdminCategory,
    AdminMenu,
    AdminOrder,
}

/// Whether a view is part of the initial bundle or resolved on first visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Eager,
    Lazy,
}

pub struct Route {
    /// Absolute for top-level entries, relative for nested children.
    pub path: &'static str,
    pub name: &'static str,
    pub view: Option<View>,
    pub resolution: Resolution,
    pub redirect: Option<&'static str>,
    pub children: &'static [Route],
}

const fn route(path: &'static str, name: &'static str, view: View) -> Route {
    Route {
        path,
        name,
        view: Some(view),
        resolution: Resolution::Eager,
        redirect: None,
        children: &[],
    }
}

const fn lazy(path: &'static str, name: &'static str, view: View) -> Route {
    Route {
        path,
        name,
        view: Some(view),
        resolution: Resolution::Lazy,
        redirect: None,
        children: &[],
    }
}

/// The full client-side navigation surface. `/admin` carries the only
/// redirect; its statistics and memo children load lazily.
pub const ROUTES: &[Route] = &[
    route("/", "OrderView", View::Order),
    route("/payment/:totalAmount/:cartItems", "PaymentView", View::Payment),
    route("/success", "PaymentSuccessView", View::PaymentSuccess),
    Route {
        path: "/admin",
        name: "Admin",
        view: None,
        resolution: Resolution::Eager,
        redirect: Some("/admin/statistics"),
        children: &[
            lazy("statistics", "AdminStatistics", View::AdminStatistics),
            lazy("memo", "AdminMemo", View::AdminMemo),
            route("category", "Category", View::AdminCategory),
            route("menu", "AdminMenu", View::AdminMenu),
            route("order", "AdminOrder", View::AdminOrder),
        ],
    },
];

/// A resolved route: the view to mount plus any `:param` bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: &'static str,
    pub view: View,
    pub resolution: Resolution,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

enum Outcome {
    Matched(RouteMatch),
    Redirect(&'static str),
}

/// Resolve a URL path against the route table, following redirects.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let mut current = path;
    for _ in 0..MAX_REDIRECTS {
        match find(ROUTES, &[], &segments(current)) {
            Some(Outcome::Matched(found)) => return Some(found),
            Some(Outcome::Redirect(target)) => current = target,
            None => return None,
        }
    }
    None
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

fn find(routes: &'static [Route], prefix: &[&'static str], path: &[&str]) -> Option<Outcome> {
    for candidate in routes {
        let mut pattern: Vec<&'static str> = prefix.to_vec();
        pattern.extend(segments(candidate.path));

        if pattern.len() == path.len() {
            if let Some(params) = bind(&pattern, path) {
                if let Some(target) = candidate.redirect {
                    return Some(Outcome::Redirect(target));
                }
                if let Some(view) = candidate.view {
                    return Some(Outcome::Matched(RouteMatch {
                        name: candidate.name,
                        view,
                        resolution: candidate.resolution,
                        params,
                    }));
                }
            }
        }

        if !candidate.children.is_empty()
            && pattern.len() < path.len()
            && bind(&pattern, &path[..pattern.len()]).is_some()
        {
            if let Some(outcome) = find(candidate.children, &pattern, path) {
                return Some(outcome);
            }
        }
    }
    None
}

/// Match pattern segments against path segments of the same length,
/// collecting `:param` bindings; literal segments must match exactly.
fn bind(pattern: &[&'static str], path: &[&str]) -> Option<Vec<(&'static str, String)>> {
    let mut params = Vec::new();
    for (expected, actual) in pattern.iter().zip(path) {
        if let Some(name) = expected.strip_prefix(':') {
            params.push((name, (*actual).to_string()));
        } else if expected != actual {
            return None;
        }
    }
    Some(params)
}
