//! Path resolution over the route table.
//!
//! [`Router`] owns the compiled [`RouteTable`] and the last successful
//! [`NavigationState`]. Matching is pure and synchronous; the only mutation
//! is replacing the current state after a successful navigation.

use crate::core::error::RouteError;
use crate::models::{Address, CompiledRoute, NavigationState, Params, RouteTable, to_hash};

#[derive(Clone, Debug)]
pub struct Router {
    table: RouteTable,
    current: Option<NavigationState>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            current: None,
        }
    }

    /// Resolve `path` and make the result the current state.
    ///
    /// On `NotFound` the current state is left as it was.
    pub fn navigate(&mut self, path: &str) -> Result<NavigationState, RouteError> {
        let state = self.resolve(path)?;
        self.current = Some(state.clone());
        Ok(state)
    }

    /// Find the first route whose pattern matches `path`.
    pub fn resolve(&self, path: &str) -> Result<NavigationState, RouteError> {
        let address = Address::parse(path);
        let segments = address.segments();

        self.table
            .routes()
            .iter()
            .enumerate()
            .find_map(|(index, route)| {
                let params = route.pattern.matches(&segments)?;
                Some(NavigationState {
                    path: address.path.clone(),
                    route_index: index,
                    view: route.def.view,
                    name: route.def.name,
                    params,
                    query: address.query.clone(),
                    props_from_path: route.def.props,
                })
            })
            .ok_or_else(|| RouteError::not_found(address.path.as_str()))
    }

    /// The last successfully resolved state; `None` before the first one.
    pub fn current_state(&self) -> Option<&NavigationState> {
        self.current.as_ref()
    }

    /// Build the fragment href for a named route.
    pub fn href_for(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .table
            .find_named(name)
            .ok_or_else(|| RouteError::UnknownRouteName(name.to_string()))?;

        let path = route
            .pattern
            .build(params)
            .map_err(|param| RouteError::MissingParam {
                route: name.to_string(),
                param: param.to_string(),
            })?;

        Ok(to_hash(&path))
    }

    /// The route table, in resolution order.
    pub fn routes(&self) -> &[CompiledRoute] {
        self.table.routes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ROUTES;
    use crate::models::{RouteDef, ViewId};

    fn app_router() -> Router {
        Router::new(RouteTable::new(ROUTES).unwrap())
    }

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_static_routes() {
        let mut router = app_router();

        let home = router.navigate("/").unwrap();
        assert_eq!(home.route_index, 0);
        assert_eq!(home.view, ViewId::Home);
        assert!(home.params.is_empty());

        let list = router.navigate("/platforms").unwrap();
        assert_eq!(list.route_index, 1);
        assert_eq!(list.view, ViewId::PlatformList);
        assert!(list.params.is_empty());

        let history = router.navigate("/history").unwrap();
        assert_eq!(history.route_index, 3);
        assert_eq!(history.view, ViewId::HistoryQuery);
        assert!(history.params.is_empty());
        assert!(history.props().is_none());
    }

    #[test]
    fn test_param_route_forwards_props() {
        let mut router = app_router();
        let state = router.navigate("/platform/acme-corp").unwrap();

        assert_eq!(state.route_index, 2);
        assert_eq!(state.view, ViewId::PlatformDetail);
        assert_eq!(state.name, Some("PlatformDetail"));
        assert_eq!(state.params, params(&[("name", "acme-corp")]));
        assert_eq!(state.props(), Some(&params(&[("name", "acme-corp")])));
    }

    #[test]
    fn test_param_is_percent_decoded() {
        let router = app_router();
        let state = router.resolve("/platform/Zhi%20Hu").unwrap();
        assert_eq!(state.param("name"), Some("Zhi Hu"));
        assert_eq!(state.path, "/platform/Zhi%20Hu");
    }

    #[test]
    fn test_routes_in_table_order() {
        let router = app_router();
        let patterns: Vec<_> = router.routes().iter().map(|r| r.def.pattern).collect();
        assert_eq!(patterns, ["/", "/platforms", "/platform/:name", "/history"]);
        assert_eq!(router.routes()[2].def.name, Some("PlatformDetail"));
    }

    #[test]
    fn test_not_found() {
        let mut router = app_router();
        assert_eq!(
            router.navigate("/unknown/path"),
            Err(RouteError::not_found("/unknown/path"))
        );
        assert!(router.navigate("/platform").unwrap_err().is_not_found());
        assert!(router.navigate("/platform/").unwrap_err().is_not_found());
        assert!(router.navigate("/platform/a/b").unwrap_err().is_not_found());
        assert!(router.navigate("/Platforms").unwrap_err().is_not_found());
        assert!(router.navigate("//platforms").unwrap_err().is_not_found());
    }

    #[test]
    fn test_normalised_inputs() {
        let router = app_router();
        assert_eq!(router.resolve("").unwrap().view, ViewId::Home);
        assert_eq!(router.resolve("#/").unwrap().view, ViewId::Home);
        assert_eq!(router.resolve("#/platforms/").unwrap().view, ViewId::PlatformList);
        assert_eq!(router.resolve("history").unwrap().view, ViewId::HistoryQuery);

        let state = router.resolve("#/history?day=2").unwrap();
        assert_eq!(state.path, "/history");
        assert_eq!(state.query, params(&[("day", "2")]));
    }

    #[test]
    fn test_first_match_wins() {
        let defs = [
            RouteDef::new("/platforms", ViewId::PlatformList),
            RouteDef::new("/:catchAll", ViewId::Home).with_props(),
        ];
        let router = Router::new(RouteTable::new(&defs).unwrap());

        let state = router.resolve("/platforms").unwrap();
        assert_eq!(state.view, ViewId::PlatformList);
        assert!(state.params.is_empty());

        let state = router.resolve("/anything").unwrap();
        assert_eq!(state.route_index, 1);
        assert_eq!(state.param("catchAll"), Some("anything"));

        let reversed = [defs[1], defs[0]];
        let router = Router::new(RouteTable::new(&reversed).unwrap());
        assert_eq!(router.resolve("/platforms").unwrap().view, ViewId::Home);
    }

    #[test]
    fn test_navigation_is_idempotent() {
        let mut router = app_router();
        let first = router.navigate("/platform/acme").unwrap();
        let second = router.navigate("/platform/acme").unwrap();
        assert_eq!(first, second);
        assert_eq!(router.current_state(), Some(&second));
    }

    #[test]
    fn test_current_state_tracks_last_success() {
        let mut router = app_router();
        assert!(router.current_state().is_none());

        assert!(router.navigate("/nope").is_err());
        assert!(router.current_state().is_none());

        let list = router.navigate("/platforms").unwrap();
        assert!(router.navigate("/still/nope").is_err());
        assert_eq!(router.current_state(), Some(&list));
    }

    #[test]
    fn test_href_for() {
        let router = app_router();
        assert_eq!(
            router
                .href_for("PlatformDetail", &params(&[("name", "weibo")]))
                .unwrap(),
            "#/platform/weibo"
        );
        assert_eq!(
            router.href_for("PlatformDetail", &Params::new()),
            Err(RouteError::MissingParam {
                route: "PlatformDetail".to_string(),
                param: "name".to_string(),
            })
        );
        assert_eq!(
            router.href_for("Nope", &Params::new()),
            Err(RouteError::UnknownRouteName("Nope".to_string()))
        );
    }

    #[test]
    fn test_href_round_trips_through_navigate() {
        let mut router = app_router();
        let href = router
            .href_for("PlatformDetail", &params(&[("name", "zhihu")]))
            .unwrap();
        let state = router.navigate(&href).unwrap();
        assert_eq!(state.view, ViewId::PlatformDetail);
        assert_eq!(state.param("name"), Some("zhihu"));
    }

    #[test]
    fn test_href_round_trips_reserved_characters() {
        let mut router = app_router();
        for name in ["a/b", "x?y", "tag#1", "100%", "微博 热搜"] {
            let href = router
                .href_for("PlatformDetail", &params(&[("name", name)]))
                .unwrap();
            let state = router.navigate(&href).unwrap();
            assert_eq!(state.view, ViewId::PlatformDetail, "{href}");
            assert_eq!(state.param("name"), Some(name), "{href}");
            assert!(state.query.is_empty(), "{href}");
        }
    }
}
