/// Intent events handled by the route group presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum RouteGroupIntent {
    ToggleOpen,
    ItemPressed { href: &'static str },
}

/// Effect events produced by the route group reducer.
#[derive(Debug, Clone)]
pub(crate) enum RouteGroupEffect {
    Navigate { href: &'static str },
}

/// Route group event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum RouteGroupEvent {
    /// Intent event reduced by the route group widget.
    Intent(RouteGroupIntent),
    /// External effect orchestrated by app-level routing.
    Effect(RouteGroupEffect),
}
