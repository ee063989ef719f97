use iced::Task;
use iced::time::Instant;

use super::event::{RouteGroupEffect, RouteGroupEvent, RouteGroupIntent};
use super::state::RouteGroupState;

/// Read-only context for route group reduction.
pub(crate) struct RouteGroupCtx {
    pub(crate) now: Instant,
}

/// Reduce a route group intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut RouteGroupState,
    event: RouteGroupIntent,
    ctx: &RouteGroupCtx,
) -> Task<RouteGroupEvent> {
    match event {
        RouteGroupIntent::ToggleOpen => {
            state.toggle(ctx.now);
            Task::none()
        },
        RouteGroupIntent::ItemPressed { href } => {
            match navigation_target(state, href) {
                Some(href) => Task::done(RouteGroupEvent::Effect(
                    RouteGroupEffect::Navigate { href },
                )),
                None => Task::none(),
            }
        },
    }
}

/// A collapsed list stays mounted but must not navigate.
fn navigation_target(
    state: &RouteGroupState,
    href: &'static str,
) -> Option<&'static str> {
    state.is_open().then_some(href)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::time::Instant;

    use super::{RouteGroupCtx, navigation_target};
    use crate::routes::ROUTE_GROUPS;
    use crate::widgets::route_group::state::RouteGroupState;
    use crate::widgets::route_group::{RouteGroupIntent, RouteGroupWidget};

    fn ctx() -> RouteGroupCtx {
        RouteGroupCtx {
            now: Instant::now(),
        }
    }

    #[test]
    fn given_new_group_when_inspected_then_group_is_closed_and_collapsed() {
        let widget = RouteGroupWidget::new(&ROUTE_GROUPS[0]);
        let vm = widget.vm("/admin", Instant::now());

        assert!(!vm.is_open);
        assert_eq!(vm.reveal, 0.0);
        assert_eq!(vm.items.len(), ROUTE_GROUPS[0].items.len());
    }

    #[test]
    fn given_closed_group_when_toggled_twice_then_returns_to_closed() {
        let mut widget = RouteGroupWidget::new(&ROUTE_GROUPS[0]);

        let _task = widget.reduce(RouteGroupIntent::ToggleOpen, &ctx());
        assert!(widget.is_open());

        let _task = widget.reduce(RouteGroupIntent::ToggleOpen, &ctx());
        assert!(!widget.is_open());
    }

    #[test]
    fn given_toggle_when_reduced_then_reveal_animates_to_fully_open() {
        let mut widget = RouteGroupWidget::new(&ROUTE_GROUPS[0]);
        let start = Instant::now();

        let ctx = RouteGroupCtx { now: start };
        let _task = widget.reduce(RouteGroupIntent::ToggleOpen, &ctx);

        assert!(widget.is_animating(start));
        let settled = start + Duration::from_secs(1);
        assert!(!widget.is_animating(settled));
        assert_eq!(widget.vm("/admin", settled).reveal, 1.0);
    }

    #[test]
    fn given_closed_group_when_item_pressed_then_no_navigation_target() {
        let state = RouteGroupState::default();

        assert_eq!(navigation_target(&state, "/client"), None);
    }

    #[test]
    fn given_open_group_when_item_pressed_then_navigates_to_item() {
        let mut state = RouteGroupState::default();
        state.toggle(Instant::now());

        assert_eq!(navigation_target(&state, "/client"), Some("/client"));
    }

    #[test]
    fn given_one_group_toggled_when_inspecting_siblings_then_they_stay_closed()
    {
        let mut groups: Vec<RouteGroupWidget> =
            ROUTE_GROUPS.iter().map(RouteGroupWidget::new).collect();

        let _task = groups[0].reduce(RouteGroupIntent::ToggleOpen, &ctx());

        assert!(groups[0].is_open());
        assert!(groups[1..].iter().all(|group| !group.is_open()));
    }

    #[test]
    fn given_foods_path_when_building_vm_then_only_foods_item_is_active() {
        let path = "/admin/foods-management/foods";
        let now = Instant::now();
        let groups: Vec<RouteGroupWidget> =
            ROUTE_GROUPS.iter().map(RouteGroupWidget::new).collect();

        let active: Vec<(&str, &str)> = groups
            .iter()
            .flat_map(|group| {
                let label = group.label();
                group
                    .vm(path, now)
                    .items
                    .into_iter()
                    .filter(|item| item.is_active)
                    .map(move |item| (label, item.label))
            })
            .collect();

        assert_eq!(active, vec![("Foods Management", "Foods")]);
    }

    #[test]
    fn given_case_or_prefix_variant_when_building_vm_then_nothing_is_active() {
        let widget = RouteGroupWidget::new(&ROUTE_GROUPS[0]);
        let now = Instant::now();

        for path in [
            "/Admin/foods-management/foods",
            "/admin/foods-management",
            "/admin/foods-management/foods?page=2",
        ] {
            let vm = widget.vm(path, now);
            assert!(vm.items.iter().all(|item| !item.is_active), "{path}");
        }
    }
}
