use crate::{AppState, Router, Screen, TemplateCategory};

#[derive(Clone, Debug, PartialEq)]
pub struct MobileRouteState {
    pub root_screen: Screen,
    pub stack: Vec<Screen>,
    pub active_screen: Screen,
    pub can_pop: bool,
}

/// Maps core router semantics to the navigation model shared by iOS and Android.
pub fn project_mobile(state: &AppState) -> MobileRouteState {
    let stack = state.router.screen_stack.clone();
    let active_screen = active_screen(&state.router);
    MobileRouteState {
        root_screen: state.router.default_screen.clone(),
        can_pop: !stack.is_empty(),
        stack,
        active_screen,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DesktopDetailPane {
    None,
    Editor { template_id: String, previewing: bool },
    SavedDocuments,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DesktopModal {
    None,
    ConfirmDelete { document_id: String, title: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DesktopRouteState {
    pub active_screen: Screen,
    pub selected_category: Option<TemplateCategory>,
    pub detail_pane: DesktopDetailPane,
    pub modal: DesktopModal,
    pub can_pop: bool,
}

/// Projects core state into desktop shell concerns: the category sidebar
/// selection, the detail pane and the delete confirmation modal.
pub fn project_desktop(state: &AppState) -> DesktopRouteState {
    let active_screen = active_screen(&state.router);

    let selected_category = state
        .router
        .screen_stack
        .iter()
        .rev()
        .find_map(|screen| match screen {
            Screen::Category { category } => Some(*category),
            _ => None,
        })
        .or_else(|| state.category.as_ref().map(|c| c.category));

    let detail_pane = match &active_screen {
        Screen::Editor { template_id } => DesktopDetailPane::Editor {
            template_id: template_id.clone(),
            previewing: state
                .editor
                .as_ref()
                .is_some_and(|e| e.previewing && &e.template_id == template_id),
        },
        Screen::SavedDocuments => DesktopDetailPane::SavedDocuments,
        Screen::Home | Screen::Category { .. } => DesktopDetailPane::None,
    };

    let modal = match &state.saved.pending_delete {
        Some(pending) => DesktopModal::ConfirmDelete {
            document_id: pending.document_id.clone(),
            title: pending.title.clone(),
        },
        None => DesktopModal::None,
    };

    DesktopRouteState {
        active_screen,
        selected_category,
        detail_pane,
        modal,
        can_pop: !state.router.screen_stack.is_empty(),
    }
}

fn active_screen(router: &Router) -> Screen {
    router
        .screen_stack
        .last()
        .cloned()
        .unwrap_or_else(|| router.default_screen.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PendingDelete;

    fn state_with_stack(stack: Vec<Screen>) -> AppState {
        let mut state = AppState::empty();
        state.router.screen_stack = stack;
        state
    }

    fn editor(template_id: &str) -> Screen {
        Screen::Editor {
            template_id: template_id.into(),
        }
    }

    #[test]
    fn mobile_projection_defaults_to_home() {
        let route = project_mobile(&AppState::empty());
        assert_eq!(route.root_screen, Screen::Home);
        assert_eq!(route.active_screen, Screen::Home);
        assert!(route.stack.is_empty());
        assert!(!route.can_pop);
    }

    #[test]
    fn mobile_projection_uses_stack_top_as_active() {
        let state = state_with_stack(vec![
            Screen::Category {
                category: TemplateCategory::Events,
            },
            editor("event-program"),
        ]);

        let route = project_mobile(&state);
        assert_eq!(route.root_screen, Screen::Home);
        assert_eq!(route.active_screen, editor("event-program"));
        assert!(route.can_pop);
        assert_eq!(route.stack.len(), 2);
    }

    #[test]
    fn desktop_editor_projection_selects_category_and_detail_pane() {
        let state = state_with_stack(vec![
            Screen::Category {
                category: TemplateCategory::Marketing,
            },
            editor("newsletter"),
        ]);
        let route = project_desktop(&state);
        assert_eq!(route.selected_category, Some(TemplateCategory::Marketing));
        assert_eq!(
            route.detail_pane,
            DesktopDetailPane::Editor {
                template_id: "newsletter".into(),
                previewing: false,
            }
        );
        assert_eq!(route.modal, DesktopModal::None);
        assert!(route.can_pop);
    }

    #[test]
    fn desktop_projection_shows_delete_confirmation_modal() {
        let mut state = state_with_stack(vec![Screen::SavedDocuments]);
        state.saved.pending_delete = Some(PendingDelete {
            document_id: "1700000000000".into(),
            title: "Note X".into(),
        });
        let route = project_desktop(&state);
        assert_eq!(route.detail_pane, DesktopDetailPane::SavedDocuments);
        assert_eq!(route.selected_category, None);
        assert_eq!(
            route.modal,
            DesktopModal::ConfirmDelete {
                document_id: "1700000000000".into(),
                title: "Note X".into(),
            }
        );
    }
}
