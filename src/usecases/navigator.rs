//! Route resolution. Unknown identifiers redirect to the dashboard.

use crate::domain::samples::{self, DEMO_ID};
use crate::domain::{DecisionSet, DomainError, Route};
use crate::ports::DecisionSetRepo;
use crate::usecases::editor_service::{Draft, EditorService};
use std::sync::Arc;
use tracing::warn;

/// What a resolved route shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Editor(Draft),
    Play { set: DecisionSet, is_demo: bool },
}

pub struct Navigator {
    repo: Arc<dyn DecisionSetRepo>,
    editor: Arc<EditorService>,
}

impl Navigator {
    pub fn new(repo: Arc<dyn DecisionSetRepo>, editor: Arc<EditorService>) -> Self {
        Self { repo, editor }
    }

    pub async fn resolve(&self, route: &Route) -> Result<Screen, DomainError> {
        match route {
            Route::Dashboard => Ok(Screen::Dashboard),
            Route::Editor(target) => match self.editor.open(target).await {
                Ok(draft) => Ok(Screen::Editor(draft)),
                Err(DomainError::NotFound(id)) => Ok(redirect(route, &id)),
                Err(e) => Err(e),
            },
            Route::Play(id) if id == DEMO_ID => Ok(Screen::Play {
                set: samples::demo_set(),
                is_demo: true,
            }),
            Route::Play(id) => match self.repo.find(id).await? {
                Some(set) => Ok(Screen::Play {
                    set,
                    is_demo: false,
                }),
                None => Ok(redirect(route, id)),
            },
        }
    }
}

fn redirect(route: &Route, id: &str) -> Screen {
    warn!(route = %route, id, "unknown decision set; redirecting to dashboard");
    Screen::Dashboard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::{Catalog, EditPolicy, EditorTarget};

    fn navigator() -> Navigator {
        let store: Arc<dyn DecisionSetRepo> =
            Arc::new(InMemoryStore::new(Catalog::new(samples::starter_sets())));
        let editor = Arc::new(EditorService::new(store.clone(), EditPolicy::default()));
        Navigator::new(store, editor)
    }

    #[tokio::test]
    async fn known_ids_resolve() {
        let nav = navigator();

        match nav.resolve(&Route::Play("2".into())).await.unwrap() {
            Screen::Play { set, is_demo } => {
                assert_eq!(set.title, "Lunch Decider");
                assert!(!is_demo);
            }
            other => panic!("unexpected screen {:?}", other),
        }

        match nav.resolve(&Route::parse("/editor/3")).await.unwrap() {
            Screen::Editor(draft) => assert_eq!(draft.set.id, "3"),
            other => panic!("unexpected screen {:?}", other),
        }

        match nav.resolve(&Route::Editor(EditorTarget::New)).await.unwrap() {
            Screen::Editor(draft) => assert!(draft.is_new),
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[tokio::test]
    async fn demo_route_plays_the_demo_set() {
        let nav = navigator();
        let screen = nav.resolve(&Route::play_demo()).await.unwrap();
        assert_eq!(
            screen,
            Screen::Play {
                set: samples::demo_set(),
                is_demo: true
            }
        );
    }

    #[tokio::test]
    async fn unknown_ids_redirect_to_dashboard() {
        let nav = navigator();
        assert_eq!(
            nav.resolve(&Route::Play("42".into())).await.unwrap(),
            Screen::Dashboard
        );
        assert_eq!(
            nav.resolve(&Route::parse("/editor/42")).await.unwrap(),
            Screen::Dashboard
        );
    }
}
