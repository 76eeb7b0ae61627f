use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{CreateCustomListRequest, CustomFoodList};

use crate::api::{fetch_custom_lists, save_custom_list};

pub enum CustomListsAction {
    Loaded(Vec<CustomFoodList>),
    Saved(CustomFoodList),
    Failed(String),
}

#[derive(Clone, Default, PartialEq)]
pub struct CustomListsState {
    pub lists: Vec<CustomFoodList>,
    pub error: Option<String>,
}

impl Reducible for CustomListsState {
    type Action = CustomListsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // The fetch may land after a save; keep lists it didn't know about
            CustomListsAction::Loaded(fetched) => {
                let local_only: Vec<CustomFoodList> = next
                    .lists
                    .into_iter()
                    .filter(|list| !fetched.iter().any(|f| f.id == list.id))
                    .collect();
                next.lists = fetched;
                next.lists.extend(local_only);
            }
            CustomListsAction::Saved(list) => {
                if !next.lists.iter().any(|existing| existing.id == list.id) {
                    next.lists.push(list);
                }
                next.error = None;
            }
            CustomListsAction::Failed(message) => next.error = Some(message),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct CustomListsHandle {
    pub lists: Vec<CustomFoodList>,
    pub error: Option<String>,
    save: Callback<CreateCustomListRequest>,
}

impl CustomListsHandle {
    pub fn save(&self, request: CreateCustomListRequest) {
        self.save.emit(request);
    }
}

/// Lists saved on the server this session, plus a callback to save a new one.
#[hook]
pub fn use_custom_lists() -> CustomListsHandle {
    let state = use_reducer(CustomListsState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_custom_lists().await {
                    Ok(data) => dispatcher.dispatch(CustomListsAction::Loaded(data)),
                    Err(e) => log::warn!("Could not load custom lists: {}", e),
                }
            });
            || ()
        });
    }

    let save = {
        let dispatcher = state.dispatcher();
        Callback::from(move |request: CreateCustomListRequest| {
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match save_custom_list(&request).await {
                    Ok(saved) => dispatcher.dispatch(CustomListsAction::Saved(saved)),
                    Err(e) => {
                        log::error!("Saving custom list failed: {}", e);
                        dispatcher.dispatch(CustomListsAction::Failed(
                            "Could not save the list. Please try again".to_string(),
                        ));
                    }
                }
            });
        })
    };

    CustomListsHandle {
        lists: state.lists.clone(),
        error: state.error.clone(),
        save,
    }
}
