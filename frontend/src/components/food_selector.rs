use web_sys::HtmlInputElement;
use yew::prelude::*;
use shared::validation::{spinnable_items, validate_food_items, validate_list_name};
use shared::{CreateCustomListRequest, FoodItem};

use crate::hooks::{use_custom_lists, use_premade_lists};
use crate::styles;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Premade,
    Custom,
}

pub fn replace_row(rows: &[String], index: usize, value: String) -> Vec<String> {
    let mut updated = rows.to_vec();
    if let Some(row) = updated.get_mut(index) {
        *row = value;
    }
    updated
}

/// At least one row always stays so there is somewhere to type
pub fn remove_row(rows: &[String], index: usize) -> Vec<String> {
    if rows.len() <= 1 || index >= rows.len() {
        return rows.to_vec();
    }
    let mut updated = rows.to_vec();
    updated.remove(index);
    updated
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "bg-white text-gray-800 shadow-lg"
    } else {
        "text-white hover:bg-white/10"
    }
}

#[derive(Properties, PartialEq)]
pub struct FoodSelectorProps {
    pub on_select: Callback<Vec<FoodItem>>,
}

#[function_component(FoodSelector)]
pub fn food_selector(props: &FoodSelectorProps) -> Html {
    let (loading, premade) = use_premade_lists();
    let custom_lists = use_custom_lists();
    let active_tab = use_state(|| Tab::Premade);
    let category = use_state(|| None::<String>);
    let rows = use_state(|| vec![String::new()]);
    let list_name = use_state(String::new);
    let save_error = use_state(|| None::<String>);

    // First category seeds the wheel once the lists arrive
    {
        let category = category.clone();
        let on_select = props.on_select.clone();
        use_effect_with(premade.clone(), move |premade| {
            if let Some((key, list)) = premade.as_ref().and_then(|lists| lists.first_category()) {
                category.set(Some(key.clone()));
                on_select.emit(list.items.clone());
            }
            || ()
        });
    }

    let select_category = {
        let category = category.clone();
        let premade = premade.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |key: String| {
            if let Some(list) = premade.as_ref().and_then(|lists| lists.lists.get(&key)) {
                on_select.emit(list.items.clone());
                category.set(Some(key));
            }
        })
    };

    let set_rows = {
        let rows = rows.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |updated: Vec<String>| {
            on_select.emit(spinnable_items(&updated));
            rows.set(updated);
        })
    };

    let on_row_input = {
        let rows = rows.clone();
        let set_rows = set_rows.clone();
        Callback::from(move |(index, value): (usize, String)| {
            set_rows.emit(replace_row(&rows, index, value));
        })
    };

    let add_row = {
        let rows = rows.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = (*rows).clone();
            updated.push(String::new());
            rows.set(updated);
        })
    };

    let on_name_input = {
        let list_name = list_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            list_name.set(input.value());
        })
    };

    let save_list = {
        let rows = rows.clone();
        let list_name = list_name.clone();
        let save_error = save_error.clone();
        let custom_lists = custom_lists.clone();
        Callback::from(move |_: MouseEvent| {
            let items = spinnable_items(&rows);
            let checked = validate_list_name(&list_name).and_then(|_| validate_food_items(&items));
            match checked {
                Ok(()) => {
                    custom_lists.save(CreateCustomListRequest {
                        name: list_name.trim().to_string(),
                        items,
                    });
                    save_error.set(None);
                    list_name.set(String::new());
                }
                Err(e) => {
                    let message = e.message.map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string());
                    save_error.set(Some(message));
                }
            }
        })
    };

    let premade_tab = match premade.as_ref() {
        None if loading => html! {
            <div class="flex justify-center py-8">
                <div class={styles::LOADING_SPINNER}></div>
            </div>
        },
        None => html! {
            <div class={styles::ALERT_ERROR}>{"Could not load the premade lists."}</div>
        },
        Some(lists) => {
            let selected = (*category).clone();
            html! {
                <div class="space-y-6">
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                        { for lists.lists.iter().map(|(key, list)| {
                            let is_selected = selected.as_deref() == Some(key.as_str());
                            let onclick = {
                                let select_category = select_category.clone();
                                let key = key.clone();
                                Callback::from(move |_: MouseEvent| select_category.emit(key.clone()))
                            };
                            html! {
                                <button
                                    key={key.clone()}
                                    {onclick}
                                    class={classes!(
                                        "p-4",
                                        "rounded-2xl",
                                        "font-semibold",
                                        "transition-all",
                                        "duration-300",
                                        if is_selected { "bg-white text-gray-800 shadow-xl scale-105" } else { "bg-white/20 text-white hover:bg-white/30" }
                                    )}
                                >
                                    <div class="text-sm font-bold mb-1">{&list.name}</div>
                                    <div class="text-xs opacity-80">{format!("{} items", list.items.len())}</div>
                                </button>
                            }
                        }) }
                    </div>
                    if let Some(list) = selected.as_ref().and_then(|key| lists.lists.get(key)) {
                        <div class="bg-white/10 rounded-2xl p-6">
                            <h3 class="text-xl font-bold text-white mb-4">{format!("{} 🍽️", list.name)}</h3>
                            <div class="grid grid-cols-2 gap-3 max-h-60 overflow-y-auto">
                                { for list.items.iter().enumerate().map(|(index, item)| html! {
                                    <div key={index} class="bg-white/20 px-4 py-2 rounded-xl text-white text-sm font-medium">
                                        {item}
                                    </div>
                                }) }
                            </div>
                        </div>
                    }
                </div>
            }
        }
    };

    let can_remove = rows.len() > 1;
    let custom_tab = html! {
        <div class="space-y-6">
            <div class="bg-white/10 rounded-2xl p-6">
                <h3 class="text-xl font-bold text-white mb-4">{"Create Your Custom List"}</h3>
                <div class="space-y-3 max-h-60 overflow-y-auto">
                    { for rows.iter().enumerate().map(|(index, row)| {
                        let oninput = {
                            let on_row_input = on_row_input.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                on_row_input.emit((index, input.value()));
                            })
                        };
                        let onremove = {
                            let rows = rows.clone();
                            let set_rows = set_rows.clone();
                            Callback::from(move |_: MouseEvent| set_rows.emit(remove_row(&rows, index)))
                        };
                        html! {
                            <div key={index} class="flex gap-3 items-center">
                                <input
                                    type="text"
                                    value={row.clone()}
                                    {oninput}
                                    placeholder={format!("Food item {}...", index + 1)}
                                    class="flex-1 px-4 py-3 rounded-xl bg-white/20 text-white placeholder-white/60 border border-white/30 focus:border-white focus:outline-none focus:ring-2 focus:ring-white/50"
                                />
                                if can_remove {
                                    <button onclick={onremove} class="p-3 text-white hover:text-red-300 transition-colors duration-300">
                                        {"✕"}
                                    </button>
                                }
                            </div>
                        }
                    }) }
                </div>
                <button
                    onclick={add_row}
                    class="mt-4 w-full py-3 px-6 bg-white/20 hover:bg-white/30 text-white rounded-xl font-semibold transition-all duration-300"
                >
                    {"+ Add Another Item"}
                </button>
            </div>

            <div class="bg-white/10 rounded-2xl p-6 space-y-3">
                <h3 class="text-lg font-bold text-white">{"Save This List"}</h3>
                <div class="flex gap-3">
                    <input
                        type="text"
                        value={(*list_name).clone()}
                        oninput={on_name_input}
                        placeholder="List name"
                        class="flex-1 px-4 py-2 rounded-xl bg-white/20 text-white placeholder-white/60 border border-white/30 focus:outline-none"
                    />
                    <button onclick={save_list} class="px-4 py-2 bg-white text-gray-800 rounded-xl font-semibold">
                        {"Save"}
                    </button>
                </div>
                if let Some(message) = (*save_error).clone().or(custom_lists.error.clone()) {
                    <p class="text-sm text-red-200">{message}</p>
                }
                if !custom_lists.lists.is_empty() {
                    <div class="flex flex-wrap gap-2 pt-2">
                        { for custom_lists.lists.iter().map(|list| {
                            let onclick = {
                                let set_rows = set_rows.clone();
                                let items = list.items.clone();
                                Callback::from(move |_: MouseEvent| set_rows.emit(items.clone()))
                            };
                            html! {
                                <button
                                    key={list.id.clone()}
                                    {onclick}
                                    class="px-3 py-1 rounded-full bg-white/20 hover:bg-white/30 text-white text-sm"
                                >
                                    {format!("{} ({})", list.name, list.items.len())}
                                </button>
                            }
                        }) }
                    </div>
                }
            </div>
        </div>
    };

    let switch_tab = |tab: Tab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(tab))
    };

    html! {
        <div class="rounded-3xl p-8 shadow-2xl bg-white/10 backdrop-blur-lg border border-white/20">
            <h2 class="text-3xl font-bold text-white mb-6 text-center">{"👨‍🍳 Choose Your Food Options"}</h2>
            <div class="flex bg-white/20 rounded-2xl p-2 mb-8">
                <button
                    onclick={switch_tab(Tab::Premade)}
                    class={classes!("flex-1", "py-3", "px-6", "rounded-xl", "font-semibold", "transition-all", tab_class(*active_tab == Tab::Premade))}
                >
                    {"Pre-made Lists"}
                </button>
                <button
                    onclick={switch_tab(Tab::Custom)}
                    class={classes!("flex-1", "py-3", "px-6", "rounded-xl", "font-semibold", "transition-all", tab_class(*active_tab == Tab::Custom))}
                >
                    {"Custom List"}
                </button>
            </div>
            {match *active_tab {
                Tab::Premade => premade_tab,
                Tab::Custom => custom_tab,
            }}
        </div>
    }
}
