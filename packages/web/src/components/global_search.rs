//! Global search: substring autocomplete over domains, categories and
//! insights, capped at five suggestions.

use dioxus::events::Key;
use dioxus::prelude::*;

use crate::data;
use crate::routes::Route;

const SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Domain,
    Category,
    Insight,
}

impl SuggestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::Domain => "domain",
            SuggestionKind::Category => "category",
            SuggestionKind::Insight => "insight",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub label: String,
    pub slug: String,
}

impl Suggestion {
    pub fn route(&self) -> Route {
        match self.kind {
            SuggestionKind::Domain => Route::DomainDetail {
                slug: self.slug.clone(),
            },
            SuggestionKind::Category => Route::CategoryDetail {
                slug: self.slug.clone(),
            },
            SuggestionKind::Insight => Route::InsightDetail {
                slug: self.slug.clone(),
            },
        }
    }
}

/// Case-insensitive substring matches across the three datasets, in
/// domain/category/insight order, capped at five.
pub fn suggest(query: &str) -> Vec<Suggestion> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }

    let domains = data::domains().iter().filter(|d| d.name.to_lowercase().contains(&q)).map(|d| {
        Suggestion {
            kind: SuggestionKind::Domain,
            label: d.name.clone(),
            slug: d.slug.clone(),
        }
    });
    let categories = data::categories()
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&q))
        .map(|c| Suggestion {
            kind: SuggestionKind::Category,
            label: c.name.clone(),
            slug: c.slug.clone(),
        });
    let insights = data::insights()
        .iter()
        .filter(|i| i.title.to_lowercase().contains(&q))
        .map(|i| Suggestion {
            kind: SuggestionKind::Insight,
            label: i.title.clone(),
            slug: i.slug.clone(),
        });

    domains
        .chain(categories)
        .chain(insights)
        .take(SUGGESTION_LIMIT)
        .collect()
}

/// Accessible combobox: typed input filters suggestions, arrow keys move
/// the active option, Enter navigates to it.
#[component]
pub fn GlobalSearch() -> Element {
    let mut query = use_signal(String::new);
    let mut active_index = use_signal(|| None::<usize>);
    let navigator = use_navigator();

    let suggestions = use_memo(move || suggest(&query()));

    let keydown_navigator = navigator.clone();
    let handle_keydown = move |e: KeyboardEvent| {
        let count = suggestions.read().len();
        if count == 0 {
            return;
        }
        match e.key() {
            Key::ArrowDown => {
                e.prevent_default();
                let next = active_index().map_or(0, |i| (i + 1).min(count - 1));
                active_index.set(Some(next));
            }
            Key::ArrowUp => {
                e.prevent_default();
                let prev = active_index().map_or(0, |i| i.saturating_sub(1));
                active_index.set(Some(prev));
            }
            Key::Enter => {
                if let Some(index) = active_index() {
                    e.prevent_default();
                    if let Some(suggestion) = suggestions.read().get(index).cloned() {
                        keydown_navigator.push(suggestion.route());
                        query.set(String::new());
                        active_index.set(None);
                    }
                }
            }
            _ => {}
        }
    };

    rsx! {
        div {
            class: "relative",
            label { r#for: "global-search", class: "sr-only", "Search domains, categories, articles" }
            input {
                id: "global-search",
                r#type: "text",
                role: "combobox",
                aria_autocomplete: "list",
                aria_expanded: !suggestions.read().is_empty(),
                placeholder: "Search domains, categories, insights",
                value: "{query}",
                oninput: move |e| {
                    query.set(e.value());
                    active_index.set(None);
                },
                onkeydown: handle_keydown,
                class: "w-full px-4 py-3 border border-gray-300 rounded-xl text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
            }
            if !suggestions.read().is_empty() {
                ul {
                    role: "listbox",
                    class: "absolute z-10 w-full mt-1 bg-white border border-gray-200 rounded-xl shadow-lg max-h-52 overflow-y-auto",
                    for (index, suggestion) in suggestions().into_iter().enumerate() {
                        {
                            let is_active = active_index() == Some(index);
                            let on_select = suggestion.clone();
                            let item_navigator = navigator.clone();
                            rsx! {
                                li {
                                    key: "{suggestion.kind.label()}-{suggestion.slug}",
                                    role: "option",
                                    aria_selected: is_active,
                                    class: if is_active {
                                        "px-4 py-2 bg-gray-100 cursor-pointer"
                                    } else {
                                        "px-4 py-2 hover:bg-gray-50 cursor-pointer"
                                    },
                                    onmousedown: move |_| {
                                        item_navigator.push(on_select.route());
                                        query.set(String::new());
                                        active_index.set(None);
                                    },
                                    strong { class: "text-sm text-gray-900", "{suggestion.label}" }
                                    span { class: "text-xs text-gray-500 ml-1", "({suggestion.kind.label()})" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_yields_nothing() {
        assert!(suggest("").is_empty());
        assert!(suggest("   ").is_empty());
    }

    #[test]
    fn matches_are_case_insensitive() {
        let results = suggest("LUMEN");
        assert!(results.iter().any(|s| s.slug == "lumenpay-com"));
    }

    #[test]
    fn results_are_capped() {
        // A single vowel matches broadly across all three datasets.
        assert!(suggest("a").len() <= SUGGESTION_LIMIT);
    }

    #[test]
    fn category_and_insight_titles_match() {
        let results = suggest("fintech");
        assert!(results
            .iter()
            .any(|s| s.kind == SuggestionKind::Category && s.slug == "fintech"));

        let results = suggest("leasing a domain");
        assert!(results
            .iter()
            .any(|s| s.kind == SuggestionKind::Insight && s.slug == "lease-vs-buy"));
    }

    #[test]
    fn nonsense_matches_nothing() {
        assert!(suggest("zzzzzz").is_empty());
    }
}
