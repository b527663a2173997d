//! Data Table Component
//!
//! Table frame with a search box. Rows are rendered by the page, which
//! filters them against the search signal.

use leptos::*;

#[component]
pub fn DataTable(
    headers: &'static [&'static str],
    search: RwSignal<String>,
    #[prop(default = "Buscar...")]
    placeholder: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow">
            <div class="p-4 border-b">
                <input
                    type="search"
                    class="w-full md:w-80 px-3 py-2 border rounded-lg"
                    placeholder=placeholder
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <table class="w-full text-left">
                <thead class="bg-gray-50 text-gray-600 text-sm">
                    <tr>
                        {headers.iter().map(|h| view! { <th class="px-4 py-3">{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y">
                    {children()}
                </tbody>
            </table>
        </div>
    }
}

/// Case-insensitive match of a row's text against the search box
pub fn matches_search(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_search() {
        assert!(matches_search("", &["Shrek"]));
        assert!(matches_search("  shr ", &["Burro", "Shrek"]));
        assert!(!matches_search("fiona", &["Burro", "Shrek"]));
    }
}
